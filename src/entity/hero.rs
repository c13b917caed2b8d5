//! Heroes, stored in `heroes` with server-assigned ids.

use super::{IdAssignment, Resource};
use crate::sql::{SqlValue, TableDef};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(default)]
pub struct Hero {
    #[serde(rename = "ID", alias = "id")]
    pub id: i64,
    #[serde(rename = "Name", alias = "name")]
    pub name: String,
    #[serde(rename = "Universe", alias = "universe")]
    pub universe: String,
    #[serde(rename = "Skill", alias = "skill")]
    pub skill: String,
    #[serde(rename = "ImageURL", alias = "imageurl", alias = "image_url")]
    pub image_url: String,
}

impl Resource for Hero {
    const TABLE: TableDef = TableDef {
        name: "heroes",
        id_column: "id",
        columns: &["name", "universe", "skill", "image_url"],
    };
    const PATH: &'static str = "heroes";
    const LABEL: &'static str = "hero";
    const ID_ASSIGNMENT: IdAssignment = IdAssignment::Server;

    fn id(&self) -> i64 {
        self.id
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.name.as_str().into(),
            self.universe.as_str().into(),
            self.skill.as_str().into(),
            self.image_url.as_str().into(),
        ]
    }
}
