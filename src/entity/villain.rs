//! Villains, stored in `villain`. Same shape as a hero without the skill.

use super::{IdAssignment, Resource};
use crate::sql::{SqlValue, TableDef};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(default)]
pub struct Villain {
    #[serde(rename = "ID", alias = "id")]
    pub id: i64,
    #[serde(rename = "Name", alias = "name")]
    pub name: String,
    #[serde(rename = "Universe", alias = "universe")]
    pub universe: String,
    #[serde(rename = "ImageURL", alias = "imageurl", alias = "image_url")]
    pub image_url: String,
}

impl Resource for Villain {
    const TABLE: TableDef = TableDef {
        name: "villain",
        id_column: "id",
        columns: &["name", "universe", "image_url"],
    };
    const PATH: &'static str = "villain";
    const LABEL: &'static str = "villain";
    const ID_ASSIGNMENT: IdAssignment = IdAssignment::Server;

    fn id(&self) -> i64 {
        self.id
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.name.as_str().into(),
            self.universe.as_str().into(),
            self.image_url.as_str().into(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_id_is_read_but_values_exclude_it() {
        let villain: Villain =
            serde_json::from_str(r#"{"ID": 9, "Name": "Loki", "Universe": "Marvel", "ImageURL": "l.png"}"#).unwrap();
        assert_eq!(villain.id(), 9);
        assert_eq!(
            villain.values(),
            vec![SqlValue::from("Loki"), SqlValue::from("Marvel"), SqlValue::from("l.png")]
        );
    }
}
