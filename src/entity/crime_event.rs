//! Crime events linking a hero to a villain at a point in time.

use super::{IdAssignment, Resource};
use crate::sql::{SqlValue, TableDef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded clash. `hero_id` and `villain_id` are not checked against their tables.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(default)]
pub struct CrimeEvent {
    #[serde(rename = "ID", alias = "id")]
    pub id: i64,
    #[serde(rename = "HeroID", alias = "heroid", alias = "hero_id")]
    pub hero_id: i64,
    #[serde(rename = "VillainID", alias = "villainid", alias = "villain_id")]
    pub villain_id: i64,
    #[serde(rename = "Description", alias = "description")]
    pub description: String,
    #[serde(rename = "DateTime", alias = "datetime", alias = "date_time")]
    pub date_time: DateTime<Utc>,
}

impl Resource for CrimeEvent {
    const TABLE: TableDef = TableDef {
        name: "crimeevent",
        id_column: "id",
        columns: &["hero_id", "villain_id", "description", "date_time"],
    };
    const PATH: &'static str = "crimeevent";
    const LABEL: &'static str = "crime event";
    const ID_ASSIGNMENT: IdAssignment = IdAssignment::Server;

    fn id(&self) -> i64 {
        self.id
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.hero_id.into(),
            self.villain_id.into(),
            self.description.as_str().into(),
            self.date_time.into(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn timestamp_round_trips_as_rfc3339() {
        let event: CrimeEvent = serde_json::from_value(json!({
            "HeroID": 1,
            "VillainID": 2,
            "Description": "Battle of New York",
            "DateTime": "2012-05-04T12:00:00Z"
        }))
        .unwrap();
        assert_eq!(event.date_time, Utc.with_ymd_and_hms(2012, 5, 4, 12, 0, 0).unwrap());
        assert_eq!(serde_json::to_value(&event).unwrap()["DateTime"], "2012-05-04T12:00:00Z");
    }

    #[test]
    fn missing_timestamp_defaults_to_epoch() {
        let event: CrimeEvent = serde_json::from_value(json!({"Description": "?"})).unwrap();
        assert_eq!(event.date_time, Utc.timestamp_opt(0, 0).unwrap());
        assert_eq!(event.hero_id, 0);
    }

    #[test]
    fn malformed_timestamp_is_rejected() {
        let result = serde_json::from_value::<CrimeEvent>(json!({"DateTime": "yesterday"}));
        assert!(result.is_err());
    }
}
