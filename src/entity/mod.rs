//! Entity records and the `Resource` trait that ties each one to its table and route.

mod crime_event;
mod hero;
mod item;
mod villain;

pub use crime_event::CrimeEvent;
pub use hero::Hero;
pub use item::InventoryItem;
pub use villain::Villain;

use crate::sql::{SqlValue, TableDef};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use sqlx::postgres::PgRow;
use sqlx::FromRow;

/// Who picks the id of a new row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdAssignment {
    /// Database sequence; any id in the request body is ignored.
    Server,
    /// Taken from the request body's `ID`.
    Client,
}

/// A flat record exposed as one CRUD route group.
pub trait Resource:
    Serialize + DeserializeOwned + for<'r> FromRow<'r, PgRow> + Send + Sync + Unpin + 'static
{
    const TABLE: TableDef;
    /// Route segment under `/avengers`.
    const PATH: &'static str;
    /// Human-readable name used in error messages.
    const LABEL: &'static str;
    const ID_ASSIGNMENT: IdAssignment;

    fn id(&self) -> i64;

    /// Values of `TABLE.columns`, same order.
    fn values(&self) -> Vec<SqlValue>;
}

/// Decode a record, matching top-level keys without regard to case.
///
/// Keys are folded to lowercase before decoding, so every field carries a lowercase alias.
/// When two keys fold to the same name the later one wins.
pub fn decode_record<E: Resource>(body: &[u8]) -> Result<E, serde_json::Error> {
    let value = match serde_json::from_slice::<Value>(body)? {
        Value::Object(fields) => Value::Object(
            fields
                .into_iter()
                .map(|(key, value)| (key.to_lowercase(), value))
                .collect::<Map<String, Value>>(),
        ),
        other => other,
    };
    serde_json::from_value(value)
}
