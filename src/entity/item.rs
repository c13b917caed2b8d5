//! Inventory items, stored in `item`.

use super::{IdAssignment, Resource};
use crate::sql::{SqlValue, TableDef};
use serde::{Deserialize, Serialize};

/// Inventory entry. Unlike the other resources its id is chosen by the caller.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(default)]
pub struct InventoryItem {
    #[serde(rename = "ID", alias = "id")]
    pub id: i64,
    #[serde(rename = "Name", alias = "name")]
    pub name: String,
    #[serde(rename = "ItemCode", alias = "itemcode", alias = "item_code")]
    pub item_code: String,
    #[serde(rename = "Stock", alias = "stock")]
    pub stock: i32,
    #[serde(rename = "Description", alias = "description")]
    pub description: String,
    #[serde(rename = "Status", alias = "status")]
    pub status: String,
}

impl Resource for InventoryItem {
    const TABLE: TableDef = TableDef {
        name: "item",
        id_column: "id",
        columns: &["name", "item_code", "stock", "description", "status"],
    };
    const PATH: &'static str = "inventory";
    const LABEL: &'static str = "inventory item";
    const ID_ASSIGNMENT: IdAssignment = IdAssignment::Client;

    fn id(&self) -> i64 {
        self.id
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.name.as_str().into(),
            self.item_code.as_str().into(),
            self.stock.into(),
            self.description.as_str().into(),
            self.status.as_str().into(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_caller_supplied_id() {
        let item: InventoryItem = serde_json::from_value(json!({
            "ID": 42,
            "Name": "Mjolnir",
            "ItemCode": "MJ-01",
            "Stock": 1,
            "Description": "Hammer",
            "Status": "available"
        }))
        .unwrap();
        assert_eq!(item.id(), 42);
        assert_eq!(item.values()[2], SqlValue::I32(1));
    }

    #[test]
    fn stock_must_be_an_integer() {
        assert!(serde_json::from_value::<InventoryItem>(json!({"Stock": "many"})).is_err());
    }
}
