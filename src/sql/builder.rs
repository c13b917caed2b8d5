//! Builds parameterized SELECT, INSERT, UPDATE, DELETE for a fixed table definition.

/// Static description of a resource table. Identifiers come from code, never from requests.
#[derive(Clone, Copy, Debug)]
pub struct TableDef {
    pub name: &'static str,
    pub id_column: &'static str,
    /// Every column except the id, in the order a resource yields its values.
    pub columns: &'static [&'static str],
}

/// Quote identifier for PostgreSQL.
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// `"id", "col_a", "col_b"`: the full row, id first.
fn select_column_list(table: &TableDef) -> String {
    std::iter::once(table.id_column)
        .chain(table.columns.iter().copied())
        .map(quoted)
        .collect::<Vec<_>>()
        .join(", ")
}

fn placeholders(start: usize, count: usize) -> String {
    (start..start + count)
        .map(|n| format!("${}", n))
        .collect::<Vec<_>>()
        .join(", ")
}

/// SELECT every row ordered by id.
pub fn select_all(table: &TableDef) -> String {
    format!(
        "SELECT {} FROM {} ORDER BY {}",
        select_column_list(table),
        quoted(table.name),
        quoted(table.id_column)
    )
}

/// SELECT by id. Caller binds the id as `$1`.
pub fn select_by_id(table: &TableDef) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = $1",
        select_column_list(table),
        quoted(table.name),
        quoted(table.id_column)
    )
}

/// SELECT by id holding a row lock until the enclosing transaction ends.
pub fn select_by_id_for_update(table: &TableDef) -> String {
    format!("{} FOR UPDATE", select_by_id(table))
}

/// INSERT returning the stored row.
///
/// With `include_id` the id is bound first (`$1`) followed by the columns;
/// otherwise the database assigns it and only the columns are bound.
pub fn insert(table: &TableDef, include_id: bool) -> String {
    let mut cols: Vec<&str> = Vec::with_capacity(table.columns.len() + 1);
    if include_id {
        cols.push(table.id_column);
    }
    cols.extend(table.columns.iter().copied());
    let col_list = cols.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(table.name),
        col_list,
        placeholders(1, cols.len()),
        select_column_list(table)
    )
}

/// Full-column UPDATE returning the stored row. Columns bind as `$1..$n`, the id as `$n+1`.
pub fn update(table: &TableDef) -> String {
    let set_clause = table
        .columns
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{} = ${}", quoted(c), i + 1))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "UPDATE {} SET {} WHERE {} = ${} RETURNING {}",
        quoted(table.name),
        set_clause,
        quoted(table.id_column),
        table.columns.len() + 1,
        select_column_list(table)
    )
}

/// DELETE by id. Caller binds the id as `$1`.
pub fn delete(table: &TableDef) -> String {
    format!(
        "DELETE FROM {} WHERE {} = $1",
        quoted(table.name),
        quoted(table.id_column)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const VILLAINS: TableDef = TableDef {
        name: "villain",
        id_column: "id",
        columns: &["name", "universe", "image_url"],
    };

    #[test]
    fn select_all_orders_by_id() {
        assert_eq!(
            select_all(&VILLAINS),
            r#"SELECT "id", "name", "universe", "image_url" FROM "villain" ORDER BY "id""#
        );
    }

    #[test]
    fn select_by_id_binds_first_param() {
        assert_eq!(
            select_by_id(&VILLAINS),
            r#"SELECT "id", "name", "universe", "image_url" FROM "villain" WHERE "id" = $1"#
        );
        assert!(select_by_id_for_update(&VILLAINS).ends_with(r#"WHERE "id" = $1 FOR UPDATE"#));
    }

    #[test]
    fn insert_without_id_lets_database_assign() {
        assert_eq!(
            insert(&VILLAINS, false),
            r#"INSERT INTO "villain" ("name", "universe", "image_url") VALUES ($1, $2, $3) RETURNING "id", "name", "universe", "image_url""#
        );
    }

    #[test]
    fn insert_with_id_binds_id_first() {
        assert_eq!(
            insert(&VILLAINS, true),
            r#"INSERT INTO "villain" ("id", "name", "universe", "image_url") VALUES ($1, $2, $3, $4) RETURNING "id", "name", "universe", "image_url""#
        );
    }

    #[test]
    fn update_sets_every_column_and_binds_id_last() {
        assert_eq!(
            update(&VILLAINS),
            r#"UPDATE "villain" SET "name" = $1, "universe" = $2, "image_url" = $3 WHERE "id" = $4 RETURNING "id", "name", "universe", "image_url""#
        );
    }

    #[test]
    fn delete_by_id() {
        assert_eq!(delete(&VILLAINS), r#"DELETE FROM "villain" WHERE "id" = $1"#);
    }

    #[test]
    fn identifiers_are_quoted() {
        assert_eq!(quoted(r#"odd"name"#), r#""odd""name""#);
    }
}
