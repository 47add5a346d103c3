/// Schema DDL shipped with the client, applied by `shop_initdb`

use crate::core::ShopTable;

pub const CREATE_TABLES: &str = include_str!("../sql/create_tables.sql");
pub const DROP_TABLES: &str = include_str!("../sql/drop_tables.sql");

/// Split SQL input into individual statements
///
/// Semicolons inside single-quoted literals do not end a statement; a doubled
/// quote (`''`) toggles twice and so stays inside the literal. Comment-only
/// lines outside a literal are skipped.
#[must_use]
pub fn split_sql_statements(input: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current_statement = String::new();
    let mut in_string = false;

    for line in input.lines() {
        if !in_string && line.trim_start().starts_with("--") {
            continue;
        }

        for ch in line.chars() {
            match ch {
                '\'' => {
                    in_string = !in_string;
                    current_statement.push(ch);
                }
                ';' if !in_string => {
                    current_statement.push(ch);
                    let statement = current_statement.trim();
                    if statement != ";" {
                        statements.push(statement.to_string());
                    }
                    current_statement.clear();
                }
                _ => current_statement.push(ch),
            }
        }

        // Keep line structure inside multi-line statements
        if !current_statement.is_empty() {
            current_statement.push('\n');
        }
    }

    if !current_statement.trim().is_empty() {
        statements.push(current_statement.trim().to_string());
    }

    statements
}

/// Tables named by `CREATE TABLE` statements, in order
#[must_use]
pub fn created_tables(statements: &[String]) -> Vec<String> {
    statements
        .iter()
        .filter_map(|s| {
            let upper = s.to_ascii_uppercase();
            let rest = upper.strip_prefix("CREATE TABLE")?;
            let offset = s.len() - rest.len();
            let name = s[offset..]
                .trim_start()
                .split(|c: char| c.is_whitespace() || c == '(')
                .next()?;
            Some(name.to_string())
        })
        .collect()
}

/// Whether the shipped schema defines every table the menu uses
#[must_use]
pub fn covers_shop_tables(statements: &[String]) -> bool {
    let created: Vec<String> = created_tables(statements)
        .into_iter()
        .map(|t| t.to_ascii_lowercase())
        .collect();
    ShopTable::ALL
        .iter()
        .all(|t| created.contains(&t.name().to_ascii_lowercase()))
}
