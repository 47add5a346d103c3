// Shared helpers for the menu integration tests: an in-memory SQL client
// and a shop wired to scripted input lines.
#![allow(dead_code)]

use chrono::NaiveDate;
use mechanic_shop::core::Row;
use mechanic_shop::{Console, MechanicShop, OutputFormat, ResultSet, ShopError, SqlClient};
use std::collections::VecDeque;

/// Answers queries from canned result sets and records every statement.
///
/// A query gets the result of the first rule whose fragment it contains.
/// Queued results are handed out in order; the last one repeats. Queries no
/// rule matches get an empty result.
#[derive(Debug, Default)]
pub struct ScriptedClient {
    rules: Vec<(String, VecDeque<ResultSet>)>,
    pub queries: Vec<String>,
    pub executed: Vec<String>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, fragment: &str, result: ResultSet) -> Self {
        match self.rules.iter_mut().find(|(f, _)| f == fragment) {
            Some((_, queue)) => queue.push_back(result),
            None => self.rules.push((fragment.to_string(), VecDeque::from([result]))),
        }
        self
    }

    /// `SELECT MAX(key)` answer for one table
    pub fn max_key(self, fragment: &str, max: Option<i32>) -> Self {
        let value = max.map(|m| m.to_string());
        self.on(
            fragment,
            ResultSet::new(vec!["max".to_string()], vec![Row::new(vec![value])]),
        )
    }

    pub fn executed_containing(&self, fragment: &str) -> Vec<&str> {
        self.executed
            .iter()
            .filter(|s| s.contains(fragment))
            .map(String::as_str)
            .collect()
    }
}

impl SqlClient for ScriptedClient {
    async fn query(&mut self, sql: &str) -> Result<ResultSet, ShopError> {
        self.queries.push(sql.to_string());
        let Some((_, queue)) = self.rules.iter_mut().find(|(f, _)| sql.contains(f.as_str())) else {
            return Ok(ResultSet::default());
        };
        let result = if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        };
        Ok(result.unwrap_or_default())
    }

    async fn execute(&mut self, sql: &str) -> Result<u64, ShopError> {
        self.executed.push(sql.to_string());
        Ok(1)
    }
}

pub type TestShop = MechanicShop<ScriptedClient, Vec<u8>>;

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

pub fn shop(client: ScriptedClient, lines: &[&str]) -> TestShop {
    shop_with_format(client, lines, OutputFormat::Tsv)
}

pub fn shop_with_format(client: ScriptedClient, lines: &[&str], format: OutputFormat) -> TestShop {
    MechanicShop::new(
        client,
        Console::scripted(lines.iter().copied(), Vec::new()),
        format,
    )
    .with_date(today())
}

pub fn output(shop: &TestShop) -> String {
    String::from_utf8_lossy(shop.console().output()).into_owned()
}

pub fn rows(columns: &[&str], rows: Vec<Vec<&str>>) -> ResultSet {
    ResultSet::from_texts(columns, rows)
}

pub fn customers(rows_: Vec<Vec<&str>>) -> ResultSet {
    rows(&["id", "fname", "lname"], rows_)
}
