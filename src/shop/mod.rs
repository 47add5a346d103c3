/// Menu handlers
///
/// Every handler prompts through the console, builds SQL with the record
/// types in `core::model`, runs it on the client and prints what came back.
///
/// Structure:
/// - menu: choices, dispatch and the main loop
/// - people: add customer / add mechanic
/// - identity: picking (or creating) the customer a car or request belongs to
/// - cars: the car form and ownership row
/// - requests: opening and closing service requests
/// - reports: the five listing queries

pub mod menu;
pub mod people;
pub mod identity;
pub mod cars;
pub mod requests;
pub mod reports;

use crate::console::Console;
use crate::core::{Record, ResultSet, ShopError, ShopTable};
use crate::db::{self, SqlClient};
use crate::output::{self, OutputFormat};
use chrono::{Local, NaiveDate};
use std::io::Write;

pub use identity::CustomerSelection;
pub use menu::MenuChoice;
pub use reports::Report;

pub struct MechanicShop<C, W> {
    client: C,
    console: Console<W>,
    format: OutputFormat,
    today: Option<NaiveDate>,
}

impl<C: SqlClient, W: Write> MechanicShop<C, W> {
    pub const fn new(client: C, console: Console<W>, format: OutputFormat) -> Self {
        Self {
            client,
            console,
            format,
            today: None,
        }
    }

    /// Pins the date stamped on new and closed requests
    #[must_use]
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.today = Some(date);
        self
    }

    pub const fn client(&self) -> &C {
        &self.client
    }

    pub const fn console(&self) -> &Console<W> {
        &self.console
    }

    pub fn into_parts(self) -> (C, Console<W>) {
        (self.client, self.console)
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    async fn query(&mut self, sql: &str) -> Result<ResultSet, ShopError> {
        self.client.query(sql).await
    }

    async fn next_id(&mut self, table: ShopTable) -> Result<i32, ShopError> {
        db::next_id(&mut self.client, table).await
    }

    async fn insert<R: Record>(&mut self, record: &R) -> Result<(), ShopError> {
        self.client.execute(&record.insert_sql()).await?;
        Ok(())
    }

    /// Prints a result set in the configured format, returns its row count
    fn print_result(&mut self, result: &ResultSet) -> Result<usize, ShopError> {
        let rendered = output::render(result, self.format);
        self.console.write_all(rendered.as_bytes())?;
        Ok(result.len())
    }

    /// Runs `sql` and prints the rows
    async fn print_query(&mut self, sql: &str) -> Result<usize, ShopError> {
        let result = self.query(sql).await?;
        self.print_result(&result)
    }

    fn prompt(&mut self, message: &str) -> Result<String, ShopError> {
        self.console.prompt(message)
    }
}
