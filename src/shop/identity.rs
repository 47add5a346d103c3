//! Resolving which customer a car or service request belongs to.
//!
//! Customers are looked up by last name. One match is confirmed with y/n,
//! several are listed and picked by id, none (or a declined/`x` answer)
//! opens the customer form and selects the new customer.

use super::MechanicShop;
use crate::core::validate;
use crate::core::{ResultSet, ShopError, Value};
use crate::db::SqlClient;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomerSelection {
    pub id: i32,
    /// Found in the table rather than created during this workflow
    pub existing: bool,
}

impl<C: SqlClient, W: Write> MechanicShop<C, W> {
    pub async fn resolve_customer(&mut self) -> Result<CustomerSelection, ShopError> {
        let lname = self.prompt("\nEnter customer Last Name: ")?;
        let matches = self
            .query(&format!(
                "SELECT id, fname, lname FROM Customer WHERE lname = {};",
                Value::text(lname.trim()).to_sql()
            ))
            .await?;

        match matches.len() {
            0 => {
                writeln!(
                    self.console,
                    "Customer does not exist. Fill out customer form below.\n"
                )?;
                self.select_new_customer().await
            }
            1 => self.confirm_single_match(&matches).await,
            _ => self.pick_from_matches(&matches).await,
        }
    }

    async fn confirm_single_match(
        &mut self,
        matches: &ResultSet,
    ) -> Result<CustomerSelection, ShopError> {
        let Some(row) = matches.first() else {
            return self.select_new_customer().await;
        };
        let (id, name) = (row.int(0)?, format!("{} {}", row.text(1), row.text(2)));

        let answer = self.prompt(&format!("Is {name} correct? (y/n): "))?;
        if validate::is_yes(&answer) {
            writeln!(self.console, "Customer {name} with id {id} successfully selected.")?;
            return Ok(CustomerSelection { id, existing: true });
        }

        writeln!(
            self.console,
            "Customer does not exist. Fill out customer form below.\n"
        )?;
        self.select_new_customer().await
    }

    async fn pick_from_matches(
        &mut self,
        matches: &ResultSet,
    ) -> Result<CustomerSelection, ShopError> {
        self.print_result(matches)?;

        loop {
            let answer =
                self.prompt("Enter the customer id from the list above (enter 'x' if not found): ")?;
            if validate::is_skip(&answer) {
                return self.select_new_customer().await;
            }

            let picked = validate::parse_int(&answer).ok().and_then(|id| {
                matches
                    .rows
                    .iter()
                    .find(|row| row.int(0).is_ok_and(|row_id| row_id == id))
            });

            match picked {
                Some(row) => {
                    let id = row.int(0)?;
                    writeln!(
                        self.console,
                        "Customer {} {} with id {id} successfully selected.",
                        row.text(1),
                        row.text(2)
                    )?;
                    return Ok(CustomerSelection { id, existing: true });
                }
                None => writeln!(
                    self.console,
                    "'{}' is not an id from the list above.",
                    answer.trim()
                )?,
            }
        }
    }

    async fn select_new_customer(&mut self) -> Result<CustomerSelection, ShopError> {
        let customer = self.add_customer().await?;
        writeln!(
            self.console,
            "Customer {} with id {} successfully selected.",
            customer.full_name(),
            customer.id
        )?;
        Ok(CustomerSelection {
            id: customer.id,
            existing: false,
        })
    }
}
