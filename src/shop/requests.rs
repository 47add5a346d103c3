use super::MechanicShop;
use crate::core::validate;
use crate::core::{ClosedRequest, ServiceRequest, ShopError, ShopTable, Value};
use crate::db::SqlClient;
use std::io::Write;

const OPEN_REQUESTS: &str =
    "SELECT * FROM Service_Request WHERE rid NOT IN (SELECT rid FROM Closed_Request);";

impl<C: SqlClient, W: Write> MechanicShop<C, W> {
    /// Menu 4
    pub async fn insert_service_request(&mut self) -> Result<ServiceRequest, ShopError> {
        let rid = self.next_id(ShopTable::ServiceRequest).await?;
        let customer = self.resolve_customer().await?;

        writeln!(self.console)?;
        let owned = self
            .query(&format!(
                "SELECT car_vin FROM Owns WHERE customer_id = {};",
                customer.id
            ))
            .await?;
        self.print_result(&owned)?;

        let car_vin = if customer.existing && !owned.is_empty() {
            self.pick_owned_car(customer.id, &owned.column_texts(0).collect::<Vec<_>>())
                .await?
        } else {
            writeln!(self.console, "This customer owns no cars. Let's add one\n")?;
            self.add_car_for(customer.id).await?.vin
        };
        validate::vin(&car_vin)?;

        let raw = self.prompt("Enter odometer value (integer only): ")?;
        let odometer = validate::positive("Odometer", &raw)?;
        let complain = self.prompt("Enter the complaint: ")?;

        let request = ServiceRequest {
            rid,
            customer_id: customer.id,
            car_vin,
            date: self.today(),
            odometer,
            complain,
        };
        self.insert(&request).await?;

        writeln!(self.console, "\nNew Service Request created successfully!\n")?;
        self.print_query(&format!(
            "SELECT * FROM Service_Request WHERE rid = {};",
            request.rid
        ))
        .await?;

        Ok(request)
    }

    async fn pick_owned_car(
        &mut self,
        customer_id: i32,
        owned: &[&str],
    ) -> Result<String, ShopError> {
        loop {
            let answer = self.prompt("Enter your car's vin from the list above (x if not listed): ")?;
            if validate::is_skip(&answer) {
                return Ok(self.add_car_for(customer_id).await?.vin);
            }
            let vin = answer.trim();
            if owned.contains(&vin) {
                return Ok(vin.to_string());
            }
            writeln!(self.console, "VIN '{vin}' is not owned by this customer.")?;
        }
    }

    /// Menu 5. `None` when there was nothing open to close.
    pub async fn close_service_request(&mut self) -> Result<Option<ClosedRequest>, ShopError> {
        let wid = self.next_id(ShopTable::ClosedRequest).await?;
        let open = self.query(OPEN_REQUESTS).await?;
        if open.is_empty() {
            writeln!(self.console, "There are no open service requests.")?;
            return Ok(None);
        }
        self.print_result(&open)?;

        let rid = self.select_open_request().await?;
        let mid = self.select_mechanic().await?;

        let comment = self.prompt("Enter any comments: ")?;
        let raw = self.prompt("Enter bill amount rounded to the nearest dollar: ")?;
        let bill = validate::positive("Bill", &raw)?;

        let closed = ClosedRequest {
            wid,
            rid,
            mid,
            date: self.today(),
            comment,
            bill,
        };
        self.insert(&closed).await?;

        writeln!(self.console, "\nService Request closed successfully!")?;
        self.print_query(&format!(
            "SELECT * FROM Closed_Request WHERE wid = {};",
            closed.wid
        ))
        .await?;

        Ok(Some(closed))
    }

    /// Loops until the user confirms an open request
    async fn select_open_request(&mut self) -> Result<i32, ShopError> {
        let mut message = "Enter rid of the service request from list above: ";
        loop {
            let rid = self.console.prompt_int(message)?;
            let details = self
                .query(&format!(
                    "SELECT C.make, C.model, S.complain FROM Car C, Service_Request S \
                     WHERE C.vin = S.car_vin AND S.rid = {rid} \
                     AND NOT EXISTS (SELECT 1 FROM Closed_Request R WHERE R.rid = {rid});"
                ))
                .await?;

            let Some(row) = details.first() else {
                message = "Service Request is already closed or does not exist. Try another one: ";
                continue;
            };

            let question = format!(
                "Is the vehicle '{} {}' with issue '{}' correct? (Y/N): ",
                row.text(0),
                row.text(1),
                row.text(2)
            );
            if self.confirm(&question)? {
                writeln!(self.console, "Service Request selected successfully.\n")?;
                return Ok(rid);
            }
            message = "Enter another rid: ";
        }
    }

    /// Loops until the user confirms an existing mechanic
    async fn select_mechanic(&mut self) -> Result<i32, ShopError> {
        let mut message = "Enter mechanic ID: ";
        loop {
            let mid = self.console.prompt_int(message)?;
            let found = self
                .query(&format!(
                    "SELECT id, fname, lname FROM Mechanic WHERE id = {};",
                    Value::from(mid).to_sql()
                ))
                .await?;

            let Some(row) = found.first() else {
                message = "ERROR: Invalid ID. Try again: ";
                continue;
            };

            let question = format!("Is '{} {}' correct? (Y/N): ", row.text(1), row.text(2));
            if self.confirm(&question)? {
                writeln!(self.console, "Mechanic selected successfully.\n")?;
                return Ok(mid);
            }
            message = "Enter another ID: ";
        }
    }

    /// Asks `question` until the answer is Y or N
    fn confirm(&mut self, question: &str) -> Result<bool, ShopError> {
        loop {
            let answer = self.prompt(question)?;
            if validate::is_yes(&answer) {
                return Ok(true);
            }
            if validate::is_no(&answer) {
                return Ok(false);
            }
        }
    }
}
