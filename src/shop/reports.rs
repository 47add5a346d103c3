use super::MechanicShop;
use crate::core::{ShopError, validate};
use crate::db::SqlClient;
use std::io::Write;

/// The listing queries behind menu entries 6 to 10
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    ClosedBillsUnder100,
    CustomersWithMoreThan20Cars,
    CarsBefore1995Under50000Miles,
    /// The `k` cars with the most open service requests
    TopServicedCars(u32),
    CustomersByTotalBill,
}

impl Report {
    #[must_use]
    pub fn sql(self) -> String {
        match self {
            Self::ClosedBillsUnder100 => {
                "SELECT R.date, R.comment, R.bill FROM Closed_Request R WHERE R.bill < 100;"
                    .to_string()
            }
            Self::CustomersWithMoreThan20Cars => "SELECT C.fname, C.lname, COUNT(O.car_vin) AS number_of_cars \
                 FROM Customer C, Owns O WHERE O.customer_id = C.id \
                 GROUP BY C.id HAVING COUNT(O.car_vin) > 20;"
                .to_string(),
            Self::CarsBefore1995Under50000Miles => "SELECT C.make, C.model, C.year \
                 FROM Car C, Service_Request S \
                 WHERE C.vin = S.car_vin AND S.odometer < 50000 AND C.year < 1995;"
                .to_string(),
            Self::TopServicedCars(k) => format!(
                "SELECT C.vin, C.make, C.model, COUNT(S.rid) AS number_of_requests \
                 FROM Car C, Service_Request S WHERE C.vin = S.car_vin \
                 AND S.rid NOT IN (SELECT R.rid FROM Closed_Request R) \
                 GROUP BY C.vin ORDER BY number_of_requests DESC LIMIT {k};"
            ),
            Self::CustomersByTotalBill => "SELECT C.id, C.fname, C.lname, SUM(R.bill) AS total_bill \
                 FROM Customer C, Closed_Request R, Service_Request S \
                 WHERE C.id = S.customer_id AND R.rid = S.rid \
                 GROUP BY C.id ORDER BY total_bill DESC;"
                .to_string(),
        }
    }
}

impl<C: SqlClient, W: Write> MechanicShop<C, W> {
    /// Prints a report followed by its row count, returns the count
    pub async fn run_report(&mut self, report: Report) -> Result<usize, ShopError> {
        let rows = self.print_query(&report.sql()).await?;
        writeln!(self.console, "total row(s): {rows}")?;
        Ok(rows)
    }

    /// Menu 9: asks for `k` first
    pub async fn list_top_serviced_cars(&mut self) -> Result<usize, ShopError> {
        let raw = self.prompt("\tEnter number of cars to list (k > 0): ")?;
        let k = validate::positive("k", &raw)?;
        self.run_report(Report::TopServicedCars(k.unsigned_abs())).await
    }
}
