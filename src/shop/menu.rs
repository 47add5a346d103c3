use super::{MechanicShop, Report};
use crate::core::ShopError;
use crate::db::SqlClient;
use std::io::Write;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddCustomer,
    AddMechanic,
    AddCar,
    InsertServiceRequest,
    CloseServiceRequest,
    ListCustomersWithBillLessThan100,
    ListCustomersWithMoreThan20Cars,
    ListCarsBefore1995With50000Milles,
    ListKCarsWithTheMostServices,
    ListCustomersInDescendingOrderOfTheirTotalBill,
    Exit,
}

impl MenuChoice {
    pub const ALL: [Self; 11] = [
        Self::AddCustomer,
        Self::AddMechanic,
        Self::AddCar,
        Self::InsertServiceRequest,
        Self::CloseServiceRequest,
        Self::ListCustomersWithBillLessThan100,
        Self::ListCustomersWithMoreThan20Cars,
        Self::ListCarsBefore1995With50000Milles,
        Self::ListKCarsWithTheMostServices,
        Self::ListCustomersInDescendingOrderOfTheirTotalBill,
        Self::Exit,
    ];

    #[must_use]
    pub fn from_number(n: i32) -> Option<Self> {
        let idx = usize::try_from(n).ok()?.checked_sub(1)?;
        Self::ALL.get(idx).copied()
    }

    #[must_use]
    pub fn number(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).map_or(0, |i| i + 1)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AddCustomer => "AddCustomer",
            Self::AddMechanic => "AddMechanic",
            Self::AddCar => "AddCar",
            Self::InsertServiceRequest => "InsertServiceRequest",
            Self::CloseServiceRequest => "CloseServiceRequest",
            Self::ListCustomersWithBillLessThan100 => "ListCustomersWithBillLessThan100",
            Self::ListCustomersWithMoreThan20Cars => "ListCustomersWithMoreThan20Cars",
            Self::ListCarsBefore1995With50000Milles => "ListCarsBefore1995With50000Milles",
            Self::ListKCarsWithTheMostServices => "ListKCarsWithTheMostServices",
            Self::ListCustomersInDescendingOrderOfTheirTotalBill => {
                "ListCustomersInDescendingOrderOfTheirTotalBill"
            }
            Self::Exit => "< EXIT",
        }
    }

    /// Printed ahead of a non-validation error
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::AddCustomer => {
                "ERROR: Failed to insert customer data. Make sure the customer information is entered correctly."
            }
            Self::AddMechanic => {
                "ERROR: Failed to insert mechanic data. Make sure the mechanic information is entered correctly."
            }
            Self::AddCar => "ERROR: Failed to add new car.",
            Self::InsertServiceRequest => "ERROR: Failed to create Service Request.",
            Self::CloseServiceRequest => "ERROR: Failed to close Service Request.",
            _ => "ERROR: Query failed.",
        }
    }
}

impl<C: SqlClient, W: Write> MechanicShop<C, W> {
    /// Main loop; returns when the user exits or input ends
    pub async fn run(&mut self) -> Result<(), ShopError> {
        loop {
            self.print_menu()?;
            let number = match self.console.prompt_int("Please make your choice: ") {
                Ok(n) => n,
                Err(ShopError::InputClosed) => break,
                Err(e) => return Err(e),
            };

            let Some(choice) = MenuChoice::from_number(number) else {
                writeln!(self.console, "Unknown choice {number}")?;
                writeln!(self.console, "Returning to main menu...\n")?;
                continue;
            };
            if choice == MenuChoice::Exit {
                break;
            }

            match self.dispatch(choice).await {
                Ok(()) => {}
                Err(ShopError::InputClosed) => break,
                Err(e) => self.report_failure(choice, &e)?,
            }
            writeln!(self.console)?;
            writeln!(self.console, "Returning to main menu...\n")?;
        }
        Ok(())
    }

    pub async fn dispatch(&mut self, choice: MenuChoice) -> Result<(), ShopError> {
        match choice {
            MenuChoice::AddCustomer => self.add_customer().await.map(drop),
            MenuChoice::AddMechanic => self.add_mechanic().await.map(drop),
            MenuChoice::AddCar => self.add_car().await.map(drop),
            MenuChoice::InsertServiceRequest => self.insert_service_request().await.map(drop),
            MenuChoice::CloseServiceRequest => self.close_service_request().await.map(drop),
            MenuChoice::ListCustomersWithBillLessThan100 => {
                self.run_report(Report::ClosedBillsUnder100).await.map(drop)
            }
            MenuChoice::ListCustomersWithMoreThan20Cars => {
                self.run_report(Report::CustomersWithMoreThan20Cars).await.map(drop)
            }
            MenuChoice::ListCarsBefore1995With50000Milles => {
                self.run_report(Report::CarsBefore1995Under50000Miles).await.map(drop)
            }
            MenuChoice::ListKCarsWithTheMostServices => {
                self.list_top_serviced_cars().await.map(drop)
            }
            MenuChoice::ListCustomersInDescendingOrderOfTheirTotalBill => {
                self.run_report(Report::CustomersByTotalBill).await.map(drop)
            }
            MenuChoice::Exit => Ok(()),
        }
    }

    fn print_menu(&mut self) -> Result<(), ShopError> {
        writeln!(self.console, "MAIN MENU")?;
        writeln!(self.console, "---------")?;
        for choice in MenuChoice::ALL {
            writeln!(self.console, "{}. {}", choice.number(), choice.label())?;
        }
        Ok(())
    }

    fn report_failure(&mut self, choice: MenuChoice, error: &ShopError) -> Result<(), ShopError> {
        debug!(choice = choice.label(), error = %error, "handler failed");
        match error {
            ShopError::Validation(msg) => writeln!(self.console, "ERROR: {msg}")?,
            other => {
                writeln!(self.console, "{}", choice.failure_message())?;
                writeln!(self.console, "{other}")?;
            }
        }
        Ok(())
    }
}
