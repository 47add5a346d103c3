use super::MechanicShop;
use crate::core::validate::{self, ADDRESS_MAX, NAME_MAX, PHONE_MAX};
use crate::core::{Customer, Mechanic, ShopError, ShopTable};
use crate::db::SqlClient;
use std::io::Write;

impl<C: SqlClient, W: Write> MechanicShop<C, W> {
    /// Menu 1. Also run inline when a request names an unknown customer.
    pub async fn add_customer(&mut self) -> Result<Customer, ShopError> {
        let id = self.next_id(ShopTable::Customer).await?;

        let fname = self.prompt("Enter customer first name (32 characters max): ")?;
        validate::max_len("First name", &fname, NAME_MAX)?;

        let lname = self.prompt("Enter customer last name (32 characters max): ")?;
        validate::max_len("Last name", &lname, NAME_MAX)?;

        let phone = self.prompt("Enter customer phone number using integers only: ")?;
        validate::max_len("Phone number", &phone, PHONE_MAX)?;

        let address = self.prompt("Enter customer address (256 characters max): ")?;
        validate::max_len("Address", &address, ADDRESS_MAX)?;

        let customer = Customer {
            id,
            fname,
            lname,
            phone,
            address,
        };
        self.insert(&customer).await?;

        writeln!(
            self.console,
            "\nCustomer {} has been added with id {}.\n",
            customer.full_name(),
            customer.id
        )?;
        self.print_query(&format!("SELECT * FROM Customer WHERE id = {};", customer.id))
            .await?;

        Ok(customer)
    }

    /// Menu 2
    pub async fn add_mechanic(&mut self) -> Result<Mechanic, ShopError> {
        let id = self.next_id(ShopTable::Mechanic).await?;

        let fname = self.prompt("Enter mechanic first name (32 characters max): ")?;
        validate::max_len("First name", &fname, NAME_MAX)?;

        let lname = self.prompt("Enter mechanic last name (32 characters max): ")?;
        validate::max_len("Last name", &lname, NAME_MAX)?;

        let raw = self.prompt("Enter mechanic years of experience using integers only: ")?;
        let experience = validate::experience(&raw)?;

        let mechanic = Mechanic {
            id,
            fname,
            lname,
            experience,
        };
        self.insert(&mechanic).await?;

        writeln!(
            self.console,
            "\nMechanic {} {} has been added with id {}.\n",
            mechanic.fname, mechanic.lname, mechanic.id
        )?;
        self.print_query(&format!("SELECT * FROM Mechanic WHERE id = {};", mechanic.id))
            .await?;

        Ok(mechanic)
    }
}
