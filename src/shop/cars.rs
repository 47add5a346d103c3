use super::MechanicShop;
use crate::core::validate::{self, MAKE_MAX, MODEL_MAX};
use crate::core::{Car, Ownership, ShopError, ShopTable, Value};
use crate::db::SqlClient;
use std::io::Write;

impl<C: SqlClient, W: Write> MechanicShop<C, W> {
    /// Menu 3: resolve the owner, then run the car form
    pub async fn add_car(&mut self) -> Result<Car, ShopError> {
        let owner = self.resolve_customer().await?;
        self.add_car_for(owner.id).await
    }

    /// Car form for a known owner: inserts the Car row and its Owns row
    pub async fn add_car_for(&mut self, customer_id: i32) -> Result<Car, ShopError> {
        let vin = self.prompt("Enter the car's VIN (6 letters followed by 10 integers): ")?;
        let vin = vin.trim().to_string();
        validate::vin(&vin)?;

        let make = self.prompt("Enter make of the car (32 characters max): ")?;
        validate::max_len("Make", &make, MAKE_MAX)?;

        let model = self.prompt("Enter model of the car (32 characters max): ")?;
        validate::max_len("Model", &model, MODEL_MAX)?;

        let raw_year = self.prompt("Enter year of the car (>= 1970): ")?;
        let year = validate::car_year(&raw_year)?;

        let car = Car {
            vin,
            make,
            model,
            year,
        };
        self.insert(&car).await?;
        writeln!(self.console, "\nSuccessfully added new {} {}\n", car.make, car.model)?;

        let ownership = Ownership {
            ownership_id: self.next_id(ShopTable::Owns).await?,
            customer_id,
            car_vin: car.vin.clone(),
        };
        self.insert(&ownership).await?;
        self.print_query(&format!(
            "SELECT * FROM Owns WHERE ownership_id = {};",
            ownership.ownership_id
        ))
        .await?;
        writeln!(self.console)?;

        self.print_query(&format!(
            "SELECT * FROM Car WHERE vin = {};",
            Value::text(car.vin.as_str()).to_sql()
        ))
        .await?;

        Ok(car)
    }
}
