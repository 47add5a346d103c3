use chrono::NaiveDate;
use super::table::ShopTable;
use super::value::{values_list, Value};

/// A row about to be inserted into one of the shop tables
pub trait Record {
    const TABLE: ShopTable;

    /// Values in table column order
    fn values(&self) -> Vec<Value>;

    fn insert_sql(&self) -> String {
        format!("INSERT INTO {} VALUES {};", Self::TABLE, values_list(&self.values()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: i32,
    pub fname: String,
    pub lname: String,
    pub phone: String,
    pub address: String,
}

impl Customer {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.fname, self.lname)
    }
}

impl Record for Customer {
    const TABLE: ShopTable = ShopTable::Customer;

    fn values(&self) -> Vec<Value> {
        vec![
            self.id.into(),
            self.fname.as_str().into(),
            self.lname.as_str().into(),
            self.phone.as_str().into(),
            self.address.as_str().into(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mechanic {
    pub id: i32,
    pub fname: String,
    pub lname: String,
    pub experience: i32,
}

impl Record for Mechanic {
    const TABLE: ShopTable = ShopTable::Mechanic;

    fn values(&self) -> Vec<Value> {
        vec![
            self.id.into(),
            self.fname.as_str().into(),
            self.lname.as_str().into(),
            self.experience.into(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    pub vin: String,
    pub make: String,
    pub model: String,
    pub year: i32,
}

impl Record for Car {
    const TABLE: ShopTable = ShopTable::Car;

    fn values(&self) -> Vec<Value> {
        vec![
            self.vin.as_str().into(),
            self.make.as_str().into(),
            self.model.as_str().into(),
            self.year.into(),
        ]
    }
}

/// Links a customer to a car they own
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ownership {
    pub ownership_id: i32,
    pub customer_id: i32,
    pub car_vin: String,
}

impl Record for Ownership {
    const TABLE: ShopTable = ShopTable::Owns;

    fn values(&self) -> Vec<Value> {
        vec![
            self.ownership_id.into(),
            self.customer_id.into(),
            self.car_vin.as_str().into(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRequest {
    pub rid: i32,
    pub customer_id: i32,
    pub car_vin: String,
    pub date: NaiveDate,
    pub odometer: i32,
    pub complain: String,
}

impl Record for ServiceRequest {
    const TABLE: ShopTable = ShopTable::ServiceRequest;

    fn values(&self) -> Vec<Value> {
        vec![
            self.rid.into(),
            self.customer_id.into(),
            self.car_vin.as_str().into(),
            self.date.into(),
            self.odometer.into(),
            self.complain.as_str().into(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosedRequest {
    pub wid: i32,
    pub rid: i32,
    pub mid: i32,
    pub date: NaiveDate,
    pub comment: String,
    pub bill: i32,
}

impl Record for ClosedRequest {
    const TABLE: ShopTable = ShopTable::ClosedRequest;

    fn values(&self) -> Vec<Value> {
        vec![
            self.wid.into(),
            self.rid.into(),
            self.mid.into(),
            self.date.into(),
            self.comment.as_str().into(),
            self.bill.into(),
        ]
    }
}
