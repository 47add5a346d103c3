// Module declarations
pub mod error;
pub mod value;
pub mod row;
pub mod result_set;
pub mod table;
pub mod model;
pub mod validate;

// Re-exports for convenience
pub use error::ShopError;
pub use value::Value;
pub use row::Row;
pub use result_set::ResultSet;
pub use table::ShopTable;
pub use model::{Car, ClosedRequest, Customer, Mechanic, Ownership, Record, ServiceRequest};
