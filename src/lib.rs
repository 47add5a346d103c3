// Mechanic shop - menu-driven PostgreSQL client
// Customers, mechanics, cars, ownership and service requests

// Clippy configuration - allow non-critical warnings
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::future_not_send)]
#![allow(clippy::multiple_crate_versions)]

// Records, result sets, field validation, errors
pub mod core;

// Database client (sqlx over a single PostgreSQL connection)
pub mod db;

// Prompting and line input
pub mod console;

// Result set rendering (tab-separated or bordered table)
pub mod output;

// Configuration layering (defaults, file, env, CLI flags)
pub mod config;

// tracing subscriber setup
pub mod logging;

// Shipped schema and SQL script splitting
pub mod schema;

// Menu handlers
pub mod shop;

// Re-export commonly used types for convenience
pub use crate::core::{ResultSet, Row, ShopError, ShopTable, Value};
pub use crate::db::{PgClient, SqlClient};
pub use crate::console::{Console, EditorInput, LineSource, PlainInput};
pub use crate::output::OutputFormat;
pub use crate::config::{ConnectionArgs, ShopConfig};
pub use crate::shop::{MechanicShop, MenuChoice};
