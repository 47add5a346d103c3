/// The six tables of the shop schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShopTable {
    Customer,
    Mechanic,
    Car,
    Owns,
    ServiceRequest,
    ClosedRequest,
}

impl ShopTable {
    pub const ALL: [Self; 6] = [
        Self::Customer,
        Self::Mechanic,
        Self::Car,
        Self::Owns,
        Self::ServiceRequest,
        Self::ClosedRequest,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Customer => "Customer",
            Self::Mechanic => "Mechanic",
            Self::Car => "Car",
            Self::Owns => "Owns",
            Self::ServiceRequest => "Service_Request",
            Self::ClosedRequest => "Closed_Request",
        }
    }

    /// Primary key column
    #[must_use]
    pub const fn key_column(self) -> &'static str {
        match self {
            Self::Customer | Self::Mechanic => "id",
            Self::Car => "vin",
            Self::Owns => "ownership_id",
            Self::ServiceRequest => "rid",
            Self::ClosedRequest => "wid",
        }
    }

    #[must_use]
    pub fn max_key_query(self) -> String {
        format!("SELECT MAX({}) FROM {};", self.key_column(), self.name())
    }
}

impl std::fmt::Display for ShopTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
