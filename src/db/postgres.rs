use crate::core::{ResultSet, Row as ShopRow, ShopError};
use super::SqlClient;
use sqlx::postgres::{PgConnectOptions, PgConnection, PgRow};
use sqlx::{Column, Connection, Row};
use tracing::{debug, info};

/// Where and as whom to connect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
}

impl ConnectionSettings {
    /// Connection URL without the password, safe to print
    #[must_use]
    pub fn display_url(&self) -> String {
        format!(
            "postgres://{}@{}:{}/{}",
            self.user, self.host, self.port, self.database
        )
    }

    /// Printed before connecting, banner and URL on one line
    #[must_use]
    pub fn banner(&self) -> String {
        format!("Connecting to database...Connection URL: {}\n", self.display_url())
    }

    fn connect_options(&self) -> PgConnectOptions {
        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.database);
        if self.password.is_empty() {
            options
        } else {
            options.password(&self.password)
        }
    }
}

/// A single connection; the menu never needs more than one
pub struct PgClient {
    conn: PgConnection,
}

impl PgClient {
    pub async fn connect(settings: &ConnectionSettings) -> Result<Self, ShopError> {
        info!(url = %settings.display_url(), "connecting");
        let conn = PgConnection::connect_with(&settings.connect_options()).await?;
        info!("connected");
        Ok(Self { conn })
    }

    pub async fn close(self) -> Result<(), ShopError> {
        self.conn.close().await?;
        Ok(())
    }
}

impl SqlClient for PgClient {
    async fn query(&mut self, sql: &str) -> Result<ResultSet, ShopError> {
        debug!(sql, "query");
        // Simple query protocol: every value comes back in text format
        let rows = sqlx::raw_sql(sql).fetch_all(&mut self.conn).await?;
        rows_to_result_set(&rows)
    }

    async fn execute(&mut self, sql: &str) -> Result<u64, ShopError> {
        debug!(sql, "execute");
        let done = sqlx::raw_sql(sql).execute(&mut self.conn).await?;
        Ok(done.rows_affected())
    }
}

fn rows_to_result_set(rows: &[PgRow]) -> Result<ResultSet, ShopError> {
    let columns = rows
        .first()
        .map(|row| row.columns().iter().map(|c| c.name().to_string()).collect())
        .unwrap_or_default();

    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        let mut values = Vec::with_capacity(row.len());
        for idx in 0..row.len() {
            // Text-format values decode as String whatever the column type
            values.push(row.try_get_unchecked::<Option<String>, _>(idx)?);
        }
        out.push(ShopRow::new(values));
    }

    Ok(ResultSet::new(columns, out))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> ConnectionSettings {
        ConnectionSettings {
            host: "db.local".to_string(),
            port: 5433,
            database: "shop".to_string(),
            user: "clerk".to_string(),
            password: "hunter2".to_string(),
        }
    }

    #[test]
    fn test_banner_keeps_url_on_connecting_line() {
        let banner = settings().banner();
        assert_eq!(
            banner,
            "Connecting to database...Connection URL: postgres://clerk@db.local:5433/shop\n"
        );
        assert!(!banner.contains("hunter2"));
    }
}
