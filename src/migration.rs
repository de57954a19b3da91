//! Database bootstrap: create the target database if missing, then the products table and its indexes.

use crate::error::{AppError, ConfigError};
use crate::model::Category;
use crate::sql::PRODUCT_TABLE;
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// DDL for the products table. Idempotent (IF NOT EXISTS).
pub fn products_table_ddl() -> String {
    let categories: Vec<String> = Category::ALL
        .iter()
        .map(|c| format!("'{}'", c.as_str()))
        .collect();
    format!(
        r#"CREATE TABLE IF NOT EXISTS {table} (
  id SERIAL PRIMARY KEY,
  name VARCHAR(100) NOT NULL CHECK (name <> ''),
  description VARCHAR(250) NOT NULL CHECK (description <> ''),
  price NUMERIC(10, 2) NOT NULL CHECK (price > 0),
  available BOOLEAN NOT NULL DEFAULT TRUE,
  category TEXT NOT NULL DEFAULT '{default}' CHECK (category IN ({categories})),
  created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
  updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)"#,
        table = PRODUCT_TABLE,
        default = Category::default().as_str(),
        categories = categories.join(", ")
    )
}

/// Create the products table and the indexes used by list filters.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(&products_table_ddl()).execute(pool).await?;
    for column in ["category", "available"] {
        let sql = format!(
            "CREATE INDEX IF NOT EXISTS {} ON {} ({})",
            quote_ident(&format!("idx_{}_{}", PRODUCT_TABLE, column)),
            PRODUCT_TABLE,
            column
        );
        sqlx::query(&sql).execute(pool).await?;
    }
    tracing::info!(table = PRODUCT_TABLE, "migrations applied");
    Ok(())
}

/// Connect to the server's `postgres` database and create the database named in `database_url` if absent.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url).map_err(|_| {
        ConfigError::Invalid {
            key: "DATABASE_URL",
            value: database_url.to_string(),
        }
    })?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
        tracing::info!(database = %db_name, "database created");
    }
    Ok(())
}

/// Split `scheme://user@host:port/db?params` into an admin URL (same server, `postgres` db) and the db name.
fn parse_db_name_from_url(url: &str) -> Result<(String, String), ConfigError> {
    let invalid = || ConfigError::Invalid {
        key: "DATABASE_URL",
        value: url.to_string(),
    };
    let scheme_end = url.find("://").ok_or_else(invalid)? + 3;
    let path_start = url[scheme_end..]
        .find('/')
        .map(|i| scheme_end + i + 1)
        .ok_or_else(invalid)?;
    let (base, path_and_query) = url.split_at(path_start);
    let mut parts = path_and_query.splitn(2, '?');
    let db_name = parts.next().unwrap_or("").trim().to_string();
    let admin_url = match parts.next() {
        Some(query) => format!("{}postgres?{}", base, query),
        None => format!("{}postgres", base),
    };
    Ok((admin_url, db_name))
}
