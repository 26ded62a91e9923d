use crate::config::PoolConfig;
use crate::database::rows::row_to_values;
use crate::domain::TabularResult;
use crate::error::DbError;
use crate::query::{BindValue, BuiltQuery};
use anyhow::Context;
use sqlx::pool::PoolConnection;
use sqlx::query::Query;
use sqlx::sqlite::{
    Sqlite, SqliteArguments, SqliteConnectOptions, SqliteConnection, SqlitePoolOptions, SqliteRow,
};
use sqlx::{Connection, Pool};
use std::str::FromStr;

/// The process-wide connection pool. Built once in `main` and handed to the
/// repository; nothing else reaches for it.
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// A malformed url is a configuration error, not a pool failure.
    pub async fn connect(database_url: &str, config: &PoolConfig) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("Invalid DATABASE_URL '{}'", database_url))?
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .idle_timeout(Some(config.idle_timeout))
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to open a connection to {}", database_url))?;

        Ok(Self { pool })
    }

    pub fn from_pool(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    pub async fn migrate(&self) -> anyhow::Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Takes a connection from the pool, waiting up to the acquire timeout.
    /// The connection goes back to the pool when the guard drops, whichever
    /// way the caller exits.
    pub async fn acquire(&self) -> Result<PoolConnection<Sqlite>, DbError> {
        self.pool.acquire().await.map_err(DbError::Acquire)
    }

    pub async fn ping(&self) -> Result<(), DbError> {
        let mut conn = self.acquire().await?;
        conn.ping().await.map_err(DbError::Statement)
    }

    pub async fn fetch_table(&self, query: &BuiltQuery) -> Result<TabularResult, DbError> {
        let mut conn = self.acquire().await?;
        fetch_table_on(&mut conn, query).await
    }

    pub async fn execute(&self, query: &BuiltQuery) -> Result<u64, DbError> {
        let mut conn = self.acquire().await?;
        execute_on(&mut conn, query).await
    }

    /// Stops handing out connections and waits for checked-out ones to return.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }
}

pub(crate) fn prepare(query: &BuiltQuery) -> Query<'_, Sqlite, SqliteArguments<'_>> {
    query
        .binds
        .iter()
        .fold(sqlx::query(&query.sql), |statement, bind| match bind {
            BindValue::Text(val) => statement.bind(val.as_str()),
            BindValue::Integer(val) => statement.bind(*val),
            BindValue::Null => statement.bind(None::<String>),
        })
}

pub(crate) async fn fetch_rows_on(
    conn: &mut SqliteConnection,
    query: &BuiltQuery,
) -> Result<Vec<SqliteRow>, DbError> {
    prepare(query)
        .fetch_all(&mut *conn)
        .await
        .map_err(DbError::Statement)
}

pub(crate) async fn fetch_table_on(
    conn: &mut SqliteConnection,
    query: &BuiltQuery,
) -> Result<TabularResult, DbError> {
    let rows = fetch_rows_on(conn, query).await?;

    let values = rows
        .iter()
        .map(row_to_values)
        .collect::<Result<Vec<_>, _>>()?;

    let table = TabularResult::from_rows(values);
    Ok(match &query.columns {
        Some(names) => table.with_column_names(names.clone()),
        None => table,
    })
}

pub(crate) async fn execute_on(
    conn: &mut SqliteConnection,
    query: &BuiltQuery,
) -> Result<u64, DbError> {
    let result = prepare(query)
        .execute(&mut *conn)
        .await
        .map_err(DbError::Statement)?;
    Ok(result.rows_affected())
}
