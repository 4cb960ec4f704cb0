use tokio_postgres::Client;

use super::error::{SetupError, SetupResult};
use crate::constants::{
    SEED_COUNT_SQL, SEED_CREATE_SQL, SEED_ROWS, SEED_SAMPLE_SQL, SEED_TABLE, SEED_TABLE_EXISTS_SQL,
};
use crate::pool::DsqlPool;

/// A row shown after seeding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleUser {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub department: Option<String>,
}

/// What [`ensure_seed_table`] found and did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupReport {
    pub created: bool,
    /// Rows actually written by the seed insert.
    pub inserted: u64,
    pub row_count: i64,
    pub sample: Vec<SampleUser>,
}

impl SetupReport {
    /// `true` when the table already held data and nothing was written.
    pub fn was_ready(&self) -> bool {
        !self.created && self.inserted == 0
    }
}

/// Quotes a string as a SQL literal.
pub fn sql_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Builds the idempotent multi-row insert for the seed data.
pub fn seed_insert_sql() -> String {
    let values = SEED_ROWS
        .iter()
        .map(|(id, name, email, age, department, salary, hire_date)| {
            format!(
                "({}, {}, {}, {}, {}, {}, {}, true)",
                id,
                sql_literal(name),
                sql_literal(email),
                age,
                sql_literal(department),
                salary,
                sql_literal(hire_date),
            )
        })
        .collect::<Vec<_>>()
        .join(",\n");

    format!(
        "INSERT INTO {SEED_TABLE} (id, name, email, age, department, salary, hire_date, is_active) VALUES\n{values}\nON CONFLICT (email) DO NOTHING"
    )
}

/// Creates and fills the `users1` table used by the simple workload.
///
/// An existing table with rows is left untouched. Each statement runs in its
/// own implicit transaction, since DSQL does not mix DDL and DML in one.
pub async fn ensure_seed_table(pool: &DsqlPool) -> SetupResult<SetupReport> {
    let conn = pool.get().await?;

    let exists: bool = query_scalar(&conn, SEED_TABLE_EXISTS_SQL, "check for seed table").await?;
    let mut created = false;
    let mut inserted = 0;

    let existing_rows = if exists {
        let count: i64 = query_scalar(&conn, SEED_COUNT_SQL, "count seed rows").await?;
        tracing::info!(table = SEED_TABLE, rows = count, "seed table already exists");
        count
    } else {
        tracing::info!(table = SEED_TABLE, "creating seed table");
        conn.batch_execute(SEED_CREATE_SQL)
            .await
            .map_err(|e| SetupError::Statement {
                step: "create seed table",
                source: e,
            })?;
        created = true;
        0
    };

    if existing_rows == 0 {
        tracing::info!(table = SEED_TABLE, "inserting seed rows");
        inserted = conn
            .execute(seed_insert_sql().as_str(), &[])
            .await
            .map_err(|e| SetupError::Statement {
                step: "insert seed rows",
                source: e,
            })?;
    }

    let row_count: i64 = if inserted > 0 {
        query_scalar(&conn, SEED_COUNT_SQL, "count seed rows").await?
    } else {
        existing_rows
    };

    let sample = conn
        .query(SEED_SAMPLE_SQL, &[])
        .await
        .map_err(|e| SetupError::Statement {
            step: "read sample rows",
            source: e,
        })?
        .iter()
        .map(|row| -> Result<SampleUser, tokio_postgres::Error> {
            Ok(SampleUser {
                id: row.try_get(0)?,
                name: row.try_get(1)?,
                email: row.try_get(2)?,
                department: row.try_get(3)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| SetupError::Statement {
            step: "decode sample rows",
            source: e,
        })?;

    tracing::info!(table = SEED_TABLE, rows = row_count, created, inserted, "seed table ready");
    Ok(SetupReport {
        created,
        inserted,
        row_count,
        sample,
    })
}

async fn query_scalar<T>(conn: &Client, sql: &str, step: &'static str) -> SetupResult<T>
where
    T: for<'a> tokio_postgres::types::FromSql<'a>,
{
    conn.query_one(sql, &[])
        .await
        .and_then(|row| row.try_get(0))
        .map_err(|e| SetupError::Statement { step, source: e })
}
