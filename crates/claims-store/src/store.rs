//! SQLite record store.
//!
//! Valid records are upserted by patient id, so a later record with the
//! same id replaces the earlier one.

use std::path::Path;

use claims_model::Record;
use rusqlite::Connection;
use tracing::{debug, info};

use crate::error::{Result, StoreError};

const CREATE_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS patient_records (
        patient_id TEXT PRIMARY KEY,
        health_card_number TEXT,
        version_code TEXT,
        date_of_birth TEXT,
        service_date TEXT
    )";

const UPSERT: &str = "
    INSERT OR REPLACE INTO patient_records
        (patient_id, health_card_number, version_code, date_of_birth, service_date)
    VALUES (?1, ?2, ?3, ?4, ?5)";

const SELECT_ALL: &str = "
    SELECT patient_id, health_card_number, version_code, date_of_birth, service_date
    FROM patient_records
    ORDER BY patient_id";

/// Relational store for valid records.
pub struct RecordStore {
    conn: Connection,
}

impl RecordStore {
    /// Open (or create) a database file and ensure the table exists.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        conn.execute_batch(CREATE_TABLE)
            .map_err(|source| StoreError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(path = %path.display(), "opened record store");
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(StoreError::sql("open"))?;
        conn.execute_batch(CREATE_TABLE)
            .map_err(StoreError::sql("create table"))?;
        Ok(Self { conn })
    }

    /// Insert or replace one record.
    pub fn upsert_record(&self, record: &Record) -> Result<()> {
        self.conn
            .execute(UPSERT, record_params(record))
            .map_err(StoreError::sql("upsert"))?;
        Ok(())
    }

    /// Upsert records in one transaction. Returns the number written.
    pub fn insert_records(&mut self, records: &[Record]) -> Result<usize> {
        if records.is_empty() {
            return Ok(0);
        }

        let tx = self
            .conn
            .transaction()
            .map_err(StoreError::sql("begin transaction"))?;
        {
            let mut stmt = tx
                .prepare_cached(UPSERT)
                .map_err(StoreError::sql("prepare upsert"))?;
            for record in records {
                stmt.execute(record_params(record))
                    .map_err(StoreError::sql("upsert"))?;
            }
        }
        tx.commit().map_err(StoreError::sql("commit"))?;

        info!(record_count = records.len(), "stored valid records");
        Ok(records.len())
    }

    /// All stored records ordered by patient id.
    pub fn fetch_all(&self) -> Result<Vec<Record>> {
        let mut stmt = self
            .conn
            .prepare(SELECT_ALL)
            .map_err(StoreError::sql("prepare select"))?;
        let rows = stmt
            .query_map([], |row| {
                Ok(Record::new(
                    row.get(0)?,
                    row.get(1)?,
                    row.get(2)?,
                    row.get(3)?,
                    row.get(4)?,
                ))
            })
            .map_err(StoreError::sql("select"))?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(StoreError::sql("read row"))
    }

    pub fn count(&self) -> Result<usize> {
        self.conn
            .query_row("SELECT COUNT(*) FROM patient_records", [], |row| row.get(0))
            .map_err(StoreError::sql("count"))
    }
}

fn record_params(
    record: &Record,
) -> (
    Option<&str>,
    Option<&str>,
    Option<&str>,
    Option<&str>,
    Option<&str>,
) {
    let [patient_id, health_card_number, version_code, date_of_birth, service_date] =
        record.values();
    (
        patient_id,
        health_card_number,
        version_code,
        date_of_birth,
        service_date,
    )
}
