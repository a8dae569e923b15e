// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for DEVCON Hub.
//!
//! Diesel over `SQLite`. The hosted deployment points at a file-backed
//! database; tests use uniquely named shared in-memory databases so they
//! are fast and isolated. Migrations are embedded and run at connection
//! time.
//!
//! The operation surface is deliberately small: applications support
//! insert, ordered select-all, and delete-by-id; members support ordered
//! select-all, exact-email lookup, and a seeding insert used by tests
//! and operational imports only.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod data_models;
mod diesel_schema;
mod error;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

use data_models::{ApplicationRow, MemberRow, NewApplicationRow, NewMemberRow};
use devcon_hub_domain::{ApplicationRecord, Member};
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::BigInt;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use diesel_schema::{members, volunteer_applications};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info};

/// Embedded `SQLite` migrations, applied at connection time.
const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID, so
/// tests never collide on a shared database.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for the volunteer-application and member
/// collections.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a persistence adapter backed by a unique in-memory
    /// `SQLite` database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let database_url: String = format!("file:devcon_memdb_{db_id}?mode=memory&cache=shared");

        let conn: SqliteConnection = initialize_database(&database_url)?;
        Ok(Self { conn })
    }

    /// Creates a persistence adapter backed by a file-based `SQLite`
    /// database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError(String::from("Invalid database path"))
        })?;

        let mut conn: SqliteConnection = initialize_database(path_str)?;
        enable_wal_mode(&mut conn)?;

        Ok(Self { conn })
    }

    // ========================================================================
    // Applications
    // ========================================================================

    /// Inserts one application record.
    ///
    /// Identity and timestamps are assigned by the database; the record's
    /// own `application_id`/`created_at`/`updated_at` are ignored.
    ///
    /// # Returns
    ///
    /// The `application_id` assigned to the inserted row.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_application(
        &mut self,
        record: &ApplicationRecord,
    ) -> Result<i64, PersistenceError> {
        debug!(
            event = %record.event,
            volunteer_type = %record.volunteer_type,
            "Inserting volunteer application"
        );

        diesel::insert_into(volunteer_applications::table)
            .values(NewApplicationRow::from_record(record))
            .execute(&mut self.conn)?;

        let application_id: i64 = last_insert_rowid(&mut self.conn)?;

        info!(application_id, "Volunteer application inserted");
        Ok(application_id)
    }

    /// Lists every application, newest first.
    ///
    /// Rows are ordered by creation time descending; rows created within
    /// the same second order by id descending.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_applications(&mut self) -> Result<Vec<ApplicationRecord>, PersistenceError> {
        debug!("Listing volunteer applications");

        let rows: Vec<ApplicationRow> = volunteer_applications::table
            .order((
                volunteer_applications::created_at.desc(),
                volunteer_applications::application_id.desc(),
            ))
            .select(ApplicationRow::as_select())
            .load(&mut self.conn)?;

        Ok(rows.into_iter().map(ApplicationRecord::from).collect())
    }

    /// Deletes one application by id.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if no row has the given id.
    pub fn delete_application(&mut self, application_id: i64) -> Result<(), PersistenceError> {
        let deleted: usize = diesel::delete(
            volunteer_applications::table
                .filter(volunteer_applications::application_id.eq(application_id)),
        )
        .execute(&mut self.conn)?;

        if deleted == 0 {
            return Err(PersistenceError::NotFound(format!(
                "Application {application_id} does not exist"
            )));
        }

        info!(application_id, "Volunteer application deleted");
        Ok(())
    }

    // ========================================================================
    // Members
    // ========================================================================

    /// Lists every member, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_members(&mut self) -> Result<Vec<Member>, PersistenceError> {
        debug!("Listing members");

        let rows: Vec<MemberRow> = members::table
            .order((members::created_at.desc(), members::member_id.desc()))
            .select(MemberRow::as_select())
            .load(&mut self.conn)?;

        Ok(rows.into_iter().map(Member::from).collect())
    }

    /// Looks up a member by exact email match.
    ///
    /// Email is unique within the collection, so at most one row matches.
    /// Zero matches are a normal outcome, reported as `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query itself fails. A backend failure is
    /// never conflated with "no member found".
    pub fn find_member_by_email(
        &mut self,
        email: &str,
    ) -> Result<Option<Member>, PersistenceError> {
        debug!(email, "Looking up member by email");

        let result: Result<MemberRow, diesel::result::Error> = members::table
            .filter(members::email.eq(email))
            .select(MemberRow::as_select())
            .first(&mut self.conn);

        match result {
            Ok(row) => Ok(Some(Member::from(row))),
            Err(diesel::result::Error::NotFound) => Ok(None),
            Err(err) => Err(PersistenceError::from(err)),
        }
    }

    /// Inserts one member row.
    ///
    /// The funnel never writes members; this exists for seeding tests
    /// and operational roster imports.
    ///
    /// # Returns
    ///
    /// The `member_id` assigned to the inserted row.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, including on a duplicate
    /// email.
    pub fn insert_member(&mut self, member: &Member) -> Result<i64, PersistenceError> {
        debug!(email = %member.email, "Inserting member");

        diesel::insert_into(members::table)
            .values(NewMemberRow::from_member(member))
            .execute(&mut self.conn)?;

        last_insert_rowid(&mut self.conn)
    }
}

/// Initialize a `SQLite` database at the given URL and run migrations.
fn initialize_database(database_url: &str) -> Result<SqliteConnection, PersistenceError> {
    info!("Initializing SQLite database at: {}", database_url);

    let mut conn: SqliteConnection = SqliteConnection::establish(database_url)
        .map_err(|e| PersistenceError::DatabaseConnectionFailed(e.to_string()))?;

    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?;

    Ok(conn)
}

/// Enable WAL mode for file-based `SQLite` databases.
///
/// WAL (Write-Ahead Logging) mode provides better read concurrency for
/// file-based databases.
fn enable_wal_mode(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    // NOTE: PRAGMA is raw SQL (justified - Diesel has no PRAGMA DSL)
    diesel::sql_query("PRAGMA journal_mode = WAL")
        .execute(conn)
        .map_err(|e| PersistenceError::QueryFailed(e.to_string()))?;
    Ok(())
}

/// Helper function to get the last inserted row ID.
///
/// `SQLite` doesn't support `RETURNING` clauses in all contexts, so we
/// must query `last_insert_rowid()`.
fn last_insert_rowid(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(diesel::select(sql::<BigInt>("last_insert_rowid()")).get_result(conn)?)
}
