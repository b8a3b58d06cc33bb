//! One-shot database seeding.
//!
//! Seed operations are data, not trait objects: each [`SeedOp`] carries a name
//! and a SurrealQL script. The [`Seeder`] applies registered operations in
//! order and stops at the first failure. The shipped binary registers no
//! operations, so a default run is a successful no-op.

use crate::{Database, DatabaseError};
use tracing::{info, instrument};

/// A named, idempotent seed script.
#[derive(Debug, Clone, Copy)]
pub struct SeedOp {
    pub name: &'static str,
    pub script: &'static str,
}

impl SeedOp {
    #[must_use]
    pub const fn new(name: &'static str, script: &'static str) -> Self {
        Self { name, script }
    }
}

/// Names of the operations a seed run applied, in execution order.
#[derive(Debug, Default)]
pub struct SeedReport {
    pub applied: Vec<&'static str>,
}

/// Applies seed operations against an established [`Database`] session.
#[derive(Debug, Default)]
pub struct Seeder {
    ops: Vec<SeedOp>,
}

impl Seeder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an operation. Operations run in registration order.
    #[must_use]
    pub fn register(mut self, op: SeedOp) -> Self {
        self.ops.push(op);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Runs all registered operations in order.
    ///
    /// # Errors
    /// Returns [`DatabaseError::Seed`] naming the first operation whose script
    /// failed; operations after it are not attempted.
    #[instrument(skip_all, fields(ops = self.ops.len()))]
    pub async fn run(&self, db: &Database) -> Result<SeedReport, DatabaseError> {
        let mut report = SeedReport::default();

        for op in &self.ops {
            let response = db
                .query(op.script)
                .await
                .map_err(|source| DatabaseError::Seed { op: op.name, source })?;
            response.check().map_err(|source| DatabaseError::Seed { op: op.name, source })?;

            info!(op = op.name, "Applied seed operation");
            report.applied.push(op.name);
        }

        if report.applied.is_empty() {
            info!("No seed operations registered, nothing to do");
        }

        Ok(report)
    }
}

/// Runs the seeder, then disconnects the handle on **both** paths.
///
/// `Database::shutdown` takes the handle by value, so the disconnect happens
/// exactly once regardless of the seeding outcome.
pub async fn run_then_disconnect(
    db: Database,
    seeder: &Seeder,
) -> Result<SeedReport, DatabaseError> {
    let outcome = seeder.run(&db).await;
    db.shutdown().await;
    outcome
}
