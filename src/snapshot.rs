//! A point-in-time copy of one user's records, and its backend JSON form.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    goal::SavingsGoal,
    record_id::UserId,
    stores::{SavingsRow, TransactionRow},
    transaction::{Transaction, sort_newest_first},
};

/// The transactions and goals of one user, as read from a record store.
///
/// Transactions are most recent first and goals most recently created first.
/// Deserializing a snapshot validates every record like the stores do.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The user's transactions.
    pub transactions: Vec<Transaction>,
    /// The user's savings goals.
    pub goals: Vec<SavingsGoal>,
}

/// The JSON document the backend returns for one user.
#[derive(Debug, Default, Serialize, Deserialize)]
struct BackendSnapshot {
    #[serde(default)]
    transactions: Vec<TransactionRow>,
    #[serde(default)]
    savings: Vec<SavingsRow>,
}

impl Snapshot {
    /// Parse a backend document of the form `{"transactions": [...], "savings": [...]}`.
    ///
    /// Either list may be absent. Transactions are reordered most recent
    /// first; goals keep the backend order.
    ///
    /// # Errors
    /// Returns [Error::JSONSerializationError] if `json` is malformed, or the
    /// validation error of the first row that breaks a model invariant.
    pub fn from_backend_json(json: &str) -> Result<Self, Error> {
        let backend: BackendSnapshot = serde_json::from_str(json)?;

        let mut transactions = backend
            .transactions
            .into_iter()
            .map(|row| {
                let id = row.id.clone();
                row.into_transaction().inspect_err(|error| {
                    tracing::warn!("Rejected transaction {id} from backend: {error}")
                })
            })
            .collect::<Result<Vec<_>, Error>>()?;
        sort_newest_first(&mut transactions);

        let goals = backend
            .savings
            .into_iter()
            .map(|row| {
                let id = row.id.clone();
                row.into_goal().inspect_err(|error| {
                    tracing::warn!("Rejected savings goal {id} from backend: {error}")
                })
            })
            .collect::<Result<Vec<_>, Error>>()?;

        tracing::debug!(
            "Parsed {} transactions and {} goals from backend JSON",
            transactions.len(),
            goals.len()
        );

        Ok(Self {
            transactions,
            goals,
        })
    }

    /// Render the snapshot as the backend document for `user`.
    ///
    /// # Errors
    /// Returns [Error::JSONSerializationError] if serialization fails.
    pub fn to_backend_json(&self, user: &UserId) -> Result<String, Error> {
        let backend = BackendSnapshot {
            transactions: self
                .transactions
                .iter()
                .map(|transaction| TransactionRow::from_transaction(transaction, user))
                .collect(),
            savings: self
                .goals
                .iter()
                .map(|goal| SavingsRow::from_goal(goal, user))
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&backend)?)
    }

    /// Read a backend document from the file at `path`.
    ///
    /// # Errors
    /// Returns [Error::SnapshotFileError] if the file cannot be read, otherwise
    /// see [Snapshot::from_backend_json].
    pub fn load_backend_file(path: &Path) -> Result<Self, Error> {
        let json = fs::read_to_string(path)?;
        tracing::debug!("Read snapshot file {}", path.display());

        Self::from_backend_json(&json)
    }

    /// Write the backend document for `user` to the file at `path`.
    ///
    /// Overwrites any existing file.
    ///
    /// # Errors
    /// Returns [Error::SnapshotFileError] if the file cannot be written.
    pub fn save_backend_file(&self, path: &Path, user: &UserId) -> Result<(), Error> {
        let json = self.to_backend_json(user)?;
        fs::write(path, json)?;
        tracing::debug!("Wrote snapshot file {}", path.display());

        Ok(())
    }
}
