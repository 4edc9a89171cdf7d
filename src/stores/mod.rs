//! Contains the traits for storing transactions and savings goals, and their implementations.

mod goal;
mod memory;
mod rows;
mod transaction;

pub use goal::GoalStore;
pub use memory::MemoryStore;
pub use rows::{SavingsRow, TransactionRow};
pub use transaction::TransactionStore;

use crate::{Error, record_id::UserId, snapshot::Snapshot};

/// Read every transaction and goal belonging to `user` from `store`.
///
/// # Errors
/// Returns any error produced by the store.
pub fn snapshot<S>(store: &S, user: &UserId) -> Result<Snapshot, Error>
where
    S: TransactionStore + GoalStore,
{
    let transactions = store.get_all(user)?;
    let goals = store.get_goals(user)?;

    tracing::debug!(
        "Read {} transactions and {} goals for user {user}",
        transactions.len(),
        goals.len()
    );

    Ok(Snapshot {
        transactions,
        goals,
    })
}
