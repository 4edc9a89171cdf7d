//! Implements an in-memory record store.

use std::collections::HashMap;

use crate::{
    Error,
    goal::{SavingsGoal, SavingsGoalBuilder},
    record_id::{RecordId, UserId},
    snapshot::Snapshot,
    stores::{GoalStore, TransactionStore},
    transaction::{Transaction, TransactionBuilder, sort_newest_first},
};

#[derive(Debug, Clone, Default)]
struct UserRecords {
    transactions: Vec<Transaction>,
    /// In creation order.
    goals: Vec<SavingsGoal>,
}

/// Stores transactions and goals in memory, separately for each user.
///
/// Used as the record store in tests and by the command line tools.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    users: HashMap<UserId, UserRecords>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `snapshot` as the records of `user`.
    ///
    /// Goals in a snapshot are newest first, the store keeps them in creation order.
    pub fn with_snapshot(user: &UserId, snapshot: Snapshot) -> Self {
        let mut goals = snapshot.goals;
        goals.reverse();

        let records = UserRecords {
            transactions: snapshot.transactions,
            goals,
        };

        Self {
            users: HashMap::from([(user.clone(), records)]),
        }
    }

    fn records(&self, user: &UserId) -> Option<&UserRecords> {
        self.users.get(user)
    }

    fn records_mut(&mut self, user: &UserId) -> &mut UserRecords {
        self.users.entry(user.clone()).or_default()
    }

    fn existing_records_mut(&mut self, user: &UserId) -> Option<&mut UserRecords> {
        self.users.get_mut(user)
    }
}

impl TransactionStore for MemoryStore {
    fn create(
        &mut self,
        user: &UserId,
        builder: TransactionBuilder,
    ) -> Result<Transaction, Error> {
        builder.validate()?;

        let transaction = builder.finalise(RecordId::new());
        tracing::debug!("Created transaction {} for user {user}", transaction.id);

        self.records_mut(user).transactions.push(transaction.clone());

        Ok(transaction)
    }

    fn get(&self, user: &UserId, id: &RecordId) -> Result<Transaction, Error> {
        self.records(user)
            .and_then(|records| records.transactions.iter().find(|t| t.id == *id))
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn get_all(&self, user: &UserId) -> Result<Vec<Transaction>, Error> {
        let mut transactions = self
            .records(user)
            .map(|records| records.transactions.clone())
            .unwrap_or_default();

        sort_newest_first(&mut transactions);

        Ok(transactions)
    }

    fn update(
        &mut self,
        user: &UserId,
        id: &RecordId,
        builder: TransactionBuilder,
    ) -> Result<Transaction, Error> {
        builder.validate()?;

        let transaction = self
            .existing_records_mut(user)
            .and_then(|records| records.transactions.iter_mut().find(|t| t.id == *id))
            .ok_or(Error::UpdateMissingTransaction)?;

        *transaction = builder.finalise(id.clone());
        tracing::debug!("Updated transaction {id} for user {user}");

        Ok(transaction.clone())
    }

    fn delete(&mut self, user: &UserId, id: &RecordId) -> Result<(), Error> {
        let records = self
            .existing_records_mut(user)
            .ok_or(Error::DeleteMissingTransaction)?;
        let position = records
            .transactions
            .iter()
            .position(|t| t.id == *id)
            .ok_or(Error::DeleteMissingTransaction)?;

        records.transactions.remove(position);
        tracing::debug!("Deleted transaction {id} for user {user}");

        Ok(())
    }
}

impl GoalStore for MemoryStore {
    fn create_goal(
        &mut self,
        user: &UserId,
        builder: SavingsGoalBuilder,
    ) -> Result<SavingsGoal, Error> {
        builder.validate()?;

        let goal = builder.finalise(RecordId::new());
        tracing::debug!("Created goal {} for user {user}", goal.id);

        self.records_mut(user).goals.push(goal.clone());

        Ok(goal)
    }

    fn get_goal(&self, user: &UserId, id: &RecordId) -> Result<SavingsGoal, Error> {
        self.records(user)
            .and_then(|records| records.goals.iter().find(|g| g.id == *id))
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn get_goals(&self, user: &UserId) -> Result<Vec<SavingsGoal>, Error> {
        Ok(self
            .records(user)
            .map(|records| records.goals.iter().rev().cloned().collect())
            .unwrap_or_default())
    }

    fn update_goal(
        &mut self,
        user: &UserId,
        id: &RecordId,
        builder: SavingsGoalBuilder,
    ) -> Result<SavingsGoal, Error> {
        builder.validate()?;

        let goal = self
            .existing_records_mut(user)
            .and_then(|records| records.goals.iter_mut().find(|g| g.id == *id))
            .ok_or(Error::UpdateMissingGoal)?;

        *goal = builder.finalise(id.clone());
        tracing::debug!("Updated goal {id} for user {user}");

        Ok(goal.clone())
    }

    fn delete_goal(&mut self, user: &UserId, id: &RecordId) -> Result<(), Error> {
        let records = self
            .existing_records_mut(user)
            .ok_or(Error::DeleteMissingGoal)?;
        let position = records
            .goals
            .iter()
            .position(|g| g.id == *id)
            .ok_or(Error::DeleteMissingGoal)?;

        records.goals.remove(position);
        tracing::debug!("Deleted goal {id} for user {user}");

        Ok(())
    }
}
