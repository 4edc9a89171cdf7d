//! Defines the transaction store trait.

use crate::{
    Error,
    record_id::{RecordId, UserId},
    transaction::{Transaction, TransactionBuilder},
};

/// Handles the creation, retrieval, replacement and deletion of transactions.
///
/// Every operation is scoped to one user; a store must never return or
/// modify another user's records.
pub trait TransactionStore {
    /// Create a new transaction in the store.
    ///
    /// # Errors
    /// Implementers should reject builders that fail [TransactionBuilder::validate].
    fn create(&mut self, user: &UserId, builder: TransactionBuilder)
    -> Result<Transaction, Error>;

    /// Retrieve a transaction from the store.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `id` does not belong to one of the user's transactions.
    fn get(&self, user: &UserId, id: &RecordId) -> Result<Transaction, Error>;

    /// Retrieve all of the user's transactions, most recent first.
    fn get_all(&self, user: &UserId) -> Result<Vec<Transaction>, Error>;

    /// Replace every editable field of a transaction.
    ///
    /// # Errors
    /// Returns [Error::UpdateMissingTransaction] if `id` does not exist.
    fn update(
        &mut self,
        user: &UserId,
        id: &RecordId,
        builder: TransactionBuilder,
    ) -> Result<Transaction, Error>;

    /// Delete a transaction.
    ///
    /// # Errors
    /// Returns [Error::DeleteMissingTransaction] if `id` does not exist.
    fn delete(&mut self, user: &UserId, id: &RecordId) -> Result<(), Error>;
}
