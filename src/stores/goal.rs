//! Defines the savings goal store trait.

use crate::{
    Error,
    goal::{SavingsGoal, SavingsGoalBuilder},
    record_id::{RecordId, UserId},
};

/// Handles the creation, retrieval, replacement and deletion of savings goals.
///
/// Every operation is scoped to one user.
pub trait GoalStore {
    /// Create a new goal in the store.
    ///
    /// # Errors
    /// Implementers should reject builders that fail [SavingsGoalBuilder::validate].
    fn create_goal(
        &mut self,
        user: &UserId,
        builder: SavingsGoalBuilder,
    ) -> Result<SavingsGoal, Error>;

    /// Retrieve a goal from the store.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `id` does not belong to one of the user's goals.
    fn get_goal(&self, user: &UserId, id: &RecordId) -> Result<SavingsGoal, Error>;

    /// Retrieve all of the user's goals, most recently created first.
    fn get_goals(&self, user: &UserId) -> Result<Vec<SavingsGoal>, Error>;

    /// Replace every editable field of a goal.
    ///
    /// # Errors
    /// Returns [Error::UpdateMissingGoal] if `id` does not exist.
    fn update_goal(
        &mut self,
        user: &UserId,
        id: &RecordId,
        builder: SavingsGoalBuilder,
    ) -> Result<SavingsGoal, Error>;

    /// Delete a goal.
    ///
    /// # Errors
    /// Returns [Error::DeleteMissingGoal] if `id` does not exist.
    fn delete_goal(&mut self, user: &UserId, id: &RecordId) -> Result<(), Error>;
}
