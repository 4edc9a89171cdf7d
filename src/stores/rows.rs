//! Translates between the backend's table rows and the canonical models.
//!
//! The backend names some columns differently (`type`, `goal_name`) and
//! allows nulls where the models do not. Conversion happens once, here, and
//! rejects rows that break the model invariants instead of patching them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    goal::SavingsGoal,
    input::parse_date,
    record_id::{RecordId, UserId},
    transaction::{Transaction, TransactionKind},
};

/// A row of the backend `transactions` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRow {
    /// The backend ID of the transaction.
    pub id: String,
    /// The owner of the transaction.
    pub user_id: String,
    /// The magnitude of the transaction.
    pub amount: Decimal,
    /// Either `"income"` or `"expense"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// The category label.
    pub category: String,
    /// A nullable description.
    #[serde(default)]
    pub description: Option<String>,
    /// The date of the transaction as `YYYY-MM-DD`.
    pub date: String,
}

impl TransactionRow {
    /// Convert the row into a validated [Transaction].
    ///
    /// A null description becomes an empty string.
    ///
    /// # Errors
    /// Returns an error if the kind, date, amount or category is invalid.
    pub fn into_transaction(self) -> Result<Transaction, Error> {
        let kind: TransactionKind = self.kind.parse()?;
        let date = parse_date(&self.date)?;

        let builder = Transaction::build(self.amount, date, kind)
            .category(&self.category)
            .description(self.description.as_deref().unwrap_or_default());
        builder.validate()?;

        Ok(builder.finalise(RecordId::from_raw(self.id)))
    }

    /// Create the backend row for `transaction` owned by `user`.
    pub fn from_transaction(transaction: &Transaction, user: &UserId) -> Self {
        Self {
            id: transaction.id.as_str().to_owned(),
            user_id: user.as_str().to_owned(),
            amount: transaction.amount,
            kind: transaction.kind.as_str().to_owned(),
            category: transaction.category.clone(),
            description: Some(transaction.description.clone()),
            date: transaction.date.to_string(),
        }
    }
}

/// A row of the backend `savings` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsRow {
    /// The backend ID of the goal.
    pub id: String,
    /// The owner of the goal.
    pub user_id: String,
    /// What the user is saving for.
    pub goal_name: String,
    /// The amount the user wants to save.
    pub target_amount: Decimal,
    /// The amount saved so far.
    pub saved_amount: Decimal,
    /// The deadline as `YYYY-MM-DD`.
    pub deadline: String,
    /// The backend does not store goal categories, so this is usually absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl SavingsRow {
    /// Convert the row into a validated [SavingsGoal].
    ///
    /// # Errors
    /// Returns an error if the name, either amount or the deadline is invalid.
    pub fn into_goal(self) -> Result<SavingsGoal, Error> {
        let deadline = parse_date(&self.deadline)?;

        let builder = SavingsGoal::build(&self.goal_name, self.target_amount, deadline)
            .saved_amount(self.saved_amount)
            .category(self.category.as_deref().unwrap_or_default());
        builder.validate()?;

        Ok(builder.finalise(RecordId::from_raw(self.id)))
    }

    /// Create the backend row for `goal` owned by `user`.
    pub fn from_goal(goal: &SavingsGoal, user: &UserId) -> Self {
        Self {
            id: goal.id.as_str().to_owned(),
            user_id: user.as_str().to_owned(),
            goal_name: goal.name.clone(),
            target_amount: goal.target_amount,
            saved_amount: goal.saved_amount,
            deadline: goal.deadline.to_string(),
            category: (!goal.category.is_empty()).then(|| goal.category.clone()),
        }
    }
}
