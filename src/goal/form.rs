//! Validation of savings goal form submissions.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    Error,
    goal::{SavingsGoal, SavingsGoalBuilder},
    input::{parse_amount, parse_date, require_non_empty},
};

/// The raw fields of the goal form, used both to add and to edit.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GoalForm {
    /// What the user is saving for.
    pub name: String,
    /// The target as a decimal string.
    pub target_amount: String,
    /// The amount saved so far as a decimal string. Blank means zero.
    #[serde(default)]
    pub saved_amount: String,
    /// The deadline as `YYYY-MM-DD`.
    pub deadline: String,
    /// Optional label.
    #[serde(default)]
    pub category: String,
}

impl GoalForm {
    /// Validate the form into a builder.
    ///
    /// # Errors
    /// Returns a:
    /// - [Error::EmptyField] if the name is blank,
    /// - [Error::InvalidAmount] or [Error::NegativeAmount] for a bad amount,
    /// - or [Error::InvalidDate] if the deadline is not a real `YYYY-MM-DD` date.
    pub fn validate(&self) -> Result<SavingsGoalBuilder, Error> {
        let name = require_non_empty(&self.name, "name")?;
        let target_amount = parse_amount(&self.target_amount)?;
        let saved_amount = match self.saved_amount.trim() {
            "" => Decimal::ZERO,
            saved_amount => parse_amount(saved_amount)?,
        };
        let deadline = parse_date(&self.deadline)?;

        Ok(SavingsGoal::build(&name, target_amount, deadline)
            .saved_amount(saved_amount)
            .category(self.category.trim()))
    }
}
