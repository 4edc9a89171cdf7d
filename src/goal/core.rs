//! Defines the savings goal model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    Error,
    input::{check_amount, require_non_empty},
    record_id::RecordId,
};

/// Something the user is saving towards.
///
/// `saved_amount` is whatever the user last entered, it is not derived from
/// transactions and may exceed `target_amount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedSavingsGoal")]
pub struct SavingsGoal {
    /// The ID of the goal.
    pub id: RecordId,
    /// What the user is saving for.
    pub name: String,
    /// The amount the user wants to save.
    pub target_amount: Decimal,
    /// The amount saved so far.
    pub saved_amount: Decimal,
    /// When the user wants to reach the target.
    pub deadline: Date,
    /// A free-form label such as "Travel".
    pub category: String,
}

impl SavingsGoal {
    /// Create a new savings goal.
    ///
    /// Shortcut for [SavingsGoalBuilder] for discoverability.
    pub fn build(name: &str, target_amount: Decimal, deadline: Date) -> SavingsGoalBuilder {
        SavingsGoalBuilder {
            name: name.to_owned(),
            target_amount,
            saved_amount: Decimal::ZERO,
            deadline,
            category: String::new(),
        }
    }

    /// The editable fields of this goal as a builder.
    pub fn to_builder(&self) -> SavingsGoalBuilder {
        SavingsGoalBuilder {
            name: self.name.clone(),
            target_amount: self.target_amount,
            saved_amount: self.saved_amount,
            deadline: self.deadline,
            category: self.category.clone(),
        }
    }
}

/// A [SavingsGoal] read from JSON that has not been validated yet.
#[derive(Deserialize)]
struct UncheckedSavingsGoal {
    id: RecordId,
    name: String,
    target_amount: Decimal,
    saved_amount: Decimal,
    deadline: Date,
    #[serde(default)]
    category: String,
}

impl TryFrom<UncheckedSavingsGoal> for SavingsGoal {
    type Error = Error;

    fn try_from(unchecked: UncheckedSavingsGoal) -> Result<Self, Self::Error> {
        let builder =
            SavingsGoal::build(&unchecked.name, unchecked.target_amount, unchecked.deadline)
                .saved_amount(unchecked.saved_amount)
                .category(&unchecked.category);
        builder.validate()?;

        Ok(builder.finalise(unchecked.id))
    }
}

/// The editable fields of a [SavingsGoal].
#[derive(Debug, PartialEq, Clone)]
pub struct SavingsGoalBuilder {
    /// What the user is saving for.
    pub name: String,
    /// The amount the user wants to save. Zero is accepted, progress is then 0%.
    pub target_amount: Decimal,
    /// The amount saved so far, defaults to zero.
    pub saved_amount: Decimal,
    /// When the user wants to reach the target.
    pub deadline: Date,
    /// A free-form label, may be empty.
    pub category: String,
}

impl SavingsGoalBuilder {
    /// Set the amount saved so far.
    pub fn saved_amount(mut self, saved_amount: Decimal) -> Self {
        self.saved_amount = saved_amount;
        self
    }

    /// Set the category.
    pub fn category(mut self, category: &str) -> Self {
        category.clone_into(&mut self.category);
        self
    }

    /// Check the invariants every stored goal must satisfy.
    ///
    /// # Errors
    /// Returns [Error::EmptyField] if the name is blank, or
    /// [Error::NegativeAmount] if either amount is below zero.
    pub fn validate(&self) -> Result<(), Error> {
        require_non_empty(&self.name, "name")?;
        check_amount(self.target_amount)?;
        check_amount(self.saved_amount)?;

        Ok(())
    }

    /// Attach `id` and produce the goal.
    pub fn finalise(self, id: RecordId) -> SavingsGoal {
        SavingsGoal {
            id,
            name: self.name,
            target_amount: self.target_amount,
            saved_amount: self.saved_amount,
            deadline: self.deadline,
            category: self.category,
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use time::macros::date;

    use crate::{Error, goal::SavingsGoal, record_id::RecordId};

    #[test]
    fn builder_defaults_saved_amount_to_zero() {
        let goal = SavingsGoal::build("Vacation", dec!(3000), date!(2025 - 12 - 01))
            .finalise(RecordId::from_raw("goal-1"));

        assert_eq!(goal.saved_amount, dec!(0));
        assert_eq!(goal.category, "");
    }

    #[test]
    fn validate_rejects_blank_name() {
        let builder = SavingsGoal::build(" ", dec!(3000), date!(2025 - 12 - 01));

        assert_eq!(builder.validate(), Err(Error::EmptyField("name")));
    }

    #[test]
    fn validate_rejects_negative_saved_amount() {
        let builder = SavingsGoal::build("Vacation", dec!(3000), date!(2025 - 12 - 01))
            .saved_amount(dec!(-1));

        assert_eq!(builder.validate(), Err(Error::NegativeAmount(dec!(-1))));
    }

    #[test]
    fn validate_accepts_zero_target() {
        let builder = SavingsGoal::build("Someday", dec!(0), date!(2025 - 12 - 01));

        assert_eq!(builder.validate(), Ok(()));
    }

    #[test]
    fn saved_amount_may_exceed_target() {
        let builder = SavingsGoal::build("Laptop", dec!(1500), date!(2025 - 12 - 01))
            .saved_amount(dec!(1800));

        assert_eq!(builder.validate(), Ok(()));
    }

    #[test]
    fn deserializing_rejects_negative_target() {
        let json = r#"{"id":"g1","name":"Vacation","target_amount":-100,"saved_amount":0,"deadline":"2025-12-01"}"#;

        let error = serde_json::from_str::<SavingsGoal>(json).unwrap_err();

        assert!(
            error.to_string().contains("negative amount"),
            "unexpected error: {error}"
        );
    }

    #[test]
    fn deserializing_rejects_blank_name() {
        let json = r#"{"id":"g1","name":"","target_amount":100,"saved_amount":0,"deadline":"2025-12-01"}"#;

        let error = serde_json::from_str::<SavingsGoal>(json).unwrap_err();

        assert!(
            error.to_string().contains("name cannot be empty"),
            "unexpected error: {error}"
        );
    }
}
