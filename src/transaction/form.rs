//! Validation of transaction form submissions.

use std::str::FromStr;

use serde::Deserialize;
use time::Date;

use crate::{
    Error,
    input::{parse_amount, parse_date, require_non_empty},
    transaction::{Transaction, TransactionBuilder, TransactionKind},
};

/// The raw fields of the full transaction form, used both to add and to edit.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionForm {
    /// The transaction date as `YYYY-MM-DD`.
    pub date: String,
    /// The amount as a decimal string, e.g. "12.50".
    pub amount: String,
    /// The selected category.
    pub category: String,
    /// Optional free text.
    #[serde(default)]
    pub description: String,
    /// Either "income" or "expense".
    pub kind: String,
}

impl TransactionForm {
    /// Validate the form into a builder.
    ///
    /// # Errors
    /// Returns a:
    /// - [Error::InvalidDate] if the date is not a real `YYYY-MM-DD` date,
    /// - [Error::InvalidAmount] or [Error::NegativeAmount] for a bad amount,
    /// - [Error::UnknownTransactionKind] if the kind is not "income" or "expense",
    /// - or [Error::EmptyField] if no category was selected.
    pub fn validate(&self) -> Result<TransactionBuilder, Error> {
        let date = parse_date(&self.date)?;
        let amount = parse_amount(&self.amount)?;
        let kind = TransactionKind::from_str(self.kind.trim())?;
        let category = require_non_empty(&self.category, "category")?;

        Ok(Transaction::build(amount, date, kind)
            .category(&category)
            .description(self.description.trim()))
    }
}

/// The raw fields of the dashboard's quick expense entry card.
///
/// Quick entries are always expenses dated today.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuickEntryForm {
    /// The amount as a decimal string.
    pub amount: String,
    /// The selected expense category.
    pub category: String,
    /// What the money was spent on.
    pub description: String,
}

impl QuickEntryForm {
    /// Validate the form into an expense dated `today`.
    ///
    /// Every field is required.
    ///
    /// # Errors
    /// Returns [Error::EmptyField] for a blank field, or
    /// [Error::InvalidAmount]/[Error::NegativeAmount] for a bad amount.
    pub fn validate(&self, today: Date) -> Result<TransactionBuilder, Error> {
        require_non_empty(&self.amount, "amount")?;
        let amount = parse_amount(&self.amount)?;
        let category = require_non_empty(&self.category, "category")?;
        let description = require_non_empty(&self.description, "description")?;

        Ok(Transaction::build(amount, today, TransactionKind::Expense)
            .category(&category)
            .description(&description))
    }
}
