//! Defines the core transaction model.

use std::{fmt::Display, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    Error,
    input::{check_amount, require_non_empty},
    record_id::RecordId,
};

// ============================================================================
// MODELS
// ============================================================================

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money earned, e.g. a salary payment.
    Income,
    /// Money spent, e.g. groceries.
    Expense,
}

impl TransactionKind {
    /// The lowercase name used in forms and by the backend.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl FromStr for TransactionKind {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(Error::UnknownTransactionKind(other.to_owned())),
        }
    }
}

impl Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// To create a new `Transaction`, use [Transaction::build] and hand the
/// builder to a [TransactionStore](crate::stores::TransactionStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedTransaction")]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: RecordId,
    /// When the transaction happened.
    pub date: Date,
    /// How much money moved. Always zero or more, the direction is given by `kind`.
    pub amount: Decimal,
    /// The category of the transaction, e.g. "Groceries", "Salary".
    pub category: String,
    /// A text description of what the transaction was for.
    pub description: String,
    /// Whether the money was earned or spent.
    pub kind: TransactionKind,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(amount: Decimal, date: Date, kind: TransactionKind) -> TransactionBuilder {
        TransactionBuilder {
            amount,
            date,
            kind,
            category: String::new(),
            description: String::new(),
        }
    }

    /// Whether this transaction is income.
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Whether this transaction is an expense.
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// The editable fields of this transaction as a builder.
    ///
    /// Useful for edit forms, which replace every editable field at once.
    pub fn to_builder(&self) -> TransactionBuilder {
        TransactionBuilder {
            amount: self.amount,
            date: self.date,
            kind: self.kind,
            category: self.category.clone(),
            description: self.description.clone(),
        }
    }
}

/// A [Transaction] read from JSON that has not been validated yet.
#[derive(Deserialize)]
struct UncheckedTransaction {
    id: RecordId,
    date: Date,
    amount: Decimal,
    category: String,
    #[serde(default)]
    description: String,
    kind: TransactionKind,
}

impl TryFrom<UncheckedTransaction> for Transaction {
    type Error = Error;

    fn try_from(unchecked: UncheckedTransaction) -> Result<Self, Self::Error> {
        let builder = Transaction::build(unchecked.amount, unchecked.date, unchecked.kind)
            .category(&unchecked.category)
            .description(&unchecked.description);
        builder.validate()?;

        Ok(builder.finalise(unchecked.id))
    }
}

/// The editable fields of a [Transaction].
///
/// A builder is used both to create transactions and to replace the fields
/// of an existing one; there is no partial update.
///
/// # Examples
///
/// ```
/// use budgetbuddy::{RecordId, Transaction, TransactionKind};
/// use rust_decimal::Decimal;
/// use time::macros::date;
///
/// let amount = Decimal::new(4599, 2);
/// let transaction = Transaction::build(amount, date!(2025 - 01 - 15), TransactionKind::Expense)
///     .category("Dining")
///     .description("Coffee shop")
///     .finalise(RecordId::from_raw("trans-1"));
///
/// assert!(transaction.is_expense());
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionBuilder {
    /// The magnitude of the transaction, never negative.
    pub amount: Decimal,

    /// The date when the transaction occurred.
    pub date: Date,

    /// Whether money was earned or spent.
    pub kind: TransactionKind,

    /// The category label, e.g. "Groceries".
    pub category: String,

    /// A human-readable description of the transaction.
    ///
    /// May be empty, the backend stores it as a nullable column.
    pub description: String,
}

impl TransactionBuilder {
    /// Set the category for the transaction.
    pub fn category(mut self, category: &str) -> Self {
        category.clone_into(&mut self.category);
        self
    }

    /// Set the description for the transaction.
    pub fn description(mut self, description: &str) -> Self {
        description.clone_into(&mut self.description);
        self
    }

    /// Check the invariants every stored transaction must satisfy.
    ///
    /// # Errors
    /// Returns [Error::NegativeAmount] if the amount is below zero, or
    /// [Error::EmptyField] if the category is blank.
    pub fn validate(&self) -> Result<(), Error> {
        check_amount(self.amount)?;
        require_non_empty(&self.category, "category")?;

        Ok(())
    }

    /// Attach `id` and produce the transaction.
    pub fn finalise(self, id: RecordId) -> Transaction {
        Transaction {
            id,
            date: self.date,
            amount: self.amount,
            category: self.category,
            description: self.description,
            kind: self.kind,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rust_decimal_macros::dec;
    use time::macros::date;

    use crate::{
        Error,
        record_id::RecordId,
        transaction::{Transaction, TransactionKind},
    };

    #[test]
    fn parses_kinds() {
        assert_eq!(TransactionKind::from_str("income"), Ok(TransactionKind::Income));
        assert_eq!(TransactionKind::from_str("expense"), Ok(TransactionKind::Expense));
    }

    #[test]
    fn rejects_unknown_kind() {
        assert_eq!(
            TransactionKind::from_str("transfer"),
            Err(Error::UnknownTransactionKind("transfer".to_owned()))
        );
    }

    #[test]
    fn kind_is_case_sensitive() {
        assert!(TransactionKind::from_str("Income").is_err());
    }

    #[test]
    fn builder_sets_fields() {
        let transaction =
            Transaction::build(dec!(12.30), date!(2025 - 10 - 05), TransactionKind::Expense)
                .category("Groceries")
                .description("Weekly shop")
                .finalise(RecordId::from_raw("abc"));

        assert_eq!(transaction.amount, dec!(12.30));
        assert_eq!(transaction.category, "Groceries");
        assert_eq!(transaction.description, "Weekly shop");
        assert!(transaction.is_expense());
        assert!(!transaction.is_income());
    }

    #[test]
    fn validate_rejects_negative_amount() {
        let builder = Transaction::build(dec!(-5), date!(2025 - 10 - 05), TransactionKind::Expense)
            .category("Dining");

        assert_eq!(builder.validate(), Err(Error::NegativeAmount(dec!(-5))));
    }

    #[test]
    fn validate_rejects_blank_category() {
        let builder = Transaction::build(dec!(5), date!(2025 - 10 - 05), TransactionKind::Income);

        assert_eq!(builder.validate(), Err(Error::EmptyField("category")));
    }

    #[test]
    fn to_builder_round_trips_editable_fields() {
        let transaction =
            Transaction::build(dec!(2000), date!(2024 - 03 - 01), TransactionKind::Income)
                .category("Salary")
                .finalise(RecordId::from_raw("t"));

        let rebuilt = transaction.to_builder().finalise(transaction.id.clone());

        assert_eq!(rebuilt, transaction);
    }

    #[test]
    fn deserializes_valid_transaction() {
        let json = r#"{"id":"t1","date":"2025-01-15","amount":45.99,"category":"Dining","description":"Coffee","kind":"expense"}"#;

        let transaction: Transaction = serde_json::from_str(json).unwrap();

        assert_eq!(
            transaction,
            Transaction::build(dec!(45.99), date!(2025 - 01 - 15), TransactionKind::Expense)
                .category("Dining")
                .description("Coffee")
                .finalise(RecordId::from_raw("t1"))
        );
    }

    #[test]
    fn deserializing_rejects_negative_amount() {
        let json = r#"{"id":"t1","date":"2025-01-15","amount":-500,"category":"Dining","kind":"expense"}"#;

        let error = serde_json::from_str::<Transaction>(json).unwrap_err();

        assert!(
            error.to_string().contains("negative amount"),
            "unexpected error: {error}"
        );
    }

    #[test]
    fn deserializing_rejects_blank_category() {
        let json = r#"{"id":"t1","date":"2025-01-15","amount":5,"category":"","kind":"income"}"#;

        let error = serde_json::from_str::<Transaction>(json).unwrap_err();

        assert!(
            error.to_string().contains("category cannot be empty"),
            "unexpected error: {error}"
        );
    }

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&TransactionKind::Expense).unwrap();

        assert_eq!(json, "\"expense\"");
    }
}
