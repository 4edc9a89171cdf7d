//! Defines the crate level error type.

use rust_decimal::Decimal;

/// The errors that may occur when validating input or working with a record store.
///
/// Aggregation functions never produce errors: they assume their input was
/// validated at the boundary (see [crate::transaction::TransactionForm] and
/// [crate::goal::GoalForm]).
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A monetary amount was negative.
    ///
    /// Amounts are magnitudes, the direction of money is given by the
    /// transaction kind.
    #[error("{0} is a negative amount, which is not allowed")]
    NegativeAmount(Decimal),

    /// A monetary amount could not be parsed as a decimal number.
    #[error("\"{0}\" is not a valid amount")]
    InvalidAmount(String),

    /// A transaction kind other than `income` or `expense` was given.
    #[error("\"{0}\" is not a transaction kind, expected \"income\" or \"expense\"")]
    UnknownTransactionKind(String),

    /// A date string was not in the `YYYY-MM-DD` format or does not exist in the calendar.
    #[error("\"{0}\" is not a valid date, expected YYYY-MM-DD")]
    InvalidDate(String),

    /// A month selector was not in the `YYYY-MM` format.
    #[error("\"{0}\" is not a valid month, expected YYYY-MM")]
    InvalidMonthPrefix(String),

    /// A required text field was empty.
    ///
    /// Holds the name of the field.
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    /// The requested record was not found.
    #[error("the requested record could not be found")]
    NotFound,

    /// Tried to update a transaction that does not exist
    #[error("tried to update a transaction that is not in the store")]
    UpdateMissingTransaction,

    /// Tried to delete a transaction that does not exist
    #[error("tried to delete a transaction that is not in the store")]
    DeleteMissingTransaction,

    /// Tried to update a savings goal that does not exist
    #[error("tried to update a savings goal that is not in the store")]
    UpdateMissingGoal,

    /// Tried to delete a savings goal that does not exist
    #[error("tried to delete a savings goal that is not in the store")]
    DeleteMissingGoal,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezone(String),

    /// A snapshot file could not be read or written.
    #[error("could not access the snapshot file: {0}")]
    SnapshotFileError(String),

    /// An error occurred while reading or writing JSON.
    #[error("could not serialize or deserialize JSON: {0}")]
    JSONSerializationError(String),
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::SnapshotFileError(value.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::JSONSerializationError(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::Error;

    #[test]
    fn negative_amount_message_includes_amount() {
        let message = Error::NegativeAmount(dec!(-12.50)).to_string();

        assert_eq!(message, "-12.50 is a negative amount, which is not allowed");
    }

    #[test]
    fn converts_json_errors() {
        let json_error = serde_json::from_str::<u32>("not json").unwrap_err();

        let error: Error = json_error.into();

        assert!(matches!(error, Error::JSONSerializationError(_)));
    }
}
