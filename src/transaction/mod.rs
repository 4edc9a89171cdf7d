//! Transactions: the model, boundary validation and list filtering.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `TransactionBuilder` for creating and editing transactions
//! - Form validation for the full form and the quick entry card
//! - Filtering and ordering for the expense list

mod core;
mod filter;
mod form;

pub use core::{Transaction, TransactionBuilder, TransactionKind};
pub use filter::{
    MonthOption, MonthPrefix, TransactionFilter, filter_transactions, month_options,
    recent_transactions,
};
pub use form::{QuickEntryForm, TransactionForm};

pub(crate) use filter::sort_newest_first;
