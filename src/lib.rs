//! BudgetBuddy is a personal finance tracker.
//!
//! This library is the ledger layer of the application: it turns a snapshot
//! of a user's transactions and savings goals into the totals, category
//! breakdowns, chart series and goal progress shown on the dashboard and
//! reports pages.
//!
//! Everything in [ledger] is pure and takes "today" as an argument, so the
//! same snapshot always produces the same summary. Raw input is validated
//! once at the boundary ([TransactionForm], [GoalForm] and the backend row
//! adapters in [stores]) and the rest of the crate works with the validated
//! models.

#![warn(missing_docs)]

mod error;
mod input;
mod record_id;

pub mod category;
pub mod format;
pub mod goal;
pub mod insight;
pub mod ledger;
pub mod logging;
pub mod mock;
pub mod snapshot;
pub mod stores;
pub mod timezone;
pub mod transaction;

pub use error::Error;
pub use goal::{GoalForm, SavingsGoal, compute_goal_progress};
pub use ledger::{FinancialSummary, Timeframe, summarise};
pub use record_id::{RecordId, UserId};
pub use snapshot::Snapshot;
pub use transaction::{
    QuickEntryForm, Transaction, TransactionFilter, TransactionForm, TransactionKind,
    filter_transactions,
};
