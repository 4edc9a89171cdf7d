//! Ledger aggregation.
//!
//! Pure, deterministic derivations over a snapshot of transactions and goals:
//! totals, category breakdowns, chart series and the reports summary. Nothing
//! here performs I/O or keeps state, the same snapshot always gives the same
//! result.

mod aggregation;
mod series;
mod summary;
mod window;

pub use aggregation::{
    CategoryAmount, CategoryShare, Totals, category_shares, compute_totals,
    group_expenses_by_category, sort_by_amount_descending, top_expense_category,
};
pub use series::{
    DailySeries, MonthlyExpense, build_current_month_series, build_daily_series,
    build_monthly_series, build_recent_daily_series,
};
pub use summary::{FinancialSummary, RECENT_TRANSACTION_LIMIT, Timeframe, summarise};
pub use window::{DateRange, month_bounds, month_label, trailing_days};
