//! Time-bucketed series for the dashboard and report charts.
//!
//! Every bucket in the requested window is present, zero-filled when nothing
//! happened, so chart axes stay contiguous.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;
use time::Date;

use crate::{
    ledger::window::{DateRange, month_bounds, month_label, trailing_days},
    transaction::{MonthPrefix, Transaction, TransactionKind},
};

/// Daily income and expense sums over a date range.
///
/// The three vectors always have the same length.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DailySeries {
    /// The days as `YYYY-MM-DD`, ascending.
    pub labels: Vec<String>,
    /// Income per day.
    pub income: Vec<Decimal>,
    /// Expenses per day.
    pub expense: Vec<Decimal>,
}

impl DailySeries {
    /// The number of days in the series.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the series has no days.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Sums income and expenses for each day from `start` to `end` inclusive.
///
/// Returns an empty series if `start` is after `end`.
pub fn build_daily_series(transactions: &[Transaction], start: Date, end: Date) -> DailySeries {
    let range = DateRange { start, end };
    let days = range.days();

    let mut income = vec![Decimal::ZERO; days.len()];
    let mut expense = vec![Decimal::ZERO; days.len()];

    for transaction in transactions.iter().filter(|t| range.contains(t.date)) {
        let index = (transaction.date - start).whole_days() as usize;

        match transaction.kind {
            TransactionKind::Income => income[index] += transaction.amount,
            TransactionKind::Expense => expense[index] += transaction.amount,
        }
    }

    DailySeries {
        labels: days.iter().map(ToString::to_string).collect(),
        income,
        expense,
    }
}

/// The daily series for the `days` days ending on `today`.
///
/// The dashboard shows the last 7 days.
pub fn build_recent_daily_series(
    transactions: &[Transaction],
    today: Date,
    days: u16,
) -> DailySeries {
    match trailing_days(today, days) {
        Some(range) => build_daily_series(transactions, range.start, range.end),
        None => DailySeries::default(),
    }
}

/// The daily series for every day of the calendar month containing `today`.
pub fn build_current_month_series(transactions: &[Transaction], today: Date) -> DailySeries {
    let range = month_bounds(today);

    build_daily_series(transactions, range.start, range.end)
}

/// The expenses of one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyExpense {
    /// The month, e.g. "2024-03".
    pub month: MonthPrefix,
    /// A human readable month, e.g. "Mar 2024".
    pub label: String,
    /// The sum of expense amounts dated in the month.
    pub total_expense: Decimal,
}

/// Sums expenses for each of the last `number_of_months` calendar months,
/// oldest first, ending with the month containing `today`.
pub fn build_monthly_series(
    transactions: &[Transaction],
    number_of_months: usize,
    today: Date,
) -> Vec<MonthlyExpense> {
    let totals = aggregate_expenses_by_month(transactions);

    let mut months = Vec::with_capacity(number_of_months);
    let mut month = MonthPrefix::of(today);

    for _ in 0..number_of_months {
        months.push(month);
        month = month.previous();
    }

    months
        .into_iter()
        .rev()
        .map(|month| MonthlyExpense {
            month,
            label: month_label(month),
            total_expense: totals.get(&month).copied().unwrap_or_default(),
        })
        .collect()
}

/// Aggregates expense amounts by calendar month.
fn aggregate_expenses_by_month(transactions: &[Transaction]) -> HashMap<MonthPrefix, Decimal> {
    let mut totals = HashMap::new();

    for transaction in transactions.iter().filter(|t| t.is_expense()) {
        *totals
            .entry(MonthPrefix::of(transaction.date))
            .or_insert(Decimal::ZERO) += transaction.amount;
    }

    totals
}
