//! The financial summary shown on the reports page.

use std::{fmt::Display, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    goal::GoalProgress,
    ledger::{
        aggregation::{
            CategoryShare, Totals, category_shares, compute_totals, group_expenses_by_category,
            top_expense_category,
        },
        series::{MonthlyExpense, build_monthly_series},
    },
    snapshot::Snapshot,
    transaction::{Transaction, recent_transactions},
};

/// How many transactions the dashboard lists as recent.
pub const RECENT_TRANSACTION_LIMIT: usize = 5;

/// How far back the monthly spending report looks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timeframe {
    /// The last three calendar months.
    #[serde(rename = "3months")]
    ThreeMonths,
    /// The last six calendar months.
    #[default]
    #[serde(rename = "6months")]
    SixMonths,
    /// The last twelve calendar months.
    #[serde(rename = "12months")]
    TwelveMonths,
}

impl Timeframe {
    /// The number of calendar months covered.
    pub fn months(self) -> usize {
        match self {
            Self::ThreeMonths => 3,
            Self::SixMonths => 6,
            Self::TwelveMonths => 12,
        }
    }

    /// The value used on the command line and in saved preferences.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ThreeMonths => "3months",
            Self::SixMonths => "6months",
            Self::TwelveMonths => "12months",
        }
    }

    /// A label for display, e.g. "Last 6 Months".
    pub fn label(self) -> &'static str {
        match self {
            Self::ThreeMonths => "Last 3 Months",
            Self::SixMonths => "Last 6 Months",
            Self::TwelveMonths => "Last 12 Months",
        }
    }
}

impl FromStr for Timeframe {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "3months" => Ok(Self::ThreeMonths),
            "6months" => Ok(Self::SixMonths),
            "12months" => Ok(Self::TwelveMonths),
            other => Err(format!(
                "unknown timeframe \"{other}\", expected 3months, 6months or 12months"
            )),
        }
    }
}

impl Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the reports and dashboard pages derive from a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialSummary {
    /// The day the summary was computed for.
    pub today: Date,
    /// The timeframe of `monthly_spending`.
    pub timeframe: Timeframe,
    /// Income and expenses over the whole snapshot.
    pub totals: Totals,
    /// Income minus expenses.
    pub net: Decimal,
    /// Expenses per month over the timeframe, oldest first.
    pub monthly_spending: Vec<MonthlyExpense>,
    /// The mean of `monthly_spending`, rounded to cents.
    pub average_monthly_spending: Decimal,
    /// Expenses per category in first-seen order, with their share of spending.
    pub expenses_by_category: Vec<CategoryShare>,
    /// The category with the most spending, `None` without expenses.
    pub top_expense_category: Option<String>,
    /// The saved amounts of every goal added up.
    pub total_saved: Decimal,
    /// Every goal with its progress, in snapshot order.
    pub goals: Vec<GoalProgress>,
    /// The goal highlighted on the dashboard, the first in the snapshot.
    pub active_goal: Option<GoalProgress>,
    /// The most recent transactions, newest first.
    pub recent_transactions: Vec<Transaction>,
}

/// Compute the [FinancialSummary] of `snapshot` as of `today`.
pub fn summarise(snapshot: &Snapshot, timeframe: Timeframe, today: Date) -> FinancialSummary {
    let transactions = snapshot.transactions.as_slice();

    let totals = compute_totals(transactions);
    let monthly_spending = build_monthly_series(transactions, timeframe.months(), today);
    let average_monthly_spending = average_spending(&monthly_spending);
    let expenses_by_category = category_shares(&group_expenses_by_category(transactions));
    let top_expense_category = top_expense_category(transactions).map(|top| top.category);

    let goals: Vec<GoalProgress> = snapshot.goals.iter().map(GoalProgress::from).collect();
    let total_saved = snapshot.goals.iter().map(|goal| goal.saved_amount).sum();

    tracing::debug!(
        "Summarised {} transactions and {} goals over {timeframe}",
        transactions.len(),
        goals.len()
    );

    FinancialSummary {
        today,
        timeframe,
        totals,
        net: totals.net(),
        monthly_spending,
        average_monthly_spending,
        expenses_by_category,
        top_expense_category,
        total_saved,
        active_goal: goals.first().cloned(),
        goals,
        recent_transactions: recent_transactions(transactions, RECENT_TRANSACTION_LIMIT),
    }
}

fn average_spending(monthly_spending: &[MonthlyExpense]) -> Decimal {
    if monthly_spending.is_empty() {
        return Decimal::ZERO;
    }

    let total: Decimal = monthly_spending
        .iter()
        .map(|month| month.total_expense)
        .sum();

    (total / Decimal::from(monthly_spending.len())).round_dp(2)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use time::{Date, macros::date};

    use crate::{
        goal::SavingsGoal,
        ledger::summary::{Timeframe, summarise},
        record_id::RecordId,
        snapshot::Snapshot,
        transaction::{Transaction, TransactionKind},
    };

    fn create_test_transaction(
        id: &str,
        amount: Decimal,
        date: Date,
        kind: TransactionKind,
        category: &str,
    ) -> Transaction {
        Transaction::build(amount, date, kind)
            .category(category)
            .finalise(RecordId::from_raw(id))
    }

    fn create_test_goal(name: &str, target: Decimal, saved: Decimal) -> SavingsGoal {
        SavingsGoal::build(name, target, date!(2024 - 12 - 31))
            .saved_amount(saved)
            .finalise(RecordId::from_raw(name))
    }

    fn sample_snapshot() -> Snapshot {
        Snapshot {
            transactions: vec![
                create_test_transaction(
                    "1",
                    dec!(100),
                    date!(2024 - 03 - 01),
                    TransactionKind::Expense,
                    "Dining",
                ),
                create_test_transaction(
                    "2",
                    dec!(2000),
                    date!(2024 - 03 - 01),
                    TransactionKind::Income,
                    "Salary",
                ),
                create_test_transaction(
                    "3",
                    dec!(50),
                    date!(2024 - 03 - 15),
                    TransactionKind::Expense,
                    "Dining",
                ),
                create_test_transaction(
                    "4",
                    dec!(200),
                    date!(2024 - 02 - 10),
                    TransactionKind::Expense,
                    "Shopping",
                ),
            ],
            goals: vec![
                create_test_goal("Vacation", dec!(3000), dec!(1200)),
                create_test_goal("Laptop", dec!(1500), dec!(1800)),
            ],
        }
    }

    #[test]
    fn summary_of_sample_snapshot() {
        let summary = summarise(&sample_snapshot(), Timeframe::ThreeMonths, date!(2024 - 03 - 20));

        assert_eq!(summary.totals.income, dec!(2000));
        assert_eq!(summary.totals.expense, dec!(350));
        assert_eq!(summary.net, dec!(1650));
        assert_eq!(summary.monthly_spending.len(), 3);
        // (0 + 200 + 150) / 3
        assert_eq!(summary.average_monthly_spending, dec!(116.67));
        assert_eq!(summary.top_expense_category.as_deref(), Some("Shopping"));
        assert_eq!(summary.total_saved, dec!(3000));
        assert_eq!(summary.goals[0].percent, 40);
        assert_eq!(summary.goals[1].percent, 100);
        assert_eq!(summary.active_goal.as_ref().map(|g| g.name.as_str()), Some("Vacation"));
        assert_eq!(summary.recent_transactions[0].id.as_str(), "3");
    }

    #[test]
    fn summary_of_empty_snapshot() {
        let summary = summarise(&Snapshot::default(), Timeframe::SixMonths, date!(2024 - 03 - 20));

        assert_eq!(summary.totals.expense, dec!(0));
        assert_eq!(summary.monthly_spending.len(), 6);
        assert_eq!(summary.average_monthly_spending, dec!(0));
        assert_eq!(summary.top_expense_category, None);
        assert_eq!(summary.active_goal, None);
        assert!(summary.expenses_by_category.is_empty());
        assert!(summary.recent_transactions.is_empty());
    }

    #[test]
    fn recent_transactions_are_capped() {
        let transactions = (1..=8)
            .map(|day| {
                create_test_transaction(
                    &day.to_string(),
                    dec!(1),
                    Date::from_calendar_date(2024, time::Month::March, day).unwrap(),
                    TransactionKind::Expense,
                    "Dining",
                )
            })
            .collect();
        let snapshot = Snapshot {
            transactions,
            goals: Vec::new(),
        };

        let summary = summarise(&snapshot, Timeframe::SixMonths, date!(2024 - 03 - 20));

        let ids: Vec<_> = summary.recent_transactions.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["8", "7", "6", "5", "4"]);
    }

    #[test]
    fn parses_timeframes() {
        assert_eq!("3months".parse::<Timeframe>(), Ok(Timeframe::ThreeMonths));
        assert_eq!("12months".parse::<Timeframe>(), Ok(Timeframe::TwelveMonths));
        assert!("1year".parse::<Timeframe>().is_err());
        assert_eq!(Timeframe::default().months(), 6);
    }

    #[test]
    fn timeframe_serializes_as_option_value() {
        assert_eq!(serde_json::to_string(&Timeframe::TwelveMonths).unwrap(), "\"12months\"");
    }
}
