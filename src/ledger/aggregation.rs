//! Totals and category breakdowns over a snapshot of transactions.
//!
//! All functions assume the transactions were validated when they were
//! created (non-negative amounts, known kinds, real dates) and do not check again.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    goal::progress_percent,
    transaction::{Transaction, TransactionKind},
};

/// Income and expense sums.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// The sum of income amounts.
    pub income: Decimal,
    /// The sum of expense amounts.
    pub expense: Decimal,
}

impl Totals {
    /// Add two totals component-wise.
    ///
    /// `compute_totals` of two concatenated lists equals the combination of
    /// their separate totals.
    pub fn combine(self, other: Totals) -> Totals {
        Totals {
            income: self.income + other.income,
            expense: self.expense + other.expense,
        }
    }

    /// Income minus expenses.
    pub fn net(&self) -> Decimal {
        self.income - self.expense
    }
}

/// Sums income and expenses separately. Both are zero for an empty list.
pub fn compute_totals(transactions: &[Transaction]) -> Totals {
    transactions
        .iter()
        .fold(Totals::default(), |mut totals, transaction| {
            match transaction.kind {
                TransactionKind::Income => totals.income += transaction.amount,
                TransactionKind::Expense => totals.expense += transaction.amount,
            }

            totals
        })
}

/// The total spent in one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAmount {
    /// The category label.
    pub category: String,
    /// The sum of expense amounts in the category.
    pub amount: Decimal,
}

/// Sums expenses per category.
///
/// Categories appear in the order they are first seen in `transactions`.
/// Use [sort_by_amount_descending] for a ranking.
pub fn group_expenses_by_category(transactions: &[Transaction]) -> Vec<CategoryAmount> {
    let mut grouped: Vec<CategoryAmount> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for transaction in transactions.iter().filter(|t| t.is_expense()) {
        match positions.get(transaction.category.as_str()) {
            Some(&position) => grouped[position].amount += transaction.amount,
            None => {
                positions.insert(transaction.category.as_str(), grouped.len());
                grouped.push(CategoryAmount {
                    category: transaction.category.clone(),
                    amount: transaction.amount,
                });
            }
        }
    }

    grouped
}

/// Sort categories from the largest amount to the smallest.
///
/// The sort is stable: categories with equal amounts keep their order.
pub fn sort_by_amount_descending(categories: &mut [CategoryAmount]) {
    categories.sort_by(|a, b| b.amount.cmp(&a.amount));
}

/// The category with the most spending, `None` if there are no expenses.
///
/// Ties go to the category seen first.
pub fn top_expense_category(transactions: &[Transaction]) -> Option<CategoryAmount> {
    let mut categories = group_expenses_by_category(transactions);
    sort_by_amount_descending(&mut categories);

    categories.into_iter().next()
}

/// A category's spending and its share of all spending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    /// The category label.
    pub category: String,
    /// The sum of expense amounts in the category.
    pub amount: Decimal,
    /// The rounded percentage of total spending, 0 when nothing was spent.
    pub percent: u8,
}

/// Attach each category's rounded percentage of the combined amount.
pub fn category_shares(categories: &[CategoryAmount]) -> Vec<CategoryShare> {
    let total: Decimal = categories.iter().map(|category| category.amount).sum();

    categories
        .iter()
        .map(|category| CategoryShare {
            category: category.category.clone(),
            amount: category.amount,
            percent: progress_percent(category.amount, total),
        })
        .collect()
}
