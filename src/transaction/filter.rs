//! Filtering and ordering of transactions for the expense list.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use time::{Date, Month};

use crate::{Error, transaction::Transaction};

/// A calendar month selector in the `YYYY-MM` format.
///
/// A transaction falls in the month when its ISO date starts with the
/// selector, i.e. this is a calendar month, not a rolling 30 day window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthPrefix {
    year: i32,
    month: Month,
}

impl MonthPrefix {
    /// The selector for the month containing `date`.
    pub fn of(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The year of the selector.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month of the selector.
    pub fn month(&self) -> Month {
        self.month
    }

    /// The month before this one.
    pub fn previous(self) -> Self {
        match self.month {
            Month::January => Self {
                year: self.year - 1,
                month: Month::December,
            },
            month => Self {
                year: self.year,
                month: month.previous(),
            },
        }
    }

    /// Whether `date` falls in this month.
    pub fn contains(&self, date: Date) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl FromStr for MonthPrefix {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidMonthPrefix(value.to_owned());

        let (year, month) = value.split_once('-').ok_or_else(invalid)?;

        if value.len() != 7
            || year.len() != 4
            || month.len() != 2
            || !year.chars().chain(month.chars()).all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u8 = month.parse().map_err(|_| invalid())?;
        let month = Month::try_from(month).map_err(|_| invalid())?;

        Ok(Self { year, month })
    }
}

impl TryFrom<String> for MonthPrefix {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthPrefix> for String {
    fn from(value: MonthPrefix) -> Self {
        value.to_string()
    }
}

impl Display for MonthPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month as u8)
    }
}

/// The filters offered by the expense list. Every filter that is set must match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionFilter {
    /// Only include transactions in this calendar month.
    pub month: Option<MonthPrefix>,
    /// Only include transactions with exactly this category (case-sensitive).
    pub category: Option<String>,
    /// Only include transactions whose description or category contains this
    /// text, ignoring case.
    pub search_term: Option<String>,
}

impl TransactionFilter {
    /// Build a filter from the raw values of the filter controls.
    ///
    /// Empty strings mean "all", matching the "All Months" and
    /// "All Categories" options.
    ///
    /// # Errors
    /// Returns [Error::InvalidMonthPrefix] if `month` is set but is not `YYYY-MM`.
    pub fn from_raw(month: &str, category: &str, search_term: &str) -> Result<Self, Error> {
        let month = match month.trim() {
            "" => None,
            month => Some(month.parse()?),
        };

        Ok(Self {
            month,
            category: Some(category).filter(|c| !c.is_empty()).map(str::to_owned),
            search_term: Some(search_term)
                .filter(|term| !term.is_empty())
                .map(str::to_owned),
        })
    }

    /// Restrict to a calendar month.
    pub fn month(mut self, month: MonthPrefix) -> Self {
        self.month = Some(month);
        self
    }

    /// Restrict to an exact category.
    pub fn category(mut self, category: &str) -> Self {
        self.category = Some(category.to_owned());
        self
    }

    /// Restrict to transactions mentioning `term`.
    pub fn search_term(mut self, term: &str) -> Self {
        self.search_term = Some(term.to_owned());
        self
    }

    /// Whether `transaction` passes every filter that is set.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        let in_month = self
            .month
            .is_none_or(|month| month.contains(transaction.date));

        let in_category = self
            .category
            .as_ref()
            .is_none_or(|category| transaction.category == *category);

        let mentions_term = self.search_term.as_ref().is_none_or(|term| {
            let term = term.to_lowercase();

            transaction.description.to_lowercase().contains(&term)
                || transaction.category.to_lowercase().contains(&term)
        });

        in_month && in_category && mentions_term
    }
}

/// Select the transactions matching `filter`, most recent first.
///
/// Transactions on the same date keep their relative input order, so calling
/// this twice on the same snapshot gives the same list.
///
/// Assumes the transactions were validated when they were created.
pub fn filter_transactions(
    transactions: &[Transaction],
    filter: &TransactionFilter,
) -> Vec<Transaction> {
    let mut filtered: Vec<Transaction> = transactions
        .iter()
        .filter(|transaction| filter.matches(transaction))
        .cloned()
        .collect();

    sort_newest_first(&mut filtered);

    filtered
}

/// The `limit` most recent transactions, most recent first.
pub fn recent_transactions(transactions: &[Transaction], limit: usize) -> Vec<Transaction> {
    let mut recent = transactions.to_vec();
    sort_newest_first(&mut recent);
    recent.truncate(limit);

    recent
}

/// Sort by date descending. The sort is stable.
pub(crate) fn sort_newest_first(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| b.date.cmp(&a.date));
}

/// A choice in the month filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthOption {
    /// The selector to filter by.
    pub value: MonthPrefix,
    /// The full month name, e.g. "January".
    pub label: &'static str,
}

/// The twelve month choices for `year`, January first.
pub fn month_options(year: i32) -> Vec<MonthOption> {
    let mut month = Month::January;
    let mut options = Vec::with_capacity(12);

    for _ in 0..12 {
        options.push(MonthOption {
            value: MonthPrefix { year, month },
            label: month_name(month),
        });
        month = month.next();
    }

    options
}

fn month_name(month: Month) -> &'static str {
    match month {
        Month::January => "January",
        Month::February => "February",
        Month::March => "March",
        Month::April => "April",
        Month::May => "May",
        Month::June => "June",
        Month::July => "July",
        Month::August => "August",
        Month::September => "September",
        Month::October => "October",
        Month::November => "November",
        Month::December => "December",
    }
}
