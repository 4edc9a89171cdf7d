//! The category catalogues offered by the entry forms.
//!
//! Categories on a [Transaction](crate::transaction::Transaction) are free-form
//! labels, these lists are only the suggestions shown to the user.

/// Categories offered for expenses.
pub const EXPENSE_CATEGORIES: [&str; 8] = [
    "Groceries",
    "Dining",
    "Shopping",
    "Transportation",
    "Utilities",
    "Healthcare",
    "Entertainment",
    "Education",
];

/// Categories offered for income.
pub const INCOME_CATEGORIES: [&str; 4] = ["Salary", "Freelance", "Investments", "Gifts"];

/// Every category offered by the full transaction form, expenses first.
pub fn all_categories() -> impl Iterator<Item = &'static str> {
    EXPENSE_CATEGORIES
        .iter()
        .chain(INCOME_CATEGORIES.iter())
        .copied()
}
