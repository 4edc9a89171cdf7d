//! Sample records for demos and manual testing.

use rand::{Rng, distributions::Alphanumeric, seq::SliceRandom};
use rust_decimal::Decimal;
use time::{Date, Duration};

use crate::{
    category::{EXPENSE_CATEGORIES, INCOME_CATEGORIES},
    goal::SavingsGoal,
    record_id::RecordId,
    transaction::{Transaction, TransactionKind},
};

/// How far back mock transactions may be dated, in days.
const MOCK_HISTORY_DAYS: i64 = 30;

/// Generate `count` random transactions dated within the 30 days up to and including `today`.
///
/// Roughly 70% are expenses of 20 to 219 in an expense category, the rest
/// are income of 1000 to 2499 in an income category. All amounts are whole.
pub fn generate_mock_transactions(
    count: usize,
    today: Date,
    rng: &mut impl Rng,
) -> Vec<Transaction> {
    (0..count)
        .map(|i| {
            let is_expense = rng.gen_bool(0.7);
            let days_ago = rng.gen_range(0..MOCK_HISTORY_DAYS);
            let date = today.saturating_sub(Duration::days(days_ago));

            let (kind, category, amount, description) = if is_expense {
                let category = random_category(&EXPENSE_CATEGORIES, rng);
                let suffix: String = (0..5)
                    .map(|_| char::from(rng.sample(Alphanumeric)).to_ascii_lowercase())
                    .collect();

                (
                    TransactionKind::Expense,
                    category,
                    rng.gen_range(20_u32..220),
                    format!("{category} - {suffix}"),
                )
            } else {
                let category = random_category(&INCOME_CATEGORIES, rng);

                (
                    TransactionKind::Income,
                    category,
                    rng.gen_range(1000_u32..2500),
                    format!("{category} payment"),
                )
            };

            Transaction::build(Decimal::from(amount), date, kind)
                .category(category)
                .description(&description)
                .finalise(RecordId::from_raw(format!("trans-{i}")))
        })
        .collect()
}

fn random_category(categories: &[&'static str], rng: &mut impl Rng) -> &'static str {
    categories.choose(rng).copied().unwrap_or("Other")
}

/// The four sample savings goals, with deadlines 60 to 180 days after `today`.
pub fn mock_goals(today: Date) -> Vec<SavingsGoal> {
    [
        ("Emergency Fund", 10_000, 6_500, 180, "Savings"),
        ("Vacation", 3_000, 1_200, 90, "Travel"),
        ("New Laptop", 1_500, 800, 60, "Electronics"),
        ("Professional Course", 5_000, 2_000, 120, "Education"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (name, target, saved, days_left, category))| {
        SavingsGoal::build(
            name,
            Decimal::from(target),
            today.saturating_add(Duration::days(days_left)),
        )
        .saved_amount(Decimal::from(saved))
        .category(category)
        .finalise(RecordId::from_raw(format!("goal-{}", i + 1)))
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};
    use rust_decimal_macros::dec;
    use time::{Duration, macros::date};

    use crate::{
        category::{EXPENSE_CATEGORIES, INCOME_CATEGORIES},
        goal::compute_goal_progress,
        mock::{generate_mock_transactions, mock_goals},
        transaction::TransactionKind,
    };

    #[test]
    fn generates_requested_count() {
        let mut rng = StdRng::seed_from_u64(42);

        let transactions = generate_mock_transactions(50, date!(2025 - 10 - 18), &mut rng);

        assert_eq!(transactions.len(), 50);
    }

    #[test]
    fn transactions_stay_in_range() {
        let today = date!(2025 - 10 - 18);
        let mut rng = StdRng::seed_from_u64(7);

        for transaction in generate_mock_transactions(200, today, &mut rng) {
            assert!(transaction.date <= today);
            assert!(transaction.date > today - Duration::days(30));

            match transaction.kind {
                TransactionKind::Expense => {
                    assert!(EXPENSE_CATEGORIES.contains(&transaction.category.as_str()));
                    assert!((dec!(20)..dec!(220)).contains(&transaction.amount));
                    assert!(transaction.description.starts_with(&transaction.category));
                }
                TransactionKind::Income => {
                    assert!(INCOME_CATEGORIES.contains(&transaction.category.as_str()));
                    assert!((dec!(1000)..dec!(2500)).contains(&transaction.amount));
                    assert_eq!(
                        transaction.description,
                        format!("{} payment", transaction.category)
                    );
                }
            }
        }
    }

    #[test]
    fn same_seed_gives_same_transactions() {
        let today = date!(2025 - 10 - 18);

        let first = generate_mock_transactions(20, today, &mut StdRng::seed_from_u64(1));
        let second = generate_mock_transactions(20, today, &mut StdRng::seed_from_u64(1));

        assert_eq!(first, second);
    }

    #[test]
    fn mostly_expenses() {
        let mut rng = StdRng::seed_from_u64(3);

        let transactions = generate_mock_transactions(1000, date!(2025 - 10 - 18), &mut rng);
        let expenses = transactions.iter().filter(|t| t.is_expense()).count();

        assert!((600..800).contains(&expenses), "got {expenses} expenses");
    }

    #[test]
    fn goals_have_future_deadlines() {
        let today = date!(2025 - 10 - 18);

        let goals = mock_goals(today);

        assert_eq!(goals.len(), 4);
        assert_eq!(goals[0].name, "Emergency Fund");
        assert_eq!(goals[0].deadline, date!(2026 - 04 - 16));
        assert_eq!(compute_goal_progress(&goals[0]), 65);
        for goal in goals {
            let days_left = (goal.deadline - today).whole_days();
            assert!((60..=180).contains(&days_left));
        }
    }
}
