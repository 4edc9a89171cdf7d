//! Progress of savings goals towards their targets.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use serde::Serialize;

use crate::{goal::SavingsGoal, record_id::RecordId};

/// The percentage of `goal` that has been saved, in `[0, 100]`.
///
/// The ratio is rounded half up and clamped to 100 for goals that are
/// over-saved. A goal with a target of zero or less reports 0.
pub fn compute_goal_progress(goal: &SavingsGoal) -> u8 {
    progress_percent(goal.saved_amount, goal.target_amount)
}

/// The percentage of `target` covered by `saved`, see [compute_goal_progress].
pub fn progress_percent(saved: Decimal, target: Decimal) -> u8 {
    if target <= Decimal::ZERO {
        return 0;
    }

    // Overflow only happens when `saved` dwarfs `target`.
    let percent = saved
        .checked_div(target)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);

    percent.to_u8().unwrap_or(0)
}

/// A goal with its display progress, as shown in the goal progress report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgress {
    /// The ID of the goal.
    pub id: RecordId,
    /// The goal name.
    pub name: String,
    /// The amount saved so far.
    pub saved_amount: Decimal,
    /// The target amount.
    pub target_amount: Decimal,
    /// The clamped progress percentage.
    pub percent: u8,
}

impl From<&SavingsGoal> for GoalProgress {
    fn from(goal: &SavingsGoal) -> Self {
        Self {
            id: goal.id.clone(),
            name: goal.name.clone(),
            saved_amount: goal.saved_amount,
            target_amount: goal.target_amount,
            percent: compute_goal_progress(goal),
        }
    }
}
