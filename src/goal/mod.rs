//! Savings goals: the model, form validation and progress.

mod core;
mod form;
mod progress;

pub use core::{SavingsGoal, SavingsGoalBuilder};
pub use form::GoalForm;
pub use progress::{GoalProgress, compute_goal_progress, progress_percent};
