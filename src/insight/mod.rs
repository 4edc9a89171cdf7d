//! Financial insights shown on the insights page and the dashboard preview.
//!
//! There is no recommendation engine behind these yet. The built-in insights
//! are static and "regenerating" them goes through the [InsightGenerator]
//! trait, whose only implementation is a shuffling placeholder.

mod generator;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::record_id::RecordId;

pub use generator::{InsightGenerator, ShuffleInsightGenerator};

/// What an insight is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    /// A way to save money.
    Saving,
    /// A pattern in the user's spending.
    Spending,
    /// A chance to invest.
    Investment,
}

/// How urgently the user should act on an insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightPriority {
    /// Worth knowing.
    Low,
    /// Worth acting on.
    Medium,
    /// Act on this first.
    High,
}

/// A suggestion about the user's finances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    /// The ID of the insight.
    pub id: RecordId,
    /// A short headline.
    pub title: String,
    /// The full suggestion.
    pub description: String,
    /// What the insight is about.
    #[serde(rename = "type")]
    pub kind: InsightKind,
    /// How urgent the insight is.
    pub priority: InsightPriority,
    /// How much the user could save per month by following the insight, if known.
    pub potential_savings: Option<Decimal>,
}

/// The built-in insights.
pub fn seed_insights() -> Vec<Insight> {
    let insight = |id: &str,
                   title: &str,
                   description: &str,
                   kind: InsightKind,
                   priority: InsightPriority,
                   potential_savings: Option<i64>| Insight {
        id: RecordId::from_raw(id),
        title: title.to_owned(),
        description: description.to_owned(),
        kind,
        priority,
        potential_savings: potential_savings.map(Decimal::from),
    };

    vec![
        insight(
            "insight-1",
            "Reduce Restaurant Spending",
            "Your dining expenses are 20% higher than last month. Consider cooking at home more often to save around $150 monthly.",
            InsightKind::Saving,
            InsightPriority::High,
            Some(150),
        ),
        insight(
            "insight-2",
            "Utility Bill Optimization",
            "Your electricity bill has increased by 15%. Check for energy-efficient options or unused devices consuming power.",
            InsightKind::Saving,
            InsightPriority::Medium,
            Some(45),
        ),
        insight(
            "insight-3",
            "Investment Opportunity",
            "Based on your current savings rate, you could invest $300 monthly in index funds for long-term growth.",
            InsightKind::Investment,
            InsightPriority::Medium,
            None,
        ),
        insight(
            "insight-4",
            "Subscription Review",
            "You have 5 active subscriptions totaling $65 monthly. Consider evaluating which ones you use regularly.",
            InsightKind::Spending,
            InsightPriority::Low,
            Some(65),
        ),
        insight(
            "insight-5",
            "Shopping Pattern",
            "Your impulse shopping typically happens on weekends. Setting a weekend budget could help manage these expenses.",
            InsightKind::Spending,
            InsightPriority::Medium,
            Some(120),
        ),
    ]
}

/// The first `count` insights, as shown in the dashboard preview.
pub fn preview(insights: &[Insight], count: usize) -> &[Insight] {
    &insights[..count.min(insights.len())]
}

#[cfg(test)]
mod tests {
    use crate::insight::{InsightKind, InsightPriority, preview, seed_insights};

    #[test]
    fn seed_has_five_insights() {
        let insights = seed_insights();

        assert_eq!(insights.len(), 5);
        assert_eq!(insights[0].priority, InsightPriority::High);
        assert_eq!(insights[2].kind, InsightKind::Investment);
        assert_eq!(insights[2].potential_savings, None);
    }

    #[test]
    fn preview_takes_at_most_count() {
        let insights = seed_insights();

        assert_eq!(preview(&insights, 2).len(), 2);
        assert_eq!(preview(&insights, 10).len(), 5);
        assert!(preview(&[], 3).is_empty());
    }

    #[test]
    fn kind_serializes_as_type_field() {
        let json = serde_json::to_string(&seed_insights()[0]).unwrap();

        assert!(json.contains("\"type\":\"saving\""));
        assert!(json.contains("\"priority\":\"high\""));
    }
}
