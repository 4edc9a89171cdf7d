//! Producing a fresh set of insights on request.

use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};
use rust_decimal::Decimal;

use crate::{insight::Insight, record_id::RecordId};

/// Produces a new set of insights when the user asks to regenerate them.
///
/// Implementations may be backed by a real recommendation engine; the
/// ledger never depends on this trait.
pub trait InsightGenerator {
    /// Produce the insights that replace `current`.
    fn regenerate(&mut self, current: &[Insight]) -> Vec<Insight>;
}

/// A placeholder generator that only reorders and perturbs the current insights.
///
/// Each regeneration shuffles the insights, gives them new IDs and scales
/// every potential saving by a random factor in `[0.8, 1.2)`, rounded to a
/// whole amount.
#[derive(Debug, Clone)]
pub struct ShuffleInsightGenerator<R> {
    rng: R,
}

impl<R: Rng> ShuffleInsightGenerator<R> {
    /// Create a generator drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl ShuffleInsightGenerator<StdRng> {
    /// Create a generator whose output is fixed by `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> InsightGenerator for ShuffleInsightGenerator<R> {
    fn regenerate(&mut self, current: &[Insight]) -> Vec<Insight> {
        let mut insights = current.to_vec();
        insights.shuffle(&mut self.rng);

        for insight in &mut insights {
            insight.id = RecordId::new();
            insight.potential_savings = insight.potential_savings.map(|savings| {
                let factor = Decimal::from_f64_retain(self.rng.gen_range(0.8..1.2))
                    .unwrap_or(Decimal::ONE);

                (savings * factor).round()
            });
        }

        tracing::debug!("Regenerated {} insights", insights.len());

        insights
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::insight::{InsightGenerator, ShuffleInsightGenerator, seed_insights};

    #[test]
    fn keeps_every_insight() {
        let current = seed_insights();
        let mut generator = ShuffleInsightGenerator::from_seed(42);

        let regenerated = generator.regenerate(&current);

        assert_eq!(regenerated.len(), current.len());
        for insight in &current {
            assert!(regenerated.iter().any(|other| other.title == insight.title));
        }
    }

    #[test]
    fn assigns_new_ids() {
        let current = seed_insights();
        let mut generator = ShuffleInsightGenerator::from_seed(7);

        let regenerated = generator.regenerate(&current);

        for insight in &regenerated {
            assert!(current.iter().all(|other| other.id != insight.id));
        }
    }

    #[test]
    fn jitters_savings_within_bounds() {
        let current = seed_insights();
        let mut generator = ShuffleInsightGenerator::from_seed(3);

        for _ in 0..20 {
            for insight in generator.regenerate(&current) {
                let original = current
                    .iter()
                    .find(|other| other.title == insight.title)
                    .unwrap();

                match (original.potential_savings, insight.potential_savings) {
                    (Some(before), Some(after)) => {
                        assert!(after >= (before * dec!(0.8)).floor(), "{after} < 0.8 * {before}");
                        assert!(after <= (before * dec!(1.2)).ceil(), "{after} > 1.2 * {before}");
                        assert_eq!(after, after.round());
                    }
                    (None, None) => {}
                    other => panic!("savings changed presence: {other:?}"),
                }
            }
        }
    }

    #[test]
    fn same_seed_gives_same_order() {
        let current = seed_insights();

        let first = ShuffleInsightGenerator::from_seed(11).regenerate(&current);
        let second = ShuffleInsightGenerator::from_seed(11).regenerate(&current);

        let titles = |insights: &[crate::insight::Insight]| {
            insights.iter().map(|i| i.title.clone()).collect::<Vec<_>>()
        };
        assert_eq!(titles(&first), titles(&second));
    }
}
