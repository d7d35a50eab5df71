use std::{
    cmp::Ordering,
    collections::{BTreeMap, HashMap},
};

use derive_more::{AsRef, Deref};
use log::debug;

use crate::MuscleCategory;

/// Number of entries per muscle category if not stated otherwise.
pub const DEFAULT_TOP_N: usize = 3;

/// A single recorded performance of an exercise.
///
/// `date` is expected in the form `YYYY-MM-DD`, so that the lexicographic order of dates
/// matches their chronological order.
#[derive(Debug, Clone, PartialEq)]
pub struct LiftAttempt {
    pub exercise_id: String,
    pub muscle_category: MuscleCategory,
    pub date: String,
    pub order: Option<i32>,
    pub weight_kg: f64,
    pub reps: i32,
}

impl LiftAttempt {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.exercise_id.trim().is_empty()
            && !self.date.trim().is_empty()
            && self.weight_kg > 0.0
            && self.reps > 0
    }
}

/// The winning attempt of an exercise. Only valid attempts can become a best set.
#[derive(AsRef, Deref, Debug, Clone, PartialEq)]
pub struct BestSet(LiftAttempt);

impl BestSet {
    #[must_use]
    pub fn into_inner(self) -> LiftAttempt {
        self.0
    }
}

/// Order attempts from worst to best.
///
/// Heavier weight wins, then more reps, then the later date, then the higher order. A
/// missing order counts as 0.
#[must_use]
pub fn compare_attempts(a: &LiftAttempt, b: &LiftAttempt) -> Ordering {
    a.weight_kg
        .total_cmp(&b.weight_kg)
        .then_with(|| a.reps.cmp(&b.reps))
        .then_with(|| a.date.cmp(&b.date))
        .then_with(|| a.order.unwrap_or(0).cmp(&b.order.unwrap_or(0)))
}

/// Select the best valid attempt for every exercise.
///
/// Invalid attempts are ignored. If several attempts are equally good, the first one wins.
#[must_use]
pub fn best_set_by_exercise(attempts: &[LiftAttempt]) -> HashMap<String, BestSet> {
    let mut grouped: HashMap<&str, Vec<&LiftAttempt>> = HashMap::new();
    let mut discarded = 0;

    for attempt in attempts {
        if attempt.is_valid() {
            grouped
                .entry(attempt.exercise_id.as_str())
                .or_default()
                .push(attempt);
        } else {
            discarded += 1;
        }
    }

    if discarded > 0 {
        debug!("ignored {discarded} invalid lift attempts");
    }

    grouped
        .into_iter()
        .filter_map(|(exercise_id, candidates)| {
            let best = candidates.into_iter().reduce(|best, candidate| {
                if compare_attempts(candidate, best) == Ordering::Greater {
                    candidate
                } else {
                    best
                }
            })?;
            Some((exercise_id.to_string(), BestSet(best.clone())))
        })
        .collect()
}

/// Select the personal record for every exercise.
///
/// A personal record is currently the best set of all time.
#[must_use]
pub fn pr_by_exercise(attempts: &[LiftAttempt]) -> HashMap<String, BestSet> {
    best_set_by_exercise(attempts)
}

/// Rank the best sets of each muscle category and keep the top `n`.
///
/// The result contains every muscle category, even if it has no best sets. Best sets that
/// are equally good are ordered by exercise ID.
#[must_use]
pub fn top_n_by_category(
    best_by_exercise: &HashMap<String, BestSet>,
    n: usize,
) -> BTreeMap<MuscleCategory, Vec<BestSet>> {
    let mut result = MuscleCategory::iter()
        .map(|category| (*category, Vec::new()))
        .collect::<BTreeMap<MuscleCategory, Vec<BestSet>>>();

    for best_set in best_by_exercise.values() {
        result
            .entry(best_set.muscle_category)
            .or_default()
            .push(best_set.clone());
    }

    for best_sets in result.values_mut() {
        best_sets.sort_by(|a, b| {
            compare_attempts(b, a).then_with(|| a.exercise_id.cmp(&b.exercise_id))
        });
        best_sets.truncate(n);
    }

    result
}
