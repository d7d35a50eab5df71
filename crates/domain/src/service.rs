use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use log::debug;

use crate::{
    BestSet, LiftAttempt, MuscleCategory, Split, ValidationError, Workout, running, scoring,
};

pub trait RunningService {
    #[must_use]
    fn generate_splits(&self, total_distance_km: f64, total_duration_sec: Option<f64>) -> Vec<Split> {
        running::generate_splits(total_distance_km, total_duration_sec)
    }

    fn validate_splits(&self, splits: &[Split]) -> Result<(), ValidationError> {
        running::validate_splits(splits)?;
        Ok(())
    }
}

pub trait WorkoutScoringService {
    #[must_use]
    fn best_set_by_exercise(&self, attempts: &[LiftAttempt]) -> HashMap<String, BestSet> {
        scoring::best_set_by_exercise(attempts)
    }

    #[must_use]
    fn pr_by_exercise(&self, attempts: &[LiftAttempt]) -> HashMap<String, BestSet> {
        scoring::pr_by_exercise(attempts)
    }

    #[must_use]
    fn top_n_by_category(
        &self,
        best_by_exercise: &HashMap<String, BestSet>,
        n: usize,
    ) -> BTreeMap<MuscleCategory, Vec<BestSet>> {
        scoring::top_n_by_category(best_by_exercise, n)
    }

    #[must_use]
    fn workout_attempts(&self, workout: &Workout) -> Vec<LiftAttempt> {
        let attempts = workout.lift_attempts();
        debug!(
            "derived {} lift attempts from workout on {}",
            attempts.len(),
            workout.date
        );
        attempts
    }

    fn validate_date(&self, date: &str) -> Result<NaiveDate, ValidationError> {
        let trimmed = date.trim();
        if trimmed.len() != 10 {
            return Err(ValidationError::Date(trimmed.to_string()));
        }
        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .map_err(|_| ValidationError::Date(trimmed.to_string()))
    }

    fn validate_muscle_category(&self, category: &str) -> Result<MuscleCategory, ValidationError> {
        Ok(category.parse::<MuscleCategory>()?)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Service;

impl RunningService for Service {}

impl WorkoutScoringService for Service {}
