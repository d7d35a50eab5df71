#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod calendar;
mod error;
mod muscle_category;
mod running;
mod scoring;
mod service;
mod workout;

pub use calendar::{DayOverview, SessionMeta, SessionStatus};
pub use error::ValidationError;
pub use muscle_category::{MuscleCategory, MuscleCategoryError};
pub use running::{
    MAX_REMAINDER_KM, MIN_REMAINDER_KM, Split, SplitError, generate_splits, total_distance,
    total_duration, validate_splits,
};
pub use scoring::{
    BestSet, DEFAULT_TOP_N, LiftAttempt, best_set_by_exercise, compare_attempts, pr_by_exercise,
    top_n_by_category,
};
pub use service::{RunningService, Service, WorkoutScoringService};
pub use workout::{Workout, WorkoutDrop, WorkoutExercise, WorkoutSet};
