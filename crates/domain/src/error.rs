use crate::{MuscleCategoryError, SplitError};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Invalid date \"{0}\" (expected YYYY-MM-DD)")]
    Date(String),
    #[error(transparent)]
    MuscleCategory(#[from] MuscleCategoryError),
    #[error(transparent)]
    Split(#[from] SplitError),
}
