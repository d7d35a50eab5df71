use std::{slice::Iter, str::FromStr};

use strum::{AsRefStr, Display};

#[derive(AsRefStr, Display, Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MuscleCategory {
    Chest,
    Back,
    Shoulder,
    Arm,
    Leg,
}

impl MuscleCategory {
    /// All categories in their fixed order.
    pub fn iter() -> Iter<'static, MuscleCategory> {
        static CATEGORIES: [MuscleCategory; 5] = [
            MuscleCategory::Chest,
            MuscleCategory::Back,
            MuscleCategory::Shoulder,
            MuscleCategory::Arm,
            MuscleCategory::Leg,
        ];
        CATEGORIES.iter()
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            MuscleCategory::Chest => "Chest",
            MuscleCategory::Back => "Back",
            MuscleCategory::Shoulder => "Shoulder",
            MuscleCategory::Arm => "Arm",
            MuscleCategory::Leg => "Leg",
        }
    }
}

impl FromStr for MuscleCategory {
    type Err = MuscleCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        MuscleCategory::iter()
            .find(|c| c.to_string().eq_ignore_ascii_case(trimmed))
            .copied()
            .ok_or_else(|| MuscleCategoryError::Unknown(trimmed.to_string()))
    }
}

impl TryFrom<&str> for MuscleCategory {
    type Error = MuscleCategoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MuscleCategoryError {
    #[error("Unknown muscle category \"{0}\"")]
    Unknown(String),
}
