use forma_domain as domain;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LiftAttempt {
    #[serde(default)]
    pub exercise_id: String,
    pub muscle_category: String,
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(default)]
    pub weight_kg: f64,
    #[serde(default)]
    pub reps: i32,
}

impl From<&domain::LiftAttempt> for LiftAttempt {
    fn from(value: &domain::LiftAttempt) -> Self {
        Self {
            exercise_id: value.exercise_id.clone(),
            muscle_category: value.muscle_category.to_string(),
            date: value.date.clone(),
            order: value.order,
            weight_kg: value.weight_kg,
            reps: value.reps,
        }
    }
}

impl From<&domain::BestSet> for LiftAttempt {
    fn from(value: &domain::BestSet) -> Self {
        Self::from(&**value)
    }
}

impl TryFrom<LiftAttempt> for domain::LiftAttempt {
    type Error = domain::MuscleCategoryError;

    fn try_from(value: LiftAttempt) -> Result<Self, Self::Error> {
        Ok(Self {
            exercise_id: value.exercise_id,
            muscle_category: value.muscle_category.parse()?,
            date: value.date,
            order: value.order,
            weight_kg: value.weight_kg,
            reps: value.reps,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Split {
    pub order: u32,
    pub distance_km: f64,
    #[serde(default)]
    pub duration_sec: u32,
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub pace_sec_per_km: Option<f64>,
}

impl From<&domain::Split> for Split {
    fn from(value: &domain::Split) -> Self {
        Self {
            order: value.order,
            distance_km: value.distance_km,
            duration_sec: value.duration_sec,
            pace_sec_per_km: value.pace(),
        }
    }
}

impl From<Split> for domain::Split {
    fn from(value: Split) -> Self {
        Self {
            order: value.order,
            distance_km: value.distance_km,
            duration_sec: value.duration_sec,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub date: String,
    #[serde(default)]
    pub exercises: Vec<WorkoutExercise>,
}

impl TryFrom<Workout> for domain::Workout {
    type Error = domain::MuscleCategoryError;

    fn try_from(value: Workout) -> Result<Self, Self::Error> {
        Ok(Self {
            date: value.date,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::WorkoutExercise::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExercise {
    pub exercise_id: String,
    pub muscle_category: String,
    #[serde(default)]
    pub sets: Vec<WorkoutSet>,
}

impl TryFrom<WorkoutExercise> for domain::WorkoutExercise {
    type Error = domain::MuscleCategoryError;

    fn try_from(value: WorkoutExercise) -> Result<Self, Self::Error> {
        Ok(Self {
            exercise_id: value.exercise_id,
            muscle_category: value.muscle_category.parse()?,
            sets: value.sets.into_iter().map(domain::WorkoutSet::from).collect(),
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum WorkoutSet {
    Simple {
        order: i32,
        #[serde(default)]
        weight_kg: f64,
        #[serde(default)]
        reps: i32,
    },
    DropSet {
        order: i32,
        #[serde(default)]
        drops: Vec<WorkoutDrop>,
    },
}

impl From<WorkoutSet> for domain::WorkoutSet {
    fn from(value: WorkoutSet) -> Self {
        match value {
            WorkoutSet::Simple {
                order,
                weight_kg,
                reps,
            } => Self::Simple {
                order,
                weight_kg,
                reps,
            },
            WorkoutSet::DropSet { order, drops } => Self::DropSet {
                order,
                drops: drops.into_iter().map(domain::WorkoutDrop::from).collect(),
            },
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDrop {
    pub order: i32,
    pub weight_kg: f64,
    pub reps: i32,
}

impl From<WorkoutDrop> for domain::WorkoutDrop {
    fn from(value: WorkoutDrop) -> Self {
        Self {
            order: value.order,
            weight_kg: value.weight_kg,
            reps: value.reps,
        }
    }
}
