use crate::{LiftAttempt, MuscleCategory};

#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub date: String,
    pub exercises: Vec<WorkoutExercise>,
}

impl Workout {
    /// All performed sets as lift attempts.
    ///
    /// Every simple set and every drop of a drop set results in one attempt, which carries
    /// the order of its set. Sets without weight or reps are kept and left to the validity
    /// check of the scoring.
    #[must_use]
    pub fn lift_attempts(&self) -> Vec<LiftAttempt> {
        self.exercises
            .iter()
            .flat_map(|exercise| {
                exercise.sets.iter().flat_map(move |set| {
                    let attempt = |weight_kg: f64, reps: i32| LiftAttempt {
                        exercise_id: exercise.exercise_id.clone(),
                        muscle_category: exercise.muscle_category,
                        date: self.date.clone(),
                        order: Some(set.order()),
                        weight_kg,
                        reps,
                    };
                    match set {
                        WorkoutSet::Simple {
                            weight_kg, reps, ..
                        } => vec![attempt(*weight_kg, *reps)],
                        WorkoutSet::DropSet { drops, .. } => drops
                            .iter()
                            .map(|drop| attempt(drop.weight_kg, drop.reps))
                            .collect(),
                    }
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutExercise {
    pub exercise_id: String,
    pub muscle_category: MuscleCategory,
    pub sets: Vec<WorkoutSet>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WorkoutSet {
    Simple {
        order: i32,
        weight_kg: f64,
        reps: i32,
    },
    DropSet {
        order: i32,
        drops: Vec<WorkoutDrop>,
    },
}

impl WorkoutSet {
    #[must_use]
    pub fn order(&self) -> i32 {
        match self {
            WorkoutSet::Simple { order, .. } | WorkoutSet::DropSet { order, .. } => *order,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutDrop {
    pub order: i32,
    pub weight_kg: f64,
    pub reps: i32,
}
