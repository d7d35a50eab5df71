use std::collections::{BTreeMap, HashMap};

use forma_domain::{self as domain, BestSet, MuscleCategory};
use serde_json::{Map, Value, json};

use crate::dto;

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Json,
    Table,
}

pub fn splits_json(splits: &[domain::Split]) -> Value {
    json!({
        "totalDistanceKm": domain::total_distance(splits),
        "totalDurationSec": domain::total_duration(splits),
        "splits": splits.iter().map(dto::Split::from).collect::<Vec<_>>(),
    })
}

pub fn splits_table(splits: &[domain::Split]) -> String {
    let header = format!("{:>5}  {:>8}  {:>8}  {:>8}\n", "#", "km", "time", "pace");
    let rows = splits
        .iter()
        .map(|split| {
            format!(
                "{:>5}  {:>8.2}  {:>8}  {:>8}\n",
                split.order,
                split.distance_km,
                duration(f64::from(split.duration_sec)),
                split.pace().map_or_else(|| "-".to_string(), duration),
            )
        })
        .collect::<String>();
    #[allow(clippy::cast_precision_loss)]
    let total_duration = domain::total_duration(splits) as f64;
    let total = format!(
        "{:>5}  {:>8.2}  {:>8}\n",
        "total",
        domain::total_distance(splits),
        duration(total_duration),
    );
    header + &rows + &total
}

/// Scores keyed by exercise and by muscle category.
///
/// `label` names the per-exercise map, so that personal records and best sets can be told
/// apart in the output.
pub fn scores_json(
    label: &str,
    by_exercise: &HashMap<String, BestSet>,
    top_by_category: &BTreeMap<MuscleCategory, Vec<BestSet>>,
) -> Value {
    let by_exercise = by_exercise
        .iter()
        .map(|(exercise_id, best_set)| (exercise_id.clone(), dto::LiftAttempt::from(best_set)))
        .collect::<BTreeMap<_, _>>();
    let top_by_category = top_by_category
        .iter()
        .map(|(category, best_sets)| {
            (
                category.to_string(),
                best_sets
                    .iter()
                    .map(dto::LiftAttempt::from)
                    .collect::<Vec<_>>(),
            )
        })
        .collect::<BTreeMap<_, _>>();
    let mut scores = Map::new();
    scores.insert(label.to_string(), json!(by_exercise));
    scores.insert("topByCategory".to_string(), json!(top_by_category));
    Value::Object(scores)
}

pub fn scores_table(top_by_category: &BTreeMap<MuscleCategory, Vec<BestSet>>) -> String {
    top_by_category
        .iter()
        .map(|(category, best_sets)| {
            let rows = if best_sets.is_empty() {
                "  -\n".to_string()
            } else {
                (1..)
                    .zip(best_sets)
                    .map(|(rank, best_set)| {
                        format!(
                            "  {rank}. {} {} kg x {} ({})\n",
                            best_set.exercise_id, best_set.weight_kg, best_set.reps, best_set.date
                        )
                    })
                    .collect::<String>()
            };
            format!("{}\n{rows}", category.name())
        })
        .collect()
}

fn duration(seconds: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let seconds = seconds.round() as u64;
    if seconds >= 3600 {
        format!(
            "{}:{:02}:{:02}",
            seconds / 3600,
            seconds % 3600 / 60,
            seconds % 60
        )
    } else {
        format!("{}:{:02}", seconds / 60, seconds % 60)
    }
}
