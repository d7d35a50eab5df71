use std::{
    fs,
    io::{Read, Write},
    path::Path,
};

use anyhow::{Context, Result};
use forma_domain::{self as domain, RunningService, Service, WorkoutScoringService};
use log::{info, warn};
use serde::de::DeserializeOwned;

use crate::{
    cli::{Cli, Command},
    dto,
    output::{self, Format},
};

pub fn run(cli: &Cli, input: impl Read, out: &mut impl Write) -> Result<()> {
    let service = Service;

    match &cli.command {
        Command::Splits {
            distance_km,
            duration,
        } => {
            let splits = service.generate_splits(*distance_km, *duration);
            if splits.is_empty() {
                warn!("no splits for a distance of {distance_km} km");
            }
            match cli.format {
                Format::Json => write_json(out, &output::splits_json(&splits)),
                Format::Table => write_text(out, &output::splits_table(&splits)),
            }
        }
        Command::Score { input: path, top, pr } => {
            let attempts: Vec<dto::LiftAttempt> = read_json(path.as_deref(), input)?;
            let attempts = attempts
                .into_iter()
                .map(domain::LiftAttempt::try_from)
                .collect::<Result<Vec<_>, _>>()
                .context("invalid lift attempt")?;
            check_dates(&service, &attempts);
            score(&service, &attempts, *top, *pr, cli.format, out)
        }
        Command::Workout { input: path, top } => {
            let workout: dto::Workout = read_json(path.as_deref(), input)?;
            let workout = domain::Workout::try_from(workout).context("invalid workout")?;
            if let Err(err) = service.validate_date(&workout.date) {
                warn!("{err}");
            }
            let attempts = service.workout_attempts(&workout);
            score(&service, &attempts, *top, false, cli.format, out)
        }
        Command::CheckSplits { input: path } => {
            let splits: Vec<dto::Split> = read_json(path.as_deref(), input)?;
            let splits = splits
                .into_iter()
                .map(domain::Split::from)
                .collect::<Vec<_>>();
            service
                .validate_splits(&splits)
                .context("invalid splits")?;
            match cli.format {
                Format::Json => write_json(out, &output::splits_json(&splits)),
                Format::Table => write_text(out, &output::splits_table(&splits)),
            }
        }
    }
}

fn score(
    service: &Service,
    attempts: &[domain::LiftAttempt],
    top: usize,
    pr: bool,
    format: Format,
    out: &mut impl Write,
) -> Result<()> {
    let (label, by_exercise) = if pr {
        ("prByExercise", service.pr_by_exercise(attempts))
    } else {
        ("bestByExercise", service.best_set_by_exercise(attempts))
    };
    info!(
        "scored {} lift attempts of {} exercises",
        attempts.len(),
        by_exercise.len()
    );
    let top_by_category = service.top_n_by_category(&by_exercise, top);

    match format {
        Format::Json => write_json(
            out,
            &output::scores_json(label, &by_exercise, &top_by_category),
        ),
        Format::Table => write_text(out, &output::scores_table(&top_by_category)),
    }
}

/// Malformed dates are reported, but scoring still uses the attempts as given.
fn check_dates(service: &Service, attempts: &[domain::LiftAttempt]) {
    for attempt in attempts {
        if attempt.date.trim().is_empty() {
            continue;
        }
        if let Err(err) = service.validate_date(&attempt.date) {
            warn!("{}: {err}", attempt.exercise_id);
        }
    }
}

fn read_json<T: DeserializeOwned>(path: Option<&Path>, mut stdin: impl Read) -> Result<T> {
    let (content, source) = match path {
        Some(path) if path != Path::new("-") => (
            fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?,
            path.display().to_string(),
        ),
        _ => {
            let mut content = String::new();
            stdin
                .read_to_string(&mut content)
                .context("failed to read stdin")?;
            (content, "stdin".to_string())
        }
    };
    serde_json::from_str(&content).with_context(|| format!("failed to parse {source}"))
}

fn write_json(out: &mut impl Write, value: &serde_json::Value) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn write_text(out: &mut impl Write, text: &str) -> Result<()> {
    out.write_all(text.as_bytes())?;
    Ok(())
}
