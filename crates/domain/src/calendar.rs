use strum::{AsRefStr, Display};

#[derive(AsRefStr, Display, Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    #[default]
    Draft,
    Completed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionMeta {
    pub status: SessionStatus,
    pub injury_mode: bool,
}

/// Combined state of the workout and the run of one day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayOverview {
    pub workout: Option<SessionMeta>,
    pub run: Option<SessionMeta>,
    pub combined_status: Option<SessionStatus>,
    pub combined_injury: Option<bool>,
}

impl DayOverview {
    /// A day only counts as completed if it has both a completed workout and a completed run.
    #[must_use]
    pub fn new(workout: Option<SessionMeta>, run: Option<SessionMeta>) -> Self {
        let (combined_status, combined_injury) = if workout.is_none() && run.is_none() {
            (None, None)
        } else {
            let completed = |session: Option<SessionMeta>| {
                session.is_some_and(|s| s.status == SessionStatus::Completed)
            };
            let injured = |session: Option<SessionMeta>| session.is_some_and(|s| s.injury_mode);
            (
                Some(if completed(workout) && completed(run) {
                    SessionStatus::Completed
                } else {
                    SessionStatus::Draft
                }),
                Some(injured(workout) || injured(run)),
            )
        };

        Self {
            workout,
            run,
            combined_status,
            combined_injury,
        }
    }
}
