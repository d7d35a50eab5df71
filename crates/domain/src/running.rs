use log::debug;

/// Largest distance a trailing partial split may cover.
pub const MAX_REMAINDER_KM: f64 = 0.99;

/// Partial distances below this are not worth a split of their own.
pub const MIN_REMAINDER_KM: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Split {
    pub order: u32,
    pub distance_km: f64,
    pub duration_sec: u32,
}

impl Split {
    /// Seconds per kilometer, if a duration has been assigned.
    #[must_use]
    pub fn pace(&self) -> Option<f64> {
        if self.duration_sec == 0 || self.distance_km <= 0.0 {
            return None;
        }
        Some(f64::from(self.duration_sec) / self.distance_km)
    }
}

/// Divide a run into kilometer splits.
///
/// Every full kilometer becomes a split of 1 km. The rest of the distance is rounded to two
/// decimals and capped at 0.99 km; it becomes a trailing split if it is at least 0.01 km.
///
/// If a positive duration is given, it is distributed proportionally to the distance of
/// each split. The proportional shares are truncated to whole seconds. Missing seconds are
/// spread evenly, with the leftover seconds going to the last splits. Excess seconds, caused
/// by a remainder that was rounded up, are taken from the last splits. The durations of all
/// splits always add up to the total duration rounded to whole seconds.
///
/// Invalid distances and distances of `u32::MAX` km or more result in no splits, invalid
/// durations leave all durations at 0.
#[must_use]
pub fn generate_splits(total_distance_km: f64, total_duration_sec: Option<f64>) -> Vec<Split> {
    if !total_distance_km.is_finite() || total_distance_km <= 0.0 {
        return vec![];
    }

    let full_km = total_distance_km.floor();
    if full_km >= f64::from(u32::MAX) {
        debug!("distance of {total_distance_km} km has too many splits");
        return vec![];
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let full_km = full_km as u32;
    let remainder = round_to_hundredths(total_distance_km - f64::from(full_km))
        .clamp(0.0, MAX_REMAINDER_KM);

    let mut splits = (1..=full_km)
        .map(|order| Split {
            order,
            distance_km: 1.0,
            duration_sec: 0,
        })
        .collect::<Vec<_>>();

    if remainder >= MIN_REMAINDER_KM {
        splits.push(Split {
            order: full_km + 1,
            distance_km: remainder,
            duration_sec: 0,
        });
    } else if total_distance_km > f64::from(full_km) {
        debug!(
            "dropped remainder of {:.3} km",
            total_distance_km - f64::from(full_km)
        );
    }

    if let Some(total) = total_duration_sec.and_then(whole_seconds) {
        distribute_duration(&mut splits, total_distance_km, total);
    }

    splits
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn whole_seconds(duration_sec: f64) -> Option<u32> {
    if !duration_sec.is_finite() || duration_sec <= 0.0 {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let seconds = duration_sec.round().min(f64::from(u32::MAX)) as u32;
    (seconds > 0).then_some(seconds)
}

fn distribute_duration(splits: &mut [Split], total_distance_km: f64, total_sec: u32) {
    if splits.is_empty() {
        return;
    }

    for split in splits.iter_mut() {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let share = (split.distance_km / total_distance_km * f64::from(total_sec)).floor() as u32;
        split.duration_sec = share;
    }

    let allocated = total_duration(splits);
    let total = u64::from(total_sec);

    if allocated < total {
        let missing = total - allocated;
        let count = splits.len() as u64;
        let (each, rest) = (missing / count, missing % count);
        if each > 0 {
            debug!("distributing {missing} s over {count} splits");
        }
        for (i, split) in (0..).zip(splits.iter_mut().rev()) {
            let extra = each + u64::from(i < rest);
            split.duration_sec = u32::try_from(u64::from(split.duration_sec) + extra)
                .unwrap_or(u32::MAX);
        }
    } else if allocated > total {
        let mut excess = allocated - total;
        debug!("removing {excess} s of excess duration");
        for split in splits.iter_mut().rev() {
            let removed = u32::try_from(excess)
                .map_or(split.duration_sec, |excess| excess.min(split.duration_sec));
            split.duration_sec -= removed;
            excess -= u64::from(removed);
            if excess == 0 {
                break;
            }
        }
    }
}

#[must_use]
pub fn total_distance(splits: &[Split]) -> f64 {
    splits.iter().map(|s| s.distance_km).sum()
}

#[must_use]
pub fn total_duration(splits: &[Split]) -> u64 {
    splits.iter().map(|s| u64::from(s.duration_sec)).sum()
}

/// Check manually edited splits.
///
/// Splits must be numbered consecutively starting at 1 and cover between 0 and 1 km each.
pub fn validate_splits(splits: &[Split]) -> Result<(), SplitError> {
    for (position, split) in (1..).zip(splits) {
        if split.order != position {
            return Err(SplitError::Order {
                position,
                order: split.order,
            });
        }
        if !split.distance_km.is_finite() || split.distance_km <= 0.0 || split.distance_km > 1.0 {
            return Err(SplitError::Distance {
                position,
                distance_km: split.distance_km,
            });
        }
    }
    Ok(())
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SplitError {
    #[error("Split {position} must have order {position} (got {order})")]
    Order { position: u32, order: u32 },
    #[error("Split {position} must cover more than 0 and at most 1 km (got {distance_km})")]
    Distance { position: u32, distance_km: f64 },
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    use super::*;

    fn split(order: u32, distance_km: f64, duration_sec: u32) -> Split {
        Split {
            order,
            distance_km,
            duration_sec,
        }
    }

    #[test]
    fn test_generate_splits_full_km_and_remainder() {
        let splits = generate_splits(5.5, None);

        assert_eq!(splits.len(), 6);
        for (i, s) in splits.iter().take(5).enumerate() {
            assert_eq!(s.order, u32::try_from(i).unwrap() + 1);
            assert_approx_eq!(s.distance_km, 1.0);
            assert_eq!(s.duration_sec, 0);
        }
        assert_eq!(splits[5].order, 6);
        assert_approx_eq!(splits[5].distance_km, 0.5);
        assert_eq!(splits[5].duration_sec, 0);
    }

    #[test]
    fn test_generate_splits_whole_km() {
        assert_eq!(
            generate_splits(3.0, None),
            vec![split(1, 1.0, 0), split(2, 1.0, 0), split(3, 1.0, 0)]
        );
    }

    #[test]
    fn test_generate_splits_less_than_one_km() {
        let splits = generate_splits(0.5, None);

        assert_eq!(splits.len(), 1);
        assert_eq!(splits[0].order, 1);
        assert_approx_eq!(splits[0].distance_km, 0.5);
    }

    #[rstest]
    #[case::zero(0.0)]
    #[case::negative(-1.0)]
    #[case::nan(f64::NAN)]
    #[case::infinity(f64::INFINITY)]
    #[case::negative_infinity(f64::NEG_INFINITY)]
    #[case::below_minimum(0.004)]
    fn test_generate_splits_invalid_distance(#[case] distance: f64) {
        assert_eq!(generate_splits(distance, Some(600.0)), Vec::<Split>::new());
    }

    #[test]
    fn test_generate_splits_drops_small_remainder() {
        let splits = generate_splits(1.005, None);

        assert_eq!(splits.len(), 1);
        assert_approx_eq!(splits[0].distance_km, 1.0);
    }

    #[test]
    fn test_generate_splits_clamps_remainder() {
        let splits = generate_splits(1.999, None);

        assert_eq!(splits.len(), 2);
        assert!(splits[1].distance_km <= MAX_REMAINDER_KM);
        assert_approx_eq!(splits[1].distance_km, 0.99);
    }

    #[test]
    fn test_generate_splits_distributes_duration() {
        let splits = generate_splits(5.5, Some(1980.0));

        assert_eq!(splits.len(), 6);
        assert_eq!(total_duration(&splits), 1980);
        assert!(splits[0].duration_sec > 0);
        assert!(splits[5].duration_sec < splits[0].duration_sec);
        assert!(splits.iter().take(5).all(|s| s.duration_sec.abs_diff(360) <= 1));
        assert!(splits[5].duration_sec.abs_diff(180) <= 1);
    }

    #[test]
    fn test_generate_splits_adds_missing_seconds_to_last_splits() {
        // 3 * floor(1000 / 3) = 999
        assert_eq!(
            generate_splits(3.0, Some(1000.0)),
            vec![split(1, 1.0, 333), split(2, 1.0, 333), split(3, 1.0, 334)]
        );
    }

    #[test]
    fn test_generate_splits_keeps_total_when_remainder_is_dropped() {
        let splits = generate_splits(1.005, Some(1000.0));

        assert_eq!(splits, vec![split(1, 1.0, 1000)]);
    }

    #[rstest]
    #[case::rounded_down_remainder(0.0149)]
    #[case::rounded_up_remainder(0.015)]
    #[case::dropped_remainder(1.004)]
    fn test_generate_splits_settles_large_differences(#[case] distance: f64) {
        let splits = generate_splits(distance, Some(4e9));

        assert_eq!(splits.len(), 1);
        assert_eq!(splits[0].duration_sec, 4_000_000_000);
    }

    #[test]
    fn test_distribute_duration_spreads_missing_seconds() {
        let mut splits = vec![split(1, 1.0, 0), split(2, 1.0, 0), split(3, 1.0, 0)];
        distribute_duration(&mut splits, 20.0, 1000);

        // floor shares 50 each, 850 missing
        assert_eq!(
            splits.iter().map(|s| s.duration_sec).collect::<Vec<_>>(),
            vec![333, 333, 334]
        );
    }

    #[test]
    fn test_generate_splits_removes_excess_seconds() {
        // 0.556 km is rounded up to 0.56 km: floor(642.67) + floor(359.90) = 1001
        let splits = generate_splits(1.556, Some(1000.0));

        assert_eq!(splits.len(), 2);
        assert_eq!(splits[0].duration_sec, 642);
        assert_eq!(splits[1].duration_sec, 358);
    }

    #[rstest]
    #[case::u32_max(f64::from(u32::MAX))]
    #[case::beyond_u32(5e9)]
    fn test_generate_splits_too_many_splits(#[case] distance: f64) {
        assert_eq!(generate_splits(distance, Some(600.0)), Vec::<Split>::new());
    }

    #[rstest]
    #[case::zero(Some(0.0))]
    #[case::negative(Some(-100.0))]
    #[case::nan(Some(f64::NAN))]
    #[case::infinity(Some(f64::INFINITY))]
    #[case::rounded_to_zero(Some(0.4))]
    #[case::none(None)]
    fn test_generate_splits_invalid_duration(#[case] duration: Option<f64>) {
        let splits = generate_splits(3.0, duration);

        assert_eq!(splits.len(), 3);
        assert!(splits.iter().all(|s| s.duration_sec == 0));
    }

    #[test]
    fn test_generate_splits_rounds_fractional_duration() {
        assert_eq!(total_duration(&generate_splits(2.0, Some(600.6))), 601);
    }

    #[rstest]
    #[case(split(1, 1.0, 300), Some(300.0))]
    #[case(split(2, 0.5, 150), Some(300.0))]
    #[case(split(1, 1.0, 0), None)]
    fn test_split_pace(#[case] split: Split, #[case] expected: Option<f64>) {
        assert_eq!(split.pace(), expected);
    }

    #[test]
    fn test_totals() {
        let splits = vec![split(1, 1.0, 300), split(2, 0.25, 80)];

        assert_approx_eq!(total_distance(&splits), 1.25);
        assert_eq!(total_duration(&splits), 380);
        assert_approx_eq!(total_distance(&[]), 0.0);
    }

    #[rstest]
    #[case::empty(vec![], Ok(()))]
    #[case::valid(vec![split(1, 1.0, 300), split(2, 0.4, 0)], Ok(()))]
    #[case::gap(
        vec![split(1, 1.0, 300), split(3, 0.4, 0)],
        Err(SplitError::Order { position: 2, order: 3 })
    )]
    #[case::not_starting_at_one(
        vec![split(0, 1.0, 300)],
        Err(SplitError::Order { position: 1, order: 0 })
    )]
    #[case::too_long(
        vec![split(1, 1.5, 300)],
        Err(SplitError::Distance { position: 1, distance_km: 1.5 })
    )]
    #[case::empty_distance(
        vec![split(1, 1.0, 300), split(2, 0.0, 0)],
        Err(SplitError::Distance { position: 2, distance_km: 0.0 })
    )]
    fn test_validate_splits(#[case] splits: Vec<Split>, #[case] expected: Result<(), SplitError>) {
        assert_eq!(validate_splits(&splits), expected);
    }

    proptest! {
        #[test]
        fn test_generate_splits_preserves_total_duration(
            distance in 0.01f64..100.0,
            duration in 1u32..100_000,
        ) {
            let splits = generate_splits(distance, Some(f64::from(duration)));
            prop_assert_eq!(total_duration(&splits), u64::from(duration));
        }

        #[test]
        fn test_generate_splits_structure(distance in 0.01f64..100.0) {
            let splits = generate_splits(distance, None);
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let full_km = distance.floor() as usize;
            prop_assert!(splits.len() == full_km || splits.len() == full_km + 1);
            prop_assert!(validate_splits(&splits).is_ok());
            prop_assert!(splits.iter().take(full_km).all(|s| (s.distance_km - 1.0).abs() < f64::EPSILON));
            if let Some(last) = splits.get(full_km) {
                prop_assert!(last.distance_km >= MIN_REMAINDER_KM && last.distance_km <= MAX_REMAINDER_KM);
            }
        }
    }
}
