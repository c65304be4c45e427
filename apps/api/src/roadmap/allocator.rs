//! Roadmap allocation: partitions a role's ordered milestones across a
//! requested duration.
//!
//! Two policies, used by different endpoints:
//! - `allocate_weeks`: groups milestones into week buckets, spreading any
//!   remainder into the earliest weeks so every week carries a near-equal
//!   load.
//! - `allocate_day_ranges`: maps each milestone to a contiguous day window;
//!   the final window is clamped to the requested duration rather than
//!   rebalanced.
//!
//! Both are pure functions of their inputs. The concatenation of the
//! returned buckets' milestones always reproduces the input sequence
//! exactly, with order preserved and nothing duplicated or dropped.

use serde::Serialize;
use thiserror::Error;

use crate::models::roadmap::Milestone;

/// Summary text used when none of a week's milestones carry a title.
const FALLBACK_SUMMARY: &str = "Deep practice and review";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AllocationError {
    #[error("duration must be a positive number of days")]
    InvalidDuration,
}

/// A week's worth of milestones.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekBucket {
    /// Display label, e.g. "Week 3".
    pub label: String,
    /// Comma-joined milestone titles, or a fallback when all are untitled.
    pub summary: String,
    pub milestones: Vec<Milestone>,
}

/// A single milestone mapped onto a contiguous day window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayRangeBucket {
    pub milestone: Milestone,
    pub start_day: u32,
    pub end_day: u32,
    /// Display string, e.g. "Days 8-14".
    pub label: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Week-bucketed allocation
// ────────────────────────────────────────────────────────────────────────────

/// Splits `milestones` into evenly loaded week buckets for a duration given
/// in days.
///
/// The week count is `duration_days / 7`, clamped to `1..=milestones.len()`:
/// never more buckets than milestones, never fewer than one. When milestones
/// don't divide evenly, the earliest weeks take one extra.
pub fn allocate_weeks(
    milestones: Vec<Milestone>,
    duration_days: u32,
) -> Result<Vec<WeekBucket>, AllocationError> {
    if duration_days == 0 {
        return Err(AllocationError::InvalidDuration);
    }
    if milestones.is_empty() {
        return Ok(Vec::new());
    }

    let total = milestones.len();
    let num_weeks = (duration_days as usize / 7).clamp(1, total);

    let mut buckets = Vec::with_capacity(num_weeks);
    let mut rest = milestones;
    for (index, take) in bucket_sizes(total, num_weeks).into_iter().enumerate() {
        let tail = rest.split_off(take.min(rest.len()));
        let chunk = std::mem::replace(&mut rest, tail);
        buckets.push(WeekBucket {
            label: format!("Week {}", index + 1),
            summary: summarize(&chunk),
            milestones: chunk,
        });
    }

    // Guard against integer-division under-accounting: any stragglers go to
    // the last bucket and their titles onto its summary.
    if !rest.is_empty() {
        if let Some(last) = buckets.last_mut() {
            let extra_titles = joined_titles(&rest);
            if !extra_titles.is_empty() {
                last.summary = format!("{}, {}", last.summary, extra_titles);
            }
            last.milestones.append(&mut rest);
        }
    }

    Ok(buckets)
}

/// Sizes for distributing `total` items into `buckets` groups, remainder to
/// the front: the first `total % buckets` groups take one extra item.
fn bucket_sizes(total: usize, buckets: usize) -> Vec<usize> {
    let base = total / buckets;
    let remainder = total % buckets;
    (1..=buckets)
        .map(|i| base + usize::from(i <= remainder))
        .collect()
}

fn summarize(milestones: &[Milestone]) -> String {
    let titles = joined_titles(milestones);
    if titles.is_empty() {
        FALLBACK_SUMMARY.to_string()
    } else {
        titles
    }
}

fn joined_titles(milestones: &[Milestone]) -> String {
    milestones
        .iter()
        .map(|m| m.title.as_str())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

// ────────────────────────────────────────────────────────────────────────────
// Day-range allocation
// ────────────────────────────────────────────────────────────────────────────

/// Maps each milestone to a day window of `duration_days / len` days,
/// walking from day 1.
///
/// No remainder redistribution happens here: the `min` clamp keeps every
/// window inside `duration_days`, and an uneven division compresses the last
/// window instead of erroring. When there are more milestones than days the
/// division yields zero-width windows, which is accepted as-is.
pub fn allocate_day_ranges(
    milestones: Vec<Milestone>,
    duration_days: u32,
) -> Result<Vec<DayRangeBucket>, AllocationError> {
    if duration_days == 0 {
        return Err(AllocationError::InvalidDuration);
    }
    if milestones.is_empty() {
        return Ok(Vec::new());
    }

    let days_per_milestone = duration_days / milestones.len() as u32;

    let mut buckets = Vec::with_capacity(milestones.len());
    let mut current_day: u32 = 1;
    for milestone in milestones {
        let end_day = (current_day + days_per_milestone - 1).min(duration_days);
        buckets.push(DayRangeBucket {
            label: format!("Days {current_day}-{end_day}"),
            start_day: current_day,
            end_day,
            milestone,
        });
        current_day = end_day + 1;
    }

    Ok(buckets)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_milestone(title: &str) -> Milestone {
        Milestone {
            title: title.to_string(),
            details: format!("{title} details"),
            outcomes: vec![format!("{title} outcome")],
            resources: vec![],
        }
    }

    fn make_milestones(count: usize) -> Vec<Milestone> {
        (1..=count).map(|i| make_milestone(&format!("M{i}"))).collect()
    }

    fn titles(milestones: &[Milestone]) -> Vec<String> {
        milestones.iter().map(|m| m.title.clone()).collect()
    }

    // ── week buckets ────────────────────────────────────────────────────────

    #[test]
    fn test_weeks_partition_preserves_input() {
        let input = make_milestones(7);
        let expected = titles(&input);
        let weeks = allocate_weeks(input, 21).unwrap();
        let concatenated: Vec<String> = weeks
            .iter()
            .flat_map(|w| w.milestones.iter().map(|m| m.title.clone()))
            .collect();
        assert_eq!(concatenated, expected);
    }

    #[test]
    fn test_weeks_remainder_goes_to_front() {
        // 7 milestones over 3 weeks: sizes must be [3, 2, 2]
        let weeks = allocate_weeks(make_milestones(7), 21).unwrap();
        let sizes: Vec<usize> = weeks.iter().map(|w| w.milestones.len()).collect();
        assert_eq!(sizes, vec![3, 2, 2]);
    }

    #[test]
    fn test_weeks_never_exceed_milestone_count() {
        // 1000 days would give 142 weeks, but only 5 milestones exist
        let weeks = allocate_weeks(make_milestones(5), 1000).unwrap();
        assert_eq!(weeks.len(), 5);
        assert!(weeks.iter().all(|w| w.milestones.len() == 1));
    }

    #[test]
    fn test_weeks_at_least_one_bucket() {
        // 3 days is less than a week; everything lands in Week 1
        let weeks = allocate_weeks(make_milestones(4), 3).unwrap();
        assert_eq!(weeks.len(), 1);
        assert_eq!(weeks[0].milestones.len(), 4);
        assert_eq!(weeks[0].label, "Week 1");
    }

    #[test]
    fn test_weeks_labels_are_sequential() {
        let weeks = allocate_weeks(make_milestones(6), 21).unwrap();
        let labels: Vec<&str> = weeks.iter().map(|w| w.label.as_str()).collect();
        assert_eq!(labels, vec!["Week 1", "Week 2", "Week 3"]);
    }

    #[test]
    fn test_weeks_summary_joins_titles() {
        let weeks = allocate_weeks(make_milestones(2), 7).unwrap();
        assert_eq!(weeks[0].summary, "M1, M2");
    }

    #[test]
    fn test_weeks_summary_skips_empty_titles() {
        let milestones = vec![make_milestone(""), make_milestone("M2")];
        let weeks = allocate_weeks(milestones, 7).unwrap();
        assert_eq!(weeks[0].summary, "M2");
    }

    #[test]
    fn test_weeks_summary_fallback_when_untitled() {
        let milestones = vec![make_milestone(""), make_milestone("")];
        let weeks = allocate_weeks(milestones, 7).unwrap();
        assert_eq!(weeks[0].summary, "Deep practice and review");
    }

    #[test]
    fn test_weeks_empty_input_yields_no_buckets() {
        assert!(allocate_weeks(vec![], 30).unwrap().is_empty());
    }

    #[test]
    fn test_weeks_zero_duration_rejected() {
        assert_eq!(
            allocate_weeks(make_milestones(3), 0),
            Err(AllocationError::InvalidDuration)
        );
    }

    #[test]
    fn test_weeks_deterministic() {
        let a = allocate_weeks(make_milestones(9), 60).unwrap();
        let b = allocate_weeks(make_milestones(9), 60).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_bucket_sizes_remainder_to_front() {
        assert_eq!(bucket_sizes(7, 3), vec![3, 2, 2]);
        assert_eq!(bucket_sizes(6, 3), vec![2, 2, 2]);
        assert_eq!(bucket_sizes(5, 4), vec![2, 1, 1, 1]);
    }

    // ── day ranges ──────────────────────────────────────────────────────────

    #[test]
    fn test_day_ranges_even_coverage() {
        // 4 milestones over 10 days: 2 days each, windows 1-2, 3-4, 5-6, 7-8
        let buckets = allocate_day_ranges(make_milestones(4), 10).unwrap();
        let windows: Vec<(u32, u32)> = buckets.iter().map(|b| (b.start_day, b.end_day)).collect();
        assert_eq!(windows, vec![(1, 2), (3, 4), (5, 6), (7, 8)]);
        assert_eq!(buckets[0].label, "Days 1-2");
        assert!(buckets.iter().all(|b| b.end_day <= 10));
    }

    #[test]
    fn test_day_ranges_one_bucket_per_milestone() {
        let input = make_milestones(3);
        let expected = titles(&input);
        let buckets = allocate_day_ranges(input, 30).unwrap();
        assert_eq!(buckets.len(), 3);
        let got: Vec<String> = buckets.iter().map(|b| b.milestone.title.clone()).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_day_ranges_exact_division_fills_duration() {
        let buckets = allocate_day_ranges(make_milestones(3), 30).unwrap();
        assert_eq!(buckets.last().unwrap().end_day, 30);
        // windows are contiguous
        for pair in buckets.windows(2) {
            assert_eq!(pair[1].start_day, pair[0].end_day + 1);
        }
    }

    #[test]
    fn test_day_ranges_more_milestones_than_days() {
        // 4 milestones over 2 days: division yields zero-width windows,
        // accepted as-is rather than erroring
        let buckets = allocate_day_ranges(make_milestones(4), 2).unwrap();
        assert_eq!(buckets.len(), 4);
        assert_eq!(buckets[0].start_day, 1);
        assert_eq!(buckets[0].end_day, 0);
        assert_eq!(buckets[0].label, "Days 1-0");
    }

    #[test]
    fn test_day_ranges_end_never_exceeds_duration() {
        for count in 1..=8 {
            let buckets = allocate_day_ranges(make_milestones(count), 10).unwrap();
            assert!(buckets.iter().all(|b| b.end_day <= 10));
        }
    }

    #[test]
    fn test_day_ranges_empty_input_yields_no_buckets() {
        assert!(allocate_day_ranges(vec![], 30).unwrap().is_empty());
    }

    #[test]
    fn test_day_ranges_zero_duration_rejected() {
        assert_eq!(
            allocate_day_ranges(make_milestones(2), 0),
            Err(AllocationError::InvalidDuration)
        );
    }

    #[test]
    fn test_day_ranges_deterministic() {
        let a = allocate_day_ranges(make_milestones(5), 45).unwrap();
        let b = allocate_day_ranges(make_milestones(5), 45).unwrap();
        assert_eq!(a, b);
    }
}
