//! Folds reservations and blackout windows into free/partial/full periods.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;

use crate::models::availability::{DayAvailability, PeriodAvailability, SlotStatus};
use crate::utils::time::local_to_utc;

pub const DEFAULT_DAYS: u32 = 7;
pub const MAX_DAYS: u32 = 31;

/// Named periods of the day, as local `[start_hour, end_hour)`.
pub const PERIODS: &[(&str, u32, u32)] = &[("Manhã", 6, 12), ("Tarde", 12, 18), ("Noite", 18, 23)];

pub type Interval = (DateTime<Utc>, DateTime<Utc>);

pub fn build_availability(
    start: NaiveDate,
    days: u32,
    tz: Tz,
    busy: &[Interval],
) -> Vec<DayAvailability> {
    start
        .iter_days()
        .take(days as usize)
        .map(|date| DayAvailability {
            date,
            periods: PERIODS
                .iter()
                .map(|&(label, start_hour, end_hour)| {
                    let from = local_to_utc(date, hour(start_hour), tz);
                    let to = local_to_utc(date, hour(end_hour), tz);
                    PeriodAvailability {
                        label: label.to_string(),
                        start_hour,
                        end_hour,
                        status: period_status(from, to, busy),
                    }
                })
                .collect(),
        })
        .collect()
}

/// UTC span covered by `days` local days starting at `start`.
pub fn window_bounds(start: NaiveDate, days: u32, tz: Tz) -> Interval {
    let end = start
        .checked_add_days(chrono::Days::new(u64::from(days)))
        .unwrap_or(start);
    (
        local_to_utc(start, NaiveTime::MIN, tz),
        local_to_utc(end, NaiveTime::MIN, tz),
    )
}

fn hour(h: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, 0, 0).unwrap_or(NaiveTime::MIN)
}

fn period_status(from: DateTime<Utc>, to: DateTime<Utc>, busy: &[Interval]) -> SlotStatus {
    let mut clipped: Vec<Interval> = busy
        .iter()
        .filter(|(s, e)| *s < to && *e > from)
        .map(|&(s, e)| (s.max(from), e.min(to)))
        .collect();
    if clipped.is_empty() {
        return SlotStatus::Free;
    }
    clipped.sort_by_key(|&(s, _)| s);

    let mut covered = Duration::zero();
    let mut current = clipped[0];
    for &(s, e) in &clipped[1..] {
        if s <= current.1 {
            current.1 = current.1.max(e);
        } else {
            covered += current.1 - current.0;
            current = (s, e);
        }
    }
    covered += current.1 - current.0;

    if covered >= to - from {
        SlotStatus::Full
    } else {
        SlotStatus::Partial
    }
}
