//! Past/upcoming classification of shows.
//!
//! The classification is never stored; it is derived from `start_time` and
//! the caller-supplied "now". A show starting exactly at `now` counts as
//! upcoming, for venues and artists alike.

use serde::Serialize;

use crate::types::Timestamp;

/// Which side of "now" a show falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShowTiming {
    Past,
    Upcoming,
}

impl ShowTiming {
    /// `start_time >= now` is upcoming, anything earlier is past.
    pub fn classify(start_time: Timestamp, now: Timestamp) -> Self {
        if start_time >= now {
            ShowTiming::Upcoming
        } else {
            ShowTiming::Past
        }
    }
}

/// Two disjoint lists produced by [`partition_shows`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionedShows<T> {
    pub past: Vec<T>,
    pub upcoming: Vec<T>,
}

/// Split `shows` around `now`, preserving input order within each side.
pub fn partition_shows<T, F>(shows: Vec<T>, now: Timestamp, start_time: F) -> PartitionedShows<T>
where
    F: Fn(&T) -> Timestamp,
{
    let (upcoming, past): (Vec<T>, Vec<T>) = shows
        .into_iter()
        .partition(|show| ShowTiming::classify(start_time(show), now) == ShowTiming::Upcoming);
    PartitionedShows { past, upcoming }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    fn now() -> Timestamp {
        Utc.with_ymd_and_hms(2026, 5, 21, 21, 30, 0).unwrap()
    }

    #[test]
    fn start_at_now_is_upcoming() {
        assert_eq!(ShowTiming::classify(now(), now()), ShowTiming::Upcoming);
    }

    #[test]
    fn start_before_now_is_past() {
        let start = now() - Duration::seconds(1);
        assert_eq!(ShowTiming::classify(start, now()), ShowTiming::Past);
    }

    #[test]
    fn start_after_now_is_upcoming() {
        let start = now() + Duration::days(30);
        assert_eq!(ShowTiming::classify(start, now()), ShowTiming::Upcoming);
    }

    #[test]
    fn partition_is_disjoint_and_complete() {
        let shows = vec![
            (1, now() - Duration::days(2)),
            (2, now()),
            (3, now() + Duration::hours(1)),
            (4, now() - Duration::minutes(5)),
        ];
        let split = partition_shows(shows, now(), |(_, t)| *t);

        let past: Vec<i32> = split.past.iter().map(|(id, _)| *id).collect();
        let upcoming: Vec<i32> = split.upcoming.iter().map(|(id, _)| *id).collect();
        assert_eq!(past, vec![1, 4]);
        assert_eq!(upcoming, vec![2, 3]);
    }

    #[test]
    fn partition_is_stable_for_a_fixed_now() {
        let shows = vec![(1, now() - Duration::hours(3)), (2, now() + Duration::hours(3))];
        let first = partition_shows(shows.clone(), now(), |(_, t)| *t);
        let second = partition_shows(shows, now(), |(_, t)| *t);
        assert_eq!(first, second);
    }
}
