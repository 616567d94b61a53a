//! Past/upcoming classification of shows.
//!
//! Every place that needs to know whether a show has happened yet goes
//! through [`is_upcoming`], so listing counts and detail pages always agree.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Anything with a start time that can be classified against "now"
pub trait Scheduled {
    fn start_time(&self) -> DateTime<Utc>;
}

/// A show is upcoming only if it starts strictly after `now`.
///
/// A show starting exactly at `now` counts as past.
pub fn is_upcoming(start_time: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    start_time > now
}

/// Shows split into the two disjoint partitions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partitioned<T> {
    pub past: Vec<T>,
    pub upcoming: Vec<T>,
}

impl<T> Default for Partitioned<T> {
    fn default() -> Self {
        Self {
            past: Vec::new(),
            upcoming: Vec::new(),
        }
    }
}

/// Split `shows` into past and upcoming relative to `now`, keeping input order
/// within each partition.
pub fn partition<T, I>(shows: I, now: DateTime<Utc>) -> Partitioned<T>
where
    T: Scheduled,
    I: IntoIterator<Item = T>,
{
    let mut out = Partitioned::default();
    for show in shows {
        if is_upcoming(show.start_time(), now) {
            out.upcoming.push(show);
        } else {
            out.past.push(show);
        }
    }
    out
}
