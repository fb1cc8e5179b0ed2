//! Systematic index lookup and the per-`(k, J)` source schedule cache.
//!
//! The systematic index `J(k)` must make the constraint matrix for source
//! ids `0..k` non-singular, so that encoding ids `0..k` reproduces the
//! source symbols. `J(k)` is read from [`SYSTEMATIC_INDEX`]; nothing is
//! searched at run time.
//!
//! The schedule of the source matrix depends only on `(k, J)` and is what
//! every encoder for that block size replays, so it is computed once per
//! key and shared. Each key owns its own slot: concurrent first uses of
//! the same key wait for a single elimination, different keys do not
//! contend beyond the map lookup.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::raptor::inactivation::{InactivationScheduler, ScheduleStats};
use crate::raptor::matrix::MatrixBuilder;
use crate::raptor::params::{ParameterSet, MAX_K, MIN_K};
use crate::raptor::schedule::Schedule;
use crate::tracing_compat::debug;

pub use crate::raptor::indices::{PUBLISHED_MAX_K, SYSTEMATIC_INDEX};

/// Schedule for source ids `0..k` together with its statistics.
#[derive(Debug)]
pub struct SourceSchedule {
    /// Recorded elimination.
    pub schedule: Schedule,
    /// Statistics of the elimination that produced it.
    pub stats: ScheduleStats,
}

type Slot = Arc<Mutex<Option<Arc<SourceSchedule>>>>;

fn schedule_slots() -> &'static Mutex<HashMap<(usize, u32), Slot>> {
    static SLOTS: OnceLock<Mutex<HashMap<(usize, u32), Slot>>> = OnceLock::new();
    SLOTS.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Systematic index `J(k)`.
///
/// # Errors
///
/// Returns [`Error::Parameter`] if `k` is outside `[4, 8192]`.
pub fn systematic_index(k: usize) -> Result<u32> {
    if !(MIN_K..=MAX_K).contains(&k) {
        return Err(Error::Parameter {
            k,
            reason: "k must lie in [4, 8192]",
        });
    }
    Ok(u32::from(SYSTEMATIC_INDEX[k - MIN_K]))
}

/// Schedule for source ids `0..k` under `params`, computed once per
/// `(k, J)`.
///
/// # Errors
///
/// Returns [`Error::RankDeficiency`] if `params.systematic_index` does not
/// make the source matrix non-singular. A failed key is retried on the
/// next call.
pub fn systematic_schedule(params: &ParameterSet) -> Result<Arc<SourceSchedule>> {
    let key = (params.k, params.systematic_index);
    let slot = Arc::clone(schedule_slots().lock().entry(key).or_default());

    let mut entry = slot.lock();
    if let Some(cached) = entry.as_ref() {
        return Ok(Arc::clone(cached));
    }
    let computed = Arc::new(eliminate_source(params)?);
    debug!(
        k = params.k,
        index = params.systematic_index,
        stats = %computed.stats,
        "cached source schedule"
    );
    *entry = Some(Arc::clone(&computed));
    Ok(computed)
}

/// Source ids `0..k`.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn source_ids(k: usize) -> Vec<u32> {
    (0..k as u32).collect()
}

fn eliminate_source(params: &ParameterSet) -> Result<SourceSchedule> {
    let a = MatrixBuilder::new(params).constraint_matrix(&source_ids(params.k));
    let (schedule, stats) = InactivationScheduler::new(params).run(a)?;
    Ok(SourceSchedule { schedule, stats })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn source_rank(k: usize, j: u32) -> (usize, usize) {
        let params = ParameterSet::with_systematic_index(k, j).unwrap();
        let a = MatrixBuilder::new(&params).constraint_matrix(&source_ids(k));
        (a.rank(), params.l)
    }

    #[test]
    fn published_prefix() {
        let expected = [18, 14, 61, 46, 14, 22, 20, 40, 48, 1, 29];
        for (k, &j) in (4..).zip(expected.iter()) {
            assert_eq!(systematic_index(k).unwrap(), j, "k={k}");
        }
        assert_eq!(systematic_index(136).unwrap(), 81);
    }

    #[test]
    fn index_rejects_invalid_k() {
        assert!(matches!(systematic_index(2), Err(Error::Parameter { .. })));
        assert!(matches!(systematic_index(9000), Err(Error::Parameter { .. })));
        assert!(systematic_index(MAX_K).is_ok());
    }

    #[test]
    fn published_entries_are_full_rank() {
        for k in MIN_K..=PUBLISHED_MAX_K {
            let (rank, l) = source_rank(k, systematic_index(k).unwrap());
            assert_eq!(rank, l, "k={k}");
        }
    }

    #[test]
    fn extended_entries_are_smallest_full_rank_index() {
        for k in [PUBLISHED_MAX_K + 1, 200, 333, 512] {
            let j = systematic_index(k).unwrap();
            let (rank, l) = source_rank(k, j);
            assert_eq!(rank, l, "k={k}");
            for smaller in 0..j {
                let (rank, l) = source_rank(k, smaller);
                assert!(rank < l, "k={k}: index {smaller} is already full rank");
            }
        }
    }

    #[test]
    #[ignore = "eliminates the source matrix for every k"]
    fn every_entry_is_full_rank() {
        for k in MIN_K..=MAX_K {
            let params = ParameterSet::new(k).unwrap();
            assert!(systematic_schedule(&params).is_ok(), "k={k}");
        }
    }

    #[test]
    fn schedule_is_shared() {
        let params = ParameterSet::new(20).unwrap();
        let first = systematic_schedule(&params).unwrap();
        let second = systematic_schedule(&params).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.schedule.column_count(), params.l);
        assert_eq!(first.schedule.row_count(), params.l);
    }

    #[test]
    fn concurrent_first_use_computes_once() {
        let params = ParameterSet::new(57).unwrap();
        let handles: Vec<_> = (0..4)
            .map(|_| thread::spawn(move || systematic_schedule(&params).unwrap()))
            .collect();
        let schedules: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for schedule in &schedules[1..] {
            assert!(Arc::ptr_eq(&schedules[0], schedule));
        }
    }

    #[test]
    fn singular_override_is_rejected_and_not_cached() {
        // Index 0 leaves the k=4 source matrix singular.
        let params = ParameterSet::with_systematic_index(4, 0).unwrap();
        assert!(matches!(
            systematic_schedule(&params),
            Err(Error::RankDeficiency { .. })
        ));
        assert!(matches!(
            systematic_schedule(&params),
            Err(Error::RankDeficiency { .. })
        ));
    }
}
