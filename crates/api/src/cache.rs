// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Optional memoization of dashboard builds.
//!
//! Entries are keyed by a blake3 hash of the serialized inputs, so a report
//! is reused only when the records, filter and reference date are
//! identical. Cached and uncached results are the same value.

use crate::dashboard::{DashboardReport, build_dashboard};
use leave_board_domain::{LeaveFilter, RecordStore};
use moka::sync::Cache;
use std::sync::Arc;
use time::Date;
use tracing::{debug, warn};

/// Default number of reports kept.
pub const DEFAULT_CAPACITY: u64 = 64;

/// In-memory cache of built dashboards.
#[derive(Clone)]
pub struct DashboardCache {
    cache: Cache<String, Arc<DashboardReport>>,
}

impl Default for DashboardCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl std::fmt::Debug for DashboardCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardCache")
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}

impl DashboardCache {
    /// Creates a cache holding at most `max_entries` reports.
    #[must_use]
    pub fn new(max_entries: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(max_entries).build(),
        }
    }

    /// Returns the dashboard for these inputs, building it on a miss.
    ///
    /// If the inputs cannot be hashed the report is built without caching.
    #[must_use]
    pub fn get_or_build(
        &self,
        store: &RecordStore,
        filter: &LeaveFilter,
        reference_date: Date,
    ) -> Arc<DashboardReport> {
        let Some(key) = content_key(store, filter, reference_date) else {
            return Arc::new(build_dashboard(store, filter, reference_date));
        };

        self.cache.get_with(key, || {
            debug!("Dashboard cache miss");
            Arc::new(build_dashboard(store, filter, reference_date))
        })
    }

    /// Number of cached reports.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Whether the cache holds no reports.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every cached report.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

fn content_key(store: &RecordStore, filter: &LeaveFilter, reference_date: Date) -> Option<String> {
    match serde_json::to_vec(&(store.records(), filter, reference_date)) {
        Ok(bytes) => Some(blake3::hash(&bytes).to_hex().to_string()),
        Err(e) => {
            warn!(error = %e, "Could not hash dashboard inputs; skipping cache");
            None
        }
    }
}
