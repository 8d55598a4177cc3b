// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::LeaveRecord;
use serde::Serialize;

/// Headline figures for a filtered record set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
pub struct SummaryMetrics {
    /// Number of requests in the set.
    pub total_requests: usize,
    /// Mean requested days, skipping requests without a stated value.
    pub mean_requested_days: Option<f64>,
    /// Share of requests that were approved, in percent.
    pub approved_percentage: f64,
}

/// Computes the summary cards for a record set.
///
/// Empty input yields zero requests, no mean and `0.0` percent.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn summary_metrics(records: &[LeaveRecord]) -> SummaryMetrics {
    if records.is_empty() {
        return SummaryMetrics::default();
    }

    let stated: Vec<f64> = records.iter().filter_map(|r| r.requested_days).collect();
    let approved: usize = records.iter().filter(|r| r.is_approved()).count();

    SummaryMetrics {
        total_requests: records.len(),
        mean_requested_days: if stated.is_empty() {
            None
        } else {
            Some(stated.iter().sum::<f64>() / stated.len() as f64)
        },
        approved_percentage: approved as f64 / records.len() as f64 * 100.0,
    }
}
