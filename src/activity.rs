// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Activity scoring - normalizes raw development counters to a 0-100 score

use crate::types::ActivityMetrics;

/// Compute a composite activity score in [0, 100]
///
/// Weighted sum of four independently clamped sub-scores: commits (40%),
/// merged PRs (20%), issue resolution (20%), contributors (20%). The issue
/// sub-score uses the closed-minus-open *difference*, not a ratio, so a
/// repository with a large open backlog scores zero there even with heavy
/// closed-issue volume. Rounded to two decimal places.
#[must_use]
pub fn activity_score(metrics: &ActivityMetrics) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let (commits, prs, closed, open, contributors) = (
        metrics.commits_total as f64,
        metrics.prs_merged as f64,
        metrics.issues_closed as f64,
        metrics.issues_open as f64,
        metrics.contributors_total as f64,
    );

    let commits_score = (commits / 1000.0).min(1.0) * 40.0;
    let prs_score = (prs / 100.0).min(1.0) * 20.0;
    let issues_score = ((closed - open) / 50.0).clamp(0.0, 1.0) * 20.0;
    let contributors_score = (contributors / 100.0).min(1.0) * 20.0;

    round2(commits_score + prs_score + issues_score + contributors_score)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
