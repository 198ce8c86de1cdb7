// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Starmap library - topic association graphs for starred repositories
//!
//! This crate turns a flat collection of repository records (name, topics,
//! language, stars, activity) into bounded, weighted association graphs:
//! one size-capped global graph over the whole record set, and depth- and
//! size-capped ego networks grown outward from a single seed repository.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod activity;
pub mod build;
pub mod catalog;
pub mod commands;
pub mod error;
pub mod graph;
pub mod index;
pub mod style;

/// Core data types for repository records and activity metrics
pub mod types {
    use serde::{Deserialize, Deserializer, Serialize};

    /// Language assigned to repositories whose language is absent or null
    pub const UNKNOWN_LANGUAGE: &str = "Unknown";

    /// Raw development-activity counters for one repository
    ///
    /// Produced by the data-acquisition layer; consumed by
    /// [`crate::activity::activity_score`] and not retained afterwards.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ActivityMetrics {
        /// Total commits in the analysis period
        #[serde(default)]
        pub commits_total: u64,
        /// Merged pull requests
        #[serde(default)]
        pub prs_merged: u64,
        /// Closed issues
        #[serde(default)]
        pub issues_closed: u64,
        /// Still-open issues
        #[serde(default)]
        pub issues_open: u64,
        /// Distinct contributors
        #[serde(default)]
        pub contributors_total: u64,
    }

    /// One repository record as materialized by the acquisition/cache layer
    ///
    /// Records are immutable inputs to graph construction. Absent or null
    /// fields fall back to the documented defaults instead of failing.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct RepoRecord {
        /// Upstream numeric ID (informational)
        #[serde(default)]
        pub id: u64,
        /// Globally unique key, `owner/name`
        #[serde(default)]
        pub full_name: String,
        /// Repository owner/namespace
        #[serde(default)]
        pub owner: String,
        /// Repository name
        #[serde(default)]
        pub name: String,
        /// Topical tags, in source order
        #[serde(default)]
        pub topics: Vec<String>,
        /// Composite activity score in [0, 100]
        #[serde(default)]
        pub activity_score: f64,
        /// Star count
        #[serde(default)]
        pub star_count: u64,
        /// Fork count
        #[serde(default)]
        pub fork_count: u64,
        /// Primary language; null or absent becomes "Unknown"
        #[serde(default = "unknown_language", deserialize_with = "language_or_unknown")]
        pub language: String,
        /// Optional embedded raw activity counters; resolved into
        /// `activity_score` when the catalog is built, then dropped
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub activity: Option<ActivityMetrics>,
    }

    fn unknown_language() -> String {
        UNKNOWN_LANGUAGE.to_string()
    }

    fn language_or_unknown<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        let lang = Option::<String>::deserialize(deserializer)?;
        Ok(lang.unwrap_or_else(unknown_language))
    }

    /// Which flavor of graph was built
    ///
    /// Layout and labeling differ between the two; the flag travels beside
    /// the graph rather than inside it.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum GraphKind {
        /// Global topic-association graph over the whole record set
        Association,
        /// Bounded ego network grown from one seed repository
        Ego,
    }

    impl GraphKind {
        /// Short code used in exports and summaries
        #[must_use]
        pub fn code(self) -> &'static str {
            match self {
                Self::Association => "association",
                Self::Ego => "ego",
            }
        }
    }
}

/// Prelude for common imports
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::types::*;
    pub use anyhow::{Context, Result};
}
