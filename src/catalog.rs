// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Repository catalog - the validated, ordered record set behind every graph

use crate::activity::activity_score;
use crate::error::Error;
use crate::types::RepoRecord;
use anyhow::{Context, Result};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

/// Ordered repository records with a `full_name` lookup
///
/// Input order is preserved; it determines first-seen ordering everywhere
/// downstream (topic index order, edge iteration order). If two records
/// carry the same `full_name` the later one wins the lookup entry.
#[derive(Debug)]
pub struct RepoCatalog {
    records: Vec<RepoRecord>,
    by_name: HashMap<String, usize>,
}

impl RepoCatalog {
    /// Build a catalog from raw records
    ///
    /// Resolves embedded activity metrics into `activity_score` (an explicit
    /// nonzero score wins over the metrics block) and drops the block.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedRecord`] for any record with an empty
    /// `full_name`; such a record cannot be keyed.
    pub fn from_records(mut records: Vec<RepoRecord>) -> Result<Self, Error> {
        let mut by_name = HashMap::with_capacity(records.len());

        for (index, record) in records.iter_mut().enumerate() {
            if record.full_name.is_empty() {
                return Err(Error::MalformedRecord { index });
            }
            if let Some(metrics) = record.activity.take() {
                if record.activity_score == 0.0 {
                    record.activity_score = activity_score(&metrics);
                }
            }
            by_name.insert(record.full_name.clone(), index);
        }

        Ok(Self { records, by_name })
    }

    /// Load a catalog from a JSON array of records
    ///
    /// # Errors
    ///
    /// Fails on unreadable files, invalid JSON, or malformed records.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let records: Vec<RepoRecord> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        let catalog = Self::from_records(records)
            .with_context(|| format!("Invalid record in {}", path.display()))?;
        Ok(catalog)
    }

    /// Look up a record by `full_name`
    #[must_use]
    pub fn get(&self, full_name: &str) -> Option<&RepoRecord> {
        self.by_name.get(full_name).map(|&i| &self.records[i])
    }

    /// Whether a record with this `full_name` exists
    #[must_use]
    pub fn contains(&self, full_name: &str) -> bool {
        self.by_name.contains_key(full_name)
    }

    /// Records in input order
    #[must_use]
    pub fn records(&self) -> &[RepoRecord] {
        &self.records
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Size of the intersection of two repositories' full topic sets
    ///
    /// Zero when either name is unknown. Topic truncation caps apply only
    /// to iteration, never to this count.
    #[must_use]
    pub fn shared_topics(&self, a: &str, b: &str) -> usize {
        let (Some(ra), Some(rb)) = (self.get(a), self.get(b)) else {
            return 0;
        };
        let ta: HashSet<&str> = ra.topics.iter().map(String::as_str).collect();
        rb.topics
            .iter()
            .filter(|t| ta.contains(t.as_str()))
            .collect::<HashSet<_>>()
            .len()
    }
}
