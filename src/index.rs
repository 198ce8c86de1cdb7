// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Topic index - reverse mapping from topic to the repositories carrying it

use crate::catalog::RepoCatalog;
use std::collections::HashMap;

/// Mapping from topic to an ordered list of `full_name` values
///
/// Topics appear in first-seen order across the record set, and each topic's
/// member list is in first-seen order too. Both orderings feed directly into
/// edge iteration, so they are part of the reproducibility contract.
/// Built once per construction pass; read-only afterwards.
pub struct TopicIndex {
    entries: Vec<(String, Vec<String>)>,
    positions: HashMap<String, usize>,
}

impl TopicIndex {
    /// Build the index over a catalog
    #[must_use]
    pub fn build(catalog: &RepoCatalog) -> Self {
        let mut entries: Vec<(String, Vec<String>)> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for record in catalog.records() {
            for topic in &record.topics {
                let pos = *positions.entry(topic.clone()).or_insert_with(|| {
                    entries.push((topic.clone(), Vec::new()));
                    entries.len() - 1
                });
                let members = &mut entries[pos].1;
                // A repeated topic within one record must not double-append.
                if members.last().map(String::as_str) != Some(record.full_name.as_str()) {
                    members.push(record.full_name.clone());
                }
            }
        }

        Self { entries, positions }
    }

    /// Members indexed under a topic, empty for unknown topics
    #[must_use]
    pub fn members(&self, topic: &str) -> &[String] {
        self.positions
            .get(topic)
            .map_or(&[], |&pos| self.entries[pos].1.as_slice())
    }

    /// Iterate topics and their member lists in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(topic, members)| (topic.as_str(), members.as_slice()))
    }

    /// Number of distinct topics
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no topics were indexed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
