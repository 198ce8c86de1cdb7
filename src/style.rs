// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Render-facing node attributes - size, color, and label derivation

use crate::graph::{RepoGraph, RepoNode};
use crate::types::GraphKind;

/// Language color palette for node fills
pub const LANGUAGE_COLORS: &[(&str, &str)] = &[
    ("JavaScript", "#F0DB4F"),
    ("Python", "#3776AB"),
    ("Java", "#007396"),
    ("TypeScript", "#007ACC"),
    ("C++", "#00599C"),
    ("C#", "#239120"),
    ("Go", "#00ADD8"),
    ("Rust", "#DEA584"),
    ("PHP", "#777BB4"),
    ("Ruby", "#CC342D"),
    ("Unknown", "#808080"),
];

/// Fill color for languages not in the palette
pub const DEFAULT_COLOR: &str = "#808080";

/// Star count above which global-graph nodes get a label (strict)
pub const LABEL_STAR_THRESHOLD: u64 = 150_000;

/// Longest rendered label, in characters
pub const MAX_LABEL_CHARS: usize = 12;

/// Render attributes for one node
#[derive(Debug, Clone, PartialEq)]
pub struct NodeStyle {
    /// Marker size, clamped to [200, 1000]
    pub size: f64,
    /// Fill color hex string
    pub color: &'static str,
    /// Label text if the node is label-eligible
    pub label: Option<String>,
}

/// Color for a language, falling back to neutral gray
#[must_use]
pub fn language_color(lang: &str) -> &'static str {
    LANGUAGE_COLORS
        .iter()
        .find(|(name, _)| *name == lang)
        .map_or(DEFAULT_COLOR, |(_, color)| *color)
}

/// Derive render attributes for one node
///
/// Size scales with activity (activity × 10, clamped to [200, 1000]).
/// Ego-network nodes are always labeled; global-graph nodes only above
/// [`LABEL_STAR_THRESHOLD`] stars. The label is the repository's short
/// name, truncated to [`MAX_LABEL_CHARS`] characters.
#[must_use]
pub fn node_style(node: &RepoNode, kind: GraphKind) -> NodeStyle {
    let size = (node.activity * 10.0).clamp(200.0, 1000.0);
    let color = language_color(&node.lang);

    let eligible = kind == GraphKind::Ego || node.star > LABEL_STAR_THRESHOLD;
    let label = eligible.then(|| {
        node.full_name
            .rsplit('/')
            .next()
            .unwrap_or(&node.full_name)
            .chars()
            .take(MAX_LABEL_CHARS)
            .collect()
    });

    NodeStyle { size, color, label }
}

/// Derive render attributes for every node of a graph
#[must_use]
pub fn node_styles(graph: &RepoGraph, kind: GraphKind) -> Vec<(String, NodeStyle)> {
    graph
        .nodes()
        .map(|node| (node.full_name.clone(), node_style(node, kind)))
        .collect()
}
