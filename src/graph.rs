// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Graph model - undirected weighted repository graph with petgraph backing

use crate::style::{node_styles, NodeStyle};
use crate::types::{GraphKind, RepoRecord};
use anyhow::{Context, Result};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Write as _;

/// Node attributes carried for every repository in a graph
#[derive(Debug, Clone, Serialize)]
pub struct RepoNode {
    /// Repository key, `owner/name`
    #[serde(skip)]
    pub full_name: String,
    /// Activity score in [0, 100]
    pub activity: f64,
    /// Star count
    pub star: u64,
    /// Primary language ("Unknown" when absent)
    pub lang: String,
    /// Discovery depth; only set for ego-network nodes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
}

/// Undirected, simple, weighted repository graph
///
/// Nodes are keyed by `full_name`; edges carry a positive integer weight.
/// No self-loops, no duplicate unordered pairs, no dangling endpoints.
#[derive(Debug)]
pub struct RepoGraph {
    graph: UnGraph<RepoNode, u32>,
    node_indices: HashMap<String, NodeIndex>,
}

impl Default for RepoGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl RepoGraph {
    /// Create a new empty graph
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: UnGraph::new_undirected(),
            node_indices: HashMap::new(),
        }
    }

    /// Add a repository node if absent, returning its index
    ///
    /// A node that already exists keeps its original attributes; re-adding
    /// is a no-op so discovery and finalization can both pass through here.
    pub fn ensure_node(&mut self, record: &RepoRecord, level: Option<u32>) -> NodeIndex {
        if let Some(&idx) = self.node_indices.get(&record.full_name) {
            return idx;
        }
        let idx = self.graph.add_node(RepoNode {
            full_name: record.full_name.clone(),
            activity: record.activity_score,
            star: record.star_count,
            lang: record.language.clone(),
            level,
        });
        self.node_indices.insert(record.full_name.clone(), idx);
        idx
    }

    /// Add an edge between two existing nodes if no edge joins them yet
    ///
    /// Returns true when an edge was added. Self-loops, unknown endpoints,
    /// and already-connected pairs are skipped, keeping the graph simple.
    pub fn ensure_edge(&mut self, a: &str, b: &str, weight: u32) -> bool {
        if a == b {
            return false;
        }
        let (Some(&ia), Some(&ib)) = (self.node_indices.get(a), self.node_indices.get(b)) else {
            return false;
        };
        if self.graph.find_edge(ia, ib).is_some() {
            return false;
        }
        self.graph.add_edge(ia, ib, weight);
        true
    }

    /// Look up a node's attributes by `full_name`
    #[must_use]
    pub fn node(&self, full_name: &str) -> Option<&RepoNode> {
        self.node_indices.get(full_name).map(|&i| &self.graph[i])
    }

    /// Whether two nodes are joined by an edge
    #[must_use]
    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        match (self.node_indices.get(a), self.node_indices.get(b)) {
            (Some(&ia), Some(&ib)) => self.graph.find_edge(ia, ib).is_some(),
            _ => false,
        }
    }

    /// Iterate all nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &RepoNode> {
        self.graph.node_weights()
    }

    /// Iterate all edges as (a, b, weight)
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, u32)> {
        self.graph.edge_references().map(|e| {
            (
                self.graph[e.source()].full_name.as_str(),
                self.graph[e.target()].full_name.as_str(),
                *e.weight(),
            )
        })
    }

    /// Number of nodes
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Export to JSON: kind flag, node attribute map, edge list
    ///
    /// # Errors
    ///
    /// Fails only if serialization fails.
    pub fn to_json(&self, kind: GraphKind) -> Result<String> {
        #[derive(Serialize)]
        struct EdgeExport<'a> {
            source: &'a str,
            target: &'a str,
            weight: u32,
        }

        #[derive(Serialize)]
        struct GraphExport<'a> {
            kind: GraphKind,
            nodes: BTreeMap<&'a str, &'a RepoNode>,
            edges: Vec<EdgeExport<'a>>,
        }

        let export = GraphExport {
            kind,
            nodes: self.nodes().map(|n| (n.full_name.as_str(), n)).collect(),
            edges: self
                .edges()
                .map(|(source, target, weight)| EdgeExport {
                    source,
                    target,
                    weight,
                })
                .collect(),
        };

        serde_json::to_string_pretty(&export).context("Failed to serialize graph to JSON")
    }

    /// Export to styled DOT format for Graphviz
    ///
    /// Node size, fill color, and labels come from the render attributes, so
    /// a `dot`/`fdp` rendering mirrors the intended styling: size tracks
    /// activity, color tracks language, edge width tracks weight.
    #[must_use]
    pub fn to_dot(&self, kind: GraphKind) -> String {
        let styles: HashMap<String, NodeStyle> = node_styles(self, kind).into_iter().collect();

        let mut dot = String::from("graph starmap {\n");
        dot.push_str("  layout=fdp;\n");
        dot.push_str("  node [shape=circle, style=filled, fixedsize=true];\n\n");

        for node in self.nodes() {
            let style = &styles[&node.full_name];
            let label = style.label.as_deref().unwrap_or("");
            // Map the 200..=1000 size range onto sensible inch widths.
            let width = style.size / 500.0;
            let _ = writeln!(
                dot,
                "  \"{}\" [label=\"{}\", fillcolor=\"{}\", width={:.2}];",
                node.full_name, label, style.color, width
            );
        }

        dot.push('\n');

        for (a, b, weight) in self.edges() {
            let penwidth = (f64::from(weight) * 0.5).max(0.2);
            let _ = writeln!(dot, "  \"{a}\" -- \"{b}\" [penwidth={penwidth:.1}];");
        }

        dot.push_str("}\n");
        dot
    }
}
