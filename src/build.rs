// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Graph construction - the capped global association graph and the
//! bounded ego-network traversal
//!
//! Both builders trade completeness for boundedness: iteration follows
//! first-seen topic order and first-seen member order, and stops the moment
//! a cap is reached, so capped output is a reproducible prefix of the
//! qualifying pairs rather than the complete set.

use crate::catalog::RepoCatalog;
use crate::error::Error;
use crate::graph::RepoGraph;
use crate::index::TopicIndex;
use std::collections::{HashMap, HashSet};

/// Maximum number of edges in the global association graph
pub const MAX_EDGES: usize = 1000;

/// Per-topic fan-out cap: only this many members of a topic are paired
pub const TOPIC_FANOUT: usize = 8;

/// Minimum shared-topic count for an association edge
pub const MIN_SHARED_TOPICS: usize = 2;

/// Caps and budgets for ego-network traversal
#[derive(Debug, Clone, Copy)]
pub struct EgoParams {
    /// Deepest discovery level, inclusive
    pub max_levels: u32,
    /// Budget of finalized nodes
    pub max_nodes: usize,
    /// Only the first N topics of an expanding repository are followed
    pub topics_per_node: usize,
    /// Only the first N repositories under a topic become candidates
    pub repos_per_topic: usize,
}

impl Default for EgoParams {
    fn default() -> Self {
        Self {
            max_levels: 4,
            max_nodes: 150,
            topics_per_node: 5,
            repos_per_topic: 5,
        }
    }
}

/// Build the global association graph
///
/// Every repository becomes a node, isolated ones included. Edges join
/// repositories sharing at least [`MIN_SHARED_TOPICS`] topics, weighted by
/// the full-set intersection size. Per topic only the first
/// [`TOPIC_FANOUT`] members are paired, and edge creation stops outright
/// once [`MAX_EDGES`] is reached. Each unordered pair is evaluated at most
/// once, whichever topic reaches it first; a pair that fails the shared
/// threshold is recorded as seen and never re-evaluated.
#[must_use]
pub fn build_association_graph(catalog: &RepoCatalog, index: &TopicIndex) -> RepoGraph {
    let mut graph = RepoGraph::new();
    for record in catalog.records() {
        graph.ensure_node(record, None);
    }

    let mut seen_pairs: HashSet<(String, String)> = HashSet::new();
    let mut edge_count = 0usize;

    'topics: for (_, members) in index.iter() {
        let members = &members[..members.len().min(TOPIC_FANOUT)];
        for (i, a) in members.iter().enumerate() {
            for b in &members[i + 1..] {
                if edge_count >= MAX_EDGES {
                    break 'topics;
                }
                if !seen_pairs.insert(pair_key(a, b)) {
                    continue;
                }
                let shared = catalog.shared_topics(a, b);
                if shared >= MIN_SHARED_TOPICS {
                    let weight = u32::try_from(shared).unwrap_or(u32::MAX);
                    if graph.ensure_edge(a, b, weight) {
                        edge_count += 1;
                    }
                }
            }
        }
    }

    graph
}

/// Canonical unordered pair, independent of which topic produced it
fn pair_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

/// Build a bounded ego network around a seed repository
///
/// Level-synchronous traversal: each round takes a read-only snapshot of
/// the frontier and accumulates the next frontier separately, while the
/// finalized set is updated at the top of each repository's processing
/// step. Two repositories processed in the same round can therefore both
/// discover, and both gain an edge to, the same not-yet-finalized
/// candidate; by the next round the candidate is finalized and collects
/// no further parent edges.
///
/// Discovery edges are buffered with the frontier and materialized when
/// the candidate is finalized, so the emitted graph contains exactly the
/// finalized nodes: every node carries attributes and a level within
/// `max_levels`, every edge joins a level-L node to a level-L-1 parent,
/// and the node count never exceeds `max_nodes`. Candidates cut off by
/// the node budget or the level budget leave no trace.
///
/// # Errors
///
/// Returns [`Error::RepositoryNotFound`] when the seed is not in the
/// catalog; no traversal state is created in that case.
pub fn build_ego_network(
    catalog: &RepoCatalog,
    index: &TopicIndex,
    seed: &str,
    params: &EgoParams,
) -> Result<RepoGraph, Error> {
    if !catalog.contains(seed) {
        return Err(Error::RepositoryNotFound(seed.to_string()));
    }

    let mut graph = RepoGraph::new();
    let mut finalized: HashSet<String> = HashSet::new();
    // Frontier entries in discovery order, with the parents that found them.
    let mut frontier: Vec<(String, Vec<String>)> = vec![(seed.to_string(), Vec::new())];

    for level in 0..=params.max_levels {
        if frontier.is_empty() || finalized.len() >= params.max_nodes {
            break;
        }

        let mut next: Vec<(String, Vec<String>)> = Vec::new();
        let mut queued: HashMap<String, usize> = HashMap::new();

        for (name, parents) in &frontier {
            if finalized.len() >= params.max_nodes {
                break;
            }
            if !finalized.insert(name.clone()) {
                // Already finalized earlier, as a same-round sibling of its
                // discoverers; the buffered edges still apply.
                for parent in parents {
                    graph.ensure_edge(parent, name, 1);
                }
                continue;
            }
            let Some(record) = catalog.get(name) else {
                continue;
            };
            graph.ensure_node(record, Some(level));
            for parent in parents {
                graph.ensure_edge(parent, name, 1);
            }

            if level == params.max_levels {
                continue;
            }

            for topic in record.topics.iter().take(params.topics_per_node) {
                for candidate in index.members(topic).iter().take(params.repos_per_topic) {
                    if finalized.contains(candidate)
                        || finalized.len() >= params.max_nodes
                        || !catalog.contains(candidate)
                    {
                        continue;
                    }
                    let slot = *queued.entry(candidate.clone()).or_insert_with(|| {
                        next.push((candidate.clone(), Vec::new()));
                        next.len() - 1
                    });
                    next[slot].1.push(name.clone());
                }
            }
        }

        frontier = next;
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RepoRecord;

    fn record(full_name: &str, topics: &[&str]) -> RepoRecord {
        RepoRecord {
            id: 0,
            full_name: full_name.into(),
            owner: String::new(),
            name: String::new(),
            topics: topics.iter().map(ToString::to_string).collect(),
            activity_score: 0.0,
            star_count: 0,
            fork_count: 0,
            language: "Unknown".into(),
            activity: None,
        }
    }

    fn setup(records: Vec<RepoRecord>) -> (RepoCatalog, TopicIndex) {
        let catalog = RepoCatalog::from_records(records).unwrap();
        let index = TopicIndex::build(&catalog);
        (catalog, index)
    }

    #[test]
    fn test_shared_topic_threshold() {
        // A and B share {x, y}; A and C share only {x}.
        let (catalog, index) = setup(vec![
            record("o/a", &["x", "y"]),
            record("o/b", &["x", "y"]),
            record("o/c", &["x"]),
        ]);

        let graph = build_association_graph(&catalog, &index);

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.has_edge("o/a", "o/b"));
        assert!(!graph.has_edge("o/a", "o/c"));

        let (a, b, weight) = graph.edges().next().unwrap();
        assert_eq!(weight, 2);
        assert!([a, b].contains(&"o/a") && [a, b].contains(&"o/b"));
    }

    #[test]
    fn test_isolated_repos_are_nodes() {
        let (catalog, index) = setup(vec![
            record("o/a", &[]),
            record("o/b", &["solo"]),
        ]);

        let graph = build_association_graph(&catalog, &index);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_topic_fanout_truncation() {
        // Ten repos all share topics {t, u}. With a fan-out of 8 only the
        // first eight members of each topic are paired, so the last two
        // repos stay isolated even though they qualify on shared topics.
        let records: Vec<RepoRecord> = (0..10)
            .map(|i| record(&format!("o/r{i}"), &["t", "u"]))
            .collect();
        let (catalog, index) = setup(records);

        let graph = build_association_graph(&catalog, &index);

        // C(8, 2) pairs among the first eight members.
        assert_eq!(graph.edge_count(), 28);
        assert!(!graph.has_edge("o/r8", "o/r0"));
        assert!(!graph.has_edge("o/r9", "o/r0"));
        assert!(graph.has_edge("o/r0", "o/r7"));
    }

    #[test]
    fn test_failed_pair_not_reevaluated() {
        // A and B co-occur under both topics but share only one, so the
        // pair is rejected under "x" and must not be re-tried under "y".
        let (catalog, index) = setup(vec![
            record("o/a", &["x"]),
            record("o/b", &["x", "y"]),
            record("o/c", &["y"]),
        ]);

        let graph = build_association_graph(&catalog, &index);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_weight_uses_full_topic_sets() {
        // The pairing is discovered under one topic, but the weight counts
        // the whole intersection, beyond the fan-out window.
        let (catalog, index) = setup(vec![
            record("o/a", &["x", "y", "z", "w"]),
            record("o/b", &["x", "y", "z"]),
        ]);

        let graph = build_association_graph(&catalog, &index);
        let (_, _, weight) = graph.edges().next().unwrap();
        assert_eq!(weight, 3);
    }

    #[test]
    fn test_seed_not_found() {
        let (catalog, index) = setup(vec![record("o/a", &["x"])]);
        let result = build_ego_network(&catalog, &index, "o/missing", &EgoParams::default());
        assert_eq!(
            result.unwrap_err(),
            Error::RepositoryNotFound("o/missing".into())
        );
    }

    #[test]
    fn test_seed_is_level_zero() {
        let (catalog, index) = setup(vec![
            record("o/seed", &["x"]),
            record("o/n1", &["x"]),
        ]);

        let graph = build_ego_network(&catalog, &index, "o/seed", &EgoParams::default()).unwrap();

        assert_eq!(graph.node("o/seed").unwrap().level, Some(0));
        assert_eq!(graph.node("o/n1").unwrap().level, Some(1));
        assert!(graph.has_edge("o/seed", "o/n1"));
    }

    #[test]
    fn test_topics_per_node_truncation() {
        // The seed carries six topics; only the first five are followed,
        // so a neighbor reachable only via the sixth must not appear.
        let (catalog, index) = setup(vec![
            record("o/seed", &["t1", "t2", "t3", "t4", "t5", "t6"]),
            record("o/via-t5", &["t5"]),
            record("o/via-t6", &["t6"]),
        ]);

        let graph = build_ego_network(&catalog, &index, "o/seed", &EgoParams::default()).unwrap();

        assert!(graph.node("o/via-t5").is_some());
        assert!(graph.node("o/via-t6").is_none());
    }

    #[test]
    fn test_repos_per_topic_truncation() {
        // Seven repos under one topic; the seed is first, so only the next
        // four index entries become candidates.
        let mut records = vec![record("o/seed", &["t"])];
        records.extend((0..6).map(|i| record(&format!("o/n{i}"), &["t"])));
        let (catalog, index) = setup(records);

        let graph = build_ego_network(&catalog, &index, "o/seed", &EgoParams::default()).unwrap();

        assert!(graph.node("o/n3").is_some());
        assert!(graph.node("o/n4").is_none());
        assert!(graph.node("o/n5").is_none());
    }

    #[test]
    fn test_same_round_multi_parent() {
        // n1 and n2 are both finalized in round 1 and both discover m via
        // their own topics, so m collects two parent edges from one round.
        let (catalog, index) = setup(vec![
            record("o/seed", &["a", "b"]),
            record("o/n1", &["a", "p"]),
            record("o/n2", &["b", "q"]),
            record("o/m", &["p", "q"]),
        ]);

        let graph = build_ego_network(&catalog, &index, "o/seed", &EgoParams::default()).unwrap();

        assert!(graph.has_edge("o/n1", "o/m"));
        assert!(graph.has_edge("o/n2", "o/m"));
        assert_eq!(graph.node("o/m").unwrap().level, Some(2));
    }

    #[test]
    fn test_node_budget() {
        // A topic tree fanning out fast enough to blow past a small budget:
        // each repo shares a group topic with its five children.
        let mut records = vec![record("o/r0", &["g0"])];
        for n in 1..=120u32 {
            let topics = [format!("g{n}"), format!("g{}", (n - 1) / 5)];
            let refs: Vec<&str> = topics.iter().map(String::as_str).collect();
            records.push(record(&format!("o/r{n}"), &refs));
        }
        let (catalog, index) = setup(records);

        let params = EgoParams {
            max_nodes: 10,
            ..EgoParams::default()
        };
        let graph = build_ego_network(&catalog, &index, "o/r0", &params).unwrap();

        assert_eq!(graph.node_count(), params.max_nodes);
        let max_level = graph.nodes().filter_map(|n| n.level).max().unwrap();
        assert!(max_level <= params.max_levels);
    }

    #[test]
    fn test_level_bound_and_parent_edges() {
        // A chain long enough to exhaust the level budget.
        let records: Vec<RepoRecord> = (0..8)
            .map(|i| {
                let topics = [format!("link{i}"), format!("link{}", i + 1)];
                let refs: Vec<&str> = topics.iter().map(String::as_str).collect();
                record(&format!("o/c{i}"), &refs)
            })
            .collect();
        let (catalog, index) = setup(records);

        let graph = build_ego_network(&catalog, &index, "o/c0", &EgoParams::default()).unwrap();

        for node in graph.nodes() {
            let level = node.level.expect("every ego node carries a level");
            assert!(level <= 4);
            if level > 0 {
                let has_parent = graph.edges().any(|(a, b, _)| {
                    let other = if a == node.full_name { Some(b) } else if b == node.full_name { Some(a) } else { None };
                    other
                        .and_then(|o| graph.node(o))
                        .and_then(|n| n.level)
                        .is_some_and(|l| l + 1 == level)
                });
                assert!(has_parent, "{} has no parent at level {}", node.full_name, level - 1);
            }
        }
    }
}
