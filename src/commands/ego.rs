// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Ego command - builds and exports a bounded ego network for one seed

use crate::build::{build_ego_network, EgoParams};
use crate::catalog::RepoCatalog;
use crate::commands::{parse_format, write_output, ExportFormat};
use crate::error::Error;
use crate::index::TopicIndex;
use crate::types::GraphKind;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Run the ego command
pub fn run(
    seed: &str,
    input: &Path,
    format: &str,
    output: Option<PathBuf>,
    max_levels: u32,
    max_nodes: usize,
) -> Result<()> {
    let export_format = parse_format(format)?;

    let catalog = RepoCatalog::load(input)
        .with_context(|| format!("Failed to load records from {}", input.display()))?;
    info!("Loaded {} repositories", catalog.len());

    let index = TopicIndex::build(&catalog);
    let params = EgoParams {
        max_levels,
        max_nodes,
        ..EgoParams::default()
    };

    let kind = GraphKind::Ego;
    let graph = match build_ego_network(&catalog, &index, seed, &params) {
        Ok(graph) => graph,
        Err(Error::RepositoryNotFound(name)) => {
            eprintln!(
                "{} repository '{}' is not in the record set",
                "Error:".red().bold(),
                name
            );
            anyhow::bail!("repository not found: {name}");
        }
        Err(err) => return Err(err.into()),
    };
    info!(
        "Built {} graph: {} nodes, {} edges",
        kind.code(),
        graph.node_count(),
        graph.edge_count()
    );

    eprintln!(
        "{} {} nodes, {} edges around {}",
        "Ego network:".bold(),
        graph.node_count().green(),
        graph.edge_count().green(),
        seed.cyan()
    );

    let content = match export_format {
        ExportFormat::Dot => graph.to_dot(kind),
        ExportFormat::Json => graph.to_json(kind)?,
    };

    write_output(&content, output)
}
