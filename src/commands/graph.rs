// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Graph command - builds and exports the global association graph

use crate::build::build_association_graph;
use crate::catalog::RepoCatalog;
use crate::commands::{parse_format, write_output, ExportFormat};
use crate::index::TopicIndex;
use crate::types::GraphKind;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Run the graph command
pub fn run(input: &Path, format: &str, output: Option<PathBuf>) -> Result<()> {
    let export_format = parse_format(format)?;

    let catalog = RepoCatalog::load(input)
        .with_context(|| format!("Failed to load records from {}", input.display()))?;
    info!("Loaded {} repositories", catalog.len());

    if catalog.is_empty() {
        eprintln!("Warning: no repositories in {}", input.display());
    }

    let kind = GraphKind::Association;
    let index = TopicIndex::build(&catalog);
    let graph = build_association_graph(&catalog, &index);
    info!(
        "Built {} graph: {} nodes, {} edges",
        kind.code(),
        graph.node_count(),
        graph.edge_count()
    );

    eprintln!(
        "{} {} nodes, {} edges ({} topics)",
        "Association graph:".bold(),
        graph.node_count().green(),
        graph.edge_count().green(),
        index.len()
    );

    let content = match export_format {
        ExportFormat::Dot => graph.to_dot(kind),
        ExportFormat::Json => graph.to_json(kind)?,
    };

    write_output(&content, output)
}
