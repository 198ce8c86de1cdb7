// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Stats command - summarizes a record set before graphing it

use crate::catalog::RepoCatalog;
use crate::index::TopicIndex;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::path::Path;

/// Run the stats command
pub fn run(input: &Path, top: usize) -> Result<()> {
    let catalog = RepoCatalog::load(input)
        .with_context(|| format!("Failed to load records from {}", input.display()))?;
    let index = TopicIndex::build(&catalog);

    println!(
        "{} repositories, {} topics",
        catalog.len().green().bold(),
        index.len().green().bold()
    );

    let mut topics: Vec<(&str, usize)> = index.iter().map(|(t, m)| (t, m.len())).collect();
    topics.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    if !topics.is_empty() {
        println!();
        println!("Largest topics:");
        for (topic, members) in topics.iter().take(top) {
            println!("  {topic} ({members})");
        }
    }

    Ok(())
}
