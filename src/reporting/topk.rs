// src/reporting/topk.rs
//! Top-K rankings by `PageRank` score and by raw in-link count.

use std::collections::HashMap;
use std::fmt::{Display, Write as _};
use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use super::ReportFormat;
use crate::error::{LinkRankError, Result};
use crate::graph::PageIndex;
use crate::input::{parse_edge, EdgeSource};

/// One row of a top-K report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry<V> {
    /// 1-based position.
    pub rank: usize,
    pub page: String,
    pub value: V,
}

/// The `k` best-scored pages, highest first. Equal scores keep id order.
#[must_use]
pub fn top_pageranks(index: &PageIndex, ranks: &[f64], k: usize) -> Vec<Entry<f64>> {
    let mut order: Vec<usize> = (0..ranks.len().min(index.len())).collect();
    order.sort_by(|&a, &b| ranks[b].total_cmp(&ranks[a]).then(a.cmp(&b)));
    order
        .into_iter()
        .take(k)
        .enumerate()
        .filter_map(|(pos, id)| {
            index.name(id).map(|page| Entry {
                rank: pos + 1,
                page: page.to_string(),
                value: ranks[id],
            })
        })
        .collect()
}

/// The `k` most linked-to pages, counted straight from the edge lines.
///
/// Parallel edges count once each. Equal counts keep the order in which the
/// pages first appeared as a link target.
///
/// # Errors
/// Returns error on I/O failure or a malformed line.
pub fn top_inlinks<S: EdgeSource + ?Sized>(source: &S, k: usize) -> Result<Vec<Entry<usize>>> {
    let mut position: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for (i, line) in source.lines()?.enumerate() {
        let line = line?;
        let edge = parse_edge(i + 1, &line)?;
        match position.get(edge.target) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                position.insert(edge.target.to_string(), counts.len());
                counts.push((edge.target.to_string(), 1));
            }
        }
    }

    // Stable sort keeps first-seen order among ties.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    Ok(counts
        .into_iter()
        .take(k)
        .enumerate()
        .map(|(pos, (page, value))| Entry {
            rank: pos + 1,
            page,
            value,
        })
        .collect())
}

/// Renders entries as fixed-width text rows.
#[must_use]
pub fn format_text<V: Display>(entries: &[Entry<V>]) -> String {
    let mut out = String::new();
    for e in entries {
        let _ = writeln!(out, "{:<35}{:<4}{:>4}", e.page, e.rank, e.value);
    }
    out
}

/// Writes entries to `path` in the chosen format.
///
/// # Errors
/// Returns error if serialization or the file write fails.
pub fn write_report<V>(path: &Path, entries: &[Entry<V>], format: ReportFormat) -> Result<()>
where
    V: Display + Serialize,
{
    let body = match format {
        ReportFormat::Text => format_text(entries),
        ReportFormat::Json => {
            let mut json = serde_json::to_string_pretty(entries)?;
            json.push('\n');
            json
        }
    };
    fs::write(path, body).map_err(|source| LinkRankError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    info!(path = %path.display(), rows = entries.len(), "report written");
    Ok(())
}
