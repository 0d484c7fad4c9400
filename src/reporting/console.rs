use crate::graph::LinkGraph;
use crate::rank::PageRankResult;
use crate::reporting::shared::{duration, pluralize};
use crate::reporting::Entry;
use colored::Colorize;
use std::time::Duration;

/// Prints graph size and, when given, how the solver finished.
pub fn print_summary(graph: &LinkGraph, result: Option<&PageRankResult>, elapsed: Duration) {
    let pages = graph.node_count();
    let edges = graph.edge_count();
    let dangling = graph.dangling_count();

    println!(
        "{} {} {}, {} {}, {} dangling",
        "graph:".cyan().bold(),
        pages,
        pluralize("page", pages),
        edges,
        pluralize("edge", edges),
        dangling
    );

    if let Some(result) = result {
        let status = if result.warning.is_some() {
            "empty graph".yellow()
        } else if result.converged {
            "converged".green()
        } else {
            "not converged".red()
        };
        println!(
            "{} {} after {} {} (L1 delta {:e}, mass {:.6})",
            "pagerank:".cyan().bold(),
            status,
            result.iterations,
            pluralize("iteration", result.iterations),
            result.delta,
            result.mass()
        );
    }

    println!("{} {}", "elapsed:".dimmed(), duration(elapsed).dimmed());
}

/// Prints the first rows of a report to the terminal.
pub fn print_top<V: std::fmt::Display>(title: &str, entries: &[Entry<V>], rows: usize) {
    println!("{}", title.bold());
    for e in entries.iter().take(rows) {
        println!("  {:>3}. {} {}", e.rank, e.page, e.value.to_string().dimmed());
    }
}
