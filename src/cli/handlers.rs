// src/cli/handlers.rs
use crate::cli::args::RankArgs;
use crate::config::Config;
use crate::error::LinkRankError;
use crate::exit::LinkRankExit;
use crate::graph::{GraphBuilder, LinkGraph};
use crate::input::FileSource;
use crate::rank::PageRankResult;
use crate::reporting::{self, console};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::time::Instant;
use tracing::warn;

const PREVIEW_ROWS: usize = 5;

/// Folds command-line overrides into the loaded config.
#[must_use]
pub fn apply_overrides(mut config: Config, args: &RankArgs) -> Config {
    let solver = &mut config.solver;
    if let Some(lambda) = args.lambda {
        solver.damping = lambda;
    }
    if let Some(tau) = args.tau {
        solver.threshold = tau;
    }
    if let Some(max) = args.max_iterations {
        solver.max_iterations = max;
    }
    if let Some(mode) = args.mode {
        solver.mode = mode;
    }

    let report = &mut config.report;
    if let Some(top) = args.top {
        report.top_k = top;
    }
    if let Some(dir) = &args.out_dir {
        report.out_dir.clone_from(dir);
    }
    if let Some(format) = args.format {
        report.format = format;
    }
    config
}

fn build_graph(source: &FileSource) -> Result<LinkGraph> {
    GraphBuilder::build(source)
        .with_context(|| format!("Failed to build graph from {}", source.path().display()))
}

/// Handles the rank command.
///
/// # Errors
/// Returns error if the config is invalid, the input cannot be read or parsed,
/// the solver does not converge (unless accepted), or a report cannot be written.
pub fn handle_rank(args: &RankArgs, config: Config) -> Result<LinkRankExit> {
    let config = apply_overrides(config, args);
    config.validate()?;

    let started = Instant::now();
    let source = FileSource::new(&args.file);
    let graph = build_graph(&source)?;
    let result = solve(&config, &graph, args.accept_unconverged)?;

    let report = &config.report;
    let ranks = reporting::top_pageranks(graph.index(), &result.ranks, report.top_k);
    let inlinks = reporting::top_inlinks(&source, report.top_k)?;

    std::fs::create_dir_all(&report.out_dir)
        .with_context(|| format!("Failed to create {}", report.out_dir.display()))?;
    reporting::write_report(
        &report.out_dir.join(&report.pagerank_file),
        &ranks,
        report.format,
    )?;
    reporting::write_report(
        &report.out_dir.join(&report.inlinks_file),
        &inlinks,
        report.format,
    )?;

    console::print_summary(&graph, Some(&result), started.elapsed());
    console::print_top("top pages by rank", &ranks, PREVIEW_ROWS);
    console::print_top("top pages by in-links", &inlinks, PREVIEW_ROWS);
    print_written(&report.out_dir, &[&report.pagerank_file, &report.inlinks_file]);

    Ok(LinkRankExit::Success)
}

fn solve(config: &Config, graph: &LinkGraph, accept_unconverged: bool) -> Result<PageRankResult> {
    match config.solver().solve(graph) {
        Ok(result) => Ok(result),
        Err(LinkRankError::DidNotConverge(result)) if accept_unconverged => {
            warn!(
                iterations = result.iterations,
                delta = result.delta,
                "using unconverged rank vector"
            );
            Ok(*result)
        }
        Err(e) => Err(e.into()),
    }
}

fn print_written(dir: &Path, files: &[&String]) {
    for file in files {
        println!("{} {}", "wrote".green(), dir.join(file).display());
    }
}

/// Handles the stats command.
///
/// # Errors
/// Returns error if the input cannot be read or parsed.
pub fn handle_stats(file: &Path) -> Result<LinkRankExit> {
    let started = Instant::now();
    let graph = build_graph(&FileSource::new(file))?;
    console::print_summary(&graph, None, started.elapsed());
    Ok(LinkRankExit::Success)
}

/// Handles the config command.
///
/// # Errors
/// Returns error if the config cannot be serialized.
pub fn handle_config(config: &Config) -> Result<LinkRankExit> {
    print!("{}", config.to_toml()?);
    Ok(LinkRankExit::Success)
}
