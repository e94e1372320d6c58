// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use folio::{Corpus, Excerpt, SearchConfig, Searcher};

mod cli;
use cli::display;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr) // stdout carries results
        .init();

    match cli.command {
        Commands::Search {
            query,
            json,
            options,
        } => run_search(&cli.corpus, &query, json, options.to_config()),
        #[cfg(feature = "server")]
        Commands::Serve {
            port,
            host,
            options,
        } => run_serve(&cli.corpus, std::net::SocketAddr::new(host, port), options.to_config()),
        Commands::Inspect { json } => run_inspect(&cli.corpus, json),
    }
}

fn load_corpus(path: &Path) -> Result<Corpus> {
    let corpus = Corpus::load(path)
        .with_context(|| format!("could not load corpus from {}", path.display()))?;
    info!(path = %path.display(), lines = corpus.len(), "corpus loaded");
    Ok(corpus)
}

fn run_search(path: &Path, query: &str, json: bool, config: SearchConfig) -> Result<()> {
    let corpus = load_corpus(path)?;
    let searcher = Searcher::new(Arc::new(corpus), config);

    if json {
        let rendered = searcher.search_rendered(query)?;
        println!("{}", serde_json::to_string_pretty(&rendered)?);
        return Ok(());
    }

    let excerpts: Vec<Excerpt> = searcher.search(query)?;
    let options = display::highlight_options();
    for excerpt in &excerpts {
        display::print_excerpt(excerpt, &options);
    }
    println!("{}", display::result_summary(excerpts.len()));
    Ok(())
}

#[cfg(feature = "server")]
fn run_serve(path: &Path, addr: std::net::SocketAddr, config: SearchConfig) -> Result<()> {
    let corpus = load_corpus(path)?;
    let searcher = Arc::new(Searcher::new(Arc::new(corpus), config));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    runtime
        .block_on(folio::server::serve(searcher, addr))
        .with_context(|| format!("server on {} failed", addr))
}

fn run_inspect(path: &Path, json: bool) -> Result<()> {
    let corpus = load_corpus(path)?;
    let stats = corpus.stats();
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        display::print_stats(&path.display().to_string(), &stats);
    }
    Ok(())
}
