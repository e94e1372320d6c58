// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the folio command-line interface.
//!
//! Three subcommands: `search` to run one query and print the excerpts,
//! `serve` to answer `GET /search` over HTTP, and `inspect` to print corpus
//! statistics. The corpus path, verbosity and search settings are shared.

pub mod display;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use folio::{OutputFormat, RankOrder, SearchConfig};

#[derive(Parser)]
#[command(
    name = "folio",
    about = "Fuzzy paragraph search over a line-oriented text corpus",
    version
)]
pub struct Cli {
    /// Corpus file, split into lines on CRLF
    #[arg(long, global = true, env = "FOLIO_CORPUS", default_value = "completeworks.txt")]
    pub corpus: PathBuf,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log errors only
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the corpus and print matching paragraphs
    Search {
        /// Search query; terms are separated by single spaces
        query: String,

        /// Print the excerpts as a JSON array instead of text
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        options: SearchArgs,
    },

    /// Serve `GET /search?q=...` over HTTP
    #[cfg(feature = "server")]
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value = "3001")]
        port: u16,

        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        host: std::net::IpAddr,

        #[command(flatten)]
        options: SearchArgs,
    },

    /// Print corpus statistics
    Inspect {
        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Settings that feed [`SearchConfig`].
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// How hits from different terms are ordered
    #[arg(long, value_enum, default_value = "quality")]
    pub rank: RankOrder,

    /// Per-query time limit in milliseconds
    #[arg(long, env = "FOLIO_TIMEOUT_MS")]
    pub timeout_ms: Option<u64>,

    /// Keep one excerpt per hit line even when several share a paragraph
    #[arg(long)]
    pub keep_duplicates: bool,

    /// Rendering of the JSON strings
    #[arg(long, value_enum, default_value = "html")]
    pub format: OutputFormat,
}

impl SearchArgs {
    pub fn to_config(&self) -> SearchConfig {
        SearchConfig {
            rank_order: self.rank,
            timeout_ms: self.timeout_ms,
            dedupe_windows: !self.keep_duplicates,
            format: self.format,
        }
    }
}
