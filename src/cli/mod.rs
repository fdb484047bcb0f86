//! CLI argument parsing for graphwalk
//!
//! Uses clap derive. Global flags: --format, --quiet, --verbose,
//! --log-level, --log-json, --config

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use graphwalk_core::graph::{Order, Strategy};
pub use graphwalk_core::format::OutputFormat;
use parse::{parse_edge, parse_format, parse_order, parse_strategy};

/// Vertex identifier used on the command line
pub type Vertex = i64;

/// Graphwalk - graph traversal, shortest paths and ancestry queries
#[derive(Parser, Debug)]
#[command(name = "graphwalk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a full filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (default: ./graphwalk.toml if present)
    #[arg(long, global = true, env = "GRAPHWALK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Graph input shared by graph commands
#[derive(clap::Args, Debug, Clone, Default)]
pub struct GraphArgs {
    /// Directed edge FROM:TO (can be specified multiple times)
    #[arg(long = "edge", short = 'e', value_parser = parse_edge, action = clap::ArgAction::Append)]
    pub edges: Vec<(Vertex, Vertex)>,

    /// JSON graph description: {"vertices": [..], "edges": [[from, to], ..]}
    #[arg(long, short = 'g')]
    pub graph: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Visit every vertex reachable from START
    Traverse {
        /// Starting vertex
        start: Vertex,

        #[command(flatten)]
        input: GraphArgs,

        /// Visitation order: bft, dft, dft-recursive
        #[arg(long, short, value_parser = parse_order)]
        order: Option<Order>,
    },

    /// Find a path between two vertices
    Path {
        /// Starting vertex
        from: Vertex,

        /// Destination vertex
        to: Vertex,

        #[command(flatten)]
        input: GraphArgs,

        /// Search strategy: bfs (shortest) or dfs
        #[arg(long, short, value_parser = parse_strategy)]
        strategy: Option<Strategy>,
    },

    /// Find the earliest ancestor of START
    Ancestor {
        /// Starting vertex
        start: Vertex,

        /// Parent/child pair PARENT:CHILD (can be specified multiple times)
        #[arg(
            long = "pair",
            short = 'p',
            value_parser = parse_edge,
            action = clap::ArgAction::Append
        )]
        pairs: Vec<(Vertex, Vertex)>,
    },

    /// Build a random social network and report a user's extended network
    Social {
        /// Number of users
        #[arg(long, short)]
        users: Option<usize>,

        /// Average friendships per user
        #[arg(long, short)]
        avg_friendships: Option<usize>,

        /// Random seed for a reproducible network
        #[arg(long)]
        seed: Option<u64>,

        /// User whose extended network is reported
        #[arg(long, default_value_t = 1)]
        user: u64,
    },
}
