//! Command dispatch logic for graphwalk
use std::env;
use std::path::PathBuf;
use std::time::Instant;

use graphwalk_core::config::Config;
use graphwalk_core::error::Result;
use graphwalk_core::trace_time;

use crate::cli::{Cli, Commands};
use crate::commands;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        None => handle_no_command(),

        Some(Commands::Traverse {
            start: vertex,
            input,
            order,
        }) => {
            let order = match order {
                Some(order) => *order,
                None => load_config(cli, start)?.traversal.order,
            };
            commands::traverse::execute(cli, input, *vertex, order)
        }

        Some(Commands::Path {
            from,
            to,
            input,
            strategy,
        }) => {
            let strategy = match strategy {
                Some(strategy) => *strategy,
                None => load_config(cli, start)?.traversal.strategy,
            };
            commands::path::execute(cli, input, *from, *to, strategy)
        }

        Some(Commands::Ancestor { start: vertex, pairs }) => {
            commands::ancestor::execute(cli, pairs, *vertex)
        }

        Some(Commands::Social {
            users,
            avg_friendships,
            seed,
            user,
        }) => {
            let mut social = load_config(cli, start)?.social;
            if let Some(users) = users {
                social.users = *users;
            }
            if let Some(avg) = avg_friendships {
                social.avg_friendships = *avg;
            }
            if seed.is_some() {
                social.seed = *seed;
            }
            commands::social::execute(cli, &social, *user)
        }
    }
}

/// Load `graphwalk.toml` for a command with configurable defaults
fn load_config(cli: &Cli, start: Instant) -> Result<Config> {
    let root = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = Config::discover(cli.config.as_deref(), &root)?;
    trace_time!(start, "load_config");
    Ok(config)
}

fn handle_no_command() -> Result<()> {
    println!("graphwalk {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Graph traversal, shortest paths and ancestry queries.");
    println!();
    println!("Run `graphwalk --help` for usage information.");
    Ok(())
}
