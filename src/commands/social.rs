//! Social command
use std::collections::BTreeMap;

use graphwalk_core::config::SocialConfig;
use graphwalk_core::error::Result;
use graphwalk_core::format::{join_path, OutputFormat};
use graphwalk_core::social::{rng_for, NetworkStats, SocialGraph, UserId};

use crate::cli::Cli;

/// Execute the social command
pub fn execute(cli: &Cli, config: &SocialConfig, user: UserId) -> Result<()> {
    let mut graph = SocialGraph::new();
    let mut rng = rng_for(config.seed);
    graph.populate(config.users, config.avg_friendships, &mut rng)?;

    let paths = graph.get_all_social_paths(user)?;
    let stats = graph.network_stats(user)?;

    match cli.format {
        OutputFormat::Json => output_json(&graph, &paths, &stats)?,
        OutputFormat::Human => output_human(cli, &graph, &paths, &stats)?,
    }
    Ok(())
}

fn output_human(
    cli: &Cli,
    graph: &SocialGraph,
    paths: &BTreeMap<UserId, Vec<UserId>>,
    stats: &NetworkStats,
) -> Result<()> {
    if !cli.quiet {
        println!(
            "{} users, {} friendships",
            graph.user_count(),
            graph.friendship_count()
        );
        for user in graph.users() {
            let friends = graph.friends(user.id)?;
            let friends: Vec<String> = friends.iter().map(|f| f.to_string()).collect();
            println!("{} ({}): {}", user.id, user.name, friends.join(", "));
        }
        println!();
    }

    println!("Extended network of user {}:", stats.user);
    for (id, path) in paths {
        println!("{}: {}", id, join_path(path));
    }
    println!(
        "Network: {} of {} other users ({:.1}%), average separation {:.2}",
        stats.extended_network_size,
        stats.total_users.saturating_sub(1),
        stats.network_percentage,
        stats.average_separation
    );
    Ok(())
}

fn output_json(
    graph: &SocialGraph,
    paths: &BTreeMap<UserId, Vec<UserId>>,
    stats: &NetworkStats,
) -> Result<()> {
    let mut friendships = serde_json::Map::new();
    for user in graph.users() {
        friendships.insert(user.id.to_string(), serde_json::json!(graph.friends(user.id)?));
    }

    let users: Vec<_> = graph.users().collect();
    let output = serde_json::json!({
        "users": users,
        "friendships": friendships,
        "paths": paths,
        "stats": stats,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
