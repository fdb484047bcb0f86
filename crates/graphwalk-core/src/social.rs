//! Social network simulation on top of [`Graph`]
//!
//! Users get sequential ids starting at 1. Friendships are undirected and
//! stored as a pair of directed edges.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::bail_invalid;
use crate::error::{GraphError, Result};
use crate::graph::Graph;

pub type UserId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

/// Reach of one user's extended network
#[derive(Debug, Clone, Serialize)]
pub struct NetworkStats {
    pub user: UserId,
    /// Users reachable through friendships, excluding `user`
    pub extended_network_size: usize,
    pub total_users: usize,
    /// Share of the other users that are in the extended network
    pub network_percentage: f64,
    /// Mean number of friendship hops to reachable users
    pub average_separation: f64,
}

/// Build the random source for population: seeded when reproducible runs
/// are wanted, entropy otherwise
pub fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

#[derive(Debug, Clone, Default)]
pub struct SocialGraph {
    last_id: UserId,
    users: BTreeMap<UserId, User>,
    friendships: Graph<UserId>,
}

impl SocialGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a user with the next sequential id
    pub fn add_user(&mut self, name: impl Into<String>) -> UserId {
        self.last_id += 1;
        let id = self.last_id;
        self.users.insert(
            id,
            User {
                id,
                name: name.into(),
            },
        );
        self.friendships.add_vertex(id);
        id
    }

    /// Create a bidirectional friendship.
    ///
    /// Self friendships and existing friendships are rejected with a
    /// warning and leave the graph unchanged.
    pub fn add_friendship(&mut self, user: UserId, friend: UserId) -> Result<()> {
        if user == friend {
            tracing::warn!(user, "user cannot be friends with themselves");
            return Err(GraphError::SelfFriendship {
                id: user.to_string(),
            });
        }

        if self.friendships.neighbors(&user)?.contains(&friend)
            || self.friendships.neighbors(&friend)?.contains(&user)
        {
            tracing::warn!(user, friend, "friendship already exists");
            return Err(GraphError::DuplicateFriendship {
                a: user.to_string(),
                b: friend.to_string(),
            });
        }

        self.friendships.add_edge(user, friend)?;
        self.friendships.add_edge(friend, user)?;
        Ok(())
    }

    /// Reset the graph and fill it with `num_users` users and
    /// `avg_friendships * num_users / 2` random friendships.
    ///
    /// `num_users` must be greater than `avg_friendships`. Memory grows
    /// with the number of friendships, not with the number of possible
    /// pairs.
    #[tracing::instrument(skip(self, rng))]
    pub fn populate<R>(
        &mut self,
        num_users: usize,
        avg_friendships: usize,
        rng: &mut R,
    ) -> Result<()>
    where
        R: Rng + ?Sized,
    {
        if num_users <= avg_friendships {
            bail_invalid!(
                "avg_friendships",
                format!(
                    "{} (must be less than the number of users, {})",
                    avg_friendships, num_users
                )
            );
        }

        *self = SocialGraph::new();
        for i in 0..num_users {
            self.add_user(format!("User {}", i + 1));
        }

        let target = avg_friendships.saturating_mul(num_users) / 2;
        let possible = num_users.saturating_mul(num_users - 1) / 2;
        if target * 2 <= possible {
            self.sample_friendships(target, rng)?;
        } else {
            self.shuffle_friendships(target, rng)?;
        }

        tracing::debug!(
            users = self.user_count(),
            friendships = self.friendship_count(),
            "social graph populated"
        );
        Ok(())
    }

    /// Sparse population: draw random pairs until `target` distinct
    /// friendships exist. Memory stays proportional to `target`.
    fn sample_friendships<R>(&mut self, target: usize, rng: &mut R) -> Result<()>
    where
        R: Rng + ?Sized,
    {
        let mut added = 0;
        while added < target {
            let a = rng.gen_range(1..=self.last_id);
            let b = rng.gen_range(1..=self.last_id);
            if a == b || self.are_friends(a, b) {
                continue;
            }
            self.add_friendship(a, b)?;
            added += 1;
        }
        Ok(())
    }

    /// Dense population: shuffle every unordered pair and keep the first
    /// `target`. Only used when `target` is at least half of all pairs.
    fn shuffle_friendships<R>(&mut self, target: usize, rng: &mut R) -> Result<()>
    where
        R: Rng + ?Sized,
    {
        let mut candidates: Vec<(UserId, UserId)> = Vec::new();
        for a in 1..=self.last_id {
            for b in (a + 1)..=self.last_id {
                candidates.push((a, b));
            }
        }
        candidates.shuffle(rng);

        for (a, b) in candidates.into_iter().take(target) {
            self.add_friendship(a, b)?;
        }
        Ok(())
    }

    fn are_friends(&self, a: UserId, b: UserId) -> bool {
        self.friendships
            .neighbors(&a)
            .is_ok_and(|friends| friends.contains(&b))
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Number of undirected friendships
    pub fn friendship_count(&self) -> usize {
        self.friendships.edge_count() / 2
    }

    /// Direct friends of `user`, in ascending id order
    pub fn friends(&self, user: UserId) -> Result<Vec<UserId>> {
        Ok(self.friendships.neighbors(&user)?.iter().copied().collect())
    }

    /// Shortest friendship path from `user` to everyone in their extended
    /// network, including `user` itself
    pub fn get_all_social_paths(&self, user: UserId) -> Result<BTreeMap<UserId, Vec<UserId>>> {
        self.friendships.all_shortest_paths(&user)
    }

    pub fn network_stats(&self, user: UserId) -> Result<NetworkStats> {
        let paths = self.get_all_social_paths(user)?;
        let others: Vec<usize> = paths
            .iter()
            .filter(|(id, _)| **id != user)
            .map(|(_, path)| path.len() - 1)
            .collect();

        let total_users = self.user_count();
        let extended_network_size = others.len();
        let network_percentage = if total_users > 1 {
            extended_network_size as f64 / (total_users - 1) as f64 * 100.0
        } else {
            0.0
        };
        let average_separation = if others.is_empty() {
            0.0
        } else {
            others.iter().sum::<usize>() as f64 / others.len() as f64
        };

        Ok(NetworkStats {
            user,
            extended_network_size,
            total_users,
            network_percentage,
            average_separation,
        })
    }
}
