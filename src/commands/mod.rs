//! CLI commands for graphwalk

pub mod ancestor;
pub mod dispatch;
pub mod input;
pub mod path;
pub mod social;
pub mod traverse;
