//! Tournament Runner for the Othello arena
//!
//! This crate provides infrastructure for:
//! - Running matches between different engines
//! - Tracking Elo ratings across engine versions
//! - Generating reports for engine comparison
//!
//! # Usage
//!
//! ```bash
//! # Run a match between the alpha-beta and random engines
//! cargo run -p tournament -- match alphabeta random --games 100
//!
//! # Run a gauntlet (one engine vs all baselines)
//! cargo run -p tournament -- gauntlet alphabeta --games 50
//! ```

mod elo;
mod match_runner;
mod results;

pub use elo::*;
pub use match_runner::*;
pub use results::*;
