//! Elo ratings for the engine pool.
//!
//! Ratings persist in a JSON file so strength estimates accumulate across
//! runs. A whole match updates as `n` games at the pre-match expectation,
//! which overshoots slightly for long one-sided matches but keeps the
//! arithmetic obvious.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::match_runner::MatchResult;

/// Rating assigned to an engine on first sight.
pub const START_RATING: f64 = 1500.0;

/// Update step per game; 32 keeps a small engine pool responsive.
pub const K_FACTOR: f64 = 32.0;

/// Rating state for one engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EngineRating {
    pub rating: f64,
    pub games: u32,
}

impl Default for EngineRating {
    fn default() -> Self {
        Self {
            rating: START_RATING,
            games: 0,
        }
    }
}

/// One finished match as it entered the ratings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub engine1: String,
    pub engine2: String,
    /// Full tally including the cumulative stone margin
    pub result: MatchResult,
    /// Unix seconds when the match was recorded
    pub timestamp: u64,
    /// Rating points engine1 gained; engine2 lost the same amount
    pub elo_change: f64,
}

/// Persistent rating table plus the match history behind it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EloTracker {
    pub engines: HashMap<String, EngineRating>,
    pub history: Vec<MatchRecord>,
}

/// Logistic expectation of a player rated `r1` scoring against `r2`.
fn expected(r1: f64, r2: f64) -> f64 {
    1.0 / (1.0 + 10.0_f64.powf((r2 - r1) / 400.0))
}

impl EloTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a previously saved rating table.
    pub fn load(path: &str) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Bad rating file {}: {}", path, e))
    }

    pub fn save(&self, path: &str) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize ratings: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write {}: {}", path, e))
    }

    /// Current rating, or the starting rating for an unknown engine.
    pub fn rating_of(&self, engine: &str) -> f64 {
        self.engines
            .get(engine)
            .map(|e| e.rating)
            .unwrap_or(START_RATING)
    }

    /// Feed a finished match into the table. Zero-sum: whatever engine1
    /// gains, engine2 loses.
    pub fn update_ratings(&mut self, engine1: &str, engine2: &str, result: &MatchResult) {
        let games = result.total_games();
        if games == 0 {
            return;
        }

        let r1 = self.rating_of(engine1);
        let r2 = self.rating_of(engine2);
        let elo_change = K_FACTOR * games as f64 * (result.score() - expected(r1, r2));

        let e1 = self.engines.entry(engine1.to_string()).or_default();
        e1.rating = r1 + elo_change;
        e1.games += games;

        let e2 = self.engines.entry(engine2.to_string()).or_default();
        e2.rating = r2 - elo_change;
        e2.games += games;

        self.history.push(MatchRecord {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            result: result.clone(),
            timestamp: unix_now(),
            elo_change,
        });
    }

    /// Engines sorted strongest first.
    pub fn leaderboard(&self) -> Vec<(&str, EngineRating)> {
        let mut rows: Vec<_> = self
            .engines
            .iter()
            .map(|(name, r)| (name.as_str(), *r))
            .collect();
        rows.sort_by(|a, b| b.1.rating.total_cmp(&a.1.rating));
        rows
    }

    pub fn print_leaderboard(&self) {
        println!();
        println!("Ratings ({} matches recorded)", self.history.len());
        println!("{:>3}  {:<24} {:>8} {:>6}", "#", "Engine", "Elo", "Games");
        for (place, (name, r)) in self.leaderboard().into_iter().enumerate() {
            println!(
                "{:>3}  {:<24} {:>8.1} {:>6}",
                place + 1,
                name,
                r.rating,
                r.games
            );
        }
        println!();
    }
}

fn unix_now() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
