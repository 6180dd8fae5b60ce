//! Match runner for playing games between engines

use othello_core::{disc_diff, legal_moves, Engine, Game, Player, SearchLimits, DEFAULT_DEPTH};
use rand::seq::SliceRandom;
use rand::thread_rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Builds an engine bound to the given player. Engines carry their player
/// identity for life, so color alternation works by rebuilding rather than
/// rebinding.
pub type EngineBuilder<'a> = &'a dyn Fn(Player) -> Box<dyn Engine>;

/// Result of a single game, from one engine's perspective
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// The same game seen from the other engine's side.
    pub fn flipped(self) -> GameResult {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// Game tally over a match, from engine1's perspective.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// Stone margin summed over all games. Positive means engine1 out-scored
    /// its opponent on the boards; a finer signal than the win count when two
    /// engines are close.
    pub stone_diff: i32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally one game and its stone margin, both from engine1's perspective.
    pub fn record(&mut self, game: GameResult, stones: i32) {
        match game {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
        self.stone_diff += stones;
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Match score in [0, 1] from engine1's perspective; a draw counts half.
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Search depth for engines
    pub depth: u8,
    /// Maximum time per move (None = no limit)
    pub time_per_move: Option<Duration>,
    /// Maximum plies per game before scoring the position as it stands
    pub max_plies: u32,
    /// Plies played uniformly at random before the engines take over,
    /// to diversify games between deterministic engines
    pub random_opening_plies: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Print progress during match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: DEFAULT_DEPTH,
            time_per_move: None,
            // 60 placeable stones plus generous slack for skipped turns
            max_plies: 120,
            random_opening_plies: 0,
            alternate_colors: true,
            verbose: true,
        }
    }
}

impl MatchConfig {
    /// Create search limits based on this config
    fn search_limits(&self) -> SearchLimits {
        match self.time_per_move {
            Some(time) => SearchLimits::depth_and_time(self.depth, time),
            None => SearchLimits::depth(self.depth),
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines.
    ///
    /// Returns the result from engine1's perspective.
    pub fn run_match(&self, engine1: EngineBuilder, engine2: EngineBuilder) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            // Alternate colors if configured; engine1 is Black on even games
            let engine1_black = !self.config.alternate_colors || game_num % 2 == 0;

            let (game_result, stones) = if engine1_black {
                let mut black = engine1(Player::Black);
                let mut white = engine2(Player::White);
                self.play_game(black.as_mut(), white.as_mut())
            } else {
                let mut black = engine2(Player::Black);
                let mut white = engine1(Player::White);
                let (r, margin) = self.play_game(black.as_mut(), white.as_mut());
                (r.flipped(), -margin)
            };

            result.record(game_result, stones);

            if self.config.verbose {
                let color = if engine1_black { "B" } else { "W" };
                let outcome = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    color,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        result
    }

    /// Play a single game, returning the result and final stone margin from
    /// Black's perspective.
    ///
    /// The `Game` handles skipped turns and double-pass termination, so an
    /// engine is only consulted while its player has a legal move; an engine
    /// that still proposes an illegal move forfeits.
    fn play_game(&self, black: &mut dyn Engine, white: &mut dyn Engine) -> (GameResult, i32) {
        let mut game = Game::new();
        black.new_game();
        white.new_game();

        for ply in 0..self.config.max_plies {
            if game.is_over() {
                break;
            }

            if ply < self.config.random_opening_plies {
                let moves = legal_moves(game.board(), game.to_move());
                let mv = moves.choose(&mut thread_rng()).copied();
                match mv {
                    Some(mv) => {
                        game.play(mv);
                    }
                    None => game.pass(),
                }
                continue;
            }

            // Fresh limits per move (resets the clock)
            let limits = self.config.search_limits();
            let mover = game.to_move();
            let result = match mover {
                Player::Black => black.search(game.board(), limits),
                Player::White => white.search(game.board(), limits),
            };

            match result.best_move {
                Some(mv) => {
                    if !game.play(mv) {
                        // illegal proposal forfeits the game
                        if self.config.verbose {
                            println!("  {} proposed illegal {}, forfeiting", mover, mv);
                        }
                        let stones = disc_diff(game.board());
                        return match mover {
                            Player::Black => (GameResult::Loss, stones),
                            Player::White => (GameResult::Win, stones),
                        };
                    }
                }
                None => game.pass(),
            }
        }

        // Score by stone count, whether the game finished or hit the ply cap
        let stones = disc_diff(game.board());
        let game_result = match game.winner() {
            Some(Player::Black) => GameResult::Win,
            Some(Player::White) => GameResult::Loss,
            None => GameResult::Draw,
        };
        (game_result, stones)
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: EngineBuilder,
    engine2: EngineBuilder,
    num_games: u32,
    depth: u8,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        depth,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alphabeta_engine::AlphaBetaEngine;
    use othello_core::Engine;
    use random_engine::RandomEngine;

    #[test]
    fn test_match_result_tally() {
        let mut result = MatchResult::new();
        result.record(GameResult::Win, 12);
        result.record(GameResult::Loss, -4);
        result.record(GameResult::Draw, 0);

        assert_eq!(result.total_games(), 3);
        assert_eq!(result.stone_diff, 8);
        assert!((result.score() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_random_self_play_terminates() {
        let config = MatchConfig {
            num_games: 4,
            depth: 1,
            verbose: false,
            ..Default::default()
        };

        let runner = MatchRunner::new(config);
        let result = runner.run_match(
            &|p| Box::new(RandomEngine::new(p)) as Box<dyn Engine>,
            &|p| Box::new(RandomEngine::new(p)) as Box<dyn Engine>,
        );

        assert_eq!(result.total_games(), 4);
    }

    #[test]
    fn test_alphabeta_self_play() {
        let config = MatchConfig {
            num_games: 2,
            depth: 2,
            verbose: false,
            ..Default::default()
        };

        let runner = MatchRunner::new(config);
        let result = runner.run_match(
            &|p| Box::new(AlphaBetaEngine::new(p)) as Box<dyn Engine>,
            &|p| Box::new(AlphaBetaEngine::new(p)) as Box<dyn Engine>,
        );

        assert_eq!(result.total_games(), 2);
    }

    #[test]
    fn test_random_openings_still_terminate() {
        let config = MatchConfig {
            num_games: 2,
            depth: 1,
            random_opening_plies: 6,
            verbose: false,
            ..Default::default()
        };

        let runner = MatchRunner::new(config);
        let result = runner.run_match(
            &|p| Box::new(AlphaBetaEngine::new(p)) as Box<dyn Engine>,
            &|p| Box::new(AlphaBetaEngine::new(p)) as Box<dyn Engine>,
        );

        assert_eq!(result.total_games(), 2);
    }
}
