//! Headless simulation: play whole games with a fixed policy and summarize them.
//!
//! Every episode `i` is seeded with `seed + i`, so a run is reproducible from
//! its seed, policy and step limit alone.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, info};

use crate::core::{GameConfig, GameState, Result, SimpleRng, TileRng};
use crate::types::{Cell, Direction};

/// How the simulated player picks its next move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Uniformly random among the moves that change the board
    Random,
    /// First legal move in the order Left, Down, Right, Up, resuming after the last pick
    Cycle,
}

const CYCLE_ORDER: [Direction; 4] = [
    Direction::Left,
    Direction::Down,
    Direction::Right,
    Direction::Up,
];

/// Offset separating the policy's random stream from the spawn stream.
const POLICY_SEED_SALT: u64 = 0x9e37_79b9_7f4a_7c15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadlessConfig {
    pub game: GameConfig,
    pub episodes: u32,
    pub seed: u64,
    /// Moves per episode before giving up (0 = play until the game is over)
    pub max_steps: u32,
    pub policy: Policy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EpisodeSummary {
    pub episode: u32,
    pub seed: u64,
    pub score: u64,
    pub max_tile: Cell,
    pub moves: u32,
    pub won: bool,
    pub over: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub episodes: u32,
    pub policy: Policy,
    pub seed: u64,
    pub size: usize,
    pub target: Cell,
    pub avg_score: f64,
    pub median_score: f64,
    pub min_score: u64,
    pub max_score: u64,
    pub max_tile: Cell,
    pub wins: u32,
    /// Highest tile reached per episode -> number of episodes
    pub tile_distribution: BTreeMap<Cell, u32>,
    pub runs: Vec<EpisodeSummary>,
}

/// Stateful move picker for one episode.
#[derive(Debug, Clone)]
pub struct Player {
    policy: Policy,
    rng: SimpleRng,
    cursor: usize,
}

impl Player {
    pub fn new(policy: Policy, seed: u64) -> Self {
        Self {
            policy,
            rng: SimpleRng::new(seed ^ POLICY_SEED_SALT),
            cursor: 0,
        }
    }

    /// Choose among the directions flagged legal (indexed like `Direction::ALL`).
    pub fn choose(&mut self, legal: [bool; 4]) -> Option<Direction> {
        match self.policy {
            Policy::Random => {
                let options: Vec<Direction> = Direction::ALL
                    .into_iter()
                    .filter(|d| legal[d.index()])
                    .collect();
                if options.is_empty() {
                    return None;
                }
                Some(options[self.rng.pick_uniform(options.len())])
            }
            Policy::Cycle => {
                for _ in 0..CYCLE_ORDER.len() {
                    let dir = CYCLE_ORDER[self.cursor % CYCLE_ORDER.len()];
                    self.cursor += 1;
                    if legal[dir.index()] {
                        return Some(dir);
                    }
                }
                None
            }
        }
    }
}

/// Play one game to completion (or to `max_steps`).
pub fn play_episode<R: TileRng>(
    game: &mut GameState<R>,
    player: &mut Player,
    max_steps: u32,
) -> Result<()> {
    let mut steps = 0u32;
    while !game.over() && (max_steps == 0 || steps < max_steps) {
        let Some(dir) = player.choose(game.legal_directions()) else {
            break;
        };
        game.apply_move(dir)?;
        steps += 1;
    }
    Ok(())
}

/// Run every episode and aggregate the results.
pub fn run(config: &HeadlessConfig) -> Result<RunSummary> {
    let mut runs = Vec::with_capacity(config.episodes as usize);

    for episode in 0..config.episodes {
        let seed = config.seed.wrapping_add(u64::from(episode));
        let mut game = GameState::new(config.game, seed)?;
        let mut player = Player::new(config.policy, seed);
        play_episode(&mut game, &mut player, config.max_steps)?;

        let summary = EpisodeSummary {
            episode,
            seed,
            score: game.score(),
            max_tile: game.max_tile(),
            moves: game.moves(),
            won: game.won(),
            over: game.over(),
        };
        debug!(
            episode,
            score = summary.score,
            max_tile = summary.max_tile,
            moves = summary.moves,
            "episode finished"
        );
        runs.push(summary);
    }

    let summary = summarize(config, runs);
    info!(
        episodes = summary.episodes,
        avg_score = summary.avg_score,
        max_tile = summary.max_tile,
        wins = summary.wins,
        "simulation finished"
    );
    Ok(summary)
}

fn summarize(config: &HeadlessConfig, runs: Vec<EpisodeSummary>) -> RunSummary {
    let mut scores: Vec<u64> = runs.iter().map(|r| r.score).collect();
    scores.sort_unstable();

    let n = scores.len();
    let avg_score = if n == 0 {
        0.0
    } else {
        scores.iter().sum::<u64>() as f64 / n as f64
    };
    let median_score = match n {
        0 => 0.0,
        _ if n % 2 == 0 => (scores[n / 2 - 1] + scores[n / 2]) as f64 / 2.0,
        _ => scores[n / 2] as f64,
    };

    let mut tile_distribution = BTreeMap::new();
    for r in &runs {
        *tile_distribution.entry(r.max_tile).or_insert(0u32) += 1;
    }

    RunSummary {
        episodes: config.episodes,
        policy: config.policy,
        seed: config.seed,
        size: config.game.size,
        target: config.game.target,
        avg_score,
        median_score,
        min_score: scores.first().copied().unwrap_or(0),
        max_score: scores.last().copied().unwrap_or(0),
        max_tile: runs.iter().map(|r| r.max_tile).max().unwrap_or(0),
        wins: runs.iter().filter(|r| r.won).count() as u32,
        tile_distribution,
        runs,
    }
}
