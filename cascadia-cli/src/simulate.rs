//! Simulate command - build seeded boards and score them
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: load_config(), build_boards(), score_boards(), report_results()
//! - Level 3: build_board(), place_drawn_token()
//! - Level 4: formatting utilities

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use cascadia_core::{
    find_runs, CascadiaError, GameConfig, HabitatTile, SalmonOption, ScoringEngine, TileBoard,
    TileGenerator, TileId, TokenBag, Wildlife,
};

/// Keeps the token bag's stream apart from the tile stream
const BAG_SEED_SALT: u64 = 0x5A1_0000;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct SimulateArgs {
    /// Game configuration JSON file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of players (one independent board each)
    #[arg(long, default_value = "2")]
    pub players: usize,

    /// Tiles each player places (overrides config)
    #[arg(long)]
    pub tiles: Option<usize>,

    /// Salmon scoring option S1, S2 or S3 (overrides config)
    #[arg(long)]
    pub option: Option<SalmonOption>,

    /// Random seed (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// One player's finished board
#[derive(Clone, Debug)]
struct PlayerRecord {
    player: usize,
    tiles: usize,
    tokens: usize,
    nature_tokens: u32,
    salmon_runs: usize,
    longest_run: usize,
    score: u32,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run simulate command
///
/// 1. Load configuration and apply overrides
/// 2. Build one board per player
/// 3. Score all boards
/// 4. Report results
pub fn run(args: SimulateArgs) -> Result<()> {
    let config = load_config(&args)?;
    let seed = config.seed.unwrap_or_else(rand::random);

    tracing::info!(
        "Simulating {} players, {} tiles each, salmon {} (seed={})",
        args.players,
        config.tiles_per_player,
        config.salmon_option,
        seed
    );

    let boards = build_boards(&config, args.players, seed)?;
    let records = score_boards(&config, &boards);

    report_results(&records, config.salmon_option, args.json);

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Load the config file (or defaults) and apply command-line overrides
fn load_config(args: &SimulateArgs) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => GameConfig::default(),
    };

    if let Some(tiles) = args.tiles {
        config = config.with_tiles_per_player(tiles);
    }
    if let Some(option) = args.option {
        config = config.with_salmon_option(option);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    Ok(config)
}

/// Build every player's board; players are seeded consecutively
fn build_boards(config: &GameConfig, players: usize, seed: u64) -> Result<Vec<(TileBoard, u32)>> {
    (0..players)
        .map(|player| {
            build_board(config, seed.wrapping_add(player as u64))
                .with_context(|| format!("Failed to build board for player {}", player + 1))
        })
        .collect()
}

/// Score boards in parallel and gather per-player statistics
fn score_boards(config: &GameConfig, built: &[(TileBoard, u32)]) -> Vec<PlayerRecord> {
    let engine = ScoringEngine::for_config(config);
    let boards: Vec<TileBoard> = built.iter().map(|(board, _)| board.clone()).collect();
    let scores = engine.score_boards(&boards);

    built
        .iter()
        .zip(scores)
        .enumerate()
        .map(|(i, ((board, nature_tokens), score))| {
            let runs = find_runs(board, Wildlife::Salmon);
            PlayerRecord {
                player: i + 1,
                tiles: board.len(),
                tokens: board.tiles().filter(|(_, tile)| tile.has_token()).count(),
                nature_tokens: *nature_tokens,
                salmon_runs: runs.iter().filter(|run| run.valid).count(),
                longest_run: runs.iter().filter(|run| run.valid).map(|run| run.len()).max().unwrap_or(0),
                score,
            }
        })
        .collect()
}

/// Report simulation results
fn report_results(records: &[PlayerRecord], option: SalmonOption, json: bool) {
    if json {
        print_json_results(records, option);
    } else {
        print_text_results(records, option);
    }
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Starter triple, then each turn: place a random tile on a random
/// frontier cell with a random rotation, then draw a token and put it on a
/// random tile that accepts it
fn build_board(config: &GameConfig, seed: u64) -> Result<(TileBoard, u32)> {
    let mut generator = TileGenerator::new(seed, config.token_options);
    let mut bag = TokenBag::new(seed ^ BAG_SEED_SALT);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut board = TileBoard::with_starter_tiles(config.extent, generator.starter_tiles()?)?;
    let mut nature_tokens = 0;

    for turn in 0..config.tiles_per_player {
        let frontier = board.candidate_frontier();
        let Some(&coord) = frontier.choose(&mut rng) else {
            tracing::warn!("Board is full after {} turns", turn);
            break;
        };

        let mut tile: HabitatTile = generator.next_tile()?;
        tile.rotate(rng.gen_range(0..6))?;
        board.place(tile, coord)?;

        if place_drawn_token(&mut board, &mut bag, &mut rng)? {
            nature_tokens += 1;
        }
    }

    Ok((board, nature_tokens))
}

/// Draw a token and place it; returns whether it earned a nature token.
/// A token nobody can take goes back into the bag.
fn place_drawn_token(board: &mut TileBoard, bag: &mut TokenBag, rng: &mut ChaCha8Rng) -> Result<bool> {
    let Some(token) = bag.draw() else {
        return Ok(false);
    };

    let mut candidates: Vec<TileId> = board
        .tiles()
        .filter(|(_, tile)| tile.accepts(token))
        .map(|(_, tile)| tile.id())
        .collect();
    candidates.sort();

    let Some(&id) = candidates.choose(rng) else {
        tracing::trace!(%token, "no tile accepts token, returning it");
        bag.return_token(token);
        return Ok(false);
    };

    match board.place_token(id, token) {
        Ok(placement) => Ok(placement.earned_nature_token),
        Err(CascadiaError::InvalidPlacement(reason)) => {
            tracing::debug!("Token placement rejected: {}", reason);
            bag.return_token(token);
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

// ============================================================================
// LEVEL 4 - FORMATTING
// ============================================================================

/// Print results as JSON
fn print_json_results(records: &[PlayerRecord], option: SalmonOption) {
    #[derive(serde::Serialize)]
    struct JsonPlayer {
        player: usize,
        tiles: usize,
        tokens: usize,
        nature_tokens: u32,
        salmon_runs: usize,
        longest_run: usize,
        score: u32,
    }

    #[derive(serde::Serialize)]
    struct JsonOutput {
        salmon_option: SalmonOption,
        players: Vec<JsonPlayer>,
    }

    let output = JsonOutput {
        salmon_option: option,
        players: records
            .iter()
            .map(|r| JsonPlayer {
                player: r.player,
                tiles: r.tiles,
                tokens: r.tokens,
                nature_tokens: r.nature_tokens,
                salmon_runs: r.salmon_runs,
                longest_run: r.longest_run,
                score: r.score,
            })
            .collect(),
    };

    if let Ok(json) = serde_json::to_string_pretty(&output) {
        println!("{}", json);
    }
}

/// Print results as text
fn print_text_results(records: &[PlayerRecord], option: SalmonOption) {
    println!("\n=== Salmon Scoring ({}) ===", option);
    for r in records {
        println!(
            "  Player {}: {} points  ({} tiles, {} tokens, {} runs, longest {}, {} nature tokens)",
            r.player, r.score, r.tiles, r.tokens, r.salmon_runs, r.longest_run, r.nature_tokens
        );
    }
    if let Some(best) = records.iter().max_by_key(|r| r.score) {
        println!("Top score: player {} with {}", best.player, best.score);
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> GameConfig {
        GameConfig::default().with_tiles_per_player(12).with_seed(3)
    }

    #[test]
    fn test_build_board_deterministic() {
        let config = small_config();
        let (a, nature_a) = build_board(&config, 42).unwrap();
        let (b, nature_b) = build_board(&config, 42).unwrap();
        assert_eq!(a, b);
        assert_eq!(nature_a, nature_b);
        assert_eq!(a.len(), 3 + 12);
    }

    #[test]
    fn test_build_board_stops_when_full() {
        let mut config = small_config();
        // Smallest extent that still holds the starter cells
        config.extent = cascadia_core::BoardExtent::new(10, 12);
        config.tiles_per_player = 200;
        let (board, _) = build_board(&config, 1).unwrap();
        assert_eq!(board.len(), 120);
        assert!(board.candidate_frontier().is_empty());
    }

    #[test]
    fn test_score_boards_records() {
        let config = small_config();
        let built = build_boards(&config, 3, 7).unwrap();
        let records = score_boards(&config, &built);
        assert_eq!(records.len(), 3);
        for (record, (board, _)) in records.iter().zip(&built) {
            assert_eq!(record.score, ScoringEngine::calculate_score(board, config.salmon_option));
            assert!(record.tokens <= record.tiles);
        }
    }

    #[test]
    fn test_place_drawn_token_returns_unplaceable() {
        let mut board = TileBoard::default();
        let mut bag = TokenBag::new(9);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        assert!(!place_drawn_token(&mut board, &mut bag, &mut rng).unwrap());
        assert_eq!(bag.remaining(), 100);
    }
}
