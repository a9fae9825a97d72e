//! Integration tests for the Cascadia core
//!
//! Tests the full stack: geometry, tiles, board placement, generation and
//! run scoring

use cascadia_core::{
    board::STARTER_COORDS,
    find_runs, BoardExtent, CascadiaError, GameConfig, Habitat, HabitatTile, HexCoord,
    SalmonOption, SalmonScoring, ScoringEngine, TileBoard, TileGenerator, TileId,
    TileIdAllocator, Wildlife, WildlifeScoring,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// TEST FIXTURES
// ============================================================================

/// Board with salmon keystone tiles at the given cells
fn salmon_board(cells: &[(i32, i32)]) -> (TileBoard, TileIdAllocator) {
    let mut board = TileBoard::new(BoardExtent::default());
    let mut ids = TileIdAllocator::new();
    for &(row, col) in cells {
        add_salmon(&mut board, &mut ids, row, col);
    }
    (board, ids)
}

fn add_salmon(board: &mut TileBoard, ids: &mut TileIdAllocator, row: i32, col: i32) {
    let id = ids.allocate();
    let tile = HabitatTile::new(id, Habitat::River, Habitat::River, vec![Wildlife::Salmon]).unwrap();
    board.place(tile, HexCoord::new(row, col)).unwrap();
    board.place_token(id, Wildlife::Salmon).unwrap();
}

/// Board grown from the starter triple by a seeded generator
fn generated_board(seed: u64, tiles: usize) -> TileBoard {
    let mut generator = TileGenerator::new(seed, 3);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut board = TileBoard::with_starter_tiles(BoardExtent::default(), generator.starter_tiles().unwrap()).unwrap();
    for _ in 0..tiles {
        let frontier = board.candidate_frontier();
        let coord = frontier[rng.gen_range(0..frontier.len())];
        let tile = generator.next_tile().unwrap();
        board.place(tile, coord).unwrap();
    }
    board
}

// ============================================================================
// GEOMETRY TESTS
// ============================================================================

#[test]
fn test_adjacency_symmetry_random() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for _ in 0..500 {
        let a = HexCoord::new(rng.gen_range(-1000..1000), rng.gen_range(-1000..1000));
        let b = HexCoord::new(rng.gen_range(-1000..1000), rng.gen_range(-1000..1000));
        assert_eq!(a.neighbors().contains(&b), b.neighbors().contains(&a));
        for n in a.neighbors() {
            assert!(n.neighbors().contains(&a), "{} -> {}", a, n);
        }
    }
}

#[test]
fn test_neighbors_are_distinct() {
    for row in -3..3 {
        let coord = HexCoord::new(row, 0);
        let mut n = coord.neighbors().to_vec();
        n.sort();
        n.dedup();
        assert_eq!(n.len(), 6);
        assert!(!n.contains(&coord));
    }
}

// ============================================================================
// TILE TESTS
// ============================================================================

#[test]
fn test_rotation_round_trip_random_tiles() {
    let mut generator = TileGenerator::new(5, 3);
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    for _ in 0..100 {
        let mut tile = generator.next_tile().unwrap();
        let original = tile.edge_habitats().unwrap();
        let steps: u8 = rng.gen_range(0..6);
        tile.rotate(steps).unwrap();

        let mut sorted_before = original;
        let mut sorted_after = tile.edge_habitats().unwrap();
        sorted_before.sort();
        sorted_after.sort();
        assert_eq!(sorted_before, sorted_after);

        tile.rotate((6 - steps) % 6).unwrap();
        assert_eq!(tile.edge_habitats().unwrap(), original);
    }
}

#[test]
fn test_token_guard_leaves_tile_unchanged() {
    let mut tile = HabitatTile::new(TileId(0), Habitat::Forest, Habitat::Wetland, vec![Wildlife::Bear, Wildlife::Elk]).unwrap();
    let before = tile.clone();
    assert!(matches!(tile.place_token(Wildlife::Salmon), Err(CascadiaError::InvalidPlacement(_))));
    assert_eq!(tile, before);

    tile.place_token(Wildlife::Elk).unwrap();
    let occupied = tile.clone();
    assert!(matches!(tile.place_token(Wildlife::Bear), Err(CascadiaError::InvalidPlacement(_))));
    assert_eq!(tile, occupied);
}

// ============================================================================
// BOARD TESTS
// ============================================================================

#[test]
fn test_generated_board_invariants() {
    let board = generated_board(11, 25);
    assert_eq!(board.len(), 28);

    for (coord, tile) in board.tiles() {
        assert_eq!(board.coord_of(tile.id()), Some(coord));
        for edge in tile.edges() {
            let across = coord.neighbor(edge.index());
            match edge.link() {
                Some(link) => {
                    let other = board.tile_at(across).unwrap();
                    assert_eq!(link.second_tile, other.id());
                    let back = other.edge(link.second_edge).unwrap().link().unwrap();
                    assert_eq!(back, link.reversed());
                }
                None => assert!(!board.is_occupied(across)),
            }
        }
    }
}

#[test]
fn test_placement_exclusivity() {
    let mut board = generated_board(12, 10);
    let snapshot = board.clone();
    let mut ids = TileIdAllocator::starting_at(10_000);
    for (coord, _) in snapshot.tiles() {
        let tile = HabitatTile::new(ids.allocate(), Habitat::Mountain, Habitat::Prairie, vec![Wildlife::Hawk]).unwrap();
        assert_eq!(board.place(tile, coord), Err(CascadiaError::OccupiedCell(coord)));
    }
    assert_eq!(board, snapshot);
}

#[test]
fn test_starter_frontier() {
    let mut generator = TileGenerator::new(0, 2);
    let board = TileBoard::with_starter_tiles(BoardExtent::default(), generator.starter_tiles().unwrap()).unwrap();
    let frontier = board.candidate_frontier();
    assert_eq!(frontier.len(), 9);
    assert!(STARTER_COORDS.iter().all(|c| !frontier.contains(c)));
}

// ============================================================================
// SCORING TESTS
// ============================================================================

#[test]
fn test_run_values_per_option() {
    let cases = [
        (SalmonOption::S1, [2, 4, 7, 11, 15]),
        (SalmonOption::S2, [2, 4, 8, 12, 12]),
        (SalmonOption::S3, [2, 4, 9, 11, 17]),
    ];
    for (option, expected) in cases {
        let (mut board, mut ids) = salmon_board(&[]);
        for (i, points) in expected.into_iter().enumerate() {
            add_salmon(&mut board, &mut ids, 10, 3 + i as i32);
            assert_eq!(ScoringEngine::calculate_score(&board, option), points, "{} len {}", option, i + 1);
        }
    }
}

#[test]
fn test_branch_invalidation_every_option() {
    let (board, mut ids) = salmon_board(&[(8, 8), (8, 9), (8, 10), (8, 11)]);
    assert_eq!(ScoringEngine::calculate_score(&board, SalmonOption::S1), 11);

    let mut branched = board.clone();
    // Both touch interior tile (8, 9)
    add_salmon(&mut branched, &mut ids, 7, 9);
    add_salmon(&mut branched, &mut ids, 9, 10);
    assert!(branched.same_species_neighbors(HexCoord::new(8, 9), Wildlife::Salmon) >= 3);

    for option in SalmonOption::ALL {
        assert_eq!(ScoringEngine::calculate_score(&branched, option), 0, "{}", option);
    }
    let runs = find_runs(&branched, Wildlife::Salmon);
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].len(), 6);
}

#[test]
fn test_scoring_idempotent_and_pure() {
    let (mut board, mut ids) = salmon_board(&[(3, 3), (3, 4), (4, 4), (12, 12)]);
    add_salmon(&mut board, &mut ids, 15, 2);
    let snapshot = board.clone();
    for option in SalmonOption::ALL {
        let first = ScoringEngine::calculate_score(&board, option);
        let second = ScoringEngine::calculate_score(&board, option);
        assert_eq!(first, second);
    }
    assert_eq!(board, snapshot);
}

#[test]
fn test_token_removal_changes_score() {
    let (mut board, _) = salmon_board(&[(5, 5), (5, 6), (5, 7)]);
    assert_eq!(ScoringEngine::calculate_score(&board, SalmonOption::S1), 7);
    assert_eq!(board.remove_token(TileId(1)).unwrap(), Some(Wildlife::Salmon));
    // Middle gone: two singletons
    assert_eq!(ScoringEngine::calculate_score(&board, SalmonOption::S1), 4);
}

#[test]
fn test_parallel_scoring_matches_sequential() {
    let engine = ScoringEngine::for_config(&GameConfig::default().with_salmon_option(SalmonOption::S3));
    let card = SalmonScoring::new(SalmonOption::S3);
    let boards: Vec<TileBoard> = (0..8)
        .map(|n| {
            let cells: Vec<(i32, i32)> = (0..n).map(|c| (6, c)).collect();
            salmon_board(&cells).0
        })
        .collect();
    let parallel = engine.score_boards(&boards);
    let sequential: Vec<u32> = boards.iter().map(|b| card.calculate_score(b)).collect();
    assert_eq!(parallel, sequential);
}
