use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;
use MergeGrid::console_interface::parse_grid;
use MergeGrid::core::{apply, can_move, legal_moves, Direction, GameField};

const BOARDS: &[(&str, &str)] = &[
    ("sparse", r#"
    2 . . .
    . . 4 .
    . . . .
    . 2 . .
    "#),
    ("mixed", r#"
    2 . 2 4
    . 4 4 4
    8 8 . .
    2 4 8 16
    "#),
    ("jammed", r#"
    2 4 2 4
    4 2 4 2
    2 4 2 4
    4 2 4 2
    "#),
];

pub fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply");

    for &(board_name, board) in BOARDS {
        let grid = parse_grid(board).unwrap();
        for direction in Direction::ALL {
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", direction), board_name),
                &grid,
                |b, grid| b.iter(|| apply(black_box(grid), black_box(direction))),
            );
        }
    }
    group.finish();
}

pub fn bench_legality(c: &mut Criterion) {
    let mut group = c.benchmark_group("legality");

    for &(board_name, board) in BOARDS {
        let grid = parse_grid(board).unwrap();
        group.bench_with_input(BenchmarkId::new("can_move_left", board_name), &grid, |b, grid| {
            b.iter(|| can_move(black_box(grid), Direction::Left))
        });
        group.bench_with_input(BenchmarkId::new("legal_moves", board_name), &grid, |b, grid| {
            b.iter(|| legal_moves(black_box(grid)))
        });
    }
    group.finish();
}

pub fn bench_playout(c: &mut Criterion) {
    let mut group = c.benchmark_group("playout");
    group.sample_size(20);

    for seed in [1u64, 42] {
        group.bench_with_input(BenchmarkId::new("first_legal_move", seed), &seed, |b, &seed| {
            b.iter_with_setup(
                || GameField::new(4, 4, 2048, StdRng::seed_from_u64(seed)).unwrap(),
                |mut game| {
                    while let Some(direction) = legal_moves(game.grid()).first().copied() {
                        if game.is_win() || game.make_move(direction).is_err() {
                            break;
                        }
                    }
                    black_box(game.score())
                },
            );
        });
    }
    group.finish();
}

criterion_group!(game_benches, bench_apply, bench_legality, bench_playout);
criterion_main!(game_benches);
