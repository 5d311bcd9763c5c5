use bitboard8::{compass, Bitboard, Direction, Position};
use criterion::{criterion_group, criterion_main, Criterion};
use rand::prelude::*;
use rand::rngs::StdRng;
use std::hint::black_box;

/// Boards of mixed density from a fixed seed so runs are comparable.
fn setup_boards(count: usize) -> Vec<Bitboard> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| Bitboard::new(rng.next_u64() & rng.next_u64()))
        .collect()
}

// ---------------------------------------------------------------------------
// Microbenchmarks
// ---------------------------------------------------------------------------

fn bench_shift_runtime(c: &mut Criterion) {
    let boards = setup_boards(256);
    c.bench_function("shift_runtime_all_directions", |b| {
        b.iter(|| {
            let mut acc = Bitboard::EMPTY;
            for &board in &boards {
                for direction in Direction::ALL {
                    acc ^= board.shift(black_box(direction), black_box(2));
                }
            }
            black_box(acc)
        })
    });
}

fn bench_shift_compile_time(c: &mut Criterion) {
    let boards = setup_boards(256);
    c.bench_function("shift_compile_time_up_left", |b| {
        b.iter(|| {
            let mut acc = Bitboard::EMPTY;
            for &board in &boards {
                acc ^= board.shift_toward::<compass::UpLeft>(black_box(2));
            }
            black_box(acc)
        })
    });
}

fn bench_shift_by(c: &mut Criterion) {
    let boards = setup_boards(256);
    let offset = Position::new(-2, 3);
    c.bench_function("shift_by_offset", |b| {
        b.iter(|| {
            let mut acc = Bitboard::EMPTY;
            for &board in &boards {
                acc ^= board.shift_by(black_box(offset));
            }
            black_box(acc)
        })
    });
}

fn bench_dilate(c: &mut Criterion) {
    let boards = setup_boards(256);
    c.bench_function("dilate_down_right_4", |b| {
        b.iter(|| {
            let mut acc = Bitboard::EMPTY;
            for &board in &boards {
                acc ^= board.dilated(Direction::DownRight, black_box(4));
            }
            black_box(acc)
        })
    });
}

fn bench_neighbors(c: &mut Criterion) {
    let boards = setup_boards(256);
    c.bench_function("neighbors_cardinal_and_diagonal", |b| {
        b.iter(|| {
            let mut acc = Bitboard::EMPTY;
            for &board in &boards {
                acc ^= board.neighbors_cardinal_and_diagonal();
            }
            black_box(acc)
        })
    });
}

fn bench_to_position_vector(c: &mut Criterion) {
    let boards = setup_boards(256);
    c.bench_function("to_position_vector", |b| {
        b.iter(|| {
            for board in &boards {
                black_box(board.to_position_vector());
            }
        })
    });
}

// ---------------------------------------------------------------------------
// Text encoding
// ---------------------------------------------------------------------------

fn bench_string_roundtrip(c: &mut Criterion) {
    let boards = setup_boards(64);
    c.bench_function("string_roundtrip", |b| {
        b.iter(|| {
            for board in &boards {
                let parsed: Bitboard = board.to_string().parse().expect("valid board string");
                black_box(parsed);
            }
        })
    });
}

criterion_group!(
    benches,
    bench_shift_runtime,
    bench_shift_compile_time,
    bench_shift_by,
    bench_dilate,
    bench_neighbors,
    bench_to_position_vector,
    bench_string_roundtrip,
);
criterion_main!(benches);
