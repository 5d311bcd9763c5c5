use std::hint::black_box;
use std::time::Instant;

use bitboard8::{Bitboard, BitboardError, Direction};
use clap::Parser;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Runs a fixed board workload, for use under `--features hotpath`.
#[derive(Parser, Debug)]
#[command(about)]
struct Args {
    /// Number of random boards to push through the workload.
    #[arg(long, default_value_t = 100_000)]
    iterations: usize,

    /// Seed for board generation.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

#[cfg_attr(feature = "hotpath", hotpath::measure)]
fn shift_all(board: Bitboard) -> Bitboard {
    Direction::ALL
        .into_iter()
        .fold(Bitboard::EMPTY, |acc, d| acc | board.shift(d, 1) | board.shift(d, 3))
}

#[cfg_attr(feature = "hotpath", hotpath::measure)]
fn dilate_all(board: Bitboard) -> Bitboard {
    Direction::ALL
        .into_iter()
        .fold(board, |acc, d| acc.dilated(d, 2))
}

#[cfg_attr(feature = "hotpath", hotpath::measure)]
fn string_roundtrip(board: Bitboard) -> Result<Bitboard, BitboardError> {
    board.to_string().parse()
}

fn run(args: &Args) -> Result<u64, BitboardError> {
    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut checksum = 0u64;

    for _ in 0..args.iterations {
        let board = Bitboard::new(rng.next_u64() & rng.next_u64());

        let shifted = shift_all(board);
        let grown = dilate_all(board);
        let moore = board.neighbors_cardinal_and_diagonal();
        let cells = black_box(board.to_position_vector()).len() as u64;
        let parsed = string_roundtrip(board)?;

        checksum = checksum
            .rotate_left(7)
            .wrapping_add(shifted.bits() ^ grown.bits() ^ moore.bits() ^ parsed.bits())
            .wrapping_add(cells);
    }

    Ok(checksum)
}

#[cfg_attr(feature = "hotpath", hotpath::main)]
fn main() {
    env_logger::init();
    let args = Args::parse();

    log::info!("profiling {} boards (seed {})", args.iterations, args.seed);
    let start = Instant::now();
    match run(&args) {
        Ok(checksum) => log::info!(
            "done in {:?}, checksum {:#018x}",
            start.elapsed(),
            checksum
        ),
        Err(e) => {
            log::error!("workload failed: {e}");
            std::process::exit(1);
        }
    }
}
