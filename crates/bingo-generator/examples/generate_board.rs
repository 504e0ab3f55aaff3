//! Example demonstrating bingo board generation.
//!
//! This example shows how to:
//! - Create a `BoardGenerator`
//! - Generate a random board, or reproduce one from its seed
//! - Sample many boards in parallel and report how many draws rejection
//!   sampling needed
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_board
//! ```
//!
//! Reproduce a board from a seed:
//!
//! ```sh
//! cargo run --example generate_board -- --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! ```
//!
//! Sample boards and print draw statistics:
//!
//! ```sh
//! cargo run --example generate_board -- --samples 100000
//! ```

use std::process;

use bingo_core::{Number, Position};
use bingo_generator::{BoardGenerator, BoardSeed, GeneratedBoard};
use clap::Parser;
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed (64 hex digits) to reproduce a specific board.
    #[arg(long, value_name = "SEED", conflicts_with = "samples")]
    seed: Option<BoardSeed>,

    /// Number of boards to sample for draw statistics.
    #[arg(long, value_name = "COUNT")]
    samples: Option<usize>,
}

fn main() {
    let args = Args::parse();
    let generator = BoardGenerator::new();

    if let Some(samples) = args.samples {
        if samples == 0 {
            eprintln!("--samples must be at least 1.");
            process::exit(1);
        }
        print_sample_stats(&generator, samples);
        return;
    }

    let generated = match args.seed {
        Some(seed) => generator.generate_with_seed(seed),
        None => generator.generate(),
    };
    print_board(&generated);
}

fn print_board(generated: &GeneratedBoard) {
    println!("Seed:");
    println!("  {}", generated.seed);
    println!();
    println!("Board:");
    for line in generated.board.to_string().lines() {
        println!("  {line}");
    }
    println!();
    println!("Draws: {}", generated.draws);
}

fn print_sample_stats(generator: &BoardGenerator, samples: usize) {
    let (total_draws, max_draws, center_counts) = (0..samples)
        .into_par_iter()
        .map(|_| {
            let generated = generator.generate();
            let mut center = [0usize; 25];
            center[generated.board[Position::new(2, 2)].index()] = 1;
            (generated.draws, generated.draws, center)
        })
        .reduce(
            || (0, 0, [0; 25]),
            |a, b| {
                let mut center = a.2;
                for (c, n) in center.iter_mut().zip(b.2) {
                    *c += n;
                }
                (a.0 + b.0, a.1.max(b.1), center)
            },
        );

    #[expect(clippy::cast_precision_loss)]
    let mean = total_draws as f64 / samples as f64;
    println!("Samples: {samples}");
    println!("Draws per board:");
    println!("  mean: {mean:.2}");
    println!("  max: {max_draws}");
    println!();
    println!("Center cell distribution:");
    for (number, count) in Number::all().zip(center_counts) {
        println!("  {number:>2}: {count}");
    }
}
