//! Example generating a puzzle for a requested difficulty band.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle -- --grade tough
//! cargo run --example generate_puzzle -- --grade basic --seed <64 hex chars>
//! ```

use clap::Parser;
use nanpure_generator::{Generator, GeneratorOptions, GeneratorSeed};
use nanpure_solver::Grade;

#[derive(Debug, Parser)]
struct Args {
    /// Difficulty band to target.
    #[arg(long, default_value = "basic")]
    grade: String,

    /// Seed as 64 hexadecimal characters; random when omitted.
    #[arg(long)]
    seed: Option<GeneratorSeed>,

    /// Candidate evaluation budget.
    #[arg(long, default_value_t = 2000)]
    max_attempts: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let grade = Grade::ALL
        .into_iter()
        .find(|g| g.name() == args.grade)
        .unwrap_or_else(|| panic!("unknown grade: {}", args.grade));
    let seed = args.seed.unwrap_or_else(rand::random);

    let mut generator = Generator::with_seed(seed);
    let options = GeneratorOptions {
        max_attempts: args.max_attempts,
        ..GeneratorOptions::default()
    };
    let result = generator
        .by_grade(grade, &options)
        .expect("generation produced no candidate");

    println!("Seed:");
    println!("  {seed}");
    println!();
    println!("Puzzle ({} clues, difficulty {}):", result.clues, result.difficulty);
    println!("{:#}", result.puzzle);
}
