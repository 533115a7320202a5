use std::sync::Arc;

use anyhow::anyhow;
use broadside::{create_player, init_logging, play, Rules};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Grid-based naval combat in the terminal.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// First player: human, sweep, hunter or admiral.
    #[arg(long, default_value = "human")]
    first: String,

    /// Second player: human, sweep, hunter or admiral.
    #[arg(long, default_value = "admiral")]
    second: String,

    /// Board rows (1-10).
    #[arg(long, default_value_t = 10)]
    rows: usize,

    /// Board columns (1-10).
    #[arg(long, default_value_t = 10)]
    cols: usize,

    /// Fix the RNG seed for reproducible games (e.g., --seed 12345).
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the pause between turns.
    #[arg(long)]
    no_pause: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let rules = Arc::new(Rules::classic(cli.rows, cli.cols)?);
    let mut first = create_player(&cli.first, "Player 1", rules.clone())
        .ok_or_else(|| anyhow!("unknown player kind: {}", cli.first))?;
    let mut second = create_player(&cli.second, "Player 2", rules.clone())
        .ok_or_else(|| anyhow!("unknown player kind: {}", cli.second))?;

    if let Some(seed) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", seed);
    }
    let mut rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_rng(&mut rand::rng()),
    };

    if play(
        &rules,
        first.as_mut(),
        second.as_mut(),
        &mut rng,
        !cli.no_pause,
    )
    .is_none()
    {
        return Err(anyhow!("a player could not place its fleet"));
    }
    Ok(())
}
