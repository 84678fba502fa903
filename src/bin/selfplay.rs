//! Play one game of Halma between four rollout players.

use std::error::Error;
use std::time::Duration;

use clap::Parser;
use flexi_logger::Logger;
use log::info;

use halma_rollout::games::halma::{HalmaBoardBuilder, PLAYER_COUNT};
use halma_rollout::montecarlo::{MonteCarloConfig, MonteCarloPlayer, RedrawMode};
use halma_rollout::rules::Board;
use halma_rollout::PlayerId;

#[derive(Parser, Debug)]
#[command(
    name = "halma-selfplay",
    about = "Play a game of four-player Halma between rollout players"
)]
struct Args {
    /// Completed turns before the game is decided on position
    #[arg(long, default_value_t = 400)]
    max_turns: u32,

    /// Rollout cap per decision
    #[arg(long, default_value_t = 10_000)]
    simulations: u32,

    /// Time budget per decision in milliseconds
    #[arg(long, default_value_t = 970)]
    timeout_ms: u64,

    /// Rollout workers per player
    #[arg(long, default_value_t = 1)]
    workers: usize,

    /// Apply the heuristic-approved draw inside rollouts
    #[arg(long)]
    validated_redraws: bool,

    /// Base random seed; each seat adds its index
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Print the final position
    #[arg(long)]
    render: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    Logger::try_with_env_or_str("info")?
        .format(flexi_logger::colored_default_format)
        .start()?;

    let args = Args::parse();

    let redraw_mode = if args.validated_redraws {
        RedrawMode::Validated
    } else {
        RedrawMode::Preserved
    };

    let mut players = PlayerId::all(PLAYER_COUNT)
        .map(|seat| {
            let config = MonteCarloConfig::default()
                .with_max_simulations(args.simulations)
                .with_timeout(Duration::from_millis(args.timeout_ms))
                .with_workers(args.workers)
                .with_redraw_mode(redraw_mode)
                .with_seed(args.seed + u64::from(seat.0));
            MonteCarloPlayer::new(seat, config)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut board = HalmaBoardBuilder::new().max_turns(args.max_turns).build();
    let mut decisions = 0u32;

    while board.winner().is_none() {
        let seat = board.turn();
        let decision = players[seat.index()].decide(&board)?;
        info!(
            "turn {}: {} ({} rollouts in {} ms, {:.0}/s, {:.1} plies each)",
            board.turns_played(),
            decision.mv,
            decision.stats.trials,
            decision.stats.time_us / 1000,
            decision.stats.trials_per_second(),
            decision.stats.avg_plies_per_trial()
        );
        board.apply_move(&decision.mv);
        decisions += 1;
    }

    if let Some(winner) = board.winner() {
        info!(
            "{} wins after {} turns ({} decisions), {} pieces home",
            winner,
            board.turns_played(),
            decisions,
            board.pieces_home(winner)
        );
    }

    if args.render {
        println!("{}", board);
    }

    Ok(())
}
