//! Console runner: plays one game of Space Race and prints each round.

use std::process::ExitCode;

use clap::Parser;
use space_race::core::{GameConfig, MAX_PLAYERS, MIN_PLAYERS};
use space_race::{Result, SpaceRaceGame};

#[derive(Parser, Debug)]
#[command(name = "space-race")]
#[command(about = "Play a game of Space Race to the finish")]
struct Cli {
    /// Number of players (2-6)
    #[arg(
        long,
        short,
        default_value_t = 2,
        value_parser = clap::value_parser!(u8).range(MIN_PLAYERS as i64..=MAX_PLAYERS as i64)
    )]
    players: u8,

    /// Seed for the dice; random when omitted
    #[arg(long, short)]
    seed: Option<u64>,

    /// Advance one player at a time instead of whole rounds
    #[arg(long)]
    single_step: bool,
}

fn main() -> ExitCode {
    // info+ unless RUST_LOG overrides
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = GameConfig::new(usize::from(cli.players))?;
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let mut game = SpaceRaceGame::from_config(&config)?;
    println!("\tWelcome to Space Race.\n");

    while !game.is_game_complete() {
        if game.round() == 0 {
            println!("\tFirst Round\n");
        } else {
            println!("\tNext Round\n");
        }

        if cli.single_step {
            // one seat per step until the round wraps or the game ends
            loop {
                game.play_round_single_step()?;
                if game.is_game_complete() || game.turn_counter() >= game.number_of_players() {
                    break;
                }
            }
        } else {
            game.play_one_round()?;
        }

        for player in game.players().values() {
            println!(
                "\t{} on square {} with {} yottawatt of power remaining",
                player.name(),
                player.position(),
                player.fuel()
            );
        }
        println!();
    }

    print_results(&game);
    Ok(())
}

fn print_results(game: &SpaceRaceGame) {
    println!("\n\tThe following player(s) finished the game\n");
    for player in game.players().values().filter(|p| p.at_finish()) {
        println!("\t\t{}", player.name());
    }

    if game.all_players_depleted() {
        println!("\n\tAll players ran out of fuel.");
    }

    println!("\n\tIndividual players finished at the locations specified.\n");
    for player in game.players().values() {
        println!(
            "\t\t{} with {} yottawatts of power at square {}",
            player.name(),
            player.fuel(),
            player.position()
        );
    }
}
