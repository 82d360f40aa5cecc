use std::error::Error;
use std::io;
use std::process;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use unobot::{
    Bot, Game, GameError, GameSettings, HumanBot, Prompter, RandomBot, SetupCounts, TurnPhase,
    describe_event, init_logging,
};

#[derive(Parser, Debug)]
#[command(name = "uno", about = "Play UNO on the console against humans and AI seats.")]
struct Args {
    /// Seed for the deck shuffle and AI choices (random when omitted)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Total number of players (2-4); prompted for when omitted
    #[arg(short = 'p', long = "players")]
    players: Option<usize>,

    /// Number of AI players, taking the last seats; prompted for when omitted
    #[arg(short = 'a', long = "ai", requires = "players")]
    ai: Option<usize>,

    /// Emit debug-level engine logs on stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut prompter = Prompter::stdio();
    let counts = setup_counts(&args, &mut prompter)?;
    let seed = args.seed.unwrap_or_else(rand::random);

    let mut game = Game::builder(counts.num_players)?
        .with_ai_players(counts.num_ai)
        .with_seed(seed)
        .build()?;
    let settings = game.settings();

    let mut bots: Vec<Box<dyn Bot>> = Vec::with_capacity(settings.num_players);
    for index in 0..settings.num_players {
        bots.push(create_bot(&settings, index, seed));
    }

    loop {
        let active = game.active_player();
        let phase = match game.step(bots[active].as_mut()) {
            Ok(phase) => phase,
            Err(GameError::Aborted) => {
                println!("Exiting game at user's request.");
                break;
            }
            Err(err) => return Err(err.into()),
        };
        for event in game.take_events() {
            if let Some(line) = describe_event(&settings, &event) {
                println!("{line}");
            }
        }
        if phase == TurnPhase::GameOver {
            break;
        }
    }

    println!("Game Over");
    Ok(())
}

fn setup_counts(
    args: &Args,
    prompter: &mut Prompter<io::Stdin, io::Stdout>,
) -> Result<SetupCounts, GameError> {
    match (args.players, args.ai) {
        (Some(num_players), Some(num_ai)) => {
            GameSettings::new(num_players, num_ai)?;
            Ok(SetupCounts {
                num_players,
                num_ai,
            })
        }
        (Some(num_players), None) => {
            GameSettings::new(num_players, 0)?;
            let num_ai = prompter.ask_number(
                &format!("How many AI players? (0–{num_players})"),
                &format!("Invalid. Enter between 0 and {num_players}"),
                0..=num_players,
            )?;
            Ok(SetupCounts {
                num_players,
                num_ai,
            })
        }
        _ => prompter.prompt_setup_counts(),
    }
}

fn create_bot(settings: &GameSettings, index: usize, seed: u64) -> Box<dyn Bot> {
    if settings.is_ai(index) {
        let bot_seed = seed ^ ((index as u64 + 1) * 0x9E37_79B9);
        Box::new(RandomBot::new(StdRng::seed_from_u64(bot_seed)))
    } else {
        Box::new(HumanBot::new(format!("Player {}", index + 1)))
    }
}
