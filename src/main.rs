use clap::Parser;
use colored::Colorize;
use holdem::Chips;
use holdem::gameplay::Blinds;
use holdem::gameplay::Dealer;
use holdem::gameplay::GameState;
use holdem::gameplay::Outcome;
use holdem::players::Roster;
use holdem::players::Sizing;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[derive(Parser)]
#[command(author, version, about = "Seat a table of bots and deal hands", long_about = None)]
struct Args {
    /// players at the table, bots in every seat
    #[arg(long, default_value_t = holdem::DEFAULT_NUM_OPPONENTS + 1)]
    players: usize,
    #[arg(long, default_value_t = holdem::DEFAULT_STARTING_STACK)]
    stack: Chips,
    #[arg(long, default_value_t = holdem::DEFAULT_SMALL_BLIND)]
    small_blind: Chips,
    #[arg(long, default_value_t = holdem::DEFAULT_BIG_BLIND)]
    big_blind: Chips,
    /// stop after this many hands, or sooner if one player has every chip
    #[arg(long, default_value_t = 10)]
    hands: usize,
    #[arg(long)]
    seed: Option<u64>,
    /// cycle through the bot presets instead of drawing them at random
    #[arg(long)]
    mixed: bool,
    /// let bots size their own raises instead of betting one big blind
    #[arg(long)]
    engine_sizing: bool,
    /// print a JSON summary instead of logging
    #[arg(long)]
    json: bool,
}

#[derive(serde::Serialize)]
struct Summary {
    seed: u64,
    styles: Vec<String>,
    stacks: Vec<Chips>,
    outcomes: Vec<Outcome>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if !args.json {
        holdem::log()?;
    }
    anyhow::ensure!(
        (2..=holdem::MAX_PLAYERS).contains(&args.players),
        "players must be between 2 and {}",
        holdem::MAX_PLAYERS
    );
    anyhow::ensure!(args.small_blind <= args.big_blind, "small blind exceeds big blind");
    let seed = args.seed.unwrap_or_else(rand::random);
    let ref mut rng = SmallRng::seed_from_u64(seed);
    let mut roster = Roster::new(args.players, args.mixed, seed);
    if args.engine_sizing {
        roster = Roster::from_robots(
            roster
                .iter()
                .cloned()
                .map(|robot| robot.with_sizing(Sizing::Engine))
                .collect(),
        );
    }
    let blinds = Blinds::new(args.small_blind, args.big_blind);
    let mut game = GameState::new(args.players, args.stack, blinds);
    for (id, robot) in roster.iter().enumerate() {
        log::info!("P{} {}", id, robot);
    }
    let mut outcomes = Vec::with_capacity(args.hands);
    while outcomes.len() < args.hands && game.players().iter().filter(|p| p.stack() > 0).count() > 1 {
        outcomes.push(Dealer::play(&mut game, &mut roster, rng));
    }
    let stacks = game.players().iter().map(|p| p.stack()).collect::<Vec<Chips>>();
    if args.json {
        let summary = Summary {
            seed,
            styles: roster.iter().map(|r| r.bot().style().to_string()).collect(),
            stacks,
            outcomes,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        log::info!("{} hands played, seed {}", outcomes.len(), seed);
        for (id, stack) in stacks.iter().enumerate() {
            let line = format!("P{:<3}{:>8}", id, stack);
            match stack.cmp(&args.stack) {
                std::cmp::Ordering::Greater => println!("{}", line.green()),
                std::cmp::Ordering::Less => println!("{}", line.red()),
                std::cmp::Ordering::Equal => println!("{}", line),
            }
        }
    }
    Ok(())
}
