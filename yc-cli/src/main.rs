//! yc: command-line front end for the Yacht dice bot.
//!
//! Subcommands:
//! - score  evaluate a hand against every category
//! - turn   play one bot turn and print its trace
//! - sim    simulate many solo bot games
//! - duel   play one 1:1 bot game

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};

use yc_bot::{decide_bot_turn, BotTurn, HoldRule, TurnEnd};
use yc_core::{evaluate, Category, ChanceKind, Config, Hand, RollKey, Scoreboard};
use yc_sim::{
    play_duel, render_histogram, roller_for, simulate_games_logged, simulate_games_on,
    DuelOutcome, EventLog,
};

#[derive(Parser, Debug)]
#[command(name = "yc", version, about = "Yacht dice scoring and bot simulation")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the achievable score of every category for a hand.
    Score {
        /// Five dice, each 1-6.
        #[arg(num_args = 5, required = true)]
        dice: Vec<u8>,
    },
    /// Play one bot turn and print every roll, hold and the commitment.
    Turn(TurnArgs),
    /// Simulate solo bot games and summarize the totals.
    Sim(SimArgs),
    /// Play one 1:1 game between two bots.
    Duel {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Dice source: event-keyed or rng.
        #[arg(long, default_value_t = ChanceKind::EventKeyed)]
        chance: ChanceKind,
        /// Append NDJSON events to this file.
        #[arg(long)]
        events: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct TurnArgs {
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 0)]
    turn: u8,
    /// Dice source: event-keyed or rng.
    #[arg(long, default_value_t = ChanceKind::EventKeyed)]
    chance: ChanceKind,
    /// Already-filled categories, e.g. `yacht=50,ones=3`.
    #[arg(long, value_delimiter = ',')]
    filled: Vec<String>,
}

#[derive(Args, Debug)]
struct SimArgs {
    /// YAML config; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    games: Option<u32>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    chance: Option<ChanceKind>,
    #[arg(long)]
    threads: Option<usize>,
    /// Append NDJSON events to this file.
    #[arg(long)]
    events: Option<PathBuf>,
    /// Skip printing the histogram.
    #[arg(long)]
    no_hist: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Score { dice } => cmd_score(&dice),
        Command::Turn(args) => cmd_turn(args),
        Command::Sim(args) => cmd_sim(args),
        Command::Duel {
            seed,
            chance,
            events,
        } => cmd_duel(seed, chance, events),
    }
}

fn cmd_score(dice: &[u8]) -> Result<()> {
    let hand = Hand::new(dice)?;
    println!("Hand: {:?}", hand.dice());
    for (cat, score) in evaluate(&hand).iter() {
        println!("  {:<15} {:>3}", cat.name(), score);
    }
    Ok(())
}

fn parse_filled(entries: &[String]) -> Result<Scoreboard> {
    let mut board = Scoreboard::new();
    for entry in entries.iter().filter(|e| !e.trim().is_empty()) {
        let (name, score) = entry
            .split_once('=')
            .with_context(|| format!("expected category=score, got {:?}", entry))?;
        let cat: Category = name.parse()?;
        let score: u32 = score
            .trim()
            .parse()
            .with_context(|| format!("invalid score in {:?}", entry))?;
        board.record(cat, score)?;
    }
    Ok(board)
}

fn describe_rule(rule: HoldRule) -> String {
    match rule {
        HoldRule::Multiples { face, count } => format!("keep {}x {}", count, face),
        HoldRule::Run { low, high } => format!("keep run {}-{}", low, high),
        HoldRule::HighFaces => "keep faces >= 4".to_string(),
    }
}

fn print_turn(t: &BotTurn) {
    for s in &t.steps {
        match s.hold {
            Some(h) => {
                let marks: String = h
                    .mask
                    .held()
                    .iter()
                    .map(|&held| if held { 'H' } else { '.' })
                    .collect();
                println!(
                    "  roll {}: {:?}  hold [{}] ({})",
                    s.roll_idx + 1,
                    s.hand.dice(),
                    marks,
                    describe_rule(h.rule)
                );
            }
            None => println!("  roll {}: {:?}", s.roll_idx + 1, s.hand.dice()),
        }
    }
    let end = match t.end {
        TurnEnd::EarlyStop(c) => format!("early stop on {}", c),
        TurnEnd::BudgetExhausted => "no rolls left".to_string(),
    };
    let sacrifice = if t.commit.sacrifice { " (sacrifice)" } else { "" };
    println!(
        "  {} -> {} = {}{}",
        end,
        t.category(),
        t.score(),
        sacrifice
    );
}

fn cmd_turn(args: TurnArgs) -> Result<()> {
    let board = parse_filled(&args.filled)?;
    if board.is_complete() {
        bail!("all categories are filled; nothing left to play");
    }
    let mut source = roller_for(args.chance, args.seed);
    let key = RollKey {
        game_seed: args.seed,
        player: 0,
        turn_idx: args.turn,
        roll_idx: 0,
    };
    let t = decide_bot_turn(&board, source.as_mut(), key)?;
    println!("Bot turn (seed={}, turn={}):", args.seed, args.turn);
    print_turn(&t);
    Ok(())
}

fn cmd_sim(args: SimArgs) -> Result<()> {
    let (mut config, config_bytes) = match &args.config {
        Some(path) => {
            let bytes = std::fs::read(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            let text = std::str::from_utf8(&bytes)
                .with_context(|| format!("config {} is not valid UTF-8", path.display()))?;
            let cfg = Config::from_yaml(text)?;
            (cfg, Some(bytes))
        }
        None => (Config::default(), None),
    };
    if let Some(g) = args.games {
        config.sim.games = g;
    }
    if let Some(s) = args.seed {
        config.sim.seed = s;
    }
    if let Some(c) = args.chance {
        config.sim.chance = c;
    }
    if let Some(t) = args.threads {
        config.sim.threads = Some(t);
    }
    if let Some(p) = &args.events {
        config.logging.events_path = Some(p.to_string_lossy().into_owned());
    }
    if config.sim.games == 0 {
        bail!("--games must be at least 1");
    }

    let config_hash = match config_bytes {
        Some(b) => yc_logging::hash_config_bytes(&b),
        None => yc_logging::hash_config_bytes(serde_yaml::to_string(&config)?.as_bytes()),
    };

    let sim = &config.sim;
    let mut log = EventLog::open(&config.logging)?;
    let start = Instant::now();
    let report = match sim.threads {
        Some(t) => simulate_games_on(sim.games as usize, sim.seed, sim.chance, t, log.as_mut())?,
        None => simulate_games_logged(sim.games as usize, sim.seed, sim.chance, log.as_mut())?,
    };
    let elapsed_ms = start.elapsed().as_millis() as u64;

    if let Some(mut log) = log {
        log.log_summary(&report, Some(config_hash), elapsed_ms)?;
        log.finish()?;
    }

    let totals = report.totals();
    let s = report
        .summary()
        .context("simulation produced no games")?;
    println!("Simulation:");
    println!("  - Games: {}", totals.len());
    println!("  - Chance: {}", sim.chance);
    println!(
        "  - Score: mean={:.2}, median={}, std={:.2}, min={}, max={}",
        s.mean, s.median, s.std_dev, s.min, s.max
    );
    println!("  - Yacht rate: {:.1}%", report.yacht_rate() * 100.0);
    println!("  - Elapsed: {} ms", elapsed_ms);

    if !args.no_hist {
        println!();
        print!("{}", render_histogram(&totals));
    }
    Ok(())
}

fn cmd_duel(seed: u64, chance: ChanceKind, events: Option<PathBuf>) -> Result<()> {
    let duel = play_duel(seed, chance)?;

    println!("Duel (seed={}):", seed);
    println!("  {:<15} {:>5} {:>5}", "category", "bot0", "bot1");
    for cat in Category::ALL {
        let cell = |p: usize| duel.boards[p].get(cat).unwrap_or(0);
        println!("  {:<15} {:>5} {:>5}", cat.name(), cell(0), cell(1));
    }
    let [a, b] = duel.totals();
    println!("  {:<15} {:>5} {:>5}", "TOTAL", a, b);
    match duel.outcome() {
        DuelOutcome::Win(p) => println!("Winner: bot{}", p),
        DuelOutcome::Draw => println!("Draw"),
    }

    if let Some(path) = events {
        let cfg = yc_core::LoggingConfig {
            events_path: Some(path.to_string_lossy().into_owned()),
            ..Default::default()
        };
        if let Some(mut log) = EventLog::open(&cfg)? {
            log.log_duel(&duel)?;
            log.finish()?;
        }
    }
    Ok(())
}
