//! Cyber Checkers - play checkers against the computer in a terminal.
//!
//! Settings come from `checkers.toml` (see [`config`]) and can be overridden
//! on the command line. Finished games are stored in a SQLite database and
//! listed with the `history` subcommand.

mod config;
mod input;
mod render;
mod session;

use anyhow::Context;
use checkers_ai::Difficulty;
use checkers_engine::Transition;
use checkers_history::{HistoryStore, SqliteHistoryStore};
use clap::{Parser, Subcommand};
use config::CheckersConfig;
use input::{parse_command, InputError};
use session::{Reply, Session, HUMAN};
use std::io::Write;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cyber-checkers")]
#[command(about = "Checkers against a minimax opponent")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game against the computer
    Play {
        /// Name recorded in the game history
        #[arg(long)]
        name: Option<String>,
        /// Computer strength: easy, medium or hard
        #[arg(short, long)]
        difficulty: Option<Difficulty>,
        /// Pause before each computer move, in milliseconds
        #[arg(long)]
        think_ms: Option<u64>,
        /// Path to the history database
        #[arg(long)]
        db: Option<PathBuf>,
    },
    /// List finished games, newest first
    History {
        /// Print the records as JSON
        #[arg(long)]
        json: bool,
        /// Path to the history database
        #[arg(long)]
        db: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CheckersConfig::load().context("loading checkers.toml")?;

    match cli.command {
        Commands::Play {
            name,
            difficulty,
            think_ms,
            db,
        } => {
            let mut config = config.with_overrides(name, difficulty, think_ms);
            if let Some(db) = db {
                config.history_db = db;
            }
            play(config).await
        }
        Commands::History { json, db } => {
            let path = db.unwrap_or(config.history_db);
            history(&path, json)
        }
    }
}

async fn play(config: CheckersConfig) -> anyhow::Result<()> {
    tracing::info!(
        player = %config.player_name,
        difficulty = %config.difficulty,
        "starting game"
    );

    let store = match SqliteHistoryStore::open(&config.history_db) {
        Ok(store) => Some(store),
        Err(e) => {
            tracing::error!(
                error = %e,
                path = %config.history_db.display(),
                "history disabled"
            );
            None
        }
    };

    let mut session = Session::new(&config);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("{}", input::HELP);

    loop {
        if session.computer_to_move() {
            println!("{}", render::render_board(session.game().state(), &[]));
            println!("computer is thinking...");
            for result in session.computer_turn().await? {
                report(result);
            }
            continue;
        }

        session.record_outcome(store.as_ref().map(|s| s as &dyn HistoryStore));

        let state = session.game().state();
        println!();
        print!("{}", render::render_board(state, &session.game().legal_targets()));
        println!("{}", render::render_status(state, HUMAN));
        if session.game().is_over() {
            println!("type 'reset' for a new game or 'quit' to leave");
        }
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(InputError::Empty) => continue,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match session.handle(command) {
            Reply::Quit => break,
            Reply::Help => println!("{}", input::HELP),
            Reply::Reset => println!("new game"),
            Reply::Played(Transition::Ignored) => println!("not playable here"),
            Reply::Played(result) => report(result),
        }
    }

    Ok(())
}

fn report(result: Transition) {
    match result {
        Transition::Moved { mv, promoted: true } => println!("{mv}, crowned"),
        Transition::Moved { mv, .. } => println!("{mv}"),
        Transition::Continued { mv, at } => println!("{mv}, keep jumping from {at}"),
        Transition::Finished(outcome) => {
            println!("{} wins after {} moves", outcome.winner, outcome.move_count)
        }
        Transition::Selected(_) | Transition::Ignored => {}
    }
}

fn history(path: &std::path::Path, json: bool) -> anyhow::Result<()> {
    let store = SqliteHistoryStore::open(path)
        .with_context(|| format!("opening history at {}", path.display()))?;
    let records = store.list()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("no games played yet");
        return Ok(());
    }
    for record in &records {
        println!(
            "{}  {:<12} vs {:<6} AI  {:<7}  {} moves",
            record.created_at.format("%Y-%m-%d %H:%M"),
            record.player_name,
            record.difficulty,
            if record.is_victory() { "VICTORY" } else { "DEFEAT" },
            record.moves
        );
    }
    Ok(())
}
