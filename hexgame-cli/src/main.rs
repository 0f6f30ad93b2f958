//! Hexgame CLI - play Hex on the console
//!
//! `hexgame play` sets up a board (from arguments or interactive prompts),
//! designates the first mover, and runs a local two-human game.

use anyhow::bail;
use clap::{Parser, Subcommand};
use hexgame_cli::player::HumanPlayer;
use hexgame_cli::session::Session;
use hexgame_core::{BoardError, Color};
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(name = "hexgame")]
#[command(about = "Play the board game Hex on the console")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a local two-player game
    Play {
        /// Board width; prompted for when omitted
        #[arg(long)]
        width: Option<u32>,
        /// Board height; prompted for when omitted
        #[arg(long)]
        height: Option<u32>,
        /// Color that moves first; prompted for when omitted
        #[arg(long)]
        first: Option<Color>,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            width,
            height,
            first,
        } => play(width, height, first),
    }
}

fn play(width: Option<u32>, height: Option<u32>, first: Option<Color>) -> anyhow::Result<()> {
    let mut session = Session::new();
    size_board(&mut session, width, height)?;

    let first = match first {
        Some(color) => color,
        None => prompt_color()?,
    };
    session.assign(Color::Red, Box::new(HumanPlayer::new(Color::Red)))?;
    session.assign(Color::Blue, Box::new(HumanPlayer::new(Color::Blue)))?;
    session.first_mover(first);

    session.play()?;
    Ok(())
}

fn size_board(
    session: &mut Session,
    width: Option<u32>,
    height: Option<u32>,
) -> anyhow::Result<()> {
    if let (Some(width), Some(height)) = (width, height) {
        // Explicit arguments get no second chance
        return session.board_size(width, height).map_err(Into::into);
    }

    loop {
        let w = width.map_or_else(|| prompt_number("Enter board width: "), Ok)?;
        let h = height.map_or_else(|| prompt_number("Enter board height: "), Ok)?;
        match session.board_size(w, h) {
            Ok(()) => return Ok(()),
            Err(BoardError::InvalidSize) => println!("{}", BoardError::InvalidSize),
            Err(err) => return Err(err.into()),
        }
    }
}

fn prompt_number(prompt: &str) -> anyhow::Result<u32> {
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("{prompt}");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            bail!("input closed during setup");
        }
        match line.trim().parse() {
            Ok(value) => return Ok(value),
            Err(_) => print!("Invalid input. "),
        }
    }
}

fn prompt_color() -> anyhow::Result<Color> {
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("Which color moves first? red or blue: ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            bail!("input closed during setup");
        }
        match line.trim().parse() {
            Ok(color) => return Ok(color),
            Err(_) => print!("Invalid input. "),
        }
    }
}
