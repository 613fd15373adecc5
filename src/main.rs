//! Terminal front end: argument handling, rendering, and raw-key input.
//!
//! All game logic lives in the library; this binary owns the screen and the
//! keyboard and feeds one command per turn into a [`GameSession`].

use std::io::{self, Write};

use clap::{ArgAction, Parser};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use twenty48::{Command, Flow, GameSession, TurnStatus};

const CONTROLS: &str = "\
Controls:
  W, Swipe up
  A, Swipe left
  S, Swipe down
  D, Swipe right
  R, Revert move
  X, Restart game
  E, Exit";

/// A 4x4 sliding-tile merge puzzle for the terminal.
#[derive(Parser, Debug)]
#[command(
    name = "twenty48",
    version,
    after_help = CONTROLS,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Args {
    /// Print this help.
    #[arg(short = 'h', short_alias = 'H', long, action = ArgAction::Help)]
    help: (),

    /// Print the version of the binary.
    #[arg(short = 'v', short_alias = 'V', long, action = ArgAction::Version)]
    version: (),
}

fn main() -> io::Result<()> {
    let _args = Args::parse();

    let mut session = GameSession::new();

    loop {
        if session.begin_turn() == TurnStatus::GameOver {
            println!("\nGame Over!");
            break;
        }

        clear_screen()?;
        print_menu();
        print!("{}", session.board());
        io::stdout().flush()?;

        let command = read_command()?;
        let confirmed = if command.needs_confirmation() {
            confirm(command)?
        } else {
            true
        };

        if session.dispatch(command, confirmed) == Flow::Quit {
            break;
        }
    }

    println!("\nThanks for playing!");
    Ok(())
}

fn clear_screen() -> io::Result<()> {
    use crossterm::cursor::MoveTo;
    use crossterm::execute;
    use crossterm::terminal::{Clear, ClearType};

    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
}

fn print_menu() {
    println!("\n\n    Swipe with  : W, A, S, D");
    println!("    Revert move : R");
    println!("    Restart game: X");
    println!("    Exit        : E");
}

/// Block until one character key press, echoing nothing.
fn read_key() -> io::Result<char> {
    terminal::enable_raw_mode()?;
    let key = wait_for_char();
    terminal::disable_raw_mode()?;
    key
}

fn wait_for_char() -> io::Result<char> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                let _ = terminal::disable_raw_mode();
                println!();
                std::process::exit(130);
            }
            if let KeyCode::Char(c) = key.code {
                return Ok(c);
            }
        }
    }
}

/// Read keys until one maps to a command. Only the first unrecognized key
/// gets an `Invalid input.` nudge.
fn read_command() -> io::Result<Command> {
    let mut warned = false;
    loop {
        if let Some(command) = Command::from_key(read_key()?) {
            return Ok(command);
        }
        if !warned {
            println!("Invalid input.");
            warned = true;
        }
    }
}

/// Ask before a destructive command. `y` confirms, `n` declines.
fn confirm(command: Command) -> io::Result<bool> {
    print!("\nAre you sure you want to {command}? Your progress will be lost [Y/N]: ");
    io::stdout().flush()?;

    let mut warned = false;
    loop {
        match read_key()?.to_ascii_lowercase() {
            'y' => {
                println!();
                return Ok(true);
            }
            'n' => {
                println!();
                return Ok(false);
            }
            _ => {
                if !warned {
                    println!("\nInvalid input.");
                    warned = true;
                }
            }
        }
    }
}
