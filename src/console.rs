//! Console front end for a planning session.
//!
//! Reads commands with rustyline, applies them to the session and redraws
//! the current stage after each one.

use colored::*;
use crossterm::{cursor, execute, terminal};
use eyre::Result;
use log::info;
use rand::Rng;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io;

use weekplan::export::{AnsiPalette, render_tag_week, render_week};
use weekplan::session::{Command, DispatchOutcome, Session, Stage, help_text};

/// Display switches taken from the command line.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleOptions {
    pub clear: bool,
    pub verbose: bool,
}

/// How an interactive run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleExit {
    /// User accepted the plan.
    Export,
    /// User quit (or closed input) without exporting.
    Quit,
}

fn clear_console() -> Result<()> {
    execute!(io::stdout(), terminal::Clear(terminal::ClearType::All), cursor::MoveTo(0, 0))?;
    Ok(())
}

fn redraw<R: Rng>(session: &Session<R>, options: ConsoleOptions) -> Result<()> {
    if options.clear {
        clear_console()?;
    }

    match (session.stage(), session.week()) {
        (Stage::Tasks, Some(week)) => print!("{}", render_week(week, session.priorities(), &AnsiPalette)),
        _ => print!(
            "{}",
            render_tag_week(session.plan(), session.priorities(), &AnsiPalette, options.verbose)
        ),
    }
    Ok(())
}

/// Drive `session` from stdin until the user exports or quits.
pub fn run<R: Rng>(session: &mut Session<R>, options: ConsoleOptions) -> Result<ConsoleExit> {
    redraw(session, options)?;
    println!("\n{}", help_text());

    let mut rl = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;

    loop {
        let line = match rl.readline(&format!("{} ", ">".bright_green())) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!();
                return Ok(ConsoleExit::Quit);
            }
            Err(err) => return Err(eyre::eyre!("Readline error: {}", err)),
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(input);

        let command = Command::parse(input);
        match session.apply(&command) {
            DispatchOutcome::Updated => redraw(session, options)?,
            DispatchOutcome::NoAdjustment => {
                println!(
                    "{}",
                    "No more adjustment suggestion available. Regenerate if you're not satisfied with the result."
                        .yellow()
                );
            }
            DispatchOutcome::Invalid(reason) => {
                println!("{} {}", "?".yellow(), reason);
                println!("{}", help_text());
            }
            DispatchOutcome::Help => println!("{}", help_text()),
            DispatchOutcome::Export => {
                info!("Plan accepted");
                return Ok(ConsoleExit::Export);
            }
            DispatchOutcome::Exit => {
                info!("Session exited without export");
                return Ok(ConsoleExit::Quit);
            }
        }
    }
}
