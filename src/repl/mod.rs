//! Interactive REPL for browsing chord voicings

use crate::commands::{create_registry, parse_string_fret, CommandContext, CommandResult};
use anyhow::Result;
use colored::*;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RustylineResult};

/// Interactive voicing-finder REPL
pub struct Repl {
    editor: DefaultEditor,
    ctx: CommandContext,
}

impl Repl {
    /// Create a new REPL instance
    pub fn new() -> RustylineResult<Self> {
        let editor = DefaultEditor::new()?;
        Ok(Repl {
            editor,
            ctx: CommandContext::new(),
        })
    }

    /// Start the REPL loop
    pub fn run(&mut self) -> Result<()> {
        println!(
            "{} {}",
            "🎸".bright_yellow(),
            "Fretfinder Chord Voicing Explorer".bright_cyan().bold()
        );
        println!(
            "Pick a fretted note and find every diatonic 7th-chord voicing through it: {}",
            "find 2 5".cyan()
        );
        println!(
            "Type '{}' for more information, '{}' or {} to exit.\n",
            "help".bright_green(),
            "quit".bright_red(),
            "Ctrl+C".bright_red()
        );

        let registry = create_registry();

        loop {
            let prompt = format!(
                "{} ",
                format!("{} {}>", self.ctx.key, self.ctx.scale)
                    .bright_magenta()
                    .bold()
            );
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim().to_string();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = self.editor.add_history_entry(&line);

                    match registry.execute(&line, &mut self.ctx) {
                        CommandResult::Success => {}
                        CommandResult::Message(msg) => {
                            println!("{}", msg);
                        }
                        CommandResult::Exit => {
                            println!("{} 🎸", "Goodbye!".bright_cyan());
                            break;
                        }
                        CommandResult::Error(e) => {
                            println!("{} {}", "Error:".bright_red().bold(), e.red());
                        }
                        CommandResult::NotACommand => {
                            // A bare "<string> <fret>" runs a search directly
                            match parse_string_fret(&line) {
                                Some((string, fret)) => {
                                    match self.ctx.run_find(string, fret) {
                                        CommandResult::Message(msg) => println!("{}", msg),
                                        CommandResult::Error(e) => println!(
                                            "{} {}",
                                            "Error:".bright_red().bold(),
                                            e.red()
                                        ),
                                        _ => {}
                                    }
                                }
                                None => println!(
                                    "{} Unknown command \"{}\". Type '{}' for usage.",
                                    "Error:".bright_red().bold(),
                                    line,
                                    "help".bright_green()
                                ),
                            }
                        }
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    println!("{} 🎸", "Goodbye!".bright_cyan());
                    break;
                }
                Err(err) => {
                    println!(
                        "{} {}",
                        "Error reading input:".bright_red().bold(),
                        err.to_string().red()
                    );
                }
            }
        }

        Ok(())
    }
}

/// Convenience function to start the REPL
pub fn start() -> Result<()> {
    let mut repl = Repl::new().map_err(|e| anyhow::anyhow!("Failed to initialize REPL: {}", e))?;
    repl.run()
}
