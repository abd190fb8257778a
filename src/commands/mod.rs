//! Command registry for REPL commands
//!
//! Prefix-matched commands mutating the current query context (key,
//! scale, family, tensions, span) or running a voicing search.

use crate::display;
use colored::*;
use fretfinder_core::engine::{search, SearchQuery};
use fretfinder_core::theory::{diatonic_seventh_chords, scale_formula, scale_names, VoicingFamily};
use fretfinder_core::types::Note;

/// Result of executing a command
#[derive(Debug)]
pub enum CommandResult {
    /// Command executed successfully, continue REPL
    Success,
    /// Command executed, show this message
    Message(String),
    /// Exit the REPL
    Exit,
    /// Not a command, try parsing as a bare "<string> <fret>" query
    NotACommand,
    /// Error occurred
    Error(String),
}

/// Current query settings the commands read and mutate
pub struct CommandContext {
    pub key: String,
    pub scale: String,
    pub family: VoicingFamily,
    pub tensions: bool,
    /// None = per-family default span
    pub span: Option<u8>,
    pub json: bool,
}

impl CommandContext {
    pub fn new() -> Self {
        Self {
            key: "C".to_string(),
            scale: "Major".to_string(),
            family: VoicingFamily::ClosedRootPosition,
            tensions: false,
            span: None,
            json: false,
        }
    }

    /// Run a search for the given anchor under the current settings and
    /// render the results
    pub fn run_find(&self, string: u8, fret: u8) -> CommandResult {
        let mut query = SearchQuery::new(&self.key, &self.scale, string, fret, self.family)
            .with_tensions(self.tensions);
        if let Some(span) = self.span {
            query = query.with_max_span(span);
        }

        let results = match search(&query) {
            Ok(results) => results,
            Err(e) => return CommandResult::Error(e.to_string()),
        };

        if results.is_empty() {
            return CommandResult::Message(format!(
                "No voicings found for that note in {} {} ({}).",
                self.key,
                self.scale,
                self.family.label()
            ));
        }

        if self.json {
            match serde_json::to_string_pretty(&display::to_json_rows(&results)) {
                Ok(json) => return CommandResult::Message(json),
                Err(e) => return CommandResult::Error(e.to_string()),
            }
        }

        let header = format!(
            "{} voicing(s) in {} {} - {}{}",
            results.len(),
            self.key,
            self.scale,
            self.family.label(),
            if self.tensions { " + tensions" } else { "" }
        );
        let mut out = format!("{}\n", header.bold());
        for (i, voicing) in results.iter().enumerate() {
            out.push_str(&display::format_row_colored(i, voicing));
            out.push('\n');
        }
        CommandResult::Message(out)
    }
}

impl Default for CommandContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A command handler function
pub type CommandHandler = fn(&str, &mut CommandContext) -> CommandResult;

/// Registry of available commands
pub struct CommandRegistry {
    /// Commands indexed by their prefix, sorted by prefix length
    /// descending for longest-match-first lookup
    commands: Vec<(String, CommandHandler)>,
}

impl CommandRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Register a command with its prefix
    pub fn register(&mut self, prefix: &str, handler: CommandHandler) {
        self.commands.push((prefix.to_string(), handler));
        self.commands.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    }

    /// Execute a command, returning NotACommand if no match found
    pub fn execute(&self, input: &str, ctx: &mut CommandContext) -> CommandResult {
        for (prefix, handler) in &self.commands {
            if input == prefix || input.starts_with(&format!("{} ", prefix)) {
                let args = if input.len() > prefix.len() {
                    input[prefix.len()..].trim()
                } else {
                    ""
                };
                return handler(args, ctx);
            }
        }
        CommandResult::NotACommand
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle `find <string> <fret>`
pub fn cmd_find(args: &str, ctx: &mut CommandContext) -> CommandResult {
    match parse_string_fret(args) {
        Some((string, fret)) => ctx.run_find(string, fret),
        None => CommandResult::Error("Usage: find <string 1-6> <fret 0-24>".to_string()),
    }
}

/// Parse "<string> <fret>" into numbers; range checking is left to the
/// engine so its error messages stay authoritative
pub fn parse_string_fret(args: &str) -> Option<(u8, u8)> {
    let mut parts = args.split_whitespace();
    let string = parts.next()?.parse().ok()?;
    let fret = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((string, fret))
}

/// Handle `key [name]`
pub fn cmd_key(args: &str, ctx: &mut CommandContext) -> CommandResult {
    if args.is_empty() {
        return CommandResult::Message(format!("Current key: {}", ctx.key));
    }
    match Note::parse_key(args) {
        Ok(note) => {
            ctx.key = note.name().to_string();
            CommandResult::Message(format!("Key set to {}", ctx.key.bright_green()))
        }
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

/// Handle `scale [name]`
pub fn cmd_scale(args: &str, ctx: &mut CommandContext) -> CommandResult {
    if args.is_empty() {
        return CommandResult::Message(format!("Current scale: {}", ctx.scale));
    }
    match scale_formula(args) {
        Some(formula) => {
            ctx.scale = args.trim().to_string();
            if formula.len() == 7 {
                CommandResult::Message(format!("Scale set to {}", ctx.scale.bright_green()))
            } else {
                CommandResult::Message(format!(
                    "Scale set to {} ({} notes - no stacked-thirds chords, searches will be empty)",
                    ctx.scale.bright_green(),
                    formula.len()
                ))
            }
        }
        None => CommandResult::Error(format!(
            "Unknown scale \"{}\". Type {} for the catalog.",
            args,
            "scales".cyan()
        )),
    }
}

/// Handle `family [root|drop2|drop3]`
pub fn cmd_family(args: &str, ctx: &mut CommandContext) -> CommandResult {
    if args.is_empty() {
        return CommandResult::Message(format!("Current family: {}", ctx.family.label()));
    }
    let family = match args.to_lowercase().replace(' ', "").as_str() {
        "root" | "rootpos" | "closed" => VoicingFamily::ClosedRootPosition,
        "drop2" => VoicingFamily::Drop2,
        "drop3" => VoicingFamily::Drop3,
        _ => return CommandResult::Error("Family must be root, drop2 or drop3".to_string()),
    };
    ctx.family = family;
    CommandResult::Message(format!("Family set to {}", family.label().bright_green()))
}

/// Handle `tensions [on|off]`
pub fn cmd_tensions(args: &str, ctx: &mut CommandContext) -> CommandResult {
    match args {
        "" => CommandResult::Message(format!(
            "Tensions: {}",
            if ctx.tensions { "on" } else { "off" }
        )),
        "on" => {
            ctx.tensions = true;
            CommandResult::Message("Tensions on".to_string())
        }
        "off" => {
            ctx.tensions = false;
            CommandResult::Message("Tensions off".to_string())
        }
        _ => CommandResult::Error("Usage: tensions [on|off]".to_string()),
    }
}

/// Handle `span [n|auto]`
pub fn cmd_span(args: &str, ctx: &mut CommandContext) -> CommandResult {
    match args {
        "" => CommandResult::Message(match ctx.span {
            Some(n) => format!("Max fret span: {}", n),
            None => "Max fret span: auto (4 closed, 5 drop/tension)".to_string(),
        }),
        "auto" => {
            ctx.span = None;
            CommandResult::Message("Max fret span: auto".to_string())
        }
        n => match n.parse::<u8>() {
            Ok(span) if (1..=12).contains(&span) => {
                ctx.span = Some(span);
                CommandResult::Message(format!("Max fret span: {}", span))
            }
            _ => CommandResult::Error("Span must be 1-12, or auto".to_string()),
        },
    }
}

/// Handle `json [on|off]`
pub fn cmd_json(args: &str, ctx: &mut CommandContext) -> CommandResult {
    match args {
        "" => CommandResult::Message(format!(
            "JSON output: {}",
            if ctx.json { "on" } else { "off" }
        )),
        "on" => {
            ctx.json = true;
            CommandResult::Message("JSON output on".to_string())
        }
        "off" => {
            ctx.json = false;
            CommandResult::Message("JSON output off".to_string())
        }
        _ => CommandResult::Error("Usage: json [on|off]".to_string()),
    }
}

/// Handle `chords`: list the diatonic 7th chords of the current scale
pub fn cmd_chords(_args: &str, ctx: &mut CommandContext) -> CommandResult {
    let root = match Note::parse_key(&ctx.key) {
        Ok(note) => note,
        Err(e) => return CommandResult::Error(e.to_string()),
    };
    let chords = diatonic_seventh_chords(root, &ctx.scale);
    if chords.is_empty() {
        return CommandResult::Message(format!(
            "{} {} has no stacked-thirds 7th chords (not a 7-note scale).",
            ctx.key, ctx.scale
        ));
    }
    let mut out = format!(
        "{}\n",
        format!("Diatonic 7ths in {} {}:", ctx.key, ctx.scale).bold()
    );
    for chord in chords {
        let tones: Vec<&str> = chord.tones().iter().map(|n| n.name()).collect();
        out.push_str(&format!(
            "  {:<8} {} ({})\n",
            chord.symbol().bright_cyan(),
            chord.quality.display_name(),
            tones.join(" ")
        ));
    }
    CommandResult::Message(out)
}

/// Handle `scales`: list the scale catalog
pub fn cmd_scales(_args: &str, _ctx: &mut CommandContext) -> CommandResult {
    let mut out = format!("{}\n", "Scale catalog:".bold());
    for name in scale_names() {
        out.push_str(&format!("  {}\n", name));
    }
    CommandResult::Message(out)
}

/// Handle `help` command
pub fn cmd_help(_args: &str, _ctx: &mut CommandContext) -> CommandResult {
    print_help();
    CommandResult::Success
}

/// Handle `quit` or `exit` command
pub fn cmd_quit(_args: &str, _ctx: &mut CommandContext) -> CommandResult {
    CommandResult::Exit
}

fn print_help() {
    println!("{}", "Fretfinder Help".bold());
    println!("{}", "===============".bold());
    println!();
    println!("{}", "Searching:".green());
    println!(
        "  {}             - voicings containing string 2, fret 5",
        "find 2 5".cyan()
    );
    println!(
        "  {}                  - bare \"<string> <fret>\" works too",
        "2 5".cyan()
    );
    println!();
    println!("{}", "Query settings:".green());
    println!("  {}               - set the key (sharps and flats ok)", "key Bb".cyan());
    println!("  {} - pick a scale", "scale Harmonic Minor".cyan());
    println!("  {}         - root, drop2 or drop3", "family drop2".cyan());
    println!("  {}          - tension substitutions on/off", "tensions on".cyan());
    println!("  {}               - override the fret-span limit", "span 4".cyan());
    println!("  {}              - structured output on/off", "json on".cyan());
    println!();
    println!("{}", "Reference:".green());
    println!("  {}               - diatonic 7th chords of the current key/scale", "chords".cyan());
    println!("  {}               - list all scales", "scales".cyan());
    println!();
    println!(
        "Type '{}' or {} to exit.",
        "quit".bright_red(),
        "Ctrl+C".bright_red()
    );
}

/// Create a fully populated command registry with all built-in commands
pub fn create_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();

    registry.register("find", cmd_find);
    registry.register("key", cmd_key);
    registry.register("scale", cmd_scale);
    registry.register("family", cmd_family);
    registry.register("tensions", cmd_tensions);
    registry.register("span", cmd_span);
    registry.register("json", cmd_json);
    registry.register("chords", cmd_chords);
    registry.register("scales", cmd_scales);
    registry.register("help", cmd_help);
    registry.register("quit", cmd_quit);
    registry.register("exit", cmd_quit);

    registry
}
