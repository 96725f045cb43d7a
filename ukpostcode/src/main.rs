use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use ukpostcode::{Decision, EditSession, PatternTable, UkPostcodeConfig};

#[derive(Parser)]
#[command(name = "ukpostcode")]
#[command(about = "Type UK postcodes and watch keyboard-type hints and automatic spacing")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Keystrokes to type (`<` is backspace), e.g. "m602la"
    script: Option<String>,

    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print one JSON decision per edit
    #[arg(long)]
    json: bool,

    /// Do not insert the outward/inward space automatically
    #[arg(long)]
    no_auto_space: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: each line is a keystroke script applied to one field
    Repl,
    /// List the configured postcode shapes
    Shapes,
    /// Print the effective configuration as TOML
    DumpConfig {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// A text field driven by an edit session, standing in for a real widget.
struct Field {
    session: EditSession,
    text: String,
    json: bool,
}

impl Field {
    fn new(session: EditSession, json: bool) -> Self {
        Self {
            session,
            text: String::new(),
            json,
        }
    }

    fn edit(&mut self, label: &str, start: usize, end: usize, replacement: &str) -> Result<()> {
        let decision = self.session.propose_edit(&self.text, start..end, replacement);
        if decision.accepted {
            self.text = decision.new_text.clone();
        }
        self.report(label, &decision)
    }

    fn key(&mut self, key: char) -> Result<()> {
        let end = self.text.chars().count();
        if key == '<' {
            if end == 0 {
                return Ok(());
            }
            return self.edit("<bs>", end - 1, end, "");
        }
        self.edit(&format!("{key:?}"), end, end, &key.to_string())
    }

    fn paste(&mut self, text: &str) -> Result<()> {
        let end = self.text.chars().count();
        self.edit("paste", end, end, text)
    }

    fn clear(&mut self) -> Result<()> {
        let end = self.text.chars().count();
        self.edit("clear", 0, end, "")
    }

    fn run_script(&mut self, script: &str) -> Result<()> {
        for key in script.chars() {
            self.key(key)?;
        }
        Ok(())
    }

    fn report(&self, label: &str, decision: &Decision) -> Result<()> {
        let mut out = io::stdout().lock();
        if self.json {
            serde_json::to_writer(&mut out, decision)?;
            writeln!(out)?;
        } else {
            let status = if decision.accepted { " " } else { "x" };
            writeln!(
                out,
                "{status} {label:<6} {:<10} keyboard: {}",
                format!("\"{}\"", self.text),
                decision.recommended_class
            )?;
        }
        Ok(())
    }
}

fn load_config(cli: &Cli) -> Result<UkPostcodeConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            info!(path = %path.display(), "loading config");
            UkPostcodeConfig::load(path)?
        }
        None => UkPostcodeConfig::default(),
    };
    if cli.no_auto_space {
        config.base_mut().auto_space = false;
    }
    Ok(config)
}

fn build_session(config: &UkPostcodeConfig) -> Result<EditSession> {
    let table = PatternTable::from_formats(config.base().shapes.as_slice())?;
    Ok(EditSession::with_config(Arc::new(table), config.base()))
}

fn repl(mut field: Field) -> Result<()> {
    println!("Type keystrokes and press Enter. `<` is backspace.");
    println!("Commands: `paste TEXT`, `clear`, `quit`.");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim_end_matches(['\r', '\n']);
        match input {
            "quit" | "exit" => break,
            "clear" => field.clear()?,
            _ => match input.strip_prefix("paste ") {
                Some(text) => field.paste(text)?,
                None => field.run_script(input)?,
            },
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ukpostcode=info,postcode_core=warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match &cli.command {
        Some(Commands::Shapes) => {
            let table = config.base().pattern_table()?;
            for shape in table.shapes() {
                println!("{shape}");
            }
        }
        Some(Commands::DumpConfig { output }) => {
            let text = config.to_toml_string()?;
            match output {
                Some(path) => {
                    std::fs::write(path, text)?;
                    info!(path = %path.display(), "wrote config");
                }
                None => print!("{text}"),
            }
        }
        Some(Commands::Repl) => {
            let field = Field::new(build_session(&config)?, cli.json);
            repl(field)?;
        }
        None => {
            let mut field = Field::new(build_session(&config)?, cli.json);
            match &cli.script {
                Some(script) => field.run_script(script)?,
                None => repl(field)?,
            }
        }
    }

    Ok(())
}
