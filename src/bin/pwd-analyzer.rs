// src/bin/pwd-analyzer.rs
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;

use pwd_analyzer::report::{render_json, render_text, welcome_banner};
use pwd_analyzer::{analyze, init_common_passwords, init_common_passwords_from_path};

const EXIT_SENTINEL: &str = "exit";
const PASSWORD_PROMPT: &str = "\nEnter password to analyze (or 'exit' to quit): ";

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "pwd-analyzer", version, about = "Analyze password strength locally")]
struct Cli {
    /// Password to analyze once (omit for interactive mode).
    /// Visible in `ps` output and shell history; prefer `--stdin`.
    password: Option<String>,
    /// Analyze each non-empty line read from stdin
    #[arg(long, conflicts_with = "password")]
    stdin: bool,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Show which scoring rules applied
    #[arg(long)]
    explain: bool,
    /// Disable colored output
    #[arg(long)]
    no_color: bool,
    /// Extra common password list, one entry per line
    #[arg(long, value_name = "FILE")]
    common_list: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e:#}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    match &cli.common_list {
        Some(path) => init_common_passwords_from_path(path)
            .with_context(|| format!("loading common password list {}", path.display()))?,
        None => init_common_passwords().context("loading common password list")?,
    };

    if let Some(raw) = &cli.password {
        let password = normalize_input(raw).context("password must not be empty")?;
        return print_report(&cli, password);
    }
    if cli.stdin {
        return run_stdin(&cli);
    }
    run_interactive(&cli)
}

/// Trimmed input, or `None` when nothing is left to analyze.
fn normalize_input(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn print_report(cli: &Cli, password: &str) -> Result<()> {
    let result = analyze(password);
    match cli.format {
        OutputFormat::Text => print!("{}", render_text(&result, cli.explain)),
        OutputFormat::Json => println!("{}", render_json(&result)?),
    }
    Ok(())
}

fn run_stdin(cli: &Cli) -> Result<()> {
    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        if let Some(password) = normalize_input(&line) {
            print_report(cli, password)?;
        }
    }
    Ok(())
}

/// Prints `prompt` and reads one line; `None` on end of input.
fn prompt_line(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn farewell() {
    println!("\n{}", "✓ Thank you for using Password Strength Analyzer!".green());
}

fn run_interactive(cli: &Cli) -> Result<()> {
    print!("{}", welcome_banner());

    loop {
        let Some(line) = prompt_line(PASSWORD_PROMPT)? else {
            farewell();
            return Ok(());
        };

        let Some(password) = normalize_input(&line) else {
            println!("{}", "⚠ Please enter a password.".yellow());
            continue;
        };

        if password.eq_ignore_ascii_case(EXIT_SENTINEL) {
            farewell();
            return Ok(());
        }

        print_report(cli, password)?;

        let choice = prompt_line("\nAnalyze another password? (y/n): ")?
            .unwrap_or_default()
            .trim()
            .to_lowercase();
        if choice != "y" && choice != "yes" {
            farewell();
            return Ok(());
        }
    }
}
