//! CLI entry point for mcprop-editor
//!
//! Provides command-line interface for validating server.properties,
//! listing settings, inspecting plugins, managing backups, and
//! launching the GUI.

use clap::{Parser, Subcommand};
use colored::*;
use mcprop_editor::config::ConfigManager;
use mcprop_editor::core::{validate_content, validate_sheet, PropertySheet, ValidationLevel};
use mcprop_editor::plugin::{discover_datapacks, discover_plugins};
use mcprop_editor::ui::App;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "mcprop-editor")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Server directory containing server.properties
    #[arg(short, long, default_value = ".", global = true)]
    dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate server.properties and report findings
    Check,

    /// List all settings with their current values
    List,

    /// Show discovered plugins and datapacks
    Plugins,

    /// List backups, or restore/delete one
    Backups {
        /// Restore this backup over server.properties
        #[arg(long)]
        restore: Option<PathBuf>,
        /// Delete this backup file
        #[arg(long)]
        delete: Option<PathBuf>,
    },

    /// Launch the GTK4 editor
    Gui,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let dir = expand_dir(&cli.dir)?;

    match cli.command {
        Commands::Check => check(&dir)?,
        Commands::List => list(&dir)?,
        Commands::Plugins => plugins(&dir)?,
        Commands::Backups { restore, delete } => backups(&dir, restore, delete)?,
        Commands::Gui => {
            let app = App::new(dir).map_err(|e| anyhow::anyhow!(e))?;
            app.run();
        }
    }

    Ok(())
}

/// Expands a leading tilde in the server directory argument.
fn expand_dir(dir: &Path) -> anyhow::Result<PathBuf> {
    let raw = dir
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Invalid path encoding"))?;
    Ok(PathBuf::from(shellexpand::tilde(raw).as_ref()))
}

fn read_properties(dir: &Path) -> anyhow::Result<String> {
    let path = dir.join("server.properties");
    fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))
}

/// Validate the file and print every finding.
fn check(dir: &Path) -> anyhow::Result<()> {
    let path = dir.join("server.properties");
    let content = read_properties(dir)?;

    println!("{} Checking: {}", "→".cyan(), path.display());

    let mut report = validate_content(&content)?;

    // Semantic checks need the loaded sheet
    let sheet = PropertySheet::from_source(&content)?;
    report.issues.extend(validate_sheet(&sheet).issues);

    if report.is_clean() {
        println!("{} {}", "✓".green().bold(), "No findings!".bold());
        return Ok(());
    }

    for issue in &report.issues {
        let tag = match issue.level {
            ValidationLevel::Error => "error".red().bold(),
            ValidationLevel::Warning => "warning".yellow().bold(),
        };
        println!("{}: {}: {}", tag, issue.key.cyan(), issue.message);
        if let Some(suggestion) = &issue.suggestion {
            println!("  {} {}", "hint:".dimmed(), suggestion.dimmed());
        }
    }

    println!(
        "\n{} {} error{}, {} warning{}",
        if report.has_errors() { "✗".red() } else { "⚠".yellow() },
        report.errors().count(),
        if report.errors().count() == 1 { "" } else { "s" },
        report.warnings().count(),
        if report.warnings().count() == 1 { "" } else { "s" },
    );

    if report.has_errors() {
        std::process::exit(1);
    }
    Ok(())
}

/// Print every setting the sheet holds, sorted by key.
fn list(dir: &Path) -> anyhow::Result<()> {
    let content = read_properties(dir)?;
    let sheet = PropertySheet::from_source(&content)?;

    println!(
        "{}",
        format!("Settings from: {}\n", dir.join("server.properties").display()).bold()
    );

    let rendered = sheet.render();
    let mut total = 0;
    for line in rendered.lines().filter(|l| !l.starts_with('#')) {
        if let Some((key, value)) = line.split_once('=') {
            println!("{} = {}", key.cyan(), value);
            total += 1;
        }
    }

    println!("\n{} Total: {} settings", "✓".green(), total);
    Ok(())
}

/// Show what the startup scan would find.
fn plugins(dir: &Path) -> anyhow::Result<()> {
    let content = read_properties(dir)?;
    let sheet = PropertySheet::from_source(&content)?;

    let plugins = discover_plugins(dir);
    if plugins.is_empty() {
        println!("{}", "No plugins found".yellow());
    } else {
        println!("{}", "Plugins:".bold());
        for plugin in &plugins {
            let version = plugin.descriptor.version.as_deref().unwrap_or("?");
            let panel = if plugin.manifest.is_some() {
                "settings panel".green()
            } else {
                "no panel".dimmed()
            };
            println!("  {} {} ({})", plugin.name().cyan().bold(), version, panel);
        }
    }

    let datapacks_dir = dir.join("datapacks");
    let datapacks = discover_datapacks(&datapacks_dir);
    if datapacks.is_empty() {
        println!("{}", "No datapacks found".yellow());
    } else {
        println!("\n{}", "Datapacks:".bold());
        for pack in &datapacks {
            let state = if sheet.enabled_packs.iter().any(|p| p == &pack.id) {
                "enabled".green()
            } else {
                "disabled".dimmed()
            };
            println!("  {}: {} ({})", pack.id.cyan(), pack.display_name, state);
        }
    }

    Ok(())
}

/// List, restore, or delete timestamped backups.
fn backups(dir: &Path, restore: Option<PathBuf>, delete: Option<PathBuf>) -> anyhow::Result<()> {
    let manager = ConfigManager::new(dir.join("server.properties"))?;

    if let Some(path) = restore {
        manager.restore_backup(&path)?;
        println!("{} Restored {}", "✓".green(), path.display());
        return Ok(());
    }

    if let Some(path) = delete {
        manager.delete_backup(&path)?;
        println!("{} Deleted {}", "✓".green(), path.display());
        return Ok(());
    }

    let backups = manager.list_backups()?;
    if backups.is_empty() {
        println!("{}", "No backups yet".yellow());
        return Ok(());
    }

    println!("{}", "Backups (newest first):".bold());
    for backup in &backups {
        println!("  {}", backup.display());
    }
    Ok(())
}
