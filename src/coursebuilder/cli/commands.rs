//! # CLI Layer
//!
//! This module is **one possible UI client** for CourseBuilder. It is the only
//! place that knows about terminal I/O, argument parsing and output styling.
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with API, scope, and configuration
//! - `handle_*()`: Per-command handlers that call the API and print results

use super::render::{print_messages, render_config, render_item_list};
use super::setup::{
    print_grouped_help, print_help_for_command, AddCommands, Cli, Commands, ItemCommands,
    MiscCommands,
};
use chrono::Utc;
use clap::Parser;
use coursebuilder::api::{CmdResult, ConfigAction, CourseApi};
use coursebuilder::error::Result;
use coursebuilder::host::LocalFileHost;
use coursebuilder::init::initialize;
use coursebuilder::model::Scope;
use coursebuilder::store::fs::FileStore;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "COURSEBUILDER_LOG";

struct AppContext {
    api: CourseApi<FileStore, LocalFileHost>,
    scope: Scope,
    download_dir: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.help {
        match &cli.command {
            Some(command) => print_help_for_command(command.name()),
            None => print_grouped_help(),
        }
        return Ok(());
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add(cmd)) => match cmd {
            AddCommands::List => handle_list(&ctx),
            AddCommands::Module { name } => handle_module(&mut ctx, name.join(" ")),
            AddCommands::Link { name, url } => handle_link(&mut ctx, name, url),
            AddCommands::Upload { path, name } => handle_upload(&mut ctx, path, name),
        },
        Some(Commands::Item(cmd)) => match cmd {
            ItemCommands::Edit {
                position,
                name,
                url,
                file,
            } => handle_edit(&mut ctx, position, name, url, file),
            ItemCommands::Delete { positions } => handle_delete(&mut ctx, positions),
            ItemCommands::Move { from, to } => handle_move(&mut ctx, from, to),
            ItemCommands::Download { position, to } => handle_download(&ctx, position, to),
        },
        Some(Commands::Misc(cmd)) => match cmd {
            MiscCommands::Config { key, value } => handle_config(&ctx, key, value),
            MiscCommands::Init => handle_init(&ctx),
        },
        None => handle_list(&ctx),
    }
}

/// Log to stderr. Quiet unless `--verbose` or `COURSEBUILDER_LOG` asks for more.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("coursebuilder={}", default_level)));

    // Ignore error if already initialized
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let ctx = initialize(&cwd, cli.global)?;
    debug!(scope = ?ctx.scope, "context ready");

    Ok(AppContext {
        api: ctx.api,
        scope: ctx.scope,
        download_dir: ctx.config.download_dir.clone(),
    })
}

fn print_result(result: &CmdResult) {
    print_messages(&result.messages);
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_items()?;
    print!("{}", render_item_list(&result.listed_items, Utc::now()));
    print_result(&result);
    Ok(())
}

fn handle_module(ctx: &mut AppContext, name: String) -> Result<()> {
    let result = ctx.api.create_module(name)?;
    print_result(&result);
    Ok(())
}

fn handle_link(ctx: &mut AppContext, name: String, url: String) -> Result<()> {
    let result = ctx.api.add_link(name, url)?;
    print_result(&result);
    Ok(())
}

fn handle_upload(ctx: &mut AppContext, path: PathBuf, name: String) -> Result<()> {
    let result = ctx.api.upload_file(name, &path)?;
    print_result(&result);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    position: usize,
    name: Option<String>,
    url: Option<String>,
    file: Option<PathBuf>,
) -> Result<()> {
    let result = ctx.api.edit_item(position, name, url, file.as_deref())?;
    print_result(&result);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, positions: Vec<usize>) -> Result<()> {
    let result = ctx.api.delete_items(&positions)?;
    print_result(&result);
    Ok(())
}

fn handle_move(ctx: &mut AppContext, from: usize, to: usize) -> Result<()> {
    let result = ctx.api.move_item(from, to)?;
    print_result(&result);
    print!("{}", render_item_list(&result.listed_items, Utc::now()));
    Ok(())
}

fn handle_download(ctx: &AppContext, position: usize, to: Option<PathBuf>) -> Result<()> {
    let dest = to
        .or_else(|| ctx.download_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    let result = ctx.api.download_item(position, &dest)?;
    print_result(&result);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let result = ctx.api.config(ctx.scope, action)?;
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_result(&result);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init(ctx.scope)?;
    print_result(&result);
    Ok(())
}
