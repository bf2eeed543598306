//! GymLog CLI - a local-first workout logger.
//!
//! This is the command-line interface for GymLog. It provides a
//! user-friendly interface to the core library functionality.

mod app;
mod cli;
mod commands;
mod draft;
mod helpers;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gymlog_core::VERSION;

use app::AppContext;
use cli::{
    Cli, Commands, ExerciseCommands, HistoryCommands, SettingsCommands, TemplateCommands,
    WorkoutCommands,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("GYMLOG_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    match cli.command {
        Some(Commands::Workout(ref command)) => match command {
            WorkoutCommands::Start(args) => commands::workout::handle_start(&ctx, args),
            WorkoutCommands::Add(args) => commands::workout::handle_add(&ctx, args),
            WorkoutCommands::Show => commands::workout::handle_show(&ctx),
            WorkoutCommands::Finish(args) => commands::workout::handle_finish(&ctx, args),
            WorkoutCommands::Cancel(args) => commands::workout::handle_cancel(&ctx, args),
        },
        Some(Commands::History(ref command)) => match command {
            HistoryCommands::List(args) => commands::history::handle_list(&ctx, args),
            HistoryCommands::Show(args) => commands::history::handle_show(&ctx, args),
            HistoryCommands::Edit(args) => commands::history::handle_edit(&ctx, args),
            HistoryCommands::Delete(args) => commands::history::handle_delete(&ctx, args),
        },
        Some(Commands::Exercise(ref command)) => match command {
            ExerciseCommands::List(args) => commands::exercises::handle_list(&ctx, args),
            ExerciseCommands::Add(args) => commands::exercises::handle_add(&ctx, args),
            ExerciseCommands::Delete(args) => commands::exercises::handle_delete(&ctx, args),
            ExerciseCommands::Search(args) => commands::exercises::handle_search(&ctx, args),
            ExerciseCommands::Link(args) => commands::exercises::handle_link(&ctx, args),
        },
        Some(Commands::Template(ref command)) => match command {
            TemplateCommands::List => commands::templates::handle_list(&ctx),
            TemplateCommands::Show(args) => commands::templates::handle_show(&ctx, args),
            TemplateCommands::Create(args) => commands::templates::handle_create(&ctx, args),
            TemplateCommands::Delete(args) => commands::templates::handle_delete(&ctx, args),
        },
        Some(Commands::Rest(ref args)) => commands::rest::handle_rest(&ctx, args),
        Some(Commands::Export(ref args)) => commands::export::handle_export(&ctx, args),
        Some(Commands::Settings(ref command)) => match command {
            SettingsCommands::Show => commands::settings_cmd::handle_show(&ctx),
            SettingsCommands::Set(args) => commands::settings_cmd::handle_set(&ctx, args),
        },
        Some(Commands::Stats) => commands::misc::handle_stats(&ctx),
        Some(Commands::Reset(ref args)) => commands::misc::handle_reset(&ctx, args),
        Some(Commands::Completions(ref args)) => commands::misc::handle_completions(args.shell),
        None => {
            println!("GymLog v{}", VERSION);
            println!("\nRun `gymlog --help` for usage information.");
            Ok(())
        }
    }
}
