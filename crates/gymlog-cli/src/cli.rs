use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use gymlog_core::VERSION;

/// GymLog - a local-first workout logger
#[derive(Parser)]
#[command(name = "gymlog")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the workout database
    #[arg(long, global = true, env = "GYMLOG_DB")]
    pub db: Option<String>,

    /// Data directory (database, settings, workout draft)
    #[arg(long, global = true, env = "GYMLOG_DATA_DIR")]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log a workout (start, add sets, finish)
    #[command(subcommand)]
    Workout(WorkoutCommands),

    /// Browse and edit workout history
    #[command(subcommand)]
    History(HistoryCommands),

    /// Manage the exercise library
    #[command(subcommand)]
    Exercise(ExerciseCommands),

    /// Manage workout templates
    #[command(subcommand)]
    Template(TemplateCommands),

    /// Run the rest timer
    Rest(RestArgs),

    /// Export workout history as CSV
    Export(ExportArgs),

    /// Show or change settings
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Show record counts
    Stats,

    /// Delete all data and restore starter content
    Reset(ResetArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Subcommand)]
pub enum WorkoutCommands {
    /// Start a new workout draft
    Start(WorkoutStartArgs),

    /// Add a set to the current draft
    Add(WorkoutAddArgs),

    /// Show the current draft
    Show,

    /// Finish the draft and save it to history
    Finish(WorkoutFinishArgs),

    /// Discard the current draft
    Cancel(WorkoutCancelArgs),
}

/// Arguments for `workout start`
#[derive(Args)]
pub struct WorkoutStartArgs {
    /// Workout name (e.g., "Push Day")
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Start from a template
    #[arg(short, long, value_name = "TEMPLATE")]
    pub template: Option<String>,

    /// Workout date (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for `workout add`
#[derive(Args)]
pub struct WorkoutAddArgs {
    /// Exercise name (must exist in the library)
    #[arg(value_name = "EXERCISE")]
    pub exercise: String,

    /// Set spec: strength "135x5@80", bodyweight "12", cardio "20m" or "90s"
    #[arg(value_name = "SET")]
    pub set: String,

    /// Note attached to the exercise
    #[arg(long)]
    pub note: Option<String>,
}

/// Arguments for `workout finish`
#[derive(Args)]
pub struct WorkoutFinishArgs {
    /// Workout notes
    #[arg(long)]
    pub notes: Option<String>,
}

/// Arguments for `workout cancel`
#[derive(Args)]
pub struct WorkoutCancelArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Subcommand)]
pub enum HistoryCommands {
    /// List past workouts (newest first)
    List(HistoryListArgs),

    /// Show a workout by ID
    Show(HistoryShowArgs),

    /// Edit a workout's name, date, or notes
    Edit(HistoryEditArgs),

    /// Delete a workout
    Delete(HistoryDeleteArgs),
}

/// Arguments for `history list`
#[derive(Args)]
pub struct HistoryListArgs {
    /// Only workouts on this date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `history show`
#[derive(Args)]
pub struct HistoryShowArgs {
    /// Workout ID
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `history edit`
#[derive(Args)]
pub struct HistoryEditArgs {
    /// Workout ID
    #[arg(value_name = "ID")]
    pub id: i64,

    /// New workout name
    #[arg(long)]
    pub name: Option<String>,

    /// New workout date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// New workout notes
    #[arg(long)]
    pub notes: Option<String>,
}

/// Arguments for `history delete`
#[derive(Args)]
pub struct HistoryDeleteArgs {
    /// Workout ID
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Subcommand)]
pub enum ExerciseCommands {
    /// List library exercises (most used first)
    List(ExerciseListArgs),

    /// Add a custom exercise to the library
    Add(ExerciseAddArgs),

    /// Delete an exercise from the library
    Delete(ExerciseDeleteArgs),

    /// Search exercises by name
    Search(ExerciseSearchArgs),

    /// Attach a reference video link to an exercise
    Link(ExerciseLinkArgs),
}

/// Arguments for `exercise list`
#[derive(Args)]
pub struct ExerciseListArgs {
    /// Filter by category (push, pull, legs, arms, core, other)
    #[arg(long)]
    pub category: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `exercise add`
#[derive(Args)]
pub struct ExerciseAddArgs {
    /// Exercise name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Category (push, pull, legs, arms, core, other)
    #[arg(value_name = "CATEGORY")]
    pub category: String,

    /// Exercise type (strength, bodyweight, cardio)
    #[arg(long, default_value = "strength")]
    pub r#type: String,
}

/// Arguments for `exercise delete`
#[derive(Args)]
pub struct ExerciseDeleteArgs {
    /// Exercise name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for `exercise search`
#[derive(Args)]
pub struct ExerciseSearchArgs {
    /// Search query (case-insensitive substring)
    #[arg(value_name = "QUERY")]
    pub query: String,
}

/// Arguments for `exercise link`
#[derive(Args)]
pub struct ExerciseLinkArgs {
    /// Exercise name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Link title
    #[arg(value_name = "TITLE")]
    pub title: String,

    /// Link URL (http or https)
    #[arg(value_name = "URL")]
    pub url: String,
}

#[derive(Subcommand)]
pub enum TemplateCommands {
    /// List workout templates
    List,

    /// Show a template by name
    Show(TemplateShowArgs),

    /// Create a workout template
    Create(TemplateCreateArgs),

    /// Delete a custom template
    Delete(TemplateDeleteArgs),
}

/// Arguments for `template show`
#[derive(Args)]
pub struct TemplateShowArgs {
    /// Template name
    #[arg(value_name = "NAME")]
    pub name: String,
}

/// Arguments for `template create`
#[derive(Args)]
pub struct TemplateCreateArgs {
    /// Template name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Exercise names, in order
    #[arg(value_name = "EXERCISE", required = true)]
    pub exercises: Vec<String>,

    /// Template description
    #[arg(long)]
    pub description: Option<String>,
}

/// Arguments for `template delete`
#[derive(Args)]
pub struct TemplateDeleteArgs {
    /// Template name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `rest` command
#[derive(Args)]
pub struct RestArgs {
    /// Rest preset in seconds (defaults to the settings value)
    #[arg(value_name = "SECONDS")]
    pub seconds: Option<u32>,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Write CSV to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Only workouts on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub since: Option<String>,
}

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show current settings
    Show,

    /// Change a setting
    Set(SettingsSetArgs),
}

/// Arguments for `settings set`
#[derive(Args)]
pub struct SettingsSetArgs {
    /// Setting key (weight-unit, default-rpe, default-rest)
    #[arg(value_name = "KEY")]
    pub key: String,

    /// New value
    #[arg(value_name = "VALUE")]
    pub value: String,
}

/// Arguments for the `reset` command
#[derive(Args)]
pub struct ResetArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}
