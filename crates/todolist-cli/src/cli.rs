use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use todolist_domain::StatusFilter;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "todolist")]
#[command(about = "A terminal to-do list with searchable, filterable notes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the storage file (or set TODOLIST_FILE env var)
    #[arg(long, short, value_name = "FILE", env = "TODOLIST_FILE", global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    Add(AddArgs),
    /// List tasks, optionally searched and filtered
    List(ListArgs),
    /// Get a specific task
    Get {
        #[arg(long)]
        id: Uuid,
    },
    /// Delete a task
    Delete {
        #[arg(long)]
        id: Uuid,
    },
    /// Toggle the done flag of a task
    Done {
        #[arg(long)]
        id: Uuid,
    },
    /// Toggle the editing flag of a task
    ToggleEdit {
        #[arg(long)]
        id: Uuid,
    },
    /// Replace the title and/or description of a task
    Edit(EditArgs),
    /// Show or change the color theme
    Theme {
        #[arg(value_enum, default_value = "show")]
        action: ThemeAction,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct AddArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long, default_value = "")]
    pub description: String,
}

#[derive(Args)]
pub struct ListArgs {
    /// Case-insensitive text matched against title and description
    #[arg(long, default_value = "")]
    pub search: String,
    /// all, complete or incomplete
    #[arg(long, default_value = "all")]
    pub status: StatusFilter,
}

#[derive(Args)]
pub struct EditArgs {
    #[arg(long)]
    pub id: Uuid,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeAction {
    Show,
    Dark,
    Light,
    Toggle,
}
