use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tk", about = concat!("[x] tick v", env!("CARGO_PKG_VERSION"), " - your checklists are plain text"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different tasks folder
    #[arg(short = 'C', long = "tasks-dir", global = true)]
    pub tasks_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the checklists in the tasks folder
    Lists,
    /// Print a checklist
    Show(ShowArgs),
    /// Append a task to a checklist
    Add(AddArgs),
    /// Toggle a task's done state
    Toggle(ToggleArgs),
    /// Delete a task by id
    Delete(DeleteArgs),
    /// Move a task to a new position
    Mv(MvArgs),
    /// Create an empty checklist
    New(NewArgs),
    /// Show or set the tasks folder
    Dir(DirArgs),
}

#[derive(Args)]
pub struct ShowArgs {
    /// Checklist name (without .md)
    pub list: String,
    /// Only show unchecked tasks
    #[arg(long)]
    pub pending: bool,
}

#[derive(Args)]
pub struct AddArgs {
    /// Checklist name
    pub list: String,
    /// Task text; @HH:MM and {XhYm} annotations are picked up inline
    pub text: String,
}

#[derive(Args)]
pub struct ToggleArgs {
    /// Checklist name
    pub list: String,
    /// Task id (as printed by `tk show`)
    pub id: usize,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Checklist name
    pub list: String,
    /// Task id
    pub id: usize,
}

#[derive(Args)]
pub struct MvArgs {
    /// Checklist name
    pub list: String,
    /// Task id
    pub id: usize,
    /// New position (0-indexed line position)
    pub position: usize,
}

#[derive(Args)]
pub struct NewArgs {
    /// Checklist name
    pub name: String,
}

#[derive(Args)]
pub struct DirArgs {
    /// New tasks folder (omit to print the current one)
    pub path: Option<String>,
}
