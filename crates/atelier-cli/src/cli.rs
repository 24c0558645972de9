use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};

use atelier_core::models::{NewWork, WorkPatch, WorkType};
use atelier_core::reconcile::ImportStrategy;
use atelier_core::view::{SortOrder, TypeFilter, ViewQuery};

#[derive(Debug, Parser)]
#[command(name = "atelier", version, about = "A local catalog of creative works kept on Google Drive")]
pub struct Cli {
    /// Config file (defaults to the platform config directory).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog file, overriding the configured one.
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show works, optionally filtered, searched and sorted.
    List(ListArgs),
    /// Add a single work.
    Add(AddArgs),
    /// Change fields of an existing work.
    Edit(EditArgs),
    /// Delete a work. Reversible with `undo` until the next delete.
    Delete { id: String },
    /// Restore the most recently deleted work.
    Undo,
    /// Add many works from pasted text, one per line.
    Bulk(BulkArgs),
    /// Write a JSON backup of the catalog.
    Export(ExportArgs),
    /// Load a JSON backup.
    Import(ImportArgs),
    /// Merge sample works fetched from a URL.
    Seed(SeedArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortArg {
    Newest,
    Oldest,
    TitleAsc,
    TitleDesc,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Newest => SortOrder::Newest,
            SortArg::Oldest => SortOrder::Oldest,
            SortArg::TitleAsc => SortOrder::TitleAsc,
            SortArg::TitleDesc => SortOrder::TitleDesc,
        }
    }
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only works of this type (Writing, Music, Art, Video, Design, Website, Other).
    #[arg(long = "type")]
    pub work_type: Option<WorkType>,

    /// Case-insensitive text to find in titles and descriptions.
    #[arg(long, short)]
    pub search: Option<String>,

    #[arg(long, value_enum, default_value = "newest")]
    pub sort: SortArg,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    pub fn query(&self) -> ViewQuery {
        ViewQuery {
            filter: self.work_type.map_or(TypeFilter::All, TypeFilter::Only),
            search: self.search.clone().unwrap_or_default(),
            sort: self.sort.into(),
        }
    }
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub title: String,

    /// Google Drive or Docs link.
    #[arg(long)]
    pub url: String,

    #[arg(long = "type", default_value = "Other")]
    pub work_type: WorkType,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub thumbnail: Option<String>,
}

impl AddArgs {
    pub fn into_new_work(self) -> NewWork {
        NewWork {
            title: self.title,
            work_type: self.work_type,
            drive_url: self.url,
            description: self.description,
            thumbnail_url: self.thumbnail,
        }
    }
}

#[derive(Debug, Args)]
pub struct EditArgs {
    pub id: String,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub url: Option<String>,

    #[arg(long = "type")]
    pub work_type: Option<WorkType>,

    /// New description; pass an empty string to clear it.
    #[arg(long)]
    pub description: Option<String>,

    /// New thumbnail link; pass an empty string to clear it.
    #[arg(long)]
    pub thumbnail: Option<String>,
}

impl EditArgs {
    pub fn patch(&self) -> WorkPatch {
        // Blank optional text clears the field once tidied.
        WorkPatch {
            title: self.title.clone(),
            work_type: self.work_type,
            drive_url: self.url.clone(),
            description: self.description.clone().map(Some),
            thumbnail_url: self.thumbnail.clone().map(Some),
        }
    }
}

#[derive(Debug, Args)]
pub struct BulkArgs {
    /// Text file to read, or `-` for stdin.
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Report what would be added without saving.
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Directory to write the backup into.
    #[arg(long, default_value = ".")]
    pub out: PathBuf,
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("strategy").required(true).args(["merge", "replace"])))]
pub struct ImportArgs {
    pub file: PathBuf,

    /// Add the backup's works alongside existing ones, with new ids.
    #[arg(long)]
    pub merge: bool,

    /// Discard the current catalog and use the backup as-is.
    #[arg(long)]
    pub replace: bool,
}

impl ImportArgs {
    pub fn strategy(&self) -> ImportStrategy {
        if self.replace {
            ImportStrategy::Replace
        } else {
            ImportStrategy::Merge
        }
    }
}

#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Overrides the configured seed URL.
    #[arg(long)]
    pub url: Option<String>,
}
