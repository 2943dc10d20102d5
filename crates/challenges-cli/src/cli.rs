use challenges_domain::{DomainCategory, SkillSubcategory};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_COMMIT_HASH"), ")");

#[derive(Parser)]
#[command(name = "challenges")]
#[command(about = "Browse frontend coding challenges in the terminal", long_about = None)]
#[command(version = VERSION)]
pub struct Cli {
    /// Config file to use instead of the platform default
    #[arg(long, value_name = "FILE", env = "CHALLENGES_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Directory of extra challenge JSON files, loaded after the bundled ones
    #[arg(long, value_name = "DIR", env = "CHALLENGES_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List challenge summaries
    List(ListArgs),
    /// Show one challenge in full
    Show {
        #[arg(long)]
        id: String,
    },
    /// Show domains and subcategories with challenge counts
    Taxonomy,
    /// Compute the rendered window of a virtualized list
    Window(WindowArgs),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct ListArgs {
    /// Only challenges in this domain, e.g. performance-scalability
    #[arg(long)]
    pub domain: Option<DomainCategory>,
    /// Only challenges in this subcategory, e.g. recursive-ui
    #[arg(long)]
    pub subcategory: Option<SkillSubcategory>,
}

/// Layout values default to the `[virtual_list]` config section.
#[derive(Args)]
pub struct WindowArgs {
    /// Scroll position in pixels
    #[arg(long, allow_negative_numbers = true)]
    pub scroll_offset: f64,
    /// Number of rows in the list
    #[arg(long)]
    pub item_count: usize,
    /// Height of one row in pixels
    #[arg(long, allow_negative_numbers = true)]
    pub item_height: Option<f64>,
    /// Height of the visible area in pixels
    #[arg(long, allow_negative_numbers = true)]
    pub viewport_height: Option<f64>,
    /// Extra rows rendered above and below the visible area
    #[arg(long)]
    pub buffer: Option<usize>,
}
