use crate::mediasort_core::conflict::DuplicatePolicy;
use clap::Parser;
use simplelog::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Sort files into a dated archive tree by type and capture date")]
pub struct Cli {
    /// Directory to organize
    pub source_dir: PathBuf,

    /// Destination archive root (defaults to ~/media, created on demand)
    pub dest_dir: Option<PathBuf>,

    /// Use filesystem modification time for dates. Less accurate but faster.
    #[arg(long)]
    pub fast: bool,

    /// Perform a dry run without actual moving. Only print the actions
    /// that would be taken.
    #[arg(long)]
    pub dry_run: bool,

    /// What to do when a file with the same name already exists at the
    /// destination
    #[arg(long, value_enum, default_value_t = DuplicatePolicy::CreateUniqFilenameIfContentMismatch)]
    pub on_duplicate: DuplicatePolicy,

    /// Enable file logging to mediasort.log
    #[arg(long = "log")]
    pub log: bool,

    /// Log level for file logging (debug, info, warn, error)
    #[arg(long, default_value_t = LevelFilter::Debug)]
    pub log_level: LevelFilter,
}

/// Well-known default destination under the user's home directory.
pub fn default_destination() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join("media"))
}
