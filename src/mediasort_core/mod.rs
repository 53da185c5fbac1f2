pub mod category;
pub mod cli;
pub mod conflict;
pub mod dates;
pub mod dest;
pub mod error;
pub mod hashing;
pub mod mover;
pub mod organize;
pub mod sidecar;

pub use category::{Category, Config};
pub use cli::Cli;
pub use conflict::{DuplicatePolicy, Resolution, unique_destination};
pub use dates::{DateMode, DateResolver, ExiftoolDateResolver};
pub use dest::build_destination;
pub use error::MediasortError;
pub use mover::MoveOutcome;
pub use organize::{OrganizeOptions, OrganizeStats, organize};
pub use sidecar::{SIDECAR_EXTENSION, find_sidecar};
