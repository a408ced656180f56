//! Platform helpers
//!
//! OS entropy for fresh seeds, and directory creation for output trees.

mod fs;
mod seed;

pub use fs::create_directory;
pub use seed::generate_seed;
