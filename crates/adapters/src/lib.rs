//! link-curator adapters crate
//!
//! This crate contains infrastructure adapters implementing the domain ports:
//! - `taxonomy`: Filesystem taxonomy repository (JSON / TOML)
//! - `links`: JSON-file and in-memory link stores

mod links_fs;
mod links_memory;
mod taxonomy_fs;

/// Re-exports for taxonomy adapters
pub mod taxonomy {
    pub use crate::taxonomy_fs::FsTaxonomyRepo as FilesystemTaxonomyRepo;
}

/// Re-exports for link store adapters
pub mod links {
    pub use crate::links_fs::FsLinkRepo as FilesystemLinkRepo;
    pub use crate::links_memory::InMemoryLinkRepo;
}
