#![forbid(unsafe_code)]

pub mod config;
pub mod domain;
pub mod error;
pub mod link;
pub mod plugin;
pub mod report;
pub mod repo;
pub mod repo_factory;
pub mod scan;

pub mod index {
    pub mod inmem;
}

pub mod repo_sqlite;

// Re-exports: stable API surface
pub use config::{RecoverConfig, ScanOptions};
pub use link::create_link;
pub use report::ScanReport;
pub use scan::recover;
