//! Static configuration: the organization catalog and server settings.

pub mod catalog;
pub mod settings;

pub use catalog::{Assignment, Catalog, CatalogError, FALLBACK_ASSIGNMENT, Organization};
pub use settings::{Cli, Settings, SettingsError};
