pub mod export;
pub mod migration;
pub mod persistence;

pub use export::{camel_case, kebab_case, svg_uri, ExportLanguage, ExportService};
pub use persistence::{Snapshot, StateFile, CURRENT_VERSION, LEGACY_VERSION};
