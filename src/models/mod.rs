pub mod color;
pub mod config;
pub mod store;
pub mod theme;

pub use color::{new_id, Color};
pub use config::{AppConfig, ExportConfig, SvgConfig};
pub use store::RootStore;
pub use theme::{Theme, DEFAULT_INTERPOLATION_COUNT};
