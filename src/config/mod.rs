mod loader;
mod model;

pub use loader::{ConfigLoader, FileConfigLoader};
pub use model::{
    AppLayout, CONFIG_VERSION, Config, DocsConfig, LayoutConfig, MonoRepoLayout, ScannerConfig,
};
