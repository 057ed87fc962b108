//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::ApportionPaths;
pub use settings::Settings;
