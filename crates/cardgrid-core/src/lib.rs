pub mod config;
pub mod error;
pub mod keys;
pub mod layout;
pub mod result;
pub mod selection;
pub mod version;

pub use config::AppConfig;
pub use error::GridError;
pub use keys::NavKey;
pub use layout::{GridLayout, GridPosition};
pub use result::GridResult;
pub use selection::SelectionState;
pub use version::{compare_versions, StackingPolicy, Version};
