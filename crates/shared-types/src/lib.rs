pub mod config;
pub mod content;
pub mod error;
pub mod models;
pub mod permissions;

pub use config::*;
pub use content::*;
pub use error::*;
pub use models::*;
pub use permissions::*;
