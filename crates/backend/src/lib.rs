pub mod auth;

pub mod config;

pub mod content;

pub mod error_convert;

mod rest;

pub use auth::AuthClient;
pub use content::{ContentStore, RestContentStore};
