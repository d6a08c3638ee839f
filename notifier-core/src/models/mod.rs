//! Data models for the notifier

pub mod configuration;
pub mod level;
pub mod outcome;
pub mod request;

pub use configuration::*;
pub use level::*;
pub use outcome::*;
pub use request::*;
