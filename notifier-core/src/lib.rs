//! # Notifier Core Library
//!
//! Multi-channel task notifications: a Bark push, a desktop notification and
//! a sound cue, dispatched concurrently and aggregated into one report.

pub mod channels;
pub mod dispatcher;
pub mod error;
pub mod models;
pub mod platform;
pub mod services;

pub use dispatcher::{notify, ChannelSlot, Dispatcher};
pub use error::{ChannelError, NotifyError};
