//! Leveling agent client.
//!
//! Composition root for the leveling agent: reads configuration from the
//! environment, sets up logging, loads build and boss content and drives a
//! progression run. Without a live game connection the run executes against
//! the in-memory world from [`runtime::mock`].

pub mod config;
pub mod logging;
pub mod session;

pub use config::ClientConfig;
pub use session::Session;
