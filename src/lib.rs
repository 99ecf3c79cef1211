//! Process bootstrap for the semantic search API service.
//!
//! The binary resolves the service configuration file (`app.yml`)
//! relative to its own location, publishes the environment contract the
//! served application reads at load time, refuses to start when the
//! configuration artifact is missing, and only then hands control to the
//! HTTP server.
//!
//! Two components run strictly in sequence:
//!
//! - [`bootstrap`]: path resolution, environment publication, and the
//!   existence guard. Resolution depends only on the entry point's own
//!   location, never on the working directory.
//! - [`launch`]: the dispatcher. Binds the fixed address and serves
//!   [`app::application`]; it does not return until shutdown.
//!
//! A missing configuration file is fail-fast: the process logs the exact
//! missing path and exits with status 1 before any port is opened, so the
//! failure surfaces here instead of deep inside the search engine's
//! initialization.

pub mod app;
pub mod bootstrap;
pub mod error;
pub mod launch;

pub use bootstrap::{prepare, Bootstrap, CONFIG_ENV, CONFIG_FILE_NAME, DUPLICATE_LIB_ENV};
pub use error::BootstrapError;
pub use launch::LaunchSettings;
