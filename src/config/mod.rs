//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML)
//!     → loader.rs (parse & deserialize, apply SESSION_SECRET and --bind)
//!     → validation.rs (semantic checks)
//!     → FrontendConfig (validated, immutable)
//!     → passed by value into HttpServer::new
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup; nothing consults the environment later
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{
    parse_config, resolve_config, ConfigError, ConfigOverrides, SESSION_SECRET_ENV,
};
pub use schema::{
    FrontendConfig, ListenerConfig, ObservabilityConfig, SessionConfig, TimeoutConfig,
    DEFAULT_SESSION_SECRET,
};
pub use validation::ValidationError;
