//! Custom error types for the module framework.
//!
//! `DaqError` consolidates everything that can go wrong between the run-control side
//! (configuration loading, module creation, command dispatch) and a module's own
//! command handlers:
//!
//! - **`Config`**: wraps `figment` errors raised while loading the application file or
//!   its environment overrides.
//! - **`Configuration`**: semantic problems in a configuration that parsed fine (unknown
//!   log level, duplicate module names).
//! - **`Conf`**: a `conf` payload that does not match the module's schema. The source is
//!   the `serde_json` deserialization error.
//! - **`UnknownCommand` / `CommandAlreadyRegistered`**: command table misuse.
//! - **`UnknownModuleType`**: the registry has no factory for the requested type.
//!
//! By using `#[from]`, lower-level errors convert with the `?` operator.

use thiserror::Error;

/// Convenience alias for results using the framework error type.
pub type AppResult<T> = std::result::Result<T, DaqError>;

/// Errors surfaced by modules and the run-control driver.
#[derive(Error, Debug)]
pub enum DaqError {
    /// The application configuration could not be loaded or extracted.
    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),

    /// The application configuration loaded but is not usable.
    #[error("Configuration validation error: {0}")]
    Configuration(String),

    /// A module's configuration payload failed schema deserialization.
    #[error("Module '{module}' rejected its configuration: {source}")]
    Conf {
        /// Name of the module that received the payload
        module: String,
        /// Underlying deserialization failure
        #[source]
        source: serde_json::Error,
    },

    /// A payload could not be converted into the JSON form modules consume.
    #[error("Payload conversion error: {0}")]
    Payload(#[from] serde_json::Error),

    /// The dispatcher asked a module for a command it never registered.
    #[error("Module '{module}' has no command '{command}'")]
    UnknownCommand {
        /// Name of the module
        module: String,
        /// Requested command name
        command: String,
    },

    /// A module tried to register the same command name twice.
    #[error("Command '{0}' is already registered")]
    CommandAlreadyRegistered(String),

    /// No factory is registered for the requested module type.
    #[error("Unknown module type: {0}")]
    UnknownModuleType(String),

    /// Logging could not be initialized.
    #[error("Tracing initialization failed: {0}")]
    Tracing(String),
}
