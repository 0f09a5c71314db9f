//! # DAQ Template Library
//!
//! Starting point for a package of modules hosted by the DAQ application framework.
//! It carries the framework surface a module needs and one template module to copy.
//!
//! ## Crate Structure
//!
//! - **`appfwk`**: the `DaqModule` trait, per-module `CommandTable`, and the
//!   `ModuleRegistry` that creates modules by type name.
//! - **`config`**: application configuration (`AppConfig`) loaded from TOML and
//!   environment variables with `figment`.
//! - **`error`**: the `DaqError` enum shared by modules and run control.
//! - **`modules`**: modules shipped with this package (`RenameMe`).
//! - **`opmon`**: the `InfoCollector` telemetry sink and `InfoRecord` trait.
//! - **`tracing_setup`**: subscriber initialization for binaries and tests.
//!
//! The companion `toylibrary` crate in this workspace shows how a plain library (with
//! optional Python bindings and a test program) sits next to the modules.

pub mod appfwk;
pub mod config;
pub mod error;
pub mod modules;
pub mod opmon;
pub mod tracing_setup;
