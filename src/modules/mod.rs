//! Modules shipped with this package.
//!
//! Each module implements [`DaqModule`](crate::appfwk::DaqModule) and is registered with
//! [`ModuleRegistry::with_builtin`](crate::appfwk::ModuleRegistry::with_builtin) under its
//! type name. `RenameMe` is the starting point for new modules: copy it, rename it, and
//! replace its configuration record and handlers.

pub mod rename_me;

pub use rename_me::{ConfParams, RenameMe, RenameMeInfo};
