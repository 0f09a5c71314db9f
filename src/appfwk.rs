//! Module framework surface.
//!
//! This module defines the `DaqModule` trait that run control drives, the per-module
//! `CommandTable` mapping command names to handlers, and the `ModuleRegistry` that builds
//! modules by type name.
//!
//! # Lifecycle
//!
//! The run-control side owns ordering. A module only answers the commands it registered:
//!
//! ```text
//! create(type, name) ──> init(args) ──> conf ──> start ──> stop ──> scrap
//! ```
//!
//! `init` is part of the trait and runs once after creation. Every other command goes
//! through [`DaqModule::execute_command`], which looks the name up in the module's table.
//!
//! # Example
//!
//! ```rust
//! use daq_template::appfwk::{Data, ModuleRegistry};
//! use serde_json::json;
//!
//! # fn main() -> daq_template::error::AppResult<()> {
//! let registry = ModuleRegistry::with_builtin();
//! let mut module = registry.create("RenameMe", "rm1".to_string())?;
//!
//! module.init(&Data::Null)?;
//! module.execute_command("conf", &json!({ "some_configured_value": 42 }))?;
//! module.execute_command("start", &Data::Null)?;
//! # Ok(())
//! # }
//! ```

use crate::error::{AppResult, DaqError};
use crate::modules::RenameMe;
use crate::opmon::InfoCollector;
use std::collections::{BTreeMap, HashMap};

/// Structured command payload handed to modules by run control.
pub type Data = serde_json::Value;

/// Handler bound to a command name. Receives the module and the command payload.
pub type CommandHandler<M> = fn(&mut M, &Data) -> AppResult<()>;

/// Fixed table of the commands a module answers.
///
/// Filled once in the module constructor and never changed afterwards.
pub struct CommandTable<M> {
    handlers: BTreeMap<String, CommandHandler<M>>,
}

impl<M> CommandTable<M> {
    /// Creates an empty table
    pub fn new() -> Self {
        Self {
            handlers: BTreeMap::new(),
        }
    }

    /// Binds `name` to `handler`.
    ///
    /// # Errors
    ///
    /// Returns `DaqError::CommandAlreadyRegistered` if `name` is already bound.
    pub fn register(&mut self, name: &str, handler: CommandHandler<M>) -> AppResult<()> {
        if self.handlers.contains_key(name) {
            return Err(DaqError::CommandAlreadyRegistered(name.to_string()));
        }
        self.handlers.insert(name.to_string(), handler);
        Ok(())
    }

    /// Looks up the handler for `command` on behalf of `module`.
    pub fn handler(&self, module: &str, command: &str) -> AppResult<CommandHandler<M>> {
        self.handlers
            .get(command)
            .copied()
            .ok_or_else(|| DaqError::UnknownCommand {
                module: module.to_string(),
                command: command.to_string(),
            })
    }

    /// Returns true if `command` is bound
    pub fn contains(&self, command: &str) -> bool {
        self.handlers.contains_key(command)
    }

    /// Registered command names in sorted order
    pub fn names(&self) -> Vec<String> {
        self.handlers.keys().cloned().collect()
    }
}

impl<M> Default for CommandTable<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// Base trait for every module run control can host.
///
/// Modules are `Send + Sync` so the driver can move them between threads and so a
/// reporting caller can read telemetry through a shared reference while the module works.
pub trait DaqModule: Send + Sync {
    /// Instance name given at construction.
    fn name(&self) -> &str;

    /// One-time wiring after construction, before any registered command.
    fn init(&mut self, args: &Data) -> AppResult<()>;

    /// Names of the commands this module registered.
    fn command_names(&self) -> Vec<String>;

    /// Runs the registered handler for `command`.
    ///
    /// # Errors
    ///
    /// `DaqError::UnknownCommand` for names the module never registered, otherwise
    /// whatever the handler returns.
    fn execute_command(&mut self, command: &str, data: &Data) -> AppResult<()>;

    /// Returns true if the module registered `command`.
    fn has_command(&self, command: &str) -> bool {
        self.command_names().iter().any(|c| c == command)
    }

    /// Adds this module's telemetry to `collector`.
    ///
    /// `level` selects verbosity; modules are free to ignore it. The default reports nothing.
    fn get_info(&self, collector: &mut InfoCollector, level: i32) -> AppResult<()> {
        let _ = (collector, level);
        Ok(())
    }
}

type ModuleFactory = Box<dyn Fn(String) -> AppResult<Box<dyn DaqModule>> + Send + Sync>;

/// Registry of module factories keyed by module type.
///
/// # Examples
///
/// ```rust,ignore
/// let mut registry = ModuleRegistry::new();
/// registry.register("RenameMe", |name| Ok(Box::new(RenameMe::new(name)?)));
///
/// let module = registry.create("RenameMe", "rm1".to_string())?;
/// ```
pub struct ModuleRegistry {
    factories: HashMap<String, ModuleFactory>,
}

impl ModuleRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Creates a registry with every module type this crate ships
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register("RenameMe", |name| Ok(Box::new(RenameMe::new(name)?)));
        registry
    }

    /// Registers a module factory.
    ///
    /// A later registration for the same type replaces the earlier one.
    pub fn register<F>(&mut self, module_type: &str, factory: F)
    where
        F: Fn(String) -> AppResult<Box<dyn DaqModule>> + Send + Sync + 'static,
    {
        self.factories
            .insert(module_type.to_string(), Box::new(factory));
    }

    /// Creates a module instance named `name` from a registered type.
    ///
    /// # Errors
    ///
    /// Returns `DaqError::UnknownModuleType` if the type is not registered.
    pub fn create(&self, module_type: &str, name: String) -> AppResult<Box<dyn DaqModule>> {
        let factory = self
            .factories
            .get(module_type)
            .ok_or_else(|| DaqError::UnknownModuleType(module_type.to_string()))?;
        tracing::debug!(module_type, name = %name, "creating module");
        factory(name)
    }

    /// Lists registered module types in sorted order
    pub fn list_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self.factories.keys().cloned().collect();
        types.sort();
        types
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo {
        hits: Vec<String>,
    }

    fn record(echo: &mut Echo, data: &Data) -> AppResult<()> {
        echo.hits.push(data.to_string());
        Ok(())
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut table = CommandTable::<Echo>::new();
        table.register("conf", record).unwrap();
        let err = table.register("conf", record).unwrap_err();
        assert!(matches!(err, DaqError::CommandAlreadyRegistered(name) if name == "conf"));
    }

    #[test]
    fn handler_lookup_dispatches_to_bound_function() {
        let mut table = CommandTable::<Echo>::new();
        table.register("start", record).unwrap();

        let mut echo = Echo { hits: Vec::new() };
        let handler = table.handler("echo", "start").unwrap();
        handler(&mut echo, &serde_json::json!({"run": 1})).unwrap();

        assert_eq!(echo.hits, vec![r#"{"run":1}"#.to_string()]);
    }

    #[test]
    fn unknown_command_is_reported() {
        let table = CommandTable::<Echo>::new();
        match table.handler("echo", "pause") {
            Err(DaqError::UnknownCommand { module, command }) => {
                assert_eq!(module, "echo");
                assert_eq!(command, "pause");
            }
            _ => panic!("expected UnknownCommand"),
        }
    }

    #[test]
    fn names_are_sorted() {
        let mut table = CommandTable::<Echo>::new();
        table.register("stop", record).unwrap();
        table.register("conf", record).unwrap();
        table.register("start", record).unwrap();
        assert_eq!(table.names(), vec!["conf", "start", "stop"]);
        assert!(table.contains("stop"));
        assert!(!table.contains("scrap"));
    }

    #[test]
    fn registry_creates_builtin_module() {
        let registry = ModuleRegistry::with_builtin();
        assert_eq!(registry.list_types(), vec!["RenameMe".to_string()]);

        let module = registry.create("RenameMe", "rm1".to_string()).unwrap();
        assert_eq!(module.name(), "rm1");
        assert!(module.has_command("conf"));
    }

    #[test]
    fn registry_rejects_unknown_type() {
        let registry = ModuleRegistry::with_builtin();
        let result = registry.create("Missing", "m".to_string());
        assert!(matches!(result, Err(DaqError::UnknownModuleType(t)) if t == "Missing"));
    }
}
