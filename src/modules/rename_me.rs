//! Template module.
//!
//! `RenameMe` answers `conf`, `start`, `stop` and `scrap`. Only `conf` has an effect: it
//! deserializes the payload into [`ConfParams`] and copies the value into module state.
//! The other handlers accept their payload and do nothing, leaving room for the module
//! author.
//!
//! Telemetry uses two counters. The operational path adds to both through
//! [`RenameMe::count`]; [`DaqModule::get_info`] reports the total and takes the delta with
//! an atomic swap, so an increment racing with a report lands in exactly one report.

use crate::appfwk::{CommandTable, DaqModule, Data};
use crate::error::{AppResult, DaqError};
use crate::opmon::{InfoCollector, InfoRecord};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Configuration record accepted by the `conf` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfParams {
    /// Value copied into the module on `conf`
    pub some_configured_value: i32,
}

/// Telemetry record published by `get_info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameMeInfo {
    /// Everything counted since construction
    pub total_amount: u64,
    /// Counted since the previous report
    pub amount_since_last_get_info_call: u64,
}

impl InfoRecord for RenameMeInfo {
    const NAME: &'static str = "renamemeinfo";
}

/// Template module. Replace this line with what your module does.
pub struct RenameMe {
    name: String,
    commands: CommandTable<RenameMe>,
    some_configured_value: Option<i32>,
    total_amount: AtomicU64,
    amount_since_last_get_info_call: AtomicU64,
}

impl RenameMe {
    /// Creates the module and registers its commands.
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let mut commands = CommandTable::new();
        commands.register("conf", Self::do_conf)?;
        commands.register("start", Self::do_start)?;
        commands.register("stop", Self::do_stop)?;
        commands.register("scrap", Self::do_scrap)?;

        Ok(Self {
            name: name.into(),
            commands,
            some_configured_value: None,
            total_amount: AtomicU64::new(0),
            amount_since_last_get_info_call: AtomicU64::new(0),
        })
    }

    /// Value set by the last successful `conf`; `None` until then.
    pub fn some_configured_value(&self) -> Option<i32> {
        self.some_configured_value
    }

    /// Adds `amount` to both telemetry counters.
    pub fn count(&self, amount: u64) {
        self.total_amount.fetch_add(amount, Ordering::Relaxed);
        self.amount_since_last_get_info_call
            .fetch_add(amount, Ordering::Relaxed);
    }

    fn do_conf(&mut self, data: &Data) -> AppResult<()> {
        let conf = ConfParams::deserialize(data).map_err(|source| DaqError::Conf {
            module: self.name.clone(),
            source,
        })?;
        self.some_configured_value = Some(conf.some_configured_value);
        tracing::info!(module = %self.name, value = conf.some_configured_value, "configured");
        Ok(())
    }

    fn do_start(&mut self, _args: &Data) -> AppResult<()> {
        tracing::debug!(module = %self.name, "start");
        Ok(())
    }

    fn do_stop(&mut self, _args: &Data) -> AppResult<()> {
        tracing::debug!(module = %self.name, "stop");
        Ok(())
    }

    fn do_scrap(&mut self, _args: &Data) -> AppResult<()> {
        tracing::debug!(module = %self.name, "scrap");
        Ok(())
    }
}

impl DaqModule for RenameMe {
    fn name(&self) -> &str {
        &self.name
    }

    fn init(&mut self, _args: &Data) -> AppResult<()> {
        tracing::debug!(module = %self.name, "init");
        Ok(())
    }

    fn command_names(&self) -> Vec<String> {
        self.commands.names()
    }

    fn has_command(&self, command: &str) -> bool {
        self.commands.contains(command)
    }

    fn execute_command(&mut self, command: &str, data: &Data) -> AppResult<()> {
        let handler = self.commands.handler(&self.name, command)?;
        handler(self, data)
    }

    fn get_info(&self, collector: &mut InfoCollector, _level: i32) -> AppResult<()> {
        let info = RenameMeInfo {
            total_amount: self.total_amount.load(Ordering::Relaxed),
            amount_since_last_get_info_call: self
                .amount_since_last_get_info_call
                .swap(0, Ordering::Relaxed),
        };
        collector.add(&info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tracing_test::traced_test;

    fn report(module: &RenameMe) -> RenameMeInfo {
        let mut ci = InfoCollector::new();
        module.get_info(&mut ci, 0).unwrap();
        ci.record::<RenameMeInfo>().unwrap()
    }

    #[test]
    fn registers_lifecycle_commands() {
        let module = RenameMe::new("rm").unwrap();
        assert_eq!(module.command_names(), vec!["conf", "scrap", "start", "stop"]);
        assert!(!module.has_command("init"));
    }

    #[test]
    fn unconfigured_until_conf() {
        let mut module = RenameMe::new("rm").unwrap();
        assert_eq!(module.some_configured_value(), None);

        module
            .execute_command("conf", &json!({ "some_configured_value": -3 }))
            .unwrap();
        assert_eq!(module.some_configured_value(), Some(-3));
    }

    #[test]
    fn bad_conf_leaves_state_unchanged() {
        let mut module = RenameMe::new("rm").unwrap();
        module
            .execute_command("conf", &json!({ "some_configured_value": 10 }))
            .unwrap();

        for payload in [
            json!({ "some_configured_value": "ten" }),
            json!({}),
            json!({ "some_configured_value": 11, "extra": true }),
            json!(null),
        ] {
            let err = module.execute_command("conf", &payload).unwrap_err();
            assert!(matches!(err, DaqError::Conf { ref module, .. } if module == "rm"));
            assert_eq!(module.some_configured_value(), Some(10));
        }
    }

    #[traced_test]
    #[test]
    fn conf_is_logged_with_module_name() {
        let mut module = RenameMe::new("rm_logged").unwrap();
        module
            .execute_command("conf", &json!({ "some_configured_value": 99 }))
            .unwrap();
        assert!(logs_contain("configured"));
        assert!(logs_contain("rm_logged"));
    }

    #[test]
    fn placeholder_commands_accept_any_payload() {
        let mut module = RenameMe::new("rm").unwrap();
        for command in ["start", "stop", "scrap"] {
            module.execute_command(command, &json!({ "run": 7 })).unwrap();
            module.execute_command(command, &Data::Null).unwrap();
        }
        assert_eq!(module.some_configured_value(), None);
    }

    #[test]
    fn report_resets_delta_only() {
        let module = RenameMe::new("rm").unwrap();
        module.count(3);
        module.count(4);

        assert_eq!(
            report(&module),
            RenameMeInfo {
                total_amount: 7,
                amount_since_last_get_info_call: 7
            }
        );

        module.count(1);
        assert_eq!(
            report(&module),
            RenameMeInfo {
                total_amount: 8,
                amount_since_last_get_info_call: 1
            }
        );
        assert_eq!(report(&module).amount_since_last_get_info_call, 0);
    }
}
