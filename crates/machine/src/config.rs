//! Machine configuration, read from `VENDING_*` environment variables.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use thiserror::Error;
use vending_inventory::BUNDLED_RESOURCE_NAME;

/// Balance a freshly constructed machine starts with.
pub const DEFAULT_STARTING_BALANCE: f64 = 10.0;

pub const ENV_STARTING_BALANCE: &str = "VENDING_STARTING_BALANCE";
pub const ENV_POLICY: &str = "VENDING_POLICY";
pub const ENV_RESOURCE_DIR: &str = "VENDING_RESOURCE_DIR";
pub const ENV_RESOURCE_NAME: &str = "VENDING_RESOURCE_NAME";

/// How `vend` orders its checks against its mutations.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize, EnumString, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum VendPolicy {
    /// Validate quantity, stock and funds first; commit nothing on failure.
    #[default]
    Atomic,
    /// Decrement stock before the funds check and keep the decrement when
    /// funds are short. The stock check only asks whether any stock is left.
    Legacy,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineConfig {
    pub starting_balance: f64,
    pub vend_policy: VendPolicy,
    /// Directory to load the inventory resource from. `None` uses the
    /// inventory compiled into the binary.
    pub resource_dir: Option<PathBuf>,
    pub resource_name: String,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            starting_balance: DEFAULT_STARTING_BALANCE,
            vend_policy: VendPolicy::default(),
            resource_dir: None,
            resource_name: BUNDLED_RESOURCE_NAME.to_string(),
        }
    }
}

impl MachineConfig {
    pub fn with_starting_balance(mut self, balance: f64) -> Self {
        self.starting_balance = balance;
        self
    }

    pub fn with_vend_policy(mut self, policy: VendPolicy) -> Self {
        self.vend_policy = policy;
        self
    }

    pub fn with_resource_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.resource_dir = Some(dir.into());
        self
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Unset keys keep their
    /// defaults; set but unparsable keys are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_STARTING_BALANCE) {
            config.starting_balance =
                raw.trim()
                    .parse::<f64>()
                    .map_err(|e| ConfigError::InvalidValue {
                        key: ENV_STARTING_BALANCE,
                        value: raw.clone(),
                        reason: e.to_string(),
                    })?;
        }

        if let Some(raw) = lookup(ENV_POLICY) {
            config.vend_policy =
                raw.trim()
                    .parse::<VendPolicy>()
                    .map_err(|_| ConfigError::InvalidValue {
                        key: ENV_POLICY,
                        value: raw.clone(),
                        reason: "expected `atomic` or `legacy`".to_string(),
                    })?;
        }

        if let Some(raw) = lookup(ENV_RESOURCE_DIR).filter(|v| !v.trim().is_empty()) {
            config.resource_dir = Some(PathBuf::from(raw));
        }

        if let Some(raw) = lookup(ENV_RESOURCE_NAME).filter(|v| !v.trim().is_empty()) {
            config.resource_name = raw;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.starting_balance.is_finite() || self.starting_balance < 0.0 {
            return Err(ConfigError::InvalidValue {
                key: ENV_STARTING_BALANCE,
                value: self.starting_balance.to_string(),
                reason: "balance must be a non-negative number".to_string(),
            });
        }
        Ok(())
    }
}
