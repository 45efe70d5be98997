use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{PlotConfigError, PlotConfigResult};
use crate::render::FormRenderer;

use super::{PlotConfig, PlotConfigEditor};

pub const PLOT_CONFIG_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: PlotConfig,
}

impl PlotConfig {
    pub fn to_json_pretty(&self) -> PlotConfigResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            PlotConfigError::InvalidData(format!("failed to serialize plot config json: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> PlotConfigResult<String> {
        let payload = PlotConfigJsonContractV1 {
            schema_version: PLOT_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            PlotConfigError::InvalidData(format!("failed to serialize plot config contract v1: {e}"))
        })
    }

    /// Accepts either a bare config or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> PlotConfigResult<Self> {
        let raw: Value = serde_json::from_str(input).map_err(|e| {
            PlotConfigError::InvalidData(format!("failed to parse plot config json payload: {e}"))
        })?;
        if raw.get("schema_version").is_none() {
            return serde_json::from_value(raw).map_err(|e| {
                PlotConfigError::InvalidData(format!("failed to parse plot config: {e}"))
            });
        }
        let payload: PlotConfigJsonContractV1 = serde_json::from_value(raw).map_err(|e| {
            PlotConfigError::InvalidData(format!("failed to parse plot config contract: {e}"))
        })?;
        if payload.schema_version != PLOT_CONFIG_JSON_SCHEMA_V1 {
            return Err(PlotConfigError::InvalidData(format!(
                "unsupported plot config schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.config)
    }
}

impl<R: FormRenderer> PlotConfigEditor<R> {
    pub fn plot_config_json_contract_v1_pretty(&self) -> PlotConfigResult<String> {
        self.plot_config().to_json_contract_v1_pretty()
    }
}
