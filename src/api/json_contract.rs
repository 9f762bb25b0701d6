use serde::{Deserialize, Serialize};

use crate::error::{ChartSpecError, ChartSpecResult};

use super::{ChartDataModel, ChartSpecBuilder, RenderSpec};

pub const RENDER_SPEC_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSpecJsonContractV1 {
    pub schema_version: u32,
    pub spec: RenderSpec,
}

impl RenderSpec {
    pub fn to_json_pretty(&self) -> ChartSpecResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartSpecError::Serialization(format!("failed to serialize render spec: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartSpecResult<String> {
        let payload = RenderSpecJsonContractV1 {
            schema_version: RENDER_SPEC_JSON_SCHEMA_V1,
            spec: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartSpecError::Serialization(format!(
                "failed to serialize render spec contract v1: {e}"
            ))
        })
    }

    /// Accepts either a bare spec or a versioned v1 payload.
    pub fn from_json_compat_str(input: &str) -> ChartSpecResult<Self> {
        if let Ok(spec) = serde_json::from_str::<RenderSpec>(input) {
            return Ok(spec);
        }
        let payload: RenderSpecJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartSpecError::Serialization(format!("failed to parse render spec json payload: {e}"))
        })?;
        if payload.schema_version != RENDER_SPEC_JSON_SCHEMA_V1 {
            return Err(ChartSpecError::Serialization(format!(
                "unsupported render spec schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.spec)
    }
}

impl ChartDataModel {
    /// Loads a model snapshot; a series without `points` fails to load.
    pub fn from_json_str(input: &str) -> ChartSpecResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartSpecError::InvalidData(format!("failed to parse chart data model json: {e}"))
        })
    }
}

impl ChartSpecBuilder {
    pub fn build_json_contract_v1_pretty(&self, model: &ChartDataModel) -> ChartSpecResult<String> {
        self.build(model)?.to_json_contract_v1_pretty()
    }
}
