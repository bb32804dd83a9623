use serde::de::DeserializeOwned;

use crate::error::{ChartError, ChartResult};

use super::{BarStyle, ColorConfig, LineStyle, PlotOptions};

fn parse_config<T: DeserializeOwned>(input: &str, what: &str) -> ChartResult<T> {
    serde_json::from_str(input)
        .map_err(|e| ChartError::InvalidInput(format!("failed to parse {what}: {e}")))
}

impl PlotOptions {
    /// Parses options from JSON, rejecting unknown keys at every level.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        parse_config(input, "plot options")
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize plot options: {e}"))
        })
    }
}

impl ColorConfig {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        parse_config(input, "color config")
    }
}

impl BarStyle {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        parse_config(input, "bar style")
    }
}

impl LineStyle {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        parse_config(input, "line style")
    }
}
