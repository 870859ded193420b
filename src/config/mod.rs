pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::OutOfRangePolicy;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "age-etl"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Convert person records from CSV to JSON with an age category")
)]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(long, env = "AGE_ETL_INPUT", default_value = "rawData.csv"))]
    pub input: String,

    #[cfg_attr(
        feature = "cli",
        arg(long, env = "AGE_ETL_OUTPUT", default_value = "processedData.json")
    )]
    pub output: String,

    #[cfg_attr(feature = "cli", arg(long, env = "AGE_ETL_DELIMITER", default_value = ","))]
    pub delimiter: char,

    #[cfg_attr(
        feature = "cli",
        arg(long, help = "Fail the run when an age falls outside every bracket")
    )]
    pub reject_out_of_range: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Log CPU and memory usage per phase"))]
    pub monitor: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            input: "rawData.csv".to_string(),
            output: "processedData.json".to_string(),
            delimiter: ',',
            reject_out_of_range: false,
            monitor: false,
            verbose: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output
    }

    fn delimiter(&self) -> u8 {
        u8::try_from(self.delimiter).unwrap_or(b',')
    }

    fn out_of_range_policy(&self) -> OutOfRangePolicy {
        if self.reject_out_of_range {
            OutOfRangePolicy::Reject
        } else {
            OutOfRangePolicy::Null
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input", &self.input)?;
        validation::validate_path("output", &self.output)?;
        validation::validate_distinct_paths(&self.input, &self.output)?;
        validation::validate_delimiter("delimiter", self.delimiter)?;
        Ok(())
    }
}
