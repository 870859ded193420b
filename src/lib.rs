pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::app::pipelines::csv_json_pipeline::CsvToJsonPipeline;
pub use crate::config::{cli::LocalStorage, toml_config::TomlConfig, CliConfig};
pub use crate::core::{etl::EtlEngine, transformer::Transformer};
pub use crate::domain::brackets::{AgeBracket, Classifier, STANDARD_BRACKETS};
pub use crate::domain::model::{AgeCategory, OutOfRangePolicy, OutputRecord, RawRecord};
pub use crate::utils::error::{EtlError, Result};
