use crate::core::codec::{parse_records, render_document};
use crate::core::transformer::Transformer;
use crate::core::{ConfigProvider, Pipeline, RawRecord, Storage, TransformResult};
use crate::utils::error::Result;

/// Reads person rows from a delimited file, classifies ages and writes a JSON document.
pub struct CsvToJsonPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    transformer: Transformer,
}

impl<S: Storage, C: ConfigProvider> CsvToJsonPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let transformer = Transformer::with_policy(config.out_of_range_policy());
        Self {
            storage,
            config,
            transformer,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for CsvToJsonPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<RawRecord>> {
        let input_path = self.config.input_path();
        tracing::debug!("Reading input from: {}", input_path);

        let data = self.storage.read_file(input_path).await?;
        tracing::debug!("Read {} bytes, parsing records", data.len());

        let records = parse_records(&data, self.config.delimiter())?;
        tracing::info!("📥 Parsed {} records from {}", records.len(), input_path);
        Ok(records)
    }

    async fn transform(&self, records: Vec<RawRecord>) -> Result<TransformResult> {
        tracing::debug!(
            "Classifying {} records (out-of-range policy: {:?})",
            records.len(),
            self.transformer.policy()
        );
        let result = self.transformer.transform(records)?;

        if result.summary.uncategorized > 0 {
            tracing::warn!(
                "⚠️ {} records have an age outside every bracket, ageCategory set to null",
                result.summary.uncategorized
            );
        }
        Ok(result)
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let output_path = self.config.output_path();
        let document = render_document(&result.records)?;

        tracing::debug!(
            "Writing JSON document ({} bytes) to {}",
            document.len(),
            output_path
        );
        self.storage.write_file(output_path, &document).await?;

        tracing::info!("💾 Wrote {} records to {}", result.records.len(), output_path);
        Ok(output_path.to_string())
    }
}
