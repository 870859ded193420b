use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Runs extract, transform and load in order; the first failure aborts the run.
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting ETL process...");
        self.monitor.log_stats("Start");

        // Extract
        let raw_records = self.pipeline.extract().await?;
        tracing::info!("Extracted {} records", raw_records.len());
        self.monitor.log_stats("Extract");

        // Transform
        let result = self.pipeline.transform(raw_records).await?;
        tracing::info!(
            "Transformed {} records (youth: {}, adult: {}, senior: {}, uncategorized: {})",
            result.records.len(),
            result.summary.youth,
            result.summary.adult,
            result.summary.senior,
            result.summary.uncategorized
        );
        self.monitor.log_stats("Transform");

        // Load
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Output saved to: {}", output_path);
        self.monitor.log_stats("Load");
        self.monitor.log_final_stats();

        Ok(output_path)
    }
}
