use crate::domain::model::BatchSummary;
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

pub struct BatchEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> BatchEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<BatchSummary> {
        tracing::info!("Starting batch generation...");

        // Extract
        let records = self.pipeline.extract()?;
        tracing::info!("📥 Read {} rows", records.len());

        // Transform
        let result = self.pipeline.transform(records)?;
        tracing::info!(
            "🔧 Generated {} configurations, {} rows rejected",
            result.generated.len(),
            result.failures.len()
        );
        for failure in &result.failures {
            tracing::warn!("⚠️ Row {}: {}", failure.row, failure.message);
        }

        // Load
        let summary = self.pipeline.load(result)?;
        tracing::info!("📁 Output saved to: {}", summary.output_path);

        Ok(summary)
    }
}
