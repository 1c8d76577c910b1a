use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load in sequence. Nothing is written unless
    /// both earlier phases succeed.
    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();
        tracing::info!("🚀 Starting buyer base consolidation");

        // Extract
        let records = self.pipeline.extract().await?;
        tracing::info!("📥 Extracted {} records", records.len());

        // Transform
        let result = self.pipeline.transform(records).await?;
        tracing::info!(
            "🔄 Merged {} records into {} customers",
            result.input_records,
            result.customers.len()
        );

        // Load
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("💾 Output saved to: {} ({:?})", output_path, started.elapsed());

        Ok(output_path)
    }
}
