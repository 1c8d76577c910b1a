use crate::core::aggregator::aggregate;
use crate::core::normalizer::normalize;
use crate::core::report::render_report;
use crate::core::{ConfigProvider, CustomerRecord, Pipeline, Storage, TransformResult};
use crate::utils::error::{EtlError, Result};

/// Reads every configured export, merges duplicate customers and writes the
/// buyer base report.
pub struct BuyerBasePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> BuyerBasePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for BuyerBasePipeline<S, C> {
    async fn extract(&self) -> Result<Vec<CustomerRecord>> {
        let mut records = Vec::new();

        // file-list order defines first-seen order for the stage merge
        for path in self.config.input_files() {
            let data = self
                .storage
                .read_file(path)
                .await
                .map_err(|e| match e {
                    EtlError::IoError(source) => EtlError::InputFileError {
                        path: path.clone(),
                        source,
                    },
                    other => other,
                })?;
            let mut file_records = normalize(path, &data)?;
            tracing::debug!("{} records read from {}", file_records.len(), path);
            records.append(&mut file_records);
        }

        Ok(records)
    }

    async fn transform(&self, data: Vec<CustomerRecord>) -> Result<TransformResult> {
        let customers = aggregate(&data);

        Ok(TransformResult {
            customers,
            input_records: data.len(),
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let output_path = self.config.output_file().to_string();
        let report = render_report(&result.customers)?;

        tracing::debug!(
            "Writing {} customers ({} bytes) to {}",
            result.customers.len(),
            report.len(),
            output_path
        );
        self.storage.write_file(&output_path, &report).await?;

        Ok(output_path)
    }
}
