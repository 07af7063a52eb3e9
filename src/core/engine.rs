use crate::core::{EstimateReport, Pipeline};
use crate::utils::error::Result;

pub struct EstimateEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EstimateEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<EstimateReport> {
        tracing::info!("Starting estimate");

        // Identify
        let product_name = self.pipeline.identify().await?;
        tracing::info!("Identified product: {}", product_name);

        // Estimate
        let estimate = self.pipeline.estimate(product_name).await?;
        tracing::info!(
            "Category {} → total ${:.2}",
            estimate.category(),
            estimate.total()
        );

        // Deliver
        let written_files = self.pipeline.deliver(&estimate).await?;
        for path in &written_files {
            tracing::info!("Invoice saved to: {}", path);
        }

        Ok(EstimateReport {
            invoice: estimate.invoice(),
            estimate,
            written_files,
        })
    }
}
