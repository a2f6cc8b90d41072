use crate::core::{PatchReport, Pipeline};
use crate::utils::error::Result;

pub struct PatchEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> PatchEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<PatchReport> {
        tracing::info!("Starting route patch...");

        let document = self.pipeline.extract().await?;
        tracing::info!("Read {} lines", document.line_count());

        let result = self.pipeline.transform(document).await?;
        tracing::info!(
            "Matched {} target lines ({} protected, {} other components)",
            result.report.replaced.len(),
            result.report.protected,
            result.report.unmatched
        );

        let report = self.pipeline.load(result).await?;
        if report.written {
            tracing::info!("Wrote {}", report.file);
        }

        Ok(report)
    }
}
