use crate::domain::model::{Document, PatchReport, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn copy_file(
        &self,
        from: &str,
        to: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait RuleProvider: Send + Sync {
    fn marker(&self) -> &str;
    fn replacement(&self) -> &str;
    fn protected_names(&self) -> &[String];
    fn target_names(&self) -> &[String];
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Document>;
    async fn transform(&self, document: Document) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<PatchReport>;
}
