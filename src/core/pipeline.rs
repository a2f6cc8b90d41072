use crate::core::rules::patch_line;
use crate::core::{Document, PatchReport, Pipeline, RuleProvider, Storage, TransformResult};
use crate::utils::error::{PatchError, Result};
use chrono::Utc;

/// Where to patch and how to persist the result.
#[derive(Debug, Clone)]
pub struct PatchOptions {
    pub file: String,
    pub dry_run: bool,
    pub backup: bool,
}

impl PatchOptions {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            dry_run: false,
            backup: false,
        }
    }

    pub fn backup_path(&self) -> String {
        format!("{}.bak", self.file)
    }
}

pub struct LinePatchPipeline<S: Storage, R: RuleProvider> {
    storage: S,
    rules: R,
    options: PatchOptions,
}

impl<S: Storage, R: RuleProvider> LinePatchPipeline<S, R> {
    pub fn new(storage: S, rules: R, options: PatchOptions) -> Self {
        Self {
            storage,
            rules,
            options,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, R: RuleProvider> Pipeline for LinePatchPipeline<S, R> {
    async fn extract(&self) -> Result<Document> {
        tracing::debug!("Reading {}", self.options.file);
        let bytes = self.storage.read_file(&self.options.file).await?;

        let content = String::from_utf8(bytes).map_err(|_| PatchError::EncodingError {
            path: self.options.file.clone(),
        })?;

        Ok(Document::parse(&content))
    }

    async fn transform(&self, document: Document) -> Result<TransformResult> {
        let mut report = PatchReport {
            file: self.options.file.clone(),
            ..PatchReport::default()
        };
        let mut lines = Vec::with_capacity(document.line_count());

        for (index, line) in document.lines.iter().enumerate() {
            let (patched, outcome) = patch_line(&self.rules, line);
            report.record(index + 1, line, &outcome);

            if patched != *line {
                tracing::debug!("line {}: '{}' -> '{}'", index + 1, line.trim(), patched.trim());
            }
            lines.push(patched);
        }

        Ok(TransformResult {
            document: Document { lines },
            report,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<PatchReport> {
        let TransformResult {
            document,
            mut report,
        } = result;

        if self.options.dry_run {
            tracing::info!("Dry run, leaving {} untouched", self.options.file);
        } else if !report.has_changes() {
            tracing::info!("No target components found in {}", self.options.file);
        } else {
            if self.options.backup {
                let backup_path = self.options.backup_path();
                self.storage
                    .copy_file(&self.options.file, &backup_path)
                    .await?;
                tracing::info!("Backup written to {}", backup_path);
                report.backup = Some(backup_path);
            } else {
                tracing::warn!("Overwriting {} without a backup", self.options.file);
            }

            self.storage
                .write_file(&self.options.file, document.render().as_bytes())
                .await?;
            report.written = true;
        }

        report.finished_at = Some(Utc::now());
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rules::PatchRules;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn with_file(path: &str, content: &[u8]) -> Self {
            let mut files = HashMap::new();
            files.insert(path.to_string(), content.to_vec());
            Self {
                files: Arc::new(Mutex::new(files)),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                PatchError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }

        async fn copy_file(&self, from: &str, to: &str) -> Result<()> {
            let data = self.read_file(from).await?;
            self.write_file(to, &data).await
        }
    }

    const ROUTES: &str = "const routes = [\n  {\n    path: '/tele',\n      component: TeleconsultAppointment,\n  },\n  {\n      component: HRMManagementSimple,\n  },\n  {\n      component: Dashboard,\n  },\n];\n";

    fn pipeline(storage: MockStorage, options: PatchOptions) -> LinePatchPipeline<MockStorage, PatchRules> {
        LinePatchPipeline::new(storage, PatchRules::default(), options)
    }

    #[tokio::test]
    async fn test_extract_splits_lines() {
        let storage = MockStorage::with_file("App.tsx", ROUTES.as_bytes());
        let pipeline = pipeline(storage, PatchOptions::new("App.tsx"));

        let document = pipeline.extract().await.unwrap();

        assert_eq!(document.line_count(), 13);
        assert_eq!(document.lines.last().map(String::as_str), Some(""));
    }

    #[tokio::test]
    async fn test_extract_missing_file() {
        let storage = MockStorage::with_file("other.tsx", b"");
        let pipeline = pipeline(storage, PatchOptions::new("App.tsx"));

        let err = pipeline.extract().await.unwrap_err();
        assert!(matches!(err, PatchError::IoError(_)));
    }

    #[tokio::test]
    async fn test_extract_rejects_invalid_utf8() {
        let storage = MockStorage::with_file("App.tsx", &[0x66, 0xff, 0xfe]);
        let pipeline = pipeline(storage, PatchOptions::new("App.tsx"));

        let err = pipeline.extract().await.unwrap_err();
        assert!(matches!(err, PatchError::EncodingError { .. }));
    }

    #[tokio::test]
    async fn test_transform_replaces_only_targets() {
        let storage = MockStorage::with_file("App.tsx", ROUTES.as_bytes());
        let pipeline = pipeline(storage, PatchOptions::new("App.tsx"));

        let document = pipeline.extract().await.unwrap();
        let input_lines = document.lines.clone();
        let result = pipeline.transform(document).await.unwrap();

        assert_eq!(result.document.line_count(), input_lines.len());
        assert_eq!(result.document.lines[3], "      component: ComingSoon,");
        assert_eq!(result.document.lines[6], "      component: HRMManagementSimple,");
        assert_eq!(result.document.lines[9], "      component: Dashboard,");

        let report = &result.report;
        assert_eq!(report.replaced.len(), 1);
        assert_eq!(report.replaced[0].line_number, 4);
        assert_eq!(report.replaced[0].target, "TeleconsultAppointment");
        assert_eq!(report.protected, 1);
        assert_eq!(report.unmatched, 1);
        assert_eq!(report.total_lines, 13);
    }

    #[tokio::test]
    async fn test_load_overwrites_file() {
        let storage = MockStorage::with_file("App.tsx", ROUTES.as_bytes());
        let pipeline = pipeline(storage.clone(), PatchOptions::new("App.tsx"));

        let document = pipeline.extract().await.unwrap();
        let result = pipeline.transform(document).await.unwrap();
        let report = pipeline.load(result).await.unwrap();

        assert!(report.written);
        assert!(report.backup.is_none());
        assert!(report.finished_at.is_some());

        let written = String::from_utf8(storage.get_file("App.tsx").await.unwrap()).unwrap();
        assert_eq!(written, ROUTES.replace("TeleconsultAppointment", "ComingSoon"));
    }

    #[tokio::test]
    async fn test_load_dry_run_keeps_file() {
        let storage = MockStorage::with_file("App.tsx", ROUTES.as_bytes());
        let options = PatchOptions {
            dry_run: true,
            ..PatchOptions::new("App.tsx")
        };
        let pipeline = pipeline(storage.clone(), options);

        let document = pipeline.extract().await.unwrap();
        let result = pipeline.transform(document).await.unwrap();
        let report = pipeline.load(result).await.unwrap();

        assert!(!report.written);
        assert_eq!(report.replaced.len(), 1);
        assert_eq!(storage.get_file("App.tsx").await.unwrap(), ROUTES.as_bytes());
    }

    #[tokio::test]
    async fn test_load_with_backup() {
        let storage = MockStorage::with_file("App.tsx", ROUTES.as_bytes());
        let options = PatchOptions {
            backup: true,
            ..PatchOptions::new("App.tsx")
        };
        let pipeline = pipeline(storage.clone(), options);

        let document = pipeline.extract().await.unwrap();
        let result = pipeline.transform(document).await.unwrap();
        let report = pipeline.load(result).await.unwrap();

        assert_eq!(report.backup.as_deref(), Some("App.tsx.bak"));
        assert_eq!(storage.get_file("App.tsx.bak").await.unwrap(), ROUTES.as_bytes());
        assert_ne!(storage.get_file("App.tsx").await.unwrap(), ROUTES.as_bytes());
    }

    #[tokio::test]
    async fn test_load_skips_write_without_changes() {
        let content = "      component: Dashboard,\n";
        let storage = MockStorage::with_file("App.tsx", content.as_bytes());
        let options = PatchOptions {
            backup: true,
            ..PatchOptions::new("App.tsx")
        };
        let pipeline = pipeline(storage.clone(), options);

        let document = pipeline.extract().await.unwrap();
        let result = pipeline.transform(document).await.unwrap();
        let report = pipeline.load(result).await.unwrap();

        assert!(!report.written);
        assert!(storage.get_file("App.tsx.bak").await.is_none());
    }
}
