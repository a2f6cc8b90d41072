pub mod engine;
pub mod pipeline;
pub mod rules;

pub use crate::domain::model::{Document, LineOutcome, PatchReport, TransformResult};
pub use crate::domain::ports::{Pipeline, RuleProvider, Storage};
pub use crate::utils::error::Result;
