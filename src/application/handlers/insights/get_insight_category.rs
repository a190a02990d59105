//! GetInsightCategoryHandler - Query handler for an insight category's detail view.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::insights::{InsightCategory, InsightCategoryKey};
use crate::ports::{ContentCatalog, ProviderError};

/// Query for one category's detail view.
#[derive(Debug, Clone, Copy)]
pub struct GetInsightCategoryQuery {
    pub key: InsightCategoryKey,
}

/// The detail sheet shown when a category bubble is tapped.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightCategoryDetail {
    pub category: InsightCategory,
    pub patterns_title: String,
    pub recommendation: String,
}

impl From<InsightCategory> for InsightCategoryDetail {
    fn from(category: InsightCategory) -> Self {
        Self {
            patterns_title: category.patterns_title(),
            recommendation: category.recommendation(),
            category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InsightsError {
    #[error("Insight category not found: {0}")]
    CategoryNotFound(InsightCategoryKey),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl From<InsightsError> for DomainError {
    fn from(err: InsightsError) -> Self {
        match err {
            InsightsError::CategoryNotFound(key) => {
                DomainError::new(ErrorCode::CategoryNotFound, err.to_string())
                    .with_detail("key", key.as_str())
            }
            InsightsError::Provider(e) => e.into(),
        }
    }
}

/// Handler for the insight category detail view.
pub struct GetInsightCategoryHandler {
    content: Arc<dyn ContentCatalog>,
}

impl GetInsightCategoryHandler {
    pub fn new(content: Arc<dyn ContentCatalog>) -> Self {
        Self { content }
    }

    pub async fn handle(
        &self,
        query: GetInsightCategoryQuery,
    ) -> Result<InsightCategoryDetail, InsightsError> {
        let category = self
            .content
            .insight_category(query.key)
            .await?
            .ok_or(InsightsError::CategoryNotFound(query.key))?;

        tracing::debug!(category = query.key.as_str(), "opened insight category");
        Ok(category.into())
    }
}
