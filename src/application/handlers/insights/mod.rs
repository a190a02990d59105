//! Insight query handlers.

mod get_insight_category;

pub use get_insight_category::{
    GetInsightCategoryHandler, GetInsightCategoryQuery, InsightCategoryDetail, InsightsError,
};
