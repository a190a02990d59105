//! Insights module - category browser and daily insight cards.

mod category;

pub use category::{InsightCategory, InsightCategoryKey};

use serde::{Deserialize, Serialize};

use crate::domain::tracking::SingleSelection;

/// A short tip shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyInsight {
    pub title: String,
    pub body: String,
}

/// Which category detail, if any, is open on the insights screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsightBrowser {
    open: SingleSelection<InsightCategoryKey>,
}

impl InsightBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&self, key: InsightCategoryKey) -> Self {
        Self {
            open: self.open.select(key),
        }
    }

    pub fn close(&self) -> Self {
        Self {
            open: self.open.cleared(),
        }
    }

    pub fn open_category(&self) -> Option<InsightCategoryKey> {
        self.open.selected()
    }

    pub fn is_open(&self) -> bool {
        !self.open.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browser_starts_closed() {
        assert!(!InsightBrowser::new().is_open());
    }

    #[test]
    fn opening_another_category_replaces_the_first() {
        let browser = InsightBrowser::new()
            .open(InsightCategoryKey::Mood)
            .open(InsightCategoryKey::Cycle);
        assert_eq!(browser.open_category(), Some(InsightCategoryKey::Cycle));
    }

    #[test]
    fn close_dismisses_detail() {
        let browser = InsightBrowser::new().open(InsightCategoryKey::Sleep).close();
        assert!(!browser.is_open());
        assert_eq!(browser.open_category(), None);
    }
}
