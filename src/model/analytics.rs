//! Analytics settings and the analytics view switcher.

use super::segmented::SegmentedItem;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum::{Display, EnumIter, IntoEnumIterator};

/// Per-form analytics configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSettings {
    pub id: String,
    pub question_id: String,
    /// Question id -> whether that question contributes its mean value.
    pub use_mean_value: HashMap<String, bool>,
    /// Whether to create values between all entries with the last value.
    pub interpolate: bool,
}

impl AnalyticsSettings {
    pub fn new(id: impl Into<String>, question_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            question_id: question_id.into(),
            use_mean_value: HashMap::new(),
            interpolate: false,
        }
    }

    /// The mean-value flag for `question_id`, or `default` when none is set.
    pub fn uses_mean_value(&self, question_id: &str, default: bool) -> bool {
        self.use_mean_value
            .get(question_id)
            .copied()
            .unwrap_or(default)
    }
}

/// Views reachable from the analytics screen.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display, EnumIter)]
pub enum AnalyticsViewType {
    Trackables,
    Tags,
    Correlations,
}

impl AnalyticsViewType {
    /// Route segment used in detail links.
    pub fn slug(&self) -> &'static str {
        match self {
            AnalyticsViewType::Trackables => "trackables",
            AnalyticsViewType::Tags => "tags",
            AnalyticsViewType::Correlations => "correlations",
        }
    }
}

/// One segment per analytics view, in display order.
pub fn analytics_segmented_items() -> Vec<SegmentedItem<AnalyticsViewType>> {
    AnalyticsViewType::iter()
        .map(|view| SegmentedItem::new(view.to_string(), view))
        .collect()
}

pub fn analytics_details_link(entity_type: &str, id: &str) -> String {
    format!("/analytics/{}:{}", entity_type, id)
}
