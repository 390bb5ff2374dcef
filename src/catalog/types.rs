//! Catalog entity types
//!
//! Static entries use `&'static str` so the tables can live in `const`
//! slices. Recommendations are handed out as owned values so that callers
//! can extend a result list without touching the tables.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wildcard tag marking a tool as compatible with every model type
pub const ANY_MODEL: &str = "any";

/// Kind of advisory message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Action,
    Insight,
    Tool,
    Analysis,
}

impl RecommendationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationKind::Action => "action",
            RecommendationKind::Insight => "insight",
            RecommendationKind::Tool => "tool",
            RecommendationKind::Analysis => "analysis",
        }
    }
}

impl fmt::Display for RecommendationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recommendation priority, ordered from least to most urgent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Advisory message returned to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Unique within any returned list
    pub id: String,

    #[serde(rename = "type")]
    pub kind: RecommendationKind,

    pub title: String,

    pub description: String,

    pub priority: Priority,

    /// Model type the recommendation was produced for
    pub model_type: String,

    /// Provenance tag (usually a tool id)
    pub source: String,

    pub actionable: bool,
}

/// Compile-time recommendation template owned by a model family
#[derive(Debug, Clone, Copy)]
pub struct StaticRecommendation {
    pub id: &'static str,
    pub kind: RecommendationKind,
    pub title: &'static str,
    pub description: &'static str,
    pub priority: Priority,
    pub source: &'static str,
    pub actionable: bool,
}

impl StaticRecommendation {
    /// Materialize the template for a concrete model type
    pub fn instantiate(&self, model_type: &str) -> Recommendation {
        Recommendation {
            id: self.id.to_string(),
            kind: self.kind,
            title: self.title.to_string(),
            description: self.description.to_string(),
            priority: self.priority,
            model_type: model_type.to_string(),
            source: self.source.to_string(),
            actionable: self.actionable,
        }
    }
}

/// Analysis that complements the one the user selected
#[derive(Debug, Clone, Serialize)]
pub struct ComplementaryAnalysis {
    pub id: &'static str,
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub title: &'static str,
    pub description: &'static str,
    pub source: &'static str,
    pub applicable_models: &'static [&'static str],
    pub applicable_industries: &'static [&'static str],
}

impl ComplementaryAnalysis {
    /// Model match OR industry match
    pub fn applies_to(&self, model_type: &str, industry: &str) -> bool {
        self.applicable_models.contains(&model_type)
            || self.applicable_industries.contains(&industry)
    }
}

/// External open-source analysis tool
#[derive(Debug, Clone, Serialize)]
pub struct Tool {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub source_url: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_endpoint: Option<&'static str>,
    pub required_params: &'static [&'static str],
    pub compatible_models: &'static [&'static str],
}

impl Tool {
    /// Universally compatible tools carry the `any` tag
    pub fn is_universal(&self) -> bool {
        self.compatible_models.contains(&ANY_MODEL)
    }

    pub fn supports(&self, model_type: &str) -> bool {
        self.is_universal() || self.compatible_models.contains(&model_type)
    }
}

/// Family a model type belongs to; owns a fixed recommendation list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelFamily {
    TimeSeries,
    Clustering,
    Classification,
    DimensionalityReduction,
    General,
}

impl ModelFamily {
    /// Every family except the `General` catch-all
    pub const SPECIFIC: [ModelFamily; 4] = [
        ModelFamily::TimeSeries,
        ModelFamily::Clustering,
        ModelFamily::Classification,
        ModelFamily::DimensionalityReduction,
    ];

    /// Exact-match lookup, total over all strings
    pub fn from_model_type(model_type: &str) -> Self {
        match model_type {
            "sarima" | "arima" | "prophet" => ModelFamily::TimeSeries,
            "kmeans" | "hierarchical" | "dbscan" => ModelFamily::Clustering,
            "random_forest" | "xgboost" | "logistic_regression" => ModelFamily::Classification,
            "pca" | "tsne" | "umap" => ModelFamily::DimensionalityReduction,
            _ => ModelFamily::General,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelFamily::TimeSeries => "time_series",
            ModelFamily::Clustering => "clustering",
            ModelFamily::Classification => "classification",
            ModelFamily::DimensionalityReduction => "dimensionality_reduction",
            ModelFamily::General => "general",
        }
    }
}

impl fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_mapping() {
        assert_eq!(ModelFamily::from_model_type("sarima"), ModelFamily::TimeSeries);
        assert_eq!(ModelFamily::from_model_type("dbscan"), ModelFamily::Clustering);
        assert_eq!(ModelFamily::from_model_type("xgboost"), ModelFamily::Classification);
        assert_eq!(ModelFamily::from_model_type("umap"), ModelFamily::DimensionalityReduction);
        assert_eq!(ModelFamily::from_model_type("svm"), ModelFamily::General);
        // Matching is exact, not case-folded
        assert_eq!(ModelFamily::from_model_type("SARIMA"), ModelFamily::General);
    }

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::Critical > Priority::High);
        assert!(Priority::Medium > Priority::Low);
    }

    #[test]
    fn test_recommendation_serializes_type_field() {
        let rec = StaticRecommendation {
            id: "x",
            kind: RecommendationKind::Insight,
            title: "t",
            description: "d",
            priority: Priority::Low,
            source: "s",
            actionable: false,
        }
        .instantiate("pca");

        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["type"], "insight");
        assert_eq!(json["priority"], "low");
        assert_eq!(json["model_type"], "pca");
    }
}
