//! Recommendation composition engine
//!
//! Given a model type, an industry and optional computed metrics, assembles
//! advisory messages, complementary analyses and compatible tools from the
//! static catalogs. The methodology lookups are pure as well, except that a
//! generated package id carries a timestamp.

pub mod metrics;
pub mod rules;
pub mod selector;
pub mod filters;
pub mod methodology;

// Re-export commonly used items
pub use metrics::MetricsBag;
pub use selector::get_recommendations;
pub use filters::{get_compatible_tools, get_complementary_analyses, MAX_COMPLEMENTARY};
pub use methodology::{
    compatible_methodology_flows, methodology_flows_by_industry, recommended_packages,
    recommended_visualizations,
};

use crate::catalog::{
    ComplementaryAnalysis, MethodologyFlow, MethodologyPackage, Recommendation, Tool,
    Visualization,
};
use serde::Serialize;

/// Everything the engine knows about one model/industry pair
#[derive(Debug, Clone, Serialize)]
pub struct AdvisoryReport {
    pub model_type: String,
    pub industry: String,
    pub recommendations: Vec<Recommendation>,
    pub complementary_analyses: Vec<&'static ComplementaryAnalysis>,
    pub tools: Vec<&'static Tool>,
}

/// Methodology guidance for one model/industry pair
#[derive(Debug, Clone, Serialize)]
pub struct MethodologyReport {
    pub model_type: String,
    pub industry: String,
    /// Compatible flows that also apply to the industry
    pub flows: Vec<&'static MethodologyFlow>,
    pub packages: Vec<MethodologyPackage>,
    pub visualizations: Vec<&'static Visualization>,
}

/// Service facade over the engine functions
///
/// Holds no state; construct it once and share it freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationEngine;

impl RecommendationEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn recommendations(&self, model_type: &str, metrics: Option<&MetricsBag>) -> Vec<Recommendation> {
        get_recommendations(model_type, metrics)
    }

    pub fn complementary_analyses(
        &self,
        model_type: &str,
        industry: &str,
    ) -> Vec<&'static ComplementaryAnalysis> {
        get_complementary_analyses(model_type, industry)
    }

    pub fn compatible_tools(&self, model_type: &str) -> Vec<&'static Tool> {
        get_compatible_tools(model_type)
    }

    /// Compose all three lookups into one report
    pub fn report(&self, model_type: &str, industry: &str, metrics: Option<&MetricsBag>) -> AdvisoryReport {
        AdvisoryReport {
            model_type: model_type.to_string(),
            industry: industry.to_string(),
            recommendations: self.recommendations(model_type, metrics),
            complementary_analyses: self.complementary_analyses(model_type, industry),
            tools: self.compatible_tools(model_type),
        }
    }

    pub fn methodology(
        &self,
        model_type: &str,
        industry: &str,
        metrics: Option<&MetricsBag>,
    ) -> MethodologyReport {
        let flows = compatible_methodology_flows(model_type)
            .into_iter()
            .filter(|flow| flow.applies_to_industry(industry))
            .collect();

        MethodologyReport {
            model_type: model_type.to_string(),
            industry: industry.to_string(),
            flows,
            packages: recommended_packages(industry, model_type),
            visualizations: recommended_visualizations(model_type, metrics),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_composes_lookups() {
        let engine = RecommendationEngine::new();
        let metrics = MetricsBag::new().with("silhouette_score", 0.2);
        let report = engine.report("kmeans", "tecnologia", Some(&metrics));

        assert_eq!(report.recommendations.last().unwrap().id, "low-silhouette");
        assert!(report.complementary_analyses.iter().any(|a| a.id == "cluster-profiling"));
        assert!(report.tools.iter().any(|t| t.id == "clustering-toolkit"));
    }

    #[test]
    fn test_report_serializes() {
        let report = RecommendationEngine::new().report("pca", "retail", None);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["model_type"], "pca");
        assert!(json["tools"].as_array().unwrap().len() >= 2);
    }

    #[test]
    fn test_methodology_report() {
        let engine = RecommendationEngine::new();
        let metrics = MetricsBag::new().with("correlation", 0.7);
        let report = engine.methodology("kmeans", "retail", Some(&metrics));

        let flows: Vec<_> = report.flows.iter().map(|f| f.id).collect();
        assert!(flows.contains(&"customer_analytics"));
        assert!(!flows.contains(&"risk_analytics"));
        assert_eq!(report.packages[0].id, "retail_customer_insights");
        assert_eq!(report.visualizations.len(), 2);
    }
}
