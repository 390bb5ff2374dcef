//! Methodology recommendations
//!
//! Filters the methodology catalog by industry and model type, picks
//! packages whose flows fit, and chooses visualizations for the metrics at
//! hand.

use crate::catalog::{
    MethodologyFlow, MethodologyPackage, Visualization, METHODOLOGY_FLOWS, METHODOLOGY_PACKAGES,
};
use crate::recommend::metrics::MetricsBag;
use std::borrow::Cow;
use std::collections::HashSet;
use tracing::debug;

/// Flows taken into a generated package
pub const CUSTOM_PACKAGE_FLOWS: usize = 3;

/// Visualizations returned when there are no metrics to match
pub const DEFAULT_VISUALIZATIONS: usize = 5;

/// Flows for `industry` plus every industry-agnostic flow
pub fn methodology_flows_by_industry(industry: &str) -> Vec<&'static MethodologyFlow> {
    METHODOLOGY_FLOWS
        .iter()
        .filter(|flow| flow.applies_to_industry(industry))
        .collect()
}

/// Flows whose model tags fit `model_type`; empty model type gives nothing
pub fn compatible_methodology_flows(model_type: &str) -> Vec<&'static MethodologyFlow> {
    if model_type.is_empty() {
        return Vec::new();
    }

    METHODOLOGY_FLOWS
        .iter()
        .filter(|flow| flow.supports(model_type))
        .collect()
}

/// Packages for the industry that include at least one compatible flow
///
/// When none qualifies a single custom package is generated from the first
/// compatible flows.
pub fn recommended_packages(industry: &str, model_type: &str) -> Vec<MethodologyPackage> {
    if model_type.is_empty() {
        return Vec::new();
    }

    let compatible = compatible_methodology_flows(model_type);
    select_packages(industry, &compatible, METHODOLOGY_PACKAGES)
}

fn select_packages(
    industry: &str,
    compatible: &[&'static MethodologyFlow],
    packages: &[MethodologyPackage],
) -> Vec<MethodologyPackage> {
    let compatible_ids: HashSet<&str> = compatible.iter().map(|flow| flow.id).collect();

    let feasible: Vec<MethodologyPackage> = packages
        .iter()
        .filter(|package| package.applies_to_industry(industry))
        .filter(|package| package.flows.iter().any(|id| compatible_ids.contains(id)))
        .cloned()
        .collect();

    if feasible.is_empty() {
        debug!(industry, "no package fits, generating one");
        return vec![custom_package(industry, compatible)];
    }
    feasible
}

/// Package built on the fly from up to three flows
pub fn custom_package(industry: &str, flows: &[&'static MethodologyFlow]) -> MethodologyPackage {
    let flow_ids: Vec<&'static str> = flows
        .iter()
        .take(CUSTOM_PACKAGE_FLOWS)
        .map(|flow| flow.id)
        .collect();

    MethodologyPackage {
        id: Cow::Owned(format!(
            "custom-{}-{}",
            industry,
            chrono::Utc::now().timestamp_millis()
        )),
        name: Cow::Owned(format!("Paquete personalizado para {}", industry)),
        description: "Paquete de metodología generado automáticamente en base a los modelos disponibles",
        flows: Cow::Owned(flow_ids),
        total_business_value: "Incremento en eficiencia y toma de decisiones basada en datos",
        total_implementation_time: "1-3 meses dependiendo de la complejidad",
        industry: Some(Cow::Owned(industry.to_string())),
    }
}

/// Visualizations of the compatible flows, deduplicated by id
///
/// With metrics, only charts whose applicable metrics appear in the bag
/// are kept. Without metrics (or with an empty bag) the first
/// [`DEFAULT_VISUALIZATIONS`] are returned.
pub fn recommended_visualizations(
    model_type: &str,
    metrics: Option<&MetricsBag>,
) -> Vec<&'static Visualization> {
    let candidates = compatible_methodology_flows(model_type)
        .into_iter()
        .flat_map(|flow| flow.visualizations.iter().copied());

    match metrics.filter(|bag| !bag.is_empty()) {
        None => dedup_by_id(candidates)
            .into_iter()
            .take(DEFAULT_VISUALIZATIONS)
            .collect(),
        Some(bag) => dedup_by_id(candidates.filter(|viz| {
            viz.applicable_metrics
                .iter()
                .any(|metric| bag.contains_key(metric))
        })),
    }
}

fn dedup_by_id(
    visualizations: impl Iterator<Item = &'static Visualization>,
) -> Vec<&'static Visualization> {
    let mut seen = HashSet::new();
    visualizations.filter(|viz| seen.insert(viz.id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids<T>(items: &[&T], id: impl Fn(&T) -> &'static str) -> Vec<&'static str> {
        items.iter().map(|item| id(item)).collect()
    }

    #[test]
    fn test_flows_by_industry_includes_agnostic_flows() {
        let salud = methodology_flows_by_industry("salud");
        assert_eq!(salud.len(), 7);
        assert!(salud.iter().all(|flow| flow.industry.is_none()));

        let finanzas = ids(&methodology_flows_by_industry("finanzas"), |f| f.id);
        assert!(finanzas.contains(&"financial_analytics"));
        assert!(finanzas.contains(&"risk_analytics"));
        assert!(!finanzas.contains(&"customer_analytics"));
    }

    #[test]
    fn test_compatible_flows() {
        let kmeans = ids(&compatible_methodology_flows("kmeans"), |f| f.id);
        assert!(kmeans.contains(&"descriptive_analytics"));
        assert!(!kmeans.contains(&"predictive_analytics"));
        assert!(!kmeans.contains(&"real_time_analytics"));

        let sarima = ids(&compatible_methodology_flows("sarima"), |f| f.id);
        assert!(sarima.contains(&"predictive_analytics"));

        let anomaly = ids(&compatible_methodology_flows("anomaly_detection"), |f| f.id);
        assert!(anomaly.contains(&"real_time_analytics"));

        assert!(compatible_methodology_flows("").is_empty());
    }

    #[test]
    fn test_packages_for_finance() {
        let packages = recommended_packages("finanzas", "kmeans");
        let ids: Vec<_> = packages.iter().map(|p| &*p.id).collect();
        assert_eq!(
            ids,
            vec![
                "finance_essentials",
                "advanced_finance",
                "data_science_fundamentals",
                "advanced_predictive"
            ]
        );
        assert!(matches!(packages[0].id, Cow::Borrowed(_)));
    }

    #[test]
    fn test_packages_exclude_other_industries() {
        let ids: Vec<_> = recommended_packages("salud", "sarima")
            .into_iter()
            .map(|p| p.id.into_owned())
            .collect();
        assert_eq!(ids, vec!["data_science_fundamentals", "advanced_predictive"]);
    }

    #[test]
    fn test_custom_package_when_nothing_fits() {
        let compatible = compatible_methodology_flows("kmeans");
        let finance_only = &METHODOLOGY_PACKAGES[..2];

        let packages = select_packages("salud", &compatible, finance_only);

        assert_eq!(packages.len(), 1);
        let custom = &packages[0];
        assert!(custom.id.starts_with("custom-salud-"));
        assert_eq!(custom.name, "Paquete personalizado para salud");
        assert_eq!(custom.industry.as_deref(), Some("salud"));
        assert_eq!(
            &*custom.flows,
            &["descriptive_analytics", "diagnostic_analytics", "exploratory_analytics"]
        );
    }

    #[test]
    fn test_custom_package_with_few_flows() {
        let only_one = compatible_methodology_flows("optimization")
            .into_iter()
            .filter(|flow| flow.id == "prescriptive_analytics")
            .collect::<Vec<_>>();

        let package = custom_package("energia", &only_one);
        assert_eq!(&*package.flows, &["prescriptive_analytics"]);
    }

    #[test]
    fn test_empty_model_type_gives_no_packages() {
        assert!(recommended_packages("retail", "").is_empty());
    }

    #[test]
    fn test_default_visualizations_without_metrics() {
        let expected = vec!["bar_chart", "pie_chart", "box_plot", "scatter_plot", "heat_map"];

        let none = recommended_visualizations("kmeans", None);
        assert_eq!(ids(&none, |v| v.id), expected);

        let empty = MetricsBag::new();
        let with_empty = recommended_visualizations("kmeans", Some(&empty));
        assert_eq!(ids(&with_empty, |v| v.id), expected);
    }

    #[test]
    fn test_visualizations_follow_metrics() {
        let metrics = MetricsBag::new().with("correlation", 0.8);
        let found = recommended_visualizations("kmeans", Some(&metrics));
        assert_eq!(ids(&found, |v| v.id), vec!["scatter_plot", "heat_map"]);

        let metrics = MetricsBag::new().with("rmse", 12.0);
        let found = recommended_visualizations("sarima", Some(&metrics));
        assert_eq!(ids(&found, |v| v.id), vec!["time_series"]);

        // Metrics no chart knows about select nothing
        let metrics = MetricsBag::new().with("silhouette_score", 0.4);
        assert!(recommended_visualizations("kmeans", Some(&metrics)).is_empty());
    }
}
