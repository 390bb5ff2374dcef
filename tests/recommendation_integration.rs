//! Integration tests for the recommendation engine
//!
//! Exercises the public engine surface end to end: family selection,
//! metric alerts, complementary analyses and tool compatibility.

use analitica::catalog::{Priority, RecommendationKind};
use analitica::recommend::{
    get_compatible_tools, get_complementary_analyses, get_recommendations, MetricsBag,
    MAX_COMPLEMENTARY,
};
use analitica::RecommendationEngine;
use std::collections::HashSet;

fn ids<T, F: Fn(&T) -> &str>(items: &[T], id: F) -> Vec<&str> {
    items.iter().map(id).collect()
}

#[test]
fn test_sarima_with_high_mape() {
    let metrics = MetricsBag::from_json(r#"{"mape": 20}"#).unwrap();
    let recs = get_recommendations("sarima", Some(&metrics));

    assert_eq!(
        ids(&recs, |r| r.id.as_str()),
        vec!["ts-seasonality", "ts-stationarity", "ts-anomalies", "ts-horizon", "high-mape"]
    );

    let alert = recs.last().unwrap();
    assert_eq!(alert.kind, RecommendationKind::Action);
    assert_eq!(alert.priority, Priority::High);
    assert!(alert.description.contains("20.00"));
    assert_eq!(recs.iter().filter(|r| r.id == "high-mape").count(), 1);
}

#[test]
fn test_accuracy_rule_fires_for_any_family() {
    let metrics = MetricsBag::new().with("accuracy", 0.5);
    let recs = get_recommendations("kmeans", Some(&metrics));

    assert_eq!(recs[0].id, "cluster-count");
    let alert = recs.last().unwrap();
    assert_eq!(alert.id, "low-accuracy");
    assert!(alert.description.contains("50.0"));
}

#[test]
fn test_xgboost_low_accuracy() {
    let metrics = MetricsBag::new().with("accuracy", 0.65);
    let recs = get_recommendations("xgboost", Some(&metrics));

    assert_eq!(
        ids(&recs, |r| r.id.as_str()),
        vec![
            "class-features",
            "class-imbalance",
            "class-importance",
            "class-threshold",
            "low-accuracy"
        ]
    );
    assert!(recs.iter().all(|r| r.model_type == "xgboost"));
}

#[test]
fn test_all_alerts_at_once() {
    let metrics = MetricsBag::new()
        .with("mape", 15.01)
        .with("accuracy", 0.1)
        .with("silhouette_score", 0.49);
    let recs = get_recommendations("pca", Some(&metrics));

    let alerts: Vec<_> = recs[3..].iter().map(|r| r.id.as_str()).collect();
    assert_eq!(alerts, vec!["high-mape", "low-accuracy", "low-silhouette"]);

    let unique: HashSet<_> = recs.iter().map(|r| &r.id).collect();
    assert_eq!(unique.len(), recs.len());
}

#[test]
fn test_thresholds_are_strict() {
    let metrics = MetricsBag::new()
        .with("mape", 15.0)
        .with("accuracy", 0.7)
        .with("silhouette_score", 0.5);
    assert_eq!(get_recommendations("arima", Some(&metrics)).len(), 4);
}

#[test]
fn test_non_numeric_metrics_are_ignored() {
    let metrics = MetricsBag::from_json(r#"{"mape": "20", "accuracy": null, "f1": 0.1}"#).unwrap();
    assert_eq!(get_recommendations("prophet", Some(&metrics)).len(), 4);
}

#[test]
fn test_repeated_calls_do_not_accumulate() {
    let metrics = MetricsBag::new().with("silhouette_score", 0.1);
    let first = get_recommendations("dbscan", Some(&metrics));
    let second = get_recommendations("dbscan", Some(&metrics));
    assert_eq!(first, second);

    // Base list untouched by earlier enrichment
    assert_eq!(get_recommendations("dbscan", None).len(), 3);
}

#[test]
fn test_empty_and_unknown_model_types() {
    assert!(get_recommendations("", None).is_empty());
    assert!(get_complementary_analyses("", "retail").is_empty());
    assert!(get_compatible_tools("").is_empty());

    let recs = get_recommendations("naive_bayes", None);
    assert_eq!(
        ids(&recs, |r| r.id.as_str()),
        vec!["general-quality", "general-exploration", "general-baseline"]
    );
}

#[test]
fn test_complementary_is_capped() {
    let analyses = get_complementary_analyses("kmeans", "retail");
    assert!(analyses.len() <= MAX_COMPLEMENTARY);
    assert_eq!(
        ids(&analyses, |a| a.id),
        vec![
            "causal-impact",
            "dimension-reduction",
            "cluster-profiling",
            "retail-basket-analysis"
        ]
    );
}

#[test]
fn test_industry_alone_matches() {
    let analyses = get_complementary_analyses("naive_bayes", "educacion");
    assert_eq!(ids(&analyses, |a| a.id), vec!["model-comparison", "cohort-analysis"]);
}

#[test]
fn test_universal_tools_always_listed() {
    let tools = get_compatible_tools("some_new_model");
    assert_eq!(ids(&tools, |t| t.id), vec!["data-profiler", "viz-toolkit"]);

    let tools = get_compatible_tools("sarima");
    assert!(tools.iter().any(|t| t.id == "forecasting-toolkit"));
    assert!(tools.iter().all(|t| t.supports("sarima")));
}

#[test]
fn test_engine_report_round_trips_to_json() {
    let engine = RecommendationEngine::new();
    let metrics = MetricsBag::new().with("mape", 30.5);
    let report = engine.report("sarima", "energia", Some(&metrics));

    let json = serde_json::to_value(&report).unwrap();
    let recs = json["recommendations"].as_array().unwrap();
    assert_eq!(recs.last().unwrap()["id"], "high-mape");
    assert_eq!(recs.last().unwrap()["type"], "action");
    assert_eq!(json["complementary_analyses"][0]["id"], "anomaly-detection");
}

#[test]
fn test_methodology_for_time_series_in_finance() {
    let metrics = MetricsBag::from_json(r#"{"mape": 14.0, "rmse": 3.2}"#).unwrap();
    let report = RecommendationEngine::new().methodology("sarima", "finanzas", Some(&metrics));

    let flows: Vec<_> = report.flows.iter().map(|f| f.id).collect();
    assert!(flows.contains(&"predictive_analytics"));
    assert!(flows.contains(&"financial_analytics"));
    assert!(!flows.contains(&"customer_analytics"));

    let packages: Vec<_> = report.packages.iter().map(|p| p.id.to_string()).collect();
    assert_eq!(packages[..2], ["finance_essentials", "advanced_finance"]);

    let charts: Vec<_> = report.visualizations.iter().map(|v| v.id).collect();
    assert_eq!(charts, vec!["time_series"]);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["packages"][0]["flows"][0], "financial_analytics");
    assert_eq!(json["flows"][0]["implementation_time"], "short");
}
