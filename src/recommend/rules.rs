//! Metric rule evaluator
//!
//! Rules are evaluated independently; any subset may fire. A rule fires on
//! the presence of its metric key, whatever family the model belongs to.

use crate::catalog::{Priority, Recommendation, RecommendationKind};
use crate::recommend::metrics::MetricsBag;
use tracing::debug;

/// MAPE above this (percent) triggers `high-mape`
pub const MAPE_THRESHOLD: f64 = 15.0;

/// Accuracy below this (fraction) triggers `low-accuracy`
pub const ACCURACY_THRESHOLD: f64 = 0.7;

/// Silhouette below this triggers `low-silhouette`
pub const SILHOUETTE_THRESHOLD: f64 = 0.5;

/// Append metric-triggered alerts to `recommendations`
///
/// Alerts whose id is already in the list are skipped, so the result never
/// holds duplicate ids.
pub fn enhance(
    mut recommendations: Vec<Recommendation>,
    model_type: &str,
    metrics: &MetricsBag,
) -> Vec<Recommendation> {
    let alerts = [
        high_mape(model_type, metrics),
        low_accuracy(model_type, metrics),
        low_silhouette(model_type, metrics),
    ];

    for alert in alerts.into_iter().flatten() {
        if recommendations.iter().any(|r| r.id == alert.id) {
            continue;
        }
        debug!(model_type, alert = %alert.id, "metric rule fired");
        recommendations.push(alert);
    }

    recommendations
}

fn high_mape(model_type: &str, metrics: &MetricsBag) -> Option<Recommendation> {
    let mape = metrics.number("mape").filter(|m| *m > MAPE_THRESHOLD)?;
    Some(alert(
        "high-mape",
        "Mejorar precisión del pronóstico",
        format!(
            "El MAPE es {:.2}%. Considere incluir variables externas o ajustar estacionalidad.",
            mape
        ),
        Priority::High,
        model_type,
        "forecasting-toolkit",
    ))
}

fn low_accuracy(model_type: &str, metrics: &MetricsBag) -> Option<Recommendation> {
    let accuracy = metrics.number("accuracy").filter(|a| *a < ACCURACY_THRESHOLD)?;
    Some(alert(
        "low-accuracy",
        "Mejorar precisión del modelo",
        format!(
            "La precisión actual es {:.1}%. Considere recolectar más datos o ajustar hiperparámetros.",
            accuracy * 100.0
        ),
        Priority::High,
        model_type,
        "sklearn-toolkit",
    ))
}

fn low_silhouette(model_type: &str, metrics: &MetricsBag) -> Option<Recommendation> {
    let score = metrics
        .number("silhouette_score")
        .filter(|s| *s < SILHOUETTE_THRESHOLD)?;
    Some(alert(
        "low-silhouette",
        "Mejorar separación de clusters",
        format!(
            "El coeficiente de silueta es {:.2}. Pruebe otro número de clusters o escale las características.",
            score
        ),
        Priority::Medium,
        model_type,
        "clustering-toolkit",
    ))
}

fn alert(
    id: &str,
    title: &str,
    description: String,
    priority: Priority,
    model_type: &str,
    source: &str,
) -> Recommendation {
    Recommendation {
        id: id.to_string(),
        kind: RecommendationKind::Action,
        title: title.to_string(),
        description,
        priority,
        model_type: model_type.to_string(),
        source: source.to_string(),
        actionable: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(recs: &[Recommendation]) -> Vec<&str> {
        recs.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_high_mape_formats_two_decimals() {
        let metrics = MetricsBag::new().with("mape", 18.456);
        let recs = enhance(Vec::new(), "sarima", &metrics);

        assert_eq!(ids(&recs), vec!["high-mape"]);
        assert!(recs[0].description.contains("18.46%"));
        assert_eq!(recs[0].priority, Priority::High);
        assert_eq!(recs[0].kind, RecommendationKind::Action);
    }

    #[test]
    fn test_mape_at_threshold_does_not_fire() {
        let metrics = MetricsBag::new().with("mape", 15.0);
        assert!(enhance(Vec::new(), "sarima", &metrics).is_empty());
    }

    #[test]
    fn test_low_accuracy_formats_percentage() {
        let metrics = MetricsBag::new().with("accuracy", 0.6543);
        let recs = enhance(Vec::new(), "xgboost", &metrics);

        assert_eq!(ids(&recs), vec!["low-accuracy"]);
        assert!(recs[0].description.contains("65.4%"));
    }

    #[test]
    fn test_low_silhouette_is_medium() {
        let metrics = MetricsBag::new().with("silhouette_score", 0.31);
        let recs = enhance(Vec::new(), "kmeans", &metrics);

        assert_eq!(ids(&recs), vec!["low-silhouette"]);
        assert_eq!(recs[0].priority, Priority::Medium);
        assert!(recs[0].description.contains("0.31"));
    }

    #[test]
    fn test_all_rules_fire_together() {
        let metrics = MetricsBag::new()
            .with("mape", 30)
            .with("accuracy", 0.1)
            .with("silhouette_score", 0.2);
        let recs = enhance(Vec::new(), "pca", &metrics);

        assert_eq!(ids(&recs), vec!["high-mape", "low-accuracy", "low-silhouette"]);
    }

    #[test]
    fn test_non_numeric_and_unknown_keys_ignored() {
        let metrics = MetricsBag::new()
            .with("mape", "very high")
            .with("rmse", 1000)
            .with("accuracy", serde_json::Value::Null);
        assert!(enhance(Vec::new(), "sarima", &metrics).is_empty());
    }

    #[test]
    fn test_existing_id_not_duplicated() {
        let metrics = MetricsBag::new().with("mape", 40);
        let first = enhance(Vec::new(), "arima", &metrics);
        let second = enhance(first, "arima", &metrics);
        assert_eq!(ids(&second), vec!["high-mape"]);
    }
}
