//! Recommendation selector

use crate::catalog::{family_recommendations, ModelFamily, Recommendation};
use crate::recommend::metrics::MetricsBag;
use crate::recommend::rules;
use tracing::debug;

/// Recommendations for `model_type`, extended by metric alerts
///
/// The family list is copied before extension, so calls never observe
/// alerts appended by earlier calls.
pub fn get_recommendations(model_type: &str, metrics: Option<&MetricsBag>) -> Vec<Recommendation> {
    if model_type.is_empty() {
        return Vec::new();
    }

    let family = ModelFamily::from_model_type(model_type);
    debug!(model_type, %family, "selected model family");

    let base: Vec<Recommendation> = family_recommendations(family)
        .iter()
        .map(|rec| rec.instantiate(model_type))
        .collect();

    match metrics {
        Some(metrics) if !metrics.is_empty() => rules::enhance(base, model_type, metrics),
        _ => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_model_type() {
        let metrics = MetricsBag::new().with("mape", 99);
        assert!(get_recommendations("", Some(&metrics)).is_empty());
    }

    #[test]
    fn test_unknown_model_falls_back_to_general() {
        let recs = get_recommendations("svm", None);
        assert_eq!(recs[0].id, "general-quality");
        assert!(recs.iter().all(|r| r.model_type == "svm"));
    }

    #[test]
    fn test_empty_metrics_behaves_like_none() {
        let empty = MetricsBag::new();
        assert_eq!(
            get_recommendations("kmeans", Some(&empty)),
            get_recommendations("kmeans", None)
        );
    }

    #[test]
    fn test_base_list_not_accumulated() {
        let metrics = MetricsBag::new().with("mape", 25);
        let first = get_recommendations("sarima", Some(&metrics));
        let second = get_recommendations("sarima", Some(&metrics));
        assert_eq!(first, second);

        let plain = get_recommendations("sarima", None);
        assert_eq!(plain.len() + 1, first.len());
    }
}
