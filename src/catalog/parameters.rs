//! Local model parameter table
//!
//! Used when the analysis backend cannot describe a model's parameters.
//! Defaults mirror what the backend applies when a parameter is omitted.

use serde::Serialize;

/// Parameter accepted by a model
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ParameterSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
    #[serde(rename = "type")]
    pub value_type: &'static str,
}

const fn param(
    name: &'static str,
    description: &'static str,
    required: bool,
    value_type: &'static str,
) -> ParameterSpec {
    ParameterSpec {
        name,
        description,
        required,
        value_type,
    }
}

const SARIMA: &[ParameterSpec] = &[
    param("target_column", "Column holding the series to forecast", true, "string"),
    param("p", "Autoregressive order (default 1)", false, "integer"),
    param("d", "Differencing order (default 1)", false, "integer"),
    param("q", "Moving average order (default 1)", false, "integer"),
    param("P", "Seasonal autoregressive order (default 1)", false, "integer"),
    param("D", "Seasonal differencing order (default 1)", false, "integer"),
    param("Q", "Seasonal moving average order (default 1)", false, "integer"),
    param("s", "Seasonal period (default 12)", false, "integer"),
    param("forecast_steps", "Number of periods to forecast (default 12)", false, "integer"),
];

const ARIMA: &[ParameterSpec] = &[
    param("target_column", "Column holding the series to forecast", true, "string"),
    param("p", "Autoregressive order (default 1)", false, "integer"),
    param("d", "Differencing order (default 1)", false, "integer"),
    param("q", "Moving average order (default 1)", false, "integer"),
    param("forecast_steps", "Number of periods to forecast (default 12)", false, "integer"),
];

const PROPHET: &[ParameterSpec] = &[
    param("date_column", "Column holding observation dates", true, "string"),
    param("target_column", "Column holding the series to forecast", true, "string"),
    param("forecast_periods", "Number of periods to forecast (default 30)", false, "integer"),
];

const CLUSTERING: &[ParameterSpec] = &[
    param("n_clusters", "Number of clusters to form", true, "integer"),
    param("features", "Columns used as clustering features", false, "array"),
];

const DBSCAN: &[ParameterSpec] = &[
    param("eps", "Maximum neighbourhood distance (default 0.5)", false, "number"),
    param("min_samples", "Minimum points per dense region (default 5)", false, "integer"),
    param("features", "Columns used as clustering features", false, "array"),
];

const CLASSIFICATION: &[ParameterSpec] = &[
    param("target_column", "Column holding the class label", true, "string"),
    param("task", "classification or regression (default classification)", false, "string"),
    param("features", "Columns used as predictors", false, "array"),
];

const DIMENSIONALITY: &[ParameterSpec] = &[
    param("n_components", "Number of output dimensions (default 2)", false, "integer"),
    param("features", "Columns to project", false, "array"),
];

const REGRESSION: &[ParameterSpec] = &[
    param("target_column", "Column holding the value to predict", true, "string"),
    param("features", "Columns used as predictors", false, "array"),
    param("alpha", "Regularization strength (default 1.0)", false, "number"),
];

/// Parameters known locally for a model type; empty when unknown
pub fn parameter_specs(model_type: &str) -> &'static [ParameterSpec] {
    match model_type {
        "sarima" => SARIMA,
        "arima" => ARIMA,
        "prophet" => PROPHET,
        "kmeans" | "hierarchical" => CLUSTERING,
        "dbscan" => DBSCAN,
        "random_forest" | "xgboost" | "logistic_regression" => CLASSIFICATION,
        "pca" | "tsne" | "umap" => DIMENSIONALITY,
        "linear_regression" | "ridge_regression" => REGRESSION,
        _ => &[],
    }
}
