//! Catalog of external open-source analysis tools
//!
//! Tools:
//! - forecasting-toolkit: time series forecasting
//! - sklearn-toolkit: supervised learning
//! - clustering-toolkit: clustering and cluster visualization
//! - stats-toolkit: hypothesis testing
//! - dimension-toolkit: dimensionality reduction
//! - anomaly-detection: anomaly detection on series
//! - nlp-toolkit: text models
//! - data-profiler: data quality reports (any model)
//! - viz-toolkit: dashboards and charts (any model)

use crate::catalog::types::{Tool, ANY_MODEL};

pub const TOOLS: &[Tool] = &[
    Tool {
        id: "forecasting-toolkit",
        name: "Forecasting Toolkit",
        description: "Open-source tools for advanced time series forecasting and anomaly detection",
        category: "time-series",
        source_url: "https://github.com/facebook/prophet",
        api_endpoint: Some("https://api.forecasting-toolkit.org/v1/analyze"),
        required_params: &["data", "horizon", "frequency"],
        compatible_models: &["sarima", "arima", "prophet", "exponential_smoothing"],
    },
    Tool {
        id: "sklearn-toolkit",
        name: "Scikit-Learn Toolkit",
        description: "Machine learning models and tools based on scikit-learn",
        category: "classification",
        source_url: "https://github.com/scikit-learn/scikit-learn",
        api_endpoint: Some("https://api.sklearn-toolkit.org/v1/analyze"),
        required_params: &["data", "target", "features"],
        compatible_models: &[
            "random_forest",
            "xgboost",
            "svm",
            "logistic_regression",
            "naive_bayes",
            "linear_regression",
            "ridge_regression",
        ],
    },
    Tool {
        id: "clustering-toolkit",
        name: "Clustering Toolkit",
        description: "Advanced clustering algorithms and visualization tools",
        category: "clustering",
        source_url: "https://github.com/scikit-learn/scikit-learn",
        api_endpoint: Some("https://api.clustering-toolkit.org/v1/analyze"),
        required_params: &["data", "n_clusters"],
        compatible_models: &["kmeans", "hierarchical", "dbscan"],
    },
    Tool {
        id: "stats-toolkit",
        name: "Statistical Analysis Toolkit",
        description: "Statistical analysis and hypothesis testing tools",
        category: "statistics",
        source_url: "https://github.com/statsmodels/statsmodels",
        api_endpoint: Some("https://api.stats-toolkit.org/v1/analyze"),
        required_params: &["data", "test_type"],
        compatible_models: &["anova", "t_test", "chi_square"],
    },
    Tool {
        id: "dimension-toolkit",
        name: "Dimensionality Reduction Toolkit",
        description: "Tools for dimensionality reduction and visualization",
        category: "dimensionality",
        source_url: "https://github.com/scikit-learn/scikit-learn",
        api_endpoint: Some("https://api.dimension-toolkit.org/v1/analyze"),
        required_params: &["data", "n_components"],
        compatible_models: &["pca", "tsne", "umap"],
    },
    Tool {
        id: "anomaly-detection",
        name: "Anomaly Detection Toolkit",
        description: "Tools for detecting anomalies in time series data",
        category: "anomaly",
        source_url: "https://github.com/linkedin/luminol",
        api_endpoint: Some("https://api.anomaly-toolkit.org/v1/analyze"),
        required_params: &["data", "sensitivity"],
        compatible_models: &["sarima", "arima", "prophet", "random_forest", "xgboost"],
    },
    Tool {
        id: "nlp-toolkit",
        name: "NLP Toolkit",
        description: "Natural language processing tools and models",
        category: "nlp",
        source_url: "https://github.com/huggingface/transformers",
        api_endpoint: Some("https://api.nlp-toolkit.org/v1/analyze"),
        required_params: &["text", "task"],
        compatible_models: &["random_forest", "xgboost", "logistic_regression", "naive_bayes"],
    },
    Tool {
        id: "data-profiler",
        name: "Data Profiler",
        description: "Automated data quality and profiling reports for any tabular dataset",
        category: "data-quality",
        source_url: "https://github.com/ydataai/ydata-profiling",
        api_endpoint: None,
        required_params: &["data"],
        compatible_models: &[ANY_MODEL],
    },
    Tool {
        id: "viz-toolkit",
        name: "Visualization Toolkit",
        description: "Dashboards and interactive charts for model outputs",
        category: "visualization",
        source_url: "https://github.com/apache/superset",
        api_endpoint: None,
        required_params: &["data"],
        compatible_models: &[ANY_MODEL],
    },
];

/// Look up a tool by id
pub fn find_tool(id: &str) -> Option<&'static Tool> {
    TOOLS.iter().find(|tool| tool.id == id)
}
