//! Complementary analyses catalog
//!
//! Declaration order is the only ranking the filter applies, so entries
//! are listed roughly from most to least broadly useful.

use crate::catalog::types::{ComplementaryAnalysis, RecommendationKind};

const TIME_SERIES_MODELS: &[&str] = &["sarima", "arima", "prophet"];
const CLUSTERING_MODELS: &[&str] = &["kmeans", "hierarchical", "dbscan"];
const CLASSIFICATION_MODELS: &[&str] = &["random_forest", "xgboost", "logistic_regression"];

pub const COMPLEMENTARY_ANALYSES: &[ComplementaryAnalysis] = &[
    ComplementaryAnalysis {
        id: "anomaly-detection",
        kind: RecommendationKind::Analysis,
        title: "Detección de anomalías",
        description: "Identifique valores atípicos y patrones anómalos en sus series temporales",
        source: "anomaly-detection",
        applicable_models: TIME_SERIES_MODELS,
        applicable_industries: &["manufactura", "energia"],
    },
    ComplementaryAnalysis {
        id: "causal-impact",
        kind: RecommendationKind::Analysis,
        title: "Análisis de impacto causal",
        description: "Evalúe el impacto de intervenciones o eventos en sus métricas temporales",
        source: "forecasting-toolkit",
        applicable_models: TIME_SERIES_MODELS,
        applicable_industries: &["retail", "salud"],
    },
    ComplementaryAnalysis {
        id: "dimension-reduction",
        kind: RecommendationKind::Analysis,
        title: "Reducción de dimensionalidad",
        description: "Visualice sus clusters en 2D o 3D mediante PCA o t-SNE",
        source: "dimension-toolkit",
        applicable_models: CLUSTERING_MODELS,
        applicable_industries: &[],
    },
    ComplementaryAnalysis {
        id: "cluster-profiling",
        kind: RecommendationKind::Analysis,
        title: "Perfilado de clusters",
        description: "Caracterice cada cluster según sus atributos distintivos",
        source: "clustering-toolkit",
        applicable_models: CLUSTERING_MODELS,
        applicable_industries: &["tecnologia"],
    },
    ComplementaryAnalysis {
        id: "feature-importance",
        kind: RecommendationKind::Analysis,
        title: "Importancia de características",
        description: "Analice las características más relevantes para su modelo",
        source: "sklearn-toolkit",
        applicable_models: CLASSIFICATION_MODELS,
        applicable_industries: &[],
    },
    ComplementaryAnalysis {
        id: "model-comparison",
        kind: RecommendationKind::Analysis,
        title: "Comparación de modelos",
        description: "Compare el rendimiento de diferentes algoritmos de clasificación",
        source: "sklearn-toolkit",
        applicable_models: CLASSIFICATION_MODELS,
        applicable_industries: &["educacion"],
    },
    ComplementaryAnalysis {
        id: "retail-basket-analysis",
        kind: RecommendationKind::Analysis,
        title: "Análisis de canasta de compra",
        description: "Identifique patrones de compra conjunta y reglas de asociación",
        source: "sklearn-toolkit",
        applicable_models: &[],
        applicable_industries: &["retail"],
    },
    ComplementaryAnalysis {
        id: "risk-assessment",
        kind: RecommendationKind::Analysis,
        title: "Evaluación de riesgo",
        description: "Analice el riesgo y la volatilidad en sus datos financieros",
        source: "sklearn-toolkit",
        applicable_models: &["logistic_regression"],
        applicable_industries: &["finanzas"],
    },
    ComplementaryAnalysis {
        id: "cohort-analysis",
        kind: RecommendationKind::Analysis,
        title: "Análisis de cohortes",
        description: "Siga la evolución de grupos de clientes o usuarios que comparten una fecha de inicio",
        source: "stats-toolkit",
        applicable_models: &[],
        applicable_industries: &["retail", "tecnologia", "educacion"],
    },
    ComplementaryAnalysis {
        id: "predictive-maintenance",
        kind: RecommendationKind::Analysis,
        title: "Mantenimiento predictivo",
        description: "Anticipe fallas de equipos combinando lecturas de sensores con historial de mantenimiento",
        source: "anomaly-detection",
        applicable_models: &["random_forest"],
        applicable_industries: &["manufactura", "energia"],
    },
];
