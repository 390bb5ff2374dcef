//! Recommendations by model family
//!
//! Each family owns a fixed, ordered, non-empty list. Ids are unique across
//! all families and never collide with the metric alert ids.

use crate::catalog::types::{ModelFamily, Priority, RecommendationKind, StaticRecommendation};

use Priority::*;
use RecommendationKind::*;

const TIME_SERIES: &[StaticRecommendation] = &[
    StaticRecommendation {
        id: "ts-seasonality",
        kind: Action,
        title: "Ajustar componentes estacionales",
        description: "Considere ajustar los componentes estacionales para mejorar la precisión del modelo",
        priority: Medium,
        source: "forecasting-toolkit",
        actionable: true,
    },
    StaticRecommendation {
        id: "ts-stationarity",
        kind: Action,
        title: "Verificar estacionariedad",
        description: "Aplique pruebas de raíz unitaria y ajuste el nivel de diferenciación si la serie no es estacionaria",
        priority: Medium,
        source: "forecasting-toolkit",
        actionable: true,
    },
    StaticRecommendation {
        id: "ts-anomalies",
        kind: Analysis,
        title: "Detección de anomalías",
        description: "Ejecute un análisis de detección de anomalías para identificar valores atípicos en sus series temporales",
        priority: High,
        source: "anomaly-detection",
        actionable: true,
    },
    StaticRecommendation {
        id: "ts-horizon",
        kind: Insight,
        title: "Horizonte de pronóstico óptimo",
        description: "La precisión se degrada rápidamente más allá de dos ciclos estacionales; limite el horizonte de pronóstico",
        priority: Low,
        source: "forecasting-toolkit",
        actionable: false,
    },
];

const CLUSTERING: &[StaticRecommendation] = &[
    StaticRecommendation {
        id: "cluster-count",
        kind: Action,
        title: "Optimizar número de clusters",
        description: "Utilice el método del codo o silueta para encontrar el número óptimo de clusters",
        priority: High,
        source: "clustering-toolkit",
        actionable: true,
    },
    StaticRecommendation {
        id: "cluster-scaling",
        kind: Action,
        title: "Escalado de características",
        description: "Normalice o estandarice las características para mejorar la calidad de los clusters",
        priority: Medium,
        source: "clustering-toolkit",
        actionable: true,
    },
    StaticRecommendation {
        id: "cluster-profiling",
        kind: Insight,
        title: "Perfilado de clusters",
        description: "Caracterice cada cluster según sus atributos distintivos para convertirlo en un segmento accionable",
        priority: Medium,
        source: "clustering-toolkit",
        actionable: true,
    },
];

const CLASSIFICATION: &[StaticRecommendation] = &[
    StaticRecommendation {
        id: "class-features",
        kind: Action,
        title: "Ingeniería de características",
        description: "Considere crear características derivadas para mejorar el rendimiento del modelo",
        priority: High,
        source: "sklearn-toolkit",
        actionable: true,
    },
    StaticRecommendation {
        id: "class-imbalance",
        kind: Action,
        title: "Revisar balance de clases",
        description: "Compruebe la distribución de clases; si hay desbalance considere SMOTE o ajuste de pesos",
        priority: High,
        source: "sklearn-toolkit",
        actionable: true,
    },
    StaticRecommendation {
        id: "class-importance",
        kind: Insight,
        title: "Importancia de características",
        description: "Analice las características más importantes para entender los factores predictivos clave",
        priority: Medium,
        source: "sklearn-toolkit",
        actionable: true,
    },
    StaticRecommendation {
        id: "class-threshold",
        kind: Action,
        title: "Ajustar umbral de decisión",
        description: "Calibre el umbral de clasificación según el coste relativo de falsos positivos y falsos negativos",
        priority: Medium,
        source: "sklearn-toolkit",
        actionable: true,
    },
];

const DIMENSIONALITY: &[StaticRecommendation] = &[
    StaticRecommendation {
        id: "dim-scaling",
        kind: Action,
        title: "Estandarizar variables",
        description: "Estandarice las variables antes de reducir dimensiones para que ninguna domine por su escala",
        priority: High,
        source: "dimension-toolkit",
        actionable: true,
    },
    StaticRecommendation {
        id: "dim-variance",
        kind: Insight,
        title: "Varianza explicada",
        description: "Revise la varianza explicada acumulada para elegir el número de componentes a conservar",
        priority: Medium,
        source: "dimension-toolkit",
        actionable: true,
    },
    StaticRecommendation {
        id: "dim-visualization",
        kind: Analysis,
        title: "Visualización en 2D",
        description: "Proyecte los datos en dos dimensiones para detectar grupos y valores atípicos a simple vista",
        priority: Low,
        source: "dimension-toolkit",
        actionable: true,
    },
];

const GENERAL: &[StaticRecommendation] = &[
    StaticRecommendation {
        id: "general-quality",
        kind: Action,
        title: "Revisar calidad de datos",
        description: "Identifique valores faltantes, duplicados y errores de formato antes de modelar",
        priority: High,
        source: "data-profiler",
        actionable: true,
    },
    StaticRecommendation {
        id: "general-exploration",
        kind: Analysis,
        title: "Análisis exploratorio",
        description: "Explore distribuciones y correlaciones para orientar la elección del modelo",
        priority: Medium,
        source: "data-profiler",
        actionable: true,
    },
    StaticRecommendation {
        id: "general-baseline",
        kind: Insight,
        title: "Establecer un modelo base",
        description: "Compare los resultados contra un modelo base sencillo para medir la mejora real",
        priority: Low,
        source: "stats-toolkit",
        actionable: false,
    },
];

/// Fixed recommendation list owned by a family
pub fn family_recommendations(family: ModelFamily) -> &'static [StaticRecommendation] {
    match family {
        ModelFamily::TimeSeries => TIME_SERIES,
        ModelFamily::Clustering => CLUSTERING,
        ModelFamily::Classification => CLASSIFICATION,
        ModelFamily::DimensionalityReduction => DIMENSIONALITY,
        ModelFamily::General => GENERAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ALL: [ModelFamily; 5] = [
        ModelFamily::TimeSeries,
        ModelFamily::Clustering,
        ModelFamily::Classification,
        ModelFamily::DimensionalityReduction,
        ModelFamily::General,
    ];

    #[test]
    fn test_every_family_non_empty() {
        for family in ALL {
            assert!(!family_recommendations(family).is_empty(), "{} is empty", family);
        }
    }

    #[test]
    fn test_ids_unique_across_families() {
        let mut seen = HashSet::new();
        for family in ALL {
            for rec in family_recommendations(family) {
                assert!(seen.insert(rec.id), "duplicate id {}", rec.id);
            }
        }
    }

    #[test]
    fn test_classification_order() {
        let ids: Vec<_> = family_recommendations(ModelFamily::Classification)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(
            ids,
            vec!["class-features", "class-imbalance", "class-importance", "class-threshold"]
        );
    }
}
