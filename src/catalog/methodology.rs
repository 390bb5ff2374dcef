//! Methodology catalog
//!
//! Methodology flows describe broad analytical approaches (descriptive,
//! predictive, ...) rather than concrete step sequences. Packages bundle
//! flows that are usually adopted together.

use crate::catalog::types::{ModelFamily, ANY_MODEL};
use serde::Serialize;
use std::borrow::Cow;

/// Chart suited to presenting some set of metrics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Visualization {
    pub id: &'static str,
    pub name: &'static str,
    pub chart_type: &'static str,
    pub description: &'static str,
    pub applicable_metrics: &'static [&'static str],
    pub data_requirements: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImplementationTime {
    Short,
    Medium,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoiLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize)]
pub struct MethodologyFlow {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// `None` applies to every industry
    pub industry: Option<&'static str>,
    /// Model categories or model tags; `any` matches every model
    pub model_types: &'static [&'static str],
    pub required_inputs: &'static [&'static str],
    pub outputs: &'static [&'static str],
    pub visualizations: &'static [&'static Visualization],
    pub complementary_flows: &'static [&'static str],
    pub business_value: &'static str,
    pub expertise: &'static str,
    pub implementation_time: ImplementationTime,
    pub roi: RoiLevel,
}

impl MethodologyFlow {
    pub fn applies_to_industry(&self, industry: &str) -> bool {
        self.industry.map_or(true, |own| own == industry)
    }

    /// True for `any`, for a tag contained in `model_type`, or for the
    /// model's family name (`kmeans` matches `clustering`)
    pub fn supports(&self, model_type: &str) -> bool {
        let family = ModelFamily::from_model_type(model_type).as_str();
        self.model_types
            .iter()
            .any(|&tag| tag == ANY_MODEL || model_type.contains(tag) || tag == family)
    }
}

/// Bundle of methodology flows
///
/// Built-in packages borrow static data; generated ones own theirs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodologyPackage {
    pub id: Cow<'static, str>,
    pub name: Cow<'static, str>,
    pub description: &'static str,
    pub flows: Cow<'static, [&'static str]>,
    pub total_business_value: &'static str,
    pub total_implementation_time: &'static str,
    pub industry: Option<Cow<'static, str>>,
}

impl MethodologyPackage {
    pub fn applies_to_industry(&self, industry: &str) -> bool {
        self.industry.as_deref().map_or(true, |own| own == industry)
    }
}

pub const TIME_SERIES_CHART: Visualization = Visualization {
    id: "time_series",
    name: "Serie temporal",
    chart_type: "line",
    description: "Visualización de datos a lo largo del tiempo",
    applicable_metrics: &["rmse", "mae", "mape", "r_squared"],
    data_requirements: &["timestamp", "numeric_value"],
};

pub const BAR_CHART: Visualization = Visualization {
    id: "bar_chart",
    name: "Gráfico de barras",
    chart_type: "bar",
    description: "Comparación de categorías discretas",
    applicable_metrics: &["count", "sum", "average"],
    data_requirements: &["category", "numeric_value"],
};

pub const SCATTER_PLOT: Visualization = Visualization {
    id: "scatter_plot",
    name: "Gráfico de dispersión",
    chart_type: "scatter",
    description: "Relación entre dos variables numéricas",
    applicable_metrics: &["correlation", "r_squared"],
    data_requirements: &["numeric_x", "numeric_y"],
};

pub const HEAT_MAP: Visualization = Visualization {
    id: "heat_map",
    name: "Mapa de calor",
    chart_type: "heatmap",
    description: "Intensidad de valores en una matriz",
    applicable_metrics: &["correlation"],
    data_requirements: &["matrix_data"],
};

pub const PIE_CHART: Visualization = Visualization {
    id: "pie_chart",
    name: "Gráfico circular",
    chart_type: "pie",
    description: "Distribución proporcional de categorías",
    applicable_metrics: &["percentage", "proportion"],
    data_requirements: &["category", "numeric_value"],
};

pub const BOX_PLOT: Visualization = Visualization {
    id: "box_plot",
    name: "Diagrama de caja",
    chart_type: "boxplot",
    description: "Distribución estadística y outliers",
    applicable_metrics: &["min", "max", "median", "q1", "q3"],
    data_requirements: &["numeric_values", "categories"],
};

pub const AREA_CHART: Visualization = Visualization {
    id: "area_chart",
    name: "Gráfico de área",
    chart_type: "area",
    description: "Evolución y acumulación a lo largo del tiempo",
    applicable_metrics: &["cumulative_sum"],
    data_requirements: &["timestamp", "numeric_value"],
};

pub const RADAR_CHART: Visualization = Visualization {
    id: "radar_chart",
    name: "Gráfico de radar",
    chart_type: "radar",
    description: "Comparación multidimensional",
    applicable_metrics: &["multiple_metrics"],
    data_requirements: &["dimensions", "values"],
};

pub const TREE_MAP: Visualization = Visualization {
    id: "tree_map",
    name: "Mapa de árbol",
    chart_type: "treemap",
    description: "Visualización jerárquica y proporcional",
    applicable_metrics: &["hierarchical_data"],
    data_requirements: &["hierarchy", "size_value"],
};

pub const SANKEY_DIAGRAM: Visualization = Visualization {
    id: "sankey_diagram",
    name: "Diagrama de Sankey",
    chart_type: "sankey",
    description: "Flujos y transferencias entre categorías",
    applicable_metrics: &["flow_data"],
    data_requirements: &["source", "target", "value"],
};

pub const VISUALIZATIONS: &[&Visualization] = &[
    &TIME_SERIES_CHART,
    &BAR_CHART,
    &SCATTER_PLOT,
    &HEAT_MAP,
    &PIE_CHART,
    &BOX_PLOT,
    &AREA_CHART,
    &RADAR_CHART,
    &TREE_MAP,
    &SANKEY_DIAGRAM,
];

pub const METHODOLOGY_FLOWS: &[MethodologyFlow] = &[
    MethodologyFlow {
        id: "descriptive_analytics",
        name: "Análisis Descriptivo",
        description: "Comprende qué ha sucedido analizando datos históricos",
        industry: None,
        model_types: &["statistical", "clustering", ANY_MODEL],
        required_inputs: &["Datos históricos", "Variables categóricas y numéricas", "Metadatos de las variables"],
        outputs: &["Estadísticas descriptivas", "Identificación de patrones", "Segmentación básica", "Validación de hipótesis simples"],
        visualizations: &[&BAR_CHART, &PIE_CHART, &BOX_PLOT],
        complementary_flows: &["diagnostic_analytics", "exploratory_analytics"],
        business_value: "Establece la línea base de entendimiento sobre los datos de la organización",
        expertise: "Bajo - accesible para analistas de datos sin experiencia avanzada",
        implementation_time: ImplementationTime::Short,
        roi: RoiLevel::Medium,
    },
    MethodologyFlow {
        id: "diagnostic_analytics",
        name: "Análisis Diagnóstico",
        description: "Identifica por qué ocurrieron ciertos eventos mediante análisis causal",
        industry: None,
        model_types: &["regression", "statistical", ANY_MODEL],
        required_inputs: &["Datos históricos procesados", "Variables dependientes e independientes", "Eventos significativos"],
        outputs: &["Factores causales identificados", "Correlaciones significativas", "Detección de anomalías", "Hipótesis validadas"],
        visualizations: &[&SCATTER_PLOT, &HEAT_MAP],
        complementary_flows: &["predictive_analytics", "exploratory_analytics"],
        business_value: "Permite a la organización entender causas de eventos pasados para informar decisiones futuras",
        expertise: "Medio - requiere conocimientos de estadística y modelado",
        implementation_time: ImplementationTime::Medium,
        roi: RoiLevel::High,
    },
    MethodologyFlow {
        id: "predictive_analytics",
        name: "Análisis Predictivo",
        description: "Anticipa resultados futuros mediante modelos predictivos",
        industry: None,
        model_types: &["time_series", "regression", "deep_learning"],
        required_inputs: &["Datos históricos limpios", "Variables predictoras", "Parámetros temporales", "Objetivos de predicción"],
        outputs: &["Predicciones con intervalos de confianza", "Modelos entrenados", "Escenarios futuros", "Indicadores de rendimiento predictivo"],
        visualizations: &[&TIME_SERIES_CHART, &AREA_CHART],
        complementary_flows: &["prescriptive_analytics", "diagnostic_analytics"],
        business_value: "Anticipa tendencias y resultados para optimizar la planificación estratégica",
        expertise: "Alto - requiere especialistas en ciencia de datos",
        implementation_time: ImplementationTime::Long,
        roi: RoiLevel::High,
    },
    MethodologyFlow {
        id: "prescriptive_analytics",
        name: "Análisis Prescriptivo",
        description: "Recomienda acciones óptimas basadas en predicciones y objetivos",
        industry: None,
        model_types: &["optimization", "reinforcement_learning"],
        required_inputs: &["Resultados predictivos", "Objetivos de negocio", "Restricciones operativas", "Opciones de acción"],
        outputs: &["Recomendaciones accionables", "Plan de implementación", "Análisis de escenarios", "Impacto esperado por acción"],
        visualizations: &[&TREE_MAP, &SANKEY_DIAGRAM],
        complementary_flows: &["predictive_analytics", "monitoring_analytics"],
        business_value: "Maximiza el retorno mediante recomendaciones de acción específicas",
        expertise: "Muy alto - requiere investigación operativa y optimización",
        implementation_time: ImplementationTime::Long,
        roi: RoiLevel::High,
    },
    MethodologyFlow {
        id: "exploratory_analytics",
        name: "Análisis Exploratorio",
        description: "Descubre patrones ocultos y genera hipótesis iniciales",
        industry: None,
        model_types: &["clustering", "dimensionality_reduction", ANY_MODEL],
        required_inputs: &["Datos crudos o procesados", "Múltiples fuentes potenciales", "Variables sin filtrar"],
        outputs: &["Insights preliminares", "Hipótesis para investigación", "Direcciones de análisis", "Patrones identificados"],
        visualizations: &[&SCATTER_PLOT, &HEAT_MAP],
        complementary_flows: &["descriptive_analytics", "diagnostic_analytics"],
        business_value: "Descubre oportunidades y riesgos ocultos en los datos para ventaja competitiva",
        expertise: "Medio - requiere pensamiento analítico y curiosidad",
        implementation_time: ImplementationTime::Medium,
        roi: RoiLevel::Medium,
    },
    MethodologyFlow {
        id: "real_time_analytics",
        name: "Análisis en Tiempo Real",
        description: "Procesa y analiza datos a medida que se generan",
        industry: None,
        model_types: &["streaming", "anomaly_detection"],
        required_inputs: &["Flujos de datos en vivo", "Modelos pre-entrenados", "Umbrales de alerta", "Reglas de acción"],
        outputs: &["Alertas instantáneas", "Acciones automáticas", "Visualizaciones dinámicas", "Métricas en tiempo real"],
        visualizations: &[&TIME_SERIES_CHART, &BAR_CHART],
        complementary_flows: &["monitoring_analytics", "prescriptive_analytics"],
        business_value: "Permite respuestas inmediatas a cambios en condiciones operativas",
        expertise: "Muy alto - requiere infraestructura especializada",
        implementation_time: ImplementationTime::Long,
        roi: RoiLevel::High,
    },
    MethodologyFlow {
        id: "monitoring_analytics",
        name: "Análisis de Monitoreo",
        description: "Supervisa el rendimiento continuo y detecta problemas",
        industry: None,
        model_types: &["anomaly_detection", "statistical", ANY_MODEL],
        required_inputs: &["Métricas clave", "Niveles de referencia", "Umbrales de alerta", "Ciclos de revisión"],
        outputs: &["Dashboards operativos", "Informes de desviación", "Tendencias de rendimiento", "Alertas preventivas"],
        visualizations: &[&TIME_SERIES_CHART, &RADAR_CHART],
        complementary_flows: &["real_time_analytics", "diagnostic_analytics"],
        business_value: "Mantiene la operación dentro de parámetros óptimos y anticipa problemas",
        expertise: "Medio - requiere conocimiento del dominio y métricas",
        implementation_time: ImplementationTime::Medium,
        roi: RoiLevel::Medium,
    },
    MethodologyFlow {
        id: "financial_analytics",
        name: "Análisis Financiero",
        description: "Analiza rendimiento financiero y optimiza recursos",
        industry: Some("finanzas"),
        model_types: &["time_series", "regression", ANY_MODEL],
        required_inputs: &["Datos financieros históricos", "Índices económicos", "Datos de mercado", "Presupuestos y proyecciones"],
        outputs: &["Previsiones financieras", "Análisis de riesgo", "Optimización de capital", "Detección de anomalías"],
        visualizations: &[&TIME_SERIES_CHART, &TREE_MAP],
        complementary_flows: &["predictive_analytics", "risk_analytics"],
        business_value: "Optimiza la gestión financiera y maximiza el retorno sobre inversión",
        expertise: "Alto - requiere conocimientos financieros y analíticos",
        implementation_time: ImplementationTime::Medium,
        roi: RoiLevel::High,
    },
    MethodologyFlow {
        id: "risk_analytics",
        name: "Análisis de Riesgos",
        description: "Identifica, cuantifica y mitiga riesgos potenciales",
        industry: Some("finanzas"),
        model_types: &["statistical", "simulation", ANY_MODEL],
        required_inputs: &["Datos históricos de eventos", "Factores de riesgo", "Límites de tolerancia", "Escenarios de estrés"],
        outputs: &["Mapas de riesgo", "Cuantificación de impacto", "Estrategias de mitigación", "Modelos de alerta temprana"],
        visualizations: &[&HEAT_MAP, &RADAR_CHART],
        complementary_flows: &["financial_analytics", "simulation_analytics"],
        business_value: "Protege activos de la organización y reduce pérdidas potenciales",
        expertise: "Alto - requiere gestión de riesgos especializada",
        implementation_time: ImplementationTime::Medium,
        roi: RoiLevel::High,
    },
    MethodologyFlow {
        id: "customer_analytics",
        name: "Análisis de Clientes",
        description: "Analiza comportamientos y valor de clientes",
        industry: Some("retail"),
        model_types: &["clustering", "classification", ANY_MODEL],
        required_inputs: &["Datos transaccionales", "Información demográfica", "Interacciones con clientes", "Feedback y encuestas"],
        outputs: &["Segmentación de clientes", "Modelos de valor del ciclo de vida", "Predicciones de abandono", "Estrategias de fidelización"],
        visualizations: &[&SCATTER_PLOT, &SANKEY_DIAGRAM],
        complementary_flows: &["marketing_analytics", "behavioral_analytics"],
        business_value: "Maximiza el valor del cliente y reduce la tasa de abandono",
        expertise: "Medio - requiere marketing y análisis de datos",
        implementation_time: ImplementationTime::Medium,
        roi: RoiLevel::High,
    },
];

const fn package(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    flows: &'static [&'static str],
    total_business_value: &'static str,
    total_implementation_time: &'static str,
    industry: Option<&'static str>,
) -> MethodologyPackage {
    MethodologyPackage {
        id: Cow::Borrowed(id),
        name: Cow::Borrowed(name),
        description,
        flows: Cow::Borrowed(flows),
        total_business_value,
        total_implementation_time,
        industry: match industry {
            Some(industry) => Some(Cow::Borrowed(industry)),
            None => None,
        },
    }
}

pub const METHODOLOGY_PACKAGES: &[MethodologyPackage] = &[
    package(
        "finance_essentials",
        "Esenciales Financieros",
        "Paquete básico para análisis financiero y gestión de riesgos",
        &["financial_analytics", "risk_analytics", "descriptive_analytics"],
        "Mejora en la gestión de recursos financieros y mitigación de riesgos",
        "2-3 meses",
        Some("finanzas"),
    ),
    package(
        "advanced_finance",
        "Finanzas Avanzadas",
        "Análisis financiero predictivo y optimización",
        &["financial_analytics", "predictive_analytics", "prescriptive_analytics", "risk_analytics"],
        "Planificación financiera estratégica y optimización avanzada de recursos",
        "4-6 meses",
        Some("finanzas"),
    ),
    package(
        "retail_customer_insights",
        "Insights de Clientes para Retail",
        "Comprensión profunda del comportamiento de clientes y optimización de ventas",
        &["customer_analytics", "descriptive_analytics", "predictive_analytics"],
        "Incremento en satisfacción de clientes, retención y valor del ciclo de vida",
        "3-4 meses",
        Some("retail"),
    ),
    package(
        "data_science_fundamentals",
        "Fundamentos de Ciencia de Datos",
        "Paquete esencial para organizaciones que inician en análisis de datos",
        &["descriptive_analytics", "exploratory_analytics", "diagnostic_analytics"],
        "Establecimiento de capacidades analíticas fundamentales",
        "2-3 meses",
        None,
    ),
    package(
        "advanced_predictive",
        "Predicción Avanzada",
        "Capacidades predictivas y prescriptivas sofisticadas",
        &["predictive_analytics", "prescriptive_analytics", "monitoring_analytics"],
        "Toma de decisiones proactiva basada en predicciones precisas",
        "5-8 meses",
        None,
    ),
];

pub fn visualization_by_id(id: &str) -> Option<&'static Visualization> {
    VISUALIZATIONS.iter().copied().find(|viz| viz.id == id)
}

pub fn methodology_flow_by_id(id: &str) -> Option<&'static MethodologyFlow> {
    METHODOLOGY_FLOWS.iter().find(|flow| flow.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supports_by_tag_family_and_wildcard() {
        let predictive = methodology_flow_by_id("predictive_analytics").unwrap();
        assert!(predictive.supports("sarima"));
        assert!(predictive.supports("linear_regression"));
        assert!(!predictive.supports("kmeans"));

        let prescriptive = methodology_flow_by_id("prescriptive_analytics").unwrap();
        assert!(prescriptive.supports("optimization"));
        assert!(!prescriptive.supports("xgboost"));

        let descriptive = methodology_flow_by_id("descriptive_analytics").unwrap();
        assert!(descriptive.supports("anything"));
    }

    #[test]
    fn test_null_industry_is_a_wildcard() {
        let descriptive = methodology_flow_by_id("descriptive_analytics").unwrap();
        assert!(descriptive.applies_to_industry("salud"));

        let risk = methodology_flow_by_id("risk_analytics").unwrap();
        assert!(risk.applies_to_industry("finanzas"));
        assert!(!risk.applies_to_industry("retail"));
    }

    #[test]
    fn test_package_flows_exist() {
        for package in METHODOLOGY_PACKAGES {
            for flow in package.flows.iter() {
                assert!(methodology_flow_by_id(flow).is_some(), "{}: {}", package.id, flow);
            }
        }
    }

    #[test]
    fn test_visualization_lookup() {
        assert_eq!(visualization_by_id("heat_map").unwrap().chart_type, "heatmap");
        assert!(visualization_by_id("cluster_map").is_none());
        assert_eq!(VISUALIZATIONS.len(), 10);
    }
}
