//! Industry analysis flows
//!
//! A flow is an ordered sequence of analysis steps for one industry. Each
//! step names the model it runs and the data it needs, which is what the
//! template generator turns into worksheets.

pub mod catalog;
pub mod types;

pub use catalog::ALL_FLOWS;
pub use types::{AnalysisFlow, AnalysisStep, Difficulty, FieldType, InputField, OutputInsight};

use tracing::debug;

/// Flows defined for an industry, empty if none
pub fn flows_by_industry(industry: &str) -> Vec<&'static AnalysisFlow> {
    ALL_FLOWS
        .iter()
        .copied()
        .filter(|flow| flow.industry == industry)
        .collect()
}

pub fn flow_by_id(id: &str) -> Option<&'static AnalysisFlow> {
    ALL_FLOWS.iter().copied().find(|flow| flow.id == id)
}

/// Flows for an industry that contain a step running the given model
pub fn recommended_flows(model_type: &str, industry: &str) -> Vec<&'static AnalysisFlow> {
    let flows: Vec<_> = flows_by_industry(industry)
        .into_iter()
        .filter(|flow| flow.uses_model(model_type))
        .collect();

    debug!(model_type, industry, count = flows.len(), "recommended flows");
    flows
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_flows_by_industry() {
        let ids: Vec<_> = flows_by_industry("finanzas").iter().map(|f| f.id).collect();
        assert_eq!(ids, vec!["finanzas-credit-risk", "finanzas-fraude-detection"]);
        assert!(flows_by_industry("agricultura").is_empty());
        assert!(flows_by_industry("Finanzas").is_empty());
    }

    #[test]
    fn test_flow_by_id() {
        let flow = flow_by_id("retail-customer-ltv").unwrap();
        assert_eq!(flow.industry, "retail");
        assert_eq!(flow.steps.len(), 3);
        assert!(flow_by_id("nope").is_none());
    }

    #[test]
    fn test_recommended_flows_match_model() {
        let flows = recommended_flows("xgboost", "tecnologia");
        assert_eq!(flows.len(), 1);
        assert_eq!(flows[0].id, "tecnologia-user-engagement");

        assert!(recommended_flows("sarima", "tecnologia").is_empty());
        assert!(recommended_flows("sarima", "salud").is_empty());
        assert!(recommended_flows("kmeans", "energia").is_empty());
    }

    #[test]
    fn test_each_industry_has_its_flow() {
        let expected = [
            ("retail", "retail-customer-ltv"),
            ("educacion", "educacion-aprendizaje-personalizado"),
            ("salud", "salud-prediccion-pacientes"),
            ("manufactura", "manufactura-mantenimiento-predictivo"),
            ("tecnologia", "tecnologia-user-engagement"),
        ];
        for (industry, id) in expected {
            let flows = flows_by_industry(industry);
            assert_eq!(flows.len(), 1, "{}", industry);
            assert_eq!(flows[0].id, id);
            assert_eq!(flow_by_id(id).map(|f| f.industry), Some(industry));
        }
    }

    #[test]
    fn test_anomaly_detection_flows() {
        let fraud = recommended_flows("anomaly_detection", "finanzas");
        assert_eq!(fraud.len(), 1);
        assert_eq!(fraud[0].id, "finanzas-fraude-detection");

        let maintenance = recommended_flows("survival_analysis", "manufactura");
        assert_eq!(maintenance[0].steps.len(), 3);
        assert_eq!(maintenance[0].steps[1].prerequisite_steps, &["step1-monitoreo-anomalias"]);
    }

    #[test]
    fn test_flow_ids_are_unique() {
        let ids: HashSet<_> = ALL_FLOWS.iter().map(|f| f.id).collect();
        assert_eq!(ids.len(), ALL_FLOWS.len());
        assert_eq!(ALL_FLOWS.len(), 7);
    }

    #[test]
    fn test_prerequisites_refer_to_earlier_steps() {
        for flow in ALL_FLOWS {
            let mut seen = HashSet::new();
            for step in flow.steps {
                for prerequisite in step.prerequisite_steps {
                    assert!(
                        seen.contains(prerequisite),
                        "{}: {} depends on unknown step {}",
                        flow.id,
                        step.id,
                        prerequisite
                    );
                }
                seen.insert(step.id);
            }
        }
    }

    #[test]
    fn test_every_step_has_a_required_field() {
        for flow in ALL_FLOWS {
            for step in flow.steps {
                assert!(step.input_fields.iter().any(|f| f.required), "{}", step.id);
            }
        }
    }
}
