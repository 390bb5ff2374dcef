//! Analysis flow types

use serde::Serialize;

/// Kind of value a data-entry field holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Numeric,
    Date,
    Categorical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Basic,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputField {
    pub name: &'static str,
    pub description: &'static str,
    pub example: &'static str,
    pub required: bool,
    pub field_type: FieldType,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutputInsight {
    pub name: &'static str,
    pub description: &'static str,
    pub business_value: &'static str,
    pub visualization: &'static str,
}

/// One step of a flow; steps build on the outputs of their prerequisites
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisStep {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub model_type: &'static str,
    pub prerequisite_steps: &'static [&'static str],
    pub input_fields: &'static [InputField],
    pub output_insights: &'static [OutputInsight],
    pub estimated_processing_time: &'static str,
    pub difficulty: Difficulty,
}

/// Recommended sequence of analyses for an industry
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisFlow {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub industry: &'static str,
    pub business_goal: &'static str,
    pub steps: &'static [AnalysisStep],
    pub total_estimated_time: &'static str,
    pub recommended_tools: &'static [&'static str],
}

impl AnalysisFlow {
    pub fn uses_model(&self, model_type: &str) -> bool {
        self.steps.iter().any(|step| step.model_type == model_type)
    }
}
