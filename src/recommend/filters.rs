//! Complementary analysis and tool compatibility filters

use crate::catalog::{ComplementaryAnalysis, Tool, COMPLEMENTARY_ANALYSES, TOOLS};

/// Maximum number of complementary analyses returned
pub const MAX_COMPLEMENTARY: usize = 4;

/// Complementary analyses for a model type and industry
///
/// An analysis qualifies when its model set contains `model_type` or its
/// industry set contains `industry`. Results keep catalog order and are
/// capped at [`MAX_COMPLEMENTARY`].
pub fn get_complementary_analyses(
    model_type: &str,
    industry: &str,
) -> Vec<&'static ComplementaryAnalysis> {
    if model_type.is_empty() {
        return Vec::new();
    }

    COMPLEMENTARY_ANALYSES
        .iter()
        .filter(|analysis| analysis.applies_to(model_type, industry))
        .take(MAX_COMPLEMENTARY)
        .collect()
}

/// Tools compatible with `model_type`, including every `any` tool
pub fn get_compatible_tools(model_type: &str) -> Vec<&'static Tool> {
    if model_type.is_empty() {
        return Vec::new();
    }

    TOOLS.iter().filter(|tool| tool.supports(model_type)).collect()
}
