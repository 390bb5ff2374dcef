//! Static knowledge tables
//!
//! Everything here is defined at compile time and never mutated:
//! - recommendations by model family
//! - complementary analyses
//! - external tool descriptors
//! - local model parameter table
//! - methodology flows, packages and visualizations

pub mod types;
pub mod recommendations;
pub mod complementary;
pub mod tools;
pub mod parameters;
pub mod methodology;

// Re-export commonly used types
pub use types::{
    ComplementaryAnalysis, ModelFamily, Priority, Recommendation, RecommendationKind,
    StaticRecommendation, Tool, ANY_MODEL,
};
pub use complementary::COMPLEMENTARY_ANALYSES;
pub use tools::{find_tool, TOOLS};
pub use parameters::{parameter_specs, ParameterSpec};
pub use recommendations::family_recommendations;
pub use methodology::{
    methodology_flow_by_id, visualization_by_id, MethodologyFlow, MethodologyPackage,
    Visualization, METHODOLOGY_FLOWS, METHODOLOGY_PACKAGES, VISUALIZATIONS,
};

/// Industries the product ships content for
pub const SUPPORTED_INDUSTRIES: &[&str] = &[
    "retail",
    "finanzas",
    "salud",
    "manufactura",
    "tecnologia",
    "educacion",
    "energia",
    "agricultura",
];
