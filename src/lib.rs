//! Analitica - recommendation engine and analysis client
//!
//! Given a statistical/ML model type, an industry and optional computed
//! metrics, assembles advisory content from static catalogs, simulates
//! external analysis tools and generates Excel data-entry templates.
//!
//! # Architecture
//!
//! - **catalog**: compile-time knowledge tables
//! - **recommend**: selection, metric rules and applicability filters
//! - **tools**: tool invocation runtime with observers
//! - **api**: client for the external analysis backend
//! - **flows** / **template**: industry analysis flows and their workbooks

pub mod errors;
pub mod config;

// Knowledge tables and engine
pub mod catalog;
pub mod recommend;

// Tool invocation
pub mod tools;

// Analysis backend and artifacts
pub mod api;
pub mod flows;
pub mod template;
pub mod roi;

// CLI surface
pub mod cli;
pub mod display;

// Re-export commonly used types
pub use errors::{AppError, Result};
pub use config::Config;
pub use recommend::{AdvisoryReport, MetricsBag, RecommendationEngine};
pub use tools::ToolRuntime;
