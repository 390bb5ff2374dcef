//! Command-line argument parsing for analitica
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// analitica - Recommendations, tools and templates for analytics models
#[derive(Parser, Debug)]
#[command(name = "analitica")]
#[command(version)]
#[command(about = "Advisory engine and analysis API client for statistical models", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Analysis API base URL (overrides configuration)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level: -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recommendations, complementary analyses and tools for a model
    Recommend {
        /// Model type, e.g. sarima, kmeans, xgboost
        model_type: String,

        /// Industry used for complementary analyses
        #[arg(short, long, default_value = "")]
        industry: String,

        /// Metrics as a JSON object, e.g. '{"mape": 18.2}'
        #[arg(short, long)]
        metrics: Option<String>,

        /// Read metrics from a JSON file
        #[arg(long, conflicts_with = "metrics")]
        metrics_file: Option<PathBuf>,
    },

    /// Methodology flows, packages and visualizations for a model
    Methodology {
        /// Model type, e.g. sarima, kmeans, xgboost
        model_type: String,

        /// Industry used to select flows and packages
        #[arg(short, long, default_value = "")]
        industry: String,

        /// Metrics as a JSON object, used to pick visualizations
        #[arg(short, long)]
        metrics: Option<String>,

        /// Read metrics from a JSON file
        #[arg(long, conflicts_with = "metrics")]
        metrics_file: Option<PathBuf>,
    },

    /// Complementary analyses for a model and industry
    Complementary {
        model_type: String,
        industry: String,
    },

    /// List external analysis tools
    Tools {
        /// Only tools compatible with this model type
        model_type: Option<String>,
    },

    /// Invoke one or more tools concurrently
    RunTool {
        /// Tool ids
        #[arg(required = true)]
        tool_ids: Vec<String>,

        /// Parameters as a JSON object
        #[arg(short, long)]
        params: Option<String>,

        /// Simulated latency in milliseconds (overrides configuration)
        #[arg(long)]
        latency_ms: Option<u64>,

        /// Probability of an injected failure, 0.0-1.0 (overrides configuration)
        #[arg(long)]
        failure_rate: Option<f64>,
    },

    /// Browse industry analysis flows
    Flows {
        #[arg(short, long)]
        industry: Option<String>,

        /// Only flows with a step running this model (needs --industry)
        #[arg(short, long, requires = "industry")]
        model_type: Option<String>,

        /// Show a single flow in detail
        #[arg(long, conflicts_with_all = ["industry", "model_type"])]
        id: Option<String>,
    },

    /// Generate the Excel data-entry template for a flow
    Template {
        flow_id: String,

        /// Output directory (defaults to configuration, then current dir)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Parameter metadata for a model
    Parameters { model_type: String },

    /// Upload a data file for analysis
    Analyze {
        file: PathBuf,

        #[arg(short, long)]
        industry: String,

        #[arg(short, long)]
        model_type: String,

        /// Model parameters as a JSON object
        #[arg(short, long)]
        params: Option<String>,

        /// Reuse an existing file id instead of generating one
        #[arg(long)]
        file_id: Option<String>,
    },

    /// Fetch stored results of an analysis
    Results { file_id: String },

    /// Industries supported by the analysis API
    Industries,

    /// Models available for an industry
    Models {
        /// Industry tag
        #[arg(short, long, default_value = "retail")]
        industry: String,
    },

    /// Model categories known to the analysis API
    Categories,

    /// Estimate return on investment
    Roi {
        /// Industry preset
        #[arg(short, long, default_value = "retail")]
        industry: String,

        #[arg(long)]
        investment: Option<f64>,

        #[arg(long)]
        savings: Option<f64>,

        /// Implementation time in months (0-12)
        #[arg(long)]
        months: Option<u32>,

        /// Risk level (1-5)
        #[arg(long)]
        risk: Option<u32>,
    },

    /// Display or update configuration
    Config {
        /// Persist a new API base URL
        #[arg(long)]
        set_api_url: Option<String>,
    },
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }
}

impl Verbosity {
    /// Default tracing filter for this level
    pub fn log_filter(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "info",
            Verbosity::Verbose => "debug",
            Verbosity::VeryVerbose => "trace",
        }
    }

    pub fn show_progress(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }

    pub fn show_events(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(parse(&["analitica", "-q", "industries"]).verbosity(), Verbosity::Quiet);
        assert_eq!(parse(&["analitica", "industries"]).verbosity(), Verbosity::Normal);
        assert_eq!(parse(&["analitica", "-v", "industries"]).verbosity(), Verbosity::Verbose);
        assert_eq!(
            parse(&["analitica", "industries", "-vv"]).verbosity(),
            Verbosity::VeryVerbose
        );
    }

    #[test]
    fn test_log_filter_per_level() {
        let filters: Vec<_> = ["-q", "", "-v", "-vv"]
            .iter()
            .map(|flag| {
                let mut argv = vec!["analitica", "industries"];
                if !flag.is_empty() {
                    argv.push(flag);
                }
                parse(&argv).verbosity().log_filter()
            })
            .collect();
        assert_eq!(filters, vec!["error", "info", "debug", "trace"]);
    }

    #[test]
    fn test_methodology_args() {
        let args = parse(&[
            "analitica",
            "methodology",
            "kmeans",
            "-i",
            "retail",
            "-m",
            r#"{"correlation": 0.5}"#,
        ]);
        match args.command {
            Commands::Methodology {
                model_type,
                industry,
                metrics,
                metrics_file,
            } => {
                assert_eq!(model_type, "kmeans");
                assert_eq!(industry, "retail");
                assert!(metrics.is_some());
                assert!(metrics_file.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_models_args() {
        match parse(&["analitica", "models", "-i", "salud"]).command {
            Commands::Models { industry } => assert_eq!(industry, "salud"),
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(matches!(parse(&["analitica", "categories"]).command, Commands::Categories));
    }

    #[test]
    fn test_recommend_args() {
        let args = parse(&[
            "analitica",
            "--json",
            "recommend",
            "sarima",
            "--industry",
            "retail",
            "--metrics",
            r#"{"mape": 20}"#,
        ]);
        assert!(args.json);
        match args.command {
            Commands::Recommend {
                model_type,
                industry,
                metrics,
                metrics_file,
            } => {
                assert_eq!(model_type, "sarima");
                assert_eq!(industry, "retail");
                assert_eq!(metrics.as_deref(), Some(r#"{"mape": 20}"#));
                assert!(metrics_file.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_metrics_sources_conflict() {
        let result = Args::try_parse_from([
            "analitica",
            "recommend",
            "kmeans",
            "--metrics",
            "{}",
            "--metrics-file",
            "m.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_tool_requires_ids() {
        assert!(Args::try_parse_from(["analitica", "run-tool"]).is_err());

        let args = parse(&["analitica", "run-tool", "stats-toolkit", "viz-toolkit", "--latency-ms", "0"]);
        match args.command {
            Commands::RunTool { tool_ids, latency_ms, .. } => {
                assert_eq!(tool_ids, vec!["stats-toolkit", "viz-toolkit"]);
                assert_eq!(latency_ms, Some(0));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_flows_model_requires_industry() {
        assert!(Args::try_parse_from(["analitica", "flows", "--model-type", "kmeans"]).is_err());
        assert!(Args::try_parse_from(["analitica", "flows", "-i", "retail", "-m", "kmeans"]).is_ok());
    }

    #[test]
    fn test_log_filters() {
        assert_eq!(Verbosity::Quiet.log_filter(), "error");
        assert_eq!(Verbosity::VeryVerbose.log_filter(), "trace");
        assert!(!Verbosity::Quiet.show_progress());
        assert!(Verbosity::Normal.show_events());
    }
}
