//! analitica - CLI entry point

use analitica::api::{AnalysisClient, AnalysisRequest};
use analitica::catalog::{Tool, TOOLS};
use analitica::cli::{Args, Commands, Verbosity};
use analitica::config::Config;
use analitica::errors::AppError;
use analitica::flows::{self, AnalysisFlow, ALL_FLOWS};
use analitica::recommend::{get_compatible_tools, get_complementary_analyses, MetricsBag};
use analitica::roi::RoiInputs;
use analitica::template::{save_template, TemplateWorkbook};
use analitica::tools::{parse_params, EventBus, ToolParams, ToolRuntime};
use analitica::{display, RecommendationEngine};
use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use futures_util::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_tracing(args.verbosity());

    if let Err(err) = run(&args).await {
        display::show_error(&format!("{:#}", err));
        std::process::exit(1);
    }
}

/// RUST_LOG wins over -q/-v flags when set
fn init_tracing(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(args: &Args) -> Result<()> {
    let (mut config, config_path) = load_config(args)?;
    if let Some(url) = &args.api_url {
        config.set_api_url(url);
    }

    match &args.command {
        Commands::Recommend {
            model_type,
            industry,
            metrics,
            metrics_file,
        } => {
            let metrics = read_metrics(metrics.as_deref(), metrics_file.as_deref()).await?;
            recommend(args, model_type, industry, metrics.as_ref())?;
        }
        Commands::Methodology {
            model_type,
            industry,
            metrics,
            metrics_file,
        } => {
            let metrics = read_metrics(metrics.as_deref(), metrics_file.as_deref()).await?;
            let report = RecommendationEngine::new().methodology(model_type, industry, metrics.as_ref());
            if args.json {
                print_json(&report)?;
            } else {
                display::show_methodology(&report);
            }
        }
        Commands::Complementary {
            model_type,
            industry,
        } => {
            let analyses = get_complementary_analyses(model_type, industry);
            if args.json {
                print_json(&analyses)?;
            } else {
                display::show_complementary(&analyses);
            }
        }
        Commands::Tools { model_type } => {
            let tools: Vec<&Tool> = match model_type {
                Some(model_type) => get_compatible_tools(model_type),
                None => TOOLS.iter().collect(),
            };
            if args.json {
                print_json(&tools)?;
            } else {
                display::show_tools(&tools);
            }
        }
        Commands::RunTool {
            tool_ids,
            params,
            latency_ms,
            failure_rate,
        } => {
            let params = match params {
                Some(raw) => parse_params(raw)?,
                None => ToolParams::new(),
            };
            let mut tools_config = config.tools.clone();
            if let Some(latency) = latency_ms {
                tools_config.latency_ms = *latency;
            }
            if let Some(rate) = failure_rate {
                tools_config.failure_rate = *rate;
            }
            run_tools(args, tool_ids, &params, &tools_config).await?;
        }
        Commands::Flows {
            industry,
            model_type,
            id,
        } => {
            show_flows(args, industry.as_deref(), model_type.as_deref(), id.as_deref())?;
        }
        Commands::Template {
            flow_id,
            output_dir,
        } => {
            let flow = flows::flow_by_id(flow_id).ok_or_else(|| AppError::flow_not_found(flow_id))?;
            let dir = output_dir
                .clone()
                .or_else(|| config.templates.output_dir.clone())
                .unwrap_or_else(|| PathBuf::from("."));

            let path = save_template(&dir, &TemplateWorkbook::from_flow(flow)).await?;
            if args.json {
                print_json(&json!({ "flow_id": flow.id, "path": path }))?;
            } else {
                println!("{} {}", "Template written:".green(), path.display());
            }
        }
        Commands::Parameters { model_type } => {
            let client = AnalysisClient::new(&config.api)?;
            let pb = spinner(args, format!("Fetching parameters for {}", model_type));
            let response = client.model_parameters(model_type).await;
            pb.finish_and_clear();

            if args.json {
                print_json(&response)?;
            } else {
                display::show_parameters(&response);
            }
        }
        Commands::Analyze {
            file,
            industry,
            model_type,
            params,
            file_id,
        } => {
            let mut request = AnalysisRequest::from_path(file, industry, model_type)
                .await
                .with_context(|| format!("Failed to read {}", file.display()))?;
            if let Some(raw) = params {
                request = request.with_parameters(parse_params(raw)?);
            }
            if let Some(id) = file_id {
                request = request.with_file_id(id.clone());
            }
            let file_id = request.file_id.clone();

            let client = AnalysisClient::new(&config.api)?;
            let pb = spinner(args, format!("Analyzing {} with {}", file.display(), model_type));
            let result = client.submit_analysis(request).await;
            pb.finish_and_clear();
            let result = result?;

            if !args.json {
                println!("{} file id {}", "Analysis complete:".green(), file_id.bold());
            }
            print_json(&result)?;
        }
        Commands::Results { file_id } => {
            let client = AnalysisClient::new(&config.api)?;
            let pb = spinner(args, format!("Fetching results for {}", file_id));
            let result = client.analysis_results(file_id).await;
            pb.finish_and_clear();
            print_json(&result?)?;
        }
        Commands::Industries => {
            let client = AnalysisClient::new(&config.api)?;
            let industries = client.supported_industries().await;
            if args.json {
                print_json(&industries)?;
            } else {
                for industry in &industries {
                    println!("  • {}", industry);
                }
            }
        }
        Commands::Models { industry } => {
            let client = AnalysisClient::new(&config.api)?;
            let pb = spinner(args, format!("Fetching models for {}", industry));
            let models = client.available_models(industry).await;
            pb.finish_and_clear();

            if args.json {
                print_json(&models)?;
            } else {
                display::show_models(industry, &models);
            }
        }
        Commands::Categories => {
            let client = AnalysisClient::new(&config.api)?;
            let categories = client.model_categories().await;
            if args.json {
                print_json(&categories)?;
            } else {
                for category in &categories {
                    println!("  • {}", category);
                }
            }
        }
        Commands::Roi {
            industry,
            investment,
            savings,
            months,
            risk,
        } => {
            let mut inputs = RoiInputs::for_industry(industry);
            if let Some(value) = investment {
                inputs.initial_investment = *value;
            }
            if let Some(value) = savings {
                inputs.annual_savings = *value;
            }
            if let Some(value) = months {
                inputs.implementation_months = *value;
            }
            if let Some(value) = risk {
                inputs.risk_level = *value;
            }

            let estimate = inputs.estimate()?;
            if args.json {
                print_json(&json!({ "industry": industry, "inputs": inputs, "estimate": estimate }))?;
            } else {
                display::show_roi(industry, &inputs, &estimate);
            }
        }
        Commands::Config { set_api_url } => {
            if let Some(url) = set_api_url {
                config.set_api_url(url);
                let path = match &config_path {
                    Some(path) => path.clone(),
                    None => Config::config_path()?,
                };
                config.save_to(&path)?;
                if !args.json {
                    println!("{} {}", "Saved".green(), path.display());
                }
            }

            if args.json {
                print_json(&config)?;
            } else {
                display::show_config(&config, config_path.as_deref());
            }
        }
    }

    Ok(())
}

fn load_config(args: &Args) -> Result<(Config, Option<PathBuf>)> {
    let (config, path) = match &args.config {
        Some(path) => (Config::load_from(path), Some(path.clone())),
        None => (Config::load(), Config::config_path().ok()),
    };
    let config = config.map_err(|e| AppError::Config(format!("{:#}", e)))?;
    Ok((config, path))
}

async fn read_metrics(inline: Option<&str>, file: Option<&Path>) -> Result<Option<MetricsBag>> {
    if let Some(raw) = inline {
        return Ok(Some(MetricsBag::from_json(raw)?));
    }
    if let Some(path) = file {
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read metrics file {}", path.display()))?;
        return Ok(Some(MetricsBag::from_json(&raw)?));
    }
    Ok(None)
}

fn recommend(
    args: &Args,
    model_type: &str,
    industry: &str,
    metrics: Option<&MetricsBag>,
) -> Result<()> {
    let engine = RecommendationEngine::new();
    let report = engine.report(model_type, industry, metrics);

    if args.json {
        return print_json(&report);
    }

    display::show_report(&report);

    let suggested = flows::recommended_flows(model_type, industry);
    if !suggested.is_empty() {
        println!("{}", "Analysis flows".bold());
        display::show_flows(&suggested);
        println!();
    }
    Ok(())
}

/// Invoke every tool concurrently and render lifecycle notices as they arrive
async fn run_tools(
    args: &Args,
    tool_ids: &[String],
    params: &ToolParams,
    tools_config: &analitica::config::ToolsConfig,
) -> Result<()> {
    let (bus, mut events) = EventBus::new();
    let runtime = ToolRuntime::simulated(tools_config).with_observer(Arc::new(bus));

    let show_events = !args.json && args.verbosity().show_events();
    let printer = tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            if show_events {
                display::show_event(&event);
            }
        }
    });

    let outcomes = join_all(tool_ids.iter().map(|id| runtime.execute_tool(id, params))).await;
    let stats = runtime.stats();

    // Dropping the runtime closes the event channel so the printer can finish
    drop(runtime);
    printer.await.context("event printer task failed")?;

    let failures = outcomes.iter().filter(|outcome| outcome.is_err()).count();

    if args.json {
        let results: Vec<_> = tool_ids
            .iter()
            .zip(&outcomes)
            .map(|(id, outcome)| match outcome {
                Ok(execution) => json!({ "tool_id": id, "result": execution }),
                Err(err) => json!({ "tool_id": id, "error": err.to_string() }),
            })
            .collect();
        print_json(&json!({ "results": results, "stats": stats }))?;
    } else {
        for outcome in outcomes.iter().flatten() {
            display::show_execution(outcome);
        }
        display::show_stats(&stats);
    }

    if failures > 0 {
        anyhow::bail!("{} of {} tool invocations failed", failures, tool_ids.len());
    }
    Ok(())
}

fn show_flows(
    args: &Args,
    industry: Option<&str>,
    model_type: Option<&str>,
    id: Option<&str>,
) -> Result<()> {
    if let Some(id) = id {
        let flow = flows::flow_by_id(id).ok_or_else(|| AppError::flow_not_found(id))?;
        if args.json {
            return print_json(flow);
        }
        display::show_flow(flow);
        return Ok(());
    }

    let selected: Vec<&AnalysisFlow> = match (industry, model_type) {
        (Some(industry), Some(model_type)) => flows::recommended_flows(model_type, industry),
        (Some(industry), None) => flows::flows_by_industry(industry),
        _ => ALL_FLOWS.to_vec(),
    };

    if args.json {
        print_json(&selected)
    } else {
        display::show_flows(&selected);
        Ok(())
    }
}

fn spinner(args: &Args, message: String) -> ProgressBar {
    if args.json || !args.verbosity().show_progress() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
