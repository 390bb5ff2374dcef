//! Terminal rendering for CLI output
//!
//! Color-coded text views of engine results. `--json` output bypasses this
//! module entirely.

use crate::api::ModelParametersResponse;
use crate::catalog::{ComplementaryAnalysis, Priority, Recommendation, Tool};
use crate::config::Config;
use crate::flows::{AnalysisFlow, Difficulty};
use crate::recommend::{AdvisoryReport, MethodologyReport};
use crate::roi::{RoiEstimate, RoiInputs};
use crate::tools::{ToolEvent, ToolExecution, ToolStats};
use colored::*;
use std::path::Path;

const RULE_WIDTH: usize = 64;

pub fn priority_label(priority: Priority) -> ColoredString {
    let label = format!("[{}]", priority.as_str());
    match priority {
        Priority::Critical => label.red().bold(),
        Priority::High => label.red(),
        Priority::Medium => label.yellow(),
        Priority::Low => label.dimmed(),
    }
}

fn heading(title: &str) {
    println!("\n{}", title.bold().cyan());
    println!("{}", "=".repeat(RULE_WIDTH).cyan());
}

fn section(title: &str) {
    println!("\n{}", title.bold());
}

pub fn show_report(report: &AdvisoryReport) {
    let industry = if report.industry.is_empty() {
        "-"
    } else {
        report.industry.as_str()
    };
    heading(&format!("Model: {} | Industry: {}", report.model_type, industry));

    section("Recommendations");
    show_recommendations(&report.recommendations);

    section("Complementary analyses");
    show_complementary(&report.complementary_analyses);

    section("Compatible tools");
    show_tools(&report.tools);
    println!();
}

pub fn show_methodology(report: &MethodologyReport) {
    let industry = if report.industry.is_empty() {
        "-"
    } else {
        report.industry.as_str()
    };
    heading(&format!("Methodology: {} | Industry: {}", report.model_type, industry));

    section("Methodology flows");
    if report.flows.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for flow in &report.flows {
        println!(
            "  • {} {} {}",
            flow.id.green(),
            flow.name.bold(),
            format!("[ROI {:?}]", flow.roi).dimmed()
        );
    }

    section("Packages");
    if report.packages.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for package in &report.packages {
        println!(
            "  • {} {} {}",
            package.id.green(),
            package.name.bold(),
            format!("[{}]", package.total_implementation_time).dimmed()
        );
        println!("    {}", package.flows.join(", "));
    }

    section("Visualizations");
    if report.visualizations.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for viz in &report.visualizations {
        println!("  • {} ({}) {}", viz.name, viz.chart_type, viz.description.dimmed());
    }
    println!();
}

pub fn show_recommendations(recommendations: &[Recommendation]) {
    if recommendations.is_empty() {
        println!("  {}", "(none)".dimmed());
        return;
    }

    for rec in recommendations {
        let marker = if rec.actionable { "▶".green() } else { "•".normal() };
        println!(
            "  {} {} {} {}",
            marker,
            priority_label(rec.priority),
            rec.title.bold(),
            format!("({})", rec.id).dimmed()
        );
        println!("      {}", rec.description);
    }
}

pub fn show_complementary(analyses: &[&ComplementaryAnalysis]) {
    if analyses.is_empty() {
        println!("  {}", "(none)".dimmed());
        return;
    }

    for analysis in analyses {
        println!("  • {} {}", analysis.title.bold(), format!("({})", analysis.id).dimmed());
        println!("      {}", analysis.description);
    }
}

pub fn show_tools(tools: &[&Tool]) {
    if tools.is_empty() {
        println!("  {}", "(none)".dimmed());
        return;
    }

    for tool in tools {
        println!(
            "  • {} {} [{}]",
            tool.id.green(),
            tool.name.bold(),
            tool.category
        );
        println!("      {}", tool.description);
        if !tool.required_params.is_empty() {
            println!("      requires: {}", tool.required_params.join(", ").yellow());
        }
    }
}

/// One-line notice for a tool lifecycle event
pub fn show_event(event: &ToolEvent) {
    match event {
        ToolEvent::Started { .. } => eprintln!("{} {}", "…".cyan(), event.message()),
        ToolEvent::Succeeded { .. } => eprintln!("{} {}", "✓".green(), event.message()),
        ToolEvent::Failed { .. } => eprintln!("{} {}", "✗".red(), event.message().red()),
    }
}

pub fn show_execution(execution: &ToolExecution) {
    println!(
        "  {} {} {}",
        "✓".green(),
        execution.message,
        format!("({}ms, {})", execution.duration_ms, execution.timestamp.to_rfc3339()).dimmed()
    );
}

pub fn show_stats(stats: &ToolStats) {
    println!(
        "\n{} {} ok, {} failed, avg {:.0}ms",
        "Summary:".bold(),
        stats.successful_executions.to_string().green(),
        stats.failed_executions.to_string().red(),
        stats.average_duration_ms()
    );
}

fn difficulty_label(difficulty: Difficulty) -> ColoredString {
    match difficulty {
        Difficulty::Basic => "basic".green(),
        Difficulty::Intermediate => "intermediate".yellow(),
        Difficulty::Advanced => "advanced".red(),
    }
}

pub fn show_flows(flows: &[&AnalysisFlow]) {
    if flows.is_empty() {
        println!("{}", "No analysis flows found".dimmed());
        return;
    }

    for flow in flows {
        println!(
            "  • {} {} {}",
            flow.id.green(),
            flow.name.bold(),
            format!("[{}, {}]", flow.industry, flow.total_estimated_time).dimmed()
        );
    }
}

pub fn show_flow(flow: &AnalysisFlow) {
    heading(flow.name);
    println!("{}", flow.description);
    println!("{} {}", "Goal:".bold(), flow.business_goal);
    println!("{} {}", "Estimated time:".bold(), flow.total_estimated_time);

    for (index, step) in flow.steps.iter().enumerate() {
        section(&format!("{}. {} ({})", index + 1, step.name, step.model_type));
        println!(
            "   {} | {}",
            difficulty_label(step.difficulty),
            step.estimated_processing_time
        );
        for field in step.input_fields {
            let required = if field.required { " (*)".red() } else { "".normal() };
            println!("   - {}{}: {}", field.name, required, field.description.dimmed());
        }
    }

    println!("\n{} {}\n", "Tools:".bold(), flow.recommended_tools.join(", "));
}

pub fn show_parameters(response: &ModelParametersResponse) {
    heading(&format!("Parameters for {}", response.model_id));

    if response.parameters.is_empty() {
        println!("  {}", "(no parameters)".dimmed());
        return;
    }

    for name in &response.parameters {
        match response.metadata.get(name) {
            Some(meta) => {
                let required = if meta.required { " (*)".red() } else { "".normal() };
                println!(
                    "  {}{} {} {}",
                    name.green(),
                    required,
                    format!("<{}>", meta.value_type).dimmed(),
                    meta.description
                );
            }
            None => println!("  {}", name.green()),
        }
    }
    println!();
}

/// Backend model entries are free-form; show the type and any name
pub fn show_models(industry: &str, models: &[serde_json::Value]) {
    heading(&format!("Models for {}", industry));

    if models.is_empty() {
        println!("  {}", "(no models)".dimmed());
        return;
    }

    for model in models {
        let model_type = model
            .get("model_type")
            .or_else(|| model.get("id"))
            .and_then(|v| v.as_str())
            .unwrap_or("?");
        match model.get("name").or_else(|| model.get("category")).and_then(|v| v.as_str()) {
            Some(detail) => println!("  {} {}", model_type.green(), detail.dimmed()),
            None => println!("  {}", model_type.green()),
        }
    }
    println!();
}

pub fn show_roi(industry: &str, inputs: &RoiInputs, estimate: &RoiEstimate) {
    heading(&format!("ROI estimate ({})", industry));
    println!("  Initial investment:   {:.0}", inputs.initial_investment);
    println!("  Annual savings:       {:.0}", inputs.annual_savings);
    println!("  Implementation time:  {} months", inputs.implementation_months);
    println!("  Risk level:           {}/5", inputs.risk_level);
    println!();
    println!("  Raw ROI:              {:.1}%", estimate.raw_roi);

    let adjusted = format!("{:.1}%", estimate.adjusted_roi);
    let adjusted = if estimate.adjusted_roi >= 0.0 {
        adjusted.green().bold()
    } else {
        adjusted.red().bold()
    };
    println!("  Adjusted ROI:         {}\n", adjusted);
}

pub fn show_config(config: &Config, path: Option<&Path>) {
    heading("analitica configuration");

    if let Some(path) = path {
        println!("File:");
        println!("  {}", path.display());
        println!();
    }

    println!("API:");
    println!("  Base URL:  {}", config.api.base_url);
    println!("  Timeout:   {}s", config.api.timeout_secs);
    println!();

    println!("Tools:");
    println!("  Latency:       {}ms", config.tools.latency_ms);
    println!("  Failure rate:  {:.0}%", config.tools.failure_rate * 100.0);
    println!();

    println!("Templates:");
    match &config.templates.output_dir {
        Some(dir) => println!("  Output dir:  {}", dir.display()),
        None => println!("  Output dir:  {}", "(current directory)".dimmed()),
    }
    println!();
}

pub fn show_error(message: &str) {
    eprintln!("{} {}", "error:".red().bold(), message);
}
