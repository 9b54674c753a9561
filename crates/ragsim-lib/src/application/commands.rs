//! Command execution handlers
//!
//! Every handler follows the same shape: get matrices (scenario file or
//! interactive prompts), run one engine, render its structured result. No
//! algorithmic state lives here and nothing is shared between invocations.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use crate::analysis::{
    DeadlockResult, SafetyResult, SafetyStep, run_deadlock_check, run_safety_check_observed,
};
use crate::application::cli::ReportFormat;
use crate::application::{CliConfig, Commands};
use crate::display::{self, EngineChoice, StatusDisplay, interactive};
use crate::primitives::{Edge, EdgeKind, NodeId};
use crate::scenario::Scenario;

/// Execute CLI commands
pub fn execute_command(config: CliConfig) -> Result<()> {
    display::apply_color_mode(config.app_config.color);
    let status = StatusDisplay::new();

    let command = match config.command {
        Some(cmd) => cmd,
        None => {
            status.message("ragsim - resource allocation graph analysis");
            status.subtle("Run 'ragsim --help' for usage information");
            return Ok(());
        }
    };

    match command {
        Commands::Check { scenario, report } => handle_check(&status, &scenario, report),
        Commands::Detect { scenario, report } => handle_detect(&status, &scenario, report),
        Commands::Interactive => handle_interactive(&status),
    }
}

/// JSON shape of a `check` run
#[derive(Serialize)]
struct SafetyReport<'a> {
    safe: bool,
    sequence: &'a [NodeId],
    steps: &'a [SafetyStep],
    edges: &'a [Edge],
}

/// JSON shape of a `detect` run
#[derive(Serialize)]
struct DeadlockReport<'a> {
    has_cycle: bool,
    cycle: &'a [Edge],
    edges: &'a [Edge],
}

fn handle_check(status: &StatusDisplay, path: &Path, report: ReportFormat) -> Result<()> {
    let scenario = Scenario::from_path(path)
        .with_context(|| format!("failed to load scenario {}", path.display()))?;
    let safety = scenario.safety()?;

    let mut steps = Vec::new();
    let result = run_safety_check_observed(
        scenario.processes,
        scenario.resources,
        &scenario.allocation,
        &safety.max_need,
        &safety.available,
        |step| steps.push(step.clone()),
    )?;

    match report {
        ReportFormat::Json => print_json(&SafetyReport {
            safe: result.safe,
            sequence: &result.sequence,
            steps: &steps,
            edges: &result.edges,
        }),
        ReportFormat::Text => {
            render_safety(status, &result, &steps);
            Ok(())
        }
    }
}

fn handle_detect(status: &StatusDisplay, path: &Path, report: ReportFormat) -> Result<()> {
    let scenario = Scenario::from_path(path)
        .with_context(|| format!("failed to load scenario {}", path.display()))?;
    let deadlock = scenario.deadlock()?;

    let result = run_deadlock_check(
        scenario.processes,
        scenario.resources,
        &scenario.allocation,
        &deadlock.request,
    )?;

    match report {
        ReportFormat::Json => print_json(&DeadlockReport {
            has_cycle: result.has_cycle,
            cycle: &result.cycle,
            edges: &result.edges,
        }),
        ReportFormat::Text => {
            render_deadlock(status, &result);
            Ok(())
        }
    }
}

fn handle_interactive(status: &StatusDisplay) -> Result<()> {
    match interactive::prompt_engine()? {
        EngineChoice::Safety => {
            let (processes, resources) = interactive::prompt_counts()?;
            let allocation = interactive::prompt_matrix("allocation", processes, resources)?;
            let max_need = interactive::prompt_matrix("max need", processes, resources)?;
            let available = interactive::prompt_vector("available", resources)?;

            let mut steps = Vec::new();
            let result = run_safety_check_observed(
                processes,
                resources,
                &allocation,
                &max_need,
                &available,
                |step| steps.push(step.clone()),
            )?;
            render_safety(status, &result, &steps);
        }
        EngineChoice::CircularWait => {
            let (processes, resources) = interactive::prompt_counts()?;
            let allocation =
                interactive::prompt_matrix("allocation (0/1)", processes, resources)?;
            let request = interactive::prompt_matrix("request (0/1)", processes, resources)?;

            let result = run_deadlock_check(processes, resources, &allocation, &request)?;
            render_deadlock(status, &result);
        }
    }
    Ok(())
}

fn render_safety(status: &StatusDisplay, result: &SafetyResult, steps: &[SafetyStep]) {
    for step in steps {
        status.info(&format!("{} completes, work = {:?}", step.process, step.work));
    }

    if result.safe {
        status.success("safe state", &join_sequence(&result.sequence));
    } else if result.sequence.is_empty() {
        status.error("unsafe state", "no process can complete");
    } else {
        status.error(
            "unsafe state",
            &format!("stalled after {}", join_sequence(&result.sequence)),
        );
    }

    render_edges(status, &result.edges);
}

fn render_deadlock(status: &StatusDisplay, result: &DeadlockResult) {
    if result.has_cycle {
        status.error(
            "deadlock",
            &format!("circular wait over {} edges", result.cycle.len()),
        );
        status.list(&result.cycle.iter().map(edge_label).collect::<Vec<_>>());
    } else {
        status.success("no deadlock", "the allocation graph is acyclic");
    }

    render_edges(status, &result.edges);
}

fn render_edges(status: &StatusDisplay, edges: &[Edge]) {
    if edges.is_empty() {
        return;
    }
    status.subtle("graph edges:");
    status.list(&edges.iter().map(edge_label).collect::<Vec<_>>());
}

fn join_sequence(sequence: &[NodeId]) -> String {
    sequence
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" → ")
}

fn edge_label(edge: &Edge) -> String {
    let kind = match edge.kind {
        EdgeKind::Allocation => "allocation",
        EdgeKind::Request => "request",
    };
    match edge.weight {
        Some(weight) => format!("{edge} ({kind} {weight})"),
        None => format!("{edge} ({kind})"),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    include!("commands.test.rs");
}
