use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::calc::performance::{calculate_build_performance, PerformanceResult};
use crate::config::AppConfig;
use crate::data::database::GameDatabase;
use crate::data::loader::{load_dir, load_dir_with_report};
use crate::data::validate::ValidationSeverity;
use crate::error::CalcError;
use crate::parallel::{evaluate_batch, WorkerPool};
use crate::server;
use crate::state::request::CalcRequest;

const USAGE: &str = "usage: mhrb <serve|calculate|batch|validate>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Serve,
    Calculate,
    Batch,
    Validate,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("serve") => Some(Command::Serve),
        Some("calculate") => Some(Command::Calculate),
        Some("batch") => Some(Command::Batch),
        Some("validate") => Some(Command::Validate),
        _ => None,
    }
}

pub fn run_with_args(args: &[String], config: &AppConfig) -> i32 {
    match parse_command(args) {
        Some(Command::Serve) => handle_serve(config),
        Some(Command::Calculate) => handle_calculate(args, config),
        Some(Command::Batch) => handle_batch(args, config),
        Some(Command::Validate) => handle_validate(args, config),
        None => {
            eprintln!("{USAGE}");
            2
        }
    }
}

fn handle_serve(config: &AppConfig) -> i32 {
    match serve(config) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("server error: {err:#}");
            1
        }
    }
}

fn serve(config: &AppConfig) -> anyhow::Result<()> {
    let db = load_database(config)?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("unable to start async runtime")?;
    runtime
        .block_on(server::run_server(config.bind, db))
        .with_context(|| format!("unable to serve on {}", config.bind))
}

fn handle_calculate(args: &[String], config: &AppConfig) -> i32 {
    let Some(path) = positional(args).first().copied().map(PathBuf::from) else {
        eprintln!("usage: mhrb calculate <request.(json|yaml)> [--table]");
        return 2;
    };
    let as_table = has_flag(args, "--table");

    let outcome = load_database(config).and_then(|db| {
        let request: CalcRequest = read_request_file(&path)?;
        calculate_build_performance(&db, &request.build, &request.calc_state)
            .with_context(|| format!("unable to calculate '{}'", path.display()))
    });
    let result = match outcome {
        Ok(result) => result,
        Err(err) => {
            eprintln!("calculate failed: {err:#}");
            return 1;
        }
    };

    if as_table {
        println!("{}", SummaryRow::HEADER.join("\t"));
        println!("{}", SummaryRow::from(&result).to_tsv());
        return 0;
    }
    match serde_json::to_string_pretty(&result) {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize performance result: {err}");
            1
        }
    }
}

fn handle_batch(args: &[String], config: &AppConfig) -> i32 {
    let Some(path) = positional(args).first().copied().map(PathBuf::from) else {
        eprintln!("usage: mhrb batch <requests.(json|yaml)> [--csv]");
        return 2;
    };
    let as_csv = has_flag(args, "--csv");

    let outcome = load_database(config).and_then(|db| {
        let requests: Vec<CalcRequest> = read_request_file(&path)?;
        let pool = WorkerPool::with_workers(config.workers);
        let results = evaluate_batch(&db, &requests, &pool).context("unable to build worker pool")?;
        Ok(results)
    });
    let results = match outcome {
        Ok(results) => results,
        Err(err) => {
            eprintln!("batch failed: {err:#}");
            return 1;
        }
    };
    let failures = results.iter().filter(|result| result.is_err()).count();

    let written = if as_csv {
        write_batch_csv(&results)
    } else {
        let entries: Vec<BatchEntry> = results.iter().enumerate().map(BatchEntry::from).collect();
        serde_json::to_string_pretty(&entries)
            .map(|payload| println!("{payload}"))
            .context("failed to serialize batch results")
    };
    if let Err(err) = written {
        eprintln!("batch failed: {err:#}");
        return 1;
    }

    if failures > 0 {
        eprintln!("{failures} of {} request(s) failed", results.len());
        return 1;
    }
    0
}

fn handle_validate(args: &[String], config: &AppConfig) -> i32 {
    let dir = positional(args)
        .first()
        .copied()
        .map(PathBuf::from)
        .unwrap_or_else(|| config.data_dir.clone());

    let outcome = match load_dir_with_report(&dir) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("validation failed: {err}");
            return 1;
        }
    };
    let report = outcome.report;
    for diag in &report.diagnostics {
        println!("{}\t{}\t{}", diag.severity, diag.context, diag.message);
    }

    let errors = report.count(ValidationSeverity::Error);
    let warnings = report.count(ValidationSeverity::Warning);
    if report.has_errors() {
        eprintln!(
            "validation failed: {} ({errors} error(s), {warnings} warning(s))",
            dir.display()
        );
        return 1;
    }
    println!(
        "validation passed: {} ({} weapon(s), {warnings} warning(s))",
        dir.display(),
        outcome.database.weapon_count()
    );
    0
}

fn load_database(config: &AppConfig) -> anyhow::Result<Arc<GameDatabase>> {
    load_dir(&config.data_dir)
        .with_context(|| format!("unable to load game data from '{}'", config.data_dir.display()))
}

/// JSON unless the extension says YAML.
fn read_request_file<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("unable to read '{}'", path.display()))?;
    let is_yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml" | "yml")
    );
    let parsed = if is_yaml {
        serde_yaml::from_str(&raw).with_context(|| format!("invalid YAML in '{}'", path.display()))?
    } else {
        serde_json::from_str(&raw).with_context(|| format!("invalid JSON in '{}'", path.display()))?
    };
    Ok(parsed)
}

fn write_batch_csv(results: &[Result<PerformanceResult, CalcError>]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(io::stdout().lock());
    for (index, result) in results.iter().enumerate() {
        let row = match result {
            Ok(result) => CsvRow::success(index, SummaryRow::from(result)),
            Err(err) => CsvRow::failure(index, err),
        };
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn positional(args: &[String]) -> Vec<&str> {
    args.iter()
        .skip(2)
        .map(String::as_str)
        .filter(|arg| !arg.starts_with("--"))
        .collect()
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().skip(2).any(|arg| arg == flag)
}

#[derive(Debug, Clone)]
struct SummaryRow {
    category: String,
    weapon_id: String,
    effective_raw: f64,
    affinity: f64,
    raw_crit_modifier: f64,
    raw_sharpness_modifier: Option<f64>,
    hits_multiplier: f64,
    effective_defense: f64,
}

impl SummaryRow {
    const HEADER: [&'static str; 8] = [
        "category",
        "weapon_id",
        "effective_raw",
        "affinity",
        "raw_crit_modifier",
        "raw_sharpness_modifier",
        "hits_multiplier",
        "effective_defense",
    ];

    fn to_tsv(&self) -> String {
        let sharpness = self
            .raw_sharpness_modifier
            .map(|value| format!("{value:.4}"))
            .unwrap_or_else(|| "-".to_string());
        format!(
            "{}\t{}\t{:.4}\t{}\t{:.6}\t{}\t{:.6}\t{}",
            self.category,
            self.weapon_id,
            self.effective_raw,
            self.affinity,
            self.raw_crit_modifier,
            sharpness,
            self.hits_multiplier,
            self.effective_defense
        )
    }
}

impl From<&PerformanceResult> for SummaryRow {
    fn from(result: &PerformanceResult) -> Self {
        Self {
            category: result.category.to_string(),
            weapon_id: result.weapon_id.clone(),
            effective_raw: result.effective_raw,
            affinity: result.affinity,
            raw_crit_modifier: result.raw_crit_modifier,
            raw_sharpness_modifier: result.raw_sharpness_modifier,
            hits_multiplier: result.hits_multiplier,
            effective_defense: result.effective_defense,
        }
    }
}

/// One CSV line per request; summary columns are empty for failures.
#[derive(Debug, Default, Serialize)]
struct CsvRow {
    index: usize,
    status: &'static str,
    category: Option<String>,
    weapon_id: Option<String>,
    effective_raw: Option<f64>,
    affinity: Option<f64>,
    raw_crit_modifier: Option<f64>,
    raw_sharpness_modifier: Option<f64>,
    hits_multiplier: Option<f64>,
    effective_defense: Option<f64>,
    error: Option<String>,
}

impl CsvRow {
    fn success(index: usize, summary: SummaryRow) -> Self {
        Self {
            index,
            status: "ok",
            category: Some(summary.category),
            weapon_id: Some(summary.weapon_id),
            effective_raw: Some(summary.effective_raw),
            affinity: Some(summary.affinity),
            raw_crit_modifier: Some(summary.raw_crit_modifier),
            raw_sharpness_modifier: summary.raw_sharpness_modifier,
            hits_multiplier: Some(summary.hits_multiplier),
            effective_defense: Some(summary.effective_defense),
            error: None,
        }
    }

    fn failure(index: usize, err: &CalcError) -> Self {
        Self {
            index,
            status: "error",
            error: Some(err.to_string()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Serialize)]
struct BatchEntry<'a> {
    index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<&'a PerformanceResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> From<(usize, &'a Result<PerformanceResult, CalcError>)> for BatchEntry<'a> {
    fn from((index, result): (usize, &'a Result<PerformanceResult, CalcError>)) -> Self {
        match result {
            Ok(result) => Self {
                index,
                result: Some(result),
                error: None,
            },
            Err(err) => Self {
                index,
                result: None,
                error: Some(err.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn parses_every_command() {
        assert_eq!(parse_command(&args(&["mhrb", "serve"])), Some(Command::Serve));
        assert_eq!(
            parse_command(&args(&["mhrb", "calculate", "r.json"])),
            Some(Command::Calculate)
        );
        assert_eq!(parse_command(&args(&["mhrb", "batch"])), Some(Command::Batch));
        assert_eq!(parse_command(&args(&["mhrb", "validate"])), Some(Command::Validate));
        assert_eq!(parse_command(&args(&["mhrb", "simulate"])), None);
        assert_eq!(parse_command(&args(&["mhrb"])), None);
    }

    #[test]
    fn flags_are_not_positional() {
        let argv = args(&["mhrb", "calculate", "--table", "request.yaml"]);
        assert_eq!(positional(&argv), vec!["request.yaml"]);
        assert!(has_flag(&argv, "--table"));
        assert!(!has_flag(&argv, "--csv"));
    }

    #[test]
    fn unknown_command_is_a_usage_error() {
        assert_eq!(run_with_args(&args(&["mhrb", "nope"]), &AppConfig::default()), 2);
    }

    #[test]
    fn calculate_without_path_is_a_usage_error() {
        assert_eq!(run_with_args(&args(&["mhrb", "calculate"]), &AppConfig::default()), 2);
    }
}
