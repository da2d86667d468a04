//! Implementation of the `icumf eval` command.

use chrono::{DateTime, Utc};
use icumf::{CldrLocaleTable, Context, Value, compile};
use miette::Report;
use serde::Serialize;

use crate::output::IcumfDiagnostic;

/// Arguments for the eval command.
#[derive(Debug, clap::Args)]
pub struct EvalArgs {
    /// Language tag for evaluation (e.g., en, de, ru)
    #[arg(long, env = "ICUMF_LANG")]
    pub lang: String,

    /// Template string to evaluate
    #[arg(long, required = true)]
    pub template: String,

    /// Arguments in name=value format (repeatable)
    #[arg(short = 'a', long = "arg", value_parser = parse_key_val)]
    pub args: Vec<(String, String)>,

    /// Timestamp arguments in name=RFC3339 format (repeatable)
    #[arg(long = "time", value_parser = parse_timestamp)]
    pub times: Vec<(String, DateTime<Utc>)>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for eval results.
#[derive(Serialize)]
pub struct EvalResult {
    pub result: String,
}

/// Parse a key=value argument string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid argument format '{}': expected name=value", s))?;
    Ok((name.to_string(), value.to_string()))
}

/// Parse a name=RFC3339 timestamp argument.
fn parse_timestamp(s: &str) -> Result<(String, DateTime<Utc>), String> {
    let (name, value) = parse_key_val(s)?;
    let timestamp = DateTime::parse_from_rfc3339(&value)
        .map_err(|e| format!("invalid timestamp '{}': {}", value, e))?;
    Ok((name, timestamp.with_timezone(&Utc)))
}

/// Integers first, then floats, otherwise the raw string.
fn parse_value(raw: String) -> Value {
    if let Ok(n) = raw.parse::<i64>() {
        Value::from(n)
    } else if let Ok(f) = raw.parse::<f64>() {
        Value::from(f)
    } else {
        Value::from(raw)
    }
}

/// Run the eval command.
pub fn run_eval(args: EvalArgs) -> miette::Result<i32> {
    let table = CldrLocaleTable::new();
    let message = match compile(&args.template, &args.lang, &table) {
        Ok(message) => message,
        Err(e) => {
            let diagnostic = IcumfDiagnostic::from_error("template", &args.template, &e);
            eprintln!("{:?}", Report::new(diagnostic));
            return Ok(exitcode::DATAERR);
        }
    };

    let mut ctx: Context = args
        .args
        .into_iter()
        .map(|(k, v)| (k, parse_value(v)))
        .collect();
    for (name, timestamp) in args.times {
        ctx.set(name, timestamp);
    }
    tracing::debug!(arguments = ctx.len(), language = message.language(), "evaluating");

    match message.format(&mut ctx) {
        Ok(result) => {
            if args.json {
                let output = EvalResult { result };
                let json = serde_json::to_string_pretty(&output)
                    .map_err(|e| miette::miette!("Cannot serialize result: {}", e))?;
                println!("{}", json);
            } else {
                println!("{}", result);
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                let output = serde_json::json!({
                    "error": e.to_string()
                });
                let json = serde_json::to_string_pretty(&output)
                    .map_err(|e| miette::miette!("Cannot serialize error: {}", e))?;
                eprintln!("{}", json);
            } else {
                eprintln!("Evaluation error: {}", e);
            }
            Ok(exitcode::DATAERR)
        }
    }
}
