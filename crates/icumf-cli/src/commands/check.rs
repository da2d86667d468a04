//! Implementation of the `icumf check` command.

use icumf::{CldrLocaleTable, compile};
use miette::Report;
use owo_colors::{OwoColorize, Stream::Stdout};
use serde::Serialize;

use crate::output::IcumfDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Templates to check
    #[arg(required = true)]
    pub templates: Vec<String>,

    /// Language the templates are compiled for
    #[arg(long, env = "ICUMF_LANG", default_value = "en")]
    pub lang: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one checked template.
#[derive(Serialize)]
pub struct CheckResult {
    pub template: String,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let table = CldrLocaleTable::new();
    let mut results = Vec::with_capacity(args.templates.len());

    for (index, template) in args.templates.iter().enumerate() {
        let outcome = compile(template, &args.lang, &table);
        tracing::debug!(index, ok = outcome.is_ok(), "checked template");

        if !args.json {
            match &outcome {
                Ok(_) => println!("{}", "ok".if_supports_color(Stdout, |t| t.green())),
                Err(e) => {
                    let name = format!("template #{}", index + 1);
                    eprintln!(
                        "{:?}",
                        Report::new(IcumfDiagnostic::from_error(&name, template, e))
                    );
                }
            }
        }

        results.push(CheckResult {
            template: template.clone(),
            ok: outcome.is_ok(),
            error: outcome.err().map(|e| e.to_string()),
        });
    }

    if args.json {
        let json = serde_json::to_string_pretty(&results)
            .map_err(|e| miette::miette!("Cannot serialize results: {}", e))?;
        println!("{}", json);
    }

    if results.iter().all(|r| r.ok) {
        Ok(exitcode::OK)
    } else {
        Ok(exitcode::DATAERR)
    }
}
