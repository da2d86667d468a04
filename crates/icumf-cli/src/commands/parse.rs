//! Implementation of the `icumf parse` command.

use icumf::{parse_template, tokenize};
use miette::Report;

use crate::output::IcumfDiagnostic;

/// Arguments for the parse command.
#[derive(Debug, clap::Args)]
pub struct ParseArgs {
    /// Template to parse
    pub template: String,

    /// Print the token stream instead of the parse tree
    #[arg(long)]
    pub tokens: bool,
}

/// Run the parse command.
pub fn run_parse(args: ParseArgs) -> miette::Result<i32> {
    let json = if args.tokens {
        tokenize(&args.template).map(|tokens| serde_json::to_string_pretty(&tokens))
    } else {
        parse_template(&args.template).map(|message| serde_json::to_string_pretty(&message))
    };

    match json {
        Ok(serialized) => {
            let serialized =
                serialized.map_err(|e| miette::miette!("Cannot serialize output: {}", e))?;
            println!("{}", serialized);
            Ok(exitcode::OK)
        }
        Err(e) => {
            let diagnostic =
                IcumfDiagnostic::from_error("template", &args.template, &icumf::Error::from(e));
            eprintln!("{:?}", Report::new(diagnostic));
            Ok(exitcode::DATAERR)
        }
    }
}
