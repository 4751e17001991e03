//! Code command implementation.
//!
//! Prints the 64-bit code for each identifier, or the full decoded recipe
//! as JSON lines.

use std::io::{self, Write};

use clap::Args;
use serde::Serialize;

use crate::error::{IdenticonError, Result};
use crate::types::{Code, Recipe};

/// Print the code (and optionally the decoded recipe) for identifiers
#[derive(Args, Debug)]
pub struct CodeArgs {
    /// Identifiers to hash
    #[arg(required = true)]
    pub identifiers: Vec<String>,

    /// Emit one JSON object per identifier, including the recipe
    #[arg(long)]
    pub json: bool,
}

/// One line of `--json` output.
#[derive(Debug, Serialize)]
struct CodeReport<'a> {
    identifier: &'a str,
    code: Code,
    recipe: Recipe,
}

pub fn run(args: CodeArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_reports(&args, &mut out)
}

fn write_reports<W: Write>(args: &CodeArgs, out: &mut W) -> Result<()> {
    for identifier in &args.identifiers {
        let code = Code::derive(identifier);

        if args.json {
            let report = CodeReport {
                identifier,
                code,
                recipe: Recipe::decode(code),
            };
            let line = serde_json::to_string(&report).map_err(|e| IdenticonError::Encode {
                message: format!("Failed to serialize recipe: {}", e),
            })?;
            writeln!(out, "{}", line)?;
        } else {
            writeln!(out, "{}  {}", code, identifier)?;
        }
    }

    Ok(())
}
