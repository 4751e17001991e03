//! Render command implementation.
//!
//! Renders each identifier to `<output>/<identifier>.png`.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use log::debug;

use super::StyleArgs;
use crate::error::{IdenticonError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::{render, write_png};
use crate::types::Code;

/// Render identicons to PNG files
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Identifiers to render
    #[arg(required = true)]
    pub identifiers: Vec<String>,

    /// Output directory (default: dist, or `output` from the config)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub style: StyleArgs,
}

pub fn run(args: RenderArgs, printer: &Printer) -> Result<()> {
    let resolved = args.style.resolve()?;
    let output = args.output.unwrap_or(resolved.config.output);

    if let Some(warning) = size_warning(resolved.size) {
        printer.warning("Warning", &warning);
    }

    if !output.exists() {
        fs::create_dir_all(&output).map_err(|e| IdenticonError::Io {
            path: output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    for identifier in &args.identifiers {
        let code = Code::derive(identifier);
        let path = output.join(file_name(identifier));

        printer.status(
            "Rendering",
            &format!("{} {}", identifier, printer.dim(&format!("({})", code))),
        );
        debug!("{} -> {}", identifier, path.display());

        let image = render(code, resolved.size, &resolved.settings);
        write_png(&image, &path)?;
    }

    printer.success(
        "Finished",
        &format!(
            "{} to {}",
            plural(args.identifiers.len(), "identicon", "identicons"),
            printer.cyan(&display_path(&output))
        ),
    );

    Ok(())
}

/// Tiles are `size / 3` wide, so other sizes put tile edges mid-pixel.
fn size_warning(size: u16) -> Option<String> {
    (size % 3 != 0).then(|| {
        format!(
            "size {} is not divisible by 3, tile edges will be anti-aliased seams",
            size
        )
    })
}

/// File name for an identifier. Path separators are replaced so every file
/// lands directly in the output directory.
fn file_name(identifier: &str) -> String {
    let stem: String = identifier
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    format!("{}.png", stem)
}
