//! Render command implementation

use std::path::Path;

use colored::Colorize;
use region_content::Embedder;
use region_fs::io;

use crate::context::absolute;
use crate::error::Result;

/// Embed referenced code into `document` and write the result.
///
/// Broken references are rendered inline and reported on stderr; they do
/// not fail the command.
pub fn run_render(
    cwd: &Path,
    embedder: &Embedder,
    document: &Path,
    output: Option<&Path>,
) -> Result<()> {
    let document = absolute(cwd, document);
    let embedded = embedder.embed_file(&document)?;

    match output {
        Some(output) => {
            let output = absolute(cwd, output);
            io::write_text(&output, &embedded.text)?;
            eprintln!(
                "{} {} ({} embedded)",
                "Wrote".green().bold(),
                output,
                embedded.report.embedded
            );
        }
        None => print!("{}", embedded.text),
    }

    if !embedded.report.is_clean() {
        eprintln!(
            "{} {} code block(s) in {} could not be embedded",
            "warning:".yellow().bold(),
            embedded.report.failures.len(),
            document
        );
    }

    Ok(())
}
