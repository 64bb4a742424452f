//! Check command implementation

use std::path::Path;

use colored::Colorize;
use region_content::{EmbedReport, Embedder};
use region_fs::NormalizedPath;
use serde::Serialize;
use walkdir::WalkDir;

use crate::context::absolute;
use crate::error::{CliError, Result};

/// Extensions treated as markdown when walking directories
const MARKDOWN_EXTENSIONS: &[&str] = &["md", "mdx", "markdown"];

/// Per-document result, as printed by `check --json`
#[derive(Debug, Serialize)]
struct DocumentReport {
    document: String,
    #[serde(flatten)]
    report: EmbedReport,
}

/// Expand `paths` into the markdown documents to check.
///
/// Files are taken as given; directories are walked recursively in file
/// name order.
pub fn collect_documents(cwd: &Path, paths: &[impl AsRef<Path>]) -> Result<Vec<NormalizedPath>> {
    let mut documents = Vec::new();

    for path in paths {
        let path = absolute(cwd, path.as_ref());
        if !path.is_dir() {
            documents.push(path);
            continue;
        }
        for entry in WalkDir::new(path.to_native()).sort_by_file_name() {
            let entry = entry?;
            if entry.file_type().is_file() && is_markdown(entry.path()) {
                documents.push(NormalizedPath::new(entry.path()));
            }
        }
    }

    Ok(documents)
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| MARKDOWN_EXTENSIONS.contains(&ext))
}

/// Embed every document in memory and report broken references.
///
/// Fails when at least one code block could not be embedded.
pub fn run_check(
    cwd: &Path,
    embedder: &Embedder,
    paths: &[impl AsRef<Path>],
    json: bool,
) -> Result<()> {
    let documents = collect_documents(cwd, paths)?;

    let mut reports = Vec::with_capacity(documents.len());
    for document in &documents {
        let embedded = embedder.embed_file(document)?;
        reports.push(DocumentReport {
            document: document.to_string(),
            report: embedded.report,
        });
    }

    let embedded: usize = reports.iter().map(|r| r.report.embedded).sum();
    let failed: usize = reports.iter().map(|r| r.report.failures.len()).sum();

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            for failure in &report.report.failures {
                println!(
                    "{}:{}: {} {}: {}",
                    report.document,
                    failure.line,
                    "error".red().bold(),
                    failure.path,
                    failure.message
                );
            }
        }
        let status = if failed == 0 {
            "ok".green().bold()
        } else {
            "failed".red().bold()
        };
        println!(
            "{}: {} document(s), {} block(s) embedded, {} failed",
            status,
            reports.len(),
            embedded,
            failed
        );
    }

    if failed > 0 {
        return Err(CliError::user(format!(
            "{failed} code block(s) could not be embedded"
        )));
    }
    Ok(())
}
