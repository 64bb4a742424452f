//! Extract command implementation

use std::path::Path;

use region_blocks::extract;
use region_fs::io;

use crate::context::absolute;
use crate::error::Result;

/// Print `file`, or only `region` of it, exactly as it would be embedded.
pub fn run_extract(cwd: &Path, file: &Path, region: Option<&str>) -> Result<()> {
    let path = absolute(cwd, file);
    let content = io::read_text(&path)?;
    let text = extract(&content, region)?;
    println!("{text}");
    Ok(())
}
