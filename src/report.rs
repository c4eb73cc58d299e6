// src/report.rs

use crate::error::BenchError;
use crate::model::BenchResult;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes `result` to `path` in the fixed report format. On any I/O failure
/// the file must not be considered valid.
pub fn write(result: &BenchResult, path: &Path) -> Result<(), BenchError> {
    let wrap = |source: io::Error| BenchError::Report {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(wrap)?;
    let mut writer = BufWriter::new(file);
    render(result, &mut writer).map_err(wrap)?;
    writer.flush().map_err(wrap)
}

/// One row per sample, oldest to newest, fields whitespace-separated with
/// fixed-width right-aligned integers. The header layout is kept stable so
/// reports from different engines stay line-comparable.
fn render<W: Write>(result: &BenchResult, w: &mut W) -> io::Result<()> {
    writeln!(w, "# Fields (separated by one or more spaces):")?;
    writeln!(w, "# 1. hash of the old commit")?;
    writeln!(w, "# 2. hash of the new commit")?;
    writeln!(w, "# 3. number of files changed between both commits")?;
    writeln!(w, "# 4. number of files in the commit with more files")?;
    writeln!(
        w,
        "# 5. duration of the diff tree operation in nanoseconds (time to find what files were added, deleted or modified)"
    )?;
    writeln!(w, "#")?;
    writeln!(w, "# repository URL = {}", result.url)?;
    writeln!(w, "# date = {}", result.when.to_rfc2822())?;

    for sample in &result.data {
        writeln!(
            w,
            "{} {} {:9} {:9} {:14}",
            sample.hash_old,
            sample.hash_new,
            sample.n_files,
            sample.n_changes,
            sample.duration.as_nanos()
        )?;
    }

    Ok(())
}
