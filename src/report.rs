//! Formats the summary report and writes the output file.
use anyhow::Result;
use std::io::{self, Write};

use crate::set::LineSet;

/// Writes the report to `out`: the counts block, a blank line, the section
/// separator, then each unique line. Every line of output (report lines
/// included) uses the line terminator of the input's first line, and a UTF-8
/// Byte Order Mark is emitted first if the input had one.
pub fn write_report(lines: &LineSet, mut out: impl Write) -> Result<()> {
    let eol = lines.line_terminator();
    out.write_all(lines.bom())?;
    write_counts(&mut out, lines, eol)?;
    out.write_all(eol)?;
    write!(out, "--- Уникальные строки ---")?;
    out.write_all(eol)?;
    for line in lines.iter() {
        out.write_all(line)?;
        out.write_all(eol)?;
    }
    out.flush()?;
    Ok(())
}

/// Prints the counts block to the console.
pub fn print_summary(lines: &LineSet) -> Result<()> {
    write_counts(io::stdout().lock(), lines, b"\n")?;
    Ok(())
}

// The labels are padded so the three counts line up in one column.
fn write_counts(mut out: impl Write, lines: &LineSet, eol: &[u8]) -> io::Result<()> {
    write!(out, "=== Отчёт ===")?;
    out.write_all(eol)?;
    write!(out, "Всего строк:       {}", lines.total())?;
    out.write_all(eol)?;
    write!(out, "Уникальных строк:  {}", lines.unique_count())?;
    out.write_all(eol)?;
    write!(out, "Удалено дублей:    {}", lines.removed())?;
    out.write_all(eol)?;
    Ok(())
}
