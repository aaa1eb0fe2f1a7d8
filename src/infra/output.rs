use crate::domain::models::AggregateSummary;
use crossterm::{
    ExecutableCommand,
    style::{Color, ResetColor, SetForegroundColor},
};
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Scoped owner of the destination file. `create` truncates and writes the
/// global header; the underlying handle stays open until `finish` (or drop)
/// so the whole run writes through one buffered stream.
pub struct OutputDocument {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl OutputDocument {
    pub fn create(path: &Path, header: &str) -> anyhow::Result<Self> {
        debug!("Creating output document: {}", path.display());
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(header.as_bytes())?;
        Ok(Self {
            writer,
            path: path.to_path_buf(),
        })
    }

    pub fn append(&mut self, record: &str) -> anyhow::Result<()> {
        self.writer.write_all(record.as_bytes())?;
        Ok(())
    }

    pub fn finish(mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        info!("Output written to {}", self.path.display());
        Ok(())
    }
}

pub fn report_start(root: &Path) -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    stdout.execute(SetForegroundColor(Color::Cyan))?;
    writeln!(stdout, "🚀 Starting aggregation of {}...", root.display())?;
    stdout.execute(ResetColor)?;
    Ok(())
}

pub fn report_included(relative_path: &str) -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    writeln!(stdout, "✅ Added: {}", relative_path)?;
    Ok(())
}

pub fn report_skipped(relative_path: &str) -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    stdout.execute(SetForegroundColor(Color::Yellow))?;
    writeln!(stdout, "⚠️  Skipped {} (Error reading file)", relative_path)?;
    stdout.execute(ResetColor)?;
    Ok(())
}

pub fn report_summary(summary: &AggregateSummary) -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", "=".repeat(50))?;
    stdout.execute(SetForegroundColor(Color::Green))?;
    writeln!(stdout, "🎉 Success! Aggregated {} files.", summary.included)?;
    stdout.execute(ResetColor)?;
    writeln!(stdout, "📄 Output saved to: {}", summary.output_path.display())?;
    Ok(())
}
