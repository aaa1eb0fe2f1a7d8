use crate::domain::models::{AggregateConfig, AggregateSummary};
use crate::infra::file_system::{read_file_contents, relative_display_path, walk_source_files};
use crate::infra::output::{self, OutputDocument};
use anyhow::bail;
use log::{debug, info, warn};
use std::path::Path;

/// Separator written after every record. Downstream parsers split on these
/// exact bytes, so they must never change.
pub const RECORD_DELIMITER: &str = "\n\n\n--- \n\n";

pub fn document_header(root: &Path) -> String {
    format!(
        "# GLEE SOURCE CODE AGGREGATION\n# Root: {}\n\n",
        root.display()
    )
}

pub fn format_record(relative_path: &str, content: &str) -> String {
    format!("### `/{}`\n\n{}{}", relative_path, content, RECORD_DELIMITER)
}

/// Suffix match, not `Path::extension`: the allowed set carries the dot
/// (".tsx", ".ps1"), and ".tsx" must not be mistaken for ".ts".
fn has_allowed_extension(file_name: &str, allowed_extensions: &[String]) -> bool {
    allowed_extensions
        .iter()
        .any(|ext| file_name.ends_with(ext.as_str()))
}

/// Walks `config.root_path`, appending one record per eligible file to the
/// output document. Read failures are contained per file: warn, skip,
/// continue. The only fatal condition is a missing root, checked before the
/// output file is opened.
pub fn run(config: &AggregateConfig) -> anyhow::Result<AggregateSummary> {
    if !config.root_path.is_dir() {
        bail!("root path not found: {}", config.root_path.display());
    }

    output::report_start(&config.root_path)?;
    info!("Starting aggregation of {}", config.root_path.display());

    let mut document =
        OutputDocument::create(&config.output_path, &document_header(&config.root_path))?;

    let mut included = 0usize;
    let mut skipped = 0usize;

    for path in walk_source_files(&config.root_path, &config.ignore_dirs) {
        let file_name = match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => continue,
        };

        if config.ignore_files.contains(&file_name) {
            debug!("Ignoring listed file: {}", path.display());
            continue;
        }

        if !has_allowed_extension(&file_name, &config.allowed_extensions) {
            continue;
        }

        let relative_path = relative_display_path(&config.root_path, &path);

        match read_file_contents(&path) {
            Ok(content) => {
                document.append(&format_record(&relative_path, &content))?;
                output::report_included(&relative_path)?;
                included += 1;
            }
            Err(e) => {
                warn!("Failed to read {}: {}", relative_path, e);
                output::report_skipped(&relative_path)?;
                skipped += 1;
            }
        }
    }

    document.finish()?;

    let summary = AggregateSummary {
        included,
        skipped,
        output_path: config.output_path.clone(),
    };

    output::report_summary(&summary)?;
    info!(
        "Aggregated {} files ({} skipped)",
        summary.included, summary.skipped
    );

    Ok(summary)
}
