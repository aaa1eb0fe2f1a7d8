use std::collections::HashSet;
use std::path::PathBuf;

/// Everything one aggregation run needs: where to scan, where to write,
/// and the three filter sets.
#[derive(Debug, Clone)]
pub struct AggregateConfig {
    pub root_path: PathBuf,
    pub output_path: PathBuf,
    pub ignore_dirs: HashSet<String>,
    pub ignore_files: HashSet<String>,
    pub allowed_extensions: Vec<String>,
}

#[derive(Debug)]
pub struct AggregateSummary {
    pub included: usize,
    pub skipped: usize,
    pub output_path: PathBuf,
}
