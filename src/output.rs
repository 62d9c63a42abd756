//! Output file naming

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::order::parent_dir;

/// Prefix of every generated output file
pub const OUTPUT_PREFIX: &str = "MergedPdfFile_";

/// Timestamp layout: day, month, year, then 24h time
const TIMESTAMP_FORMAT: &str = "%d_%m_%Y_%H_%M_%S";

/// File name for a merge performed at `now`
pub fn merged_file_name(now: DateTime<Utc>) -> String {
    format!("{}{}.pdf", OUTPUT_PREFIX, now.format(TIMESTAMP_FORMAT))
}

/// Output path next to the first input file
pub fn output_path(first_input: &Path, now: DateTime<Utc>) -> PathBuf {
    parent_dir(first_input).join(merged_file_name(now))
}
