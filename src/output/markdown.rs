//! Markdown report generation
//!
//! Renders extracted records as a flat Markdown document, one block per record.
//! Field contents are written verbatim; nothing is escaped.

use crate::extract::Record;
use crate::output::traits::{OutputError, OutputResult};
use std::path::Path;

/// Writes the rendered report for `records` to `output_path`
///
/// Missing parent directories are created. The file is written in one go.
pub fn write_report(records: &[Record], output_path: &Path) -> OutputResult<()> {
    let write_err = |source| OutputError::Write {
        path: output_path.display().to_string(),
        source,
    };

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    std::fs::write(output_path, render_report(records)).map_err(write_err)
}

/// Formats all records, in the order given
pub fn render_report(records: &[Record]) -> String {
    let mut md = String::new();
    for record in records {
        md.push_str(&render_record(record));
    }
    md
}

/// Formats one record block, terminated by a blank line
pub fn render_record(record: &Record) -> String {
    let field = |value: &Option<String>| value.as_deref().unwrap_or("").to_string();

    let mut md = String::new();
    md.push_str(&format!("### Title: {}\n", field(&record.title)));
    md.push_str(&format!("> **arXiv**: {}\n", field(&record.identifier)));
    md.push_str(&format!("> **Authors**: {}\n", field(&record.authors)));
    md.push_str(&format!(
        "> **First submission**: {}\n",
        field(&record.first_submission)
    ));
    md.push_str(&format!(
        "> **First announcement**: {}\n",
        field(&record.first_announcement)
    ));
    md.push_str(&format!("> **Categories**: {}\n", field(&record.categories)));
    md.push_str(&format!("> **Abstract**: {}\n\n", field(&record.abstract_text)));
    md
}
