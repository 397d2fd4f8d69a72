//! Export command handler

use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};

use wcgen::cli::ExportFormat;

use super::Context;

/// `wordcloud_<id>.<ext>`, with path separators in the id replaced.
pub fn default_file_name(id: &str, format: ExportFormat) -> String {
    let safe: String = id
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    format!("wordcloud_{}.{}", safe, format.extension())
}

#[cfg(not(tarpaulin_include))]
pub async fn handle(
    ctx: &Context,
    id: &str,
    format: ExportFormat,
    output: Option<&Path>,
) -> Result<()> {
    let presenter = ctx.open_permalink(id).await?;
    let target: PathBuf = match output {
        Some(path) => path.to_path_buf(),
        None => ctx
            .config
            .export_directory()
            .join(default_file_name(id, format)),
    };
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    match format {
        ExportFormat::Png => presenter.export_download()?.save_as(&target)?,
        ExportFormat::Csv => std::fs::write(&target, presenter.export_csv()?)
            .with_context(|| format!("Failed to write {}", target.display()))?,
    }
    println!("Exported {}", target.display());
    Ok(())
}
