//! Generate command handler

use anyhow::{Context as _, Result};
use std::io::Read;
use std::sync::Arc;

use wcgen::cli::{OptionArgs, OutputArgs, SourceArgs};
use wcgen::input::{FileUpload, InputAggregator, Source};
use wcgen::orchestrator::{self, GenerationState, MemoryNavigator, Orchestrator};
use wcgen::settings::{split_list, RawOptions};
use wcgen::{Config, ResultPresenter};

use super::{present, Context};

/// Turn the source flags into a [`Source`]. `--text -` reads stdin.
pub fn resolve_source(args: &SourceArgs) -> Result<Source> {
    if let Some(text) = &args.text {
        if text == "-" {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read text from stdin")?;
            return Ok(Source::Text(buf));
        }
        return Ok(Source::Text(text.clone()));
    }
    if let Some(path) = &args.file {
        let upload = FileUpload::from_path(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        return Ok(Source::File(upload));
    }
    if let Some(url) = &args.url {
        return Ok(Source::Url(url.clone()));
    }
    anyhow::bail!("One of --text, --file or --url is required")
}

/// Config defaults with command-line flags layered on top.
pub fn effective_options(config: &Config, options: &OptionArgs) -> RawOptions {
    config.generation.defaults.overlay(&options.to_raw())
}

/// Title from the flag, falling back to the configured default.
pub fn effective_title(config: &Config, options: &OptionArgs) -> String {
    options
        .title
        .clone()
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| config.generation.title.clone())
}

/// Tags from the flag, falling back to the configured defaults.
pub fn effective_tags(config: &Config, options: &OptionArgs) -> Vec<String> {
    match options.tags.as_deref() {
        Some(raw) => split_list(Some(raw)),
        None => config.generation.tags.clone(),
    }
}

#[cfg(not(tarpaulin_include))]
pub async fn handle(
    ctx: &Context,
    source: &SourceArgs,
    options: &OptionArgs,
    output: &OutputArgs,
) -> Result<()> {
    let config = &ctx.config;

    // Options are validated before any extraction call.
    let raw = effective_options(config, options);
    wcgen::normalize(&raw).map_err(wcgen::Error::from)?;

    let source = resolve_source(source)?;
    let aggregator = InputAggregator::new(ctx.api.clone(), config.api.upload_timeout());
    let extracted = aggregator
        .ingest(&source)
        .await
        .map_err(wcgen::Error::from)?;
    if let Some(title) = &extracted.title {
        eprintln!("Extracted text from: {}", title);
    }

    let request = orchestrator::prepare(&extracted.text, &raw)
        .map_err(wcgen::Error::from)?
        .with_title(effective_title(config, options))
        .with_tags(effective_tags(config, options));

    let mut orchestrator = Orchestrator::new(
        ctx.api.clone(),
        Box::new(MemoryNavigator::default()),
        config.api.request_timeout(),
    );
    orchestrator
        .generate(request)
        .await
        .map_err(wcgen::Error::from)?;

    match orchestrator.state() {
        GenerationState::Success(artifact) => {
            present(&ResultPresenter::new(Arc::clone(artifact)), output, config)
        }
        GenerationState::Error(err) => Err(wcgen::Error::from(err.clone()).into()),
        other => anyhow::bail!("Unexpected state after generation: {}", other.name()),
    }
}
