//! Command handlers for the wcgen CLI.
//!
//! Each submodule handles one subcommand; dispatch stays in main.rs.

pub mod config;
pub mod dashboard;
pub mod export;
pub mod generate;
pub mod lookup;
pub mod show;

use anyhow::{Context as _, Result};
use serde::Serialize;
use std::sync::Arc;

use wcgen::artifact::{Sentiment, TextStatistics};
use wcgen::cli::OutputArgs;
use wcgen::clipboard::Copy;
use wcgen::orchestrator::{GenerationState, Location, MemoryNavigator, Orchestrator};
use wcgen::{Config, ErrorKind, HttpApi, ResultPresenter};

/// Config plus a backend client built from it.
pub struct Context {
    pub config: Config,
    pub api: Arc<HttpApi>,
}

impl Context {
    /// Build the command context, applying a `--api-url` override.
    pub fn new(mut config: Config, api_url: Option<&str>) -> Result<Self> {
        if let Some(url) = api_url {
            config.api.base_url = url.to_string();
            config
                .validate()
                .map_err(|e| anyhow::anyhow!("Invalid --api-url: {}", e))?;
        }
        let api = HttpApi::from_config(&config.api).context("Failed to create backend client")?;
        Ok(Self {
            config,
            api: Arc::new(api),
        })
    }

    /// Load a permalink artifact read-only.
    pub async fn open_permalink(&self, id: &str) -> Result<ResultPresenter> {
        let navigator = MemoryNavigator::new(Location::permalink(id));
        let mut orchestrator = Orchestrator::new(
            self.api.clone(),
            Box::new(navigator),
            self.config.api.request_timeout(),
        );
        match orchestrator.initialize().await {
            GenerationState::Success(artifact) => Ok(ResultPresenter::new(artifact.clone())),
            GenerationState::Error(err) => Err(wcgen::Error::from(err.clone()).into()),
            other => anyhow::bail!("Unexpected state after loading permalink: {}", other.name()),
        }
    }
}

/// Follow-up advice printed under a failure, chosen by its class.
pub fn hint(err: &wcgen::Error) -> Option<&'static str> {
    match err.kind() {
        ErrorKind::Validation | ErrorKind::Export => None,
        ErrorKind::Extraction => Some("Paste the text directly with --text instead."),
        ErrorKind::Network => {
            Some("Check that the backend at --api-url is reachable, then run the command again.")
        }
        ErrorKind::NotFound => Some("Check the identifier; the word cloud may have been removed."),
        ErrorKind::Clipboard => Some("Save the image with --save instead."),
    }
}

/// Truncate a string to a maximum length, adding ellipsis if needed.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    } else {
        s.chars().take(max_len).collect()
    }
}

/// Human-readable summary of an artifact.
pub fn render_summary(presenter: &ResultPresenter, top: usize) -> String {
    let artifact = presenter.artifact();
    let stats = presenter.stats();
    let mut out = String::new();

    if let Some(title) = &artifact.title {
        match presenter.created_label() {
            Some(created) => out.push_str(&format!("{} ({})\n", title, created)),
            None => out.push_str(&format!("{}\n", title)),
        }
    }

    let fmt_count = |v: Option<u64>| v.map_or_else(|| "-".to_string(), |n| n.to_string());
    out.push_str(&format!(
        "Words: {} total, {} unique, {} characters\n",
        fmt_count(stats.total_words),
        presenter.unique_word_count(),
        fmt_count(stats.text_length),
    ));

    match presenter.sentiment() {
        Some(s) => out.push_str(&format!(
            "Sentiment: polarity {:.2} ({}), subjectivity {:.2}\n",
            s.polarity,
            presenter.sentiment_label().as_str(),
            s.subjectivity
        )),
        None => out.push_str("Sentiment: Unknown\n"),
    }

    let ranked = presenter.ranked_frequencies(top);
    if !ranked.is_empty() {
        out.push_str("Top words:\n");
        let width = ranked
            .iter()
            .map(|(w, _)| w.chars().count().min(24))
            .max()
            .unwrap_or(0);
        for (word, count) in &ranked {
            out.push_str(&format!(
                "  {:<width$}  {}\n",
                truncate_string(word, 24),
                count,
                width = width
            ));
        }
    }
    if top < presenter.unique_word_count() {
        out.push_str(&format!(
            "Showing top {} words. Total: {} unique words\n",
            top,
            presenter.unique_word_count()
        ));
    }
    out
}

#[derive(Serialize)]
struct Summary<'a> {
    title: Option<&'a str>,
    created_at: Option<&'a str>,
    stats: &'a TextStatistics,
    unique_words: usize,
    sentiment: Option<&'a Sentiment>,
    sentiment_label: &'static str,
    top_words: Vec<(String, u64)>,
}

/// Artifact summary as pretty JSON.
pub fn render_json(presenter: &ResultPresenter, top: usize) -> Result<String> {
    let artifact = presenter.artifact();
    let summary = Summary {
        title: artifact.title.as_deref(),
        created_at: artifact.created_at.as_deref(),
        stats: presenter.stats(),
        unique_words: presenter.unique_word_count(),
        sentiment: presenter.sentiment(),
        sentiment_label: presenter.sentiment_label().as_str(),
        top_words: presenter.ranked_frequencies(top),
    };
    Ok(serde_json::to_string_pretty(&summary)?)
}

/// Print an artifact and run the requested exports.
///
/// Export failures are reported but never discard what was printed.
#[cfg(not(tarpaulin_include))]
pub fn present(presenter: &ResultPresenter, output: &OutputArgs, config: &Config) -> Result<()> {
    if output.json {
        println!("{}", render_json(presenter, output.top)?);
    } else {
        print!("{}", render_summary(presenter, output.top));
    }

    let mut failed = false;
    if output.save {
        match presenter
            .export_download_as(&config.export.file_name)
            .and_then(|action| action.save_in(&config.export_directory()))
        {
            Ok(path) => eprintln!("Saved {}", path.display()),
            Err(e) => {
                eprintln!("Error: {}", e);
                failed = true;
            }
        }
    }
    if output.copy {
        match presenter.export_clipboard(&Copy::new()) {
            Ok(result) => eprintln!("{}", result.message(&config.export.file_name)),
            Err(e) => {
                eprintln!("Error: {}", e);
                failed = true;
            }
        }
    }
    if failed {
        anyhow::bail!("Export failed");
    }
    Ok(())
}
