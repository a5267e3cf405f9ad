//! Loading annotations, chapters and flashcard decks from disk or HTTP.
//!
//! A source is either a filesystem path or an `http(s)://` URL. Each source
//! is read once per view; there is no retry or caching layer.

use crate::annotation::Annotation;
use crate::chapters::{ChapterBreakpoint, breakpoints_sorted};
use crate::deck::{CardDeck, QuestionDataset, ResponseTable};
use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Everything the video screen needs about one recording.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoManifest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub video_src: String,
    #[serde(default)]
    pub poster: Option<String>,
    /// Media length once known; the player resolves it after loading.
    #[serde(default)]
    pub duration_secs: Option<f64>,
    #[serde(default)]
    pub chapters: Vec<ChapterBreakpoint>,
    #[serde(default, alias = "annotations")]
    pub qa: Vec<Annotation>,
}

impl VideoManifest {
    pub fn from_json(raw: &str) -> Result<Self> {
        let manifest: VideoManifest =
            serde_json::from_str(raw).context("Parsing video manifest JSON")?;
        if !breakpoints_sorted(&manifest.chapters) {
            warn!(
                title = %manifest.title,
                "Chapter breakpoints are not in ascending order; segment widths will be invalid"
            );
        }
        Ok(manifest)
    }
}

pub fn load_manifest(source: &str) -> Result<VideoManifest> {
    let raw = read_source(source)?;
    let manifest = VideoManifest::from_json(&raw)
        .with_context(|| format!("Invalid manifest at {source}"))?;
    info!(
        source,
        chapters = manifest.chapters.len(),
        annotations = manifest.qa.len(),
        "Loaded video manifest"
    );
    Ok(manifest)
}

pub fn load_question_dataset(source: &str) -> Result<QuestionDataset> {
    let raw = read_source(source)?;
    let dataset = QuestionDataset::from_json(&raw)
        .with_context(|| format!("Invalid question dataset at {source}"))?;
    info!(source, questions = dataset.len(), "Loaded question dataset");
    Ok(dataset)
}

/// Like [`load_question_dataset`] but never fails: any error yields the empty
/// default dataset.
pub fn load_question_dataset_or_default(source: &str) -> QuestionDataset {
    load_question_dataset(source).unwrap_or_else(|err| {
        warn!(source, "Falling back to empty question dataset: {err:#}");
        QuestionDataset::empty()
    })
}

pub fn load_response_table(path: &Path) -> Result<ResponseTable> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Reading response table {}", path.display()))?;
    let table = ResponseTable::from_toml(&raw)
        .with_context(|| format!("Parsing response table {}", path.display()))?;
    debug!(path = %path.display(), "Parsed response table");
    Ok(table)
}

fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

fn read_source(source: &str) -> Result<String> {
    if is_remote(source) {
        fetch_remote(source)
    } else {
        fs::read_to_string(source).with_context(|| format!("Reading {source}"))
    }
}

/// Runs on its own thread; the blocking client must not be driven from
/// inside an async executor.
fn fetch_remote(url: &str) -> Result<String> {
    let url = url.to_string();
    std::thread::spawn(move || fetch_remote_blocking(&url))
        .join()
        .map_err(|_| anyhow!("HTTP fetch thread panicked"))?
}

fn fetch_remote_blocking(url: &str) -> Result<String> {
    debug!(url, "Fetching remote source");
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .context("Building HTTP client")?;
    let response = client
        .get(url)
        .send()
        .with_context(|| format!("Requesting {url}"))?
        .error_for_status()
        .with_context(|| format!("Server rejected {url}"))?;
    response
        .text()
        .with_context(|| format!("Reading body of {url}"))
}
