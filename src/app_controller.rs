/*!
 * Application controller: wires configuration, timing-document loading,
 * cue derivation, encoding, and file writing together for the CLI.
 */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use log::{info, warn};

use crate::app_config::{CaptionFormat, Config};
use crate::encoders;
use crate::file_utils::FileManager;
use crate::lyric_processor;
use crate::timing::models::{TimingDocument, TimingMode};
use crate::timing::session::TimingSession;

/// Output file suffix for line-granularity exports
const LINE_SUFFIX: &str = "Titles";

/// Output file suffix for word-granularity exports
const WORD_SUFFIX: &str = "Word-Timed";

// @struct: Main application controller
pub struct Controller {
    config: Config,
}

impl Controller {
    /// Create a controller with the given configuration
    pub fn new(config: Config) -> Self {
        Controller { config }
    }

    /// Create a controller with default configuration
    pub fn with_default_config() -> Self {
        Controller {
            config: Config::default(),
        }
    }

    /// Current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Export the timing document at `input` to the requested formats.
    ///
    /// Returns the paths written. Formats incompatible with the document's
    /// capture granularity are skipped with a warning; an empty document
    /// produces no files.
    pub fn run_export(
        &self,
        input: &Path,
        formats: &[CaptionFormat],
        output_dir: Option<&Path>,
    ) -> Result<Vec<PathBuf>> {
        let document = Self::load_timing_document(input)?;

        if document.is_empty() {
            warn!("Timing document contains no timings - nothing to export");
            return Ok(Vec::new());
        }

        let base = FileManager::base_name(input);
        let output_dir = match output_dir {
            Some(dir) => dir.to_path_buf(),
            None => input
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(".")),
        };
        FileManager::ensure_dir(&output_dir)?;

        let highlight = self.config.export.highlight()?;
        let title_settings = self.config.export.title_settings()?;

        let mut written = Vec::new();
        for &format in formats {
            let (content, suffix) = match &document {
                TimingDocument::Line { lines } => match format {
                    CaptionFormat::Srt => (encoders::srt::encode_lines(lines), LINE_SUFFIX),
                    CaptionFormat::Fcpxml => {
                        (encoders::fcpxml::encode(lines, &title_settings), LINE_SUFFIX)
                    }
                    _ => {
                        warn!(
                            "Skipping {} export: a line-timed document has no per-word instants",
                            format
                        );
                        continue;
                    }
                },
                TimingDocument::Word { lyrics, words } => {
                    let word_lines: Vec<Vec<String>> = lyrics
                        .iter()
                        .map(|line| {
                            line.split_whitespace().map(str::to_string).collect()
                        })
                        .collect();
                    match format {
                        CaptionFormat::Srt => {
                            (encoders::srt::encode_words(words, &word_lines), WORD_SUFFIX)
                        }
                        CaptionFormat::WebVtt => {
                            (encoders::webvtt::encode(words, &word_lines, highlight), WORD_SUFFIX)
                        }
                        CaptionFormat::Itt => {
                            (encoders::itt::encode(words, &word_lines, highlight), WORD_SUFFIX)
                        }
                        CaptionFormat::Ass => {
                            (encoders::ass::encode(words, &word_lines, highlight), WORD_SUFFIX)
                        }
                        CaptionFormat::Fcpxml => {
                            warn!("Skipping fcpxml export: the editor format has no word-level variant");
                            continue;
                        }
                    }
                }
            };

            let path = FileManager::generate_output_path(
                &output_dir,
                &base,
                suffix,
                format.extension(),
            );
            FileManager::write_string(&path, &content)?;
            info!("Wrote {} ({} bytes)", path.display(), content.len());
            written.push(path);
        }

        Ok(written)
    }

    /// Run the lyric cleanup pipeline over a text file.
    ///
    /// Writes the cleaned text to `output` when given, otherwise returns it
    /// for the caller to print.
    pub fn run_tidy(&self, input: &Path, output: Option<&Path>) -> Result<String> {
        let text = FileManager::read_to_string(input)?;
        let cleaned = lyric_processor::normalize(&text, &self.config.tidy);

        if let Some(path) = output {
            FileManager::write_string(path, &cleaned)?;
            info!("Wrote cleaned lyrics to {}", path.display());
        }

        Ok(cleaned)
    }

    /// Import an existing `.srt` file into a line-mode timing document.
    ///
    /// The parsed cues seed a session (lyrics become the cue texts) and its
    /// snapshot is written as JSON, ready for `export`.
    pub fn run_import(&self, input: &Path, output: Option<&Path>) -> Result<PathBuf> {
        let content = FileManager::read_to_string(input)?;
        let timings = encoders::srt::parse(&content)
            .with_context(|| format!("Failed to import {}", input.display()))?;

        info!("Imported {} cues from {}", timings.len(), input.display());

        let mut session = TimingSession::new(TimingMode::Line);
        session.seed_from_lines(timings);
        let document = session.snapshot();

        let path = match output {
            Some(path) => path.to_path_buf(),
            None => {
                let base = FileManager::base_name(input);
                let dir = input
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| PathBuf::from("."));
                dir.join(format!("{}.timings.json", base))
            }
        };

        let json = serde_json::to_string_pretty(&document)
            .context("Failed to serialize timing document")?;
        FileManager::write_string(&path, &json)?;
        info!("Wrote timing document to {}", path.display());

        Ok(path)
    }

    /// Load and validate a timing document
    fn load_timing_document(input: &Path) -> Result<TimingDocument> {
        let content = FileManager::read_to_string(input)?;
        let document: TimingDocument = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse timing document: {}", input.display()))?;

        // Word timings index into the lyric lines; validate here so the
        // encoders never have to
        if let TimingDocument::Word { lyrics, words } = &document {
            for timing in words {
                if timing.line_index >= lyrics.len() {
                    return Err(anyhow!(
                        "Word timing for '{}' references line {} but the document has {} lyric lines",
                        timing.word,
                        timing.line_index,
                        lyrics.len()
                    ));
                }
            }
        }

        Ok(document)
    }
}
