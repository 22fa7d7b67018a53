use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::Path;

use crate::color::RgbColor;
use crate::encoders::TitleSettings;
use crate::lyric_processor::NormalizationConfig;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Export settings (highlight color, editor title appearance)
    pub export: ExportConfig,

    /// Lyric cleanup options for the tidy command
    #[serde(default)]
    pub tidy: NormalizationConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Caption output format
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CaptionFormat {
    // @format: SubRip, one cue per line
    #[default]
    Srt,
    // @format: WebVTT with per-word highlight cues
    WebVtt,
    // @format: iTunes Timed Text (TTML), per-word highlight spans
    Itt,
    // @format: Advanced SubStation Alpha, per-word override tags
    Ass,
    // @format: Video editor project document, one title per line
    Fcpxml,
}

impl CaptionFormat {
    // @returns: File extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Srt => "srt",
            Self::WebVtt => "vtt",
            Self::Itt => "itt",
            Self::Ass => "ass",
            Self::Fcpxml => "fcpxml",
        }
    }

    // @returns: All supported formats
    pub fn all() -> &'static [CaptionFormat] {
        &[
            Self::Srt,
            Self::WebVtt,
            Self::Itt,
            Self::Ass,
            Self::Fcpxml,
        ]
    }
}

// Implement Display trait for CaptionFormat
impl std::fmt::Display for CaptionFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Srt => "srt",
            Self::WebVtt => "webvtt",
            Self::Itt => "itt",
            Self::Ass => "ass",
            Self::Fcpxml => "fcpxml",
        };
        write!(f, "{}", name)
    }
}

// Implement FromStr trait for CaptionFormat
impl std::str::FromStr for CaptionFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "srt" => Ok(Self::Srt),
            "webvtt" | "vtt" => Ok(Self::WebVtt),
            "itt" => Ok(Self::Itt),
            "ass" => Ok(Self::Ass),
            "fcpxml" => Ok(Self::Fcpxml),
            _ => Err(anyhow!("Invalid caption format: {}", s)),
        }
    }
}

/// Export settings shared by the caption encoders
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    /// Hex color for the currently spoken word
    pub highlight_color: String,

    /// Font family for editor titles
    pub font_family: String,

    /// Font size for editor titles
    pub font_size: u32,

    /// Hex color for editor title text
    pub font_color: String,

    /// Character budget per wrapped title line
    pub chars_per_line: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            highlight_color: "#3b82f6".to_string(),
            font_family: "Helvetica".to_string(),
            font_size: 60,
            font_color: "#ffffff".to_string(),
            chars_per_line: 20,
        }
    }
}

impl ExportConfig {
    /// Parsed highlight color
    pub fn highlight(&self) -> Result<RgbColor> {
        RgbColor::parse_hex(&self.highlight_color)
            .with_context(|| format!("Invalid highlight_color: {}", self.highlight_color))
    }

    /// Editor title settings with the font color parsed
    pub fn title_settings(&self) -> Result<TitleSettings> {
        let font_color = RgbColor::parse_hex(&self.font_color)
            .with_context(|| format!("Invalid font_color: {}", self.font_color))?;
        Ok(TitleSettings {
            font_family: self.font_family.clone(),
            font_size: self.font_size,
            font_color,
            chars_per_line: self.chars_per_line,
        })
    }
}

/// Log level configuration
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    // @level: Error
    Error,
    // @level: Warn
    Warn,
    // @level: Info
    #[default]
    Info,
    // @level: Debug
    Debug,
    // @level: Trace
    Trace,
}

impl LogLevel {
    // @returns: Corresponding log crate level filter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            export: ExportConfig::default(),
            tidy: NormalizationConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file, creating a default one when the
    /// file does not exist yet
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            let config = Config::default();
            config.save(path)?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Validate setting values
    pub fn validate(&self) -> Result<()> {
        self.export.highlight()?;
        self.export.title_settings()?;
        if self.export.chars_per_line == 0 {
            return Err(anyhow!("chars_per_line must be greater than zero"));
        }
        if self.export.font_size == 0 {
            return Err(anyhow!("font_size must be greater than zero"));
        }
        if self.tidy.smart_line_split && self.tidy.max_chars == 0 {
            return Err(anyhow!("max_chars must be greater than zero when smart_line_split is enabled"));
        }
        Ok(())
    }
}
