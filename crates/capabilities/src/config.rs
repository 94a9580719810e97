//! Tour configuration

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TourError};
use crate::lesson::Lesson;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = TourError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(TourError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Json => "json",
        })
    }
}

/// Which lessons to run and how to print them
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TourConfig {
    pub lessons: Vec<Lesson>,
    pub format: OutputFormat,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            lessons: Lesson::ALL.to_vec(),
            format: OutputFormat::default(),
        }
    }
}

impl TourConfig {
    /// Replace fields that were given explicitly; an empty list keeps the
    /// configured lessons
    pub fn with_overrides(mut self, lessons: Vec<Lesson>, format: Option<OutputFormat>) -> Self {
        if !lessons.is_empty() {
            self.lessons = lessons;
        }
        if let Some(format) = format {
            self.format = format;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.lessons.is_empty() {
            return Err(TourError::Config("no lessons selected".into()));
        }
        for (i, lesson) in self.lessons.iter().enumerate() {
            if self.lessons[..i].contains(lesson) {
                return Err(TourError::Config(format!("lesson listed twice: {}", lesson)));
            }
        }
        Ok(())
    }
}
