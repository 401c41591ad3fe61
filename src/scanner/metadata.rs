use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

static POINTS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*Points:\*\*\s*(\d+)").unwrap());

static FLAG_LABEL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"Flag:\*\*\s*`([^`]+)`").unwrap());

/// Optional metadata scraped from a write-up. Cosmetic only; a record
/// with empty fields is always a valid outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub points: String,
    pub flag: String,
}

/// Best-effort metadata extraction over write-up text.
///
/// The flag pattern comes from configuration since every event has its
/// own flag format. An invalid pattern degrades to matching only
/// explicitly labelled flags.
pub struct MetadataExtractor {
    flag_regex: Regex,
}

impl MetadataExtractor {
    pub fn new(flag_pattern: &str) -> Self {
        let combined = format!(r"`({flag_pattern})`|Flag:\*\*\s*`([^`]+)`");
        let flag_regex = match Regex::new(&combined) {
            Ok(re) => re,
            Err(e) => {
                warn!("Invalid flag pattern {:?}: {}", flag_pattern, e);
                FLAG_LABEL_REGEX.clone()
            }
        };
        Self { flag_regex }
    }

    /// Extract points and flag from a write-up file. Any read or match
    /// failure yields a default record.
    pub fn extract(&self, writeup_path: &Path) -> Metadata {
        let content = match std::fs::read_to_string(writeup_path) {
            Ok(c) => c,
            Err(_) => return Metadata::default(),
        };
        self.extract_from_text(&content)
    }

    pub fn extract_from_text(&self, content: &str) -> Metadata {
        let mut meta = Metadata::default();

        if let Some(captures) = POINTS_REGEX.captures(content) {
            meta.points = captures[1].to_string();
        }

        if let Some(captures) = self.flag_regex.captures(content) {
            meta.flag = captures
                .iter()
                .skip(1)
                .flatten()
                .next()
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
        }

        meta
    }
}
