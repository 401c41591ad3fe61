pub mod metadata;

pub use metadata::{Metadata, MetadataExtractor};

use crate::classifier::{detect_category, normalize_name};
use crate::config::{title_case, CtfConfig};
use anyhow::{Context, Result};
use glob::Pattern;
use log::{debug, warn};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Write-up filename conventions, tried in order. The first pattern
/// with a match wins; within a pattern, lexicographic order decides.
static WRITEUP_PATTERNS: Lazy<Vec<Pattern>> = Lazy::new(|| {
    [
        "*_writeup.md",
        "*writeup.md",
        "writeup.md",
        "WRITEUP.md",
        "solution.md",
    ]
    .iter()
    .map(|p| Pattern::new(p).unwrap())
    .collect()
});

/// One write-up discovered in a flat (uncategorized) repository.
#[derive(Debug, Clone)]
pub struct FlatChallenge {
    pub original_file: String,
    pub name: String,
    pub category: String,
    pub content: String,
}

/// One challenge directory discovered in a categorized repository.
#[derive(Debug, Clone)]
pub struct Challenge {
    /// Display name, title-cased from the directory name.
    pub name: String,
    pub dir: String,
    pub writeup: Option<String>,
    pub solved: bool,
    pub points: String,
    pub flag: String,
}

/// Analyze a flat repository: every top-level markdown file except the
/// README is treated as a write-up, classified and given a normalized
/// challenge name.
pub fn analyze_flat_repo(repo_path: &Path) -> Result<Vec<FlatChallenge>> {
    let mut challenges = Vec::new();

    let entries = WalkDir::new(repo_path)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to scan {}", repo_path.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("md") {
            continue;
        }
        let filename = entry.file_name().to_string_lossy().to_string();
        if filename.eq_ignore_ascii_case("readme.md") {
            continue;
        }

        // Undecodable bytes are replaced rather than failing the scan;
        // an unreadable file still classifies by its filename.
        let content = match std::fs::read(path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                warn!("Could not read {}: {}", path.display(), e);
                String::new()
            }
        };

        let category = detect_category(&content, &filename);
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = normalize_name(&stem);
        debug!("Classified {} as [{}] {}", filename, category, name);

        challenges.push(FlatChallenge {
            original_file: filename,
            name,
            category: category.to_string(),
            content,
        });
    }

    Ok(challenges)
}

/// Scan a categorized repository for challenges and their write-ups.
///
/// Only configured category directories that exist are visited. Hidden
/// and underscore-prefixed challenge directories are skipped. A
/// challenge counts as solved when a write-up file is present.
pub fn scan_challenges(repo_root: &Path, config: &CtfConfig) -> HashMap<String, Vec<Challenge>> {
    let extractor = MetadataExtractor::new(&config.flag_pattern);
    let mut challenges: HashMap<String, Vec<Challenge>> = HashMap::new();

    for category in &config.categories {
        let cat_path = repo_root.join(category);
        if !cat_path.exists() {
            continue;
        }

        let entry = challenges.entry(category.clone()).or_default();

        let dirs = WalkDir::new(&cat_path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        for challenge_dir in dirs.into_iter().filter_map(|e| e.ok()) {
            if !challenge_dir.file_type().is_dir() {
                continue;
            }
            let dir_name = challenge_dir.file_name().to_string_lossy().to_string();
            if dir_name.starts_with('.') || dir_name.starts_with('_') {
                continue;
            }

            let writeup = find_writeup(challenge_dir.path());
            let meta = match &writeup {
                Some(path) => extractor.extract(path),
                None => Metadata::default(),
            };

            entry.push(Challenge {
                name: title_case(&dir_name),
                dir: dir_name,
                solved: writeup.is_some(),
                writeup: writeup
                    .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned())),
                points: meta.points,
                flag: meta.flag,
            });
        }
    }

    challenges
}

/// Locate the write-up file inside a challenge directory.
pub fn find_writeup(challenge_path: &Path) -> Option<PathBuf> {
    let mut names: Vec<String> = std::fs::read_dir(challenge_path)
        .ok()?
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();

    for pattern in WRITEUP_PATTERNS.iter() {
        if let Some(name) = names.iter().find(|n| pattern.matches(n)) {
            return Some(challenge_path.join(name));
        }
    }

    None
}

/// Count solved and total challenges across all categories.
pub fn solved_totals(challenges: &HashMap<String, Vec<Challenge>>) -> (usize, usize) {
    let total = challenges.values().map(Vec::len).sum();
    let solved = challenges
        .values()
        .flatten()
        .filter(|c| c.solved)
        .count();
    (solved, total)
}
