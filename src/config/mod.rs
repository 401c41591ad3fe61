use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_FLAG_PATTERN: &str = r"uoftctf\{[^}]+\}";

/// Event metadata and category ordering for one CTF repository.
/// Defaults describe the current event; any field can be overridden
/// from a TOML file passed with --config.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CtfConfig {
    pub name: String,
    pub url: String,
    pub date: String,
    pub team: String,
    /// e.g. "15th / 500 teams". Empty means unranked and is omitted
    /// from the generated README.
    pub placement: String,
    /// Ordered list of category directories to scan; also the table order.
    pub categories: Vec<String>,
    /// Regex for flag-shaped strings in write-ups.
    pub flag_pattern: String,
}

impl Default for CtfConfig {
    fn default() -> Self {
        Self {
            name: "UofTCTF 2026".to_string(),
            url: "https://ctf.uoftctf.org/".to_string(),
            date: "January 2026".to_string(),
            team: "Solo".to_string(),
            placement: String::new(),
            categories: vec![
                "crypto".to_string(),
                "forensics".to_string(),
                "misc".to_string(),
                "osint".to_string(),
                "pwn".to_string(),
                "rev".to_string(),
                "web".to_string(),
            ],
            flag_pattern: DEFAULT_FLAG_PATTERN.to_string(),
        }
    }
}

impl CtfConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: CtfConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}

/// Display metadata for a category heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMeta {
    pub emoji: String,
    pub name: String,
}

impl CategoryMeta {
    /// Look up display metadata for a category key. Unknown keys get a
    /// generic folder emoji and a title-cased name.
    pub fn for_category(key: &str) -> Self {
        let (emoji, name) = match key {
            "crypto" => ("🔐", "Cryptography"),
            "forensics" => ("🔍", "Forensics"),
            "misc" => ("🎲", "Miscellaneous"),
            "osint" => ("🌐", "OSINT"),
            "pwn" => ("💥", "Binary Exploitation"),
            "rev" => ("⚙️", "Reverse Engineering"),
            "web" => ("🌍", "Web"),
            "hardware" => ("🔌", "Hardware"),
            "mobile" => ("📱", "Mobile"),
            "blockchain" => ("⛓️", "Blockchain"),
            _ => {
                return Self {
                    emoji: "📁".to_string(),
                    name: title_case(key),
                }
            }
        };
        Self {
            emoji: emoji.to_string(),
            name: name.to_string(),
        }
    }
}

/// Title-case a snake_case or space-separated identifier: "sql_injection"
/// becomes "Sql Injection". The tail of each word is lowercased, so
/// "baby_RSA" becomes "Baby Rsa".
pub fn title_case(s: &str) -> String {
    s.split(['_', ' '])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
