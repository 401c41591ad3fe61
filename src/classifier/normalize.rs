use once_cell::sync::Lazy;
use regex::Regex;

static CAMEL_BOUNDARY_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z])([A-Z])").unwrap());

static UNDERSCORE_RUN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"_+").unwrap());

/// Normalize a write-up file stem into a lowercase underscore identifier.
///
/// Strips the "writeup" suffix convention, turns hyphens into underscores
/// and splits camelCase words, e.g. "Sql_Injection-Writeup" becomes
/// "sql_injection". Normalization is idempotent. A stem that normalizes
/// to nothing falls back to the lowercased original.
pub fn normalize_name(stem: &str) -> String {
    let name = stem.replace("writeup", "").replace("Writeup", "");
    let name = name.replace('-', "_");
    let name = CAMEL_BOUNDARY_REGEX
        .replace_all(&name, "${1}_${2}")
        .to_lowercase();
    let name = UNDERSCORE_RUN_REGEX.replace_all(&name, "_");
    let name = name.trim_matches('_').to_string();

    if name.is_empty() {
        stem.to_lowercase()
    } else {
        name
    }
}
