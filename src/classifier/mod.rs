pub mod normalize;

pub use normalize::normalize_name;

use once_cell::sync::Lazy;
use regex::Regex;

/// Category scanned when nothing else matches.
pub const FALLBACK_CATEGORY: &str = "misc";

/// Keyword rules in declared precedence order. First category with a
/// matching keyword wins, so broad keywords belong late in the list.
/// The fallback category carries no keywords.
static KEYWORD_RULES: &[(&str, &[&str])] = &[
    (
        "crypto",
        &[
            "rsa", "aes", "cipher", "encrypt", "decrypt", "xor", "hash", "prime", "modular",
        ],
    ),
    (
        "pwn",
        &[
            "buffer", "overflow", "shellcode", "rop", "bof", "exploit", "canary", "libc", "got",
            "plt",
        ],
    ),
    (
        "rev",
        &[
            "reverse",
            "disassembl",
            "decompil",
            "binary",
            "assembly",
            "ida",
            "ghidra",
            "obfuscate",
        ],
    ),
    (
        "web",
        &[
            "sql",
            "xss",
            "csrf",
            "cookie",
            "session",
            "http",
            "php",
            "javascript",
            "html",
            "api",
            "jwt",
        ],
    ),
    (
        "forensics",
        &[
            "pcap",
            "wireshark",
            "memory",
            "disk",
            "volatility",
            "autopsy",
            "image",
            "steganography",
        ],
    ),
    (
        "osint",
        &["osint", "google", "social", "geolocation", "metadata"],
    ),
    (FALLBACK_CATEGORY, &[]),
];

static CATEGORY_ANNOTATION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*category[:\*]*\s*(\w+)").unwrap());

/// All category keys the classifier can produce, in precedence order.
pub fn known_categories() -> impl Iterator<Item = &'static str> {
    KEYWORD_RULES.iter().map(|(cat, _)| *cat)
}

/// Detect the category of a write-up from its content and filename.
///
/// An explicit `**Category: x**` annotation wins if it names a known
/// category. Otherwise the keyword rules are scanned in declared order
/// and the first substring hit (content or filename) decides. Anything
/// else lands in the fallback category.
pub fn detect_category(content: &str, filename: &str) -> &'static str {
    let content_lower = content.to_lowercase();
    let filename_lower = filename.to_lowercase();

    if let Some(captures) = CATEGORY_ANNOTATION_REGEX.captures(&content_lower) {
        let annotated = captures[1].trim();
        for (cat, _) in KEYWORD_RULES {
            if *cat == annotated {
                return cat;
            }
        }
    }

    for (cat, keywords) in KEYWORD_RULES {
        for keyword in *keywords {
            if content_lower.contains(keyword) || filename_lower.contains(keyword) {
                return cat;
            }
        }
    }

    FALLBACK_CATEGORY
}
