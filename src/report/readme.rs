use crate::config::{CategoryMeta, CtfConfig};
use crate::scanner::{solved_totals, Challenge};
use std::collections::HashMap;

/// Shields.io badge markdown for the solved/total ratio.
pub fn badge(solved: usize, total: usize) -> String {
    let pct = if total > 0 { solved * 100 / total } else { 0 };
    let color = if pct >= 80 {
        "brightgreen"
    } else if pct >= 60 {
        "green"
    } else if pct >= 40 {
        "yellow"
    } else {
        "orange"
    };
    format!("![Solved](https://img.shields.io/badge/Solved-{solved}%2F{total}-{color})")
}

/// Render the full README: header, badge, event info, summary table,
/// per-category detail tables and a generation timestamp footer.
///
/// Table order follows the configured category order; rows within a
/// category keep directory-listing order from the scan.
pub fn render_readme(config: &CtfConfig, challenges: &HashMap<String, Vec<Challenge>>) -> String {
    let (total_solved, total_challenges) = solved_totals(challenges);

    let mut lines = Vec::new();

    // Header
    lines.push(format!("# {} Write-ups", config.name));
    lines.push(String::new());
    lines.push(badge(total_solved, total_challenges));
    lines.push(String::new());

    // CTF info
    lines.push("## CTF Information".to_string());
    lines.push(String::new());
    lines.push(format!("- **Event:** [{}]({})", config.name, config.url));
    lines.push(format!("- **Date:** {}", config.date));
    lines.push(format!("- **Team:** {}", config.team));
    if !config.placement.is_empty() {
        lines.push(format!("- **Placement:** {}", config.placement));
    }
    lines.push(String::new());

    // Summary table
    lines.push("## Challenges".to_string());
    lines.push(String::new());
    lines.push("| Category | Solved | Total |".to_string());
    lines.push("|----------|--------|-------|".to_string());
    for cat in &config.categories {
        let Some(challs) = challenges.get(cat) else {
            continue;
        };
        let meta = CategoryMeta::for_category(cat);
        let solved = challs.iter().filter(|c| c.solved).count();
        lines.push(format!(
            "| {} {} | {} | {} |",
            meta.emoji,
            meta.name,
            solved,
            challs.len()
        ));
    }
    lines.push(String::new());

    // Detail tables per non-empty category
    for cat in &config.categories {
        let Some(challs) = challenges.get(cat) else {
            continue;
        };
        if challs.is_empty() {
            continue;
        }

        let meta = CategoryMeta::for_category(cat);
        lines.push(format!("### {} {}", meta.emoji, meta.name));
        lines.push(String::new());
        lines.push("| Challenge | Points | Write-up |".to_string());
        lines.push("|-----------|--------|----------|".to_string());

        for chall in challs {
            let writeup_cell = match &chall.writeup {
                Some(writeup) if chall.solved => {
                    format!("[Write-up]({}/{}/{})", cat, chall.dir, writeup)
                }
                _ => "❌".to_string(),
            };
            // Unsolved rows have no metadata to show
            let points_cell = if chall.solved {
                chall.points.as_str()
            } else {
                "-"
            };
            lines.push(format!(
                "| {} | {} | {} |",
                chall.name, points_cell, writeup_cell
            ));
        }

        lines.push(String::new());
    }

    // Footer
    lines.push("---".to_string());
    lines.push(String::new());
    lines.push(format!(
        "*Auto-generated on {}*",
        chrono::Local::now().format("%Y-%m-%d %H:%M")
    ));
    lines.push(String::new());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chall(dir: &str, solved: bool, points: &str) -> Challenge {
        Challenge {
            name: crate::config::title_case(dir),
            dir: dir.to_string(),
            writeup: solved.then(|| format!("{dir}_writeup.md")),
            solved,
            points: points.to_string(),
            flag: String::new(),
        }
    }

    #[test]
    fn test_badge_thresholds() {
        assert!(badge(8, 10).contains("brightgreen"));
        assert!(badge(6, 10).contains("-green"));
        assert!(badge(4, 10).contains("yellow"));
        assert!(badge(3, 10).contains("orange"));
        assert!(badge(0, 0).contains("orange"));
    }

    #[test]
    fn test_badge_encodes_ratio() {
        assert_eq!(
            badge(3, 5),
            "![Solved](https://img.shields.io/badge/Solved-3%2F5-green)"
        );
    }

    #[test]
    fn test_readme_summary_and_detail_tables() {
        let mut challenges = HashMap::new();
        challenges.insert(
            "crypto".to_string(),
            vec![chall("baby_rsa", true, "100"), chall("xor_fun", true, "250")],
        );
        challenges.insert(
            "web".to_string(),
            vec![
                chall("cookie_jar", true, "300"),
                chall("deep_graph", false, ""),
                chall("jwt_forge", false, ""),
            ],
        );

        let config = CtfConfig::default();
        let readme = render_readme(&config, &challenges);

        // 3/5 solved overall
        assert!(readme.contains("Solved-3%2F5-green"));
        assert!(readme.contains("| 🔐 Cryptography | 2 | 2 |"));
        assert!(readme.contains("| 🌍 Web | 1 | 3 |"));

        // Summary table precedes the detail sections, crypto before web
        let summary = readme.find("| 🔐 Cryptography | 2 | 2 |").unwrap();
        let crypto_detail = readme.find("### 🔐 Cryptography").unwrap();
        let web_detail = readme.find("### 🌍 Web").unwrap();
        assert!(summary < crypto_detail);
        assert!(crypto_detail < web_detail);

        // Rows within a category, link for solved, marker for unsolved
        assert!(readme.contains(
            "| Baby Rsa | 100 | [Write-up](crypto/baby_rsa/baby_rsa_writeup.md) |"
        ));
        assert!(readme.contains("| Deep Graph | - | ❌ |"));
    }

    #[test]
    fn test_points_cells_solved_vs_unsolved() {
        let mut challenges = HashMap::new();
        challenges.insert(
            "pwn".to_string(),
            vec![
                chall("heap_feng_shui", true, ""),
                chall("kernel_panic", false, ""),
            ],
        );

        let config = CtfConfig::default();
        let readme = render_readme(&config, &challenges);

        // Solved without a points label keeps an empty cell, unsolved gets a dash
        assert!(readme.contains("| Heap Feng Shui |  | [Write-up]"));
        assert!(readme.contains("| Kernel Panic | - | ❌ |"));
    }

    #[test]
    fn test_placement_omitted_when_empty() {
        let mut config = CtfConfig::default();
        config.placement = String::new();
        let readme = render_readme(&config, &HashMap::new());
        assert!(!readme.contains("Placement"));

        config.placement = "15th / 500 teams".to_string();
        let readme = render_readme(&config, &HashMap::new());
        assert!(readme.contains("- **Placement:** 15th / 500 teams"));
    }

    #[test]
    fn test_empty_category_in_summary_but_no_detail_table() {
        let mut challenges = HashMap::new();
        challenges.insert("osint".to_string(), Vec::new());

        let config = CtfConfig::default();
        let readme = render_readme(&config, &challenges);
        assert!(readme.contains("| 🌐 OSINT | 0 | 0 |"));
        assert!(!readme.contains("### 🌐 OSINT"));
    }
}
