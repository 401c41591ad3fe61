use crate::config::title_case;
use crate::scanner::FlatChallenge;
use std::collections::BTreeMap;

/// Build the shell command sequence that reorganizes a flat repository
/// into `category/name/name_writeup.md` layout.
///
/// The script is only ever written to disk for human review; this tool
/// never executes it. File moves are destructive, so the reorganization
/// has to stay inspectable before it runs.
pub fn migration_script(repo_name: &str, challenges: &[FlatChallenge]) -> String {
    let mut lines = vec![
        "#!/bin/bash".to_string(),
        format!("# Migration script for {repo_name}"),
        "set -e".to_string(),
        String::new(),
    ];

    let mut categories_used: Vec<&str> = challenges.iter().map(|c| c.category.as_str()).collect();
    categories_used.sort_unstable();
    categories_used.dedup();
    for cat in categories_used {
        lines.push(format!("mkdir -p {cat}"));
    }

    lines.push(String::new());

    for c in challenges {
        let dst = format!("{}/{}/{}_writeup.md", c.category, c.name, c.name);
        lines.push(format!("mkdir -p {}/{}", c.category, c.name));
        lines.push(format!("mv \"{}\" \"{}\"", c.original_file, dst));
    }

    lines.push(String::new());
    lines.push("echo 'Migration complete! Now run ctfup readme'".to_string());

    lines.join("\n")
}

/// Build a starter README for the repository as it will look after the
/// migration script has run.
pub fn readme_stub(repo_name: &str, challenges: &[FlatChallenge]) -> String {
    let mut by_cat: BTreeMap<&str, Vec<&FlatChallenge>> = BTreeMap::new();
    for c in challenges {
        by_cat.entry(c.category.as_str()).or_default().push(c);
    }

    let mut lines = vec![format!("# {repo_name} Write-ups"), String::new()];

    lines.push("## Challenges".to_string());
    lines.push(String::new());
    lines.push("| Category | Count |".to_string());
    lines.push("|----------|-------|".to_string());
    for (cat, challs) in &by_cat {
        lines.push(format!("| {} | {} |", title_case(cat), challs.len()));
    }
    lines.push(String::new());

    for (cat, challs) in &by_cat {
        lines.push(format!("### {}", title_case(cat)));
        lines.push(String::new());
        for c in challs {
            let link = format!("{}/{}/{}_writeup.md", cat, c.name, c.name);
            lines.push(format!("- [{}]({})", title_case(&c.name), link));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chall(file: &str, name: &str, category: &str) -> FlatChallenge {
        FlatChallenge {
            original_file: file.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            content: String::new(),
        }
    }

    #[test]
    fn test_migration_script_commands() {
        let challenges = vec![
            chall("pwn1_writeup.md", "pwn1", "pwn"),
            chall("BabyRsa.md", "baby_rsa", "crypto"),
        ];
        let script = migration_script("old-ctf", &challenges);

        assert!(script.starts_with("#!/bin/bash\n# Migration script for old-ctf\nset -e\n"));
        // One mkdir per used category, sorted, no duplicates
        assert!(script.contains("\nmkdir -p crypto\nmkdir -p pwn\n"));
        assert!(script.contains("mkdir -p pwn/pwn1"));
        assert!(script.contains("mv \"pwn1_writeup.md\" \"pwn/pwn1/pwn1_writeup.md\""));
        assert!(script.contains("mv \"BabyRsa.md\" \"crypto/baby_rsa/baby_rsa_writeup.md\""));
        assert!(script.ends_with("echo 'Migration complete! Now run ctfup readme'"));
    }

    #[test]
    fn test_migration_script_dedupes_categories() {
        let challenges = vec![
            chall("a.md", "a", "web"),
            chall("b.md", "b", "web"),
        ];
        let script = migration_script("repo", &challenges);
        assert_eq!(script.matches("mkdir -p web\n").count(), 1);
    }

    #[test]
    fn test_readme_stub_tables_and_links() {
        let challenges = vec![
            chall("pwn1_writeup.md", "pwn1", "pwn"),
            chall("sqli.md", "sql_injection", "web"),
        ];
        let stub = readme_stub("old-ctf", &challenges);

        assert!(stub.starts_with("# old-ctf Write-ups\n"));
        assert!(stub.contains("| Category | Count |"));
        assert!(stub.contains("| Pwn | 1 |"));
        assert!(stub.contains("| Web | 1 |"));
        assert!(stub.contains("### Web"));
        assert!(stub.contains("- [Sql Injection](web/sql_injection/sql_injection_writeup.md)"));
    }
}
