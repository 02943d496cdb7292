//! Reading newline-separated entry lists.

use std::io::Read;
use std::path::Path;

/// Split text into trimmed, non-empty lines.
pub fn parse_entries(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read entries from a file, or from stdin when the path is `-`.
pub fn read_entries(path: &Path) -> Result<Vec<String>, String> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("cannot read stdin: {e}"))?;
        buf
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?
    };
    let entries = parse_entries(&text);
    tracing::debug!(source = %path.display(), entries = entries.len(), "read entries");
    Ok(entries)
}

/// Combine entries from an optional file with inline values.
///
/// File entries come first. Inline values may themselves contain newlines.
pub fn gather(inline: &[String], file: Option<&Path>) -> Result<Vec<String>, String> {
    let mut entries = match file {
        Some(path) => read_entries(path)?,
        None => Vec::new(),
    };
    for value in inline {
        entries.extend(parse_entries(value));
    }
    Ok(entries)
}

/// Read the participant and topic lists for an allocation.
///
/// Only one of the two may come from stdin.
pub fn read_lists(
    participants: &Path,
    topics: &Path,
) -> Result<(Vec<String>, Vec<String>), String> {
    let stdin = Path::new("-");
    if participants == stdin && topics == stdin {
        return Err("participants and topics cannot both be read from stdin".into());
    }
    Ok((read_entries(participants)?, read_entries(topics)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_drops_blank_lines() {
        let text = "  Ada \n\nGrace\r\n   \nLinus";
        assert_eq!(parse_entries(text), vec!["Ada", "Grace", "Linus"]);
    }

    #[test]
    fn keeps_duplicates() {
        assert_eq!(parse_entries("a\na\n"), vec!["a", "a"]);
    }

    #[test]
    fn empty_text() {
        assert!(parse_entries("\n \n").is_empty());
    }

    #[test]
    fn gather_inline_only() {
        let inline = vec!["Ada".to_string(), "Grace\nLinus".to_string()];
        assert_eq!(gather(&inline, None).unwrap(), vec!["Ada", "Grace", "Linus"]);
    }

    #[test]
    fn both_lists_from_stdin_rejected() {
        let err = read_lists(Path::new("-"), Path::new("-")).unwrap_err();
        assert!(err.contains("cannot both be read from stdin"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = gather(&[], Some(Path::new("/no/such/roster.txt"))).unwrap_err();
        assert!(err.starts_with("cannot read /no/such/roster.txt"));
    }
}
