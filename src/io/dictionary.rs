use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::warn;

use crate::core::dictionary::{TermDictionary, TermEntry, WordKind};
use crate::core::error::AlignError;

/// Load a term dictionary file.
///
/// Each line has the form:
///
/// ```text
/// kind:stem:(surface,1,4,9)(other_surface,12)
/// ```
///
/// where `kind` is `s`, `a` or `c` and the numbers are 1-based step numbers.
/// Lines not matching the pattern are skipped with a warning; the parsing
/// layer never aborts the batch over a single bad row.
pub fn load_dictionary(path: &Path) -> Result<TermDictionary, AlignError> {
    let content = fs::read_to_string(path).map_err(|e| AlignError::io(path, e))?;
    Ok(parse_dictionary(&content))
}

/// Parse dictionary text. See [`load_dictionary`] for the line format.
pub fn parse_dictionary(content: &str) -> TermDictionary {
    let line_pattern =
        Regex::new(r"^(?P<kind>[a-z]):(?P<stem>[^:]+):(?P<origins>.*)$").expect("valid regex");
    let origin_pattern = Regex::new(r"\((?P<word>[^,)]+),(?P<steps>[^)]*)\)").expect("valid regex");

    let mut dictionary = TermDictionary::new();

    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some(captures) = line_pattern.captures(line) else {
            warn!(line = line_no + 1, "skipping malformed dictionary line");
            continue;
        };
        let Some(kind) = WordKind::from_tag(&captures["kind"]) else {
            warn!(
                line = line_no + 1,
                kind = &captures["kind"],
                "skipping dictionary line with unknown word kind"
            );
            continue;
        };

        let mut entry = TermEntry::new(kind, &captures["stem"]);
        for origin in origin_pattern.captures_iter(&captures["origins"]) {
            let surface = &origin["word"];
            for number in origin["steps"].split(',') {
                match number.trim().parse::<usize>() {
                    Ok(step) if step > 0 => entry.add_occurrence(surface, step),
                    _ => warn!(
                        line = line_no + 1,
                        value = number,
                        "skipping invalid step number in dictionary line"
                    ),
                }
            }
        }

        dictionary.insert(entry.key(), entry);
    }

    dictionary
}
