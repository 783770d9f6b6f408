use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::warn;

use crate::core::error::AlignError;

/// Load a manual story-to-trace mapping file.
///
/// Each line pairs a story step with the trace step where it starts, both
/// 1-based:
///
/// ```text
/// S0005:T0030
/// ```
///
/// Labels are case-insensitive. Blank lines and `#` comments are skipped;
/// malformed lines are skipped with a warning.
pub fn load_mapping(path: &Path) -> Result<BTreeMap<usize, usize>, AlignError> {
    let content = fs::read_to_string(path).map_err(|e| AlignError::io(path, e))?;
    Ok(parse_mapping(&content))
}

/// Parse mapping text. See [`load_mapping`] for the line format.
pub fn parse_mapping(content: &str) -> BTreeMap<usize, usize> {
    let mut mapping = BTreeMap::new();

    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim().to_lowercase();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match parse_pair(&line) {
            Some((story, trace)) => {
                mapping.insert(story, trace);
            }
            None => warn!(line = line_no + 1, "skipping malformed mapping line"),
        }
    }

    mapping
}

fn parse_pair(line: &str) -> Option<(usize, usize)> {
    let (story_label, trace_label) = line.split_once(':')?;
    let story = parse_step(story_label.trim(), 's')?;
    let trace = parse_step(trace_label.trim(), 't')?;
    Some((story, trace))
}

fn parse_step(label: &str, prefix: char) -> Option<usize> {
    let number = label.strip_prefix(prefix)?;
    match number.parse::<usize>() {
        Ok(step) if step > 0 => Some(step),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_mapping() {
        let mapping = parse_mapping("S0001:T0001\nS0005:T0030\n");
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping[&1], 1);
        assert_eq!(mapping[&5], 30);
    }

    #[test]
    fn test_labels_are_case_insensitive() {
        let mapping = parse_mapping("s0002:t0014\n");
        assert_eq!(mapping[&2], 14);
    }

    #[test]
    fn test_comments_blanks_and_garbage_are_skipped() {
        let mapping = parse_mapping(
            "# manual alignment\n\
             \n\
             S0001:T0001\n\
             T0001:S0001\n\
             S0002T0010\n\
             S0000:T0004\n\
             S0003:T0020\n",
        );
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping[&1], 1);
        assert_eq!(mapping[&3], 20);
    }

    #[test]
    fn test_duplicate_story_step_keeps_last() {
        let mapping = parse_mapping("S0001:T0001\nS0001:T0009\n");
        assert_eq!(mapping[&1], 9);
    }
}
