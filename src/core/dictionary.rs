use std::collections::{BTreeMap, BTreeSet};

/// Grammatical role of a dictionary term, tagged `s`/`a`/`c` in dictionary files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WordKind {
    Subject,
    Action,
    Complement,
}

impl WordKind {
    /// One-letter file tag.
    pub fn tag(&self) -> &'static str {
        match self {
            WordKind::Subject => "s",
            WordKind::Action => "a",
            WordKind::Complement => "c",
        }
    }

    pub fn from_tag(tag: &str) -> Option<WordKind> {
        match tag {
            "s" => Some(WordKind::Subject),
            "a" => Some(WordKind::Action),
            "c" => Some(WordKind::Complement),
            _ => None,
        }
    }
}

/// A stemmed term together with the original surface words it stems from and
/// the 1-based step numbers where each surface word occurs.
///
/// Sorted maps/sets keep vocabulary iteration deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermEntry {
    pub stem: String,
    pub kind: WordKind,
    /// Original surface word -> 1-based step numbers where it appears.
    pub origins: BTreeMap<String, BTreeSet<usize>>,
}

impl TermEntry {
    pub fn new(kind: WordKind, stem: impl Into<String>) -> Self {
        Self {
            stem: stem.into(),
            kind,
            origins: BTreeMap::new(),
        }
    }

    /// Dictionary key, `"{tag}:{stem}"`. Lexicographic order on these keys
    /// defines the vocabulary order everywhere downstream.
    pub fn key(&self) -> String {
        format!("{}:{}", self.kind.tag(), self.stem)
    }

    /// Record an occurrence of `surface` at 1-based step `step`.
    pub fn add_occurrence(&mut self, surface: impl Into<String>, step: usize) {
        self.origins.entry(surface.into()).or_default().insert(step);
    }

    /// True if any surface word of this term occurs at 1-based step `step`.
    pub fn occurs_in_step(&self, step: usize) -> bool {
        self.origins.values().any(|steps| steps.contains(&step))
    }

    /// The set of original surface words behind this term.
    pub fn surface_words(&self) -> BTreeSet<String> {
        self.origins.keys().cloned().collect()
    }

    /// Highest 1-based step this term occurs in, 0 if none.
    pub fn max_step(&self) -> usize {
        self.origins
            .values()
            .filter_map(|steps| steps.iter().next_back())
            .copied()
            .max()
            .unwrap_or(0)
    }
}

/// A term dictionary keyed by `"{tag}:{stem}"`, sorted lexicographically.
pub type TermDictionary = BTreeMap<String, TermEntry>;

/// Sorted intersection of the two dictionaries' term keys: the vocabulary of
/// "matching words" shared by both sequences.
pub fn intersection_keys(a: &TermDictionary, b: &TermDictionary) -> Vec<String> {
    a.keys().filter(|k| b.contains_key(*k)).cloned().collect()
}

/// Number of steps a dictionary spans: the highest 1-based step referenced.
///
/// Steps with no indexed words still count toward the total; they simply get
/// all-zero presence rows.
pub fn step_count(dict: &TermDictionary) -> usize {
    dict.values().map(TermEntry::max_step).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(kind: WordKind, stem: &str, occurrences: &[(&str, &[usize])]) -> TermEntry {
        let mut e = TermEntry::new(kind, stem);
        for (surface, steps) in occurrences {
            for &s in *steps {
                e.add_occurrence(*surface, s);
            }
        }
        e
    }

    #[test]
    fn test_key_format() {
        let e = entry(WordKind::Action, "open", &[("opened", &[1])]);
        assert_eq!(e.key(), "a:open");
        assert_eq!(entry(WordKind::Subject, "user", &[]).key(), "s:user");
    }

    #[test]
    fn test_occurrence_lookup() {
        let e = entry(
            WordKind::Complement,
            "file",
            &[("file", &[1, 3]), ("files", &[5])],
        );
        assert!(e.occurs_in_step(1));
        assert!(e.occurs_in_step(5));
        assert!(!e.occurs_in_step(2));
        assert_eq!(e.max_step(), 5);
    }

    #[test]
    fn test_intersection_is_sorted() {
        let mut a = TermDictionary::new();
        let mut b = TermDictionary::new();
        for stem in ["zeta", "alpha", "mid"] {
            let e = entry(WordKind::Subject, stem, &[(stem, &[1])]);
            a.insert(e.key(), e);
        }
        for stem in ["mid", "zeta", "other"] {
            let e = entry(WordKind::Subject, stem, &[(stem, &[2])]);
            b.insert(e.key(), e);
        }
        let keys = intersection_keys(&a, &b);
        assert_eq!(keys, vec!["s:mid".to_string(), "s:zeta".to_string()]);
    }

    #[test]
    fn test_step_count_spans_gaps() {
        let mut d = TermDictionary::new();
        let e = entry(WordKind::Action, "run", &[("ran", &[2, 9])]);
        d.insert(e.key(), e);
        // Steps 1..=9 exist even though only 2 and 9 carry words
        assert_eq!(step_count(&d), 9);
        assert_eq!(step_count(&TermDictionary::new()), 0);
    }
}
