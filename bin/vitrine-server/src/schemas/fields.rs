//! Encodings between single-text form fields and stored string lists.
//!
//! The admin forms edit "features" as one newline-delimited block and
//! "technologies" as one comma-separated line.  Splitting happens on save:
//! entries are trimmed and blank ones dropped.  This is a presentation
//! convenience, not a store-level constraint.

/// Split a newline-delimited feature block into a clean list.
pub fn split_features(text: &str) -> Vec<String> {
    split_on(text, '\n')
}

/// Split a comma-separated technology line into a clean list.
pub fn split_technologies(text: &str) -> Vec<String> {
    split_on(text, ',')
}

fn split_on(text: &str, separator: char) -> Vec<String> {
    text.split(separator)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_owned)
        .collect()
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn features_split_on_newlines_without_blank_entries() {
        assert_eq!(split_features("A\nB\nC"), vec!["A", "B", "C"]);
        assert_eq!(split_features("\nA\n\nB\nC\n\n"), vec!["A", "B", "C"]);
    }

    #[test]
    fn features_entries_are_trimmed() {
        assert_eq!(split_features("  A  \n\tB\n"), vec!["A", "B"]);
    }

    #[test]
    fn technologies_split_on_commas_trimmed_and_blank_dropped() {
        assert_eq!(
            split_technologies("Next.js, React, "),
            vec!["Next.js", "React"]
        );
        assert_eq!(split_technologies(",,"), Vec::<String>::new());
    }

    #[test]
    fn empty_input_yields_empty_list() {
        assert_eq!(split_features(""), Vec::<String>::new());
        assert_eq!(split_technologies(""), Vec::<String>::new());
    }
}
