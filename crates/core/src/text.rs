//! Display text helpers used when building page contexts.
//!
//! Ports of the legacy template filters. Both are total: any input string
//! produces a value, never an error.

/// Split a delimited string into a list of trimmed items.
///
/// Empty input yields an empty list. Empty items between delimiters are
/// kept, matching the legacy filter.
///
/// # Examples
///
/// ```
/// use portfolio_core::text::split_list;
///
/// assert_eq!(split_list("a, b ,c", ','), vec!["a", "b", "c"]);
/// assert_eq!(split_list("", ','), Vec::<String>::new());
/// ```
pub fn split_list(value: &str, delimiter: char) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    value
        .split(delimiter)
        .map(|item| item.trim().to_string())
        .collect()
}

/// Turn an underscore token into a Title Case label.
///
/// `in_progress` becomes `In Progress`; the empty string stays empty.
pub fn status_label(value: &str) -> String {
    value
        .replace('_', " ")
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first character, lowercase the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_trims_items() {
        assert_eq!(split_list("a, b ,c", ','), vec!["a", "b", "c"]);
    }

    #[test]
    fn split_empty_input_is_empty() {
        assert_eq!(split_list("", ','), Vec::<String>::new());
    }

    #[test]
    fn split_keeps_empty_items() {
        assert_eq!(split_list("a,,b", ','), vec!["a", "", "b"]);
    }

    #[test]
    fn split_pipe_delimited_roles() {
        assert_eq!(
            split_list("Software Engineer | Backend Developer", '|'),
            vec!["Software Engineer", "Backend Developer"]
        );
    }

    #[test]
    fn status_label_underscore_token() {
        assert_eq!(status_label("in_progress"), "In Progress");
    }

    #[test]
    fn status_label_single_word() {
        assert_eq!(status_label("completed"), "Completed");
    }

    #[test]
    fn status_label_empty() {
        assert_eq!(status_label(""), "");
    }

    #[test]
    fn status_label_lowercases_tail() {
        assert_eq!(status_label("ON_HOLD"), "On Hold");
    }
}
