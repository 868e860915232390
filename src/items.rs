//! Item parsing and the built-in sample list.

/// Built-in list used by the "Load Samples" action.
pub const SAMPLE_ITEMS: &[&str] = &[
    "Tom Hanks",
    "Meryl Streep",
    "Leonardo DiCaprio",
    "Jennifer Lawrence",
    "Denzel Washington",
    "Scarlett Johansson",
    "Brad Pitt",
    "Robert Downey Jr.",
    "Cate Blanchett",
    "Will Smith",
    "Emma Stone",
    "Nicole Kidman",
    "Ryan Gosling",
    "Joaquin Phoenix",
    "Tom Cruise",
];

/// Editor text for the sample list, one item per line.
pub fn sample_text() -> String {
    SAMPLE_ITEMS.join("\n")
}

/// Turn raw editor text into the candidate list.
///
/// Lines are trimmed and blank lines dropped. Order is preserved and
/// duplicates are kept as separate entries.
pub fn parse_items(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        assert!(parse_items("").is_empty());
        assert!(parse_items("\n\n   \n\t\n").is_empty());
    }

    #[test]
    fn test_parse_trims_and_drops_blank_lines() {
        let items = parse_items("  apple \n\n banana\n   \ncherry  ");
        assert_eq!(items, vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_parse_keeps_duplicates_in_order() {
        let items = parse_items("A\nB\nB\nC");
        assert_eq!(items, vec!["A", "B", "B", "C"]);
    }

    #[test]
    fn test_parse_handles_crlf() {
        let items = parse_items("one\r\ntwo\r\n\r\nthree");
        assert_eq!(items, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_parse_keeps_inner_whitespace() {
        let items = parse_items("  Robert Downey Jr.  ");
        assert_eq!(items, vec!["Robert Downey Jr."]);
    }

    #[test]
    fn test_sample_text_round_trips() {
        let items = parse_items(&sample_text());
        assert_eq!(items.len(), SAMPLE_ITEMS.len());
        assert_eq!(items[0], "Tom Hanks");
        assert_eq!(items.last().map(String::as_str), Some("Tom Cruise"));
    }
}
