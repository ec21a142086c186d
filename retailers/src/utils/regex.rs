use regex::Regex;

/// Text of the first capture group of the leftmost match.
pub(crate) fn first_capture<'h>(regex: &Regex, haystack: &'h str) -> Option<&'h str> {
    let captures = regex.captures(haystack)?;

    captures.get(1).map(|group| group.as_str())
}
