//! Parsing for the bracket-delimited command arguments: `add <content>`,
//! `done [id]`, `delete [id]`.

/// Text between the first `open` and the first `close` in `input`.
///
/// `None` when either delimiter is missing or `close` comes first.
pub fn delimited(input: &str, open: char, close: char) -> Option<&str> {
    let start = input.find(open)?;
    let end = input.find(close)?;
    if start >= end {
        return None;
    }
    Some(&input[start + open.len_utf8()..end])
}

/// Task content from a `<...>` argument. Blank content is rejected.
pub fn parse_content(arg: &str) -> Option<String> {
    delimited(arg, '<', '>')
        .filter(|content| !content.trim().is_empty())
        .map(str::to_string)
}

/// Task id from a `[...]` argument.
///
/// Leading whitespace and a `+` sign are skipped, then the leading digits are
/// read; anything after them is ignored, so `[12abc]` is 12.
pub fn parse_id(arg: &str) -> Option<u64> {
    let inner = delimited(arg, '[', ']')?.trim_start();
    let inner = inner.strip_prefix('+').unwrap_or(inner);
    let digits_end = inner
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(inner.len());
    inner[..digits_end].parse().ok()
}

/// [`parse_id`] with malformed or missing input mapped to 0, an id no task
/// ever has.
pub fn id_or_zero(arg: Option<&str>) -> u64 {
    arg.and_then(parse_id).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimited_extracts_inner_text() {
        assert_eq!(delimited("<buy milk>", '<', '>'), Some("buy milk"));
        assert_eq!(delimited("x[3]y", '[', ']'), Some("3"));
        assert_eq!(delimited("<>", '<', '>'), Some(""));
    }

    #[test]
    fn delimited_rejects_missing_or_reversed() {
        assert_eq!(delimited("buy milk", '<', '>'), None);
        assert_eq!(delimited("<buy milk", '<', '>'), None);
        assert_eq!(delimited("buy milk>", '<', '>'), None);
        assert_eq!(delimited(">buy<", '<', '>'), None);
    }

    #[test]
    fn delimited_uses_first_occurrences() {
        assert_eq!(delimited("<a> <b>", '<', '>'), Some("a"));
    }

    #[test]
    fn content_requires_non_blank_payload() {
        assert_eq!(parse_content("<buy milk>").as_deref(), Some("buy milk"));
        assert_eq!(parse_content("<>"), None);
        assert_eq!(parse_content("<   >"), None);
        assert_eq!(parse_content("buy milk"), None);
    }

    #[test]
    fn content_keeps_non_ascii_text() {
        assert_eq!(parse_content("<买牛奶>").as_deref(), Some("买牛奶"));
    }

    #[test]
    fn id_parses_leading_digits() {
        assert_eq!(parse_id("[2]"), Some(2));
        assert_eq!(parse_id("[ 7]"), Some(7));
        assert_eq!(parse_id("[+4]"), Some(4));
        assert_eq!(parse_id("[12abc]"), Some(12));
    }

    #[test]
    fn id_rejects_non_numeric() {
        assert_eq!(parse_id("[abc]"), None);
        assert_eq!(parse_id("[-1]"), None);
        assert_eq!(parse_id("[]"), None);
        assert_eq!(parse_id("2"), None);
        assert_eq!(parse_id("[99999999999999999999999]"), None);
    }

    #[test]
    fn malformed_id_becomes_zero() {
        assert_eq!(id_or_zero(Some("[3]")), 3);
        assert_eq!(id_or_zero(Some("3")), 0);
        assert_eq!(id_or_zero(Some("[x]")), 0);
        assert_eq!(id_or_zero(None), 0);
    }
}
