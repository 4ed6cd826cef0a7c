//! Display ordering for indicator codes.
//!
//! `None` sorts first, dotted-numeric codes follow in numeric tuple order
//! (`2.3` < `2.3.7` < `2.10`), and anything else keeps its encounter order
//! at the end.

use std::cmp::Ordering;

/// Code of the synthetic "no standard" catalog entry.
pub const NONE_CODE: &str = "None";

/// Sort bucket of a single code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum CodeKey {
    None,
    Numeric(Vec<u64>),
    /// Codes that are not dot-separated integers. All compare equal so a
    /// stable sort keeps their encounter order.
    Other,
}

pub fn sort_key(code: &str) -> CodeKey {
    if code == NONE_CODE {
        return CodeKey::None;
    }
    numeric_key(code).map_or(CodeKey::Other, CodeKey::Numeric)
}

/// Components of a dotted-numeric code, or `None` when any component is
/// empty, non-digit, or too large.
pub fn numeric_key(code: &str) -> Option<Vec<u64>> {
    code.split('.')
        .map(|part| {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            part.parse().ok()
        })
        .collect()
}

pub fn compare_codes(left: &str, right: &str) -> Ordering {
    sort_key(left).cmp(&sort_key(right))
}

/// Sort `(code, description)` pairs for display.
///
/// The sort is stable, so codes in the fallback bucket stay in the order
/// they were supplied.
pub fn ordered_entries<'a, I>(entries: I) -> Vec<(&'a str, &'a str)>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut ordered: Vec<(CodeKey, (&'a str, &'a str))> = entries
        .into_iter()
        .map(|entry| (sort_key(entry.0), entry))
        .collect();
    ordered.sort_by(|a, b| a.0.cmp(&b.0));
    ordered.into_iter().map(|(_, entry)| entry).collect()
}

/// Sort bare codes with the same rules as [`ordered_entries`].
pub fn ordered_codes<'a, I>(codes: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    ordered_entries(codes.into_iter().map(|code| (code, "")))
        .into_iter()
        .map(|(code, _)| code)
        .collect()
}
