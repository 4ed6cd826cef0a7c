//! Standards document parser.
//!
//! A standards document nests three levels of line-oriented markers:
//!
//! ```text
//! ## Domain 2 - Algorithms and Programming
//! ### Standard 2.3 - Develop and debug programs
//! * **2.3.7** Debug errors to ensure functionality
//! ```
//!
//! Only indicator lines end up in the output map. Domain and standard headers
//! delimit sections and are counted in the [`ParseReport`]. The scan runs in
//! three passes (domains, then standards inside each domain, then indicator
//! lines inside each standard) and is best-effort: a section that yields
//! nothing is reported as a [`SectionIssue`] and the scan moves on.

use std::fmt;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, debug_span, warn};

use crate::error::{Result, StandardsError};
use crate::map::IndicatorMap;
use crate::ordering::numeric_key;

/// Dash characters accepted between a header number and its title.
const HEADER_DASHES: [char; 3] = ['-', '\u{2013}', '\u{2014}'];

/// Result of parsing one standards document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedStandards {
    pub indicators: IndicatorMap,
    pub report: ParseReport,
}

/// Counts and diagnostics collected while parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseReport {
    /// Domain headers found.
    pub domains: usize,
    /// Standard headers found inside a domain.
    pub standards: usize,
    /// Indicator lines accepted, duplicates included.
    pub indicator_lines: usize,
    /// Indicator lines whose code had already been seen.
    pub duplicates: usize,
    pub issues: Vec<SectionIssue>,
}

/// A section that contributed no entries, or a line that was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionIssue {
    /// 1-based line number of the header or rejected line.
    pub line: usize,
    #[serde(flatten)]
    pub kind: IssueKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IssueKind {
    /// Domain header with no standard headers beneath it.
    EmptyDomain { domain: String, name: String },
    /// Standard header with no indicator lines beneath it.
    EmptyStandard { standard: String },
    /// Bullet that opens like an indicator but does not match the grammar.
    MalformedIndicator { text: String },
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDomain { domain, name } => {
                write!(f, "domain {domain} ({name}) has no standards")
            }
            Self::EmptyStandard { standard } => write!(f, "standard {standard} has no indicators"),
            Self::MalformedIndicator { text } => write!(f, "malformed indicator line: {text}"),
        }
    }
}

impl fmt::Display for SectionIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}

/// Parse the standards document at `path`.
///
/// # Errors
///
/// Returns [`StandardsError::DocumentUnavailable`] when the file cannot be
/// read as UTF-8 text. Structural problems never produce an error.
pub fn parse_file(path: &Path) -> Result<ParsedStandards> {
    let text =
        std::fs::read_to_string(path).map_err(|source| StandardsError::unavailable(path, source))?;
    let parsed = parse_document(&text);
    debug!(
        path = %path.display(),
        domains = parsed.report.domains,
        standards = parsed.report.standards,
        indicators = parsed.indicators.len(),
        issues = parsed.report.issues.len(),
        "parsed standards document"
    );
    Ok(parsed)
}

/// Best-effort load of the indicator map at `path`.
///
/// An unavailable document is logged and yields an empty map.
pub fn load_indicators(path: &Path) -> IndicatorMap {
    match parse_file(path) {
        Ok(parsed) => parsed.indicators,
        Err(error) => {
            warn!(path = %path.display(), %error, "standards document unavailable");
            IndicatorMap::new()
        }
    }
}

/// Parse standards document text.
pub fn parse_document(text: &str) -> ParsedStandards {
    let text = text.trim_start_matches('\u{feff}');
    let lines: Vec<Line<'_>> = text
        .lines()
        .enumerate()
        .map(|(index, text)| Line {
            number: index + 1,
            text,
        })
        .collect();

    let mut parsed = ParsedStandards::default();
    for domain in split_sections(&lines, parse_domain_header) {
        parsed.report.domains += 1;
        let _domain_span = debug_span!("domain", number = domain.header.number).entered();

        let standards = split_sections(domain.body, parse_standard_header);
        if standards.is_empty() {
            push_issue(
                &mut parsed.report,
                domain.line,
                IssueKind::EmptyDomain {
                    domain: domain.header.number.to_string(),
                    name: domain.header.name.to_string(),
                },
            );
            continue;
        }

        for standard in standards {
            parsed.report.standards += 1;
            let _standard_span = debug_span!(
                "standard",
                number = standard.header.number,
                description = standard.header.description
            )
            .entered();
            let accepted = scan_indicators(standard.body, &mut parsed);
            if accepted == 0 {
                push_issue(
                    &mut parsed.report,
                    standard.line,
                    IssueKind::EmptyStandard {
                        standard: standard.header.number.to_string(),
                    },
                );
            }
        }
    }
    parsed
}

/// Insert every indicator line of a standard section, returning how many
/// lines were accepted.
fn scan_indicators(body: &[Line<'_>], parsed: &mut ParsedStandards) -> usize {
    let mut accepted = 0;
    for line in body {
        match parse_indicator_line(line.text) {
            IndicatorLine::Entry { code, description } => {
                accepted += 1;
                parsed.report.indicator_lines += 1;
                if numeric_key(code).is_none() {
                    debug!(line = line.number, code, "indicator code is not dotted-numeric");
                }
                if parsed.indicators.insert(code, description).is_some() {
                    parsed.report.duplicates += 1;
                    debug!(line = line.number, code, "duplicate indicator code, later line wins");
                }
            }
            IndicatorLine::Malformed => push_issue(
                &mut parsed.report,
                line.number,
                IssueKind::MalformedIndicator {
                    text: line.text.trim().to_string(),
                },
            ),
            IndicatorLine::Other => {}
        }
    }
    accepted
}

fn push_issue(report: &mut ParseReport, line: usize, kind: IssueKind) {
    let issue = SectionIssue { line, kind };
    match issue.kind {
        IssueKind::MalformedIndicator { .. } => debug!(line, "{issue}"),
        IssueKind::EmptyDomain { .. } | IssueKind::EmptyStandard { .. } => warn!(line, "{issue}"),
    }
    report.issues.push(issue);
}

// =============================================================================
// Sections
// =============================================================================

#[derive(Debug, Clone, Copy)]
struct Line<'a> {
    number: usize,
    text: &'a str,
}

struct Section<'a, H> {
    header: H,
    line: usize,
    body: &'a [Line<'a>],
}

/// Split `lines` at every line accepted by `parse_header`.
///
/// Lines before the first header are dropped. Each body runs up to the next
/// header or the end of `lines`.
fn split_sections<'a, H>(
    lines: &'a [Line<'a>],
    parse_header: impl Fn(&'a str) -> Option<H>,
) -> Vec<Section<'a, H>> {
    let headers: Vec<(usize, H)> = lines
        .iter()
        .enumerate()
        .filter_map(|(index, line)| parse_header(line.text).map(|header| (index, header)))
        .collect();

    let starts: Vec<usize> = headers.iter().map(|(index, _)| *index).collect();
    headers
        .into_iter()
        .enumerate()
        .map(|(position, (index, header))| {
            let end = starts.get(position + 1).copied().unwrap_or(lines.len());
            Section {
                header,
                line: lines[index].number,
                body: &lines[index + 1..end],
            }
        })
        .collect()
}

// =============================================================================
// Line grammar
// =============================================================================

#[derive(Debug, PartialEq, Eq)]
struct DomainHeader<'a> {
    number: &'a str,
    name: &'a str,
}

#[derive(Debug, PartialEq, Eq)]
struct StandardHeader<'a> {
    number: &'a str,
    description: &'a str,
}

#[derive(Debug, PartialEq, Eq)]
enum IndicatorLine<'a> {
    Entry { code: &'a str, description: &'a str },
    Malformed,
    Other,
}

/// `Domain <integer> <dash> <name>`
///
/// The number is kept as written, so any run of digits is accepted.
fn parse_domain_header(line: &str) -> Option<DomainHeader<'_>> {
    let rest = header_keyword(line, "Domain")?;
    let (number, rest) = split_leading(rest, |c| c.is_ascii_digit());
    if number.is_empty() {
        return None;
    }
    let name = after_dash(rest)?;
    Some(DomainHeader { number, name })
}

/// `Standard <dotted-number> <dash> <description>`
fn parse_standard_header(line: &str) -> Option<StandardHeader<'_>> {
    let rest = header_keyword(line, "Standard")?;
    let (number, rest) = split_leading(rest, |c| c.is_ascii_digit() || c == '.');
    if !is_dotted_number(number) {
        return None;
    }
    let description = after_dash(rest)?;
    Some(StandardHeader {
        number,
        description,
    })
}

/// `* **<code>** <description>`
fn parse_indicator_line(line: &str) -> IndicatorLine<'_> {
    let Some(rest) = line.trim().strip_prefix('*') else {
        return IndicatorLine::Other;
    };
    let Some(rest) = rest.strip_prefix(char::is_whitespace) else {
        return IndicatorLine::Other;
    };
    let Some(rest) = rest.trim_start().strip_prefix("**") else {
        return IndicatorLine::Other;
    };
    let Some((code, description)) = rest.split_once("**") else {
        return IndicatorLine::Malformed;
    };
    let code = code.trim();
    let description = description.trim();
    if !is_indicator_code(code) || description.is_empty() {
        return IndicatorLine::Malformed;
    }
    IndicatorLine::Entry { code, description }
}

/// Strip heading markers and whole-line bold, then the keyword and the
/// whitespace that must follow it.
fn header_keyword<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let mut text = line.trim().trim_start_matches('#').trim();
    if let Some(inner) = text.strip_prefix("**").and_then(|t| t.strip_suffix("**")) {
        text = inner.trim();
    }
    let rest = text.strip_prefix(keyword)?;
    let rest = rest.strip_prefix(char::is_whitespace)?;
    Some(rest.trim_start())
}

fn split_leading(text: &str, accept: impl Fn(char) -> bool) -> (&str, &str) {
    let end = text.find(|c: char| !accept(c)).unwrap_or(text.len());
    text.split_at(end)
}

/// Title after the separating dash, which must be non-empty.
fn after_dash(text: &str) -> Option<&str> {
    let title = text.trim_start().strip_prefix(HEADER_DASHES)?.trim();
    (!title.is_empty()).then_some(title)
}

fn is_dotted_number(text: &str) -> bool {
    !text.is_empty()
        && text
            .split('.')
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
}

fn is_indicator_code(code: &str) -> bool {
    let mut chars = code.chars();
    matches!(chars.next(), Some(first) if first.is_ascii_alphanumeric())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_header_accepts_all_dashes() {
        for line in [
            "Domain 2 - Algorithms",
            "## Domain 2 \u{2013} Algorithms",
            "# Domain 2\u{2014}Algorithms",
            "**Domain 2 - Algorithms**",
        ] {
            assert_eq!(
                parse_domain_header(line),
                Some(DomainHeader {
                    number: "2",
                    name: "Algorithms"
                }),
                "line: {line}"
            );
        }
    }

    #[test]
    fn domain_header_rejects_prose() {
        assert_eq!(parse_domain_header("Domain knowledge - useful"), None);
        assert_eq!(parse_domain_header("Domain 2"), None);
        assert_eq!(parse_domain_header("Domain 2 -   "), None);
        assert_eq!(parse_domain_header("Domain2 - Algorithms"), None);
        assert_eq!(parse_domain_header("domain 2 - Algorithms"), None);
    }

    #[test]
    fn standard_header_requires_dotted_number() {
        assert_eq!(
            parse_standard_header("### Standard 2.3 - Develop programs"),
            Some(StandardHeader {
                number: "2.3",
                description: "Develop programs"
            })
        );
        assert_eq!(parse_standard_header("Standard 2..3 - Broken"), None);
        assert_eq!(parse_standard_header("Standard 2.3. - Broken"), None);
        assert_eq!(parse_standard_header("Standard practice - prose"), None);
    }

    #[test]
    fn indicator_line_variants() {
        assert_eq!(
            parse_indicator_line("  * **2.3.7**   Debug errors to ensure functionality  "),
            IndicatorLine::Entry {
                code: "2.3.7",
                description: "Debug errors to ensure functionality"
            }
        );
        assert_eq!(
            parse_indicator_line("* **1A-AP-08** Model daily processes"),
            IndicatorLine::Entry {
                code: "1A-AP-08",
                description: "Model daily processes"
            }
        );
        assert_eq!(parse_indicator_line("* plain bullet"), IndicatorLine::Other);
        assert_eq!(parse_indicator_line("**2.3.7** no bullet"), IndicatorLine::Other);
        assert_eq!(parse_indicator_line("* **2.3.7** "), IndicatorLine::Malformed);
        assert_eq!(parse_indicator_line("* **2.3.7 unclosed"), IndicatorLine::Malformed);
        assert_eq!(parse_indicator_line("* **.3.7** odd code"), IndicatorLine::Malformed);
    }

    #[test]
    fn preamble_and_orphan_lines_are_ignored() {
        let text = "\
# Intro CS
* **9.9.9** before any domain
## Domain 1 - Computing Systems
* **8.8.8** before any standard
### Standard 1.1 - Devices
* **1.1.1** Describe devices
";
        let parsed = parse_document(text);
        assert_eq!(parsed.indicators.len(), 1);
        assert_eq!(parsed.indicators.get("1.1.1"), Some("Describe devices"));
        assert_eq!(parsed.report.domains, 1);
        assert_eq!(parsed.report.standards, 1);
    }

    #[test]
    fn empty_sections_are_reported() {
        let text = "\
Domain 1 - Empty
Domain 2 - Has a bare standard
Standard 2.1 - Nothing below
Some prose.
* **2.1.1
";
        let parsed = parse_document(text);
        assert!(parsed.indicators.is_empty());
        assert_eq!(
            parsed.report.issues,
            vec![
                SectionIssue {
                    line: 1,
                    kind: IssueKind::EmptyDomain {
                        domain: "1".to_string(),
                        name: "Empty".to_string()
                    }
                },
                SectionIssue {
                    line: 5,
                    kind: IssueKind::MalformedIndicator {
                        text: "* **2.1.1".to_string()
                    }
                },
                SectionIssue {
                    line: 3,
                    kind: IssueKind::EmptyStandard {
                        standard: "2.1".to_string()
                    }
                },
            ]
        );
    }

    #[test]
    fn byte_order_mark_and_crlf_are_tolerated() {
        let text = "\u{feff}Domain 1 - A\r\nStandard 1.1 - B\r\n* **1.1.1** C\r\n";
        let parsed = parse_document(text);
        assert_eq!(parsed.indicators.get("1.1.1"), Some("C"));
    }

    #[test]
    fn issue_display() {
        let issue = SectionIssue {
            line: 12,
            kind: IssueKind::EmptyStandard {
                standard: "2.4".to_string(),
            },
        };
        assert_eq!(issue.to_string(), "line 12: standard 2.4 has no indicators");
        assert_eq!(issue.kind.to_string(), "standard 2.4 has no indicators");
    }

    #[test]
    fn oversized_domain_number_still_opens_a_section() {
        let text = "\
Domain 1 - First
Standard 1.1 - A
* **1.1.1** Kept in domain one
Domain 4294967296 - Huge
Domain 18446744073709551616 - Huger
Standard 9.1 - B
* **9.1.1** Belongs to the huge domain
";
        let parsed = parse_document(text);
        assert_eq!(parsed.report.domains, 3);
        assert_eq!(parsed.report.standards, 2);
        assert_eq!(
            parsed.report.issues,
            vec![SectionIssue {
                line: 4,
                kind: IssueKind::EmptyDomain {
                    domain: "4294967296".to_string(),
                    name: "Huge".to_string()
                }
            }]
        );
        assert_eq!(
            parsed.indicators.get("9.1.1"),
            Some("Belongs to the huge domain")
        );
    }
}
