use bell_standards::{
    DEFAULT_STANDARDS, IndicatorMap, IssueKind, default_indicators, default_standards_file,
    parse_document, parse_file,
};

/// Rebuild the default table as a standards document, one domain per grade
/// band (`1A`, `1B`, `2`, `3A`, `3B`).
fn defaults_as_document() -> String {
    let mut bands: Vec<(&str, Vec<(&str, &str)>)> = Vec::new();
    for &(code, description) in DEFAULT_STANDARDS {
        let band = code.split('-').next().unwrap_or(code);
        match bands.last_mut() {
            Some((current, entries)) if *current == band => entries.push((code, description)),
            _ => bands.push((band, vec![(code, description)])),
        }
    }

    let mut text = String::from("# CSTA Algorithms & Programming\n\nPreamble text.\n\n");
    for (index, (band, entries)) in bands.iter().enumerate() {
        let number = index + 1;
        text.push_str(&format!("## Domain {number} - Grade band {band}\n\n"));
        text.push_str(&format!("### Standard {number}.1 - Algorithms and programming\n"));
        for (code, description) in entries {
            text.push_str(&format!("* **{code}** {description}\n"));
        }
        text.push('\n');
    }
    text
}

#[test]
fn defaults_round_trip_through_the_grammar() {
    let parsed = parse_document(&defaults_as_document());
    assert_eq!(parsed.indicators, default_indicators());
    assert_eq!(parsed.report.domains, 5);
    assert_eq!(parsed.report.standards, 5);
    assert!(parsed.report.issues.is_empty());
}

#[test]
fn every_indicator_line_is_keyed_by_exact_code() {
    let text = "\
Domain 1 - Computing Systems
Standard 1.1 - Devices
*   **1.1.1**    Identify hardware components
* **1.1.2** Explain input and output
Standard 1.2 - Troubleshooting
* **1.2.1** Diagnose problems
";
    let parsed = parse_document(text);
    let expected: IndicatorMap = [
        ("1.1.1", "Identify hardware components"),
        ("1.1.2", "Explain input and output"),
        ("1.2.1", "Diagnose problems"),
    ]
    .into_iter()
    .collect();
    assert_eq!(parsed.indicators, expected);
    assert_eq!(parsed.report.indicator_lines, 3);
}

#[test]
fn duplicate_code_keeps_later_description() {
    let text = "\
Domain 1 - Computing Systems
Standard 1.1 - Devices
* **1.1.1** First description
Standard 1.2 - Troubleshooting
* **1.1.1** Second description
";
    let parsed = parse_document(text);
    assert_eq!(parsed.indicators.len(), 1);
    assert_eq!(parsed.indicators.get("1.1.1"), Some("Second description"));
    assert_eq!(parsed.report.duplicates, 1);
    assert!(parsed.report.issues.is_empty());
}

#[test]
fn malformed_middle_block_contributes_nothing() {
    let text = "\
## Domain 1 - Computing Systems
### Standard 1.1 - Devices
* **1.1.1** Identify hardware components
* **1.1.2** Explain input and output

## Domain 2 - Networks
### Standard 2.1 - Communication
Prose without any indicator bullets.
";
    let parsed = parse_document(text);
    assert_eq!(
        parsed.indicators.codes().collect::<Vec<_>>(),
        vec!["1.1.1", "1.1.2"]
    );
    assert_eq!(parsed.report.domains, 2);
    assert_eq!(parsed.report.issues.len(), 1);
    assert!(matches!(
        &parsed.report.issues[0].kind,
        IssueKind::EmptyStandard { standard } if standard == "2.1"
    ));
    assert_eq!(parsed.report.issues[0].line, 7);
}

#[test]
fn parsing_is_idempotent() {
    let text = defaults_as_document();
    assert_eq!(parse_document(&text), parse_document(&text));
}

#[test]
fn missing_file_is_document_unavailable() {
    let path = std::env::temp_dir().join(format!(
        "bellringers-missing-{}/Intro_CS.md",
        std::process::id()
    ));
    let error = parse_file(&path).expect_err("missing file should not parse");
    assert_eq!(error.path(), path.as_path());
    assert!(error.to_string().contains("standards document unavailable"));
    assert!(bell_standards::load_indicators(&path).is_empty());
}

#[test]
fn bundled_document_parses_cleanly() {
    let parsed = parse_file(&default_standards_file()).expect("bundled standards document");
    assert_eq!(parsed.report.domains, 5);
    assert_eq!(parsed.report.standards, 11);
    assert_eq!(parsed.indicators.len(), 20);
    assert!(parsed.report.issues.is_empty());
    assert_eq!(
        parsed.indicators.get("4.10.1"),
        Some("Debug errors to ensure functionality")
    );
}

#[test]
fn report_snapshot() {
    let text = "\
Intro paragraph.
## Domain 1 - Computing Systems
### Standard 1.1 - Devices
* **1.1.1** Identify hardware components
* **1.1.1** Identify hardware and software components
* **oops
## Domain 2 - Networks
## Domain 3 - Data
### Standard 3.1 - Storage
";
    let parsed = parse_document(text);
    insta::assert_json_snapshot!(parsed.report, @r###"
    {
      "domains": 3,
      "standards": 2,
      "indicator_lines": 2,
      "duplicates": 1,
      "issues": [
        {
          "line": 6,
          "kind": "malformed_indicator",
          "text": "* **oops"
        },
        {
          "line": 7,
          "kind": "empty_domain",
          "domain": "2",
          "name": "Networks"
        },
        {
          "line": 9,
          "kind": "empty_standard",
          "standard": "3.1"
        }
      ]
    }
    "###);
}
