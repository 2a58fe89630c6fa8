// LRC parsing: tag extraction, text cleanup and ordering

use serenade_wasm::parse::{parse_lrc, parse_timestamp_tag, SILENT_LINE_TEXT};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_empty_input_yields_no_entries() {
    assert!(parse_lrc("").is_empty());
    assert!(parse_lrc("\n\n   \n").is_empty());
}

#[test]
fn test_multiple_tags_repeat_text() {
    let entries = parse_lrc("[00:01.00][00:03.50]Hello");

    assert_eq!(entries.len(), 2);
    assert!(approx(entries[0].timestamp, 1.0));
    assert!(approx(entries[1].timestamp, 3.5));
    assert_eq!(entries[0].text, "Hello");
    assert_eq!(entries[1].text, "Hello");
}

#[test]
fn test_single_fraction_digit_padded() {
    // minutes=1, seconds=2, fraction "3" -> "30" hundredths
    assert!(approx(parse_timestamp_tag("[1:2.3]").unwrap(), 62.30));

    let entries = parse_lrc("[1:2.3]words");
    assert_eq!(entries.len(), 1);
    assert!(approx(entries[0].timestamp, 62.30));
}

#[test]
fn test_output_sorted_by_timestamp() {
    let text = "\
[00:30.00]third
[00:10.00]first
[00:20.00][00:40.00]second and fourth
";
    let entries = parse_lrc(text);
    let texts: Vec<&str> = entries.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["first", "second and fourth", "third", "second and fourth"]);
    assert!(entries.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
}

#[test]
fn test_equal_timestamps_keep_source_order() {
    let entries = parse_lrc("[00:05.00]a\n[00:05.00]b\n[00:01.00]c");
    let texts: Vec<&str> = entries.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["c", "a", "b"]);
}

#[test]
fn test_untagged_and_metadata_lines_skipped() {
    let text = "\
[ti:Some Song]
[ar:Someone]
plain comment line
[00:02.00]sung line
";
    let entries = parse_lrc(text);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].text, "sung line");
}

#[test]
fn test_instrumental_row_is_space() {
    let entries = parse_lrc("[00:00.00]\n[00:04.00]  \t");
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| e.text == SILENT_LINE_TEXT));
}

#[test]
fn test_three_digit_fraction_not_a_tag() {
    assert!(parse_timestamp_tag("[00:01.123]").is_none());
    assert!(parse_lrc("[00:01.123]nope").is_empty());
}

#[test]
fn test_non_ascii_digit_tags_produce_no_entries() {
    // Arabic-Indic digits are not timestamps
    let entries = parse_lrc("[٠١:٢٣]ghost\n[00:05.00]real");

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].text, "real");
    assert!(approx(entries[0].timestamp, 5.0));
}

#[test]
fn test_bare_carriage_returns_are_removed() {
    let entries = parse_lrc("[00:01.00]a\r[00:02.00]b");

    assert_eq!(entries.len(), 2);
    assert!(approx(entries[0].timestamp, 1.0));
    assert!(approx(entries[1].timestamp, 2.0));
    assert!(entries.iter().all(|e| e.text == "ab"));
}
