use livedoc_export::build_pdf;
use livedoc_export::pdf::{content_stream, escape_pdf_string};

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Read the decimal number that follows `marker`.
fn number_after(bytes: &[u8], marker: &[u8]) -> usize {
    let start = find(bytes, marker).expect("marker present") + marker.len();
    let digits: String = bytes[start..]
        .iter()
        .skip_while(|b| b.is_ascii_whitespace())
        .take_while(|b| b.is_ascii_digit())
        .map(|&b| b as char)
        .collect();
    digits.parse().unwrap()
}

#[test]
fn starts_with_version_and_binary_marker() {
    let pdf = build_pdf("hello");
    assert!(pdf.starts_with(b"%PDF-1.4\n%\xe2\xe3\xcf\xd3\n"));
    assert!(pdf.ends_with(b"%%EOF\n"));
}

#[test]
fn output_is_deterministic() {
    assert_eq!(build_pdf("same text"), build_pdf("same text"));
    assert_ne!(build_pdf("one"), build_pdf("two"));
}

#[test]
fn special_characters_are_escaped() {
    let pdf = build_pdf("A (B) \\ C");
    assert!(find(&pdf, b"(A \\(B\\) \\\\ C) Tj").is_some());
}

#[test]
fn line_breaks_become_spaces() {
    assert_eq!(escape_pdf_string("one\ntwo\r\nthree"), "one two  three");
}

#[test]
fn backslash_is_escaped_before_parentheses() {
    assert_eq!(escape_pdf_string("\\("), "\\\\\\(");
}

#[test]
fn content_stream_draws_one_line() {
    assert_eq!(
        content_stream("Hi"),
        b"BT\n/F1 24 Tf\n72 720 Td\n(Hi) Tj\nET\n".to_vec()
    );
}

#[test]
fn xref_offsets_point_at_objects() {
    let pdf = build_pdf("offsets");
    let xref_start = find(&pdf, b"xref\n0 6\n").unwrap();
    let table = std::str::from_utf8(&pdf[xref_start..]).unwrap();
    let entries: Vec<&str> = table.lines().skip(2).take(6).collect();

    assert_eq!(entries[0], "0000000000 65535 f ");
    for (i, entry) in entries[1..].iter().enumerate() {
        assert_eq!(entry.len(), 19);
        assert!(entry.ends_with(" 00000 n "));
        let offset: usize = entry[..10].parse().unwrap();
        let expected = format!("{} 0 obj\n", i + 1);
        assert!(
            pdf[offset..].starts_with(expected.as_bytes()),
            "object {} not at offset {offset}",
            i + 1
        );
    }
}

#[test]
fn startxref_points_at_xref_table() {
    let pdf = build_pdf("startxref");
    let xref_start = find(&pdf, b"xref\n0 6\n").unwrap();
    assert_eq!(number_after(&pdf, b"startxref\n"), xref_start);
    assert!(find(&pdf, b"trailer\n<< /Size 6 /Root 1 0 R >>\n").is_some());
}

#[test]
fn stream_length_matches_content() {
    let text = "Length (check) \\ here";
    let pdf = build_pdf(text);
    let length = number_after(&pdf, b"/Length ");
    let body_start = find(&pdf, b"stream\n").unwrap() + b"stream\n".len();
    let body_end = find(&pdf, b"endstream").unwrap();
    assert_eq!(body_end - body_start, length);
    assert_eq!(&pdf[body_start..body_end], content_stream(text).as_slice());
}

#[test]
fn non_ascii_text_keeps_offsets_exact() {
    let pdf = build_pdf("Überprüfung – ✓");
    let xref_start = find(&pdf, b"xref\n0 6\n").unwrap();
    assert_eq!(number_after(&pdf, b"startxref\n"), xref_start);
}

/// Undo PDF literal-string escaping for the subset the emitter produces.
fn unescape_literal(escaped: &str) -> String {
    let mut out = String::new();
    let mut chars = escaped.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.extend(chars.next()),
            other => out.push(other),
        }
    }
    out
}

#[test]
fn drawn_text_unescapes_to_input_with_collapsed_breaks() {
    let input = "Title (draft)\nline \\ two\r\n)(";
    let pdf = build_pdf(input);
    let text = String::from_utf8_lossy(&pdf);

    let start = text.find("Td\n(").unwrap() + "Td\n(".len();
    let end = text.rfind(") Tj\n").unwrap();
    assert_eq!(
        unescape_literal(&text[start..end]),
        "Title (draft) line \\ two  )("
    );
}
