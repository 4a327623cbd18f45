//! Minimal single-page PDF 1.4 container.
//!
//! Layout is fixed: header, five objects (catalog, pages, page, font,
//! content stream), cross-reference table, trailer. Output depends only on
//! the input text, so identical input gives identical bytes.

/// Version line plus a comment of four high-bit bytes marking the file as binary.
const HEADER: &[u8] = b"%PDF-1.4\n%\xe2\xe3\xcf\xd3\n";

/// Letter size in points.
const MEDIA_BOX: &str = "0 0 612 792";

const FONT_SIZE: u32 = 24;
const ORIGIN_X: u32 = 72;
const ORIGIN_Y: u32 = 720;

/// Escape text for a PDF literal string.
///
/// Backslashes go first so the escapes added for parentheses are not
/// doubled. Literal strings cannot carry raw line breaks here, so CR and LF
/// become spaces.
pub fn escape_pdf_string(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('(', "\\(")
        .replace(')', "\\)")
        .replace(['\r', '\n'], " ")
}

/// The text-drawing instructions for `text`.
pub fn content_stream(text: &str) -> Vec<u8> {
    format!(
        "BT\n/F1 {FONT_SIZE} Tf\n{ORIGIN_X} {ORIGIN_Y} Td\n({}) Tj\nET\n",
        escape_pdf_string(text)
    )
    .into_bytes()
}

/// Build the complete container for `text`.
pub fn build_pdf(text: &str) -> Vec<u8> {
    let stream = content_stream(text);

    let mut stream_object = format!("5 0 obj\n<< /Length {} >>\nstream\n", stream.len()).into_bytes();
    stream_object.extend_from_slice(&stream);
    stream_object.extend_from_slice(b"endstream\nendobj\n");

    let objects: [Vec<u8>; 5] = [
        b"1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n".to_vec(),
        b"2 0 obj\n<< /Type /Pages /Kids [3 0 R] /Count 1 >>\nendobj\n".to_vec(),
        format!(
            "3 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [{MEDIA_BOX}] \
             /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>\nendobj\n"
        )
        .into_bytes(),
        b"4 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>\nendobj\n".to_vec(),
        stream_object,
    ];

    let mut out = Vec::with_capacity(HEADER.len() + objects.iter().map(Vec::len).sum::<usize>() + 256);
    out.extend_from_slice(HEADER);

    let mut offsets = Vec::with_capacity(objects.len());
    for object in &objects {
        offsets.push(out.len());
        out.extend_from_slice(object);
    }

    let xref_start = out.len();
    let size = objects.len() + 1;
    let entries: String = offsets
        .iter()
        .map(|offset| format!("{offset:010} 00000 n \n"))
        .collect();
    let tail = format!(
        "xref\n0 {size}\n0000000000 65535 f \n{entries}\
         trailer\n<< /Size {size} /Root 1 0 R >>\nstartxref\n{xref_start}\n%%EOF\n"
    );
    out.extend_from_slice(tail.as_bytes());
    out
}
