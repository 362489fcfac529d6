/// Split raw text into paragraphs on newline boundaries.
///
/// Empty segments (blank lines) are dropped; everything else is kept verbatim,
/// so concatenating the result reproduces the source modulo the delimiters.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    text.split('\n').filter(|paragraph| !paragraph.is_empty()).collect()
}
