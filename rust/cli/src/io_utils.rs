//! File input helpers for record files.
//!
//! `read_text_auto` reads plain or Zstandard-compressed (`.zst`) files and
//! strips a leading UTF-8 BOM so the first JSONL line parses cleanly.

/// Read text file with automatic .zst decompression detection.
///
/// # Example
///
/// ```rust,no_run
/// # use fairdeal_cli::io_utils::read_text_auto;
/// let plain = read_text_auto("deals.jsonl").unwrap();
/// let compressed = read_text_auto("deals.jsonl.zst").unwrap();
/// ```
pub fn read_text_auto(path: &str) -> Result<String, String> {
    let mut content = if path.ends_with(".zst") {
        let file = std::fs::File::open(path).map_err(|e| e.to_string())?;
        let dec = zstd::stream::decode_all(file).map_err(|e| e.to_string())?;
        String::from_utf8(dec).map_err(|e| e.to_string())?
    } else {
        std::fs::read_to_string(path).map_err(|e| e.to_string())?
    };
    strip_utf8_bom(&mut content);
    Ok(content)
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
