//! Filename sanitization
//!
//! Maps arbitrary display names to stems that are valid on Windows, macOS
//! and Linux filesystems.

/// Stem used when nothing usable is left of a name
pub const FALLBACK_STEM: &str = "unnamed";

/// Longest stem in bytes, leaving room for the extension and a temp suffix
const MAX_STEM_BYTES: usize = 200;

/// Device names Windows refuses as file names, with or without extension
const RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Sanitize a display name into a file stem
///
/// Illegal path characters and control characters become `_`, surrounding
/// whitespace and dots are trimmed, and the result is capped in length.
/// Sanitizing an already sanitized stem returns it unchanged.
pub fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            _ => c,
        })
        .collect();

    let stem = trim_stem(truncate_on_char_boundary(trim_stem(&cleaned), MAX_STEM_BYTES));
    if stem.is_empty() {
        return FALLBACK_STEM.to_string();
    }

    // Escaping inserts one byte after the base, so cap the length once more.
    // The cut lands past the inserted `_` and cannot re-expose a reserved base.
    let escaped = escape_reserved(stem);
    trim_stem(truncate_on_char_boundary(&escaped, MAX_STEM_BYTES)).to_string()
}

fn trim_stem(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '.')
}

fn truncate_on_char_boundary(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Append `_` to the part before the first dot if it is a reserved device name
fn escape_reserved(stem: &str) -> String {
    let (base, rest) = match stem.find('.') {
        Some(pos) => stem.split_at(pos),
        None => (stem, ""),
    };

    if RESERVED_NAMES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(base))
    {
        format!("{}_{}", base, rest)
    } else {
        stem.to_string()
    }
}
