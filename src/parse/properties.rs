//! Comma-delimited `key=value` property string parsing.

use std::collections::BTreeMap;

/// Parse a string of zero or more comma-delimited `key=value` pairs.
///
/// A comma counts as a pair boundary only when what follows it looks like the
/// start of a new key: at least one non-`=` character and then an `=`. This
/// lets values contain commas as long as no `key=` shape follows, e.g.
/// `jvm.opts=-Xmx1g,-Xms512m` stays a single pair when the comma-separated
/// run contains no further `=`.
///
/// Keys and values are trimmed before storage. A segment without `=` is
/// silently dropped rather than treated as a boolean flag, and duplicate keys
/// overwrite earlier values.
///
/// # Arguments
///
/// * `text` - The raw property string (may be empty or whitespace-only)
///
/// # Returns
///
/// A map of parsed key/value pairs; empty for empty or whitespace-only input.
pub fn parse_properties(text: &str) -> BTreeMap<String, String> {
    let mut properties = BTreeMap::new();
    if text.trim().is_empty() {
        return properties;
    }

    let bytes = text.as_bytes();
    let mut segment_start = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b',' {
            if let Some(eq_offset) = key_shape_ahead(&text[i + 1..]) {
                add_key_value_pair(&text[segment_start..i], &mut properties);
                segment_start = i + 1;
                // Resume scanning after the `=` that completed the boundary,
                // so commas inside the upcoming key run are not re-examined.
                i = i + 1 + eq_offset + 1;
                continue;
            }
        }
        i += 1;
    }
    add_key_value_pair(&text[segment_start..], &mut properties);

    properties
}

/// Check whether `rest` opens with a new-key shape: a non-empty run of
/// non-`=` characters followed by `=`. Returns the byte offset of that `=`.
fn key_shape_ahead(rest: &str) -> Option<usize> {
    rest.find('=').filter(|&eq| eq >= 1)
}

/// Split a `key=value` segment on its first `=` and store the trimmed pair.
///
/// Segments without `=` are dropped.
fn add_key_value_pair(segment: &str, properties: &mut BTreeMap<String, String>) {
    if let Some((key, value)) = segment.split_once('=') {
        properties.insert(key.trim().to_string(), value.trim().to_string());
    }
}
