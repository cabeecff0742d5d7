//! Sample name escaping and filename helpers
//!
//! Pad names on the hardware are limited to a fixed number of characters, so
//! imported sample names have to be shortened deterministically, without two
//! different sources silently collapsing to the same pad name. `escape_name`
//! does the shortening; `escape_name_indexed` additionally disambiguates with
//! a numeric suffix when the caller detects a collision.

use std::path::Path;

use crate::error::Error;

/// Extension recognized as "already a sample file" (compared uppercased)
pub const WAV_EXTENSION: &str = ".WAV";

/// Characters that look broken when a truncated name ends on them
const TRAILING_JUNK: &[char] = &['.', ' ', '_'];

/// Check whether a path carries the `.WAV` extension, case-insensitively.
///
/// Pure predicate, no I/O. Callers use it to decide whether a transfer
/// should request conversion at all.
pub fn has_wav_extension(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().to_uppercase().ends_with(WAV_EXTENSION))
        .unwrap_or(false)
}

/// Return the name without its extension (the term after the last dot).
///
/// Names without a dot are returned unchanged.
pub fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(index) => &name[..index],
        None => name,
    }
}

/// Shorten `name` to at most `max_len` characters.
///
/// Names that already fit are returned unchanged. Otherwise the first
/// `max_len` characters are kept and surrounding whitespace is trimmed.
/// Brutal mode stops there; non-brutal mode also strips trailing dots,
/// spaces, and underscores so the result does not look cut off mid-word.
///
/// Lengths are counted in characters, not bytes, so multi-byte names are
/// never split inside a code point.
pub fn escape_name(name: &str, max_len: usize, brutal: bool) -> Result<String, Error> {
    escape_name_indexed(name, max_len, brutal, None)
}

/// Shorten `name` like [`escape_name`], then uniquify with a numeric suffix.
///
/// The suffix is appended only when `rename_index` is `Some(n)` with `n > 0`
/// *and* the truncation actually changed the name; a name that already fit
/// needs no disambiguation. `Some(0)` means "first copy" and appends nothing.
///
/// When the suffixed result would exceed `max_len`, the escaped stem is cut
/// back to make room, so the bound holds; with a `max_len` smaller than the
/// rendered index, trailing digits of the index itself are lost.
pub fn escape_name_indexed(
    name: &str,
    max_len: usize,
    brutal: bool,
    rename_index: Option<u32>,
) -> Result<String, Error> {
    if max_len == 0 {
        return Err(Error::InvalidMaxLength);
    }

    let escaped = truncate(name, max_len, brutal);

    let index = match rename_index {
        Some(index) if index > 0 && escaped != name => index,
        _ => return Ok(escaped),
    };

    let postfix = index.to_string();
    if escaped.chars().count() + postfix.len() <= max_len {
        return Ok(escaped + &postfix);
    }

    let keep = max_len.saturating_sub(postfix.len());
    let mut result: String = escaped.chars().take(keep).collect();
    result.push_str(&postfix);
    Ok(result.chars().take(max_len).collect())
}

fn truncate(name: &str, max_len: usize, brutal: bool) -> String {
    if name.chars().count() <= max_len {
        return name.to_string();
    }

    let prefix: String = name.chars().take(max_len).collect();
    let trimmed = prefix.trim();
    if brutal {
        return trimmed.to_string();
    }
    trimmed.trim_end_matches(TRAILING_JUNK).trim().to_string()
}
