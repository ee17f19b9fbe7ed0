//! Version-4 UUID text validation

use once_cell::sync::Lazy;
use regex::Regex;

/// Lowercase hyphenated version-4 UUID: version nibble `4`, variant `8`/`9`/`a`/`b`.
static UUID_V4: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
        .expect("UUID v4 pattern is a valid regex")
});

/// Check whether `s` is a textual version-4 UUID.
///
/// Matching is purely syntactic. Uppercase hex, braces, URNs and the simple
/// (unhyphenated) form are all rejected.
pub fn is_valid_uuid_v4(s: &str) -> bool {
    UUID_V4.is_match(s)
}
