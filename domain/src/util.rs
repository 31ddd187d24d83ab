//! Small string helpers.

/// Longest prefix of `s` no longer than `max_bytes` that ends on a char boundary.
///
/// Used to keep raw script excerpts in error messages bounded.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
