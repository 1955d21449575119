use rand::{Rng, distr::Alphanumeric};

/// Single-segment paths served by static routes; `/{alias}` never sees them.
pub const RESERVED_ALIASES: &[&str] = &["health", "url"];

/// Whether `alias` can be reached through `/{alias}`.
///
/// Aliases are limited to ASCII letters, digits, `-` and `_`, so they never
/// span path segments or change under percent-decoding.
pub fn is_routable(alias: &str) -> bool {
    !alias.is_empty()
        && !RESERVED_ALIASES.contains(&alias)
        && alias
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Generates a random alias of `length` ASCII letters and digits.
pub fn random_alias(length: usize) -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
