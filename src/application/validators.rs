/// Trims surrounding whitespace and lowercases. Always applied before
/// validation and storage so the stored form is canonical.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

/// Validates an email against the shape `local@domain.tld`.
/// Rules:
/// - No whitespace anywhere
/// - Exactly one `@`, with a non-empty local part before it
/// - The domain contains a dot with at least one character on each side
///   (those characters may themselves be dots)
///
/// This is deliberately not a full RFC 5322 check; the signup form promises
/// exactly this shape (`a@b.c` passes, `a@b` does not).
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(|c| c.is_whitespace()) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
