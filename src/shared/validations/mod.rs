/// Canonical form of an email for storage and lookup: trimmed, lowercased.
/// Uniqueness is compared on this form, so `Ada@X.io` and `ada@x.io` collide.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
