//! Password and display-name policy. Pure checks, no I/O; callers turn
//! a `false` into the matching domain error.

/// Password rules: 8-20 characters with at least one uppercase letter,
/// one lowercase letter, one digit, and one special character.
pub fn valid_password(password: &str) -> bool {
    let len = password.chars().count();
    if !(8..=20).contains(&len) {
        return false;
    }

    let mut has_upper = false;
    let mut has_lower = false;
    let mut has_digit = false;
    let mut has_special = false;

    for c in password.chars() {
        if c.is_ascii_uppercase() {
            has_upper = true;
        } else if c.is_ascii_lowercase() {
            has_lower = true;
        } else if c.is_ascii_digit() {
            has_digit = true;
        } else {
            has_special = true;
        }
    }

    has_upper && has_lower && has_digit && has_special
}

/// Display names may contain only letters, hyphens, and spaces. Empty is
/// accepted here; callers enforce non-empty where the field is required.
pub fn valid_name(name: &str) -> bool {
    name.chars().all(|c| c.is_ascii_alphabetic() || c == '-' || c == ' ')
}
