pub mod artist;
pub mod show;
pub mod venue;

/// Trim a required text field in place.
fn trim_in_place(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}

/// Trim an optional text field, collapsing blank input to `None`.
///
/// Form submissions send empty strings for untouched inputs.
fn trim_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
