//! Shared validation helpers.

/// Push an error if `value` is outside `[min, max]`. NaN is always out of range.
pub(crate) fn validate_range_f64(
    errors: &mut Vec<String>,
    name: &str,
    value: f64,
    min: f64,
    max: f64,
) {
    if !(min..=max).contains(&value) {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` contains whitespace or a path separator.
pub(crate) fn validate_name(errors: &mut Vec<String>, name: &str, value: &str) {
    if value
        .chars()
        .any(|c| c.is_whitespace() || c == '/' || c == '\\')
    {
        errors.push(format!(
            "{name} = {value:?} must not contain whitespace or path separators"
        ));
    }
}
