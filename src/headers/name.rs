use super::error::HeaderError;
use crate::matches;

/// Validate that `name` is a non empty `token`.
///
/// ```not_rust
/// field-name = token
/// ```
pub const fn validate_name(name: &[u8]) -> Result<(), HeaderError> {
    if name.is_empty() {
        return Err(HeaderError::Empty);
    }

    let mut i = 0;
    while i < name.len() {
        if !matches::is_token(name[i]) {
            return Err(HeaderError::Invalid(name[i]));
        }
        i += 1;
    }

    Ok(())
}

/// Trim surrounding whitespace, validate, and lowercase a header field name.
///
/// Leading whitespace is a leftover of obsolete line folding and is accepted.
///
/// # Errors
///
/// Returns error if the trimmed name is empty or is not a valid `token`.
pub fn normalize_name(name: &[u8]) -> Result<String, HeaderError> {
    let name = name.trim_ascii();
    validate_name(name)?;
    // token is ASCII only
    Ok(name.iter().map(|byte| byte.to_ascii_lowercase() as char).collect())
}
