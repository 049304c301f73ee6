//! Reusable field rules shared by the schemas.

use std::net::IpAddr;

/// Pattern flag uploads must match, as reported in error messages
pub const IMAGE_CONTENT_TYPE_PATTERN: &str = r"/^image\/(jpeg|png|gif|jpg)$/";

/// Content type configuration file uploads must carry
pub const CONFIG_CONTENT_TYPE: &str = "conf";

/// Whether `value` is an IPv4 or IPv6 literal
pub fn ip(value: &str) -> bool {
    value.parse::<IpAddr>().is_ok()
}

/// Parses a record identifier: a positive decimal integer fitting in `i32`
pub fn object_id(value: &str) -> Option<i32> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    value.parse::<i32>().ok().filter(|id| *id > 0)
}

pub fn image_content_type(value: &str) -> bool {
    matches!(
        value.strip_prefix("image/"),
        Some("jpeg" | "png" | "gif" | "jpg")
    )
}

/// Parses an integer that must be at least 1.
///
/// # Returns
/// - `Ok(u64)` - The parsed value
/// - `Err(&str)` - The rule the value broke, to be prefixed with the field label
pub fn positive_integer(value: &str) -> Result<u64, &'static str> {
    let value = value.trim();

    match value.parse::<i64>() {
        Ok(number) if number >= 1 => Ok(number as u64),
        Ok(_) => Err("must be greater than or equal to 1"),
        Err(_) if value.parse::<f64>().is_ok_and(f64::is_finite) => Err("must be an integer"),
        Err(_) => Err("must be a number"),
    }
}

/// Highest page whose row offset, `(page - 1) * limit`, fits in an `i64`
pub fn max_page(limit: u64) -> u64 {
    i64::MAX as u64 / limit.max(1)
}
