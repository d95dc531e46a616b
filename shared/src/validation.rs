//! Validation utilities for the Materiah platform
//!
//! Form-level checks applied before any network call is made; failures are
//! rendered as message lists next to the offending field.

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

/// Validate a product/supplier website URL (http or https)
pub fn validate_url(url: &str) -> Result<(), &'static str> {
    let rest = if let Some(r) = url.strip_prefix("https://") {
        r
    } else if let Some(r) = url.strip_prefix("http://") {
        r
    } else {
        return Err("URL must start with http:// or https://");
    };

    if rest.is_empty() || !rest.contains('.') {
        return Err("URL must contain a host name");
    }
    Ok(())
}

/// Validate a phone number: 7-15 digits, optional leading +, separators allowed
pub fn validate_phone(phone: &str) -> Result<(), &'static str> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() < 7 || digits.len() > 15 {
        return Err("Phone number must contain 7 to 15 digits");
    }
    if !phone
        .chars()
        .all(|c| c.is_ascii_digit() || c == '+' || c == '-' || c == ' ' || c == '(' || c == ')')
    {
        return Err("Phone number contains invalid characters");
    }
    Ok(())
}

/// Validate a supplier catalogue number (non-empty, printable ASCII)
pub fn validate_catalogue_number(cat_num: &str) -> Result<(), &'static str> {
    if cat_num.trim().is_empty() {
        return Err("Catalogue number is required");
    }
    if cat_num.len() > 64 {
        return Err("Catalogue number must be at most 64 characters");
    }
    if !cat_num
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "-_./ ".contains(c))
    {
        return Err("Catalogue number contains invalid characters");
    }
    Ok(())
}

/// Keep only digit characters of a quantity field edit.
///
/// Quantity inputs reject non-digit keystrokes instead of correcting bad
/// values after the fact; the reconciler only ever sees parsed integers.
pub fn filter_quantity_input(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Parse a quantity field into a number, after keystroke filtering
pub fn parse_quantity(raw: &str) -> Result<u32, &'static str> {
    let filtered = filter_quantity_input(raw);
    if filtered.is_empty() {
        return Err("Quantity is required");
    }
    filtered.parse().map_err(|_| "Quantity is out of range")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email_valid() {
        assert!(validate_email("lab@example.com").is_ok());
        assert!(validate_email("orders.desk@uni.ac.il").is_ok());
    }

    #[test]
    fn test_validate_email_invalid() {
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("no@domain").is_err());
        assert!(validate_email("@.").is_err());
    }

    #[test]
    fn test_validate_url_valid() {
        assert!(validate_url("https://supplier.example.com/catalog/123").is_ok());
        assert!(validate_url("http://example.com").is_ok());
    }

    #[test]
    fn test_validate_url_invalid() {
        assert!(validate_url("ftp://example.com").is_err());
        assert!(validate_url("example.com").is_err());
        assert!(validate_url("https://").is_err());
        assert!(validate_url("https://localhost").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("03-1234567").is_ok());
        assert!(validate_phone("+972 3 123 4567").is_ok());
        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("abcdefgh").is_err());
        assert!(validate_phone("123456x7890").is_err());
    }

    #[test]
    fn test_validate_catalogue_number() {
        assert!(validate_catalogue_number("A-1043/2").is_ok());
        assert!(validate_catalogue_number("500125").is_ok());
        assert!(validate_catalogue_number("").is_err());
        assert!(validate_catalogue_number("   ").is_err());
        assert!(validate_catalogue_number("bad#num").is_err());
    }

    #[test]
    fn test_filter_quantity_input() {
        assert_eq!(filter_quantity_input("12a3"), "123");
        assert_eq!(filter_quantity_input("-5"), "5");
        assert_eq!(filter_quantity_input("abc"), "");
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("12"), Ok(12));
        // Non-digits are filtered, not rejected
        assert_eq!(parse_quantity("1 2"), Ok(12));
        assert!(parse_quantity("").is_err());
        assert!(parse_quantity("x").is_err());
        assert!(parse_quantity("99999999999999").is_err());
    }
}
