//! Input validation utilities

use crate::constants::{
    MAX_PASSWORD_LENGTH, MAX_TITLE_LENGTH, MAX_USERNAME_LENGTH, MIN_PASSWORD_LENGTH,
    MIN_USERNAME_LENGTH,
};

/// Validate username format
pub fn validate_username(username: &str) -> Result<(), &'static str> {
    if username.len() < MIN_USERNAME_LENGTH {
        return Err("Username must be at least 3 characters");
    }
    if username.len() > MAX_USERNAME_LENGTH {
        return Err("Username must be at most 32 characters");
    }
    if !username
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
    {
        return Err("Username can only contain letters, numbers, underscores, and hyphens");
    }
    if !username
        .chars()
        .next()
        .map(|c| c.is_alphabetic())
        .unwrap_or(false)
    {
        return Err("Username must start with a letter");
    }
    Ok(())
}

/// Validate email format (basic validation)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !email.contains('@') {
        return Err("Invalid email format");
    }
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return Err("Invalid email format");
    }
    if parts[0].is_empty() || parts[1].is_empty() {
        return Err("Invalid email format");
    }
    if !parts[1].contains('.') {
        return Err("Invalid email domain");
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err("Password must be at least 8 characters");
    }
    if password.len() > MAX_PASSWORD_LENGTH {
        return Err("Password must be at most 128 characters");
    }
    if !password.chars().any(|c| c.is_lowercase()) {
        return Err("Password must contain at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_numeric()) {
        return Err("Password must contain at least one number");
    }
    Ok(())
}

/// Sanitize string input (remove control characters, trim whitespace)
pub fn sanitize_string(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Validate and sanitize a news or report title
pub fn validate_title(title: &str) -> Result<String, &'static str> {
    let sanitized = sanitize_string(title);
    if sanitized.is_empty() {
        return Err("Title cannot be empty");
    }
    if sanitized.len() > MAX_TITLE_LENGTH {
        return Err("Title must be at most 256 characters");
    }
    Ok(sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_username() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("Alice_123").is_ok());
        assert!(validate_username("ab").is_err()); // Too short
        assert!(validate_username("123abc").is_err()); // Starts with number
        assert!(validate_username("user@name").is_err()); // Invalid character
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("password123").is_ok());
        assert!(validate_password("short").is_err());
        assert!(validate_password("NOLOWERCASE123").is_err());
        assert!(validate_password("nonumbers").is_err());
    }

    #[test]
    fn test_validate_title() {
        assert!(validate_title("  Server maintenance tonight  ").is_ok());
        assert_eq!(
            validate_title(" spaced ").unwrap(),
            "spaced".to_string()
        );
        assert!(validate_title("   ").is_err());
    }
}
