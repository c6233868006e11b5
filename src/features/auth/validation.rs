//! Client-side field validation for the registration and password-reset
//! forms. These rules exist for early UX feedback only; the API enforces
//! its own constraints and its `detail` messages win on conflict.

/// First and last names: at least two characters, letters, spaces and
/// hyphens only.
pub fn validate_name(value: &str, label: &str) -> Result<(), String> {
    if value.chars().count() < 2 {
        return Err(format!("{label} must be at least 2 characters"));
    }
    if !value
        .chars()
        .all(|c| c.is_alphabetic() || c == ' ' || c == '-')
    {
        return Err(format!(
            "{label} can only contain letters, spaces, and hyphens"
        ));
    }
    Ok(())
}

pub fn validate_username(value: &str) -> Result<(), String> {
    if value.chars().count() < 3 {
        return Err("Username must be at least 3 characters".to_string());
    }
    Ok(())
}

/// Shape check only: one `@`, a dotted domain, no whitespace.
pub fn validate_email(value: &str) -> Result<(), String> {
    let invalid = || "Please enter a valid email address".to_string();

    if value.is_empty() {
        return Err("Email is required".to_string());
    }
    if value.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let Some((local, domain)) = value.split_once('@') else {
        return Err(invalid());
    };
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }

    match domain.rsplit_once('.') {
        Some((head, tail)) if !head.is_empty() && !tail.is_empty() => Ok(()),
        _ => Err(invalid()),
    }
}

/// Coarse password score used by the registration meter. Weak passwords are
/// rejected client-side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    pub fn label(self) -> &'static str {
        match self {
            PasswordStrength::Weak => "Weak - Not Acceptable",
            PasswordStrength::Medium => "Medium - Acceptable",
            PasswordStrength::Strong => "Strong - Acceptable",
        }
    }

    pub fn is_acceptable(self) -> bool {
        !matches!(self, PasswordStrength::Weak)
    }
}

/// Scores one point each for length >= 8, length >= 12, mixed case, a digit
/// and a symbol.
pub fn password_strength(password: &str) -> PasswordStrength {
    let mut score = 0;
    if password.len() >= 8 {
        score += 1;
    }
    if password.len() >= 12 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
    {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| "!@#$%^&*(),.?\":{}|<>".contains(c)) {
        score += 1;
    }

    match score {
        0..=2 => PasswordStrength::Weak,
        3 => PasswordStrength::Medium,
        _ => PasswordStrength::Strong,
    }
}

/// Reset flow: the backend requires at least 8 characters.
pub fn validate_new_password(value: &str) -> Result<(), String> {
    if value.len() < 8 {
        return Err("Password must be at least 8 characters".to_string());
    }
    Ok(())
}

/// Reset confirmation codes are exactly six digits.
pub fn validate_reset_code(value: &str) -> Result<(), String> {
    if value.len() != 6 || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err("Enter the 6-digit code from your email".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_allow_letters_spaces_and_hyphens() {
        assert!(validate_name("Mary Jane", "First name").is_ok());
        assert!(validate_name("Smith-Jones", "Last name").is_ok());
        assert!(validate_name("A", "First name").is_err());
        assert!(validate_name("R2D2", "First name").is_err());
    }

    #[test]
    fn usernames_need_three_characters() {
        assert!(validate_username("ada").is_ok());
        assert!(validate_username("ab").is_err());
    }

    #[test]
    fn email_shape_is_checked() {
        assert!(validate_email("ada@example.com").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("ada").is_err());
        assert!(validate_email("ada@example").is_err());
        assert!(validate_email("ada lovelace@example.com").is_err());
        assert!(validate_email("ada@@example.com").is_err());
        assert!(validate_email("@example.com").is_err());
    }

    #[test]
    fn short_or_plain_passwords_are_weak() {
        assert_eq!(password_strength("abc"), PasswordStrength::Weak);
        assert_eq!(password_strength("password"), PasswordStrength::Weak);
        assert!(!password_strength("password").is_acceptable());
    }

    #[test]
    fn mixed_passwords_score_medium_or_strong() {
        assert_eq!(password_strength("Passw0rd"), PasswordStrength::Medium);
        assert_eq!(
            password_strength("CorrectHorse9!battery"),
            PasswordStrength::Strong
        );
        assert!(password_strength("Passw0rd").is_acceptable());
    }

    #[test]
    fn reset_rules_enforce_code_and_length() {
        assert!(validate_reset_code("123456").is_ok());
        assert!(validate_reset_code("12345").is_err());
        assert!(validate_reset_code("12345a").is_err());
        assert!(validate_new_password("longenough").is_ok());
        assert!(validate_new_password("short").is_err());
    }
}
