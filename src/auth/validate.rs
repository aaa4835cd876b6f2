use thiserror::Error;

/// Input validation failures. All recoverable: the prompt layer loops on
/// these instead of aborting the flow.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Username too short (minimum 3 characters)")]
    UsernameTooShort,
    #[error("Username too long (maximum 20 characters)")]
    UsernameTooLong,
    #[error("Username can only contain letters and numbers")]
    UsernameInvalidChars,
    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,
    #[error("Name too short (minimum 2 characters)")]
    NameTooShort,
    #[error("Name too long (maximum 50 characters)")]
    NameTooLong,
    #[error("Name can only contain letters and spaces")]
    NameInvalidChars,
    #[error("Please enter a valid number")]
    NotANumber,
    #[error("Age must be between 13 and 100")]
    AgeOutOfRange,
    #[error("Weight must be between 2 and 1000 kg")]
    WeightOutOfRange,
    #[error("Weekly workout goal must be between 1 and 7")]
    WeeklyGoalOutOfRange,
}

/// Validate and normalize a username: lowercased, 3-20 alphanumeric chars.
pub fn validate_username(input: &str) -> Result<String, ValidationError> {
    let cleaned = input.trim().to_lowercase();

    if cleaned.len() < 3 {
        return Err(ValidationError::UsernameTooShort);
    }
    if cleaned.len() > 20 {
        return Err(ValidationError::UsernameTooLong);
    }
    if !cleaned.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::UsernameInvalidChars);
    }

    Ok(cleaned)
}

/// Validate a password: minimum 6 characters.
pub fn validate_password(input: &str) -> Result<(), ValidationError> {
    if input.trim().len() < 6 {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

/// Validate and normalize a display name: 2-50 letters and spaces.
pub fn validate_name(input: &str) -> Result<String, ValidationError> {
    let cleaned = input.trim().to_string();

    if cleaned.len() < 2 {
        return Err(ValidationError::NameTooShort);
    }
    if cleaned.len() > 50 {
        return Err(ValidationError::NameTooLong);
    }
    if !cleaned.chars().all(|c| c.is_alphabetic() || c == ' ') {
        return Err(ValidationError::NameInvalidChars);
    }

    Ok(cleaned)
}

/// Validate an age entered as text: 13-100 years.
pub fn validate_age(input: &str) -> Result<u32, ValidationError> {
    let age: u32 = input
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotANumber)?;

    if !(13..=100).contains(&age) {
        return Err(ValidationError::AgeOutOfRange);
    }

    Ok(age)
}

/// Validate a weight entered as text: above 2 and at most 1000 kg.
pub fn validate_weight(input: &str) -> Result<f64, ValidationError> {
    let weight: f64 = input
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotANumber)?;

    if weight <= 2.0 || weight > 1000.0 {
        return Err(ValidationError::WeightOutOfRange);
    }

    Ok(weight)
}

/// Validate a weekly workout goal entered as text: 1-7 workouts.
pub fn validate_weekly_goal(input: &str) -> Result<u32, ValidationError> {
    let goal: u32 = input
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotANumber)?;

    if !(1..=7).contains(&goal) {
        return Err(ValidationError::WeeklyGoalOutOfRange);
    }

    Ok(goal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_normalization() {
        assert_eq!(validate_username("  Alice42 ").unwrap(), "alice42");
    }

    #[test]
    fn test_username_rejections() {
        assert_eq!(validate_username("ab"), Err(ValidationError::UsernameTooShort));
        assert_eq!(
            validate_username("a".repeat(21).as_str()),
            Err(ValidationError::UsernameTooLong)
        );
        assert_eq!(
            validate_username("bad name"),
            Err(ValidationError::UsernameInvalidChars)
        );
        assert_eq!(
            validate_username("na-me"),
            Err(ValidationError::UsernameInvalidChars)
        );
    }

    #[test]
    fn test_password_rules() {
        assert!(validate_password("ValidPass1").is_ok());
        assert_eq!(validate_password("short"), Err(ValidationError::PasswordTooShort));
        // Whitespace padding doesn't count towards the minimum
        assert_eq!(validate_password("ab    "), Err(ValidationError::PasswordTooShort));
    }

    #[test]
    fn test_name_rules() {
        assert_eq!(validate_name(" Alice Example ").unwrap(), "Alice Example");
        assert_eq!(validate_name("A"), Err(ValidationError::NameTooShort));
        assert_eq!(validate_name("R2D2"), Err(ValidationError::NameInvalidChars));
    }

    #[test]
    fn test_age_rules() {
        assert_eq!(validate_age("30").unwrap(), 30);
        assert_eq!(validate_age("12"), Err(ValidationError::AgeOutOfRange));
        assert_eq!(validate_age("101"), Err(ValidationError::AgeOutOfRange));
        assert_eq!(validate_age("abc"), Err(ValidationError::NotANumber));
    }

    #[test]
    fn test_weight_rules() {
        assert_eq!(validate_weight("70.5").unwrap(), 70.5);
        assert_eq!(validate_weight("2"), Err(ValidationError::WeightOutOfRange));
        assert_eq!(validate_weight("1001"), Err(ValidationError::WeightOutOfRange));
        assert_eq!(validate_weight("heavy"), Err(ValidationError::NotANumber));
    }

    #[test]
    fn test_weekly_goal_rules() {
        assert_eq!(validate_weekly_goal("3").unwrap(), 3);
        assert_eq!(validate_weekly_goal("0"), Err(ValidationError::WeeklyGoalOutOfRange));
        assert_eq!(validate_weekly_goal("8"), Err(ValidationError::WeeklyGoalOutOfRange));
    }
}
