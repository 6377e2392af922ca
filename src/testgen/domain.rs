//! Domain scenario sets
//!
//! Each domain fires independently when its keyword occurs in the
//! requirement text: auth, then email, then password, then search.

use super::{strings, RequirementScope};
use crate::requirement::Level;
use crate::testcase::{IdSequence, TestCase, TestType};

const AUTH_SCENARIOS: [(&str, &str); 3] = [
    (
        "Valid credentials login",
        "Test successful login with correct username and password",
    ),
    ("Remember me functionality", "Test remember me option during login"),
    ("Multi-factor authentication", "Test successful MFA process"),
];

const VALID_EMAILS: [&str; 3] = [
    "user@example.com",
    "test.user+tag@domain.co.uk",
    "user123@test-domain.org",
];

const INVALID_EMAILS: [&str; 3] = ["invalid@", "@domain.com", "not-an-email"];

/// Upper, lower, digit, special and 8..=128 characters each
const STRONG_PASSWORDS: [&str; 3] = ["StrongPass123!", "MySecure@Pass2024", "Complex&Password1"];

/// (violation, password)
const WEAK_PASSWORDS: [(&str, &str); 5] = [
    ("Password too short", "Ab1!xyz"),
    ("Password missing uppercase letter", "testpass123!"),
    ("Password missing lowercase letter", "TESTPASS123!"),
    ("Password missing digit", "TestPassword!"),
    ("Password missing special character", "TestPass1234"),
];

pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const PASSWORD_MAX_LENGTH: usize = 128;

const SEARCH_SCENARIOS: [(&str, &str); 3] = [
    ("Exact match search", "Search with exact matching terms"),
    ("Partial match search", "Search with partial matching terms"),
    ("Case insensitive search", "Search with different case variations"),
];

pub(super) fn domain_cases(scope: &RequirementScope<'_>, ids: &mut IdSequence) -> Vec<TestCase> {
    let mut cases = Vec::new();

    if scope.mentions_any(&["authentication", "login"]) {
        cases.extend(auth_cases(scope, ids));
    }
    if scope.mentions("email") {
        cases.extend(email_cases(scope, ids));
    }
    if scope.mentions("password") {
        cases.extend(password_cases(scope, ids));
    }
    if scope.mentions("search") {
        cases.extend(search_cases(scope, ids));
    }

    cases
}

fn auth_cases(scope: &RequirementScope<'_>, ids: &mut IdSequence) -> Vec<TestCase> {
    AUTH_SCENARIOS
        .iter()
        .map(|(suffix, description)| TestCase {
            title: scope.title(suffix),
            description: description.to_string(),
            preconditions: strings(&["Valid user account exists", "Login page is accessible"]),
            test_steps: strings(&[
                "Navigate to login page",
                "Enter valid credentials",
                "Complete authentication process",
                "Verify successful login",
            ]),
            expected_result: "User successfully authenticates and gains access".into(),
            priority: Level::High,
            tags: strings(&["authentication", "positive", "login"]),
            risk_level: Level::Medium,
            estimated_time: 25,
            ..scope.draft(ids, TestType::Positive)
        })
        .collect()
}

fn email_cases(scope: &RequirementScope<'_>, ids: &mut IdSequence) -> Vec<TestCase> {
    let mut cases: Vec<TestCase> = VALID_EMAILS
        .iter()
        .map(|email| TestCase {
            title: scope.title(&format!("Valid email format: {}", email)),
            description: format!("Test email validation with valid format: {}", email),
            preconditions: strings(&["Email input field is available"]),
            test_steps: vec![
                "Navigate to email input field".into(),
                format!("Enter email: {}", email),
                "Submit or validate the email".into(),
                "Verify acceptance".into(),
            ],
            expected_result: "Email is accepted as valid".into(),
            priority: Level::High,
            tags: strings(&["email", "validation", "positive"]),
            risk_level: Level::Low,
            estimated_time: 15,
            test_data: vec![email.to_string()],
            ..scope.draft(ids, TestType::Positive)
        })
        .collect();

    cases.extend(INVALID_EMAILS.iter().map(|email| TestCase {
        title: scope.title(&format!("Invalid email format: {}", email)),
        description: format!("Test email validation rejects malformed address: {}", email),
        preconditions: strings(&["Email input field is available"]),
        test_steps: vec![
            "Navigate to email input field".into(),
            format!("Enter email: {}", email),
            "Submit or validate the email".into(),
            "Verify an appropriate error message is displayed".into(),
        ],
        expected_result: "Email is rejected with a clear validation message".into(),
        priority: Level::High,
        tags: strings(&["email", "validation", "negative"]),
        risk_level: Level::Medium,
        estimated_time: 15,
        test_data: vec![email.to_string()],
        ..scope.draft(ids, TestType::Negative)
    }));

    cases
}

fn password_cases(scope: &RequirementScope<'_>, ids: &mut IdSequence) -> Vec<TestCase> {
    let mut cases: Vec<TestCase> = STRONG_PASSWORDS
        .iter()
        .map(|password| TestCase {
            title: scope.title(&format!("Strong password acceptance: {}", password)),
            description: "Test password validation with strong password meeting all criteria"
                .into(),
            preconditions: strings(&["Password input field is available"]),
            test_steps: vec![
                "Navigate to password input field".into(),
                format!("Enter password: '{}'", password),
                "Submit password for validation".into(),
                "Verify acceptance".into(),
            ],
            expected_result: "Strong password is accepted without errors".into(),
            priority: Level::High,
            tags: strings(&["password", "validation", "positive", "security"]),
            risk_level: Level::Medium,
            estimated_time: 20,
            test_data: vec![password.to_string()],
            ..scope.draft(ids, TestType::Positive)
        })
        .collect();

    cases.extend(WEAK_PASSWORDS.iter().map(|(violation, password)| TestCase {
        title: scope.title(violation),
        description: format!(
            "Test that password validation rejects: {}",
            violation.to_lowercase()
        ),
        preconditions: strings(&["Password input field is available"]),
        test_steps: vec![
            "Navigate to password input field".into(),
            format!("Enter invalid password: '{}'", password),
            "Submit password for validation".into(),
            "Verify appropriate error message is displayed".into(),
        ],
        expected_result: format!("Password rejected: {}", violation.to_lowercase()),
        priority: Level::High,
        tags: strings(&["password", "validation", "negative", "security"]),
        risk_level: Level::Medium,
        estimated_time: 20,
        test_data: vec![password.to_string()],
        ..scope.draft(ids, TestType::Negative)
    }));

    let boundaries = [
        (
            format!("Minimum length password ({} characters)", PASSWORD_MIN_LENGTH),
            boundary_password(PASSWORD_MIN_LENGTH),
            "Password at minimum length is accepted",
        ),
        (
            format!("Maximum length password ({} characters)", PASSWORD_MAX_LENGTH),
            boundary_password(PASSWORD_MAX_LENGTH),
            "Password at maximum length is accepted",
        ),
        (
            format!(
                "Password above maximum length ({} characters)",
                PASSWORD_MAX_LENGTH + 1
            ),
            boundary_password(PASSWORD_MAX_LENGTH + 1),
            "Password above maximum length is rejected",
        ),
    ];

    cases.extend(
        boundaries
            .into_iter()
            .map(|(suffix, password, expected)| TestCase {
                title: scope.title(&suffix),
                description: format!("Test password length boundary: {}", suffix.to_lowercase()),
                preconditions: strings(&["Password input field is available"]),
                test_steps: vec![
                    "Navigate to password input field".into(),
                    format!("Enter a password of {} characters", password.chars().count()),
                    "Submit password for validation".into(),
                    "Verify the length rule is enforced".into(),
                ],
                expected_result: expected.into(),
                priority: Level::High,
                tags: strings(&["password", "validation", "boundary", "security"]),
                risk_level: Level::Medium,
                estimated_time: 20,
                test_data: vec![password],
                ..scope.draft(ids, TestType::Boundary)
            }),
    );

    cases
}

/// A password of exactly `len` characters with every character class.
/// `len` must be at least 4.
fn boundary_password(len: usize) -> String {
    match len {
        PASSWORD_MIN_LENGTH => "Abcdef1!".to_string(),
        _ => format!("Aa1!{}", "a".repeat(len.saturating_sub(4))),
    }
}

fn search_cases(scope: &RequirementScope<'_>, ids: &mut IdSequence) -> Vec<TestCase> {
    SEARCH_SCENARIOS
        .iter()
        .map(|(suffix, description)| TestCase {
            title: scope.title(suffix),
            description: description.to_string(),
            preconditions: strings(&[
                "Search functionality is available",
                "Test data exists in system",
            ]),
            test_steps: strings(&[
                "Navigate to search interface",
                "Enter search terms",
                "Execute search",
                "Verify results are returned",
                "Validate result relevance",
            ]),
            expected_result: "Search returns relevant results matching the search criteria".into(),
            priority: Level::Medium,
            tags: strings(&["search", "positive", "functionality"]),
            risk_level: Level::Low,
            estimated_time: 30,
            ..scope.draft(ids, TestType::Positive)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::requirement::Requirement;
    use crate::testgen::generate_test_cases;

    fn cases_for(text: &str) -> Vec<TestCase> {
        let req = Requirement::new("REQ300", text).unwrap();
        generate_test_cases(&req, &analyze(&req), &mut IdSequence::new())
    }

    fn is_compliant(password: &str) -> bool {
        let len = password.chars().count();
        (PASSWORD_MIN_LENGTH..=PASSWORD_MAX_LENGTH).contains(&len)
            && password.chars().any(|c| c.is_ascii_uppercase())
            && password.chars().any(|c| c.is_ascii_lowercase())
            && password.chars().any(|c| c.is_ascii_digit())
            && password.chars().any(|c| !c.is_ascii_alphanumeric())
    }

    #[test]
    fn test_strong_passwords_satisfy_every_rule() {
        assert!(STRONG_PASSWORDS.iter().all(|p| is_compliant(p)));
    }

    #[test]
    fn test_weak_passwords_each_break_a_rule() {
        assert!(WEAK_PASSWORDS.iter().all(|(_, p)| !is_compliant(p)));
    }

    #[test]
    fn test_boundary_password_lengths() {
        assert_eq!(boundary_password(8).len(), 8);
        assert_eq!(boundary_password(128).len(), 128);
        assert_eq!(boundary_password(129).len(), 129);
        assert!(is_compliant(&boundary_password(8)));
        assert!(is_compliant(&boundary_password(128)));
        assert!(!is_compliant(&boundary_password(129)));
    }

    #[test]
    fn test_password_domain_cases() {
        let cases = cases_for("Password must contain upper, lower, digit and special character");

        let positives: Vec<_> = cases
            .iter()
            .filter(|c| c.test_type == TestType::Positive && c.has_tag("password"))
            .collect();
        assert_eq!(positives.len(), 3);
        assert!(positives.iter().all(|c| is_compliant(&c.test_data[0])));

        let negatives: Vec<_> = cases
            .iter()
            .filter(|c| c.test_type == TestType::Negative && c.has_tag("password"))
            .collect();
        assert_eq!(negatives.len(), 5);
        assert!(negatives.iter().all(|c| c.priority == Level::High));
        assert!(negatives
            .iter()
            .any(|c| c.test_steps[1].contains("'testpass123!'")));
    }

    #[test]
    fn test_domains_fire_independently() {
        let cases = cases_for("Login with email and search history");
        let titles: Vec<_> = cases.iter().map(|c| c.title.as_str()).collect();

        assert!(titles.contains(&"Verify REQ300 - Remember me functionality"));
        assert!(titles.contains(&"Verify REQ300 - Valid email format: user@example.com"));
        assert!(titles.contains(&"Verify REQ300 - Exact match search"));
    }

    #[test]
    fn test_email_cases_carry_addresses() {
        let cases = cases_for("Users register with an email address");
        let invalid: Vec<_> = cases
            .iter()
            .filter(|c| c.test_type == TestType::Negative && c.has_tag("email"))
            .map(|c| c.test_data[0].as_str())
            .collect();
        assert_eq!(invalid, INVALID_EMAILS.to_vec());
    }
}
