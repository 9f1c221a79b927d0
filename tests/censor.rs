use metalog::formatter::censor::{censor, censor_with, DEFAULT_CENSOR_CHAR};
use metalog::ErrorKind;

#[test]
fn test_default_censor() {
    assert_eq!(censor("abcdefghij"), "abcd••••••");
    assert_eq!(censor(""), "");
}

#[test]
fn test_custom_fraction_and_char() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(censor_with("abcdefghij", 0.4, '•')?, "abcd••••••");
    assert_eq!(censor_with("password", 0.25, '*')?, "pa******");
    assert_eq!(censor_with("", 0.4, '•')?, "");
    Ok(())
}

#[test]
fn test_boundary_fractions() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(censor_with("secret", 0.0, 'x')?, "xxxxxx");
    assert_eq!(censor_with("secret", 1.0, 'x')?, "secret");
    Ok(())
}

#[test]
fn test_rounds_down() -> Result<(), Box<dyn std::error::Error>> {
    // 7 * 0.5 = 3.5 characters kept, rounded down to 3.
    assert_eq!(censor_with("abcdefg", 0.5, '#')?, "abc####");
    Ok(())
}

#[test]
fn test_counts_characters_not_bytes() -> Result<(), Box<dyn std::error::Error>> {
    let censored = censor_with("äöüßéñ", 0.5, DEFAULT_CENSOR_CHAR)?;

    assert_eq!(censored, "äöü•••");
    assert!(censored.chars().count() == 6);
    Ok(())
}

#[test]
fn test_invalid_fraction() {
    for fraction in [1.5, -0.1, f64::NAN, f64::INFINITY] {
        let error = censor_with("abcdefghij", fraction, '•').unwrap_err();
        assert!(error.kind() == ErrorKind::InvalidArgument);
    }
}
