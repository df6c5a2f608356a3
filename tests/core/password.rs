// tests/core/password.rs
use cryptsidian_vault::core::{
    charspace, has_enough_entropy, min_length_for, validate_password, validate_password_bytes,
    validate_password_with_level,
};
use cryptsidian_vault::error::{CoreError, ErrorKind, WeakPassword};

#[test]
fn test_short_password_reports_minimum_length() {
    let err = validate_password("short").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PasswordStrength);
    assert!(matches!(
        err,
        CoreError::PasswordStrength(WeakPassword::TooShort {
            min_length: 13,
            length: 5
        })
    ));
    assert!(err.to_string().contains("13 characters or longer"));
}

#[test]
fn test_strong_password_passes_unchanged() {
    let normalized = validate_password("Tr0ub4dor&3!LongEnough").unwrap();
    assert_eq!(normalized, "Tr0ub4dor&3!LongEnough");
}

#[test]
fn test_level_below_floor_is_a_caller_error_regardless_of_input() {
    for input in ["input", "ihave13chars!jkihavewaymore", ""] {
        let err = has_enough_entropy(input, 63).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
    }
    assert!(has_enough_entropy("ihave13chars!jkihavewaymore", 64).is_ok());
}

#[test]
fn test_long_enough_but_single_class_fails_entropy() {
    // 10 lowercase chars: 10 * log2(26) ≈ 47 bits
    let err = has_enough_entropy("inputinput", 64).unwrap_err();
    assert!(matches!(
        err,
        CoreError::PasswordStrength(WeakPassword::LowEntropy {
            required_bits: 64,
            ..
        })
    ));
    assert!(err.to_string().contains("different kinds of characters"));
}

#[test]
fn test_below_min_length_fails_before_entropy_check() {
    let err = has_enough_entropy("input", 80).unwrap_err();
    assert!(matches!(
        err,
        CoreError::PasswordStrength(WeakPassword::TooShort { .. })
    ));
}

#[test]
fn test_precomposed_and_combining_forms_normalize_identically() {
    let precomposed = "\u{00F1}ihave13chars!jkihavewaymore";
    let combining = "n\u{0303}ihave13chars!jkihavewaymore";
    assert_ne!(precomposed, combining);

    let a = validate_password(precomposed).unwrap();
    let b = validate_password(combining).unwrap();
    assert_eq!(a, b);
    assert_eq!(a, precomposed);
}

#[test]
fn test_charspace_counts_only_present_classes() {
    assert_eq!(charspace("abcdef"), 26);
    assert_eq!(charspace("abc123"), 36);
    assert_eq!(charspace("aB1!"), 94);
    assert_eq!(charspace("~`|\\"), 32);
    assert_eq!(charspace("ñüé"), 0);
}

#[test]
fn test_non_ascii_only_password_has_no_entropy() {
    let input = "ñ".repeat(30);
    let err = validate_password(&input).unwrap_err();
    assert!(matches!(
        err,
        CoreError::PasswordStrength(WeakPassword::LowEntropy { .. })
    ));
}

#[test]
fn test_min_length_follows_full_charspace() {
    assert_eq!(min_length_for(64), 10);
    assert_eq!(min_length_for(80), 13);
    assert_eq!(min_length_for(112), 18);
}

#[test]
fn test_higher_level_rejects_what_default_accepts() {
    let pw = "Tr0ub4dor&3!Long"; // 16 chars, full charspace ≈ 105 bits
    assert!(validate_password(pw).is_ok());
    assert!(validate_password_with_level(pw, 112).is_err());
}

#[test]
fn test_non_utf8_bytes_are_a_type_error() {
    let err = validate_password_bytes(&[0xff, 0xfe, 0x41]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
    assert!(matches!(
        err,
        CoreError::Type {
            argument: "password",
            ..
        }
    ));

    let ok = validate_password_bytes("ihave13chars!jkihavewaymore".as_bytes()).unwrap();
    assert_eq!(ok, "ihave13chars!jkihavewaymore");
}

#[test]
fn test_astral_characters_count_as_two_units() {
    // 4 + 8 * 2 = 20 units; 20 * log2(94) ≈ 131 bits
    let input = format!("Aa1!{}", "\u{1F600}".repeat(8));
    assert_eq!(validate_password(&input).unwrap(), input);

    // 6 units, short of the 13 required
    let err = validate_password("Aa1!\u{1F600}").unwrap_err();
    assert!(matches!(
        err,
        CoreError::PasswordStrength(WeakPassword::TooShort {
            min_length: 13,
            length: 6
        })
    ));
}
