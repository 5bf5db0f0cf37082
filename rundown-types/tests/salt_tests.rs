use proptest::prelude::*;
use rundown_types::{DEFAULT_SALT_LENGTH, generate_salt};

#[test]
fn default_length_is_16() {
    assert_eq!(DEFAULT_SALT_LENGTH, 16);
    assert_eq!(generate_salt(DEFAULT_SALT_LENGTH).len(), 16);
}

#[test]
fn requested_length() {
    assert_eq!(generate_salt(32).len(), 32);
}

#[test]
fn different_on_multiple_calls() {
    assert_ne!(generate_salt(16), generate_salt(16));
}

#[test]
fn zero_length_is_empty() {
    assert_eq!(generate_salt(0), "");
}

#[test]
fn length_one_is_alphanumeric() {
    let salt = generate_salt(1);
    assert_eq!(salt.len(), 1);
    assert!(salt.chars().all(|c| c.is_ascii_alphanumeric()));
}

proptest! {
    #[test]
    fn only_alphanumeric_of_requested_length(length in 0usize..200) {
        let salt = generate_salt(length);
        prop_assert_eq!(salt.chars().count(), length);
        prop_assert!(salt.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
