use rand::Rng;
use rand::distributions::Alphanumeric;

/// Salt length used by record defaults.
pub const DEFAULT_SALT_LENGTH: usize = 16;

/// Generates a random string of `length` characters from `[A-Za-z0-9]`.
#[must_use]
pub fn generate_salt(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
