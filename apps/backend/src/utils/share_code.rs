//! Share code generation for rooms.
//!
//! Share codes are 8-character strings using Crockford's Base32 alphabet.

use rand::Rng;

const CROCKFORD: &[u8] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ"; // no I, L, O, U

pub const SHARE_CODE_LEN: usize = 8;

/// Generate a random share code from the thread-local CSPRNG.
///
/// # Example
/// ```
/// use guandan_backend::utils::share_code::generate_share_code;
///
/// let code = generate_share_code();
/// assert_eq!(code.len(), 8);
/// ```
pub fn generate_share_code() -> String {
    let mut rng = rand::rng();
    (0..SHARE_CODE_LEN)
        .map(|_| CROCKFORD[rng.random_range(0..CROCKFORD.len())] as char)
        .collect()
}

/// Canonical form of a user-typed code.
///
/// Crockford decoding is case-insensitive and reads `I`/`L` as `1` and `O`
/// as `0`; hyphens and spaces are ignored. Returns `None` when the result
/// is not a well-formed code.
pub fn normalize_share_code(input: &str) -> Option<String> {
    let code: String = input
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .map(|c| match c.to_ascii_uppercase() {
            'I' | 'L' => '1',
            'O' => '0',
            other => other,
        })
        .collect();

    let well_formed =
        code.len() == SHARE_CODE_LEN && code.bytes().all(|b| CROCKFORD.contains(&b));
    well_formed.then_some(code)
}
