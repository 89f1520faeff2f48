use wordtree::normalize;

use crate::RawWord;

use quickcheck_macros::quickcheck;

#[quickcheck]
fn idempotent(raw: RawWord) -> bool {
    let once = normalize(&raw.0);
    normalize(&once) == once
}

#[quickcheck]
fn idempotent_on_any_string(raw: String) -> bool {
    let once = normalize(&raw);
    normalize(&once) == once
}

#[quickcheck]
fn only_lowercase_alphanumerics(raw: String) -> bool {
    normalize(&raw)
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
}

#[quickcheck]
fn ascii_alphanumerics_survive(raw: String) -> bool {
    let expected: String = raw
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    // Folding can only add letters, never remove plain ASCII ones.
    normalize(&raw).len() >= expected.len()
}
