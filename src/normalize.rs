//! Text normalization. Every word is reduced to a canonical key before it touches the tree so
//! that "Maçã", "MACA" and "maca!" all end up as the same entry.
//!
//! # Examples
//!
//! ```
//! use wordtree::normalize::normalize;
//!
//! assert_eq!(normalize("Maçã123!"), "maca123");
//! assert_eq!(normalize("¿?"), "");
//! ```

/// Maps raw text to its canonical key.
///
/// Accented vowels and the cedilla c are folded to their ASCII base letter (in either case),
/// anything that is then not an ASCII letter or digit is dropped, and what remains is lowercased.
/// The result is empty when the input had no alphanumeric content. Callers are expected to treat
/// that as invalid input.
///
/// The output only ever contains `[a-z0-9]`, so normalizing it again is a no-op.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .map(fold_accent)
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Folds the accented letters we know about to their ASCII base. Everything else is returned
/// untouched.
fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'À' | 'Á' | 'Â' | 'Ã' | 'Ä' => 'a',
        'è' | 'é' | 'ê' | 'ë' | 'È' | 'É' | 'Ê' | 'Ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'Ì' | 'Í' | 'Î' | 'Ï' => 'i',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' | 'Ù' | 'Ú' | 'Û' | 'Ü' => 'u',
        'ç' | 'Ç' => 'c',
        _ => c,
    }
}
