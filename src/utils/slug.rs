//! URL slug generation for categories, pages and products.

use regex::Regex;
use std::sync::LazyLock;

/// Maximum slug length in characters.
pub const MAX_SLUG_LEN: usize = 120;

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("static regex"));

static VALID_SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("static regex"));

/// Builds a lowercase, hyphen-separated slug from free text.
///
/// Turkish and common Latin diacritics are folded to ASCII; any run of other
/// characters becomes a single hyphen. The result is trimmed to
/// [`MAX_SLUG_LEN`] without leaving a trailing hyphen.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(slugify("Kış Ürünleri"), "kis-urunleri");
/// assert_eq!(slugify("  Hello,   World! "), "hello-world");
/// ```
pub fn slugify(input: &str) -> String {
    let folded: String = input.chars().flat_map(fold_char).collect();
    let lowered = folded.to_lowercase();

    let slug = SEPARATORS.replace_all(&lowered, "-");
    let slug = slug.trim_matches('-');

    let mut truncated: String = slug.chars().take(MAX_SLUG_LEN).collect();
    while truncated.ends_with('-') {
        truncated.pop();
    }
    truncated
}

/// Returns true if `slug` is already in canonical form.
pub fn is_valid_slug(slug: &str) -> bool {
    slug.len() <= MAX_SLUG_LEN && VALID_SLUG.is_match(slug)
}

fn fold_char(c: char) -> Vec<char> {
    let folded = match c {
        'ç' | 'Ç' => 'c',
        'ğ' | 'Ğ' => 'g',
        'ı' | 'I' | 'İ' | 'î' | 'Î' | 'í' | 'ì' => 'i',
        'ö' | 'Ö' | 'ó' | 'ò' | 'ô' => 'o',
        'ş' | 'Ş' => 's',
        'ü' | 'Ü' | 'ú' | 'ù' | 'û' => 'u',
        'á' | 'à' | 'â' | 'ä' | 'Â' | 'Ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'ß' => return vec!['s', 's'],
        other => other,
    };
    vec![folded]
}
