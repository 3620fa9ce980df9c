/*!
 * Variant generation for bibliography reference keys.
 *
 * Footnote scans mangle author names in two predictable ways: inconsistent
 * casing, and OCR confusion between visually similar glyphs. The generators
 * here are pure functions from a key to its variant keys; the table builder
 * decides where the results land.
 */

/// Glyph pairs commonly confused by OCR, lowercase only.
const CONFUSABLES: &[(char, &[char])] = &[
    ('i', &['l', '1']),
    ('l', &['i', '1']),
    ('o', &['0']),
    ('0', &['o']),
    ('1', &['l', 'i']),
];

/// Case forms of a key: lowercase, UPPERCASE, and Title Case.
///
/// The canonical form itself is not included.
pub fn case_forms(key: &str) -> Vec<String> {
    vec![key.to_lowercase(), key.to_uppercase(), title_case(key)]
}

/// Title-case a key: the first letter of every word uppercased, the rest
/// lowercased. A word starts after any non-alphabetic character, so
/// "VAN DAM" becomes "Van Dam" and "o'hanlon" becomes "O'Hanlon".
pub fn title_case(key: &str) -> String {
    let mut result = String::with_capacity(key.len());
    let mut at_word_start = true;

    for ch in key.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                result.extend(ch.to_uppercase());
            } else {
                result.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            result.push(ch);
            at_word_start = true;
        }
    }

    result
}

/// Single-character confusable substitutions of a key.
///
/// For every occurrence of a confusable glyph, one variant is emitted per
/// counterpart glyph, with only that occurrence replaced. The output order
/// follows the character positions in the key.
pub fn confusable_variants(key: &str) -> Vec<String> {
    let chars: Vec<char> = key.chars().collect();
    let mut variants = Vec::new();

    for (pos, ch) in chars.iter().enumerate() {
        let Some((_, replacements)) = CONFUSABLES.iter().find(|(from, _)| from == ch) else {
            continue;
        };

        for replacement in *replacements {
            let mut variant: String = chars[..pos].iter().collect();
            variant.push(*replacement);
            variant.extend(&chars[pos + 1..]);
            variants.push(variant);
        }
    }

    variants
}
