/*!
 * Tests for bibliography table construction and variant generation
 */

use variorum::bibliography::{variants, BibliographyTable};

/// Test that every key derived from a canonical entry still resolves
#[test]
fn test_build_withCaseForms_shouldKeepCitationsConsistent() {
    let table = BibliographyTable::build();

    for key in ["Capell", "Malone", "Hazlitt", "Steevens", "Coleridge"] {
        let citation = table
            .citation_for(key)
            .unwrap_or_else(|| panic!("missing canonical key {key}"));

        assert_eq!(table.citation_for(&key.to_lowercase()), Some(citation));
        assert_eq!(table.citation_for(&key.to_uppercase()), Some(citation));
    }
}

/// Test that confusable variants of canonical keys resolve to the same citation
#[test]
fn test_build_confusableVariants_shouldResolveForCanonicalKeys() {
    let table = BibliographyTable::build();

    for key in ["Malone", "Delius", "Rolfe", "Collier", "Holliday", "Wilde"] {
        let citation = table.citation_for(key).unwrap();
        for variant in variants::confusable_variants(key) {
            assert_eq!(
                table.citation_for(&variant),
                Some(citation),
                "variant {variant} of {key} should resolve"
            );
        }
    }
}

/// Test the curated misspelling list end to end
#[test]
fn test_build_curatedMisspellings_shouldMapToCanonicalCitations() {
    let table = BibliographyTable::build();

    let cases = [
        ("Abott", "Abbott"),
        ("Abbot", "Abbott"),
        ("Murry", "Murray"),
        ("Row", "Rowe"),
        ("Stevens", "Steevens"),
    ];
    for (variant, canonical) in cases {
        assert_eq!(
            table.citation_for(variant),
            table.citation_for(canonical),
            "{variant} should resolve like {canonical}"
        );
    }
}

/// Test that unknown names stay unknown
#[test]
fn test_citationFor_withUnknownKey_shouldReturnNone() {
    let table = BibliographyTable::build();

    assert_eq!(table.citation_for("Quodlibet"), None);
    assert_eq!(table.citation_for(""), None);
}

/// Test title-casing over punctuation-separated words
#[test]
fn test_titleCase_withPunctuatedNames_shouldStartNewWords() {
    assert_eq!(variants::title_case("cowden clarke"), "Cowden Clarke");
    assert_eq!(variants::title_case("O'HANLON"), "O'Hanlon");
}

/// Test that confusable substitution never changes key length
#[test]
fn test_confusableVariants_shouldPreserveKeyLength() {
    for key in ["Delius", "Malone", "Rolfe", "Dowden", "Holliday"] {
        for variant in variants::confusable_variants(key) {
            assert_eq!(variant.chars().count(), key.chars().count());
        }
    }
}
