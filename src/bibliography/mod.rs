/*!
 * Bibliography table construction and lookup.
 *
 * The table maps reference keys, the abbreviated author tokens found in
 * footnotes, to full citation strings. Construction starts from the canonical
 * seed pairs and widens the key set with case forms, curated misspellings,
 * and single-glyph OCR confusions, all pointing at the same citations. Once
 * built the table is read-only.
 */

mod seed;
pub mod variants;

use log::debug;
use std::collections::HashMap;

/// Immutable mapping from reference key to citation.
#[derive(Debug, Clone)]
pub struct BibliographyTable {
    entries: HashMap<String, String>,
}

impl BibliographyTable {
    /// Build the table from the embedded seed data.
    ///
    /// Construction cannot fail. Keys are inserted in seed order with case
    /// forms, then curated misspellings, then one confusable-substitution
    /// pass over every key inserted so far. When two entries generate the
    /// same key the later insertion wins; this mirrors collisions already
    /// present in the source data and is deliberately left alone.
    pub fn build() -> Self {
        let mut entries: HashMap<String, String> = HashMap::new();

        for (key, citation) in seed::CANONICAL_ENTRIES {
            entries.insert((*key).to_string(), (*citation).to_string());
            for form in variants::case_forms(key) {
                entries.insert(form, (*citation).to_string());
            }
        }

        for (canonical, spellings) in seed::SPELLING_VARIANTS {
            // The canonical key is always seeded; the lookup picks up the
            // citation that won any seed collision for it.
            if let Some(citation) = entries.get(*canonical).cloned() {
                for spelling in *spellings {
                    entries.insert((*spelling).to_string(), citation.clone());
                }
            }
        }

        let generation_snapshot: Vec<(String, String)> = entries
            .iter()
            .map(|(key, citation)| (key.clone(), citation.clone()))
            .collect();
        for (key, citation) in generation_snapshot {
            for variant in variants::confusable_variants(&key) {
                entries.insert(variant, citation.clone());
            }
        }

        debug!(
            "Built bibliography table: {} canonical entries, {} keys after variant generation",
            seed::CANONICAL_ENTRIES.len(),
            entries.len()
        );

        Self { entries }
    }

    /// Look up the citation for a reference key.
    pub fn citation_for(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|citation| citation.as_str())
    }

    /// Whether a reference key exists in the table.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of reference keys in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all (key, citation) pairs. Iteration order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, citation)| (key.as_str(), citation.as_str()))
    }

    /// Build a table from explicit pairs. Intended for tests that need a
    /// small controlled key set; no variant generation is applied.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(key, citation)| (key.into(), citation.into()))
                .collect(),
        }
    }
}
