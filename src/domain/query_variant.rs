use serde::Deserialize;

use super::modifier_catalog::ModifierCatalog;

pub const WILDCARD: &str = "*";
/// Catalog phrases may embed the seed keyword at this marker.
pub const SEED_PLACEHOLDER: &str = "{seed}";
pub const ORIGINAL_MODIFIER: &str = "Original";
pub const ALPHABETIC_CATEGORY: &str = "Alphabetic";
pub const NUMBERS_CATEGORY: &str = "Numbers";

#[derive(Debug, Clone, PartialEq)]
pub struct QueryVariant {
    pub query: String,
    pub modifier: String,
    pub category: Option<String>,
}

impl QueryVariant {
    fn new(query: String, seed: &str, category: Option<&str>) -> Self {
        QueryVariant {
            modifier: derive_parent_modifier(&query, seed),
            category: category.map(|c| c.to_string()),
            query,
        }
    }
}

/// Which expansions `generate_variants` applies around the seed keyword.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GeneratorOptions {
    pub alphabet: bool,
    pub numbers: bool,
    pub modifiers: bool,
    pub wildcards: bool,
    pub categorize: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        GeneratorOptions {
            alphabet: true,
            numbers: true,
            modifiers: true,
            wildcards: true,
            categorize: true,
        }
    }
}

/// Strips the seed keyword and wildcards from a query, leaving the phrase
/// that produced it. The bare seed maps to "Original".
pub fn derive_parent_modifier(query: &str, seed: &str) -> String {
    let without_wildcards = query.replace(WILDCARD, "");
    let stripped = match seed.is_empty() {
        true => without_wildcards,
        false => without_wildcards.replace(seed, ""),
    };

    match stripped.trim() {
        "" => ORIGINAL_MODIFIER.to_string(),
        modifier => modifier.to_string(),
    }
}

pub fn generate_variants(
    seed: &str,
    catalog: &ModifierCatalog,
    options: GeneratorOptions,
) -> Vec<QueryVariant> {
    if seed.trim().is_empty() {
        return vec![];
    }

    let label = |category: &str| options.categorize.then(|| category.to_string());
    let mut variants: Vec<QueryVariant> = vec![];

    variants.push(QueryVariant::new(
        seed.to_string(),
        seed,
        label(ALPHABETIC_CATEGORY).as_deref(),
    ));

    let mut suffixes: Vec<(String, &str)> = vec![];
    if options.alphabet {
        suffixes.extend(('a'..='z').map(|c| (c.to_string(), ALPHABETIC_CATEGORY)));
    }
    if options.numbers {
        suffixes.extend((0..10).map(|d: u8| (d.to_string(), NUMBERS_CATEGORY)));
    }

    for (suffix, category) in suffixes.iter() {
        let category = label(*category);
        let mut queries = vec![format!("{} {}", seed, suffix)];
        if options.wildcards {
            queries.push(format!("{} {} {}", seed, suffix, WILDCARD));
            queries.push(format!("{} {} {}", WILDCARD, seed, suffix));
        }

        variants.extend(
            queries
                .into_iter()
                .map(|q| QueryVariant::new(q, seed, category.as_deref())),
        );
    }

    if options.modifiers {
        for group in catalog.groups() {
            let category = label(group.category.as_str());

            for modifier in group.modifiers.iter() {
                let modifier = modifier.replace(SEED_PLACEHOLDER, seed);
                let mut queries = vec![format!("{} {}", modifier, seed)];
                if options.wildcards {
                    queries.push(format!("{} {} {}", WILDCARD, modifier, seed));
                    queries.push(format!("{} {} {}", modifier, seed, WILDCARD));
                    queries.push(format!("{} {} {}", modifier, WILDCARD, seed));
                    queries.push(format!("{} {} {}", WILDCARD, seed, modifier));
                }

                variants.extend(
                    queries
                        .into_iter()
                        .map(|q| QueryVariant::new(q, seed, category.as_deref())),
                );
            }
        }
    }

    variants
}
