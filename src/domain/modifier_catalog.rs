use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModifierGroup {
    pub category: String,
    pub modifiers: Vec<String>,
}

/// Ordered category -> phrases mapping combined with the seed keyword.
///
/// Groups and phrases keep insertion order, so iterating the catalog always
/// yields the same sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct ModifierCatalog {
    groups: Vec<ModifierGroup>,
}

const DEFAULT_CATALOG: &[(&str, &[&str])] = &[
    (
        "Questions",
        &[
            "who", "what", "when", "where", "why", "how", "is", "are", "does", "can", "should",
            "could", "will", "would", "may", "might", "must",
        ],
    ),
    (
        "Actions",
        &["learn", "training", "courses", "interview", "research", "job"],
    ),
    (
        "Comparisons",
        &[
            "vs",
            "comparison",
            "advantages",
            "disadvantages",
            "benefits",
            "alternatives",
            "review",
            "is {seed} worth it",
        ],
    ),
    (
        "Problems",
        &[
            "troubleshooting",
            "fix",
            "broken",
            "not working",
            "cant",
            "doesn't",
            "won't",
            "stopped",
        ],
    ),
    (
        "How-To",
        &[
            "how to",
            "tips",
            "strategies",
            "techniques",
            "best practices",
            "example",
            "checklist",
        ],
    ),
    (
        "Content-Types",
        &[
            "template",
            "contract",
            "agreement",
            "books",
            "newsletters",
            "podcasts",
            "blogs",
            "case study",
            "reports",
            "statistics",
            "trends",
            "calculator",
            "questions",
            "events",
            "conferences",
            "certifications",
        ],
    ),
    (
        "Miscellaneous",
        &[
            "reddit",
            "services",
            "influencers",
            "tools",
            "software",
            "platforms",
            "apps",
            "skills",
        ],
    ),
];

impl Default for ModifierCatalog {
    fn default() -> Self {
        let groups = DEFAULT_CATALOG
            .iter()
            .map(|(category, modifiers)| ModifierGroup {
                category: category.to_string(),
                modifiers: modifiers.iter().map(|m| m.to_string()).collect(),
            })
            .collect();

        ModifierCatalog { groups }
    }
}

impl ModifierCatalog {
    pub fn new(groups: Vec<ModifierGroup>) -> Self {
        ModifierCatalog { groups }
    }

    pub fn groups(&self) -> &[ModifierGroup] {
        &self.groups
    }

    pub fn modifier_count(&self) -> usize {
        self.groups.iter().map(|g| g.modifiers.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::ModifierCatalog;

    #[test]
    fn default_catalog_layout() {
        let catalog = ModifierCatalog::default();
        let categories: Vec<&str> = catalog
            .groups()
            .iter()
            .map(|g| g.category.as_str())
            .collect();

        assert_eq!(
            categories,
            vec![
                "Questions",
                "Actions",
                "Comparisons",
                "Problems",
                "How-To",
                "Content-Types",
                "Miscellaneous",
            ]
        );
        assert_eq!(catalog.modifier_count(), 70);
    }

    #[test]
    fn default_catalog_has_no_repeated_phrases() {
        let catalog = ModifierCatalog::default();
        let unique: HashSet<&String> = catalog
            .groups()
            .iter()
            .flat_map(|g| g.modifiers.iter())
            .collect();

        assert_eq!(unique.len(), catalog.modifier_count());
    }
}
