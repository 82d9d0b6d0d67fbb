use std::fmt::Display;

use indexmap::IndexMap;
use log::debug;
use regex::Regex;

use crate::constants::{DEFAULT_TEMPLATE_NAME, DEFAULT_TEMPLATE_REPO};
use crate::error::Result;

/// The lexical variants of a snake_case identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameVariants {
    /// `my_new_project`
    pub snake: String,
    /// `MY_NEW_PROJECT`
    pub upper_snake: String,
    /// `my-new-project`
    pub kebab: String,
    /// `MyNewProject`
    pub pascal: String,
    /// `My new project`
    pub pretty: String,
}

impl NameVariants {
    /// Derives every variant by splitting `base` on `_`.
    ///
    /// Empty input produces empty variants.
    pub fn derive(base: &str) -> Self {
        let pieces: Vec<&str> = base.split('_').collect();
        Self {
            snake: base.to_string(),
            upper_snake: base.to_uppercase(),
            kebab: pieces.join("-"),
            pascal: pieces.iter().map(|piece| capitalize(piece)).collect(),
            pretty: capitalize(&pieces.join(" ")),
        }
    }

    /// Variants in substitution order.
    fn ordered(&self) -> [&str; 5] {
        [&self.snake, &self.upper_snake, &self.kebab, &self.pascal, &self.pretty]
    }
}

/// Upper-cases the first character and leaves the rest untouched.
fn capitalize(piece: &str) -> String {
    let mut chars = piece.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The placeholder tokens a template uses for its own name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateNames {
    pub name: String,
    pub repo: String,
}

impl TemplateNames {
    pub fn new(name: impl Into<String>, repo: impl Into<String>) -> Self {
        Self { name: name.into(), repo: repo.into() }
    }
}

impl Default for TemplateNames {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE_NAME, DEFAULT_TEMPLATE_REPO)
    }
}

/// Ordered placeholder -> replacement pairs for one renaming run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameMap {
    entries: IndexMap<String, String>,
}

impl NameMap {
    /// Adds a pair unless the placeholder is empty or already mapped.
    ///
    /// The first mapping of a placeholder wins, so coinciding variants of a
    /// single-word template name keep their most specific replacement.
    pub fn insert(&mut self, placeholder: impl Into<String>, replacement: impl Into<String>) {
        let placeholder = placeholder.into();
        if placeholder.is_empty() {
            return;
        }
        self.entries.entry(placeholder).or_insert_with(|| replacement.into());
    }

    pub fn get(&self, placeholder: &str) -> Option<&str> {
        self.entries.get(placeholder).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Display for NameMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (placeholder, replacement) in self.iter() {
            writeln!(f, "  {placeholder:?} -> {replacement:?}")?;
        }
        Ok(())
    }
}

/// Builds the name map for the default template tokens.
///
/// # Returns
/// * `(NameMap, String)` - The map and the resolved repository name, which
///   defaults to the kebab-case form of `base_identifier`
pub fn build_name_map(base_identifier: &str, repo_name: Option<&str>) -> (NameMap, String) {
    build_name_map_for(&TemplateNames::default(), base_identifier, repo_name)
}

/// Builds the name map replacing the variants of `template.name` with those of
/// `base_identifier`, and `template.repo` with the resolved repository name.
pub fn build_name_map_for(
    template: &TemplateNames,
    base_identifier: &str,
    repo_name: Option<&str>,
) -> (NameMap, String) {
    let old = NameVariants::derive(&template.name);
    let new = NameVariants::derive(base_identifier);
    let resolved_repo = repo_name.map(str::to_string).unwrap_or_else(|| new.kebab.clone());

    let mut name_map = NameMap::default();
    for (placeholder, replacement) in old.ordered().into_iter().zip(new.ordered()) {
        name_map.insert(placeholder, replacement);
    }
    name_map.insert(template.repo.as_str(), resolved_repo.as_str());

    debug!("Built name map with {} entries", name_map.len());
    (name_map, resolved_repo)
}

/// Applies every placeholder of a [`NameMap`] in a single left-to-right pass.
///
/// At each position the longest matching placeholder wins and replaced text is
/// never scanned again, so a replacement can not be rewritten by a later entry.
#[derive(Debug, Clone)]
pub struct Substituter {
    name_map: NameMap,
    pattern: Option<Regex>,
}

impl Substituter {
    pub fn new(name_map: &NameMap) -> Result<Self> {
        let mut placeholders: Vec<&str> = name_map.iter().map(|(k, _)| k).collect();
        // stable sort keeps map order among equal lengths
        placeholders.sort_by_key(|p| std::cmp::Reverse(p.len()));

        let pattern = if placeholders.is_empty() {
            None
        } else {
            let alternation: Vec<String> =
                placeholders.iter().map(|p| regex::escape(p)).collect();
            Some(Regex::new(&alternation.join("|"))?)
        };

        Ok(Self { name_map: name_map.clone(), pattern })
    }

    pub fn replace(&self, text: &str) -> String {
        match &self.pattern {
            Some(pattern) => pattern
                .replace_all(text, |caps: &regex::Captures| {
                    self.name_map.get(&caps[0]).unwrap_or(&caps[0]).to_string()
                })
                .into_owned(),
            None => text.to_string(),
        }
    }
}
