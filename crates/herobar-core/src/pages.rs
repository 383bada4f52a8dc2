//! Page registry: the host-side stand-in for the CMS page store.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::meta::PageMeta;
use crate::RegistryError;

/// One registered page: slug, resolved title, and its metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageEntry {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub meta: PageMeta,
}

#[derive(Debug, Deserialize)]
pub struct PagesFile {
    pub pages: Vec<PageEntry>,
}

/// Loaded registry with slug-indexed lookup.
#[derive(Debug, Clone, Default)]
pub struct PageRegistry {
    entries: Vec<PageEntry>,
    by_slug: HashMap<String, usize>,
}

impl PageRegistry {
    #[must_use]
    pub fn new(entries: Vec<PageEntry>) -> Self {
        let by_slug = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.slug.clone(), i))
            .collect();
        Self { entries, by_slug }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[PageEntry] {
        &self.entries
    }

    /// Find the page a request path resolves to.
    ///
    /// The last non-empty path segment is matched against page slugs,
    /// ignoring leading/trailing slashes and case. Unknown paths return
    /// `None`; callers proceed with an empty title and empty metadata.
    #[must_use]
    pub fn find_by_path(&self, path: &str) -> Option<&PageEntry> {
        let slug = path_slug(path)?;
        self.by_slug.get(&slug).and_then(|&i| self.entries.get(i))
    }
}

/// Extract the candidate slug from a request path.
fn path_slug(path: &str) -> Option<String> {
    path.trim()
        .trim_matches('/')
        .rsplit('/')
        .find(|segment| !segment.is_empty())
        .map(str::to_lowercase)
}

/// Load and validate the page registry from a YAML file.
///
/// # Errors
///
/// Returns `RegistryError` if the file cannot be read, parsed, or fails
/// validation (empty or duplicate slugs, empty titles).
pub fn load_pages(path: &Path) -> Result<PageRegistry, RegistryError> {
    let content = std::fs::read_to_string(path).map_err(|e| RegistryError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let pages_file: PagesFile = serde_yaml::from_str(&content).map_err(RegistryError::Parse)?;

    validate_pages(&pages_file)?;

    Ok(PageRegistry::new(pages_file.pages))
}

fn validate_pages(pages_file: &PagesFile) -> Result<(), RegistryError> {
    let mut seen_slugs = std::collections::HashSet::new();

    for page in &pages_file.pages {
        if page.slug.trim().is_empty() {
            return Err(RegistryError::Validation(
                "page slug must be non-empty".to_string(),
            ));
        }

        if page.slug != page.slug.to_lowercase() || page.slug.contains('/') {
            return Err(RegistryError::Validation(format!(
                "page slug '{}' must be lowercase and contain no slashes",
                page.slug
            )));
        }

        if page.title.trim().is_empty() {
            return Err(RegistryError::Validation(format!(
                "page '{}' has an empty title",
                page.slug
            )));
        }

        if !seen_slugs.insert(page.slug.clone()) {
            return Err(RegistryError::Validation(format!(
                "duplicate page slug: '{}'",
                page.slug
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(slug: &str, title: &str) -> PageEntry {
        PageEntry {
            slug: slug.to_string(),
            title: title.to_string(),
            meta: PageMeta::default(),
        }
    }

    #[test]
    fn find_by_path_matches_last_segment() {
        let registry = PageRegistry::new(vec![entry("lock-change", "Lock Change Services")]);
        let found = registry.find_by_path("/services/lock-change/").unwrap();
        assert_eq!(found.slug, "lock-change");
    }

    #[test]
    fn find_by_path_is_case_insensitive() {
        let registry = PageRegistry::new(vec![entry("lock-change", "Lock Change Services")]);
        assert!(registry.find_by_path("/Lock-Change/").is_some());
    }

    #[test]
    fn unknown_path_returns_none() {
        let registry = PageRegistry::new(vec![entry("lock-change", "Lock Change Services")]);
        assert!(registry.find_by_path("/about-us/").is_none());
    }

    #[test]
    fn root_path_returns_none() {
        let registry = PageRegistry::new(vec![entry("lock-change", "Lock Change Services")]);
        assert!(registry.find_by_path("/").is_none());
        assert!(registry.find_by_path("").is_none());
    }

    #[test]
    fn validate_rejects_empty_slug() {
        let file = PagesFile {
            pages: vec![entry("", "Title")],
        };
        let err = validate_pages(&file).unwrap_err();
        assert!(err.to_string().contains("non-empty"));
    }

    #[test]
    fn validate_rejects_uppercase_slug() {
        let file = PagesFile {
            pages: vec![entry("Lock-Change", "Title")],
        };
        let err = validate_pages(&file).unwrap_err();
        assert!(err.to_string().contains("lowercase"));
    }

    #[test]
    fn validate_rejects_empty_title() {
        let file = PagesFile {
            pages: vec![entry("lock-change", "  ")],
        };
        let err = validate_pages(&file).unwrap_err();
        assert!(err.to_string().contains("empty title"));
    }

    #[test]
    fn validate_rejects_duplicate_slug() {
        let file = PagesFile {
            pages: vec![
                entry("lock-change", "Lock Change Services"),
                entry("lock-change", "Lock Changes"),
            ],
        };
        let err = validate_pages(&file).unwrap_err();
        assert!(err.to_string().contains("duplicate page slug"));
    }

    #[test]
    fn validate_accepts_valid_registry() {
        let file = PagesFile {
            pages: vec![
                entry("lock-change", "Lock Change Services"),
                entry("emergency-locksmith", "Emergency Locksmith"),
            ],
        };
        assert!(validate_pages(&file).is_ok());
    }

    #[test]
    fn registry_parses_meta_from_yaml() {
        let yaml = r"
pages:
  - slug: lock-change
    title: Lock Change Services [location]
    meta:
      _hb_intent: planned
      hb_badge_2: Free quotes
";
        let file: PagesFile = serde_yaml::from_str(yaml).unwrap();
        assert!(validate_pages(&file).is_ok());
        let registry = PageRegistry::new(file.pages);
        let page = registry.find_by_path("/lock-change/").unwrap();
        assert_eq!(page.meta.intent_override(), Some("planned".to_string()));
    }
}
