use fnv::FnvHashMap;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Resolves a localization key to display text.
pub trait Translate {
    fn t(&self, key: &str) -> String;
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog {lang:?} is not valid: {source}")]
    Parse {
        lang: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("catalog {0:?} must be a JSON object at the top level")]
    NotAnObject(String),
}

// Nested i18next-style resources: objects of objects ending in strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum Resource {
    Text(String),
    Group(BTreeMap<String, Resource>),
}

fn flatten(prefix: &str, node: Resource, out: &mut FnvHashMap<String, String>) {
    match node {
        Resource::Text(s) => {
            out.insert(prefix.to_string(), s);
        }
        Resource::Group(children) => {
            for (k, child) in children {
                let key = if prefix.is_empty() {
                    k
                } else {
                    format!("{prefix}.{k}")
                };
                flatten(&key, child, out);
            }
        }
    }
}

/// All strings of one language, keyed by dotted path (`home.blog.title`).
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    lang: String,
    entries: FnvHashMap<String, String>,
}

impl Catalog {
    pub fn from_json(lang: &str, json: &str) -> Result<Self, CatalogError> {
        let root: Resource = serde_json::from_str(json).map_err(|source| CatalogError::Parse {
            lang: lang.to_string(),
            source,
        })?;
        if let Resource::Text(_) = root {
            return Err(CatalogError::NotAnObject(lang.to_string()));
        }
        let mut entries = FnvHashMap::default();
        flatten("", root, &mut entries);
        Ok(Self {
            lang: lang.to_string(),
            entries,
        })
    }

    #[inline]
    pub fn lang(&self) -> &str {
        &self.lang
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

/// Primary language subtag, lowercased: `es-MX` → `es`.
pub fn base_language(tag: &str) -> String {
    tag.split(['-', '_'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Looks keys up in the active catalog, then the fallback, then returns the
/// key itself.
#[derive(Clone, Debug)]
pub struct Translator {
    catalogs: Vec<Catalog>,
    active: usize,
    fallback: usize,
}

impl Translator {
    /// `fallback_lang` must name one of `catalogs`; otherwise the first one is used.
    pub fn new(catalogs: Vec<Catalog>, fallback_lang: &str) -> Self {
        let fallback = catalogs
            .iter()
            .position(|c| c.lang == fallback_lang)
            .unwrap_or(0);
        Self {
            catalogs,
            active: fallback,
            fallback,
        }
    }

    pub fn active_language(&self) -> Option<&str> {
        self.catalogs.get(self.active).map(Catalog::lang)
    }

    /// Switch to the catalog matching `tag` (exact, then base language).
    /// Returns `false` and keeps the current language when nothing matches.
    pub fn set_language(&mut self, tag: &str) -> bool {
        let exact = self.catalogs.iter().position(|c| c.lang.eq_ignore_ascii_case(tag));
        let base = base_language(tag);
        let found = exact.or_else(|| self.catalogs.iter().position(|c| c.lang == base));
        match found {
            Some(i) => {
                self.active = i;
                true
            }
            None => false,
        }
    }
}

impl Translate for Translator {
    fn t(&self, key: &str) -> String {
        [self.active, self.fallback]
            .iter()
            .filter_map(|&i| self.catalogs.get(i))
            .find_map(|c| c.lookup(key))
            .unwrap_or(key)
            .to_string()
    }
}
