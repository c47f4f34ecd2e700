// Selection state: which portal, if any, is currently open.
//
// Components talk to an explicit store instead of reaching into the URL; the
// web frontend backs the store with the `id` query parameter.

use ::url::form_urlencoded;

/// Query parameter that carries the selected frame identifier.
pub const SELECTION_PARAM: &str = "id";

pub trait SelectionStore {
    fn selection(&self) -> Option<String>;
    fn set_selection(&mut self, id: &str);
    fn clear_selection(&mut self);
}

/// In-memory selection with a revision counter bumped on every real change.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    current: Option<String>,
    revision: u64,
}

impl Selection {
    pub fn new(initial: Option<String>) -> Self {
        Self {
            current: initial.filter(|s| !s.is_empty()),
            revision: 0,
        }
    }

    #[inline]
    pub fn get(&self) -> Option<&str> {
        self.current.as_deref()
    }

    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns `true` if the stored identifier changed.
    pub fn set(&mut self, id: &str) -> bool {
        if id.is_empty() {
            return self.clear();
        }
        if self.current.as_deref() == Some(id) {
            return false;
        }
        self.current = Some(id.to_string());
        self.revision += 1;
        true
    }

    pub fn clear(&mut self) -> bool {
        if self.current.take().is_some() {
            self.revision += 1;
            true
        } else {
            false
        }
    }
}

impl SelectionStore for Selection {
    fn selection(&self) -> Option<String> {
        self.current.clone()
    }

    fn set_selection(&mut self, id: &str) {
        self.set(id);
    }

    fn clear_selection(&mut self) {
        self.clear();
    }
}

/// Numeric value of an identifier, used to pick the focus heading.
#[inline]
pub fn ring_index(id: &str) -> Option<f32> {
    id.trim().parse::<f32>().ok().filter(|v| v.is_finite())
}

// ---------------- Query string helpers ----------------

fn pairs(search: &str) -> form_urlencoded::Parse<'_> {
    let query = search.strip_prefix('?').unwrap_or(search);
    form_urlencoded::parse(query.as_bytes())
}

fn finish(mut query: form_urlencoded::Serializer<'_, String>) -> String {
    let out = query.finish();
    if out.is_empty() {
        out
    } else {
        format!("?{}", out)
    }
}

/// First value of `key` in a query string (with or without the leading `?`).
pub fn query_param(search: &str, key: &str) -> Option<String> {
    pairs(search)
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// Set `key` to `value`, replacing any existing entries and keeping the rest.
pub fn with_query_param(search: &str, key: &str, value: &str) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    let mut placed = false;
    for (k, v) in pairs(search) {
        if k == key {
            if !placed {
                query.append_pair(key, value);
                placed = true;
            }
        } else {
            query.append_pair(&k, &v);
        }
    }
    if !placed {
        query.append_pair(key, value);
    }
    finish(query)
}

/// Remove every entry for `key`, keeping the rest.
pub fn without_query_param(search: &str, key: &str) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.extend_pairs(pairs(search).filter(|(k, _)| k != key));
    finish(query)
}
