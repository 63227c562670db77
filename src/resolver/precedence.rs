// Mon Oct 19 2026 - Alex

use indexmap::IndexMap;

/// Whether a candidate value counts as supplied. Empty strings and empty
/// collections fall through to the next candidate; numbers always count.
pub trait Presence {
    fn is_present(&self) -> bool;
}

impl Presence for String {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for &str {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Presence for Vec<T> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V> Presence for IndexMap<K, V> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for i64 {
    fn is_present(&self) -> bool {
        true
    }
}

impl Presence for bool {
    fn is_present(&self) -> bool {
        *self
    }
}

/// Ordered candidates for one field; the first present value wins.
pub struct Precedence<'a, T> {
    candidates: Vec<(&'static str, Box<dyn Fn() -> Option<T> + 'a>)>,
}

impl<'a, T: Presence> Precedence<'a, T> {
    pub fn new() -> Self {
        Self {
            candidates: Vec::new(),
        }
    }

    pub fn candidate<F>(mut self, origin: &'static str, f: F) -> Self
    where
        F: Fn() -> Option<T> + 'a,
    {
        self.candidates.push((origin, Box::new(f)));
        self
    }

    /// First present value and the name of the candidate that produced it.
    pub fn resolve_with_origin(&self) -> Option<(&'static str, T)> {
        self.candidates
            .iter()
            .find_map(|(origin, f)| f().filter(|v| v.is_present()).map(|v| (*origin, v)))
    }

    pub fn resolve(&self) -> Option<T> {
        self.resolve_with_origin().map(|(_, v)| v)
    }

    pub fn resolve_or(&self, default: T) -> T {
        self.resolve().unwrap_or(default)
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl<T: Presence> Default for Precedence<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}
