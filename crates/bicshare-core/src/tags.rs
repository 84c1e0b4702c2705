//! Tag selection sets
//!
//! A [`TagSet`] is never mutated in place: [`TagSet::toggled`] returns a new
//! set, so every toggle produces a fresh value the UI can diff against.

use std::collections::BTreeSet;

use crate::catalog::{Server, TagCatalog, TagCategory};

/// Membership-only set of selected tag names for one category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet(BTreeSet<String>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy with `name` removed if present, added otherwise.
    pub fn toggled(&self, name: &str) -> Self {
        let mut next = self.0.clone();
        if !next.remove(name) {
            next.insert(name.to_string());
        }
        Self(next)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Members in the catalog's declared order for `server`/`category`.
    ///
    /// Names the catalog does not know are dropped.
    pub fn in_catalog_order(&self, server: Server, category: TagCategory) -> Vec<&'static str> {
        TagCatalog::tags(server, category)
            .iter()
            .copied()
            .filter(|tag| self.contains(tag))
            .collect()
    }
}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let empty = TagSet::new();
        let one = empty.toggled("Tank");
        assert!(one.contains("Tank"));
        assert!(empty.is_empty(), "original set is left untouched");
        assert_eq!(one.toggled("Tank"), empty);
    }

    #[test]
    fn catalog_order_ignores_insertion_order() {
        let tags: TagSet = ["Healer", "Tank"].into_iter().collect();
        assert_eq!(tags.in_catalog_order(Server::Nwn, TagCategory::Type), vec!["Tank", "Healer"]);
    }

    #[test]
    fn catalog_order_drops_unknown_names() {
        let tags: TagSet = ["PvP: CTF", "PvE"].into_iter().collect();
        assert_eq!(tags.in_catalog_order(Server::Nwn, TagCategory::Purpose), vec!["PvE"]);
        assert!(TagSet::new().in_catalog_order(Server::Sinfar, TagCategory::Features).is_empty());
    }
}
