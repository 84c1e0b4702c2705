//! Current wizard choices
//!
//! [`SelectionState`] holds the dropped files and every metadata choice for
//! one modal session.

use bytes::Bytes;

use crate::catalog::{Expiration, Exposure, Server, TagCatalog, TagCategory};
use crate::tags::TagSet;

/// A dropped file: its original name and contents.
#[derive(Clone, PartialEq, Eq)]
pub struct FileBlob {
    pub name: String,
    pub bytes: Bytes,
}

impl FileBlob {
    pub fn new(name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl std::fmt::Debug for FileBlob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileBlob")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// The user's choices for one upload.
///
/// Tag sets only ever hold names valid for `server`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    file: Option<FileBlob>,
    portrait: Option<FileBlob>,
    server: Server,
    exposure: Exposure,
    expiration: Expiration,
    type_tags: TagSet,
    feature_tags: TagSet,
    purpose_tags: TagSet,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(&self) -> Option<&FileBlob> {
        self.file.as_ref()
    }

    pub fn portrait(&self) -> Option<&FileBlob> {
        self.portrait.as_ref()
    }

    pub fn server(&self) -> Server {
        self.server
    }

    pub fn exposure(&self) -> Exposure {
        self.exposure
    }

    pub fn expiration(&self) -> Expiration {
        self.expiration
    }

    pub fn tags(&self, category: TagCategory) -> &TagSet {
        match category {
            TagCategory::Type => &self.type_tags,
            TagCategory::Features => &self.feature_tags,
            TagCategory::Purpose => &self.purpose_tags,
        }
    }

    /// Selected tags of `category` in the current server's catalog order.
    pub fn ordered_tags(&self, category: TagCategory) -> Vec<&'static str> {
        self.tags(category).in_catalog_order(self.server, category)
    }

    pub fn has_tag(&self, category: TagCategory, name: &str) -> bool {
        self.tags(category).contains(name)
    }

    pub fn set_file(&mut self, file: FileBlob) {
        self.file = Some(file);
    }

    pub fn set_portrait(&mut self, portrait: FileBlob) {
        self.portrait = Some(portrait);
    }

    /// Change server. Always clears all three tag sets, since the tag
    /// vocabulary is server-specific.
    pub fn set_server(&mut self, server: Server) {
        self.type_tags = TagSet::new();
        self.feature_tags = TagSet::new();
        self.purpose_tags = TagSet::new();
        self.server = server;
    }

    pub fn set_exposure(&mut self, exposure: Exposure) {
        self.exposure = exposure;
    }

    pub fn set_expiration(&mut self, expiration: Expiration) {
        self.expiration = expiration;
    }

    /// Toggle `name` in `category`. Names unknown to the current server's
    /// catalog are ignored.
    pub fn toggle_tag(&mut self, category: TagCategory, name: &str) {
        if !TagCatalog::contains(self.server, category, name) {
            tracing::debug!(category = category.as_str(), name, "ignoring tag outside catalog");
            return;
        }
        let slot = match category {
            TagCategory::Type => &mut self.type_tags,
            TagCategory::Features => &mut self.feature_tags,
            TagCategory::Purpose => &mut self.purpose_tags,
        };
        *slot = slot.toggled(name);
    }

    /// Restore every field to its default, releasing any file blobs.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_server_clears_tags() {
        let mut s = SelectionState::new();
        s.toggle_tag(TagCategory::Type, "Tank");
        s.toggle_tag(TagCategory::Purpose, "PvE");
        s.set_server(Server::Sinfar);
        for c in TagCategory::ALL {
            assert!(s.tags(c).is_empty());
        }
        assert_eq!(s.server(), Server::Sinfar);
    }

    #[test]
    fn set_same_server_still_clears() {
        let mut s = SelectionState::new();
        s.toggle_tag(TagCategory::Features, "Bard Song");
        s.set_server(Server::Nwn);
        assert!(s.tags(TagCategory::Features).is_empty());
    }

    #[test]
    fn toggle_ignores_tags_from_other_server() {
        let mut s = SelectionState::new();
        s.toggle_tag(TagCategory::Purpose, "PvP: Duel");
        assert!(s.tags(TagCategory::Purpose).is_empty());

        s.set_server(Server::Sinfar);
        s.toggle_tag(TagCategory::Purpose, "PvP: Duel");
        assert!(s.has_tag(TagCategory::Purpose, "PvP: Duel"));
    }

    #[test]
    fn ordered_tags_follow_catalog() {
        let mut s = SelectionState::new();
        s.set_server(Server::Sinfar);
        s.toggle_tag(TagCategory::Purpose, "Roleplaying");
        s.toggle_tag(TagCategory::Purpose, "PvP: Duel");
        s.toggle_tag(TagCategory::Purpose, "PvP");
        assert_eq!(
            s.ordered_tags(TagCategory::Purpose),
            vec!["PvP", "PvP: Duel", "Roleplaying"]
        );
        assert!(s.ordered_tags(TagCategory::Type).is_empty());
    }

    #[test]
    fn setters_are_idempotent() {
        let mut s = SelectionState::new();
        s.set_exposure(Exposure::Unlisted);
        let once = s.clone();
        s.set_exposure(Exposure::Unlisted);
        assert_eq!(s, once);
    }

    #[test]
    fn reset_drops_files() {
        let mut s = SelectionState::new();
        s.set_file(FileBlob::new("hero.bic", vec![1, 2, 3]));
        s.set_portrait(FileBlob::new("hero.tga", vec![4]));
        s.reset();
        assert_eq!(s, SelectionState::default());
    }

    #[test]
    fn file_blob_debug_hides_bytes() {
        let blob = FileBlob::new("hero.bic", vec![0u8; 4]);
        assert_eq!(format!("{:?}", blob), "FileBlob { name: \"hero.bic\", len: 4 }");
    }
}
