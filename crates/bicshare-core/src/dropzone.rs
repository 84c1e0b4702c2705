//! Dropzone accept filtering
//!
//! Files whose extension does not match are dropped silently; nothing is
//! reported to the user.

/// Which dropzone a file arrived through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropzoneKind {
    /// Character file (`.bic`)
    Character,
    /// Portrait image (`.tga`)
    Portrait,
}

impl DropzoneKind {
    pub fn accept(&self) -> AcceptFilter {
        match self {
            DropzoneKind::Character => AcceptFilter::extension(".bic"),
            DropzoneKind::Portrait => AcceptFilter::extension(".tga"),
        }
    }

    /// Form field name of the file part
    pub fn field_name(&self) -> &'static str {
        match self {
            DropzoneKind::Character => "file",
            DropzoneKind::Portrait => "portrait",
        }
    }

    /// Content type used for the file part
    pub fn mime(&self) -> &'static str {
        match self {
            DropzoneKind::Character => "application/octet-stream",
            DropzoneKind::Portrait => "image/x-tga",
        }
    }
}

/// Extension-based accept filter, e.g. `.bic`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptFilter {
    extension: String,
}

impl AcceptFilter {
    pub fn extension(ext: &str) -> Self {
        let ext = ext.trim_start_matches('.');
        Self {
            extension: format!(".{}", ext.to_ascii_lowercase()),
        }
    }

    /// The value for an `<input accept=...>` attribute
    pub fn as_attr(&self) -> &str {
        &self.extension
    }

    pub fn accepts(&self, file_name: &str) -> bool {
        let lower = file_name.to_ascii_lowercase();
        lower.len() > self.extension.len() && lower.ends_with(&self.extension)
    }

    /// Keep accepted names, preserving order.
    pub fn filter<I, S>(&self, names: I) -> Vec<S>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .filter(|name| {
                let name: &str = name.as_ref();
                let ok = self.accepts(name);
                if !ok {
                    tracing::debug!(file = name, accept = %self.extension, "rejected dropped file");
                }
                ok
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_matching_extension_any_case() {
        let filter = DropzoneKind::Character.accept();
        assert!(filter.accepts("hero.bic"));
        assert!(filter.accepts("HERO.BIC"));
        assert!(!filter.accepts("hero.tga"));
        assert!(!filter.accepts(".bic"));
        assert!(!filter.accepts("herobic"));
    }

    #[test]
    fn filter_preserves_order() {
        let filter = AcceptFilter::extension("tga");
        let kept = filter.filter(vec!["a.tga", "b.bic", "c.TGA"]);
        assert_eq!(kept, vec!["a.tga", "c.TGA"]);
    }

    #[test]
    fn accept_attr_has_leading_dot() {
        assert_eq!(AcceptFilter::extension("bic").as_attr(), ".bic");
        assert_eq!(DropzoneKind::Portrait.accept().as_attr(), ".tga");
    }
}
