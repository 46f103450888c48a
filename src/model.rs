use camino::{Utf8Path, Utf8PathBuf};

use crate::error::QrcError;
use crate::translation::{I18N_PREFIX, compiled_name};

// ────────────────────────────────────────────────────────────────────────────
// ResourceFile
// ────────────────────────────────────────────────────────────────────────────

/// A single `<file>` entry of a resource collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceFile {
    /// Translation source the entry was derived from.
    pub source: Utf8PathBuf,
    /// Path written as the text of the `<file>` element.
    pub path: String,
}

impl ResourceFile {
    /// Build the entry for the compiled form of a `.ts` translation source.
    pub fn from_translation_source(source: impl AsRef<Utf8Path>) -> Result<Self, QrcError> {
        let source = source.as_ref();
        let path = compiled_name(source.as_str())?;
        Ok(Self {
            source: source.to_path_buf(),
            path,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// ResourceGroup / ResourceCollection
// ────────────────────────────────────────────────────────────────────────────

/// A `<qresource>` element: files sharing one resource prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceGroup {
    pub prefix: String,
    /// Entries in insertion order; duplicates are kept.
    pub files: Vec<ResourceFile>,
}

impl ResourceGroup {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            files: Vec::new(),
        }
    }

    pub fn push(&mut self, file: ResourceFile) {
        self.files.push(file);
    }
}

/// The `<RCC>` document root. Holds exactly one resource group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceCollection {
    pub group: ResourceGroup,
}

impl ResourceCollection {
    /// Collect the compiled translations of `sources` under the `/i18n` prefix.
    ///
    /// Every source is validated before the collection is returned, so a single
    /// bad name yields an error and no collection at all.
    pub fn translations<I, P>(sources: I) -> Result<Self, QrcError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Utf8Path>,
    {
        let mut group = ResourceGroup::new(I18N_PREFIX);
        for source in sources {
            let file = ResourceFile::from_translation_source(source)?;
            tracing::debug!(source = %file.source, resource = %file.path, "mapped translation");
            group.push(file);
        }
        Ok(Self { group })
    }

    /// Number of `<file>` entries.
    pub fn len(&self) -> usize {
        self.group.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.group.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translations_keep_order_and_duplicates() {
        let rcc = ResourceCollection::translations(["b.ts", "a.ts", "b.ts"]).unwrap();
        assert_eq!(rcc.group.prefix, "/i18n");
        let paths: Vec<&str> = rcc.group.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, ["b.qm", "a.qm", "b.qm"]);
        assert_eq!(rcc.len(), 3);
    }

    #[test]
    fn test_source_is_recorded() {
        let file = ResourceFile::from_translation_source("lang/app_ja.ts").unwrap();
        assert_eq!(file.source, Utf8PathBuf::from("lang/app_ja.ts"));
        assert_eq!(file.path, "lang/app_ja.qm");
    }

    #[test]
    fn test_one_bad_source_fails_the_collection() {
        let err = ResourceCollection::translations(["a.ts", "notes.txt", "b.ts"]).unwrap_err();
        assert!(
            matches!(err, QrcError::MissingSuffix { ref filename } if filename == "notes.txt"),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn test_empty_input_gives_empty_group() {
        let rcc = ResourceCollection::translations(Vec::<String>::new()).unwrap();
        assert!(rcc.is_empty());
    }
}
