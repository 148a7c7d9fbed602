//! Version-gated reinterpretation of older documents.
//!
//! Each rule compares the document's version with its own threshold and
//! only ever fills in fields the document does not set. Explicit values
//! always win over threshold-derived defaults.

use crate::Diagnostics;
use gamedoc_serial::Element;
use gamedoc_types::DocumentVersion;

/// Documents up to this version may use the old platform names.
pub const PLATFORM_RENAME_CUTOFF: DocumentVersion = DocumentVersion::new(3, 4, 73, 0);

/// Historical platform names and their current replacements.
pub const PLATFORM_RENAMES: &[(&str, &str)] = &[
    ("Game Develop C++ platform", "GDevelop C++ platform"),
    ("Game Develop JS platform", "GDevelop JS platform"),
];

/// A boolean property whose default depends on the document version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdRule {
    pub field: &'static str,
    pub threshold: DocumentVersion,
    /// Default for documents older than or equal to `threshold`.
    pub up_to_threshold: bool,
    /// Default for documents newer than `threshold`.
    pub after_threshold: bool,
}

/// Documents saved before the default Z order changed keep using zero.
pub const ZERO_AS_DEFAULT_Z_ORDER: ThresholdRule = ThresholdRule {
    field: "useDeprecatedZeroAsDefaultZOrder",
    threshold: DocumentVersion::new(4, 0, 98, 0),
    up_to_threshold: true,
    after_threshold: false,
};

/// Reads the `gdVersion` stamp of a project element.
///
/// Missing major and minor parts default to the tool's own, missing build
/// and revision to zero.
#[must_use]
pub fn document_version_of(project: &Element, tool: DocumentVersion) -> DocumentVersion {
    let stamp = project.child_or("gdVersion", "GDVersion");
    let part = |name: &str, legacy: &str, default: u32| {
        u32::try_from(stamp.int_attribute_aliased(name, legacy, i64::from(default))).unwrap_or(0)
    };
    DocumentVersion::new(
        part("major", "Major", tool.major),
        part("minor", "Minor", tool.minor),
        part("build", "Build", 0),
        part("revision", "Revision", 0),
    )
}

/// Compares a document's version with the running tool's.
pub struct VersionCompatibility<'a> {
    document: DocumentVersion,
    tool: DocumentVersion,
    diagnostics: &'a Diagnostics,
}

impl<'a> VersionCompatibility<'a> {
    #[must_use]
    pub fn new(
        document: DocumentVersion,
        tool: DocumentVersion,
        diagnostics: &'a Diagnostics,
    ) -> Self {
        Self {
            document,
            tool,
            diagnostics,
        }
    }

    #[must_use]
    pub fn document_version(&self) -> DocumentVersion {
        self.document
    }

    #[must_use]
    pub fn tool_version(&self) -> DocumentVersion {
        self.tool
    }

    /// Warns when the document was written by a newer tool. Loading goes on
    /// regardless. Returns whether the document is newer.
    pub fn check_document_version(&self) -> bool {
        let newer = self.document.is_newer_than(&self.tool);
        if newer {
            self.diagnostics.warn(format!(
                "The project was saved with version {} which is newer than this version ({}). \
                 It may fail to open, or data may be missing. Check for updates.",
                self.document, self.tool
            ));
        }
        newer
    }

    #[must_use]
    pub fn is_document_older_or_equal(&self, threshold: &DocumentVersion) -> bool {
        self.document.is_older_or_equal(threshold)
    }

    /// Value of `rule.field` in `element`, or the version-appropriate default.
    ///
    /// The document's revision is ignored when comparing against the threshold.
    #[must_use]
    pub fn bool_property(&self, rule: &ThresholdRule, element: &Element) -> bool {
        if element.has_attribute(rule.field) {
            return element.bool_attribute(rule.field, rule.after_threshold);
        }
        let document = DocumentVersion {
            revision: 0,
            ..self.document
        };
        if document.is_older_or_equal(&rule.threshold) {
            rule.up_to_threshold
        } else {
            rule.after_threshold
        }
    }

    /// Current name of a platform, applying historical renames to old documents.
    #[must_use]
    pub fn platform_name(&self, name: &str) -> String {
        if self.is_document_older_or_equal(&PLATFORM_RENAME_CUTOFF) {
            if let Some((_, renamed)) = PLATFORM_RENAMES.iter().find(|(old, _)| *old == name) {
                return (*renamed).to_string();
            }
        }
        name.to_string()
    }
}
