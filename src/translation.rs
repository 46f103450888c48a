//! Naming rules for Qt translation files.
//!
//! `lupdate` writes translation sources as `.ts` files and `lrelease` compiles
//! each of them to a `.qm` file next to it. The application loads the compiled
//! files from the `:/i18n/` resource directory.

use crate::error::QrcError;

/// Suffix of an uncompiled translation source.
pub const SOURCE_SUFFIX: &str = ".ts";

/// Suffix of a compiled translation.
pub const COMPILED_SUFFIX: &str = ".qm";

/// Resource prefix under which compiled translations are embedded.
pub const I18N_PREFIX: &str = "/i18n";

/// Map a translation source filename to the name of its compiled counterpart.
///
/// Exactly one trailing `.ts` is replaced by `.qm`; everything before it,
/// including directory components, is kept as-is.
pub fn compiled_name(source: &str) -> Result<String, QrcError> {
    let stem = source
        .strip_suffix(SOURCE_SUFFIX)
        .ok_or_else(|| QrcError::MissingSuffix {
            filename: source.to_string(),
        })?;
    Ok(format!("{stem}{COMPILED_SUFFIX}"))
}
