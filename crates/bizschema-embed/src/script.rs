//! `<script type="application/ld+json">` wrapping.
//!
//! The wrapped block is the wire-level artifact: the user pastes it into
//! their page markup and Google's Rich Results validator consumes it. The
//! JSON text passes through untouched (no escaping, no re-encoding), so
//! [`strip`] recovers it byte-identically.

use bizschema_core::{BuildError, SchemaDocument};

pub const SCRIPT_OPEN: &str = "<script type=\"application/ld+json\">";
pub const SCRIPT_CLOSE: &str = "</script>";

/// Wrap serialized JSON in the embed template: opening tag, newline, the
/// JSON text, newline, closing tag.
#[must_use]
pub fn wrap(json: &str) -> String {
    format!("{SCRIPT_OPEN}\n{json}\n{SCRIPT_CLOSE}")
}

/// Recover the bare JSON from a wrapped block. Returns `None` when the block
/// does not match the template exactly.
#[must_use]
pub fn strip(block: &str) -> Option<&str> {
    block
        .strip_prefix(SCRIPT_OPEN)?
        .strip_prefix('\n')?
        .strip_suffix(SCRIPT_CLOSE)?
        .strip_suffix('\n')
}

/// Serialize a document and wrap it in one step; what the UI displays after
/// a successful generate action.
///
/// # Errors
///
/// Propagates [`BuildError::Serialize`] from the serializer.
pub fn render_block(doc: &SchemaDocument) -> Result<String, BuildError> {
    Ok(wrap(&doc.to_pretty_json()?))
}
