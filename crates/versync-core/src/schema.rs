//! Manifest schema variants and per-schema package extraction
//!
//! The schema is detected once, at parse time, from the document's root
//! element; everything downstream works against the uniform `PackageEntry`
//! model instead of re-testing the root name per operation.

use std::ops::Range;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::package::PackageEntry;

/// The two supported manifest formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Schema {
    /// Project-style manifest: `PackageReference` elements under a
    /// `Project` root, id in an `Include` attribute, version in a nested
    /// `Version` element or a `Version` attribute.
    Modern,
    /// Config-style manifest: flat `package` elements under a `packages`
    /// root, id and version both attributes.
    Legacy,
}

impl Schema {
    /// Detect the schema from the root element's local name.
    pub fn detect(root_name: &str) -> Option<Self> {
        match root_name {
            "Project" => Some(Self::Modern),
            "packages" => Some(Self::Legacy),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Legacy => "legacy",
        }
    }
}

impl std::fmt::Display for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extract every package entry, with the byte span of its version value.
///
/// Tag and attribute names are matched by local name, so namespaced
/// project files resolve the same as plain ones.
pub(crate) fn extract(
    schema: Schema,
    doc: &roxmltree::Document<'_>,
    source: &str,
    path: &Path,
) -> Result<Vec<PackageEntry>> {
    match schema {
        Schema::Modern => extract_modern(doc, source, path),
        Schema::Legacy => extract_legacy(doc, source, path),
    }
}

fn extract_modern(
    doc: &roxmltree::Document<'_>,
    source: &str,
    path: &Path,
) -> Result<Vec<PackageEntry>> {
    let mut entries = Vec::new();

    for node in doc.descendants().filter(|n| {
        n.is_element() && n.tag_name().name() == "PackageReference"
    }) {
        let id = node.attribute("Include").ok_or_else(|| {
            Error::schema(path, "PackageReference element missing Include attribute")
        })?;

        // A nested <Version> element's text wins over a Version attribute.
        let nested = node
            .children()
            .find(|c| c.is_element() && c.tag_name().name() == "Version")
            .and_then(|el| element_text_span(source, el));

        let (version, span) = match nested {
            Some((value, span)) => (value.to_string(), span),
            None => match node.attributes().find(|a| a.name() == "Version") {
                Some(attr) => {
                    let span = attribute_value_span(source, attr.range());
                    (attr.value().to_string(), span)
                }
                None => {
                    return Err(Error::MissingVersion {
                        path: path.to_path_buf(),
                        id: id.to_string(),
                    });
                }
            },
        };

        entries.push(PackageEntry::new(id, version, span));
    }

    Ok(entries)
}

fn extract_legacy(
    doc: &roxmltree::Document<'_>,
    source: &str,
    path: &Path,
) -> Result<Vec<PackageEntry>> {
    let mut entries = Vec::new();

    for node in doc
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "package")
    {
        let id = node
            .attribute("id")
            .ok_or_else(|| Error::schema(path, "package element missing id attribute"))?;

        let attr = node
            .attributes()
            .find(|a| a.name() == "version")
            .ok_or_else(|| Error::MissingVersion {
                path: path.to_path_buf(),
                id: id.to_string(),
            })?;

        let span = attribute_value_span(source, attr.range());
        entries.push(PackageEntry::new(id, attr.value().to_string(), span));
    }

    Ok(entries)
}

/// Span and trimmed value of an element's text content, if any.
///
/// `<Version></Version>` and whitespace-only text count as absent, so the
/// caller falls back to the attribute form.
fn element_text_span<'a>(
    source: &'a str,
    element: roxmltree::Node<'_, '_>,
) -> Option<(&'a str, Range<usize>)> {
    let text = element.children().find(|c| c.is_text())?;
    let range = text.range();
    let raw = &source[range.clone()];
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let start = range.start + (raw.len() - raw.trim_start().len());
    Some((trimmed, start..start + trimmed.len()))
}

/// Narrow an attribute's source range down to the quoted value.
///
/// roxmltree reports the span of the whole `name="value"` token; the value
/// sits between the first quote after `=` and its matching close quote.
fn attribute_value_span(source: &str, range: Range<usize>) -> Range<usize> {
    let slice = &source[range.clone()];
    let Some(eq) = slice.find('=') else {
        // Range already covers just the value.
        return range;
    };
    let after_eq = &slice[eq + 1..];
    let Some(quote_offset) = after_eq.find(['"', '\'']) else {
        return range;
    };
    let quote = after_eq.as_bytes()[quote_offset] as char;
    let value_start = range.start + eq + 1 + quote_offset + 1;
    let value_len = source[value_start..range.end]
        .find(quote)
        .unwrap_or(range.end - value_start);
    value_start..value_start + value_len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_span_covers_only_the_value() {
        let source = r#"<package id="A" version="1.2.3" />"#;
        let start = source.find("version=").unwrap();
        let span = attribute_value_span(source, start..start + r#"version="1.2.3""#.len());
        assert_eq!(&source[span], "1.2.3");
    }

    #[test]
    fn detect_is_exact_on_root_names() {
        assert_eq!(Schema::detect("Project"), Some(Schema::Modern));
        assert_eq!(Schema::detect("packages"), Some(Schema::Legacy));
        assert_eq!(Schema::detect("Packages"), None);
    }
}
