use crate::utils::error::{GalleryError, Result};
use regex::Regex;
use std::sync::LazyLock;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
pub const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";

static ROOT_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^\s*<svg[\s>]").unwrap());
static OPEN_SVG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<svg\b").unwrap());
static XMLNS_ATTR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bxmlns=").unwrap());
static XLINK_HREF: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bxlink:href=").unwrap());
static XMLNS_XLINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bxmlns:xlink=").unwrap());
static SCRIPT_ELEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b[^>]*>.*?</script>").unwrap());
static SCRIPT_SELF_CLOSING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b[^>]*/>").unwrap());

/// Repair the common defects that make an externally-sourced SVG fail to
/// parse or render: a leading BOM, a missing default namespace, a missing
/// xlink namespace, and embedded `<script>` content.
///
/// Fails with `MalformedInputError` when the input does not start with an
/// `<svg` root tag (case-insensitive, leading whitespace allowed). The
/// transform is pure and idempotent for BOM-free inputs.
pub fn normalize(text: &str) -> Result<String> {
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);

    if !ROOT_TAG.is_match(text) {
        return Err(GalleryError::MalformedInputError {
            reason: "document does not start with an <svg> root tag".to_string(),
        });
    }

    let mut svg = text.to_string();

    // Add the default namespace when the root tag lacks one. The xmlns test
    // only looks inside the root tag, up to its closing '>'.
    if !XMLNS_ATTR.is_match(root_tag(&svg)) {
        svg = OPEN_SVG
            .replace(&svg, format!(r#"<svg xmlns="{}""#, SVG_NAMESPACE))
            .into_owned();
    }

    // Add xmlns:xlink when xlink:href is used anywhere without a declaration.
    if XLINK_HREF.is_match(&svg) && !XMLNS_XLINK.is_match(&svg) {
        svg = OPEN_SVG
            .replace(&svg, format!(r#"<svg xmlns:xlink="{}""#, XLINK_NAMESPACE))
            .into_owned();
    }

    // Strip script elements before the document reaches a renderer. Paired
    // tags first, then self-closing variants. Best-effort only.
    let svg = SCRIPT_ELEMENT.replace_all(&svg, "").into_owned();
    let svg = SCRIPT_SELF_CLOSING.replace_all(&svg, "").into_owned();

    Ok(svg)
}

/// The root `<svg ...>` tag, from `<svg` to the first `>` (or the end of the
/// document when the tag is truncated).
fn root_tag(svg: &str) -> &str {
    let start = OPEN_SVG.find(svg).map(|m| m.start()).unwrap_or(0);
    let end = svg[start..]
        .find('>')
        .map(|i| start + i + 1)
        .unwrap_or(svg.len());
    &svg[start..end]
}

/// Strict well-formedness check. Reports `true` on any parse failure
/// (fail-closed); never panics. DTDs are allowed since doctyped SVG is
/// accepted by browser parsers.
pub fn has_parser_error(text: &str) -> bool {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };
    roxmltree::Document::parse_with_options(text, options).is_err()
}
