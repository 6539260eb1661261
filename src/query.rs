//! Query-string configuration for grid layouts.
//!
//! Parses strings like `w=200&h=150&gutter=10&halign=center&valign=top`
//! into a [`GridLayout`]. Lenient: problems become [`ParseWarning`]s and the
//! last valid value for a key wins. Justification is the exception: the
//! `halign`/`valign` pair is resolved with [`Justification::from_tokens`],
//! and an unrecognized token leaves `layout` empty instead of falling back
//! to a default alignment. `halign=centered&valign=centered` selects
//! [`Justification::Centered`], as does `centered=true`.
//!
//! # Example
//!
//! ```
//! use zengrid::query;
//! use zengrid::{Justification, OrderBy, Viewport};
//!
//! let result = query::parse("?w=200&h=150&gutter=10&centered=true&order=width");
//! assert!(result.warnings.is_empty());
//!
//! let layout = result.layout.expect("width and height given");
//! assert_eq!(layout.viewport, Viewport::new(200, 150, 10));
//! assert_eq!(layout.justification, Justification::Centered);
//! assert_eq!(layout.order, Some(OrderBy::Width));
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use crate::grid::GridLayout;
use crate::justify::{HAlign, Justification, VAlign};
use crate::order::OrderBy;
use crate::viewport::Viewport;

/// Result of parsing a layout query string.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// The layout, when both cell width and height were given.
    pub layout: Option<GridLayout>,
    /// Non-fatal parse warnings.
    pub warnings: Vec<ParseWarning>,
}

/// Non-fatal warning from query string parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A key appeared more than once (last value wins).
    DuplicateKey { key: String, value: String },
    /// A key was not recognized.
    KeyNotRecognized { key: String, value: String },
    /// A key was recognized but its value could not be parsed.
    ValueInvalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
    /// A required key was absent, so no layout was produced.
    KeyMissing { key: &'static str },
}

/// Parsed but not yet validated fields.
#[derive(Default)]
struct Fields {
    width: Option<u32>,
    height: Option<u32>,
    gutter: Option<u32>,
    halign: Option<String>,
    valign: Option<String>,
    centered: Option<bool>,
    order: Option<Option<OrderBy>>,
}

/// Parse a layout query string (with or without leading `?`).
pub fn parse(query: &str) -> ParseResult {
    let mut fields = Fields::default();
    let mut warnings = Vec::new();

    for pair in query.trim_start_matches('?').split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = match pair.split_once('=') {
            Some((k, v)) => (k.trim(), v.trim()),
            None => (pair.trim(), ""),
        };
        let key = key.to_ascii_lowercase();
        dispatch_key(&key, value, &mut fields, &mut warnings);
    }

    let layout = build(&fields, &mut warnings);
    if !warnings.is_empty() {
        log::debug!("query {query:?}: {} warning(s)", warnings.len());
    }
    ParseResult { layout, warnings }
}

fn dispatch_key(key: &str, value: &str, fields: &mut Fields, warnings: &mut Vec<ParseWarning>) {
    match key {
        "w" | "width" => set_or_invalid(
            &mut fields.width,
            parse_positive(value),
            "width",
            value,
            "expected a positive integer",
            warnings,
        ),
        "h" | "height" => set_or_invalid(
            &mut fields.height,
            parse_positive(value),
            "height",
            value,
            "expected a positive integer",
            warnings,
        ),
        "gutter" | "gap" => set_or_invalid(
            &mut fields.gutter,
            value.parse::<u32>().ok(),
            "gutter",
            value,
            "expected a non-negative integer",
            warnings,
        ),
        // Tokens are checked as a pair in `build`.
        "halign" | "h.align" => set_token(&mut fields.halign, "halign", value, warnings),
        "valign" | "v.align" => set_token(&mut fields.valign, "valign", value, warnings),
        "centered" => set_or_invalid(
            &mut fields.centered,
            parse_bool(value),
            "centered",
            value,
            "expected true|false|1|0|yes|no|on|off",
            warnings,
        ),
        "order" => set_or_invalid(
            &mut fields.order,
            parse_order(value),
            "order",
            value,
            "expected width|height|none",
            warnings,
        ),
        _ => warnings.push(ParseWarning::KeyNotRecognized {
            key: String::from(key),
            value: String::from(value),
        }),
    }
}

fn build(fields: &Fields, warnings: &mut Vec<ParseWarning>) -> Option<GridLayout> {
    let justification = resolve_justification(fields, warnings);
    if fields.width.is_none() {
        warnings.push(ParseWarning::KeyMissing { key: "width" });
    }
    if fields.height.is_none() {
        warnings.push(ParseWarning::KeyMissing { key: "height" });
    }
    let viewport = Viewport::new(fields.width?, fields.height?, fields.gutter.unwrap_or(0));
    let justification = justification?;

    Some(GridLayout {
        viewport,
        justification,
        order: fields.order.flatten(),
    })
}

const HALIGN_REASON: &str = "expected left|center|right, or centered with valign=centered";
const VALIGN_REASON: &str = "expected top|center|bottom, or centered with halign=centered";

/// Resolve the alignment pair; `None` when either token is unrecognized.
fn resolve_justification(
    fields: &Fields,
    warnings: &mut Vec<ParseWarning>,
) -> Option<Justification> {
    let horizontal = fields
        .halign
        .as_deref()
        .unwrap_or(HAlign::default().token());
    let vertical = fields
        .valign
        .as_deref()
        .unwrap_or(VAlign::default().token());

    match Justification::from_tokens(horizontal, vertical) {
        Ok(_) if fields.centered == Some(true) => Some(Justification::Centered),
        Ok(justification) => Some(justification),
        Err(_) => {
            let (key, value, reason) = if horizontal.parse::<HAlign>().is_err() {
                ("halign", horizontal, HALIGN_REASON)
            } else {
                ("valign", vertical, VALIGN_REASON)
            };
            warnings.push(ParseWarning::ValueInvalid {
                key,
                value: String::from(value),
                reason,
            });
            None
        }
    }
}

/// Store a raw justification token, warning on duplicates.
fn set_token(
    field: &mut Option<String>,
    key: &'static str,
    value: &str,
    warnings: &mut Vec<ParseWarning>,
) {
    set_or_invalid(field, Some(String::from(value)), key, value, "", warnings);
}

/// Set a field, warning on duplicates; warn instead when the value didn't parse.
fn set_or_invalid<T>(
    field: &mut Option<T>,
    parsed: Option<T>,
    key: &'static str,
    value: &str,
    reason: &'static str,
    warnings: &mut Vec<ParseWarning>,
) {
    match parsed {
        Some(v) => {
            if field.is_some() {
                warnings.push(ParseWarning::DuplicateKey {
                    key: String::from(key),
                    value: String::from(value),
                });
            }
            *field = Some(v);
        }
        None => warnings.push(ParseWarning::ValueInvalid {
            key,
            value: String::from(value),
            reason,
        }),
    }
}

// ---- Value parsers ----

fn parse_positive(s: &str) -> Option<u32> {
    s.parse::<u32>().ok().filter(|&v| v > 0)
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_order(s: &str) -> Option<Option<OrderBy>> {
    match s.to_ascii_lowercase().as_str() {
        "width" | "w" => Some(Some(OrderBy::Width)),
        "height" | "h" => Some(Some(OrderBy::Height)),
        "none" | "input" => Some(None),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_layout() {
        let r = parse("w=400&h=300&gutter=12&halign=right&valign=center&order=height");
        assert!(r.warnings.is_empty(), "{:?}", r.warnings);
        assert_eq!(
            r.layout,
            Some(GridLayout {
                viewport: Viewport::new(400, 300, 12),
                justification: Justification::aligned(HAlign::Right, VAlign::Center),
                order: Some(OrderBy::Height),
            })
        );
    }

    #[test]
    fn defaults_fill_missing_optional_keys() {
        let r = parse("width=200&height=150");
        assert!(r.warnings.is_empty());
        let layout = r.layout.unwrap();
        assert_eq!(layout.viewport.gutter, 0);
        assert_eq!(layout.justification, Justification::default());
        assert_eq!(layout.order, None);
    }

    #[test]
    fn missing_dimensions_produce_no_layout() {
        let r = parse("w=200&halign=left");
        assert!(r.layout.is_none());
        assert_eq!(r.warnings, [ParseWarning::KeyMissing { key: "height" }]);
    }

    #[test]
    fn centered_overrides_axis_alignment() {
        let r = parse("w=1&h=1&halign=right&centered=yes");
        assert_eq!(r.layout.unwrap().justification, Justification::Centered);
        let r = parse("w=1&h=1&halign=right&centered=off");
        assert_eq!(
            r.layout.unwrap().justification,
            Justification::aligned(HAlign::Right, VAlign::Top)
        );
    }

    #[test]
    fn bad_justification_leaves_no_layout() {
        let r = parse("w=1&h=1&valign=middle");
        assert_eq!(
            r.warnings,
            [ParseWarning::ValueInvalid {
                key: "valign",
                value: String::from("middle"),
                reason: VALIGN_REASON,
            }]
        );
        assert!(r.layout.is_none());

        let r = parse("w=200&h=150&halign=middle&valign=bottom");
        assert!(r.layout.is_none());
        assert!(matches!(
            r.warnings.as_slice(),
            [ParseWarning::ValueInvalid { key: "halign", .. }]
        ));
    }

    #[test]
    fn centered_token_pair_selects_centered_mode() {
        let r = parse("w=200&h=150&halign=centered&valign=centered");
        assert!(r.warnings.is_empty(), "{:?}", r.warnings);
        assert_eq!(r.layout.unwrap().justification, Justification::Centered);

        let r = parse("w=200&h=150&h.align=Centered&v.align=CENTERED");
        assert_eq!(r.layout.unwrap().justification, Justification::Centered);
    }

    #[test]
    fn lone_centered_token_is_rejected() {
        let r = parse("w=200&h=150&halign=centered&valign=top");
        assert!(r.layout.is_none());
        assert!(matches!(
            r.warnings.as_slice(),
            [ParseWarning::ValueInvalid { key: "halign", .. }]
        ));
        // The centered flag does not excuse a bad token.
        assert!(parse("w=200&h=150&valign=middle&centered=1").layout.is_none());
    }

    #[test]
    fn gap_is_an_alias_for_gutter() {
        let r = parse("w=10&h=10&gap=3");
        assert_eq!(r.layout.unwrap().viewport.gutter, 3);
    }

    #[test]
    fn zero_width_is_invalid() {
        let r = parse("w=0&h=10");
        assert!(r.layout.is_none());
        assert!(matches!(
            r.warnings[0],
            ParseWarning::ValueInvalid { key: "width", .. }
        ));
    }

    #[test]
    fn duplicate_key_last_wins() {
        let r = parse("w=100&w=200&h=50");
        assert_eq!(r.layout.unwrap().viewport.width, 200);
        assert_eq!(
            r.warnings,
            [ParseWarning::DuplicateKey {
                key: String::from("width"),
                value: String::from("200"),
            }]
        );
    }

    #[test]
    fn unknown_keys_and_case() {
        let r = parse("?W=10&H=20&Zoom=2&&");
        assert_eq!(r.layout.unwrap().viewport, Viewport::new(10, 20, 0));
        assert_eq!(
            r.warnings,
            [ParseWarning::KeyNotRecognized {
                key: String::from("zoom"),
                value: String::from("2"),
            }]
        );
    }

    #[test]
    fn order_none_clears() {
        let r = parse("w=1&h=1&order=none");
        assert!(r.warnings.is_empty());
        assert_eq!(r.layout.unwrap().order, None);
    }
}
