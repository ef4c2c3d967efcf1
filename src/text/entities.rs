//! HTML entity decoding
//!
//! Only numeric entities and a small fixed set of named entities are
//! decoded. Anything else is left exactly as written, so markup such as
//! `&lt;` inside a content-editable region survives.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Named entities decoded by [`decode_named`]
pub const ENTITY_MAP: &[(&str, char)] = &[
    ("&quot;", '"'),
    ("&amp;", '&'),
    ("&apos;", '\''),
];

static NUMERIC_ENTITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&#([0-9]+);").expect("numeric entity regex is valid"));

static NAMED_ENTITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&[0-9A-Za-z_]+;").expect("named entity regex is valid"));

/// Look up a named entity token such as `&quot;`
pub fn lookup_entity(token: &str) -> Option<char> {
    ENTITY_MAP
        .iter()
        .find(|(name, _)| *name == token)
        .map(|(_, ch)| *ch)
}

/// Replace `&#N;` with the character whose code point is N
///
/// Values that are not Unicode scalar values (surrogates, anything past
/// U+10FFFF, or too many digits) are left untouched.
pub fn decode_numeric(text: &str) -> Cow<'_, str> {
    NUMERIC_ENTITY.replace_all(text, |caps: &Captures| {
        caps[1]
            .parse::<u32>()
            .ok()
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_else(|| caps[0].to_string())
    })
}

/// Replace the named entities listed in [`ENTITY_MAP`]
pub fn decode_named(text: &str) -> Cow<'_, str> {
    NAMED_ENTITY.replace_all(text, |caps: &Captures| match lookup_entity(&caps[0]) {
        Some(ch) => ch.to_string(),
        None => caps[0].to_string(),
    })
}

/// Numeric pass followed by named pass
pub fn decode_entities(text: &str) -> String {
    let numeric = decode_numeric(text);
    decode_named(&numeric).into_owned()
}
