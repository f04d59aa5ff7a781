use gpui::{AbsoluteLength, DefiniteLength, Pixels, SharedString, px, rems};
use serde::{Deserialize, Deserializer, de::Error};
use smallvec::SmallVec;

use super::ThemeVariant;

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f32),
}

/// A length as written in theme files: `12`, `"12px"`, `"1.5rem"` or `"150%"`.
#[derive(Debug, PartialEq)]
enum ParsedLength {
    Pixels(f32),
    Rems(f32),
    Percent(f32),
}

fn parse_length(value: StringOrFloat) -> Option<ParsedLength> {
    let string = match value {
        StringOrFloat::Float(num) => return Some(ParsedLength::Pixels(num)),
        StringOrFloat::String(string) => string,
    };
    let string = string.trim();

    if let Some(num) = string.strip_suffix("px") {
        return num.trim().parse().ok().map(ParsedLength::Pixels);
    }
    if let Some(num) = string.strip_suffix("rem") {
        return num.trim().parse().ok().map(ParsedLength::Rems);
    }
    if let Some(num) = string.strip_suffix('%') {
        return num.trim().parse().ok().map(ParsedLength::Percent);
    }

    None
}

pub fn de_string_or_non_empty_list<'de, D>(
    deserializer: D,
) -> Result<SmallVec<[SharedString; 1]>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrVec {
        One(SharedString),
        Many(SmallVec<[SharedString; 1]>),
    }

    match StringOrVec::deserialize(deserializer)? {
        StringOrVec::One(string) => Ok(SmallVec::from_buf([string])),
        StringOrVec::Many(list) if list.is_empty() => Err(D::Error::custom("list can't be empty.")),
        StringOrVec::Many(list) => Ok(list),
    }
}

pub fn de_variants<'de, D>(deserializer: D) -> Result<SmallVec<[ThemeVariant; 2]>, D::Error>
where
    D: Deserializer<'de>,
{
    let variants = SmallVec::<[ThemeVariant; 2]>::deserialize(deserializer)?;

    if variants.is_empty() {
        return Err(D::Error::custom(
            "at least one theme variant needs to be provided.",
        ));
    }

    Ok(variants)
}

pub fn de_pixels<'de, D>(deserializer: D) -> Result<Pixels, D::Error>
where
    D: Deserializer<'de>,
{
    match parse_length(StringOrFloat::deserialize(deserializer)?) {
        Some(ParsedLength::Pixels(pixels)) => Ok(px(pixels)),
        _ => Err(D::Error::custom(
            "expected f32 or string containing a f32 ending with 'px'",
        )),
    }
}

pub fn de_abs_length<'de, D>(deserializer: D) -> Result<AbsoluteLength, D::Error>
where
    D: Deserializer<'de>,
{
    match parse_length(StringOrFloat::deserialize(deserializer)?) {
        Some(ParsedLength::Pixels(pixels)) => Ok(AbsoluteLength::Pixels(px(pixels))),
        Some(ParsedLength::Rems(value)) => Ok(AbsoluteLength::Rems(rems(value))),
        _ => Err(D::Error::custom(
            "expected f32 or string containing a f32 ending with 'rem' or 'px'",
        )),
    }
}

pub fn de_def_length<'de, D>(deserializer: D) -> Result<DefiniteLength, D::Error>
where
    D: Deserializer<'de>,
{
    match parse_length(StringOrFloat::deserialize(deserializer)?) {
        Some(ParsedLength::Pixels(pixels)) => {
            Ok(DefiniteLength::Absolute(AbsoluteLength::Pixels(px(pixels))))
        }
        Some(ParsedLength::Rems(value)) => {
            Ok(DefiniteLength::Absolute(AbsoluteLength::Rems(rems(value))))
        }
        Some(ParsedLength::Percent(value)) => Ok(DefiniteLength::Fraction(value / 100.)),
        None => Err(D::Error::custom(
            "expected f32 or string containing a f32 ending with '%', 'rem' or 'px'",
        )),
    }
}
