//! Render logical declarations as CSS text or as inline-style objects.

use std::collections::HashMap;
use std::fmt::Display;

use crate::case::camel_case;
use crate::error::UnrecognizedPropertyKey;
use crate::tables::{PhysicalProperty, Side, TextAlign};

/// Inline-style object keyed by camelCase property name.
pub type StyleMap<V> = HashMap<String, V>;

const TEXT_ALIGN_PROPERTY: &str = "text-align";

/// `<logical-name>: <value>;`
#[allow(clippy::needless_pass_by_value, reason = "callers hand values over, as with the style variants")]
pub fn logical_css<V: Display>(property: PhysicalProperty, value: V) -> String {
    format!("{}: {value};", property.logical_name())
}

/// Single-entry style object for `property`, with the logical name camelCased.
pub fn logical_style<V>(property: PhysicalProperty, value: V) -> StyleMap<V> {
    HashMap::from([(camel_case(property.logical_name()), value)])
}

/// `inline-size` and `block-size` declarations on two lines.
#[allow(clippy::needless_pass_by_value, reason = "callers hand values over, as with the style variants")]
pub fn logical_size_css<W: Display, H: Display>(width: W, height: H) -> String {
    format!(
        "{}: {width};\n{}: {height};",
        PhysicalProperty::Width.logical_name(),
        PhysicalProperty::Height.logical_name(),
    )
}

/// `{ inlineSize: width, blockSize: height }`
///
/// Both values share `V` because they land in one map, unlike
/// [`logical_size_css`] which formats each side independently.
pub fn logical_size_style<V>(width: V, height: V) -> StyleMap<V> {
    HashMap::from([
        (camel_case(PhysicalProperty::Width.logical_name()), width),
        (camel_case(PhysicalProperty::Height.logical_name()), height),
    ])
}

/// `text-align: start|center|end;`
pub fn logical_text_align_css(value: TextAlign) -> String {
    format!("{TEXT_ALIGN_PROPERTY}: {};", value.logical_value())
}

/// `{ textAlign: start|center|end }`
pub fn logical_text_align_style(value: TextAlign) -> StyleMap<&'static str> {
    HashMap::from([(camel_case(TEXT_ALIGN_PROPERTY), value.logical_value())])
}

/// Logical side or axis name for a physical side keyword.
pub const fn logical_side(side: Side) -> &'static str {
    side.logical_name()
}

/// String-keyed [`logical_css`].
///
/// # Errors
/// Returns [`UnrecognizedPropertyKey`] if `property` is not a key of [`crate::LOGICALS`].
pub fn try_logical_css<V: Display>(
    property: &str,
    value: V,
) -> Result<String, UnrecognizedPropertyKey> {
    let physical = property.parse::<PhysicalProperty>()?;
    Ok(logical_css(physical, value))
}

/// String-keyed [`logical_style`].
///
/// # Errors
/// Returns [`UnrecognizedPropertyKey`] if `property` is not a key of [`crate::LOGICALS`].
pub fn try_logical_style<V>(
    property: &str,
    value: V,
) -> Result<StyleMap<V>, UnrecognizedPropertyKey> {
    let physical = property.parse::<PhysicalProperty>()?;
    Ok(logical_style(physical, value))
}

/// String-keyed [`logical_text_align_css`].
///
/// # Errors
/// Returns [`UnrecognizedPropertyKey`] unless `value` is `left`, `center` or `right`.
pub fn try_logical_text_align_css(value: &str) -> Result<String, UnrecognizedPropertyKey> {
    Ok(logical_text_align_css(value.parse()?))
}

/// String-keyed [`logical_text_align_style`].
///
/// # Errors
/// Returns [`UnrecognizedPropertyKey`] unless `value` is `left`, `center` or `right`.
pub fn try_logical_text_align_style(
    value: &str,
) -> Result<StyleMap<&'static str>, UnrecognizedPropertyKey> {
    Ok(logical_text_align_style(value.parse()?))
}
