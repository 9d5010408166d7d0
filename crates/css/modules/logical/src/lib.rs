//! CSS Logical Properties: physical to flow-relative property translation.
//! See <https://www.w3.org/TR/css-logical-1/>
//!
//! The tables map physical names such as `margin-left` or `border-top-left-radius`
//! to their logical counterparts (`margin-inline-start`, `border-start-start-radius`).
//! The formatters render a translated declaration either as CSS text or as an
//! inline-style object with camelCase keys.
//!
//! ```
//! use css_logical::{logical_css, logical_style, PhysicalProperty};
//!
//! assert_eq!(logical_css(PhysicalProperty::PaddingTop, "4px"), "padding-block-start: 4px;");
//! let style = logical_style(PhysicalProperty::BorderTopLeftRadius, "4px");
//! assert_eq!(style["borderStartStartRadius"], "4px");
//! ```

#![forbid(unsafe_code)]

mod case;
mod error;
mod format;
mod tables;

pub use case::camel_case;
pub use error::UnrecognizedPropertyKey;
pub use format::{
    StyleMap, logical_css, logical_side, logical_size_css, logical_size_style, logical_style,
    logical_text_align_css, logical_text_align_style, try_logical_css, try_logical_style,
    try_logical_text_align_css, try_logical_text_align_style,
};
pub use tables::{
    BORDERS, LOGICALS, MARGINS, MappingTable, OVERFLOW, PADDINGS, POSITION, PhysicalProperty,
    PropertyFamily, SIDES, SIZE, Side, TEXT_ALIGN, TextAlign,
};
