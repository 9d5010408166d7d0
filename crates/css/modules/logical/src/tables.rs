//! Physical to logical mapping tables.
//!
//! Every family table, the `LOGICALS` union and the [`PhysicalProperty`] enum are
//! generated from one list, so the typed keys and the string tables cannot drift
//! apart. Key uniqueness is checked at compile time.
//!
//! See <https://www.w3.org/TR/css-logical-1/#box>

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::error::UnrecognizedPropertyKey;

/// An immutable, ordered list of `(physical, logical)` name pairs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MappingTable {
    name: &'static str,
    entries: &'static [(&'static str, &'static str)],
}

impl MappingTable {
    const fn new(name: &'static str, entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { name, entries }
    }

    /// Short identifier of the table, used in error reports.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All pairs in declaration order.
    pub const fn entries(&self) -> &'static [(&'static str, &'static str)] {
        self.entries
    }

    /// Physical keys in declaration order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &'static str> + use<> {
        let entries = self.entries;
        entries.iter().map(|&(physical, _)| physical)
    }

    /// Logical names in declaration order.
    pub fn values(&self) -> impl ExactSizeIterator<Item = &'static str> + use<> {
        let entries = self.entries;
        entries.iter().map(|&(_, logical)| logical)
    }

    /// Look up the logical name for `physical`.
    pub fn get(&self, physical: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|&&(key, _)| key == physical)
            .map(|&(_, logical)| logical)
    }

    pub fn contains_key(&self, physical: &str) -> bool {
        self.get(physical).is_some()
    }

    /// Like [`MappingTable::get`], but reports a missing key as an error.
    ///
    /// # Errors
    /// Returns [`UnrecognizedPropertyKey`] when `physical` is not a key of this table.
    pub fn try_get(&self, physical: &str) -> Result<&'static str, UnrecognizedPropertyKey> {
        self.get(physical)
            .ok_or_else(|| UnrecognizedPropertyKey::new(physical, self.name))
    }
}

const fn str_eq(lhs: &str, rhs: &str) -> bool {
    let left = lhs.as_bytes();
    let right = rhs.as_bytes();
    if left.len() != right.len() {
        return false;
    }
    let mut index = 0;
    while index < left.len() {
        if left[index] != right[index] {
            return false;
        }
        index += 1;
    }
    true
}

const fn keys_are_unique(entries: &[(&str, &str)]) -> bool {
    let mut outer = 0;
    while outer < entries.len() {
        let mut inner = outer + 1;
        while inner < entries.len() {
            if str_eq(entries[outer].0, entries[inner].0) {
                return false;
            }
            inner += 1;
        }
        outer += 1;
    }
    true
}

macro_rules! physical_properties {
    ($(
        $(#[$table_meta:meta])*
        $family:ident => $table:ident($table_name:literal) {
            $($variant:ident: $physical:literal => $logical:literal,)+
        }
    )+) => {
        /// A physical CSS property that has a logical equivalent.
        ///
        /// The variants are exactly the keys of [`LOGICALS`].
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum PhysicalProperty {
            $($($variant,)+)+
        }

        impl PhysicalProperty {
            /// Every physical property, in table order.
            pub const ALL: &'static [Self] = &[$($(Self::$variant,)+)+];

            /// The physical (hyphen-case) property name.
            pub const fn name(self) -> &'static str {
                match self {
                    $($(Self::$variant => $physical,)+)+
                }
            }

            /// The logical (hyphen-case) property name.
            pub const fn logical_name(self) -> &'static str {
                match self {
                    $($(Self::$variant => $logical,)+)+
                }
            }

            /// The family table this property belongs to.
            pub const fn family(self) -> PropertyFamily {
                match self {
                    $($(Self::$variant => PropertyFamily::$family,)+)+
                }
            }
        }

        /// CSS feature family of a [`PhysicalProperty`].
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum PropertyFamily {
            $($family,)+
        }

        impl PropertyFamily {
            pub const ALL: &'static [Self] = &[$(Self::$family,)+];

            pub fn table(self) -> &'static MappingTable {
                match self {
                    $(Self::$family => &$table,)+
                }
            }
        }

        $(
            $(#[$table_meta])*
            pub static $table: MappingTable =
                MappingTable::new($table_name, &[$(($physical, $logical),)+]);
        )+

        const LOGICAL_ENTRIES: &[(&str, &str)] = &[$($(($physical, $logical),)+)+];
    };
}

physical_properties! {
    /// `margin-*` sides.
    Margin => MARGINS("margins") {
        MarginLeft: "margin-left" => "margin-inline-start",
        MarginRight: "margin-right" => "margin-inline-end",
        MarginTop: "margin-top" => "margin-block-start",
        MarginBottom: "margin-bottom" => "margin-block-end",
        MarginHorizontal: "margin-horizontal" => "margin-inline",
        MarginVertical: "margin-vertical" => "margin-block",
    }

    /// `padding-*` sides.
    Padding => PADDINGS("paddings") {
        PaddingLeft: "padding-left" => "padding-inline-start",
        PaddingRight: "padding-right" => "padding-inline-end",
        PaddingTop: "padding-top" => "padding-block-start",
        PaddingBottom: "padding-bottom" => "padding-block-end",
        PaddingHorizontal: "padding-horizontal" => "padding-inline",
        PaddingVertical: "padding-vertical" => "padding-block",
    }

    /// Box offsets of positioned elements.
    ///
    /// `horizontal` maps to `inset-block` and `vertical` to `inset-inline`, the
    /// reverse of the margin and padding tables.
    Position => POSITION("position") {
        Top: "top" => "inset-block-start",
        Right: "right" => "inset-inline-end",
        Bottom: "bottom" => "inset-block-end",
        Left: "left" => "inset-inline-start",
        Horizontal: "horizontal" => "inset-block",
        Vertical: "vertical" => "inset-inline",
        Inset: "inset" => "inset",
    }

    Size => SIZE("size") {
        Height: "height" => "block-size",
        Width: "width" => "inline-size",
        MaxHeight: "max-height" => "max-block-size",
        MaxWidth: "max-width" => "max-inline-size",
        MinHeight: "min-height" => "min-block-size",
        MinWidth: "min-width" => "min-inline-size",
    }

    Overflow => OVERFLOW("overflow") {
        OverflowX: "overflow-x" => "overflow-block",
        OverflowY: "overflow-y" => "overflow-inline",
    }

    /// Border shorthands, longhands and corner radii.
    Border => BORDERS("borders") {
        BorderHorizontal: "border-horizontal" => "border-inline",
        BorderHorizontalColor: "border-horizontal-color" => "border-inline-color",
        BorderHorizontalWidth: "border-horizontal-width" => "border-inline-width",
        BorderHorizontalStyle: "border-horizontal-style" => "border-inline-style",
        BorderVertical: "border-vertical" => "border-block",
        BorderVerticalColor: "border-vertical-color" => "border-block-color",
        BorderVerticalWidth: "border-vertical-width" => "border-block-width",
        BorderVerticalStyle: "border-vertical-style" => "border-block-style",
        BorderBottom: "border-bottom" => "border-block-end",
        BorderBottomColor: "border-bottom-color" => "border-block-end-color",
        BorderBottomStyle: "border-bottom-style" => "border-block-end-style",
        BorderBottomWidth: "border-bottom-width" => "border-block-end-width",
        BorderTop: "border-top" => "border-block-start",
        BorderTopColor: "border-top-color" => "border-block-start-color",
        BorderTopStyle: "border-top-style" => "border-block-start-style",
        BorderTopWidth: "border-top-width" => "border-block-start-width",
        BorderRight: "border-right" => "border-inline-end",
        BorderRightColor: "border-right-color" => "border-inline-end-color",
        BorderRightStyle: "border-right-style" => "border-inline-end-style",
        BorderRightWidth: "border-right-width" => "border-inline-end-width",
        BorderLeft: "border-left" => "border-inline-start",
        BorderLeftColor: "border-left-color" => "border-inline-start-color",
        BorderLeftStyle: "border-left-style" => "border-inline-start-style",
        BorderLeftWidth: "border-left-width" => "border-inline-start-width",
        BorderTopLeftRadius: "border-top-left-radius" => "border-start-start-radius",
        BorderTopRightRadius: "border-top-right-radius" => "border-start-end-radius",
        BorderBottomLeftRadius: "border-bottom-left-radius" => "border-end-start-radius",
        BorderBottomRightRadius: "border-bottom-right-radius" => "border-end-end-radius",
    }
}

/// Union of all family tables. Text alignment is kept apart in [`TEXT_ALIGN`]
/// because it translates a value rather than a property name.
pub static LOGICALS: MappingTable = MappingTable::new("logicals", LOGICAL_ENTRIES);

const _: () = assert!(
    keys_are_unique(LOGICAL_ENTRIES),
    "duplicate physical key across the logical property tables"
);

static PROPERTY_INDEX: Lazy<HashMap<&'static str, PhysicalProperty>> = Lazy::new(|| {
    log::trace!(
        "building physical property index over {} keys",
        PhysicalProperty::ALL.len()
    );
    PhysicalProperty::ALL
        .iter()
        .map(|&property| (property.name(), property))
        .collect()
});

impl FromStr for PhysicalProperty {
    type Err = UnrecognizedPropertyKey;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        PROPERTY_INDEX.get(key).copied().ok_or_else(|| {
            log::debug!("no logical equivalent for physical property `{key}`");
            UnrecognizedPropertyKey::new(key, LOGICALS.name())
        })
    }
}

impl fmt::Display for PhysicalProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const SIDE_ENTRIES: &[(&str, &str)] = &[
    ("left", "inline-start"),
    ("right", "inline-end"),
    ("top", "block-start"),
    ("bottom", "block-end"),
    ("horizontal", "inline"),
    ("vertical", "block"),
];

/// Bare side keywords and the logical side or axis each one stands for.
pub static SIDES: MappingTable = MappingTable::new("sides", SIDE_ENTRIES);

/// A physical side or axis keyword. Discriminants index [`SIDES`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
    Horizontal,
    Vertical,
}

impl Side {
    pub const ALL: [Self; 6] = [
        Self::Left,
        Self::Right,
        Self::Top,
        Self::Bottom,
        Self::Horizontal,
        Self::Vertical,
    ];

    pub const fn name(self) -> &'static str {
        SIDE_ENTRIES[self as usize].0
    }

    /// `inline-start`, `block-end`, `inline`, ...
    pub const fn logical_name(self) -> &'static str {
        SIDE_ENTRIES[self as usize].1
    }
}

impl FromStr for Side {
    type Err = UnrecognizedPropertyKey;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        SIDE_ENTRIES
            .iter()
            .position(|&(name, _)| name == key)
            .map(|index| Self::ALL[index])
            .ok_or_else(|| {
                log::debug!("unknown side keyword `{key}`");
                UnrecognizedPropertyKey::new(key, SIDES.name())
            })
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const _: () = assert!(Side::ALL.len() == SIDE_ENTRIES.len() && keys_are_unique(SIDE_ENTRIES));

const TEXT_ALIGN_ENTRIES: &[(&str, &str)] = &[
    ("left", "start"),
    ("center", "center"),
    ("right", "end"),
];

/// Values of `text-align` and their flow-relative replacements.
pub static TEXT_ALIGN: MappingTable = MappingTable::new("text-align", TEXT_ALIGN_ENTRIES);

/// A physical `text-align` keyword. Discriminants index [`TEXT_ALIGN`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub const ALL: [Self; 3] = [Self::Left, Self::Center, Self::Right];

    pub const fn name(self) -> &'static str {
        TEXT_ALIGN_ENTRIES[self as usize].0
    }

    /// `start`, `center` or `end`.
    pub const fn logical_value(self) -> &'static str {
        TEXT_ALIGN_ENTRIES[self as usize].1
    }
}

impl FromStr for TextAlign {
    type Err = UnrecognizedPropertyKey;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        TEXT_ALIGN_ENTRIES
            .iter()
            .position(|&(name, _)| name == key)
            .map(|index| Self::ALL[index])
            .ok_or_else(|| {
                log::debug!("unknown text-align value `{key}`");
                UnrecognizedPropertyKey::new(key, TEXT_ALIGN.name())
            })
    }
}

impl fmt::Display for TextAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const _: () = assert!(
    TextAlign::ALL.len() == TEXT_ALIGN_ENTRIES.len() && keys_are_unique(TEXT_ALIGN_ENTRIES)
);
