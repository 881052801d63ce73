//! Runtime index over the preset families.
//!
//! The family modules are the primary API. This index exists for callers that
//! select a preset from data, e.g. a launch parameter naming
//! `"visualization/marker"`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::presets::{best_effort, persistent, reliable, visualization};
use crate::qos::QosConfiguration;

const KEY_DELIMITER: char = '/';

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Family {
    Persistent,
    Reliable,
    BestEffort,
    Visualization,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Datum,
    Scan,
    Image,
    Command,
    Marker,
}

type PresetFn = fn(Option<usize>) -> QosConfiguration;

const PRESETS: &[(Family, Category, PresetFn)] = &[
    (Family::Persistent, Category::Datum, persistent::get_datum_qos),
    (Family::Reliable, Category::Datum, reliable::get_datum_qos),
    (Family::Reliable, Category::Scan, reliable::get_scan_qos),
    (Family::Reliable, Category::Image, reliable::get_image_qos),
    (Family::BestEffort, Category::Datum, best_effort::get_datum_qos),
    (Family::BestEffort, Category::Scan, best_effort::get_scan_qos),
    (Family::BestEffort, Category::Image, best_effort::get_image_qos),
    (Family::Visualization, Category::Datum, visualization::get_datum_qos),
    (Family::Visualization, Category::Command, visualization::get_command_qos),
    (Family::Visualization, Category::Scan, visualization::get_scan_qos),
    (Family::Visualization, Category::Image, visualization::get_image_qos),
    (Family::Visualization, Category::Marker, visualization::get_marker_qos),
];

impl Family {
    /// Categories this family provides a preset for.
    pub fn categories(self) -> impl Iterator<Item = Category> {
        PRESETS
            .iter()
            .filter(move |(family, _, _)| *family == self)
            .map(|(_, category, _)| *category)
    }

    pub fn supports(self, category: Category) -> bool {
        self.categories().any(|c| c == category)
    }
}

/// Errors raised when resolving a preset by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Key is not of the form `family/category`
    InvalidKey(String),
    UnknownFamily(String),
    UnknownCategory(String),
    /// Both names are valid but the family has no preset for the category
    Unsupported { family: Family, category: Category },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKey(s) => write!(f, "Invalid preset key '{}', expected 'family/category'", s),
            Self::UnknownFamily(s) => write!(f, "Unknown QoS family: {}", s),
            Self::UnknownCategory(s) => write!(f, "Unknown data category: {}", s),
            Self::Unsupported { family, category } => {
                write!(f, "Family '{}' has no preset for category '{}'", family, category)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Names one preset, written `family/category` in text form.
///
/// A key can only be built for a supported pair and carries the preset
/// constructor it names, so building from a key cannot fail.
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PresetKey {
    family: Family,
    category: Category,
    preset: PresetFn,
}

impl PresetKey {
    /// Builds a key, checking the family actually offers the category.
    pub fn new(family: Family, category: Category) -> Result<Self, CatalogError> {
        PRESETS
            .iter()
            .find(|(f, c, _)| *f == family && *c == category)
            .map(|&(family, category, preset)| Self {
                family,
                category,
                preset,
            })
            .ok_or(CatalogError::Unsupported { family, category })
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Runs the preset with `depth`, `None` selecting its default.
    pub fn build(&self, depth: Option<usize>) -> QosConfiguration {
        (self.preset)(depth)
    }

    fn id(&self) -> (Family, Category) {
        (self.family, self.category)
    }
}

// Identity is the (family, category) pair; the constructor follows from it.
impl PartialEq for PresetKey {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for PresetKey {}

impl PartialOrd for PresetKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PresetKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id().cmp(&other.id())
    }
}

impl Hash for PresetKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Debug for PresetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresetKey")
            .field("family", &self.family)
            .field("category", &self.category)
            .finish()
    }
}

impl fmt::Display for PresetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.family, KEY_DELIMITER, self.category)
    }
}

impl FromStr for PresetKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((family, category)) = s.split_once(KEY_DELIMITER) else {
            return Err(CatalogError::InvalidKey(s.to_string()));
        };
        let family = Family::from_str(family.trim())
            .map_err(|_| CatalogError::UnknownFamily(family.to_string()))?;
        let category = Category::from_str(category.trim())
            .map_err(|_| CatalogError::UnknownCategory(category.to_string()))?;
        Self::new(family, category)
    }
}

impl TryFrom<String> for PresetKey {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PresetKey> for String {
    fn from(key: PresetKey) -> Self {
        key.to_string()
    }
}

/// Every preset the catalog knows, in declaration order.
pub fn presets() -> impl Iterator<Item = PresetKey> {
    PRESETS.iter().map(|&(family, category, preset)| PresetKey {
        family,
        category,
        preset,
    })
}

/// Resolves `(family, category)` to its preset and builds it with `depth`.
pub fn lookup(
    family: Family,
    category: Category,
    depth: Option<usize>,
) -> Result<QosConfiguration, CatalogError> {
    PresetKey::new(family, category).map(|key| key.build(depth))
}
