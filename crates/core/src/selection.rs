//! Selection catalog: the closed set of products a machine can stock.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

use crate::error::{DomainError, DomainResult};

/// Name of the icon every [`IconLookup`] must be able to produce.
pub const DEFAULT_ICON_NAME: &str = "Default";

/// Product identifier.
///
/// The string form is exactly the variant name and parsing is case-sensitive,
/// so `"Soda"` is a selection and `"soda"` is not.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    EnumCount,
    AsRefStr,
    IntoStaticStr,
    Display,
)]
pub enum Selection {
    Soda,
    DietSoda,
    Chips,
    Cookie,
    Sandwich,
    Wrap,
    CandyBar,
    PopTart,
    Water,
    FruitJuice,
    SportsDrink,
    Gum,
}

impl Selection {
    /// The full catalog, in display order.
    pub const ALL: [Selection; Selection::COUNT] = [
        Selection::Soda,
        Selection::DietSoda,
        Selection::Chips,
        Selection::Cookie,
        Selection::Sandwich,
        Selection::Wrap,
        Selection::CandyBar,
        Selection::PopTart,
        Selection::Water,
        Selection::FruitJuice,
        Selection::SportsDrink,
        Selection::Gum,
    ];

    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Parse a catalog key, mapping unknown names into the domain error.
    pub fn from_name(name: &str) -> DomainResult<Self> {
        name.parse().map_err(|_| DomainError::unknown_selection(name))
    }

    /// Resolve the display icon for this selection.
    ///
    /// Falls back to the lookup's default icon when nothing is registered
    /// under the selection's name.
    pub fn icon<L: IconLookup>(&self, lookup: &L) -> L::Icon {
        lookup
            .image_named(self.as_str())
            .unwrap_or_else(|| lookup.default_icon())
    }
}

/// External image-asset lookup keyed by selection name.
///
/// The presentation layer owns the actual images; the domain only needs a
/// way to ask for one by name and a guaranteed fallback.
pub trait IconLookup {
    type Icon;

    /// Icon registered under `name`, if any.
    fn image_named(&self, name: &str) -> Option<Self::Icon>;

    /// The `"Default"` asset. Must always be available.
    fn default_icon(&self) -> Self::Icon;
}

/// [`IconLookup`] over a directory of `<Name>.png` files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDirectory {
    root: PathBuf,
}

impl AssetDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn asset_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.png"))
    }
}

impl IconLookup for AssetDirectory {
    type Icon = PathBuf;

    fn image_named(&self, name: &str) -> Option<PathBuf> {
        let path = self.asset_path(name);
        path.is_file().then_some(path)
    }

    fn default_icon(&self) -> PathBuf {
        self.asset_path(DEFAULT_ICON_NAME)
    }
}
