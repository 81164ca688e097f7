//! The pattern and palette registry.
//!
//! A [`Registry`] owns the three tables driving colormap selection: the
//! ordered classification pattern table and the sequential/diverging palette
//! tables with their fallback defaults. Tables are mutated only through
//! scoped overrides (see [`crate::options`]); everything else is read-only
//! lookup.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use regex::Regex;

use crate::classify::{match_category, Category, PatternEntry};
use crate::dataset::{AttributeValue, DataArray};
use crate::palettes::{self, Palette};

/// A category-to-palette mapping with a default fallback.
#[derive(Debug, Clone)]
pub(crate) struct PaletteTable {
    entries: HashMap<Category, Palette>,
    default: Palette,
}

impl PaletteTable {
    fn new(default: Palette) -> Self {
        Self {
            entries: HashMap::new(),
            default,
        }
    }

    /// Total lookup: absent keys (and no category at all) resolve to the
    /// table default.
    pub(crate) fn lookup(&self, category: Option<&Category>) -> Palette {
        category
            .and_then(|c| self.entries.get(c))
            .cloned()
            .unwrap_or_else(|| self.default.clone())
    }

    pub(crate) fn get(&self, category: &Category) -> Option<&Palette> {
        self.entries.get(category)
    }

    pub(crate) fn set(&mut self, category: Category, palette: Palette) -> Option<Palette> {
        self.entries.insert(category, palette)
    }

    pub(crate) fn remove(&mut self, category: &Category) -> Option<Palette> {
        self.entries.remove(category)
    }
}

/// The registry backing classification and palette selection.
///
/// Reads are safe from any thread. The scoped-override mechanism is
/// single-writer-at-a-time by contract: guards snapshot the state they saw at
/// construction, so scopes must be strictly nested (LIFO) on one logical
/// owner and must not be interleaved across threads without external
/// synchronization.
#[derive(Debug)]
pub struct Registry {
    pub(crate) patterns: RwLock<Vec<PatternEntry>>,
    pub(crate) sequential: RwLock<PaletteTable>,
    pub(crate) diverging: RwLock<PaletteTable>,
}

fn builtin(tag: &str, pattern: &str) -> PatternEntry {
    PatternEntry::new(tag, Regex::new(pattern).expect("built-in pattern is valid"))
}

/// The built-in pattern table, in priority order.
///
/// Patterns are case-sensitive; variable names are lowercased before
/// matching while attribute values are searched verbatim, so uppercase
/// literals (`Celsius`, `Coriolis`, `M2`) only ever match attributes.
fn builtin_patterns() -> Vec<PatternEntry> {
    vec![
        builtin("temp", "temp|Celsius"),
        builtin("salt", "salt|salinity|psu"),
        builtin(
            "vel",
            "u-momentum|u-velocity|v-momentum|v-velocity|vel|velocity|speed|u velocity|v velocity|m/s|meter second-1",
        ),
        builtin("freq", "vort|vorticity|vertical_shear|dudz|dvdz|1/s|Coriolis"),
        builtin("zeta", "zeta|ssh|mld"),
        builtin("rho", r"dense|density|kg/m\^3"),
        builtin("energy", "energy|EKE|KE|PE|APE"),
        builtin("depths", "bathy|depths|bathymetry"),
        builtin("accel", r"buoyancy|m/s\^2|acceleration|dudt|dvdt|prsgrad"),
        builtin("freq2", r"M2|N2|S2|1/s\^2"),
        builtin("dye", "dye|concentration"),
    ]
}

fn builtin_sequential() -> PaletteTable {
    let mut table = PaletteTable::new(palettes::viridis());
    for (tag, palette) in [
        ("temp", palettes::thermal()),
        ("salt", palettes::haline()),
        ("vel", palettes::speed()),
        ("freq", palettes::tempo()),
        ("zeta", palettes::amp()),
        ("rho", palettes::dense()),
        ("energy", palettes::speed()),
        ("depths", palettes::deep()),
        ("accel", palettes::rain()),
        ("freq2", palettes::rain()),
        ("dye", palettes::matter()),
    ] {
        table.set(Category::new(tag), palette);
    }
    table
}

fn builtin_diverging() -> PaletteTable {
    let mut table = PaletteTable::new(palettes::balance());
    for (tag, palette) in [
        ("temp", palettes::balance()),
        ("salt", palettes::diff()),
        ("vel", palettes::delta()),
        ("freq", palettes::curl()),
        ("zeta", palettes::balance()),
        ("rho", palettes::diff()),
        ("energy", palettes::delta()),
        ("depths", palettes::topo()),
        ("accel", palettes::tarn()),
        ("freq2", palettes::tarn()),
        ("dye", palettes::balance()),
    ] {
        table.set(Category::new(tag), palette);
    }
    table
}

impl Registry {
    /// Create a registry with the built-in tables
    pub fn with_defaults() -> Self {
        Self {
            patterns: RwLock::new(builtin_patterns()),
            sequential: RwLock::new(builtin_sequential()),
            diverging: RwLock::new(builtin_diverging()),
        }
    }

    /// The process-wide registry used by the accessor shorthands.
    ///
    /// Created on first use with the built-in tables and never destroyed.
    /// Callers who want isolated state construct their own registry and
    /// thread it through [`DataArray::cmo_with`](crate::DataArray).
    pub fn global() -> &'static Registry {
        static GLOBAL: Lazy<Registry> = Lazy::new(Registry::with_defaults);
        &GLOBAL
    }

    /// Classify a variable by its name and string-valued attributes.
    ///
    /// Returns the category of the first pattern (in table order) matching
    /// the lowercased name or, failing that, any string attribute value.
    /// `None` means no pattern matched; that is a normal outcome and palette
    /// lookups accept it.
    pub fn classify(
        &self,
        name: Option<&str>,
        attributes: &HashMap<String, AttributeValue>,
    ) -> Option<Category> {
        let patterns = self.patterns.read();
        match_category(&patterns, name, attributes)
    }

    /// Classify a data array
    pub fn classify_array(&self, array: &DataArray) -> Option<Category> {
        self.classify(array.name(), &array.attributes)
    }

    /// The sequential palette for a category.
    ///
    /// Total: unknown categories and `None` yield the sequential default.
    pub fn sequential(&self, category: Option<&Category>) -> Palette {
        self.sequential.read().lookup(category)
    }

    /// The diverging palette for a category.
    ///
    /// Total: unknown categories and `None` yield the diverging default.
    pub fn diverging(&self, category: Option<&Category>) -> Palette {
        self.diverging.read().lookup(category)
    }

    /// The exact sequential table entry for a category, without fallback
    pub fn sequential_entry(&self, category: &Category) -> Option<Palette> {
        self.sequential.read().get(category).cloned()
    }

    /// The exact diverging table entry for a category, without fallback
    pub fn diverging_entry(&self, category: &Category) -> Option<Palette> {
        self.diverging.read().get(category).cloned()
    }

    /// The pattern registered for a category, as regex source text
    pub fn pattern(&self, category: &Category) -> Option<String> {
        self.patterns
            .read()
            .iter()
            .find(|entry| &entry.category == category)
            .map(|entry| entry.pattern.as_str().to_string())
    }

    /// All categories with a registered pattern, in match-priority order
    pub fn categories(&self) -> Vec<Category> {
        self.patterns
            .read()
            .iter()
            .map(|entry| entry.category.clone())
            .collect()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
