//! Scoped configuration overrides.
//!
//! [`Overrides`] collects partial replacements for the pattern table and the
//! two palette tables; [`Registry::set_options`] validates the batch, applies
//! it immediately, and returns an [`OptionsGuard`] that reverts every touched
//! entry when dropped. Entries the batch never touched are left alone, both
//! while the scope is active and on exit.
//!
//! Guards follow stack discipline: scopes may nest (inner guards drop first)
//! but must not be interleaved or overlapped across threads, since each guard
//! restores the values it saw at construction.

use regex::Regex;
use tracing::debug;

use crate::classify::{Category, PatternEntry};
use crate::error::{EkmanError, Result};
use crate::palettes::Palette;
use crate::registry::Registry;

/// A batch of table overrides to apply for the lifetime of a scope.
///
/// Pattern entries may introduce brand-new categories. Palette entries may
/// only name categories that already have a classification pattern or gain
/// one in the same batch; anything else could never be selected and is
/// rejected at [`Registry::set_options`] time.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    patterns: Vec<(Category, String)>,
    sequential: Vec<(Category, Palette)>,
    diverging: Vec<(Category, Palette)>,
}

impl Overrides {
    /// Create an empty batch
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace or add a classification pattern (regex source text)
    pub fn pattern(mut self, category: impl Into<Category>, pattern: impl Into<String>) -> Self {
        self.patterns.push((category.into(), pattern.into()));
        self
    }

    /// Replace or add a sequential palette entry
    pub fn sequential(mut self, category: impl Into<Category>, palette: Palette) -> Self {
        self.sequential.push((category.into(), palette));
        self
    }

    /// Replace or add a diverging palette entry
    pub fn diverging(mut self, category: impl Into<Category>, palette: Palette) -> Self {
        self.diverging.push((category.into(), palette));
        self
    }
}

/// Reverts a batch of overrides when dropped.
///
/// Rollback is entry-by-entry: keys that existed before the override get
/// their prior value back, keys the override introduced are removed.
/// Restoration runs unconditionally, including during panic unwind.
#[must_use = "dropping the guard immediately reverts the overrides"]
#[derive(Debug)]
pub struct OptionsGuard<'r> {
    registry: &'r Registry,
    saved_patterns: Vec<(Category, Option<Regex>)>,
    saved_sequential: Vec<(Category, Option<Palette>)>,
    saved_diverging: Vec<(Category, Option<Palette>)>,
}

impl Registry {
    /// Apply a batch of overrides, returning the guard that reverts them.
    ///
    /// Validation is fail-fast: every pattern must compile and every palette
    /// entry must have a corresponding classification pattern (pre-existing
    /// or introduced by the same batch). On error, no table has been touched.
    ///
    /// Overrides are single-writer-at-a-time: concurrent scopes on the same
    /// registry corrupt each other's snapshots and need external
    /// synchronization.
    pub fn set_options(&self, overrides: Overrides) -> Result<OptionsGuard<'_>> {
        let Overrides {
            patterns,
            sequential,
            diverging,
        } = overrides;

        // Compile first so an invalid regex rejects the whole batch.
        let mut compiled = Vec::with_capacity(patterns.len());
        for (category, pattern) in patterns {
            let regex = Regex::new(&pattern).map_err(|source| EkmanError::Pattern {
                category: category.to_string(),
                source,
            })?;
            compiled.push((category, regex));
        }

        {
            let table = self.patterns.read();
            let has_pattern = |tag: &Category| {
                table.iter().any(|entry| &entry.category == tag)
                    || compiled.iter().any(|(category, _)| category == tag)
            };
            for (tag, _) in sequential.iter().chain(diverging.iter()) {
                if !has_pattern(tag) {
                    return Err(EkmanError::Config {
                        message: format!(
                            "cannot add new category '{}' without a classification pattern to select it",
                            tag
                        ),
                    });
                }
            }
        }

        let mut guard = OptionsGuard {
            registry: self,
            saved_patterns: Vec::with_capacity(compiled.len()),
            saved_sequential: Vec::with_capacity(sequential.len()),
            saved_diverging: Vec::with_capacity(diverging.len()),
        };

        if !compiled.is_empty() {
            let mut table = self.patterns.write();
            for (category, regex) in compiled {
                match table.iter().position(|entry| entry.category == category) {
                    Some(idx) => {
                        let old = std::mem::replace(&mut table[idx].pattern, regex);
                        guard.saved_patterns.push((category, Some(old)));
                    }
                    None => {
                        // New categories go to the head of the table so the
                        // scope's additions outrank broader built-in patterns.
                        guard.saved_patterns.push((category.clone(), None));
                        table.insert(0, PatternEntry::new(category, regex));
                    }
                }
            }
        }

        if !sequential.is_empty() {
            let mut table = self.sequential.write();
            for (category, palette) in sequential {
                let old = table.set(category.clone(), palette);
                guard.saved_sequential.push((category, old));
            }
        }

        if !diverging.is_empty() {
            let mut table = self.diverging.write();
            for (category, palette) in diverging {
                let old = table.set(category.clone(), palette);
                guard.saved_diverging.push((category, old));
            }
        }

        debug!(
            patterns = guard.saved_patterns.len(),
            sequential = guard.saved_sequential.len(),
            diverging = guard.saved_diverging.len(),
            "scoped overrides applied"
        );
        Ok(guard)
    }
}

impl Drop for OptionsGuard<'_> {
    fn drop(&mut self) {
        // Reverse order so repeated keys within one batch unwind to the
        // genuine pre-override value.
        if !self.saved_patterns.is_empty() {
            let mut table = self.registry.patterns.write();
            for (category, saved) in self.saved_patterns.drain(..).rev() {
                match saved {
                    Some(regex) => {
                        if let Some(entry) =
                            table.iter_mut().find(|entry| entry.category == category)
                        {
                            entry.pattern = regex;
                        }
                    }
                    None => table.retain(|entry| entry.category != category),
                }
            }
        }

        if !self.saved_sequential.is_empty() {
            let mut table = self.registry.sequential.write();
            for (category, saved) in self.saved_sequential.drain(..).rev() {
                match saved {
                    Some(palette) => {
                        table.set(category, palette);
                    }
                    None => {
                        table.remove(&category);
                    }
                }
            }
        }

        if !self.saved_diverging.is_empty() {
            let mut table = self.registry.diverging.write();
            for (category, saved) in self.saved_diverging.drain(..).rev() {
                match saved {
                    Some(palette) => {
                        table.set(category, palette);
                    }
                    None => {
                        table.remove(&category);
                    }
                }
            }
        }

        debug!("scoped overrides reverted");
    }
}
