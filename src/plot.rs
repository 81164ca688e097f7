//! Plot dispatch glue.
//!
//! The crate renders nothing itself. A plotting facility plugs in behind the
//! narrow [`Canvas`] capability ("can render given a palette pair"), and the
//! [`Cmo`]/[`DatasetCmo`] accessors wrap its entry points: classify the
//! variable, resolve the palette pair, forward the call.

use serde_json::{Map, Value};
use tracing::debug;

use crate::classify::Category;
use crate::dataset::{DataArray, Dataset};
use crate::error::Result;
use crate::palettes::Palette;
use crate::registry::Registry;

/// The palette pair selected for one plotting call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PalettePair {
    /// Palette for one-directional magnitude
    pub sequential: Palette,
    /// Palette for signed deviation from a center
    pub diverging: Palette,
}

/// The plotting entry points an adapter may support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotKind {
    Line,
    Pcolormesh,
    Contour,
    Contourf,
    Scatter,
    Quiver,
}

/// Keyword-style arguments forwarded verbatim to the canvas.
///
/// Common numeric options get fields; everything else rides in `extra`,
/// which the canvas interprets (or ignores) on its own terms.
#[derive(Debug, Clone, Default)]
pub struct PlotArgs {
    pub vmin: Option<f64>,
    pub vmax: Option<f64>,
    pub levels: Option<usize>,
    pub extra: Map<String, Value>,
}

impl PlotArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vmin(mut self, vmin: f64) -> Self {
        self.vmin = Some(vmin);
        self
    }

    pub fn vmax(mut self, vmax: f64) -> Self {
        self.vmax = Some(vmax);
        self
    }

    pub fn levels(mut self, levels: usize) -> Self {
        self.levels = Some(levels);
        self
    }

    /// Attach a free-form argument
    pub fn arg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// The data participating in one plotting call.
#[derive(Debug, Clone, Copy)]
pub enum PlotData<'a> {
    /// A single field rendered over its own coordinates
    Array(&'a DataArray),
    /// Two fields plotted against each other, optionally colored by a third
    Points {
        x: &'a DataArray,
        y: &'a DataArray,
        hue: Option<&'a DataArray>,
    },
    /// A vector field, optionally colored by a third variable
    Vectors {
        u: &'a DataArray,
        v: &'a DataArray,
        hue: Option<&'a DataArray>,
    },
}

/// Everything a canvas needs for one draw call.
#[derive(Debug, Clone)]
pub struct PlotRequest<'a> {
    pub kind: PlotKind,
    pub data: PlotData<'a>,
    pub palettes: PalettePair,
    pub args: &'a PlotArgs,
    /// Label axes and colorbars from attribute metadata instead of bare names
    pub metadata_labels: bool,
}

/// Narrow rendering capability implemented by plotting adapters.
///
/// The crate never depends on a concrete plotting library; adapters receive
/// the selected palette pair in the request and apply whichever of the two
/// suits the data they end up drawing.
pub trait Canvas {
    type Output;

    fn render(&mut self, request: PlotRequest<'_>) -> Result<Self::Output>;
}

impl DataArray {
    /// Colormap-selection accessor bound to the process-wide registry
    pub fn cmo(&self) -> Cmo<'_> {
        self.cmo_with(Registry::global())
    }

    /// Colormap-selection accessor bound to an explicit registry
    pub fn cmo_with<'a>(&'a self, registry: &'a Registry) -> Cmo<'a> {
        Cmo {
            array: self,
            registry,
        }
    }
}

impl Dataset {
    /// Colormap-selection accessor bound to the process-wide registry
    pub fn cmo(&self) -> DatasetCmo<'_> {
        self.cmo_with(Registry::global())
    }

    /// Colormap-selection accessor bound to an explicit registry
    pub fn cmo_with<'a>(&'a self, registry: &'a Registry) -> DatasetCmo<'a> {
        DatasetCmo {
            dataset: self,
            registry,
        }
    }
}

/// Accessor wrapping single-array plotting with automatic palette selection.
pub struct Cmo<'a> {
    array: &'a DataArray,
    registry: &'a Registry,
}

impl<'a> Cmo<'a> {
    /// The category the bound array classifies to
    pub fn category(&self) -> Option<Category> {
        self.registry.classify_array(self.array)
    }

    /// The sequential palette selected for the bound array
    pub fn sequential(&self) -> Palette {
        self.registry.sequential(self.category().as_ref())
    }

    /// The diverging palette selected for the bound array
    pub fn diverging(&self) -> Palette {
        self.registry.diverging(self.category().as_ref())
    }

    /// Both palettes, resolved from a single classification
    pub fn palettes(&self) -> PalettePair {
        let category = self.category();
        PalettePair {
            sequential: self.registry.sequential(category.as_ref()),
            diverging: self.registry.diverging(category.as_ref()),
        }
    }

    fn dispatch<C: Canvas>(
        &self,
        canvas: &mut C,
        kind: PlotKind,
        metadata_labels: bool,
        args: &PlotArgs,
    ) -> Result<C::Output> {
        let palettes = self.palettes();
        debug!(
            kind = ?kind,
            variable = self.array.name().unwrap_or("<unnamed>"),
            sequential = palettes.sequential.name(),
            diverging = palettes.diverging.name(),
            "dispatching plot"
        );
        canvas.render(PlotRequest {
            kind,
            data: PlotData::Array(self.array),
            palettes,
            args,
            metadata_labels,
        })
    }

    pub fn plot<C: Canvas>(&self, canvas: &mut C, args: &PlotArgs) -> Result<C::Output> {
        self.dispatch(canvas, PlotKind::Line, false, args)
    }

    pub fn pcolormesh<C: Canvas>(&self, canvas: &mut C, args: &PlotArgs) -> Result<C::Output> {
        self.dispatch(canvas, PlotKind::Pcolormesh, false, args)
    }

    pub fn contour<C: Canvas>(&self, canvas: &mut C, args: &PlotArgs) -> Result<C::Output> {
        self.dispatch(canvas, PlotKind::Contour, false, args)
    }

    pub fn contourf<C: Canvas>(&self, canvas: &mut C, args: &PlotArgs) -> Result<C::Output> {
        self.dispatch(canvas, PlotKind::Contourf, false, args)
    }

    /// Metadata-aware variant of [`plot`](Cmo::plot)
    pub fn cf_plot<C: Canvas>(&self, canvas: &mut C, args: &PlotArgs) -> Result<C::Output> {
        self.dispatch(canvas, PlotKind::Line, true, args)
    }

    /// Metadata-aware variant of [`pcolormesh`](Cmo::pcolormesh)
    pub fn cf_pcolormesh<C: Canvas>(&self, canvas: &mut C, args: &PlotArgs) -> Result<C::Output> {
        self.dispatch(canvas, PlotKind::Pcolormesh, true, args)
    }

    /// Metadata-aware variant of [`contour`](Cmo::contour)
    pub fn cf_contour<C: Canvas>(&self, canvas: &mut C, args: &PlotArgs) -> Result<C::Output> {
        self.dispatch(canvas, PlotKind::Contour, true, args)
    }

    /// Metadata-aware variant of [`contourf`](Cmo::contourf)
    pub fn cf_contourf<C: Canvas>(&self, canvas: &mut C, args: &PlotArgs) -> Result<C::Output> {
        self.dispatch(canvas, PlotKind::Contourf, true, args)
    }
}

/// Accessor wrapping dataset-level plotting (scatter, quiver) with palette
/// selection driven by an explicit hue selector.
pub struct DatasetCmo<'a> {
    dataset: &'a Dataset,
    registry: &'a Registry,
}

impl<'a> DatasetCmo<'a> {
    /// The palette pair for the named hue variable.
    ///
    /// The hue variable's own name and attributes are classified; the arrays
    /// being plotted against each other play no part. Passing `None` selects
    /// the table defaults.
    pub fn hue_palettes(&self, hue: Option<&str>) -> Result<PalettePair> {
        let category = match hue {
            Some(name) => {
                let array = self.dataset.get_variable_checked(name)?;
                self.registry.classify_array(array)
            }
            None => None,
        };
        Ok(PalettePair {
            sequential: self.registry.sequential(category.as_ref()),
            diverging: self.registry.diverging(category.as_ref()),
        })
    }

    fn dispatch<C: Canvas>(
        &self,
        canvas: &mut C,
        kind: PlotKind,
        data: PlotData<'_>,
        hue: Option<&str>,
        metadata_labels: bool,
        args: &PlotArgs,
    ) -> Result<C::Output> {
        let palettes = self.hue_palettes(hue)?;
        debug!(
            kind = ?kind,
            hue = hue.unwrap_or("<none>"),
            sequential = palettes.sequential.name(),
            diverging = palettes.diverging.name(),
            "dispatching dataset plot"
        );
        canvas.render(PlotRequest {
            kind,
            data,
            palettes,
            args,
            metadata_labels,
        })
    }

    fn points(&self, x: &str, y: &str, hue: Option<&str>) -> Result<PlotData<'a>> {
        Ok(PlotData::Points {
            x: self.dataset.get_variable_checked(x)?,
            y: self.dataset.get_variable_checked(y)?,
            hue: match hue {
                Some(name) => Some(self.dataset.get_variable_checked(name)?),
                None => None,
            },
        })
    }

    fn vectors(&self, u: &str, v: &str, hue: Option<&str>) -> Result<PlotData<'a>> {
        Ok(PlotData::Vectors {
            u: self.dataset.get_variable_checked(u)?,
            v: self.dataset.get_variable_checked(v)?,
            hue: match hue {
                Some(name) => Some(self.dataset.get_variable_checked(name)?),
                None => None,
            },
        })
    }

    pub fn scatter<C: Canvas>(
        &self,
        canvas: &mut C,
        x: &str,
        y: &str,
        hue: Option<&str>,
        args: &PlotArgs,
    ) -> Result<C::Output> {
        let data = self.points(x, y, hue)?;
        self.dispatch(canvas, PlotKind::Scatter, data, hue, false, args)
    }

    pub fn quiver<C: Canvas>(
        &self,
        canvas: &mut C,
        u: &str,
        v: &str,
        hue: Option<&str>,
        args: &PlotArgs,
    ) -> Result<C::Output> {
        let data = self.vectors(u, v, hue)?;
        self.dispatch(canvas, PlotKind::Quiver, data, hue, false, args)
    }

    /// Metadata-aware variant of [`scatter`](DatasetCmo::scatter)
    pub fn cf_scatter<C: Canvas>(
        &self,
        canvas: &mut C,
        x: &str,
        y: &str,
        hue: Option<&str>,
        args: &PlotArgs,
    ) -> Result<C::Output> {
        let data = self.points(x, y, hue)?;
        self.dispatch(canvas, PlotKind::Scatter, data, hue, true, args)
    }

    /// Metadata-aware variant of [`quiver`](DatasetCmo::quiver)
    pub fn cf_quiver<C: Canvas>(
        &self,
        canvas: &mut C,
        u: &str,
        v: &str,
        hue: Option<&str>,
        args: &PlotArgs,
    ) -> Result<C::Output> {
        let data = self.vectors(u, v, hue)?;
        self.dispatch(canvas, PlotKind::Quiver, data, hue, true, args)
    }
}
