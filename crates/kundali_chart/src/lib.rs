//! Sidereal Vedic chart assembly.
//!
//! [`assemble_birth_chart`] and [`assemble_transit_chart`] query an
//! [`EphemerisProvider`](kundali_ephemeris::EphemerisProvider) and build an
//! immutable [`Chart`]. [`ChartStore`] keeps the latest chart of each kind,
//! and [`chart_cells`] derives per-cell display state for a South Indian
//! grid.

pub mod assembler;
pub mod cells;
pub mod chart;
pub mod error;
pub mod input;
pub mod store;

pub use assembler::{ChartReport, assemble_birth_chart, assemble_transit_chart};
pub use cells::{CellView, Occupant, chart_cells};
pub use chart::{AscendantPlacement, Chart, ChartKind, HousePlacement, PlanetPlacement};
pub use error::{ChartError, ChartPart, ComputationFailure};
pub use input::{BirthInput, TransitInput};
pub use store::ChartStore;
