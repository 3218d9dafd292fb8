//! # Coherent point sources interference
//!
//! Computes the interference pattern of coherent monochromatic point sources on
//! a linear screen.
//! Each [Source] is a cluster of [PointEmitter]s, placed symmetrically about the
//! source center by [place].
//! For every sample of the [Screen], the spherical waves of all the emitters are
//! summed as [Phasor]s at a single time instant, giving the net amplitude, phase
//! and intensity along the screen.
//!
//! ```no_run
//! use wave_interference::Scenario;
//!
//! let screen = Scenario::young()?.run()?;
//! screen.summary();
//! println!("fringe spacing: {:?}", screen.fringe_spacing(24.5..25.5));
//! # Ok::<(), wave_interference::Error>(())
//! ```

pub mod emitter;
mod error;
pub mod phasor;
pub mod placement;
#[cfg(feature = "plot")]
mod plot;
pub mod scenario;
pub mod screen;
pub mod source;

pub use emitter::{PointEmitter, Wave};
pub use error::{Error, Result};
pub use phasor::{combine_many, combine_two, Phasor, WaveModel};
pub use placement::place;
pub use scenario::{Scenario, ScenarioError};
pub use screen::{expected_fringe_spacing, Sample, Screen, ScreenConfig, SAMPLING_STEP};
pub use source::{Source, SourceConfig, SUBEMITTER_SPACING};
