//! Phasor superposition
//!
//! A [Phasor] is the (amplitude, phase) pair of a monochromatic wave at a fixed
//! point. Adding two phasors is complex addition: the amplitude follows from the
//! law of cosines and the phase is the argument of the vector sum.

use serde::{Deserialize, Serialize};
use std::{f64::consts::TAU, fmt};
use strum_macros::{Display, EnumString};

use crate::error::{Error, Result};

/// Conventions used to evaluate and combine wave phases
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, EnumString, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum WaveModel {
    /// Phases in radians, four-quadrant phase of the sum
    #[default]
    Physical,
    /// Phases as raw cycle counts and a single-quadrant phase of the sum
    ///
    /// Reproduces historical outputs, the phase is wrong whenever the sum lies
    /// in the 2nd or 3rd quadrant.
    Legacy,
}
impl WaveModel {
    /// Converts a number of wave cycles into a phase
    pub fn phase(&self, cycles: f64) -> f64 {
        match self {
            WaveModel::Physical => TAU * cycles,
            WaveModel::Legacy => cycles,
        }
    }
    /// Adds two phasors
    pub fn combine(&self, a: Phasor, b: Phasor) -> Phasor {
        match self {
            WaveModel::Physical => combine_two(a, b),
            WaveModel::Legacy => combine_two_legacy(a, b),
        }
    }
}

/// Wave amplitude and phase
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Phasor {
    pub amplitude: f64,
    pub phase: f64,
}
impl Phasor {
    pub fn new(amplitude: f64, phase: f64) -> Self {
        Self { amplitude, phase }
    }
    pub fn intensity(&self) -> f64 {
        self.amplitude * self.amplitude
    }
    /// Real and imaginary parts
    pub fn as_tuple(&self) -> (f64, f64) {
        let (s, c) = self.phase.sin_cos();
        (self.amplitude * c, self.amplitude * s)
    }
}
impl From<(f64, f64)> for Phasor {
    fn from((amplitude, phase): (f64, f64)) -> Self {
        Self { amplitude, phase }
    }
}
impl fmt::Display for Phasor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}∠{:.6}rd", self.amplitude, self.phase)
    }
}

fn sum_amplitude(a: &Phasor, b: &Phasor) -> f64 {
    let a0 = a.amplitude;
    let a1 = b.amplitude;
    // rounding can push an exact cancellation slightly below zero
    (a0 * a0 + a1 * a1 + 2f64 * a0 * a1 * (a.phase - b.phase).cos())
        .max(0f64)
        .sqrt()
}

/// Adds two phasors
pub fn combine_two(a: Phasor, b: Phasor) -> Phasor {
    let (re_a, im_a) = a.as_tuple();
    let (re_b, im_b) = b.as_tuple();
    Phasor {
        amplitude: sum_amplitude(&a, &b),
        phase: (im_a + im_b).atan2(re_a + re_b),
    }
}
/// Adds two phasors with the phase of the sum restricted to ]-π/2,π/2[
pub fn combine_two_legacy(a: Phasor, b: Phasor) -> Phasor {
    let (re_a, im_a) = a.as_tuple();
    let (re_b, im_b) = b.as_tuple();
    Phasor {
        amplitude: sum_amplitude(&a, &b),
        phase: ((im_a + im_b) / (re_a + re_b)).atan(),
    }
}

/// Adds a sequence of phasors, left to right
///
/// Fails with [Error::EmptyAggregate] if the sequence is empty.
pub fn combine_many<I>(phasors: I, model: WaveModel) -> Result<Phasor>
where
    I: IntoIterator<Item = Phasor>,
{
    let mut phasors = phasors.into_iter();
    let first = phasors.next().ok_or(Error::EmptyAggregate)?;
    Ok(phasors.fold(first, |sum, p| model.combine(sum, p)))
}
