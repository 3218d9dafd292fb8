//! Linear detector
//!
//! The [Screen] samples the wave field along a line parallel to the sources axis,
//! at a perpendicular `distance` from it.
//! A [sweep](Screen::sweep) evaluates, at a single time instant, the sum of the waves
//! of all the [Source]s at every sample coordinate `i x sampling_step` and stores
//! the net amplitude, phase and intensity.

use std::{ops::Range, path::Path, time::Instant};

use itertools::process_results;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    error::{finite, positive, Error, Result},
    phasor::{combine_many, Phasor, WaveModel},
    source::Source,
};

/// Default distance between 2 screen samples [m]
pub const SAMPLING_STEP: f64 = 0.01;

/// [Screen] builder
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// screen length [m]
    pub width: f64,
    /// distance between the screen and the sources axis [m]
    pub distance: f64,
    /// distance between 2 screen samples [m]
    #[serde(default = "ScreenConfig::default_sampling_step")]
    pub sampling_step: f64,
    #[serde(default)]
    pub model: WaveModel,
}
impl ScreenConfig {
    fn default_sampling_step() -> f64 {
        SAMPLING_STEP
    }
    pub fn new(width: f64, distance: f64) -> Self {
        Self {
            width,
            distance,
            sampling_step: SAMPLING_STEP,
            model: WaveModel::default(),
        }
    }
    pub fn sampling_step(self, sampling_step: f64) -> Self {
        Self {
            sampling_step,
            ..self
        }
    }
    pub fn model(self, model: WaveModel) -> Self {
        Self { model, ..self }
    }
    pub fn build(&self) -> Result<Screen> {
        let width = positive("screen width", self.width)?;
        let distance = positive("screen distance", self.distance)?;
        let sampling_step = positive("sampling step", self.sampling_step)?;
        let ratio = (width / sampling_step).floor();
        if ratio < 1f64 {
            return Err(Error::InvalidConfiguration(format!(
                "screen width ({width}m) is smaller than the sampling step ({sampling_step}m)"
            )));
        }
        if !ratio.is_finite() || ratio >= usize::MAX as f64 {
            return Err(Error::InvalidConfiguration(format!(
                "too many samples: {width}m wide screen sampled every {sampling_step}m"
            )));
        }
        let n_sample = ratio as usize;
        log::debug!("screen: {width}m wide @ {distance}m, {n_sample} samples");
        Ok(Screen {
            width,
            distance,
            sampling_step,
            model: self.model,
            amplitude: zeros(n_sample)?,
            phase: zeros(n_sample)?,
            intensity: zeros(n_sample)?,
        })
    }
}

/// Zero filled buffer, failing instead of aborting if it cannot be allocated
fn zeros(n_sample: usize) -> Result<Vec<f64>> {
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(n_sample).map_err(|e| {
        Error::InvalidConfiguration(format!("cannot allocate {n_sample} samples: {e}"))
    })?;
    buffer.resize(n_sample, 0f64);
    Ok(buffer)
}

/// Screen sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    #[serde(rename = "Coordinate (m)")]
    pub coordinate: f64,
    #[serde(rename = "Amplitude")]
    pub amplitude: f64,
    #[serde(rename = "Phase (rd)")]
    pub phase: f64,
    #[serde(rename = "Intensity")]
    pub intensity: f64,
}

/// Linear detector and its amplitude, phase and intensity buffers
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    width: f64,
    distance: f64,
    sampling_step: f64,
    model: WaveModel,
    amplitude: Vec<f64>,
    phase: Vec<f64>,
    intensity: Vec<f64>,
}
impl Screen {
    /// Creates a screen `width` long at `distance` from the sources with the default sampling
    pub fn new(width: f64, distance: f64) -> Result<Self> {
        ScreenConfig::new(width, distance).build()
    }
    pub fn width(&self) -> f64 {
        self.width
    }
    pub fn distance(&self) -> f64 {
        self.distance
    }
    pub fn sampling_step(&self) -> f64 {
        self.sampling_step
    }
    pub fn model(&self) -> WaveModel {
        self.model
    }
    /// Number of samples
    pub fn len(&self) -> usize {
        self.amplitude.len()
    }
    pub fn is_empty(&self) -> bool {
        self.amplitude.is_empty()
    }
    /// Coordinate of the `i`th sample [m]
    pub fn coordinate(&self, i: usize) -> f64 {
        i as f64 * self.sampling_step
    }
    /// Iterator over the sample coordinates [m]
    pub fn coordinates(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(move |i| self.coordinate(i))
    }
    pub fn amplitude(&self) -> &[f64] {
        &self.amplitude
    }
    pub fn phase(&self) -> &[f64] {
        &self.phase
    }
    pub fn intensity(&self) -> &[f64] {
        &self.intensity
    }
    /// Iterator over the samples
    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        self.coordinates()
            .zip(&self.amplitude)
            .zip(&self.phase)
            .zip(&self.intensity)
            .map(|(((coordinate, &amplitude), &phase), &intensity)| Sample {
                coordinate,
                amplitude,
                phase,
                intensity,
            })
    }
    /// Computes the wave at all the screen samples at time `time`
    ///
    /// The buffers are overwritten only if the sweep succeeds.
    /// Fails with [Error::EmptyAggregate] if `sources` is empty.
    pub fn sweep(&mut self, sources: &[Source], time: f64) -> Result<()> {
        if sources.is_empty() {
            return Err(Error::EmptyAggregate);
        }
        let time = finite("time", time)?;
        let Self {
            distance,
            sampling_step,
            model,
            ..
        } = *self;

        log::info!(
            "Sweeping {} samples with {} source(s) at t={}s ...",
            self.len(),
            sources.len(),
            time
        );
        let now = Instant::now();
        let phasors = (0..self.len())
            .into_par_iter()
            .map(|i| -> Result<Phasor> {
                let x = i as f64 * sampling_step;
                process_results(
                    sources.iter().map(|s| s.phasor_at(time, distance, x, model)),
                    |phasors| combine_many(phasors, model),
                )?
            })
            .collect::<Result<Vec<Phasor>>>()?;
        log::info!("... swept in {}ms", now.elapsed().as_millis());

        self.amplitude = phasors.iter().map(|p| p.amplitude).collect();
        self.phase = phasors.iter().map(|p| p.phase).collect();
        self.intensity = phasors.iter().map(Phasor::intensity).collect();
        Ok(())
    }
    /// Coordinates of the intensity maxima within `range`
    ///
    /// Local maxima below half the largest intensity in `range` are discarded.
    pub fn intensity_maxima(&self, range: Range<f64>) -> Vec<f64> {
        let samples: Vec<_> = self
            .coordinates()
            .zip(self.intensity.iter().cloned())
            .filter(|(x, _)| range.contains(x))
            .collect();
        let peak = samples
            .iter()
            .map(|(_, i)| *i)
            .fold(f64::NEG_INFINITY, f64::max);
        samples
            .windows(3)
            .filter_map(|w| {
                let (x, i) = w[1];
                (i > w[0].1 && i >= w[2].1 && i >= 0.5 * peak).then_some(x)
            })
            .collect()
    }
    /// Mean distance between successive intensity maxima within `range`
    pub fn fringe_spacing(&self, range: Range<f64>) -> Option<f64> {
        let maxima = self.intensity_maxima(range);
        match (maxima.first(), maxima.last()) {
            (Some(first), Some(last)) if maxima.len() > 1 => {
                Some((last - first) / (maxima.len() - 1) as f64)
            }
            _ => None,
        }
    }
    pub fn summary(&self) {
        let max_value = |x: &[f64]| x.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let min_value = |x: &[f64]| x.iter().cloned().fold(f64::INFINITY, f64::min);
        let mean = |x: &[f64]| x.iter().sum::<f64>() / x.len() as f64;

        println!("SUMMARY:");
        println!(" - # of samples: {}", self.len());
        println!(
            " - screen: {:.3}m wide @ {:.3}m, sampling step: {}m",
            self.width, self.distance, self.sampling_step
        );
        println!(" - wave model: {}", self.model);
        println!(
            "    {:^16}: {:^12} {:^12} {:^12}",
            "BUFFER", "MIN", "MEAN", "MAX"
        );
        for (key, value) in [
            ("amplitude", &self.amplitude),
            ("phase [rd]", &self.phase),
            ("intensity", &self.intensity),
        ] {
            println!(
                "  - {:16}: {:>12.3} {:>12.3} {:>12.3}",
                key,
                min_value(value),
                mean(value),
                max_value(value)
            );
        }
    }
    /// Writes the samples to a CSV file
    pub fn to_csv<P: AsRef<Path>>(&self, path: P) -> std::result::Result<(), csv::Error> {
        let mut wtr = csv::Writer::from_path(path)?;
        for sample in self.samples() {
            wtr.serialize(sample)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

/// Fringe spacing in the far field approximation [m]
///
/// `separation` is the distance between 2 sources, `distance` is the distance to the screen
pub fn expected_fringe_spacing(wavelength: f64, distance: f64, separation: f64) -> f64 {
    wavelength * distance / separation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{placement::place, Wave};

    fn young() -> (Screen, Vec<Source>) {
        let sources = place(2, 0.8, 25.)
            .unwrap()
            .into_iter()
            .map(|x| Source::new(x, 1, Wave::default()).unwrap())
            .collect();
        (Screen::new(50., 4.).unwrap(), sources)
    }

    #[test]
    fn buffers() {
        let (mut screen, sources) = young();
        assert_eq!(screen.len(), (50f64 / 0.01).floor() as usize);
        screen.sweep(&sources, 200.).unwrap();
        assert_eq!(screen.amplitude().len(), screen.len());
        assert_eq!(screen.phase().len(), screen.len());
        assert_eq!(screen.intensity().len(), screen.len());
        screen
            .amplitude()
            .iter()
            .zip(screen.intensity())
            .for_each(|(a, i)| assert_eq!(*i, a * a));
        assert!(screen.amplitude().iter().all(|a| (0f64..=2f64 + 1e-12).contains(a)));
    }
    #[test]
    fn coordinates() {
        let screen = ScreenConfig::new(1., 2.).sampling_step(0.25).build().unwrap();
        assert_eq!(screen.len(), 4);
        assert_eq!(
            screen.coordinates().collect::<Vec<_>>(),
            vec![0., 0.25, 0.5, 0.75]
        );
    }
    #[test]
    fn idempotent() {
        let (mut screen, sources) = young();
        screen.sweep(&sources, 200.).unwrap();
        let first = screen.clone();
        screen.sweep(&sources, 200.).unwrap();
        assert_eq!(first, screen);
    }
    #[test]
    fn overwrite() {
        let (mut screen, sources) = young();
        screen.sweep(&sources, 200.).unwrap();
        let first = screen.clone();
        screen.sweep(&sources[..1], 200.).unwrap();
        assert!(screen.amplitude().iter().all(|a| (a - 1.).abs() < 1e-12));
        screen.sweep(&sources, 200.).unwrap();
        assert_eq!(first, screen);
    }
    #[test]
    fn young_fringes() {
        let (mut screen, sources) = young();
        screen.sweep(&sources, 200.).unwrap();
        let expected = expected_fringe_spacing(0.017, 4., 0.8);
        assert!((expected - 0.085).abs() < 1e-12);
        let spacing = screen.fringe_spacing(24.5..25.5).unwrap();
        assert!(
            (spacing - expected).abs() < 5e-3,
            "fringe spacing: {spacing} vs {expected}"
        );
        // bright central fringe
        let maxima = screen.intensity_maxima(24.5..25.5);
        assert!(maxima.iter().any(|x| (x - 25.).abs() < 0.015));
    }
    #[test]
    fn no_sources() {
        let (mut screen, _) = young();
        assert_eq!(screen.sweep(&[], 200.), Err(Error::EmptyAggregate));
    }
    #[test]
    fn failed_sweep_keeps_buffers() {
        let (mut screen, sources) = young();
        screen.sweep(&sources, 200.).unwrap();
        let first = screen.clone();
        assert!(screen.sweep(&sources, f64::NAN).is_err());
        assert!(screen.sweep(&[], 200.).is_err());
        assert_eq!(first, screen);
    }
    #[test]
    fn invalid() {
        assert!(Screen::new(0., 4.).is_err());
        assert!(Screen::new(50., -4.).is_err());
        assert!(ScreenConfig::new(50., 4.).sampling_step(0.).build().is_err());
        assert!(matches!(
            ScreenConfig::new(0.005, 4.).build(),
            Err(Error::InvalidConfiguration(_))
        ));
    }
    #[test]
    fn too_many_samples() {
        // the width to step ratio overflows to infinity
        assert!(matches!(
            ScreenConfig::new(1e300, 4.).sampling_step(1e-300).build(),
            Err(Error::InvalidConfiguration(_))
        ));
        // finite ratio beyond any addressable buffer
        assert!(matches!(
            ScreenConfig::new(1e30, 4.).sampling_step(1.).build(),
            Err(Error::InvalidConfiguration(_))
        ));
        // representable count whose buffers exceed the address space
        let n_sample = (usize::MAX / 4) as f64;
        assert!(matches!(
            ScreenConfig::new(n_sample, 4.).sampling_step(1.).build(),
            Err(Error::InvalidConfiguration(_))
        ));
    }
    #[test]
    fn csv_export() {
        let (mut screen, sources) = young();
        screen.sweep(&sources, 200.).unwrap();
        let path = std::env::temp_dir().join("wave-interference_csv_export.csv");
        screen.to_csv(&path).unwrap();
        let mut rdr = csv::Reader::from_path(&path).unwrap();
        assert_eq!(
            rdr.headers().unwrap(),
            vec!["Coordinate (m)", "Amplitude", "Phase (rd)", "Intensity"]
        );
        let samples = rdr
            .deserialize()
            .collect::<std::result::Result<Vec<Sample>, _>>()
            .unwrap();
        assert_eq!(samples.len(), screen.len());
        assert_eq!(samples[1234].coordinate, screen.coordinate(1234));
        assert!((samples[1234].intensity - screen.intensity()[1234]).abs() < 1e-9);
        std::fs::remove_file(path).unwrap();
    }
}
