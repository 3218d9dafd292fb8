//! Finite size sources
//!
//! A [Source] approximates a physical source of finite extent with a cluster of
//! [PointEmitter]s all radiating the same [Wave]. The emitter coordinates are
//! placed symmetrically about the source center with [place].

use serde::{Deserialize, Serialize};

use crate::{
    emitter::{PointEmitter, Wave},
    error::Result,
    phasor::{combine_many, Phasor, WaveModel},
    placement::place,
};

/// Default distance between the point emitters of a source [m]
pub const SUBEMITTER_SPACING: f64 = 1e-30;

/// [Source] builder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// source center coordinate along the screen axis [m]
    pub center: f64,
    /// number of point emitters
    #[serde(default = "SourceConfig::default_count")]
    pub count: usize,
    /// distance between point emitters [m]
    #[serde(default = "SourceConfig::default_spacing")]
    pub spacing: f64,
    #[serde(flatten)]
    pub wave: Wave,
}
impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            center: 0f64,
            count: Self::default_count(),
            spacing: Self::default_spacing(),
            wave: Wave::default(),
        }
    }
}
impl SourceConfig {
    fn default_count() -> usize {
        1
    }
    fn default_spacing() -> f64 {
        SUBEMITTER_SPACING
    }
    pub fn new(center: f64) -> Self {
        Self {
            center,
            ..Default::default()
        }
    }
    pub fn count(self, count: usize) -> Self {
        Self { count, ..self }
    }
    pub fn spacing(self, spacing: f64) -> Self {
        Self { spacing, ..self }
    }
    pub fn wave(self, wave: Wave) -> Self {
        Self { wave, ..self }
    }
    pub fn build(&self) -> Result<Source> {
        let coordinates = place(self.count, self.spacing, self.center)?;
        let emitters = coordinates
            .into_iter()
            .map(|x| PointEmitter::new(self.wave, x))
            .collect::<Result<Vec<_>>>()?;
        log::debug!(
            "source @ {:.3}m: {} emitter(s), λ={}m",
            self.center,
            emitters.len(),
            self.wave.wavelength
        );
        Ok(Source {
            center: self.center,
            spacing: self.spacing,
            emitters,
        })
    }
}

/// Cluster of point emitters
#[derive(Debug, Clone, PartialEq)]
pub struct Source {
    center: f64,
    spacing: f64,
    emitters: Vec<PointEmitter>,
}
impl Source {
    /// Creates a source of `count` emitters centered at `center`
    pub fn new(center: f64, count: usize, wave: Wave) -> Result<Self> {
        SourceConfig::new(center).count(count).wave(wave).build()
    }
    pub fn center(&self) -> f64 {
        self.center
    }
    pub fn spacing(&self) -> f64 {
        self.spacing
    }
    pub fn len(&self) -> usize {
        self.emitters.len()
    }
    pub fn is_empty(&self) -> bool {
        self.emitters.is_empty()
    }
    pub fn emitters(&self) -> &[PointEmitter] {
        &self.emitters
    }
    /// Sum of the emitter waves at time `time` and screen `coordinate`
    pub fn phasor_at(
        &self,
        time: f64,
        distance: f64,
        coordinate: f64,
        model: WaveModel,
    ) -> Result<Phasor> {
        combine_many(
            self.emitters
                .iter()
                .map(|e| e.phasor_at(time, distance, coordinate, model)),
            model,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn single_emitter() {
        let source = Source::new(24.6, 1, Wave::default()).unwrap();
        assert_eq!(source.len(), 1);
        assert_eq!(source.emitters()[0].position(), 24.6);
        let p = source.phasor_at(200., 4., 25., WaveModel::Physical).unwrap();
        let e = source.emitters()[0].phasor_at(200., 4., 25., WaveModel::Physical);
        assert_eq!(p, e);
    }
    #[test]
    fn point_like_cluster_adds_up_coherently() {
        let wave = Wave::new(0.5, 0.017, 340.);
        let source = Source::new(10., 5, wave).unwrap();
        assert_eq!(source.len(), 5);
        let p = source.phasor_at(3., 2., 7.1, WaveModel::Physical).unwrap();
        assert!((p.amplitude - 2.5).abs() < 1e-9);
    }
    #[test]
    fn emitters_symmetric_about_center() {
        let source = SourceConfig::new(-3.)
            .count(6)
            .spacing(0.01)
            .build()
            .unwrap();
        let mean = source.emitters().iter().map(|e| e.position()).sum::<f64>() / 6.;
        assert!((mean + 3.).abs() < 1e-12);
        assert_eq!(source.spacing(), 0.01);
    }
    #[test]
    fn extended_source_loses_contrast() {
        // two emitters half a wavelength apart on the axis cancel out far off axis
        let wave = Wave::new(1., 0.1, 340.);
        let source = SourceConfig::new(0.)
            .count(2)
            .spacing(0.05)
            .wave(wave)
            .build()
            .unwrap();
        let p = source.phasor_at(0., 1e-3, 1e4, WaveModel::Physical).unwrap();
        assert!(p.amplitude < 1e-3, "{}", p.amplitude);
    }
    #[test]
    fn invalid() {
        assert!(matches!(Source::new(0., 0, Wave::default()), Err(Error::InvalidConfiguration(_))));
        assert!(Source::new(0., 1, Wave::new(1., -0.017, 340.)).is_err());
    }
    #[test]
    fn from_json() {
        let config: SourceConfig = serde_json::from_str(
            r#"{"center": 25.4, "amplitude": 1.0, "wavelength": 0.017, "wave_speed": 340.0}"#,
        )
        .unwrap();
        assert_eq!(config.count, 1);
        assert_eq!(config.spacing, SUBEMITTER_SPACING);
        assert_eq!(config.wave, Wave::default());
        assert_eq!(config.build().unwrap().center(), 25.4);
    }
}
