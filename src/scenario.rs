//! Interference scenarios
//!
//! A [Scenario] gathers the sources, the screen and the evaluation time.
//! Scenarios are read from JSON files like:
//! ```json
//! {
//!   "time": 200.0,
//!   "screen": { "width": 50.0, "distance": 4.0, "sampling_step": 0.01 },
//!   "sources": [
//!     { "center": 25.4, "amplitude": 1.0, "wavelength": 0.017, "wave_speed": 340.0 },
//!     { "center": 24.6, "amplitude": 1.0, "wavelength": 0.017, "wave_speed": 340.0 }
//!   ]
//! }
//! ```

use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    placement::place, Error, Result, Screen, ScreenConfig, Source, SourceConfig, WaveModel,
};

#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("failed to open scenario file {1:?}")]
    Open(#[source] io::Error, PathBuf),
    #[error("failed to parse scenario file {1:?}")]
    Parse(#[source] serde_json::Error, PathBuf),
    #[error("invalid scenario")]
    Build(#[from] Error),
}

/// Sources, screen and time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// evaluation time [s]
    pub time: f64,
    pub screen: ScreenConfig,
    #[serde(default)]
    pub sources: Vec<SourceConfig>,
}
impl Scenario {
    /// Creates a scenario without sources
    pub fn new(time: f64, screen: ScreenConfig) -> Self {
        Self {
            time,
            screen,
            sources: vec![],
        }
    }
    /// Two point sources 0.8m apart, 4m away from the middle of a 50m wide screen
    pub fn young() -> Result<Self> {
        let screen = ScreenConfig::new(50., 4.);
        Self::new(200., screen).sources_about(
            0.5 * screen.width,
            2,
            0.8,
            SourceConfig::default(),
        )
    }
    /// Loads a scenario from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> std::result::Result<Self, ScenarioError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ScenarioError::Open(e, path.to_path_buf()))?;
        log::info!("Loading {:?}...", path);
        serde_json::from_reader(BufReader::new(file))
            .map_err(|e| ScenarioError::Parse(e, path.to_path_buf()))
    }
    /// Adds `count` copies of `source` placed symmetrically about `center`, `separation` apart
    pub fn sources_about(
        mut self,
        center: f64,
        count: usize,
        separation: f64,
        source: SourceConfig,
    ) -> Result<Self> {
        self.sources.extend(
            place(count, separation, center)?
                .into_iter()
                .map(|x| SourceConfig {
                    center: x,
                    ..source.clone()
                }),
        );
        Ok(self)
    }
    pub fn time(self, time: f64) -> Self {
        Self { time, ..self }
    }
    pub fn model(self, model: WaveModel) -> Self {
        Self {
            screen: self.screen.model(model),
            ..self
        }
    }
    /// Distance between the 2 sources if there are exactly 2
    pub fn separation(&self) -> Option<f64> {
        match self.sources.as_slice() {
            [a, b] => Some((a.center - b.center).abs()),
            _ => None,
        }
    }
    pub fn build(&self) -> Result<(Screen, Vec<Source>)> {
        let screen = self.screen.build()?;
        let sources = self
            .sources
            .iter()
            .map(SourceConfig::build)
            .collect::<Result<Vec<_>>>()?;
        Ok((screen, sources))
    }
    /// Builds the screen and the sources and sweeps the screen
    pub fn run(&self) -> Result<Screen> {
        let (mut screen, sources) = self.build()?;
        screen.sweep(&sources, self.time)?;
        Ok(screen)
    }
}
