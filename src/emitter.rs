use serde::{Deserialize, Serialize};

use crate::{
    error::{finite, non_negative, positive, Result},
    phasor::{Phasor, WaveModel},
};

/// Monochromatic wave parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wave {
    /// amplitude
    pub amplitude: f64,
    /// wavelength [m]
    pub wavelength: f64,
    /// propagation speed [m/s]
    pub wave_speed: f64,
    /// phase at the emitter at t=0 [rd]
    #[serde(default)]
    pub initial_phase: f64,
}
impl Default for Wave {
    /// Unit amplitude 20kHz acoustic wave in the air
    fn default() -> Self {
        Self {
            amplitude: 1f64,
            wavelength: 0.017,
            wave_speed: 340f64,
            initial_phase: 0f64,
        }
    }
}
impl Wave {
    pub fn new(amplitude: f64, wavelength: f64, wave_speed: f64) -> Self {
        Self {
            amplitude,
            wavelength,
            wave_speed,
            initial_phase: 0f64,
        }
    }
    pub fn initial_phase(self, initial_phase: f64) -> Self {
        Self {
            initial_phase,
            ..self
        }
    }
    /// Checks that all the parameters are physically meaningful
    pub fn validate(&self) -> Result<()> {
        non_negative("amplitude", self.amplitude)?;
        positive("wavelength", self.wavelength)?;
        positive("wave speed", self.wave_speed)?;
        finite("initial phase", self.initial_phase)?;
        Ok(())
    }
    /// Frequency [Hz]
    pub fn frequency(&self) -> f64 {
        self.wave_speed / self.wavelength
    }
}

/// Ideal point source of spherical waves
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointEmitter {
    wave: Wave,
    position: f64,
}
impl PointEmitter {
    /// Creates an emitter at `position` along the screen axis
    pub fn new(wave: Wave, position: f64) -> Result<Self> {
        wave.validate()?;
        Ok(Self {
            wave,
            position: finite("emitter position", position)?,
        })
    }
    pub fn wave(&self) -> &Wave {
        &self.wave
    }
    pub fn position(&self) -> f64 {
        self.position
    }
    pub fn amplitude(&self) -> f64 {
        self.wave.amplitude
    }
    pub fn frequency(&self) -> f64 {
        self.wave.frequency()
    }
    /// Distance from the emitter to the screen `coordinate`, the screen being `distance` away
    pub fn radial_distance(&self, distance: f64, coordinate: f64) -> f64 {
        distance.hypot(coordinate - self.position)
    }
    /// Wave phase at time `time` and screen `coordinate`
    pub fn phase_at(&self, time: f64, distance: f64, coordinate: f64, model: WaveModel) -> f64 {
        let frequency = self.frequency();
        let cycles = frequency * time
            - (frequency / self.wave.wave_speed) * self.radial_distance(distance, coordinate);
        model.phase(cycles) + self.wave.initial_phase
    }
    /// Wave phasor at time `time` and screen `coordinate`
    pub fn phasor_at(&self, time: f64, distance: f64, coordinate: f64, model: WaveModel) -> Phasor {
        Phasor::new(
            self.amplitude(),
            self.phase_at(time, distance, coordinate, model),
        )
    }
}
