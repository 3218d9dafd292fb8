use std::path::PathBuf;

use structopt::StructOpt;
use wave_interference::{expected_fringe_spacing, Scenario, WaveModel};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "wave-interference",
    about = "Interference pattern of coherent point sources on a linear screen"
)]
struct Opt {
    /// Path to a JSON scenario file, defaults to 2 sources 0.8m apart
    #[structopt(short, long, parse(from_os_str))]
    config: Option<PathBuf>,
    /// Evaluation time [s]
    #[structopt(short, long)]
    time: Option<f64>,
    /// Wave model: physical or legacy
    #[structopt(short, long)]
    model: Option<WaveModel>,
    /// Save the screen samples to CSV file
    #[structopt(long, parse(from_os_str))]
    csv: Option<PathBuf>,
    /// Half width of the screen window, about the screen center, where fringes are measured [m]
    #[structopt(long)]
    fringes: Option<f64>,
    /// Plot the screen buffers to SVG file (requires the `plot` feature)
    #[structopt(short, long, parse(from_os_str))]
    plot: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    let mut scenario = match &opt.config {
        Some(path) => Scenario::load(path)?,
        None => Scenario::young()?,
    };
    if let Some(arg) = opt.time {
        scenario = scenario.time(arg);
    }
    if let Some(arg) = opt.model {
        scenario = scenario.model(arg);
    }

    let screen = scenario.run()?;
    screen.summary();

    if let Some(half_width) = opt.fringes {
        let center = 0.5 * screen.width();
        let range = center - half_width..center + half_width;
        match screen.fringe_spacing(range.clone()) {
            Some(spacing) => println!(
                " - fringe spacing in [{:.3},{:.3}]m: {:.4}m",
                range.start, range.end, spacing
            ),
            None => println!(
                " - less than 2 fringes in [{:.3},{:.3}]m",
                range.start, range.end
            ),
        }
        if let (Some(separation), Some(source)) = (scenario.separation(), scenario.sources.first())
        {
            println!(
                " - expected fringe spacing: {:.4}m",
                expected_fringe_spacing(source.wave.wavelength, screen.distance(), separation)
            );
        }
    }

    if let Some(path) = opt.csv {
        screen.to_csv(&path)?;
        log::info!("samples written to {:?}", path);
    }
    if let Some(path) = opt.plot {
        #[cfg(feature = "plot")]
        {
            screen
                .plot(&path)
                .map_err(|e| anyhow::anyhow!("failed to plot the screen buffers: {e}"))?;
            log::info!("plot written to {:?}", path);
        }
        #[cfg(not(feature = "plot"))]
        log::warn!("{:?} not written: compile with the `plot` feature", path);
    }

    Ok(())
}
