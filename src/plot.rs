use std::{error::Error, path::Path};

use plotters::prelude::*;

use crate::Screen;

impl Screen {
    /// Plots the interference pattern and the intensity, amplitude and phase buffers to a SVG file
    pub fn plot<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn Error>> {
        let minmax = |x: &[f64]| {
            (
                x.iter().cloned().fold(f64::INFINITY, f64::min),
                x.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
            )
        };
        let step = self.sampling_step();
        let x_range = -0.5 * step..self.coordinate(self.len() - 1) + 0.5 * step;

        let root = SVGBackend::new(path.as_ref(), (1024, 1024)).into_drawing_area();
        root.fill(&WHITE)?;
        let panels = root.split_evenly((4, 1));

        // interference pattern
        let (i_min, i_max) = minmax(self.intensity());
        let i_range = i_max - i_min;
        let mut chart = ChartBuilder::on(&panels[0])
            .set_label_area_size(LabelAreaPosition::Left, 60)
            .set_label_area_size(LabelAreaPosition::Bottom, 40)
            .margin(10)
            .build_cartesian_2d(x_range.clone(), 0f64..1f64)?;
        chart.configure_mesh().disable_mesh().y_labels(0).draw()?;
        let cmap = colorous::PLASMA;
        chart.draw_series(self.samples().map(|s| {
            let u = if i_range > 0f64 {
                (s.intensity - i_min) / i_range
            } else {
                0.5
            };
            let c = cmap.eval_continuous(u).as_tuple();
            Rectangle::new(
                [
                    (s.coordinate - 0.5 * step, 0f64),
                    (s.coordinate + 0.5 * step, 1f64),
                ],
                RGBColor(c.0, c.1, c.2).filled(),
            )
        }))?;

        for (area, (label, values, rgb)) in panels[1..].iter().zip([
            ("Intensity", self.intensity(), RED),
            ("Amplitude", self.amplitude(), BLUE),
            ("Phase [rd]", self.phase(), GREEN),
        ]) {
            let (mut y_min, mut y_max) = minmax(values);
            if y_max - y_min < f64::EPSILON {
                y_min -= 0.5;
                y_max += 0.5;
            }
            let mut chart = ChartBuilder::on(area)
                .set_label_area_size(LabelAreaPosition::Left, 60)
                .set_label_area_size(LabelAreaPosition::Bottom, 40)
                .margin(10)
                .build_cartesian_2d(x_range.clone(), y_min..y_max)?;
            chart
                .configure_mesh()
                .x_desc("Coordinate [m]")
                .y_desc(label)
                .draw()?;
            chart.draw_series(LineSeries::new(
                self.coordinates().zip(values.iter().cloned()),
                &rgb,
            ))?;
        }
        root.present()?;
        Ok(())
    }
}
