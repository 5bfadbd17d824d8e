// Chord timeline rendering.
//
// Draws the chord sequence as a bar chart over time: one unit-height bar per
// analysis window at `i × frame_duration` seconds, with the chord label
// printed above the bar, written out as a PNG.

use plotters::prelude::*;
use std::path::Path;

use crate::error::AnalysisError;

const IMAGE_WIDTH: u32 = 1200;
const IMAGE_HEIGHT: u32 = 400;

/// Render a chord sequence to a timeline PNG.
///
/// Bars cover 80% of each window's width so adjacent windows stay visually
/// separate. An empty sequence is a render error — there is nothing to draw.
pub fn render_chord_timeline(
    chords: &[String],
    frame_duration: f32,
    output: &Path,
) -> Result<(), AnalysisError> {
    if chords.is_empty() {
        return Err(AnalysisError::Render(
            "chord sequence is empty".to_string(),
        ));
    }
    if !(frame_duration > 0.0) {
        return Err(AnalysisError::Render(format!(
            "frame duration must be positive, got {}",
            frame_duration
        )));
    }

    draw(chords, frame_duration, output).map_err(|e| AnalysisError::Render(e.to_string()))
}

fn draw(
    chords: &[String],
    frame_duration: f32,
    output: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(output, (IMAGE_WIDTH, IMAGE_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let duration = chords.len() as f32 * frame_duration;

    let mut chart = ChartBuilder::on(&root)
        .caption("Chord timeline", ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(40)
        .build_cartesian_2d(0.0f32..duration, 0.0f32..1.2f32)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .disable_y_axis()
        .x_desc("Time (seconds)")
        .draw()?;

    // One bar per window, 80% of the window wide
    let bar_width = frame_duration * 0.8;
    chart.draw_series(chords.iter().enumerate().map(|(i, _)| {
        let start = i as f32 * frame_duration;
        Rectangle::new(
            [(start, 0.0), (start + bar_width, 1.0)],
            BLUE.mix(0.6).filled(),
        )
    }))?;

    // Chord label above each bar
    chart.draw_series(chords.iter().enumerate().map(|(i, chord)| {
        let center = i as f32 * frame_duration + bar_width / 2.0;
        Text::new(chord.clone(), (center, 1.08), ("sans-serif", 16))
    }))?;

    root.present()?;
    Ok(())
}
