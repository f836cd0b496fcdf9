use gallery_drift::prelude::*;
use gallery_drift_examples::{init_tracing, render_layout_to_png, SnapshotConfig, ViewPlane};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // A modest wall: 60 slots, two thirds occupied.
    let settings = LayoutSettings::default()
        .with_pattern(PatternKind::Grid)
        .with_capacity(60)
        .with_photo_size(2.0)
        .with_spacing(0.1)
        .with_aspect_ratio(16.0 / 9.0)
        .with_animation_enabled(false);

    let photos: Vec<Photo> = (0..40)
        .map(|i| {
            Photo::new(format!("guest-{i:03}"), format!("https://wall.test/{i}.jpg"))
                .with_created_at(i as f64)
        })
        .collect();

    let mut controller = LayoutController::new(&settings);
    let state = controller.tick(&photos, &settings, 0.0);

    tracing::info!(
        "Wall layout: {} slots, {} occupied, {} placeholders.",
        state.len(),
        state.occupied().count(),
        state.placeholders().count()
    );

    let config = SnapshotConfig::new(40.0, ViewPlane::Front);
    render_layout_to_png(&state, &config, "patterns-grid-wall.png")?;

    Ok(())
}
