use gallery_drift::prelude::*;
use gallery_drift_examples::{init_tracing, render_layout_to_png, SnapshotConfig, ViewPlane};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let settings = LayoutSettings::default()
        .with_pattern(PatternKind::Float)
        .with_capacity(80)
        .with_floor_size(40.0)
        .with_wall_height(16.0);

    let photos: Vec<Photo> = (0..80)
        .map(|i| {
            Photo::new(format!("guest-{i:03}"), format!("https://wall.test/{i}.jpg"))
                .with_created_at(i as f64)
        })
        .collect();

    let mut controller = LayoutController::new(&settings);

    // Snapshot the rise at three times; each slot wraps from the top back
    // to the floor on its own staggered phase.
    for (label, time) in [("t0", 0.0f32), ("t20", 20.0), ("t40", 40.0)] {
        let state = controller.tick(&photos, &settings, time);
        let highest = state
            .records
            .iter()
            .map(|r| r.position.y)
            .fold(f32::NEG_INFINITY, f32::max);
        tracing::info!("{label}: highest photo at y = {highest:.2}");

        let config = SnapshotConfig::new(48.0, ViewPlane::Front);
        render_layout_to_png(&state, &config, &format!("patterns-float-rise-{label}.png"))?;
    }

    Ok(())
}
