use gallery_drift::prelude::*;
use gallery_drift_examples::{init_tracing, render_layout_to_png, SnapshotConfig, ViewPlane};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let photos: Vec<Photo> = (0..120)
        .map(|i| {
            Photo::new(format!("guest-{i:03}"), format!("https://wall.test/{i}.jpg"))
                .with_created_at(i as f64)
        })
        .collect();

    // Same photo set, same time, two patterns side by side.
    for (kind, file) in [
        (PatternKind::Wave, "patterns-wave-top.png"),
        (PatternKind::Spiral, "patterns-spiral-top.png"),
    ] {
        let settings = LayoutSettings::default()
            .with_pattern(kind)
            .with_capacity(120)
            .with_floor_size(50.0)
            .with_wall_height(20.0);

        let mut controller = LayoutController::new(&settings);
        let state = controller.tick(&photos, &settings, 6.0);

        tracing::info!("{} layout rendered to {file}.", state.pattern.name());

        let config = SnapshotConfig::new(90.0, ViewPlane::Top);
        render_layout_to_png(&state, &config, file)?;
    }

    Ok(())
}
