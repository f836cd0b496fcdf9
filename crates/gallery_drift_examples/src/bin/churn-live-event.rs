use std::collections::HashMap;

use gallery_drift::prelude::*;
use gallery_drift_examples::{init_tracing, render_layout_to_png, SnapshotConfig, ViewPlane};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Simulates a live event: guests keep submitting photos (and occasionally
/// deleting them) while the wall ticks at 30 fps. Verifies along the way
/// that nobody's photo ever jumps to a different slot.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let settings = LayoutSettings::default()
        .with_pattern(PatternKind::Float)
        .with_capacity(100)
        .with_floor_size(50.0)
        .with_wall_height(18.0);

    let mut rng = StdRng::seed_from_u64(2026);
    let mut controller = LayoutController::new(&settings);
    let mut events = VecSink::new();

    let mut photos: Vec<Photo> = Vec::new();
    let mut next_guest = 0u32;
    let mut known_slots: HashMap<String, usize> = HashMap::new();
    let mut last_state = None;

    for frame in 0..900u32 {
        let time = frame as f32 / 30.0;

        // A new photo roughly every second; a deletion every few seconds.
        if frame % 30 == 0 {
            photos.push(
                Photo::new(
                    format!("guest-{next_guest:04}"),
                    format!("https://wall.test/{next_guest}.jpg"),
                )
                .with_created_at(time as f64),
            );
            next_guest += 1;
        }
        if frame % 210 == 0 && !photos.is_empty() {
            let victim = rng.next_u32() as usize % photos.len();
            let gone = photos.swap_remove(victim);
            known_slots.remove(&gone.id);
        }

        let state = controller.tick_with_events(&photos, &settings, time, &mut events);

        for record in state.occupied() {
            let id = record.occupant.clone().expect("occupied record has id");
            match known_slots.get(&id) {
                Some(&slot) => assert_eq!(slot, record.slot, "photo {id} moved slots"),
                None => {
                    known_slots.insert(id, record.slot);
                }
            }
        }

        last_state = Some(state);
    }

    let state = last_state.expect("at least one frame ticked");
    tracing::info!(
        "After 900 frames: {} photos submitted, {} on the wall, {} layout events.",
        next_guest,
        state.occupied().count(),
        events.len()
    );

    let config = SnapshotConfig::new(60.0, ViewPlane::Top);
    render_layout_to_png(&state, &config, "churn-live-event.png")?;

    Ok(())
}
