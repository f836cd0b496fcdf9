use std::time::Duration;

use criterion::{Criterion, Throughput};
use gallery_drift::prelude::*;

pub const SAMPLE_SIZE: usize = 20;
pub const WARM_UP: Duration = Duration::from_secs(1);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(2);

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

pub fn elements_throughput(elements: usize) -> Throughput {
    Throughput::Elements(elements.max(1) as u64)
}

#[allow(dead_code)]
pub fn make_photos(count: usize) -> Vec<Photo> {
    (0..count)
        .map(|i| {
            Photo::new(format!("photo-{i}"), format!("https://photos.test/{i}.jpg"))
                .with_created_at(i as f64)
        })
        .collect()
}
