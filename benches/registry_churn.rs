// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for registry and toaster bookkeeping.
//!
//! Measures:
//! - Opening toasts into a full registry (eviction on every insert)
//! - Updating a visible toast in place
//! - Draining a burst of dispatched requests and ticking timers

use criterion::{criterion_group, criterion_main, Criterion};
use iced_toast::config::ToasterConfig;
use iced_toast::toast::{Position, Registry, ToastRequest};
use iced_toast::ui::Toaster;
use std::hint::black_box;
use std::time::{Duration, Instant};

fn bench_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");

    for position in [Position::TopRight, Position::BottomRight] {
        group.bench_function(format!("open_evicting_{position}"), |b| {
            let mut registry = Registry::with_capacity(4, position);
            let mut n = 0_u64;
            b.iter(|| {
                n += 1;
                let outcome = registry.open(ToastRequest::new("churn").id(n));
                black_box(outcome);
            });
        });
    }

    group.bench_function("update_in_place", |b| {
        let mut registry = Registry::with_capacity(4, Position::BottomRight);
        registry.open(ToastRequest::new("seed").id("same"));
        b.iter(|| {
            let outcome = registry.open(ToastRequest::new("updated").id("same"));
            black_box(outcome);
        });
    });

    group.finish();
}

fn bench_toaster(c: &mut Criterion) {
    let mut group = c.benchmark_group("toaster");

    group.bench_function("dispatch_burst_and_tick", |b| {
        let (mut toaster, toasts) = Toaster::new(ToasterConfig {
            reduced_motion: Some(true),
            ..ToasterConfig::default()
        });
        let start = Instant::now();
        b.iter(|| {
            for n in 0..32_u32 {
                toasts.info(ToastRequest::new("burst").id(n).delay_ms(10));
            }
            toaster.sync(start);
            toaster.tick(start + Duration::from_millis(20));
            black_box(toaster.len());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_registry, bench_toaster);
criterion_main!(benches);
