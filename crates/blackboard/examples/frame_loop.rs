// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Per-tick producer/consumer over a shared tag table.
//!
//! A scene producer publishes the signed distance from a point to a sphere,
//! a playback flag, a frame counter, the clip name and a handle to a compute
//! shader resource. A renderer consumer polls those tags each tick without
//! knowing the producer's types.
//!
//! Run with: `RUST_LOG=debug cargo run -p blackboard --example frame_loop`

use blackboard::{Lookup, TagTable, TagTableConfig};
use std::sync::Arc;

const TICKS: u32 = 8;
const PLAY_AT_TICK: u32 = 3;

/// Stand-in for a GPU resource owned by the render backend.
#[derive(Debug)]
struct ComputeShader {
    kernel: &'static str,
}

struct Sphere {
    origin: [f64; 3],
    radius: f64,
}

impl Sphere {
    fn signed_distance(&self, p: [f64; 3]) -> f64 {
        let d: f64 = self
            .origin
            .iter()
            .zip(p)
            .map(|(o, x)| (x - o) * (x - o))
            .sum();
        d.sqrt() - self.radius
    }
}

fn produce(table: &mut TagTable, sphere: &Sphere, tick: u32) {
    let point = [0.0, 0.0, 5.0 - f64::from(tick) * 0.5];
    table.set("sdf.distance", sphere.signed_distance(point));
    table.set("video.frame", i64::from(tick));
    if tick == PLAY_AT_TICK {
        table.set("video.playing", true);
    }
}

fn consume(table: &TagTable, tick: u32) {
    let distance = table.get_or_default::<f64>("sdf.distance");
    let playing = table.get_or_default::<bool>("video.playing");
    let frame = table.get_or_default::<i64>("video.frame");

    let shader = table
        .get("render.shader")
        .ok()
        .and_then(|v| v.downcast::<ComputeShader>());
    let kernel = shader.as_ref().map_or("<none>", |s| s.kernel);

    log::info!(
        "[frame_loop] tick={} frame={} playing={} distance={:.3} kernel={}",
        tick,
        frame,
        playing,
        distance,
        kernel
    );

    // Reading the clip name as a number is a kind mismatch, not an error
    if let Lookup::Mismatched { expected, found } = table.lookup::<i64>("video.clip") {
        log::debug!("[frame_loop] video.clip is {}, not {}", found, expected);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = TagTableConfig::default()
        .with_initial_capacity(16)
        .with_log_type_mismatches(true);
    config.validate()?;
    let mut table = TagTable::with_config(config);

    let shader = Arc::new(ComputeShader { kernel: "CSMain" });
    table.add_tag("video.clip", "bad_apple")?;
    table.add_tag("video.playing", false)?;
    table.add_tag("render.shader", blackboard::ObjectRef::from_arc(Arc::clone(&shader)))?;

    // Registering the clip twice is a bug the strict path catches
    if let Err(e) = table.add_tag("video.clip", "other") {
        log::warn!("[frame_loop] {}", e);
    }

    let sphere = Sphere {
        origin: [0.0, 0.0, 0.0],
        radius: 1.0,
    };

    for tick in 0..TICKS {
        produce(&mut table, &sphere, tick);
        consume(&table, tick);
    }

    table.remove_tag("render.shader");
    log::info!(
        "[frame_loop] done: {} tags, shader handles left={}",
        table.len(),
        Arc::strong_count(&shader)
    );
    Ok(())
}
