use glam::Vec2;
use std::time::Instant;
use tilesweep::*;

fn lcg(seed: &mut u32) -> u32 {
    *seed = seed.wrapping_mul(1664525).wrapping_add(1013904223);
    *seed
}

fn unit(seed: &mut u32) -> f32 {
    lcg(seed) as f32 / u32::MAX as f32
}

fn main() -> Result<(), MapError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // 256x256 map with ~25% solids in a checkerboard-ish pattern
    let (w, h) = (256u32, 256u32);
    let map = TileMap::from_fn(w, h, |x, y| (x ^ y) & 0x3 == 0)?;
    let sparse = TileMap::from_fn(w, h, |x, y| x % 32 == 0 && y % 32 == 0)?;
    let bbox = Aabb::sized(1.0, 1.0);

    println!("map,speed,sweeps,secs,sweeps_per_sec,avg_probes,hit_ratio");
    for (name, map) in [("dense", &map), ("sparse", &sparse)] {
        for speed in [0.25f32, 1.0, 4.0, 16.0] {
            let resolver = SweepResolver::default();
            let n = 200_000u32;
            let mut seed = 12345u32;
            let mut probes = 0u64;
            let mut hits = 0u32;
            let t0 = Instant::now();
            for _ in 0..n {
                let a = Vec2::new(unit(&mut seed) * 250.0 + 2.0, unit(&mut seed) * 250.0 + 2.0);
                let v = Vec2::new(unit(&mut seed) * 2.0 - 1.0, unit(&mut seed) * 2.0 - 1.0) * speed;
                let r = resolver.resolve(map, bbox, a, a + v);
                probes += r.probes as u64;
                if r.sides.any() {
                    hits += 1;
                }
            }
            let secs = t0.elapsed().as_secs_f64();
            println!(
                "{},{},{},{:.3},{:.0},{:.2},{:.3}",
                name,
                speed,
                n,
                secs,
                n as f64 / secs,
                probes as f64 / n as f64,
                hits as f64 / n as f64
            );
        }
    }
    Ok(())
}
