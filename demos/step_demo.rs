use glam::Vec2;
use tilesweep::*;

const LEVEL: &[&str] = &[
    "########################################",
    "#                                      #",
    "#                                      #",
    "#                 ####                 #",
    "#                                      #",
    "#         ###                ###       #",
    "#                                      #",
    "#    ###               ##              #",
    "#                      ##         #    #",
    "#                      ##         #    #",
    "########################################",
];

const DT: f32 = 1.0 / 60.0;
const GRAVITY: f32 = 9.8 * 4.0;
const RUN_SPEED: f32 = 3.0;
const JUMP_SPEED: f32 = -10.0;

fn build_level() -> Result<TileMap, MapError> {
    let width = LEVEL[0].len() as u32;
    let height = LEVEL.len() as u32;
    let bytes: Vec<u8> = LEVEL
        .iter()
        .flat_map(|row| row.bytes().map(|b| (b != b' ') as u8))
        .collect();
    TileMap::from_bytes(width, height, &bytes)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = match std::env::args().nth(1) {
        Some(path) => CollisionConfig::load_from_file(path)?,
        None => CollisionConfig::default(),
    };
    let map = build_level()?.with_edge_policy(cfg.edge);
    let resolver = SweepResolver::from_config(&cfg);

    // Anchor at the feet; standing and crouching boxes share the bottom edge.
    let standing = Aabb::new(Vec2::new(-0.5, -2.0), Vec2::new(1.0, 2.0));
    let crouching = Aabb::new(Vec2::new(-0.5, -1.0), Vec2::new(1.0, 1.0));

    let mut pos = Vec2::new(3.0, 4.0);
    let mut vel = Vec2::ZERO;
    let mut grounded = false;

    for step in 0..240u32 {
        // Scripted input: run right, jump twice, crouch under the overhang.
        let right = step < 200;
        let jump = step == 60 || step == 130;
        let crouch = (150..180).contains(&step);

        let bbox = if crouch { crouching } else { standing };
        if jump && grounded && map.can_occupy(bbox, pos - Vec2::Y) {
            vel.y = JUMP_SPEED;
        }

        vel.x = if right { RUN_SPEED } else { 0.0 };
        vel.y += GRAVITY * DT;
        let candidate = pos + vel * DT;

        let hit = resolver.resolve(&map, bbox, pos, candidate);
        if hit.sides.vertical() {
            vel.y = 0.0;
        }
        if hit.sides.horizontal() {
            vel.x = 0.0;
        }
        grounded = hit.sides.bottom;
        pos = hit.resolved;

        if hit.sides.any() && step % 10 == 0 {
            println!(
                "step {:3} pos=({:6.2},{:6.2}) sides={:?} probes={}",
                step, pos.x, pos.y, hit.sides, hit.probes
            );
        }
    }

    println!("final position ({:.2},{:.2})", pos.x, pos.y);
    Ok(())
}
