//! Super Gopher entry point
//!
//! Headless driver: runs a scripted input sequence through the simulation at
//! a fixed 60 Hz and logs what happens. Pass a tuning JSON path to override
//! the built-in constants.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use super_gopher::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};
    use super_gopher::renderer::{FrameDraw, vertex};
    use super_gopher::sim::{AnimationTable, FrameInput, Session, tick};
    use super_gopher::Tuning;

    env_logger::init();
    log::info!("Super Gopher (headless) starting...");

    let tuning = match std::env::args().nth(1) {
        Some(path) => Tuning::load(path),
        None => Tuning::default(),
    };
    let mut session = Session::new(tuning, AnimationTable::grid(12.0, 8, 8));

    // (frames, control x, jump, slow motion, restart)
    let script: &[(u32, f32, bool, bool, bool)] = &[
        (60, 0.0, false, false, false),
        (45, 1.0, false, false, false),
        (1, 1.0, true, false, false),
        (50, 1.0, false, false, false),
        (40, -1.0, false, true, false),
        (1, 0.0, true, false, false),
        (60, 0.0, false, false, false),
        (1, 0.0, false, false, true),
        (60, 0.0, false, false, false),
    ];

    const DT: f32 = 1.0 / 60.0;
    let mut landings = 0u32;
    let mut jumps = 0u32;

    for &(frames, x, jump, slow_motion, restart) in script {
        for i in 0..frames {
            let input = FrameInput {
                dt: DT,
                control: glam::Vec2::new(x, if jump && i == 0 { 1.0 } else { 0.0 }),
                slow_motion,
                restart: restart && i == 0,
            };
            let events = tick(&mut session, &input);
            landings += u32::from(events.landed);
            jumps += u32::from(events.jumped);
        }

        let actor = &session.physics.state;
        log::info!(
            "t={:.2}s pos=({:.1}, {:.1}) vel=({:.1}, {:.1}) ground={} anim={:?} facing={}",
            session.sim_time,
            actor.rect.min.x,
            actor.rect.min.y,
            actor.vel.x,
            actor.vel.y,
            actor.ground,
            session.animator.state,
            session.animator.facing,
        );
    }

    let frame = FrameDraw::capture(&session);
    let vertices = frame.vertices(32);
    log::info!(
        "Done: {} frames, {} landings, {} jumps, {} vertices ({} bytes, stride {}) in last frame",
        session.frame_count,
        landings,
        jumps,
        vertices.len(),
        vertex::as_bytes(&vertices).len(),
        vertex::Vertex::STRIDE
    );
    log::info!(
        "{}x{} window: canvas scale {:.2}, clear {:?}, letterbox {:?}",
        WINDOW_WIDTH,
        WINDOW_HEIGHT,
        frame.fit_scale(WINDOW_WIDTH, WINDOW_HEIGHT),
        frame.clear,
        vertex::colors::LETTERBOX
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser front end; the library is the deliverable on wasm32
}
