use anyhow::{Context, Result, bail};
use touchtri_engine::coords::Viewport;
use touchtri_engine::input::TouchEvent;
use touchtri_engine::logging::{LoggingConfig, init_logging};
use touchtri_engine::scene::{FrameUniforms, SceneConfig, TriangleScene};

const DEFAULT_SIZE: (f32, f32) = (375.0, 667.0);
const DRAG_STEPS: usize = 8;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let args: Vec<String> = std::env::args().skip(1).collect();
    let viewport = parse_viewport(&args)?;

    let mut scene = TriangleScene::new(viewport, SceneConfig::default());
    log::info!(
        "clear color {:?}, {} vertex bytes",
        scene.config().clear_color.to_array(),
        scene.vertex_bytes().len()
    );
    log::info!("projection {:?}", scene.projection());

    // Stand-in for the GPU uniform buffer: one copy per frame.
    let mut uniform_buffer = vec![0u8; std::mem::size_of::<FrameUniforms>()];

    for (frame, ev) in drag_script(viewport).iter().enumerate() {
        scene.apply_touch(ev);

        let uniforms = scene.frame_uniforms();
        uniform_buffer.copy_from_slice(bytemuck::bytes_of(&uniforms));

        let pos = scene.triangle_position();
        log::info!("frame {frame:>2}: {:?} -> triangle at ({:.1}, {:.1})", ev.phase, pos.x, pos.y);
    }

    log::debug!("uploaded {} uniform bytes per frame", uniform_buffer.len());

    let end = scene.triangle_position();
    println!("triangle came to rest at ({:.1}, {:.1})", end.x, end.y);
    Ok(())
}

/// Reads `[WIDTH HEIGHT]` from the command line.
fn parse_viewport(args: &[String]) -> Result<Viewport> {
    let viewport = match args {
        [] => Viewport::new(DEFAULT_SIZE.0, DEFAULT_SIZE.1),
        [w, h] => {
            let w: f32 = w.parse().with_context(|| format!("invalid width {w:?}"))?;
            let h: f32 = h.parse().with_context(|| format!("invalid height {h:?}"))?;
            Viewport::new(w, h)
        }
        _ => bail!("usage: touchtri-studio [WIDTH HEIGHT]"),
    };

    if !viewport.is_valid() {
        bail!("viewport must be positive and finite, got {}x{}", viewport.width, viewport.height);
    }
    Ok(viewport)
}

/// A single finger dragging from the upper-left quarter to the lower-right
/// quarter, then lifting.
fn drag_script(viewport: Viewport) -> Vec<TouchEvent> {
    let (x0, y0) = (viewport.width * 0.25, viewport.height * 0.25);
    let (x1, y1) = (viewport.width * 0.75, viewport.height * 0.75);

    let mut events = vec![TouchEvent::began(0, x0, y0)];
    for i in 1..=DRAG_STEPS {
        let t = i as f32 / DRAG_STEPS as f32;
        events.push(TouchEvent::moved(0, x0 + (x1 - x0) * t, y0 + (y1 - y0) * t));
    }
    events.push(TouchEvent::ended(0, x1, y1));
    events
}
