//! Terminal wireframe viewer (default binary).
//!
//! Loads a height grid, then runs a fixed-tick loop: held keys update the
//! camera, the core rebuilds the primitive list, and the braille view is
//! flushed through the diffing terminal renderer.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use fdf_viewer::cli;
use fdf_viewer::config::ViewerConfig;
use fdf_viewer::core::{grid, mesh, CameraState, DrawPrimitive, HeightGrid};
use fdf_viewer::dump::{dump_frame, GridSummary};
use fdf_viewer::input::{should_quit, HeldKeys};
use fdf_viewer::logging;
use fdf_viewer::term::{
    scene_fingerprint, BrailleCanvas, FrameBuffer, HudInfo, RenderThrottle, TerminalRenderer,
    WireframeView,
};
use fdf_viewer::types::Viewport;

fn main() -> Result<()> {
    let args =
        cli::parse_viewer_args(std::env::args_os()).unwrap_or_else(|e| cli::exit_on_error(e));
    logging::init()?;

    let grid = match grid::load(&args.file) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("fdf-viewer: {}", e);
            std::process::exit(1);
        }
    };

    let camera = CameraState::for_grid(&grid);
    let file_name = display_name(&args.file);

    // Printed regardless of FDF_LOG so the load report is never filtered out.
    let summary = GridSummary::new(
        &grid,
        &camera,
        Viewport::new(cli::DUMP_WIDTH, cli::DUMP_HEIGHT),
    );
    for line in summary.lines() {
        eprintln!("{}", line);
    }

    if args.dump {
        let dump = dump_frame(&file_name, &grid, &camera, Viewport::new(args.width, args.height));
        serde_json::to_writer(std::io::stdout().lock(), &dump)?;
        println!();
        return Ok(());
    }

    let config = ViewerConfig::from_env();
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &grid, camera, &file_name);

    // Always try to restore terminal state.
    let _ = term.exit();
    let frames = result?;
    info!("viewer closed after {} frames", frames);
    Ok(())
}

fn run(
    term: &mut TerminalRenderer,
    config: &ViewerConfig,
    grid: &HeightGrid,
    mut camera: CameraState,
    file_name: &str,
) -> Result<u64> {
    let view = WireframeView::new(config.stroke);
    let mut keys = HeldKeys::new().with_key_release_timeout_ms(config.key_release_timeout_ms);
    let mut throttle = RenderThrottle::new(config.static_redraw_ms);

    let mut primitives: Vec<DrawPrimitive> = Vec::with_capacity(grid.cell_count() * 3);
    let mut canvas = BrailleCanvas::new(0, 0);
    let mut fb = FrameBuffer::new(0, 0);

    let tick = Duration::from_millis(config.tick_ms as u64);
    let started = Instant::now();
    let mut last_tick = Instant::now();
    let mut frames: u64 = 0;

    loop {
        // Input until the next tick.
        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            break;
                        }
                        keys.handle_key_press(key.code, Instant::now());
                    }
                    KeyEventKind::Release => keys.handle_key_release(key.code),
                },
                Event::Resize(_, _) => {
                    term.invalidate();
                    throttle.invalidate();
                }
                _ => {}
            }
        }

        if last_tick.elapsed() < tick {
            continue;
        }
        last_tick = Instant::now();

        let held = keys.held(last_tick);
        camera.apply(held);

        let (cols, rows) = crossterm::terminal::size().unwrap_or((80, 24));
        let fingerprint = scene_fingerprint(camera.fingerprint(), cols, rows);
        let now_ms = started.elapsed().as_millis() as u64;
        if !throttle.should_render(now_ms, fingerprint, !held.is_empty()) {
            continue;
        }
        let skipped = throttle.take_skipped();
        if skipped > 0 {
            debug!(skipped, "throttle skipped idle frames");
        }

        let viewport = WireframeView::viewport(cols, rows);
        mesh::render_into(grid, &camera, viewport, &mut primitives);
        view.render_into(
            &primitives,
            &HudInfo::new(file_name, &camera),
            cols,
            rows,
            &mut canvas,
            &mut fb,
        );
        term.draw_swap(&mut fb)?;
        frames += 1;

        debug!(
            frames,
            primitives = primitives.len(),
            scale = camera.scale,
            angle_y = camera.angle_y,
            "frame"
        );
    }

    Ok(frames)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
