//! `ngon`: opens a window and draws a regular polygon whose rim runs once
//! around the hue wheel.
//!
//! Shader sources are read from `--shader-dir` (default `./shader`).

mod app;
mod cli;

use std::process::ExitCode;

use ngon_engine::logging::init_logging;
use ngon_engine::window::Runtime;

use app::PolygonApp;

fn main() -> ExitCode {
    let settings = cli::settings(&cli::command().get_matches());
    init_logging(settings.logging);

    log::info!(
        "starting: {} corners, shaders in {}",
        settings.scene.corners,
        settings.scene.shader_dir.display()
    );

    match Runtime::run(settings.runtime, settings.gl, PolygonApp::new(settings.scene)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
