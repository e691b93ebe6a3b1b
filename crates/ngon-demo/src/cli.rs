use std::path::PathBuf;

use clap::{arg, command, value_parser, ArgMatches, Command};
use ngon_engine::device::GlInit;
use ngon_engine::geometry::{MAX_CORNERS, MIN_CORNERS};
use ngon_engine::logging::LoggingConfig;
use ngon_engine::scene::SceneConfig;
use ngon_engine::window::RuntimeConfig;
use winit::dpi::LogicalSize;

/// Everything `main` needs, assembled from the command line.
#[derive(Debug, Clone)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub runtime: RuntimeConfig,
    pub gl: GlInit,
    pub scene: SceneConfig,
}

pub fn command() -> Command {
    command!()
        .about("Draws a regular polygon shaded around the hue wheel")
        .arg(
            arg!([CORNERS] "Number of polygon corners")
                .value_parser(value_parser!(u32).range(i64::from(MIN_CORNERS)..=i64::from(MAX_CORNERS)))
                .default_value("6"),
        )
        .arg(
            arg!(--"shader-dir" <DIR> "Directory holding vertex.glsl and fragment.glsl")
                .value_parser(value_parser!(PathBuf))
                .default_value("shader"),
        )
        .arg(arg!(--log <FILTER> "Log filter (env_logger syntax), overrides RUST_LOG"))
        .arg(arg!(--"no-vsync" "Swap buffers without waiting for the display refresh"))
        .arg(
            arg!(--size <WxH> "Initial window size in logical pixels")
                .value_parser(parse_size)
                .default_value("800x800"),
        )
}

pub fn settings(matches: &ArgMatches) -> Settings {
    let mut logging = LoggingConfig::default();
    if let Some(filter) = matches.get_one::<String>("log") {
        logging = logging.with_filter(filter.clone());
    }

    let mut runtime = RuntimeConfig::default();
    if let Some(&(width, height)) = matches.get_one::<(u32, u32)>("size") {
        runtime.initial_size = LogicalSize::new(f64::from(width), f64::from(height));
    }

    let gl = GlInit {
        vsync: !matches.get_flag("no-vsync"),
        ..GlInit::default()
    };

    let mut scene = SceneConfig::default();
    if let Some(&corners) = matches.get_one::<u32>("CORNERS") {
        scene = scene.with_corners(corners);
    }
    if let Some(dir) = matches.get_one::<PathBuf>("shader-dir") {
        scene = scene.with_shader_dir(dir.clone());
    }

    Settings {
        logging,
        runtime,
        gl,
        scene,
    }
}

fn parse_size(value: &str) -> Result<(u32, u32), String> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got `{value}`"))?;

    let parse = |s: &str| match s.trim().parse::<u32>() {
        Ok(0) | Err(_) => Err(format!("`{s}` is not a positive pixel count")),
        Ok(n) => Ok(n),
    };

    Ok((parse(width)?, parse(height)?))
}
