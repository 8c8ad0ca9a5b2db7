mod svg;
mod txt;

use anyhow::{anyhow, bail, Context};
use config::{Config, File};
use hexmap::{timed, HexMap, MapConfig, Point2, Seed};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use std::{
    fs,
    path::{Path, PathBuf},
    process,
};
use structopt::StructOpt;
use strum::{Display, EnumString};

/// CLI for generating and inspecting hex maps
#[derive(Debug, StructOpt)]
#[structopt(name = "hexmap")]
struct Opt {
    /// Path to a config file that defines the map to be generated. Supported
    /// formats: JSON, TOML. If not given, the default config is used (with a
    /// random seed).
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// Seed to generate the map with. Overrides the seed from the config
    /// file. Can be a number or any string.
    #[structopt(short, long, parse(from_str))]
    seed: Option<Seed>,

    /// Simulate a click at a pixel, given as `x,y`. The tile under the pixel
    /// is printed, along with all of its neighbors. Can be given multiple
    /// times.
    #[structopt(short, long, parse(try_from_str = parse_pixel))]
    pick: Vec<Point2>,

    /// If given, output files will be written to this directory. The exact
    /// files that appear in the directory are defined by the output formats.
    /// See `--output-formats` for more info
    #[structopt(short, long)]
    output: Option<PathBuf>,

    /// The format(s) to output the map in. Supported formats:
    ///
    /// cfg - The full config used for the map, in TOML format. Load it with
    ///   `--config` to generate the same map again
    ///
    /// svg - 2D rendering of the map
    ///
    /// txt - Plain text grid of tile types, one line per row
    #[structopt(short = "f", long)]
    output_formats: Vec<OutputFormat>,

    /// The logging level to use during map generation. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,
}

/// Different output formats.
#[derive(Copy, Clone, Debug, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
enum OutputFormat {
    // If you change this, make sure to update the help text for
    // `--output-formats`!
    /// Export the map's full config in a human-readable file
    Cfg,
    /// Render the map as a 2D SVG
    Svg,
    /// Render the map as a text grid
    Txt,
}

impl OutputFormat {
    fn file_ext(self) -> &'static str {
        match self {
            Self::Cfg => "toml",
            Self::Svg => "svg",
            Self::Txt => "txt",
        }
    }
}

/// Parse a pixel from a string like `120,45.5`
fn parse_pixel(s: &str) -> anyhow::Result<Point2> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| anyhow!("expected a pixel as x,y, got {:?}", s))?;
    let x = x
        .trim()
        .parse()
        .with_context(|| format!("invalid x value in {:?}", s))?;
    let y = y
        .trim()
        .parse()
        .with_context(|| format!("invalid y value in {:?}", s))?;
    Ok(Point2::new(x, y))
}

fn load_config(config_path: &Path) -> anyhow::Result<MapConfig> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

/// Render the map (or its config) in the given format, and write the result
/// to `<output_dir>/map.<ext>`.
fn write_output(
    output_dir: &Path,
    format: OutputFormat,
    config: &MapConfig,
    map: &HexMap,
) -> anyhow::Result<()> {
    let path = output_dir.join("map").with_extension(format.file_ext());
    let contents = timed!(format!("Rendering {} output", format), {
        match format {
            OutputFormat::Cfg => toml::to_string_pretty(config)
                .context("error serializing config")?,
            OutputFormat::Svg => svg::draw_map(map, config).to_string(),
            OutputFormat::Txt => txt::draw_map(map),
        }
    });
    fs::write(&path, contents).with_context(|| {
        format!("error writing {} output to {:?}", format, path)
    })?;
    info!("Wrote {} output to {:?}", format, path);
    Ok(())
}

/// Resolve a clicked pixel to a tile, and print the tile and its neighbors
fn pick(map: &HexMap, pixel: Point2) {
    match map.pixel2hex(pixel) {
        Some(tile) => {
            println!("Clicked {} (pixel {}). Neighbors:", tile, pixel);
            for neighbor in map.find_neighbors(tile) {
                println!("  {}", neighbor);
            }
        }
        None => println!("No tile at pixel {}", pixel),
    }
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let mut config = match &opt.config {
        Some(config_path) => load_config(config_path)?,
        None => MapConfig::default(),
    };
    if let Some(seed) = opt.seed {
        config.seed = seed;
    }
    info!("Using seed {}", config.seed);

    let map = HexMap::generate(config.clone())?;

    for pixel in opt.pick {
        pick(&map, pixel);
    }

    // If an output dir was specified, write out output format(s) there
    if let Some(output_dir) = opt.output {
        if opt.output_formats.is_empty() {
            bail!("output dir was specified, but no output formats were given")
        }
        fs::create_dir_all(&output_dir).with_context(|| {
            format!("error creating output dir {:?}", output_dir)
        })?;

        for output_format in opt.output_formats {
            write_output(&output_dir, output_format, &config, &map)?;
        }
    }

    Ok(())
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
