// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `cgm`: root solvers, 2x2 eigen-decomposition, Bezier measurement and
//! gradient noise from the command line.
// Results go to stdout.
#![allow(clippy::print_stdout)]

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use cgm_cli::config::{ConfigService, FsConfigStore};
use cgm_cli::prefs::CliPrefs;
use cgm_cli::report::{
    curve_from_coords, eigen_text, format_values, LengthReport, NoiseReport, ParamReport,
    RootsReport, SplitReport, CURVE_COORDS,
};
use cgm_core::{noise, solve_cubic, solve_eigen_symm_2x2, solve_quadratic, Timer};
use cgm_geom::BezierCurve2;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cgm", author, version, about = "Small-vector geometry math")]
struct Cli {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    /// Directory holding cgm.json (defaults to the platform config dir)
    #[arg(long, global = true, value_name = "DIR")]
    config_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Real roots of a·x² + b·x + c = 0
    Quadratic {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
        #[arg(allow_negative_numbers = true)]
        c: f64,
    },
    /// Distinct real roots of a·x³ + b·x² + c·x + d = 0, ascending
    Cubic {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
        #[arg(allow_negative_numbers = true)]
        c: f64,
        #[arg(allow_negative_numbers = true)]
        d: f64,
    },
    /// Eigenvalues and eigenvectors of the symmetric matrix [[e, f], [f, g]]
    Eigen {
        #[arg(allow_negative_numbers = true)]
        e: f64,
        #[arg(allow_negative_numbers = true)]
        f: f64,
        #[arg(allow_negative_numbers = true)]
        g: f64,
    },
    /// Cubic Bezier curve queries
    Bezier {
        #[command(subcommand)]
        command: BezierCommand,
    },
    /// Sample 3D gradient noise
    Noise {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
        #[arg(allow_negative_numbers = true)]
        z: f64,
        /// Noise generator
        #[arg(long, value_enum, default_value_t = NoiseKind::Simplex)]
        kind: NoiseKind,
    },
    /// Show or change stored preferences
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Args, Debug)]
struct CurveArgs {
    /// Control points: x0 y0 x1 y1 x2 y2 x3 y3
    #[arg(num_args = CURVE_COORDS, required = true, allow_negative_numbers = true)]
    coords: Vec<f64>,
    /// Arc-length tolerance (defaults to the stored preference)
    #[arg(long)]
    tolerance: Option<f64>,
}

#[derive(Subcommand, Debug)]
enum BezierCommand {
    /// Arc length of the whole curve
    Length {
        #[command(flatten)]
        curve: CurveArgs,
    },
    /// Parameter t at which the arc length from the start reaches LENGTH
    Param {
        #[command(flatten)]
        curve: CurveArgs,
        /// Target arc length
        #[arg(long, allow_negative_numbers = true)]
        length: f64,
    },
    /// Subdivide the curve at a parameter
    Split {
        #[command(flatten)]
        curve: CurveArgs,
        /// Parameter to split at
        #[arg(long, default_value_t = 0.5)]
        at: f64,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Print the effective preferences and where they are stored
    Show,
    /// Update stored preferences
    Set {
        /// Default Bezier arc-length tolerance
        #[arg(long)]
        length_tolerance: Option<f64>,
        /// Fractional digits in plain-text output
        #[arg(long)]
        precision: Option<usize>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum NoiseKind {
    /// Perlin simplex noise
    Simplex,
    /// Perlin improved (2002) noise
    Improved,
    /// Classic lattice gradient noise (single precision)
    Classic,
}

impl NoiseKind {
    fn name(self) -> &'static str {
        match self {
            Self::Simplex => "simplex",
            Self::Improved => "improved",
            Self::Classic => "classic",
        }
    }

    fn sample(self, x: f64, y: f64, z: f64) -> f64 {
        match self {
            Self::Simplex => noise::simplex_noise3(x, y, z),
            Self::Improved => noise::improved_noise3(x, y, z),
            Self::Classic => f64::from(noise::noise3(x as f32, y as f32, z as f32)),
        }
    }
}

struct Output {
    json: bool,
    precision: usize,
}

impl Output {
    fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce(usize) -> String) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            println!("{}", text(self.precision));
        }
        Ok(())
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn open_config(dir: Option<PathBuf>) -> Result<ConfigService<FsConfigStore>> {
    let store = match dir {
        Some(dir) => FsConfigStore::at(dir),
        None => FsConfigStore::new().context("resolve config directory")?,
    };
    Ok(ConfigService::new(store))
}

fn curve_and_tolerance(args: &CurveArgs, prefs: &CliPrefs) -> Result<(BezierCurve2<f64>, f64)> {
    let Some(curve) = curve_from_coords(&args.coords) else {
        bail!("expected {CURVE_COORDS} coordinates, got {}", args.coords.len());
    };
    let tolerance = args.tolerance.unwrap_or(prefs.length_tolerance);
    if !(tolerance.is_finite() && tolerance > 0.0) {
        bail!("tolerance must be positive and finite, got {tolerance}");
    }
    Ok((curve, tolerance))
}

fn run_bezier(command: &BezierCommand, prefs: &CliPrefs, out: &Output) -> Result<()> {
    match command {
        BezierCommand::Length { curve } => {
            let (c, tolerance) = curve_and_tolerance(curve, prefs)?;
            let report = LengthReport {
                length: c.length(tolerance),
                tolerance,
            };
            out.emit(&report, |p| format_values(&[report.length], p))
        }
        BezierCommand::Param { curve, length } => {
            let (c, tolerance) = curve_and_tolerance(curve, prefs)?;
            let report = ParamReport {
                length: *length,
                t: c.parameter_at_length(*length, tolerance),
            };
            out.emit(&report, |p| format_values(&[report.t], p))
        }
        BezierCommand::Split { curve, at } => {
            let (c, _) = curve_and_tolerance(curve, prefs)?;
            if !(0.0..=1.0).contains(at) {
                bail!("split parameter must lie in [0, 1], got {at}");
            }
            let (left, right) = c.divide(*at);
            let report = SplitReport {
                at: *at,
                left,
                right,
            };
            out.emit(&report, |p| report.to_text(p))
        }
    }
}

fn run_config(
    command: &ConfigCommand,
    config: &ConfigService<FsConfigStore>,
    out: &Output,
) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            let prefs = CliPrefs::load(config).context("load preferences")?;
            let path = config.store().path_for(cgm_cli::prefs::PREFS_KEY);
            prefs
                .validate()
                .with_context(|| format!("stored preferences in {}", path.display()))?;
            out.emit(&prefs, |_| {
                format!(
                    "length_tolerance = {}\nprecision = {}\nfile = {}",
                    prefs.length_tolerance,
                    prefs.precision,
                    path.display()
                )
            })
        }
        ConfigCommand::Set {
            length_tolerance,
            precision,
        } => {
            let mut prefs = CliPrefs::load(config).context("load preferences")?;
            if let Some(t) = length_tolerance {
                prefs.length_tolerance = *t;
            }
            if let Some(p) = precision {
                prefs.precision = *p;
            }
            prefs.validate()?;
            prefs.save(config).context("save preferences")?;
            info!(?prefs, "preferences saved");
            out.emit(&prefs, |_| "saved".to_owned())
        }
    }
}

fn load_valid_prefs(config: &ConfigService<FsConfigStore>) -> Result<CliPrefs> {
    let prefs = CliPrefs::load(config)?;
    prefs.validate()?;
    Ok(prefs)
}

fn run(cli: Cli) -> Result<()> {
    let config = open_config(cli.config_dir)?;
    // Best effort outside `config`: a broken or invalid file falls back to
    // defaults.
    let prefs = match &cli.command {
        Commands::Config { .. } => CliPrefs::default(),
        _ => load_valid_prefs(&config).unwrap_or_else(|err| {
            warn!(%err, "ignoring stored preferences");
            CliPrefs::default()
        }),
    };
    let out = Output {
        json: cli.json,
        precision: prefs.precision,
    };

    match &cli.command {
        Commands::Quadratic { a, b, c } => {
            let roots = solve_quadratic(*a, *b, *c).map_or_else(Vec::new, |(x1, x2)| vec![x1, x2]);
            let report = RootsReport { roots };
            out.emit(&report, |p| report.to_text(p))
        }
        Commands::Cubic { a, b, c, d } => {
            let roots = solve_cubic(*a, *b, *c, *d);
            let report = RootsReport {
                roots: roots.as_slice().to_vec(),
            };
            out.emit(&report, |p| report.to_text(p))
        }
        Commands::Eigen { e, f, g } => {
            let r = solve_eigen_symm_2x2(*e, *f, *g);
            out.emit(&r, |p| eigen_text(&r, p))
        }
        Commands::Bezier { command } => run_bezier(command, &prefs, &out),
        Commands::Noise { x, y, z, kind } => {
            let report = NoiseReport {
                kind: kind.name().to_owned(),
                at: [*x, *y, *z],
                value: kind.sample(*x, *y, *z),
            };
            out.emit(&report, |p| format_values(&[report.value], p))
        }
        Commands::Config { command } => run_config(command, &config, &out),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut timer = Timer::new();
    let command = format!("{:?}", cli.command);
    let result = run(cli);
    debug!(%command, elapsed_secs = timer.elapsed_secs(false), "command finished");
    result
}
