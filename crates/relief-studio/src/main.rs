//! Relief studio.
//!
//! Inspect clip geometry and replay scripted tilt sessions from the command line.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use relief_engine::coords::{CornerRadii, Thickness, Vec2};
use relief_engine::logging::{init_logging, LoggingConfig};
use relief_engine::tilt::TiltConfig;
use relief_ui::drop_shadow::ShadowSpec;
use relief_ui::strategy::{ElementTraits, PlanInput, StrategyPlan, TiltStrategy};
use relief_ui::TiltBehavior;

mod clip;
mod replay;
mod script;

use clip::{render_clip, ClipRequest};
use script::parse_script;

#[derive(Parser)]
#[command(name = "relief-studio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect clip geometry and replay tilt sessions", long_about = None)]
struct Cli {
    /// More output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the rounded clip outline as SVG path data
    #[command(allow_negative_numbers = true)]
    Clip {
        #[arg(long)]
        width: f32,

        #[arg(long)]
        height: f32,

        /// Uniform corner radius
        #[arg(long, default_value_t = 0.0, conflicts_with = "radii")]
        radius: f32,

        /// Per-corner radii: top-left,top-right,bottom-right,bottom-left
        #[arg(long, value_delimiter = ',')]
        radii: Option<Vec<f32>>,

        /// Uniform border thickness
        #[arg(long, default_value_t = 0.0, conflicts_with = "thickness_sides")]
        thickness: f32,

        /// Per-side thickness: left,top,right,bottom
        #[arg(long, value_delimiter = ',')]
        thickness_sides: Option<Vec<f32>>,

        /// Shadow blur radius
        #[arg(long, default_value_t = 20.0)]
        blur: f32,

        /// Also print the outer-shadow donut clip
        #[arg(long)]
        donut: bool,
    },

    /// Replay a scripted pointer session and print every emitted command
    Tilt {
        #[arg(long)]
        width: f32,

        #[arg(long)]
        height: f32,

        /// Rotation in degrees at the element edges (strategy default when omitted)
        #[arg(long)]
        tilt_factor: Option<f32>,

        /// Push-in depth while pressed
        #[arg(long, default_value_t = 5.0)]
        depth: f32,

        /// Keep following the pointer while pressed
        #[arg(long)]
        follow: bool,

        /// How tilt and shadow coexist
        #[arg(long, value_enum, default_value_t = StrategyArg::Auto)]
        strategy: StrategyArg,

        /// Give the element a drop shadow with this blur radius
        #[arg(long)]
        shadow_blur: Option<f32>,

        /// Treat the element as having an explicit size
        #[arg(long)]
        fixed_size: bool,

        /// Inline script, e.g. "down 150 25 @0; up @120"
        #[arg(long, conflicts_with = "script_file")]
        script: Option<String>,

        /// Read the script from a file
        #[arg(long)]
        script_file: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    Auto,
    FixedSize,
    LayeredShadow,
    CompensatedPlanerator,
    NoShadow,
}

impl From<StrategyArg> for TiltStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Auto => TiltStrategy::Auto,
            StrategyArg::FixedSize => TiltStrategy::FixedSize,
            StrategyArg::LayeredShadow => TiltStrategy::LayeredShadow,
            StrategyArg::CompensatedPlanerator => TiltStrategy::CompensatedPlanerator,
            StrategyArg::NoShadow => TiltStrategy::NoShadow,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    init_logging(LoggingConfig::with_level(level));

    match cli.command {
        Commands::Clip { width, height, radius, radii, thickness, thickness_sides, blur, donut } => {
            let req = ClipRequest {
                size: element_size(width, height)?,
                radii: match radii {
                    Some(v) => {
                        let [tl, tr, br, bl] = four("--radii", &v)?;
                        CornerRadii::new(tl, tr, br, bl)
                    }
                    None => CornerRadii::all(warn_negative("--radius", radius)),
                },
                thickness: match thickness_sides {
                    Some(v) => {
                        let [l, t, r, b] = four("--thickness-sides", &v)?;
                        Thickness::new(l, t, r, b)
                    }
                    None => Thickness::uniform(warn_negative("--thickness", thickness)),
                },
                blur: warn_negative("--blur", blur),
                donut,
            };
            print!("{}", render_clip(&req));
        }

        Commands::Tilt {
            width,
            height,
            tilt_factor,
            depth,
            follow,
            strategy,
            shadow_blur,
            fixed_size,
            script,
            script_file,
        } => {
            let size = element_size(width, height)?;
            let src = match (script, script_file) {
                (Some(s), _) => s,
                (None, Some(path)) => fs::read_to_string(&path)
                    .with_context(|| format!("failed to read script {}", path.display()))?,
                (None, None) => bail!("either --script or --script-file is required"),
            };
            let steps = parse_script(&src).context("invalid tilt script")?;

            let shadow = shadow_blur.map(|b| ShadowSpec::default().blur_radius(warn_negative("--shadow-blur", b)));
            let input = PlanInput {
                traits: ElementTraits {
                    has_fixed_size: fixed_size,
                    has_drop_shadow: shadow.is_some(),
                    ..ElementTraits::default()
                },
                size,
                shadow: shadow.as_ref(),
                tilt_factor,
            };
            let base = TiltConfig::default().depth(depth).follow_pointer(follow);
            let plan = StrategyPlan::new(strategy.into(), &input, &base);
            println!("strategy {:?}, origin ({}, {})", plan.strategy, plan.rotation_origin.x, plan.rotation_origin.y);

            let t0 = Instant::now();
            let mut behavior = TiltBehavior::with_plan(plan, t0);
            let report = replay::replay(&mut behavior, &steps, size, t0);

            for e in &report.entries {
                println!(
                    "{:>6} ms  {:<14} {:<15} rx {:>6.2}  ry {:>6.2}  depth {:>5.2}  {:?}",
                    e.at.as_millis(),
                    e.source,
                    format!("{:?}", e.phase),
                    e.pose.rotation_x,
                    e.pose.rotation_y,
                    e.pose.depth,
                    e.commands,
                );
            }
            println!("{} frames, final phase {:?}", report.frames, report.final_phase);
        }
    }

    Ok(())
}

fn element_size(width: f32, height: f32) -> Result<Vec2> {
    if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
        bail!("element size must be finite and non-negative, got {width} x {height}");
    }
    Ok(Vec2::new(width, height))
}

fn four(flag: &str, values: &[f32]) -> Result<[f32; 4]> {
    let arr: [f32; 4] = values
        .try_into()
        .map_err(|_| anyhow::anyhow!("{flag} takes exactly four comma-separated values, got {}", values.len()))?;
    for v in arr {
        warn_negative(flag, v);
    }
    Ok(arr)
}

/// Negative inputs are clamped by the geometry; say so once here.
fn warn_negative(flag: &str, v: f32) -> f32 {
    if v < 0.0 || v.is_nan() {
        log::warn!("{flag} {v} is treated as 0");
    }
    v
}
