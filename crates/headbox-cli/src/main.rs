//! `headbox` - generate capture manifests and drive the bake pipeline.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use headbox::{BakeCommand, CaptureOptions, CapturePlan, DVec3, Headbox};

#[derive(Parser)]
#[command(name = "headbox", version, about = "Light-field capture planning: camera placement and view-group manifests")]
struct Args {
    /// Print per-view-group positions and debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Generate camera positions for a headbox and write the view-group manifest
    Manifest {
        /// Headbox minimum corner as "x,y,z"
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        min: DVec3,
        /// Headbox maximum corner as "x,y,z"
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        max: DVec3,
        /// Number of view groups (camera positions); powers of two sample best
        #[arg(long, default_value_t = 16)]
        view_groups: usize,
        /// Image width/height in pixels
        #[arg(long, default_value_t = 1024)]
        resolution: u32,
        /// Near clip distance
        #[arg(long, default_value_t = 0.01)]
        near: f64,
        /// Far clip distance
        #[arg(long, default_value_t = 1000.0)]
        far: f64,
        /// Directory to write manifest.json into
        #[arg(long, default_value = "CaptureOutput")]
        out: PathBuf,
    },

    /// Run the external bake executable on a written manifest
    Bake {
        /// Path of the capture manifest
        #[arg(long)]
        manifest: PathBuf,
        /// Path of the bake executable
        #[arg(long)]
        exe: PathBuf,
        /// Directory the baked mesh is written to
        #[arg(long, default_value = "MeshOutput")]
        out: PathBuf,
        /// Extra flags passed through to the executable
        #[arg(long, default_value_t = CaptureOptions::default().bake_flags)]
        flags: String,
        /// Print the command line without running it
        #[arg(long)]
        dry_run: bool,
    },
}

/// Parses "x,y,z" into a point.
fn parse_point(s: &str) -> Result<DVec3> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        bail!("expected three comma-separated coordinates, got '{s}'");
    }
    let mut coords = [0.0; 3];
    for (coord, part) in coords.iter_mut().zip(&parts) {
        *coord = part
            .trim()
            .parse()
            .with_context(|| format!("bad coordinate '{part}' in '{s}'"))?;
    }
    Ok(DVec3::from_array(coords))
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "info" }),
    )
    .init();

    match args.cmd {
        Cmd::Manifest {
            min,
            max,
            view_groups,
            resolution,
            near,
            far,
            out,
        } => {
            let options = CaptureOptions {
                view_group_count: view_groups,
                image_resolution: resolution,
                near_clip: near,
                far_clip: far,
                ..CaptureOptions::default()
            };
            let headbox = Headbox::new(min, max);
            let plan = CapturePlan::new(
                headbox,
                options.view_group_count,
                options.view_group_config()?,
            )?;

            if args.verbose {
                for (index, position) in plan.positions().iter().enumerate() {
                    println!("view group {index}: {position}");
                }
            }

            let path = plan.write_manifest(&out)?;
            println!("wrote {}", path.display());
        }

        Cmd::Bake {
            manifest,
            exe,
            out,
            flags,
            dry_run,
        } => {
            let command = BakeCommand {
                executable: exe,
                manifest,
                output_dir: out,
                extra_flags: flags,
            };

            if dry_run {
                println!("{}", command.command_line());
            } else {
                command.run()?;
                println!("baked mesh under {}", command.output_file_prefix().display());
            }
        }
    }
    Ok(())
}
