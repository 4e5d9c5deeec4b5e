use clap::{Parser, Subcommand};
use pf_core::{Point2, Real, deg, mps};
use pf_field::{lift_coefficient, pressure_coefficients, tangential_speeds, velocity_field};
use pf_flow::Freestream;
use pf_geom::{PanelArray, discretize, sections};
use pf_solver::{VortexStrengths, solve};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pf-cli")]
#[command(about = "panelflow CLI - vortex panel method for 2D sections", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the sheet strengths for a section coordinate file
    Solve {
        /// Path to a two-column x/z coordinate file, trailing edge first
        coords_path: PathBuf,
        /// Number of surface panels (odd counts are reduced by one)
        #[arg(long, default_value_t = 40)]
        panels: usize,
        /// Angle of attack in degrees
        #[arg(long, default_value_t = 0.0)]
        alpha: Real,
        /// Freestream speed in m/s
        #[arg(long, default_value_t = 1.0)]
        speed: Real,
        /// Write the full JSON report here instead of a terminal summary
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Sample the velocity field on a rectangular grid and export CSV
    Field {
        /// Path to a two-column x/z coordinate file, trailing edge first
        coords_path: PathBuf,
        #[arg(long, default_value_t = 40)]
        panels: usize,
        #[arg(long, default_value_t = 0.0)]
        alpha: Real,
        #[arg(long, default_value_t = 1.0)]
        speed: Real,
        /// Grid points per axis
        #[arg(long, default_value_t = 20)]
        grid: usize,
        /// Window as x-min,x-max,z-min,z-max
        #[arg(long, default_value = "-0.5,1.5,-1.0,1.0", value_parser = parse_window)]
        window: Window,
        /// Output CSV file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Generate NACA 4-digit section coordinates
    Section {
        /// Four-digit code, e.g. 0012 or 2412
        code: String,
        /// Chordwise stations per surface
        #[arg(long, default_value_t = 120)]
        samples: usize,
        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug)]
struct Window {
    x_min: Real,
    x_max: Real,
    z_min: Real,
    z_max: Real,
}

fn parse_window(raw: &str) -> Result<Window, String> {
    let parts: Vec<_> = raw.split(',').collect();
    if parts.len() != 4 {
        return Err("expected x-min,x-max,z-min,z-max".to_string());
    }
    let mut vals = [0.0; 4];
    for (v, p) in vals.iter_mut().zip(&parts) {
        *v = p.trim().parse::<Real>().map_err(|e| e.to_string())?;
    }
    Ok(Window {
        x_min: vals[0],
        x_max: vals[1],
        z_min: vals[2],
        z_max: vals[3],
    })
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Line {line} of {path}: expected two numeric columns")]
    CoordsFormat { path: String, line: usize },

    #[error("Geometry error: {0}")]
    Geometry(#[from] pf_geom::GeometryError),

    #[error("Flow error: {0}")]
    Flow(#[from] pf_flow::FlowError),

    #[error("Solver error: {0}")]
    Solver(#[from] pf_solver::SolverError),

    #[error("Field error: {0}")]
    Field(#[from] pf_field::FieldError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct SolveReport<'a> {
    panel_count: usize,
    alpha_deg: Real,
    speed: Real,
    circulation: Real,
    lift_coefficient: Real,
    /// Geometry for a rendering consumer
    panels: &'a PanelArray,
    strengths: &'a VortexStrengths,
    tangential_speeds: Vec<Real>,
    pressure_coefficients: Vec<Real>,
}

fn main() -> Result<(), CliError> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            coords_path,
            panels,
            alpha,
            speed,
            output,
        } => cmd_solve(&coords_path, panels, alpha, speed, output.as_deref()),
        Commands::Field {
            coords_path,
            panels,
            alpha,
            speed,
            grid,
            window,
            output,
        } => cmd_field(&coords_path, panels, alpha, speed, grid, window, output.as_deref()),
        Commands::Section {
            code,
            samples,
            output,
        } => cmd_section(&code, samples, output.as_deref()),
    }
}

/// Load a whitespace-separated two-column coordinate file.
fn load_coords(path: &Path) -> Result<(Vec<Real>, Vec<Real>), CliError> {
    let text = fs::read_to_string(path)?;
    let mut xs = Vec::new();
    let mut zs = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut cols = line.split_whitespace();
        let bad = || CliError::CoordsFormat {
            path: path.display().to_string(),
            line: idx + 1,
        };
        let x: Real = cols.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
        let z: Real = cols.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
        if cols.next().is_some() {
            return Err(bad());
        }
        xs.push(x);
        zs.push(z);
    }
    Ok((xs, zs))
}

fn setup(
    coords_path: &Path,
    panels: usize,
    alpha: Real,
    speed: Real,
) -> Result<(PanelArray, Freestream, VortexStrengths), CliError> {
    let (x, z) = load_coords(coords_path)?;
    let array = discretize(&x, &z, panels)?;
    let freestream = Freestream::new(mps(speed), deg(alpha))?;
    let strengths = solve(&array, &freestream)?;
    Ok((array, freestream, strengths))
}

fn cmd_solve(
    coords_path: &Path,
    panels: usize,
    alpha: Real,
    speed: Real,
    output: Option<&Path>,
) -> Result<(), CliError> {
    let (array, freestream, strengths) = setup(coords_path, panels, alpha, speed)?;

    let circulation = pf_field::circulation(&array, &strengths)?;
    let cl = lift_coefficient(&array, &strengths, &freestream)?;

    match output {
        Some(path) => {
            let report = SolveReport {
                panel_count: array.len(),
                alpha_deg: alpha,
                speed,
                circulation,
                lift_coefficient: cl,
                panels: &array,
                strengths: &strengths,
                tangential_speeds: tangential_speeds(&strengths),
                pressure_coefficients: pressure_coefficients(&strengths, &freestream),
            };
            fs::write(path, serde_json::to_string_pretty(&report)?)?;
            println!("Report written to {}", path.display());
        }
        None => {
            println!("Panels:           {}", array.len());
            println!("Angle of attack:  {alpha} deg");
            println!("Circulation:      {circulation:.6}");
            println!("Lift coefficient: {cl:.4}");
        }
    }
    Ok(())
}

fn cmd_field(
    coords_path: &Path,
    panels: usize,
    alpha: Real,
    speed: Real,
    grid: usize,
    window: Window,
    output: Option<&Path>,
) -> Result<(), CliError> {
    let (array, freestream, strengths) = setup(coords_path, panels, alpha, speed)?;

    let grid = grid.max(1);
    let mut points = Vec::with_capacity((grid + 1) * (grid + 1));
    let dx = (window.x_max - window.x_min) / grid as Real;
    let dz = (window.z_max - window.z_min) / grid as Real;
    for i in 0..=grid {
        for j in 0..=grid {
            points.push(Point2::new(
                window.x_min + dx * i as Real,
                window.z_min + dz * j as Real,
            ));
        }
    }

    let velocities = velocity_field(&array, &strengths, &freestream, &points)?;

    let mut out = open_output(output)?;
    writeln!(out, "x,z,vx,vz,speed")?;
    for (p, v) in points.iter().zip(&velocities) {
        writeln!(out, "{},{},{},{},{}", p.x, p.y, v.x, v.y, v.norm())?;
    }
    Ok(())
}

fn cmd_section(code: &str, samples: usize, output: Option<&Path>) -> Result<(), CliError> {
    let (x, z) = sections::naca4(code, samples)?;
    let mut out = open_output(output)?;
    for (xi, zi) in x.iter().zip(&z) {
        writeln!(out, "{xi:.6} {zi:.6}")?;
    }
    Ok(())
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>, CliError> {
    Ok(match path {
        Some(p) => Box::new(fs::File::create(p)?),
        None => Box::new(io::stdout()),
    })
}
