use std::f64::consts::PI;

use clap::Parser;
use nalgebra::Vector3;
use quaternions::{Quaternion, init_logger_with_level};
use tracing::{Level, debug, error, info};

#[derive(Parser)]
#[command(name = "quaternion_demo")]
#[command(about = "Quaternion multiplication, division and rotation walkthrough")]
struct Args {
    /// Rotation angle in radians
    #[arg(long, default_value_t = 2.0 * PI / 3.0)]
    angle: f64,

    /// Rotation axis as "x,y,z" (normalized before use)
    #[arg(long, default_value = "1,1,1", value_parser = parse_triple)]
    axis: [f64; 3],

    /// Vector to rotate as "x,y,z"
    #[arg(long, default_value = "1,0,0", value_parser = parse_triple)]
    vector: [f64; 3],

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn parse_triple(s: &str) -> Result<[f64; 3], String> {
    let values = s
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid number in '{s}': {e}"))?;

    match values.as_slice() {
        [x, y, z] => Ok([*x, *y, *z]),
        _ => Err(format!("expected 3 comma-separated values, got {}", values.len())),
    }
}

fn fmt_vec(v: &Vector3<f64>) -> String {
    format!("({:.8}, {:.8}, {:.8})", v.x, v.y, v.z)
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    // Quaternion multiplication is not commutative
    let x = Quaternion::new(3.0, 1.0, -2.0, 1.0);
    let y = Quaternion::new(2.0, -1.0, 2.0, 3.0);
    info!("Quaternion multiplication:");
    info!("  x = {}", x);
    info!("  y = {}", y);
    info!("  x * y = {}", x * y);
    debug!("  y * x = {}", y * x);

    info!("Quaternion division is accomplished by multiplication with the inverse:");
    info!("  x * y^-1 = {}", x.divide(&y)?);

    let axis = Vector3::from(args.axis);
    let v = Vector3::from(args.vector);
    let q = Quaternion::from_axis_angle(&axis, args.angle)?;
    debug!("Rotation quaternion q = {} (norm {})", q, q.norm());

    let v_rotated = q.rotate_vector(&v);
    info!("Rotation of a vector in a coordinate frame:");
    info!("  before rotation: {}", fmt_vec(&v));
    info!(
        "  after rotation of {:.8} rad about {}: {}",
        args.angle,
        fmt_vec(&axis),
        fmt_vec(&v_rotated)
    );

    let v_frame_rotated = q.rotate_frame(&v_rotated);
    info!("Rotation of the coordinate frame:");
    info!("  before rotation: {}", fmt_vec(&v_rotated));
    info!(
        "  after rotating the frame {:.8} rad about {}: {}",
        args.angle,
        fmt_vec(&axis),
        fmt_vec(&v_frame_rotated)
    );

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    init_logger_with_level(level);

    if let Err(e) = run(&args) {
        error!("Demo failed: {}", e);
        return Err(e);
    }

    Ok(())
}
