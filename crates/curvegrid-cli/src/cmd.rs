//! Command handlers for the `curvegrid` CLI.
//!
//! Each handler returns the text it would print, so `main` decides whether it
//! goes to stdout or a file.

use anyhow::{Context, Result, bail};
use curvegrid::{Curve, CurveKind, GridSpec, SquareMatrix, iter::Walk, registry, render};

/// Options shared by `fill` and `demo`.
#[derive(Clone, Copy, Debug)]
pub struct FillOptions {
    /// Side length of the matrix.
    pub side: u32,
    /// Traversal order.
    pub curve: CurveKind,
    /// Value written to the first cell along the curve.
    pub start: i64,
    /// Column width of the rendered grid.
    pub width: usize,
}

/// Build a matrix numbered `start, start + 1, ...` along the curve.
fn numbered(opts: FillOptions) -> Result<SquareMatrix<i64>> {
    let mut matrix = SquareMatrix::new(opts.side, 0i64)
        .with_context(|| format!("cannot build a {0}x{0} matrix", opts.side))?;
    let Some(last) = opts
        .start
        .checked_add(i64::from(matrix.linear_size()) - 1)
    else {
        bail!(
            "start {} is too large to number {} cells",
            opts.start,
            matrix.linear_size()
        );
    };
    let written = matrix.fill_along(opts.curve, opts.start..=last);
    log::debug!("wrote {written} cells");
    Ok(matrix)
}

/// Fill a matrix along a curve and render it as a grid.
pub fn fill(opts: FillOptions) -> Result<String> {
    log::info!(
        "filling {0}x{0} matrix along {1} from {2}",
        opts.side,
        opts.curve,
        opts.start
    );
    let matrix = numbered(opts)?;
    Ok(render::grid(&matrix, opts.width))
}

/// Print `[x;y] => index => [x;y]` for every cell.
pub fn transform(side: u32, curve: CurveKind) -> Result<String> {
    let spec = GridSpec::new(side)?;
    log::info!("mapping {} cells through {curve}", spec.length());
    Ok(render::transform_table(spec, curve)?)
}

/// List the coordinates visited by the curve, one per line.
pub fn walk(side: u32, curve: CurveKind) -> Result<String> {
    let spec = GridSpec::new(side)?;
    let mut out = String::new();
    for (index, coord) in Walk::new(spec, curve).enumerate() {
        out += &format!("{index} {coord}\n");
    }
    Ok(out)
}

/// Reproduce the full walkthrough: size summary, then for each curve the
/// numbered grid and its transform table.
pub fn demo(side: u32, width: usize) -> Result<String> {
    let spec = GridSpec::new(side)?;
    let mut out = format!("n: {}\nsize: {}\n", spec.side(), spec.length());
    for curve in CurveKind::ALL {
        let matrix = numbered(FillOptions {
            side,
            curve,
            start: 0,
            width,
        })?;
        out += &format!("{} curve:\n", curve.name());
        out += &render::grid(&matrix, width);
        out += &format!("\n{} transform:\n", curve.name());
        out += &render::transform_table(spec, curve)?;
    }
    Ok(out)
}

/// Describe the registered curves.
pub fn list_curves() -> String {
    let mut out = String::from("Supported curves:\n");
    for entry in registry::REGISTRY {
        out += &format!(
            "- {} ({}): {}\n",
            entry.key, entry.display, entry.constraints
        );
    }
    out
}
