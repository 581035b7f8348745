//! CLI command implementations

pub mod matrix;
pub mod simulate;

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;
use xform_math::Mat4;

/// Installs the global `tracing` subscriber, writing to stderr.
///
/// Filter precedence: `RUST_LOG`, then `XFORM_LOG`, then `info`
/// (`debug` with `--verbose`).
pub fn init_logging(verbose: bool) -> Result<()> {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("XFORM_LOG"))
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install logger: {e}"))
}

/// Formats a matrix as its 16 column-major elements.
pub fn format_flat(m: &Mat4) -> String {
    m.as_slice()
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use xform_math::Vec3;

    #[test]
    fn test_format_flat_is_column_major() {
        let m = Mat4::translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(
            format_flat(&m),
            "1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 1, 2, 3, 1"
        );
    }
}
