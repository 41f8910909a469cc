//! TOML parameter files.
//!
//! A file maps one-to-one onto [`ParametersBuilder`]: one key per field, SI
//! base units, unknown keys rejected. Keys may be left out; the build step
//! then reports them as missing.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use jetcycle_cycles::{GasAndFlightParameters, ParameterError, ParametersBuilder};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read `{}`", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse `{}`", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Parameters(#[from] ParameterError),
}

/// The bundled design-point configuration.
#[must_use]
pub fn design_point_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("configs/design_point.toml")
}

/// Reads a builder from a TOML file without validating it.
///
/// # Errors
///
/// Returns [`ConfigError::Read`] or [`ConfigError::Parse`].
pub fn load_builder(path: impl AsRef<Path>) -> Result<ParametersBuilder, ConfigError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_owned(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_owned(),
        source,
    })
}

/// Reads and validates a parameter set from a TOML file.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the file cannot be read or parsed, or if the
/// parameters it holds are incomplete or out of range.
pub fn load_parameters(path: impl AsRef<Path>) -> Result<GasAndFlightParameters, ConfigError> {
    Ok(load_builder(path)?.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::env;

    use approx::assert_relative_eq;
    use uom::si::{ratio::ratio, thermodynamic_temperature::kelvin};

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("jetcycle-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn bundled_design_point_loads() {
        let params = load_parameters(design_point_path()).unwrap();

        assert_relative_eq!(params.flight().mach.get::<ratio>(), 0.85);
        assert_relative_eq!(params.limits().turbine_inlet.get::<kelvin>(), 1700.0);
        assert_relative_eq!(params.turbofan().bypass_ratio.into_inner().get::<ratio>(), 1.0);
    }

    #[test]
    fn missing_file() {
        let err = load_parameters("does/not/exist.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn malformed_file() {
        let path = scratch_file("malformed.toml", "mach = [0.85");
        let err = load_builder(&path).unwrap_err();
        fs::remove_file(&path).unwrap();

        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn incomplete_file_is_not_ready() {
        let path = scratch_file("partial.toml", "gamma_air = 1.4\ngamma_gas = 1.333\n");
        let err = load_parameters(&path).unwrap_err();
        fs::remove_file(&path).unwrap();

        let ConfigError::Parameters(ParameterError::NotReady { missing }) = err else {
            panic!("expected NotReady, got {err:?}");
        };
        assert_eq!(missing.first(), Some(&"cp_air"));
    }
}
