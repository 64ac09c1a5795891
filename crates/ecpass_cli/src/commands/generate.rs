//! Generate command implementation
//!
//! Turns a memorable password into a strong one, prints it, and optionally
//! saves the password record.

use std::io::Write;

use ecpass_core::{GeneratorConfig, PasswordGenerator, StrongPassword};
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::record::write_record;
use crate::{CliError, Result};

/// Run the generate command
///
/// The configured length bounds are checked before the core's own
/// precondition. The strong password is written to `out` followed by a
/// newline.
pub fn run<W: Write>(
    config: &CliConfig,
    memorable: &str,
    length: usize,
    out: &mut W,
) -> Result<StrongPassword> {
    if !config.length_in_bounds(length) {
        return Err(CliError::invalid_argument(format!(
            "Length must be between {} and {} (got {})",
            config.min_length, config.max_length, length
        )));
    }

    debug!(length, policy = %config.numeric_policy, "running generate command");
    let generator =
        PasswordGenerator::with_config(GeneratorConfig::new(config.numeric_policy));
    let strong = generator.generate(memorable, length)?;

    writeln!(out, "{}", strong)?;

    if let Some(path) = &config.output_file {
        write_record(path, memorable, strong.as_str())?;
    }

    info!(length = strong.len(), "strong password generated");
    Ok(strong)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecpass_core::GeneratorError;

    #[test]
    fn test_generate_prints_password() {
        let mut out = Vec::new();
        let strong = run(&CliConfig::default(), "abc", 8, &mut out).unwrap();
        assert_eq!(strong.as_str(), "]U($,!QY");
        assert_eq!(String::from_utf8(out).unwrap(), "]U($,!QY\n");
    }

    #[test]
    fn test_generate_enforces_bounds() {
        let config = CliConfig::default();
        let mut out = Vec::new();

        let err = run(&config, "abc", 7, &mut out).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));

        let err = run(&config, "abc", 129, &mut out).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_generate_surfaces_core_validation() {
        let config = CliConfig {
            min_length: 1,
            ..CliConfig::default()
        };
        let mut out = Vec::new();
        let err = run(&config, "password123", 5, &mut out).unwrap_err();
        assert!(matches!(
            err,
            CliError::Generation(GeneratorError::Validation(_))
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_generate_writes_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ec_strong_password.txt");
        let config = CliConfig {
            output_file: Some(path.clone()),
            ..CliConfig::default()
        };
        let mut out = Vec::new();
        run(&config, "hunter2", 32, &mut out).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Memorable password: hunter2\nStrong password: ]zFAliZDt!9aWg1)TOL4#7d<&Qr,w.Io\n"
        );
    }
}
