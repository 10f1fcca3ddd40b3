use crate::utils::error::Result;
use crate::utils::validation::{validate_finite, validate_range, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const MIN_MARK: f64 = 0.0;
pub const MAX_MARK: f64 = 100.0;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "mark-predictor")]
#[command(about = "Rule-based pass/fail prediction from three subject marks")]
pub struct CliConfig {
    #[arg(long, help = "G1 - Subject 1 mark")]
    pub g1: f64,

    #[arg(long, help = "G2 - Subject 2 mark")]
    pub g2: f64,

    #[arg(long, help = "G3 - Subject 3 mark")]
    pub g3: f64,

    #[arg(long, help = "Emit the result and suggestions as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    // The evaluator accepts anything numeric; the 0..=100 range is a
    // constraint of the input surface and is enforced here.
    fn validate(&self) -> Result<()> {
        for (field, mark) in [("g1", self.g1), ("g2", self.g2), ("g3", self.g3)] {
            validate_finite(field, mark)?;
            validate_range(field, mark, MIN_MARK, MAX_MARK)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(g1: f64, g2: f64, g3: f64) -> CliConfig {
        CliConfig {
            g1,
            g2,
            g3,
            json: false,
            verbose: false,
        }
    }

    #[test]
    fn test_marks_in_range_validate() {
        assert!(config(0.0, 40.0, 100.0).validate().is_ok());
    }

    #[test]
    fn test_out_of_range_mark_is_rejected() {
        assert!(config(-5.0, 40.0, 40.0).validate().is_err());
        assert!(config(40.0, 101.0, 40.0).validate().is_err());
    }

    #[test]
    fn test_non_finite_mark_is_rejected() {
        assert!(config(f64::NAN, 40.0, 40.0).validate().is_err());
    }
}
