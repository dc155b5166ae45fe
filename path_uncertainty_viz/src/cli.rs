//! Command line options for `plot_path`.

use std::path::PathBuf;

use clap::Parser;
use path_uncertainty_algo::{
    PropagationMode, UncertaintyConfig, DEFAULT_CHI_SQUARE, DEFAULT_NOISE_FACTOR,
};

/// Default input file, read from the working directory
pub const DEFAULT_INPUT: &str = "path_data_rrt.csv";

#[derive(Debug, Parser)]
#[command(name = "plot_path")]
#[command(about = "Plot a path with recorded and estimated confidence ellipses")]
#[command(version)]
pub struct Cli {
    /// CSV file with columns x,y,P11,P12,P22
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Chi-square scale of the drawn ellipses
    #[arg(long, default_value_t = DEFAULT_CHI_SQUARE)]
    pub chi_square: f64,

    /// Variance added per unit distance travelled
    #[arg(long, default_value_t = DEFAULT_NOISE_FACTOR)]
    pub noise_factor: f64,

    /// Grow each estimate from the previous recorded covariance instead of
    /// the previous estimate
    #[arg(long)]
    pub anchor_to_recorded: bool,
}

impl Cli {
    pub fn config(&self) -> UncertaintyConfig {
        let propagation = if self.anchor_to_recorded {
            PropagationMode::AnchorToRecorded
        } else {
            PropagationMode::Accumulate
        };
        UncertaintyConfig::default()
            .with_chi_square(self.chi_square)
            .with_noise_factor(self.noise_factor)
            .with_propagation(propagation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["plot_path"]).unwrap();
        assert_eq!(cli.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(cli.config(), UncertaintyConfig::default());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "plot_path",
            "other.csv",
            "--chi-square",
            "5.991",
            "--noise-factor",
            "0.05",
            "--anchor-to-recorded",
        ])
        .unwrap();
        let config = cli.config();

        assert_eq!(cli.input, PathBuf::from("other.csv"));
        assert_eq!(config.chi_square, 5.991);
        assert_eq!(config.noise_factor, 0.05);
        assert_eq!(config.propagation, PropagationMode::AnchorToRecorded);
    }

    #[test]
    fn test_invalid_number() {
        assert!(Cli::try_parse_from(["plot_path", "--chi-square", "big"]).is_err());
    }
}
