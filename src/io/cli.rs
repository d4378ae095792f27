//! Command-line driver comparing the spline under tension against a sine wave

use crate::io::configuration::{
    DEFAULT_BOUNDARY_MODE, DEFAULT_QUERIES, DEFAULT_SAMPLES, DEFAULT_SEED, DEFAULT_SPACING,
    DEFAULT_TENSION, FIRST_QUERY_OFFSET, INTERPOLATED_HEADER, QUERY_HEADER, QUERY_OFFSET,
    REFERENCE_HEADER,
};
use crate::io::error::{Result, SplineError, invalid_parameter};
use crate::io::table::write_columns;
use crate::spline::boundary::BoundaryMode;
use crate::spline::tension::SplineUnderTension;
use clap::Parser;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "spline-demo")]
#[command(
    author,
    version,
    about = "Fit a spline under tension to a sampled sine wave and print comparison rows"
)]
/// Command-line arguments for the demonstration
pub struct Cli {
    /// Number of samples of sin(x)
    #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLES)]
    pub samples: usize,

    /// Spacing between sample abscissae
    #[arg(short, long, default_value_t = DEFAULT_SPACING)]
    pub spacing: f64,

    /// Tension (0 gives an ordinary cubic spline)
    #[arg(short, long, default_value_t = DEFAULT_TENSION, allow_negative_numbers = true)]
    pub tension: f64,

    /// Boundary mode: 0 both slopes given, 1 left given, 2 right given, 3 neither
    #[arg(short, long, default_value_t = DEFAULT_BOUNDARY_MODE)]
    pub mode: BoundaryMode,

    /// Slope at the first sample (modes 0 and 1)
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub left_slope: f64,

    /// Slope at the last sample (modes 0 and 2)
    #[arg(long, default_value_t = -1.0, allow_negative_numbers = true)]
    pub right_slope: f64,

    /// Number of query points
    #[arg(long, default_value_t = DEFAULT_QUERIES)]
    pub queries: usize,

    /// Amplitude of uniform noise added to the samples
    #[arg(long, default_value_t = 0.0)]
    pub noise: f64,

    /// Random seed for reproducible noise
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Write the rows to this file instead of standard output
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress status messages
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if status messages should be displayed
    pub const fn should_report(&self) -> bool {
        !self.quiet
    }
}

/// The three rows printed by the demonstration
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonTable {
    /// Spline values at the query points
    pub interpolated: Vec<f64>,
    /// `sin` at the query points
    pub reference: Vec<f64>,
    /// Query abscissae
    pub queries: Vec<f64>,
}

impl ComparisonTable {
    /// Largest absolute difference between interpolated and reference values
    pub fn max_error(&self) -> f64 {
        self.interpolated
            .iter()
            .zip(&self.reference)
            .map(|(interpolated, reference)| (interpolated - reference).abs())
            .fold(0.0, f64::max)
    }

    /// Write the three rows in interpolated, reference, query order
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        write_columns(writer, INTERPOLATED_HEADER, &self.interpolated)?;
        write_columns(writer, REFERENCE_HEADER, &self.reference)?;
        write_columns(writer, QUERY_HEADER, &self.queries)
    }
}

/// Builds the sample data, fits it and writes the comparison rows
pub struct DemoRunner {
    cli: Cli,
}

impl DemoRunner {
    /// Create a new runner with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Fit, evaluate and write the comparison rows
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid, the fit fails or the
    /// output cannot be written
    // Allow print for user feedback on the fit
    #[allow(clippy::print_stderr)]
    pub fn run(&self) -> Result<()> {
        let start_time = Instant::now();
        let spline = self.fit()?;
        let table = self.compare(&spline);

        if self.cli.should_report() {
            eprintln!(
                "Fitted {} samples (scaled tension {:.6}, boundary mode {}) in {:?}",
                spline.x_values().len(),
                spline.tension(),
                spline.boundary_mode(),
                start_time.elapsed()
            );
            eprintln!(
                "Maximum deviation from sin(x) over {} queries: {:.3e}",
                table.queries.len(),
                table.max_error()
            );
        }

        match &self.cli.output {
            Some(path) => {
                let file = File::create(path).map_err(|source| SplineError::FileSystem {
                    path: path.clone(),
                    operation: "create",
                    source,
                })?;
                let mut writer = BufWriter::new(file);
                table
                    .write_to(&mut writer)
                    .and_then(|()| writer.flush())
                    .map_err(|source| SplineError::FileSystem {
                        path: path.clone(),
                        operation: "write",
                        source,
                    })
            }
            None => {
                let stdout = std::io::stdout();
                let mut writer = BufWriter::new(stdout.lock());
                table.write_to(&mut writer)?;
                writer.flush()?;
                Ok(())
            }
        }
    }

    /// Sample `sin(x)` and fit it with the configured tension and mode
    ///
    /// # Errors
    ///
    /// Returns an error if the noise amplitude is invalid or the fit fails
    pub fn fit(&self) -> Result<SplineUnderTension> {
        let (x_values, y_values) = self.samples()?;
        SplineUnderTension::new(
            self.cli.tension,
            &x_values,
            &y_values,
            self.cli.left_slope,
            self.cli.right_slope,
            self.cli.mode,
        )
    }

    /// Sample abscissae and (optionally noisy) ordinates
    ///
    /// # Errors
    ///
    /// Returns an error if the noise amplitude is negative or not finite
    pub fn samples(&self) -> Result<(Vec<f64>, Vec<f64>)> {
        let noise = self.cli.noise;
        if !noise.is_finite() || noise < 0.0 {
            return Err(invalid_parameter(
                "noise",
                &noise,
                &"noise amplitude must be finite and non-negative",
            ));
        }

        let x_values: Vec<f64> = (0..self.cli.samples)
            .map(|i| i as f64 * self.cli.spacing)
            .collect();

        let mut rng = StdRng::seed_from_u64(self.cli.seed);
        let y_values = x_values
            .iter()
            .map(|x| {
                if noise > 0.0 {
                    x.sin() + rng.random_range(-noise..=noise)
                } else {
                    x.sin()
                }
            })
            .collect();

        Ok((x_values, y_values))
    }

    /// Evaluate `spline` against `sin` at the configured query points
    pub fn compare(&self, spline: &SplineUnderTension) -> ComparisonTable {
        let queries: Vec<f64> = (0..self.cli.queries)
            .map(|i| {
                let offset = if i == 0 {
                    FIRST_QUERY_OFFSET
                } else {
                    QUERY_OFFSET
                };
                (i as f64).mul_add(self.cli.spacing, offset)
            })
            .collect();

        ComparisonTable {
            interpolated: spline.evaluate_many(&queries),
            reference: queries.iter().map(|x| x.sin()).collect(),
            queries,
        }
    }
}
