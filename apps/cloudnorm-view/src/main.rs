//! cloudnorm - Robust point cloud normalization viewer
//!
//! Loads whitespace-separated XYZ triples, centers them on the per-axis
//! median, scales by the widest 5th-95th percentile range and shows the
//! result in the terminal.

mod viewer;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use cloudnorm_core::{
    exit_code, Color, CoreError, CoreResult, LogSink, Pipeline, PipelineConfig, PointSink,
};
use tracing_subscriber::EnvFilter;

use viewer::TerminalViewer;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File of whitespace-separated x y z triples
    #[arg(default_value = "optimized_points.txt")]
    input: PathBuf,

    /// TOML or JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Lower percentile for the robust extent, in [0, 1]
    #[arg(long)]
    lower: Option<f64>,

    /// Upper percentile for the robust extent, in [0, 1]
    #[arg(long)]
    upper: Option<f64>,

    /// Point color as #RRGGBB or r,g,b
    #[arg(long)]
    color: Option<Color>,

    /// Leave points unpainted
    #[arg(long, conflicts_with = "color")]
    no_color: bool,

    /// Skip the viewer and only log the result
    #[arg(long)]
    headless: bool,

    /// Print the run report as JSON on stdout
    #[arg(long)]
    json: bool,
}

impl Args {
    fn pipeline_config(&self) -> CoreResult<PipelineConfig> {
        let mut config = match &self.config {
            Some(path) => PipelineConfig::load(path)?,
            None => PipelineConfig::default(),
        };

        if let Some(lower) = self.lower {
            config.robust.lower_percentile = lower;
        }
        if let Some(upper) = self.upper {
            config.robust.upper_percentile = upper;
        }
        if let Some(color) = self.color {
            config.color = color;
            config.paint = true;
        }
        if self.no_color {
            config.paint = false;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays clean for --json and the viewer
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::from(exit_code::SUCCESS),
        Err(err) => {
            match &err {
                CoreError::EmptyInput => {
                    tracing::error!("No points loaded. Check the input file.")
                }
                other => tracing::error!("{}", other),
            }
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(args: &Args) -> CoreResult<()> {
    let config = args.pipeline_config()?;
    let pipeline = Pipeline::new(config);

    let mut sink: Box<dyn PointSink> = if args.headless {
        Box::new(LogSink)
    } else {
        Box::new(TerminalViewer::new(args.input.display().to_string()))
    };

    let report = pipeline.run_path(&args.input, sink.as_mut())?;

    if args.json {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| CoreError::Display(e.to_string()))?;
        println!("{}", json);
    }

    Ok(())
}
