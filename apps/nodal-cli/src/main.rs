use clap::{Args, Parser, Subcommand, ValueEnum};
use nodal_app::{
    AnalysisOptions, AnalysisReport, AnalysisResult, analyze, analyze_batch, batch_to_json,
    curves_to_csv, curves_to_json, load_well_file, sample_curves, select_well, write_template,
};
use nodal_well::{AnalysisSettings, WellParameters, validate_parameters};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "nodal-cli")]
#[command(about = "Nodal analysis - well operating point from inflow and outflow performance", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the operating point of a well
    Analyze {
        #[command(flatten)]
        source: WellSource,
        /// Output format
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
        /// Treat an operating rate above qmax as an error
        #[arg(long)]
        strict: bool,
    },
    /// Export sampled inflow and outflow curves
    Curves {
        #[command(flatten)]
        source: WellSource,
        /// Number of samples on [0, qmax]
        #[arg(long)]
        samples: Option<usize>,
        /// Output format
        #[arg(long, value_enum, default_value_t = CurveFormat::Csv)]
        format: CurveFormat,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a well file
    Validate {
        /// Path to the well file (.yaml, .yml or .json)
        well_path: PathBuf,
    },
    /// Analyse every well in a file
    Batch {
        /// Path to the well file (.yaml, .yml or .json)
        well_path: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },
    /// Write a well file pre-filled with default parameters
    Template {
        /// Destination path (.yaml, .yml or .json)
        output: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum CurveFormat {
    Csv,
    Json,
}

/// Where the well parameters come from, plus per-field overrides.
#[derive(Args)]
struct WellSource {
    /// Path to a well file; defaults are used when omitted
    well_path: Option<PathBuf>,
    /// Well name within the file (defaults to the first well)
    #[arg(long)]
    well: Option<String>,
    #[command(flatten)]
    overrides: ParamOverrides,
}

#[derive(Args)]
struct ParamOverrides {
    /// Static reservoir pressure (psi)
    #[arg(long)]
    reservoir_pressure: Option<f64>,
    /// Absolute open-flow potential (BBL/D)
    #[arg(long)]
    max_flow_rate: Option<f64>,
    /// Bottomhole pressure at qmax (psi)
    #[arg(long)]
    min_flowing_pressure: Option<f64>,
    /// Tubing inner diameter (in)
    #[arg(long)]
    tubing_diameter: Option<f64>,
    /// Choke bean size (64ths of an inch)
    #[arg(long)]
    choke_size: Option<f64>,
    /// Fluid density (lb/ft3)
    #[arg(long)]
    fluid_density: Option<f64>,
    /// Fluid viscosity (cp)
    #[arg(long)]
    viscosity: Option<f64>,
    /// Gas-oil ratio
    #[arg(long)]
    gor: Option<f64>,
    /// Measured depth (ft)
    #[arg(long)]
    well_depth: Option<f64>,
    /// Required wellhead pressure (psi)
    #[arg(long)]
    surface_pressure: Option<f64>,
}

impl ParamOverrides {
    fn apply(&self, base: WellParameters) -> WellParameters {
        WellParameters {
            reservoir_pressure: self.reservoir_pressure.unwrap_or(base.reservoir_pressure),
            max_flow_rate: self.max_flow_rate.unwrap_or(base.max_flow_rate),
            min_flowing_pressure: self
                .min_flowing_pressure
                .unwrap_or(base.min_flowing_pressure),
            tubing_diameter_in: self.tubing_diameter.unwrap_or(base.tubing_diameter_in),
            choke_size: self.choke_size.unwrap_or(base.choke_size),
            fluid_density: self.fluid_density.unwrap_or(base.fluid_density),
            viscosity: self.viscosity.unwrap_or(base.viscosity),
            gor: self.gor.unwrap_or(base.gor),
            well_depth: self.well_depth.unwrap_or(base.well_depth),
            surface_pressure: self.surface_pressure.unwrap_or(base.surface_pressure),
        }
    }
}

impl WellSource {
    /// Resolve parameters and settings, then validate the merged result.
    fn resolve(&self) -> AnalysisResult<(String, WellParameters, AnalysisSettings)> {
        let (name, base, settings) = match &self.well_path {
            Some(path) => {
                let file = load_well_file(path)?;
                let well = select_well(&file, self.well.as_deref())?;
                (well.name.clone(), well.params, file.settings)
            }
            None => (
                "default".to_string(),
                WellParameters::default(),
                AnalysisSettings::default(),
            ),
        };
        let params = self.overrides.apply(base);
        validate_parameters(&params)?;
        tracing::debug!(well = %name, ?params, "resolved well parameters");
        Ok((name, params, settings))
    }
}

fn main() -> AnalysisResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Analyze {
            source,
            format,
            strict,
        } => cmd_analyze(&source, format, strict),
        Commands::Curves {
            source,
            samples,
            format,
            output,
        } => cmd_curves(&source, samples, format, output.as_deref()),
        Commands::Validate { well_path } => cmd_validate(&well_path),
        Commands::Batch { well_path, format } => cmd_batch(&well_path, format),
        Commands::Template { output } => cmd_template(&output),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_analyze(source: &WellSource, format: ReportFormat, strict: bool) -> AnalysisResult<()> {
    let (name, params, settings) = source.resolve()?;
    let options = AnalysisOptions::from_settings(&settings);

    let mut report = analyze(&params, &options)?;
    if strict {
        report = report.into_in_range()?;
    }

    match format {
        ReportFormat::Text => {
            println!("Well: {}", name);
            print!("{}", report.summary());
        }
        ReportFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}

fn cmd_curves(
    source: &WellSource,
    samples: Option<usize>,
    format: CurveFormat,
    output: Option<&Path>,
) -> AnalysisResult<()> {
    let (_name, params, settings) = source.resolve()?;
    let sample_count = samples.unwrap_or(settings.sample_count);
    let (inflow, outflow) = sample_curves(&params, sample_count)?;

    let content = match format {
        CurveFormat::Csv => curves_to_csv(&inflow, &outflow),
        CurveFormat::Json => format!("{}\n", curves_to_json(&inflow, &outflow)?),
    };

    if let Some(path) = output {
        std::fs::write(path, content)?;
        println!("✓ Exported {} samples to {}", inflow.len(), path.display());
    } else {
        print!("{}", content);
    }
    Ok(())
}

fn cmd_validate(well_path: &Path) -> AnalysisResult<()> {
    println!("Validating well file: {}", well_path.display());
    let file = load_well_file(well_path)?;
    println!("✓ Well file is valid ({} wells)", file.wells.len());
    for well in &file.wells {
        println!(
            "  {} - Pr {} psi, qmax {} BBL/D, depth {} ft",
            well.name,
            well.params.reservoir_pressure,
            well.params.max_flow_rate,
            well.params.well_depth
        );
    }
    Ok(())
}

fn cmd_batch(well_path: &Path, format: ReportFormat) -> AnalysisResult<()> {
    let file = load_well_file(well_path)?;
    let options = AnalysisOptions::from_settings(&file.settings);
    let outcomes = analyze_batch(&file.wells, &options);

    match format {
        ReportFormat::Text => {
            println!("Batch analysis: {} wells", outcomes.len());
            for outcome in &outcomes {
                match &outcome.result {
                    Ok(report) => println!("  {:<16} {}", outcome.name, one_line(report)),
                    Err(err) => println!("  {:<16} FAILED [{}] {}", outcome.name, err.kind(), err),
                }
            }
        }
        ReportFormat::Json => println!("{}", batch_to_json(&outcomes)?),
    }
    Ok(())
}

fn one_line(report: &AnalysisReport) -> String {
    format!(
        "q = {:>8.1} BBL/D  Pwf = {:>7.1} psi  {:?}",
        report.operating_point.flow_rate, report.operating_point.pressure, report.status
    )
}

fn cmd_template(output: &Path) -> AnalysisResult<()> {
    write_template(output)?;
    println!("✓ Wrote template to {}", output.display());
    Ok(())
}
