// main.rs
//
// Command line front end: unfold a cone and write its flat pattern as SVG or DXF.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use conus::float_types::Real;
use conus::io::IoError;
use conus::{ConeConfig, ConeError, LengthUnit, Rgb};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

/// Unfold a cone or cone frustum into a flat sheet cutting pattern
#[derive(Parser, Debug)]
#[command(name = "conus", version, about)]
struct Cli {
    /// The diameter of the cone's base
    #[arg(short = 'b', long = "dia-base")]
    dia_base: Option<Real>,

    /// The diameter of the cone's cut (0 if the cone is not cut)
    #[arg(short = 'c', long = "dia-cut")]
    dia_cut: Option<Real>,

    /// The height of the (cut) cone
    #[arg(short = 'l', long = "height-cone")]
    height_cone: Option<Real>,

    /// The unit the cone values are given in: mm or in
    #[arg(short = 'u', long)]
    units: Option<LengthUnit>,

    /// The line thickness in the given unit; keep it small for laser cutting
    #[arg(short = 'w', long = "stroke-width")]
    stroke_width: Option<Real>,

    /// The line colour: #RRGGBB or a host RGBA integer (default 896839168, blue)
    #[arg(short = 'f', long = "stroke-colour", allow_hyphen_values = true)]
    stroke_colour: Option<Rgb>,

    /// Draw dimension lines and labels for all calculated values
    #[arg(short = 'd', long)]
    verbose: bool,

    /// JSON configuration file; command line values take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output file, standard output when omitted
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// Print the calculated layout as JSON instead of drawing it
    #[arg(long)]
    report: bool,

    /// Log filter, e.g. "info" or "conus=debug" (defaults to RUST_LOG, then "warn")
    #[arg(long = "log-level")]
    log_level: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Svg,
    Dxf,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Cone(#[from] ConeError),
    #[error(transparent)]
    Io(#[from] IoError),
    #[error("could not serialize report: {0}")]
    Report(#[from] serde_json::Error),
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(IoError::from(value))
    }
}

impl Cli {
    /// Defaults, then the configuration file, then command line flags.
    fn resolve_config(&self) -> Result<ConeConfig, ConeError> {
        let mut config = match &self.config {
            Some(path) => ConeConfig::load(path)?,
            None => ConeConfig::default(),
        };
        if let Some(v) = self.dia_base {
            config.cone.base_diameter = v;
        }
        if let Some(v) = self.dia_cut {
            config.cone.cut_diameter = v;
        }
        if let Some(v) = self.height_cone {
            config.cone.height = v;
        }
        if let Some(v) = self.units {
            config.render.unit = v;
        }
        if let Some(v) = self.stroke_width {
            config.render.stroke_width = v;
        }
        if let Some(v) = self.stroke_colour {
            config.render.stroke = v;
        }
        config.render.verbose |= self.verbose;
        Ok(config)
    }
}

fn emit(bytes: &[u8], output: Option<&PathBuf>) -> Result<(), CliError> {
    match output {
        Some(path) => {
            std::fs::write(path, bytes)?;
            info!(path = %path.display(), bytes = bytes.len(), "wrote pattern");
        },
        None => std::io::stdout().write_all(bytes)?,
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = cli.resolve_config()?;
    config.validate()?;
    debug!(?config, "resolved configuration");

    let layout = config.layout()?;
    if config.render.verbose {
        info!("\n{layout}");
    }

    if cli.report {
        let mut json = serde_json::to_string_pretty(&layout)?;
        json.push('\n');
        return emit(json.as_bytes(), cli.output.as_ref());
    }

    match cli.format {
        Format::Svg => {
            #[cfg(feature = "svg-io")]
            {
                let svg = config.pattern()?.to_svg_string();
                emit(svg.as_bytes(), cli.output.as_ref())
            }
            #[cfg(not(feature = "svg-io"))]
            {
                Err(IoError::Unsupported("svg (built without svg-io)".into()).into())
            }
        },
        Format::Dxf => {
            #[cfg(feature = "dxf-io")]
            {
                let dxf = layout.to_dxf(config.render.unit)?;
                emit(&dxf, cli.output.as_ref())
            }
            #[cfg(not(feature = "dxf-io"))]
            {
                Err(IoError::Unsupported("dxf (built without dxf-io)".into()).into())
            }
        },
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match &cli.log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    finish(run(&cli), &mut std::io::stderr())
}

/// Print a failure once to `sink`; the tracing event stays at debug level so
/// the default stderr subscriber does not repeat it.
fn finish(result: Result<(), CliError>, sink: &mut impl Write) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "conus failed");
            let _ = writeln!(sink, "error: {e}");
            ExitCode::FAILURE
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_host_defaults() {
        let cli = Cli::parse_from(["conus"]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config, ConeConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "conus", "-b", "12", "-c", "0", "-l", "8", "-u", "in", "-f", "-16776961", "-d",
        ]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.cone.base_diameter, 12.0);
        assert_eq!(config.cone.cut_diameter, 0.0);
        assert_eq!(config.cone.height, 8.0);
        assert_eq!(config.render.unit, LengthUnit::Inch);
        assert_eq!(config.render.stroke, Rgb::new(0xff, 0, 0));
        assert!(config.render.verbose);
    }

    #[test]
    fn failure_is_reported_on_one_line() {
        let cli = Cli::parse_from(["conus", "-b", "100", "-c", "100", "--report"]);
        let mut sink = Vec::new();
        assert_eq!(finish(run(&cli), &mut sink), ExitCode::FAILURE);

        let text = String::from_utf8(sink).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("error: "));
        assert!(text.contains("base diameter must exceed cut diameter"));
    }

    #[test]
    fn success_prints_nothing_to_sink() {
        let mut sink = Vec::new();
        assert_eq!(finish(Ok(()), &mut sink), ExitCode::SUCCESS);
        assert!(sink.is_empty());
    }
}
