//! Command-line front end
//!
//! Options mirror the case settings in kebab-case. Values given on the
//! command line override those read from the settings file.

use anyhow::{bail, Context};
use hexcase_camtools::{BatteryCaseMaker, CamToolResult};
use hexcase_settings::CaseSettings;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use tracing::info;

/// Options that map onto a case setting and take a value
pub const SETTING_OPTIONS: [&str; 18] = [
    "dimension",
    "height",
    "hole",
    "kerf",
    "corner-length",
    "stretch",
    "horizontal-finger",
    "vertical-finger",
    "padding",
    "outside-padding",
    "extra-height",
    "thickness",
    "lid",
    "tooth",
    "flex-width",
    "flex-cut",
    "flex-gap",
    "plug-play",
];

pub const USAGE: &str = "\
Generate a hexagonal battery case as an SVG cutting layout

Usage: hexcase [OPTIONS]

Most options have sensibly tuned defaults, so you'll probably only need
to specify --dimension, --hole, --thickness, and possibly --kerf.

Case options:
      --dimension <N>            Grid dimension, odd [default: 5]
      --height <MM>              Height of battery [default: from preset]
      --hole <MM|PRESET>         Hole diameter or AAA, AA, C, D [default: AA]
      --kerf <MM>                Kerf [default: 0.1]
      --corner-length <T>        Length of stretch corner in material thicknesses [default: 4]
      --stretch <F>              Reduction factor of stretch material [default: 1.05]
      --horizontal-finger <MM>   Width of horizontal fingers [default: 5]
      --vertical-finger <MM>     Width of vertical fingers [default: 15]
      --padding <MM>             Padding around holes [default: 1.5]
      --outside-padding <MM>     Extra padding between holes and wall [default: 4]
      --extra-height <MM>        Extra vertical space [default: 2]
      --thickness <MM>           Thickness of material [default: 3]
      --lid <MM>                 Extra play for the lid [default: 0.2]
      --tooth <MM>               Rounding of the wall teeth [default: 0.8]
      --flex-width <T>           Spacing between flex lines in thicknesses [default: 0.5]
      --flex-cut <T>             Length of flex cuts in thicknesses [default: 5]
      --flex-gap <T>             Gap between flex cuts in thicknesses [default: 1]
      --plug-play <MM>           How much smaller to make the plug than the hole [default: 0.8]
      --verbose                  Print computed parameter values and debug logs

Files:
      --config <FILE>            Read settings from a .toml or .json file
      --save-config <FILE>       Save the effective settings to a .toml or .json file
  -o, --output <FILE>            Write the drawing to FILE instead of stdout

  -h, --help                     Print help
  -V, --version                  Print version
";

/// What the binary was asked to do
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Generate(CliOptions),
    Help,
    Version,
}

/// Parsed options for a generation run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOptions {
    pub config: Option<PathBuf>,
    pub save_config: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub verbose: bool,
    /// Setting overrides in command-line order
    pub overrides: Vec<(String, String)>,
}

/// Parse the arguments following the program name
pub fn parse_args<I, S>(args: I) -> anyhow::Result<Command>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut options = CliOptions::default();
    let mut args = args.into_iter().map(Into::<String>::into);

    while let Some(arg) = args.next() {
        let (name, inline) = match arg.split_once('=') {
            Some((name, value)) if name.starts_with("--") => (name.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };

        match name.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "--verbose" => {
                options.verbose = true;
                continue;
            }
            _ => {}
        }

        let mut value = || -> anyhow::Result<String> {
            match inline.clone().or_else(|| args.next()) {
                Some(value) => Ok(value),
                None => bail!("Option {} requires a value", name),
            }
        };

        match name.as_str() {
            "--config" => options.config = Some(PathBuf::from(value()?)),
            "--save-config" => options.save_config = Some(PathBuf::from(value()?)),
            "-o" | "--output" => options.output = Some(PathBuf::from(value()?)),
            _ => match name.strip_prefix("--") {
                Some(key) if SETTING_OPTIONS.contains(&key) => {
                    let value = value()?;
                    options.overrides.push((key.to_string(), value));
                }
                _ => bail!("Unknown option '{}'\n\n{}", arg, USAGE),
            },
        }
    }

    Ok(Command::Generate(options))
}

/// Build the effective settings: file first, then command-line overrides
pub fn load_settings(options: &CliOptions) -> anyhow::Result<CaseSettings> {
    let file = options.config.clone().or_else(|| {
        CaseSettings::default_path().filter(|path| path.exists())
    });

    let mut settings = match file {
        Some(path) => CaseSettings::load_from_file(&path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => CaseSettings::new(),
    };

    for (key, value) in &options.overrides {
        settings
            .set(key, value)
            .with_context(|| format!("Invalid value for --{}", key))?;
    }

    Ok(settings)
}

/// Whether debug logs and the geometry dump are wanted
///
/// `--verbose` is a run-only switch and is never saved; a settings file may
/// still ask for verbose output on its own.
pub fn is_verbose(options: &CliOptions, settings: &CaseSettings) -> bool {
    options.verbose || settings.verbose
}

/// Generate the drawing described by `options`
pub fn run(options: &CliOptions) -> anyhow::Result<()> {
    let settings = load_settings(options)?;
    generate(options, &settings)
}

/// Generate the drawing for already loaded `settings`
///
/// Nothing is written unless the geometry solves.
pub fn generate(options: &CliOptions, settings: &CaseSettings) -> anyhow::Result<()> {
    let params = settings
        .resolve()
        .context("Invalid case configuration")?;
    let maker = BatteryCaseMaker::new(params).context("Cannot lay out the case")?;

    if let Some(path) = &options.save_config {
        settings
            .save_to_file(path)
            .with_context(|| format!("Failed to save settings to {}", path.display()))?;
        info!("Saved settings to {}", path.display());
    }

    if is_verbose(options, settings) {
        eprintln!("{}", serde_json::to_string_pretty(maker.geometry())?);
    }

    let document = maker.generate();
    match &options.output {
        Some(path) => {
            write_file(path, |writer| document.write_to(writer))?;
            info!("Wrote case drawing to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            document
                .write_to(&mut lock)
                .context("Failed to write drawing to stdout")?;
        }
    }

    Ok(())
}

fn write_file<F>(path: &Path, write: F) -> anyhow::Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> CamToolResult<()>,
{
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write(&mut writer).with_context(|| format!("Failed to write {}", path.display()))
}
