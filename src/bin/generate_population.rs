use std::path::PathBuf;

use plotboard::data::read_json_file;
use plotboard::generator::{GeneratorConfig, generate_population_file};
use plotboard::telemetry::init_default_tracing;

const DEFAULT_INPUT: &str = "assets/departements.geojson.json";
const DEFAULT_OUTPUT: &str = "assets/populationMain.json";
const USAGE: &str =
    "usage: generate_population [--input <geojson>] [--output <json>] [--config <json>]";

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    output: PathBuf,
    config: Option<PathBuf>,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args(std::env::args().skip(1))?;
    let config = match &args.config {
        Some(path) => read_json_file::<GeneratorConfig>(path).map_err(|err| err.to_string())?,
        None => GeneratorConfig::default(),
    };

    let written = generate_population_file(
        &args.input,
        &args.output,
        &config,
        &mut rand::thread_rng(),
    )
    .map_err(|err| err.to_string())?;
    println!("wrote {written} records to {}", args.output.display());
    Ok(())
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<CliArgs, String> {
    let mut input = PathBuf::from(DEFAULT_INPUT);
    let mut output = PathBuf::from(DEFAULT_OUTPUT);
    let mut config = None::<PathBuf>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = PathBuf::from(value);
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = PathBuf::from(value);
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config = Some(PathBuf::from(value));
            }
            "-h" | "--help" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        }
    }

    Ok(CliArgs {
        input,
        output,
        config,
    })
}
