use bar_chart_rs::api::{ChartHost, demo_config, demo_dataset};
use bar_chart_rs::render::{RetainedScene, svg};
use bar_chart_rs::telemetry;
use std::fs;
use std::path::PathBuf;

const USAGE: &str = "usage: render_demo_svg [--width <px>] [--output <path>] [--snapshot <path>]";
const DEFAULT_CONTAINER_WIDTH: f64 = 600.0;

#[derive(Debug)]
struct CliArgs {
    width: f64,
    output: Option<PathBuf>,
    snapshot: Option<PathBuf>,
}

fn main() {
    let _ = telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let mut host = ChartHost::mount(RetainedScene::new(), "#chart", args.width, &demo_config())
        .map_err(|err| format!("failed to mount chart: {err}"))?;
    host.on_data_changed(Some(demo_dataset()))
        .map_err(|err| format!("failed to render demo data: {err}"))?;
    host.chart_mut().scene_mut().settle();

    let document = svg::to_svg_document(host.chart().scene());
    match &args.output {
        Some(path) => fs::write(path, &document)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display()))?,
        None => print!("{document}"),
    }

    if let Some(path) = &args.snapshot {
        let json = host
            .chart()
            .snapshot_json_contract_v1_pretty()
            .map_err(|err| format!("failed to serialize snapshot: {err}"))?;
        fs::write(path, json)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display()))?;
    }
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut parsed = CliArgs {
        width: DEFAULT_CONTAINER_WIDTH,
        output: None,
        snapshot: None,
    };

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--width" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --width".to_owned())?;
                parsed.width = value
                    .parse::<f64>()
                    .map_err(|err| format!("invalid --width `{value}`: {err}"))?;
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                parsed.output = Some(PathBuf::from(value));
            }
            "--snapshot" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --snapshot".to_owned())?;
                parsed.snapshot = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        }
    }

    Ok(parsed)
}
