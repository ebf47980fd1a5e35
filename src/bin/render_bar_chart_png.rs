#[cfg(feature = "cairo-backend")]
use plotcraft::api::{ChartConfig, ChartView};
#[cfg(feature = "cairo-backend")]
use plotcraft::core::{Series, Viewport};
#[cfg(feature = "cairo-backend")]
use std::fs;
#[cfg(feature = "cairo-backend")]
use std::path::PathBuf;

#[cfg(feature = "cairo-backend")]
const DEFAULT_OUTPUT_PATH: &str = "bar_chart.png";
#[cfg(feature = "cairo-backend")]
const DEFAULT_SAMPLE_DATA: [f64; 7] = [20.0, 50.0, 80.0, 35.0, 65.0, 45.0, 70.0];

#[cfg(feature = "cairo-backend")]
#[derive(Debug)]
struct CliArgs {
    config_path: Option<PathBuf>,
    output_path: PathBuf,
    data: Vec<f64>,
    viewport: Viewport,
}

#[cfg(feature = "cairo-backend")]
fn main() {
    let _ = plotcraft::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cairo-backend"))]
fn main() {
    eprintln!("this tool requires feature `cairo-backend`");
    std::process::exit(1);
}

#[cfg(feature = "cairo-backend")]
fn run() -> Result<(), String> {
    use plotcraft::render::{CairoRenderer, Renderer};

    let args = parse_args()?;
    let config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read config `{}`: {err}", path.display()))?;
            ChartConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => ChartConfig::default(),
    };

    let series = Series::new(args.data).map_err(|err| err.to_string())?;
    let view =
        ChartView::from_config(args.viewport, &config, series).map_err(|err| err.to_string())?;

    let width = i32::try_from(args.viewport.width)
        .map_err(|_| "viewport width overflows i32".to_owned())?;
    let height = i32::try_from(args.viewport.height)
        .map_err(|_| "viewport height overflows i32".to_owned())?;
    let mut renderer = CairoRenderer::new(width, height).map_err(|err| err.to_string())?;

    // Measure with the renderer's own fonts so margins match drawn text.
    let frame = view.build_frame(&renderer).map_err(|err| err.to_string())?;
    renderer.render(&frame).map_err(|err| err.to_string())?;
    renderer
        .write_png(&args.output_path)
        .map_err(|err| err.to_string())?;

    let stats = renderer.last_stats();
    println!(
        "wrote {} ({} rects, {} circles, {} lines, {} texts)",
        args.output_path.display(),
        stats.rects,
        stats.circles,
        stats.lines,
        stats.texts
    );
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn parse_args() -> Result<CliArgs, String> {
    let mut config_path: Option<PathBuf> = None;
    let mut output_path = PathBuf::from(DEFAULT_OUTPUT_PATH);
    let mut data = DEFAULT_SAMPLE_DATA.to_vec();
    let mut width = 1080_u32;
    let mut height = 1080_u32;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output_path = PathBuf::from(value);
            }
            "--data" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --data".to_owned())?;
                data = parse_data(&value)?;
            }
            "--width" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --width".to_owned())?;
                width = value
                    .parse()
                    .map_err(|err| format!("invalid --width `{value}`: {err}"))?;
            }
            "--height" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --height".to_owned())?;
                height = value
                    .parse()
                    .map_err(|err| format!("invalid --height `{value}`: {err}"))?;
            }
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    Ok(CliArgs {
        config_path,
        output_path,
        data,
        viewport: Viewport::new(width, height),
    })
}

#[cfg(feature = "cairo-backend")]
fn parse_data(raw: &str) -> Result<Vec<f64>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<f64>()
                .map_err(|err| format!("invalid data value `{item}`: {err}"))
        })
        .collect()
}

#[cfg(feature = "cairo-backend")]
fn usage_message() -> String {
    format!(
        "Usage: render_bar_chart_png [--config <path>] [--data <v1,v2,...>] \
         [--width <px>] [--height <px>] [--output <path>]\n\
         Defaults: output `{DEFAULT_OUTPUT_PATH}`, 1080x1080, seven sample values."
    )
}
