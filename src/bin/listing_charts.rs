use std::fs;
use std::path::PathBuf;

use listing_charts::api::{ChartConfig, ChartScreen, DatasetSource, JsonFileSource};
#[cfg(any(feature = "cairo-backend", test))]
use listing_charts::core::Viewport;
use listing_charts::render::{NullRenderer, Renderer};
use serde_json::json;

#[derive(Debug, Default)]
struct CliArgs {
    dataset_path: Option<PathBuf>,
    url: Option<String>,
    config_path: Option<PathBuf>,
    selection: Vec<String>,
    list_makers: bool,
    png_dir: Option<PathBuf>,
}

fn main() {
    let _ = listing_charts::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            ChartConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => ChartConfig::default(),
    };

    match &args.png_dir {
        #[cfg(feature = "cairo-backend")]
        Some(dir) => {
            use listing_charts::render::CairoRenderer;

            let (width, height) = surface_size(config.viewport)?;
            let bar = CairoRenderer::new(width, height).map_err(|err| err.to_string())?;
            let scatter = CairoRenderer::new(width, height).map_err(|err| err.to_string())?;
            let (bar, scatter) = run_screen(&args, config, bar, scatter)?;
            fs::create_dir_all(dir)
                .map_err(|err| format!("failed to create `{}`: {err}", dir.display()))?;
            bar.write_png(&dir.join("bar_chart.png"))
                .map_err(|err| err.to_string())?;
            scatter
                .write_png(&dir.join("scatter_plot.png"))
                .map_err(|err| err.to_string())?;
            Ok(())
        }
        #[cfg(not(feature = "cairo-backend"))]
        Some(_) => Err("--png-dir requires the `cairo-backend` feature".to_owned()),
        None => {
            run_screen(&args, config, NullRenderer::default(), NullRenderer::default())?;
            Ok(())
        }
    }
}

/// Cairo surface size for `viewport`; cairo takes `i32` dimensions.
#[cfg(any(feature = "cairo-backend", test))]
fn surface_size(viewport: Viewport) -> Result<(i32, i32), String> {
    let width = i32::try_from(viewport.width)
        .map_err(|_| format!("viewport width {} is too large", viewport.width))?;
    let height = i32::try_from(viewport.height)
        .map_err(|_| format!("viewport height {} is too large", viewport.height))?;
    Ok((width, height))
}

fn run_screen<B: Renderer, S: Renderer>(
    args: &CliArgs,
    config: ChartConfig,
    bar: B,
    scatter: S,
) -> Result<(B, S), String> {
    let mut screen = ChartScreen::new(config, bar, scatter).map_err(|err| err.to_string())?;
    let source = dataset_source(args)?;
    screen.begin_load(source).map_err(|err| err.to_string())?;
    screen.wait_for_dataset().map_err(|err| err.to_string())?;

    let manufacturers = screen.manufacturer_options();
    if args.list_makers {
        let payload = serde_json::to_string_pretty(&manufacturers)
            .map_err(|err| format!("failed to serialize manufacturers: {err}"))?;
        println!("{payload}");
        return Ok(screen.into_surfaces());
    }

    let outcome = screen
        .select_manufacturers(args.selection.iter().cloned())
        .map_err(|err| err.to_string())?;
    let frames = screen.controller().last_frames();
    let summary = json!({
        "load_status": screen.load_status(),
        "manufacturers": manufacturers,
        "selected": screen.filter(),
        "outcome": outcome,
        "view": frames.map(|frames| &frames.view),
        "bar": frames.map(|frames| &frames.bar),
        "scatter": frames.map(|frames| &frames.scatter),
    });
    let payload = serde_json::to_string_pretty(&summary)
        .map_err(|err| format!("failed to serialize summary: {err}"))?;
    println!("{payload}");
    Ok(screen.into_surfaces())
}

fn dataset_source(args: &CliArgs) -> Result<Box<dyn DatasetSource + Send>, String> {
    if let Some(path) = &args.dataset_path {
        return Ok(Box::new(JsonFileSource::new(path.clone())));
    }

    #[cfg(feature = "http-source")]
    {
        let url = args
            .url
            .clone()
            .unwrap_or_else(|| listing_charts::api::DEFAULT_LISTINGS_URL.to_owned());
        Ok(Box::new(listing_charts::api::HttpSource::new(url)))
    }

    #[cfg(not(feature = "http-source"))]
    {
        if args.url.is_some() {
            return Err("--url requires the `http-source` feature".to_owned());
        }
        Err("missing --dataset <path>".to_owned())
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut cli = CliArgs::default();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--dataset" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --dataset".to_owned())?;
                cli.dataset_path = Some(PathBuf::from(value));
            }
            "--url" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --url".to_owned())?;
                cli.url = Some(value);
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                cli.config_path = Some(PathBuf::from(value));
            }
            "--select" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --select".to_owned())?;
                cli.selection.push(value);
            }
            "--png-dir" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --png-dir".to_owned())?;
                cli.png_dir = Some(PathBuf::from(value));
            }
            "--list-makers" => cli.list_makers = true,
            "-h" | "--help" => {
                println!(
                    "Usage: listing_charts (--dataset <path> | --url <url>) [--select <maker>]... [--config <path>] [--list-makers] [--png-dir <dir>]"
                );
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`"));
            }
        }
    }

    Ok(cli)
}

#[cfg(test)]
mod tests {
    use listing_charts::core::Viewport;

    use super::surface_size;

    #[test]
    fn surface_size_rejects_dimensions_beyond_i32() {
        assert_eq!(surface_size(Viewport::new(600, 400)), Ok((600, 400)));
        assert!(surface_size(Viewport::new(u32::MAX, 400)).is_err());
        assert!(surface_size(Viewport::new(600, u32::MAX)).is_err());
    }
}
