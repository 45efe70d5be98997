use plot_builder::api::{CollectionKind, PlotBuilderConfig, PlotConfig, PlotConfigEditor};
use plot_builder::render::OutlineRenderer;
use std::fs;
use std::path::PathBuf;

const USAGE: &str =
    "usage: config_outline <input.json> [--builder-config <path>] [--normalized <path>]";

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    builder_config: Option<PathBuf>,
    normalized: Option<PathBuf>,
}

fn main() {
    let _ = plot_builder::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let raw = read(&args.input)?;
    let plot = PlotConfig::from_json_compat_str(&raw).map_err(|err| err.to_string())?;

    let config = match &args.builder_config {
        Some(path) => PlotBuilderConfig::from_json_str(&read(path)?).map_err(|err| err.to_string())?,
        None => PlotBuilderConfig::default(),
    };
    let mut editor =
        PlotConfigEditor::new(OutlineRenderer::default(), config).map_err(|err| err.to_string())?;
    let loaded = editor.load(&plot);

    for kind in CollectionKind::ALL {
        for (index, item) in loaded_items(&loaded, kind).iter().enumerate() {
            editor
                .select_item(kind, index)
                .map_err(|err| err.to_string())?;
            editor
                .render_selected(kind)
                .map_err(|err| err.to_string())?;
            println!("{}[{index}] {}", kind.label(), item.type_name);
            print!("{}", editor.renderer_mut().take_output());
        }
    }
    for (aesthetic, guide) in &loaded.guides {
        println!("guides.{aesthetic} {}", guide.type_name);
    }

    if let Some(path) = &args.normalized {
        let payload = loaded
            .to_json_contract_v1_pretty()
            .map_err(|err| err.to_string())?;
        fs::write(path, payload)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display()))?;
    }
    Ok(())
}

fn loaded_items(plot: &PlotConfig, kind: CollectionKind) -> Vec<&plot_builder::CompositeValue> {
    match kind {
        CollectionKind::Layers => plot.layers.iter().collect(),
        CollectionKind::Scales => plot.scales.iter().collect(),
        CollectionKind::Themes => plot.themes.iter().collect(),
        CollectionKind::Facet => plot.facet.iter().collect(),
        CollectionKind::Coordinate => plot.coordinate.iter().collect(),
    }
}

fn read(path: &PathBuf) -> Result<String, String> {
    fs::read_to_string(path).map_err(|err| format!("failed to read `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut input = None::<PathBuf>;
    let mut builder_config = None::<PathBuf>;
    let mut normalized = None::<PathBuf>;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--builder-config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --builder-config".to_owned())?;
                builder_config = Some(PathBuf::from(value));
            }
            "--normalized" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --normalized".to_owned())?;
                normalized = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            flag if flag.starts_with("--") => return Err(format!("unknown argument `{flag}`")),
            path if input.is_none() => input = Some(PathBuf::from(path)),
            extra => return Err(format!("unexpected argument `{extra}`")),
        }
    }

    let input = input.ok_or_else(|| USAGE.to_owned())?;
    Ok(CliArgs {
        input,
        builder_config,
        normalized,
    })
}
