use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use swatch_engine::{find_entry_at_screen, AtlasMode, Field, GridAxes};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dyeatlas::export::{atlas_json, mosaic_csv};
use dyeatlas::models::{AppConfig, SelectionArg};
use dyeatlas::rendering::{
    encode_png, hover_lines, render_atlas, render_mosaic, render_preview, tile_hover_lines,
    AtlasCanvas, PREVIEW_SIDE,
};
use dyeatlas::services::{AtlasSession, FsImageSource, SwatchLibrary};

#[derive(Parser)]
#[command(name = "dyeatlas")]
#[command(about = "Photomosaics and colour atlases from a dye swatch catalogue")]
struct Cli {
    /// YAML configuration file (defaults to $CONFIG_FILE)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Polar,
    Grid,
}

#[derive(Subcommand)]
enum Commands {
    /// Tile a sample image with the best-matching swatches
    Mosaic {
        /// Sample PNG image
        sample: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Also write the tile-to-swatch table as CSV
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Tile edge in pixels (4-200)
        #[arg(short, long)]
        tile_size: Option<u32>,

        /// Restrict a field, e.g. "mordant=Alum,Iron" ("mordant=" for none, "mordant=*" for all)
        #[arg(short, long = "filter")]
        filters: Vec<SelectionArg>,

        /// Describe the tile under pixel "X,Y"
        #[arg(long, value_parser = parse_point)]
        hover: Option<(f64, f64)>,
    },
    /// Lay out the catalogue on a colour wheel or a categorical grid
    Atlas {
        #[arg(short, long, value_enum, default_value = "polar")]
        mode: ModeArg,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Also write positioned entries and guides as JSON
        #[arg(long)]
        json: Option<PathBuf>,

        /// Grid column field
        #[arg(long)]
        outer_x: Option<Field>,

        /// Grid row field
        #[arg(long)]
        outer_y: Option<Field>,

        /// Grid sub-column field inside each cell
        #[arg(long)]
        inner_x: Option<Field>,

        /// Grid sub-row field inside each cell
        #[arg(long)]
        inner_y: Option<Field>,

        /// Outline grid entries by this field's value
        #[arg(long)]
        colour_by: Option<Field>,

        /// Zoom around the canvas center
        #[arg(long, default_value_t = 1.0)]
        zoom: f64,

        /// Multiplier on sprite sizes
        #[arg(long, default_value_t = 1.0)]
        size_scale: f64,

        /// Leave out rings, spokes and grid lines
        #[arg(long)]
        no_guides: bool,

        #[arg(short, long = "filter")]
        filters: Vec<SelectionArg>,

        /// Describe the swatch under canvas point "X,Y"
        #[arg(long, value_parser = parse_point)]
        hover: Option<(f64, f64)>,

        /// Write the hovered swatch's preview image here
        #[arg(long, requires = "hover")]
        preview: Option<PathBuf>,
    },
    /// List the distinct values of one field, or of all fields
    Values { field: Option<Field> },
}

fn parse_point(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    let x = x.trim().parse().map_err(|e| format!("bad X: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad Y: {e}"))?;
    Ok((x, y))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dyeatlas=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config_path = cli
        .config
        .or_else(|| std::env::var("CONFIG_FILE").ok().map(PathBuf::from));
    let config = AppConfig::load(config_path.as_deref()).with_env_overrides();

    match cli.command {
        Some(Commands::Mosaic {
            sample,
            output,
            csv,
            tile_size,
            filters,
            hover,
        }) => run_mosaic_command(&config, &sample, &output, csv, tile_size, &filters, hover).await,
        Some(Commands::Atlas {
            mode,
            output,
            json,
            outer_x,
            outer_y,
            inner_x,
            inner_y,
            colour_by,
            zoom,
            size_scale,
            no_guides,
            filters,
            hover,
            preview,
        }) => {
            let mut grid = config.grid_layout();
            if matches!(mode, ModeArg::Grid) {
                let defaults = config.grid_axes();
                let axes = GridAxes::outer(
                    outer_x.unwrap_or(defaults.outer_x),
                    outer_y.unwrap_or(defaults.outer_y),
                )
                .with_inner(inner_x.or(defaults.inner_x), inner_y.or(defaults.inner_y));
                grid = grid
                    .axes(axes)
                    .colour_by(colour_by.or(config.grid.colour_by));
            }
            let mode = match mode {
                ModeArg::Polar => AtlasMode::Polar(config.polar_layout()),
                ModeArg::Grid => AtlasMode::Grid(grid),
            };
            let view = AtlasView {
                zoom,
                size_scale,
                guides: !no_guides,
            };
            run_atlas_command(&config, mode, view, &output, json, &filters, hover, preview).await
        }
        Some(Commands::Values { field }) => run_values_command(&config, field).await,
        None => {
            run_status_command(&config, config_path.as_deref());
            Ok(())
        }
    }
}

async fn open_session(
    config: &AppConfig,
    filters: &[SelectionArg],
) -> anyhow::Result<AtlasSession> {
    let library = SwatchLibrary::open(config).await?;
    let session = AtlasSession::new(Arc::new(library), config);
    for filter in filters {
        session
            .set_selection(filter.field, filter.values.clone())
            .await;
    }
    Ok(session)
}

/// Compose a mosaic and write it as PNG (plus optional CSV)
async fn run_mosaic_command(
    config: &AppConfig,
    sample: &Path,
    output: &Path,
    csv: Option<PathBuf>,
    tile_size: Option<u32>,
    filters: &[SelectionArg],
    hover: Option<(f64, f64)>,
) -> anyhow::Result<()> {
    let session = open_session(config, filters).await?;
    if let Some(size) = tile_size {
        session.set_tile_size(size).await;
    }

    let source = FsImageSource::from_config(config);
    let sample_name = sample.to_string_lossy();
    let mosaic = session.compose_mosaic(&source, &sample_name).await?;

    if mosaic.is_empty() {
        println!("No swatches pass the current filter; nothing to draw.");
        return Ok(());
    }

    let pixmap = render_mosaic(&mosaic, session.library())?;
    let png = encode_png(&pixmap)?;
    std::fs::write(output, &png)?;
    let (columns, rows) = mosaic.dimensions();
    println!(
        "Rendered {} ({}x{} tiles, {} bytes)",
        output.display(),
        columns,
        rows,
        png.len()
    );

    if let Some(path) = csv {
        std::fs::write(&path, mosaic_csv(&mosaic))?;
        println!("Wrote {}", path.display());
    }

    if let Some((x, y)) = hover {
        match mosaic.tile_at(x, y) {
            Some(tile) => {
                for line in tile_hover_lines(tile) {
                    println!("  {line}");
                }
            }
            None => println!("No tile at {x},{y}"),
        }
    }

    Ok(())
}

struct AtlasView {
    zoom: f64,
    size_scale: f64,
    guides: bool,
}

/// Lay out the filtered catalogue and write it as PNG (plus optional JSON)
#[allow(clippy::too_many_arguments)]
async fn run_atlas_command(
    config: &AppConfig,
    mode: AtlasMode,
    view: AtlasView,
    output: &Path,
    json: Option<PathBuf>,
    filters: &[SelectionArg],
    hover: Option<(f64, f64)>,
    preview: Option<PathBuf>,
) -> anyhow::Result<()> {
    let session = open_session(config, filters).await?;
    let mode_name = mode.name();
    let canvas = AtlasCanvas {
        size_scale: view.size_scale,
        show_guides: view.guides,
        ..AtlasCanvas::for_mode(&mode).zoomed(view.zoom)
    };
    session.set_mode(mode).await;

    let layout = session.layout().await?;
    let pixmap = render_atlas(&layout, session.library(), &canvas)?;
    let png = encode_png(&pixmap)?;
    std::fs::write(output, &png)?;
    println!(
        "Rendered {} ({} swatches, {} mode, {} bytes)",
        output.display(),
        layout.len(),
        mode_name,
        png.len()
    );

    if let Some(path) = json {
        std::fs::write(&path, atlas_json(mode_name, &layout)?)?;
        println!("Wrote {}", path.display());
    }

    if let Some((x, y)) = hover {
        let hit = find_entry_at_screen(x, y, &canvas.view, &layout.entries, canvas.size_scale);
        match hit.map(|i| &layout.entries[i]) {
            Some(entry) => {
                for line in hover_lines(entry.record) {
                    println!("  {line}");
                }
                if let (Some(path), Some(images)) =
                    (preview, session.library().images(&entry.record.filename))
                {
                    let png = encode_png(&render_preview(images, PREVIEW_SIDE)?)?;
                    std::fs::write(&path, png)?;
                    println!("Wrote {}", path.display());
                }
            }
            None => println!("No swatch at {x},{y}"),
        }
    }

    Ok(())
}

/// Print ordered distinct values with their display labels
async fn run_values_command(config: &AppConfig, field: Option<Field>) -> anyhow::Result<()> {
    let session = open_session(config, &[]).await?;
    let fields = match field {
        Some(field) => vec![field],
        None => Field::ALL.to_vec(),
    };

    for field in fields {
        let index = session.unique_values(field);
        println!("{} ({}):", field.title(), index.len());
        for value in index.values() {
            let label = field.display_label(value);
            if label == value.as_str() {
                println!("  {value}");
            } else {
                println!("  {value}  [{label}]");
            }
        }
    }
    Ok(())
}

/// Display configuration and usage information
fn run_status_command(config: &AppConfig, config_path: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    fn describe(path: &Path) -> String {
        if path.exists() {
            path.display().to_string()
        } else {
            format!("{} (not found)", path.display())
        }
    }

    println!("dyeatlas v{VERSION}");
    println!("Dye swatch photomosaics and colour atlases\n");

    println!("Configuration:");
    println!(
        "  Config file: {}",
        config_path.map_or_else(|| "(defaults)".to_string(), describe)
    );
    println!("  Lookup:      {}", describe(&config.paths.lookup));
    println!("  Tiles:       {}", describe(&config.paths.tiles));
    println!("  Previews:    {}", describe(&config.paths.previews));

    println!("\nMosaic:");
    let w = config.mosaic.weights;
    println!("  Tile size:   {}", config.mosaic.tile_size);
    println!(
        "  Weights:     hue {:.2}, brightness {:.2}, saturation {:.2}",
        w.hue, w.brightness, w.saturation
    );

    println!("\nGrid axes:");
    let axes = config.grid_axes();
    println!("  Outer:       {} x {}", axes.outer_x.title(), axes.outer_y.title());
    if axes.has_inner() {
        let name = |f: Option<Field>| f.map_or("-", |f| f.title());
        println!("  Inner:       {} x {}", name(axes.inner_x), name(axes.inner_y));
    }

    println!("\nCommands:");
    println!("  dyeatlas mosaic   Tile a sample image with matching swatches");
    println!("  dyeatlas atlas    Render the polar or grid atlas");
    println!("  dyeatlas values   List distinct field values");
    println!("\nRun 'dyeatlas --help' for more details.");
}
