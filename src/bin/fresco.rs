use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use sha2::Digest as _;

use fresco::encode::sink::layer_path;
use fresco::scene::layers::plan_layer;
use fresco::scene::seeds::EventSeeds;
use fresco::scene::stage::Stage;
use fresco::{
    Catalog, CwebpTranscoder, LayerKind, LayerSink, PngDirSink, RenderSettings, RenderThreading,
    WebpDirSink, find_cwebp, needs_render, render_to_sink,
};

/// Generate layered scene assets for timeline events.
#[derive(Parser, Debug)]
#[command(name = "fresco", version)]
struct Cli {
    /// Event ids to generate. Default: the migration set of 15 events.
    #[arg(long, num_args = 0..)]
    events: Vec<String>,

    /// Generate every catalog event.
    #[arg(long)]
    all: bool,

    /// Overwrite existing assets.
    #[arg(long)]
    overwrite: bool,

    /// Output root; layers land in `<out-dir>/<event-id>/`.
    #[arg(long, default_value = "assets/scenes")]
    out_dir: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Webp)]
    format: Format,

    /// Path to `cwebp` (otherwise `$CWEBP`, common install paths, then `PATH`).
    #[arg(long)]
    cwebp: Option<PathBuf>,

    /// JSON catalog replacing the built-in event table.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Layer width in pixels.
    #[arg(long, default_value_t = 1600)]
    width: u32,

    /// Layer height in pixels.
    #[arg(long, default_value_t = 900)]
    height: u32,

    /// Base seed mixed into every event's seeds.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Worker threads for parallel rendering.
    #[arg(long)]
    threads: Option<usize>,

    /// Render on the calling thread only.
    #[arg(long)]
    serial: bool,

    /// Print the SHA-256 of each written layer file.
    #[arg(long)]
    digest: bool,

    /// Print the draw plans of the selected events as JSON and exit without rendering.
    #[arg(long)]
    dump_plans: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Png,
    Webp,
}

impl Format {
    fn ext(self) -> &'static str {
        match self {
            Format::Png => "png",
            Format::Webp => "webp",
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let catalog = match &cli.catalog {
        Some(path) => Catalog::from_json_path(path)?,
        None => Catalog::builtin(),
    };
    let event_ids = select_events(&cli, &catalog);
    let settings = RenderSettings {
        width: cli.width,
        height: cli.height,
        base_seed: cli.seed,
    };

    if cli.dump_plans {
        dump_plans(&catalog, &event_ids, &settings)?;
        return Ok(ExitCode::SUCCESS);
    }

    let mut sink: Box<dyn LayerSink> = match cli.format {
        Format::Png => Box::new(PngDirSink::new(&cli.out_dir)),
        Format::Webp => {
            let transcoder = CwebpTranscoder::new(find_cwebp(cli.cwebp.as_deref()));
            if let Err(e) = transcoder.probe() {
                eprintln!("{e}");
                return Ok(ExitCode::from(1));
            }
            Box::new(WebpDirSink::new(&cli.out_dir, transcoder))
        }
    };

    let ext = cli.format.ext();
    let pending: Vec<String> = event_ids
        .iter()
        .filter(|id| {
            let todo = needs_render(&cli.out_dir, id, ext, cli.overwrite);
            if !todo {
                tracing::warn!(event = %id, "assets exist, skipping (use --overwrite)");
            }
            todo
        })
        .cloned()
        .collect();

    let threading = RenderThreading {
        parallel: !cli.serial,
        threads: cli.threads,
    };
    render_to_sink(&catalog, &pending, &settings, &threading, sink.as_mut())?;

    if cli.digest {
        print_digests(&cli.out_dir, &pending, ext)?;
    }

    println!("Generated assets for {} event(s).", event_ids.len());
    Ok(ExitCode::SUCCESS)
}

fn select_events(cli: &Cli, catalog: &Catalog) -> Vec<String> {
    if cli.all {
        catalog.ids()
    } else if !cli.events.is_empty() {
        cli.events.clone()
    } else if cli.catalog.is_some() {
        catalog.ids()
    } else {
        Catalog::default_selection()
    }
}

fn dump_plans(catalog: &Catalog, ids: &[String], settings: &RenderSettings) -> anyhow::Result<()> {
    let stage = Stage::new(settings.size()?);
    let mut out = serde_json::Map::new();
    for id in ids {
        let visual = catalog.get(id)?;
        let palette = catalog.palette(visual.profile);
        let seeds = EventSeeds::derive(id, settings.base_seed);
        let mut layers = serde_json::Map::new();
        for kind in LayerKind::ALL {
            let plan = plan_layer(kind, visual, &palette, &stage, &seeds);
            layers.insert(kind.stem().to_owned(), serde_json::to_value(&plan)?);
        }
        out.insert(id.clone(), serde_json::Value::Object(layers));
    }
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn print_digests(root: &Path, ids: &[String], ext: &str) -> anyhow::Result<()> {
    for id in ids {
        for kind in LayerKind::ALL {
            let path = layer_path(root, id, kind, ext);
            let bytes =
                std::fs::read(&path).with_context(|| format!("read '{}'", path.display()))?;
            println!("{}  {}", sha256_hex(&bytes), path.display());
        }
    }
    Ok(())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
