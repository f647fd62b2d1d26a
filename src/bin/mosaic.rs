use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "mosaic", version)]
struct Cli {
    /// Log engine diagnostics to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute box geometry and print it as JSON.
    Layout(LayoutArgs),
    /// Print the indices visible at a scroll position as a JSON array.
    Visible(VisibleArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Items JSON (array of `{source, width?, height?, aspectRatio?}`).
    #[arg(long)]
    items: PathBuf,

    /// Gallery options JSON. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Container width in pixels.
    #[arg(long)]
    width: f64,
}

#[derive(Args, Debug)]
struct LayoutArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Write JSON here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct VisibleArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Vertical scroll offset.
    #[arg(long, allow_negative_numbers = true)]
    scroll: f64,

    /// Viewport height.
    #[arg(long)]
    viewport_height: f64,

    /// Position of the container's top edge in scroll coordinates.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    container_top: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Visible(args) => cmd_visible(args),
    }
}

fn read_items(path: &Path) -> anyhow::Result<Vec<mosaic::ItemInput>> {
    let f = File::open(path).with_context(|| format!("open items '{}'", path.display()))?;
    let items: Vec<mosaic::ItemInput> = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse items JSON '{}'", path.display()))?;
    Ok(items)
}

fn read_config(path: Option<&Path>) -> anyhow::Result<mosaic::GalleryConfig> {
    let Some(path) = path else {
        return Ok(mosaic::GalleryConfig::default());
    };
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read config '{}'", path.display()))?;
    let cfg = mosaic::GalleryConfig::from_json(&s)
        .with_context(|| format!("load config '{}'", path.display()))?;
    Ok(cfg)
}

fn load(input: &InputArgs) -> anyhow::Result<(mosaic::ItemStore, mosaic::GalleryConfig)> {
    let mut store = mosaic::ItemStore::new();
    store.add_items(read_items(&input.items)?);
    let cfg = read_config(input.config.as_deref())?;
    Ok((store, cfg))
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let (store, cfg) = load(&args.input)?;
    let result = mosaic::compute_layout(store.as_slice(), args.input.width, &cfg)?;
    let json = serde_json::to_string_pretty(&result)?;

    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&out, json).with_context(|| format!("write '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_visible(args: VisibleArgs) -> anyhow::Result<()> {
    let (store, cfg) = load(&args.input)?;
    let result = mosaic::compute_layout(store.as_slice(), args.input.width, &cfg)?;

    let viewport = mosaic::Viewport::new(args.scroll, args.viewport_height, args.container_top);
    viewport.validate()?;
    let visible = if cfg.virtualize() {
        mosaic::resolve_visible(&result.boxes, &viewport, cfg.buffer())
    } else {
        mosaic::all_indices(&result.boxes)
    };

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer(&mut stdout, &visible)?;
    writeln!(stdout)?;
    Ok(())
}
