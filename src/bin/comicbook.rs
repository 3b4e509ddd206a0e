use std::{
    io::Write as _,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "comicbook", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the page dimensions chosen for a viewport.
    Layout(LayoutArgs),
    /// Run a navigation script and print every event as a JSON line.
    Simulate(SimulateArgs),
    /// Render a flat preview of the book as a PNG.
    Frame(FrameArgs),
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Viewport width in pixels.
    #[arg(long)]
    width: f64,

    /// Viewport height in pixels.
    #[arg(long)]
    height: f64,

    /// Book config JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Number of content pages.
    #[arg(long)]
    pages: usize,

    /// Book config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Navigation script, e.g. `next,next,to:6,wait:200,resize:1280x720`.
    #[arg(long, default_value = "")]
    script: String,

    /// Simulated frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Number of content pages.
    #[arg(long)]
    pages: usize,

    /// Book config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Navigation script run before the captured flip.
    #[arg(long, default_value = "")]
    script: String,

    /// Start a flip after the script and capture it mid-turn.
    #[arg(long, value_enum)]
    flip: Option<FlipChoice>,

    /// Time into the captured flip, in milliseconds.
    #[arg(long, default_value_t = 0)]
    at_ms: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FlipChoice {
    Next,
    Prev,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Simulate(args) => cmd_simulate(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn read_config(path: Option<&Path>) -> anyhow::Result<comicbook::BookConfig> {
    match path {
        Some(p) => comicbook::BookConfig::from_path(p)
            .with_context(|| format!("load book config '{}'", p.display())),
        None => Ok(comicbook::BookConfig::default()),
    }
}

fn make_book(
    pages: usize,
    config: comicbook::BookConfig,
) -> anyhow::Result<comicbook::FlipAnimator<String>> {
    let labels = (0..pages).map(|i| format!("Page {i}"));
    Ok(comicbook::FlipAnimator::new(labels, config)?)
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let config = read_config(args.config.as_deref())?;
    let dims = comicbook::compute_dimensions(
        comicbook::Viewport::new(args.width, args.height),
        &config.layout,
    );
    println!("{}", serde_json::to_string(&dims)?);
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let config = read_config(args.config.as_deref())?;
    let script: comicbook::NavScript = args.script.parse().context("parse navigation script")?;
    let book = make_book(args.pages, config)?;

    let mut sim = comicbook::Simulator::new(book, args.fps)?;
    sim.run(&script);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for event in sim.events() {
        serde_json::to_writer(&mut out, &event)?;
        writeln!(out)?;
    }
    serde_json::to_writer(&mut out, &sim.book().snapshot())?;
    writeln!(out)?;
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let config = read_config(args.config.as_deref())?;
    let script: comicbook::NavScript = args.script.parse().context("parse navigation script")?;
    let book = make_book(args.pages, config)?;

    let mut sim = comicbook::Simulator::new(book, 60)?;
    sim.run(&script);

    let book = sim.book_mut();
    if let Some(choice) = args.flip {
        let started = match choice {
            FlipChoice::Next => book.flip_next(),
            FlipChoice::Prev => book.flip_prev(),
        };
        if !started {
            tracing::warn!(?choice, "requested flip did not start");
        }
        book.tick(Duration::from_millis(args.at_ms));
    }

    let img = comicbook::render_preview(&book.frame(), &comicbook::PreviewOpts::default())?;
    comicbook::save_png(&img, &args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
