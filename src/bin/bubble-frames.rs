use std::{
    fs::File,
    io::{BufReader, Read as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bubble-frames", version)]
struct Cli {
    /// Log pipeline progress to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every frame of one cycle as numbered PNGs.
    Render(RenderArgs),
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Print the evaluated dots of every frame as JSON.
    Eval(SpinnerArgs),
}

#[derive(Args, Debug)]
struct SpinnerArgs {
    /// Frames per cycle. Non-numeric or non-positive input falls back to 8.
    #[arg(long, default_value = "8", allow_hyphen_values = true)]
    frames: String,

    /// Spinner JSON (e.g. `{"canvas_size": 480}`).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Canvas edge length in pixels; overrides the config.
    #[arg(long)]
    size: Option<u32>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    spinner: SpinnerArgs,

    /// Output directory.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    spinner: SpinnerArgs,

    /// Frame index (0-based).
    #[arg(long)]
    index: u64,

    /// Output PNG path [default: ./bubble-loading-frame-NN.png].
    #[arg(long)]
    out: Option<PathBuf>,
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
        Command::Render(args) => cmd_render(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Eval(args) => cmd_eval(args),
    }
}

fn read_spec_json(path: &Path) -> anyhow::Result<bubble_frames::SpinnerSpec> {
    let f = File::open(path).with_context(|| format!("open spinner config '{}'", path.display()))?;
    let mut s = String::new();
    BufReader::new(f)
        .read_to_string(&mut s)
        .with_context(|| format!("read spinner config '{}'", path.display()))?;
    let spec = bubble_frames::SpinnerSpec::from_json_str(&s)
        .with_context(|| format!("parse spinner config '{}'", path.display()))?;
    Ok(spec)
}

fn resolve(
    args: &SpinnerArgs,
) -> anyhow::Result<(bubble_frames::SpinnerSpec, bubble_frames::FrameCount)> {
    let mut spec = match &args.config {
        Some(path) => read_spec_json(path)?,
        None => bubble_frames::SpinnerSpec::default(),
    };
    if let Some(size) = args.size {
        spec.canvas_size = size;
    }
    spec.validate()?;

    let count = match bubble_frames::FrameCount::parse(&args.frames) {
        Some(count) => count,
        None => {
            let count = bubble_frames::FrameCount::DEFAULT;
            eprintln!("using {} frames (could not read '{}')", count.get(), args.frames);
            count
        }
    };
    Ok((spec, count))
}

fn write_png(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write png '{}'", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let (spec, count) = resolve(&args.spinner)?;

    // Nothing is written unless every frame rendered.
    let frames = bubble_frames::render_frames(&spec, count)?;

    for frame in &frames {
        write_png(&args.out.join(frame.file_name()), &frame.png)?;
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (spec, count) = resolve(&args.spinner)?;
    let frame =
        bubble_frames::render_frame(&spec, bubble_frames::FrameIndex(args.index), count)?;
    let out = args
        .out
        .unwrap_or_else(|| PathBuf::from(frame.file_name()));
    write_png(&out, &frame.png)
}

fn cmd_eval(args: SpinnerArgs) -> anyhow::Result<()> {
    let (spec, count) = resolve(&args)?;
    let frames = count
        .indices()
        .map(|f| bubble_frames::Evaluator::eval_frame(&spec, f, count))
        .collect::<Result<Vec<_>, _>>()?;

    let stdout = std::io::stdout();
    serde_json::to_writer_pretty(stdout.lock(), &frames).with_context(|| "write eval JSON")?;
    println!();
    Ok(())
}
