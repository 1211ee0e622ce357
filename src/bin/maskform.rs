use std::path::PathBuf;

use anyhow::{Context as _, bail};
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

use maskform::{
    AppState, Config, DisplayOffset, Event, HttpTransport, Point, Session, SourceImage, Style,
    Transport, open_image, update, validate_surface,
};

#[derive(Parser, Debug)]
#[command(name = "maskform", version, about = "Mask an image region and submit it for generation")]
struct Cli {
    /// Increase log verbosity (repeatable).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Punch a transparent rectangle into an image and write it as PNG.
    Mask(MaskArgs),
    /// Mask (optionally), submit to the generation endpoint, and print result URLs.
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct DisplayArgs {
    /// Viewport position of the image's top-left corner, as `X,Y`.
    #[arg(long, value_parser = parse_point, default_value = "0,0")]
    offset: Point,

    /// Rendered size of the image, as `WxH` (defaults to the native size).
    #[arg(long, value_parser = parse_size)]
    display: Option<(u32, u32)>,
}

#[derive(Parser, Debug)]
struct MaskArgs {
    /// Input image.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Viewport point where the drag starts, as `X,Y`.
    #[arg(long, value_parser = parse_point)]
    from: Point,

    /// Viewport point where the drag ends, as `X,Y`.
    #[arg(long, value_parser = parse_point)]
    to: Point,

    #[command(flatten)]
    display: DisplayArgs,

    /// Output PNG path.
    #[arg(long, required_unless_present = "data_uri")]
    out: Option<PathBuf>,

    /// Print the masked image as a data URI on stdout.
    #[arg(long)]
    data_uri: bool,
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Input image.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Viewport point where the drag starts, as `X,Y`. Without a drag nothing is masked.
    #[arg(long, value_parser = parse_point, requires = "to")]
    from: Option<Point>,

    /// Viewport point where the drag ends, as `X,Y`.
    #[arg(long, value_parser = parse_point, requires = "from")]
    to: Option<Point>,

    #[command(flatten)]
    display: DisplayArgs,

    /// Base style label.
    #[arg(long, value_parser = parse_style, default_value = "Select a base style")]
    style: Style,

    /// Primary color.
    #[arg(long, default_value = "")]
    primary: String,

    /// Secondary color.
    #[arg(long, default_value = "")]
    secondary: String,

    /// JSON config file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Generation endpoint; overrides config and environment.
    #[arg(long, value_name = "URL")]
    server_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Mask(args) => cmd_mask(args),
        Command::Generate(args) => cmd_generate(args),
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("maskform={level}")));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_mask(args: MaskArgs) -> anyhow::Result<()> {
    let source = open_image(&args.in_path)?;
    let offset = display_offset(&args.display, &source);

    let mut state = AppState::default();
    for event in drag_events(source, args.from, args.to, offset) {
        update(&mut state, event);
    }
    let Some(masked) = state.masked else {
        bail!("nothing to mask: display surface is empty");
    };

    if let Some(out) = &args.out {
        if let Some(parent) = out.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        std::fs::write(out, masked.png_bytes())
            .with_context(|| format!("write png '{}'", out.display()))?;
        eprintln!("wrote {}", out.display());
    }
    if args.data_uri {
        println!("{}", masked.to_data_uri());
    }
    Ok(())
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let mut cfg = match &args.config {
        Some(path) => Config::from_json_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    }
    .with_env();
    if let Some(url) = args.server_url.clone() {
        cfg.server_url = url;
    }
    cfg.validate().context("validating configuration")?;

    let source = open_image(&args.in_path)?;
    let offset = display_offset(&args.display, &source);

    let transport = HttpTransport::new(cfg.timeout())?;
    let mut session = Session::new(transport, cfg.server_url.clone());
    run_generate(&mut session, source, &args, offset);

    let v = session.view();
    if v.results.is_empty() {
        eprintln!("no results");
    }
    for line in v.results {
        println!("{}", line.label);
    }
    Ok(())
}

fn run_generate<T: Transport>(
    session: &mut Session<T>,
    source: SourceImage,
    args: &GenerateArgs,
    offset: DisplayOffset,
) {
    match (args.from, args.to) {
        (Some(from), Some(to)) => {
            for event in drag_events(source, from, to, offset) {
                session.dispatch(event);
            }
        }
        _ => session.dispatch(Event::FileChosen(source)),
    }
    session.dispatch(Event::StyleChanged(args.style));
    session.dispatch(Event::PrimaryColorChanged(args.primary.clone()));
    session.dispatch(Event::SecondaryColorChanged(args.secondary.clone()));
    session.dispatch(Event::SubmitRequested);
}

fn drag_events(source: SourceImage, from: Point, to: Point, offset: DisplayOffset) -> [Event; 5] {
    [
        Event::FileChosen(source),
        Event::PointerDown(from),
        Event::PointerMove(to),
        Event::PointerUp,
        Event::MaskRequested(offset),
    ]
}

fn display_offset(args: &DisplayArgs, source: &SourceImage) -> DisplayOffset {
    let (width, height) = args
        .display
        .unwrap_or((source.width(), source.height()));
    DisplayOffset::new(args.offset.x, args.offset.y, width, height)
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x in '{s}': {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y in '{s}': {e}"))?;
    Ok(Point::new(x, y))
}

fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once('x')
        .ok_or_else(|| format!("expected WxH, got '{s}'"))?;
    let w: u32 = w.trim().parse().map_err(|e| format!("bad width in '{s}': {e}"))?;
    let h: u32 = h.trim().parse().map_err(|e| format!("bad height in '{s}': {e}"))?;
    validate_surface(w, h).map_err(|e| e.to_string())?;
    Ok((w, h))
}

fn parse_style(s: &str) -> Result<Style, String> {
    s.parse::<Style>().map_err(|e| e.to_string())
}
