use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use cutface::{ClockSource as _, DisplaySurface as _};

#[derive(Parser, Debug)]
#[command(name = "cutface", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render every tick of the intro animation as numbered PNGs.
    Animate(AnimateArgs),
}

#[derive(Parser, Debug)]
struct FaceArgs {
    /// Target watch platform.
    #[arg(long, value_enum, default_value_t = PlatformChoice::Basalt)]
    platform: PlatformChoice,

    /// Face variant.
    #[arg(long, value_enum, default_value_t = StyleChoice::CleanCut)]
    style: StyleChoice,

    /// Time to show as HH:MM. Defaults to the local time.
    #[arg(long)]
    time: Option<String>,

    /// Settings JSON. Missing keys take their defaults.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Rows at the bottom covered by a system overlay.
    #[arg(long, default_value_t = 0)]
    obstruction: u16,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    face: FaceArgs,

    /// Animation percent to render (100 is the settled face).
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(i16).range(0..=150))]
    percent: i16,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct AnimateArgs {
    #[command(flatten)]
    face: FaceArgs,

    /// Timer interval between animation frames, in milliseconds.
    #[arg(long, default_value_t = 33, value_parser = clap::value_parser!(u64).range(1..))]
    step_ms: u64,

    /// Output directory for `frame_NNNN.png`.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PlatformChoice {
    Aplite,
    Basalt,
    Chalk,
    Diorite,
    Emery,
}

impl From<PlatformChoice> for cutface::Platform {
    fn from(choice: PlatformChoice) -> Self {
        match choice {
            PlatformChoice::Aplite => Self::Aplite,
            PlatformChoice::Basalt => Self::Basalt,
            PlatformChoice::Chalk => Self::Chalk,
            PlatformChoice::Diorite => Self::Diorite,
            PlatformChoice::Emery => Self::Emery,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StyleChoice {
    CleanCut,
    CuttingEdge,
}

impl StyleChoice {
    fn style(self) -> cutface::CutStyle {
        match self {
            Self::CleanCut => cutface::CutStyle::clean_cut(),
            Self::CuttingEdge => cutface::CutStyle::cutting_edge(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Animate(args) => cmd_animate(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

struct Face {
    platform: cutface::Platform,
    style: cutface::CutStyle,
    settings: cutface::Settings,
    time: cutface::ClockTime,
    display: cutface::SoftwareDisplay,
}

fn prepare_face(args: &FaceArgs) -> anyhow::Result<Face> {
    let platform = cutface::Platform::from(args.platform);
    let settings = match &args.settings {
        Some(path) => cutface::Settings::load(path)
            .with_context(|| format!("load settings '{}'", path.display()))?,
        None => cutface::Settings::default(),
    };
    let time = match &args.time {
        Some(s) => cutface::ClockTime::parse(s)?,
        None => cutface::SystemClock.now(),
    };
    let mut display = cutface::SoftwareDisplay::for_platform(platform)
        .with_context(|| format!("create {platform} display"))?;
    display.set_obstruction(args.obstruction);
    Ok(Face {
        platform,
        style: args.style.style(),
        settings,
        time,
        display,
    })
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let Face {
        platform,
        style,
        settings,
        time,
        mut display,
    } = prepare_face(&args.face)?;

    let composer = cutface::FrameComposer::new(style)?;
    let text = cutface::ClockText::format(time, settings.clock_24h);
    let report = composer.compose(
        &mut display,
        &mut cutface::BlockGlyphPainter::new(),
        &cutface::FrameInputs {
            settings: &settings,
            text: &text,
            percent: args.percent,
            font_size: platform.font_size(),
        },
    )?;
    if !report.wiped {
        eprintln!("warning: frame drawn without the diagonal wipe");
    }

    cutface::write_png(display.framebuffer(), &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_animate(args: AnimateArgs) -> anyhow::Result<()> {
    let Face {
        platform,
        style,
        settings,
        time,
        display,
    } = prepare_face(&args.face)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let opts = cutface::SessionOpts {
        font_size: platform.font_size(),
        ..cutface::SessionOpts::default()
    };
    let mut session = cutface::RenderSession::load(
        display,
        cutface::BlockGlyphPainter::new(),
        style,
        settings,
        time,
        opts,
    )?;

    let mut written = 0usize;
    let mut elapsed = Duration::ZERO;
    loop {
        session.on_animation_frame(elapsed);
        session.redraw()?;
        let path = frame_path(&args.out_dir, written);
        cutface::write_png(session.surface().framebuffer(), &path)?;
        written += 1;
        if !session.has_controller() {
            break;
        }
        elapsed += Duration::from_millis(args.step_ms);
    }

    let (surface, _painter) = session.unload();
    tracing::debug!(captures = surface.capture_count(), "animation rendered");
    eprintln!(
        "wrote {written} frames ({}x{}) to {}",
        surface.bounds().width,
        surface.bounds().height,
        args.out_dir.display()
    );
    Ok(())
}

fn frame_path(dir: &Path, index: usize) -> PathBuf {
    dir.join(format!("frame_{index:04}.png"))
}
