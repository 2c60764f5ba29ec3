mod input;
mod renderer;
mod sound;
mod viewport;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use clap::Parser;
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute, queue, terminal,
};
use game_core::{Config, Court};
use tracing_subscriber::EnvFilter;

use input::Command;
use sound::Bell;
use viewport::Viewport;

#[derive(Parser)]
#[command(name = "pong", about = "Pong against a scripted opponent, in the terminal")]
struct Cli {
    /// TOML file overriding the default game settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for serve directions (defaults to the clock)
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file; filter with RUST_LOG
    #[arg(long)]
    log: Option<PathBuf>,

    /// Do not ring the terminal bell on hits and points
    #[arg(long)]
    mute: bool,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    // Stdout belongs to the renderer, so logs only go to a file
    if let Some(path) = &cli.log {
        init_logging(path)?;
    }

    let config = load_config(cli.config.as_deref());
    let seed = cli.seed.unwrap_or_else(seed_from_clock);
    tracing::info!(seed, fps = config.fps, "pong starting");

    // Setup terminal
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        EnableMouseCapture
    )?;

    let mut writer = BufWriter::with_capacity(64 * 1024, stdout);
    let result = run_loop(&mut writer, config, seed, !cli.mute);

    // Cleanup
    execute!(
        writer,
        DisableMouseCapture,
        cursor::Show,
        terminal::LeaveAlternateScreen
    )?;
    terminal::disable_raw_mode()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "terminal loop failed");
    }
    result
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Used when RUST_LOG is unset, so match events reach the log file
const DEFAULT_LOG_FILTER: &str = "info";

fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn load_config(path: Option<&Path>) -> Config {
    path.map(Config::load_or_default).unwrap_or_default()
}

fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn run_loop(
    out: &mut BufWriter<io::Stdout>,
    config: Config,
    seed: u64,
    bell_enabled: bool,
) -> io::Result<()> {
    let frame_dur = config.frame_duration();
    let (cols, rows) = terminal::size()?;
    let mut viewport = Viewport::new(cols, rows, config.width, config.height);
    let mut court = Court::new(config, seed);
    let mut bell = Bell::new(bell_enabled);
    let mut last_tick = Instant::now();

    loop {
        // Pointer and key input arrives between ticks
        while event::poll(Duration::ZERO)? {
            let event = event::read()?;
            match input::translate(&event, &viewport) {
                Some(Command::Quit) => return Ok(()),
                Some(Command::Start) => court.start_match(),
                Some(Command::Pointer { y }) => court.pointer_moved(y),
                Some(Command::Click { col, row }) => {
                    let (x, y) = renderer::click_target(&court.start_button(), &viewport, col, row);
                    court.click(x, y);
                }
                Some(Command::Resize { cols, rows }) => {
                    let config = court.config();
                    viewport = Viewport::new(cols, rows, config.width, config.height);
                    queue!(out, terminal::Clear(terminal::ClearType::All))?;
                }
                None => {}
            }
        }

        // Timing
        let now = Instant::now();
        let dt = now.duration_since(last_tick).as_secs_f32();
        last_tick = now;

        court.update(dt);
        court.dispatch_events(&mut bell);

        let frame = renderer::draw(&court.snapshot(), court.config(), &viewport);
        frame.write_to(out)?;
        if bell.take() {
            out.write_all(b"\x07")?;
        }

        // Single flush per frame
        out.flush()?;

        // Sleep to target tick rate
        let elapsed = now.elapsed();
        if elapsed < frame_dur {
            std::thread::sleep(frame_dur - elapsed);
        }
    }
}
