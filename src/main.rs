mod display;

use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use space_defender::compute::Intent;
use space_defender::driver::FrameClock;
use space_defender::score_store::{FileScoreStore, ScoreStore};
use space_defender::{GameConfig, Session};

use display::TerminalSurface;

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames. Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is >= 15 Hz, so at 60 FPS a window of 8 frames
/// (~133 ms) is always refreshed before expiry.
const HOLD_WINDOW: u64 = 8;

#[derive(Debug, Parser)]
#[command(name = "space_defender", about = "Scrolling arcade shooter in the terminal")]
struct Cli {
    /// JSON config file; missing keys keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,
    /// Canvas width in logical pixels
    #[arg(long)]
    width: Option<f32>,
    /// Canvas height in logical pixels
    #[arg(long)]
    height: Option<f32>,
    /// Seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,
    /// Where the high score is kept
    #[arg(long)]
    score_file: Option<PathBuf>,
    /// Write logs (filtered by RUST_LOG, default info) to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> anyhow::Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        config.validate()?;
        Ok(config)
    }
}

/// The screen is owned by the game, so logs only go to a file. Without
/// `--log-file`, `RUST_LOG` alone enables nothing.
fn init_logging(log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("could not create log file {}", path.display()))?;
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
    Ok(())
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn any_held(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64) -> bool {
    keys.iter().any(|k| is_held(key_frame, k, frame))
}

const LEFT_KEYS: [KeyCode; 3] = [KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')];
const RIGHT_KEYS: [KeyCode; 3] = [KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')];

/// Translates raw key events into logical intents.
///
/// Held-key model: instead of trusting release events we record the frame of
/// the last press/repeat for each key and treat it as held while fresh. Works
/// on keyboard-enhancement terminals (real `Release` events remove the key at
/// once) and on classic terminals (keys expire after `HOLD_WINDOW` frames of
/// silence). Movement intents are emitted only when the held state changes.
#[derive(Default)]
struct InputMapper {
    key_frame: HashMap<KeyCode, u64>,
    left: bool,
    right: bool,
}

enum KeyAction {
    Intent(Intent),
    Quit,
    None,
}

impl InputMapper {
    fn key(&mut self, key: KeyEvent, frame: u64) -> KeyAction {
        let KeyEvent {
            code,
            kind,
            modifiers,
            ..
        } = key;
        match kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.key_frame.insert(code, frame);
            }
            KeyEventKind::Release => {
                self.key_frame.remove(&code);
                return KeyAction::None;
            }
        }
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
            KeyCode::Char(' ') => KeyAction::Intent(Intent::Fire),
            KeyCode::Char('p') | KeyCode::Char('P') if kind == KeyEventKind::Press => {
                KeyAction::Intent(Intent::TogglePause)
            }
            KeyCode::Char('r') | KeyCode::Char('R') if kind == KeyEventKind::Press => {
                KeyAction::Intent(Intent::Restart)
            }
            _ => KeyAction::None,
        }
    }

    /// Movement start/stop intents for this frame.
    fn movement(&mut self, frame: u64) -> Vec<Intent> {
        let mut intents = Vec::new();
        let left = any_held(&self.key_frame, &LEFT_KEYS, frame);
        let right = any_held(&self.key_frame, &RIGHT_KEYS, frame);
        if left != self.left {
            self.left = left;
            intents.push(Intent::MoveLeft(left));
        }
        if right != self.right {
            self.right = right;
            intents.push(Intent::MoveRight(right));
        }
        intents
    }
}

// ── Frame loop ────────────────────────────────────────────────────────────────

fn game_loop<W: Write, S: ScoreStore>(
    out: &mut W,
    session: &mut Session<S, StdRng>,
    rx: &mpsc::Receiver<Event>,
    fps: u32,
) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let config = session.state().config.clone();
    let mut surface =
        TerminalSurface::new(cols, rows.saturating_sub(1), config.width, config.height);
    let mut input = InputMapper::default();
    let mut clock = FrameClock::from_fps(fps);
    let mut frame: u64 = 0;

    loop {
        let request = clock.request(Instant::now());
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        let mut intents = Vec::new();
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(key) => match input.key(key, frame) {
                    KeyAction::Quit => return Ok(()),
                    KeyAction::Intent(intent) => intents.push(intent),
                    KeyAction::None => {}
                },
                Event::Resize(cols, rows) => surface.resize(cols, rows.saturating_sub(1)),
                _ => {}
            }
        }
        intents.extend(input.movement(frame));

        if session.handle_all(intents) {
            clock.cancel();
        }

        // A cancelled frame is skipped and the next one starts without waiting.
        if clock.is_live(&request) {
            session.advance(&mut surface);
            surface.present(out)?;
        }

        if let Some(wait) = clock.remaining(&request, Instant::now()) {
            thread::sleep(wait);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;
    let config = cli.game_config().context("invalid game configuration")?;

    let score_path = cli
        .score_file
        .clone()
        .unwrap_or_else(FileScoreStore::default_path);
    let store = FileScoreStore::new(score_path);
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let fps = config.fps;
    let mut session = Session::new(config, store, rng);
    log::info!("Space Defender starting (high score {})", session.high_score());

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the frame loop never blocks on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = game_loop(&mut out, &mut session, &rx, fps);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    log::info!(
        "Session over: score {}, best {}",
        session.state().score,
        session.high_score()
    );
    result.context("terminal I/O failed")
}
