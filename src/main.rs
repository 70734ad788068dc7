//! Terminal pairlock runner (default binary).
//!
//! Owns the event loop, the cell cursor, and the elapsed-time clock. The
//! engine only ever sees resolved cells and actions; everything pointer-
//! and pixel-shaped from the original game collapses into cursor keys
//! here.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_pairlock::core::Session;
use tui_pairlock::input::{handle_key_event, menu_size_key, should_quit};
use tui_pairlock::term::{GameView, HudState, TerminalRenderer, Viewport};
use tui_pairlock::types::{Coord, GameAction, Phase, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// How long to wait for input before repainting (keeps the clock moving).
const POLL_MS: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CliConfig {
    /// Start straight into a board of this size, skipping the menu.
    size: Option<u8>,
    /// Explicit RNG seed for a reproducible board.
    seed: Option<u32>,
}

fn parse_args(args: &[String]) -> Result<CliConfig> {
    let mut config = CliConfig {
        size: None,
        seed: None,
    };
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--size" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --size"))?;
                let n = v
                    .parse::<u8>()
                    .map_err(|_| anyhow!("invalid --size value: {}", v))?;
                if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&n) {
                    return Err(anyhow!(
                        "--size must be between {} and {}",
                        MIN_BOARD_SIZE,
                        MAX_BOARD_SIZE
                    ));
                }
                config.size = Some(n);
            }
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                config.seed = Some(
                    v.parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                );
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(config)
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: CliConfig) -> Result<()> {
    let mut session = Session::new(config.seed.unwrap_or_else(clock_seed));
    let view = GameView;

    let mut cursor = Coord::new(0, 0);
    let mut started_at = Instant::now();
    let mut solved_secs: u64 = 0;

    if let Some(n) = config.size {
        session.start(n);
        started_at = Instant::now();
    }

    loop {
        let elapsed_secs = match session.phase() {
            Phase::NotStarted => 0,
            Phase::InProgress => started_at.elapsed().as_secs(),
            Phase::Solved => solved_secs,
        };

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let hud = HudState {
            cursor,
            elapsed_secs,
        };
        let fb = view.render(&session.snapshot(), &hud, Viewport::new(w, h));
        term.draw(&fb)?;

        if !event::poll(Duration::from_millis(POLL_MS))? {
            continue;
        }

        match event::read()? {
            Event::Resize(_, _) => {
                term.invalidate();
            }
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }

                match session.phase() {
                    Phase::NotStarted => {
                        if let Some(n) = menu_size_key(key) {
                            session.start(n);
                            cursor = Coord::new(0, 0);
                            started_at = Instant::now();
                        }
                    }
                    Phase::InProgress => {
                        if let Some(action) = handle_key_event(key) {
                            apply_action(&mut session, &mut cursor, action);
                            if session.phase() == Phase::Solved {
                                solved_secs = started_at.elapsed().as_secs();
                            }
                        }
                    }
                    Phase::Solved => {
                        if handle_key_event(key) == Some(GameAction::Menu) {
                            session.reset();
                            cursor = Coord::new(0, 0);
                        }
                    }
                }
            }
            _ => {}
        }
    }
}

fn apply_action(session: &mut Session, cursor: &mut Coord, action: GameAction) {
    let max = session.size().saturating_sub(1);
    match action {
        GameAction::CursorUp => cursor.y = cursor.y.saturating_sub(1),
        GameAction::CursorDown => cursor.y = (cursor.y + 1).min(max),
        GameAction::CursorLeft => cursor.x = cursor.x.saturating_sub(1),
        GameAction::CursorRight => cursor.x = (cursor.x + 1).min(max),
        GameAction::Select => {
            if session.held().is_none() {
                // Refused pick-ups (empty or locked cell) are silent no-ops.
                let _ = session.pick_up(*cursor);
            } else {
                // Rejected drops release the tile; that is the designed
                // cancel path, so the outcome needs no handling here.
                let _ = session.drop_held(*cursor);
            }
        }
        GameAction::Cancel => session.cancel_hold(),
        GameAction::Menu => session.reset(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_args_defaults_to_menu() {
        let config = parse_args(&[]).unwrap();
        assert_eq!(config.size, None);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn parse_args_reads_size_and_seed() {
        let config = parse_args(&strings(&["--size", "5", "--seed", "42"])).unwrap();
        assert_eq!(config.size, Some(5));
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn parse_args_rejects_bad_input() {
        assert!(parse_args(&strings(&["--size"])).is_err());
        assert!(parse_args(&strings(&["--size", "1"])).is_err());
        assert!(parse_args(&strings(&["--size", "10"])).is_err());
        assert!(parse_args(&strings(&["--seed", "abc"])).is_err());
        assert!(parse_args(&strings(&["--what"])).is_err());
    }

    #[test]
    fn cursor_clamps_to_the_board() {
        let mut session = Session::new(1);
        session.start(3);
        let mut cursor = Coord::new(0, 0);

        apply_action(&mut session, &mut cursor, GameAction::CursorUp);
        apply_action(&mut session, &mut cursor, GameAction::CursorLeft);
        assert_eq!(cursor, Coord::new(0, 0));

        for _ in 0..5 {
            apply_action(&mut session, &mut cursor, GameAction::CursorRight);
            apply_action(&mut session, &mut cursor, GameAction::CursorDown);
        }
        assert_eq!(cursor, Coord::new(2, 2));
    }

    #[test]
    fn select_toggles_between_pick_and_drop() {
        let mut session = Session::new(1);
        session.start(2);
        let mut cursor = Coord::new(0, 0);

        apply_action(&mut session, &mut cursor, GameAction::Select);
        assert!(session.held().is_some());

        // Move to the empty (1,0) cell and drop; this solves the 2-board.
        apply_action(&mut session, &mut cursor, GameAction::CursorRight);
        apply_action(&mut session, &mut cursor, GameAction::Select);
        assert!(session.held().is_none());
        assert_eq!(session.phase(), Phase::Solved);
    }

    #[test]
    fn reselecting_the_held_cell_releases_it() {
        let mut session = Session::new(1);
        session.start(3);
        let mut cursor = Coord::new(0, 0);

        apply_action(&mut session, &mut cursor, GameAction::Select);
        assert!(session.held().is_some());

        // Same cell again: the drop lands on an occupied target and the
        // pickup is cancelled.
        apply_action(&mut session, &mut cursor, GameAction::Select);
        assert!(session.held().is_none());
        assert_eq!(session.phase(), Phase::InProgress);
    }
}
