//! `otpvault show` — live code view with a rotation countdown.
//!
//! The loop re-samples the clock and recomputes the code every tick;
//! nothing about the countdown is cached.  Cancellation is cooperative:
//! a key-listener thread sets a flag that the loop checks each tick.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use chrono::Utc;
use console::{style, Key, Term};

use crate::cli::{open_vault, Cli};
use crate::errors::Result;
use crate::totp::{self, TIME_STEP};

/// Refresh cadence of the code view.
const TICK: Duration = Duration::from_millis(500);

/// Width of the countdown progress bar in characters.
const BAR_WIDTH: u64 = 30;

/// Execute the `show` command.
pub fn execute(cli: &Cli, name: &str) -> Result<()> {
    let store = open_vault(cli)?;
    let secret = store.get_secret(name)?.to_string();

    let term = Term::stdout();

    // When stdout is piped there is no countdown to draw — print the
    // current code once and exit.
    if !term.is_term() {
        let now = unix_now();
        let current = totp::current_code(&secret, now)?;
        println!("{}", current.code);
        return Ok(());
    }

    watch(&term, name, &secret)
}

/// Run the interactive countdown loop until `q`/Esc is pressed.
fn watch(term: &Term, name: &str, secret: &str) -> Result<()> {
    let quit = Arc::new(AtomicBool::new(false));

    // Key listener: sets the quit flag, never touches the display.
    {
        let quit = Arc::clone(&quit);
        let keys = Term::stdout();
        thread::spawn(move || loop {
            match keys.read_key() {
                Ok(Key::Char('q') | Key::Escape) | Err(_) => {
                    quit.store(true, Ordering::SeqCst);
                    break;
                }
                _ => {}
            }
        });
    }

    term.hide_cursor()?;
    let mut drawn_lines = 0;

    while !quit.load(Ordering::SeqCst) {
        let now = unix_now();
        let current = match totp::current_code(secret, now) {
            Ok(c) => c,
            Err(e) => {
                term.show_cursor()?;
                return Err(e);
            }
        };

        let filled = (current.seconds_remaining * BAR_WIDTH / TIME_STEP) as usize;
        let bar = format!(
            "{}{}",
            "\u{2588}".repeat(filled),
            "\u{2500}".repeat(BAR_WIDTH as usize - filled)
        );

        term.clear_last_lines(drawn_lines)?;
        term.write_line(&format!("Secret: {name}"))?;
        term.write_line(&format!(
            "Current code: {}",
            style(&current.code).cyan().bold()
        ))?;
        term.write_line(&bar)?;
        term.write_line(&format!(
            "Rotates in {} second(s) — press 'q' to quit",
            current.seconds_remaining
        ))?;
        drawn_lines = 4;

        thread::sleep(TICK);
    }

    term.show_cursor()?;
    Ok(())
}

/// Current Unix time in whole seconds.
fn unix_now() -> u64 {
    u64::try_from(Utc::now().timestamp()).unwrap_or(0)
}
