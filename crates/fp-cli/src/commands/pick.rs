use std::io::{IsTerminal, Write};
use std::path::Path;
use std::time::Duration;

use colored::Colorize;

use crate::input;

/// Interim draws shown before the final result.
const SPIN_TICKS: u32 = 30;
/// Delay between interim draws.
const SPIN_INTERVAL: Duration = Duration::from_millis(60);

pub fn run(
    inline: &[String],
    file: Option<&Path>,
    spin: bool,
    seed: Option<u64>,
) -> Result<(), String> {
    let entries = input::gather(inline, file)?;
    super::require(&entries, 2, "enter at least 2 items to draw")?;

    let mut picker = super::picker(seed);
    let mut stdout = std::io::stdout();

    if spin && stdout.is_terminal() {
        let width = entries.iter().map(|e| e.chars().count()).max().unwrap_or(0);
        for _ in 0..SPIN_TICKS {
            let candidate = picker.draw(&entries).map_err(|e| e.to_string())?;
            print!("\r  {} {:<width$}", "Shuffling...".dimmed(), candidate);
            stdout.flush().map_err(|e| e.to_string())?;
            std::thread::sleep(SPIN_INTERVAL);
        }
        print!("\r{:<pad$}\r", "", pad = width + 16);
    }

    let winner = picker.draw(&entries).map_err(|e| e.to_string())?;

    println!("  {}", "Selection Complete".bold());
    println!();
    println!("  {}", winner.green().bold());
    println!();
    println!("  drawn from {} entries", entries.len());

    Ok(())
}
