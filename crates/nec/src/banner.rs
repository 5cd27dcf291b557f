//! Animated welcome banner

use std::time::{Duration, Instant};

use console::{Color, Style, Term};

const TITLE: &str = "Welcome to NEC - the Node Ecosystem CLI!";
const FRAME: Duration = Duration::from_millis(80);
const PALETTE: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Blue,
    Color::Magenta,
];

/// Color `text` with the palette shifted by `offset`
fn rainbow(text: &str, offset: usize) -> String {
    text.chars()
        .enumerate()
        .map(|(i, c)| {
            let color = PALETTE[(i + offset) % PALETTE.len()];
            Style::new().fg(color).bold().apply_to(c).to_string()
        })
        .collect()
}

/// Play the banner for `duration`, then clear the screen
///
/// Does nothing when stdout is not a terminal.
pub async fn play(duration: Duration) -> std::io::Result<()> {
    let term = Term::stdout();
    if !term.is_term() {
        return Ok(());
    }

    term.clear_screen()?;
    term.write_line("")?;
    let started = Instant::now();
    let mut frame = 0;
    while started.elapsed() < duration {
        term.clear_line()?;
        term.write_str(&rainbow(TITLE, frame))?;
        frame += 1;
        tokio::time::sleep(FRAME).await;
    }
    term.write_line("")?;
    term.clear_screen()?;
    Ok(())
}
