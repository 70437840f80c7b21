//! # Wash time console
//!
//! Prompts for a dirt level and a grease level, then prints the recommended
//! wash time together with the activation of each output term.
//!
//! ```text
//! cargo run --example wash_time --features std
//! RUST_LOG=fuzzy_wash=trace cargo run --example wash_time --features std
//! ```

use std::io::{self, BufRead, Write};

use fuzzy_wash::{LinguisticTerm, WashController};
use tracing_subscriber::EnvFilter;

// ── Display helpers ───────────────────────────────────────────────────────────

fn bar(v: f64) -> String {
    let filled = (v * 20.0).round() as usize;
    let empty = 20usize.saturating_sub(filled);
    format!("[{}{}] {:.2}", "█".repeat(filled), "░".repeat(empty), v)
}

fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>, label: &str) -> io::Result<Option<f64>> {
    loop {
        print!("{label}: ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(None);
        };
        match line?.trim().parse::<f64>() {
            Ok(v) => return Ok(Some(v)),
            Err(_) => println!("  not a number, try again"),
        }
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let controller = WashController::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let Some(dirt) = prompt(&mut lines, "Enter dirt level (0-100)")? else {
        return Ok(());
    };
    let Some(grease) = prompt(&mut lines, "Enter grease level (0-50)")? else {
        return Ok(());
    };

    let inference = controller.evaluate(dirt, grease);

    println!();
    for (term, level) in inference.activations.iter() {
        println!("  {:<4} {}", term.label(), bar(level));
    }
    println!("\nWash Time: {:.2} minutes", inference.wash_time);
    Ok(())
}
