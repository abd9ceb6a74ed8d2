//! Output rendering abstraction for ask.
//!
//! Defines the [`Renderer`] trait that decouples model output from the
//! console. [`StdoutRenderer`] prints the reply on stdout and diagnostics
//! on stderr so that `ask api:claude "..." > out.txt` captures only the
//! model's text.

use colored::Colorize;
use std::io::{self, Write};

/// Trait for rendering a reply and errors.
pub trait Renderer {
    /// Render the model's reply.
    fn render_text(&mut self, text: &str);

    /// Render a failure diagnostic.
    fn render_error(&mut self, err: &str);
}

/// Renders to the process's stdout and stderr.
pub struct StdoutRenderer;

impl Renderer for StdoutRenderer {
    fn render_text(&mut self, text: &str) {
        let mut stdout = io::stdout().lock();
        // A closed pipe (`ask ... | head -1`) is not worth a panic.
        writeln!(stdout, "{}", text).ok();
        stdout.flush().ok();
    }

    fn render_error(&mut self, err: &str) {
        eprintln!("{} {}", "error:".red().bold(), err);
    }
}
