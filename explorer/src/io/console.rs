//! Line-oriented terminal I/O: prompts, colored messages, pacing, and the banner.

use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::style::{Color, Stylize};
use rand::Rng;
use rand::seq::SliceRandom;

const PACING_DOTS: u32 = 5;

const QUOTES: [&str; 4] = [
    "Life is too short for bad coffee!",
    "There's no place like 127.0.0.1!",
    "Procrastination is the art of keeping up with yesterday.",
    "The best way to predict the future is to invent it!",
];

/// Semantic color of an output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Heading,
    Directory,
    Success,
    Warning,
    Error,
}

impl Tone {
    fn color(self) -> Option<Color> {
        match self {
            Self::Plain => None,
            Self::Heading => Some(Color::Blue),
            Self::Directory | Self::Warning => Some(Color::Yellow),
            Self::Success => Some(Color::Green),
            Self::Error => Some(Color::Red),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleOptions {
    pub color: bool,
    /// Total duration of the "Please wait" animation.
    pub pacing: Duration,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self {
            color: true,
            pacing: Duration::from_millis(2_500),
        }
    }
}

/// Interactive console over any buffered reader and writer.
///
/// Production wires stdin/stdout; tests use `Cursor` and `Vec<u8>`.
pub struct Console<R, W> {
    input: R,
    output: W,
    options: ConsoleOptions,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, options: ConsoleOptions) -> Self {
        Self {
            input,
            output,
            options,
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `label` (no newline) and read one line.
    ///
    /// Returns `None` at end of input. The trailing line ending is stripped;
    /// other whitespace is kept because it may be part of a file name.
    pub fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}").context("write prompt")?;
        self.output.flush().context("flush prompt")?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("read input")?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Some(trimmed.to_string()))
    }

    /// Write one line in the given tone.
    pub fn line(&mut self, tone: Tone, text: &str) -> Result<()> {
        self.paint(tone, text)?;
        writeln!(self.output).context("write output")
    }

    fn paint(&mut self, tone: Tone, text: &str) -> Result<()> {
        let written = match tone.color().filter(|_| self.options.color) {
            Some(color) => write!(self.output, "{}", text.with(color)),
            None => write!(self.output, "{text}"),
        };
        written.context("write output")
    }

    /// Show `<action>... Please wait` followed by dots spread over the pacing
    /// duration. Blocks the caller; a zero duration prints without sleeping.
    pub fn pace(&mut self, action: &str) -> Result<()> {
        writeln!(self.output).context("write output")?;
        self.paint(Tone::Warning, &format!("{action}... Please wait"))?;
        let tick = self.options.pacing / PACING_DOTS;
        for _ in 0..PACING_DOTS {
            self.paint(Tone::Warning, ".")?;
            self.output.flush().context("flush output")?;
            if !tick.is_zero() {
                thread::sleep(tick);
            }
        }
        writeln!(self.output).context("write output")
    }

    /// Welcome banner followed by a random quote.
    pub fn welcome<G: Rng + ?Sized>(&mut self, rng: &mut G) -> Result<()> {
        writeln!(self.output).context("write output")?;
        self.line(Tone::Heading, "(: Welcome to the Simple File Explorer :)")?;
        writeln!(self.output).context("write output")?;
        self.line(
            Tone::Success,
            &format!("* Fun Quote: \"{}\"", fun_quote(rng)),
        )
    }
}

/// Pick one of the built-in quotes.
pub fn fun_quote<G: Rng + ?Sized>(rng: &mut G) -> &'static str {
    QUOTES.choose(rng).copied().unwrap_or(QUOTES[0])
}
