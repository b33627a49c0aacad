//! One full run: draw every request, then render it.

use std::io::{self, Write};

use zeroize::Zeroize;

use crate::hex::format_hex_words;
use crate::pass::format_password;
use crate::rand::{Clock, EntropySource};
use crate::settings::{Kind, OutputRequest, Settings};
use crate::timing::{format_ticks, measure};

/// A generated line and the request behind it.
pub struct Line {
    pub request: OutputRequest,
    pub value: String,
}

pub struct Report {
    pub hex: Vec<Line>,
    pub passwords: Vec<Line>,
    /// Cycle-counter ticks spent drawing and formatting.
    pub ticks: u64,
}

impl Report {
    /// Draw hex requests first, then passwords, in table order.
    pub fn generate<S, C>(source: &mut S, clock: &mut C, settings: &Settings) -> Self
    where
        S: EntropySource,
        C: Clock,
    {
        let ((hex, passwords), ticks) = measure(clock, || {
            let hex = settings
                .hex
                .iter()
                .map(|&request| Line {
                    request,
                    value: render(source, request),
                })
                .collect::<Vec<_>>();
            let passwords = settings
                .passwords
                .iter()
                .map(|&request| Line {
                    request,
                    value: render(source, request),
                })
                .collect::<Vec<_>>();
            (hex, passwords)
        });

        log::debug!(
            "{} hex line(s), {} password(s) in {} ticks",
            hex.len(),
            passwords.len(),
            ticks
        );

        Self {
            hex,
            passwords,
            ticks,
        }
    }

    /// Passwords joined by newlines, for the clipboard.
    pub fn passwords_text(&self) -> String {
        let mut text = String::new();
        for line in &self.passwords {
            text.push_str(&line.value);
            text.push('\n');
        }
        text
    }

    /// Render labelled sections followed by the tick count.
    ///
    /// When `with_passwords` is false the password section is left out.
    pub fn write<W: Write>(&self, out: &mut W, with_passwords: bool) -> io::Result<()> {
        if !self.hex.is_empty() {
            writeln!(out, "True random integers:")?;
            for line in &self.hex {
                write!(out, "\n{} {}", line.request.label(), line.value)?;
            }
        }

        if with_passwords && !self.passwords.is_empty() {
            if !self.hex.is_empty() {
                write!(out, "\n\n")?;
            }
            writeln!(out, "True random alphanumeric passwords:")?;
            for line in &self.passwords {
                write!(out, "\n{} {}", line.request.label(), line.value)?;
            }
        }

        write!(
            out,
            "\n\nExecution time in CPU ticks:\n\n{}\n",
            format_ticks(self.ticks)
        )?;
        out.flush()
    }

    /// Values only, one per line.
    pub fn write_quiet<W: Write>(&self, out: &mut W, with_passwords: bool) -> io::Result<()> {
        for line in &self.hex {
            writeln!(out, "{}", line.value)?;
        }
        if with_passwords {
            for line in &self.passwords {
                writeln!(out, "{}", line.value)?;
            }
        }
        out.flush()
    }
}

impl Drop for Report {
    fn drop(&mut self) {
        for line in &mut self.passwords {
            line.value.zeroize();
        }
    }
}

fn render<S: EntropySource>(source: &mut S, request: OutputRequest) -> String {
    match request.kind {
        Kind::Hex => format_hex_words(source, request.count),
        Kind::Password => format_password(source, request.count),
    }
}
