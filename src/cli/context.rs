//! CLI context - bundles settings, flags, and clipboard state.

use std::io;

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use super::{CliFlags, help, prompts, quiet};
use crate::error::{Error, Result};
use crate::logger;
use crate::rand::{CycleCounter, EntropySource, Jytter, source_name};
use crate::report::Report;
use crate::settings::Settings;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub clipboard: Option<ClipboardContext>,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    pub fn new(args: &[String]) -> Result<Self> {
        let flags = super::parse(args)?;
        Ok(Self {
            settings: Settings::default(),
            clipboard: None,
            flags,
        })
    }

    /// Run CLI to completion.
    pub fn run(&mut self) -> Result<()> {
        if self.handle_info_flags() {
            return Ok(());
        }
        self.apply_flags()?;
        self.generate_output()
    }

    /// Print help or version. Returns true if the run ends here.
    fn handle_info_flags(&self) -> bool {
        if self.flags.help {
            help::print_help();
            return true;
        }
        if self.flags.version {
            println!("jytter {}", env!("CARGO_PKG_VERSION"));
            return true;
        }
        false
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) -> Result<()> {
        self.settings.quiet = self.flags.quiet;
        self.settings.verbose = self.flags.verbose;
        quiet::set(self.settings.quiet);
        logger::init(logger::level_for(self.settings.quiet, self.settings.verbose));

        for &request in &self.flags.requests {
            self.settings.push_custom(request);
        }

        if self.flags.clipboard {
            match ClipboardContext::new() {
                Ok(c) => {
                    self.clipboard = Some(c);
                    self.settings.to_clipboard = true;
                }
                Err(e) => {
                    log::debug!("clipboard init failed: {e}");
                    if !prompts::clipboard_fallback_prompt() {
                        return Err(Error::Clipboard(e.to_string()));
                    }
                }
            }
        }
        Ok(())
    }

    /// Draw everything, then print and/or copy it.
    pub fn generate_output(&mut self) -> Result<()> {
        let mut source = Jytter::new();
        log::debug!(
            "entropy source: {} on {}",
            source.name(),
            source_name()
        );

        let report = Report::generate(&mut source, &mut CycleCounter, &self.settings);
        let printed_passwords = !self.settings.to_clipboard;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        if self.settings.quiet {
            report.write_quiet(&mut out, printed_passwords)?;
        } else {
            report.write(&mut out, printed_passwords)?;
        }
        drop(out);

        if let Some(ctx) = self.clipboard.as_mut() {
            let mut text = report.passwords_text();
            let copied = ctx.set_contents(text.clone());
            text.zeroize();
            copied.map_err(|e| Error::Clipboard(e.to_string()))?;
            if let Ok(mut retrieved) = ctx.get_contents() {
                retrieved.zeroize();
            }
            prompts::clipboard_copied(report.passwords.len());
        }
        Ok(())
    }
}
