//! CLI context - bundles flags, entropy source and clipboard state.

use copypasta::{ClipboardContext, ClipboardProvider};
use tracing::debug;
use zeroize::Zeroize;

use passgauge::pass::{CharsetOptions, charset};
use passgauge::{Entropy, Error, GenerationConfig, GenerationResult, Mode, Result};

use super::{CliFlags, prompts};
use crate::terminal::{ReportInfo, print_result};

/// Application context for one CLI run.
pub struct Context {
    flags: CliFlags,
    config: GenerationConfig,
    rng: Entropy,
    clipboard: Option<ClipboardContext>,
}

impl Context {
    pub fn new(flags: CliFlags) -> Self {
        let config = flags.config();
        let rng = Entropy::new(flags.seed);
        Self {
            flags,
            config,
            rng,
            clipboard: None,
        }
    }

    /// Generate, print and optionally copy every requested secret.
    pub fn run(&mut self) -> Result<()> {
        prompts::set_quiet(self.flags.quiet);
        self.config.validate()?;

        if !self.open_clipboard() {
            return Ok(());
        }
        self.check_pool();

        let count = self.flags.number.max(1);
        debug!(count, source = self.rng.source_name(), "generating");

        let mut copied = String::new();
        for index in 1..=count {
            let result = passgauge::generate(&self.config, &mut self.rng)?;
            if self.clipboard.is_some() {
                if !copied.is_empty() {
                    copied.push('\n');
                }
                copied.push_str(result.secret());
            }
            self.emit(&result, index, count)?;
        }

        if self.clipboard.is_some() {
            let outcome = self.copy(&copied, count);
            copied.zeroize();
            outcome?;
        }
        Ok(())
    }

    /// Returns false when the user declines to continue without a clipboard.
    fn open_clipboard(&mut self) -> bool {
        if !self.flags.board {
            return true;
        }
        match ClipboardContext::new() {
            Ok(ctx) => {
                self.clipboard = Some(ctx);
                true
            }
            Err(e) => {
                debug!(error = %e, "clipboard unavailable");
                prompts::clipboard_fallback_prompt()
            }
        }
    }

    fn check_pool(&self) {
        if self.config.mode == Mode::Charset
            && charset::build(&CharsetOptions::from(&self.config)).is_empty()
        {
            prompts::empty_pool();
        }
    }

    fn copy(&mut self, secrets: &str, count: usize) -> Result<()> {
        let Some(ctx) = self.clipboard.as_mut() else {
            return Ok(());
        };
        ctx.set_contents(secrets.to_string())
            .map_err(|e| Error::Clipboard(e.to_string()))?;
        if let Ok(mut retrieved) = ctx.get_contents() {
            retrieved.zeroize();
        }
        prompts::clipboard_copied(count);
        Ok(())
    }

    fn emit(&self, result: &GenerationResult, index: usize, total: usize) -> Result<()> {
        let copying = self.clipboard.is_some();

        if self.flags.json {
            println!("{}", result.to_json()?);
        } else if self.flags.quiet {
            if !copying {
                println!("{}", result.secret());
            }
        } else {
            let (title, pool) = match self.config.mode {
                Mode::Charset => (
                    "Password",
                    Some(charset::effective_size(&CharsetOptions::from(&self.config))),
                ),
                Mode::Passphrase => ("Passphrase", None),
            };
            print_result(
                result,
                &ReportInfo {
                    title,
                    index,
                    total,
                    source: self.rng.source_name(),
                    charset: pool,
                    masked: copying,
                },
            );
        }
        Ok(())
    }
}
