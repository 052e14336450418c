//! Opening outbound links
//!
//! Hands URLs to the platform opener (`xdg-open`, `open`, `url.dll`) so they
//! land in the user's browser or mail client.

use anyhow::{bail, Context, Result};
use std::process::{Command, Stdio};

/// Something that can open a URL outside the terminal
pub trait LinkOpener {
    fn open(&mut self, url: &str) -> Result<()>;
}

/// Opener backed by the desktop's default handler
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&mut self, url: &str) -> Result<()> {
        let (program, args) = opener_command(std::env::consts::OS, url);
        let status = Command::new(program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .with_context(|| format!("Failed to run {}", program))?;

        if !status.success() {
            bail!("{} exited with {}", program, status);
        }

        tracing::info!(url, "opened link");
        Ok(())
    }
}

/// Build the opener invocation for `os`. The URL is always a single argv
/// entry handed to a program that does not re-parse it through a shell.
fn opener_command(os: &str, url: &str) -> (&'static str, Vec<String>) {
    match os {
        "macos" => ("open", vec![url.to_string()]),
        "windows" => (
            "rundll32",
            vec!["url.dll,FileProtocolHandler".into(), url.to_string()],
        ),
        _ => ("xdg-open", vec![url.to_string()]),
    }
}
