//! System clipboard access for terminal sessions.
//!
//! The OSC 52 escape sequence is tried first since it also works over SSH and
//! inside tmux; native clipboard tools are the fallback.

use std::env;
use std::io::{self, Write};
use std::process::{Command, Stdio};

use base64::Engine;
use icofz_core::{Clipboard, ClipboardError};
use tracing::debug;

/// Clipboard writer used by the interactive finder.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalClipboard {
	native_only: bool,
}

impl TerminalClipboard {
	/// Skip OSC 52 and only use native tools, for terminals that ignore it.
	#[must_use]
	pub fn native_only() -> Self {
		Self { native_only: true }
	}
}

impl Clipboard for TerminalClipboard {
	fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
		if !self.native_only && write_osc52(&mut io::stdout().lock(), text).is_ok() {
			return Ok(());
		}
		write_native(text)
	}
}

/// Encode `text` as an OSC 52 "set clipboard" sequence, wrapped for tmux
/// passthrough when running inside tmux.
#[must_use]
pub fn osc52_sequence(text: &str, tmux: bool) -> String {
	let encoded = base64::engine::general_purpose::STANDARD.encode(text);
	if tmux {
		format!("\x1bPtmux;\x1b\x1b]52;c;{encoded}\x07\x1b\\")
	} else {
		format!("\x1b]52;c;{encoded}\x07")
	}
}

fn write_osc52(out: &mut impl Write, text: &str) -> io::Result<()> {
	let sequence = osc52_sequence(text, env::var_os("TMUX").is_some());
	out.write_all(sequence.as_bytes())?;
	out.flush()
}

fn write_native(text: &str) -> Result<(), ClipboardError> {
	let mut candidates: Vec<(&str, &[&str])> = Vec::new();
	if env::var_os("WAYLAND_DISPLAY").is_some() {
		candidates.push(("wl-copy", &[]));
	}
	candidates.push(("xclip", &["-selection", "clipboard"]));
	candidates.push(("xsel", &["--clipboard", "--input"]));
	candidates.push(("pbcopy", &[]));

	for (program, args) in candidates {
		match pipe_to(program, args, text) {
			Ok(true) => return Ok(()),
			Ok(false) => debug!(program, "clipboard tool exited unsuccessfully"),
			Err(err) => debug!(program, error = %err, "clipboard tool unavailable"),
		}
	}
	Err(ClipboardError::Unavailable)
}

fn pipe_to(program: &str, args: &[&str], text: &str) -> io::Result<bool> {
	let mut child = Command::new(program)
		.args(args)
		.stdin(Stdio::piped())
		.stdout(Stdio::null())
		.stderr(Stdio::null())
		.spawn()?;
	let written = match child.stdin.take() {
		Some(mut stdin) => stdin.write_all(text.as_bytes()),
		None => Ok(()),
	};
	// The child is reaped even when the write failed.
	let status = child.wait()?;
	written?;
	Ok(status.success())
}
