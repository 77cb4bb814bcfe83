//! Command-line argument parsing for the replay binary
//!
//! The binary seeds a buffer from a file or inline text, types a key script
//! through an [`EditSession`] and prints the result. Useful for checking
//! indent behaviour on real files without an editor.

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::assist::EditSession;
use crate::config::AssistConfig;

/// Replay keystrokes through bracket auto-closing and auto-indent
#[derive(Parser, Debug)]
#[command(name = "edit-assist", version, about = "Replay keystrokes through auto-indent")]
pub struct CliArgs {
    /// File whose content seeds the buffer
    #[arg(value_name = "FILE", conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Inline initial buffer content
    #[arg(long)]
    pub text: Option<String>,

    /// Initial cursor offset in characters (defaults to end of buffer)
    #[arg(long, value_name = "N")]
    pub cursor: Option<usize>,

    /// Keys to type. `\n` is Enter, `\t` is Tab, `\\` is a backslash
    #[arg(short, long, value_name = "KEYS", default_value = "")]
    pub keys: String,

    /// Config file (defaults to ~/.config/edit-assist/config.yaml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable auto-indent on Enter
    #[arg(long)]
    pub no_indent: bool,

    /// Disable bracket auto-closing
    #[arg(long)]
    pub no_brackets: bool,

    /// Print the final cursor offset to stderr
    #[arg(long)]
    pub show_cursor: bool,
}

/// A resolved replay: initial text, cursor, keys and config
#[derive(Debug, Clone)]
pub struct Replay {
    pub text: String,
    pub cursor: Option<usize>,
    pub keys: String,
    pub config: AssistConfig,
    pub show_cursor: bool,
}

impl CliArgs {
    /// Read the seed text and config, decode the key script
    pub fn into_replay(self) -> Result<Replay> {
        let text = match (&self.file, self.text) {
            (Some(path), _) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
            (None, Some(text)) => text,
            (None, None) => String::new(),
        };

        let mut config = match &self.config {
            Some(path) => AssistConfig::load_from(path)?,
            None => AssistConfig::load(),
        };
        if self.no_indent {
            config.auto_indent = false;
        }
        if self.no_brackets {
            config.auto_close_brackets = false;
        }

        Ok(Replay {
            text,
            cursor: self.cursor,
            keys: decode_keys(&self.keys)?,
            config,
            show_cursor: self.show_cursor,
        })
    }
}

impl Replay {
    /// Type the keys and return the final session
    pub fn run(&self) -> EditSession {
        let cursor = self.cursor.unwrap_or(usize::MAX);
        let mut session = EditSession::from_text(&self.text, &self.config).with_cursor(cursor);
        session.type_text(&self.keys);
        session
    }
}

/// Decode the escapes of a key script
pub fn decode_keys(script: &str) -> Result<String> {
    let mut keys = String::with_capacity(script.len());
    let mut chars = script.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            keys.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => keys.push('\n'),
            Some('t') => keys.push('\t'),
            Some('\\') => keys.push('\\'),
            Some(other) => bail!("Unknown escape \\{} in key script", other),
            None => bail!("Key script ends with a lone backslash"),
        }
    }
    Ok(keys)
}
