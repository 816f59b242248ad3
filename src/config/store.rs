//! Flat-file `name = "value"` store that keeps comments and line order.

use std::fs;
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}

#[derive(Debug, Clone, PartialEq)]
enum Line {
    /// Comment or blank line, kept verbatim
    Verbatim(String),
    Entry { name: String, value: String },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigStore {
    lines: Vec<Line>,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse store text. Values may be quoted or bare; quotes are stripped.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut lines = Vec::new();
        for (number, raw) in content.lines().enumerate() {
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                lines.push(Line::Verbatim(raw.to_string()));
                continue;
            }
            let (name, value) = trimmed.split_once('=').ok_or_else(|| ConfigError::Parse {
                line: number + 1,
                message: format!("expected name = \"value\", got '{}'", trimmed),
            })?;
            let name = name.trim();
            if name.is_empty() {
                return Err(ConfigError::Parse {
                    line: number + 1,
                    message: "missing setting name".to_string(),
                });
            }
            lines.push(Line::Entry {
                name: name.to_string(),
                value: unquote(value.trim(), number + 1)?,
            });
        }
        Ok(Self { lines })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Render back to text, entries as `name = "value"`.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            match line {
                Line::Verbatim(text) => out.push_str(text),
                Line::Entry { name, value } => {
                    out.push_str(&format!("{} = \"{}\"", name, value));
                }
            }
            out.push('\n');
        }
        out
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_text())?;
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.lines.iter().find_map(|line| match line {
            Line::Entry { name: n, value } if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    /// Replace the value in place, or append a new entry at the end.
    pub fn set(&mut self, name: &str, value: &str) {
        for line in &mut self.lines {
            if let Line::Entry { name: n, value: v } = line {
                if n == name {
                    *v = value.to_string();
                    return;
                }
            }
        }
        self.lines.push(Line::Entry {
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    /// Remove an entry; returns whether it existed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.lines.len();
        self.lines
            .retain(|line| !matches!(line, Line::Entry { name: n, .. } if n == name));
        self.lines.len() != before
    }

    /// Entry names in file order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().filter_map(|line| match line {
            Line::Entry { name, .. } => Some(name.as_str()),
            Line::Verbatim(_) => None,
        })
    }
}

fn unquote(value: &str, line: usize) -> Result<String, ConfigError> {
    match value.strip_prefix('"') {
        Some(rest) => rest
            .strip_suffix('"')
            .map(str::to_string)
            .ok_or_else(|| ConfigError::Parse {
                line,
                message: "unterminated quoted value".to_string(),
            }),
        None => Ok(value.to_string()),
    }
}
