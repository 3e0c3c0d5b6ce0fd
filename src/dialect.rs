use std::{fmt, path::PathBuf, str::FromStr};

use anyhow::bail;

/// Front matter flavor of the target static site generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Dialect {
    Jekyll,
    Hugo,
}

impl Dialect {
    pub const NAMES: [&'static str; 2] = ["jekyll", "hugo"];

    pub fn name(self) -> &'static str {
        match self {
            Dialect::Jekyll => "jekyll",
            Dialect::Hugo => "hugo",
        }
    }

    /// chrono format of the `date` field.
    pub fn timestamp_format(self) -> &'static str {
        match self {
            Dialect::Jekyll => "%Y-%m-%d %H:%M:%S %z",
            Dialect::Hugo => "%Y-%m-%dT%H:%M:%S%:z",
        }
    }

    pub fn default_out_dir(self) -> PathBuf {
        match self {
            Dialect::Jekyll => PathBuf::from("_posts"),
            Dialect::Hugo => PathBuf::from("content").join("posts"),
        }
    }

    /// Category segment put into the file name when none is given.
    pub fn default_category(self) -> Option<&'static str> {
        match self {
            Dialect::Jekyll => Some("uncategorized"),
            Dialect::Hugo => None,
        }
    }

    pub fn title_placeholder(self) -> &'static str {
        match self {
            Dialect::Jekyll => "🌱🌳TITLE",
            Dialect::Hugo => "TITLE",
        }
    }

    /// `hugo server` listens on 1313 by default.
    pub fn default_preview_base(self) -> Option<&'static str> {
        match self {
            Dialect::Jekyll => None,
            Dialect::Hugo => Some("http://localhost:1313"),
        }
    }

    /// Local preview address of a post, if the dialect has a predictable permalink.
    /// `stem` is the post file name without `.md`, which hugo uses as the page slug.
    pub fn preview_url(self, base: &str, stem: &str) -> Option<String> {
        match self {
            Dialect::Jekyll => None,
            Dialect::Hugo => Some(format!("{}/posts/{}/", base.trim_end_matches('/'), stem)),
        }
    }
}

impl FromStr for Dialect {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "jekyll" => Ok(Dialect::Jekyll),
            "hugo" => Ok(Dialect::Hugo),
            other => bail!("unknown dialect: {other}"),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
