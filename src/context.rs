use std::{path::PathBuf, sync::OnceLock};

use log::debug;
use regex::Regex;

use crate::dialect::Dialect;

pub(crate) const DEFAULT_SLUG: &str = "new-post";

/// Everything one run needs to know, resolved from defaults and command line.
#[derive(Debug, Clone)]
pub(crate) struct Context {
    pub dialect: Dialect,
    pub out_dir: PathBuf,
    pub slug: String,
    /// Segment between date and slug in the file name.
    pub category: Option<String>,
    /// Emit a `categories` field (hugo).
    pub with_categories: bool,
    pub preview_base: Option<String>,
    pub template_dir: Option<PathBuf>,
}

impl Context {
    /// Defaults reproducing the plain script for `dialect`.
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            out_dir: dialect.default_out_dir(),
            slug: DEFAULT_SLUG.to_string(),
            category: dialect.default_category().map(str::to_string),
            with_categories: false,
            preview_base: dialect.default_preview_base().map(str::to_string),
            template_dir: None,
        }
    }

    pub fn with_slug(mut self, slug: &str) -> Self {
        let s = slugify(slug);
        if s.is_empty() {
            debug!("slug {slug:?} is empty after normalization, keeping {DEFAULT_SLUG}");
            self.slug = DEFAULT_SLUG.to_string();
        } else {
            self.slug = s;
        }
        self
    }

    /// An empty category removes the file name segment.
    pub fn with_category(mut self, category: &str) -> Self {
        let c = slugify(category);
        self.category = if c.is_empty() { None } else { Some(c) };
        self
    }
}

/// Lowercases and joins runs of ASCII alphanumerics with `-`.
pub(crate) fn slugify(s: &str) -> String {
    static NON_SLUG: OnceLock<Regex> = OnceLock::new();
    let re = NON_SLUG.get_or_init(|| Regex::new(r"[^a-z0-9]+").unwrap());
    re.replace_all(&s.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}
