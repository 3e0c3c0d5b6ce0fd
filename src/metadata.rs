use std::path::PathBuf;

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::context::Context;

const TAG_PLACEHOLDERS: [&str; 2] = ["TAG1", "TAG2"];
const CATEGORY_PLACEHOLDERS: [&str; 1] = ["CATEGORY"];

/// Data of the post skeleton about to be written. Also the template context.
#[derive(Serialize, Debug, Clone)]
pub(crate) struct PostMetadata {
    pub date: String,
    pub timestamp: String,
    pub title: String,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
    pub draft: bool,
    pub slug: String,
    pub category: Option<String>,
    /// File name without extension.
    pub stem: String,

    #[serde(skip_serializing)]
    pub path: PathBuf,
}

impl PostMetadata {
    pub fn new(ctx: &Context, now: &DateTime<FixedOffset>) -> Self {
        let date = now.format("%Y-%m-%d").to_string();
        let timestamp = now.format(ctx.dialect.timestamp_format()).to_string();

        let stem = match &ctx.category {
            Some(category) => format!("{}-{}-{}", date, category, ctx.slug),
            None => format!("{}-{}", date, ctx.slug),
        };

        Self {
            path: ctx.out_dir.join(format!("{stem}.md")),
            stem,
            date,
            timestamp,
            title: ctx.dialect.title_placeholder().to_string(),
            tags: TAG_PLACEHOLDERS.iter().map(|s| s.to_string()).collect(),
            categories: if ctx.with_categories {
                CATEGORY_PLACEHOLDERS.iter().map(|s| s.to_string()).collect()
            } else {
                vec![]
            },
            draft: false,
            slug: ctx.slug.clone(),
            category: ctx.category.clone(),
        }
    }

    pub fn preview_url(&self, ctx: &Context) -> Option<String> {
        let base = ctx.preview_base.as_deref()?;
        ctx.dialect.preview_url(base, &self.stem)
    }
}
