use std::{fmt, fs::OpenOptions, io::Write, path::PathBuf};

use anyhow::Context as _;
use chrono::{DateTime, FixedOffset};
use log::{debug, warn};

use crate::{context::Context, dialect::Dialect, metadata::PostMetadata, renderer};

/// Outcome of one run, printed as is.
#[derive(Debug)]
pub(crate) enum Report {
    Created {
        path: PathBuf,
        preview_url: Option<String>,
        hint: Option<&'static str>,
    },
    Failed {
        error: anyhow::Error,
    },
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Created {
                path,
                preview_url,
                hint,
            } => {
                write!(f, "✅ Created new post template: {}", path.display())?;
                if let Some(url) = preview_url {
                    write!(f, "\n   Preview: {url}")?;
                }
                if let Some(hint) = hint {
                    write!(f, "\n   {hint}")?;
                }
                Ok(())
            }
            Report::Failed { error } => write!(f, "❌ Failed to create post: {error:#}"),
        }
    }
}

/// Writes the skeleton and returns its metadata.
/// An existing file at the same path is overwritten.
pub(crate) fn generate(ctx: &Context, now: &DateTime<FixedOffset>) -> anyhow::Result<PostMetadata> {
    let metadata = PostMetadata::new(ctx, now);
    debug!("{metadata:?}");

    let handlebars = renderer::generate_renderer(ctx.template_dir.as_deref())?;
    let body = handlebars
        .render(ctx.dialect.name(), &metadata)
        .with_context(|| format!("while rendering {} front matter", ctx.dialect))?;

    if !ctx.out_dir.exists() {
        debug!("creating {:?}", ctx.out_dir);
        fs_extra::dir::create_all(&ctx.out_dir, false)
            .with_context(|| format!("while creating {:?}", ctx.out_dir))?;
    }

    if metadata.path.exists() {
        warn!("{:?} already exists, overwriting", metadata.path);
    }
    let mut fd = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&metadata.path)
        .with_context(|| format!("while opening {:?}", metadata.path))?;
    fd.write_all(body.as_bytes())
        .with_context(|| format!("while writing {:?}", metadata.path))?;

    Ok(metadata)
}

/// `generate`, with any failure turned into a report instead of an error.
pub(crate) fn run(ctx: &Context, now: &DateTime<FixedOffset>) -> Report {
    match generate(ctx, now) {
        Ok(metadata) => Report::Created {
            preview_url: metadata.preview_url(ctx),
            hint: match ctx.dialect {
                Dialect::Jekyll => Some("Replace TITLE, TAG1, TAG2 and start writing."),
                Dialect::Hugo => None,
            },
            path: metadata.path,
        },
        Err(error) => Report::Failed { error },
    }
}
