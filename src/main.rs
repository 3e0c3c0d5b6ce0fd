use std::path::PathBuf;

use clap::{command, Arg, ArgAction, ArgMatches};
use log::info;

use context::Context;
use dialect::Dialect;

mod clock;
mod context;
mod dialect;
mod generator;
mod metadata;
mod renderer;

fn build_context(matches: &ArgMatches) -> anyhow::Result<Context> {
    let dialect: Dialect = matches
        .get_one::<String>("dialect")
        .map(String::as_str)
        .unwrap_or("jekyll")
        .parse()?;

    let mut ctx = Context::new(dialect);
    if let Some(out_dir) = matches.get_one::<PathBuf>("out_dir") {
        ctx.out_dir = out_dir.to_owned();
    }
    if let Some(slug) = matches.get_one::<String>("slug") {
        ctx = ctx.with_slug(slug);
    }
    if let Some(category) = matches.get_one::<String>("category") {
        ctx = ctx.with_category(category);
    }
    ctx.with_categories = matches.get_flag("with_categories");
    if let Some(base) = matches.get_one::<String>("preview_base") {
        ctx.preview_base = Some(base.to_owned());
    }
    if matches.get_flag("no_preview") {
        ctx.preview_base = None;
    }
    ctx.template_dir = matches.get_one::<PathBuf>("template_dir").cloned();

    Ok(ctx)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = command!()
        .about("Creates a blog post skeleton with front matter placeholders, dated in UTC+08:00")
        .args(&[
            Arg::new("dialect")
                .long("dialect")
                .help("Front matter flavor")
                .env("NEWPOST_DIALECT")
                .value_parser(Dialect::NAMES)
                .default_value("jekyll"),
            Arg::new("out_dir")
                .long("out-dir")
                .help("Directory to write the post into. Defaults to _posts (jekyll) or content/posts (hugo)")
                .value_parser(clap::value_parser!(PathBuf)),
            Arg::new("slug")
                .long("slug")
                .help("Slug used in the file name")
                .default_value(context::DEFAULT_SLUG),
            Arg::new("category")
                .long("category")
                .help("Category segment of the file name. Empty to omit it"),
            Arg::new("with_categories")
                .long("with-categories")
                .help("Add a categories placeholder to the front matter (hugo)")
                .action(ArgAction::SetTrue),
            Arg::new("preview_base")
                .long("preview-base")
                .help("Base URL of the local preview server")
                .conflicts_with("no_preview"),
            Arg::new("no_preview")
                .long("no-preview")
                .help("Do not print a preview URL")
                .action(ArgAction::SetTrue),
            Arg::new("template_dir")
                .long("template-dir")
                .help("Directory with <dialect>.hbs templates overriding the built-in ones")
                .value_parser(clap::value_parser!(PathBuf)),
        ])
        .get_matches();

    let report = match build_context(&matches) {
        Ok(ctx) => {
            info!("{ctx:?}");
            generator::run(&ctx, &clock::now())
        }
        Err(error) => generator::Report::Failed { error },
    };
    // failures are reported, never propagated
    println!("{report}");

    Ok(())
}
