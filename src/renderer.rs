use std::path::Path;

use anyhow::{bail, Context};
use handlebars::{handlebars_helper, Handlebars};
use log::info;
use serde_json::Value;

use crate::dialect::Dialect;

const JEKYLL_TEMPLATE: &str = r#"---
layout: post
title:  "{{title}}"
date:   {{timestamp}}
tags: {{list tags}}
---

"#;

const HUGO_TEMPLATE: &str = r#"---
title: "{{title}}"
date: {{timestamp}}
tags: {{list tags}}
draft: {{draft}}
{{#if categories}}categories: {{list categories}}
{{/if}}---

"#;

// [a, b] in front matter flow style
handlebars_helper!(list: |items: array| format!(
    "[{}]",
    items.iter().filter_map(Value::as_str).collect::<Vec<_>>().join(", ")
));

fn builtin_template(dialect: Dialect) -> &'static str {
    match dialect {
        Dialect::Jekyll => JEKYLL_TEMPLATE,
        Dialect::Hugo => HUGO_TEMPLATE,
    }
}

/// Registry with one template per dialect, named after it.
/// `<dialect>.hbs` in `template_dir` takes precedence over the built-in one.
pub(crate) fn generate_renderer(template_dir: Option<&Path>) -> anyhow::Result<Handlebars<'static>> {
    if let Some(dir) = template_dir {
        if !dir.is_dir() {
            bail!("template_dir must be a directory: {dir:?}");
        }
    }

    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars.set_strict_mode(true);
    handlebars.register_helper("list", Box::new(list));

    for dialect in [Dialect::Jekyll, Dialect::Hugo] {
        let name = dialect.name();
        let custom = template_dir
            .map(|dir| dir.join(format!("{name}.hbs")))
            .filter(|p| p.is_file());
        match custom {
            Some(path) => {
                info!("Using template {path:?} for {name}");
                handlebars
                    .register_template_file(name, &path)
                    .with_context(|| format!("while loading {path:?}"))?;
            }
            None => {
                handlebars
                    .register_template_string(name, builtin_template(dialect))
                    .with_context(|| format!("built-in {name} template"))?;
            }
        }
    }

    Ok(handlebars)
}
