use std::path;

use folio_config::Document;
use folio_config::Frontmatter;
use folio_config::PROJECT_FILE;
use folio_config::path::slugify;
use liquid_core::model::KString;

use crate::error::Result;
use crate::files;

const FOLIO_YML: &str = "\
site:
  name: CodingTheSmartWay
  origin: https://codingthesmartway.com
  base_pathname: /
  title: CodingTheSmartWay.com - Developer Tutorials
  description: CodingTheSmartWay.com provides tutorials and step-by-step guides for developers.
  google_analytics_id: ~
  google_site_verification_id: ~

switches:
  youtube_links: true
  affiliate_links: false
  carbon_ads: false
  leanpub_ads: false

blog:
  disabled: false
  posts_per_page: 5
  blog:
    disabled: false
    pathname: ''
  post:
    disabled: false
    pathname: ''
  category:
    disabled: false
    pathname: category
  tag:
    disabled: false
    pathname: tag

build:
  output: static
  integrations:
    - name: tailwind
      options:
        config:
          applyBaseStyles: false
    - name: sitemap
    - name: image
    # Drop this one when no external script (analytics) is loaded
    - name: partytown
      options:
        config:
          forward: [dataLayer.push]
    - name: mdx
  alias:
    '~': src
  markdown:
    remark_plugins:
      - name: reading-time
      - name: relative-images
        options:
          relativeImages: true
    extend_default_plugins: true
    syntax_highlight:
      theme: nord
      langs: [javascript]
      wrap: true
";

const POST_MD: &str = "\
---
title: Welcome
category: News
tags:
- welcome
draft: true
---
# Welcome

This is the first post. Edit or delete it, then start writing.
";

pub const DEFAULT_POSTS_DIR: &str = "src/content/blog";

pub fn create_new_project<P: AsRef<path::Path>>(dest: P) -> Result<()> {
    create_new_project_for_path(dest.as_ref())
}

fn create_new_project_for_path(dest: &path::Path) -> Result<()> {
    files::create_file(dest.join(PROJECT_FILE), FOLIO_YML)?;
    files::create_file(dest.join(DEFAULT_POSTS_DIR).join("welcome.md"), POST_MD)?;
    Ok(())
}

/// Create a draft post named after `title` inside `dir`; returns its path.
pub fn create_new_post(title: &str, dir: &path::Path) -> Result<path::PathBuf> {
    let slug = slugify(title);
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a file name from title {title:?}");
    }
    let file = dir.join(format!("{slug}.md"));

    let front = Frontmatter {
        title: Some(KString::from_ref(title)),
        draft: Some(true),
        ..Default::default()
    };
    let doc = Document::new(front, format!("# {title}\n"));
    files::create_file(&file, &doc.to_string())?;
    log::info!("Created new post {}", file.display());

    Ok(file)
}
