use std::collections::BTreeMap;

use folio_config::Integration;
use folio_config::OutputMode;
use folio_config::RemarkPlugin;

use crate::context::Context;
use crate::error::Result;

/// The composition handed to the external build tool.
///
/// Integrations and markdown transforms are emitted as ordered lists, exactly as declared.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildDescriptor {
    pub site: String,
    pub base: String,
    pub output: OutputMode,
    pub integrations: Vec<Integration>,
    pub alias: BTreeMap<String, String>,
    pub markdown: MarkdownDescriptor,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkdownDescriptor {
    pub remark_plugins: Vec<RemarkPlugin>,
    pub extend_default_plugins: bool,
    pub shiki_config: ShikiConfig,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ShikiConfig {
    pub theme: String,
    pub langs: Vec<String>,
    pub wrap: bool,
}

impl BuildDescriptor {
    pub fn new(context: &Context) -> Self {
        let build = &context.build;
        let markdown = &build.markdown;
        Self {
            site: context.site.origin.clone(),
            base: context.site.base_pathname.clone(),
            output: build.output,
            integrations: build.integrations.clone(),
            alias: context
                .alias
                .iter()
                .map(|(k, v)| (k.to_string(), v.display().to_string()))
                .collect(),
            markdown: MarkdownDescriptor {
                remark_plugins: markdown.remark_plugins.clone(),
                extend_default_plugins: markdown.extend_default_plugins,
                shiki_config: ShikiConfig {
                    theme: markdown.syntax_highlight.theme.to_string(),
                    langs: markdown
                        .syntax_highlight
                        .langs
                        .iter()
                        .map(|l| l.to_string())
                        .collect(),
                    wrap: markdown.syntax_highlight.wrap,
                },
            },
        }
    }

    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json)
    }
}

#[cfg(test)]
mod test {
    use folio_config::Config;

    use super::*;

    fn context(config: Config) -> (tempfile::TempDir, Context) {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            root: dir.path().to_owned(),
            ..config
        };
        let context = Context::from_config(config).unwrap();
        (dir, context)
    }

    #[test]
    fn integration_order_is_preserved() {
        let mut config = Config::default();
        config.build.integrations = ["mdx", "sitemap", "tailwind", "image"]
            .into_iter()
            .map(Integration::new)
            .collect();
        let (_dir, context) = context(config);
        let json = BuildDescriptor::new(&context).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let names: Vec<_> = value["integrations"]
            .as_array()
            .unwrap()
            .iter()
            .map(|i| i["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["mdx", "sitemap", "tailwind", "image"]);
    }

    #[test]
    fn options_pass_through() {
        let (_dir, context) = context(Config::default());
        let json = BuildDescriptor::new(&context).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value["integrations"][3],
            serde_json::json!({
                "name": "partytown",
                "options": {"config": {"forward": ["dataLayer.push"]}}
            })
        );
        assert_eq!(value["integrations"][1], serde_json::json!({"name": "sitemap"}));
        assert_eq!(
            value["markdown"]["shikiConfig"],
            serde_json::json!({"theme": "nord", "langs": ["javascript"], "wrap": true})
        );
        assert_eq!(value["markdown"]["extendDefaultPlugins"], serde_json::json!(true));
        assert_eq!(value["output"], serde_json::json!("static"));
    }

    #[test]
    fn site_and_base_pass_through() {
        let mut config = Config::default();
        config.site.origin = "https://example.com".to_owned();
        config.site.base_pathname = "/blog/".to_owned();
        let (_dir, context) = context(config);
        let descriptor = BuildDescriptor::new(&context);
        assert_eq!(descriptor.site, "https://example.com");
        assert_eq!(descriptor.base, "/blog/");
        assert_eq!(
            descriptor.alias.get("~").map(String::as_str),
            Some(context.root.join("src").display().to_string().as_str())
        );
    }

    #[test]
    fn json_layout() {
        let mut config = Config::default();
        config.site.origin = "https://example.com".to_owned();
        config.build.integrations = vec![Integration::new("sitemap")];
        config.build.alias.clear();
        config.build.markdown.remark_plugins = vec![RemarkPlugin::new("reading-time")];
        let (_dir, context) = context(config);
        let json = BuildDescriptor::new(&context).to_json().unwrap();
        snapbox::assert_data_eq!(
            json,
            r#"{
  "site": "https://example.com",
  "base": "/",
  "output": "static",
  "integrations": [
    {
      "name": "sitemap"
    }
  ],
  "alias": {},
  "markdown": {
    "remarkPlugins": [
      {
        "name": "reading-time"
      }
    ],
    "extendDefaultPlugins": true,
    "shikiConfig": {
      "theme": "nord",
      "langs": [
        "javascript"
      ],
      "wrap": true
    }
  }
}"#
        );
    }
}
