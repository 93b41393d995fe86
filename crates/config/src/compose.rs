use std::collections::BTreeMap;

use liquid_core::model::KString;

use crate::Integration;
use crate::Markdown;
use crate::RelPath;

/// How the external build tool composes the site.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Build {
    pub output: OutputMode,
    /// Activated in the listed order; order changes generated output.
    pub integrations: Vec<Integration>,
    /// Module-resolution aliases, relative to the project root.
    pub alias: BTreeMap<KString, RelPath>,
    pub markdown: Markdown,
}

impl Default for Build {
    fn default() -> Self {
        let mut alias = BTreeMap::new();
        alias.insert(KString::from_static("~"), RelPath::from("src"));
        Self {
            output: OutputMode::default(),
            integrations: crate::default_integrations(),
            alias,
            markdown: Markdown::default(),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub enum OutputMode {
    #[default]
    Static,
    Server,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn integrations_keep_declared_order() {
        let yaml = "\
integrations:
  - name: mdx
  - name: tailwind
  - name: sitemap
";
        let build: Build = serde_yaml::from_str(yaml).unwrap();
        let names: Vec<_> = build.integrations.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["mdx", "tailwind", "sitemap"]);
        assert_eq!(build.output, OutputMode::Static);
    }

    #[test]
    fn empty_integration_list_is_kept() {
        let build: Build = serde_yaml::from_str("integrations: []").unwrap();
        assert!(build.integrations.is_empty());
    }

    #[test]
    fn default_alias() {
        let build = Build::default();
        assert_eq!(build.alias.get("~").map(|p| p.as_str()), Some("src"));
    }

    #[test]
    fn output_mode() {
        let build: Build = serde_yaml::from_str("output: server").unwrap();
        assert_eq!(build.output, OutputMode::Server);
    }
}
