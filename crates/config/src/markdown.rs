use liquid_core::model::KString;

use crate::Integration;
use crate::Options;

/// Markdown transform registered with the markdown pipeline.
///
/// Shares its shape with [`Integration`]: a name plus an opaque option bag.
pub type RemarkPlugin = Integration;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Markdown {
    /// Transforms, applied in the listed order.
    pub remark_plugins: Vec<RemarkPlugin>,
    pub extend_default_plugins: bool,
    pub syntax_highlight: SyntaxHighlight,
}

impl Default for Markdown {
    fn default() -> Self {
        let mut relative_images = Options::new();
        relative_images.insert("relativeImages".into(), true.into());
        Self {
            remark_plugins: vec![
                RemarkPlugin::new("reading-time"),
                RemarkPlugin {
                    name: "relative-images".into(),
                    options: relative_images,
                },
            ],
            extend_default_plugins: true,
            syntax_highlight: SyntaxHighlight::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct SyntaxHighlight {
    pub theme: KString,
    pub langs: Vec<KString>,
    /// Soft-wrap long lines instead of scrolling.
    pub wrap: bool,
}

impl Default for SyntaxHighlight {
    fn default() -> Self {
        Self {
            theme: "nord".into(),
            langs: vec!["javascript".into()],
            wrap: true,
        }
    }
}

impl SyntaxHighlight {
    pub fn has_lang(&self, lang: &str) -> bool {
        self.langs.iter().any(|l| l.eq_ignore_ascii_case(lang))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_plugin_order() {
        let markdown = Markdown::default();
        let names: Vec<_> = markdown
            .remark_plugins
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["reading-time", "relative-images"]);
    }

    #[test]
    fn highlight_overrides() {
        let yaml = "syntax_highlight:\n  theme: dracula\n  wrap: false\n";
        let markdown: Markdown = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(markdown.syntax_highlight.theme.as_str(), "dracula");
        assert!(!markdown.syntax_highlight.wrap);
        assert!(markdown.syntax_highlight.has_lang("JavaScript"));
        assert!(markdown.extend_default_plugins);
    }
}
