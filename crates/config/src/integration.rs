use liquid_core::model::KString;

use crate::Options;

/// A named build-time plugin and the options it is activated with.
///
/// The options are owned by the integration; they are carried through unmodified.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Integration {
    pub name: KString,
    #[serde(default, skip_serializing_if = "Options::is_empty")]
    pub options: Options,
}

impl Integration {
    pub fn new(name: impl Into<KString>) -> Self {
        Self {
            name: name.into(),
            options: Options::new(),
        }
    }

    pub fn with_option(mut self, key: &str, value: impl Into<serde_yaml::Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

/// Integrations in activation order.
pub fn default_integrations() -> Vec<Integration> {
    vec![
        Integration::new("tailwind").with_option("config", config_bag("applyBaseStyles", false)),
        Integration::new("sitemap"),
        Integration::new("image"),
        Integration::new("partytown").with_option(
            "config",
            config_bag(
                "forward",
                serde_yaml::Value::Sequence(vec!["dataLayer.push".into()]),
            ),
        ),
        Integration::new("mdx"),
    ]
}

fn config_bag(key: &str, value: impl Into<serde_yaml::Value>) -> serde_yaml::Value {
    let mut bag = Options::new();
    bag.insert(key.into(), value.into());
    serde_yaml::Value::Mapping(bag)
}
