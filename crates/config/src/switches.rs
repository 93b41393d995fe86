/// Rendering toggles consumed by page templates.
///
/// Each flag gates one rendering branch on its own; none depends on another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Switches {
    pub youtube_links: bool,
    pub affiliate_links: bool,
    pub carbon_ads: bool,
    pub leanpub_ads: bool,
}
