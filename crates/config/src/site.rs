/// Site identity, exposed to templates exactly as configured.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Site {
    pub name: String,
    /// Absolute URL, e.g. `https://example.com`.
    pub origin: String,
    /// URL path prefix every generated route is mounted under.
    pub base_pathname: String,
    pub title: String,
    pub description: String,
    pub google_analytics_id: Option<String>,
    pub google_site_verification_id: Option<String>,
}

impl Default for Site {
    fn default() -> Self {
        Self {
            name: Default::default(),
            origin: Default::default(),
            base_pathname: "/".to_owned(),
            title: Default::default(),
            description: Default::default(),
            google_analytics_id: Default::default(),
            google_site_verification_id: Default::default(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fields_pass_through() {
        let yaml = "\
name: CodingTheSmartWay
origin: https://codingthesmartway.com
base_pathname: /docs//
title: 'Title: with colon'
description: '  padded  '
google_analytics_id: G-XXXXXXXXXX
";
        let site: Site = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(site.name, "CodingTheSmartWay");
        assert_eq!(site.origin, "https://codingthesmartway.com");
        assert_eq!(site.base_pathname, "/docs//");
        assert_eq!(site.title, "Title: with colon");
        assert_eq!(site.description, "  padded  ");
        assert_eq!(site.google_analytics_id.as_deref(), Some("G-XXXXXXXXXX"));
        assert_eq!(site.google_site_verification_id, None);
    }

    #[test]
    fn base_pathname_defaults_to_root() {
        let site: Site = serde_yaml::from_str("name: x").unwrap();
        assert_eq!(site.base_pathname, "/");
    }
}
