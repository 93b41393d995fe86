use std::collections::BTreeMap;
use std::fmt;

use liquid_core::model::KString;

use crate::path;

#[derive(Debug, PartialEq, Default, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Frontmatter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<KString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<KString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<KString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permalink: Option<KString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(alias = "publishDate")]
    pub publish_date: Option<KString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<KString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<KString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<KString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<KString>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<KString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<bool>,
    /// Values handed to templates as-is; transforms attach their results here.
    #[serde(skip_serializing_if = "liquid_core::Object::is_empty")]
    #[serde(serialize_with = "serialize_sorted")]
    pub data: liquid_core::Object,
}

impl Frontmatter {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Fill in `slug` and `title` from the document's file name when not set explicitly.
    pub fn merge_path(mut self, relpath: &relative_path::RelativePath) -> Self {
        if let Some(name) = relpath.file_name() {
            let mut split_name = path::split_ext(name);
            while split_name.1.is_some() {
                split_name = path::split_ext(split_name.0);
            }
            if self.slug.is_none() {
                let slug = path::slugify(split_name.0);
                if self.title.is_none() {
                    self.title = Some(path::titleize_slug(&slug).into());
                }
                self.slug = Some(slug.into());
            }
        }

        self
    }

    pub fn is_draft(&self) -> bool {
        self.draft.unwrap_or(false)
    }
}

/// `Object` is unordered; emit keys sorted so output is stable.
fn serialize_sorted<S: serde::Serializer>(
    data: &liquid_core::Object,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let sorted: BTreeMap<&str, &liquid_core::Value> =
        data.iter().map(|(k, v)| (k.as_str(), v)).collect();
    serde::Serialize::serialize(&sorted, serializer)
}

impl fmt::Display for Frontmatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        let converted = converted.trim_end();
        if converted == "{}" {
            Ok(())
        } else {
            write!(f, "{converted}")
        }
    }
}
