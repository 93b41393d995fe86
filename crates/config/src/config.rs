use std::fmt;
use std::path;

use crate::Blog;
use crate::Build;
use crate::Result;
use crate::Site;
use crate::Status;
use crate::Switches;

pub const PROJECT_FILE: &str = "_folio.yml";

/// Contents of the project file.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Config {
    /// Directory containing the project file.
    #[serde(skip)]
    pub root: path::PathBuf,
    pub site: Site,
    pub switches: Switches,
    pub blog: Blog,
    pub build: Build,
}

impl Config {
    /// Load a project file; its directory becomes the project root.
    pub fn from_file<P: Into<path::PathBuf>>(path: P) -> Result<Config> {
        Self::load(path.into())
    }

    fn load(project_file: path::PathBuf) -> Result<Config> {
        let with_path = |status: Status| {
            status.context_with(|c| c.insert("Project file", project_file.display().to_string()))
        };
        let yaml = std::fs::read_to_string(&project_file)
            .map_err(|e| with_path(Status::new("Unable to read project file").with_source(e)))?;

        // A blank project file is a valid, all-defaults project.
        let mut config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(&yaml).map_err(|e| {
                with_path(Status::new("Invalid project file").with_source(e))
            })?
        };
        config.root = match project_file.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_owned(),
            _ => path::PathBuf::from("."),
        };

        Ok(config)
    }

    /// Load the nearest project file at or above `cwd`, falling back to defaults.
    pub fn from_cwd<P: Into<path::PathBuf>>(cwd: P) -> Result<Config> {
        let cwd = cwd.into();
        match find_project_file(&cwd) {
            Some(project_file) => {
                log::debug!("Using project file `{}`", project_file.display());
                Self::load(project_file)
            }
            None => {
                log::warn!(
                    "No {PROJECT_FILE} in {} or its parents, using default configuration",
                    cwd.display()
                );
                Ok(Config {
                    root: cwd,
                    ..Default::default()
                })
            }
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let yaml = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{}", yaml.trim_end())
    }
}

/// `dir` and its ancestors, nearest first, stopping at the first holding `_folio.yml`.
fn find_project_file(dir: &path::Path) -> Option<path::PathBuf> {
    dir.ancestors()
        .map(|ancestor| ancestor.join(PROJECT_FILE))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_file_ok() {
        let result = Config::from_file("tests/fixtures/config/_folio.yml").unwrap();
        assert_eq!(result.root, path::Path::new("tests/fixtures/config"));
        assert_eq!(result.site.name, "CodingTheSmartWay");
        assert_eq!(result.site.origin, "https://codingthesmartway.com");
        assert_eq!(
            result.site.google_site_verification_id.as_deref(),
            Some("cR1TRhEXqJlEJnYj0FeY2KbWX4ea6YgdhbkaEqjzByk")
        );
        assert_eq!(result.site.google_analytics_id, None);
        assert!(result.switches.youtube_links);
        assert!(!result.switches.carbon_ads);
        assert_eq!(result.blog.posts_per_page, 5);
    }

    #[test]
    fn from_file_keeps_integration_order() {
        let result = Config::from_file("tests/fixtures/config/_folio.yml").unwrap();
        let names: Vec<_> = result
            .build
            .integrations
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, ["tailwind", "sitemap", "image", "partytown", "mdx"]);
    }

    #[test]
    fn from_file_empty() {
        let result = Config::from_file("tests/fixtures/config/empty.yml").unwrap();
        assert_eq!(result.root, path::Path::new("tests/fixtures/config"));
        assert_eq!(result.site, Site::default());
        assert_eq!(result.build, Build::default());
    }

    #[test]
    fn from_file_invalid_syntax() {
        let result = Config::from_file("tests/fixtures/config/invalid_syntax.yml");
        assert!(result.is_err());
    }

    #[test]
    fn from_file_not_found() {
        let result = Config::from_file("tests/fixtures/config/config_does_not_exist.yml");
        assert!(result.is_err());
    }

    #[test]
    fn from_cwd_ok() {
        let result = Config::from_cwd("tests/fixtures/config/child").unwrap();
        assert_eq!(result.root, path::Path::new("tests/fixtures/config"));
    }

    #[test]
    fn from_cwd_not_found() {
        let result = Config::from_cwd("tests/fixtures").unwrap();
        assert_eq!(result.root, path::Path::new("tests/fixtures"));
    }

    #[test]
    fn find_project_file_same_dir() {
        let actual = find_project_file(path::Path::new("tests/fixtures/config")).unwrap();
        assert_eq!(actual, path::Path::new("tests/fixtures/config/_folio.yml"));
    }

    #[test]
    fn find_project_file_parent_dir() {
        let actual = find_project_file(path::Path::new("tests/fixtures/config/child")).unwrap();
        assert_eq!(actual, path::Path::new("tests/fixtures/config/_folio.yml"));
    }

    #[test]
    fn find_project_file_doesnt_exist() {
        assert_eq!(find_project_file(path::Path::new("tests/fixtures/")), None);
    }

    #[test]
    fn display_reparses() {
        let config = Config::from_file("tests/fixtures/config/_folio.yml").unwrap();
        let reparsed: Config = serde_yaml::from_str(&config.to_string()).unwrap();
        assert_eq!(reparsed.site, config.site);
        assert_eq!(reparsed.build, config.build);
    }
}
