mod blog;
mod compose;
mod config;
mod document;
mod frontmatter;
mod integration;
mod markdown;
mod site;
mod switches;

pub mod path;

pub use self::blog::*;
pub use self::compose::*;
pub use self::config::*;
pub use self::document::*;
pub use self::frontmatter::*;
pub use self::integration::*;
pub use self::markdown::*;
pub use self::site::*;
pub use self::switches::*;

/// Path relative to the project root (the directory holding `_folio.yml`).
pub type RelPath = relative_path::RelativePathBuf;

/// Opaque, insertion-ordered option bag handed to an integration or transform.
pub type Options = serde_yaml::Mapping;

pub type Status = status::Status;
pub type Result<T, E = Status> = std::result::Result<T, E>;
