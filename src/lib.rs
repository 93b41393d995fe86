#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use folio_config::Config;

pub use crate::context::Context;
pub use crate::descriptor::BuildDescriptor;
pub use crate::error::Error;
pub use crate::error::Result;
pub use crate::mark::Markdown;
pub use crate::mark::Transform;
pub use crate::mark::Tree;
pub use crate::new::create_new_post;
pub use crate::new::create_new_project;
pub use crate::new::DEFAULT_POSTS_DIR;
pub use crate::permalink::PermalinkKind;
pub use crate::permalink::Permalinks;
pub use crate::reading_time::ReadingTime;

pub mod descriptor;
pub mod error;
pub mod files;
pub mod mark;
pub mod permalink;
pub mod reading_time;
pub mod relative_images;

mod context;
mod highlight;
mod new;
