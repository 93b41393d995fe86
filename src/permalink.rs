use folio_config::Blog;
use folio_config::Section;
use folio_config::Site;
use folio_config::path::clean_slug;
use folio_config::path::clean_path;
use itertools::Itertools;

/// What a permalink points at.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum PermalinkKind {
    Page,
    Post,
    Category,
    Tag,
}

/// Route construction for every page the blog generates.
///
/// All routes are `/`-prefixed, joined from non-empty segments only, so an empty
/// base or section pathname never produces `//`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permalinks {
    origin: String,
    base: String,
    blog: String,
    post: String,
    category: String,
    tag: String,
}

impl Permalinks {
    pub fn new(site: &Site, blog: &Blog) -> Self {
        Self {
            origin: site.origin.trim_end_matches('/').to_owned(),
            base: clean_path(&site.base_pathname),
            blog: clean_slug(&blog.section(Section::Blog).pathname),
            post: clean_slug(&blog.section(Section::Post).pathname),
            category: clean_slug(&blog.section(Section::Category).pathname),
            tag: clean_slug(&blog.section(Section::Tag).pathname),
        }
    }

    pub fn permalink(&self, slug: &str, kind: PermalinkKind) -> String {
        let slug = clean_slug(slug);
        let section = match kind {
            PermalinkKind::Page => "",
            PermalinkKind::Post => self.post.as_str(),
            PermalinkKind::Category => self.category.as_str(),
            PermalinkKind::Tag => self.tag.as_str(),
        };
        create_path(&[&self.base, section, &slug])
    }

    /// Site root; always ends in `/`.
    pub fn home(&self) -> String {
        let permalink = self.permalink("", PermalinkKind::Page);
        if permalink == "/" {
            permalink
        } else {
            format!("{permalink}/")
        }
    }

    pub fn blog(&self) -> String {
        create_path(&[&self.base, &self.blog])
    }

    /// Listing page `page` of the blog; page 1 is the blog root.
    pub fn blog_page(&self, page: usize) -> String {
        create_path(&[&self.base, &self.blog, &page_segment(page)])
    }

    pub fn category_page(&self, category: &str, page: usize) -> String {
        let category = clean_slug(category);
        create_path(&[&self.base, &self.category, &category, &page_segment(page)])
    }

    pub fn tag_page(&self, tag: &str, page: usize) -> String {
        let tag = clean_slug(tag);
        create_path(&[&self.base, &self.tag, &tag, &page_segment(page)])
    }

    /// Mount an arbitrary site-relative link under the base path, without slugifying it.
    pub fn relative(&self, link: &str) -> String {
        create_path(&[&self.base, &clean_path(link)])
    }

    /// Absolute URL for a route produced by this type.
    pub fn canonical(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.origin, path)
        } else {
            format!("{}/{}", self.origin, path)
        }
    }
}

fn page_segment(page: usize) -> String {
    if page <= 1 {
        String::new()
    } else {
        page.to_string()
    }
}

fn create_path(segments: &[&str]) -> String {
    let joined = segments.iter().filter(|s| !s.is_empty()).join("/");
    format!("/{joined}")
}
