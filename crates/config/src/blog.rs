const DEFAULT_POSTS_PER_PAGE: u32 = 5;

/// Blog layout.
///
/// Sections are overridden field by field: a section that omits `pathname` keeps its own
/// default mount point rather than moving to the parent path.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[serde(from = "BlogDef")]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Blog {
    /// Turns off every blog section at once.
    pub disabled: bool,
    pub posts_per_page: u32,
    pub blog: BlogSection,
    pub post: BlogSection,
    pub category: BlogSection,
    pub tag: BlogSection,
}

impl Default for Blog {
    fn default() -> Self {
        Self {
            disabled: false,
            posts_per_page: DEFAULT_POSTS_PER_PAGE,
            blog: BlogSection::mounted_at(""),
            post: BlogSection::mounted_at(""),
            category: BlogSection::mounted_at("category"),
            tag: BlogSection::mounted_at("tag"),
        }
    }
}

impl Blog {
    pub fn section(&self, kind: Section) -> &BlogSection {
        match kind {
            Section::Blog => &self.blog,
            Section::Post => &self.post,
            Section::Category => &self.category,
            Section::Tag => &self.tag,
        }
    }

    pub fn is_enabled(&self, kind: Section) -> bool {
        !self.disabled && !self.section(kind).disabled
    }

    /// Number of listing pages needed for `total` posts.  Always at least one.
    pub fn page_count(&self, total: usize) -> usize {
        let per_page = self.posts_per_page.max(1) as usize;
        total.div_ceil(per_page).max(1)
    }
}

#[derive(Default, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
struct BlogDef {
    disabled: Option<bool>,
    posts_per_page: Option<u32>,
    blog: SectionDef,
    post: SectionDef,
    category: SectionDef,
    tag: SectionDef,
}

#[derive(Default, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
struct SectionDef {
    disabled: Option<bool>,
    pathname: Option<String>,
}

impl SectionDef {
    fn merge_onto(self, section: BlogSection) -> BlogSection {
        BlogSection {
            disabled: self.disabled.unwrap_or(section.disabled),
            pathname: self.pathname.unwrap_or(section.pathname),
        }
    }
}

impl From<BlogDef> for Blog {
    fn from(def: BlogDef) -> Self {
        let base = Blog::default();
        Self {
            disabled: def.disabled.unwrap_or(base.disabled),
            posts_per_page: def.posts_per_page.unwrap_or(base.posts_per_page),
            blog: def.blog.merge_onto(base.blog),
            post: def.post.merge_onto(base.post),
            category: def.category.merge_onto(base.category),
            tag: def.tag.merge_onto(base.tag),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct BlogSection {
    pub disabled: bool,
    /// Path segment the section is mounted under; empty mounts at the parent path.
    pub pathname: String,
}

impl BlogSection {
    pub fn mounted_at(pathname: impl Into<String>) -> Self {
        Self {
            disabled: false,
            pathname: pathname.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Blog,
    Post,
    Category,
    Tag,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Blog, Section::Post, Section::Category, Section::Tag];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Blog => "blog",
            Section::Post => "post",
            Section::Category => "category",
            Section::Tag => "tag",
        }
    }
}
