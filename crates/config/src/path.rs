use std::sync::LazyLock;

use itertools::Itertools;

/// Anything that is not an ASCII letter or digit separates slug words.
static SLUG_SEPARATORS: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"[^a-zA-Z0-9]+").expect("pattern is valid"));

/// URL-safe slug: transliterated to ASCII, lowercased words joined by `-`.
pub fn slugify<S: AsRef<str>>(name: S) -> String {
    slugify_str(name.as_ref())
}

fn slugify_str(name: &str) -> String {
    let ascii = deunicode::deunicode_with_tofu(name, "-");
    SLUG_SEPARATORS
        .split(&ascii)
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .join("-")
}

/// Slugify each `/`-separated segment, dropping the ones that end up empty.
pub fn clean_slug(text: &str) -> String {
    trim_slashes(text)
        .split('/')
        .map(slugify_str)
        .filter(|s| !s.is_empty())
        .join("/")
}

/// Drop empty `/`-separated segments, keeping the rest verbatim.
pub fn clean_path(text: &str) -> String {
    text.split('/').filter(|s| !s.is_empty()).join("/")
}

/// Format a user-visible title out of a slug.
pub fn titleize_slug<S: AsRef<str>>(slug: S) -> String {
    slug.as_ref().split('-').map(title_case).join(" ")
}

fn title_case(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        None => String::new(),
        Some(f) => f
            .to_uppercase()
            .chain(c.flat_map(|t| t.to_lowercase()))
            .collect(),
    }
}

pub fn trim_slashes(s: &str) -> &str {
    s.trim_matches('/')
}

pub fn split_ext(name: &str) -> (&str, Option<&str>) {
    name.rsplit_once('.')
        .map(|(n, e)| (n, Some(e)))
        .unwrap_or((name, None))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn slugify_collapses() {
        assert_eq!(slugify("___filE-worlD-__09___"), "file-world-09");
    }

    #[test]
    fn slugify_unicode() {
        assert_eq!(slugify("Ærø café"), "aero-cafe");
    }

    #[test]
    fn clean_slug_keeps_hierarchy() {
        assert_eq!(clean_slug("/Getting Started/First Steps/"), "getting-started/first-steps");
        assert_eq!(clean_slug("a//b"), "a/b");
        assert_eq!(clean_slug(""), "");
        assert_eq!(clean_slug("/"), "");
    }

    #[test]
    fn clean_path_collapses_separators() {
        assert_eq!(clean_path("/a//B c/"), "a/B c");
        assert_eq!(clean_path("//"), "");
        assert_eq!(clean_path("docs"), "docs");
    }

    #[test]
    fn titleize() {
        assert_eq!(titleize_slug("hello-wORLD"), "Hello World");
    }

    #[test]
    fn split_ext_variants() {
        assert_eq!(split_ext("post.md"), ("post", Some("md")));
        assert_eq!(split_ext("post"), ("post", None));
        assert_eq!(split_ext("post.draft.mdx"), ("post.draft", Some("mdx")));
    }
}
