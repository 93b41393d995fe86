use std::fmt;
use std::sync::LazyLock;

use crate::Frontmatter;
use crate::Result;
use crate::Status;

/// A markdown source file: optional YAML frontmatter followed by the body.
#[derive(Debug, PartialEq, Default, Clone)]
pub struct Document {
    front: Frontmatter,
    content: String,
}

impl Document {
    pub fn new(front: Frontmatter, content: String) -> Self {
        Self { front, content }
    }

    pub fn parse(source: &str) -> Result<Self> {
        let (front, content) = split_document(source);
        let front = match front {
            Some(front) => parse_frontmatter(front)?,
            None => Frontmatter::default(),
        };
        Ok(Self {
            front,
            content: content.to_owned(),
        })
    }

    pub fn front(&self) -> &Frontmatter {
        &self.front
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_parts(self) -> (Frontmatter, String) {
        (self.front, self.content)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let front = self.front.to_string();
        if front.is_empty() {
            write!(f, "{}", self.content)
        } else {
            write!(f, "---\n{}\n---\n{}", front, self.content)
        }
    }
}

fn parse_frontmatter(front: &str) -> Result<Frontmatter> {
    let de = serde_yaml::Deserializer::from_str(front);
    let front: Frontmatter = serde_ignored::deserialize(de, |field| {
        log::debug!("Ignoring unsupported frontmatter field `{field}`");
    })
    .map_err(|e| Status::new("Failed to parse frontmatter").with_source(e))?;
    Ok(front)
}

static FRONT_MATTER: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::RegexBuilder::new(r"\A---\s*\r?\n([\s\S]*?\n)?---\s*\r?\n(.*)")
        .dot_matches_new_line(true)
        .build()
        .expect("pattern is valid")
});

/// Returns `(frontmatter, body)`; an empty `---`/`---` block counts as no frontmatter.
fn split_document(source: &str) -> (Option<&str>, &str) {
    let Some(captures) = FRONT_MATTER.captures(source) else {
        return (None, source);
    };
    let front = captures
        .get(1)
        .map(|m| m.as_str())
        .filter(|f| !f.trim().is_empty());
    let body = captures.get(2).map(|m| m.as_str()).unwrap_or_default();
    (front, body)
}
