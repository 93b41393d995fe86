use std::fs;
use std::io::Write;
use std::path;

use anyhow::Context as _;

use crate::error::Result;

const MARKDOWN_EXTENSIONS: &[&str] = &["md", "mdx", "markdown"];

/// Collect markdown documents from files and directories, directories walked in name order.
///
/// Hidden (`.`) and private (`_`) entries inside walked directories are skipped.
pub fn markdown_files<P: AsRef<path::Path>>(paths: &[P]) -> Result<Vec<path::PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        let path = path.as_ref();
        if path.is_dir() {
            let walker = walkdir::WalkDir::new(path)
                .min_depth(1)
                .follow_links(false)
                .sort_by_file_name()
                .into_iter()
                .filter_entry(|e| !is_hidden(e));
            for entry in walker {
                let entry = entry.with_context(|| format!("Failed to walk {}", path.display()))?;
                if entry.file_type().is_file() && is_markdown(entry.path()) {
                    files.push(entry.into_path());
                }
            }
        } else if path.is_file() {
            files.push(path.to_owned());
        } else {
            anyhow::bail!("{} does not exist", path.display());
        }
    }
    Ok(files)
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|s| s.starts_with('.') || s.starts_with('_'))
}

fn is_markdown(path: &path::Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| MARKDOWN_EXTENSIONS.contains(&e))
}

pub fn read_file<P: AsRef<path::Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(text)
}

/// Write `content` to a file that must not exist yet.
pub fn create_file<P: AsRef<path::Path>>(path: P, content: &str) -> Result<()> {
    create_file_for_path(path.as_ref(), content)
}

fn create_file_for_path(path: &path::Path, content: &str) -> Result<()> {
    log::trace!("Creating file {}", path.display());

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .with_context(|| format!("Failed to create file {}", path.display()))?;

    file.write_all(content.as_bytes())?;

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn walks_markdown_only() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        create_file(root.join("b.md"), "").unwrap();
        create_file(root.join("a/c.mdx"), "").unwrap();
        create_file(root.join("a/d.txt"), "").unwrap();
        create_file(root.join("_drafts/e.md"), "").unwrap();
        create_file(root.join(".cache/f.md"), "").unwrap();

        let files = markdown_files(&[root]).unwrap();
        let rel: Vec<_> = files
            .iter()
            .map(|f| f.strip_prefix(root).unwrap().to_owned())
            .collect();
        assert_eq!(
            rel,
            [path::PathBuf::from("a/c.mdx"), path::PathBuf::from("b.md")]
        );
    }

    #[test]
    fn explicit_file_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("notes.txt");
        create_file(&file, "").unwrap();
        assert_eq!(markdown_files(&[&file]).unwrap(), [file]);
    }

    #[test]
    fn missing_path_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(markdown_files(&[dir.path().join("nope")]).is_err());
    }

    #[test]
    fn create_file_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("x.md");
        create_file(&file, "a").unwrap();
        assert!(create_file(&file, "b").is_err());
        assert_eq!(read_file(&file).unwrap(), "a");
    }
}
