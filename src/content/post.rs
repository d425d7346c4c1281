//! Single-post loading

use std::fs;
use std::path::Path;
use thiserror::Error;

use super::frontmatter::{split_fragments, FrontMatter};
use super::markdown::MarkdownRenderer;

/// Errors from resolving a single post
#[derive(Debug, Error)]
pub enum PostError {
    /// The identifier names no file under the posts directory. The server
    /// answers this with a redirect to the not-found route, not a hard error.
    #[error("post not found: {0}")]
    NotFound(String),

    /// The file exists but has no body fragment after its header. A content
    /// authoring defect, kept distinct from a missing resource.
    #[error("post has no body: {0}")]
    MissingBody(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A loaded post: header record plus rendered body HTML.
///
/// Built per request and discarded after the response is produced.
#[derive(Debug, Clone)]
pub struct PostDocument {
    /// Front-matter header fields
    pub front_matter: FrontMatter,
    /// Body rendered to HTML
    pub body: String,
}

/// Resolves post identifiers to documents under a posts directory
pub struct PostLoader<'a> {
    posts_dir: &'a Path,
    renderer: &'a MarkdownRenderer,
}

impl<'a> PostLoader<'a> {
    /// Create a new post loader
    pub fn new(posts_dir: &'a Path, renderer: &'a MarkdownRenderer) -> Self {
        Self {
            posts_dir,
            renderer,
        }
    }

    /// Load the post named by `slug`, stored as `{slug}.md`.
    ///
    /// The existence check runs before any read, so a missing post never
    /// renders a body. A renderer failure does not fail the request: the
    /// body is replaced with a diagnostic string instead.
    pub fn load(&self, slug: &str) -> Result<PostDocument, PostError> {
        let path = self.posts_dir.join(format!("{}.md", slug));
        if !path.exists() {
            return Err(PostError::NotFound(slug.to_string()));
        }

        let content = fs::read_to_string(&path)?;
        let fragments = split_fragments(&content);

        let front_matter = fragments
            .first()
            .map(|header| FrontMatter::parse(header))
            .unwrap_or_default();

        let body_md = fragments
            .get(1)
            .copied()
            .ok_or_else(|| PostError::MissingBody(slug.to_string()))?;

        let body = match self.renderer.render(body_md) {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!("markdown rendering failed for {}: {}", slug, e);
                format!("Parsing of post failed: {}", e)
            }
        };

        Ok(PostDocument { front_matter, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_well_formed_post() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("hello.md"),
            "---\ntitle: Hello\npublished_at: 2021-01-01\n---\n# Heading\n\nSome text.\n",
        )
        .unwrap();

        let renderer = MarkdownRenderer::new();
        let doc = PostLoader::new(dir.path(), &renderer)
            .load("hello")
            .unwrap();

        assert_eq!(doc.front_matter.get("title"), Some("Hello"));
        assert!(doc.body.contains("<h1>Heading</h1>"));
        assert!(doc.body.contains("<p>Some text.</p>"));
    }

    #[test]
    fn test_load_missing_post_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = MarkdownRenderer::new();
        let err = PostLoader::new(dir.path(), &renderer)
            .load("nonexistent")
            .unwrap_err();

        assert!(matches!(err, PostError::NotFound(slug) if slug == "nonexistent"));
    }

    #[test]
    fn test_load_resolves_md_extension_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("hello.txt"), "---\ntitle: T\n---\nbody").unwrap();

        let renderer = MarkdownRenderer::new();
        let err = PostLoader::new(dir.path(), &renderer)
            .load("hello")
            .unwrap_err();
        assert!(matches!(err, PostError::NotFound(_)));
    }

    #[test]
    fn test_load_header_only_post_is_missing_body() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("stub.md"), "---\ntitle: Stub\n---\n").unwrap();

        let renderer = MarkdownRenderer::new();
        let err = PostLoader::new(dir.path(), &renderer)
            .load("stub")
            .unwrap_err();
        assert!(matches!(err, PostError::MissingBody(slug) if slug == "stub"));
    }

    #[test]
    fn test_load_tolerates_missing_closing_delimiter_in_body() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("open.md"),
            "---\ntitle: Open\n---\nbody text without trailing delimiter",
        )
        .unwrap();

        let renderer = MarkdownRenderer::new();
        let doc = PostLoader::new(dir.path(), &renderer).load("open").unwrap();
        assert!(doc.body.contains("body text without trailing delimiter"));
    }

    #[test]
    fn test_header_fields_are_escaped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("esc.md"),
            "---\ntitle: Tips & Tricks\n---\nbody",
        )
        .unwrap();

        let renderer = MarkdownRenderer::new();
        let doc = PostLoader::new(dir.path(), &renderer).load("esc").unwrap();
        assert_eq!(doc.front_matter.get("title"), Some("Tips &amp; Tricks"));
    }
}
