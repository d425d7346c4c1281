//! Blog index loading

use anyhow::Result;
use std::fs;
use std::path::Path;

use super::frontmatter::{split_fragments, FrontMatter};

/// Load the blog index: one front-matter record per file in `posts_dir`,
/// sorted by `published_at` descending (newest first).
///
/// The index is rebuilt from disk on every call. Every directory entry is
/// treated as a post source; there is no extension filter. Only the header
/// fragment of each file is parsed, bodies are never read into the index.
/// Records without a `published_at` key sort as the empty string, to the end
/// of the listing. Read failures propagate to the caller.
pub fn load_index(posts_dir: &Path) -> Result<Vec<FrontMatter>> {
    let mut entries = fs::read_dir(posts_dir)?.collect::<std::io::Result<Vec<_>>>()?;
    // Scan in file-name order so ties under the stable sort are deterministic
    entries.sort_by_key(|e| e.file_name());

    let mut records = Vec::with_capacity(entries.len());
    for entry in entries {
        let content = fs::read_to_string(entry.path())?;
        let record = split_fragments(&content)
            .first()
            .map(|header| FrontMatter::parse(header))
            .unwrap_or_default();
        records.push(record);
    }

    records.sort_by(|a, b| b.published_at().cmp(a.published_at()));

    tracing::debug!("loaded {} posts from {:?}", records.len(), posts_dir);
    Ok(records)
}
