//! Create a new post

use anyhow::Result;
use std::fs;

use crate::Blog;

/// Create a new post file under the posts directory.
///
/// The file name is the slugified title, which is also what resolves the
/// post's `/posts/{slug}` URL.
pub fn run(blog: &Blog, title: &str) -> Result<()> {
    let now = chrono::Local::now();
    let slug = slug::slugify(title);

    fs::create_dir_all(&blog.posts_dir)?;

    let file_path = blog.posts_dir.join(format!("{}.md", slug));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let content = format!(
        r#"---
title: {title}
slug: {slug}
author: {author}
summary:
published_at: {date}
image:
---
Write your post here.
"#,
        author = blog.config.author,
        date = now.format("%Y-%m-%d"),
    );

    fs::write(&file_path, content)?;

    println!("Created: {:?}", file_path);

    Ok(())
}
