//! List posts

use anyhow::Result;

use crate::content::load_index;
use crate::Blog;

/// Print the blog index to stdout, newest first
pub fn run(blog: &Blog) -> Result<()> {
    let posts = load_index(&blog.posts_dir)?;

    println!("Posts ({}):", posts.len());
    for post in &posts {
        println!(
            "  {} - {} [{}]",
            post.published_at(),
            post.get("title").unwrap_or("Untitled"),
            post.get("slug").unwrap_or(""),
        );
    }

    Ok(())
}
