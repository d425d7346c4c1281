//! flatblog: a file-based blog server
//!
//! Posts live as flat text files with a `---`-delimited front-matter header
//! followed by a markdown body. The server reads them from disk on every
//! request; there is no database and no cache.

pub mod commands;
pub mod config;
pub mod content;
pub mod router;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::Path;

/// The main blog application
#[derive(Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Directory holding the post source files (flat, no subdirectories)
    pub posts_dir: std::path::PathBuf,
    /// Directory holding images referenced by posts
    pub images_dir: std::path::PathBuf,
    /// Directory holding stylesheets
    pub styles_dir: std::path::PathBuf,
}

impl Blog {
    /// Create a new Blog instance from a base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let posts_dir = base_dir.join(&config.posts_dir);
        let images_dir = base_dir.join(&config.images_dir);
        let styles_dir = base_dir.join(&config.styles_dir);

        Ok(Self {
            config,
            base_dir,
            posts_dir,
            images_dir,
            styles_dir,
        })
    }
}
