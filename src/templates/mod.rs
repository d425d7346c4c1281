//! View templates using the Tera template engine
//!
//! All templates are embedded directly in the binary.

use anyhow::Result;
use std::collections::HashMap;
use tera::{Context, Tera};

/// Template renderer with embedded blog views
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Front-matter values arrive pre-escaped and post bodies are already
        // HTML, so Tera must not escape them again
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("home.html", include_str!("blog/home.html")),
            ("show.html", include_str!("blog/show.html")),
            ("about.html", include_str!("blog/about.html")),
            ("404.html", include_str!("blog/404.html")),
            (
                "partials/header.html",
                include_str!("blog/partials/header.html"),
            ),
            (
                "partials/footer.html",
                include_str!("blog/partials/footer.html"),
            ),
        ])?;

        tera.register_filter("date_format", date_format_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: format a `YYYY-MM-DD` date string for display
///
/// `format="LL"` renders like "May 30, 2023"; anything that does not parse
/// is returned as-is.
fn date_format_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("date_format", "value", String, value);
    let format = match args.get("format") {
        Some(val) => tera::try_get_value!("date_format", "format", String, val),
        None => "YYYY-MM-DD".to_string(),
    };

    if format == "LL" {
        if let Ok(date) = chrono::NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
            return Ok(tera::Value::String(date.format("%B %d, %Y").to_string()));
        }
    }

    Ok(tera::Value::String(s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::FrontMatter;

    fn renderer() -> TemplateRenderer {
        TemplateRenderer::new().unwrap()
    }

    #[test]
    fn test_render_home_lists_posts() {
        let posts = vec![
            FrontMatter::parse("title: Second\nslug: second\npublished_at: 2022-06-01"),
            FrontMatter::parse("title: First\nslug: first\npublished_at: 2021-01-01"),
        ];

        let mut context = Context::new();
        context.insert("site", &SiteConfig::default());
        context.insert("posts", &posts);

        let html = renderer().render("home.html", &context).unwrap();
        assert!(html.contains(r#"<a href="/posts/second""#));
        assert!(html.contains("Second"));
        assert!(html.contains("June 01, 2022"));
        assert!(html.contains("All rights reserved"));
    }

    #[test]
    fn test_render_home_tolerates_missing_fields() {
        let posts = vec![FrontMatter::parse("title: Bare")];

        let mut context = Context::new();
        context.insert("site", &SiteConfig::default());
        context.insert("posts", &posts);

        let html = renderer().render("home.html", &context).unwrap();
        assert!(html.contains("Bare"));
        assert!(html.contains(r#"<a href="/posts/""#));
    }

    #[test]
    fn test_render_show_with_title_heading() {
        let mut context = Context::new();
        context.insert("site", &SiteConfig::default());
        context.insert("post", &FrontMatter::parse("title: Hello"));
        context.insert("body", "<h2>rendered</h2>");
        context.insert("image_url", &None::<String>);

        let html = renderer().render("show.html", &context).unwrap();
        assert!(html.contains("<h1 class=\"text-3xl mb-2\">Hello</h1>"));
        assert!(html.contains("<h2>rendered</h2>"));
    }

    #[test]
    fn test_render_show_prefers_image_over_heading() {
        let mut context = Context::new();
        context.insert("site", &SiteConfig::default());
        context.insert("post", &FrontMatter::parse("title: Hello\nimage: pic.png"));
        context.insert("body", "<p>text</p>");
        context.insert("image_url", &Some("/images/posts/pic.png".to_string()));

        let html = renderer().render("show.html", &context).unwrap();
        assert!(html.contains(r#"<img src="/images/posts/pic.png""#));
        assert!(!html.contains("<h1 class=\"text-3xl mb-2\">"));
    }

    #[test]
    fn test_render_not_found_page() {
        let mut context = Context::new();
        context.insert("site", &SiteConfig::default());

        let html = renderer().render("404.html", &context).unwrap();
        assert!(html.contains("Page not found"));
    }

    #[test]
    fn test_date_format_filter_passes_through_unparsable_values() {
        let mut context = Context::new();
        context.insert("site", &SiteConfig::default());
        context.insert("posts", &vec![FrontMatter::parse("published_at: soon")]);

        let html = renderer().render("home.html", &context).unwrap();
        assert!(html.contains("soon"));
    }
}
