//! Site-wide text artifacts: the plain-text sitemap and the Atom feed.
//!
//! Both are pure string assembly over already-queried posts so the HTTP
//! handlers stay thin and the formats are testable without a store.

use crate::domain::Post;

/// Number of posts included in the Atom feed.
const FEED_LIMIT: usize = 20;

/// Build the plain-text sitemap body.
///
/// Three fixed URLs (home, project listing, about) followed by one
/// `/blog/{slug}` URL per post, in the order given, CRLF-joined with no
/// trailing newline. Callers pass published posts sorted newest first.
pub fn render_sitemap(site_url: &str, posts: &[Post]) -> String {
    let base = site_url.trim_end_matches('/');

    let mut entries = vec![
        format!("{base}/"),
        format!("{base}/projects/list"),
        format!("{base}/about"),
    ];
    entries.extend(posts.iter().map(|post| format!("{base}/blog/{}", post.slug)));

    entries.join("\r\n")
}

/// Build the Atom feed for the newest posts.
///
/// Callers pass published posts sorted newest first; only the first
/// [`FEED_LIMIT`] entries are included.
pub fn render_feed(site_url: &str, title: &str, posts: &[Post]) -> String {
    let base = site_url.trim_end_matches('/');

    let mut feed = String::new();
    feed.push_str(r#"<?xml version="1.0" encoding="utf-8"?>"#);
    feed.push('\n');
    feed.push_str(r#"<feed xmlns="http://www.w3.org/2005/Atom">"#);
    feed.push('\n');
    feed.push_str(&format!("  <title>{}</title>\n", escape_xml(title)));
    feed.push_str(&format!("  <link href=\"{base}/api/feed\" rel=\"self\"/>\n"));
    feed.push_str(&format!("  <link href=\"{base}/\"/>\n"));
    feed.push_str(&format!("  <id>{base}/</id>\n"));

    if let Some(newest) = posts.first() {
        feed.push_str(&format!(
            "  <updated>{}</updated>\n",
            newest.date_created.to_rfc3339()
        ));
    }

    for post in posts.iter().take(FEED_LIMIT) {
        feed.push_str("  <entry>\n");
        feed.push_str(&format!("    <title>{}</title>\n", escape_xml(&post.title)));
        feed.push_str(&format!("    <link href=\"{base}/blog/{}\"/>\n", post.slug));
        feed.push_str(&format!("    <id>{base}/blog/{}</id>\n", post.slug));
        feed.push_str(&format!(
            "    <published>{}</published>\n",
            post.date_created.to_rfc3339()
        ));
        feed.push_str(&format!(
            "    <summary>{}</summary>\n",
            escape_xml(&post.description)
        ));
        feed.push_str(&format!(
            "    <content type=\"html\"><![CDATA[{}]]></content>\n",
            post.body
        ));
        feed.push_str("  </entry>\n");
    }

    feed.push_str("</feed>\n");
    feed
}

/// Escape XML special characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn published(slug: &str, ts: i64) -> Post {
        let mut post = Post::new(slug.to_string(), "# body".to_string());
        post.slug = slug.to_string();
        post.is_published = true;
        post.date_created = Utc.timestamp_opt(ts, 0).unwrap();
        post
    }

    #[test]
    fn test_sitemap_fixed_urls_only() {
        let body = render_sitemap("https://kuzzmi.com", &[]);
        assert_eq!(
            body,
            "https://kuzzmi.com/\r\nhttps://kuzzmi.com/projects/list\r\nhttps://kuzzmi.com/about"
        );
    }

    #[test]
    fn test_sitemap_lists_posts_in_given_order() {
        // "b" is newer and comes first, matching the descending sort the
        // repository applies.
        let posts = [published("b", 2_000), published("a", 1_000)];
        let body = render_sitemap("https://kuzzmi.com/", &posts);

        assert_eq!(
            body,
            "https://kuzzmi.com/\r\n\
             https://kuzzmi.com/projects/list\r\n\
             https://kuzzmi.com/about\r\n\
             https://kuzzmi.com/blog/b\r\n\
             https://kuzzmi.com/blog/a"
        );
    }

    #[test]
    fn test_sitemap_no_trailing_newline() {
        let posts = [published("a", 1_000)];
        let body = render_sitemap("https://kuzzmi.com", &posts);
        assert!(!body.ends_with('\n'));
    }

    #[test]
    fn test_feed_contains_entries_and_escapes_title() {
        let mut post = published("rust-tips", 2_000);
        post.title = "Tips & <tricks>".to_string();
        post.body = "<p>hello</p>".to_string();

        let feed = render_feed("https://kuzzmi.com", "kuzzmi", &[post]);

        assert!(feed.starts_with(r#"<?xml version="1.0" encoding="utf-8"?>"#));
        assert!(feed.contains("<title>Tips &amp; &lt;tricks&gt;</title>"));
        assert!(feed.contains(r#"<link href="https://kuzzmi.com/blog/rust-tips"/>"#));
        assert!(feed.contains("<![CDATA[<p>hello</p>]]>"));
        assert!(feed.ends_with("</feed>\n"));
    }

    #[test]
    fn test_feed_limits_entries() {
        let posts: Vec<Post> = (0..30).map(|i| published(&format!("p{i}"), 10_000 - i)).collect();
        let feed = render_feed("https://kuzzmi.com", "kuzzmi", &posts);

        assert_eq!(feed.matches("<entry>").count(), FEED_LIMIT);
        assert!(feed.contains("/blog/p0"));
        assert!(!feed.contains("/blog/p25"));
    }
}
