//! sitemaps.org `urlset` model.
use chrono::{DateTime, SecondsFormat, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Daily,
    Weekly,
}

impl ChangeFrequency {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sitemap {
    pub entries: Vec<SitemapEntry>,
}

impl Sitemap {
    pub const CONTENT_TYPE: &'static str = "application/xml; charset=utf-8";

    pub fn to_xml(&self) -> String {
        let mut xml = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
        );
        for entry in &self.entries {
            xml.push_str(&format!(
                "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>{}</changefreq>\n    <priority>{:.1}</priority>\n  </url>\n",
                escape_xml(&entry.url),
                entry.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true),
                entry.change_frequency.as_str(),
                entry.priority,
            ));
        }
        xml.push_str("</urlset>\n");
        xml
    }
}

fn escape_xml(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn renders_urlset_with_escaped_locations() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let sitemap = Sitemap {
            entries: vec![
                SitemapEntry {
                    url: "https://lumezza.com".into(),
                    last_modified: now,
                    change_frequency: ChangeFrequency::Daily,
                    priority: 1.0,
                },
                SitemapEntry {
                    url: "https://lumezza.com/product/a?x=1&y=2".into(),
                    last_modified: now,
                    change_frequency: ChangeFrequency::Weekly,
                    priority: 0.8,
                },
            ],
        };

        let xml = sitemap.to_xml();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset"));
        assert!(xml.contains("<loc>https://lumezza.com</loc>"));
        assert!(xml.contains("<loc>https://lumezza.com/product/a?x=1&amp;y=2</loc>"));
        assert!(xml.contains("<lastmod>2025-03-01T12:00:00Z</lastmod>"));
        assert!(xml.contains("<changefreq>daily</changefreq>\n    <priority>1.0</priority>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>\n    <priority>0.8</priority>"));
        assert_eq!(xml.matches("<url>").count(), 2);
        assert!(xml.ends_with("</urlset>\n"));
    }

    #[test]
    fn empty_sitemap_is_valid_urlset() {
        let xml = Sitemap::default().to_xml();
        assert!(xml.contains("<urlset"));
        assert!(!xml.contains("<url>"));
    }
}
