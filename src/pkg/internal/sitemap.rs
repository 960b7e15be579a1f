use chrono::NaiveDate;

/// Public routes of the board front-end, in sitemap order.
pub const STATIC_ROUTES: [&str; 7] = [
    "/",
    "/browse-jobs",
    "/pricing",
    "/about",
    "/contact",
    "/login",
    "/signup",
];

fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn push_url(xml: &mut Vec<String>, loc: &str, lastmod: &str, priority: &str) {
    xml.push("  <url>".into());
    xml.push(format!("    <loc>{}</loc>", escape(loc)));
    xml.push(format!("    <lastmod>{}</lastmod>", lastmod));
    xml.push("    <changefreq>daily</changefreq>".into());
    xml.push(format!("    <priority>{}</priority>", priority));
    xml.push("  </url>".into());
}

/// Renders a sitemaps.org urlset for the static pages plus one detail page
/// per job id.
pub fn build<'a>(base_url: &str, job_ids: impl IntoIterator<Item = &'a str>, today: NaiveDate) -> String {
    let base = base_url.trim_end_matches('/');
    let lastmod = today.format("%Y-%m-%d").to_string();
    let mut xml = vec![
        r#"<?xml version="1.0" encoding="UTF-8"?>"#.to_string(),
        r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#.to_string(),
    ];
    for route in STATIC_ROUTES {
        let priority = if route == "/" { "1.0" } else { "0.7" };
        push_url(&mut xml, &format!("{}{}", base, route), &lastmod, priority);
    }
    for id in job_ids {
        push_url(&mut xml, &format!("{}/job/{}", base, id), &lastmod, "0.8");
    }
    xml.push("</urlset>".into());
    xml.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 18).unwrap()
    }

    #[test]
    fn test_static_and_job_urls() {
        let xml = build("https://board.example/", ["1", "abc"], day());
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.ends_with("</urlset>"));
        assert_eq!(xml.matches("<url>").count(), STATIC_ROUTES.len() + 2);
        assert!(xml.contains("<loc>https://board.example/</loc>\n    <lastmod>2026-01-18</lastmod>\n    <changefreq>daily</changefreq>\n    <priority>1.0</priority>"));
        assert!(xml.contains("<loc>https://board.example/pricing</loc>"));
        assert!(xml.contains("<loc>https://board.example/job/abc</loc>\n    <lastmod>2026-01-18</lastmod>\n    <changefreq>daily</changefreq>\n    <priority>0.8</priority>"));
    }

    #[test]
    fn test_ids_are_escaped() {
        let xml = build("", ["a&b"], day());
        assert!(xml.contains("<loc>/job/a&amp;b</loc>"));
    }
}
