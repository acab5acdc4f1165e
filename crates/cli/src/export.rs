use std::path::Path;

use anyhow::{Context, Result, bail};
use folio_content::ContentStore;
use tracing::info;

/// Writes the pre-rendered page into `dist/index.html` so the markup is
/// complete before the client bundle hydrates it.
pub async fn export(dist: &Path) -> Result<()> {
    let index = dist.join("index.html");
    let template = tokio::fs::read_to_string(&index)
        .await
        .with_context(|| format!("failed to read {}; run `trunk build` first", index.display()))?;

    let store = ContentStore::embedded().context("embedded content is invalid")?;
    let body = folio_web::render_page();
    let page = inject_page(&template, &store.profile().site_title, &body)?;

    tokio::fs::write(&index, page)
        .await
        .with_context(|| format!("failed to write {}", index.display()))?;
    info!(path = %index.display(), bytes = body.len(), "Exported pre-rendered page");
    Ok(())
}

/// Replaces the document title and the contents of `<body>`, keeping the
/// body element's own attributes and everything in `<head>`.
pub fn inject_page(template: &str, title: &str, body: &str) -> Result<String> {
    let Some(open_start) = template.find("<body") else {
        bail!("template has no <body> element");
    };
    let Some(open_len) = template[open_start..].find('>') else {
        bail!("unterminated <body> tag");
    };
    let content_start = open_start + open_len + 1;
    let Some(close) = template[content_start..].rfind("</body>") else {
        bail!("template has no closing </body> tag");
    };
    let content_end = content_start + close;

    let head = replace_title(&template[..open_start], title);
    let mut page = String::with_capacity(template.len() + body.len());
    page.push_str(&head);
    page.push_str(&template[open_start..content_start]);
    page.push_str(body);
    page.push_str(&template[content_end..]);
    Ok(page)
}

fn replace_title(head: &str, title: &str) -> String {
    let (Some(start), Some(end)) = (head.find("<title>"), head.find("</title>")) else {
        return head.to_string();
    };
    if end < start {
        return head.to_string();
    }
    format!("{}<title>{}{}", &head[..start], escape_text(title), &head[end..])
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "<!DOCTYPE html><html><head><title>Portfolio</title>\
        <script type=\"module\">init()</script></head><body class=\"app\">\n</body></html>";

    #[test]
    fn body_and_title_are_replaced() {
        let page = inject_page(TEMPLATE, "Jo & Co's Portfolio", "<main>hi</main>").unwrap();
        assert!(page.contains("<title>Jo &amp; Co's Portfolio</title>"));
        assert!(page.contains("<body class=\"app\"><main>hi</main></body>"));
        assert!(page.contains("<script type=\"module\">init()</script>"));
    }

    #[test]
    fn missing_body_is_an_error() {
        let err = inject_page("<html><head></head></html>", "x", "y").unwrap_err();
        assert!(err.to_string().contains("<body>"));
    }

    #[tokio::test]
    async fn export_rewrites_index_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let index = dir.path().join("index.html");
        std::fs::write(&index, TEMPLATE).unwrap();

        export(dir.path()).await.unwrap();

        let page = std::fs::read_to_string(&index).unwrap();
        assert!(page.contains("id=\"projects\""));
        assert!(!page.contains("<title>Portfolio</title>"));
    }

    #[tokio::test]
    async fn export_requires_a_built_index() {
        let dir = tempfile::tempdir().unwrap();
        let err = export(dir.path()).await.unwrap_err();
        assert!(err.to_string().contains("trunk build"));
    }
}
