use std::path::{Path, PathBuf};

use crate::{parsing::markdown_to_html, title::extract_title};

use super::{PageError, SiteError, fs::scan_markdown_files};

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Renders one markdown document into a full page.
///
/// The title comes from the first `# ` heading, so a document without one
/// fails. Root-relative `href` and `src` values are re-rooted under
/// `basepath`.
pub fn render_page(markdown: &str, template: &str, basepath: &str) -> Result<String, PageError> {
    let title = extract_title(markdown)?;
    let content = markdown_to_html(markdown)?;
    let page = apply_template(template, &title, &content);
    Ok(rewrite_basepath(&page, basepath))
}

/// Substitutes every title and content placeholder in `template`.
pub fn apply_template(template: &str, title: &str, content: &str) -> String {
    template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content)
}

/// Rewrites `href="/` and `src="/` to start with `basepath` instead.
///
/// A basepath of `/` leaves the page untouched. The basepath is rooted with
/// exactly one leading and one trailing slash, so `repo`, `/repo` and
/// `/repo/` all rewrite `/x` to `/repo/x`.
pub fn rewrite_basepath(html: &str, basepath: &str) -> String {
    let trimmed = basepath.trim_matches('/');
    if trimmed.is_empty() {
        return html.to_string();
    }
    html.replace("href=\"/", &format!("href=\"/{trimmed}/"))
        .replace("src=\"/", &format!("src=\"/{trimmed}/"))
}

/// A markdown source and the output path it renders to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagePlan {
    pub source: PathBuf,
    pub output: PathBuf,
}

/// Maps every markdown file under `content_dir` to its output path under
/// `output_dir`, mirroring the directory layout with a `.html` extension.
pub fn discover_pages(content_dir: &Path, output_dir: &Path) -> Result<Vec<PagePlan>, SiteError> {
    let sources = scan_markdown_files(content_dir)?;
    Ok(sources
        .into_iter()
        .filter_map(|source| {
            let relative = source.strip_prefix(content_dir).ok()?.with_extension("html");
            Some(PagePlan {
                output: output_dir.join(relative),
                source,
            })
        })
        .collect())
}
