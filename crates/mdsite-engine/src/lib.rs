pub mod parsing;
pub mod site;
pub mod title;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use parsing::{
    Attributes, MarkupNode, ParseError, document_to_markup, markdown_to_html, serialize,
};
pub use site::{
    BuildReport, FailurePolicy, PageError, PagePlan, SiteError, SiteOptions, build_site,
    render_page,
};
pub use title::{TitleError, extract_title};
