//! # Site Building
//!
//! Thin I/O around the conversion pipeline: walk a content tree, render each
//! page through a template, copy static assets and write the output tree.
//!
//! ## Modules
//!
//! - **`page`**: `render_page`, template substitution, basepath rewriting, `discover_pages`
//! - **`fs`**: directory scanning, static copying, file reads and writes
//!
//! ## Failure Policy
//!
//! A page that fails to convert either aborts the build or is skipped and
//! reported, as chosen by the caller through [`FailurePolicy`]. I/O errors
//! always abort.

pub mod fs;
pub mod page;

use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::{parsing::ParseError, title::TitleError};

pub use page::{PagePlan, apply_template, discover_pages, render_page, rewrite_basepath};

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("IO error at {path}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("Directory not found: {0}")]
    MissingDir(PathBuf),

    #[error("Failed to render {path}: {source}")]
    Page { path: PathBuf, source: PageError },
}

impl SiteError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        SiteError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Why a single page could not be rendered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Title(#[from] TitleError),
}

/// What to do when a page fails to convert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Fail the whole build on the first failing page (in path order).
    #[default]
    Abort,
    /// Log the failure, leave the page out and keep building.
    Skip,
}

#[derive(Debug, Clone)]
pub struct SiteOptions {
    pub content_dir: PathBuf,
    /// Copied verbatim into the output before pages are written. `None`
    /// just empties the output directory.
    pub static_dir: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub template_path: PathBuf,
    pub basepath: String,
    pub on_error: FailurePolicy,
}

/// Outcome of a successful build.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Output paths of written pages, in source path order.
    pub pages: Vec<PathBuf>,
    pub static_files: usize,
    /// Pages left out under [`FailurePolicy::Skip`].
    pub skipped: Vec<(PathBuf, PageError)>,
}

/// Builds the whole site described by `options`.
pub fn build_site(options: &SiteOptions) -> Result<BuildReport, SiteError> {
    let mut report = BuildReport::default();

    match &options.static_dir {
        Some(static_dir) => {
            info!(
                "Copying static files from {} to {}",
                static_dir.display(),
                options.output_dir.display()
            );
            report.static_files = fs::copy_static(static_dir, &options.output_dir)?;
        }
        None => fs::reset_dir(&options.output_dir)?,
    }

    let template = fs::read_file(&options.template_path)?;
    let plans = discover_pages(&options.content_dir, &options.output_dir)?;
    info!(
        "Rendering {} pages from {}",
        plans.len(),
        options.content_dir.display()
    );

    let rendered: Vec<_> = plans
        .par_iter()
        .map(|plan| -> Result<Result<String, PageError>, SiteError> {
            debug!("Rendering {}", plan.source.display());
            let markdown = fs::read_file(&plan.source)?;
            Ok(render_page(&markdown, &template, &options.basepath))
        })
        .collect();

    for (plan, result) in plans.into_iter().zip(rendered) {
        match result? {
            Ok(html) => {
                fs::write_file(&plan.output, &html)?;
                report.pages.push(plan.output);
            }
            Err(source) => match options.on_error {
                FailurePolicy::Abort => {
                    return Err(SiteError::Page {
                        path: plan.source,
                        source,
                    });
                }
                FailurePolicy::Skip => {
                    warn!("Skipping {}: {source}", plan.source.display());
                    report.skipped.push((plan.source, source));
                }
            },
        }
    }

    info!(
        "Built {} pages ({} skipped, {} static files)",
        report.pages.len(),
        report.skipped.len(),
        report.static_files
    );
    Ok(report)
}
