//! Search index construction.
//!
//! The [`IndexBuilder`] runs one sequential pass over a site:
//! 1. Discover `*.html` files, skipping excluded paths
//! 2. Load each file (read failures are logged and skipped)
//! 3. Extract one page entry and, optionally, one entry per anchored section
//! 4. Make every identifier unique across the run

use std::path::{Path, PathBuf};

use pagescan_config::IndexSettings;
use pagescan_document::{
    CorpusFile, ParsedDocument, ProgressReporter, discover_html_files, load,
    slug::{Slugifier, slugify},
    text::truncate_chars,
};
use tracing::{debug, warn};

use crate::{
    ExclusionRules, IndexError, PageType, SearchItem,
    extract::{
        DESCRIPTION_LIMIT, extract_description, extract_keywords, extract_main_text,
        extract_title,
    },
    section::extract_sections,
    url::{page_category, page_url},
};

/// Extraction limits and switches for one build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    /// Page body character cap; 0 disables truncation.
    pub max_page_chars: usize,
    /// Section body character cap; 0 disables truncation.
    pub max_section_chars: usize,
    /// Whether section entries are emitted.
    pub include_sections: bool,
}

impl From<&IndexSettings> for BuildOptions {
    fn from(settings: &IndexSettings) -> Self {
        Self {
            max_page_chars: settings.max_page_chars,
            max_section_chars: settings.max_section_chars,
            include_sections: settings.sections,
        }
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self::from(&IndexSettings::default())
    }
}

/// Statistics from a build.
#[derive(Debug, Clone, Default)]
pub struct IndexStats {
    /// Files that produced entries.
    pub files_indexed: usize,
    /// Files skipped because they could not be read.
    pub files_skipped: usize,
    /// Page entries emitted.
    pub pages: usize,
    /// Section entries emitted.
    pub sections: usize,
    /// Read errors (relative path, message).
    pub errors: Vec<(PathBuf, String)>,
}

impl IndexStats {
    /// Total entries emitted.
    pub fn items(&self) -> usize {
        self.pages + self.sections
    }
}

/// The entries produced by a build, in output order.
#[derive(Debug, Clone, Default)]
pub struct BuiltIndex {
    /// Entries: each page followed by its sections, pages in sorted path order.
    pub items: Vec<SearchItem>,
    /// Build statistics.
    pub stats: IndexStats,
}

/// Builds the entries for one parsed page.
///
/// Identifiers are the raw slugs; uniqueness across pages is the caller's job.
/// The document has its non-content elements stripped in the process.
pub fn index_document(
    rel_path: &Path,
    doc: &mut ParsedDocument,
    options: &BuildOptions,
) -> Vec<SearchItem> {
    let url = page_url(rel_path);
    let category = page_category(rel_path);
    let item_type = PageType::from_url(&url);
    let page_slug = slugify(&url);

    let title = extract_title(doc);
    let description = truncate_chars(&extract_description(doc), DESCRIPTION_LIMIT);
    let keywords = extract_keywords(doc);
    let content = extract_main_text(doc, options.max_page_chars);

    let mut items = vec![SearchItem {
        id: page_slug.clone(),
        title: title.clone(),
        description,
        url: url.clone(),
        category: category.clone(),
        item_type,
        keywords: keywords.clone(),
        content,
        anchor: String::new(),
        section_title: String::new(),
    }];

    if options.include_sections {
        for section in extract_sections(doc.main_region(), options.max_section_chars) {
            items.push(SearchItem {
                id: format!("{page_slug}-{}", slugify(&section.anchor)),
                title: section.title,
                description: truncate_chars(&section.content, DESCRIPTION_LIMIT),
                url: url.clone(),
                category: category.clone(),
                item_type,
                keywords: keywords.clone(),
                content: section.content,
                anchor: section.anchor,
                section_title: title.clone(),
            });
        }
    }

    items
}

/// Orchestrates a full index build over one site root.
#[derive(Debug, Clone)]
pub struct IndexBuilder {
    /// Extraction limits.
    options: BuildOptions,
    /// Path exclusions.
    rules: ExclusionRules,
}

impl IndexBuilder {
    /// Creates a builder from index settings.
    ///
    /// Returns an error if the exclude patterns fail to compile.
    pub fn new(settings: &IndexSettings) -> Result<Self, IndexError> {
        Ok(Self {
            options: BuildOptions::from(settings),
            rules: ExclusionRules::from_settings(settings)?,
        })
    }

    /// Replaces the extraction options.
    #[must_use]
    pub fn with_options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    /// Lists the files that will be indexed, in processing order.
    pub fn discover(&self, root: &Path) -> Result<Vec<CorpusFile>, IndexError> {
        Ok(discover_html_files(root, |rel| {
            !self.rules.is_excluded(rel)
        })?)
    }

    /// Builds the index for every included file under `root`.
    ///
    /// Unreadable files are reported through `reporter` and skipped; only a
    /// missing root fails the build.
    pub fn build<R: ProgressReporter>(
        &self,
        root: &Path,
        reporter: &mut R,
    ) -> Result<BuiltIndex, IndexError> {
        let files = self.discover(root)?;
        Ok(self.build_files(&files, reporter))
    }

    /// Builds the index for an already discovered file list, in list order.
    ///
    /// A file that cannot be read is logged, counted as skipped and reported
    /// through `reporter`; the remaining files are still indexed.
    pub fn build_files<R: ProgressReporter>(
        &self,
        files: &[CorpusFile],
        reporter: &mut R,
    ) -> BuiltIndex {
        let total = files.len();
        let mut ids = Slugifier::new();
        let mut built = BuiltIndex::default();

        for (idx, file) in files.iter().enumerate() {
            reporter.on_file_start(&file.rel_path, idx + 1, total);

            let mut doc = match load(&file.abs_path) {
                Ok(doc) => doc,
                Err(e) => {
                    warn!(path = %file.rel_path.display(), error = %e, "skipping unreadable page");
                    let message = e.to_string();
                    reporter.on_file_error(&file.rel_path, &message);
                    built.stats.files_skipped += 1;
                    built.stats.errors.push((file.rel_path.clone(), message));
                    continue;
                }
            };

            let items = index_document(&file.rel_path, &mut doc, &self.options);
            let sections = items.iter().filter(|item| item.is_section()).count();
            debug!(
                path = %file.rel_path.display(),
                sections,
                "indexed page"
            );

            built.stats.files_indexed += 1;
            built.stats.pages += items.len() - sections;
            built.stats.sections += sections;
            reporter.on_file_done(&file.rel_path, items.len());

            built.items.extend(items.into_iter().map(|mut item| {
                item.id = ids.unique(item.id);
                item
            }));
        }

        reporter.on_complete(built.stats.files_indexed, built.stats.files_skipped);
        built
    }
}
