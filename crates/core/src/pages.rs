//! Page selection and the content model the dashboard renders.
//!
//! A page is built as an ordered list of [`Block`]s by a pure function of
//! the selection, the tables it reads and the [`RenderOptions`]. The web
//! layer turns blocks into HTML or JSON.

use std::fmt;

use serde::Serialize;

use crate::datasets::{DatasetKind, TableSource};
use crate::download::{table_download, DownloadLink};
use crate::error::CoreError;
use crate::narrative::{self, ColumnDoc, ImageRef, DASHBOARD_TITLE};
use crate::table::Table;

// ---------------------------------------------------------------------------
// Selections
// ---------------------------------------------------------------------------

/// The sidebar menu entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Page {
    #[default]
    Introduction,
    Data,
    Networks,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Introduction, Page::Data, Page::Networks];

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Introduction => "Introduction",
            Self::Data => "Data",
            Self::Networks => "Networks",
        }
    }

    /// Parse a menu label, ignoring case.
    pub fn from_label(s: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Unknown page '{s}'. Must be one of: {}",
                    labels(&Self::ALL, Self::label)
                ))
            })
    }

    /// Tables this page reads.
    pub fn required_datasets(&self) -> &'static [DatasetKind] {
        match self {
            Self::Introduction => &[],
            Self::Data => &[
                DatasetKind::Raw,
                DatasetKind::Episodes,
                DatasetKind::Characters,
            ],
            Self::Networks => &[DatasetKind::SeasonProperties],
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which dataset section the Data page shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum DatasetSelection {
    #[default]
    All,
    Raw,
    Episodes,
    Characters,
}

impl DatasetSelection {
    pub const ALL: [DatasetSelection; 4] = [
        DatasetSelection::All,
        DatasetSelection::Raw,
        DatasetSelection::Episodes,
        DatasetSelection::Characters,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Raw => "Raw",
            Self::Episodes => "Episodes",
            Self::Characters => "Characters",
        }
    }

    pub fn from_label(s: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Unknown dataset '{s}'. Must be one of: {}",
                    labels(&Self::ALL, Self::label)
                ))
            })
    }

    fn includes(&self, kind: DatasetKind) -> bool {
        match self {
            Self::All => true,
            Self::Raw => kind == DatasetKind::Raw,
            Self::Episodes => kind == DatasetKind::Episodes,
            Self::Characters => kind == DatasetKind::Characters,
        }
    }
}

fn labels<T>(items: &[T], label: fn(&T) -> &'static str) -> String {
    items.iter().map(label).collect::<Vec<_>>().join(", ")
}

// ---------------------------------------------------------------------------
// Content blocks
// ---------------------------------------------------------------------------

/// One unit of page content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Heading { level: u8, text: String },
    /// Text with inline markup.
    Paragraph { text: String },
    List { items: Vec<String> },
    Table { table: Table },
    Download { link: DownloadLink },
    /// `src` is a file name inside the image directory.
    Image { src: String, caption: String },
}

impl Block {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph { text: text.into() }
    }

    pub fn list<S: AsRef<str>>(items: &[S]) -> Self {
        Self::List {
            items: items.iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }

    pub fn image(image: &ImageRef) -> Self {
        Self::Image {
            src: image.file.to_string(),
            caption: image.caption.to_string(),
        }
    }

    fn columns(docs: &[ColumnDoc]) -> Self {
        Self::List {
            items: docs
                .iter()
                .map(|d| format!("*{}* -> {}", d.column, d.meaning))
                .collect(),
        }
    }
}

/// A fully built page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedPage {
    pub page: Page,
    pub title: &'static str,
    pub blocks: Vec<Block>,
}

/// Knobs for table previews.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Rows shown in each dataset preview.
    pub preview_rows: usize,
    /// Seed for the character sample.
    pub sample_seed: u64,
    pub dataset: DatasetSelection,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            preview_rows: 5,
            sample_seed: 42,
            dataset: DatasetSelection::All,
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Build `page` from the tables in `source`.
///
/// Only the tables listed by [`Page::required_datasets`] are read; a missing
/// one is a [`CoreError::MissingDataset`].
pub fn render(
    page: Page,
    source: &impl TableSource,
    options: &RenderOptions,
) -> Result<RenderedPage, CoreError> {
    let blocks = match page {
        Page::Introduction => introduction(),
        Page::Data => data(source, options)?,
        Page::Networks => networks(source.require(DatasetKind::SeasonProperties)?),
    };

    tracing::debug!(page = %page, blocks = blocks.len(), "Rendered page");

    Ok(RenderedPage {
        page,
        title: DASHBOARD_TITLE,
        blocks,
    })
}

fn introduction() -> Vec<Block> {
    let mut blocks: Vec<Block> = narrative::INTRO_BYLINE
        .iter()
        .map(|line| Block::paragraph(*line))
        .collect();

    blocks.extend([
        Block::heading(2, "Introduction"),
        Block::paragraph(narrative::INTRO_PARTS_LEAD),
        Block::list(narrative::INTRO_PARTS),
        Block::heading(2, "Motivation"),
        Block::heading(3, narrative::MOTIVATION_QUESTION),
        Block::paragraph(narrative::MOTIVATION),
        Block::heading(3, narrative::OBJECTIVES_QUESTION),
        Block::list(narrative::OBJECTIVES),
    ]);
    blocks
}

fn data(source: &impl TableSource, options: &RenderOptions) -> Result<Vec<Block>, CoreError> {
    let selection = options.dataset;
    let mut blocks = vec![Block::heading(2, "Data")];

    if selection.includes(DatasetKind::Raw) {
        let raw = source.require(DatasetKind::Raw)?;
        blocks.extend([
            Block::heading(3, narrative::DATASET_QUESTION),
            Block::paragraph(narrative::RAW_DATASET),
            Block::columns(narrative::RAW_COLUMNS),
            download(raw, DatasetKind::Raw),
            Block::Table {
                table: raw.head(options.preview_rows),
            },
        ]);
    }

    if selection.includes(DatasetKind::Episodes) {
        let episodes = source.require(DatasetKind::Episodes)?;
        blocks.extend([
            Block::heading(3, "Episodes"),
            Block::paragraph(narrative::EPISODES_SUMMARY),
            Block::columns(narrative::EPISODE_COLUMNS),
            Block::paragraph(narrative::EPISODES_EXAMPLE),
            download(episodes, DatasetKind::Episodes),
            Block::Table {
                table: episodes.head(options.preview_rows),
            },
        ]);
    }

    if selection.includes(DatasetKind::Characters) {
        let characters = source.require(DatasetKind::Characters)?;
        blocks.extend([
            Block::heading(3, "Characters"),
            Block::paragraph(narrative::CHARACTERS_SUMMARY),
            Block::columns(narrative::CHARACTER_COLUMNS),
            Block::paragraph(narrative::CHARACTERS_EXAMPLE),
            download(characters, DatasetKind::Characters),
            Block::Table {
                table: characters.sample(options.preview_rows, options.sample_seed),
            },
        ]);
    }

    if selection == DatasetSelection::All {
        blocks.push(Block::heading(3, narrative::BRIEF_ANALYSIS_HEADING));
        for (lead, image) in narrative::DATA_CHARTS {
            blocks.push(Block::paragraph(*lead));
            blocks.push(Block::image(image));
        }
    }

    Ok(blocks)
}

fn download(table: &Table, kind: DatasetKind) -> Block {
    Block::Download {
        link: table_download(table, kind.display_name(), kind.file_name()),
    }
}

fn networks(season_properties: &Table) -> Vec<Block> {
    let mut blocks = vec![
        Block::heading(2, narrative::EVOLUTION_HEADING),
        Block::paragraph(narrative::EVOLUTION_REPRESENTATION),
        Block::paragraph(narrative::EVOLUTION_GROWTH),
        Block::image(&narrative::EVOLUTION_IMAGE),
        Block::paragraph(narrative::SEASON_PROPERTIES_COMMENTARY),
        Block::Table {
            table: season_properties.clone(),
        },
        Block::heading(2, narrative::SMOKERS_HEADING),
        Block::paragraph(narrative::SMOKERS_CLUSTERS),
        Block::paragraph(narrative::SMOKERS_RELATIONS),
    ];

    for summary in narrative::SMOKER_SUMMARIES {
        blocks.push(Block::paragraph(summary.headline));
        blocks.push(Block::list(summary.lines));
    }

    blocks.extend([
        Block::paragraph(narrative::SMOKERS_CONCLUSION),
        Block::paragraph(narrative::SMOKER_LABEL_NOTE),
        Block::image(&narrative::SMOKERS_IMAGE),
        Block::heading(2, narrative::INCLUSION_HEADING),
        Block::paragraph(narrative::INCLUSION_FIRST_APPEARANCES),
        Block::paragraph(narrative::INCLUSION_TREND),
        Block::image(&narrative::INCLUSION_IMAGE),
    ]);
    blocks
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    /// A table source that records every table a renderer asks for.
    #[derive(Default)]
    struct RecordingSource {
        tables: HashMap<DatasetKind, Table>,
        requested: RefCell<Vec<DatasetKind>>,
    }

    impl RecordingSource {
        fn with(kinds: &[DatasetKind]) -> Self {
            let mut source = Self::default();
            for &kind in kinds {
                let header = kind.columns().join(",");
                let row = vec!["1"; kind.columns().len()].join(",");
                let table = Table::parse(&format!("{header}\n{row}\n")).unwrap();
                source.tables.insert(kind, table);
            }
            source
        }

        fn requested(&self) -> Vec<DatasetKind> {
            let mut kinds = self.requested.borrow().clone();
            kinds.sort();
            kinds.dedup();
            kinds
        }
    }

    impl TableSource for RecordingSource {
        fn table(&self, kind: DatasetKind) -> Option<&Table> {
            self.requested.borrow_mut().push(kind);
            self.tables.get(&kind)
        }
    }

    fn texts(page: &RenderedPage) -> Vec<String> {
        page.blocks
            .iter()
            .flat_map(|b| match b {
                Block::Heading { text, .. } | Block::Paragraph { text } => vec![text.clone()],
                Block::List { items } => items.clone(),
                _ => vec![],
            })
            .collect()
    }

    #[test]
    fn labels_parse_case_insensitively() {
        assert_eq!(Page::from_label("networks").unwrap(), Page::Networks);
        assert_eq!(Page::from_label(" DATA ").unwrap(), Page::Data);
        assert_eq!(
            DatasetSelection::from_label("characters").unwrap(),
            DatasetSelection::Characters
        );
    }

    #[test]
    fn unknown_label_lists_valid_options() {
        let err = Page::from_label("Settings").unwrap_err();
        assert_matches!(err, CoreError::Validation(ref msg)
            if msg.contains("Introduction, Data, Networks"));
    }

    #[test]
    fn introduction_is_the_default_page() {
        assert_eq!(Page::default(), Page::Introduction);
    }

    #[test]
    fn each_page_reads_only_its_documented_tables() {
        for page in Page::ALL {
            let source = RecordingSource::with(&DatasetKind::ALL);
            render(page, &source, &RenderOptions::default()).unwrap();

            let mut expected = page.required_datasets().to_vec();
            expected.sort();
            assert_eq!(source.requested(), expected, "page {page}");
        }
    }

    #[test]
    fn pages_render_from_their_tables_alone() {
        for page in Page::ALL {
            let source = RecordingSource::with(page.required_datasets());
            assert!(render(page, &source, &RenderOptions::default()).is_ok());
        }
    }

    #[test]
    fn missing_table_is_reported() {
        let source = RecordingSource::with(&[DatasetKind::Raw]);
        let err = render(Page::Networks, &source, &RenderOptions::default()).unwrap_err();
        assert_matches!(err, CoreError::MissingDataset(DatasetKind::SeasonProperties));
    }

    #[test]
    fn rendering_twice_is_identical() {
        let source = RecordingSource::with(&DatasetKind::ALL);
        let options = RenderOptions::default();
        for page in Page::ALL {
            assert_eq!(
                render(page, &source, &options).unwrap(),
                render(page, &source, &options).unwrap()
            );
        }
    }

    #[test]
    fn networks_page_shows_published_smoker_counts() {
        let source = RecordingSource::with(&[DatasetKind::SeasonProperties]);
        let page = render(Page::Networks, &source, &RenderOptions::default()).unwrap();
        let texts = texts(&page);

        assert!(texts.contains(
            &"**Season 1 - Number of smokers: 17 & Number of not smokers: 45**".to_string()
        ));
        assert!(texts.contains(
            &"**Season 25 - Number of smokers: 38 & Number of not smokers: 324**".to_string()
        ));
    }

    #[test]
    fn networks_page_embeds_season_table_verbatim() {
        let source = RecordingSource::with(&[DatasetKind::SeasonProperties]);
        let page = render(Page::Networks, &source, &RenderOptions::default()).unwrap();
        let expected = &source.tables[&DatasetKind::SeasonProperties];

        assert!(page
            .blocks
            .iter()
            .any(|b| matches!(b, Block::Table { table } if table == expected)));
    }

    #[test]
    fn data_page_has_a_download_per_dataset() {
        let source = RecordingSource::with(&DatasetKind::ALL);
        let page = render(Page::Data, &source, &RenderOptions::default()).unwrap();
        let labels: Vec<&str> = page
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::Download { link } => Some(link.label.as_str()),
                _ => None,
            })
            .collect();

        assert_eq!(
            labels,
            vec![
                "Download Raw Dataset",
                "Download Episodes Dataset",
                "Download Characters Dataset"
            ]
        );
    }

    #[test]
    fn every_dataset_gets_columns_and_a_preview() {
        let source = RecordingSource::with(&DatasetKind::ALL);
        let page = render(Page::Data, &source, &RenderOptions::default()).unwrap();

        let column_lists: Vec<&String> = page
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::List { items } => items.first(),
                _ => None,
            })
            .collect();
        assert_eq!(
            column_lists,
            vec![
                "*episode_id* -> Id of the episode",
                "*episode_id* -> Id of the episode",
                "*character_id* -> Id of the character",
            ]
        );

        let previews: Vec<&Table> = page
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::Table { table } => Some(table),
                _ => None,
            })
            .collect();
        assert_eq!(previews.len(), 3);
        assert_eq!(previews[0], &source.tables[&DatasetKind::Raw]);
    }

    #[test]
    fn dataset_selection_narrows_the_data_page() {
        let source = RecordingSource::with(&DatasetKind::ALL);
        let options = RenderOptions {
            dataset: DatasetSelection::Episodes,
            ..RenderOptions::default()
        };
        let page = render(Page::Data, &source, &options).unwrap();

        assert_eq!(source.requested(), vec![DatasetKind::Episodes]);
        assert!(!page.blocks.iter().any(|b| matches!(b, Block::Image { .. })));
    }

    #[test]
    fn raw_selection_shows_a_preview() {
        let source = RecordingSource::with(&[DatasetKind::Raw]);
        let options = RenderOptions {
            dataset: DatasetSelection::Raw,
            ..RenderOptions::default()
        };
        let page = render(Page::Data, &source, &options).unwrap();
        assert!(page.blocks.iter().any(|b| matches!(b, Block::Table { .. })));
    }

    #[test]
    fn previews_respect_row_limit() {
        let mut source = RecordingSource::with(&DatasetKind::ALL);
        let mut text = DatasetKind::Characters.columns().join(",");
        text.push('\n');
        for _ in 0..20 {
            text.push_str(&vec!["1"; 11].join(","));
            text.push('\n');
        }
        source
            .tables
            .insert(DatasetKind::Characters, Table::parse(&text).unwrap());

        let options = RenderOptions {
            preview_rows: 3,
            dataset: DatasetSelection::Characters,
            ..RenderOptions::default()
        };
        let page = render(Page::Data, &source, &options).unwrap();
        let preview = page
            .blocks
            .iter()
            .find_map(|b| match b {
                Block::Table { table } => Some(table),
                _ => None,
            })
            .unwrap();
        assert_eq!(preview.len(), 3);
    }

    #[test]
    fn blocks_serialize_with_type_tag() {
        let json = serde_json::to_value(Block::heading(2, "Data")).unwrap();
        assert_eq!(json["type"], "heading");
        assert_eq!(json["level"], 2);
    }
}
