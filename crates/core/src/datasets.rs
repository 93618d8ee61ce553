//! Dataset loading and the read-only context the page renderers consume.
//!
//! All four files are read once at startup. Any missing file, malformed
//! row or schema mismatch aborts the load; there is no partial context.

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::error::CoreError;
use crate::records::{
    group_episodes, Character, Episode, EpisodeAppearance, RawAppearance, Record, RowView,
    SeasonProperties,
};
use crate::table::Table;
use crate::types::RecordId;

// ---------------------------------------------------------------------------
// Dataset kinds
// ---------------------------------------------------------------------------

pub const FILE_CHARACTERS: &str = "characters.csv";
pub const FILE_EPISODES: &str = "episodes.csv";
pub const FILE_RAW: &str = "simpsons_ep-char.csv";
pub const FILE_SEASON_PROPERTIES: &str = "season_properties.csv";

/// The four tabular inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    Raw,
    Episodes,
    Characters,
    SeasonProperties,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 4] = [
        DatasetKind::Raw,
        DatasetKind::Episodes,
        DatasetKind::Characters,
        DatasetKind::SeasonProperties,
    ];

    /// File name inside the data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Raw => FILE_RAW,
            Self::Episodes => FILE_EPISODES,
            Self::Characters => FILE_CHARACTERS,
            Self::SeasonProperties => FILE_SEASON_PROPERTIES,
        }
    }

    /// Display name used in download labels.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Raw => "Raw",
            Self::Episodes => "Episodes",
            Self::Characters => "Characters",
            Self::SeasonProperties => "Season properties",
        }
    }

    /// The documented column set.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Self::Raw => RawAppearance::COLUMNS,
            Self::Episodes => EpisodeAppearance::COLUMNS,
            Self::Characters => Character::COLUMNS,
            Self::SeasonProperties => SeasonProperties::COLUMNS,
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// A dataset kept both as its source table and as typed records.
#[derive(Debug, Clone)]
pub struct Dataset<R> {
    pub table: Table,
    pub records: Vec<R>,
}

impl<R: Record> Dataset<R> {
    /// Decode `text` as the file of `kind`.
    pub fn from_csv(kind: DatasetKind, text: &str) -> Result<Self, CoreError> {
        let file = kind.file_name();
        let table = Table::parse(text).map_err(|source| CoreError::Csv { file, source })?;

        if !R::matches_schema(table.headers()) {
            return Err(CoreError::Schema {
                file,
                expected: R::COLUMNS.iter().map(|c| c.to_string()).collect(),
                found: table.headers().to_vec(),
            });
        }

        let records = table
            .rows()
            .iter()
            .enumerate()
            .map(|(i, cells)| {
                R::from_row(&RowView::new(file, i + 1, &table, cells).with_aliases(R::ALIASES))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { table, records })
    }

    /// Read and decode `<dir>/<kind file>`.
    pub fn load(dir: &Path, kind: DatasetKind) -> Result<Self, CoreError> {
        let path = dir.join(kind.file_name());
        let text =
            std::fs::read_to_string(&path).map_err(|source| CoreError::Io { path, source })?;
        let dataset = Self::from_csv(kind, &text)?;
        tracing::info!(
            file = kind.file_name(),
            rows = dataset.records.len(),
            "Loaded dataset"
        );
        Ok(dataset)
    }
}

// ---------------------------------------------------------------------------
// Context
// ---------------------------------------------------------------------------

/// Read access to dataset tables, as needed by the page renderers.
///
/// Renderers ask for each table they use, so a page can be shown from any
/// source holding at least the tables that page needs.
pub trait TableSource {
    fn table(&self, kind: DatasetKind) -> Option<&Table>;

    fn require(&self, kind: DatasetKind) -> Result<&Table, CoreError> {
        self.table(kind).ok_or(CoreError::MissingDataset(kind))
    }
}

/// Row count and shape of a loaded dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    pub kind: DatasetKind,
    pub file: &'static str,
    pub columns: Vec<String>,
    pub rows: usize,
    /// Distinct episodes, for the appearance table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episodes: Option<usize>,
}

/// Every dataset, loaded once and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct DatasetContext {
    pub characters: Dataset<Character>,
    pub episodes: Dataset<EpisodeAppearance>,
    pub raw: Dataset<RawAppearance>,
    pub season_properties: Dataset<SeasonProperties>,
}

impl DatasetContext {
    /// Load all four files from `dir`.
    pub fn load(dir: &Path) -> Result<Self, CoreError> {
        let context = Self {
            characters: Dataset::load(dir, DatasetKind::Characters)?,
            episodes: Dataset::load(dir, DatasetKind::Episodes)?,
            raw: Dataset::load(dir, DatasetKind::Raw)?,
            season_properties: Dataset::load(dir, DatasetKind::SeasonProperties)?,
        };

        let orphans = context.orphan_character_ids();
        if !orphans.is_empty() {
            tracing::warn!(
                count = orphans.len(),
                "Appearance rows reference characters missing from {FILE_CHARACTERS}"
            );
        }

        Ok(context)
    }

    pub fn summaries(&self) -> Vec<DatasetSummary> {
        DatasetKind::ALL
            .iter()
            .filter_map(|&kind| {
                self.table(kind).map(|table| DatasetSummary {
                    kind,
                    file: kind.file_name(),
                    columns: table.headers().to_vec(),
                    rows: table.len(),
                    episodes: (kind == DatasetKind::Episodes)
                        .then(|| self.grouped_episodes().len()),
                })
            })
            .collect()
    }

    pub fn grouped_episodes(&self) -> Vec<Episode> {
        group_episodes(&self.episodes.records)
    }

    /// Character ids used in the appearance table but absent from the
    /// character table.
    pub fn orphan_character_ids(&self) -> BTreeSet<RecordId> {
        let known: BTreeSet<RecordId> = self
            .characters
            .records
            .iter()
            .map(|c| c.character_id)
            .collect();
        self.episodes
            .records
            .iter()
            .map(|a| a.character_id)
            .filter(|id| !known.contains(id))
            .collect()
    }
}

impl TableSource for DatasetContext {
    fn table(&self, kind: DatasetKind) -> Option<&Table> {
        Some(match kind {
            DatasetKind::Raw => &self.raw.table,
            DatasetKind::Episodes => &self.episodes.table,
            DatasetKind::Characters => &self.characters.table,
            DatasetKind::SeasonProperties => &self.season_properties.table,
        })
    }
}
