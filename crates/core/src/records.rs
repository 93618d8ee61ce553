//! Typed rows for each dataset file.
//!
//! Every record type lists its columns in [`Record::COLUMNS`]; the loader
//! rejects a file whose header set differs from that list. A record may also
//! accept alternative spellings of a header through [`Record::ALIASES`].

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CoreError;
use crate::table::Table;
use crate::types::RecordId;

// ---------------------------------------------------------------------------
// Row access
// ---------------------------------------------------------------------------

/// One data row of a [`Table`], with column lookup by name.
pub struct RowView<'a> {
    file: &'static str,
    /// 1-based data row number (the header is row 0).
    row: usize,
    table: &'a Table,
    cells: &'a [String],
    aliases: &'static [(&'static str, &'static str)],
}

impl<'a> RowView<'a> {
    pub fn new(file: &'static str, row: usize, table: &'a Table, cells: &'a [String]) -> Self {
        Self {
            file,
            row,
            table,
            cells,
            aliases: &[],
        }
    }

    /// Also look columns up under these `(alias, column)` spellings.
    pub fn with_aliases(mut self, aliases: &'static [(&'static str, &'static str)]) -> Self {
        self.aliases = aliases;
        self
    }

    /// Raw cell text. Columns are checked against the schema before rows are
    /// read, so a missing column reads as empty.
    pub fn text(&self, column: &'static str) -> &'a str {
        self.table
            .column_index(column)
            .or_else(|| {
                self.aliases
                    .iter()
                    .filter(|(_, canonical)| *canonical == column)
                    .find_map(|(alias, _)| self.table.column_index(alias))
            })
            .and_then(|i| self.cells.get(i))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn optional_text(&self, column: &'static str) -> Option<String> {
        let value = self.text(column).trim();
        (!value.is_empty()).then(|| value.to_string())
    }

    pub fn parse<T: FromStr>(
        &self,
        column: &'static str,
        expected: &'static str,
    ) -> Result<T, CoreError> {
        let value = self.text(column).trim();
        value.parse().map_err(|_| self.invalid(column, expected))
    }

    /// Parse whole numbers that a dataframe may have written as floats
    /// (`3.0`).
    pub fn parse_count(&self, column: &'static str) -> Result<u64, CoreError> {
        let value = self.text(column).trim();
        if let Ok(n) = value.parse::<u64>() {
            return Ok(n);
        }
        match value.parse::<f64>() {
            Ok(f) if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => Ok(f as u64),
            _ => Err(self.invalid(column, "a non-negative whole number")),
        }
    }

    pub fn parse_id(&self, column: &'static str) -> Result<RecordId, CoreError> {
        let count = self
            .parse_count(column)
            .map_err(|_| self.invalid(column, "a record id"))?;
        RecordId::try_from(count).map_err(|_| self.invalid(column, "a record id"))
    }

    pub fn parse_bool(&self, column: &'static str) -> Result<bool, CoreError> {
        match self.text(column).trim() {
            "True" | "true" | "TRUE" | "1" => Ok(true),
            "False" | "false" | "FALSE" | "0" => Ok(false),
            _ => Err(self.invalid(column, "a boolean (True/False)")),
        }
    }

    fn invalid(&self, column: &'static str, expected: &'static str) -> CoreError {
        CoreError::Field {
            file: self.file,
            row: self.row,
            column,
            value: self.text(column).to_string(),
            expected,
        }
    }
}

/// A row type that can be decoded from a dataset table.
pub trait Record: Sized {
    /// The exact column set of the source file.
    const COLUMNS: &'static [&'static str];

    /// `(alias, column)` pairs: a header `alias` is read as `column`.
    const ALIASES: &'static [(&'static str, &'static str)] = &[];

    fn from_row(row: &RowView<'_>) -> Result<Self, CoreError>;

    /// Whether `headers`, after alias resolution, are exactly
    /// [`Record::COLUMNS`] in any order.
    fn matches_schema(headers: &[String]) -> bool {
        let found: BTreeSet<&str> = headers
            .iter()
            .map(|h| canonical_column(Self::ALIASES, h))
            .collect();
        headers.len() == Self::COLUMNS.len() && Self::COLUMNS.iter().all(|c| found.contains(c))
    }
}

/// The column `header` stands for under `aliases`.
pub fn canonical_column<'h>(aliases: &[(&'static str, &'static str)], header: &'h str) -> &'h str {
    aliases
        .iter()
        .find(|(alias, _)| *alias == header)
        .map_or(header, |(_, column)| *column)
}

// ---------------------------------------------------------------------------
// Characters
// ---------------------------------------------------------------------------

/// A character of the show, as scraped from the wiki.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Character {
    pub character_id: RecordId,
    pub name: String,
    pub male: bool,
    pub lgbt: bool,
    pub married: bool,
    /// Set for any character that smokes at some point in the series, for
    /// every season of their run.
    pub smoker: bool,
    /// Episode id of the first appearance.
    pub first_appearance: Option<RecordId>,
    pub voice_actor: Option<String>,
    pub num_appearances: u64,
    pub text: Option<String>,
    /// TF-IDF weights of `text`, in the form the offline pipeline wrote them.
    pub tokens: Option<String>,
}

impl Record for Character {
    const COLUMNS: &'static [&'static str] = &[
        "character_id",
        "name",
        "male",
        "lgbt",
        "married",
        "smoker",
        "first_appearance",
        "voice_actor",
        "num_appearances",
        "text",
        "tokens",
    ];

    // The first dataset release spelled this header with a typo.
    const ALIASES: &'static [(&'static str, &'static str)] =
        &[("num_apperanaces", "num_appearances")];

    fn from_row(row: &RowView<'_>) -> Result<Self, CoreError> {
        let first_appearance = match row.text("first_appearance").trim() {
            "" => None,
            _ => Some(row.parse_id("first_appearance")?),
        };

        Ok(Self {
            character_id: row.parse_id("character_id")?,
            name: row.text("name").trim().to_string(),
            male: row.parse_bool("male")?,
            lgbt: row.parse_bool("lgbt")?,
            married: row.parse_bool("married")?,
            smoker: row.parse_bool("smoker")?,
            first_appearance,
            voice_actor: row.optional_text("voice_actor"),
            num_appearances: row.parse_count("num_appearances")?,
            text: row.optional_text("text"),
            tokens: row.optional_text("tokens"),
        })
    }
}

impl Character {
    /// Decode [`Character::tokens`] into `(term, weight)` pairs.
    ///
    /// Accepts a dict rendering (`{'homer': 0.41, 'donut': 0.12}`) or a bare
    /// term list (`['homer', 'donut']`, every weight 1.0). Anything else
    /// yields an empty vector.
    ///
    /// No page shows the weights; they are decoded for library callers
    /// working with the loaded context.
    pub fn term_weights(&self) -> Vec<(String, f64)> {
        self.tokens
            .as_deref()
            .map(parse_term_weights)
            .unwrap_or_default()
    }
}

fn parse_term_weights(raw: &str) -> Vec<(String, f64)> {
    let raw = raw.trim();
    let (inner, is_dict) = if let Some(body) = raw.strip_prefix('{').and_then(|r| r.strip_suffix('}')) {
        (body, true)
    } else if let Some(body) = raw.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
        (body, false)
    } else {
        return Vec::new();
    };

    let mut weights = Vec::new();
    for entry in inner.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let parsed = if is_dict {
            entry.rsplit_once(':').and_then(|(term, weight)| {
                let weight = weight.trim().parse::<f64>().ok()?;
                Some((unquote(term)?, weight))
            })
        } else {
            unquote(entry).map(|term| (term, 1.0))
        };

        match parsed {
            Some(pair) => weights.push(pair),
            None => return Vec::new(),
        }
    }
    weights
}

fn unquote(term: &str) -> Option<String> {
    let term = term.trim();
    ['\'', '"'].iter().find_map(|&q| {
        term.strip_prefix(q)
            .and_then(|t| t.strip_suffix(q))
            .map(str::to_string)
    })
}

// ---------------------------------------------------------------------------
// Episodes
// ---------------------------------------------------------------------------

/// One character appearing in one episode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EpisodeAppearance {
    pub episode_id: RecordId,
    pub character_id: RecordId,
    pub season: u32,
    pub year: i32,
}

impl Record for EpisodeAppearance {
    const COLUMNS: &'static [&'static str] = &["episode_id", "character_id", "season", "year"];

    fn from_row(row: &RowView<'_>) -> Result<Self, CoreError> {
        Ok(Self {
            episode_id: row.parse_id("episode_id")?,
            character_id: row.parse_id("character_id")?,
            season: row.parse("season", "a season number")?,
            year: row.parse("year", "a year")?,
        })
    }
}

/// An episode with the set of characters appearing in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Episode {
    pub episode_id: RecordId,
    pub season: u32,
    pub year: i32,
    pub character_ids: BTreeSet<RecordId>,
}

/// Group appearance rows by episode, ordered by episode id.
///
/// Season and year are taken from the first row seen for each episode.
pub fn group_episodes(appearances: &[EpisodeAppearance]) -> Vec<Episode> {
    let mut episodes: std::collections::BTreeMap<RecordId, Episode> = Default::default();
    for a in appearances {
        episodes
            .entry(a.episode_id)
            .or_insert_with(|| Episode {
                episode_id: a.episode_id,
                season: a.season,
                year: a.year,
                character_ids: BTreeSet::new(),
            })
            .character_ids
            .insert(a.character_id);
    }
    episodes.into_values().collect()
}

// ---------------------------------------------------------------------------
// Raw join
// ---------------------------------------------------------------------------

/// A row of the unprocessed episode/character join. Only offered for
/// download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawAppearance {
    pub episode_id: RecordId,
    pub character_id: RecordId,
}

impl Record for RawAppearance {
    const COLUMNS: &'static [&'static str] = &["episode_id", "character_id"];

    fn from_row(row: &RowView<'_>) -> Result<Self, CoreError> {
        Ok(Self {
            episode_id: row.parse_id("episode_id")?,
            character_id: row.parse_id("character_id")?,
        })
    }
}

// ---------------------------------------------------------------------------
// Season network properties
// ---------------------------------------------------------------------------

/// Aggregate statistics of one season's co-appearance network, computed
/// offline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonProperties {
    pub season: u32,
    pub num_nodes: u64,
    pub num_edges: u64,
    pub average_degree: f64,
    pub average_clustering: f64,
    pub average_shortest_path: f64,
    pub diameter: u64,
}

impl Record for SeasonProperties {
    const COLUMNS: &'static [&'static str] = &[
        "season",
        "num_nodes",
        "num_edges",
        "average_degree",
        "average_clustering",
        "average_shortest_path",
        "diameter",
    ];

    fn from_row(row: &RowView<'_>) -> Result<Self, CoreError> {
        Ok(Self {
            season: row.parse("season", "a season number")?,
            num_nodes: row.parse_count("num_nodes")?,
            num_edges: row.parse_count("num_edges")?,
            average_degree: row.parse("average_degree", "a number")?,
            average_clustering: row.parse("average_clustering", "a number")?,
            average_shortest_path: row.parse("average_shortest_path", "a number")?,
            diameter: row.parse_count("diameter")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn decode<R: Record>(text: &str) -> Result<Vec<R>, CoreError> {
        let table = Table::parse(text).unwrap();
        table
            .rows()
            .iter()
            .enumerate()
            .map(|(i, cells)| {
                R::from_row(&RowView::new("test.csv", i + 1, &table, cells).with_aliases(R::ALIASES))
            })
            .collect()
    }

    const CHARACTER_HEADER: &str = "character_id,name,male,lgbt,married,smoker,first_appearance,voice_actor,num_appearances,text,tokens\n";

    #[test]
    fn decodes_character_row() {
        let text = format!(
            "{CHARACTER_HEADER}1,Homer Simpson,True,False,True,False,1,Dan Castellaneta,706,\"Father, husband\",\"{{'father': 0.5, 'husband': 0.25}}\"\n"
        );
        let characters = decode::<Character>(&text).unwrap();
        let homer = &characters[0];

        assert_eq!(homer.character_id, 1);
        assert_eq!(homer.name, "Homer Simpson");
        assert!(homer.male && homer.married);
        assert!(!homer.lgbt && !homer.smoker);
        assert_eq!(homer.first_appearance, Some(1));
        assert_eq!(homer.voice_actor.as_deref(), Some("Dan Castellaneta"));
        assert_eq!(homer.num_appearances, 706);
        assert_eq!(
            homer.term_weights(),
            vec![("father".to_string(), 0.5), ("husband".to_string(), 0.25)]
        );
    }

    #[test]
    fn optional_character_fields_may_be_empty() {
        let text = format!("{CHARACTER_HEADER}7,Extra,false,false,false,true,,,1.0,,\n");
        let extra = &decode::<Character>(&text).unwrap()[0];

        assert_eq!(extra.first_appearance, None);
        assert_eq!(extra.voice_actor, None);
        assert_eq!(extra.num_appearances, 1);
        assert!(extra.term_weights().is_empty());
    }

    #[test]
    fn bad_boolean_reports_row_and_column() {
        let text = format!("{CHARACTER_HEADER}1,Homer,maybe,False,True,False,1,Dan,1,,\n");
        let err = decode::<Character>(&text).unwrap_err();
        assert_matches!(
            err,
            CoreError::Field { row: 1, column: "male", ref value, .. } if value == "maybe"
        );
    }

    #[test]
    fn term_list_gets_unit_weights() {
        let mut c = decode::<Character>(&format!("{CHARACTER_HEADER}1,A,1,0,0,0,1,,1,,\n"))
            .unwrap()
            .remove(0);
        c.tokens = Some("['beer', \"donut\"]".into());
        assert_eq!(
            c.term_weights(),
            vec![("beer".to_string(), 1.0), ("donut".to_string(), 1.0)]
        );

        c.tokens = Some("beer donut".into());
        assert!(c.term_weights().is_empty());
    }

    #[test]
    fn groups_appearances_into_episodes() {
        let rows = decode::<EpisodeAppearance>(
            "episode_id,character_id,season,year\n2,1,1,1990\n1,1,1,1989\n1,3,1,1989\n2,1,1,1990\n",
        )
        .unwrap();
        let episodes = group_episodes(&rows);

        assert_eq!(episodes.len(), 2);
        assert_eq!(episodes[0].episode_id, 1);
        assert_eq!(episodes[0].year, 1989);
        assert_eq!(episodes[0].character_ids, BTreeSet::from([1, 3]));
        assert_eq!(episodes[1].character_ids, BTreeSet::from([1]));
    }

    #[test]
    fn decodes_season_properties_with_float_counts() {
        let rows = decode::<SeasonProperties>(
            "season,num_nodes,num_edges,average_degree,average_clustering,average_shortest_path,diameter\n1,62.0,441,14.2,0.71,2.1,4\n",
        )
        .unwrap();
        assert_eq!(rows[0].num_nodes, 62);
        assert_eq!(rows[0].diameter, 4);
        assert!((rows[0].average_clustering - 0.71).abs() < f64::EPSILON);
    }

    #[test]
    fn fractional_count_is_rejected() {
        let err = decode::<SeasonProperties>(
            "season,num_nodes,num_edges,average_degree,average_clustering,average_shortest_path,diameter\n1,62.5,441,14.2,0.71,2.1,4\n",
        )
        .unwrap_err();
        assert_matches!(err, CoreError::Field { column: "num_nodes", .. });
    }

    #[test]
    fn misspelled_appearances_header_is_accepted() {
        let text = format!(
            "{}1,Homer,True,False,True,False,1,Dan,706,,\n",
            CHARACTER_HEADER.replace("num_appearances", "num_apperanaces")
        );
        let table = Table::parse(&text).unwrap();
        assert!(Character::matches_schema(table.headers()));
        assert_eq!(decode::<Character>(&text).unwrap()[0].num_appearances, 706);
    }

    #[test]
    fn both_appearances_spellings_are_a_mismatch() {
        let headers: Vec<String> = Character::COLUMNS
            .iter()
            .map(|c| c.to_string())
            .chain(["num_apperanaces".to_string()])
            .filter(|c| c != "tokens")
            .collect();
        assert!(!Character::matches_schema(&headers));
    }
}
