//! In-memory string table, the raw form every dataset is kept in.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::csv::{self, CsvError};

/// A header row plus data rows, all cells kept as their source text.
///
/// Every row has exactly `headers.len()` cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Parse CSV text into a table.
    pub fn parse(text: &str) -> Result<Self, CsvError> {
        let doc = csv::parse(text)?;
        Ok(Self {
            headers: doc.headers,
            rows: doc.rows,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Whether the header set equals `expected`, ignoring order.
    pub fn has_exact_columns(&self, expected: &[&str]) -> bool {
        self.headers.len() == expected.len()
            && expected.iter().all(|c| self.column_index(c).is_some())
    }

    /// The first `min(n, len)` rows.
    pub fn head(&self, n: usize) -> Table {
        Table {
            headers: self.headers.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }

    /// `min(n, len)` distinct rows chosen by an RNG seeded with `seed`.
    ///
    /// Selected rows keep their source order, so the same seed always yields
    /// the same table.
    pub fn sample(&self, n: usize, seed: u64) -> Table {
        let amount = n.min(self.rows.len());
        if amount == 0 {
            return self.head(0);
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let mut picked = rand::seq::index::sample(&mut rng, self.rows.len(), amount).into_vec();
        picked.sort_unstable();

        Table {
            headers: self.headers.clone(),
            rows: picked.into_iter().map(|i| self.rows[i].clone()).collect(),
        }
    }

    /// Serialize back to CSV text (header row first, LF line endings).
    pub fn to_csv(&self) -> String {
        csv::write(&self.headers, &self.rows)
    }
}
