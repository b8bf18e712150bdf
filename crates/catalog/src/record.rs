//! Flat text record format: `id, name, price, category`, one per line.

use std::io::{self, BufRead};
use std::path::PathBuf;

use thiserror::Error;

use storefront_core::{DomainError, DomainResult};

use crate::product::Product;

/// Separator between fields. Values cannot contain it; there is no escaping.
pub const FIELD_DELIMITER: &str = ", ";

/// Fields per record: id, name, price, category.
pub const FIELD_COUNT: usize = 4;

/// Failure to load records from a source.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Record(#[from] DomainError),
}

impl LoadError {
    /// 1-based line number of the offending record, when known.
    pub fn line(&self) -> Option<usize> {
        match self {
            LoadError::Open { .. } => None,
            LoadError::Read { line, .. } => Some(*line),
            LoadError::Record(DomainError::MalformedRecord { line, .. }) => Some(*line),
            LoadError::Record(_) => None,
        }
    }
}

/// Parse a single record. `line_no` is 1-based and only used for errors.
pub fn parse_record(line_no: usize, line: &str) -> DomainResult<Product> {
    let fields: Vec<&str> = line.trim().split(FIELD_DELIMITER).collect();

    let [id, name, price, category] = fields.as_slice() else {
        return Err(DomainError::malformed(
            line_no,
            format!(
                "expected {FIELD_COUNT} fields separated by {FIELD_DELIMITER:?}, found {}",
                fields.len()
            ),
        ));
    };

    let price: f64 = price
        .trim()
        .parse()
        .map_err(|e| DomainError::malformed(line_no, format!("invalid price {price:?}: {e}")))?;

    Ok(Product::new(*id, *name, price, *category))
}

/// Parse every non-blank line of `reader`.
///
/// Stops at the first bad line; nothing is returned for a partially valid
/// source.
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<Product>, LoadError> {
    let mut products = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| LoadError::Read {
            line: line_no,
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        products.push(parse_record(line_no, &line)?);
    }

    Ok(products)
}
