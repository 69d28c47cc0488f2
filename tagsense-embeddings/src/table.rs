//! Word → vector table loaded from a whitespace-separated text file.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tagsense_core::errors::LoadError;
use tagsense_core::models::LoadStats;
use tracing::{info, warn};

/// Immutable word vectors of one fixed dimensionality.
#[derive(Debug, Clone)]
pub struct WordVectorTable {
    vectors: HashMap<String, Vec<f32>>,
    dims: usize,
}

impl WordVectorTable {
    /// Build a table from in-memory entries.
    ///
    /// Every vector must have the dimensionality of the first one.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = (S, Vec<f32>)>,
        S: Into<String>,
    {
        let mut vectors = HashMap::new();
        let mut dims = None;
        for (word, vector) in entries {
            let expected = *dims.get_or_insert(vector.len());
            if vector.len() != expected {
                return Err(LoadError::DimensionMismatch {
                    expected,
                    actual: vector.len(),
                });
            }
            vectors.insert(word.into(), vector);
        }
        match dims {
            Some(dims) if dims > 0 => Ok(Self { vectors, dims }),
            _ => Err(LoadError::EmptyResource {
                path: "<memory>".to_string(),
            }),
        }
    }

    /// Load `<word> <f1> ... <fn>` lines, with an optional `<vocab> <dims>` header.
    ///
    /// Lines with the wrong field count, unparsable numbers or invalid UTF-8
    /// are skipped. Only an I/O failure aborts the load.
    pub fn load(path: &Path) -> Result<(Self, LoadStats), LoadError> {
        let unreadable = |e: std::io::Error| LoadError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        };
        let reader = BufReader::new(File::open(path).map_err(unreadable)?);

        let mut vectors = HashMap::new();
        let mut dims: Option<usize> = None;
        let mut stats = LoadStats::default();

        for (line_no, bytes) in reader.split(b'\n').enumerate() {
            let Ok(line) = String::from_utf8(bytes.map_err(unreadable)?) else {
                warn!(path = %path.display(), line = line_no + 1, "skipping mis-encoded vector line");
                stats.skip();
                continue;
            };
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.is_empty() {
                continue;
            }
            if line_no == 0 && fields.len() == 2 {
                if let (Ok(_), Ok(d)) = (fields[0].parse::<usize>(), fields[1].parse::<usize>()) {
                    dims = Some(d);
                    continue;
                }
            }
            match parse_vector_line(&fields, dims) {
                Some((word, vector)) => {
                    if dims.is_none() {
                        dims = Some(vector.len());
                    }
                    vectors.insert(word.to_string(), vector);
                    stats.accept();
                }
                None => {
                    warn!(path = %path.display(), line = line_no + 1, "skipping malformed vector line");
                    stats.skip();
                }
            }
        }

        let dims = match dims {
            Some(d) if d > 0 && !vectors.is_empty() => d,
            _ => {
                return Err(LoadError::EmptyResource {
                    path: path.display().to_string(),
                })
            }
        };
        info!(
            path = %path.display(),
            words = vectors.len(),
            dims,
            skipped = stats.skipped,
            "word vectors loaded"
        );
        Ok((Self { vectors, dims }, stats))
    }

    pub fn get(&self, word: &str) -> Option<&[f32]> {
        self.vectors.get(word).map(Vec::as_slice)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.vectors.contains_key(word)
    }

    pub fn dims(&self) -> usize {
        self.dims
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

fn parse_vector_line<'a>(fields: &[&'a str], dims: Option<usize>) -> Option<(&'a str, Vec<f32>)> {
    let (word, rest) = fields.split_first()?;
    if rest.is_empty() || dims.is_some_and(|d| rest.len() != d) {
        return None;
    }
    let vector = rest
        .iter()
        .map(|v| v.parse::<f32>().ok().filter(|x| x.is_finite()))
        .collect::<Option<Vec<f32>>>()?;
    Some((word, vector))
}
