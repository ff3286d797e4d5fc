use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ipnetwork::IpNetwork;

use crate::shared::ChurnError;

pub type Prefix = String;

/// Every prefix that may ever be announced. Prefixes are opaque tokens;
/// they are kept sorted so iteration (and with it sampling) is stable
/// for a given seed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixUniverse {
    prefixes: BTreeSet<Prefix>,
}

impl PrefixUniverse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads one prefix per line. Lines are trimmed, blank lines skipped and
    /// duplicates collapse into one entry.
    pub fn from_file(path: &Path) -> Result<Self, ChurnError> {
        let io_err = |source| ChurnError::Io {
            path: path.to_path_buf(),
            source,
        };
        let reader = BufReader::new(File::open(path).map_err(io_err)?);

        let mut universe = PrefixUniverse::new();
        let mut unparsable = 0usize;
        for line in reader.lines() {
            let line = line.map_err(io_err)?;
            let token = line.trim();
            if token.is_empty() {
                continue;
            }
            if token.parse::<IpNetwork>().is_err() {
                log::warn!("{}: {:?} is not an IP network, announcing it anyway", path.display(), token);
                unparsable += 1;
            }
            universe.insert(token);
        }

        if universe.is_empty() {
            log::warn!("{} contains no prefixes, nothing will be announced", path.display());
        } else {
            log::info!(
                "Loaded {} prefixes from {} ({} not parsable as IP networks)",
                universe.len(),
                path.display(),
                unparsable
            );
        }
        Ok(universe)
    }

    pub fn insert(&mut self, prefix: impl Into<Prefix>) -> bool {
        self.prefixes.insert(prefix.into())
    }

    pub fn contains(&self, prefix: &str) -> bool {
        self.prefixes.contains(prefix)
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Prefix> {
        self.prefixes.iter()
    }
}

impl<S: Into<Prefix>> FromIterator<S> for PrefixUniverse {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        PrefixUniverse {
            prefixes: iter.into_iter().map(Into::into).collect(),
        }
    }
}
