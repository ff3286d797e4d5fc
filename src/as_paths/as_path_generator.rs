use std::ops::Index;

use rand::Rng;

use crate::shared::{ConfigError, ASN};

use super::asn_ranges::random_asn;

/// A synthetic AS path. Hops may repeat, even within one path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ASPath(Vec<ASN>);

impl ASPath {
    pub fn new(hops: Vec<ASN>) -> Self {
        ASPath(hops)
    }

    pub fn hops(&self) -> &[ASN] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<ASN>> for ASPath {
    fn from(hops: Vec<ASN>) -> Self {
        ASPath(hops)
    }
}

/// Draws AS paths whose length lies in `[min_len, max_len]`.
#[derive(Debug, Clone, Copy)]
pub struct ASPathGenerator {
    pub min_len: usize,
    pub max_len: usize,
}

impl ASPathGenerator {
    pub fn new(min_len: usize, max_len: usize) -> Result<Self, ConfigError> {
        if min_len > max_len {
            return Err(ConfigError::InvertedBounds {
                what: "AS path length",
                min: min_len,
                max: max_len,
            });
        }
        Ok(ASPathGenerator { min_len, max_len })
    }

    pub fn generate_path<R: Rng + ?Sized>(&self, rng: &mut R) -> ASPath {
        let len = rng.gen_range(self.min_len..=self.max_len);
        (0..len).map(|_| random_asn(rng)).collect::<Vec<_>>().into()
    }

    pub fn build_pool<R: Rng + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<ASPathPool, ConfigError> {
        if count == 0 {
            return Err(ConfigError::EmptyPathPool);
        }
        let paths = (0..count).map(|_| self.generate_path(rng)).collect();
        Ok(ASPathPool { paths })
    }
}

/// Fixed set of AS paths built once at startup. A path's identity is its
/// index; the pool is never empty.
#[derive(Debug, Clone)]
pub struct ASPathPool {
    paths: Vec<ASPath>,
}

impl ASPathPool {
    pub fn build<R: Rng + ?Sized>(
        count: usize,
        min_len: usize,
        max_len: usize,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        ASPathGenerator::new(min_len, max_len)?.build_pool(count, rng)
    }

    /// Wraps hand-picked paths, mostly useful to pin down rendering in tests.
    pub fn from_paths(paths: Vec<ASPath>) -> Result<Self, ConfigError> {
        if paths.is_empty() {
            return Err(ConfigError::EmptyPathPool);
        }
        Ok(ASPathPool { paths })
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ASPath> {
        self.paths.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ASPath> {
        self.paths.iter()
    }

    /// Uniform pick by index. Nothing is reserved: the same path may be
    /// handed out any number of times.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &ASPath {
        &self.paths[rng.gen_range(0..self.paths.len())]
    }
}

impl Index<usize> for ASPathPool {
    type Output = ASPath;

    fn index(&self, index: usize) -> &ASPath {
        &self.paths[index]
    }
}
