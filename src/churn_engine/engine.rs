use std::collections::BTreeSet;

use rand::Rng;

use crate::as_paths::ASPathPool;
use crate::prefix_universe::{Prefix, PrefixUniverse};
use crate::shared::ConfigError;

use super::decision::ChurnDecision;
use super::sampling::sample_without_replacement;

/// Prefixes currently announced to the peer. Starts empty; only
/// [`ChurnEngine::announce`] and [`ChurnEngine::withdraw`] produce new ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnouncedSet {
    prefixes: BTreeSet<Prefix>,
}

impl AnnouncedSet {
    pub fn new() -> Self {
        Self::default()
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

    pub fn is_subset_of(&self, universe: &PrefixUniverse) -> bool {
        self.prefixes.iter().all(|p| universe.contains(p))
    }
}

impl<S: Into<Prefix>> FromIterator<S> for AnnouncedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        AnnouncedSet {
            prefixes: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// How many prefixes one announce cycle may add.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnounceBounds {
    min_count: usize,
    max_count: usize,
    max_total: usize,
}

impl AnnounceBounds {
    pub fn new(min_count: usize, max_count: usize, max_total: usize) -> Result<Self, ConfigError> {
        if min_count > max_count {
            return Err(ConfigError::InvertedBounds {
                what: "prefixes per cycle",
                min: min_count,
                max: max_count,
            });
        }
        Ok(AnnounceBounds {
            min_count,
            max_count,
            max_total,
        })
    }

    pub fn exactly(count: usize, max_total: usize) -> Self {
        AnnounceBounds {
            min_count: count,
            max_count: count,
            max_total,
        }
    }

    pub fn min_count(&self) -> usize {
        self.min_count
    }

    pub fn max_count(&self) -> usize {
        self.max_count
    }

    pub fn max_total(&self) -> usize {
        self.max_total
    }
}

/// Next state plus the decisions that lead to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleOutcome {
    pub announced: AnnouncedSet,
    pub decisions: Vec<ChurnDecision>,
}

impl CycleOutcome {
    fn unchanged(announced: AnnouncedSet) -> Self {
        CycleOutcome {
            announced,
            decisions: Vec::new(),
        }
    }
}

/// `max(floor(live * pct / 100), 1)`, never more than `live`; zero when
/// nothing is live.
pub fn withdrawal_count(live: usize, pct: f64) -> usize {
    if live == 0 {
        return 0;
    }
    let share = (live as f64 * pct / 100.0).floor() as usize;
    share.max(1).min(live)
}

/// Turns an announced set into the next one. Holds only the immutable
/// inputs; the announced set is passed in and handed back each cycle.
pub struct ChurnEngine {
    universe: PrefixUniverse,
    as_paths: ASPathPool,
}

impl ChurnEngine {
    pub fn new(universe: PrefixUniverse, as_paths: ASPathPool) -> Self {
        ChurnEngine { universe, as_paths }
    }

    pub fn universe(&self) -> &PrefixUniverse {
        &self.universe
    }

    pub fn as_paths(&self) -> &ASPathPool {
        &self.as_paths
    }

    /// Announces between `min_count` and `max_count` prefixes that are not
    /// live yet, never letting the live set grow past `max_total`. A
    /// saturated universe is a no-op.
    pub fn announce<R: Rng + ?Sized>(
        &self,
        announced: AnnouncedSet,
        bounds: AnnounceBounds,
        rng: &mut R,
    ) -> CycleOutcome {
        let candidates: Vec<&Prefix> = self
            .universe
            .iter()
            .filter(|p| !announced.contains(p))
            .collect();

        let drawn = rng.gen_range(bounds.min_count..=bounds.max_count);
        let room = bounds.max_total.saturating_sub(announced.len());
        let count = drawn.min(room).min(candidates.len());
        if count == 0 {
            return CycleOutcome::unchanged(announced);
        }

        let selected = sample_without_replacement(rng, candidates, count);
        let decisions: Vec<ChurnDecision> = selected
            .into_iter()
            .map(|prefix| ChurnDecision::Announce {
                prefix: prefix.clone(),
                as_path: self.as_paths.pick(rng).clone(),
            })
            .collect();

        let mut next = announced;
        for decision in &decisions {
            next.prefixes.insert(decision.prefix().to_string());
        }
        CycleOutcome {
            announced: next,
            decisions,
        }
    }

    /// Withdraws `pct` percent of the live prefixes, at least one. An empty
    /// live set is a no-op.
    pub fn withdraw<R: Rng + ?Sized>(
        &self,
        announced: AnnouncedSet,
        pct: f64,
        rng: &mut R,
    ) -> CycleOutcome {
        let count = withdrawal_count(announced.len(), pct);
        if count == 0 {
            return CycleOutcome::unchanged(announced);
        }

        let live: Vec<&Prefix> = announced.iter().collect();
        let decisions: Vec<ChurnDecision> = sample_without_replacement(rng, live, count)
            .into_iter()
            .map(|prefix| ChurnDecision::Withdraw {
                prefix: prefix.clone(),
            })
            .collect();

        let mut next = announced;
        for decision in &decisions {
            next.prefixes.remove(decision.prefix());
        }
        CycleOutcome {
            announced: next,
            decisions,
        }
    }
}
