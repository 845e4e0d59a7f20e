//! Prediction arena, dedup factory and dependency graph
//!
//! Every prediction ever built lives in one append-only arena and is referred
//! to by a `PredictionId`. Nothing is ever removed, so ids stay valid for the
//! whole game and child edges never dangle.

use super::PredictionKind;
use log::debug;
use rustc_hash::FxHashSet;
use std::fmt;

/// Stable handle into the registry arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PredictionId(u32);

impl PredictionId {
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PredictionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A prediction and its per-game state
#[derive(Debug, Clone)]
pub struct Prediction {
    kind: PredictionKind,
    weight: f64,
    certain: bool,
    invalid: bool,
    /// Predictions that depend on this one
    children: Vec<PredictionId>,
}

impl Prediction {
    fn new(kind: PredictionKind) -> Self {
        Self {
            kind,
            weight: 0.0,
            certain: false,
            invalid: false,
            children: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> &PredictionKind {
        &self.kind
    }

    /// Score from the latest weighting pass
    #[inline]
    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    /// Locked true
    #[inline]
    #[must_use]
    pub const fn is_certain(&self) -> bool {
        self.certain
    }

    /// Locked false
    #[inline]
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        self.invalid
    }

    /// Neither certain nor invalid
    #[inline]
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !self.certain && !self.invalid
    }

    #[must_use]
    pub fn children(&self) -> &[PredictionId] {
        &self.children
    }
}

/// Owner of every prediction plus the list currently in play
#[derive(Debug, Default)]
pub struct Registry {
    all: Vec<Prediction>,
    active: Vec<PredictionId>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a prediction, or return the congruent one already registered
    ///
    /// A new prediction joins the active list unless it depends on a
    /// prediction already known to be invalid; in that case it is registered
    /// as invalid and stays dormant. Dependency edges are wired against the
    /// whole registry in both directions.
    ///
    /// # Examples
    /// ```
    /// use hangman_ai::prediction::{PredictionKind, Registry};
    ///
    /// let mut registry = Registry::new();
    /// let a = registry.make(PredictionKind::contains("e"));
    /// let b = registry.make(PredictionKind::contains("e"));
    /// assert_eq!(a, b);
    /// assert_eq!(registry.len(), 1);
    /// ```
    pub fn make(&mut self, kind: PredictionKind) -> PredictionId {
        if let Some(existing) = self.find(&kind) {
            debug!("dedup: {kind} already registered as {existing}");
            return existing;
        }

        let id = PredictionId(self.all.len() as u32);
        let mut candidate = Prediction::new(kind);

        let blocked = self
            .all
            .iter()
            .any(|p| p.invalid && candidate.kind.depends_on(&p.kind));
        if blocked {
            candidate.invalid = true;
            debug!("{id} {} depends on an invalid prediction, kept dormant", candidate.kind);
        } else {
            self.active.push(id);
        }

        for (index, existing) in self.all.iter_mut().enumerate() {
            let other = PredictionId(index as u32);
            if existing.kind.depends_on(&candidate.kind) {
                candidate.children.push(other);
            }
            if candidate.kind.depends_on(&existing.kind) {
                existing.children.push(id);
            }
        }

        debug!("{id} registered: {}", candidate.kind);
        self.all.push(candidate);
        id
    }

    /// The registered prediction congruent to `kind`, if any
    #[must_use]
    pub fn find(&self, kind: &PredictionKind) -> Option<PredictionId> {
        self.all
            .iter()
            .position(|p| p.kind.congruent(kind))
            .map(|index| PredictionId(index as u32))
    }

    #[inline]
    #[must_use]
    pub fn get(&self, id: PredictionId) -> &Prediction {
        &self.all[id.index()]
    }

    /// Set the score from a weighting pass
    pub fn set_weight(&mut self, id: PredictionId, weight: f64) {
        self.all[id.index()].weight = weight;
    }

    /// Lock a prediction as true
    ///
    /// A dormant prediction (one registered under an invalid parent) rejoins
    /// the active list.
    pub fn mark_certain(&mut self, id: PredictionId) {
        let p = &mut self.all[id.index()];
        p.certain = true;
        p.invalid = false;
        if !self.active.contains(&id) {
            debug!("{id} {} revived as certain", p.kind);
            self.active.push(id);
        }
    }

    /// Lock a single prediction as false, leaving its dependents alone
    ///
    /// Returns `false` if it was already invalid.
    pub fn flag_invalid(&mut self, id: PredictionId) -> bool {
        let p = &mut self.all[id.index()];
        let flipped = !p.invalid;
        p.invalid = true;
        p.certain = false;
        flipped
    }

    /// Lock a prediction as false, along with everything depending on it
    ///
    /// Returns the number of predictions that were newly invalidated.
    pub fn mark_invalid(&mut self, id: PredictionId) -> usize {
        let mut visited = FxHashSet::default();
        let mut stack = vec![id];
        let mut flipped = 0;

        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            let p = &mut self.all[current.index()];
            if !p.invalid {
                flipped += 1;
            }
            p.invalid = true;
            p.certain = false;
            stack.extend(p.children.iter().copied());
        }

        debug!("{id} invalidated, {flipped} predictions flipped");
        flipped
    }

    /// Direct dependency parents of `id`, recomputed from the whole registry
    #[must_use]
    pub fn parents(&self, id: PredictionId) -> Vec<PredictionId> {
        let kind = &self.get(id).kind;
        self.all
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.kind.congruent(kind) && kind.depends_on(&p.kind))
            .map(|(index, _)| PredictionId(index as u32))
            .collect()
    }

    /// The parent-less ancestors reachable from `id`
    ///
    /// A prediction with no parents is its own topmost ancestor. For
    /// `Contains` predictions the result is always single-letter segments.
    #[must_use]
    pub fn topmost(&self, id: PredictionId) -> Vec<PredictionId> {
        let mut visited = FxHashSet::default();
        let mut roots = Vec::new();
        let mut stack = vec![id];

        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            let parents = self.parents(current);
            if parents.is_empty() {
                roots.push(current);
            } else {
                stack.extend(parents);
            }
        }

        roots
    }

    /// Predictions currently considered for scoring and selection
    #[must_use]
    pub fn active(&self) -> &[PredictionId] {
        &self.active
    }

    /// Drop active predictions that scored exactly zero
    ///
    /// They stay in the registry and keep their edges. Returns how many were
    /// dropped.
    #[allow(clippy::float_cmp)] // weights of exactly zero mean no surviving word matched
    pub fn prune_zero_weight(&mut self) -> usize {
        let before = self.active.len();
        let all = &self.all;
        self.active.retain(|id| all[id.index()].weight != 0.0);
        before - self.active.len()
    }

    /// Total number of registered predictions
    #[must_use]
    pub fn len(&self) -> usize {
        self.all.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Iterate over every registered prediction with its id
    pub fn iter(&self) -> impl Iterator<Item = (PredictionId, &Prediction)> {
        self.all
            .iter()
            .enumerate()
            .map(|(index, p)| (PredictionId(index as u32), p))
    }
}
