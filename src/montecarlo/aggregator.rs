//! Best-score bookkeeping per seed move.
//!
//! Each distinct seed move keeps the highest score any of its rollouts earned.
//! The decision is the move holding the overall highest score; when several
//! share it, the one that reached it first wins.

use rustc_hash::FxHashMap;

use crate::core::Move;

/// A seed move and what its rollouts have earned so far.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// The seed move.
    pub seed: Move,

    /// Highest score recorded for this seed.
    pub best_score: i32,

    /// Rollouts recorded for this seed.
    pub visits: u32,

    /// Ordinal of the recording that first reached `best_score`.
    pub achieved_at: u64,
}

impl Candidate {
    /// True once at least one rollout has been recorded.
    #[must_use]
    pub fn is_scored(&self) -> bool {
        self.visits > 0
    }
}

/// Scores per seed move, in first-seen order.
#[derive(Clone, Debug, Default)]
pub struct ResultTable {
    candidates: Vec<Candidate>,
    index: FxHashMap<Move, usize>,
    recorded: u64,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one rollout's score for `seed`.
    pub fn record(&mut self, seed: Move, score: i32) {
        let ordinal = self.recorded;
        self.recorded += 1;

        match self.index.get(&seed) {
            Some(&i) => {
                let candidate = &mut self.candidates[i];
                candidate.visits += 1;
                if score > candidate.best_score {
                    candidate.best_score = score;
                    candidate.achieved_at = ordinal;
                }
            }
            None => {
                self.index.insert(seed, self.candidates.len());
                self.candidates.push(Candidate {
                    seed,
                    best_score: score,
                    visits: 1,
                    achieved_at: ordinal,
                });
            }
        }
    }

    /// Combine two tables as if every recording in `other` happened after
    /// every recording in `self`.
    #[must_use]
    pub fn merge(mut self, other: ResultTable) -> ResultTable {
        let offset = self.recorded;
        for theirs in other.candidates {
            let achieved_at = theirs.achieved_at + offset;
            match self.index.get(&theirs.seed) {
                Some(&i) => {
                    let ours = &mut self.candidates[i];
                    ours.visits += theirs.visits;
                    if theirs.best_score > ours.best_score {
                        ours.best_score = theirs.best_score;
                        ours.achieved_at = achieved_at;
                    }
                }
                None => {
                    self.index.insert(theirs.seed, self.candidates.len());
                    self.candidates.push(Candidate { achieved_at, ..theirs });
                }
            }
        }
        self.recorded += other.recorded;
        self
    }

    /// The candidate with the highest score, earliest achiever on ties.
    #[must_use]
    pub fn best(&self) -> Option<&Candidate> {
        self.candidates.iter().max_by(|a, b| {
            a.best_score
                .cmp(&b.best_score)
                .then(b.achieved_at.cmp(&a.achieved_at))
        })
    }

    /// Look up a seed move.
    #[must_use]
    pub fn get(&self, seed: &Move) -> Option<&Candidate> {
        self.index.get(seed).map(|&i| &self.candidates[i])
    }

    /// All candidates, in the order their seeds were first recorded.
    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Total recordings.
    #[must_use]
    pub fn recorded(&self) -> u64 {
        self.recorded
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
