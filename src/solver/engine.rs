//! Main Hangman solver interface

use super::frequency::select_letter;
use super::oracle::{Oracle, TargetOracle};
use super::result::{SolveResult, Status};
use crate::core::{Pattern, Word, normalize};
use log::{debug, trace};
use rustc_hash::FxHashSet;

/// Outcome of playing one pattern to the end
#[derive(Debug, Clone)]
pub struct Game {
    /// Word the solver settled on
    pub determined: String,
    /// Letters guessed, in order
    pub attempts: Vec<char>,
    /// Pattern when the game concluded
    pub pattern: Pattern,
    /// Candidate set size at the start of each round
    pub candidate_history: Vec<usize>,
}

/// Dictionary-driven Hangman solver
///
/// Owns a normalized dictionary for the whole session. Solving never mutates
/// it, so one solver can be reused for any number of games.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    dictionary: Vec<Word>,
}

impl Solver {
    /// Create a solver from raw dictionary entries
    ///
    /// Entries are trimmed and lower-cased; entries left empty are dropped.
    /// Order and duplicates are kept.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::solver::Solver;
    ///
    /// let solver = Solver::new(["Casa", "  ", "masa\n"]);
    /// assert_eq!(solver.dictionary().len(), 2);
    /// ```
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dictionary = words
            .into_iter()
            .filter_map(|w| Word::new(w.as_ref()).ok())
            .collect();
        Self { dictionary }
    }

    /// The normalized dictionary, in load order
    #[must_use]
    pub fn dictionary(&self) -> &[Word] {
        &self.dictionary
    }

    /// Dictionary words consistent with `pattern`, in dictionary order
    #[must_use]
    pub fn candidates(&self, pattern: &Pattern) -> Vec<&Word> {
        let matcher = pattern.compile();
        self.dictionary
            .iter()
            .filter(|word| matcher.matches(word))
            .collect()
    }

    /// Play `pattern` to the end, asking `oracle` about each guessed letter
    ///
    /// Stops when the pattern is complete, when at most one candidate is
    /// left, or when no unguessed letter remains in the candidates. With no
    /// candidates the determined word falls back to the revealed letters only.
    pub fn play<O: Oracle>(&self, pattern: Pattern, oracle: &mut O) -> Game {
        let mut pattern = pattern;
        let mut candidates = self.candidates(&pattern);
        let mut guessed: FxHashSet<char> = FxHashSet::default();
        let mut attempts: Vec<char> = Vec::new();
        let mut candidate_history: Vec<usize> = Vec::new();

        let determined = loop {
            candidate_history.push(candidates.len());

            if pattern.is_complete() {
                break pattern.to_string();
            }

            match candidates.as_slice() {
                [] => break pattern.stripped(),
                [only] => break only.text().to_string(),
                _ => {}
            }

            let unknown = pattern.unknown_positions();
            let Some((guess, count)) = select_letter(&candidates, &unknown, &guessed) else {
                debug!(
                    "no unguessed letters left in {} candidates for {pattern}",
                    candidates.len()
                );
                break pattern.stripped();
            };

            guessed.insert(guess);
            attempts.push(guess);

            if let Some(revealed) = oracle.reveal(&pattern, guess) {
                pattern = revealed;
            }

            let matcher = pattern.compile();
            candidates.retain(|word| matcher.matches(word));

            trace!(
                "guess '{guess}' (count {count}) -> {pattern} ({} hidden), {} candidates",
                pattern.wildcard_count(),
                candidates.len()
            );
        };

        Game {
            determined,
            attempts,
            pattern,
            candidate_history,
        }
    }

    /// Solve one recorded game against its known target
    ///
    /// The pattern and target must have the same length; callers validate
    /// this before solving.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::solver::{Solver, Status};
    ///
    /// let solver = Solver::new(["mama", "mare", "masa", "casa"]);
    /// let result = solver.solve_one("g1", "****", "masa");
    ///
    /// assert_eq!(result.found_word, "masa");
    /// assert_eq!(result.status, Status::Ok);
    /// assert_eq!(result.attempts, vec!['a', 'm', 's']);
    /// ```
    #[must_use]
    pub fn solve_one(&self, game_id: &str, pattern_initial: &str, target_word: &str) -> SolveResult {
        let pattern = Pattern::new(pattern_initial);
        let target = Word::from_normalized(normalize(target_word));
        let mut oracle = TargetOracle::new(target);

        let game = self.play(pattern, &mut oracle);

        let status = if game.determined == oracle.target().text() {
            Status::Ok
        } else {
            Status::Fail
        };

        debug!(
            "[{game_id}] {} -> {} ({status}) after {} attempts",
            pattern_initial.trim(),
            game.determined,
            game.attempts.len()
        );

        SolveResult {
            game_id: game_id.to_string(),
            total_attempts: game.attempts.len(),
            found_word: game.determined,
            status,
            attempts: game.attempts,
        }
    }
}
