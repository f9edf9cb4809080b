//! Difficulty-targeted local search over clue sets.

use nanpure_core::{Board, Cell};
use nanpure_solver::{PuzzleRating, Search, UNSOLVABLE_BY_LOGIC};
use rand::{RngExt as _, seq::SliceRandom as _};

use crate::{Generated, Generator, GeneratorOptions, NoCandidateError, grade_allowed, rate};

/// Starting temperature of the annealing schedule.
const INITIAL_TEMPERATURE: f64 = 10.0;

/// Geometric cooling factor applied after every accepted-or-rejected move.
const COOLING_RATE: f64 = 0.995;

/// Candidate moves sampled and evaluated per step.
const MOVE_SAMPLES: usize = 4;

/// Extra headroom above `target + tolerance` still counted as a safe climb.
const SAFE_CLIMB_BUFFER: f64 = 8.0;

/// Fresh-start rounds the attempt budget is divided into.
const RESTART_ROUNDS: usize = 4;

/// A clue move between neighboring puzzles.
///
/// Tracking the last applied move gives the tabu check: a move that
/// exactly undoes its predecessor is never offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Move {
    /// Add the solution digit at a cell (usually makes the puzzle easier).
    Add(Cell),
    /// Remove a clue, keeping uniqueness (usually makes it harder).
    Remove(Cell),
    /// Remove one clue and add another at a fixed clue count.
    Swap {
        /// The removed clue cell.
        removed: Cell,
        /// The added clue cell.
        added: Cell,
    },
}

impl Move {
    /// Returns whether this move immediately undoes `previous`.
    fn undoes(self, previous: Move) -> bool {
        match (self, previous) {
            (Move::Add(a), Move::Remove(r)) | (Move::Remove(r), Move::Add(a)) => a == r,
            (Move::Swap { removed, added }, Move::Swap { removed: r, added: a }) => {
                removed == a && added == r
            }
            _ => false,
        }
    }
}

/// One candidate state with its score.
#[derive(Debug, Clone)]
struct Scored {
    movement: Move,
    puzzle: Board,
    rating: PuzzleRating,
    cost: f64,
}

impl Generator {
    /// Generates a puzzle whose scored difficulty falls within tolerance
    /// of the target, by annealed local search over clue moves.
    ///
    /// The attempt budget is split over [`RESTART_ROUNDS`] rounds, each
    /// starting from a fresh minimal carve (or `opts.start_puzzle` in the
    /// first round). The globally best candidate is tracked across rounds
    /// and returned when no round lands inside the tolerance; missing the
    /// target is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`NoCandidateError`] if no solvable candidate was produced,
    /// which only happens when `opts.start_puzzle` is unsolvable and every
    /// round is exhausted before a fresh carve scores.
    pub fn with_difficulty(
        &mut self,
        opts: &GeneratorOptions,
    ) -> Result<Generated, NoCandidateError> {
        let rounds = RESTART_ROUNDS.min(opts.max_attempts.max(1));
        let round_budget = (opts.max_attempts / rounds).max(1);
        let mut attempts = 0usize;
        let mut best: Option<Scored> = None;

        for round in 0..rounds {
            if attempts >= opts.max_attempts {
                break;
            }
            let Some((solution, start)) = self.round_start(opts, round) else {
                continue;
            };
            let deadline = usize::min(attempts + round_budget, opts.max_attempts);
            if let Some(done) = self.anneal(&solution, start, opts, deadline, &mut attempts, &mut best)
            {
                log::debug!(
                    "round {round} hit difficulty {} after {attempts} attempts",
                    done.difficulty
                );
                return Ok(done);
            }
        }

        best.map(|scored| {
            log::debug!(
                "target missed; returning best candidate at difficulty {}",
                scored.rating.difficulty
            );
            Generated {
                puzzle: scored.puzzle,
                difficulty: scored.rating.difficulty,
                attempts,
                clues: scored.puzzle.clue_count(),
            }
        })
        .ok_or(NoCandidateError)
    }

    /// Produces the (solution, puzzle) pair a round starts from.
    fn round_start(&mut self, opts: &GeneratorOptions, round: usize) -> Option<(Board, Board)> {
        if round == 0
            && let Some(start) = opts.start_puzzle
        {
            match Search::new().solve(&start) {
                Some(solution) => return Some((solution, start)),
                None => {
                    log::debug!("start puzzle has no solution; carving a fresh one");
                    return None;
                }
            }
        }
        let solution = self.sample_solution();
        let start = self.carve(&solution, opts.min_clues);
        Some((solution, start))
    }

    /// Runs one annealing round; returns a puzzle on target, if reached.
    fn anneal(
        &mut self,
        solution: &Board,
        start: Board,
        opts: &GeneratorOptions,
        deadline: usize,
        attempts: &mut usize,
        best: &mut Option<Scored>,
    ) -> Option<Generated> {
        let mut temperature = INITIAL_TEMPERATURE;
        let mut last_move: Option<Move> = None;

        let mut current = Scored {
            // The starting state has no predecessor; any placeholder works
            // for the tabu check.
            movement: Move::Add(Cell::new(0, 0)),
            puzzle: start,
            rating: rate(&start),
            cost: 0.0,
        };
        current.cost = cost(&current.rating, opts);
        *attempts += 1;
        track_best(best, &current);
        if on_target(&current, opts) {
            return Some(finish(current, *attempts));
        }

        while *attempts < deadline {
            let too_hard = f64::from(current.rating.difficulty) > opts.target_difficulty;
            let moves = if too_hard {
                self.sample_adds(&current.puzzle, solution, opts, last_move)
            } else {
                self.sample_removes_and_swaps(&current.puzzle, solution, opts, last_move)
            };
            if moves.is_empty() {
                log::debug!("no legal moves from the current state; ending round");
                break;
            }

            let mut scored: Vec<Scored> = Vec::with_capacity(moves.len());
            for (movement, puzzle) in moves {
                let rating = rate(&puzzle);
                *attempts += 1;
                let candidate = Scored {
                    movement,
                    puzzle,
                    cost: cost(&rating, opts),
                    rating,
                };
                track_best(best, &candidate);
                if on_target(&candidate, opts) {
                    return Some(finish(candidate, *attempts));
                }
                scored.push(candidate);
                if *attempts >= deadline {
                    break;
                }
            }

            let Some(chosen) = pick_candidate(scored, too_hard, opts) else {
                break;
            };
            let accept = chosen.cost <= current.cost || {
                let probability = f64::exp((current.cost - chosen.cost) / temperature);
                self.rng.random_bool(probability.clamp(0.0, 1.0))
            };
            if accept {
                last_move = Some(chosen.movement);
                current = chosen;
            }
            temperature *= COOLING_RATE;
        }
        None
    }

    /// Samples clue additions from the solution grid.
    fn sample_adds(
        &mut self,
        puzzle: &Board,
        solution: &Board,
        opts: &GeneratorOptions,
        last_move: Option<Move>,
    ) -> Vec<(Move, Board)> {
        if puzzle.clue_count() >= opts.max_clues {
            return Vec::new();
        }
        let mut empty: Vec<Cell> = (!puzzle.filled_cells()).collect();
        empty.shuffle(&mut self.rng);

        let mut moves = Vec::new();
        for cell in empty {
            if moves.len() >= MOVE_SAMPLES {
                break;
            }
            let movement = Move::Add(cell);
            if last_move.is_some_and(|previous| movement.undoes(previous)) {
                continue;
            }
            let mut next = *puzzle;
            next.set(cell, solution.get(cell));
            moves.push((movement, next));
        }
        moves
    }

    /// Samples uniqueness-preserving removals and swaps.
    fn sample_removes_and_swaps(
        &mut self,
        puzzle: &Board,
        solution: &Board,
        opts: &GeneratorOptions,
        last_move: Option<Move>,
    ) -> Vec<(Move, Board)> {
        let mut filled: Vec<Cell> = puzzle.filled_cells().collect();
        filled.shuffle(&mut self.rng);
        let mut empty: Vec<Cell> = (!puzzle.filled_cells()).collect();
        empty.shuffle(&mut self.rng);

        let mut moves = Vec::new();
        if puzzle.clue_count() > opts.min_clues {
            for &cell in &filled {
                if moves.len() >= MOVE_SAMPLES {
                    break;
                }
                let movement = Move::Remove(cell);
                if last_move.is_some_and(|previous| movement.undoes(previous)) {
                    continue;
                }
                let mut next = *puzzle;
                next.set(cell, None);
                if Search::is_unique(&next).is_ok_and(|unique| unique) {
                    moves.push((movement, next));
                }
            }
        }

        // Swaps reshape the puzzle at a fixed clue count.
        let swap_budget = MOVE_SAMPLES / 2;
        for (&removed, &added) in filled.iter().zip(&empty) {
            if moves.len() >= MOVE_SAMPLES + swap_budget {
                break;
            }
            let movement = Move::Swap { removed, added };
            if last_move.is_some_and(|previous| movement.undoes(previous)) {
                continue;
            }
            let mut next = *puzzle;
            next.set(removed, None);
            next.set(added, solution.get(added));
            if Search::is_unique(&next).is_ok_and(|unique| unique) {
                moves.push((movement, next));
            }
        }
        moves
    }
}

/// Distance from the target, with a prohibitive penalty for results
/// outside the allowed bands.
fn cost(rating: &PuzzleRating, opts: &GeneratorOptions) -> f64 {
    let mut cost = (f64::from(rating.difficulty) - opts.target_difficulty).abs();
    if !grade_allowed(&opts.allowed_grades, rating.grade) {
        cost += f64::from(UNSOLVABLE_BY_LOGIC);
    }
    cost
}

fn on_target(candidate: &Scored, opts: &GeneratorOptions) -> bool {
    candidate.rating.solvable && candidate.cost <= opts.tolerance_difficulty
}

fn finish(candidate: Scored, attempts: usize) -> Generated {
    Generated {
        puzzle: candidate.puzzle,
        difficulty: candidate.rating.difficulty,
        attempts,
        clues: candidate.puzzle.clue_count(),
    }
}

fn track_best(best: &mut Option<Scored>, candidate: &Scored) {
    if !candidate.rating.solvable && candidate.rating.difficulty == UNSOLVABLE_BY_LOGIC {
        // Dark-zone states are kept only when nothing else exists yet.
        if best.is_none() {
            *best = Some(candidate.clone());
        }
        return;
    }
    let better = best.as_ref().is_none_or(|held| candidate.cost < held.cost);
    if better {
        *best = Some(candidate.clone());
    }
}

/// Chooses the move to consider for acceptance.
///
/// When climbing toward harder scores, safe climbs (at most
/// `target + tolerance + buffer`) are preferred over dark-zone jumps to
/// unsolvable-by-logic territory.
fn pick_candidate(scored: Vec<Scored>, too_hard: bool, opts: &GeneratorOptions) -> Option<Scored> {
    let min_by_cost = |candidates: Vec<Scored>| {
        candidates
            .into_iter()
            .min_by(|a, b| a.cost.total_cmp(&b.cost))
    };
    if too_hard {
        return min_by_cost(scored);
    }
    let ceiling = opts.target_difficulty + opts.tolerance_difficulty + SAFE_CLIMB_BUFFER;
    let (safe, dark): (Vec<_>, Vec<_>) = scored
        .into_iter()
        .partition(|candidate| f64::from(candidate.rating.difficulty) <= ceiling);
    if safe.is_empty() {
        min_by_cost(dark)
    } else {
        min_by_cost(safe)
    }
}
