use std::collections::HashSet;
use std::time::Instant;

use crate::dictionary::{Match, WordIndex};
use crate::game::Grid;

/// Shortest word that counts as a solution
pub const MIN_WORD_LENGTH: usize = 3;

/// Row/column offsets of the 8 neighbours of a cell, diagonals included
const NEIGHBOURS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Counters from the most recent solve
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Work items popped off the stack
    pub expanded: usize,
    /// Distinct words in the solution
    pub words_found: usize,
}

/// One in-progress path. The visited list is owned per item, so sibling
/// branches never see each other's cells.
struct SearchNode {
    row: isize,
    col: isize,
    word: String,
    visited: Vec<bool>,
}

/// Finds every dictionary word that can be traced on a grid
#[derive(Debug, Default)]
pub struct Solver {
    solution: HashSet<String>,
    stats: SolveStats,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Depth-first search from every cell, pruned by the index.
    ///
    /// Any previous solution is discarded first.
    pub fn solve(&mut self, grid: &Grid, index: &WordIndex) -> &HashSet<String> {
        let started = Instant::now();
        self.solution.clear();
        self.stats = SolveStats::default();

        let (rows, cols) = grid.dimensions();
        let mut stack = Vec::with_capacity(grid.len());

        for row in 0..rows as isize {
            for col in 0..cols as isize {
                stack.push(SearchNode {
                    row,
                    col,
                    word: String::new(),
                    visited: vec![false; grid.len()],
                });
                self.traverse(grid, index, &mut stack);
            }
        }

        self.stats.words_found = self.solution.len();
        tracing::info!(
            "Found {} words ({} paths expanded) in {:?}",
            self.stats.words_found,
            self.stats.expanded,
            started.elapsed()
        );

        &self.solution
    }

    fn traverse(&mut self, grid: &Grid, index: &WordIndex, stack: &mut Vec<SearchNode>) {
        while let Some(mut node) = stack.pop() {
            self.stats.expanded += 1;

            node.word.push(grid.char_at(node.row, node.col));
            node.visited[grid.index(node.row, node.col)] = true;

            match index.matches(&node.word) {
                Match::NoMatch => continue,
                Match::Word if node.word.chars().count() >= MIN_WORD_LENGTH => {
                    self.solution.insert(node.word.to_lowercase());
                }
                Match::Word | Match::Partial => {}
            }

            for (row_delta, col_delta) in NEIGHBOURS {
                let row = node.row + row_delta;
                let col = node.col + col_delta;
                if grid.in_bounds(row, col) && !node.visited[grid.index(row, col)] {
                    stack.push(SearchNode {
                        row,
                        col,
                        word: node.word.clone(),
                        visited: node.visited.clone(),
                    });
                }
            }
        }
    }

    /// The current solution, unordered
    #[allow(dead_code)]
    pub fn solution(&self) -> &HashSet<String> {
        &self.solution
    }

    /// The current solution in lexicographic order
    pub fn sorted_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.solution.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    pub fn stats(&self) -> SolveStats {
        self.stats
    }
}
