// A* search over the board and best-first-move selection

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::engine::grid::{distance, forbidden_coordinates, is_in_bounds, open_moves};
use crate::game::{Board, Coordinate, MoveRequest, MoveType};

/// The first move of the shortest known route to `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetPath {
    pub mv: MoveType,
    pub target: Coordinate,
    /// Steps from the current head, the first move included
    pub distance: usize,
}

// Min-heap entry ordered by f-score
#[derive(Debug, Clone, Copy)]
struct OpenNode {
    f_score: f64,
    g_score: usize,
    coordinate: Coordinate,
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenNode {}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f_score
            .total_cmp(&self.f_score)
            .then_with(|| self.g_score.cmp(&other.g_score))
            .then_with(|| other.coordinate.cmp(&self.coordinate))
    }
}

/// Shortest number of steps from `start` to `target` avoiding every snake body.
///
/// `start` itself may be occupied (it usually is a head). Returns `None` when
/// `target` cannot be reached.
pub fn a_star_distance(board: &Board, start: Coordinate, target: Coordinate) -> Option<usize> {
    a_star_distance_avoiding(board, &forbidden_coordinates(board), start, target)
}

pub fn a_star_distance_avoiding(
    board: &Board,
    blocked: &HashSet<Coordinate>,
    start: Coordinate,
    target: Coordinate,
) -> Option<usize> {
    if start == target {
        return Some(0);
    }

    let mut open_set: BinaryHeap<OpenNode> = BinaryHeap::new();
    let mut g_scores: HashMap<Coordinate, usize> = HashMap::new();

    g_scores.insert(start, 0);
    open_set.push(OpenNode {
        f_score: distance(start, target),
        g_score: 0,
        coordinate: start,
    });

    while let Some(current) = open_set.pop() {
        if current.coordinate == target {
            return Some(current.g_score);
        }

        // Stale entry, a shorter route to this cell was queued later
        if g_scores.get(&current.coordinate).is_some_and(|&best| current.g_score > best) {
            continue;
        }

        for mv in MoveType::ALL {
            let neighbor: Coordinate = mv.apply(current.coordinate);
            if !is_in_bounds(board, neighbor) || blocked.contains(&neighbor) {
                continue;
            }

            let tentative: usize = current.g_score + 1;
            if g_scores.get(&neighbor).is_none_or(|&known| tentative < known) {
                g_scores.insert(neighbor, tentative);
                open_set.push(OpenNode {
                    f_score: tentative as f64 + distance(neighbor, target),
                    g_score: tentative,
                    coordinate: neighbor,
                });
            }
        }
    }

    None
}

/// Shortest reachable target over every safe first move.
///
/// Ties keep the earlier move (in `MoveType::ALL` order), then the earlier target.
pub fn best_path_to_target(request: &MoveRequest, targets: &[Coordinate]) -> Option<TargetPath> {
    best_path_to_target_with(request, targets, &HashSet::new())
}

/// Like [`best_path_to_target`], with the cells in `passable` treated as free.
pub fn best_path_to_target_with(
    request: &MoveRequest,
    targets: &[Coordinate],
    passable: &HashSet<Coordinate>,
) -> Option<TargetPath> {
    let head: Coordinate = request.you.head()?;
    let board: &Board = &request.board;

    let blocked: HashSet<Coordinate> = forbidden_coordinates(board)
        .difference(passable)
        .copied()
        .collect();

    let mut best: Option<TargetPath> = None;

    for mv in open_moves(board, &blocked, head) {
        let next: Coordinate = mv.apply(head);

        for &target in targets {
            let Some(remaining) = a_star_distance_avoiding(board, &blocked, next, target) else {
                continue;
            };

            let candidate = TargetPath {
                mv,
                target,
                distance: remaining + 1,
            };

            if best.is_none_or(|current| candidate.distance < current.distance) {
                best = Some(candidate);
            }
        }
    }

    best
}
