use crate::graph::RoomGraph;
use clap::ValueEnum;
use maze_world::{Direction, RoomId};
use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp::Reverse;
use std::collections::{HashSet, VecDeque};

/// Stopping policy for the frontier search. All three run the same
/// breadth-first sweep with shuffled expansion order; they differ only in
/// which discovered room ends the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SearchPolicy {
    /// Walk to the nearest unvisited dead end (a room with exactly one
    /// exit); falls back to the nearest unvisited room when no unexplored
    /// dead end is reachable, so the walk always advances on loop-heavy
    /// maps.
    DeadEnd,
    /// Walk to the first unvisited room in breadth-first order.
    FirstUnvisited,
    /// Dead-end rule first; otherwise steer toward the quadrant holding the
    /// greatest net unexplored mass.
    DirectionalBias,
}

struct Candidate {
    path: Vec<Direction>,
}

impl Candidate {
    fn dx(&self) -> i64 {
        self.path.iter().map(|d| d.dx()).sum()
    }

    fn dy(&self) -> i64 {
        self.path.iter().map(|d| d.dy()).sum()
    }
}

/// Finds a shortest move sequence from `start` to the nearest room outside
/// `visited`, under the given policy. Returns `None` once every room
/// reachable from `start` is visited, the expected terminal condition, not
/// an error.
pub fn find_path(
    graph: &RoomGraph,
    start: RoomId,
    visited: &HashSet<RoomId>,
    policy: SearchPolicy,
    rng: &mut impl Rng,
) -> Option<Vec<Direction>> {
    let mut queue: VecDeque<(RoomId, Vec<Direction>)> = VecDeque::new();
    let mut seen: HashSet<RoomId> = HashSet::new();
    let mut candidates: Vec<Candidate> = Vec::new();

    seen.insert(start);
    queue.push_back((start, Vec::new()));

    while let Some((room, moves)) = queue.pop_front() {
        let neighbors = graph.neighbors(room);
        let mut directions: Vec<Direction> = neighbors.keys().copied().collect();
        directions.shuffle(rng);

        for direction in directions {
            let next = neighbors[&direction];
            if !seen.insert(next) {
                continue;
            }
            let mut path = moves.clone();
            path.push(direction);

            if !visited.contains(&next) {
                match policy {
                    SearchPolicy::FirstUnvisited => return Some(path),
                    SearchPolicy::DeadEnd | SearchPolicy::DirectionalBias => {
                        // BFS order makes the first hit the nearest
                        // unexplored dead end.
                        if graph.neighbors(next).len() == 1 {
                            return Some(path);
                        }
                        candidates.push(Candidate { path: path.clone() });
                    }
                }
            }
            queue.push_back((next, path));
        }
    }

    match policy {
        SearchPolicy::FirstUnvisited => None,
        SearchPolicy::DeadEnd => {
            // No unexplored dead end anywhere; advance to the nearest
            // unvisited room instead of stalling the walk.
            candidates.into_iter().next().map(|c| c.path)
        }
        SearchPolicy::DirectionalBias => pick_biased(candidates),
    }
}

/// Chooses the unvisited candidate whose accumulated offset best aligns
/// with the quadrant of the summed offset over all candidates; ties break
/// on the raw move count in the dominant direction, then on discovery
/// order.
fn pick_biased(candidates: Vec<Candidate>) -> Option<Vec<Direction>> {
    if candidates.is_empty() {
        return None;
    }

    let sum_dx: i64 = candidates.iter().map(Candidate::dx).sum();
    let sum_dy: i64 = candidates.iter().map(Candidate::dy).sum();
    let sx = sum_dx.signum();
    let sy = sum_dy.signum();

    let dominant = if sum_dx.abs() >= sum_dy.abs() {
        if sx >= 0 {
            Direction::East
        } else {
            Direction::West
        }
    } else if sy >= 0 {
        Direction::North
    } else {
        Direction::South
    };

    candidates
        .into_iter()
        .enumerate()
        .max_by_key(|(index, c)| {
            let alignment = c.dx() * sx + c.dy() * sy;
            let dominant_moves = c.path.iter().filter(|&&d| d == dominant).count();
            (alignment, dominant_moves, Reverse(*index))
        })
        .map(|(_, c)| c.path)
}
