use crate::graph::RoomGraph;
use crate::search::{find_path, SearchPolicy};
use maze_world::{Direction, Player, TravelError, World};
use rand::Rng;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalkError {
    /// The frontier search gave up while rooms remain unvisited. With a
    /// fully reachable map this cannot happen, so it is reported as a
    /// contract violation distinct from normal termination.
    #[error("frontier search stalled with {unvisited} of {total} rooms unvisited")]
    Stalled { unvisited: usize, total: usize },
    #[error(transparent)]
    Travel(#[from] TravelError),
}

/// Runs one complete traversal attempt: repeatedly walks to the nearest
/// frontier room until every room in the graph has been visited, and
/// returns the concatenated move sequence.
///
/// Moves are applied to a live `Player`, not simulated on the graph; the
/// visited set is fed from the rooms the world actually reports.
pub fn assemble_walk(
    world: &Arc<World>,
    graph: &RoomGraph,
    policy: SearchPolicy,
    rng: &mut impl Rng,
) -> Result<Vec<Direction>, WalkError> {
    let mut player = Player::new(Arc::clone(world));
    let mut walk: Vec<Direction> = Vec::new();
    let mut visited: HashSet<_> = HashSet::new();
    visited.insert(player.current_room());
    let mut current = player.current_room();

    while visited.len() < graph.len() {
        let moves = find_path(graph, current, &visited, policy, rng).ok_or(WalkError::Stalled {
            unvisited: graph.len() - visited.len(),
            total: graph.len(),
        })?;
        for direction in moves {
            let room = player.travel(direction)?;
            walk.push(direction);
            visited.insert(room);
        }
        current = player.current_room();
    }

    Ok(walk)
}
