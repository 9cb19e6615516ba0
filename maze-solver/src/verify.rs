use maze_world::{Direction, Player, TravelError, World};
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifyReport {
    pub moves: usize,
    pub visited: usize,
    pub total: usize,
}

impl VerifyReport {
    pub fn passed(&self) -> bool {
        self.visited == self.total
    }

    pub fn unvisited(&self) -> usize {
        self.total - self.visited
    }
}

/// Replays a walk on a fresh player from the starting room and checks that
/// every known room was actually visited. Pure validation: no state outside
/// the report is touched.
pub fn verify_walk(world: &Arc<World>, walk: &[Direction]) -> Result<VerifyReport, TravelError> {
    let mut player = Player::new(Arc::clone(world));
    let mut visited: HashSet<_> = HashSet::new();
    visited.insert(player.current_room());

    for &direction in walk {
        visited.insert(player.travel(direction)?);
    }

    Ok(VerifyReport {
        moves: walk.len(),
        visited: visited.len(),
        total: world.room_count(),
    })
}
