use crate::direction::Direction;
use crate::world::{RoomId, World};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no exit {direction} from room {room}")]
pub struct TravelError {
    pub room: RoomId,
    pub direction: Direction,
}

/// Live position in the world. Each search worker owns its own `Player`;
/// the `World` behind it is shared read-only.
#[derive(Debug, Clone)]
pub struct Player {
    world: Arc<World>,
    current: RoomId,
}

impl Player {
    pub fn new(world: Arc<World>) -> Self {
        let current = world.starting_room();
        Self { world, current }
    }

    pub fn current_room(&self) -> RoomId {
        self.current
    }

    pub fn available_exits(&self) -> Vec<Direction> {
        self.world
            .room(self.current)
            .map(|room| room.exits())
            .unwrap_or_default()
    }

    pub fn resolve_exit(&self, direction: Direction) -> Option<RoomId> {
        self.world
            .room(self.current)?
            .room_in_direction(direction)
    }

    /// Moves through the given exit and returns the new room id. Directions
    /// originate from the world's own declared exits, so an unknown
    /// direction here is a caller bug surfaced as a typed error.
    pub fn travel(&mut self, direction: Direction) -> Result<RoomId, TravelError> {
        let to = self.resolve_exit(direction).ok_or(TravelError {
            room: self.current,
            direction,
        })?;
        self.current = to;
        Ok(to)
    }
}
