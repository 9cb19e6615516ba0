use crate::direction::Direction;
use crate::world::RoomId;
use std::collections::BTreeMap;

/// One location in the world. Immutable once the map is loaded.
#[derive(Debug, Clone)]
pub struct Room {
    id: RoomId,
    exits: BTreeMap<Direction, RoomId>,
}

impl Room {
    pub(crate) fn new(id: RoomId, exits: BTreeMap<Direction, RoomId>) -> Self {
        Self { id, exits }
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    /// Available exit directions, in a stable order.
    pub fn exits(&self) -> Vec<Direction> {
        self.exits.keys().copied().collect()
    }

    pub fn room_in_direction(&self, direction: Direction) -> Option<RoomId> {
        self.exits.get(&direction).copied()
    }
}
