use crate::direction::Direction;
use crate::room::Room;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

pub type RoomId = usize;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("failed to read map file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse map file")]
    Parse(#[from] serde_json::Error),
    #[error("starting room {0} is not declared in the map")]
    UnknownStart(RoomId),
    #[error("room {from} has exit {direction} to undeclared room {to}")]
    DanglingExit {
        from: RoomId,
        direction: Direction,
        to: RoomId,
    },
}

#[derive(Debug, Deserialize)]
struct MapFile {
    start: RoomId,
    rooms: BTreeMap<RoomId, BTreeMap<Direction, RoomId>>,
}

/// The loaded map: ground truth for room connectivity. Read-only after
/// construction, so it can be shared across worker tasks behind an `Arc`.
#[derive(Debug)]
pub struct World {
    start: RoomId,
    rooms: BTreeMap<RoomId, Room>,
}

impl World {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| MapError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_map_str(&text)
    }

    /// Parses and validates a map. Every exit target must itself be a
    /// declared room; a dangling reference is fatal, not retried.
    pub fn from_map_str(text: &str) -> Result<Self, MapError> {
        let map: MapFile = serde_json::from_str(text)?;

        if !map.rooms.contains_key(&map.start) {
            return Err(MapError::UnknownStart(map.start));
        }
        for (&id, exits) in &map.rooms {
            for (&direction, &to) in exits {
                if !map.rooms.contains_key(&to) {
                    return Err(MapError::DanglingExit {
                        from: id,
                        direction,
                        to,
                    });
                }
            }
        }

        let rooms = map
            .rooms
            .into_iter()
            .map(|(id, exits)| (id, Room::new(id, exits)))
            .collect();
        Ok(Self {
            start: map.start,
            rooms,
        })
    }

    pub fn starting_room(&self) -> RoomId {
        self.start
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(&id)
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }
}
