pub mod direction;
pub mod player;
pub mod room;
pub mod world;

pub use direction::{Direction, ParseDirectionError};
pub use player::{Player, TravelError};
pub use room::Room;
pub use world::{MapError, RoomId, World};
