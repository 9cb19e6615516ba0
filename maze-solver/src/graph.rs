use maze_world::{Direction, RoomId, World};
use std::collections::{BTreeMap, HashSet};

static EMPTY_EXITS: BTreeMap<Direction, RoomId> = BTreeMap::new();

/// Directed, direction-labeled adjacency over room ids. Write-once during
/// exploration, read-many during search.
#[derive(Debug, Default, Clone)]
pub struct RoomGraph {
    vertices: BTreeMap<RoomId, BTreeMap<Direction, RoomId>>,
}

impl RoomGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent: re-adding an existing vertex keeps its edges.
    pub fn add_vertex(&mut self, id: RoomId) {
        self.vertices.entry(id).or_default();
    }

    /// Records a directed labeled edge. Re-adding the same (from, direction)
    /// pair overwrites silently; physical connectivity never changes, so a
    /// re-add is always consistent.
    pub fn add_edge(&mut self, from: RoomId, direction: Direction, to: RoomId) {
        self.vertices.entry(from).or_default().insert(direction, to);
    }

    /// Direction -> neighbor mapping for a vertex, empty if absent.
    pub fn neighbors(&self, id: RoomId) -> &BTreeMap<Direction, RoomId> {
        self.vertices.get(&id).unwrap_or(&EMPTY_EXITS)
    }

    /// Number of discovered vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(|exits| exits.len()).sum()
    }
}

/// Exhaustive depth-first discovery over the live world, with an explicit
/// work stack so large maps cannot hit a recursion limit. Each vertex is
/// expanded at most once; it may sit on the stack more than once before its
/// first pop. Edges are recorded exactly as the world reports them.
pub fn build_graph(world: &World) -> RoomGraph {
    let mut graph = RoomGraph::new();
    let mut stack = vec![world.starting_room()];
    let mut visited: HashSet<RoomId> = HashSet::new();

    while let Some(room_id) = stack.pop() {
        if visited.contains(&room_id) {
            continue;
        }
        let Some(room) = world.room(room_id) else {
            continue;
        };
        graph.add_vertex(room_id);
        for direction in room.exits() {
            if let Some(neighbor) = room.room_in_direction(direction) {
                graph.add_vertex(neighbor);
                graph.add_edge(room_id, direction, neighbor);
                if !visited.contains(&neighbor) {
                    stack.push(neighbor);
                }
            }
        }
        visited.insert(room_id);
    }

    graph
}
