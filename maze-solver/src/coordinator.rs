use crate::graph::RoomGraph;
use crate::search::SearchPolicy;
use crate::store::{StoreError, WalkStore};
use crate::walk::assemble_walk;
use anyhow::{Context, Result};
use maze_world::{Direction, World};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// The shortest walk found so far, shared by every worker. The mutex guards
/// both the in-memory value and the persisted record: `improve_if_shorter`
/// is the sole mutation entry point, and it writes the store inside the
/// critical section so a crash immediately after an improvement never loses
/// it.
pub struct SharedBest {
    state: Mutex<Option<Vec<Direction>>>,
    store: WalkStore,
}

impl SharedBest {
    pub fn new(initial: Option<Vec<Direction>>, store: WalkStore) -> Self {
        Self {
            state: Mutex::new(initial),
            store,
        }
    }

    pub fn best_len(&self) -> Option<usize> {
        self.state
            .lock()
            .expect("shared best lock poisoned")
            .as_ref()
            .map(Vec::len)
    }

    pub fn snapshot(&self) -> Option<Vec<Direction>> {
        self.state
            .lock()
            .expect("shared best lock poisoned")
            .clone()
    }

    /// Commits `walk` iff it is strictly shorter than the best at commit
    /// time. The length is re-read under the lock, never trusted from an
    /// earlier read, so a late-finishing worker cannot overwrite a better
    /// result with a worse one.
    pub fn improve_if_shorter(&self, walk: &[Direction]) -> Result<bool, StoreError> {
        let mut state = self.state.lock().expect("shared best lock poisoned");
        let current = state.as_ref().map(Vec::len).unwrap_or(usize::MAX);
        if walk.len() >= current {
            return Ok(false);
        }
        self.store.save(walk)?;
        *state = Some(walk.to_vec());
        Ok(true)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Stop once the shared best walk is at most this many moves. An
    /// unreachable target keeps the loop running until the process is
    /// halted; that is the documented contract, not a bug.
    pub target: usize,
    pub workers: usize,
    pub policy: SearchPolicy,
    pub seed: u64,
}

/// Drives repeated randomized walk attempts across blocking worker tasks
/// until the shared best length meets the target, then joins every worker.
pub async fn run_search(
    world: Arc<World>,
    graph: Arc<RoomGraph>,
    shared: Arc<SharedBest>,
    config: SearchConfig,
) -> Result<()> {
    let workers = config.workers.max(1);
    info!(
        workers,
        target = config.target,
        policy = ?config.policy,
        "starting walk search"
    );

    let mut handles = Vec::with_capacity(workers);
    for worker in 0..workers {
        let world = Arc::clone(&world);
        let graph = Arc::clone(&graph);
        let shared = Arc::clone(&shared);
        let seed = config.seed.wrapping_add(worker as u64);
        handles.push(tokio::task::spawn_blocking(move || {
            search_worker(worker, &world, &graph, &shared, &config, seed)
        }));
    }
    for handle in handles {
        handle.await.context("search worker panicked")??;
    }
    Ok(())
}

fn search_worker(
    worker: usize,
    world: &Arc<World>,
    graph: &Arc<RoomGraph>,
    shared: &SharedBest,
    config: &SearchConfig,
    seed: u64,
) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut attempts = 0u64;
    loop {
        // The target check lives only at the top of the loop; an attempt in
        // flight always runs to completion.
        let best = shared.best_len().unwrap_or(usize::MAX);
        if best <= config.target {
            debug!(worker, attempts, best, "target reached");
            return Ok(());
        }

        let walk = assemble_walk(world, graph, config.policy, &mut rng)?;
        attempts += 1;
        if walk.len() < best && shared.improve_if_shorter(&walk)? {
            info!(worker, moves = walk.len(), "new shortest walk");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;
    use maze_world::Direction::*;

    fn temp_store(name: &str) -> WalkStore {
        let path = std::env::temp_dir().join(format!(
            "maze-solver-coord-{}-{}.txt",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        WalkStore::new(path)
    }

    #[test]
    fn improvement_is_strictly_shorter_at_commit_time() {
        let store = temp_store("commit");
        let shared = SharedBest::new(None, store.clone());

        assert!(shared.improve_if_shorter(&[North, South, North, South, North]).unwrap());
        assert_eq!(shared.best_len(), Some(5));

        // A worker that read the old best and finished late with a worse
        // walk must not land.
        assert!(!shared.improve_if_shorter(&[North; 7]).unwrap());
        assert_eq!(shared.best_len(), Some(5));

        // Equal length is not an improvement either.
        assert!(!shared.improve_if_shorter(&[South; 5]).unwrap());
        assert_eq!(shared.best_len(), Some(5));

        assert!(shared.improve_if_shorter(&[North, South, East]).unwrap());
        assert_eq!(shared.best_len(), Some(3));

        // The store holds exactly the committed record.
        assert_eq!(store.load().unwrap(), Some(vec![North, South, East]));
        let _ = std::fs::remove_file(store.path());
    }

    #[test]
    fn best_is_seeded_from_a_prior_record() {
        let store = temp_store("seeded");
        let shared = SharedBest::new(Some(vec![North, South]), store.clone());
        assert_eq!(shared.best_len(), Some(2));
        assert!(!shared.improve_if_shorter(&[East, West]).unwrap());
        assert_eq!(shared.snapshot(), Some(vec![North, South]));
        let _ = std::fs::remove_file(store.path());
    }

    #[tokio::test]
    async fn search_stops_once_the_target_is_met() {
        let cross = r#"{
            "start": 0,
            "rooms": {
                "0": {"n": 1, "s": 2, "e": 3, "w": 4},
                "1": {"s": 0},
                "2": {"n": 0},
                "3": {"w": 0},
                "4": {"e": 0}
            }
        }"#;
        let world = Arc::new(World::from_map_str(cross).unwrap());
        let graph = Arc::new(build_graph(&world));
        let store = temp_store("target");
        let shared = Arc::new(SharedBest::new(None, store.clone()));

        let config = SearchConfig {
            target: 7,
            workers: 2,
            policy: SearchPolicy::DeadEnd,
            seed: 1234,
        };
        run_search(
            Arc::clone(&world),
            Arc::clone(&graph),
            Arc::clone(&shared),
            config,
        )
        .await
        .unwrap();

        let best = shared.snapshot().expect("a walk was found");
        assert_eq!(best.len(), 7);
        assert_eq!(store.load().unwrap(), Some(best));
        let _ = std::fs::remove_file(store.path());
    }
}
