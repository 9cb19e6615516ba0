#[cfg(test)]
mod tests {
    use crate::coordinator::{run_search, SearchConfig, SharedBest};
    use crate::graph::build_graph;
    use crate::search::SearchPolicy;
    use crate::store::WalkStore;
    use crate::verify::verify_walk;
    use maze_world::{Direction, World};
    use std::path::PathBuf;
    use std::sync::Arc;

    // Square loop with two dead-end forks: the kind of map where the
    // dead-end policy pays off. An optimal covering walk is 7 moves.
    const LOOP_FORK: &str = r#"{
        "start": 0,
        "rooms": {
            "0": {"n": 1, "e": 3, "s": 5},
            "1": {"s": 0, "e": 2},
            "2": {"w": 1, "s": 3, "n": 4},
            "3": {"n": 2, "w": 0},
            "4": {"s": 2},
            "5": {"n": 0}
        }
    }"#;

    fn temp_store(name: &str) -> WalkStore {
        let path = std::env::temp_dir().join(format!(
            "maze-solver-e2e-{}-{}.txt",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        WalkStore::new(path)
    }

    async fn run_pipeline(
        map: &str,
        policy: SearchPolicy,
        target: usize,
        store: WalkStore,
    ) -> (Arc<World>, Arc<SharedBest>) {
        let world = Arc::new(World::from_map_str(map).unwrap());
        let graph = Arc::new(build_graph(&world));
        let initial = store.load().unwrap();
        let shared = Arc::new(SharedBest::new(initial, store));
        run_search(
            Arc::clone(&world),
            Arc::clone(&graph),
            Arc::clone(&shared),
            SearchConfig {
                target,
                workers: 2,
                policy,
                seed: 99,
            },
        )
        .await
        .unwrap();
        (world, shared)
    }

    #[tokio::test]
    async fn dead_end_pipeline_reaches_seven_moves_on_the_fork_map() {
        let store = temp_store("dead-end");
        let (world, shared) = run_pipeline(LOOP_FORK, SearchPolicy::DeadEnd, 7, store.clone()).await;

        let best = shared.snapshot().expect("a walk was found");
        assert_eq!(best.len(), 7);

        let report = verify_walk(&world, &best).unwrap();
        assert!(report.passed());
        assert_eq!(report.visited, 6);
        let _ = std::fs::remove_file(store.path());
    }

    #[tokio::test]
    async fn first_unvisited_pipeline_meets_a_loose_target() {
        let store = temp_store("first-unvisited");
        let (world, shared) =
            run_pipeline(LOOP_FORK, SearchPolicy::FirstUnvisited, 9, store.clone()).await;

        let best = shared.snapshot().expect("a walk was found");
        assert!(best.len() <= 9);
        assert!(verify_walk(&world, &best).unwrap().passed());
        let _ = std::fs::remove_file(store.path());
    }

    #[tokio::test]
    async fn directional_bias_pipeline_covers_the_fork_map() {
        let store = temp_store("bias");
        let (world, shared) =
            run_pipeline(LOOP_FORK, SearchPolicy::DirectionalBias, 9, store.clone()).await;

        let best = shared.snapshot().expect("a walk was found");
        assert!(verify_walk(&world, &best).unwrap().passed());
        let _ = std::fs::remove_file(store.path());
    }

    #[tokio::test]
    async fn best_walk_survives_across_runs() {
        let store = temp_store("across-runs");
        // A prior run left a sloppy 20-move record behind.
        let sloppy: Vec<Direction> = "n,s,n,s,n,s,n,s,n,s,e,w,e,w,e,w,s,n,s,n"
            .split(',')
            .map(|label| label.parse().unwrap())
            .collect();
        store.save(&sloppy).unwrap();

        let (_, shared) = run_pipeline(LOOP_FORK, SearchPolicy::DeadEnd, 7, store.clone()).await;
        assert_eq!(shared.best_len(), Some(7));
        assert_eq!(store.load().unwrap().map(|w| w.len()), Some(7));

        // A fresh run seeds from the improved record and has nothing to do.
        let (_, reseeded) = run_pipeline(LOOP_FORK, SearchPolicy::DeadEnd, 7, store.clone()).await;
        assert_eq!(reseeded.best_len(), Some(7));
        let _ = std::fs::remove_file(store.path());
    }

    #[test]
    fn shipped_maps_load_and_explore_completely() {
        let maps_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../maps");
        for name in [
            "test_line.json",
            "test_cross.json",
            "test_loop.json",
            "test_loop_fork.json",
            "main_maze.json",
        ] {
            let world = World::load(maps_dir.join(name)).unwrap();
            let graph = build_graph(&world);
            assert_eq!(graph.len(), world.room_count(), "map {name}");
        }

        let maze = World::load(maps_dir.join("main_maze.json")).unwrap();
        assert_eq!(maze.room_count(), 20);
    }
}
