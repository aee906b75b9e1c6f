use pacard::{
    config::Config,
    procedures::explore::Explorer,
    structures::{belief::Classification, cell::Cell},
    types::err::{self},
    world::{
        cave::{Cave, Walk},
        Direction, Successor, World,
    },
};

fn cave(layout: &str) -> Cave {
    layout.parse().expect("parse failure")
}

mod caves {
    use super::*;

    use Direction::*;

    #[test]
    fn corridor() {
        let corridor = cave("%%%%%\n%P E%\n%%%%%");

        let exploration = Explorer::new(&corridor, Config::default())
            .explore()
            .expect("exploration failure");

        assert_eq!(
            exploration.visited,
            vec![Cell::new(1, 1), Cell::new(2, 1), Cell::new(3, 1)]
        );
        assert_eq!(exploration.actions, vec![East, East]);
        assert!(exploration.is_proven());
        assert_eq!(exploration.goal(), Some(Cell::new(3, 1)));
        assert_eq!(corridor.walk(&exploration.actions), Walk::Exited(Cell::new(3, 1)));
    }

    #[test]
    fn rank_order() {
        let room = cave(
            "
%%%%%
%  E%
%P  %
%%%%%",
        );

        let exploration = Explorer::new(&room, Config::default())
            .explore()
            .expect("exploration failure");

        assert_eq!(
            exploration.visited,
            vec![
                Cell::new(1, 1),
                Cell::new(1, 2),
                Cell::new(2, 1),
                Cell::new(2, 2),
                Cell::new(3, 1),
                Cell::new(3, 2),
            ]
        );

        // Each jump between cells which are not adjacent returns through visited cells.
        assert_eq!(exploration.actions, vec![North, South, East, North, South, East, North]);
        assert_eq!(room.walk(&exploration.actions), Walk::Exited(Cell::new(3, 2)));
    }

    #[test]
    fn stench_blocks() {
        let layout = "
%%%%%%
%   E%
%.   %
%PW  %
%%%%%%";
        let stench = cave(layout);

        let mut explorer = Explorer::new(&stench, Config::default());
        assert_eq!(
            explorer.explore().err(),
            Some(err::ErrorKind::Exploration(err::ExplorationError::FrontierExhausted))
        );

        // Either neighbour of the start may hold the wumpus.
        assert_eq!(explorer.visited(), &[Cell::new(1, 1)]);
        assert_eq!(explorer.classification(Cell::new(1, 2)), Classification::Uncertain);
        assert_eq!(explorer.classification(Cell::new(2, 1)), Classification::Uncertain);
        assert!(explorer.forced().is_empty());
    }

    #[test]
    fn forced_risk() {
        let stench = cave(
            "
%%%%%%
%   E%
%.   %
%PW  %
%%%%%%",
        );

        let mut config = Config::default();
        assert!(config.risk_threshold.set(1));

        let exploration = Explorer::new(&stench, config.clone())
            .explore()
            .expect("exploration failure");

        // The lower ranked of the two uncertain neighbours is taken, and happens to be free of the wumpus.
        assert_eq!(exploration.forced, vec![Cell::new(1, 2)]);
        assert!(!exploration.visited.contains(&Cell::new(2, 1)));
        assert_eq!(stench.walk(&exploration.actions), Walk::Exited(Cell::new(4, 3)));

        config.forced_risk.value = false;
        assert_eq!(
            Explorer::new(&stench, config).explore().err(),
            Some(err::ErrorKind::Exploration(err::ExplorationError::FrontierExhausted))
        );
    }

    #[test]
    fn walled_in() {
        let walled = cave("%%%%%\n%P%E%\n%%%%%");

        let mut explorer = Explorer::new(&walled, Config::default());
        assert_eq!(
            explorer.explore().err(),
            Some(err::ErrorKind::Exploration(err::ExplorationError::FrontierExhausted))
        );
        assert_eq!(explorer.visited(), &[walled.start()]);
        assert_eq!(explorer.counters().queries, 0);
    }

    #[test]
    fn glow_and_chemicals() {
        let lit = cave(
            "
%%%%%%%
%P   T%
%     %
%O   E%
%%%%%%%",
        );

        let exploration = Explorer::new(&lit, Config::default())
            .explore()
            .expect("exploration failure");

        assert!(exploration.is_proven());
        assert!(!exploration.visited.contains(&Cell::new(5, 3)));
        assert!(!exploration.visited.contains(&Cell::new(1, 1)));
        assert_eq!(lit.walk(&exploration.actions), Walk::Exited(Cell::new(5, 1)));
    }
}

mod worlds {
    use super::*;

    /// A line of cells along the bottom row, with the final cell the goal.
    struct Line {
        length: u32,
    }

    impl World for Line {
        type Action = u32;

        fn start(&self) -> Cell {
            Cell::new(0, 0)
        }

        fn is_goal(&self, cell: Cell) -> bool {
            cell.x + 1 == self.length
        }

        fn successors(&self, cell: Cell) -> Vec<Successor<u32>> {
            vec![Successor {
                cell: Cell::new(cell.x + 1, 0),
                action: cell.x + 1,
                cost: 1,
            }]
        }

        fn is_wumpus_close(&self, _: Cell) -> bool {
            false
        }

        fn is_teleporter_close(&self, _: Cell) -> bool {
            false
        }

        fn is_poison_close(&self, _: Cell) -> bool {
            false
        }

        fn reconstruct_path(&self, visited: &[Cell]) -> Vec<u32> {
            visited.iter().skip(1).map(|cell| cell.x).collect()
        }
    }

    #[test]
    fn within_bounds() {
        let exploration = Explorer::new(&Line { length: 20 }, Config::default())
            .explore()
            .expect("exploration failure");

        assert_eq!(exploration.visited.len(), 20);
        assert_eq!(exploration.actions, (1..20).collect::<Vec<_>>());
    }

    #[test]
    fn beyond_bounds() {
        assert_eq!(
            Explorer::new(&Line { length: 25 }, Config::default())
                .explore()
                .err(),
            Some(err::ErrorKind::Exploration(
                err::ExplorationError::CellOutOfBounds(Cell::new(20, 0))
            ))
        );
    }
}
