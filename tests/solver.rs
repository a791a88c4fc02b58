use eight_tiles::{solve, Board, SearchOutcome, SearchTree, SolverConfig};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn solve_digits(digits: &str) -> SearchOutcome {
    let board: Board = digits.parse().unwrap();
    solve(&board, &SolverConfig::default()).unwrap()
}

#[test]
fn solvable_seed_ends_on_the_goal() {
    let outcome = solve_digits("245386107");
    assert!(outcome.is_solved());

    let SearchOutcome::Solved { path, stats } = outcome else {
        unreachable!()
    };
    assert_eq!(path[0].to_string(), "2 4 5\n3 8 6\n1   7\n");
    assert_eq!(path.last().unwrap().heuristic(), 0);
    assert!(stats.expanded <= stats.discovered);
    assert!(path.iter().take(path.len() - 1).all(|b| b.heuristic() > 0));
}

#[test]
fn odd_parity_seed_is_reported_as_exhausted() {
    let outcome = solve_digits("728045163");
    assert!(!outcome.is_solved());
    assert_eq!(outcome.stats().discovered, 181_440);
}

#[test]
fn random_boards_match_their_parity() {
    let mut rng = SmallRng::seed_from_u64(2016);
    for _ in 0..3 {
        let board = Board::random(&mut rng);
        let outcome = solve(&board, &SolverConfig::default()).unwrap();
        assert_eq!(outcome.is_solved(), board.is_solvable(), "{board}");
    }
}

#[test]
fn manual_driving_matches_solve() {
    let start: Board = "123405786".parse().unwrap();
    let mut tree = SearchTree::new(&start);

    while !tree.is_current_solved() {
        let moves = tree.current().board().possible_moves();
        tree.expand_frontier(&moves);
        tree.pop_best().expect("board is solvable");
    }

    let goal = tree.current_id();
    tree.reconstruct_path(goal).unwrap();
    let manual: Vec<Board> = tree.solution_path().unwrap().cloned().collect();

    let SearchOutcome::Solved { path, .. } = solve(&start, &SolverConfig::default()).unwrap() else {
        panic!("123405786 is solvable");
    };
    assert_eq!(manual, path);
    assert_eq!(manual.len(), 3);
}
