//! End to end: generate a puzzle, ask for hints and play them

use rand::SeedableRng;
use rand::rngs::StdRng;
use waffle_solver::core::board::{board_letters, color_board, is_solved, letters};
use waffle_solver::dictionary::{Trie, get_or_build_index};
use waffle_solver::game::{Game, GameStatus, SolveConfig};
use waffle_solver::generator::{
    GeneratorConfig, generate_puzzle, is_valid_waffle_grid, sample_puzzle, scramble_puzzle,
};
use waffle_solver::solver::{Hint, Solver, find_swaps, swap_distance};

fn small_trie() -> Trie {
    Trie::from_words(["SIREN", "RABBI", "WINCH", "SCREW", "ROBIN", "NEIGH"])
}

fn play_hints(solver: &Solver<'_>, game: &mut Game) {
    while game.status() == GameStatus::Playing {
        let target = game.target();
        let hint = solver.suggest(game.board(), Some(target.as_str()));
        let swap = hint.next_swap().expect("a playable hint");
        game.play(swap).expect("hinted move is legal");
    }
}

#[test]
fn generated_puzzle_is_won_by_following_hints() {
    let trie = small_trie();
    let mut rng = StdRng::seed_from_u64(2024);
    let puzzle = generate_puzzle(&trie, &mut rng, &GeneratorConfig::new());

    let words = puzzle.solution.words();
    let texts: Vec<&str> = words.iter().map(|word| word.text()).collect();
    assert!(is_valid_waffle_grid(
        &trie,
        [texts[0], texts[1], texts[2], texts[3], texts[4], texts[5]]
    ));
    assert!(puzzle.solution.letters_fit(&puzzle.board));
    assert!(!is_solved(&puzzle.board));

    let solver = Solver::new(&trie);
    let mut game = Game::from_puzzle(&puzzle, SolveConfig::new());
    play_hints(&solver, &mut game);

    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.letters(), puzzle.solution.serialize());
}

#[test]
fn scrambled_board_first_hint_is_full_path() {
    let trie = small_trie();
    let puzzle = sample_puzzle();
    let mut rng = StdRng::seed_from_u64(9);
    let board = scramble_puzzle(&puzzle.solution, 3, &mut rng);

    let hint = Solver::new(&trie).suggest(&board, None);
    let Hint::FullPath { solution, swaps } = hint else {
        panic!("expected a full path, got {hint:?}");
    };
    assert_eq!(solution, puzzle.solution.serialize());
    assert_eq!(swaps, find_swaps(&board_letters(&board), &solution));
}

#[test]
fn sample_puzzle_with_full_dictionary() {
    let index = get_or_build_index();
    let puzzle = sample_puzzle();
    let solver = Solver::new(&index);

    assert_eq!(
        solver.candidates(&puzzle.board),
        [puzzle.solution.serialize()]
    );

    let mut game = Game::from_puzzle(&puzzle, SolveConfig::new());
    play_hints(&solver, &mut game);

    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.moves_used(), 5);
    assert_eq!(
        game.moves_used(),
        swap_distance(&board_letters(&puzzle.board), &puzzle.solution.serialize())
    );
}

#[test]
fn recoloured_answer_is_solved() {
    let puzzle = sample_puzzle();
    let target = puzzle.solution.to_board();
    let solved = color_board(&letters(&puzzle.solution.serialize()), &target);

    let hint = Solver::new(&small_trie()).suggest(&solved, None);
    assert_eq!(hint, Hint::Solved);
}
