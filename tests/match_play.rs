use gobang::agent::{AgentKind, MinimaxAgent, RandomAgent};
use gobang::rules::check_win;
use gobang::search::Searcher;
use gobang::{Board, Game, GameConfig, GameState, Outcome, Pos, Stone};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn config(size: usize, depth: usize, seed: u64) -> GameConfig {
    GameConfig {
        rows: size,
        cols: size,
        depth,
        seed: Some(seed),
        ..GameConfig::default()
    }
}

/// The reported outcome must match what is on the board.
fn assert_outcome_consistent(board: &Board, outcome: Outcome) {
    match outcome {
        Outcome::Win { stone, line } => {
            assert_eq!(board.get(line.start), Some(stone));
            assert_eq!(board.get(line.end), Some(stone));
            assert!(check_win(board, stone, line.start, 5).is_some());
            assert_eq!(line.start.distance(line.end), 4);
        }
        Outcome::Draw => assert!(board.is_full()),
    }
}

#[test]
fn test_minimax_beats_random() {
    let config = config(9, 2, 17);
    let mut game = Game::with_kinds(&config, AgentKind::Minimax, AgentKind::Random);

    for _ in 0..10 {
        let outcome = game.run_match().unwrap();
        assert_eq!(game.state(), GameState::Over);
        assert_outcome_consistent(game.board(), outcome);
    }
    let score = game.scoreboard();
    assert_eq!(score.games(), 10);
    assert!(
        score.wins(Stone::Black) > score.wins(Stone::White),
        "minimax won {} of 10, random {}",
        score.wins(Stone::Black),
        score.wins(Stone::White)
    );
}

#[test]
fn test_minimax_self_play_on_non_square_board() {
    let config = GameConfig {
        rows: 7,
        cols: 12,
        ..config(7, 2, 3)
    };
    let mut game = Game::with_kinds(&config, AgentKind::Minimax, AgentKind::Minimax);
    let outcome = game.run_match().unwrap();

    assert_outcome_consistent(game.board(), outcome);
    let stones = game.board().stone_count();
    assert_eq!(stones, game.step() + 1);
    assert_eq!(game.board().get(Pos::new(3, 6)), Some(Stone::Black));
}

#[test]
fn test_seeded_matches_are_reproducible() {
    let play = || {
        let mut game = Game::new(
            &config(9, 2, 0),
            Box::new(MinimaxAgent::with_rng(
                "Black",
                Stone::Black,
                2,
                Searcher::default(),
                StdRng::seed_from_u64(99),
            )),
            Box::new(RandomAgent::with_rng("White", Stone::White, StdRng::seed_from_u64(100))),
        );
        let outcome = game.run_match().unwrap();
        (outcome, game.board().clone())
    };
    assert_eq!(play(), play());
}

#[test]
fn test_depth_three_wins_more_often_than_depth_one() {
    let mut deep_wins = 0;
    for seed in 0..4 {
        let mut game = Game::new(
            &config(9, 1, seed),
            Box::new(MinimaxAgent::with_rng(
                "Black",
                Stone::Black,
                3,
                Searcher::default(),
                StdRng::seed_from_u64(seed),
            )),
            Box::new(MinimaxAgent::with_rng(
                "White",
                Stone::White,
                1,
                Searcher::default(),
                StdRng::seed_from_u64(seed + 1000),
            )),
        );
        if game.run_match().unwrap().winner() == Some(Stone::Black) {
            deep_wins += 1;
        }
    }
    assert!(deep_wins >= 3, "depth 3 won {deep_wins} of 4");
}
