use pexeso::{Board, Game, GameResult, Phase, Seat, TurnOutcome};
use pexeso_bot::MemoryBot;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Plays a whole game with a bot in each seat and returns it.
fn play(size: usize, winning_score: u32, seed: u64) -> Game {
    let board = Board::generate(size, &mut StdRng::seed_from_u64(seed)).unwrap();
    let mut game = Game::new(board, winning_score);
    let mut first = MemoryBot::from_seed(seed.wrapping_add(1));
    let mut second = MemoryBot::from_seed(seed.wrapping_add(2));
    game.introduce_players(&mut first, &mut second);

    let mut turns = 0;
    while !game.is_over() {
        let seat = game.phase().to_move().unwrap();
        let report = game.play_turn(&mut first, &mut second).unwrap();
        assert_eq!(report.seat, seat);
        match report.outcome {
            TurnOutcome::Match => {
                assert_eq!(report.first.symbol, report.second.symbol);
                assert!(game.is_over() || game.phase() == Phase::turn_of(seat));
            }
            TurnOutcome::NoMatch => {
                assert!(!game.table().is_revealed(report.first.point));
                assert!(!game.table().is_revealed(report.second.point));
                assert!(game.is_over() || game.phase() == Phase::turn_of(seat.other()));
            }
        }
        turns += 1;
        assert!(turns < 10_000, "game did not terminate");
    }
    game
}

#[test]
fn games_end_at_winning_score() {
    for seed in 0..20 {
        let game = play(5, 3, seed);
        let score = game.score();
        assert!(score.human == 3 || score.bot == 3);
        assert!(score.human <= 3 && score.bot <= 3);
        assert!(matches!(game.result(), Some(GameResult::Won { .. })));
    }
}

#[test]
fn games_end_when_board_is_cleared() {
    for seed in 0..20 {
        let game = play(4, 100, seed);
        let score = game.score();
        assert_eq!(score.human + score.bot, 8);
        assert!(game.table().all_matched(game.board()));
    }
}

#[test]
fn odd_board_is_cleared_without_touching_the_empty_cell() {
    for seed in 0..10 {
        let game = play(3, 100, seed);
        let score = game.score();
        assert_eq!(score.human + score.bot, 4);
        let empty = game.board().empty_cells().next().unwrap();
        assert!(!game.table().is_matched(empty));
    }
}

#[test]
fn winner_has_more_pairs() {
    let game = play(6, 100, 11);
    let score = game.score();
    let expected = match score.human.cmp(&score.bot) {
        std::cmp::Ordering::Less => GameResult::Won { seat: Seat::Bot },
        std::cmp::Ordering::Equal => GameResult::Tie,
        std::cmp::Ordering::Greater => GameResult::Won { seat: Seat::Human },
    };
    assert_eq!(game.result(), Some(expected));
}
