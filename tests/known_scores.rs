extern crate marble_mania as marbles;

use marbles::{high_score, Game, GameError, Setup};

#[test]
#[rustfmt::skip]
fn test_known_scores() {
    assert_eq!(high_score(9, 25), Ok(32));
    assert_eq!(high_score(10, 1618), Ok(8317));
    assert_eq!(high_score(13, 7999), Ok(146373));
    assert_eq!(high_score(17, 1104), Ok(2764));
    assert_eq!(high_score(21, 6111), Ok(54718));
    assert_eq!(high_score(30, 5807), Ok(37305));
}

#[test]
fn test_from_setup_line() {
    let setup: Setup = "30 players; last marble is worth 5807 points".parse().unwrap();
    assert_eq!(setup.high_score(), Ok(37305));
}

#[test]
fn test_no_scoring_turn() {
    for marbles in 1..23 {
        assert_eq!(high_score(4, marbles), Ok(0));
    }
    assert_eq!(high_score(1, 0), Ok(0));
}

#[test]
fn test_no_players() {
    for &marbles in &[0, 1, 25, 1618] {
        assert_eq!(
            high_score(0, marbles),
            Err(GameError::InvalidConfiguration { players: 0 })
        );
    }
}

#[test]
fn test_long_game_stays_consistent() {
    let mut game = Game::new(13).unwrap();
    game.play_until(7999);
    game.ring().check().unwrap();
    assert_eq!(game.ring().len() as u64, 1 + 7999 - 2 * (7999 / 23));
    assert_eq!(game.high_score(), 146373);
}
