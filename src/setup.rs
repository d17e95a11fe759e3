use failure::Error;
use game::{self, GameError};
use regex::Regex;
use std::str::FromStr;

/// The size of a game, as the puzzle input states it:
///
/// ```text
/// 10 players; last marble is worth 1618 points
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Setup {
    pub players: usize,
    pub last_marble: u64,
}

impl Setup {
    /// The same game, played to `factor` times as many marbles.
    pub fn scaled(self, factor: u64) -> Result<Setup, Error> {
        let last_marble = self.last_marble.checked_mul(factor).ok_or_else(|| {
            format_err!(
                "last marble {} times {} is too large",
                self.last_marble,
                factor
            )
        })?;
        Ok(Setup { last_marble, ..self })
    }

    pub fn high_score(&self) -> Result<u64, GameError> {
        game::high_score(self.players, self.last_marble)
    }
}

impl FromStr for Setup {
    type Err = Error;
    fn from_str(s: &str) -> Result<Setup, Error> {
        lazy_static! {
            static ref RE: Regex =
                Regex::new(r"^(\d+) players?; last marble is worth (\d+) points?$").unwrap();
        }

        let s = s.trim();
        let captures = RE
            .captures(s)
            .ok_or_else(|| format_err!("bad game setup: {:?}", s))?;
        Ok(Setup {
            players: usize::from_str(&captures[1])?,
            last_marble: u64::from_str(&captures[2])?,
        })
    }
}

#[test]
fn test_parse() {
    assert_eq!(
        "10 players; last marble is worth 1618 points\n".parse::<Setup>().unwrap(),
        Setup {
            players: 10,
            last_marble: 1618
        }
    );
    assert_eq!(
        "  1 player; last marble is worth 1 point".parse::<Setup>().unwrap(),
        Setup {
            players: 1,
            last_marble: 1
        }
    );
    assert!("10 players".parse::<Setup>().is_err());
    assert!("-3 players; last marble is worth 5 points".parse::<Setup>().is_err());
    assert!("99999999999999999999999 players; last marble is worth 5 points"
        .parse::<Setup>()
        .is_err());
}

#[test]
fn test_scaled() {
    let setup = Setup {
        players: 9,
        last_marble: 25,
    };
    assert_eq!(setup.high_score(), Ok(32));
    let scaled = setup.scaled(100).unwrap();
    assert_eq!(scaled.last_marble, 2500);
    assert_eq!(scaled.players, 9);

    let huge: Setup = "9 players; last marble is worth 1000000000000000000 points"
        .parse()
        .unwrap();
    assert!(huge.scaled(100).is_err());
    assert_eq!(huge.scaled(1).unwrap(), huge);

    let empty = Setup {
        players: 0,
        last_marble: 25,
    };
    assert!(empty.high_score().is_err());
}
