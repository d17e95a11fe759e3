#[macro_use]
extern crate failure;
extern crate itertools;
#[macro_use]
extern crate lazy_static;
extern crate regex;

use std::cmp::Ordering;

pub mod game;
pub mod ring;
pub mod setup;

pub use game::{high_score, Game, GameError};
pub use ring::{NodeId, Ring};
pub use setup::Setup;

pub trait IteratorExt: Iterator {
    fn unique_max_by_key<B, F>(self, f: F) -> Option<Self::Item>
    where B: Ord,
          F: FnMut(&Self::Item) -> B;
}

impl<I: Iterator> IteratorExt for I {
    /// Return the item of `self` for which `f` returns the greatest value, but
    /// if there is a tie, return `None`.
    fn unique_max_by_key<B, F>(mut self, mut f: F) -> Option<Self::Item>
    where B: Ord,
          F: FnMut(&Self::Item) -> B
    {
        let mut best = match self.next() {
            None => return None,
            Some(b) => b
        };
        let mut best_key = f(&best);
        let mut tied = false;

        for item in self {
            let key = f(&item);
            match key.cmp(&best_key) {
                Ordering::Less => (),
                Ordering::Equal => {
                    tied = true;
                }
                Ordering::Greater => {
                    best = item;
                    best_key = key;
                    tied = false;
                }
            }
        }

        if tied {
            None
        } else {
            Some(best)
        }
    }
}

#[test]
fn test_unique_max_by_key() {
    assert_eq!(vec![3, 1, 4, 1, 5].into_iter().unique_max_by_key(|&x| x), Some(5));
    assert_eq!(vec![5, 1, 5].into_iter().unique_max_by_key(|&x| x), None);
    assert_eq!(vec![5, 1, 5, 9].into_iter().unique_max_by_key(|&x| x), Some(9));
    assert_eq!(Vec::<i32>::new().into_iter().unique_max_by_key(|&x| x), None);
    assert_eq!(vec!["ab", "c"].into_iter().unique_max_by_key(|s| s.len()), Some("ab"));
}
