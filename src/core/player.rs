//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! The two sides of the game. `X` always opens.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `Player`, used for per-player
//! inventories and anything else that needs one value per side.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::X, Player::O];

    /// The opponent of this player.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Single-character mark used in board text.
    #[must_use]
    pub const fn mark(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }

    /// Parse a mark character (case-insensitive).
    #[must_use]
    pub fn from_mark(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Player::X),
            'O' | 'o' => Some(Player::O),
            _ => None,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mark())
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use three_mens_morris::core::{Player, PlayerMap};
///
/// let mut placed: PlayerMap<u8> = PlayerMap::with_value(0);
/// placed[Player::O] += 1;
///
/// assert_eq!(placed[Player::X], 0);
/// assert_eq!(placed[Player::O], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    x: T,
    o: T,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            x: factory(Player::X),
            o: factory(Player::O),
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        match player {
            Player::X => &self.x,
            Player::O => &self.o,
        }
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        match player {
            Player::X => &mut self.x,
            Player::O => &mut self.o,
        }
    }

    /// Iterate over (Player, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().map(move |p| (p, self.get(p)))
    }

    /// True if `pred` holds for both players.
    pub fn all(&self, pred: impl Fn(&T) -> bool) -> bool {
        self.iter().all(|(_, value)| pred(value))
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_other() {
        assert_eq!(Player::X.other(), Player::O);
        assert_eq!(Player::O.other(), Player::X);
        assert_eq!(Player::X.other().other(), Player::X);
    }

    #[test]
    fn test_player_marks() {
        assert_eq!(format!("{}", Player::X), "X");
        assert_eq!(Player::from_mark('o'), Some(Player::O));
        assert_eq!(Player::from_mark('.'), None);
    }

    #[test]
    fn test_player_map_new() {
        let map = PlayerMap::new(|p| if p == Player::X { 10 } else { 20 });

        assert_eq!(map[Player::X], 10);
        assert_eq!(map[Player::O], 20);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<i32> = PlayerMap::with_value(0);

        map[Player::X] = 10;
        map[Player::O] = 20;

        assert_eq!(map[Player::X], 10);
        assert_eq!(map[Player::O], 20);
    }

    #[test]
    fn test_player_map_iter_and_all() {
        let map: PlayerMap<i32> = PlayerMap::new(|p| if p == Player::X { 0 } else { 1 });

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Player::X, &0), (Player::O, &1)]);
        assert!(map.all(|v| *v < 2));
        assert!(!map.all(|v| *v == 0));
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<i32> = PlayerMap::new(|p| if p == Player::X { 1 } else { 2 });
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
