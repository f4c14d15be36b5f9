use super::Combatant;
use serde::{Deserialize, Serialize};

/// A one-step move along the battle line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Left,
    Right,
}

impl Combatant {
    pub fn move_left(&mut self) {
        self.position -= 1;
    }

    pub fn move_right(&mut self) {
        self.position += 1;
    }

    pub fn move_by(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.move_left(),
            Direction::Right => self.move_right(),
        }
    }

    /// Step one unit at a time until standing on `target`
    ///
    /// Returns the number of steps taken.
    pub fn move_to(&mut self, target: i32) -> u32 {
        let mut steps = 0;
        while self.position != target {
            if self.position < target {
                self.move_by(Direction::Right);
            } else {
                self.move_by(Direction::Left);
            }
            steps += 1;
        }
        steps
    }

    /// Close the distance to `enemy`, returning the number of steps taken
    pub fn move_to_enemy(&mut self, enemy: &Combatant) -> u32 {
        self.move_to(enemy.position)
    }
}
