use crate::core::{Direction, UserAction};

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

impl UserAction {
    pub fn from_key(key: char) -> Option<UserAction> {
        match key.to_ascii_lowercase() {
            'w' => Some(UserAction::Move(Direction::Up)),
            'a' => Some(UserAction::Move(Direction::Left)),
            's' => Some(UserAction::Move(Direction::Down)),
            'd' => Some(UserAction::Move(Direction::Right)),
            'r' => Some(UserAction::Restart),
            'q' => Some(UserAction::Exit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn keys_map_to_actions_in_either_case() {
        assert_eq!(UserAction::from_key('w'), Some(UserAction::Move(Direction::Up)));
        assert_eq!(UserAction::from_key('A'), Some(UserAction::Move(Direction::Left)));
        assert_eq!(UserAction::from_key('S'), Some(UserAction::Move(Direction::Down)));
        assert_eq!(UserAction::from_key('d'), Some(UserAction::Move(Direction::Right)));
        assert_eq!(UserAction::from_key('R'), Some(UserAction::Restart));
        assert_eq!(UserAction::from_key('q'), Some(UserAction::Exit));
    }

    #[test]
    fn unknown_keys_are_discarded() {
        for key in ['x', ' ', '1', 'é'] {
            assert_eq!(UserAction::from_key(key), None);
        }
    }
}
