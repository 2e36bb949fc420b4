use rand::Rng;
use tracing::info;
use crate::core::{GameError, GameField, UserAction};

/// Screens of the outer loop. `Init` resets the board and never waits for input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Init,
    Game,
    Win,
    GameOver,
    Exit,
}

pub fn enter_init<R: Rng>(game: &mut GameField<R>) -> Result<Screen, GameError> {
    game.reset()?;
    Ok(Screen::Game)
}

/// Feeds one decoded action to the current screen and returns the next one.
pub fn advance<R: Rng>(
    screen: Screen,
    action: UserAction,
    game: &mut GameField<R>,
) -> Result<Screen, GameError> {
    let next = match (screen, action) {
        (Screen::Init, _) => enter_init(game)?,
        (Screen::Exit, _) => Screen::Exit,
        (_, UserAction::Exit) => Screen::Exit,
        (_, UserAction::Restart) => Screen::Init,
        (Screen::Game, UserAction::Move(direction)) => {
            if !game.make_move(direction)? {
                Screen::Game
            } else if game.is_win() {
                info!(score = game.score(), "target reached");
                Screen::Win
            } else if game.is_game_over() {
                info!(score = game.score(), "no moves left");
                Screen::GameOver
            } else {
                Screen::Game
            }
        }
        (Screen::Win | Screen::GameOver, UserAction::Move(_)) => screen,
    };
    Ok(next)
}
