// Terminal 2048 with ratatui
// Controls: W/A/S/D or arrow keys to slide, R to restart, Q or Esc to quit.
// Reach the target tile to win; the game is over once no slide changes the board.

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;
use tracing::{error, info};

use MergeGrid::config::{Args, GameConfig};
use MergeGrid::console_interface::{cleanup_terminal, handle_input, render_game, setup_terminal, ConsoleInput};
use MergeGrid::core::GameField;
use MergeGrid::logging::init_logging;
use MergeGrid::models::GameRenderState;
use MergeGrid::session::{advance, enter_init, Screen};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = GameConfig::resolve(&args)?;
    init_logging(&args.log, &args.log_file)?;
    info!(?config, "starting");

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut game = GameField::new(config.height, config.width, config.target, rng)?;

    let mut terminal = setup_terminal()?;
    let result = run_interactive(&mut game, &mut terminal);
    cleanup_terminal()?;

    if let Err(err) = &result {
        error!(%err, "session ended with an error");
    }
    info!(high_score = game.high_score().max(game.score()), "goodbye");
    result
}

fn run_interactive(
    game: &mut GameField<StdRng>,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    // the board is already dealt, so skip straight past Init
    let mut screen = Screen::Game;
    render_game(terminal, &GameRenderState::capture(game))?;

    loop {
        if screen == Screen::Init {
            screen = enter_init(game)?;
            render_game(terminal, &GameRenderState::capture(game))?;
            continue;
        }

        let action = match handle_input()? {
            ConsoleInput::UserAction(action) => action,
            ConsoleInput::Timeout | ConsoleInput::Unknown => continue,
        };

        let mut to_render = GameRenderState::capture(game);
        match advance(screen, action, game) {
            Ok(next) => {
                if next != screen && matches!(next, Screen::Win | Screen::GameOver) {
                    log_final_board(game);
                }
                screen = next;
                to_render = GameRenderState::capture(game);
            }
            Err(err) => {
                error!(%err, ?action, "action failed");
                to_render.error = Some(err.to_string());
            }
        }

        if screen == Screen::Exit {
            break;
        }
        render_game(terminal, &to_render)?;
    }

    Ok(())
}

fn log_final_board(game: &GameField<StdRng>) {
    match serde_json::to_string(game.grid()) {
        Ok(board) => info!(
            score = game.score(),
            target = game.target(),
            outcome = ?game.outcome(),
            %board,
            "game finished"
        ),
        Err(err) => error!(%err, "could not serialize final board"),
    }
}
