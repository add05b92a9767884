use std::collections::HashMap;

use ggez::conf::{WindowMode, WindowSetup};
use ggez::event::{EventHandler, MouseButton};
use ggez::graphics::{Canvas, DrawParam, Mesh};
use ggez::input::keyboard::KeyInput;
use ggez::Context;
use tracing::{debug, info};

use crate::app::control::{Control, State};
use crate::app::game::{Game, Tick};
use crate::app::geometry::{Button, Geometry};
use crate::app::keyboard_control::{action_for_key, Action};
use crate::app::message::{Anchor, Message, MessageID};
use crate::app::palette::Palette;
use crate::basic::Point;
use crate::error::{Error, ErrorConversion, Result};

pub use prefs::{Layout, Prefs};

pub mod control;
pub mod game;
pub mod geometry;
pub mod keyboard_control;
pub mod message;
pub mod palette;
pub mod prefs;
pub mod rendering;

pub struct App {
    control: Control,
    game: Game,
    prefs: Prefs,
    geometry: Geometry,
    palette: Palette,
    messages: HashMap<MessageID, Message>,

    /// Only rebuilt when the grid is toggled
    board_mesh: Option<Mesh>,
    /// The snake crashed (as opposed to filling the board)
    crashed: bool,
}

impl App {
    pub fn new(prefs: Prefs) -> Result<Self> {
        let game = Game::new(prefs.layout, prefs.seed)
            .map_err(Error::from)
            .with_trace_step("App::new")?;

        let mut app = Self {
            control: Control::new(prefs.tick, prefs.max_catch_up),
            game,
            geometry: Geometry::new(prefs.layout),
            prefs,
            palette: Palette::dark(),
            messages: HashMap::new(),
            board_mesh: None,
            crashed: false,
        };
        app.update_length_message();
        Ok(app)
    }

    pub fn wm(&self) -> WindowMode {
        let Point { x, y } = self.geometry.window_dim;
        WindowMode::default().dimensions(x, y).resizable(false)
    }

    pub fn ws(&self) -> WindowSetup {
        WindowSetup::default().title("Snake").vsync(true)
    }

    fn restart(&mut self) -> Result {
        self.game.restart().map_err(Error::from).with_trace_step("App::restart")?;
        self.messages.remove(&MessageID::GameOver);
        self.crashed = false;
        self.control.ready();
        self.update_length_message();
        Ok(())
    }

    fn start(&mut self) -> Result {
        match self.control.state() {
            State::Playing => {}
            State::GameOver => {
                self.restart()?;
                self.control.play();
            }
            State::Ready | State::Paused => {
                info!("start");
                self.control.play();
            }
        }
        Ok(())
    }

    /// Apply a player action, returns false if the app should quit
    pub fn apply(&mut self, action: Action) -> Result<bool> {
        debug!(?action, state = ?self.control.state());
        match action {
            Action::Turn(dir) => {
                // turns are only meaningful while the snake can move
                if matches!(self.control.state(), State::Playing | State::Ready) {
                    self.game.change_dir(dir);
                }
            }
            Action::Start => self.start()?,
            Action::Stop => {
                if self.control.state() == State::Playing {
                    info!("stop");
                    self.control.pause();
                    self.display_notification("Paused");
                }
            }
            Action::StartStop => match self.control.state() {
                State::Playing => return self.apply(Action::Stop),
                _ => self.start()?,
            },
            Action::Reset => {
                info!("reset");
                self.restart()?;
            }
            Action::ToggleGrid => {
                self.prefs.draw_grid = !self.prefs.draw_grid;
                self.board_mesh = None;
                let text = if self.prefs.draw_grid { "Grid on" } else { "Grid off" };
                self.display_notification(text);
            }
            Action::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Run every tick owed since the last update
    fn advance(&mut self) {
        while self.control.can_update() {
            let tick = self.game.tick();
            if tick.is_game_over() {
                if let Tick::Crashed(collision) = tick {
                    debug!(%collision);
                }
                self.crashed = matches!(tick, Tick::Crashed(_));
                self.game_over();
                break;
            }
            if tick == Tick::Ate {
                self.update_length_message();
            }
        }
    }

    fn game_over(&mut self) {
        self.control.game_over();
        let snake = self.game.snake();
        let len = snake.len();
        info!(len, head = ?snake.head(), dir = ?snake.dir(), "final length");
        let headline = if self.crashed { "Game over" } else { "Board full" };
        self.messages.insert(
            MessageID::GameOver,
            Message::new(
                format!("{}\nLength: {}\n\nEnter to play again", headline, len),
                Anchor::Center(self.geometry.board_center()),
                self.palette.text_color,
                None,
            )
            .font_size(36.),
        );
    }

    fn update_length_message(&mut self) {
        self.messages.insert(
            MessageID::Length,
            Message::new(
                format!("Length: {}", self.game.snake().len()),
                Anchor::TopLeft(self.geometry.status_pos()),
                self.palette.text_color,
                None,
            ),
        );
    }

    /// Display a notification message in the top-right
    /// corner with limited duration, overwrite any
    /// previous notification message
    fn display_notification<S: ToString>(&mut self, text: S) {
        let Point { x: right, .. } = self.geometry.board_offset + self.geometry.board_size;
        let anchor = Anchor::TopRight(Point { x: right, y: self.geometry.status_pos().y });
        self.messages.insert(
            MessageID::Notification,
            Message::new(
                text.to_string(),
                anchor,
                self.palette.text_color,
                Some(self.prefs.message_duration),
            ),
        );
    }

    fn button_enabled(&self, button: &Button) -> bool {
        let state = self.control.state();
        match button.action {
            Action::Start => state != State::Playing,
            Action::Stop => state == State::Playing,
            Action::Turn(_) => matches!(state, State::Playing | State::Ready),
            _ => true,
        }
    }

    fn draw_messages(&mut self, canvas: &mut Canvas) {
        // draw messages and remove the ones that have
        // outlived their durations
        let draw_order = [MessageID::Length, MessageID::Notification, MessageID::GameOver];
        for id in draw_order {
            if let Some(message) = self.messages.get(&id) {
                if !message.draw(canvas) {
                    self.messages.remove(&id);
                }
            }
        }
    }
}

impl EventHandler<Error> for App {
    fn update(&mut self, _ctx: &mut Context) -> Result {
        self.advance();
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> Result {
        let mut canvas = Canvas::from_frame(ctx, self.palette.background_color);
        let board_param = DrawParam::default().dest(self.geometry.board_offset);

        if self.board_mesh.is_none() {
            self.board_mesh = Some(rendering::board_mesh(
                self.game.board_dim(),
                &self.geometry,
                &self.palette,
                self.prefs.draw_grid,
                ctx,
            )?);
        }
        if let Some(mesh) = &self.board_mesh {
            canvas.draw(mesh, board_param);
        }

        let game_mesh = rendering::game_mesh(&self.game, &self.geometry, &self.palette, self.crashed, ctx)?;
        canvas.draw(&game_mesh, board_param);

        if self.control.state() == State::GameOver {
            let overlay = rendering::overlay_mesh(&self.geometry, &self.palette, ctx)?;
            canvas.draw(&overlay, DrawParam::default());
        }

        rendering::draw_buttons(
            &self.geometry.buttons,
            |button| self.button_enabled(button),
            &self.palette,
            &mut canvas,
            ctx,
        )?;

        self.draw_messages(&mut canvas);

        canvas.finish(ctx).map_err(Error::from).with_trace_step("App::draw")
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, repeated: bool) -> Result {
        if repeated {
            return Ok(());
        }
        if let Some(action) = input.keycode.and_then(action_for_key) {
            if !self.apply(action)? {
                ctx.request_quit();
            }
        }
        Ok(())
    }

    fn mouse_button_down_event(&mut self, ctx: &mut Context, button: MouseButton, x: f32, y: f32) -> Result {
        if button != MouseButton::Left {
            return Ok(());
        }
        let action = self.geometry.button_at(Point { x, y }).map(|button| button.action);
        if let Some(action) = action {
            if !self.apply(action)? {
                ctx.request_quit();
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::{Dir, GridPoint};

    fn app(layout: Layout) -> App {
        App::new(Prefs::default().layout(layout).seed(Some(5))).expect("valid prefs")
    }

    fn length_text(app: &App) -> &str {
        &app.messages[&MessageID::Length].text
    }

    #[test]
    fn test_start_stop_reset() {
        let mut app = app(Layout::Expanded);
        assert_eq!(app.control.state(), State::Ready);
        assert_eq!(length_text(&app), "Length: 3");

        assert!(app.apply(Action::StartStop).unwrap());
        assert_eq!(app.control.state(), State::Playing);
        assert!(app.apply(Action::StartStop).unwrap());
        assert_eq!(app.control.state(), State::Paused);
        assert!(app.messages.contains_key(&MessageID::Notification));

        app.apply(Action::Start).unwrap();
        assert_eq!(app.control.state(), State::Playing);
        app.apply(Action::Reset).unwrap();
        assert_eq!(app.control.state(), State::Ready);
        assert_eq!(app.game.snake().head(), GridPoint::new(15, 2));
    }

    #[test]
    fn test_turn_rejected_when_reversing() {
        let mut app = app(Layout::Expanded);
        app.apply(Action::Turn(Dir::L)).unwrap();
        assert_eq!(app.game.snake().dir(), Dir::R);
        app.apply(Action::Turn(Dir::U)).unwrap();
        assert_eq!(app.game.snake().dir(), Dir::U);
    }

    #[test]
    fn test_game_over_and_replay() {
        let mut app = app(Layout::Expanded);
        app.control.play();
        app.game.set_food(None);
        app.control.game_over();
        app.game_over();
        assert!(app.messages[&MessageID::GameOver].text.starts_with("Board full"));

        // turns are ignored once the game is over
        app.apply(Action::Turn(Dir::U)).unwrap();
        assert_eq!(app.game.snake().dir(), Dir::R);

        app.apply(Action::Start).unwrap();
        assert_eq!(app.control.state(), State::Playing);
        assert!(!app.messages.contains_key(&MessageID::GameOver));
        assert!(app.game.food().is_some());
    }

    #[test]
    fn test_toggle_grid_and_quit() {
        let mut app = app(Layout::Compact);
        assert!(app.prefs.draw_grid);
        assert!(app.apply(Action::ToggleGrid).unwrap());
        assert!(!app.prefs.draw_grid);
        assert!(!app.apply(Action::Quit).unwrap());
    }

    #[test]
    fn test_button_states() {
        let mut app = app(Layout::Compact);
        let start = app.geometry.buttons.iter().find(|b| b.action == Action::Start).copied().unwrap();
        let stop = app.geometry.buttons.iter().find(|b| b.action == Action::Stop).copied().unwrap();
        assert!(app.button_enabled(&start));
        assert!(!app.button_enabled(&stop));

        app.apply(Action::Start).unwrap();
        assert!(!app.button_enabled(&start));
        assert!(app.button_enabled(&stop));
    }
}
