use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace, warn};

use crate::app::prefs::Layout;
use crate::basic::board::random_free_spot;
use crate::basic::{Dir, GridDim, GridPoint};
use crate::snake::{self, Collision, Snake};

/// What happened during one tick
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Tick {
    Moved,
    Ate,
    Crashed(Collision),
    /// The snake covers every cell, nowhere to put food
    BoardFull,
}

impl Tick {
    pub fn is_game_over(self) -> bool {
        matches!(self, Tick::Crashed(_) | Tick::BoardFull)
    }
}

/// One snake and one piece of food on a layout's board
pub struct Game<R: Rng = StdRng> {
    layout: Layout,
    snake: Snake,
    food: Option<GridPoint>,
    rng: R,
}

impl Game<StdRng> {
    pub fn new(layout: Layout, seed: Option<u64>) -> Result<Self, snake::BuilderError> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(layout, rng)
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(layout: Layout, rng: R) -> Result<Self, snake::BuilderError> {
        let snake = Self::initial_snake(layout)?;
        let mut game = Self { layout, snake, food: None, rng };
        game.spawn_food();
        Ok(game)
    }

    fn initial_snake(layout: Layout) -> Result<Snake, snake::BuilderError> {
        snake::Builder::default()
            .cells(layout.initial_cells())
            .dir(layout.initial_dir())
            .board_dim(layout.board_dim())
            .build()
    }

    pub fn restart(&mut self) -> Result<(), snake::BuilderError> {
        self.snake = Self::initial_snake(self.layout)?;
        self.spawn_food();
        info!(len = self.snake.len(), "new game");
        Ok(())
    }

    fn spawn_food(&mut self) {
        self.food = random_free_spot(
            self.snake.body.occupied(),
            self.layout.board_dim(),
            &mut self.rng,
        );
        match self.food {
            Some(pos) => debug!(?pos, "spawned food"),
            None => warn!("no space left for food"),
        }
    }

    pub fn change_dir(&mut self, dir: Dir) -> bool {
        self.snake.change_dir(dir)
    }

    /// Advance the snake by one cell, respawning food if it was eaten
    pub fn tick(&mut self) -> Tick {
        let food = match self.food {
            Some(food) => food,
            None => return Tick::BoardFull,
        };

        match self.snake.step(food) {
            Err(collision) => {
                info!(at = ?collision.at, len = collision.len, "game over");
                Tick::Crashed(collision)
            }
            Ok(step) if step.ate_food => {
                debug!(len = step.len, head = ?step.head, "ate food");
                self.spawn_food();
                match self.food {
                    Some(_) => Tick::Ate,
                    None => Tick::BoardFull,
                }
            }
            Ok(step) => {
                trace!(head = ?step.head, vacated = ?step.vacated, "moved");
                Tick::Moved
            }
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<GridPoint> {
        self.food
    }

    pub fn board_dim(&self) -> GridDim {
        self.layout.board_dim()
    }

    #[cfg(test)]
    pub fn set_food(&mut self, food: Option<GridPoint>) {
        self.food = food;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(layout: Layout) -> Game {
        Game::new(layout, Some(11)).expect("valid layout")
    }

    #[test]
    fn test_new_game_has_free_food() {
        for layout in [Layout::Compact, Layout::Expanded] {
            let game = game(layout);
            let food = game.food().expect("food spawned");
            assert!(game.board_dim().contains(food));
            assert!(!game.snake().body.contains(food));
            assert_eq!(game.snake().len(), 3);
        }
    }

    #[test]
    fn test_tick_moves_and_eats() {
        let mut game = game(Layout::Expanded);
        // head starts at (15, 2) going right
        game.set_food(Some(GridPoint::new(0, 0)));
        assert_eq!(game.tick(), Tick::Moved);
        assert_eq!(game.snake().head(), GridPoint::new(15, 3));
        assert_eq!(game.snake().len(), 3);

        game.set_food(Some(GridPoint::new(15, 4)));
        assert_eq!(game.tick(), Tick::Ate);
        assert_eq!(game.snake().len(), 4);
        let food = game.food().expect("new food");
        assert!(!game.snake().body.contains(food));
    }

    #[test]
    fn test_reverse_ignored_during_play() {
        let mut game = game(Layout::Compact);
        game.set_food(Some(GridPoint::new(24, 0)));
        // compact snake moves down
        assert!(!game.change_dir(Dir::U));
        assert_eq!(game.tick(), Tick::Moved);
        assert_eq!(game.snake().head(), GridPoint::new(3, 7));
    }

    #[test]
    fn test_crash_and_restart() {
        let mut game = game(Layout::Expanded);
        // grow to five by feeding along the row
        for col in 3..5 {
            game.set_food(Some(GridPoint::new(15, col)));
            assert_eq!(game.tick(), Tick::Ate);
        }
        game.set_food(Some(GridPoint::new(0, 0)));
        assert_eq!(game.snake().len(), 5);

        for dir in [Dir::D, Dir::L] {
            game.change_dir(dir);
            assert_eq!(game.tick(), Tick::Moved);
        }
        game.change_dir(Dir::U);
        let tick = game.tick();
        assert!(tick.is_game_over());
        assert!(matches!(tick, Tick::Crashed(Collision { len: 5, .. })));

        game.restart().unwrap();
        assert_eq!(game.snake().len(), 3);
        assert_eq!(game.snake().dir(), Dir::R);
        assert!(game.food().is_some());
    }

    #[test]
    fn test_board_full_without_food() {
        let mut game = game(Layout::Compact);
        game.set_food(None);
        assert_eq!(game.tick(), Tick::BoardFull);
        assert!(Tick::BoardFull.is_game_over());
        assert!(!Tick::Ate.is_game_over());
    }

    #[test]
    fn test_seed_reproduces_food() {
        let a = game(Layout::Expanded);
        let b = game(Layout::Expanded);
        assert_eq!(a.food(), b.food());
    }
}
