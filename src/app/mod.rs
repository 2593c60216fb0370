use ggez::event::EventHandler;
use ggez::graphics::{Canvas, DrawParam, Mesh};
use ggez::input::keyboard::KeyInput;
use ggez::{Context, GameError, GameResult};
use log::{debug, error, info};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tile_snake::error::{ErrorConversion, Result};
use tile_snake::food::SpawnError;
use tile_snake::grid::levels::Level;
use tile_snake::prefs::Prefs;
use tile_snake::snake::{Builder, Simulation, State as SnakeState, StepResult};

use crate::app::control::{Control, State};
use crate::app::keyboard_control::{Action, Controls};
use crate::app::message::{Message, MessageID, Position};
use crate::app::palette::Palette;
use crate::app::rendering::{food_mesh, grid_mesh, snake_mesh, TileLayout};

mod control;
mod keyboard_control;
mod message;
mod palette;
mod rendering;

const NOTIFICATION_DURATION: Duration = Duration::from_secs(2);

fn new_simulation(level: Level, seed: Option<u64>) -> Result<Simulation> {
    let grid = level.grid()?;
    let mut builder = Builder::from_grid(&grid);
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }
    Ok(builder.build(grid)?)
}

pub struct App {
    prefs: Prefs,
    level: Level,
    sim: Simulation,

    control: Control,
    controls: Controls,

    palette: Palette,
    // rebuilt when the window size or the grid changes
    grid_mesh: Option<(TileLayout, Mesh)>,
    messages: HashMap<MessageID, Message>,
}

impl App {
    pub fn new(prefs: Prefs) -> Result<Self> {
        let sim = new_simulation(prefs.level, prefs.seed).with_trace_step("App::new")?;
        info!("level {}", prefs.level.name());
        Ok(Self {
            level: prefs.level,
            sim,
            control: Control::new(prefs.tick, prefs.max_catch_up_ticks),
            controls: Controls::default(),
            palette: Palette::dark(),
            grid_mesh: None,
            messages: HashMap::new(),
            prefs,
        })
    }

    fn notify(&mut self, text: String) {
        let message = Message::default(
            text,
            Position::TopLeft,
            self.palette.text_color,
            Some(NOTIFICATION_DURATION),
        );
        self.messages.insert(MessageID::Notification, message);
    }

    fn set_overlay(&mut self, text: Option<&str>) {
        match text {
            Some(text) => {
                let message = Message::overlay(text, self.palette.text_color, self.palette.shadow_color);
                self.messages.insert(MessageID::Overlay, message);
            }
            None => {
                self.messages.remove(&MessageID::Overlay);
            }
        }
    }

    /// Back to the level's spawn markers, same grid
    fn restart(&mut self) -> Result {
        let markers = {
            let grid = self.sim.grid();
            grid.player_start().zip(grid.food_start())
        };
        match markers {
            Some((head, food)) => self.sim.reset(head, food)?,
            None => self.sim = new_simulation(self.level, self.prefs.seed).with_trace_step("App::restart")?,
        }
        self.set_overlay(None);
        self.control.play();
        info!("restart");
        Ok(())
    }

    fn load_level(&mut self, level: Level) -> Result {
        self.sim = new_simulation(level, self.prefs.seed).with_trace_step("App::load_level")?;
        self.level = level;
        self.grid_mesh = None;
        self.set_overlay(None);
        self.control.play();
        info!("level {}", level.name());
        self.notify(format!("level: {}", level.name()));
        Ok(())
    }

    fn game_over(&mut self) {
        self.control.game_over();
        let text = match self.sim.state() {
            SnakeState::Filled => "BOARD FILLED",
            _ => "GAME OVER",
        };
        info!("{} after {} ticks, length {}", text, self.sim.ticks(), self.sim.len());
        self.set_overlay(Some(text));
    }

    fn advance(&mut self) {
        for _ in 0..self.control.due_ticks() {
            match self.sim.step() {
                Ok(StepResult::AteFood) => debug!("ate, length {}", self.sim.len()),
                Ok(result) if result.is_terminal() => {
                    self.game_over();
                    break;
                }
                Ok(_) => {}
                Err(SpawnError::BoardFull) => {
                    self.game_over();
                    break;
                }
            }
        }
    }

    fn toggle_pause(&mut self) -> Result {
        match self.control.state() {
            State::GameOver => return self.restart(),
            State::Playing => self.set_overlay(Some("PAUSED")),
            State::Paused => self.set_overlay(None),
        }
        self.control.toggle_pause();
        Ok(())
    }

    fn handle(&mut self, action: Action, ctx: &mut Context) -> Result {
        match action {
            Action::Turn(dir) => {
                if self.control.state() == State::Playing && !self.sim.request_heading(dir) {
                    debug!("ignored reversal to {:?}", dir);
                }
            }
            Action::TogglePause => self.toggle_pause()?,
            Action::Restart => self.restart()?,
            Action::NextLevel => self.load_level(self.level.next())?,
            Action::ToggleGrid => {
                self.prefs.draw_grid_lines = !self.prefs.draw_grid_lines;
                self.grid_mesh = None;
                let state = if self.prefs.draw_grid_lines { "on" } else { "off" };
                self.notify(format!("grid lines {}", state));
            }
            Action::Quit => {
                info!("quit");
                ctx.request_quit();
            }
        }
        Ok(())
    }
}

impl EventHandler<GameError> for App {
    fn update(&mut self, _ctx: &mut Context) -> GameResult {
        self.advance();

        let now = Instant::now();
        self.messages.retain(|_, message| !message.is_expired(now));
        let length = Message::default(
            format!("length {}", self.sim.len()),
            Position::TopLeft,
            self.palette.text_color,
            None,
        );
        if !self.messages.contains_key(&MessageID::Notification) {
            self.messages.insert(MessageID::Length, length);
        } else {
            self.messages.remove(&MessageID::Length);
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = Canvas::from_frame(ctx, self.palette.background_color);

        let (width, height) = ctx.gfx.drawable_size();
        let grid = self.sim.grid();
        let layout = TileLayout::fit(width, height, grid.dim());

        if self.grid_mesh.as_ref().map_or(true, |(cached, _)| *cached != layout) {
            let mesh = grid_mesh(grid, layout, self.prefs.draw_grid_lines, &self.palette, ctx)?;
            self.grid_mesh = Some((layout, mesh));
        }
        if let Some((_, mesh)) = &self.grid_mesh {
            canvas.draw(mesh, DrawParam::default());
        }

        let game_over = self.sim.is_game_over();
        // food disappears with the game
        if !game_over {
            let mesh = food_mesh(self.sim.food(), layout, &self.palette, ctx)?;
            canvas.draw(&mesh, DrawParam::default());
        }
        let crashed = matches!(self.sim.state(), SnakeState::Crashed(_));
        let mesh = snake_mesh(self.sim.body(), crashed, layout, &self.palette, ctx)?;
        canvas.draw(&mesh, DrawParam::default());

        for id in [MessageID::Length, MessageID::Notification, MessageID::Overlay] {
            if let Some(message) = self.messages.get(&id) {
                message.draw(&mut canvas, ctx);
            }
        }

        canvas.finish(ctx)
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, repeated: bool) -> GameResult {
        // holding a key must not queue turns
        if repeated {
            return Ok(());
        }
        let Some(action) = input.keycode.and_then(|key| self.controls.action(key)) else {
            return Ok(());
        };
        self.handle(action, ctx).map_err(|e| {
            error!("{}", e);
            GameError::from(e)
        })
    }
}
