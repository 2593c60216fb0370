#[macro_use]
extern crate lazy_static;

use ggez::conf::{WindowMode, WindowSetup};
use ggez::event::run;
use ggez::ContextBuilder;
use log::info;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use tile_snake::error::{ErrorConversion, Result};
use tile_snake::prefs::Prefs;

use crate::app::App;

mod app;

fn main() -> Result {
    let prefs = Prefs::default();

    if let Err(e) = TermLogger::init(prefs.log_level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto) {
        eprintln!("logging disabled: {}", e);
    }

    let wm = WindowMode::default()
        .dimensions(prefs.window_width, prefs.window_height)
        .resizable(true);
    let ws = WindowSetup::default().title("Tile Snake").vsync(true);

    let app = App::new(prefs).with_trace_step("main")?;

    let (ctx, event_loop) = ContextBuilder::new("tile_snake", "tile_snake")
        .window_mode(wm)
        .window_setup(ws)
        .build()?;

    info!("window open, starting event loop");
    run(ctx, event_loop, app)
}
