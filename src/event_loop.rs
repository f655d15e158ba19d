use std::time::Instant;

use log::{error, info};
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, KeyboardInput, StartCause, VirtualKeyCode, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

use crate::config::{GameConfig, Variant};
use crate::error::Result;
use crate::game::Game;
use crate::game_input::GameInput;
use crate::render::RenderContext;

/// Opens the window and plays `game` until it ends or the window is closed.
///
/// Never returns once the loop is running; startup failures come back as `Err`.
pub fn run(config: GameConfig, mut game: Game) -> Result<()> {
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(config.title.as_str())
        .with_inner_size(LogicalSize::new(config.width as u32, config.height as u32))
        .with_resizable(false)
        .build(&event_loop)?;

    let mut render = Some(RenderContext::new(&window, &config)?);
    let mut input = GameInput::new();
    let manual = config.variant == Variant::Manual;
    let tick = config.tick_duration();
    let mut next_tick = Instant::now() + tick;
    let mut finished = false;

    info!("{:?} game started, one tick every {:?}", config.variant, tick);

    event_loop.run(move |event, _, control_flow| {
        if finished {
            control_flow.set_exit();
            return;
        }

        match event {
            Event::NewEvents(StartCause::Init) => {
                next_tick = Instant::now() + tick;
                window.request_redraw();
            }

            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    info!("window closed");
                    finished = true;
                    control_flow.set_exit();
                }
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: ElementState::Pressed,
                            virtual_keycode: Some(key),
                            ..
                        },
                    ..
                } => {
                    if key == VirtualKeyCode::Escape {
                        info!("quit requested");
                        finished = true;
                        control_flow.set_exit();
                    } else if manual {
                        input.press(key);
                    }
                }
                _ => {}
            },

            Event::MainEventsCleared => {
                let now = Instant::now();
                if now >= next_tick {
                    let outcome = game.step(input.take());
                    if outcome.game_over {
                        println!("Final Score:  {}", outcome.score);
                        match serde_json::to_string(&game.summary()) {
                            Ok(summary) => info!("game over {}", summary),
                            Err(e) => error!("could not serialize summary: {}", e),
                        }
                        if let Some(ctx) = render.take() {
                            ctx.shutdown();
                        }
                        finished = true;
                        control_flow.set_exit();
                        return;
                    }
                    window.request_redraw();
                    next_tick += tick;
                    if next_tick < now {
                        next_tick = now + tick;
                    }
                }
                control_flow.set_wait_until(next_tick);
            }

            Event::RedrawRequested(_) => {
                if let Some(ctx) = render.as_mut() {
                    if let Err(e) = ctx.render(&game) {
                        error!("render failed: {}", e);
                        finished = true;
                        control_flow.set_exit();
                    }
                }
            }
            _ => {}
        }
    });
}
