//! Native frontend
//!
//! A winit window presenting the software [`FrameBuffer`] through softbuffer,
//! with rodio for sound. The event loop wakes every [`FRAME_DELAY_MS`] and
//! runs exactly one simulation tick per wake:
//! poll input -> tick -> draw -> audio -> present.

pub mod keyboard;

use std::num::NonZeroU32;
use std::rc::Rc;
use std::time::{Duration, Instant};

use serde::Serialize;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

pub use keyboard::KeyboardState;

use crate::Settings;
use crate::audio::AudioDispatcher;
use crate::audio::backend::RodioAudio;
use crate::consts::{FRAME_DELAY_MS, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::InitError;
use crate::input::{InputMapper, InputSource};
use crate::renderer::{FrameBuffer, draw_frame};
use crate::sim::{GameState, tick};

const WINDOW_TITLE: &str = "Asteroids";

/// How a run ended, logged as JSON on exit
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub seed: u64,
    pub score: u32,
    pub level: u32,
    pub lives: u32,
    pub ticks: u64,
    pub frames: u64,
    pub game_over: bool,
}

/// Something that can put a finished [`FrameBuffer`] on screen
trait Present {
    fn present(&mut self, frame: &FrameBuffer);
}

/// Whether the run is over; a finished run shows its last frame first
fn finish_if_over(
    state: &GameState,
    frame: &FrameBuffer,
    screen: Option<&mut impl Present>,
) -> bool {
    if !state.is_game_over() {
        return false;
    }
    if let Some(screen) = screen {
        screen.present(frame);
    }
    true
}

/// Window plus the surface we blit into
struct Display {
    window: Rc<Window>,
    surface: softbuffer::Surface<Rc<Window>, Rc<Window>>,
    size: PhysicalSize<u32>,
}

impl Display {
    fn open(event_loop: &ActiveEventLoop) -> Result<Self, InitError> {
        let attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(SCREEN_WIDTH, SCREEN_HEIGHT))
            .with_resizable(false);
        let window = Rc::new(event_loop.create_window(attrs)?);

        let context = softbuffer::Context::new(Rc::clone(&window))?;
        let surface = softbuffer::Surface::new(&context, Rc::clone(&window))?;
        let mut display = Self {
            window,
            surface,
            size: PhysicalSize::new(0, 0),
        };
        let size = display.window.inner_size();
        display.resize(size);

        log::info!(
            "Window: {}x{} physical, scale={}",
            size.width,
            size.height,
            display.window.scale_factor()
        );
        Ok(display)
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        self.size = size;
        let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
            return;
        };
        if let Err(e) = self.surface.resize(w, h) {
            log::warn!("Surface resize failed: {}", e);
        }
    }
}

impl Present for Display {
    /// Scale `frame` to the window and show it
    fn present(&mut self, frame: &FrameBuffer) {
        let (w, h) = (self.size.width as usize, self.size.height as usize);
        if w == 0 || h == 0 {
            return;
        }
        let mut buffer = match self.surface.buffer_mut() {
            Ok(buffer) => buffer,
            Err(e) => {
                log::warn!("Failed to acquire frame: {}", e);
                return;
            }
        };
        frame.scale_into(&mut buffer, w, h);
        if let Err(e) = buffer.present() {
            log::warn!("Present failed: {}", e);
        }
    }
}

struct App {
    state: GameState,
    mapper: InputMapper,
    keys: KeyboardState,
    audio: AudioDispatcher<RodioAudio>,
    frame: FrameBuffer,
    display: Option<Display>,
    started: Instant,
    next_frame: Instant,
    /// Fatal error raised inside the event loop
    error: Option<InitError>,
}

impl App {
    fn new(seed: u64, audio: RodioAudio) -> Self {
        let now = Instant::now();
        Self {
            state: GameState::new(seed),
            mapper: InputMapper::new(),
            keys: KeyboardState::new(),
            audio: AudioDispatcher::new(audio),
            frame: FrameBuffer::new(SCREEN_WIDTH as usize, SCREEN_HEIGHT as usize),
            display: None,
            started: now,
            next_frame: now,
            error: None,
        }
    }

    /// One frame: input -> tick -> draw -> audio
    fn step(&mut self) {
        let now_ms = self.started.elapsed().as_millis() as u64;
        let input = self.mapper.map(&self.keys, now_ms);
        tick(&mut self.state, &input);
        draw_frame(&mut self.frame, &self.state);
        self.audio.dispatch(&self.state.events, input.thrust);
    }

    fn summary(&self) -> RunSummary {
        RunSummary {
            seed: self.state.seed,
            score: self.state.score,
            level: self.state.level,
            lives: self.state.lives,
            ticks: self.state.time_ticks,
            frames: self.frame.frames(),
            game_over: self.state.is_game_over(),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.display.is_some() {
            return;
        }
        match Display::open(event_loop) {
            Ok(display) => {
                self.display = Some(display);
                self.next_frame = Instant::now();
            }
            Err(e) => {
                log::error!("{}", e);
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.keys.request_quit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } => self.keys.handle_key(code, state),
            WindowEvent::Focused(false) => self.keys.release_all(),
            WindowEvent::Resized(size) => {
                if let Some(display) = self.display.as_mut() {
                    display.resize(size);
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(display) = self.display.as_mut() {
                    display.present(&self.frame);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.display.is_none() {
            return;
        }
        if self.keys.poll_quit() {
            log::info!("Quit requested");
            event_loop.exit();
            return;
        }

        let now = Instant::now();
        if now >= self.next_frame {
            self.step();
            if let Some(display) = &self.display {
                display.window.request_redraw();
            }
            self.next_frame = now + Duration::from_millis(FRAME_DELAY_MS);
        }

        // The redraw request won't be serviced after exit
        if finish_if_over(&self.state, &self.frame, self.display.as_mut()) {
            event_loop.exit();
            return;
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }
}

/// Open the audio device and window, then play until quit or game over
pub fn run(settings: &Settings) -> Result<RunSummary, InitError> {
    let seed = settings.resolve_seed();
    log::info!("Game initialized with seed: {}", seed);

    let audio = RodioAudio::open(settings, seed)?;
    let event_loop = EventLoop::new()?;
    let mut app = App::new(seed, audio);
    event_loop.run_app(&mut app)?;

    app.audio.silence();
    if let Some(e) = app.error.take() {
        return Err(e);
    }
    Ok(app.summary())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;

    #[derive(Default)]
    struct CountingScreen {
        presented: u32,
    }

    impl Present for CountingScreen {
        fn present(&mut self, _frame: &FrameBuffer) {
            self.presented += 1;
        }
    }

    #[test]
    fn test_running_game_keeps_going() {
        let state = GameState::empty(1);
        let frame = FrameBuffer::new(4, 4);
        let mut screen = CountingScreen::default();
        assert!(!finish_if_over(&state, &frame, Some(&mut screen)));
        assert_eq!(screen.presented, 0);
    }

    #[test]
    fn test_game_over_presents_final_frame() {
        let mut state = GameState::empty(1);
        state.phase = GamePhase::GameOver;
        let frame = FrameBuffer::new(4, 4);
        let mut screen = CountingScreen::default();
        assert!(finish_if_over(&state, &frame, Some(&mut screen)));
        assert_eq!(screen.presented, 1);
        assert!(finish_if_over(&state, &frame, None::<&mut CountingScreen>));
    }
}
