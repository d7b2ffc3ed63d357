use geng::MouseButton;

use crate::{controls::Controls, hud::FrameTimes, prelude::*, render::GameRender};

/// Most ticks simulated in a single update, so a long stall does not freeze the game.
const MAX_TICKS_PER_UPDATE: usize = 5;

pub struct Game {
    render: GameRender,
    model: Model,
    controls: Controls<Model>,
    frame_times: FrameTimes,
    /// The window as last reported to the model.
    window: ScreenBox,
    cursor_pos: vec2<f64>,
    tick_accumulator: f64,
}

impl Game {
    pub fn new(geng: &Geng, config: Config) -> Self {
        let model = Model::new(config);
        Self {
            render: GameRender::new(geng),
            window: model.window,
            model,
            controls: Controls::default_for_model(),
            frame_times: FrameTimes::new(),
            cursor_pos: vec2::ZERO,
            tick_accumulator: 0.0,
        }
    }

    /// Convert a window position (y up) into screen coordinates (y down).
    fn screen_position(&self, position: vec2<f64>) -> vec2<Coord> {
        let position = position.as_f32();
        vec2(position.x, self.window.bottom() - position.y)
    }

    fn click(&mut self, position: vec2<f64>) {
        let position = self.screen_position(position);
        self.model.push_event(WorldEvent::Click(position));
    }
}

impl geng::State for Game {
    fn draw(&mut self, framebuffer: &mut ugli::Framebuffer) {
        let size = framebuffer.size().as_f32();
        let window = ScreenBox::window(size.x, size.y);
        if window != self.window {
            self.window = window;
            self.model.push_event(WorldEvent::Resize(window));
        }

        self.render.draw(&self.model, self.frame_times.fps(), framebuffer);
    }

    fn handle_event(&mut self, event: geng::Event) {
        match event {
            geng::Event::CursorMove { position } => {
                self.cursor_pos = position;
            }
            geng::Event::MouseRelease {
                button: MouseButton::Left,
            } => {
                self.click(self.cursor_pos);
            }
            geng::Event::TouchEnd(touch) => {
                self.click(touch.position);
            }
            geng::Event::KeyPress { key } => {
                self.controls.key_press(key, &mut self.model);
            }
            geng::Event::KeyRelease { key } => {
                self.controls.key_release(key, &mut self.model);
            }
            _ => {}
        }
    }

    fn update(&mut self, delta_time: f64) {
        self.frame_times.record(delta_time);

        let tick_duration = 1.0 / self.model.config.ticks_per_second as f64;
        self.tick_accumulator += delta_time;
        let mut ticks = 0;
        while self.tick_accumulator >= tick_duration {
            self.tick_accumulator -= tick_duration;
            self.model.tick();
            ticks += 1;
            if ticks == MAX_TICKS_PER_UPDATE {
                log::debug!("Dropping {:.3}s of simulation", self.tick_accumulator);
                self.tick_accumulator = 0.0;
                break;
            }
        }
    }
}
