use crate::{hud::Theme, prelude::*};

const TEXT_SIZE: f32 = 16.0;

pub struct GameRender {
    geng: Geng,
    pub theme: Theme,
    /// Where the score is written.
    pub score_anchor: Anchor,
    /// Where the FPS counter is written.
    pub fps_anchor: Anchor,
}

impl GameRender {
    pub fn new(geng: &Geng) -> Self {
        Self {
            geng: geng.clone(),
            theme: Theme::dracula(),
            score_anchor: Anchor::pixels(vec2(8.0, 8.0), Corner::TopLeft, Some(Corner::TopLeft)),
            fps_anchor: Anchor::pixels(vec2::ZERO, Corner::TopRight, Some(Corner::TopRight)),
        }
    }

    pub fn draw(&self, model: &Model, fps: f64, framebuffer: &mut ugli::Framebuffer) {
        ugli::clear(framebuffer, Some(self.theme.background), None, None);

        let window = model.window;
        for (_, mole) in &model.moles {
            self.draw_mole(mole, &window, model.show_collision_boxes, framebuffer);
        }

        let score = format!("Score: {}", model.score);
        self.draw_text(&score, &self.score_anchor, self.theme.foreground, &window, framebuffer);

        let fps_color = self.theme.fps_color(fps, model.config.max_fps as f64);
        let fps = format!("{:.0} FPS", fps);
        self.draw_text(&fps, &self.fps_anchor, fps_color, &window, framebuffer);

        if model.is_paused {
            let center = Anchor::fraction(vec2(0.5, 0.5), Corner::TopLeft, None);
            self.draw_text("PAUSED", &center, self.theme.yellow, &window, framebuffer);
        }
    }

    fn draw_mole(
        &self,
        mole: &Mole,
        window: &ScreenBox,
        show_collision_box: bool,
        framebuffer: &mut ugli::Framebuffer,
    ) {
        let target = to_pixels(&mole.collision_box(window), window);
        let radius = target.width().min(target.height()) / 2.0;
        self.geng.draw2d().draw2d(
            framebuffer,
            &geng::PixelPerfectCamera,
            &draw2d::Ellipse::circle(target.center(), radius, self.theme.mole),
        );

        if show_collision_box {
            let mut color = self.theme.red;
            color.a = 0.3;
            self.geng.draw2d().draw2d(
                framebuffer,
                &geng::PixelPerfectCamera,
                &draw2d::Quad::new(target, color),
            );
        }
    }

    /// Write text with its `self_corner` at the anchor point.
    fn draw_text(
        &self,
        text: &str,
        anchor: &Anchor,
        color: Color,
        window: &ScreenBox,
        framebuffer: &mut ugli::Framebuffer,
    ) {
        let position = anchor.resolve(window);
        let position = vec2(position.x, window.bottom() - position.y);
        let align = match anchor.self_corner {
            Some(corner) => {
                let bits = corner.multiplier();
                vec2(geng::TextAlign(bits.x), geng::TextAlign(1.0 - bits.y))
            }
            None => vec2(geng::TextAlign::CENTER, geng::TextAlign(0.5)),
        };
        self.geng.default_font().draw(
            framebuffer,
            &geng::PixelPerfectCamera,
            text,
            align,
            mat3::translate(position) * mat3::scale_uniform(TEXT_SIZE),
            color,
        );
    }
}

/// Convert a box in screen coordinates (y down) into framebuffer pixels (y up).
pub fn to_pixels(target: &ScreenBox, window: &ScreenBox) -> Aabb2<f32> {
    Aabb2 {
        min: vec2(target.left(), window.bottom() - target.bottom()),
        max: vec2(target.right(), window.bottom() - target.top()),
    }
}
