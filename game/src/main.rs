use quickgame::audio::{Clip, Looping, Sound};
use quickgame::graphics::{Color, Font, LineCap, Polygon, Stroke};
use quickgame::input::KeyCode;
use quickgame::{Context, ContextBuilder, Runnable};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;
const PLAYER_SIZE: i32 = 24;

fn main() -> anyhow::Result<()> {
    quickgame::logging::init();

    let builder = ContextBuilder::new()
        .with_title("Booboo")
        .with_size(WIDTH, HEIGHT)
        .with_update_rate(60);
    let (event_loop, engine) = builder.build()?;

    // Both are optional, the demo runs fine without a res/ directory
    let font = engine
        .resources()
        .load_font("font.ttf", 18.0)
        .map_err(|e| log::warn!("no font, text is skipped: {e}"))
        .ok();
    let blip = engine
        .resources()
        .load_sound("blip.wav")
        .map_err(|e| log::warn!("no sound, clicks are silent: {e}"))
        .ok();

    let game = Game {
        player_x: (WIDTH as i32 - PLAYER_SIZE) / 2,
        player_y: (HEIGHT as i32 - PLAYER_SIZE) / 2,
        ball: (40.0, 60.0),
        velocity: (3.0, 2.0),
        marks: Vec::new(),
        angle: 0.0,
        radius: 12,
        font,
        blip,
        clip: None,
    };

    quickgame::runner::run(event_loop, engine, game)?;
    Ok(())
}

struct Game {
    player_x: i32,
    player_y: i32,
    ball: (f64, f64),
    velocity: (f64, f64),
    marks: Vec<(i32, i32)>,
    angle: f64,
    radius: i32,
    font: Option<Font>,
    blip: Option<Sound>,
    clip: Option<Clip>,
}

impl Game {
    fn move_player(&mut self, ctx: &Context) {
        let step = if ctx.is_key_pressed(KeyCode::ShiftLeft) { 6 } else { 3 };
        if ctx.is_key_pressed(KeyCode::ArrowLeft) {
            self.player_x -= step;
        }
        if ctx.is_key_pressed(KeyCode::ArrowRight) {
            self.player_x += step;
        }
        if ctx.is_key_pressed(KeyCode::ArrowUp) {
            self.player_y -= step;
        }
        if ctx.is_key_pressed(KeyCode::ArrowDown) {
            self.player_y += step;
        }
        self.player_x = self.player_x.clamp(0, WIDTH as i32 - PLAYER_SIZE);
        self.player_y = self.player_y.clamp(0, HEIGHT as i32 - PLAYER_SIZE);
    }

    fn bounce_ball(&mut self) {
        let size = (self.radius * 2) as f64;
        self.ball.0 += self.velocity.0;
        self.ball.1 += self.velocity.1;
        if self.ball.0 < 0.0 || self.ball.0 + size > WIDTH as f64 {
            self.velocity.0 = -self.velocity.0;
        }
        if self.ball.1 < 0.0 || self.ball.1 + size > HEIGHT as f64 {
            self.velocity.1 = -self.velocity.1;
        }
        self.ball.0 = self.ball.0.clamp(0.0, WIDTH as f64 - size);
        self.ball.1 = self.ball.1.clamp(0.0, HEIGHT as f64 - size);
    }

    fn play_blip(&mut self, ctx: &Context) {
        let Some(blip) = &self.blip else {
            return;
        };
        match ctx.audio().play(blip, Looping::once()) {
            Ok(clip) => self.clip = Some(clip),
            Err(e) => log::warn!("can't play blip: {e}"),
        }
    }
}

impl Runnable for Game {
    fn tick(&mut self, ctx: &mut Context) {
        if ctx.is_key_just_pressed(KeyCode::Escape) {
            ctx.exit();
            return;
        }
        if ctx.is_key_just_pressed(KeyCode::Space) {
            let rate = if ctx.update_rate() == 60 { 20 } else { 60 };
            log::info!("update rate is now {rate}");
            ctx.set_update_rate(rate);
        }
        if ctx.is_key_just_pressed(KeyCode::KeyC) {
            self.marks.clear();
        }
        if ctx.left_mouse_clicked() {
            self.marks.push((ctx.mouse_x(), ctx.mouse_y()));
            self.play_blip(ctx);
        }
        if ctx.right_mouse_clicked() {
            self.marks.pop();
        }
        self.radius = (self.radius + ctx.mouse_scroll()).clamp(4, 60);

        self.move_player(ctx);
        self.bounce_ball();
        self.angle = (self.angle + 2.0) % 360.0;

        if ctx.tick_count() % 60 == 0 {
            ctx.set_title(format!("Booboo ({} marks)", self.marks.len()));
        }
    }

    fn render(&self, ctx: &mut Context) {
        let g = &mut *ctx.graphics;
        g.clear(Color::from_hex("#1d2b53").unwrap_or(Color::BLACK));

        g.set_stroke(Stroke::default());
        for x in (0..WIDTH as i32).step_by(40) {
            g.draw_line(x, 0, x, HEIGHT as i32, Color::DARK_GRAY);
        }

        g.fill_rect(self.player_x, self.player_y, PLAYER_SIZE, PLAYER_SIZE, Color::WHITE);
        g.draw_rect(self.player_x, self.player_y, PLAYER_SIZE, PLAYER_SIZE, Color::RED);

        let size = self.radius * 2;
        g.fill_circle(self.ball.0 as i32, self.ball.1 as i32, size, size, Color::ORANGE);

        for &(x, y) in &self.marks {
            g.fill_circle(x - 3, y - 3, 7, 7, Color::YELLOW.fade(0.8));
        }

        // a spinning triangle in the corner
        let triangle: Polygon = [(0, -20), (18, 14), (-18, 14)].into_iter().collect();
        g.translate(WIDTH as i32 - 50, 50);
        g.rotate(self.angle);
        g.fill_polygon(&triangle, Color::CYAN);
        g.set_stroke(Stroke::new(3.0).with_cap(LineCap::Round));
        g.draw_polygon(&triangle, Color::BLUE);
        g.reset_transform();
        g.set_stroke(Stroke::default());

        if let Some(font) = &self.font {
            let text = format!(
                "mouse {} {}  scroll radius {}",
                ctx.mouse_x(),
                ctx.mouse_y(),
                self.radius
            );
            ctx.graphics.draw_text(10, HEIGHT as i32 - 12, &text, font, Color::WHITE);
        }
    }
}
