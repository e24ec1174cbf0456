use std::f64::consts::TAU;
use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, RenderFrame, Renderer, TextHAlign, TextVAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
}

/// Offscreen Cairo + Pango backend for one chart surface.
///
/// `clear` repaints the whole surface with the clear color; `render` paints
/// on top of whatever is there.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    pub fn write_png(&self, path: &Path) -> ChartResult<()> {
        let mut file = File::create(path).map_err(|err| {
            ChartError::InvalidData(format!("failed to create `{}`: {err}", path.display()))
        })?;
        self.surface.write_to_png(&mut file).map_err(|err| {
            ChartError::InvalidData(format!("failed to write `{}`: {err}", path.display()))
        })
    }

    fn context(&self) -> ChartResult<Context> {
        Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))
    }

    fn draw(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        context.translate(frame.plot.origin_x, frame.plot.origin_y);
        let mut stats = CairoRenderStats::default();

        for layer in &frame.layers {
            for line in &layer.lines {
                apply_color(context, line.color);
                context.set_line_width(line.stroke_width);
                context.move_to(line.x1, line.y1);
                context.line_to(line.x2, line.y2);
                context
                    .stroke()
                    .map_err(|err| map_backend_error("failed to stroke line", err))?;
                stats.lines_drawn += 1;
            }

            for rect in &layer.rects {
                apply_color(context, rect.fill_color);
                context.rectangle(rect.x, rect.y, rect.width, rect.height);
                context
                    .fill()
                    .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
                stats.rects_drawn += 1;
            }

            for circle in &layer.circles {
                apply_color(context, circle.fill_color);
                context.new_sub_path();
                context.arc(circle.cx, circle.cy, circle.radius, 0.0, TAU);
                context
                    .fill()
                    .map_err(|err| map_backend_error("failed to fill circle", err))?;
                stats.circles_drawn += 1;
            }

            for text in &layer.texts {
                let layout = pangocairo::functions::create_layout(context);
                let font_description =
                    FontDescription::from_string(&format!("Sans {}px", text.font_size_px));
                layout.set_font_description(Some(&font_description));
                layout.set_text(&text.text);

                let (text_width, text_height) = layout.pixel_size();
                let x = match text.h_align {
                    TextHAlign::Left => text.x,
                    TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
                    TextHAlign::Right => text.x - f64::from(text_width),
                };
                let y = match text.v_align {
                    TextVAlign::Top => text.y,
                    TextVAlign::Middle => text.y - f64::from(text_height) / 2.0,
                    TextVAlign::Baseline => {
                        text.y - f64::from(layout.baseline()) / f64::from(pango::SCALE)
                    }
                };

                apply_color(context, text.color);
                context.move_to(x, y);
                pangocairo::functions::show_layout(context, &layout);
                stats.texts_drawn += 1;
            }
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn clear(&mut self) -> ChartResult<()> {
        self.clear_color.validate()?;
        let context = self.context()?;
        apply_color(&context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;
        self.last_stats = CairoRenderStats::default();
        Ok(())
    }

    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        let context = self.context()?;
        self.draw(&context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
