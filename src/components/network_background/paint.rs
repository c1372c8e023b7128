use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::config::Palette;
use super::scene::{Circle, Line, Scene};

const LINE_WIDTH: f64 = 1.0;
const CORE_BLUR: f64 = 4.0;

/// Clear the canvas and draw `scene` back to front.
pub fn paint(scene: &Scene, palette: &Palette, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
	clear(ctx, scene.viewport.width, scene.viewport.height);
	draw_lines(&scene.lines, palette, ctx);
	draw_halos(&scene.halos, palette, ctx)?;
	draw_cores(&scene.cores, palette, ctx)
}

/// Erase a `width` x `height` area from the origin.
pub fn clear(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
	ctx.clear_rect(0.0, 0.0, width, height);
}

fn draw_lines(lines: &[Line], palette: &Palette, ctx: &CanvasRenderingContext2d) {
	ctx.set_line_width(LINE_WIDTH);
	for line in lines {
		ctx.set_stroke_style_str(&palette.rgba(line.variant, line.opacity));
		ctx.begin_path();
		ctx.move_to(line.x1, line.y1);
		ctx.line_to(line.x2, line.y2);
		ctx.stroke();
	}
}

fn draw_halos(halos: &[Circle], palette: &Palette, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
	for halo in halos.iter().filter(|h| h.radius > 0.0) {
		let gradient = ctx.create_radial_gradient(halo.x, halo.y, 0.0, halo.x, halo.y, halo.radius)?;
		gradient.add_color_stop(0.0, &palette.rgba(halo.variant, 0.8))?;
		gradient.add_color_stop(1.0, &palette.rgba(halo.variant, 0.0))?;

		ctx.set_global_alpha(halo.opacity);
		ctx.begin_path();
		ctx.arc(halo.x, halo.y, halo.radius, 0.0, 2.0 * PI)?;
		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
		ctx.fill();
	}
	ctx.set_global_alpha(1.0);
	Ok(())
}

fn draw_cores(cores: &[Circle], palette: &Palette, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
	ctx.save();
	ctx.set_shadow_blur(CORE_BLUR);
	for core in cores.iter().filter(|c| c.radius > 0.0) {
		let color = palette.rgba(core.variant, core.opacity);
		ctx.set_shadow_color(&color);
		ctx.set_fill_style_str(&color);
		ctx.begin_path();
		ctx.arc(core.x, core.y, core.radius, 0.0, 2.0 * PI)?;
		ctx.fill();
	}
	ctx.restore();
	Ok(())
}
