use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

/// One drawing primitive. A frame is a back-to-front list of these.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
	Clear {
		width: f64,
		height: f64,
	},
	Line {
		from: (f64, f64),
		to: (f64, f64),
		color: &'static str,
		width: f64,
	},
	Disc {
		center: (f64, f64),
		radius: f64,
		color: &'static str,
		alpha: f64,
	},
	Ring {
		center: (f64, f64),
		radius: f64,
		color: &'static str,
		width: f64,
		alpha: f64,
	},
	Polyline {
		points: Vec<(f64, f64)>,
		color: &'static str,
		width: f64,
		dashed: bool,
	},
	Text {
		at: (f64, f64),
		text: String,
		color: &'static str,
	},
}

/// Draw a display list onto a 2D context.
pub fn paint(shapes: &[Shape], ctx: &CanvasRenderingContext2d) {
	for shape in shapes {
		match shape {
			Shape::Clear { width, height } => ctx.clear_rect(0.0, 0.0, *width, *height),
			Shape::Line {
				from,
				to,
				color,
				width,
			} => {
				ctx.set_stroke_style_str(color);
				ctx.set_line_width(*width);
				ctx.begin_path();
				ctx.move_to(from.0, from.1);
				ctx.line_to(to.0, to.1);
				ctx.stroke();
			}
			Shape::Disc {
				center,
				radius,
				color,
				alpha,
			} => {
				ctx.set_global_alpha(*alpha);
				ctx.begin_path();
				let _ = ctx.arc(center.0, center.1, *radius, 0.0, 2.0 * PI);
				ctx.set_fill_style_str(color);
				ctx.fill();
				ctx.set_global_alpha(1.0);
			}
			Shape::Ring {
				center,
				radius,
				color,
				width,
				alpha,
			} => {
				ctx.set_global_alpha(*alpha);
				ctx.begin_path();
				let _ = ctx.arc(center.0, center.1, *radius, 0.0, 2.0 * PI);
				ctx.set_stroke_style_str(color);
				ctx.set_line_width(*width);
				ctx.stroke();
				ctx.set_global_alpha(1.0);
			}
			Shape::Polyline {
				points,
				color,
				width,
				dashed,
			} => {
				let Some((first, rest)) = points.split_first() else {
					continue;
				};
				if *dashed {
					let _ = ctx.set_line_dash(&js_sys::Array::of2(
						&JsValue::from_f64(6.0),
						&JsValue::from_f64(4.0),
					));
				}
				ctx.set_stroke_style_str(color);
				ctx.set_line_width(*width);
				ctx.begin_path();
				ctx.move_to(first.0, first.1);
				for point in rest {
					ctx.line_to(point.0, point.1);
				}
				ctx.stroke();
				let _ = ctx.set_line_dash(&js_sys::Array::new());
			}
			Shape::Text { at, text, color } => {
				ctx.set_fill_style_str(color);
				ctx.set_font("10px sans-serif");
				ctx.set_text_align("center");
				let _ = ctx.fill_text(text, at.0, at.1);
			}
		}
	}
}
