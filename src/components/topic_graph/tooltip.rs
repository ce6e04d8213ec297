use super::config::TooltipConfig;

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

/// Snapshot handed to the renderer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipView {
	pub text: String,
	pub x: f64,
	pub y: f64,
	pub opacity: f64,
}

impl TooltipView {
	pub fn is_visible(&self) -> bool {
		self.opacity > 0.0
	}
}

#[derive(Clone, Copy, Debug, Default)]
struct Fade {
	from: f64,
	to: f64,
	elapsed: f64,
	duration: f64,
}

impl Fade {
	fn value(&self) -> f64 {
		if self.duration <= 0.0 {
			return self.to;
		}
		let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
		self.from + (self.to - self.from) * ease_out_cubic(t)
	}

	fn is_done(&self) -> bool {
		self.elapsed >= self.duration
	}
}

/// Hover label that fades in on hover-in and out after hover-out.
#[derive(Clone, Debug)]
pub struct Tooltip {
	config: TooltipConfig,
	view: TooltipView,
	fade: Fade,
}

impl Tooltip {
	pub fn new(config: TooltipConfig) -> Self {
		Self {
			config,
			view: TooltipView::default(),
			fade: Fade::default(),
		}
	}

	pub fn show(&mut self, text: &str, page_x: f64, page_y: f64) {
		self.view.text = text.to_owned();
		self.view.x = page_x + self.config.offset.0;
		self.view.y = page_y + self.config.offset.1;
		self.start_fade(self.config.opacity, self.config.show_secs);
	}

	pub fn hide(&mut self) {
		self.start_fade(0.0, self.config.hide_secs);
	}

	fn start_fade(&mut self, to: f64, duration: f64) {
		self.fade = Fade {
			from: self.view.opacity,
			to,
			elapsed: 0.0,
			duration,
		};
	}

	pub fn is_animating(&self) -> bool {
		!self.fade.is_done()
	}

	/// Advances the fade. Returns whether the opacity changed.
	pub fn tick(&mut self, dt: f64) -> bool {
		if !self.is_animating() {
			return false;
		}
		self.fade.elapsed += dt;
		let opacity = self.fade.value();
		let changed = opacity != self.view.opacity;
		self.view.opacity = opacity;
		changed
	}

	pub fn view(&self) -> &TooltipView {
		&self.view
	}
}
