use std::f64::consts::PI;

use super::model::TopicIdx;

/// Force and cooling constants of the simulation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParameters {
	pub link_distance: f64,
	pub charge_strength: f64,
	pub charge_distance_min: f64,
	pub center_strength: f64,
	pub alpha_min: f64,
	pub alpha_decay: f64,
	pub velocity_decay: f64,
	pub drag_alpha_target: f64,
}

impl Default for SimulationParameters {
	fn default() -> Self {
		let alpha_min = 0.001;
		Self {
			link_distance: 70.0,
			charge_strength: -250.0,
			charge_distance_min: 1.0,
			center_strength: 1.0,
			alpha_min,
			// reaches alpha_min from 1.0 in ~300 ticks
			alpha_decay: 1.0 - alpha_min.powf(1.0 / 300.0),
			velocity_decay: 0.4,
			drag_alpha_target: 0.3,
		}
	}
}

/// Mutable half of a node: everything the physics writes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Body {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub pin: Option<(f64, f64)>,
}

impl Body {
	#[cfg(test)]
	pub fn is_pinned(&self) -> bool {
		self.pin.is_some()
	}
}

#[derive(Clone, Copy, Debug)]
struct Link {
	source: TopicIdx,
	target: TopicIdx,
	strength: f64,
	bias: f64,
}

pub struct Simulation {
	params: SimulationParameters,
	bodies: Vec<Body>,
	links: Vec<Link>,
	center: (f64, f64),
	alpha: f64,
	alpha_target: f64,
	running: bool,
}

fn jiggle(seed: usize) -> f64 {
	((seed as f64 * 0.618_034).fract() - 0.5) * 1e-6
}

impl Simulation {
	pub fn new(
		node_count: usize,
		edges: &[(TopicIdx, TopicIdx)],
		params: SimulationParameters,
		center: (f64, f64),
	) -> Self {
		let initial_angle = PI * (3.0 - 5.0_f64.sqrt());
		let bodies = (0..node_count)
			.map(|i| {
				let radius = 10.0 * (0.5 + i as f64).sqrt();
				let angle = i as f64 * initial_angle;
				Body {
					x: center.0 + radius * angle.cos(),
					y: center.1 + radius * angle.sin(),
					..Body::default()
				}
			})
			.collect();

		let mut degree = vec![0usize; node_count];
		for &(source, target) in edges {
			degree[source] += 1;
			degree[target] += 1;
		}
		let links = edges
			.iter()
			.filter(|(source, target)| source != target)
			.map(|&(source, target)| {
				let (ds, dt) = (degree[source] as f64, degree[target] as f64);
				Link {
					source,
					target,
					strength: 1.0 / ds.min(dt),
					bias: ds / (ds + dt),
				}
			})
			.collect();

		Self {
			params,
			bodies,
			links,
			center,
			alpha: 1.0,
			alpha_target: 0.0,
			running: node_count > 0,
		}
	}

	pub fn bodies(&self) -> &[Body] {
		&self.bodies
	}

	#[cfg(test)]
	pub fn body(&self, idx: TopicIdx) -> Option<&Body> {
		self.bodies.get(idx)
	}

	pub fn position(&self, idx: TopicIdx) -> Option<(f64, f64)> {
		self.bodies.get(idx).map(|body| (body.x, body.y))
	}

	#[cfg(test)]
	pub fn alpha(&self) -> f64 {
		self.alpha
	}

	#[cfg(test)]
	pub fn alpha_target(&self) -> f64 {
		self.alpha_target
	}

	pub fn is_running(&self) -> bool {
		self.running
	}

	#[cfg(test)]
	pub fn params(&self) -> &SimulationParameters {
		&self.params
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.center = (width / 2.0, height / 2.0);
		self.running = !self.bodies.is_empty();
	}

	pub fn pin(&mut self, idx: TopicIdx, x: f64, y: f64) {
		if let Some(body) = self.bodies.get_mut(idx) {
			body.pin = Some((x, y));
		}
	}

	pub fn unpin(&mut self, idx: TopicIdx) {
		if let Some(body) = self.bodies.get_mut(idx) {
			body.pin = None;
		}
	}

	/// Raises the energy for an interactive gesture and restarts ticking.
	pub fn reheat(&mut self) {
		self.alpha_target = self.params.drag_alpha_target;
		self.alpha = self.alpha.max(self.alpha_target);
		self.running = !self.bodies.is_empty();
	}

	/// Lets alpha decay back to rest; ticking continues until settled.
	pub fn cool(&mut self) {
		self.alpha_target = 0.0;
	}

	/// Advances one step. Returns `false` without touching anything once settled.
	pub fn tick(&mut self) -> bool {
		if !self.is_running() {
			return false;
		}

		self.alpha += (self.alpha_target - self.alpha) * self.params.alpha_decay;
		self.apply_links();
		self.apply_charge();
		self.apply_center();
		self.integrate();

		if self.alpha < self.params.alpha_min {
			self.running = false;
			log::debug!("layout settled");
		}
		true
	}

	/// Ticks until settled or `max_ticks` elapsed; returns the ticks taken.
	pub fn run(&mut self, max_ticks: usize) -> usize {
		let mut ticks = 0;
		while ticks < max_ticks && self.tick() {
			ticks += 1;
		}
		ticks
	}

	fn apply_links(&mut self) {
		let alpha = self.alpha;
		for (index, link) in self.links.iter().enumerate() {
			let (source, target) = (self.bodies[link.source], self.bodies[link.target]);
			let mut dx = target.x + target.vx - source.x - source.vx;
			let mut dy = target.y + target.vy - source.y - source.vy;
			if dx == 0.0 {
				dx = jiggle(index);
			}
			if dy == 0.0 {
				dy = jiggle(index + 1);
			}

			let distance = (dx * dx + dy * dy).sqrt();
			let scale = (distance - self.params.link_distance) / distance * alpha * link.strength;
			dx *= scale;
			dy *= scale;

			let target = &mut self.bodies[link.target];
			target.vx -= dx * link.bias;
			target.vy -= dy * link.bias;
			let source = &mut self.bodies[link.source];
			source.vx += dx * (1.0 - link.bias);
			source.vy += dy * (1.0 - link.bias);
		}
	}

	fn apply_charge(&mut self) {
		let node_count = self.bodies.len();
		let strength = self.params.charge_strength * self.alpha;
		let distance_min_sq = self.params.charge_distance_min * self.params.charge_distance_min;

		for i in 0..node_count {
			let (mut ax, mut ay) = (0.0, 0.0);
			let body = self.bodies[i];
			for j in 0..node_count {
				if i == j {
					continue;
				}
				let other = self.bodies[j];
				let mut dx = other.x - body.x;
				let mut dy = other.y - body.y;
				if dx == 0.0 && dy == 0.0 {
					dx = jiggle(i * node_count + j);
					dy = jiggle(j * node_count + i);
				}

				let mut distance_sq = dx * dx + dy * dy;
				if distance_sq < distance_min_sq {
					distance_sq = (distance_min_sq * distance_sq).sqrt();
				}
				ax += dx * strength / distance_sq;
				ay += dy * strength / distance_sq;
			}
			self.bodies[i].vx += ax;
			self.bodies[i].vy += ay;
		}
	}

	fn apply_center(&mut self) {
		let node_count = self.bodies.len();
		if node_count == 0 {
			return;
		}

		let (mut sx, mut sy) = (0.0, 0.0);
		for body in &self.bodies {
			sx += body.x;
			sy += body.y;
		}
		let shift_x = (sx / node_count as f64 - self.center.0) * self.params.center_strength;
		let shift_y = (sy / node_count as f64 - self.center.1) * self.params.center_strength;
		for body in &mut self.bodies {
			body.x -= shift_x;
			body.y -= shift_y;
		}
	}

	fn integrate(&mut self) {
		let retain = 1.0 - self.params.velocity_decay;
		for body in &mut self.bodies {
			if let Some((fx, fy)) = body.pin {
				body.x = fx;
				body.y = fy;
				body.vx = 0.0;
				body.vy = 0.0;
			} else {
				body.vx *= retain;
				body.vy *= retain;
				body.x += body.vx;
				body.y += body.vy;
			}
		}
	}
}
