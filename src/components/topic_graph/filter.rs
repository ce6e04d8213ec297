use std::fmt;

use super::model::Topic;
use super::types::CalcLevel;

/// The one active filter button.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Filter {
	#[default]
	All,
	Category(String),
	Level(CalcLevel),
}

impl Filter {
	/// Parses a button's `(filter_type, filter_value)` declaration.
	pub fn from_button(filter_type: &str, filter_value: &str) -> Option<Self> {
		match filter_type {
			"all" => Some(Filter::All),
			"cs_categories" => Some(Filter::Category(filter_value.to_owned())),
			"calc_level" => filter_value.parse().ok().map(Filter::Level),
			_ => None,
		}
	}

	pub fn is_active(&self) -> bool {
		!matches!(self, Filter::All)
	}

	pub fn admits(&self, topic: &Topic) -> bool {
		match self {
			Filter::All => true,
			Filter::Category(category) => topic.in_category(category),
			Filter::Level(level) => topic.level == *level,
		}
	}
}

impl fmt::Display for Filter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Filter::All => f.write_str("All"),
			Filter::Category(category) => f.write_str(category),
			Filter::Level(level) => write!(f, "{level}"),
		}
	}
}
