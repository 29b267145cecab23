/*!
# M8: Size Accounting.
*/

use dactyl::NiceU64;
use std::fmt;



#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
/// # Savings.
///
/// Byte sizes before and after some transformation. "After" may be larger
/// than "before", in which case the percentage is negative.
pub struct Savings {
	/// # Before.
	before: usize,

	/// # After.
	after: usize,
}

impl From<(&str, &str)> for Savings {
	#[inline]
	fn from((before, after): (&str, &str)) -> Self {
		Self::new(before.len(), after.len())
	}
}

impl fmt::Display for Savings {
	/// # Percent With One Decimal.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:.1}%", self.percent())
	}
}

impl Savings {
	#[must_use]
	/// # New.
	pub const fn new(before: usize, after: usize) -> Self {
		Self { before, after }
	}

	#[must_use]
	/// # Before.
	pub const fn before(self) -> usize { self.before }

	#[must_use]
	/// # After.
	pub const fn after(self) -> usize { self.after }

	#[expect(clippy::cast_precision_loss, reason = "Documents aren't that big.")]
	#[must_use]
	/// # Percent Saved.
	///
	/// This is `0.0` when there was nothing to begin with.
	pub fn percent(self) -> f64 {
		if self.before == 0 { 0.0 }
		else {
			(self.before as f64 - self.after as f64) / self.before as f64 * 100.0
		}
	}

	#[must_use]
	/// # Nice Before.
	pub fn nice_before(self) -> NiceU64 { nice(self.before) }

	#[must_use]
	/// # Nice After.
	pub fn nice_after(self) -> NiceU64 { nice(self.after) }
}



#[must_use]
/// # Nice Byte Count.
///
/// Thousands-separated, for the console.
pub fn nice(len: usize) -> NiceU64 {
	NiceU64::from(u64::try_from(len).unwrap_or(u64::MAX))
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_percent() {
		for (before, after, pct) in [
			(0, 0, "0.0%"),
			(100, 100, "0.0%"),
			(100, 75, "25.0%"),
			(3, 2, "33.3%"),
			(200, 250, "-25.0%"),
			(29, 23, "20.7%"),
		] {
			assert_eq!(Savings::new(before, after).to_string(), pct);
		}
	}

	#[test]
	fn t_from() {
		let raw = r#"<div class="a"><p>hi</p></div>"#;
		let m8 = crate::compress(raw);
		let savings = Savings::from((raw, m8.as_str()));
		assert_eq!(savings.before(), 30);
		assert_eq!(savings.after(), 22);
		assert_eq!(savings.nice_before().as_str(), "30");
		assert_eq!(nice(1_234_567).as_str(), "1,234,567");
	}
}
