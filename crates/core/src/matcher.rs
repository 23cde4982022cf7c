//! Fuzzy filtering of catalog entries by name.
//!
//! Ranking is delegated to a [`RankBackend`] (frizbee by default). The rank is
//! only used to decide membership: [`filter`] always returns entries in
//! catalog order.

use frizbee::{Config, match_list};
use tracing::{trace, warn};

use crate::catalog::Catalog;

/// A single match reported by a backend: the haystack position and its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranked {
	pub index: usize,
	pub score: u16,
}

/// Ranks haystack strings against a keyword.
pub trait RankBackend {
	/// Return the haystacks matching `keyword`, best first.
	///
	/// `None` signals that the backend could not produce a usable result; the
	/// caller keeps whatever it was displaying before.
	fn rank(&self, keyword: &str, haystacks: &[&str]) -> Option<Vec<Ranked>>;
}

/// Builds fuzzy matching options for the provided query.
///
/// Short queries must match as a subsequence; longer ones tolerate a growing
/// number of typos, never more than the query length minus one.
pub fn config_for_query(query: &str) -> Config {
	let length = query.chars().count();
	let mut allowed_typos: u16 = match length {
		0..=4 => 0,
		5..=7 => 1,
		8..=12 => 2,
		_ => 3,
	};
	if let Ok(max_reasonable) = u16::try_from(length.saturating_sub(1)) {
		allowed_typos = allowed_typos.min(max_reasonable);
	}

	Config {
		prefilter: true,
		max_typos: Some(allowed_typos),
		sort: false,
		..Config::default()
	}
}

/// [`RankBackend`] backed by frizbee's SIMD Smith-Waterman matcher.
#[derive(Debug, Default, Clone, Copy)]
pub struct FrizbeeBackend;

impl RankBackend for FrizbeeBackend {
	fn rank(&self, keyword: &str, haystacks: &[&str]) -> Option<Vec<Ranked>> {
		let config = config_for_query(keyword);
		let mut ranked: Vec<Ranked> = match_list(keyword, haystacks, &config)
			.into_iter()
			.filter(|entry| entry.score > 0)
			.map(|entry| Ranked {
				index: entry.index as usize,
				score: entry.score,
			})
			.collect();
		ranked.sort_unstable_by(|a, b| b.score.cmp(&a.score).then_with(|| a.index.cmp(&b.index)));
		Some(ranked)
	}
}

/// Filter `catalog` by `keyword`, returning matching entry indices in catalog
/// order.
///
/// Only an empty keyword returns every index without consulting the backend;
/// whitespace is matched like any other character. `None` is returned when the
/// backend fails or reports a position outside the catalog; callers should then
/// leave their current results untouched.
pub fn filter<B>(backend: &B, keyword: &str, catalog: &Catalog) -> Option<Vec<usize>>
where
	B: RankBackend + ?Sized,
{
	if keyword.is_empty() {
		return Some((0..catalog.len()).collect());
	}

	let names: Vec<&str> = catalog.names().collect();
	let Some(ranked) = backend.rank(keyword, &names) else {
		warn!(keyword, "fuzzy backend returned no result set");
		return None;
	};

	let mut members = vec![false; catalog.len()];
	for hit in &ranked {
		let Some(slot) = members.get_mut(hit.index) else {
			warn!(
				keyword,
				index = hit.index,
				len = catalog.len(),
				"fuzzy backend reported a match outside the catalog"
			);
			return None;
		};
		*slot = true;
	}

	let indices: Vec<usize> = members
		.iter()
		.enumerate()
		.filter_map(|(index, &member)| member.then_some(index))
		.collect();
	trace!(keyword, matches = indices.len(), "filtered catalog");
	Some(indices)
}
