//! Sorting, filtering and search over the body catalog.

use crate::data::Body;

/// Orderings offered by the catalog's sort control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ascending id, the natural order from the sun outward.
    #[default]
    Id,
    /// Descending diameter.
    Size,
    /// Descending moon count.
    Moons,
    /// Ascending distance from the sun.
    Distance,
}

impl SortOrder {
    /// Parse a sort control value.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "size" => Some(Self::Size),
            "moons" => Some(Self::Moons),
            "distance" => Some(Self::Distance),
            _ => None,
        }
    }
}

/// Leading number of a display string like `"139,820 km"`.
///
/// Reads the longest numeric prefix and ignores the rest, so thousands
/// separators cut the value short (`"139,820"` reads as 139). That is
/// how the catalog has always ranked sizes; the relative order of the
/// planets comes out the same. Unparseable strings count as 0.
fn leading_number(s: &str) -> f64 {
    let s = s.trim_start();
    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in s.char_indices() {
        match c {
            '-' | '+' if i == 0 => end = i + 1,
            '0'..='9' => end = i + 1,
            '.' if !seen_dot => {
                seen_dot = true;
                end = i + 1;
            }
            _ => break,
        }
    }
    s[..end].parse().unwrap_or(0.0)
}

/// Return the bodies in the given order. The input order breaks ties.
pub fn sorted(bodies: &[Body], order: SortOrder) -> Vec<Body> {
    let mut out = bodies.to_vec();
    match order {
        SortOrder::Id => out.sort_by_key(|b| b.id),
        SortOrder::Size => out.sort_by(|a, b| {
            leading_number(&b.diameter).total_cmp(&leading_number(&a.diameter))
        }),
        SortOrder::Moons => out.sort_by(|a, b| b.moons.cmp(&a.moons)),
        SortOrder::Distance => {
            out.sort_by(|a, b| a.distance_from_sun_km.total_cmp(&b.distance_from_sun_km))
        }
    }
    out
}

/// Category filter: case-insensitive substring, `"all"` matches everything.
pub fn matches_category(body: &Body, filter: &str) -> bool {
    filter == "all"
        || body
            .category
            .to_lowercase()
            .contains(&filter.to_lowercase())
}

/// Search box filter: case-insensitive match on name or category.
/// An empty term matches everything.
pub fn matches_search(body: &Body, term: &str) -> bool {
    let term = term.to_lowercase();
    let term = term.trim();
    term.is_empty()
        || body.name.to_lowercase().contains(term)
        || body.category.to_lowercase().contains(term)
}
