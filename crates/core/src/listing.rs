//! Location grouping for the venues index.
//!
//! Rows arrive already ordered by `(state, city)`. Grouping is a single
//! linear scan that compares each row with the most recently opened group,
//! so membership depends only on adjacency in the input: two rows with the
//! same location that are not adjacent end up in separate groups.

use serde::Serialize;

/// A run of consecutive rows sharing the same `(state, city)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationGroup<T> {
    pub city: String,
    pub state: String,
    pub items: Vec<T>,
}

/// Group adjacent rows with equal `(state, city)`.
///
/// `location` returns `(city, state)` for a row. Input order is preserved
/// both across groups and within each group.
pub fn group_by_location<T, F>(rows: Vec<T>, location: F) -> Vec<LocationGroup<T>>
where
    F: Fn(&T) -> (&str, &str),
{
    let mut groups: Vec<LocationGroup<T>> = Vec::new();

    for row in rows {
        let (city, state) = location(&row);
        let continues_last = groups
            .last()
            .is_some_and(|last| last.state == state && last.city == city);
        if !continues_last {
            groups.push(LocationGroup {
                city: city.to_string(),
                state: state.to_string(),
                items: Vec::new(),
            });
        }
        if let Some(last) = groups.last_mut() {
            last.items.push(row);
        }
    }

    groups
}
