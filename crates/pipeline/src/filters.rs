//! Filter panel: turns the selected controls into a navigation.

use workstation_core::FilterSelection;

use crate::location::{encode_pairs, PageLocation};
use crate::ports::Navigator;

/// Query string for `selection`, groups in declaration order, values in
/// selection order. Empty when nothing is selected.
#[must_use]
pub fn build_query(selection: &FilterSelection) -> String {
    encode_pairs(selection.pairs())
}

/// Navigates to the current path with only the filter query. The previous
/// query string, including any page number, is dropped.
///
/// Returns the navigation target.
pub fn apply_filters(
    location: &PageLocation,
    selection: &FilterSelection,
    navigator: &dyn Navigator,
) -> String {
    let target = location.target_with_query(&build_query(selection));
    tracing::debug!(to = %target, "applying filters");
    navigator.navigate(&target);
    target
}
