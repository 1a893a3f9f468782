//! Decides whether two horizontally adjacent cells are fragments of a single
//! logical value.

use lazy_regex::regex;

use crate::units::AllowedUnits;

/// True if `s` is made up entirely of digits, `.`, `,`, `(`, `)` and `-`.
pub fn is_numeric_or_special(s: &str) -> bool {
    regex!(r"^[0-9.,()-]+$").is_match(s)
}

/// True if `s` is a whole number such as `(1,234.5)`, `($12)%` or `50)`.
pub fn is_parenthetical_number(s: &str) -> bool {
    regex!(r"^\(?\$?[0-9]{1,3}(,[0-9]{3})*(\.[0-9]+)?\)%?$").is_match(s)
}

/// Returns true if `left` followed by `right` can be treated as one value.
///
/// Rules, first match wins:
///
/// 1. Either cell is empty.
/// 2. Exactly one cell contains an allowed unit and the other is
///    [numeric or special](is_numeric_or_special), in either order.
/// 3. `left + right` is a [parenthetical number](is_parenthetical_number).
///
/// Rule 3 only concatenates in the given order, so the result is not
/// symmetric in general.
pub fn can_merge_cells(left: &str, right: &str, units: &AllowedUnits) -> bool {
    if left.is_empty() || right.is_empty() {
        return true;
    }

    match (units.contained_in(left), units.contained_in(right)) {
        (true, false) if is_numeric_or_special(right) => return true,
        (false, true) if is_numeric_or_special(left) => return true,
        _ => {}
    }

    let mut joined = String::with_capacity(left.len() + right.len());
    joined.push_str(left);
    joined.push_str(right);
    is_parenthetical_number(&joined)
}
