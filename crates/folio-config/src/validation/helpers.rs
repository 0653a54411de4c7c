use std::fmt::Display;
use std::ops::RangeInclusive;

/// Record `name` as out of range unless `range` contains `value`.
///
/// NaN is never contained, so it is always reported.
pub(crate) fn check_range<T>(errors: &mut Vec<String>, name: &str, value: T, range: RangeInclusive<T>)
where
    T: PartialOrd + Display,
{
    if !range.contains(&value) {
        errors.push(format!(
            "{name} = {value} is out of range [{}, {}]",
            range.start(),
            range.end()
        ));
    }
}

pub(crate) fn check_non_empty(errors: &mut Vec<String>, name: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{name} must not be empty"));
    }
}
