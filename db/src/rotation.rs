use chrono::NaiveDate;
use lazy_static::lazy_static;

lazy_static! {
    /// First calendar day of the rotation. Day counting starts here;
    /// dates before the epoch are out of scope for the site.
    pub static ref ROTATION_EPOCH: NaiveDate = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
}

/// Number of whole UTC calendar days between the rotation epoch and the
/// given date. Time of day never enters the calculation, so the value
/// changes exactly at UTC midnight.
pub fn days_since_epoch(date: NaiveDate) -> i64 {
    (date - *ROTATION_EPOCH).num_days()
}

/// Index into the catalog (sorted ascending by `display_order`) for the
/// given day number.
///
/// Total over all inputs with `catalog_size > 0`: `rem_euclid` keeps the
/// index non-negative even for days before the epoch.
pub fn rotation_index(days_since_epoch: i64, catalog_size: usize) -> usize {
    debug_assert!(catalog_size > 0);
    days_since_epoch.rem_euclid(catalog_size as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_count_from_epoch() {
        assert_eq!(days_since_epoch(date(2025, 1, 1)), 0);
        assert_eq!(days_since_epoch(date(2025, 1, 8)), 7);
        assert_eq!(days_since_epoch(date(2026, 1, 1)), 365);
    }

    #[test]
    fn index_is_day_mod_catalog_size() {
        assert_eq!(rotation_index(7, 5), 2);
        assert_eq!(rotation_index(0, 5), 0);
        assert_eq!(rotation_index(4, 5), 4);
        assert_eq!(rotation_index(5, 5), 0);
    }

    #[test]
    fn same_day_yields_same_index() {
        let d1 = days_since_epoch(date(2025, 3, 14));
        let d2 = days_since_epoch(date(2025, 3, 14));
        assert_eq!(rotation_index(d1, 30), rotation_index(d2, 30));
    }

    #[test]
    fn index_advances_by_one_at_rollover() {
        let today = days_since_epoch(date(2025, 3, 14));
        let tomorrow = days_since_epoch(date(2025, 3, 15));
        assert_eq!(tomorrow, today + 1);
        assert_eq!(rotation_index(tomorrow, 30), (rotation_index(today, 30) + 1) % 30);
    }

    #[test]
    fn index_stays_in_bounds_before_epoch() {
        // Out of scope for the site, but the function stays total.
        assert_eq!(rotation_index(-1, 5), 4);
        assert_eq!(rotation_index(-5, 5), 0);
    }
}
