use jalaali_calendar::{
    CalendarError, JalaaliDate, MAX_YEAR, MIN_YEAR, is_leap_jalaali_year, is_valid_jalaali_date,
    jalaali_month_length, jalaali_to_jdn,
};

#[test]
fn leap_years_around_1395() {
    assert!(!is_leap_jalaali_year(1393));
    assert!(!is_leap_jalaali_year(1394));
    assert!(is_leap_jalaali_year(1395));
    assert!(!is_leap_jalaali_year(1396));
}

#[test]
fn month_lengths() {
    let cases: &[(i32, i32, i32)] = &[
        (1393, 1, 31),
        (1393, 4, 31),
        (1393, 6, 31),
        (1393, 7, 30),
        (1393, 10, 30),
        (1393, 12, 29),
        (1394, 12, 29),
        (1395, 12, 30),
    ];
    for &(jy, jm, expected) in cases {
        assert_eq!(
            jalaali_month_length(jy, jm),
            expected,
            "jalaali_month_length({jy}, {jm})"
        );
    }
}

#[test]
fn esfand_length_follows_leap_rule() {
    for jy in MIN_YEAR..=MAX_YEAR {
        let expected = if is_leap_jalaali_year(jy) { 30 } else { 29 };
        assert_eq!(jalaali_month_length(jy, 12), expected, "year {jy}");
    }
}

#[test]
fn year_length_follows_leap_rule() {
    for jy in MIN_YEAR..MAX_YEAR {
        let length = jalaali_to_jdn(jy + 1, 1, 1) - jalaali_to_jdn(jy, 1, 1);
        let expected = if is_leap_jalaali_year(jy) { 366 } else { 365 };
        assert_eq!(length, expected, "length of year {jy}");
    }
}

#[test]
fn leap_years_are_four_or_five_apart() {
    let leaps: Vec<i32> = (MIN_YEAR..=MAX_YEAR)
        .filter(|&jy| is_leap_jalaali_year(jy))
        .collect();
    for w in leaps.windows(2) {
        let gap = w[1] - w[0];
        assert!(gap == 4 || gap == 5, "leap years {} and {}", w[0], w[1]);
    }
}

#[test]
fn validity_boundary_every_month() {
    for jy in MIN_YEAR..=MAX_YEAR {
        for jm in 1..=12 {
            let len = jalaali_month_length(jy, jm);
            assert!(is_valid_jalaali_date(jy, jm, len), "{jy}/{jm}/{len}");
            assert!(
                !is_valid_jalaali_date(jy, jm, len + 1),
                "{jy}/{jm}/{}",
                len + 1
            );
        }
    }
}

#[test]
fn domain_edges() {
    assert!(!is_valid_jalaali_date(-62, 12, 29));
    assert!(is_valid_jalaali_date(-61, 1, 1));
    assert!(!is_valid_jalaali_date(3178, 1, 1));
    assert!(is_valid_jalaali_date(3177, 12, 29));
}

#[test]
fn field_checks() {
    assert!(!is_valid_jalaali_date(1393, 0, 1));
    assert!(!is_valid_jalaali_date(1393, 13, 1));
    assert!(!is_valid_jalaali_date(1393, 1, 0));
    assert!(!is_valid_jalaali_date(1393, 1, 32));
    assert!(is_valid_jalaali_date(1393, 1, 31));
    assert!(!is_valid_jalaali_date(1393, 11, 31));
    assert!(is_valid_jalaali_date(1393, 11, 30));
    assert!(!is_valid_jalaali_date(1393, 12, 30));
    assert!(is_valid_jalaali_date(1393, 12, 29));
    assert!(is_valid_jalaali_date(1395, 12, 30));
}

#[test]
fn validate_agrees_with_predicate() {
    for (jy, jm, jd) in [(1393, 12, 30), (1395, 12, 30), (0, 0, 1), (-62, 1, 1), (100, 7, 31)] {
        let date = JalaaliDate::new(jy, jm, jd);
        assert_eq!(
            date.validate().is_ok(),
            is_valid_jalaali_date(jy, jm, jd),
            "{date:?}"
        );
    }
    assert_eq!(
        JalaaliDate::new(-62, 12, 29).validate(),
        Err(CalendarError::YearOutOfRange { year: -62 })
    );
}
