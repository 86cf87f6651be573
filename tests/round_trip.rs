use nongli::Date;
use nongli::chinese::convert::months_of;
use nongli::chinese::{Converter, Lunar, Month, Provider, Tables};

fn first_day() -> Date {
    Date::from_gregorian(1901, 1, 1).unwrap()
}

fn last_day() -> Date {
    Date::from_gregorian(2101, 1, 28).unwrap()
}

#[test]
fn every_solar_date_round_trips() {
    let conv = Converter::builtin();
    let mut prev: Option<Lunar> = None;
    let mut date = first_day();
    while date <= last_day() {
        let lunar = conv.from_date(date).unwrap();
        assert_eq!(date, lunar.solar());
        assert_eq!(
            Ok(date),
            conv.lunar_to_solar(lunar.year(), lunar.month(), lunar.day()),
            "{date}"
        );
        assert_eq!(date - first_day(), lunar.day_offset(), "{date}");
        if let Some(prev) = prev {
            if lunar.day() == 1 {
                assert!(
                    prev.day() == 29 || prev.day() == 30,
                    "{date}: month ended on day {}",
                    prev.day()
                );
            } else {
                assert_eq!(prev.day() + 1, lunar.day(), "{date}");
                assert_eq!((prev.year(), prev.month()), (lunar.year(), lunar.month()));
            }
        }
        prev = Some(lunar);
        date = date + 1;
    }
    assert!(conv.from_date(date).is_err());
    assert!(conv.from_date(first_day() + -1).is_err());
}

#[test]
fn every_lunar_date_round_trips() {
    let tables = Tables::builtin();
    let conv = Converter::builtin();
    let mut expected = Date::from_gregorian(1901, 2, 19).unwrap();
    for year in 1901..=2100 {
        for month in months_of(tables, year) {
            let len = tables.days_in_month(year, month).unwrap();
            for day in 1..=len {
                let lunar = Lunar::from_lunar(year, month.to_signed(), day as i32).unwrap();
                assert_eq!(expected, lunar.solar(), "{year} {month:?} {day}");
                assert_eq!(
                    Ok((year, month, day)),
                    conv.solar_to_lunar(lunar.solar())
                );
                expected = expected + 1;
            }
        }
    }
}

#[test]
fn anchors_convert_exactly() {
    for (solar, lunar) in [((1901, 1, 1), (1900, 11, 11)), ((2000, 1, 1), (1999, 11, 25))] {
        let l = Lunar::from_solar(solar.0, solar.1, solar.2).unwrap();
        assert_eq!(lunar, (l.year(), l.signed_month(), l.day() as i32));
        let s = Lunar::from_lunar(lunar.0, lunar.1, lunar.2).unwrap().solar();
        assert_eq!(Date::from_gregorian(solar.0, solar.1, solar.2), Some(s));
    }
}

#[test]
fn new_years() {
    let dataset = [
        (1912, "1912-02-18"),
        (1949, "1949-01-29"),
        (1985, "1985-02-20"),
        (2000, "2000-02-05"),
        (2017, "2017-01-28"),
        (2020, "2020-01-25"),
        (2024, "2024-02-10"),
        (2050, "2050-01-23"),
        (2100, "2100-02-09"),
    ];
    for (year, std) in dataset {
        let lunar = Lunar::from_lunar(year, 1, 1).unwrap();
        assert_eq!(std, lunar.solar().iso_gregorian());
        assert_eq!(["春节"], lunar.festivals());
    }
}

#[test]
fn intercalary_months_follow_their_namesakes() {
    let tables = Tables::builtin();
    let mut leap_years = 0;
    for year in 1901..=2100 {
        let Some(m) = tables.leap_month(year) else {
            continue;
        };
        leap_years += 1;
        let common = Lunar::from_lunar(year, m as i32, 1).unwrap();
        let leap = Lunar::from_lunar(year, -(m as i32), 1).unwrap();
        let len = tables.days_in_month(year, Month::Common(m)).unwrap();
        assert_eq!(common.solar() + len as i32, leap.solar(), "{year}");
        assert_eq!(
            Ok((year, Month::Leap(m))),
            Converter::builtin()
                .solar_to_lunar(leap.solar())
                .map(|(y, m, _)| (y, m))
        );
    }
    // 19 年 7 闰
    assert!((70..=77).contains(&leap_years), "{leap_years}");
}
