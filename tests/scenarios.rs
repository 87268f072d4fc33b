use flores_solis::{
    CalendarError, Clock, Command, FixedClock, FloresDate, GregorianDate, LunarPhase, Mode,
    Month, NavigationState, Timestamp, UtcOffset, displayed_instant, flores_to_gregorian,
    gregorian_to_flores, month_table,
};

fn greg(year: i64, month: u8, day: u8) -> GregorianDate {
    GregorianDate::from_ymd(year, month, day).unwrap()
}

fn flores(year: i64, month: u8, day: u8) -> FloresDate {
    FloresDate::new(year, month, day).unwrap()
}

#[test]
fn test_anchor_day_is_first_day_of_year() {
    assert_eq!(gregorian_to_flores(greg(2024, 3, 20)), flores(2024, 0, 1));
}

#[test]
fn test_day_before_anchor_is_last_day_of_viola() {
    let date = gregorian_to_flores(greg(2024, 3, 19));
    assert_eq!(date.year(), 2023);
    assert_eq!(date.month(), Month::LAST);
    assert_eq!(date.day().get(), month_table(2023).length(Month::LAST));
}

#[test]
fn test_viola_2023_has_30_days() {
    assert_eq!(month_table(2023).length(Month::LAST), 30);
}

#[test]
fn test_viola_2022_has_29_days() {
    assert_eq!(month_table(2022).length(Month::LAST), 29);
}

#[test]
fn test_first_of_2024_is_march_20() {
    assert_eq!(flores_to_gregorian(flores(2024, 0, 1)), greg(2024, 3, 20));
    assert_eq!(flores_to_gregorian(flores(2024, 0, 1)).to_string(), "2024-03-20");
}

#[test]
fn test_set_explicit_rejects_day_32_of_narcissus() {
    let mut state = NavigationState::at(flores(2024, 3, 3));
    let before = state;
    let err = state
        .apply(Command::SetExplicit {
            year: 2024,
            month: 0,
            day: 32,
        })
        .unwrap_err();
    assert!(matches!(err, CalendarError::InvalidDay { max_day: 31, .. }));
    assert_eq!(state, before);
}

#[test]
fn test_small_years_are_not_remapped() {
    assert_eq!(flores_to_gregorian(flores(50, 0, 1)), greg(50, 3, 20));
    assert_eq!(gregorian_to_flores(greg(50, 3, 20)), flores(50, 0, 1));
    assert_eq!(flores_to_gregorian(flores(-44, 0, 1)).to_string(), "-0044-03-20");
}

#[test]
fn test_unparseable_gregorian_input_is_rejected() {
    let mut state = NavigationState::at(flores(2024, 0, 1));
    let before = state;
    for input in ["", "tomorrow", "2024-13-01", "2023-02-29", "03/20"] {
        assert!(
            state
                .apply(Command::ParseGregorian(input.to_owned()))
                .is_err(),
            "{input:?} should be rejected"
        );
    }
    assert_eq!(state, before);

    state
        .apply(Command::ParseGregorian("03/20/2024".to_owned()))
        .unwrap();
    assert_eq!(state.position(), flores(2024, 0, 1));
}

#[test]
fn test_live_session_with_injected_clock() {
    // 2024-03-19T20:00Z, 22:00 at UTC+2
    let mut clock = FixedClock::new(Timestamp::from_unix_seconds(1_710_878_400));
    let offset = UtcOffset::from_hours(2.0).unwrap();
    let displayed = |clock: &FixedClock| displayed_instant(clock.now(), &offset);

    let mut state = NavigationState::new(displayed(&clock));
    assert_eq!(state.position(), flores(2023, 11, 30));
    assert_eq!(state.mode(), Mode::Live);

    // 23:00 local, same day
    clock.advance(3_600);
    assert_eq!(state.apply(Command::Tick(displayed(&clock))), Ok(false));

    // past local midnight, while UTC is still on the 19th
    clock.advance(3_600 + 60);
    assert_eq!(state.apply(Command::Tick(displayed(&clock))), Ok(true));
    assert_eq!(state.position(), flores(2024, 0, 1));

    // manual navigation freezes the position
    state.apply(Command::ShiftMonth(4)).unwrap();
    assert_eq!(state.mode(), Mode::Manual);
    clock.advance(86_400);
    assert_eq!(state.apply(Command::Tick(displayed(&clock))), Ok(false));
    assert_eq!(state.position(), flores(2024, 4, 1));

    state.apply(Command::ReturnToNow(displayed(&clock))).unwrap();
    assert_eq!(state.mode(), Mode::Live);
    assert_eq!(state.position(), flores(2024, 0, 2));
}

#[test]
fn test_navigation_session() {
    let mut state = NavigationState::at(flores(2024, 10, 30));
    state.apply(Command::ShiftMonth(1)).unwrap();
    assert_eq!(state.position(), flores(2024, 11, 29));

    state.apply(Command::ShiftDay(1)).unwrap();
    assert_eq!(state.position(), flores(2025, 0, 1));

    state.apply(Command::JumpToYear(-1)).unwrap();
    let snapshot = state.snapshot();
    assert_eq!(snapshot.display_year, 1);
    assert_eq!(snapshot.era.to_string(), "AEV");
    assert_eq!(snapshot.gregorian, greg(-1, 3, 20));

    state
        .apply(Command::SetFromGregorian(greg(2000, 1, 7)))
        .unwrap();
    assert_eq!(state.snapshot().phase, LunarPhase::NewMoon);
}

#[test]
fn test_snapshot_json() {
    let snapshot = NavigationState::at(flores(2024, 0, 1)).snapshot();
    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["position"], "1 Narcissus 2024 PEV");
    assert_eq!(json["gregorian"], "2024-03-20");
    assert_eq!(json["era"], "PEV");
    assert_eq!(json["mode"], "Manual");
}
