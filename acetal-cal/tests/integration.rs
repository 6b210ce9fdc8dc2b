use acetal_cal::{
    CalError, CalendarCursor, DayGrid, DaySchedule, HOURS_PER_DAY, Rgb, Shape, TaskBlock,
    TaskForm, WEEKDAY_LABELS, format_date, hour_label,
};
use chrono::NaiveDate;
use serde::Deserialize;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn back_and_forth_returns_to_start() {
    let mut cursor = CalendarCursor::new(1990, 1).unwrap();
    for _ in 0..600 {
        assert_eq!(cursor.advance(-1).advance(1), cursor);
        assert_eq!(cursor.advance(1).advance(-1), cursor);
        cursor = cursor.next();
    }
}

#[test]
fn navigation_rolls_over_year_boundaries() {
    let january = CalendarCursor::new(2024, 1).unwrap();
    assert_eq!(january.advance(-1).current(), (2023, 12));

    let december = CalendarCursor::new(2024, 12).unwrap();
    assert_eq!(december.advance(1).current(), (2025, 1));
}

#[test]
fn may_2024_layout() {
    let grid = DayGrid::for_cursor(CalendarCursor::new(2024, 5).unwrap());
    let weeks = grid.weeks();

    assert_eq!(weeks.len(), 5);
    assert_eq!(WEEKDAY_LABELS[3], "Wed");
    assert_eq!(weeks[0], [None, None, None, Some(1), Some(2), Some(3), Some(4)]);
    assert_eq!(weeks[4], [Some(26), Some(27), Some(28), Some(29), Some(30), Some(31), None]);

    let days: Vec<u32> = weeks.iter().flatten().flatten().copied().collect();
    assert_eq!(days, (1..=31).collect::<Vec<_>>());
}

#[test]
fn every_grid_matches_the_gregorian_calendar() {
    let mut cursor = CalendarCursor::new(1999, 1).unwrap();
    for _ in 0..400 {
        let grid = DayGrid::for_cursor(cursor);
        for (row, week) in grid.weeks().iter().enumerate() {
            for (col, slot) in week.iter().enumerate() {
                if let Some(day) = slot {
                    let weekday = cursor.date(*day).unwrap().format("%a").to_string();
                    assert_eq!(weekday, WEEKDAY_LABELS[col], "{cursor} day {day} row {row}");
                }
            }
        }
        let count = grid.weeks().iter().flatten().flatten().count() as u32;
        assert_eq!(count, cursor.days_in_month());
        cursor = cursor.next();
    }
}

#[test]
fn saving_a_task_draws_one_rectangle_and_label() {
    let mut schedule = DaySchedule::new(date(2024, 5, 15));
    let color = Rgb::new(0x33, 0x99, 0xff);

    let form = TaskForm::new("Standup", "1", color);
    schedule.assign(9, form.submit().unwrap()).unwrap();

    let shapes = schedule.slot(9).unwrap().surface();
    assert_eq!(shapes.len(), 2);
    assert!(matches!(shapes[0], Shape::Rect { fill, y1: 50, .. } if fill == color));
    assert!(matches!(&shapes[1], Shape::Text { text, .. } if text == "Standup"));

    for hour in (0..HOURS_PER_DAY).filter(|h| *h != 9) {
        assert!(schedule.slot(hour).unwrap().surface().is_empty());
    }
}

#[test]
fn second_save_replaces_first() {
    let mut schedule = DaySchedule::new(date(2024, 5, 15));
    let red = Rgb::new(0xff, 0, 0);
    let green = Rgb::new(0, 0xff, 0);

    schedule.assign(9, TaskBlock::new("First", 2, red)).unwrap();
    let previous = schedule.assign(9, TaskBlock::new("Second", 1, green)).unwrap();
    assert_eq!(previous.map(|b| b.label), Some("First".to_string()));

    let shapes = schedule.slot(9).unwrap().surface();
    let rects: Vec<_> = shapes
        .iter()
        .filter(|s| matches!(s, Shape::Rect { .. }))
        .collect();
    assert_eq!(rects.len(), 1);
    assert!(matches!(rects[0], Shape::Rect { fill, .. } if *fill == green));
    assert!(
        !shapes
            .iter()
            .any(|s| matches!(s, Shape::Text { text, .. } if text == "First"))
    );
}

#[test]
fn invalid_duration_leaves_schedule_untouched() {
    let mut schedule = DaySchedule::new(date(2024, 5, 15));
    schedule
        .assign(9, TaskBlock::new("Existing", 1, Rgb::WHITE))
        .unwrap();
    let before = schedule.clone();

    let form = TaskForm::new("Standup", "abc", Rgb::BLACK);
    let result = form.submit().and_then(|block| schedule.assign(9, block));

    assert_eq!(
        result,
        Err(CalError::InvalidDurationFormat {
            input: "abc".to_string()
        })
    );
    assert_eq!(schedule, before);
    assert_eq!(form.label, "Standup");
    assert_eq!(form.duration, "abc");
}

#[test]
fn day_schedule_has_24_ordered_rows() {
    let schedule = DaySchedule::new(date(2024, 2, 29));
    let labels: Vec<String> = schedule.slots().iter().map(|s| s.label()).collect();

    assert_eq!(labels.len(), 24);
    assert_eq!(labels.first().map(String::as_str), Some("00:00 - 01:00"));
    assert_eq!(labels.last().map(String::as_str), Some("23:00 - 24:00"));
    for (hour, label) in labels.iter().enumerate() {
        assert_eq!(*label, hour_label(hour as u32));
    }
}

#[test]
fn overflowing_task_is_kept_as_entered() {
    let mut schedule = DaySchedule::new(date(2024, 5, 15));
    let block = TaskForm::new("Deploy", "4", Rgb::BLACK).submit().unwrap();
    assert!(block.overflows_day(22));

    schedule.assign(22, block).unwrap();
    assert!(schedule.slot(23).unwrap().is_empty());
    assert!(matches!(
        schedule.slot(22).unwrap().surface()[0],
        Shape::Rect { y1: 200, .. }
    ));
}

#[test]
fn huge_duration_draws_without_overflow() {
    let mut schedule = DaySchedule::new(date(2024, 5, 15));
    let block = TaskForm::new("x", "200000000000000000", Rgb::WHITE)
        .submit()
        .unwrap();
    schedule.assign(9, block).unwrap();

    let shapes = schedule.slot(9).unwrap().surface();
    assert_eq!(shapes.len(), 2);
    assert!(matches!(shapes[0], Shape::Rect { y1: i64::MAX, .. }));
}

#[test]
fn date_formatting() {
    let cursor = CalendarCursor::initial();
    assert_eq!(format_date(cursor.date(15).unwrap()), "2024-05-15");
    assert_eq!(format_date(date(987, 1, 2)), "0987-01-02");
}

#[test]
fn colors_deserialize_from_hex_strings() {
    #[derive(Deserialize)]
    struct Entry {
        color: Rgb,
    }

    let entry: Entry = toml::from_str(r##"color = "#ff8800""##).unwrap();
    assert_eq!(entry.color, Rgb::new(0xff, 0x88, 0));

    assert!(toml::from_str::<Entry>(r#"color = "orange""#).is_err());
}
