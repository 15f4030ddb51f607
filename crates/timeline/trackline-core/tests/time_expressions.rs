use trackline_core::{format_clock, parse_delta, resolve, TimeCursor, TimeFormatError, TimeInput};

fn secs(cursor: TimeCursor, input: impl Into<TimeInput>) -> f64 {
    resolve(cursor, input).expect("valid expression").seconds()
}

#[test]
fn sequence_carries_between_calls() {
    let c = TimeCursor::new();
    let c = c.resolve("1:30").unwrap();
    assert_eq!(c.seconds(), 90.0);
    let c = c.resolve("+30s").unwrap();
    assert_eq!(c.seconds(), 120.0);
    let c = c.resolve(10.0).unwrap();
    assert_eq!(c.seconds(), 10.0);
    let c = c.resolve("-5s").unwrap();
    assert_eq!(c.seconds(), 5.0);
}

#[test]
fn absolute_expressions_ignore_prior_cursor() {
    for expr in ["1:30", "1h 2m 3s", "250ms", "7", "  2m  "] {
        let from_zero = secs(TimeCursor::new(), expr);
        for prior in [0.0, 12.5, 3600.0, -40.0] {
            assert_eq!(secs(TimeCursor::at(prior), expr), from_zero, "{expr} from {prior}");
        }
    }
}

#[test]
fn relative_expressions_add_or_subtract_delta() {
    for (base, delta) in [("10", "5s"), ("1:00", "1:30"), ("2h", "1m 200ms"), ("0", "0")] {
        let b = TimeCursor::new().resolve(base).unwrap();
        let d = parse_delta(delta).unwrap();
        assert_eq!(secs(b, format!("+{delta}")), b.seconds() + d);
        assert_eq!(secs(b, format!("-{delta}")), b.seconds() - d);
    }
}

#[test]
fn units_and_chunks_sum() {
    let z = TimeCursor::new();
    assert_eq!(secs(z, "1h 2m 3s"), 3723.0);
    assert_eq!(secs(z, "1.5h"), 5400.0);
    assert_eq!(secs(z, "90"), 90.0);
    assert_eq!(secs(z, "1:00:00 30s"), 3630.0);
    assert_eq!(secs(z, "2:03.25"), 123.25);
    assert_eq!(secs(TimeCursor::at(1.0), "-200ms"), 0.8);
    assert_eq!(secs(TimeCursor::at(4.0), "+ 1s"), 5.0);
}

#[test]
fn empty_expressions() {
    assert_eq!(secs(TimeCursor::at(9.0), ""), 0.0);
    assert_eq!(secs(TimeCursor::at(9.0), "+"), 9.0);
    assert_eq!(parse_delta("   ").unwrap(), 0.0);
}

#[test]
fn numeric_input_overwrites() {
    let c = TimeCursor::at(100.0).resolve(TimeInput::Seconds(-3.0)).unwrap();
    assert_eq!(c.seconds(), -3.0);
}

#[test]
fn clock_with_wrong_segment_count_fails() {
    let err = resolve(TimeCursor::new(), "1:2:3:4").unwrap_err();
    assert_eq!(
        err,
        TimeFormatError::ClockSegments {
            chunk: "1:2:3:4".into(),
            segments: 4
        }
    );
    let err = resolve(TimeCursor::new(), "5s 1:").unwrap_err();
    assert!(matches!(err, TimeFormatError::InvalidClockField { .. }));
    assert_eq!(err.chunk(), "1:");
}

#[test]
fn unparseable_duration_fails() {
    for bad in ["abc", "5x", "1e3", ".5s", "5sec", "--5", "+-5"] {
        let err = resolve(TimeCursor::new(), bad).unwrap_err();
        assert!(
            matches!(err, TimeFormatError::InvalidDuration { .. }),
            "{bad}: {err:?}"
        );
    }
}

#[test]
fn error_does_not_move_cursor() {
    let c = TimeCursor::at(42.0);
    assert!(c.resolve("+oops").is_err());
    assert_eq!(c.seconds(), 42.0);
}

#[test]
fn format_clock_shapes() {
    assert_eq!(format_clock(0.0), "0:00");
    assert_eq!(format_clock(90.0), "1:30");
    assert_eq!(format_clock(65.5), "1:05.5");
    assert_eq!(format_clock(3723.0), "1:02:03");
    assert_eq!(format_clock(-4.0), "0:00");
}

#[test]
fn format_clock_round_trips() {
    let samples = [
        0.0, 0.001, 1.0, 9.75, 59.999, 60.0, 90.0, 599.5, 3599.0, 3600.0, 3723.1, 45296.789,
        86399.999,
    ];
    for n in samples {
        let c = TimeCursor::new().resolve(n).unwrap();
        let text = format_clock(c.seconds());
        assert_eq!(secs(TimeCursor::at(777.0), text.as_str()), n, "{n} -> {text}");
    }
}
