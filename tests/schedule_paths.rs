use harmonogram::generate::{expand_days, generate};
use harmonogram::validate::{validate, DayArg};
use harmonogram::vocab::TimeOfDay;
use harmonogram::{ErrorKind, GeneratedPath, Vocabulary};
use proptest::prelude::*;

fn paths(months: &[&str], days: &[&str], times: &[&str]) -> Vec<GeneratedPath> {
    let vocab = Vocabulary::polish();
    let days = validate(vocab, months, days).expect("valid arguments");
    generate(vocab, months, &days, times).expect("generate")
}

#[test]
fn single_time_is_consumed_once_across_months() {
    let generated = paths(&["maj", "luty"], &["pn", "wt-cz"], &["w"]);
    let rendered: Vec<String> = generated.iter().map(|p| p.to_string()).collect();
    assert_eq!(
        rendered,
        vec![
            "maj/poniedzialek/wieczorem",
            "luty/wtorek/rano",
            "luty/sroda/rano",
            "luty/czwartek/rano",
        ]
    );
}

#[test]
fn time_cursor_continues_into_next_month() {
    let generated = paths(&["maj", "luty"], &["pn-wt", "sr"], &["r", "r", "w"]);
    let times: Vec<TimeOfDay> = generated.iter().map(|p| p.time).collect();
    assert_eq!(
        times,
        vec![TimeOfDay::Rano, TimeOfDay::Rano, TimeOfDay::Wieczorem]
    );
    assert_eq!(generated[2].month, "luty");
}

#[test]
fn surplus_times_are_ignored() {
    let generated = paths(&["lipiec"], &["so"], &["w", "w", "w"]);
    assert_eq!(generated.len(), 1);
    assert_eq!(generated[0].time, TimeOfDay::Wieczorem);
}

#[test]
fn unknown_time_tokens_fall_back_to_morning() {
    let generated = paths(&["lipiec"], &["pt-so"], &["x", "w"]);
    assert_eq!(generated[0].time, TimeOfDay::Rano);
    assert_eq!(generated[1].time, TimeOfDay::Wieczorem);
}

#[test]
fn reversed_range_fails_after_validation() {
    let vocab = Vocabulary::polish();
    let days = validate(vocab, &["maj"], &["sr-pn"]).expect("tokens are valid");
    let err = generate(vocab, &["maj"], &days, &[] as &[&str]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
}

#[test]
fn duplicate_months_rejected_before_generation() {
    let err = validate(Vocabulary::polish(), &["maj", "maj"], &["pn", "wt"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Argument);
}

fn day_arg() -> impl Strategy<Value = String> {
    let tokens: Vec<&'static str> = Vocabulary::polish().days().iter().map(|d| d.token).collect();
    (0..tokens.len(), 0..tokens.len(), any::<bool>()).prop_map(move |(a, b, single)| {
        let (start, end) = (a.min(b), a.max(b));
        if single {
            tokens[start].to_string()
        } else {
            format!("{}-{}", tokens[start], tokens[end])
        }
    })
}

proptest! {
    #[test]
    fn path_count_is_sum_of_expansions(
        month_count in 1usize..=12,
        days in prop::collection::vec(day_arg(), 12),
        times in prop::collection::vec(prop_oneof![Just("r"), Just("w")], 0..20),
    ) {
        let vocab = Vocabulary::polish();
        let months: Vec<&str> = vocab.months()[..month_count].to_vec();
        let days = &days[..month_count];
        let parsed = validate(vocab, &months, days).unwrap();
        let generated = generate(vocab, &months, &parsed, &times).unwrap();

        let expected: usize = parsed
            .iter()
            .map(|arg| expand_days(vocab, arg).unwrap().len())
            .sum();
        prop_assert_eq!(generated.len(), expected);

        // month-major: months appear in input order, each as one contiguous block
        let mut order: Vec<&str> = generated.iter().map(|p| p.month.as_str()).collect();
        order.dedup();
        prop_assert_eq!(order, months.clone());

        for (index, path) in generated.iter().enumerate() {
            let expected_time = times
                .get(index)
                .map(|t| TimeOfDay::from_token(t))
                .unwrap_or_default();
            prop_assert_eq!(path.time, expected_time);
        }
    }
}

#[test]
fn day_arg_parsing_keeps_raw_end() {
    assert_eq!(
        DayArg::parse("pn-wt-sr"),
        DayArg::Range {
            start: "pn".into(),
            end: "wt-sr".into()
        }
    );
}
