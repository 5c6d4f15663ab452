use proptest::prelude::*;
use scalar_semantics::{
    age_in_days, canonical_equal, canonical_fingerprint, falsy_report, format_cents,
    format_float, greeting, is_falsy, safe_divide, safe_value, type_check, Kind, Value,
};

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        any::<f64>().prop_map(Value::Float),
        Just(Value::Float(f64::NAN)),
        ".{0,12}".prop_map(Value::Text),
    ];
    leaf.prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::List),
            prop::collection::vec(("[a-z]{1,4}", inner), 0..4).prop_map(Value::dict),
        ]
    })
}

/// Reverses dict key order at every level.
fn reverse_keys(value: &Value) -> Value {
    match value {
        Value::List(items) => Value::List(items.iter().map(reverse_keys).collect()),
        Value::Dict(entries) => Value::Dict(
            entries
                .iter()
                .rev()
                .map(|(k, v)| (k.clone(), reverse_keys(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}

proptest! {
    #[test]
    fn canonical_equal_is_reflexive(v in arb_value()) {
        prop_assert!(canonical_equal(&v, &v));
    }

    #[test]
    fn canonical_equal_is_symmetric(a in arb_value(), b in arb_value()) {
        prop_assert_eq!(canonical_equal(&a, &b), canonical_equal(&b, &a));
    }

    #[test]
    fn canonical_equal_ignores_key_order(v in arb_value()) {
        prop_assert!(canonical_equal(&v, &reverse_keys(&v)));
    }

    #[test]
    fn fingerprint_agrees_with_equality(a in arb_value(), b in arb_value()) {
        if canonical_equal(&a, &b) {
            prop_assert_eq!(canonical_fingerprint(&a), canonical_fingerprint(&b));
        } else {
            prop_assert_ne!(canonical_fingerprint(&a), canonical_fingerprint(&b));
        }
    }

    #[test]
    fn type_check_matches_own_kind(v in arb_value()) {
        let name = v.kind().name();
        prop_assert_eq!(type_check(&v, name), format!("La variable es {}: True", name));
        for other in Kind::ALL.into_iter().filter(|k| *k != v.kind()) {
            let expected = format!("La variable es {}: False", other.name());
            prop_assert_eq!(type_check(&v, other.name()), expected);
        }
    }

    #[test]
    fn falsy_report_agrees_with_predicate(v in arb_value()) {
        let report = falsy_report(&v);
        match v {
            Value::Bool(_) => prop_assert!(report.starts_with("El elemento es el booleano")),
            ref other if is_falsy(other) => prop_assert_eq!(report, "El elemento es falsy: true"),
            _ => prop_assert_eq!(report, "El elemento es truthy: true"),
        }
    }

    #[test]
    fn safe_value_partitions_values(v in arb_value()) {
        let report = safe_value(&v);
        if v.is_null() {
            prop_assert!(report.starts_with("El valor es None"));
        } else if is_falsy(&v) {
            prop_assert!(report.starts_with("El valor es falsy pero definido"));
        } else {
            prop_assert!(report.starts_with("El valor es válido"));
        }
    }

    #[test]
    fn safe_divide_never_fails_loudly(a in arb_value(), b in arb_value()) {
        let report = safe_divide(&a, &b);
        prop_assert!(report.starts_with("Error: ") || report.starts_with("El resultado de dividir "));
        if !a.is_numeric() || !b.is_numeric() {
            prop_assert_eq!(report, "Error: Uno de los valores no es un número");
        }
    }

    #[test]
    fn safe_divide_small_ints_match_float_division(
        a in -(1i64 << 53)..=(1i64 << 53),
        b in (1i64..=(1i64 << 53)).prop_union(-(1i64 << 53)..=-1),
    ) {
        let expected = format!("El resultado de dividir {} entre {} es {}", a, b, format_float(a as f64 / b as f64));
        prop_assert_eq!(safe_divide(&Value::Int(a), &Value::Int(b)), expected);
    }

    #[test]
    fn age_in_days_scales_whole_years(years in 0i64..10_000_000) {
        prop_assert_eq!(age_in_days(&Value::Int(years)), Ok(years as u64 * 365));
    }

    #[test]
    fn age_in_days_rejects_negative_years(years in i64::MIN..0) {
        prop_assert!(age_in_days(&Value::Int(years)).is_err());
    }

    #[test]
    fn format_cents_keeps_every_digit(cents in 0i64..i64::MAX) {
        let formatted = format_cents(&Value::Int(cents), "USD");
        let body = formatted.strip_prefix('$').unwrap();
        let (units, fraction) = body.split_once('.').unwrap();
        prop_assert_eq!(fraction.len(), 2);
        prop_assert_eq!(format!("{}{}", units, fraction).parse::<i64>().unwrap(), cents);
    }

    #[test]
    fn format_cents_rejects_negative_amounts(cents in i64::MIN..0, code in "(USD|EUR|GBP|ABC)") {
        prop_assert_eq!(format_cents(&Value::Int(cents), &code), "Valor invalido");
    }

    #[test]
    fn greeting_accepts_non_blank_names(first in "[A-Za-z]{1,10}", last in "[A-Za-z]{1,10}") {
        prop_assert_eq!(greeting(&first, &last).unwrap(), format!("Hola, {} {}!", first, last));
    }

    #[test]
    fn format_float_round_trips(x in any::<f64>().prop_filter("finite", |x| x.is_finite())) {
        let formatted = format_float(x);
        prop_assert_eq!(formatted.parse::<f64>().unwrap(), x);
    }
}
