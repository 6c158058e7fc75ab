//! End-to-end behaviour of temperature arrays outside any host.

use su_temperature::{
    Celsius, DisplayOptions, Fahrenheit, Indexer, NA, Selection, TemperatureArray,
    TemperatureError, TemperatureInput, TemperatureScalar, TemperatureUnit, TemperatureValue,
    parse_temperature, to_temperature,
};

#[test]
fn construction_from_mixed_missing_markers() {
    let from_floats = TemperatureArray::new(vec![0.0, f64::NAN, 2.0]).unwrap();
    let from_options = TemperatureArray::new(vec![Some(0.0), None, Some(2.0)]).unwrap();
    let from_scalars = TemperatureArray::new(vec![
        TemperatureScalar::from(Celsius(0.0)),
        NA,
        TemperatureScalar::from(Celsius(2.0)),
    ])
    .unwrap();
    let from_text = TemperatureArray::new(vec!["0", "nan", "2 degC"]).unwrap();

    assert_eq!(from_floats, from_options);
    assert_eq!(from_floats, from_scalars);
    assert_eq!(from_floats, from_text);
    assert_eq!(from_floats.isna(), vec![false, true, false]);
}

#[test]
fn infinite_magnitude_is_rejected() {
    assert!(matches!(
        TemperatureArray::new(vec![1.0, f64::INFINITY]),
        Err(TemperatureError::Construction { .. })
    ));
}

#[test]
fn fahrenheit_input_is_normalized() {
    let arr = to_temperature(vec![32.0, 212.0], TemperatureUnit::Fahrenheit).unwrap();
    assert_eq!(arr.unit(), TemperatureUnit::Fahrenheit);
    assert_eq!(arr.to_celsius_values(), vec![Some(0.0), Some(100.0)]);
    assert_eq!(
        arr.get(1).unwrap(),
        TemperatureScalar::from(Fahrenheit(212.0))
    );
    assert_eq!(arr.format_element(0).unwrap(), "32 °F");
}

#[test]
fn huge_fahrenheit_input_is_accepted() {
    let arr = to_temperature(vec![1.0e308, -1.0e308], TemperatureUnit::Fahrenheit).unwrap();
    assert_eq!(arr.count(), 2);
    assert!(arr.to_celsius_values().iter().flatten().all(|c| c.is_finite()));
}

#[test]
fn empty_and_all_missing() {
    let empty = TemperatureArray::new(TemperatureInput::Missing(0)).unwrap();
    assert!(empty.is_empty());
    assert_eq!(empty.take(&[], true, None).unwrap().len(), 0);

    let missing = TemperatureArray::missing(3);
    assert_eq!(missing.count(), 0);
    assert_eq!(missing.dropna().len(), 0);
}

#[test]
fn indexer_dispatch() {
    let arr = TemperatureArray::new(vec![10.0, 20.0, 30.0]).unwrap();
    match arr.index(Indexer::Range(1..3)).unwrap() {
        Selection::Array(a) => assert_eq!(a.to_celsius_values(), vec![Some(20.0), Some(30.0)]),
        Selection::Scalar(_) => panic!("range selects an array"),
    }
    match arr.index(Indexer::Position(-3)).unwrap() {
        Selection::Scalar(s) => assert_eq!(s, TemperatureScalar::from(Celsius(10.0))),
        Selection::Array(_) => panic!("position selects a scalar"),
    }
    assert!(matches!(
        arr.index(Indexer::Position(3)),
        Err(TemperatureError::Index { index: 3, len: 3 })
    ));
}

#[test]
fn take_with_fill_value() {
    let arr = TemperatureArray::new(vec![1.0, 2.0]).unwrap();
    let filled = arr
        .take(&[-1, 0], true, Some(TemperatureScalar::from(Celsius(-5.0))))
        .unwrap();
    assert_eq!(filled.to_celsius_values(), vec![Some(-5.0), Some(1.0)]);
    assert!(matches!(
        arr.take(&[-2], true, None),
        Err(TemperatureError::Index { .. })
    ));
}

#[test]
fn equality_scenario() {
    let a = TemperatureArray::new(vec![0.0, 1.0, 2.0]).unwrap();
    let b = TemperatureArray::new(vec![0.0, 1.0, 2.0]).unwrap();
    assert_eq!(a.eq_elementwise(&b).unwrap(), vec![Some(true); 3]);

    let c = TemperatureArray::new(vec![Some(0.0), None, Some(2.0)]).unwrap();
    assert_eq!(
        a.eq_elementwise(&c).unwrap(),
        vec![Some(true), None, Some(true)]
    );
}

#[test]
fn parse_and_display_options() {
    let t = parse_temperature("98.6 °F", TemperatureUnit::Celsius).unwrap();
    assert_eq!(t.value().map(|v| v.unit()), Some(TemperatureUnit::Fahrenheit));
    assert!(parse_temperature("hot", TemperatureUnit::Celsius).is_err());

    let arr = TemperatureArray::new(vec![Some(37.0), None]).unwrap();
    let opts = DisplayOptions {
        na_repr: "<NA>".to_string(),
        precision: Some(1),
        unit: Some(TemperatureUnit::Fahrenheit),
    };
    assert_eq!(arr.format_with(&opts), vec!["98.6 °F", "<NA>"]);
}

#[test]
fn value_equality_across_units() {
    assert_eq!(TemperatureValue::fahrenheit(-40.0), TemperatureValue::celsius(-40.0));
    assert_ne!(NA, NA);
    assert!(NA.is_missing());
}
