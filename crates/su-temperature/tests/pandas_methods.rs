//! Host methods over temperature columns: indexing, alignment, null
//! handling and concatenation through the extension protocol.

use su_frame::{Cell, Column, DataFrame, Label, Series};
use su_temperature::{CELSIUS, CelsiusType, TemperatureArray, TemperatureValue};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn temps(values: Vec<Option<f64>>) -> Column {
    Column::Extension(Box::new(
        TemperatureArray::new(values).expect("finite temperatures"),
    ))
}

fn series() -> Series {
    Series::new(None, temps(vec![Some(0.0), Some(1.0), Some(2.0)]))
}

fn frame() -> DataFrame {
    DataFrame::new(vec![
        ("A", temps(vec![Some(0.0), Some(1.0), Some(2.0)])),
        ("B", Column::from_floats(&[0.0, 1.0, 2.0])),
        ("C", temps(vec![Some(0.0), Some(1.0), Some(2.0)])),
    ])
    .expect("equal-length columns")
}

fn celsius(v: f64) -> Cell {
    Cell::Ext(std::sync::Arc::new(TemperatureValue::celsius(v)))
}

#[test]
fn head_and_rename() {
    init_tracing();
    let s = series();
    assert_eq!(s.head(5).unwrap(), s);
    assert_eq!(s.head(2).unwrap().len(), 2);

    let renamed = s.rename(|l| Label::Str(l.to_string()));
    assert_eq!(renamed.index()[2], Label::from("2"));
    assert_eq!(renamed.values(), s.values());

    let f = frame();
    assert_eq!(f.head(1).unwrap().shape(), (1, 3));
    assert_eq!(f.rename(|l| Label::Str(l.to_string())).shape(), (3, 3));
}

#[test]
fn info_reports_dtypes() {
    let text = frame().info();
    assert!(text.contains("Index: 3 entries, 0 to 2"));
    assert!(text.contains("celsius"));
    assert!(text.contains("float64"));
    assert!(text.contains("3 non-null"));
}

#[test]
fn take_rows() {
    let taken = frame().take(&[0]).unwrap();
    assert_eq!(taken.shape(), (1, 3));
    assert_eq!(taken.index(), &[Label::Int(0)]);
    assert_eq!(taken.iloc(0, 0).unwrap(), celsius(0.0));
}

#[test]
fn iloc_series() {
    let s = series();
    assert_eq!(s.iloc_slice(0, usize::MAX).unwrap(), s);
    assert_eq!(s.iloc(0).unwrap(), celsius(0.0));
    assert_eq!(s.iloc(-1).unwrap(), celsius(2.0));
    assert_eq!(s.take(&[0]).unwrap().len(), 1);
    assert_eq!(s.take(&[0, 1]).unwrap().len(), 2);
    assert!(s.iloc(3).is_err());
}

#[test]
fn iloc_frame() {
    let f = frame();

    assert_eq!(f.iloc_cols(&[0]).unwrap().shape(), (3, 1));
    assert_eq!(f.iloc_cols(&[0, 1]).unwrap().column_names(), vec!["A", "B"]);
    assert_eq!(f.iloc_cols(&[0, 2]).unwrap().column_names(), vec!["A", "C"]);

    assert_eq!(f.iloc(0, 0).unwrap(), celsius(0.0));
    assert_eq!(f.iloc_row(0, &[0]).unwrap().len(), 1);
    let row = f.iloc_row(0, &[0, 1]).unwrap();
    assert_eq!(row[1], ("B".to_string(), Cell::Float(0.0)));
    let row = f.iloc_row(0, &[0, 2]).unwrap();
    assert_eq!(row[1], ("C".to_string(), celsius(0.0)));

    assert_eq!(f.iloc_many(&[0], &[0]).unwrap().shape(), (1, 1));
    assert_eq!(f.iloc_many(&[0], &[0, 1]).unwrap().shape(), (1, 2));
    assert_eq!(f.iloc_many(&[0], &[0, 2]).unwrap().shape(), (1, 2));
}

#[test]
fn loc_series() {
    let s = series();
    assert_eq!(s.loc(&Label::Int(0)).unwrap(), celsius(0.0));
    assert_eq!(s.loc(&Label::Int(1)).unwrap(), celsius(1.0));
    let many = s.loc_many(&[Label::Int(0), Label::Int(1)]).unwrap();
    assert_eq!(many.index(), &[Label::Int(0), Label::Int(1)]);
}

#[test]
fn loc_frame() {
    let f = frame();

    let a = f.column("A").unwrap();
    assert_eq!(a.dtype_name(), CelsiusType::NAME);
    assert_eq!(f.loc_cols(&["A"]).unwrap().shape(), (3, 1));
    assert_eq!(f.loc_cols(&["A", "B"]).unwrap().shape(), (3, 2));
    assert_eq!(f.loc_cols(&["A", "C"]).unwrap().shape(), (3, 2));

    assert_eq!(f.loc(&Label::Int(0), "A").unwrap(), celsius(0.0));
    assert_eq!(f.loc_row(&Label::Int(0), &["A"]).unwrap().len(), 1);
    assert_eq!(f.loc_row(&Label::Int(0), &["A", "B"]).unwrap().len(), 2);
    assert_eq!(f.loc_row(&Label::Int(0), &["A", "C"]).unwrap().len(), 2);

    let zero = [Label::Int(0)];
    assert_eq!(f.loc_many(&zero, &["A"]).unwrap().shape(), (1, 1));
    assert_eq!(f.loc_many(&zero, &["A", "B"]).unwrap().shape(), (1, 2));
    assert_eq!(f.loc_many(&zero, &["A", "C"]).unwrap().shape(), (1, 2));
}

#[test]
fn reindex_introduces_missing_rows() {
    init_tracing();
    let labels = [Label::Int(0), Label::Int(10)];
    let result = frame().reindex(&labels).unwrap();
    let expected = DataFrame::with_index(
        labels.to_vec(),
        vec![
            ("A", temps(vec![Some(0.0), None])),
            ("B", Column::Float64(vec![Some(0.0), None])),
            ("C", temps(vec![Some(0.0), None])),
        ],
    )
    .unwrap();
    assert_eq!(result, expected);
}

#[test]
fn isna_series_and_frame() {
    let expected = Series::new(None, Column::Bool(vec![false, false, false]));
    assert_eq!(series().isna(), expected);

    let expected = DataFrame::new(vec![
        ("A", Column::Bool(vec![false; 3])),
        ("B", Column::Bool(vec![false; 3])),
        ("C", Column::Bool(vec![false; 3])),
    ])
    .unwrap();
    assert_eq!(frame().isna(), expected);
}

#[test]
fn forward_fill() {
    let s = Series::new(None, temps(vec![Some(1.0), None]));
    let expected = Series::new(None, temps(vec![Some(1.0), Some(1.0)]));
    assert_eq!(s.ffill().unwrap(), expected);
}

#[test]
fn dropna_series_and_frame() {
    let missing = Series::new(None, temps(vec![Some(1.0), None]));
    let expected = Series::new(None, temps(vec![Some(1.0)]));
    assert_eq!(missing.dropna().unwrap(), expected);

    let result = missing.to_frame().unwrap().dropna().unwrap();
    assert_eq!(result, expected.to_frame().unwrap());
}

#[test]
fn concat_frames_with_disjoint_columns() {
    init_tracing();
    let top = frame();
    let bottom = DataFrame::new(vec![("A", temps(vec![Some(5.0)]))]).unwrap();
    let joined = DataFrame::concat(&[&top, &bottom]).unwrap();
    assert_eq!(joined.shape(), (4, 3));
    assert_eq!(joined.column("A").unwrap().values().isna(), vec![false; 4]);
    assert_eq!(
        joined.column("C").unwrap().values().isna(),
        vec![false, false, false, true]
    );
    assert_eq!(joined.column("C").unwrap().dtype_name(), "celsius");
    assert_eq!(joined.iloc(3, 0).unwrap(), celsius(5.0));
}

#[test]
fn concat_temperature_with_floats_is_rejected() {
    let a = Series::new(None, temps(vec![Some(1.0)]));
    let b = Series::new(None, Column::from_floats(&[1.0]));
    assert!(Series::concat(&[&a, &b]).is_err());
}

#[test]
fn astype_through_registry() {
    CelsiusType::register();
    let floats = Series::new(Some("t"), Column::from_floats(&[20.0, f64::NAN]));
    let converted = floats.astype(CELSIUS.name()).unwrap();
    assert_eq!(converted.dtype_name(), "celsius");
    assert_eq!(converted.iloc(0).unwrap(), celsius(20.0));
    assert!(converted.iloc(1).unwrap().is_na());
}

#[test]
fn series_display() {
    let s = Series::new(Some("A"), temps(vec![Some(0.0), None]));
    assert_eq!(s.to_string(), "0    0 °C\n1    NaN\nName: A, dtype: celsius");
}
