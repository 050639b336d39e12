use rstest::rstest;

use super::*;
use crate::CategoryRef;

fn records() -> Vec<Record> {
    let horror = CategoryRef::new(1, "Horror");
    let comedy = CategoryRef::new(2, "Comedy");
    vec![
        Record::new(1, "Ghost", horror.clone()).with_stock(5).with_rate(2.0),
        Record::new(2, "Gnome", comedy).with_stock(0).with_rate(3.0),
        Record::new(3, "Alien", horror).with_stock(2).with_rate(4.0),
    ]
}

fn sorted_ids(d: SortDirective, records: &[Record]) -> Vec<u64> {
    let mut refs: Vec<_> = records.iter().collect();
    d.sort(&mut refs);
    refs.iter().map(|r| r.id.0).collect()
}

#[rstest]
#[case(SortDirective::ascending(SortField::Title), vec![3, 1, 2])]
#[case(SortDirective::descending(SortField::Title), vec![2, 1, 3])]
#[case(SortDirective::ascending(SortField::Stock), vec![2, 3, 1])]
#[case(SortDirective::descending(SortField::Rate), vec![3, 2, 1])]
#[case(SortDirective::ascending(SortField::Category), vec![2, 1, 3])]
fn sort_by_field(#[case] d: SortDirective, #[case] expected: Vec<u64>) {
    assert_eq!(sorted_ids(d, &records()), expected);
}

#[test]
fn sort_is_stable_in_both_directions() {
    let c = CategoryRef::new(1, "Horror");
    let records = vec![
        Record::new(1, "B", c.clone()).with_stock(1),
        Record::new(2, "A", c.clone()).with_stock(1),
        Record::new(3, "C", c.clone()).with_stock(0),
        Record::new(4, "D", c).with_stock(1),
    ];
    assert_eq!(
        sorted_ids(SortDirective::ascending(SortField::Stock), &records),
        vec![3, 1, 2, 4]
    );
    assert_eq!(
        sorted_ids(SortDirective::descending(SortField::Stock), &records),
        vec![1, 2, 4, 3]
    );
}

#[test]
fn toggled_same_field_flips() {
    let d = SortDirective::ascending(SortField::Title);
    assert_eq!(d.toggled(SortField::Title), SortDirective::descending(SortField::Title));
    assert_eq!(
        d.toggled(SortField::Title).toggled(SortField::Title),
        SortDirective::ascending(SortField::Title)
    );
}

#[test]
fn toggled_other_field_ascending() {
    let d = SortDirective::descending(SortField::Title);
    assert_eq!(d.toggled(SortField::Rate), SortDirective::ascending(SortField::Rate));
}

#[rstest]
#[case("title", SortField::Title)]
#[case("category", SortField::Category)]
#[case("stock", SortField::Stock)]
#[case("rate", SortField::Rate)]
fn parse_field(#[case] s: &str, #[case] expected: SortField) {
    assert_eq!(s.parse::<SortField>().unwrap(), expected);
    assert_eq!(expected.to_string(), s);
}

#[test]
fn parse_unknown_field() {
    assert!("genre_id".parse::<SortField>().is_err());
}

#[test]
fn parse_direction() {
    assert_eq!("asc".parse::<SortDirection>().unwrap(), SortDirection::Ascending);
    assert_eq!("desc".parse::<SortDirection>().unwrap(), SortDirection::Descending);
    assert!("up".parse::<SortDirection>().is_err());
}

#[test]
fn direction_serde_matches_display() {
    let json = serde_json::to_string(&SortDirection::Descending).unwrap();
    assert_eq!(json, format!("\"{}\"", SortDirection::Descending));
    let d: SortDirective =
        serde_json::from_str(r#"{"field":"stock","direction":"asc"}"#).unwrap();
    assert_eq!(d, SortDirective::ascending(SortField::Stock));
    assert!(serde_json::from_str::<SortDirection>(r#""descending""#).is_err());
}

#[test]
fn directive_display() {
    assert_eq!(SortDirective::descending(SortField::Rate).to_string(), "rate desc");
}

#[test]
fn labels() {
    let labels: Vec<_> = SortField::ALL.iter().map(|f| f.label()).collect();
    assert_eq!(labels, ["Title", "Category", "Stock", "Rate"]);
}
