use super::*;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

fn inventory_header() -> Header {
    Header::from_names(names(&[
        "id",
        "name",
        "ean",
        "fixed_ean",
        "labelable",
        "is_labeled",
        "amount",
        "price",
    ]))
    .expect("header")
}

#[test]
fn header_resolves_roles_and_extras_in_column_order() {
    let header = inventory_header();
    assert_eq!(
        header.roles,
        vec![
            Role::Id,
            Role::Extra(0),
            Role::Ean,
            Role::FixedEan,
            Role::Labelable,
            Role::IsLabeled,
            Role::Amount,
            Role::Extra(1),
        ]
    );
}

#[test]
fn header_first_column_is_the_id_whatever_its_label() {
    let header = Header::from_names(names(&[
        "",
        "ean",
        "fixed_ean",
        "labelable",
        "is_labeled",
        "amount",
    ]))
    .expect("header");
    assert_eq!(header.roles[0], Role::Id);
}

#[test]
fn header_rejects_missing_required_column() {
    let err = Header::from_names(names(&["id", "ean", "fixed_ean", "labelable", "amount"]))
        .expect_err("missing is_labeled");
    assert!(err.to_string().contains("is_labeled"));
}

#[test]
fn header_rejects_duplicate_required_column() {
    let err = Header::from_names(names(&[
        "id",
        "ean",
        "ean",
        "fixed_ean",
        "labelable",
        "is_labeled",
        "amount",
    ]))
    .expect_err("duplicate ean");
    assert!(err.to_string().contains("duplicate"));
}

#[test]
fn record_round_trips_through_cells() {
    let header = inventory_header();
    let cells = names(&[
        "A-001",
        "Schraube M3",
        "4006381333931",
        "4006381333931",
        "1",
        "0",
        "2",
        "0,10",
    ]);
    let record = Record::from_cells(&header, &cells).expect("record");
    assert_eq!(record.id, "A-001");
    assert_eq!(record.ean, "4006381333931");
    assert!(record.pinned());
    assert!(record.labelable);
    assert!(!record.is_labeled);
    assert_eq!(record.amount, 2);
    assert_eq!(record.extras, names(&["Schraube M3", "0,10"]));
    assert_eq!(record.to_cells(&header), cells);
}

#[test]
fn record_parses_blank_flags_and_amount_as_defaults() {
    let header = inventory_header();
    let cells = names(&["A-002", "Riegel", "", "", "", "", "", "1,20"]);
    let record = Record::from_cells(&header, &cells).expect("record");
    assert_eq!(record.ean, "");
    assert!(!record.pinned());
    assert!(!record.labelable);
    assert!(!record.is_labeled);
    assert_eq!(record.amount, 0);
}

#[test]
fn record_accepts_decimal_comma_integral_cells() {
    let header = inventory_header();
    let cells = names(&["A-003", "x", "", "", "1,0", "0,00", "3,0", ""]);
    let record = Record::from_cells(&header, &cells).expect("record");
    assert!(record.labelable);
    assert!(!record.is_labeled);
    assert_eq!(record.amount, 3);
}

#[test]
fn record_rejects_bad_flag_and_names_the_column() {
    let header = inventory_header();
    let cells = names(&["A-004", "x", "", "", "2", "0", "1", ""]);
    let err = Record::from_cells(&header, &cells).expect_err("flag 2");
    let chain = format!("{err:#}");
    assert!(chain.contains("labelable"), "unexpected error: {chain}");
}

#[test]
fn record_rejects_empty_id() {
    let header = inventory_header();
    let cells = names(&["", "x", "", "", "0", "0", "1", ""]);
    assert!(Record::from_cells(&header, &cells).is_err());
}

#[test]
fn record_rejects_wrong_cell_count() {
    let header = inventory_header();
    let cells = names(&["A-005", "x"]);
    assert!(Record::from_cells(&header, &cells).is_err());
}

#[test]
fn whitespace_only_fixed_ean_still_pins() {
    let header = inventory_header();
    let cells = names(&["A-006", "x", "4006381333931", " ", "0", "0", "0", ""]);
    let record = Record::from_cells(&header, &cells).expect("record");
    assert!(record.pinned());
}

#[test]
fn parse_count_rejects_fractional_and_negative_values() {
    assert!(parse_count("3,5").is_err());
    assert!(parse_count("3,").is_err());
    assert!(parse_count("-1").is_err());
    assert!(parse_count("x").is_err());
    assert_eq!(parse_count(" 4 ").expect("trimmed"), 4);
    assert_eq!(parse_count("0,000").expect("zero"), 0);
}

#[test]
fn parse_flag_accepts_only_zero_and_one() {
    assert!(!parse_flag("").expect("empty"));
    assert!(!parse_flag("0").expect("zero"));
    assert!(parse_flag("1").expect("one"));
    assert!(parse_flag("2").is_err());
    assert!(parse_flag("yes").is_err());
}
