use flatview_table::{StructProjection, Table, TableError, TableOptions, TableOptionsOverride};
use pretty_assertions::assert_eq;

/// vtable @0 (3 slots), table @12:
///   slot 4 -> i32 field = -5
///   slot 6 -> uoffset to the string "hi"
///   slot 8 -> absent
fn record() -> Vec<u8> {
    let mut buf = vec![
        10, 0, 12, 0, 4, 0, 8, 0, 0, 0, 0, 0, // vtable + padding
        12, 0, 0, 0, // soffset
        0xfb, 0xff, 0xff, 0xff, // i32 -5
        4, 0, 0, 0, // uoffset to string at 24
    ];
    buf.extend_from_slice(&[2, 0, 0, 0, b'h', b'i', 0, 0]);
    buf
}

#[test]
fn scalar_fields_through_the_vtable() {
    let buf = record();
    let table = Table::new(&buf, 12);

    assert_eq!(table.get_slot::<i32>(4, 0).unwrap(), -5);
    assert_eq!(table.get_slot::<i32>(8, 99).unwrap(), 99);
    assert_eq!(table.offset(6).unwrap(), 8);
}

#[test]
fn string_records() {
    let buf = record();
    let table = Table::new(&buf, 12);

    assert_eq!(table.string(20).unwrap(), "hi");
    assert_eq!(table.indirect(20).unwrap(), 24);
}

#[test]
fn string_limit_from_merged_options() {
    let buf = record();
    let base = TableOptions::default();
    let options = base.merge(&TableOptionsOverride {
        max_string_len: Some(1),
        ..Default::default()
    });
    let table = Table::with_options(&buf, 12, options);

    assert_eq!(
        table.string(20),
        Err(TableError::StringTooLong { len: 2, max: 1 })
    );
}

#[test]
fn string_past_end_of_buffer() {
    let buf = record();
    let table = Table::new(&buf, 12);

    // The i32 field read as a uoffset points far outside the buffer.
    assert!(matches!(
        table.string(16),
        Err(TableError::OutOfBounds { .. })
    ));
}

#[test]
fn raw_projection_is_anchored() {
    let buf = record();
    let table = Table::new(&buf, 12);
    let projected = <Table as StructProjection>::init(table.at(16));

    assert_eq!(projected.pos(), 16);
    assert_eq!(projected.get::<i32>(projected.pos()).unwrap(), -5);
}
