use piece_table::{PieceTable, PieceTableBuilder};

mod common;

use common::{FIXTURES, NON_ASCII};

#[test]
fn builder_empty() {
    let table = PieceTableBuilder::new().build();
    table.assert_invariants();
    assert_eq!(PieceTable::new(), table);
    assert_eq!(0, table.piece_count());
}

#[test]
fn builder_matches_from_str() {
    let mut builder = PieceTableBuilder::new();

    for s in FIXTURES {
        builder.append(s);
    }

    let table = builder.build();
    table.assert_invariants();

    assert_eq!(FIXTURES.concat(), table);
    assert_eq!(PieceTable::from(FIXTURES.concat()), table);
    assert_eq!(1, table.piece_count());
}

#[test]
fn builder_char_by_char() {
    let mut builder = PieceTableBuilder::new();
    builder.add_capacity(NON_ASCII.len());

    for ch in NON_ASCII.chars() {
        builder.append(ch.to_string());
    }

    let mut table = builder.build();
    table.assert_invariants();
    assert_eq!(NON_ASCII, table);

    table.insert(table.rune_len(), "!").unwrap();
    table.assert_invariants();
    assert_eq!(format!("{NON_ASCII}!"), table.to_string());
}

#[test]
fn from_utf8() {
    let table = PieceTable::from_utf8(NON_ASCII.as_bytes().to_vec()).unwrap();
    table.assert_invariants();
    assert_eq!(NON_ASCII, table);

    // A lone continuation byte.
    let err = PieceTable::from_utf8(vec![b'a', 0x80]).unwrap_err();
    assert_eq!(piece_table::ErrorKind::InvalidArgument, err.kind());
}
