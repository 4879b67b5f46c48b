#![no_main]

use libfuzzer_sys::arbitrary::{self, Arbitrary};
use libfuzzer_sys::fuzz_target;
use piece_table::PieceTable;

const NON_ASCII: &str = "Ḽơᶉëᶆ ȋṕšᶙṁ ḍỡḽǭᵳ ʂǐť ӓṁệẗ,\r\n çṓɲṩḙċťᶒțûɾ 🦀 \
                         ấɖḯƥĭṩčįɳġ ḝłįʈ, șếᶑ ᶁⱺ ẽḭŭŝḿꝋď 𝔘𝔫𝔦𝔠𝔬𝔡𝔢 𐍈";

#[derive(Arbitrary, Clone, Debug)]
enum EditOp<'a> {
    Insert { position: usize, text: &'a str },
    Delete { position: usize, length: usize },
    Get { position: usize, length: usize },
}

#[derive(Arbitrary, Copy, Clone, Debug)]
enum StartingText<'a> {
    Custom(&'a str),
    NonAscii,
}

fuzz_target!(|data: (StartingText, Vec<EditOp>)| {
    let (starting, ops) = data;

    let mut table = PieceTable::from(match starting {
        StartingText::Custom(s) => s,
        StartingText::NonAscii => NON_ASCII,
    });

    let mut model = table.to_string();

    for op in ops {
        let len = table.rune_len();

        match op {
            EditOp::Insert { position, text }
                if position <= len && !text.is_empty() =>
            {
                table.insert(position, text).unwrap();
                let byte = table.byte_of_rune(position).unwrap();
                model.insert_str(byte, text);
            },

            EditOp::Delete { position, length }
                if length > 0
                    && position
                        .checked_add(length)
                        .is_some_and(|end| end <= len) =>
            {
                let start = table.byte_of_rune(position).unwrap();
                let end = table.byte_of_rune(position + length).unwrap();
                table.delete(position, length).unwrap();
                model.replace_range(start..end, "");
            },

            EditOp::Get { position, length } => {
                // Out of bounds reads must fail without panicking.
                match table.get_sequence(position, length) {
                    Ok((text, _)) => {
                        assert_eq!(length, text.chars().count())
                    },
                    Err(err) => {
                        assert!(position.saturating_add(length) > len, "{err}")
                    },
                }
                continue;
            },

            EditOp::Insert { position, text } => {
                assert!(table.insert(position, text).is_err());
                continue;
            },

            EditOp::Delete { position, length } => {
                assert!(table.delete(position, length).is_err());
                continue;
            },
        }

        assert_eq!(model, table);
    }

    table.assert_invariants();
});
