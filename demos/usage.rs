use std::fs::File;
use std::io::{BufWriter, Write};
use std::thread;

use piece_table::{PieceTable, PieceTableBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A `PieceTable` can be created either directly from a string or
    // incrementally using the `PieceTableBuilder`. Either way the text ends
    // up in the read-only original buffer.

    let mut builder = PieceTableBuilder::new();

    builder
        .append("I am a 🦀\n")
        .append("Who walks the shore\n")
        .append("And pinches toes all day.\n");

    let mut table: PieceTable = builder.build();

    assert_eq!(1, table.piece_count());

    // Positions count codepoints, not bytes, so the crab is a single rune.

    assert_eq!(Ok('🦀'), table.get_at(7));

    // Inserted text goes to the append-only add buffer and the table splits
    // the piece it lands in.

    table.insert(7, "sideways ")?;

    assert_eq!(3, table.piece_count());
    assert_eq!(table.get_sequence(0, 17)?.0, "I am a sideways 🦀");

    // Typing right after the previous insertion grows the same piece.

    for (i, ch) in "very ".chars().enumerate() {
        table.insert(7 + "sideways ".len() + i, &ch.to_string())?;
    }

    assert_eq!(3, table.piece_count());

    // Deleting never touches the buffers, it only trims and drops pieces.

    table.delete(0, 7)?;

    assert_eq!(table.get_sequence(0, 15)?.0, "sideways very 🦀");

    // Invalid positions are reported as errors instead of panicking.

    let err = table.delete(table.rune_len(), 1).unwrap_err();
    println!("{err}");

    // We can walk the `(position, char)` pairs of the document

    let crab = table.runes().find(|&(_, ch)| ch == '🦀').map(|(at, _)| at);

    assert_eq!(Some(14), crab);

    // or the chunks of text referenced by each piece, for example to save
    // the table to disk in a background thread.

    let cloned = table.clone();

    thread::spawn(move || -> std::io::Result<()> {
        let mut file = BufWriter::new(File::create("my_little_poem.txt")?);

        for chunk in cloned.chunks() {
            file.write_all(chunk.as_bytes())?;
        }

        file.flush()
    })
    .join()
    .map_err(|_| "the writer thread panicked")??;

    Ok(())
}
