#[cfg(feature = "serde")]
mod tests {
    use piece_table::PieceTable;
    use serde_test::Token;

    #[test]
    fn ser_de_empty() {
        let table = PieceTable::new();
        serde_test::assert_tokens(&table, &[Token::Str("")]);
    }

    #[test]
    fn ser_de_single_piece() {
        let table = PieceTable::from("lorem ipsum");
        serde_test::assert_tokens(&table, &[Token::Str("lorem ipsum")]);
    }

    #[test]
    fn ser_de_multiple_pieces() {
        let mut table = PieceTable::from("lorem dolor");
        table.insert(6, "ipsuma ").unwrap();
        table.delete(11, 1).unwrap();
        assert_eq!(4, table.piece_count());

        serde_test::assert_tokens(&table, &[Token::Str("lorem ipsum dolor")]);
    }

    #[test]
    fn ser_de_multibyte() {
        let mut table = PieceTable::from("çğ語");
        table.insert(2, "日本").unwrap();

        serde_test::assert_tokens(&table, &[Token::Str("çğ日本語")]);
    }

    #[test]
    fn de_owned_string() {
        let table = PieceTable::from("lorem\r\nipsum");
        serde_test::assert_de_tokens(
            &table,
            &[Token::String("lorem\r\nipsum")],
        );
    }

    #[test]
    fn de_rejects_non_strings() {
        serde_test::assert_de_tokens_error::<PieceTable>(
            &[Token::U32(3)],
            "invalid type: integer `3`, expected a string",
        );
    }
}
