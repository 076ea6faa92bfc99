//! Unit tests for Dragon Shield export reading.

use super::*;
use crate::error::ErrorKind;

const HEADER: &str = "Folder Name,Quantity,Trade Quantity,Card Name,Set Code,Set Name,Card Number,Condition,Printing,Language,Price Bought,Date Bought,LOW,MID,MARKET";

fn export(rows: &[&str]) -> String {
    let mut content = format!("\"sep=,\"\n{HEADER}\n");
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    content
}

mod parse_delimiter_line_tests {
    use super::*;

    #[test]
    fn reads_plain_declaration() {
        assert_eq!(parse_delimiter_line("sep=,\n"), Some(b','));
        assert_eq!(parse_delimiter_line("sep=;"), Some(b';'));
    }

    #[test]
    fn strips_quotes_and_line_endings() {
        assert_eq!(parse_delimiter_line("\"sep=;\"\n"), Some(b';'));
        assert_eq!(parse_delimiter_line("\"sep=,\"\r\n"), Some(b','));
    }

    #[test]
    fn keeps_tab_delimiter() {
        assert_eq!(parse_delimiter_line("sep=\t\n"), Some(b'\t'));
    }

    #[test]
    fn rejects_missing_assignment() {
        assert_eq!(parse_delimiter_line("Folder Name,Quantity"), None);
        assert_eq!(parse_delimiter_line(""), None);
    }

    #[test]
    fn rejects_empty_or_long_delimiter() {
        assert_eq!(parse_delimiter_line("sep=\n"), None);
        assert_eq!(parse_delimiter_line("sep=\"\""), None);
        assert_eq!(parse_delimiter_line("sep=;;"), None);
    }
}

mod parse_str_tests {
    use super::*;

    #[test]
    fn parses_rows_in_order() {
        let content = export(&[
            "Deck,4,0,Lightning Bolt,2X2,Double Masters 2022,117,NearMint,Foil,English,0.5,2023-01-01,1,2,3",
            "Deck,1,1,Sol Ring,CMR,Commander Legends,472,Good,Normal,English,1,2023-01-01,1,2,3",
            "Deck,2,0,Arcane Signet,CMM,Commander Masters,367,Played,Etched,Japanese,1,2023-01-01,1,2,3",
        ]);

        let cards = parse_str(&content, &ParseOptions::default()).unwrap();

        assert_eq!(cards.len(), 3);
        let names: Vec<&str> = cards.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["Lightning Bolt", "Sol Ring", "Arcane Signet"]);

        assert_eq!(cards[0].quantity(), "4");
        assert_eq!(cards[0].trade_quantity(), "0");
        assert_eq!(cards[0].set_code(), "2X2");
        assert_eq!(cards[0].set_name(), "Double Masters 2022");
        assert_eq!(cards[0].collector_number(), "117");
        assert_eq!(cards[0].condition_code(), "NM");
        assert_eq!(cards[0].foil_flag(), "foil");
        assert_eq!(cards[0].language(), "English");

        assert_eq!(cards[1].condition_code(), "LP");
        assert_eq!(cards[1].foil_flag(), "");

        assert_eq!(cards[2].condition_code(), "HP");
        assert_eq!(cards[2].foil_flag(), "etched");
        assert_eq!(cards[2].language(), "Japanese");
    }

    #[test]
    fn skips_rows_with_empty_quantity() {
        let content = export(&[
            "Deck,4,0,Lightning Bolt,2X2,Double Masters 2022,117,NearMint,Foil,English,0.5,2023-01-01,1,2,3",
            "Deck,,0,Ghost Row,2X2,Double Masters 2022,1,NearMint,Normal,English,0,2023-01-01,1,2,3",
            "Deck,1,0,Sol Ring,CMR,Commander Legends,472,Good,Normal,English,1,2023-01-01,1,2,3",
            ",,,,,,,,,,,,,,",
        ]);

        let cards = parse_str(&content, &ParseOptions::default()).unwrap();

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].name(), "Lightning Bolt");
        assert_eq!(cards[1].name(), "Sol Ring");
    }

    #[test]
    fn skips_short_filler_row() {
        let content = export(&[
            "Deck,1,0,Sol Ring,CMR,Commander Legends,472,Good,Normal,English,1,2023-01-01,1,2,3",
            "Deck",
        ]);

        let cards = parse_str(&content, &ParseOptions::default()).unwrap();
        assert_eq!(cards.len(), 1);
    }

    #[test]
    fn keeps_empty_quantity_when_filter_disabled() {
        let content = export(&[
            "Deck,,0,Ghost Row,2X2,Double Masters 2022,1,NearMint,Normal,English,0,2023-01-01,1,2,3",
        ]);
        let options = ParseOptions {
            skip_empty_quantity: false,
        };

        let cards = parse_str(&content, &options).unwrap();

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].quantity(), "");
    }

    #[test]
    fn copies_text_fields_verbatim() {
        let content = export(&[
            "Deck,3, 1 ,  Jace  the Mind Sculptor ,wwk,Worldwake,31a,Mint,normal, en ,0,2023-01-01,1,2,3",
        ]);

        let cards = parse_str(&content, &ParseOptions::default()).unwrap();

        assert_eq!(cards[0].trade_quantity(), " 1 ");
        assert_eq!(cards[0].name(), "  Jace  the Mind Sculptor ");
        assert_eq!(cards[0].set_code(), "wwk");
        assert_eq!(cards[0].collector_number(), "31a");
        assert_eq!(cards[0].language(), " en ");
        assert_eq!(cards[0].condition_code(), "M");
    }

    #[test]
    fn unknown_condition_and_printing_become_empty() {
        let content = export(&[
            "Deck,1,0,Sol Ring,CMR,Commander Legends,472,Damaged,Foil Etched,English,1,2023-01-01,1,2,3",
            "Deck,1,0,Sol Ring,CMR,Commander Legends,472,,,English,1,2023-01-01,1,2,3",
        ]);

        let cards = parse_str(&content, &ParseOptions::default()).unwrap();

        for card in &cards {
            assert_eq!(card.condition(), None);
            assert_eq!(card.condition_code(), "");
            assert_eq!(card.printing(), None);
            assert_eq!(card.foil_flag(), "");
        }
    }

    #[test]
    fn honours_semicolon_declaration() {
        let content = "sep=;\r\n\
                       Quantity;Trade Quantity;Card Name;Set Code;Set Name;Card Number;Condition;Printing;Language\r\n\
                       1;0;Fire, Ice;MH2;Modern Horizons 2;290;Excellent;FOIL;English\r\n";

        let cards = parse_str(content, &ParseOptions::default()).unwrap();

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].name(), "Fire, Ice");
        assert_eq!(cards[0].language(), "English");
        assert_eq!(cards[0].condition_code(), "NM");
        assert_eq!(cards[0].foil_flag(), "foil");
    }

    #[test]
    fn unquotes_quoted_fields() {
        let content = export(&[
            "Deck,1,0,\"Borrowing 100,000 Arrows\",CMR,\"Commander Legends\",\"472\",Good,Normal,English,1,2023-01-01,1,2,3",
        ]);

        let cards = parse_str(&content, &ParseOptions::default()).unwrap();

        assert_eq!(cards[0].name(), "Borrowing 100,000 Arrows");
        assert_eq!(cards[0].collector_number(), "472");
    }

    #[test]
    fn header_only_yields_no_cards() {
        let cards = parse_str(&export(&[]), &ParseOptions::default()).unwrap();
        assert!(cards.is_empty());
    }
}

mod parse_errors {
    use super::*;

    #[test]
    fn empty_content_is_missing_delimiter() {
        let err = parse_str("", &ParseOptions::default()).unwrap_err();

        assert!(matches!(err, MoxifyError::MissingDelimiter { .. }));
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn header_in_first_line_is_invalid_delimiter() {
        let content = format!("{HEADER}\nDeck,1,0,Sol Ring,CMR,Commander Legends,472,Good,Normal,English,1,2023-01-01,1,2,3\n");

        let err = parse_str(&content, &ParseOptions::default()).unwrap_err();

        match &err {
            MoxifyError::InvalidDelimiter { line, .. } => assert_eq!(line, HEADER),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn missing_column_is_reported() {
        let content = "sep=,\nQuantity,Trade Quantity,Card Name,Set Code,Set Name,Card Number,Condition,Language\n1,0,Sol Ring,CMR,Commander Legends,472,Good,English\n";

        let err = parse_str(content, &ParseOptions::default()).unwrap_err();

        match &err {
            MoxifyError::MissingColumn { column, .. } => assert_eq!(*column, "Printing"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn declaration_without_header_is_missing_column() {
        let err = parse_str("sep=,\n", &ParseOptions::default()).unwrap_err();

        assert!(matches!(
            err,
            MoxifyError::MissingColumn {
                column: "Quantity",
                ..
            }
        ));
    }

    #[test]
    fn truncated_row_is_reported() {
        let content = export(&["Deck,1,0,Sol Ring,CMR"]);

        let err = parse_str(&content, &ParseOptions::default()).unwrap_err();

        match &err {
            MoxifyError::IncompleteRow { row, column, .. } => {
                assert_eq!(*row, 3);
                assert_eq!(*column, "Set Name");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = parse("/this/file/does/not/exist.csv").unwrap_err();

        assert!(matches!(err, MoxifyError::FileNotFound { .. }));
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
