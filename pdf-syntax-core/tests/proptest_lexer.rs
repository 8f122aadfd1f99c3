//! Property-based tests for tokenizer robustness and resolution safety
//!
//! Tests that the tokenizer terminates and never panics on arbitrary input,
//! and that reference resolution terminates on arbitrary reference graphs
//! without moving the source's cursor.

use pdf_syntax::{IndirectObject, ObjectSource, ObjectTable, PdfObject, Reference, Tokenizer};
use proptest::prelude::*;
use std::io::{Cursor, SeekFrom};

// Strategy for generating PDF-like token soup
fn pdf_fragment_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        prop_oneof![
            "[a-zA-Z0-9 ]{0,20}".prop_map(|s| s.into_bytes()),
            "[a-zA-Z0-9()\\\\]{0,20}".prop_map(|s| format!("({s}").into_bytes()),
            "[0-9A-Fa-f ]{0,20}".prop_map(|s| format!("<{s}>").into_bytes()),
            "[a-zA-Z#0-9]{0,10}".prop_map(|s| format!("/{s}").into_bytes()),
            Just(b"<<".to_vec()),
            Just(b">>".to_vec()),
            Just(b"%comment\n".to_vec()),
        ],
        0..20,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn test_tokenizer_terminates_on_arbitrary_bytes(input in prop::collection::vec(any::<u8>(), 0..512)) {
        let len = input.len();
        let mut tokenizer = Tokenizer::new(Cursor::new(input));
        let mut count = 0usize;
        while let Some(token) = tokenizer.next_token().unwrap() {
            prop_assert!(!token.is_empty());
            count += 1;
            // Every token consumes at least one byte
            prop_assert!(count <= len);
        }
        prop_assert!(tokenizer.position() <= len);
    }

    #[test]
    fn test_tokenizer_handles_pdf_fragments(input in pdf_fragment_strategy()) {
        let tokens: Vec<_> = Tokenizer::new(Cursor::new(input))
            .collect::<Result<_, _>>()
            .unwrap();
        for token in tokens {
            match token.trigger() {
                b'(' => prop_assert_eq!(token.as_bytes().last(), Some(&b')')),
                b'<' if !token.is_dict_start() => {
                    prop_assert_eq!(token.as_bytes().last(), Some(&b'>'))
                }
                _ => {}
            }
        }
    }

    #[test]
    fn test_number_hint_matches_digits(word in "[0-9a-z.+-]{1,12}") {
        let mut tokenizer = Tokenizer::new(Cursor::new(word.clone().into_bytes()));
        let token = tokenizer.next_token().unwrap().unwrap();
        prop_assert_eq!(token.as_bytes(), word.as_bytes());
        prop_assert_eq!(token.is_number(), word.bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn test_resolution_terminates_and_restores_cursor(
        targets in prop::collection::vec(prop::option::of(1u32..16), 1..16),
        start in 1u32..16,
        offset in 0u64..64,
    ) {
        // Object n points at targets[n - 1], or holds an integer when None
        let mut table = ObjectTable::new(Cursor::new(vec![0u8; 2048]));
        for (i, target) in targets.iter().enumerate() {
            let number = i as u32 + 1;
            let value = match target {
                Some(t) => PdfObject::Reference(Reference::new(*t, 0)),
                None => PdfObject::Integer(i64::from(number)),
            };
            table.insert(100 + 10 * u64::from(number), IndirectObject::new(number, 0, value));
        }
        table.seek(SeekFrom::Start(offset)).unwrap();

        let result = Reference::new(start, 0).resolve_object(&mut table);
        prop_assert_eq!(table.current_offset().unwrap(), offset);

        if let Ok(object) = result {
            prop_assert!(object.is_placeholder() || object.value.as_ref().and_then(PdfObject::as_integer).is_some());
        }
    }
}
