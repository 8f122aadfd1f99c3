//! Integration tests for the PDF tokenizer
//!
//! Exercises the tokenizer over realistic object bodies and the recovery
//! rules for malformed input.

use pdf_syntax::{ParseOptions, ParseWarning, Token, Tokenizer};
use pretty_assertions::assert_eq;
use std::io::Cursor;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn tokenize(input: &[u8]) -> Vec<Token> {
    init_tracing();
    Tokenizer::new(Cursor::new(input.to_vec()))
        .collect::<Result<Vec<_>, _>>()
        .expect("in-memory input never faults")
}

fn raw(tokens: &[Token]) -> Vec<Vec<u8>> {
    tokens.iter().map(|t| t.as_bytes().to_vec()).collect()
}

#[test]
fn test_object_body() {
    let input = b"4 0 obj\n<< /Type /Page /Parent 3 0 R /MediaBox [0 0 612 792]\n/Contents 5 0 R >>\nendobj\n";
    let tokens = tokenize(input);

    let expected: Vec<&[u8]> = vec![
        &b"4"[..], b"0", b"obj", b"<<", b"/Type", b"/Page", b"/Parent", b"3", b"0", b"R",
        b"/MediaBox", b"[", b"0", b"0", b"612", b"792", b"]", b"/Contents", b"5", b"0", b"R",
        b">>", b"endobj",
    ];
    assert_eq!(
        raw(&tokens),
        expected.into_iter().map(|b| b.to_vec()).collect::<Vec<_>>()
    );
}

#[test]
fn test_trigger_bytes() {
    let tokens = tokenize(b"(s) /n <41> << >> [ ] 1 true");
    let triggers: Vec<u8> = tokens.iter().map(|t| t.trigger()).collect();
    assert_eq!(triggers, b"(/<<>[]1t".to_vec());
}

#[test]
fn test_string_lexemes() {
    let tokens = tokenize(b"(abc) (a(b)c) (\\101) (line\\\ncontinued) <48656C6C6F>");
    let lexemes: Vec<Vec<u8>> = tokens.iter().map(|t| t.lexeme().to_vec()).collect();
    assert_eq!(
        lexemes,
        vec![
            b"abc".to_vec(),
            b"a(b)c".to_vec(),
            b"A".to_vec(),
            b"linecontinued".to_vec(),
            b"Hello".to_vec(),
        ]
    );
}

#[test]
fn test_name_with_escape() {
    let tokens = tokenize(b"/A#42B /Lime#20Green /A#42");
    assert_eq!(tokens[0].lexeme(), b"ABB");
    assert_eq!(tokens[1].lexeme(), b"Lime Green");
    assert_eq!(tokens[2].lexeme(), b"AB");
}

#[test]
fn test_dictionary_markers_are_distinct() {
    let tokens = tokenize(b"<<>> <> > <41>");
    assert_eq!(
        raw(&tokens),
        vec![
            b"<<".to_vec(),
            b">>".to_vec(),
            b"<>".to_vec(),
            b">".to_vec(),
            vec![b'<', 0x41, b'>'],
        ]
    );
    assert!(tokens[0].is_dict_start());
    assert!(tokens[1].is_dict_end());
    assert!(!tokens[2].is_dict_start());
    assert!(!tokens[3].is_dict_end());
}

#[test]
fn test_number_hint() {
    let tokens = tokenize(b"123 12a -5 +7 0.5 007");
    let hints: Vec<bool> = tokens.iter().map(|t| t.is_number()).collect();
    assert_eq!(hints, vec![true, false, false, false, false, true]);
}

#[test]
fn test_stream_keyword_followed_by_binary() {
    // The grammar layer takes over after `stream`; the tokenizer must only
    // have consumed the keyword itself.
    let mut tokenizer = Tokenizer::new(Cursor::new(b"stream\r\n\x00\x01".to_vec()));
    let token = tokenizer.next_token().unwrap().unwrap();
    assert_eq!(token.as_bytes(), b"stream");
    assert_eq!(tokenizer.position(), 6);
}

#[test]
fn test_truncated_input_recovery() {
    init_tracing();
    let options = ParseOptions::default().with_warnings(true);
    let mut tokenizer =
        Tokenizer::with_options(Cursor::new(b"/Name (unterminated <ab".to_vec()), options);

    let name = tokenizer.next_token().unwrap().unwrap();
    assert_eq!(name.lexeme(), b"Name");

    // The string swallows the rest of the input
    let string = tokenizer.next_token().unwrap().unwrap();
    assert_eq!(string.as_bytes(), b"(unterminated <ab)");
    assert!(tokenizer.next_token().unwrap().is_none());

    assert_eq!(
        tokenizer.warnings(),
        &[ParseWarning::UnterminatedString { position: 6 }]
    );
}

#[test]
fn test_hex_string_comment_and_whitespace() {
    let tokens = tokenize(b"<48 65 % note\n6C6C 6F>");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].lexeme(), b"Hello");
}

#[test]
fn test_only_whitespace_and_comments() {
    assert!(tokenize(b" \r\n\t\x0C\x00 % only a comment\n   ").is_empty());
}

#[test]
fn test_into_inner_returns_reader() {
    let mut tokenizer = Tokenizer::new(Cursor::new(b"abc".to_vec()));
    tokenizer.next_token().unwrap();
    assert_eq!(tokenizer.get_ref().get_ref(), &b"abc".to_vec());
    let cursor = tokenizer.into_inner();
    assert_eq!(cursor.get_ref(), &b"abc".to_vec());
}
