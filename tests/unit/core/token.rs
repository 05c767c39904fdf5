use super::*;

#[test]
fn named_tokens_compare_by_name() {
    assert_eq!(Token::down(), "D");
    assert!(Token::enter().is(Token::ENTER));
    assert!(Token::back().is_named());
    assert!(!Token::from('x').is_named());
}

#[test]
fn as_char_skips_keypad_alphabet() {
    assert_eq!(Token::from('a').as_char(), Some('a'));
    assert_eq!(Token::from('é').as_char(), Some('é'));
    assert_eq!(Token::up().as_char(), None);
    assert_eq!(Token::enter().as_char(), None);
    assert_eq!(Token::from("ab").as_char(), None);
    assert_eq!(Token::from("").as_char(), None);
}

#[test]
fn token_serializes_as_plain_string() {
    let json = serde_json::to_string(&Token::enter()).unwrap();
    assert_eq!(json, "\"ENTER\"");
    let back: Token = serde_json::from_str("\"BACK\"").unwrap();
    assert_eq!(back, Token::back());
}
