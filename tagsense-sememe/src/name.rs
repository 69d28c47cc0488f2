/// Split an `english|chinese` sememe name into `(chinese, english)`.
///
/// Anything other than exactly two parts is returned unchanged as both halves.
pub fn parse_sememe_name(text: &str) -> (&str, &str) {
    let mut parts = text.split('|');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(en), Some(zh), None) => (zh, en),
        _ => (text, text),
    }
}
