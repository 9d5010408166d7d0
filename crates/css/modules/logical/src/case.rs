/// Convert a hyphen-case CSS name to the camelCase form used by inline-style objects.
///
/// Every `-` followed by an ASCII word character (`[A-Za-z0-9_]`) is dropped and
/// that character is uppercased. A hyphen followed by anything else, or at the
/// end of the input, is kept.
pub fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();
    while let Some(character) = chars.next() {
        if character == '-'
            && let Some(next) = chars.next_if(|&next| is_word_char(next))
        {
            out.push(next.to_ascii_uppercase());
            continue;
        }
        out.push(character);
    }
    out
}

const fn is_word_char(character: char) -> bool {
    character.is_ascii_alphanumeric() || character == '_'
}
