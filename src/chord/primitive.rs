use nom::character::complete::{digit0, satisfy};
use nom::combinator::{all_consuming, map, map_res};
use nom::{IResult, Parser};

/// Parse the leading string digit of a token.
fn parse_string_digit(i: &str) -> IResult<&str, u8> {
    map(satisfy(|c: char| c.is_ascii_digit()), |c| c as u8 - b'0').parse(i)
}

/// Parse the trailing fret digits, an empty remainder meaning the open string.
fn parse_fret_digits(i: &str) -> IResult<&str, u32> {
    map_res(digit0, |digits: &str| {
        if digits.is_empty() {
            Ok(0)
        } else {
            digits.parse::<u32>()
        }
    })
    .parse(i)
}

/// Split a digit token into (string number, fret number).
///
/// `"212"` splits into string 2 fret 12, `"30"` into string 3 fret 0 and a
/// bare digit like `"4"` is string 4 open. Anything but decimal digits is
/// rejected, including a sign.
pub fn split_token(i: &str) -> IResult<&str, (u8, u32)> {
    all_consuming((parse_string_digit, parse_fret_digits)).parse(i)
}

#[cfg(test)]
mod tests {
    use crate::chord::primitive::split_token;

    #[test]
    fn test_split_two_digit_token() {
        let (rest, (string, fret)) = split_token("42").unwrap();
        assert_eq!(rest, "");
        assert_eq!(string, 4);
        assert_eq!(fret, 2);
    }

    #[test]
    fn test_split_multi_digit_fret() {
        let (_rest, (string, fret)) = split_token("212").unwrap();
        assert_eq!(string, 2);
        assert_eq!(fret, 12);
    }

    #[test]
    fn test_split_bare_string_digit() {
        let (_rest, (string, fret)) = split_token("4").unwrap();
        assert_eq!(string, 4);
        assert_eq!(fret, 0);
    }

    #[test]
    fn test_reject_non_digit_tokens() {
        assert!(split_token("").is_err());
        assert!(split_token("x").is_err());
        assert!(split_token("4a").is_err());
        assert!(split_token("-12").is_err());
        assert!(split_token("4 2").is_err());
    }
}
