use nom::{
    bytes::complete::{take_till, take_till1, take_while},
    character::complete::char,
    combinator::rest,
    sequence::separated_pair,
    IResult,
};

use crate::segment::{Segment, Span};

fn is_delimiter(c: char) -> bool {
    c == '{' || c == '}'
}

/// `type=value`, split at the first `=`.
fn layer_assignment(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(take_till(|c| c == '='), char('='), rest)(input)
}

fn classify(body: &str) -> Segment<'_> {
    match layer_assignment(body) {
        Ok((_, (tag, value))) => Segment::Layer { tag, value },
        Err(_) => Segment::Name(body),
    }
}

/// Splits an annotation string on `{` and `}` and classifies every
/// non-empty piece. Never fails: any input yields some (possibly empty)
/// list of segments.
pub fn scan_segments(original_input: &str) -> Vec<(Span, Segment<'_>)> {
    let mut input = original_input;
    let mut result = Vec::new();

    loop {
        // 1. Skip delimiters (empty pieces between "}{" vanish here)
        let (next_input, _) =
            match take_while::<_, &str, nom::error::Error<&str>>(is_delimiter)(input) {
                Ok(res) => res,
                Err(_) => break,
            };
        input = next_input;

        if input.is_empty() {
            break;
        }

        // 2. Take the piece up to the next delimiter
        let parse_res: IResult<&str, &str> = take_till1(is_delimiter)(input);

        match parse_res {
            Ok((next_input, body)) => {
                let start = original_input.len() - input.len();
                result.push((Span::new(start, start + body.len()), classify(body)));
                input = next_input;
            }
            Err(_) => break,
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_with_spans() {
        let input = "ev{semantics=TUR10-1}{posTag=NN}";
        let segments = scan_segments(input);

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].1, Segment::Name("ev"));
        assert_eq!(
            segments[1].1,
            Segment::Layer {
                tag: "semantics",
                value: "TUR10-1"
            }
        );
        let span = segments[2].0;
        assert_eq!(&input[span.start..span.end], "posTag=NN");
    }

    #[test]
    fn test_value_keeps_later_equals_signs() {
        let segments = scan_segments("{ccg=(S\\NP)=x}");
        assert_eq!(
            segments[0].1,
            Segment::Layer {
                tag: "ccg",
                value: "(S\\NP)=x"
            }
        );
    }

    #[test]
    fn test_delimiter_only_input() {
        assert!(scan_segments("").is_empty());
        assert!(scan_segments("{}{}}{").is_empty());
    }
}
