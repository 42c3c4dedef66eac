//! Line lexer for Dayspan input.
//!
//! The lexer splits source text into [`SourceLine`]s, each holding the
//! whitespace-separated words of one line together with their spans. It
//! never fails: any text is a sequence of (possibly empty) lines.
//!
//! Lines end at `\r\n`, `\n` or a lone `\r`. A trailing line break does not
//! start another line, so `"1\n2 3\n"` has two lines while `"\n"` has one
//! empty line and `""` has none.

use log::trace;
use winnow::{
    Parser as _,
    combinator::{alt, opt, preceded, repeat},
    error::{ContextError, ModalResult},
    stream::{LocatingSlice, Location, Stream},
    token::{take_till, take_while},
};

use crate::span::{Span, Spanned};

type Input<'src> = LocatingSlice<&'src str>;
type IResult<O> = ModalResult<O, ContextError>;

/// One line of source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine<'src> {
    /// 1-based line number.
    pub number: usize,
    /// The whole line, excluding the terminating newline.
    pub span: Span,
    /// The line with surrounding whitespace removed.
    pub text: &'src str,
    /// Maximal runs of non-whitespace characters, in order.
    pub words: Vec<Spanned<&'src str>>,
}

impl SourceLine<'_> {
    /// Returns `true` if the line holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.words.is_empty()
    }

    /// Span covering the words from `index` onwards, if there are any.
    pub fn words_span_from(&self, index: usize) -> Option<Span> {
        let first = self.words.get(index)?;
        let last = self.words.last()?;
        Some(first.span().union(last.span()))
    }

    /// Span of the trimmed text, falling back to the whole line when blank.
    pub fn text_span(&self) -> Span {
        self.words_span_from(0).unwrap_or(self.span)
    }
}

fn is_line_space(c: char) -> bool {
    c.is_whitespace() && c != '\n' && c != '\r'
}

/// Parse whitespace that does not end the line
fn blank(input: &mut Input<'_>) -> IResult<()> {
    take_while(0.., is_line_space).void().parse_next(input)
}

/// Parse a single word with span preservation
fn word<'src>(input: &mut Input<'src>) -> IResult<Spanned<&'src str>> {
    take_till(1.., char::is_whitespace)
        .with_span()
        .map(|(word, range)| Spanned::new(word, Span::new(range)))
        .parse_next(input)
}

/// Parse a line break
fn line_break<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    alt(("\r\n", "\n", "\r")).parse_next(input)
}

/// Parse one line and its line break, if any
fn source_line<'src>(input: &mut Input<'src>) -> IResult<(Span, &'src str, Vec<Spanned<&'src str>>)> {
    let start = input.current_token_start();

    let (words, taken): (Vec<Spanned<&'src str>>, &'src str) =
        repeat(0.., preceded(blank, word)).with_taken().parse_next(input)?;
    blank.parse_next(input)?;

    let end = input.current_token_start();
    opt(line_break).parse_next(input)?;

    Ok((Span::new(start..end), taken.trim_start(), words))
}

/// Split source text into lines of words.
pub fn tokenize(source: &str) -> Vec<SourceLine<'_>> {
    let mut input = LocatingSlice::new(source);
    let mut lines = Vec::new();

    while input.eof_offset() > 0 {
        // `source_line` is built from optional parts only and consumes at
        // least one character of non-empty input.
        let Ok((span, text, words)) = source_line.parse_next(&mut input) else {
            break;
        };

        let number = lines.len() + 1;
        trace!(number, words = words.len(); "Tokenized line");

        lines.push(SourceLine {
            number,
            span,
            text,
            words,
        });
    }

    lines
}
