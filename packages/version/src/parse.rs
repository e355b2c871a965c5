use {
	crate::{Error, Result, Stage, Version},
	winnow::{
		ascii::digit1,
		combinator::{alt, not, opt, preceded, repeat},
		prelude::*,
		token::{any, take_while},
	},
};

/// The number given to a pre-release identifier that has no explicit number.
const IMPLICIT_NUMBER: u64 = 1;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Token<'a> {
	Number(&'a str),
	Identifier(&'a str),
	Separator,
}

#[derive(Clone, Debug)]
enum Lexeme<'a> {
	Pair(&'a str, &'a str),
	Separator,
	Chunk(&'a str),
}

/// Parse a version.
///
/// The string must start with one to three dot separated numbers. Whatever follows, minus an optional hyphen, is read as a sequence of pre-release identifiers from the vocabulary `a`/`alpha`, `b`/`beta`, and `c`/`rc`, each with an optional number that defaults to 1.
pub fn parse(input: &str) -> Result<Version> {
	let mut rest = input;
	let Ok(main_version_piece) = leading_numbers.parse_next(&mut rest) else {
		tracing::debug!(input, "rejected a version without a leading number");
		return Err(Error::malformed(input, "expected a leading number"));
	};
	let main_version = main_version_piece
		.split('.')
		.map(|component| number(input, component))
		.collect::<Result<Vec<_>>>()?;

	// The main version is removed wherever it occurs, not only at the start.
	let pre_release_piece = remove_main_version(input, main_version_piece).to_lowercase();
	let tokens = tokenize(&pre_release_piece)
		.ok_or_else(|| Error::malformed(input, "failed to tokenize the pre-release"))?;
	let pre_release = pre_release(input, &tokens)?;

	tracing::trace!(input, ?main_version, ?pre_release, "parsed a version");
	Ok(Version {
		main_version,
		pre_release,
	})
}

fn leading_numbers<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
	(digit1, opt((".", digit1)), opt((".", digit1)))
		.take()
		.parse_next(input)
}

fn remove_main_version(input: &str, main_version_piece: &str) -> String {
	let mut output = String::with_capacity(input.len());
	let mut rest = input;
	while let Some(index) = rest.find(main_version_piece) {
		output.push_str(&rest[..index]);
		rest = &rest[index + main_version_piece.len()..];
		rest = rest.strip_prefix('-').unwrap_or(rest);
	}
	output.push_str(rest);
	output
}

pub(crate) fn tokenize(input: &str) -> Option<Vec<Token<'_>>> {
	repeat(0.., lexeme)
		.fold(Vec::new, |mut tokens, lexeme| {
			match lexeme {
				Lexeme::Pair(letters, digits) => {
					tokens.push(Token::Identifier(letters));
					tokens.push(Token::Number(digits));
				},
				Lexeme::Separator => {
					tokens.push(Token::Separator);
				},
				Lexeme::Chunk(chunk) if chunk.bytes().all(|byte| byte.is_ascii_digit()) => {
					tokens.push(Token::Number(chunk));
				},
				Lexeme::Chunk(chunk) => {
					tokens.push(Token::Identifier(chunk));
				},
			}
			tokens
		})
		.parse(input)
		.ok()
}

fn lexeme<'a>(input: &mut &'a str) -> ModalResult<Lexeme<'a>> {
	alt((
		pair.map(|(letters, digits)| Lexeme::Pair(letters, digits)),
		'.'.value(Lexeme::Separator),
		chunk.map(Lexeme::Chunk),
	))
	.parse_next(input)
}

/// A run of lowercase letters immediately followed by a run of digits, such as `beta2`.
fn pair<'a>(input: &mut &'a str) -> ModalResult<(&'a str, &'a str)> {
	(take_while(1.., 'a'..='z'), digit1).parse_next(input)
}

/// Everything up to the next separator or the next pair.
fn chunk<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
	repeat::<_, _, (), _, _>(1.., preceded((not(pair), not('.')), any))
		.take()
		.parse_next(input)
}

fn pre_release(input: &str, tokens: &[Token<'_>]) -> Result<Vec<u64>> {
	let mut pre_release = Vec::with_capacity(tokens.len() + 1);
	let mut pending_letter = false;
	for token in tokens {
		match *token {
			Token::Number(digits) => {
				pre_release.push(number(input, digits)?);
				pending_letter = false;
			},
			Token::Identifier(identifier) => {
				if pending_letter {
					pre_release.push(IMPLICIT_NUMBER);
				}
				let Some(stage) = Stage::from_identifier(identifier) else {
					tracing::debug!(input, identifier, "rejected an unknown pre-release identifier");
					return Err(Error::malformed(
						input,
						format!("unknown pre-release identifier {identifier:?}"),
					));
				};
				pre_release.push(stage.code());
				pending_letter = true;
			},
			Token::Separator => (),
		}
	}
	if pending_letter {
		pre_release.push(IMPLICIT_NUMBER);
	}
	Ok(pre_release)
}

fn number(input: &str, digits: &str) -> Result<u64> {
	digits
		.parse()
		.map_err(|_| Error::malformed(input, format!("the number {digits} is out of range")))
}
