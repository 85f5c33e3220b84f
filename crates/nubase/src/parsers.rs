//! Set of useful parser combinators for NUBASE table fields

// nom parser combinators
use nom::bytes::complete::{tag, take_till, take_until, take_while1};
use nom::combinator::map_res;
use nom::sequence::preceded;
use nom::{self, IResult};

/// Get the first unsigned integer anywhere in a field
///
/// The atomic number column is zero padded, e.g. `078`.
pub(crate) fn first_unsigned(i: &str) -> IResult<&str, u32> {
    preceded(
        take_till(|c: char| c.is_ascii_digit()),
        nom::character::complete::u32,
    )(i)
}

/// Get the first decimal number anywhere in a field
///
/// Estimated values in NUBASE carry a trailing `#`, which is dropped.
pub(crate) fn first_decimal(i: &str) -> IResult<&str, f64> {
    let (i, _) = take_till(is_numeric)(i)?;
    map_res(take_while1(is_numeric), str::parse::<f64>)(i)
}

/// Get the isotopic abundance (%) from the decay mode column
///
/// Naturally occurring nuclides are tagged as `IS=<abundance> <unc>`, e.g.
/// `IS=0.012 1;A=100` for Pt-190.
pub(crate) fn isotopic_abundance(i: &str) -> IResult<&str, f64> {
    let (i, _) = take_until("IS=")(i)?;
    preceded(
        tag("IS="),
        map_res(
            take_while1(|c: char| c.is_ascii_digit() || c == '.'),
            str::parse::<f64>,
        ),
    )(i)
}

/// Individual tokens of the decay mode column
///
/// Modes and intensities are separated by any of `;=~<`, so `B-=100;B-A=100`
/// gives `B-`, `100`, `B-A`, `100`.
pub(crate) fn decay_tokens(i: &str) -> impl Iterator<Item = &str> {
    i.split(|c: char| matches!(c, ';' | '=' | '~' | '<'))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

fn is_numeric(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == '-'
}
