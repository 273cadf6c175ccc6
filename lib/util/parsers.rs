use nom::{branch::*, bytes::complete::*, character::complete::*, combinator::*, multi::*};
use nom::{error::*, sequence::*, *};
use std::str::FromStr;
use std::time::Duration;

pub fn int<T: FromStr>(input: &str) -> IResult<&str, T> {
    recognize((opt(alt([tag("-"), tag("+")])), digit1))
        .map_res(T::from_str)
        .parse(input)
}

/// A duration in milliseconds, where negative clocks count as exhausted.
pub fn millis(input: &str) -> IResult<&str, Duration> {
    int::<i64>
        .map(|ms| Duration::from_millis(ms.max(0).unsigned_abs()))
        .parse(input)
}

pub fn word(input: &str) -> IResult<&str, &str> {
    take_till1(char::is_whitespace).parse(input)
}

/// Everything up to, but excluding, the keyword `key` or the end of input.
pub fn until<'s>(key: &str) -> impl Parser<&'s str, Output = &'s str, Error = Error<&'s str>> {
    let key = preceded(multispace0, verify(word, move |w: &str| w == key));
    recognize(many1(preceded(not(key), (multispace0, word, multispace0)))).map(str::trim)
}

pub fn find<'s, O, F>(inner: F) -> impl Parser<&'s str, Output = O, Error = Error<&'s str>>
where
    F: Parser<&'s str, Output = O, Error = Error<&'s str>>,
{
    many_till(value((), anychar), inner).map(|(_, r)| r)
}

pub fn t<'s, O, F>(inner: F) -> impl Parser<&'s str, Output = O, Error = Error<&'s str>>
where
    F: Parser<&'s str, Output = O, Error = Error<&'s str>>,
{
    delimited(multispace0, inner, multispace0)
}

pub fn field<'s, O, V>(
    key: &str,
    value: V,
) -> impl Parser<&'s str, Output = O, Error = Error<&'s str>>
where
    V: Parser<&'s str, Output = O, Error = Error<&'s str>>,
{
    preceded(t(tag(key)), value)
}

#[expect(clippy::type_complexity)]
pub fn gather<'s, A, B, C, D, E, F, G, H, I>(
    inner: (A, B, C, D, E, F, G, H, I),
) -> impl Parser<
    &'s str,
    Output = (
        Option<<A as Parser<&'s str>>::Output>,
        Option<<B as Parser<&'s str>>::Output>,
        Option<<C as Parser<&'s str>>::Output>,
        Option<<D as Parser<&'s str>>::Output>,
        Option<<E as Parser<&'s str>>::Output>,
        Option<<F as Parser<&'s str>>::Output>,
        Option<<G as Parser<&'s str>>::Output>,
        Option<<H as Parser<&'s str>>::Output>,
        Option<<I as Parser<&'s str>>::Output>,
    ),
    Error = Error<&'s str>,
>
where
    A: Parser<&'s str, Error = Error<&'s str>>,
    B: Parser<&'s str, Error = Error<&'s str>>,
    C: Parser<&'s str, Error = Error<&'s str>>,
    D: Parser<&'s str, Error = Error<&'s str>>,
    E: Parser<&'s str, Error = Error<&'s str>>,
    F: Parser<&'s str, Error = Error<&'s str>>,
    G: Parser<&'s str, Error = Error<&'s str>>,
    H: Parser<&'s str, Error = Error<&'s str>>,
    I: Parser<&'s str, Error = Error<&'s str>>,
{
    let (mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h, mut i) = inner;

    move |input: &'s str| {
        let mut output = (None, None, None, None, None, None, None, None, None);

        let a = |s| a.parse(s);
        let b = |s| b.parse(s);
        let c = |s| c.parse(s);
        let d = |s| d.parse(s);
        let e = |s| e.parse(s);
        let f = |s| f.parse(s);
        let g = |s| g.parse(s);
        let h = |s| h.parse(s);
        let i = |s| i.parse(s);

        let inner = alt((
            a.map(|o| output.0 = Some(o)),
            b.map(|o| output.1 = Some(o)),
            c.map(|o| output.2 = Some(o)),
            d.map(|o| output.3 = Some(o)),
            e.map(|o| output.4 = Some(o)),
            f.map(|o| output.5 = Some(o)),
            g.map(|o| output.6 = Some(o)),
            h.map(|o| output.7 = Some(o)),
            i.map(|o| output.8 = Some(o)),
        ));

        let (rest, ()) = fold_many0(inner, || (), |(), ()| ()).parse(input)?;
        Ok((rest, output))
    }
}
