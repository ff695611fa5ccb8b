use nom::{
    bytes::complete::{is_not, tag, take_till, take_while, take_while1},
    character::complete::char,
    combinator::verify,
    sequence::{delimited, pair, tuple},
    IResult,
};

/// Drawing statements recognized inside a `path { ... }` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statement {
    MoveTo,
    LineTo,
    CurveTo,
    VerticalLineTo,
    HorizontalLineTo,
    Close,
}

impl Statement {
    /// Order in which a line is tested against the statement patterns.
    pub const ALL: [Statement; 6] = [
        Statement::MoveTo,
        Statement::LineTo,
        Statement::CurveTo,
        Statement::VerticalLineTo,
        Statement::HorizontalLineTo,
        Statement::Close,
    ];

    /// Order in which keywords are looked up in a line to pick the command
    /// letter of a non-curve statement.
    pub const TIE_BREAK: [Statement; 4] = [
        Statement::MoveTo,
        Statement::LineTo,
        Statement::VerticalLineTo,
        Statement::HorizontalLineTo,
    ];

    pub fn keyword(&self) -> &'static str {
        match self {
            Statement::MoveTo => "moveTo",
            Statement::LineTo => "lineTo",
            Statement::CurveTo => "curveTo",
            Statement::VerticalLineTo => "verticalLineTo",
            Statement::HorizontalLineTo => "horizontalLineTo",
            Statement::Close => "close",
        }
    }

    pub fn letter(&self) -> &'static str {
        match self {
            Statement::MoveTo => "M",
            Statement::LineTo => "L",
            Statement::CurveTo => "C",
            Statement::VerticalLineTo => "V",
            Statement::HorizontalLineTo => "H",
            Statement::Close => "Z",
        }
    }

    pub fn arity(&self) -> usize {
        match self {
            Statement::MoveTo | Statement::LineTo => 2,
            Statement::CurveTo => 6,
            Statement::VerticalLineTo | Statement::HorizontalLineTo => 1,
            Statement::Close => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderInvocation<'a> {
    pub name: &'a str,
    /// Default width, default height, viewport width, viewport height, verbatim.
    pub geometry: [&'a str; 4],
}

/// Leftmost match of `parser` anywhere in `input`, with the input left after it.
pub fn search<'a, O>(
    input: &'a str,
    mut parser: impl FnMut(&'a str) -> IResult<&'a str, O>,
) -> Option<(&'a str, O)> {
    input
        .char_indices()
        .find_map(|(at, _)| parser(&input[at..]).ok())
}

/// Every non-overlapping match of `parser` in `input`, left to right.
pub fn search_all<'a, O: 'a>(
    input: &'a str,
    mut parser: impl FnMut(&'a str) -> IResult<&'a str, O> + 'a,
) -> impl Iterator<Item = O> + 'a {
    let mut rest = input;
    std::iter::from_fn(move || {
        let (next, found) = search(rest, &mut parser)?;
        rest = next;
        Some(found)
    })
}

fn ws(s: &str) -> IResult<&str, &str> {
    take_while(char::is_whitespace)(s)
}

fn word(s: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '_')(s)
}

/// An argument running up to one of `stop`, after optional whitespace.
///
/// The whitespace is only skipped when something is left for the argument,
/// otherwise its last character becomes the argument.
fn operand<'a>(s: &'a str, stop: &str) -> IResult<&'a str, &'a str> {
    let (rest, lead) = ws(s)?;
    match is_not(stop)(rest) {
        Ok(found) => Ok(found),
        Err(err) => match lead.char_indices().last() {
            Some((at, _)) => Ok((rest, &lead[at..])),
            None => Err(err),
        },
    }
}

/// `,` then an [`operand`] running up to `stop`.
fn next_operand<'a>(s: &'a str, stop: &str) -> IResult<&'a str, &'a str> {
    let (s, _) = char(',')(s)?;
    operand(s, stop)
}

/// `val <namespace>.<group>.<Name>:`, yields `Name`.
pub fn property_name<'a>(s: &'a str, namespace: &str) -> IResult<&'a str, &'a str> {
    let (s, _) = pair(tag("val"), take_while1(char::is_whitespace))(s)?;
    let (s, _) = pair(tag(namespace), char('.'))(s)?;
    let (s, _) = pair(is_not("."), char('.'))(s)?;
    let (s, name) = word(s)?;
    let (s, _) = char(':')(s)?;
    Ok((s, name))
}

/// `ImageVector.Builder("name", width, height, viewportWidth, viewportHeight)`
pub fn builder_invocation(s: &str) -> IResult<&str, BuilderInvocation> {
    let (s, name) = delimited(
        tag("ImageVector.Builder(\""),
        take_till(|c| c == '"'),
        tag("\","),
    )(s)?;
    let (s, width) = operand(s, ",")?;
    let (s, height) = next_operand(s, ",")?;
    let (s, viewport_width) = next_operand(s, ",")?;
    let (s, viewport_height) = next_operand(s, ")")?;
    let (s, _) = char(')')(s)?;
    Ok((
        s,
        BuilderInvocation {
            name,
            geometry: [width, height, viewport_width, viewport_height],
        },
    ))
}

/// `path(...) { body }`, yields the body.
///
/// The arguments may span lines but must close right before the opening brace.
pub fn path_block(s: &str) -> IResult<&str, &str> {
    let (s, _) = tuple((tag("path"), ws, char('(')))(s)?;
    let (s, _) = verify(take_till(|c| c == '{'), |args: &str| {
        args.trim_end().ends_with(')')
    })(s)?;
    delimited(char('{'), take_till(|c| c == '}'), char('}'))(s)
}

/// `fill = SolidColor(Color.Name)`, yields `Name`.
pub fn fill_color(s: &str) -> IResult<&str, &str> {
    let (s, _) = tuple((tag("fill"), ws, char('='), ws))(s)?;
    delimited(tag("SolidColor(Color."), word, char(')'))(s)
}

/// One call of `kind`, yields its raw arguments.
pub fn statement(s: &str, kind: Statement) -> IResult<&str, Vec<&str>> {
    let (mut s, _) = pair(tag(kind.keyword()), char('('))(s)?;
    let arity = kind.arity();
    let mut operands = Vec::with_capacity(arity);
    for at in 0..arity {
        let stop = if at + 1 == arity { ")" } else { "," };
        let (rest, found) = if at == 0 {
            is_not(stop)(s)?
        } else {
            next_operand(s, stop)?
        };
        operands.push(found);
        s = rest;
    }
    let (s, _) = char(')')(s)?;
    Ok((s, operands))
}

#[test]
fn search_finds_leftmost_match() {
    let text = "val a = 1\nval MiuixIcons.Useful.Back: ImageVector\nval MiuixIcons.Useful.Next:";
    let found = search(text, |s| property_name(s, "MiuixIcons")).map(|(_, name)| name);
    assert_eq!(found, Some("Back"));
    assert_eq!(search(text, |s| property_name(s, "OtherIcons")), None);
}

#[test]
fn property_requires_group_and_colon() {
    assert!(property_name("val MiuixIcons.Back: ImageVector", "MiuixIcons").is_err());
    assert!(property_name("val MiuixIcons.Basic.Back = 1", "MiuixIcons").is_err());
    assert_eq!(
        property_name("val\tMiuixIcons.Basic.Check_2:", "MiuixIcons"),
        Ok(("", "Check_2"))
    );
}

#[test]
fn builder_captures_name_and_geometry() {
    let text = r#"_back = ImageVector.Builder("Back", 26.0f.dp, 26.0f.dp,  26.0f, 26.0f).apply {"#;
    let (_, builder) = search(text, builder_invocation).unwrap();
    assert_eq!(builder.name, "Back");
    assert_eq!(builder.geometry, ["26.0f.dp", "26.0f.dp", "26.0f", "26.0f"]);

    let (_, unnamed) = builder_invocation(r#"ImageVector.Builder("", 1, 2, 3, 4)"#).unwrap();
    assert_eq!(unnamed.name, "");
    assert!(search("ImageVector.Builder(name = \"Back\")", builder_invocation).is_none());
}

#[test]
fn path_blocks_span_lines() {
    let text = "path(\n    fill = SolidColor(Color.Black),\n    pathFillType = PathFillType.EvenOdd\n) {\n    moveTo(1f, 2f)\n    close()\n}\npath() { close() }";
    let bodies: Vec<_> = search_all(text, path_block).collect();
    assert_eq!(bodies.len(), 2);
    assert!(bodies[0].contains("moveTo(1f, 2f)"));
    assert_eq!(bodies[1], " close() ");

    // arguments that do not close right before the brace are not a block
    assert_eq!(search_all("path(a) x { close() }", path_block).count(), 0);
}

#[test]
fn fill_color_name() {
    let text = "path(fill =  SolidColor(Color.White), stroke = null)";
    assert_eq!(search(text, fill_color).map(|(_, c)| c), Some("White"));
    assert!(search("fill = SolidColor(Color(0xFF000000))", fill_color).is_none());
}

#[test]
fn statement_operands() {
    assert_eq!(
        statement("moveTo(10f, 20f)", Statement::MoveTo),
        Ok(("", vec!["10f", "20f"]))
    );
    assert_eq!(
        statement("curveTo(1f,2f, 3f, 4f, 5f, 6f)", Statement::CurveTo),
        Ok(("", vec!["1f", "2f", "3f", "4f", "5f", "6f"]))
    );
    assert_eq!(
        statement("verticalLineTo(-3.5f)", Statement::VerticalLineTo),
        Ok(("", vec!["-3.5f"]))
    );
    assert_eq!(statement("close()", Statement::Close), Ok(("", vec![])));
    assert!(statement("moveTo(10f)", Statement::MoveTo).is_err());
    // `lineTo` is case sensitive and does not match inside `verticalLineTo`
    assert!(search("verticalLineTo(1f)", |s| statement(s, Statement::LineTo)).is_none());
}
