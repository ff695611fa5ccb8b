use super::parse::{search, search_all, statement, Statement};

/// Converts the body of a `path { ... }` block into SVG path data.
///
/// Each non blank line is tested against the statements in
/// [`Statement::ALL`] order, only the first statement kind found on a line is
/// emitted. An empty string means no statement was recognized.
pub fn convert_path_commands(body: &str) -> String {
    let mut tokens = Vec::new();

    for line in body.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let Some(kind) = Statement::ALL
            .into_iter()
            .find(|kind| search(line, |s| statement(s, *kind)).is_some())
        else {
            trace!("ignoring `{line}`");
            continue;
        };

        if kind == Statement::Close {
            tokens.push(Statement::Close.letter().to_string());
            continue;
        }

        tokens.extend(
            search_all(line, move |s| statement(s, kind))
                .filter_map(|operands| command(line, kind, &operands)),
        );
    }

    tokens.join(" ")
}

/// Curves are always `C`, the letter of any other statement comes from the
/// first keyword of [`Statement::TIE_BREAK`] present in the line.
fn command(line: &str, kind: Statement, operands: &[&str]) -> Option<String> {
    let emitted = match kind {
        Statement::CurveTo => kind,
        _ => Statement::TIE_BREAK
            .into_iter()
            .find(|candidate| line.contains(candidate.keyword()))?,
    };

    let command = std::iter::once(emitted.letter())
        .chain(
            operands
                .iter()
                .map(|operand| strip_unit_suffix(operand))
                .take(emitted.arity()),
        )
        .collect::<Vec<_>>()
        .join(" ");
    Some(command)
}

/// `10.5f` -> `10.5`, anything else is kept verbatim.
fn strip_unit_suffix(literal: &str) -> &str {
    literal.strip_suffix('f').unwrap_or(literal)
}

#[test]
fn close_only() {
    assert_eq!(convert_path_commands("\n    close()\n"), "Z");
}

#[test]
fn move_then_line() {
    let body = "\n    moveTo(10f, 20f)\n    lineTo(30f, 40f)\n";
    assert_eq!(convert_path_commands(body), "M 10 20 L 30 40");
}

#[test]
fn single_curve() {
    let body = "curveTo(1.5f, -2f, 3f, 4.25f, 5f, 6)";
    assert_eq!(convert_path_commands(body), "C 1.5 -2 3 4.25 5 6");
}

#[test]
fn vertical_and_horizontal() {
    let body = "moveTo(0f, 0f)\nverticalLineTo(12.5f)\nhorizontalLineTo(3f)\nclose()";
    assert_eq!(convert_path_commands(body), "M 0 0 V 12.5 H 3 Z");
}

#[test]
fn unrecognized_lines_are_dropped() {
    assert_eq!(convert_path_commands("reflectiveCurveTo(1f, 2f, 3f, 4f)\n\n"), "");
    assert_eq!(convert_path_commands(""), "");
    assert_eq!(
        convert_path_commands("arcTo(1f, 1f, 0f, false, true, 2f, 2f)\nlineTo(2f, 2f)"),
        "L 2 2"
    );
}

#[test]
fn keyword_decides_letter() {
    // the statement is a `lineTo` but `moveTo` is checked first
    assert_eq!(convert_path_commands("lineTo(1f, 2f) // was moveTo"), "M 1 2");
    // both calls on one line come from the first matching statement kind
    assert_eq!(
        convert_path_commands("moveTo(1f, 2f); moveTo(3f, 4f); lineTo(5f, 6f)"),
        "M 1 2 M 3 4"
    );
}

#[test]
fn literals_are_opaque() {
    // only one suffix character is removed, nothing is normalized
    assert_eq!(convert_path_commands("moveTo(1ff, 2.50f)"), "M 1f 2.50");
    assert_eq!(convert_path_commands("moveTo(x, y)"), "M x y");
}

#[test]
fn uppercase_suffix_is_kept() {
    assert_eq!(convert_path_commands("moveTo(3F, 4F)"), "M 3F 4F");
    assert_eq!(
        convert_path_commands("curveTo(1F, 2f, 3F, 4f, 5F, 6f)"),
        "C 1F 2 3F 4 5F 6"
    );
}

#[test]
fn whitespace_inside_operands_is_kept() {
    // the suffix is only stripped when it is the last character of the capture
    assert_eq!(convert_path_commands("moveTo(1f , 2f)"), "M 1f  2");
    assert_eq!(convert_path_commands("lineTo(1f, 2f )"), "L 1 2f ");
}
