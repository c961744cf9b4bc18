//! Integration tests for csvscan

use csvscan::{parse, CsvParser, ParseError, ParseMode, Table};

struct Case {
    name: &'static str,
    input: &'static str,
    expected: Vec<Vec<&'static str>>,
}

fn shared_cases() -> Vec<Case> {
    vec![
        Case {
            name: "line",
            input: "one,2,,three",
            expected: vec![vec!["one", "2", "", "three"]],
        },
        Case {
            name: "multiple_lines",
            input: "one,2,,three\nfive,six,\"hello,q\"",
            expected: vec![vec!["one", "2", "", "three"], vec!["five", "six", "hello,q"]],
        },
        Case {
            name: "quotes",
            input: "one,\"qu,ote\",2,,three",
            expected: vec![vec!["one", "qu,ote", "2", "", "three"]],
        },
        Case {
            name: "crlf",
            input: "one,2,,three\r\nfour,five",
            expected: vec![vec!["one", "2", "", "three"], vec!["four", "five"]],
        },
        Case {
            name: "edge_empty_fields",
            input: ",a,\n,",
            expected: vec![vec!["", "a", ""], vec!["", ""]],
        },
    ]
}

fn permissive() -> CsvParser {
    CsvParser::default().mode(ParseMode::Permissive)
}

#[test]
fn test_cases_strict() {
    for case in shared_cases() {
        let result = parse(case.input).unwrap();
        assert_eq!(result, case.expected, "case {} failed", case.name);
    }
}

#[test]
fn test_cases_permissive() {
    for case in shared_cases() {
        let result = permissive().parse(case.input).unwrap();
        assert_eq!(result, case.expected, "case {} failed", case.name);
    }
}

#[test]
fn test_deterministic() {
    let input = "a,\"b,c\"\r\n,\"\",d\n\"x\ny\"";
    assert_eq!(permissive().parse(input), permissive().parse(input));
    assert_eq!(parse(input), parse(input));
}

#[test]
fn test_row_and_field_counts() {
    let input = "a,b,c\nd\n,,,\ne,f";
    let table = parse(input).unwrap();

    assert_eq!(table.len(), input.matches('\n').count() + 1);
    for (row, line) in table.iter().zip(input.split('\n')) {
        assert_eq!(row.len(), line.matches(',').count() + 1);
    }
}

#[test]
fn test_serialize_then_parse() {
    let table: Table = vec![
        vec!["id".into(), "name".into(), "".into()],
        vec!["1".into(), "Alice Smith".into(), "x".into()],
        vec!["".into()],
        vec!["2".into(), "Bob".into(), "".into()],
    ];
    let text = table
        .iter()
        .map(|row| row.join(","))
        .collect::<Vec<_>>()
        .join("\n");

    assert_eq!(parse(&text).unwrap(), table);
    assert_eq!(permissive().parse(&text).unwrap(), table);
}

#[test]
fn test_trailing_newline_per_mode() {
    assert_eq!(parse("a,b\n").unwrap(), vec![vec!["a", "b"]]);
    assert_eq!(
        permissive().parse("a,b\n").unwrap(),
        vec![vec!["a", "b"], vec![""]]
    );
}

#[test]
fn test_strict_errors_report_position() {
    let err = parse("ok,row\nbad,\"never closed").unwrap_err();
    assert_eq!(err, ParseError::MalformedField { line: 2, column: 5 });

    let err = parse("ok\r\nok\r\n\"q\" ,x").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnexpectedCharacterAfterQuote {
            line: 3,
            column: 4,
            found: ' ',
        }
    );
}

#[test]
fn test_permissive_never_fails() {
    let inputs = ["\"", "\"\"\"", "a\"b\"c\"", "\r", "\r\r\n\n", ",\"\n\""];
    for input in inputs {
        let table = permissive().parse(input).unwrap();
        assert!(!table.is_empty(), "no rows for {:?}", input);
    }
}

#[test]
fn test_parser_is_shareable_across_threads() {
    let parser = CsvParser::default();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || parser.parse(&format!("{},\"t{}\"", i, i)).unwrap())
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let table = handle.join().unwrap();
        assert_eq!(table, vec![vec![i.to_string(), format!("t{}", i)]]);
    }
}
