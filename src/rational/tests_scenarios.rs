//! Scenario tables: arithmetic on parsed literals, parsing, expressions.
//!
//! Each table row is (left, right, expected mixed text). Failures report the
//! row so a broken case is visible without a debugger.

use super::{evaluate, parse_literal, try_parse_literal, Operator, RationalError};

const OPERATORS: [&str; 4] = [" - ", " * ", " / ", " + "];

fn apply_ok(op: Operator, lhs: &str, rhs: &str) -> String {
    let l = parse_literal(lhs).unwrap_or_else(|e| panic!("lhs={lhs:?} err={e}"));
    let r = parse_literal(rhs).unwrap_or_else(|e| panic!("rhs={rhs:?} err={e}"));
    op.apply(&l, &r)
        .unwrap_or_else(|e| panic!("{lhs} {op} {rhs} err={e}"))
        .to_mixed_text()
}

fn check_table(op: Operator, table: &[(&str, &str, &str)]) {
    for &(lhs, rhs, expected) in table {
        assert_eq!(apply_ok(op, lhs, rhs), expected, "{lhs} {op} {rhs}");

        // same through the expression grammar
        let expr = format!("{lhs} {op} {rhs}");
        let via_eval = evaluate(&expr)
            .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
            .to_mixed_text();
        assert_eq!(via_eval, expected, "expr={expr:?}");
    }
}

/* ------------------------ Arithmetic ------------------------ */

#[test]
fn multiplication_table() {
    check_table(
        Operator::Multiply,
        &[
            ("1", "1/2", "1/2"),
            ("-1", "1/2", "-1/2"),
            ("1", "-1/2", "-1/2"),
            ("-1/2", "-1/2", "1/4"),
            ("1/2", "1/2", "1/4"),
            ("-1/2", "1/2", "-1/4"),
            ("-5_1/2", "1/2", "-2_3/4"),
            ("-5_1/2", "-1/2", "2_3/4"),
            ("5_1/2", "-1/2", "-2_3/4"),
            ("3/9", "9", "3"),
            ("-9", "3/9", "-3"),
            ("0", "1/2", "0"),
            ("-0/4", "1/2", "0"),
            ("-0/4", "-1/2", "0"),
            ("-0/4", "-0/2", "0"),
            ("1/100", "100/1", "1"),
            ("-1/100", "100/1", "-1"),
            ("2", "5", "10"),
            ("-2", "5", "-10"),
            ("1/7", "1/5", "1/35"),
            ("1/7", "-1/5", "-1/35"),
            ("10_1/10", "1_5/10", "15_3/20"),
            ("10_1/10", "-1_5/10", "-15_3/20"),
        ],
    );
}

#[test]
fn division_table() {
    check_table(
        Operator::Divide,
        &[
            ("1", "1/2", "2"),
            ("-1", "1/2", "-2"),
            ("1", "-1/2", "-2"),
            ("-1/2", "-1/2", "1"),
            ("1/2", "1/2", "1"),
            ("-1/2", "1/2", "-1"),
            ("-5_1/2", "1/2", "-11"),
            ("-5_1/2", "-1/2", "11"),
            ("5_1/2", "-1/2", "-11"),
            ("3/9", "9", "1/27"),
            ("-9", "3/9", "-27"),
            ("0", "1/2", "0"),
            ("-0/4", "1/2", "0"),
            ("-0/4", "-1/2", "0"),
            ("2", "5", "2/5"),
            ("-2", "5", "-2/5"),
            ("1/7", "1/5", "5/7"),
            ("1/7", "-1/5", "-5/7"),
            ("10_1/10", "1_5/10", "6_11/15"),
            ("10_1/10", "-1_5/10", "-6_11/15"),
        ],
    );
}

#[test]
fn addition_table() {
    check_table(
        Operator::Add,
        &[
            ("1", "1/2", "1_1/2"),
            ("-1", "1/2", "-1/2"),
            ("1", "-1/2", "1/2"),
            ("-1/2", "-1/2", "-1"),
            ("1/2", "1/2", "1"),
            ("-1/2", "1/2", "0"),
            ("-5_1/2", "1/2", "-5"),
            ("-5_1/2", "-1/2", "-6"),
            ("5_1/2", "-1/2", "5"),
            ("3/9", "9", "9_1/3"),
            ("-9", "3/9", "-8_2/3"),
            ("0", "1/2", "1/2"),
            ("-0/4", "1/2", "1/2"),
            ("-0/4", "-1/2", "-1/2"),
            ("-0/4", "-0/2", "0"),
            ("1/100", "100/1", "100_1/100"),
            ("-1/100", "100/1", "99_99/100"),
            ("2", "5", "7"),
            ("-2", "5", "3"),
            ("1/7", "1/5", "12/35"),
            ("1/7", "-1/5", "-2/35"),
            ("10_1/10", "1_5/10", "11_3/5"),
            ("10_1/10", "-1_5/10", "8_3/5"),
        ],
    );
}

#[test]
fn subtraction_table() {
    check_table(
        Operator::Subtract,
        &[
            ("1", "1/2", "1/2"),
            ("-1", "1/2", "-1_1/2"),
            ("1", "-1/2", "1_1/2"),
            ("-1/2", "-1/2", "0"),
            ("1/2", "1/2", "0"),
            ("-1/2", "1/2", "-1"),
            ("-5_1/2", "1/2", "-6"),
            ("-5_1/2", "-1/2", "-5"),
            ("5_1/2", "-1/2", "6"),
            ("3/9", "9", "-8_2/3"),
            ("-9", "3/9", "-9_1/3"),
            ("0", "1/2", "-1/2"),
            ("-0/4", "1/2", "-1/2"),
            ("-0/4", "-1/2", "1/2"),
            ("-0/4", "-0/2", "0"),
            ("1/100", "100/1", "-99_99/100"),
            ("-1/100", "100/1", "-100_1/100"),
            ("2", "5", "-3"),
            ("-2", "5", "-7"),
            ("1/7", "1/5", "-2/35"),
            ("1/7", "-1/5", "12/35"),
            ("10_1/10", "1_5/10", "8_3/5"),
            ("10_1/10", "-1_5/10", "11_3/5"),
        ],
    );
}

#[test]
fn division_by_zero_literal() {
    let zero = parse_literal("0").unwrap();
    for lhs in ["1", "-1", "1_1/2", "-1_1/2", "3/2", "-3/2", "1/2", "-1/2"] {
        let l = parse_literal(lhs).unwrap();
        assert_eq!(
            Operator::Divide.apply(&l, &zero),
            Err(RationalError::DivideByZero),
            "lhs={lhs:?}"
        );
    }
}

/* ------------------------ Parsing ------------------------ */

#[test]
fn parse_valid_literals() {
    let cases = [
        ("-3/2", "-3/2"),
        ("1_1/2", "3/2"),
        ("0_1/2", "1/2"),
        ("1_2/4", "3/2"),
        ("-1_2/4", "-3/2"),
        ("7/9", "7/9"),
        ("-1/2", "-1/2"),
        ("1/2", "1/2"),
        ("3/2", "3/2"),
        ("6/3", "2"),
        ("-6/3", "-2"),
        ("9/6", "3/2"),
        ("-9/6", "-3/2"),
        ("12/9", "4/3"),
        ("-12/9", "-4/3"),
        ("2/2", "1"),
        ("-2/2", "-1"),
        ("1_2/2", "2"),
        ("0_0/5", "0"),
        ("0/5", "0"),
        ("-5", "-5"),
        ("2", "2"),
        ("-0", "0"),
        ("-2147483648", "-2147483648"),
        ("2147483647", "2147483647"),
    ];
    for (text, improper) in cases {
        let r = try_parse_literal(text).unwrap_or_else(|| panic!("text={text:?}"));
        assert_eq!(r.to_improper_fraction_text(), improper, "text={text:?}");
    }
}

#[test]
fn parse_invalid_literals_non_failing_form() {
    let absent: Option<&str> = None;
    assert!(try_parse_literal(absent).is_none());

    for text in [
        "7/-9", "1_-2/2", "0_0/-5", "0/-5", "1_-2/4", "", "A0", "7 _7/9", "9_8/", "9_8", "_9/8",
        "-1_2/0", "1_1/0", "5/0", "-1/0",
    ] {
        assert!(try_parse_literal(text).is_none(), "text={text:?}");
    }
}

#[test]
fn parse_malformed_text() {
    for text in [
        "7/-9", "1_-2/2", "0_0/-5", "0/-5", "1_-2/4", "", "A0", "7 _7/9", "9_8/", "9_8", "_9/8",
        "1_7//8", "7//8", "_7/8", "7_", "7_/8", "/8",
    ] {
        assert!(
            matches!(parse_literal(text), Err(RationalError::MalformedText { .. })),
            "text={text:?} got {:?}",
            parse_literal(text)
        );
    }
}

/* ------------------------ Expressions ------------------------ */

#[test]
fn invalid_operand_on_each_side() {
    let operands = [
        "_1/3", "3_", "/3", "2/", "5_2/", "3_ 2/3", "3 _2/3", "10 /4", "2/-3", "3_-1/3",
        "-1_-2/2", "1_-2/-2", "-2/-2", "1/0", "A00", "00A",
    ];

    for operand in operands {
        for op in OPERATORS {
            let forward = format!("{operand}{op}1/3");
            let backward = format!("1/3{op}{operand}");

            let ef = evaluate(&forward).unwrap_err();
            let eb = evaluate(&backward).unwrap_err();

            assert!(
                matches!(ef, RationalError::InvalidOperand { .. }) && ef.to_string().contains("left"),
                "forward={forward:?} got {ef:?}"
            );
            assert!(
                matches!(eb, RationalError::InvalidOperand { .. }) && eb.to_string().contains("right"),
                "backward={backward:?} got {eb:?}"
            );
        }
    }
}

#[test]
fn invalid_expressions() {
    for expr in ["1-3", "3 -3", "3- 3", "3 * 4 - 4", "something"] {
        assert!(
            matches!(
                evaluate(expr),
                Err(RationalError::MissingOrMalformedOperator { .. })
            ),
            "expr={expr:?}"
        );
    }
}
