use pretty_assertions::assert_eq;
use reckon::{
    ast::{BinaryOperator, Expr, Location, Statement, UnaryOperator},
    error::{Error, ParseError},
    interpreter::{
        lexer::{Lexer, Token, TokenKind},
        parser::{MAX_NESTING_DEPTH, Parser},
    },
    parse,
};

fn parse_expr(source: &str) -> Expr {
    let mut program = parse(source).unwrap();
    assert_eq!(program.statements.len(), 1);
    match program.statements.remove(0) {
        Statement::Expression { expr, .. } => expr,
        other => panic!("Expected an expression statement, got {other:?}"),
    }
}

/// Renders an expression fully parenthesized.
fn show(expr: &Expr) -> String {
    match expr {
        Expr::Number { value, .. } => value.to_string(),
        Expr::Read { name, .. } => name.clone(),
        Expr::UnaryOp { op, expr, .. } => format!("({op}{})", show(expr)),
        Expr::BinaryOp { left, op, right, .. } => {
            format!("({} {op} {})", show(left), show(right))
        },
    }
}

fn parse_error(source: &str) -> ParseError {
    match parse(source) {
        Err(Error::Parse(e)) => e,
        other => panic!("Expected a parse error for {source:?}, got {other:?}"),
    }
}

#[test]
fn precedence_and_associativity() {
    assert_eq!(show(&parse_expr("2+3*4")), "(2 + (3 * 4))");
    assert_eq!(show(&parse_expr("8-3-2")), "((8 - 3) - 2)");
    assert_eq!(show(&parse_expr("8/4/2")), "((8 / 4) / 2)");
    assert_eq!(show(&parse_expr("2^3^2")), "(2 ^ (3 ^ 2))");
    assert_eq!(show(&parse_expr("-2^2")), "(-(2 ^ 2))");
    assert_eq!(show(&parse_expr("a*-b^c")), "(a * (-(b ^ c)))");
    assert_eq!(show(&parse_expr("(1+2)*3")), "((1 + 2) * 3)");
}

#[test]
fn nodes_carry_operator_locations() {
    match parse_expr("1 + 2") {
        Expr::BinaryOp { op, location, .. } => {
            assert_eq!(op, BinaryOperator::Add);
            assert_eq!(location, Location::new(1, 2));
        },
        other => panic!("Expected a binary operation, got {other:?}"),
    }
    match parse_expr("+x") {
        Expr::UnaryOp { op, .. } => assert_eq!(op, UnaryOperator::Plus),
        other => panic!("Expected a unary operation, got {other:?}"),
    }
}

#[test]
fn statements_are_told_apart() {
    let program = parse("let x = 1; x = 2\nx == 3").err();
    assert!(program.is_some(), "`x == 3` is not valid");

    let program = parse("let x = 1; x = 2\nx + 3").unwrap();
    assert!(matches!(&program.statements[0], Statement::Declaration { name, .. } if name == "x"));
    assert!(matches!(&program.statements[1], Statement::Assignment { name, .. } if name == "x"));
    assert!(matches!(&program.statements[2], Statement::Expression { .. }));
}

#[test]
fn statement_locations_point_at_the_identifier() {
    let program = parse("let  value = 1").unwrap();
    assert_eq!(program.statements[0].location(), Location::new(1, 5));
}

#[test]
fn unexpected_token_lists_what_was_accepted() {
    match parse_error("let = 1") {
        ParseError::UnexpectedToken { expected,
                                      found,
                                      location, } => {
            assert_eq!(expected, vec![TokenKind::Identifier]);
            assert_eq!(found, TokenKind::Equals);
            assert_eq!(location.offset, 4);
        },
        other => panic!("Unexpected error {other:?}"),
    }
}

#[test]
fn missing_closing_paren() {
    match parse_error("(1 + 2") {
        ParseError::UnexpectedToken { expected, found, .. } => {
            assert!(expected.contains(&TokenKind::RParen));
            assert_eq!(found, TokenKind::EndOfInput);
        },
        other => panic!("Unexpected error {other:?}"),
    }
}

#[test]
fn statements_need_separators() {
    assert!(matches!(parse_error("1 2"),
                     ParseError::UnexpectedToken { found: TokenKind::Number, .. }));
}

#[test]
fn unary_does_not_repeat() {
    parse_error("--2");
    parse_error("2^-1");
}

#[test]
fn nesting_is_limited() {
    let deep = format!("{}1{}", "(".repeat(MAX_NESTING_DEPTH + 1), ")".repeat(MAX_NESTING_DEPTH + 1));
    assert!(matches!(parse_error(&deep), ParseError::NestingTooDeep { .. }));

    let shallow = format!("{}1{}", "(".repeat(100), ")".repeat(100));
    assert!(parse(&shallow).is_ok());
}

#[test]
fn long_operator_chains_are_not_nesting() {
    let sum = vec!["1"; 4 * MAX_NESTING_DEPTH].join("+");
    assert!(parse(&sum).is_ok());

    let product = vec!["2"; 4 * MAX_NESTING_DEPTH].join(" * ");
    assert!(parse(&product).is_ok());

    let mixed = format!("({})", vec!["1 - 2 * 3"; 2 * MAX_NESTING_DEPTH].join(" + "));
    assert!(parse(&mixed).is_ok());
}

#[test]
fn parser_starts_on_the_first_significant_token() {
    let parser = Parser::new(Lexer::new("\n  \n let x = 1")).unwrap();
    assert_eq!(parser.current_token(), &Token::Let);

    let parser = Parser::new(Lexer::new("")).unwrap();
    assert_eq!(parser.current_token(), &Token::EndOfInput);
}

#[test]
fn lex_errors_surface_as_lex_errors() {
    assert!(matches!(parse("1 + @"), Err(Error::Lex(_))));
}
