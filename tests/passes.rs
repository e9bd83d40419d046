use minilang::{
    Grammar,
    error::ParseError,
    interpret,
    interpreter::{
        lexer::tokenize,
        parser::core::Context,
        stream::{Cursor, TokenStream},
        symbols::SymbolTable,
    },
    run_line,
};

fn stream(src: &str) -> TokenStream {
    tokenize(src).unwrap_or_else(|e| panic!("Failed to tokenize {src:?}: {e}"))
}

#[test]
fn validate_pass_never_assigns_or_prints() {
    let tokens = stream("integer x ; integer y ; x = 5 ; y = 7 ; \
                         while ( x < y ) do { x = x + 1 ; print x ; } ; print y ;");
    let mut context = Context::new(&tokens, Grammar::Full);
    context.run(false).unwrap();

    assert!(context.output.is_empty());
    assert_eq!(context.symbols.len(), 2);
    assert!(context.symbols.iter().all(|(_, value)| value == 0));
}

#[test]
fn validate_pass_leaves_state_untouched_on_failure() {
    let tokens = stream("integer x ; x = 5 ; print x ; print y ;");
    let mut context = Context::new(&tokens, Grammar::Full);

    assert!(context.run(false).is_err());
    assert!(context.output.is_empty());
    assert_eq!(context.symbols.get("x"), Some(0));
}

#[test]
fn validate_and_execute_agree() {
    let programs = ["integer x ; x = 1 ; print x ;",
                    "integer x ; integer y ; while ( x < y ) do { } ;",
                    "integer x ; if ( x == x ) { x = 1 ; } else { x = 2 ; } ; print x ;",
                    "integer x ; print y ;",
                    "integer x ; x = 1 ;;",
                    "print 1 ; integer x ;"];

    for program in programs {
        let tokens = stream(program);
        let validated = Context::new(&tokens, Grammar::Full).run(false).is_ok();
        let executed = Context::new(&tokens, Grammar::Full).run(true).is_ok();
        assert_eq!(validated, executed, "passes disagree on {program:?}");
    }
}

#[test]
fn execute_pass_collects_output_in_order() {
    let tokens = stream("integer i ; integer n ; n = 3 ; while ( i < n ) do { print i * 10 ; i = i + 1 ; } ; print n ;");
    let mut context = Context::new(&tokens, Grammar::Full);
    context.run(true).unwrap();

    assert_eq!(context.output, vec![0, 10, 20, 3]);
    assert_eq!(context.symbols.get("i"), Some(3));
    assert!(context.cursor().is_at_end());
}

#[test]
fn loop_ends_with_last_committed_values() {
    let tokens = stream("integer x ; integer y ; y = 4 ; while ( x < y ) do { x = x + 3 ; } ;");
    let mut context = Context::new(&tokens, Grammar::Full);
    context.run(true).unwrap();

    assert_eq!(context.symbols.get("x"), Some(6));
    assert_eq!(context.symbols.get("y"), Some(4));
}

#[test]
fn checkpoint_restores_cursor_and_symbols() {
    let tokens = stream("integer x ; x = 9 ;");
    let mut context = Context::new(&tokens, Grammar::Full);
    context.symbols.declare("x");
    let saved = context.checkpoint();

    context.symbols.assign("x", 42);
    context.run(true).unwrap();
    assert_ne!(context.cursor(), saved.cursor);

    context.restore(saved);
    assert_eq!(context.symbols.get("x"), Some(0));
    assert_eq!(context.cursor(), tokens.cursor());
}

#[test]
fn run_block_treats_slice_bound_as_end_of_input() {
    let tokens = stream("print 1 ; print 2 ; print 3 ;");
    let mut context = Context::new(&tokens, Grammar::Full);

    context.run_block(Cursor { pos: 3, end: 6 }, true).unwrap();
    assert_eq!(context.output, vec![2]);
    assert_eq!(context.cursor(), tokens.cursor());

    let err = context.run_block(Cursor { pos: 3, end: 5 }, true).unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedEndOfInput { position: 5, .. }));
}

#[test]
fn brace_matching_respects_nesting_and_bounds() {
    let tokens = stream("{ { } { { } } } ;");

    assert_eq!(tokens.matching_brace(Cursor { pos: 1, end: 9 }), Some(7));
    assert_eq!(tokens.matching_brace(Cursor { pos: 2, end: 9 }), Some(2));
    assert_eq!(tokens.matching_brace(Cursor { pos: 1, end: 7 }), None);
}

#[test]
fn stream_cursor_spans_every_token() {
    let tokens = stream("print 1 ;");
    let cursor = tokens.cursor();

    assert_eq!(cursor, Cursor { pos: 0, end: 3 });
    assert_eq!(tokens.len(), 3);
    assert!(!tokens.is_empty());
    assert!(stream("").is_empty());
    assert!(!cursor.is_at_end());
    assert_eq!(tokens.peek(Cursor { pos: 3, end: 3 }), None);
    assert_eq!(tokens.peek(Cursor { pos: 1, end: 1 }), None);
}

#[test]
fn driver_reports_the_failing_cause() {
    assert!(matches!(run_line("integer x ; y = 1 ;", Grammar::Full),
                     Err(ParseError::UndeclaredVariable { ref name, position: 3 }) if name == "y"));
    assert!(matches!(run_line("integer x ; while ( x < x ) do { ;", Grammar::Full),
                     Err(ParseError::UnbalancedBraces { position: 10 })));
    assert!(matches!(run_line("print 1 ; )", Grammar::Full),
                     Err(ParseError::UnexpectedTrailingTokens { position: 3, .. })));
    assert!(matches!(run_line("print Q ;", Grammar::Full),
                     Err(ParseError::InvalidLexeme { .. })));
}

#[test]
fn symbol_table_declare_assign_and_set() {
    let mut symbols = SymbolTable::new();
    assert!(symbols.is_empty());
    assert!(!symbols.assign("x", 1));
    assert_eq!(symbols.get_or_zero("x"), 0);

    symbols.declare("x");
    assert!(symbols.assign("x", 5));
    assert_eq!(symbols.get("x"), Some(5));

    symbols.declare("x");
    assert_eq!(symbols.get("x"), Some(0));

    symbols.set("y", -2);
    assert_eq!(symbols.get("y"), Some(-2));
    assert_eq!(symbols.len(), 2);
}

#[test]
fn interpret_writes_one_line_per_program_until_blank_line() {
    let input = "integer x ; x = 3 ; print x ;\nx = 1 ;\ninteger y ;\n   \nprint 5 ;\n";
    let mut output = Vec::new();

    let count = interpret(input.as_bytes(), &mut output, Grammar::Full).unwrap();

    assert_eq!(count, 3);
    assert_eq!(String::from_utf8(output).unwrap(), "3\nSyntax Error!\n\n");
}

#[test]
fn interpret_stops_at_end_of_input() {
    let input = "x = 2 * 3 ; print x ;\nprint x ;";
    let mut output = Vec::new();

    let count = interpret(input.as_bytes(), &mut output, Grammar::Arithmetic).unwrap();

    assert_eq!(count, 2);
    assert_eq!(String::from_utf8(output).unwrap(), "6\n0\n");
}
