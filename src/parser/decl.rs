//! Compilation unit, import, class and member rules.

use crate::lexer::tokens::{Token, TokenKind};

use super::{
    diagnostics::{Diagnostic, DiagnosticKind},
    expr::parse_expr,
    lookups::{first_class, first_import, first_member, first_type, is_modifier},
    parser::{PResult, Parser},
    stmt::parse_block,
    types::{parse_array_suffix, parse_return_type, parse_type, skip_type},
};

/// What the parser keeps of a recognized class: enough to check where the
/// entry method lives.
#[derive(Debug, Clone)]
pub struct ClassHeader {
    pub name: Token,
    pub entry_methods: usize,
}

impl ClassHeader {
    pub fn diagnostic(&self, kind: DiagnosticKind) -> Diagnostic {
        let expected = match kind {
            DiagnosticKind::DuplicateEntryClass(_) => "single entry class",
            DiagnosticKind::EntryClassNotLast(_) => "entry class as the last class",
            _ => "entry class",
        };
        Diagnostic::structural(kind, expected, &self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    EntryMethod,
    Attribute,
    Constructor,
    Method,
    Unknown,
}

/// `import* class*`
///
/// Stops at the first token that cannot start another class; the caller
/// decides whether what remains is acceptable.
pub fn parse_compilation_unit(parser: &mut Parser) -> PResult<Vec<ClassHeader>> {
    parser.enter("compilation unit");

    while first_import(parser.current_token()) {
        parse_import(parser)?;
    }

    let mut classes = vec![];
    while first_class(parser.current_token()) {
        classes.push(parse_class(parser)?);
    }

    Ok(classes)
}

/// `'import' qname ( ';' | '.' '*' ';' )`
pub fn parse_import(parser: &mut Parser) -> PResult<()> {
    parser.enter("import");

    parser.expect_keyword("import")?;
    parse_qualified_name(parser)?;

    if parser.eat_punct(";") {
        return Ok(());
    }

    if parser.eat_punct(".") {
        parser.expect_operator("*")?;
        parser.expect_punct(";")?;
        return Ok(());
    }

    Err(parser.fail(";"))
}

/// `ID ( '.' ID )*`
///
/// A `.` is only consumed when an identifier follows it, which leaves
/// `.*` in imports to the caller.
pub fn parse_qualified_name(parser: &mut Parser) -> PResult<Token> {
    let first = parser.expect_identifier("identifier")?;

    while parser.check_punct(".") && parser.peek(1).kind == TokenKind::Identifier {
        parser.advance();
        parser.advance();
    }

    Ok(first)
}

pub fn skip_modifiers(parser: &mut Parser) {
    while is_modifier(parser.current_token()) {
        parser.advance();
    }
}

pub fn parse_class(parser: &mut Parser) -> PResult<ClassHeader> {
    parser.enter("class");

    skip_modifiers(parser);
    parser.expect_keyword("class")?;
    let name = parser.expect_identifier("class name")?;

    if parser.eat_keyword("extends") {
        parse_qualified_name(parser)?;
    }

    if parser.eat_keyword("implements") {
        parse_qualified_name(parser)?;
        while parser.eat_punct(",") {
            parse_qualified_name(parser)?;
        }
    }

    parser.expect_punct("{")?;

    let mut entry_methods = 0;
    while !parser.check_punct("}") && first_member(parser.current_token()) {
        if parse_member(parser, &name.value)? == MemberKind::EntryMethod {
            entry_methods += 1;
        }
    }

    parser.expect_punct("}")?;

    Ok(ClassHeader {
        name,
        entry_methods,
    })
}

fn is_entry_method_start(parser: &mut Parser) -> bool {
    parser.look_ahead(|p| {
        p.eat_keyword("public")
            && p.eat_keyword("static")
            && p.eat_keyword("void")
            && p.check(TokenKind::Identifier, "main")
    })
}

/// Decides what kind of member starts at the cursor without consuming it.
///
/// Modifiers are skipped, then:
/// - the enclosing class name followed by `(` is a constructor
/// - a type or `void`, a name, then `(` is a method
/// - a type, a name, then `=`, `;` or `,` is an attribute
pub fn classify_member(parser: &mut Parser, class_name: &str) -> MemberKind {
    if is_entry_method_start(parser) {
        return MemberKind::EntryMethod;
    }

    parser.look_ahead(|p| {
        skip_modifiers(p);

        if p.check(TokenKind::Identifier, class_name) && p.peek(1).is_punctuation("(") {
            return MemberKind::Constructor;
        }

        let is_void = p.eat_keyword("void");
        if !is_void && !(first_type(p.current_token()) && skip_type(p)) {
            return MemberKind::Unknown;
        }

        if !p.check_kind(TokenKind::Identifier) {
            return MemberKind::Unknown;
        }

        let after_name = p.peek(1);
        if after_name.is_punctuation("(") {
            MemberKind::Method
        } else if !is_void
            && (after_name.is_operator("=") || after_name.is_punctuation(";") || after_name.is_punctuation(","))
        {
            MemberKind::Attribute
        } else {
            MemberKind::Unknown
        }
    })
}

pub fn parse_member(parser: &mut Parser, class_name: &str) -> PResult<MemberKind> {
    parser.enter("class member");

    let kind = classify_member(parser, class_name);
    match kind {
        MemberKind::EntryMethod => parse_entry_method(parser)?,
        MemberKind::Attribute => parse_attribute(parser)?,
        MemberKind::Constructor => parse_constructor(parser, class_name)?,
        MemberKind::Method => parse_method(parser)?,
        MemberKind::Unknown => return Err(parse_unknown_member(parser)),
    }

    Ok(kind)
}

/// Walks as far as a member declaration goes so the diagnostic lands on the
/// token that made it unrecognizable.
fn parse_unknown_member(parser: &mut Parser) -> Diagnostic {
    skip_modifiers(parser);

    if let Err(diagnostic) = parse_return_type(parser) {
        return diagnostic;
    }
    if let Err(diagnostic) = parser.expect_identifier("member name") {
        return diagnostic;
    }

    parser.fail("( or = or ;")
}

/// `'public' 'static' 'void' 'main' '(' 'String' ( '[' ']' ID | ID '[' ']' ) ')' block`
pub fn parse_entry_method(parser: &mut Parser) -> PResult<()> {
    parser.enter("entry method");

    parser.expect_keyword("public")?;
    parser.expect_keyword("static")?;
    parser.expect_keyword("void")?;
    parser.expect_named("main")?;
    parser.expect_punct("(")?;
    parser.expect_named("String")?;

    if parser.eat_punct("[") {
        parser.expect_punct("]")?;
        parser.expect_identifier("parameter name")?;
    } else {
        parser.expect_identifier("parameter name")?;
        parser.expect_punct("[")?;
        parser.expect_punct("]")?;
    }

    parser.expect_punct(")")?;
    parse_block(parser)
}

/// `ID ( '=' expr )?`
fn parse_declarator(parser: &mut Parser, label: &str) -> PResult<()> {
    parser.expect_identifier(label)?;
    if parser.eat_operator("=") {
        parse_expr(parser)?;
    }
    Ok(())
}

/// `type declarator ( ',' declarator )*`, shared by attributes and local
/// variables.
pub fn parse_declarators(parser: &mut Parser, label: &str) -> PResult<()> {
    parse_type(parser)?;
    parse_declarator(parser, label)?;
    while parser.eat_punct(",") {
        parse_declarator(parser, label)?;
    }
    Ok(())
}

pub fn parse_attribute(parser: &mut Parser) -> PResult<()> {
    parser.enter("attribute");

    skip_modifiers(parser);
    parse_declarators(parser, "attribute name")?;
    parser.expect_punct(";")?;
    Ok(())
}

pub fn parse_constructor(parser: &mut Parser, class_name: &str) -> PResult<()> {
    parser.enter("constructor");

    skip_modifiers(parser);
    parser.expect_named(class_name)?;
    parse_params(parser)?;
    parse_block(parser)
}

pub fn parse_method(parser: &mut Parser) -> PResult<()> {
    parser.enter("method");

    skip_modifiers(parser);
    parse_return_type(parser)?;
    parser.expect_identifier("method name")?;
    parse_params(parser)?;

    // Abstract methods have no body
    if parser.eat_punct(";") {
        return Ok(());
    }
    parse_block(parser)
}

/// `'(' ( param ( ',' param )* )? ')'`
pub fn parse_params(parser: &mut Parser) -> PResult<()> {
    parser.expect_punct("(")?;

    if parser.check_keyword("final") || first_type(parser.current_token()) {
        parse_param(parser)?;
        while parser.eat_punct(",") {
            parse_param(parser)?;
        }
    }

    parser.expect_punct(")")?;
    Ok(())
}

/// `'final'? type ID ( '[' ']' )*`
fn parse_param(parser: &mut Parser) -> PResult<()> {
    parser.eat_keyword("final");
    parse_type(parser)?;
    parser.expect_identifier("parameter name")?;
    parse_array_suffix(parser)
}
