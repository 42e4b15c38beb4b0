//! Canonical serialization and the format registry

use maap_inp::inp::ast::{
    AsExpression, Assignment, BlockStatement, BooleanLiteral, CallExpression, Comment,
    Expression, Identifier, IsExpression, NumericLiteral, Operand, ParameterName,
    PureExpression, RightOperand, SourceElement, Statement, Target,
};
use maap_inp::inp::formats::FormatRegistry;
use maap_inp::inp::parsing::parse_program;
use maap_inp::{serialize, Program};

#[test]
fn test_serializer_normalizes_source() {
    let source = "sensitivity on
// Mixed case keywords
a=1+2*(B-3)
X = 2.50
Y = 1E3
parameter change
Z=10 hr
end";
    let program = parse_program(source, false).unwrap();
    insta::assert_snapshot!(serialize(&program), @r###"
    SENSITIVITY ON
    // Mixed case keywords
    a = 1 + 2 * (B - 3)
    X = 2.5
    Y = 1000
    PARAMETER CHANGE
    Z = 10 hr
    END
    "###);
}

#[test]
fn test_serializer_ignores_locations() {
    let source = "IF X IS T\nSET TIMER #2\nEND";
    let with = parse_program(source, true).unwrap();
    let without = parse_program(source, false).unwrap();
    assert_ne!(with, without);
    assert_eq!(serialize(&with), serialize(&without));
}

#[test]
fn test_serialize_built_tree() {
    let chain = PureExpression::new(
        Operand::from(NumericLiteral::new(1.0)),
        "+",
        RightOperand::Operand(Operand::Call(CallExpression::new(
            "Rate",
            vec![Expression::from(Operand::from(Identifier::new("Pump")))],
        ))),
    );
    let program = Program::new(vec![SourceElement::Statement(Statement::Block(
        BlockStatement {
            block_type: "INITIATORS".to_string(),
            value: vec![SourceElement::Assignment(Assignment::new(
                Target::Identifier(Identifier::new("Flow")),
                Expression::Pure(chain),
            ))],
            location: None,
        },
    ))]);

    assert_eq!(serialize(&program), "INITIATORS\nFlow = 1 + Rate(Pump)\nEND");
}

#[test]
fn test_serialize_built_expressions() {
    let program = Program::new(vec![
        SourceElement::Comment(Comment::new("Built by hand")),
        SourceElement::Expression(Expression::Is(IsExpression::new(
            Target::ParameterName(ParameterName::new("START TIME")),
            NumericLiteral::new(0.5).with_units("HR"),
        ))),
        SourceElement::As(AsExpression::new(
            Target::Call(CallExpression::new(
                "Level",
                vec![Expression::from(Operand::from(Identifier::new("Tank")))],
            )),
            Identifier::new("TankLevel"),
        )),
        SourceElement::Assignment(Assignment::new(
            Target::Identifier(Identifier::new("Armed")),
            Expression::from(Operand::from(maap_inp::inp::ast::Literal::Boolean(
                BooleanLiteral::new(false),
            ))),
        )),
    ]);

    insta::assert_snapshot!(serialize(&program), @r###"
    // Built by hand
    START TIME IS 0.5 HR
    Level(Tank) AS TankLevel
    Armed = F
    "###);
    assert_eq!(parse_program(&serialize(&program), false).unwrap(), program);
}

#[test]
fn test_registry_renders_by_name() {
    let registry = FormatRegistry::with_defaults(false);
    let program = parse_program("SET TIMER #1", false).unwrap();

    assert_eq!(registry.serialize(&program, "inp").unwrap(), "SET TIMER #1");
    insta::assert_snapshot!(
        registry.serialize(&program, "json").unwrap(),
        @r###"{"type":"program","value":[{"type":"set_timer","value":{"type":"timer","value":1}}]}"###
    );
    assert!(registry.serialize(&program, "xml").is_err());
}
