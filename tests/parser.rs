//! Grammar tests over the sample library
//!
//! Each test loads one file from `tests/data/`, parses it strictly with locations off,
//! compares the resulting nodes with their expected JSON form and checks the canonical
//! serialization.

use maap_inp::inp::testing::{assert_roundtrip, element_json, Samples};
use maap_inp::{serialize, Program};
use serde_json::{json, Value};

fn parse(name: &str) -> Program {
    Samples::load(name)
        .parse()
        .unwrap_or_else(|e| panic!("{} failed to parse: {}", name, e))
}

fn number(value: f64) -> Value {
    json!({"type": "number", "value": value})
}

fn identifier(value: &str) -> Value {
    json!({"type": "identifier", "value": value})
}

fn call(name: &str, arguments: Vec<Value>) -> Value {
    json!({"type": "call_expression", "value": identifier(name), "arguments": arguments})
}

fn is(target: Value, value: Value) -> Value {
    json!({"type": "is_expression", "target": target, "value": value})
}

fn boolean(value: bool) -> Value {
    json!({"type": "boolean", "value": value})
}

#[test]
fn test_boolean_literals() {
    let program = parse("boolean");
    assert_eq!(program.len(), 4);
    assert_eq!(element_json(&program, 0), boolean(true));
    assert_eq!(element_json(&program, 1), boolean(false));
    assert_eq!(element_json(&program, 2), boolean(true));
    assert_eq!(element_json(&program, 3), boolean(false));
    assert_eq!(serialize(&program), "T\nF\nT\nF");
}

#[test]
fn test_numeric_literals() {
    let program = parse("numeric");
    for (index, value) in [1.0, 2.0, 3.0, 4.0, 0.005].into_iter().enumerate() {
        assert_eq!(element_json(&program, index), number(value));
    }
    assert_eq!(serialize(&program), "1\n2\n3\n4\n0.005");
}

#[test]
fn test_call_expressions() {
    let program = parse("call");
    assert_eq!(element_json(&program, 0), call("Name", vec![]));
    assert_eq!(element_json(&program, 1), call("Name", vec![number(1.0)]));
    assert_eq!(
        element_json(&program, 2),
        call("Name", vec![number(1.0), number(2.0), number(3.0)])
    );
    assert_eq!(
        element_json(&program, 3),
        call(
            "Name",
            vec![call("Of", vec![call("A", vec![call("Function", vec![])])])]
        )
    );
    assert_eq!(
        serialize(&program),
        "Name()\nName(1)\nName(1,2,3)\nName(Of(A(Function())))"
    );
}

#[test]
fn test_is_expressions() {
    let program = parse("is");
    assert_eq!(
        element_json(&program, 0),
        is(identifier("VARNAME"), identifier("Value"))
    );
    assert_eq!(
        element_json(&program, 1),
        is(
            json!({"type": "parameter_name", "value": "START TIME"}),
            number(0.0)
        )
    );
    assert_eq!(
        element_json(&program, 2),
        is(
            json!({"type": "parameter_name", "value": "END TIME"}),
            number(144000.0)
        )
    );
    assert_eq!(
        element_json(&program, 3),
        is(
            json!({"type": "parameter_name", "value": "PRINT INTERVAL"}),
            number(5000.0)
        )
    );
    assert_eq!(
        serialize(&program),
        "VARNAME IS Value\nSTART TIME IS 0\nEND TIME IS 144000\nPRINT INTERVAL IS 5000"
    );
}

#[test]
fn test_sensitivity_statements() {
    let program = parse("sensitivity");
    assert_eq!(
        element_json(&program, 0),
        json!({"type": "sensitivity", "value": "ON"})
    );
    assert_eq!(
        element_json(&program, 1),
        json!({"type": "sensitivity", "value": "OFF"})
    );
    assert_eq!(element_json(&program, 2), identifier("SENSITIVITY"));
    assert_eq!(
        serialize(&program),
        "SENSITIVITY ON\nSENSITIVITY OFF\nSENSITIVITY"
    );
}

#[test]
fn test_title_statements() {
    let program = parse("title");
    assert_eq!(
        element_json(&program, 0),
        json!({"type": "title", "value": "Valid Title"})
    );
    assert_eq!(
        element_json(&program, 1),
        json!({"type": "title", "value": "A title that\nextends onto\nmultiple lines"})
    );
    assert_eq!(element_json(&program, 2), json!({"type": "title"}));
    assert_eq!(
        serialize(&program),
        "TITLE\nValid Title\nEND\nTITLE\nA title that\nextends onto\nmultiple lines\nEND\nTITLE\n\nEND"
    );
}

#[test]
fn test_file_statements() {
    let program = parse("file");
    assert_eq!(
        element_json(&program, 0),
        json!({"type": "file", "fileType": "PARAMETER FILE", "value": "parameter_file.PAR"})
    );
    assert_eq!(
        element_json(&program, 1),
        json!({"type": "file", "fileType": "PARAMETER FILE", "value": "1"})
    );
    assert_eq!(
        element_json(&program, 2),
        json!({"type": "parameter_name", "value": "PARAMETER FILE"})
    );
    assert_eq!(
        element_json(&program, 3),
        json!({"type": "file", "fileType": "INCLUDE", "value": "file.inc"})
    );
    assert_eq!(
        element_json(&program, 4),
        json!({"type": "file", "fileType": "INCLUDE", "value": "1234"})
    );
    assert_eq!(element_json(&program, 5), identifier("INCLUDE"));
    assert_eq!(
        serialize(&program),
        "PARAMETER FILE parameter_file.PAR\nPARAMETER FILE 1\nPARAMETER FILE\nINCLUDE file.inc\nINCLUDE 1234\nINCLUDE"
    );
}

#[test]
fn test_block_statements() {
    let program = parse("block");
    let assignment = json!({
        "type": "assignment",
        "target": call("VarName", vec![number(1.0)]),
        "value": number(1.0),
    });
    let conditional = json!({
        "type": "conditional_block",
        "blockType": "IF",
        "test": is(call("VarName", vec![number(1.0)]), number(1.0)),
        "value": [{"type": "set_timer", "value": {"type": "timer", "value": 1}}],
    });

    for (offset, block_type) in [(0, "PARAMETER CHANGE"), (3, "INITIATORS")] {
        assert_eq!(
            element_json(&program, offset),
            json!({"type": "block", "blockType": block_type, "value": [assignment.clone()]})
        );
        assert_eq!(
            element_json(&program, offset + 1),
            json!({"type": "block", "blockType": block_type, "value": []})
        );
        assert_eq!(
            element_json(&program, offset + 2),
            json!({"type": "block", "blockType": block_type, "value": [conditional.clone()]})
        );
    }

    assert_eq!(
        serialize(&program),
        "PARAMETER CHANGE
VarName(1) = 1
END
PARAMETER CHANGE

END
PARAMETER CHANGE
IF VarName(1) IS 1
SET TIMER #1
END
END
INITIATORS
VarName(1) = 1
END
INITIATORS

END
INITIATORS
IF VarName(1) IS 1
SET TIMER #1
END
END"
    );
}

#[test]
fn test_conditional_block_statements() {
    let program = parse("conditionalBlock");
    let test = is(identifier("VARIABLE"), boolean(true));
    let body = json!([{
        "type": "assignment",
        "target": identifier("VARNAME"),
        "value": number(1000.0),
    }]);

    assert_eq!(
        element_json(&program, 0),
        json!({"type": "conditional_block", "blockType": "WHEN", "test": test, "value": body})
    );
    assert_eq!(
        element_json(&program, 1),
        json!({"type": "comment", "value": "When empty"})
    );
    assert_eq!(
        element_json(&program, 2),
        json!({"type": "conditional_block", "blockType": "WHEN", "test": test, "value": []})
    );
    assert_eq!(
        element_json(&program, 4),
        json!({"type": "conditional_block", "blockType": "IF", "test": test, "value": body})
    );
    assert_eq!(
        element_json(&program, 6),
        json!({"type": "conditional_block", "blockType": "IF", "test": test, "value": []})
    );
    assert_eq!(
        serialize(&program),
        "WHEN VARIABLE IS T
VARNAME = 1000
END
// When empty
WHEN VARIABLE IS T

END
// If default
IF VARIABLE IS T
VARNAME = 1000
END
// If empty
IF VARIABLE IS T

END"
    );
}

#[test]
fn test_alias_statements() {
    let program = parse("alias");
    assert_eq!(program.len(), 3);
    assert_eq!(
        element_json(&program, 0),
        json!({
            "type": "alias",
            "value": [{
                "type": "as_expression",
                "target": identifier("VARNAME"),
                "value": identifier("Value"),
            }],
        })
    );
    assert_eq!(
        element_json(&program, 1),
        json!({"type": "comment", "value": "Empty"})
    );
    assert_eq!(element_json(&program, 2), json!({"type": "alias", "value": []}));
    assert_eq!(
        serialize(&program),
        "ALIAS\nVARNAME AS Value\nEND\n// Empty\nALIAS\n\nEND"
    );
}

#[test]
fn test_plotfil_statements() {
    let program = parse("plotfil");
    assert_eq!(
        element_json(&program, 0),
        json!({
            "type": "plotfil",
            "n": 3,
            "value": [
                [identifier("A"), identifier("B"), identifier("C")],
                [identifier("D"), identifier("E"), boolean(false)],
                [identifier("G"), identifier("H"), call("I", vec![identifier("J")])],
            ],
        })
    );
    assert_eq!(
        serialize(&program),
        "PLOTFIL 3\nA,B,C\nD,E,F\nG,H,I(J)\nEND"
    );
}

#[test]
fn test_userevt_statements() {
    let program = parse("userevt");
    let event = element_json(&program, 0);
    assert_eq!(event["type"], "user_evt");
    assert_eq!(
        event["value"][0],
        json!({
            "type": "parameter",
            "index": 100,
            "flag": boolean(true),
            "value": {"type": "parameter_name", "value": "Parameter Name"},
        })
    );
    assert_eq!(
        event["value"][1],
        json!({
            "type": "parameter",
            "index": 102,
            "value": {"type": "parameter_name", "value": "Parameter 2"},
        })
    );
    assert_eq!(
        event["value"][2],
        json!({
            "type": "action",
            "index": 1,
            "value": [
                {
                    "type": "parameter",
                    "index": 103,
                    "value": {"type": "parameter_name", "value": "Parameter 3"},
                },
                {"type": "action", "index": 2, "value": []},
            ],
        })
    );
    assert_eq!(
        event["value"][3],
        json!({
            "type": "conditional_block",
            "blockType": "IF",
            "test": is(identifier("VALUE"), boolean(true)),
            "value": [],
        })
    );
    assert_eq!(
        serialize(&program),
        "USEREVT
100 T Parameter Name
102 Parameter 2
ACTION #1
103 Parameter 3
ACTION #2

END
END
IF VALUE IS T

END
END"
    );
}

#[test]
fn test_function_statements() {
    let program = parse("function");
    assert_eq!(
        element_json(&program, 0),
        json!({
            "type": "function",
            "name": identifier("name"),
            "value": {
                "type": "expression",
                "value": {"left": number(1.0), "op": "+", "right": number(1.0)},
            },
        })
    );
    assert_eq!(serialize(&program), "FUNCTION name = 1 + 1");
}

#[test]
fn test_set_timer_statements() {
    let program = parse("timer");
    assert_eq!(
        element_json(&program, 0),
        json!({"type": "set_timer", "value": {"type": "timer", "value": 1}})
    );
    assert_eq!(serialize(&program), "SET TIMER #1");
}

#[test]
fn test_lookup_variable_statements() {
    let program = parse("lookup");
    assert_eq!(
        element_json(&program, 0),
        json!({
            "type": "lookup_variable",
            "name": identifier("VariableName"),
            "value": [
                "You can type anything in here for now",
                "It just gets separated by row",
            ],
        })
    );
    assert_eq!(
        serialize(&program),
        "LOOKUP VARIABLE VariableName\nYou can type anything in here for now\nIt just gets separated by row\nEND"
    );
}

#[test]
fn test_source_elements() {
    let program = parse("sourceElements");
    assert_eq!(
        element_json(&program, 0),
        json!({"type": "sensitivity", "value": "ON"})
    );
    assert_eq!(
        element_json(&program, 2),
        json!({
            "type": "assignment",
            "target": identifier("Identifier"),
            "value": {"type": "number", "value": 1.0, "units": "HR"},
        })
    );
    assert_eq!(element_json(&program, 4), call("Function", vec![]));
    assert_eq!(
        element_json(&program, 6),
        json!({
            "type": "as_expression",
            "target": identifier("Identifier"),
            "value": identifier("Value"),
        })
    );
    assert_eq!(
        serialize(&program),
        "SENSITIVITY ON\n// Assignment\nIdentifier = 1 HR\n// Expression\nFunction()\n// As Expression\nIdentifier AS Value"
    );
}

#[test]
fn test_every_clean_sample_round_trips() {
    for name in Samples::names() {
        if name == "safeMode" {
            continue;
        }
        assert_roundtrip(&parse(&name));
    }
}

#[test]
fn test_locations_are_one_based() {
    let result = Samples::load("timer")
        .parse_with(&maap_inp::OptionOverrides::new().emit_location(true))
        .unwrap();
    let json = serde_json::to_value(&result.output.value[0]).unwrap();
    assert_eq!(json["location"]["start"]["line"], 1);
    assert_eq!(json["location"]["start"]["column"], 1);
    assert_eq!(json["location"]["start"]["offset"], 0);
}
