//! Assembler -> runtime integration tests

use ic10_assembler::{assemble, AssemblerError};
use ic10_runtime::{Runtime, RuntimeConfig};
use ic10_spec::{Ic10Error, Opcode};

#[test]
fn test_assembled_bitwise_program() {
    let source = r#"
        sll 1 4
        srl -1 53
        and $F0F0 %1111_1111
        nor 0 0
        ins 0 8 8 $AB
        ext $AB00 8 8
    "#;

    let program = assemble(source).unwrap();
    let results = Runtime::new(RuntimeConfig::default()).run(&program);
    assert_eq!(
        results,
        vec![
            Some(16.0),
            Some(1.0),
            Some(240.0),
            Some(-1.0),
            Some(43776.0),
            Some(171.0),
        ]
    );
}

#[test]
fn test_assembled_faults_are_noops() {
    let source = r#"
        not inf
        ext 1 50 4
        add 1 1
    "#;

    let program = assemble(source).unwrap();
    let mut runtime = Runtime::new(RuntimeConfig::default());
    assert_eq!(runtime.run(&program), vec![None, None, Some(2.0)]);
    assert_eq!(runtime.faults(), 2);
}

#[test]
fn test_assembled_seeded_rand() {
    let program = assemble("rand\nrand\n").unwrap();
    let mut runtime = Runtime::new(RuntimeConfig::seeded(0.0));
    assert_eq!(
        runtime.run(&program),
        vec![
            Some(1559595546.0 / 2147483647.0),
            Some(1755192844.0 / 2147483647.0)
        ]
    );
}

#[test]
fn test_constant_macros() {
    let program = assemble(
        r#"
        seq HASH("ItemIronIngot") -1301215609
        move STR("ASCII6")
        "#,
    )
    .unwrap();
    let results = Runtime::new(RuntimeConfig::default()).run(&program);
    assert_eq!(results, vec![Some(1.0), Some(71825866967350.0)]);
}

#[test]
fn test_error_line_numbers() {
    let err = assemble("add 1 2\n# comment\nfoo 1\n").unwrap_err();
    assert_eq!(
        err,
        AssemblerError::Instruction {
            line: 3,
            source: Ic10Error::UnknownMnemonic("foo".to_string()),
        }
    );

    let err = assemble("ext 1 2\n").unwrap_err();
    assert_eq!(
        err,
        AssemblerError::Instruction {
            line: 1,
            source: Ic10Error::OperandCount {
                opcode: Opcode::Ext,
                expected: 3,
                found: 2,
            },
        }
    );

    let err = assemble("\n\nmove STR(\"\")").unwrap_err();
    assert_eq!(err.line(), 3);
    assert_eq!(err.to_string(), "Error at line 3: Cannot pack an empty string");
}
