use std::io::Cursor;

use super::*;

fn ask(input: &str) -> (PromptResult<Workload>, String) {
    let mut reader = Cursor::new(input.as_bytes().to_vec());
    let mut out = Vec::new();
    let result = prompt_workload(&mut reader, &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_prompt_simple() {
    let (choice, out) = ask("1\n");
    assert_eq!(choice.unwrap(), Workload::Simple);
    assert!(out.contains("1. SIMPLE EXECUTION"));
    assert!(out.contains("[SELECTED] Simple execution"));
}

#[test]
fn test_prompt_complex_with_whitespace() {
    let (choice, _) = ask("  2  \n");
    assert_eq!(choice.unwrap(), Workload::Complex);
}

#[test]
fn test_prompt_retries_until_valid() {
    let (choice, out) = ask("3\nsimple\n\n2\n");
    assert_eq!(choice.unwrap(), Workload::Complex);
    assert_eq!(out.matches("[ERROR] Invalid choice").count(), 3);
    assert_eq!(out.matches("Enter your choice (1 or 2): ").count(), 4);
}

#[test]
fn test_prompt_eof() {
    let (choice, _) = ask("9\n");
    assert!(matches!(choice, Err(PromptError::Eof)));
}

#[test]
fn test_confirm() {
    let mut out = Vec::new();

    assert!(confirm(&mut Cursor::new(b"y\n".to_vec()), &mut out, "Proceed?").unwrap());
    assert!(confirm(&mut Cursor::new(b"Y\n".to_vec()), &mut out, "Proceed?").unwrap());
    assert!(!confirm(&mut Cursor::new(b"n\n".to_vec()), &mut out, "Proceed?").unwrap());
    assert!(!confirm(&mut Cursor::new(b"yes\n".to_vec()), &mut out, "Proceed?").unwrap());

    assert!(String::from_utf8(out).unwrap().contains("Proceed? (y/n): "));
}

#[test]
fn test_confirm_eof() {
    let mut out = Vec::new();
    let result = confirm(&mut Cursor::new(Vec::new()), &mut out, "Proceed?");
    assert!(matches!(result, Err(PromptError::Eof)));
}
