use compy::frontend::config::ProgramConfig;
use compy::runtime::{RuntimeError, SharedBuffer};
use compy::{Console, Error, ProgramKind};
use std::io::Cursor;

fn run_with_input(kind: ProgramKind, input: &str, config: &ProgramConfig) -> (Result<(), Error>, Vec<String>) {
    let buffer = SharedBuffer::new();
    let mut console = Console::new(buffer.clone(), Cursor::new(input.to_string()));
    let result = kind.run(&mut console, config);
    (result, buffer.lines())
}

fn transcript(kind: ProgramKind, input: &str, config: &ProgramConfig) -> Vec<String> {
    let (result, lines) = run_with_input(kind, input, config);
    result.unwrap();
    lines
}

#[test]
fn test_fibonacci_transcript() {
    let config = ProgramConfig { fib_index: 20, ..ProgramConfig::default() };
    assert_eq!(
        transcript(ProgramKind::Fibonacci, "", &config),
        vec!["Calculating index 20 of fibonacci series...", "6765"]
    );
}

#[test]
fn test_fibonacci_index_too_large() {
    let config = ProgramConfig { fib_index: 93, ..ProgramConfig::default() };
    let (result, lines) = run_with_input(ProgramKind::Fibonacci, "", &config);
    assert!(matches!(
        result,
        Err(Error::Runtime(RuntimeError::Overflow { op: "fib" }))
    ));
    assert_eq!(lines, vec!["Calculating index 93 of fibonacci series..."]);
}

#[test]
fn test_arithmetic_transcript() {
    assert_eq!(
        transcript(ProgramKind::Arithmetic, "7\n", &ProgramConfig::default()),
        vec![
            "Test imported!",
            "The answer is... 26",
            "Give me input: ",
            "Testing input: 7",
            "More testing input: 700",
            "12",
            "30",
        ]
    );
}

#[test]
fn test_arithmetic_reads_single_token() {
    let lines = transcript(ProgramKind::Arithmetic, "  -3 trailing words\n", &ProgramConfig::default());
    assert_eq!(lines[3], "Testing input: -3");
    assert_eq!(lines[4], "More testing input: -300");
}

#[test]
fn test_arithmetic_rejects_non_numeric_input() {
    let (result, lines) = run_with_input(ProgramKind::Arithmetic, "seven\n", &ProgramConfig::default());
    assert!(matches!(
        result,
        Err(Error::Runtime(RuntimeError::Parse { ref input, .. })) if input == "seven"
    ));
    // Everything before the cast was still printed
    assert_eq!(lines.last().map(String::as_str), Some("Testing input: seven"));
}

#[test]
fn test_arithmetic_at_end_of_input() {
    let (result, _) = run_with_input(ProgramKind::Arithmetic, "", &ProgramConfig::default());
    assert!(matches!(result, Err(Error::Runtime(RuntimeError::Parse { .. }))));
}

#[test]
fn test_counting_transcript() {
    let expected: Vec<String> = (0..10).map(|i| i.to_string()).collect();
    assert_eq!(transcript(ProgramKind::Counting, "", &ProgramConfig::default()), expected);

    let empty = ProgramConfig { count_to: -2, ..ProgramConfig::default() };
    assert!(transcript(ProgramKind::Counting, "", &empty).is_empty());
}

#[test]
fn test_counter_class_transcript() {
    assert_eq!(
        transcript(ProgramKind::CounterClass, "", &ProgramConfig::default()),
        vec!["123", "0", "1"]
    );
}

#[test]
fn test_program_names() {
    let names: Vec<_> = ProgramKind::ALL.iter().map(|k| k.name()).collect();
    assert_eq!(names, vec!["fibonacci", "arithmetic", "counting", "counter_class"]);
    assert_eq!(ProgramKind::CounterClass.to_string(), "counter_class");
}
