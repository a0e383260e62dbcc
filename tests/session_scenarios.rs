use phone_cli::session::{Session, COMMAND_PROMPT, NAME_PROMPT, PHONE_PROMPT};

/// Feed newline-terminated input lines through a full session and return the
/// byte-exact output transcript (prompts included).
fn transcript(lines: &[&str]) -> String {
    let input: String = lines.iter().map(|l| format!("{}\n", l)).collect();
    let mut out = Vec::new();
    {
        let mut session = Session::new(input.as_bytes(), &mut out);
        session.run().unwrap();
    }
    String::from_utf8(out).unwrap()
}

#[test]
fn test_add_then_search_misses_on_case_mismatch() {
    // "Alice" is stored verbatim; the search lowercases its query to "alice",
    // which is not a stored key. The asymmetry is intentional.
    let output = transcript(&["2", "Alice", "5551234", "1", "alice", "3"]);

    let expected = format!(
        "{c}{n}{p}ok!\n{c}{n}no number\n{c}quitting...\n",
        c = COMMAND_PROMPT,
        n = NAME_PROMPT,
        p = PHONE_PROMPT,
    );
    assert_eq!(output, expected);
}

#[test]
fn test_add_then_search_hits_on_exact_case() {
    let output = transcript(&["2", "bob", "4445555", "1", "bob", "3"]);

    let expected = format!(
        "{c}{n}{p}ok!\n{c}{n}4445555\n{c}quitting...\n",
        c = COMMAND_PROMPT,
        n = NAME_PROMPT,
        p = PHONE_PROMPT,
    );
    assert_eq!(output, expected);
}

#[test]
fn test_search_unknown_name_prints_sentinel() {
    let output = transcript(&["1", "nobody", "3"]);

    let expected = format!(
        "{c}{n}no number\n{c}quitting...\n",
        c = COMMAND_PROMPT,
        n = NAME_PROMPT,
    );
    assert_eq!(output, expected);
}

#[test]
fn test_immediate_eof_quits() {
    let output = transcript(&[]);
    assert_eq!(output, format!("{}quitting...\n", COMMAND_PROMPT));
}

#[test]
fn test_any_unrecognized_command_quits() {
    for garbage in ["3", "q", "quit", "  1", "12", "hello world"] {
        let output = transcript(&[garbage]);
        assert_eq!(
            output,
            format!("{}quitting...\n", COMMAND_PROMPT),
            "command {:?} should quit",
            garbage
        );
    }
}

#[test]
fn test_overwrite_returns_latest_number() {
    let output = transcript(&["2", "bob", "111", "2", "bob", "222", "1", "bob", "3"]);

    let expected = format!(
        "{c}{n}{p}ok!\n{c}{n}{p}ok!\n{c}{n}222\n{c}quitting...\n",
        c = COMMAND_PROMPT,
        n = NAME_PROMPT,
        p = PHONE_PROMPT,
    );
    assert_eq!(output, expected);
}

#[test]
fn test_mixed_case_query_finds_lowercase_key() {
    // Stored as "alice"; queried as "ALICE", lowered to "alice" before lookup.
    let output = transcript(&["2", "alice", "5551234", "1", "ALICE", "3"]);
    assert!(output.contains("5551234\n"));
}

#[test]
fn test_empty_name_and_phone_are_accepted() {
    let output = transcript(&["2", "", "", "1", "", "3"]);

    let expected = format!(
        "{c}{n}{p}ok!\n{c}{n}\n{c}quitting...\n",
        c = COMMAND_PROMPT,
        n = NAME_PROMPT,
        p = PHONE_PROMPT,
    );
    assert_eq!(output, expected);
}
