use std::fs::{self};

use kalkulator::press_keys;
use walkdir::WalkDir;

/// Every line of a `keys` block is `KEYS -> DISPLAY`: the keys are pressed on
/// a fresh calculator and the display must end up showing `DISPLAY`.
#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for line in extract_key_blocks(&content).iter().flat_map(|block| block.lines()) {
            if line.trim().is_empty() {
                continue;
            }
            let Some((keys, expected)) = line.rsplit_once("->") else {
                panic!("Example '{line}' in {path:?} has no '->'");
            };
            count += 1;

            let shown =
                press_keys(keys.trim()).unwrap_or_else(|e| panic!("Example '{line}' in {path:?}: {e}"));
            assert_eq!(shown.text, expected.trim(), "example '{line}' in {path:?}");
        }
    }

    assert!(count > 0, "No key examples found in book/src");
}

fn extract_key_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```keys") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}
