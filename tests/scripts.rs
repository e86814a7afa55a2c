use std::fs;

use rill::{evaluate, interpreter::environment::Environment};
use walkdir::WalkDir;

#[test]
fn sample_scripts_evaluate() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| {
                                         e.path().extension().is_some_and(|ext| ext == "rill")
                                     })
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;

        let env = Environment::root();
        if let Err(e) = evaluate(&source, &env) {
            panic!("Script {path:?} failed:\n{source}\nError: {e}");
        }
    }

    assert!(count > 0, "No sample scripts found under tests/scripts");
}
