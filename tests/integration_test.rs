use std::fs;
use swift_mock_generator::{generate_mocks, transform, transform_all};
use tempfile::tempdir;

#[test]
fn test_generate_mocks_from_file() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("Functions.in");
    let output_path = dir.path().join("Functions.out");

    fs::write(
        &input_path,
        "func create()\n\nfunc fetchUser() -> User\n",
    )
    .unwrap();

    let result = generate_mocks(&input_path, Some(&output_path)).unwrap();

    // Verify the file was created with the same content
    assert!(output_path.exists());
    assert_eq!(fs::read_to_string(&output_path).unwrap(), result);

    // One block per non-blank input line, blank-line separated
    assert!(result.contains("var invokedCreateCount = 0"));
    assert!(result.contains("var fetchUserDummyValue: User?"));
    let create_block = result.find("func create() {").unwrap();
    let fetch_block = result.find("func fetchUser() -> User {").unwrap();
    assert!(create_block < fetch_block);
}

#[test]
fn test_generate_mocks_creates_parent_directories() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("Functions.in");
    let output_path = dir.path().join("nested").join("out").join("Functions.out");

    fs::write(&input_path, "func create()\n").unwrap();

    generate_mocks(&input_path, Some(&output_path)).unwrap();

    assert!(output_path.exists());
}

#[test]
fn test_transform_single_line() {
    let result = transform("func handleConfigFile(file: ConfigFile)").unwrap();

    assert_eq!(
        result,
        "var invokedHandleConfigFileCount = 0\n\
         var invokedHandleConfigFile: ConfigFile?\n\
         \n\
         func handleConfigFile(file: ConfigFile) {\n\
         \tinvokedHandleConfigFileCount += 1\n\
         \tinvokedHandleConfigFile = file\n\
         }"
    );
}

#[test]
fn test_transform_all_skips_broken_lines() {
    let lines = [
        "func create()",
        "func broken(handler: (Result<User>)->(",
        "func fetchUser() -> User",
    ];

    let result = transform_all(lines);

    // The unmatched-parenthesis line is skipped, the rest keep their order
    assert!(result.contains("invokedCreateCount"));
    assert!(!result.contains("broken"));
    assert!(result.contains("fetchUserDummyValue"));
    // Two mocks survive: one blank line inside each block, one between them
    assert_eq!(result.matches("\n\n").count(), 3);
}

#[test]
fn test_transform_missing_input_file_fails() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("no-such-file.in");

    assert!(generate_mocks(&missing, None).is_err());
}
