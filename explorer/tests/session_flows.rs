//! Scripted interactive sessions.
//!
//! Each test feeds a full stdin script to a session rooted in a temporary tree
//! and checks the transcript, the filesystem, and the operation log.

use std::fs;

use explorer::exit_codes;
use explorer::test_support::{TestWorkspace, transcript};

#[test]
fn exit_choice_ends_session_cleanly() {
    let ws = TestWorkspace::new().expect("workspace");
    let mut session = ws.session("9\n").expect("session");

    assert_eq!(session.run().expect("run"), exit_codes::OK);
    let out = transcript(&session);
    assert!(out.contains("1. List files and directories"));
    assert!(out.contains("9. Exit"));
    assert!(out.contains("Exiting the File Explorer. Goodbye!"));
    assert!(ws.logged().is_empty());
}

#[test]
fn end_of_input_ends_session_cleanly() {
    let ws = TestWorkspace::new().expect("workspace");
    let mut session = ws.session("").expect("session");
    assert_eq!(session.run().expect("run"), exit_codes::OK);
}

#[test]
fn invalid_choice_redisplays_menu() {
    let ws = TestWorkspace::new().expect("workspace");
    let mut session = ws.session("42\nabc\n9\n").expect("session");
    session.run().expect("run");

    let out = transcript(&session);
    assert_eq!(out.matches("Invalid choice! Please try again.").count(), 2);
    assert_eq!(out.matches("Menu:").count(), 3);
}

#[test]
fn list_shows_directories_and_files_then_logs() {
    let ws = TestWorkspace::new().expect("workspace");
    ws.build(&["docs/", "readme.md"]).expect("tree");
    let mut session = ws.session("1\n9\n").expect("session");
    session.run().expect("run");

    let out = transcript(&session);
    assert!(out.contains("[DIR]  docs"));
    assert!(out.contains("      readme.md"));
    assert_eq!(ws.logged(), vec!["Listed files"]);
}

#[test]
fn change_directory_updates_prompt_and_later_operations() {
    let ws = TestWorkspace::new().expect("workspace");
    ws.build(&["inner/deep.txt"]).expect("tree");
    let mut session = ws.session("2\ninner\n1\n9\n").expect("session");
    session.run().expect("run");

    assert!(session.cwd().as_str().ends_with("inner"));
    let out = transcript(&session);
    assert!(out.contains("Directory changed successfully."));
    assert!(out.contains("      deep.txt"));
    assert_eq!(ws.logged(), vec!["Changed directory", "Listed files"]);
}

#[test]
fn failed_change_directory_keeps_working_dir() {
    let ws = TestWorkspace::new().expect("workspace");
    let mut session = ws.session("2\nnowhere\n9\n").expect("session");
    let before = session.cwd().clone();
    session.run().expect("run");

    assert_eq!(session.cwd(), &before);
    assert!(transcript(&session).contains("Failed to change directory"));
    assert!(ws.logged().is_empty());
}

#[test]
fn create_directory_twice_reports_existing() {
    let ws = TestWorkspace::new().expect("workspace");
    let mut session = ws.session("3\nfresh\n3\nfresh\n9\n").expect("session");
    session.run().expect("run");

    assert!(ws.root().join("fresh").is_dir());
    let out = transcript(&session);
    assert!(out.contains("Directory created successfully."));
    assert!(out.contains("Failed to create directory"));
    assert!(out.contains("already exists"));
    assert_eq!(ws.logged(), vec!["Created directory"]);
}

#[test]
fn deleting_missing_path_fails_without_log_entry() {
    let ws = TestWorkspace::new().expect("workspace");
    let mut session = ws.session("4\nghost.txt\ny\n9\n").expect("session");
    let before = session.cwd().clone();
    session.run().expect("run");

    let out = transcript(&session);
    assert!(out.contains("Deleting... Please wait....."));
    assert!(out.contains("Failed to delete"));
    assert_eq!(session.cwd(), &before);
    assert!(ws.logged().is_empty());
}

#[test]
fn blank_delete_keeps_working_directory() {
    let ws = TestWorkspace::new().expect("workspace");
    ws.build(&["keep.txt"]).expect("tree");
    let mut session = ws.session("4\n\ny\n1\n9\n").expect("session");
    session.run().expect("run");

    assert!(ws.root().is_dir());
    assert!(ws.root().join("keep.txt").is_file());
    let out = transcript(&session);
    assert!(out.contains("Failed to delete: name must not be empty"));
    assert!(!out.contains("Failed to list directory"));
    assert_eq!(ws.logged(), vec!["Listed files"]);
}

#[test]
fn deleting_parent_directory_is_refused() {
    let ws = TestWorkspace::new().expect("workspace");
    let mut session = ws.session("4\n..\ny\n9\n").expect("session");
    session.run().expect("run");

    assert!(ws.root().is_dir());
    assert!(transcript(&session).contains("contains the working directory"));
    assert!(ws.logged().is_empty());
}

#[test]
fn declined_delete_is_a_no_op() {
    let ws = TestWorkspace::new().expect("workspace");
    ws.build(&["keep.txt"]).expect("tree");
    let mut session = ws.session("4\nkeep.txt\nn\n9\n").expect("session");
    session.run().expect("run");

    assert!(ws.root().join("keep.txt").exists());
    let out = transcript(&session);
    assert!(out.contains("Are you sure you want to delete 'keep.txt'? (y/n): "));
    assert!(out.contains("Delete operation cancelled."));
    assert!(ws.logged().is_empty());
}

#[test]
fn confirmed_delete_removes_file() {
    let ws = TestWorkspace::new().expect("workspace");
    ws.build(&["trash.txt"]).expect("tree");
    let mut session = ws.session("4\ntrash.txt\nY\n9\n").expect("session");
    session.run().expect("run");

    assert!(!ws.root().join("trash.txt").exists());
    assert!(transcript(&session).contains("Deleted successfully."));
    assert_eq!(ws.logged(), vec!["Deleted file/directory"]);
}

#[test]
fn rename_then_search_finds_new_name() {
    let ws = TestWorkspace::new().expect("workspace");
    ws.build(&["draft.txt", "sub/other.log"]).expect("tree");
    let mut session = ws
        .session("5\ndraft.txt\nsub/Final.TXT\n6\nfinal\n9\n")
        .expect("session");
    session.run().expect("run");

    assert!(ws.root().join("sub").join("Final.TXT").is_file());
    let out = transcript(&session);
    assert!(out.contains("Renamed successfully."));
    assert!(out.contains("Searching for 'final' in "));
    assert!(out.contains("Found: "));
    assert!(out.contains("Final.TXT"));
    assert!(out.contains("1 match(es) found."));
    assert_eq!(
        ws.logged(),
        vec!["Renamed file/directory", "Searched files"]
    );
}

#[test]
fn rename_onto_existing_file_keeps_both() {
    let ws = TestWorkspace::new().expect("workspace");
    ws.build(&["a.txt", "b.txt"]).expect("tree");
    let mut session = ws.session("5\na.txt\nb.txt\n9\n").expect("session");
    session.run().expect("run");

    assert_eq!(fs::read(ws.root().join("a.txt")).expect("read a"), b"a.txt");
    assert_eq!(fs::read(ws.root().join("b.txt")).expect("read b"), b"b.txt");
    let out = transcript(&session);
    assert!(out.contains("Failed to rename"));
    assert!(out.contains("already exists"));
    assert!(ws.logged().is_empty());
}

#[test]
fn rename_to_invalid_name_reports_failure() {
    let ws = TestWorkspace::new().expect("workspace");
    ws.build(&["stay.txt"]).expect("tree");
    let mut session = ws.session("5\nstay.txt\nbad\0name\n9\n").expect("session");
    session.run().expect("run");

    assert!(ws.root().join("stay.txt").is_file());
    assert!(transcript(&session).contains("Failed to rename"));
    assert!(ws.logged().is_empty());
}

#[test]
fn search_in_empty_tree_reports_zero_matches() {
    let ws = TestWorkspace::new().expect("workspace");
    let mut session = ws.session("6\nanything\n9\n").expect("session");
    session.run().expect("run");

    assert!(transcript(&session).contains("0 match(es) found."));
    assert_eq!(ws.logged(), vec!["Searched files"]);
}

#[test]
fn copy_refuses_to_overwrite_destination() {
    let ws = TestWorkspace::new().expect("workspace");
    ws.build(&["src.txt", "dst.txt"]).expect("tree");
    let original = fs::read(ws.root().join("dst.txt")).expect("read");
    let mut session = ws.session("8\nsrc.txt\ndst.txt\n9\n").expect("session");
    session.run().expect("run");

    assert_eq!(fs::read(ws.root().join("dst.txt")).expect("read"), original);
    assert!(transcript(&session).contains("Failed to copy file"));
    assert!(ws.logged().is_empty());
}

#[test]
fn copy_to_new_destination_succeeds() {
    let ws = TestWorkspace::new().expect("workspace");
    ws.build(&["src.txt"]).expect("tree");
    let mut session = ws.session("8\nsrc.txt\ncopy.txt\n9\n").expect("session");
    session.run().expect("run");

    assert_eq!(
        fs::read(ws.root().join("copy.txt")).expect("read copy"),
        fs::read(ws.root().join("src.txt")).expect("read source")
    );
    assert!(transcript(&session).contains("File copied successfully."));
    assert_eq!(ws.logged(), vec!["Copied file"]);
}

#[test]
fn properties_print_size_and_timestamp() {
    let ws = TestWorkspace::new().expect("workspace");
    ws.build(&["info.txt"]).expect("tree");
    let mut session = ws.session("7\ninfo.txt\n7\nmissing\n9\n").expect("session");
    session.run().expect("run");

    let out = transcript(&session);
    // build_tree writes the entry name as contents: "info.txt" is 8 bytes.
    assert!(out.contains("Size: 8 bytes"));
    assert!(out.contains("Last Modified: "));
    assert!(out.contains("Unable to fetch file properties"));
    assert_eq!(ws.logged(), vec!["Viewed file properties"]);
}

#[test]
fn input_ending_mid_operation_exits() {
    let ws = TestWorkspace::new().expect("workspace");
    let mut session = ws.session("5\nonly-one-name\n").expect("session");
    assert_eq!(session.run().expect("run"), exit_codes::OK);
    assert!(transcript(&session).contains("Goodbye!"));
}
