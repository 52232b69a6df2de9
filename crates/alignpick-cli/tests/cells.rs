use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::tempdir;

#[test]
fn test_cells_lists_labels_in_row_major_order() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("alignpick")
        .env("ALIGNPICK_HOME", dir.path())
        .arg("cells")
        .assert()
        .success()
        .stdout(
            "top left\ntop center\ntop right\n\
             center left\ncenter center\ncenter right\n\
             bottom left\nbottom center\nbottom right\n",
        );
}

#[test]
fn test_cells_json_emits_array() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("alignpick")
        .env("ALIGNPICK_HOME", dir.path())
        .args(["cells", "--json"])
        .assert()
        .success()
        .stdout(concat!(
            "[\"top left\",\"top center\",\"top right\",",
            "\"center left\",\"center center\",\"center right\",",
            "\"bottom left\",\"bottom center\",\"bottom right\"]\n"
        ));
}
