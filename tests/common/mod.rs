use assert_cmd::Command;

pub fn nota_cmd() -> Command {
    let mut cmd = Command::cargo_bin("nota").unwrap();
    cmd.env_remove("NOTA_STORAGE");
    cmd.env_remove("NOTA_DB_PATH");
    cmd.env_remove("NOTA_LOG");
    cmd
}

/// Extract the short id from `Created note <short_id>  <title>` output.
pub fn created_short_id(stdout: &[u8]) -> String {
    let text = String::from_utf8_lossy(stdout);
    text.split_whitespace().nth(2).unwrap().to_string()
}
