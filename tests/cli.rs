use std::process::{Command, Output};

fn nongli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nongli"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn solar_to_lunar() {
    let out = nongli(&["solar", "2024-02-10"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(
        stdout.starts_with("二〇二四年正月初一 甲辰(龙)年丙寅月甲辰日 (春节) "),
        "{stdout}"
    );
}

#[test]
fn lunar_to_solar() {
    let out = nongli(&["lunar", "2017", "-6", "1"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("2017-07-23 二〇一七年闰六月初一 "), "{stdout}");
}

#[test]
fn reports_errors() {
    let out = nongli(&["solar", "1850-01-01"]);
    assert_eq!(Some(1), out.status.code());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("Error: cannot convert solar date 1850-01-01"), "{stderr}");
    assert!(stderr.contains("outside the range"), "{stderr}");

    let out = nongli(&["solar", "2000000-01-01"]);
    assert_eq!(Some(1), out.status.code());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("year 2000000 is outside the range"), "{stderr}");

    let out = nongli(&["lunar", "2024", "-6", "1"]);
    assert_eq!(Some(1), out.status.code());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("has no leap month 6"), "{stderr}");
}

#[test]
fn custom_tables() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/tables.toml");
    let out = nongli(&["--tables", path, "solar", "1986-05-29"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("一九八六年四月廿一 "), "{stdout}");

    let out = nongli(&["--tables", "/nonexistent/tables.toml", "solar", "1986-05-29"]);
    assert_eq!(Some(1), out.status.code());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("failed to read tables"), "{stderr}");
}
