use std::path::Path;

use assert_cmd::Command;
use chrono::Datelike;
use predicates::prelude::*;

// Settings live under $HOME/.config/tesorero, so each test gets its own HOME.
fn tesorero(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tesorero").unwrap();
    cmd.env("HOME", home).env("NO_COLOR", "1");
    cmd
}

#[test]
fn init_demo_and_reports() {
    let home = tempfile::tempdir().unwrap();
    let data_dir = home.path().join("data");
    let year = chrono::Local::now().year();

    tesorero(home.path())
        .args([
            "init",
            "--data-dir",
            data_dir.to_str().unwrap(),
            "--member-email",
            "carlos@rutalibre.pe",
            "--club-name",
            "Ruta Libre MC",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tesorero is ready"));

    tesorero(home.path())
        .arg("demo")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Demo data loaded!")
                .and(predicate::str::contains("Members:       7")),
        );

    tesorero(home.path())
        .arg("status")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Club:       Ruta Libre MC")
                .and(predicate::str::contains("Monthly dues:  84")),
        );

    tesorero(home.path())
        .arg("roster")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Ana Torres")
                .and(predicate::str::contains("Chispa"))
                .and(predicate::str::contains("Diego Paredes")),
        );

    tesorero(home.path())
        .args(["roster", "--search", "harley"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Beto Ramos")
                .and(predicate::str::contains("Ana Torres").not()),
        );

    tesorero(home.path())
        .arg("board")
        .assert()
        .success()
        .stdout(
            predicate::str::contains(format!("Estado de Pagos ({year})"))
                .and(predicate::str::contains("Rosa Huamán")),
        );

    tesorero(home.path())
        .args(["board", "--month", "enero"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Estado de Enero {year}:")));

    tesorero(home.path())
        .args(["dues", "--member", "diego@rutalibre.pe", "--all"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains(format!("Cuotas de Diego Paredes ({year})"))
                .and(predicate::str::contains("Total pagado")),
        );

    tesorero(home.path())
        .args(["payments", "--member", "carlos@rutalibre.pe"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Pagos de Carlos Quispe")
                .and(predicate::str::contains("Multa"))
                .and(predicate::str::contains("Total registrado")),
        );

    tesorero(home.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(
            predicate::str::contains(format!("Resumen del año {year}"))
                .and(predicate::str::contains("Situación de Carlos Quispe")),
        );
}

#[test]
fn demo_refuses_to_overwrite() {
    let home = tempfile::tempdir().unwrap();
    let data_dir = home.path().join("data");

    tesorero(home.path())
        .args(["init", "--data-dir", data_dir.to_str().unwrap()])
        .assert()
        .success();
    tesorero(home.path()).arg("demo").assert().success();

    tesorero(home.path())
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("A snapshot already exists"));
}

#[test]
fn unknown_member_fails() {
    let home = tempfile::tempdir().unwrap();
    let data_dir = home.path().join("data");

    tesorero(home.path())
        .args(["init", "--data-dir", data_dir.to_str().unwrap()])
        .assert()
        .success();
    tesorero(home.path()).arg("demo").assert().success();

    tesorero(home.path())
        .args(["dues", "--member", "nadie@rutalibre.pe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown member"));
}

#[test]
fn dues_without_member_needs_configuration() {
    let home = tempfile::tempdir().unwrap();
    let data_dir = home.path().join("data");

    tesorero(home.path())
        .args(["init", "--data-dir", data_dir.to_str().unwrap()])
        .assert()
        .success();
    tesorero(home.path()).arg("demo").assert().success();

    tesorero(home.path())
        .arg("dues")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No member email"));
}
