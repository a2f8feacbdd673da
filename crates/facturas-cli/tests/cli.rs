use std::fs;
use std::path::Path;

use assert_cmd::Command;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use predicates::prelude::*;
use tempfile::TempDir;

const HEADER: &str = "Fecha,Monto,Proveedor,Número de Factura,Tipo\r\n";

/// A `facturas` command running inside `dir`, isolated from the user's config.
fn facturas(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("facturas").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"));
    cmd
}

/// Write a one-page PDF showing `text` on a single line.
fn write_pdf(path: &Path, text: &str) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let content = Content {
        operations: vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 10.into()]),
            Operation::new("Td", vec![50.into(), 700.into()]),
            Operation::new("Tj", vec![Object::string_literal(text)]),
            Operation::new("ET", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        },
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    fs::create_dir_all(path.parent().unwrap()).unwrap();
    doc.save(path).unwrap();
}

fn workspace() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("facturas")).unwrap();
    dir
}

#[test]
fn no_arguments_writes_default_output() {
    let dir = workspace();

    facturas(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Datos guardados en 'facturas_extraidas.csv'.",
        ));

    let output = fs::read_to_string(dir.path().join("facturas_extraidas.csv")).unwrap();
    assert_eq!(output, HEADER);
}

#[test]
fn missing_base_directory_fails() {
    let dir = tempfile::tempdir().unwrap();

    facturas(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to collect invoices from facturas"));

    assert!(!dir.path().join("facturas_extraidas.csv").exists());
}

#[test]
fn missing_base_directory_skipped_with_continue_on_error() {
    let dir = tempfile::tempdir().unwrap();

    facturas(dir.path())
        .args(["run", "--continue-on-error"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped files:"));

    let output = fs::read_to_string(dir.path().join("facturas_extraidas.csv")).unwrap();
    assert_eq!(output, HEADER);
}

#[test]
fn pdf_tree_gives_one_row_per_document_in_order() {
    let dir = workspace();
    let base = dir.path().join("facturas");
    write_pdf(&base.join("b.pdf"), "Factura B-2 Fecha 02/02/2024 Importe 1.234,56 venta");
    write_pdf(&base.join("2024/c.PDF"), "Factura C-3 Fecha 03/02/2024 Total: 30,00");
    write_pdf(&base.join("a.pdf"), "Factura A-1 Fecha 01/02/2024 Total: 10,00");

    facturas(dir.path()).assert().success();
    let first = fs::read(dir.path().join("facturas_extraidas.csv")).unwrap();

    facturas(dir.path()).assert().success();
    let second = fs::read(dir.path().join("facturas_extraidas.csv")).unwrap();
    assert_eq!(first, second);

    let mut reader = csv::Reader::from_reader(first.as_slice());
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|row| row.len() == 5));

    let cells: Vec<Vec<&str>> = rows
        .iter()
        .map(|row| vec![&row[0], &row[1], &row[3], &row[4]])
        .collect();
    assert_eq!(
        cells,
        [
            ["01/02/2024", "10.00", "A-1", "Gasto"],
            ["02/02/2024", "1.234.56", "B-2", "Ingreso"],
            ["03/02/2024", "30.00", "C-3", "Gasto"],
        ]
    );
    assert!(rows[0][2].starts_with("Factura A-1"));
}

#[test]
fn unreadable_document_aborts_by_default() {
    let dir = workspace();
    fs::create_dir_all(dir.path().join("facturas/2024")).unwrap();
    fs::write(dir.path().join("facturas/2024/mala.PDF"), b"not a pdf").unwrap();

    facturas(dir.path())
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("mala.PDF"));

    assert!(!dir.path().join("facturas_extraidas.csv").exists());
}

#[test]
fn continue_on_error_skips_unreadable_document() {
    let dir = workspace();
    fs::write(dir.path().join("facturas/mala.pdf"), b"not a pdf").unwrap();
    fs::write(dir.path().join("facturas/notas.txt"), b"ignored").unwrap();

    facturas(dir.path())
        .args(["run", "--continue-on-error"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped files:"))
        .stdout(predicate::str::contains("mala.pdf"));

    let output = fs::read_to_string(dir.path().join("facturas_extraidas.csv")).unwrap();
    assert_eq!(output, HEADER);
}

#[test]
fn run_with_explicit_paths_and_json() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("archivo")).unwrap();

    facturas(dir.path())
        .args(["run", "--input", "archivo", "--output", "resumen.json", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("resumen.json"));

    let output = fs::read_to_string(dir.path().join("resumen.json")).unwrap();
    assert_eq!(output.trim(), "[]");
}

#[test]
fn config_file_drives_the_run() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("docs")).unwrap();
    fs::write(
        dir.path().join("facturas.json"),
        r#"{ "input": { "base_dir": "docs" }, "output": { "path": "out.csv" } }"#,
    )
    .unwrap();

    facturas(dir.path())
        .args(["--config", "facturas.json"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(dir.path().join("out.csv")).unwrap(), HEADER);
}

#[test]
fn invalid_config_file_fails() {
    let dir = workspace();
    fs::write(dir.path().join("bad.json"), "{ nope").unwrap();

    facturas(dir.path())
        .args(["-c", "bad.json", "run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration error"));
}

#[test]
fn config_init_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();

    facturas(dir.path())
        .args(["config", "init", "--output", "cfg.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    let saved = fs::read_to_string(dir.path().join("cfg.json")).unwrap();
    assert!(saved.contains("\"supplier_width\": 50"));

    facturas(dir.path())
        .args(["config", "init", "--output", "cfg.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    facturas(dir.path())
        .args(["config", "init", "--output", "cfg.json", "--force"])
        .assert()
        .success();
}

#[test]
fn config_show_uses_config_flag() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("c.json"),
        r#"{ "extraction": { "supplier_width": 7 } }"#,
    )
    .unwrap();

    facturas(dir.path())
        .args(["-c", "c.json", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"supplier_width\": 7"))
        .stdout(predicate::str::contains("No config file found").not());
}

#[test]
fn config_path_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();

    facturas(dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not created"));
}

#[test]
fn extract_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    facturas(dir.path())
        .args(["extract", "nada.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}
