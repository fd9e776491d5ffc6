//! End-to-end counts generation: CSV on disk in, counts.json on disk out.

use chrono::NaiveDate;
use ecocounts::categories::{CategoryMapping, ACTION_COLUMNS};
use ecocounts::report::ReportWriter;
use ecocounts::{Aggregator, RunConfig};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::process::Command;

fn header() -> String {
    let mut line = String::from("identifiant,nom");
    for column in ACTION_COLUMNS {
        line.push(',');
        line.push_str(column);
    }
    line.push('\n');
    line
}

/// One CSV row with `reparer` and `donner` set, every other action column empty.
fn row(id: usize, reparer: &str, donner: &str) -> String {
    let mut line = format!("{id},Acteur {id},{reparer},{donner}");
    for _ in 2..ACTION_COLUMNS.len() {
        line.push(',');
    }
    line.push('\n');
    line
}

fn write_csv(dir: &Path, rows: &[String]) -> PathBuf {
    let path = dir.join("acteurs.csv");
    let mut contents = header();
    for r in rows {
        contents.push_str(r);
    }
    std::fs::write(&path, contents).unwrap();
    path
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

// ═══════════════════════════════════════════════════════════════════════════
// COUNTING PROPERTIES
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn three_hundred_shoe_actors_out_of_a_thousand() {
    let dir = tempfile::tempdir().unwrap();
    let rows: Vec<String> = (0..1000)
        .map(|i| {
            if i < 300 {
                row(i, "", "chaussures")
            } else {
                row(i, "", "")
            }
        })
        .collect();
    let input = write_csv(dir.path(), &rows);

    let aggregation = Aggregator::default().aggregate(&input, date()).unwrap();
    let doc = &aggregation.document;

    assert_eq!(doc.meta.total_input_rows, 1000);
    let chaussures = doc.national.get("chaussures").unwrap();
    assert_eq!(chaussures.lieux, 300);
    assert_eq!(chaussures.services_a_domicile, 1);
    assert_eq!(chaussures.solutions_en_ligne, 2);
    assert!(aggregation.missing_columns.is_empty());
}

#[test]
fn every_category_present_and_bounded() {
    let dir = tempfile::tempdir().unwrap();
    let rows = vec![
        row(1, "biodechets", "meuble|decoration"),
        row(2, "gros_electromenager_refrigerant", ""),
        row(3, "", ""),
        row(4, "inconnu", "dasri"),
    ];
    let input = write_csv(dir.path(), &rows);

    let doc = Aggregator::default().aggregate(&input, date()).unwrap().document;

    assert_eq!(doc.national.len(), CategoryMapping::builtin().len());
    for id in CategoryMapping::builtin().ids() {
        let summary = doc.national.get(id).unwrap();
        assert!(summary.lieux <= doc.meta.total_input_rows, "{id}");
        assert!(summary.services_a_domicile >= 1, "{id}");
        assert!(summary.solutions_en_ligne >= 1, "{id}");
    }

    assert_eq!(doc.national.get("dechets-alimentaires").unwrap().lieux, 1);
    assert_eq!(doc.national.get("sapin-de-noel").unwrap().lieux, 1);
    assert_eq!(doc.national.get("meubles").unwrap().lieux, 1);
    assert_eq!(doc.national.get("gros-electromenager").unwrap().lieux, 1);
    assert_eq!(doc.national.get("aiguille-medicale").unwrap().lieux, 1);
    assert_eq!(doc.national.get("livres").unwrap().lieux, 0);
}

#[test]
fn empty_action_columns_only_count_rows() {
    let dir = tempfile::tempdir().unwrap();
    let rows: Vec<String> = (0..5).map(|i| row(i, "", "")).collect();
    let input = write_csv(dir.path(), &rows);

    let doc = Aggregator::default().aggregate(&input, date()).unwrap().document;

    assert_eq!(doc.meta.total_input_rows, 5);
    assert!(doc.national.iter().all(|(_, s)| s.lieux == 0));
}

#[test]
fn header_only_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_csv(dir.path(), &[]);

    let doc = Aggregator::default().aggregate(&input, date()).unwrap().document;

    assert_eq!(doc.meta.total_input_rows, 0);
    assert_eq!(doc.national.len(), 15);
}

#[test]
fn quoted_cells_with_commas_and_spaces() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_csv(
        dir.path(),
        &[row(1, "\" livre | vetement \"", "\"Rue, 12\"")],
    );

    let doc = Aggregator::default().aggregate(&input, date()).unwrap().document;

    assert_eq!(doc.national.get("livres").unwrap().lieux, 1);
    assert_eq!(doc.national.get("vetements").unwrap().lieux, 1);
}

// ═══════════════════════════════════════════════════════════════════════════
// OUTPUT FILE
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn two_runs_produce_identical_national_counts() {
    let dir = tempfile::tempdir().unwrap();
    let mut rows = Vec::new();
    for i in 0..50 {
        rows.push(row(i, "livre|chaussures", if i % 3 == 0 { "vaisselle" } else { "" }));
    }
    let input = write_csv(dir.path(), &rows);
    let first = dir.path().join("first.json");
    let second = dir.path().join("second.json");

    Aggregator::default()
        .run(&RunConfig::new(&input, Some(first.clone())))
        .unwrap();
    Aggregator::default()
        .run(&RunConfig::new(&input, Some(second.clone())))
        .unwrap();

    let a = serde_json::to_string(&read_json(&first)["national"]).unwrap();
    let b = serde_json::to_string(&read_json(&second)["national"]).unwrap();
    assert_eq!(a, b);
}

#[test]
fn written_file_shape() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_csv(dir.path(), &[row(1, "poele_casserole", "")]);
    let output = dir.path().join("data").join("counts.json");

    let doc = Aggregator::default().aggregate(&input, date()).unwrap().document;
    ReportWriter::write(&doc, &output).unwrap();

    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.contains("Acteurs de l'économie circulaire"));

    let value = read_json(&output);
    let meta = value["meta"].as_object().unwrap();
    let mut keys: Vec<&str> = meta.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec![
            "description",
            "generation_date",
            "source",
            "source_url",
            "total_input_rows"
        ]
    );
    assert_eq!(value["national"]["poeles-casseroles"]["lieux"], 1);
    assert_eq!(value["national"]["poeles-casseroles"]["services_a_domicile"], 1);
    assert_eq!(value["national"]["poeles-casseroles"]["solutions_en_ligne"], 2);
}

// ═══════════════════════════════════════════════════════════════════════════
// COMMAND LINE
// ═══════════════════════════════════════════════════════════════════════════

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ecocounts"))
}

#[test]
fn cli_without_argument_prints_usage() {
    let out = binary().output().unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Usage"), "{stderr}");
}

#[test]
fn cli_missing_input_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.csv");
    let output = dir.path().join("counts.json");

    let out = binary()
        .arg(&missing)
        .arg("--output")
        .arg(&output)
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("absent.csv"));
    assert!(!output.exists());
}

#[test]
fn cli_empty_input_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.csv");
    std::fs::write(&input, "").unwrap();
    let output = dir.path().join("counts.json");

    let out = binary()
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("empty.csv"));
    assert!(!output.exists());
}

#[test]
fn cli_writes_default_path_relative_to_working_dir() {
    let dir = tempfile::tempdir().unwrap();
    let mut csv = header();
    for i in 0..3 {
        let _ = write!(csv, "{}", row(i, "outil_de_bricolage_et_jardinage", ""));
    }
    let input = dir.path().join("acteurs.csv");
    std::fs::write(&input, csv).unwrap();

    let out = binary()
        .current_dir(dir.path())
        .arg(&input)
        .env("ECOCOUNTS_LOG", "off")
        .output()
        .unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let value = read_json(&dir.path().join("data").join("counts.json"));
    assert_eq!(value["meta"]["total_input_rows"], 3);
    assert_eq!(value["national"]["marteau"]["lieux"], 3);
}
