use fairdeal_cli::run;
use fairdeal_engine::deal::deal_hand;
use fairdeal_engine::fairness::commit;
use fairdeal_engine::record::DealRecord;
use fairdeal_engine::seat::seats;
use serial_test::serial;
use std::collections::HashSet;
use std::io::Write;

fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(args, &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

fn record(id: &str, seed: &str, n: usize) -> DealRecord {
    let hand = deal_hand(seed, seats(n)).unwrap();
    DealRecord::new(id, seed, &hand)
}

#[test]
fn verify_seed_against_commitment() {
    let c = commit("revealed").to_string();
    let (code, out, _) = run_cli(&["fairdeal", "verify", "--seed", "revealed", "--commitment", &c]);
    assert_eq!(code, 0);
    assert_eq!(out, "OK\n");

    let (code, out, _) = run_cli(&["fairdeal", "verify", "--seed", "swapped", "--commitment", &c]);
    assert_eq!(code, 1);
    assert_eq!(out, "MISMATCH\n");
}

#[test]
fn verify_commitment_is_case_sensitive() {
    let upper = commit("x").to_string().to_uppercase();
    let (code, _, _) = run_cli(&["fairdeal", "verify", "--seed", "x", "--commitment", &upper]);
    assert_eq!(code, 1);
}

#[test]
#[serial]
fn deal_output_round_trips_through_verify() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deals.jsonl");
    let path_str = path.to_str().unwrap();
    for seed in ["one", "two"] {
        let (code, _, _) = run_cli(&["fairdeal", "deal", "--seed", seed, "--output", path_str]);
        assert_eq!(code, 0);
    }
    let (code, out, err) = run_cli(&["fairdeal", "verify", "--input", path_str]);
    assert_eq!(code, 0, "stderr: {}", err);
    assert_eq!(out, "Verify: OK (records=2)\n");
}

#[test]
#[serial]
fn repeated_deals_to_one_file_get_distinct_ids() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deals.jsonl");
    let path_str = path.to_str().unwrap();
    for seed in ["x", "y", "z"] {
        let (code, _, _) = run_cli(&["fairdeal", "deal", "--seed", seed, "--output", path_str]);
        assert_eq!(code, 0);
    }
    let ids: HashSet<String> = std::fs::read_to_string(&path)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str::<DealRecord>(l).unwrap().hand_id)
        .collect();
    assert_eq!(ids.len(), 3);
}

#[test]
fn verify_flags_tampered_board() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tampered.jsonl");
    let good = record("20250101-000001", "fair", 3);
    let mut bad = record("20250101-000002", "fair", 3);
    bad.board.swap(0, 4);
    let mut f = std::fs::File::create(&path).unwrap();
    writeln!(f, "{}", serde_json::to_string(&good).unwrap()).unwrap();
    writeln!(f, "{}", serde_json::to_string(&bad).unwrap()).unwrap();
    drop(f);

    let (code, out, err) = run_cli(&["fairdeal", "verify", "--input", path.to_str().unwrap()]);
    assert_eq!(code, 1);
    assert_eq!(out, "Verify: MISMATCH (records=2)\n");
    assert!(err.contains("Line 2: 20250101-000002: board"));
    assert!(!err.contains("Line 1:"));
}

#[test]
fn verify_sealed_record_reports_missing_seed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sealed.jsonl");
    let sealed = record("20250101-000001", "hidden", 2).sealed();
    std::fs::write(&path, serde_json::to_string(&sealed).unwrap()).unwrap();

    let (code, _, err) = run_cli(&["fairdeal", "verify", "--input", path.to_str().unwrap()]);
    assert_eq!(code, 1);
    assert!(err.contains("seed has not been revealed"));
}

#[test]
fn verify_reads_zstd_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deals.jsonl.zst");
    let line = serde_json::to_string(&record("20250101-000001", "packed", 4)).unwrap();
    let packed = zstd::encode_all(format!("{}\n", line).as_bytes(), 3).unwrap();
    std::fs::write(&path, packed).unwrap();

    let (code, out, _) = run_cli(&["fairdeal", "verify", "--input", path.to_str().unwrap()]);
    assert_eq!(code, 0);
    assert_eq!(out, "Verify: OK (records=1)\n");
}

#[test]
fn verify_missing_file_is_an_error() {
    let (code, _, err) = run_cli(&["fairdeal", "verify", "--input", "/nonexistent/deals.jsonl"]);
    assert_eq!(code, 2);
    assert!(err.starts_with("Error: I/O error"));
}
