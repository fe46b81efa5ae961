use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["--games", "3", "--seed", "12"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["games"], 3);
    let wins = v["wins"].as_array().unwrap();
    assert_eq!(wins[0].as_u64().unwrap() + wins[1].as_u64().unwrap(), 3);
    let matches = v["matches"].as_array().unwrap();
    assert_eq!(matches.len(), 3);
    assert_eq!(matches[0]["seed"], 12);
    assert_eq!(matches[0]["winner_kind"], "Random");
    assert!(matches[0]["winner"].is_string());
}
