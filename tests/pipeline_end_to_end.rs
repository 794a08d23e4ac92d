//! End-to-end pipeline tests: input file in, four output files out.

use orders_validator::audit::{
    ACCEPTED_BROKER_SEQ_FILE, ACCEPTED_ORDERS_FILE, REJECTED_BROKER_SEQ_FILE,
    REJECTED_ORDERS_FILE,
};
use orders_validator::{run_file, Config};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

fn init_log() {
    let _ = env_logger::try_init();
}

fn config_for(dir: &Path, symbols: &[&str], limit: u32) -> Config {
    Config {
        valid_symbols: symbols.iter().map(|s| s.to_string()).collect::<HashSet<_>>(),
        orders_per_minute: limit,
        output_dir: dir.join("output").to_string_lossy().into_owned(),
    }
}

#[test]
fn rate_limit_then_new_minute_scenario() {
    init_log();
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("orders.csv");
    fs::write(
        &input,
        "Timestamp,Broker,Sequence,Type,Symbol,Quantity,Price,Side\n\
         1/5/2014 08:30:01,X,1,K,BARK,100,42.50,Buy\n\
         1/5/2014 08:30:02,X,2,K,BARK,100,42.50,Buy\n\
         1/5/2014 08:30:03,X,3,K,BARK,100,42.50,Buy\n\
         1/5/2014 08:30:04,X,4,K,BARK,100,42.50,Buy\n\
         1/5/2014 08:31:00,X,5,K,BARK,100,42.50,Buy\n",
    )
    .unwrap();

    let config = config_for(dir.path(), &["BARK"], 3);
    let stats = run_file(&input, &config).unwrap();
    assert_eq!(stats.processed, 5);
    assert_eq!(stats.accepted, 4);
    assert_eq!(stats.rejected, 1);

    let out = Path::new(&config.output_dir);
    let accepted = fs::read_to_string(out.join(ACCEPTED_BROKER_SEQ_FILE)).unwrap();
    assert_eq!(accepted, "Broker,Sequence\nX,1\nX,2\nX,3\nX,5\n");
    let rejected = fs::read_to_string(out.join(REJECTED_BROKER_SEQ_FILE)).unwrap();
    assert_eq!(rejected, "Broker,Sequence\nX,4\n");

    let accepted_orders = fs::read_to_string(out.join(ACCEPTED_ORDERS_FILE)).unwrap();
    assert_eq!(accepted_orders.lines().count(), 4);
    assert!(accepted_orders.starts_with("timestamp = 2014-01-05 08:30:01, broker = X"));
    let rejected_orders = fs::read_to_string(out.join(REJECTED_ORDERS_FILE)).unwrap();
    assert_eq!(rejected_orders.lines().count(), 1);
}

#[test]
fn duplicate_sequence_scenario() {
    init_log();
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("orders.csv");
    fs::write(
        &input,
        "Timestamp,Broker,Sequence,Type,Symbol,Quantity,Price,Side\n\
         1/5/2014 08:30:01,X,1,K,BARK,100,42.50,Buy\n\
         1/5/2014 08:30:01,X,1,K,BARK,100,42.50,Buy\n\
         1/5/2014 08:30:01,X,1,K,BARK,100,42.50,Buy\n",
    )
    .unwrap();

    let config = config_for(dir.path(), &["BARK"], 10);
    let stats = run_file(&input, &config).unwrap();
    assert_eq!(stats.accepted, 1);
    assert_eq!(stats.rejected, 2);

    let out = Path::new(&config.output_dir);
    let rejected = fs::read_to_string(out.join(REJECTED_BROKER_SEQ_FILE)).unwrap();
    assert_eq!(rejected, "Broker,Sequence\nX,1\nX,1\n");
}

#[test]
fn malformed_and_incomplete_lines() {
    init_log();
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("orders.csv");
    // Line 2 is malformed (non-numeric price): skipped and counted nowhere.
    // Line 3 is incomplete (empty symbol): a normal rejection.
    fs::write(
        &input,
        "Timestamp,Broker,Sequence,Type,Symbol,Quantity,Price,Side\n\
         1/5/2014 08:30:01,X,1,K,BARK,100,notaprice,Buy\n\
         1/5/2014 08:30:02,X,2,K,,100,42.50,Buy\n\
         1/5/2014 08:30:03,X,3,K,BARK,100,42.50,Buy\n",
    )
    .unwrap();

    let config = config_for(dir.path(), &["BARK"], 3);
    let stats = run_file(&input, &config).unwrap();
    assert_eq!(stats.processed, 2);
    assert_eq!(stats.accepted, 1);
    assert_eq!(stats.rejected, 1);

    let out = Path::new(&config.output_dir);
    let rejected = fs::read_to_string(out.join(REJECTED_BROKER_SEQ_FILE)).unwrap();
    assert_eq!(rejected, "Broker,Sequence\nX,2\n");
    let rejected_orders = fs::read_to_string(out.join(REJECTED_ORDERS_FILE)).unwrap();
    assert!(rejected_orders.contains("symbol = -"));
}

#[test]
fn output_directory_is_replaced_between_runs() {
    init_log();
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("orders.csv");
    fs::write(
        &input,
        "Timestamp,Broker,Sequence,Type,Symbol,Quantity,Price,Side\n\
         1/5/2014 08:30:01,X,1,K,BARK,100,42.50,Buy\n",
    )
    .unwrap();

    let config = config_for(dir.path(), &["BARK"], 3);
    run_file(&input, &config).unwrap();
    run_file(&input, &config).unwrap();

    // A fresh validator per run: the duplicate sequence from run 1 is not
    // remembered, and the files hold only run 2's single order.
    let out = Path::new(&config.output_dir);
    let accepted = fs::read_to_string(out.join(ACCEPTED_BROKER_SEQ_FILE)).unwrap();
    assert_eq!(accepted, "Broker,Sequence\nX,1\n");
}
