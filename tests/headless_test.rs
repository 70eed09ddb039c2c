//! Headless mode over a mocked stdin

use tokio::io::BufReader;

use blockfall::core::GameSnapshot;
use blockfall::engine::EngineConfig;
use blockfall::headless;
use blockfall::types::GameStatus;

fn run_script(chunks: &[&[u8]]) -> (blockfall::core::GameState, Vec<GameSnapshot>) {
    let mut builder = tokio_test::io::Builder::new();
    for chunk in chunks {
        builder.read(chunk);
    }
    let input = BufReader::new(builder.build());
    let mut out = Vec::new();
    let config = EngineConfig::default().with_seed(314).with_ticker(false);

    let state = tokio_test::block_on(headless::run(config, input, &mut out)).unwrap();
    let snapshots = String::from_utf8(out)
        .unwrap()
        .lines()
        .filter(|line| !line.contains("\"error\""))
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    (state, snapshots)
}

#[test]
fn commands_split_across_reads_are_reassembled() {
    let (state, snapshots) = run_script(&[
        b"ti",
        b"ck\nti",
        b"ck\n{\"type\":\"mo",
        b"ve\",\"direction\":\"left\"}\n",
    ]);
    assert_eq!(state.tick(), 2);
    assert_eq!(snapshots.len(), 4);
    assert_eq!(snapshots[0].tick, 0);
    assert_eq!(snapshots[2].tick, 2);
    assert_eq!(snapshots.last().unwrap(), &state.snapshot());
}

#[test]
fn hard_drop_and_tick_lock_a_piece() {
    let (state, snapshots) = run_script(&[b"hardDrop\ntick\n"]);
    assert_eq!(state.pieces_locked(), 1);
    let last = snapshots.last().unwrap();
    assert_eq!(last.cells.iter().flatten().count(), 4);
    assert_eq!(last.status, GameStatus::InProgress);
}

#[test]
fn empty_input_emits_initial_snapshot_only() {
    let (state, snapshots) = run_script(&[]);
    assert_eq!(snapshots.len(), 1);
    assert_eq!(snapshots[0], state.snapshot());
}
