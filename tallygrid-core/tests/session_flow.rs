//! End-to-end walk through a scoring session: edits, new rounds and players,
//! save/load, and the unlock flow, exercised together the way the widget
//! drives them.

use tallygrid_core::{EditLock, LockPhase, MemoryStore, Roster, load_roster, save_roster};

#[test]
fn full_session_walkthrough() {
    let store = MemoryStore::default();
    let mut roster = Roster::default();
    let mut lock = EditLock::default();

    // Fresh widget: two players, three zero rounds, everything read-only.
    assert_eq!(roster.totals(), vec![0, 0]);
    assert!(!lock.can_edit());

    // Owner sets a passcode and unlocks.
    lock.set_passcode("4242");
    lock.request_edit();
    lock.enter_passcode("4242");
    assert!(lock.confirm_unlock());
    assert!(lock.can_edit());

    // Score an early round.
    roster.set_score(0, 1, "5").unwrap();
    assert_eq!(roster.totals(), vec![5, 0]);

    // A new round grows every row and moves no total.
    roster.add_round();
    assert!(roster.players().iter().all(|p| p.scores.len() == 4));
    assert_eq!(roster.totals(), vec![5, 0]);

    // A latecomer joins with a zero-filled row at the current width.
    roster.add_player();
    assert_eq!(roster.player_count(), 3);
    assert_eq!(roster.players()[2].scores, vec![0, 0, 0, 0]);
    assert_eq!(roster.totals(), vec![5, 0, 0]);

    // Save, mutate, load: the saved names win.
    save_roster(&store, &roster).unwrap();
    roster.set_name(0, "X");
    let restored = load_roster(&store).unwrap().unwrap();
    assert_eq!(restored.players()[0].name, "Player 1");
    assert_eq!(restored.totals(), vec![5, 0, 0]);
    roster = restored;

    // Locking drops the entry; the next unlock needs the passcode again.
    lock.lock();
    assert_eq!(lock.phase(), LockPhase::Locked);
    lock.request_edit();
    assert!(!lock.confirm_unlock());
    lock.enter_passcode("4242");
    assert!(lock.confirm_unlock());

    // Garbage in a score cell is rejected and the grid is unharmed.
    assert!(roster.set_score(1, 0, "7;DROP").is_err());
    assert_eq!(roster.totals(), vec![5, 0, 0]);
}
