//! Passing demo suite: every case holds, so the process exits with 0

use eztest::{force_fail_test, run_tests, test_case};
use eztest_demo::{checksum, encode_le, Ledger};

test_case!(fn apply_updates_balance(t) {
    let mut ledger = Ledger::new(4);
    ledger.apply(10);
    ledger.apply(-3);
    t.expect(ledger.balance(), 7);
});

test_case!(fn undo_reverts_last_amount(t) {
    let mut ledger = Ledger::new(4);
    ledger.apply(5);
    ledger.apply(20);
    let Some(amount) = ledger.undo() else {
        force_fail_test!(t);
    };
    t.expect(amount, 20);
    t.expect(ledger.balance(), 5);
});

test_case!(fn history_is_bounded(t) {
    let mut ledger = Ledger::new(2);
    for amount in [1, 2, 3] {
        ledger.apply(amount);
    }
    let internals = ledger.internals();
    t.expect(internals.history.len(), internals.capacity);
    t.expect(internals.history[0], 2);
    t.expect(ledger.balance(), 6);
});

test_case!(fn zero_capacity_keeps_no_history(t) {
    let mut ledger = Ledger::new(0);
    ledger.apply(8);
    t.expect_zero(ledger.internals().history.len());
    t.expect_not_zero(ledger.balance());
    t.expect(ledger.undo().is_none(), true);
});

test_case!(fn encodes_little_endian(t) {
    let bytes = encode_le(0x0403_0201);
    t.expect_buf(bytes, [1u8, 2, 3, 4], 4);
    t.expect(checksum(&bytes), 1 ^ 2 ^ 3 ^ 4);
});

test_case!(fn checksum_of_nothing(t) {
    t.expect_zero(checksum(&[]));
    t.expect_buf(b"", [0xffu8], 0);
});

run_tests!(
    main,
    apply_updates_balance,
    undo_reverts_last_amount,
    history_is_bounded,
    zero_capacity_keeps_no_history,
    encodes_little_endian,
    checksum_of_nothing,
);
