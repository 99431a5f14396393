//! Failing demo suite: three of four cases fail, so the process exits with 3

use eztest::{force_fail_test, run_tests, test_case};
use eztest_demo::{encode_le, Ledger};

test_case!(fn balance_holds(t) {
    let mut ledger = Ledger::new(1);
    ledger.apply(42);
    t.expect(ledger.balance(), 42);
});

test_case!(fn wrong_balance(t) {
    let mut ledger = Ledger::new(1);
    ledger.apply(42);
    t.expect(ledger.balance(), 99);
});

test_case!(fn gives_up_early(t) {
    t.expect(1, 1);
    force_fail_test!(t);
    t.expect(2, 2);
});

test_case!(fn big_endian_by_mistake(t) {
    t.expect_buf(encode_le(0x0102_0304), [1u8, 2, 3, 4], 4);
    t.expect_not_zero(0);
});

run_tests!(main, balance_holds, wrong_balance, gives_up_early, big_endian_by_mistake);
