//! Declaration macros
//!
//! ```ignore
//! test_case!(fn parses_header(t) {
//!     let header = parse(b"EZ\x01");
//!     t.expect(header.version, 1);
//!     if header.flags != 0 {
//!         force_fail_test!(t);
//!     }
//! });
//!
//! run_tests!(main, parses_header);
//! ```

/// Declare a test case.
///
/// Expands to a `fn` with the [`TestFn`](crate::TestFn) signature. The
/// identifier in parentheses names the [`Expectations`](crate::Expectations)
/// the body asserts through. The case announces itself, runs the body in
/// order and writes its record when the body ends.
#[macro_export]
macro_rules! test_case {
    ($(#[$meta:meta])* $vis:vis fn $name:ident($t:ident) $body:block) => {
        $(#[$meta])*
        #[allow(unreachable_code)]
        $vis fn $name(out: &mut $crate::TestCaseInfo, report: &mut dyn $crate::Report) {
            $crate::case::execute(::core::stringify!($name), out, report, |$t| {
                $body;
                ::core::result::Result::Ok(())
            });
        }
    };
}

/// Fail the current test case and leave its body immediately.
///
/// Only valid inside a `test_case!` body.
#[macro_export]
macro_rules! force_fail_test {
    ($t:expr) => {
        return ::core::result::Result::Err($t.force_fail())
    };
}

/// Declare the suite: an entry point named `$group` that runs the listed
/// cases in order and returns the failed-case count as its exit status.
///
/// With `main` as the group name this is the program entry point.
#[macro_export]
macro_rules! run_tests {
    ($group:ident, $($case:ident),+ $(,)?) => {
        fn $group() -> ::std::process::ExitCode {
            $crate::runner::run_main(
                ::core::stringify!($group),
                ::std::vec![$($crate::TestCase::new(::core::stringify!($case), $case)),+],
            )
        }
    };
}
